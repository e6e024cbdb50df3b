// SPDX-License-Identifier: PMPL-1.0-or-later

//! artsite — content toolkit for the i-Scream arts bilingual site.
//!
//! The site itself is static; everything with behavior lives here:
//!
//! 1. **Pipeline**: offline, rerun-safe batch normalization of per-post
//!    asset folders (slug renames, `index.md` canonicalization, sequential
//!    image names, Markdown link rewriting, broken-link sweeps) and
//!    regeneration of the post index the site consumes.
//! 2. **Site**: runtime resolution of the generated index — slug lookup with
//!    redirect-on-miss, positional prev/next, and the ordered body fallback
//!    chain with runtime image-path rewriting.
//! 3. **I18n**: the Korean/English translation catalogs and the persisted
//!    single-owner active-language store.
//!
//! Nothing here is fatal to a page: missing translations render as raw keys,
//! missing bodies render as placeholder text, unknown slugs redirect.

pub mod diagnostics;
pub mod i18n;
pub mod pipeline;
pub mod site;
pub mod types;
