// SPDX-License-Identifier: PMPL-1.0-or-later

//! Bilingual translation system for the site.
//!
//! Two pieces:
//!
//! * [`catalog`] — the static Korean/English translation tables and the total
//!   lookup function [`t`]. A missing key returns the key string itself, so a
//!   content-authoring gap shows up verbatim in the rendered page instead of
//!   as silent empty text. That visibility is the QA mechanism, not a bug.
//! * [`store`] — the single-owner active-language state, persisted to one
//!   state file (the browser-storage analog). Initial value resolves from the
//!   persisted preference, then the process locale, then English.
//!
//! Lookups are synchronous table scans over compile-time static data; the
//! catalogs are small enough that nothing fancier is warranted.

mod catalog;
mod store;

pub use catalog::{t, Lang};
pub use store::{LanguageStore, DEFAULT_STATE_FILE};

pub(crate) use catalog::keys_for;
