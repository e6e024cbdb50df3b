// SPDX-License-Identifier: PMPL-1.0-or-later

//! Runtime content resolution for the blog views.
//!
//! The list view renders the index in stored order (already date-descending).
//! The detail view resolves a slug positionally — unknown slugs become a
//! redirect to the list, never an error — and loads the post body through an
//! explicit ordered fallback chain: language variant, canonical default,
//! legacy single file, literal placeholder. Each candidate must both exist
//! and pass a plausibility check (an HTML error shell served under a Markdown
//! path is rejected and the chain falls through).

use crate::i18n::Lang;
use crate::types::{PostIndex, PostRecord, BLOG_WEB_ROOT, CANONICAL_MARKDOWN};
use regex::Regex;
use std::fs;
use std::path::{Path, PathBuf};

/// Body text shown when every candidate in the fallback chain fails.
pub const BODY_PLACEHOLDER: &str = "Post content not found.";

/// Outcome of resolving a detail-view slug against the index.
#[derive(Debug, PartialEq)]
pub enum Resolution<'a> {
    Found {
        record: &'a PostRecord,
        /// Positional neighbors in the stored (date-descending) order.
        /// No wraparound: the newest post has no `prev`.
        prev: Option<&'a PostRecord>,
        next: Option<&'a PostRecord>,
    },
    /// Unknown slug: navigate back to the list view. No content fetch
    /// happens on this path.
    RedirectToList,
}

/// Resolve a slug to its record and positional neighbors.
pub fn resolve<'a>(index: &'a PostIndex, slug: &str) -> Resolution<'a> {
    let Some(pos) = index.position(slug) else {
        return Resolution::RedirectToList;
    };
    Resolution::Found {
        record: &index.posts[pos],
        prev: pos.checked_sub(1).map(|p| &index.posts[p]),
        next: index.posts.get(pos + 1),
    }
}

/// The ordered candidate paths for a post body, most specific first:
/// language variant in the folder, canonical default in the folder, legacy
/// single file next to the folders.
pub fn body_candidates(content_dir: &Path, slug: &str, lang: Lang) -> Vec<PathBuf> {
    vec![
        content_dir
            .join(slug)
            .join(format!("index.{}.md", lang.code())),
        content_dir.join(slug).join(CANONICAL_MARKDOWN),
        content_dir.join(format!("{}.md", slug)),
    ]
}

/// Plausibility check: reject content that is an HTML document shell rather
/// than Markdown (a misconfigured server answers missing files with the SPA
/// index page, which would otherwise render as a wall of markup).
pub fn looks_like_markdown(content: &str) -> bool {
    let head = content.trim_start();
    let lower: String = head.chars().take(15).collect::<String>().to_lowercase();
    !(lower.starts_with("<!doctype") || lower.starts_with("<html"))
}

/// Load a post body through the fallback chain. Total: every failure mode
/// ends in the placeholder text, never an error.
pub fn load_body(content_dir: &Path, slug: &str, lang: Lang) -> String {
    for candidate in body_candidates(content_dir, slug, lang) {
        let Ok(content) = fs::read_to_string(&candidate) else {
            continue;
        };
        if looks_like_markdown(&content) {
            return content;
        }
    }
    BODY_PLACEHOLDER.to_string()
}

/// Root relative image references at the post's asset folder.
///
/// Runtime-side normalization, independent of the offline pipeline: the same
/// body may be served from both old and new asset layouts, so the rewrite
/// happens at render time. Absolute paths, remote URLs, and data URIs are
/// untouched.
pub fn rewrite_image_paths(body: &str, slug: &str) -> String {
    let re = Regex::new(r"!\[([^\]]*)\]\(([^)]+)\)").unwrap();
    re.replace_all(body, |caps: &regex::Captures<'_>| {
        let target = &caps[2];
        if target.starts_with("http://")
            || target.starts_with("https://")
            || target.starts_with('/')
            || target.starts_with("data:")
        {
            caps[0].to_string()
        } else {
            format!("![{}]({}/{}/{})", &caps[1], BLOG_WEB_ROOT, slug, target)
        }
    })
    .into_owned()
}
