// SPDX-License-Identifier: PMPL-1.0-or-later

//! Core data contract for the generated post index.
//!
//! The post index is the only interface between the offline content pipeline
//! and the site: an ordered array of [`PostRecord`]s, serialized as pretty
//! JSON, regenerated wholesale on every pipeline run and read-only afterwards.

use anyhow::{bail, Context, Result};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fs;
use std::path::Path;

/// Canonical Markdown filename inside a post folder.
pub const CANONICAL_MARKDOWN: &str = "index.md";

/// Hero image fallback when a post folder has no canonical image.
pub const HERO_PLACEHOLDER: &str = "/images/blog/sample.png";

/// Maximum description length in characters (not bytes — content is Korean).
pub const DESCRIPTION_BUDGET: usize = 150;

/// Attribution used when a post carries no authored byline.
pub const DEFAULT_AUTHOR: &str = "i-Scream Arts Team";

/// Web path prefix under which post asset folders are served.
pub const BLOG_WEB_ROOT: &str = "/content/blog";

/// Image extensions the pipeline recognises (lowercase).
pub const IMAGE_EXTENSIONS: &[&str] = &["png", "jpg", "jpeg", "gif", "webp"];

/// Anchor for synthetic post dates; entries are spaced backward from here.
pub fn synthetic_anchor_date() -> NaiveDate {
    // Known-good literal, cannot fail.
    NaiveDate::from_ymd_opt(2024, 5, 1).unwrap()
}

/// Interval in days between synthetically dated posts.
pub const SYNTHETIC_DATE_STEP_DAYS: i64 = 2;

/// One blog entry as seen by the site.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PostRecord {
    /// URL-safe, unique, stable route key (ASCII kebab-case).
    pub slug: String,
    pub title: String,
    /// First content line of the canonical Markdown, truncated to
    /// [`DESCRIPTION_BUDGET`] characters with a `...` marker.
    pub description: String,
    pub date: NaiveDate,
    pub author: String,
    /// Web path to `image-1.<ext>`, or [`HERO_PLACEHOLDER`].
    pub hero_image: String,
    pub tags: Vec<String>,
}

/// The generated, date-descending list of post records.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PostIndex {
    pub posts: Vec<PostRecord>,
}

impl PostIndex {
    pub fn new(posts: Vec<PostRecord>) -> Self {
        Self { posts }
    }

    /// Load and validate an index file.
    ///
    /// Slug uniqueness is an invariant of the data contract; a duplicate
    /// means the generation step is broken and the file is rejected.
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("reading post index {}", path.display()))?;
        let index: PostIndex = serde_json::from_str(&content)
            .with_context(|| format!("parsing post index {}", path.display()))?;
        let mut seen = HashSet::new();
        for record in &index.posts {
            if !seen.insert(record.slug.as_str()) {
                bail!("duplicate slug in post index: {}", record.slug);
            }
        }
        Ok(index)
    }

    /// Pretty-JSON serialization of the full index, with trailing newline.
    ///
    /// Output is deterministic for deterministic input — struct field order
    /// is fixed and the record list is pre-sorted by the generator.
    pub fn to_json(&self) -> Result<String> {
        let mut json = serde_json::to_string_pretty(self)?;
        json.push('\n');
        Ok(json)
    }

    pub fn save(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(path, self.to_json()?)
            .with_context(|| format!("writing post index {}", path.display()))?;
        Ok(())
    }

    /// Position of the record with the given slug, if any.
    pub fn position(&self, slug: &str) -> Option<usize> {
        self.posts.iter().position(|p| p.slug == slug)
    }

    /// True when records are in date-descending order (slug-ascending ties).
    pub fn is_sorted(&self) -> bool {
        self.posts.windows(2).all(|pair| {
            pair[0].date > pair[1].date
                || (pair[0].date == pair[1].date && pair[0].slug <= pair[1].slug)
        })
    }
}

/// Case-insensitive check against [`IMAGE_EXTENSIONS`].
pub fn is_image_file(name: &str) -> bool {
    match name.rsplit_once('.') {
        Some((_, ext)) => IMAGE_EXTENSIONS.contains(&ext.to_ascii_lowercase().as_str()),
        None => false,
    }
}

/// Parse `image-<n>.<ext>` and return `n`, or `None` for non-canonical names.
pub fn canonical_image_index(name: &str) -> Option<u32> {
    let rest = name.strip_prefix("image-")?;
    let (digits, ext) = rest.split_once('.')?;
    if digits.is_empty() || !digits.chars().all(|c| c.is_ascii_digit()) {
        return None;
    }
    if !IMAGE_EXTENSIONS.contains(&ext.to_ascii_lowercase().as_str()) {
        return None;
    }
    digits.parse().ok()
}

pub fn is_canonical_image(name: &str) -> bool {
    canonical_image_index(name).is_some()
}

/// Web path for an asset inside a post folder, e.g.
/// `/content/blog/<slug>/image-1.png`.
pub fn web_asset_path(slug: &str, file_name: &str) -> String {
    format!("{}/{}/{}", BLOG_WEB_ROOT, slug, file_name)
}
