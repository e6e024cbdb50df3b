// SPDX-License-Identifier: PMPL-1.0-or-later

//! Post index generation.
//!
//! Walks the normalized content tree and derives one [`PostRecord`] per post
//! folder from its canonical Markdown: title from the first top-level
//! heading, description from the first content line, hero image from
//! `image-1.<ext>`. Folders without a canonical Markdown file are skipped
//! with a log line.
//!
//! Dates: an authored `date: YYYY-MM-DD` header line wins; otherwise posts
//! get synthetic dates spaced backward from a fixed anchor in folder order,
//! which keeps regeneration deterministic — running the step twice over
//! unchanged input produces byte-identical output.

use crate::pipeline::{file_names, post_folders};
use crate::types::{
    canonical_image_index, synthetic_anchor_date, web_asset_path, PostIndex, PostRecord,
    CANONICAL_MARKDOWN, DEFAULT_AUTHOR, DESCRIPTION_BUDGET, HERO_PLACEHOLDER,
    SYNTHETIC_DATE_STEP_DAYS,
};
use anyhow::Result;
use chrono::{Duration, NaiveDate};
use colored::*;
use regex::Regex;
use std::fs;
use std::path::Path;

/// Default tags for generated records; authored tags are out of scope for
/// the generator (there is no authored-tag source in the content tree).
fn default_tags() -> Vec<String> {
    vec!["Education".to_string(), "AI Art".to_string()]
}

/// Generate the full post index for a content tree.
pub fn generate(content_dir: &Path) -> Result<PostIndex> {
    let mut posts = Vec::new();
    let mut offset: i64 = 0;

    for folder in post_folders(content_dir)? {
        let slug = folder
            .file_name()
            .map(|n| n.to_string_lossy().to_string())
            .unwrap_or_else(|| folder.display().to_string());

        let md_path = folder.join(CANONICAL_MARKDOWN);
        let content = match fs::read_to_string(&md_path) {
            Ok(content) => content,
            Err(_) => {
                println!(
                    "  {} skipping {}: no {}",
                    "[WARN]".yellow(),
                    slug,
                    CANONICAL_MARKDOWN
                );
                continue;
            }
        };

        let date = authored_date(&content).unwrap_or_else(|| {
            synthetic_anchor_date() - Duration::days(offset * SYNTHETIC_DATE_STEP_DAYS)
        });
        offset += 1;

        let hero_image = hero_image(&folder, &slug);
        posts.push(PostRecord {
            title: extract_title(&content, &slug),
            description: extract_description(&content),
            date,
            author: DEFAULT_AUTHOR.to_string(),
            hero_image,
            tags: default_tags(),
            slug,
        });
    }

    // Newest first; slug ascending on equal dates keeps output stable.
    posts.sort_by(|a, b| b.date.cmp(&a.date).then(a.slug.cmp(&b.slug)));
    Ok(PostIndex::new(posts))
}

/// First `# ` heading, stripped of straight quotes; the slug when none.
pub fn extract_title(content: &str, slug: &str) -> String {
    for line in content.lines() {
        let trimmed = line.trim();
        if let Some(heading) = trimmed.strip_prefix("# ") {
            let title: String = heading.trim().chars().filter(|&c| c != '\'' && c != '"').collect();
            if !title.is_empty() {
                return title;
            }
        }
    }
    slug.to_string()
}

/// First non-heading, non-image, non-HTML-tag content line, truncated to
/// [`DESCRIPTION_BUDGET`] characters with an ellipsis marker.
pub fn extract_description(content: &str) -> String {
    let body = skip_front_matter(content);
    for line in body.lines() {
        let trimmed = line.trim();
        if trimmed.is_empty()
            || trimmed.starts_with('#')
            || trimmed.starts_with("![")
            || trimmed.starts_with('<')
        {
            continue;
        }
        return truncate_description(trimmed);
    }
    String::new()
}

fn truncate_description(text: &str) -> String {
    let count = text.chars().count();
    if count <= DESCRIPTION_BUDGET {
        return text.to_string();
    }
    let truncated: String = text.chars().take(DESCRIPTION_BUDGET).collect();
    format!("{}...", truncated)
}

/// `date: YYYY-MM-DD` in a leading `---` front-matter block or in the first
/// few lines of the body.
fn authored_date(content: &str) -> Option<NaiveDate> {
    let re = Regex::new(r"(?m)^date:\s*(\d{4}-\d{2}-\d{2})\s*$").unwrap();
    let head: String = content.lines().take(10).collect::<Vec<_>>().join("\n");
    let caps = re.captures(&head)?;
    NaiveDate::parse_from_str(&caps[1], "%Y-%m-%d").ok()
}

/// Strip a leading `---`-fenced front-matter block, if present.
fn skip_front_matter(content: &str) -> &str {
    let Some(rest) = content.strip_prefix("---\n") else {
        return content;
    };
    match rest.find("\n---") {
        Some(pos) => {
            let after = &rest[pos + 4..];
            after.strip_prefix('\n').unwrap_or(after)
        }
        None => content,
    }
}

/// Web path of the folder's `image-1.<ext>`, or the shared placeholder.
///
/// A folder that cannot be listed logs a warning and gets the placeholder;
/// the post still makes it into the index.
fn hero_image(folder: &Path, slug: &str) -> String {
    let names = match file_names(folder) {
        Ok(names) => names,
        Err(err) => {
            println!("  {} {}: {}", "[WARN]".yellow(), slug, err);
            return HERO_PLACEHOLDER.to_string();
        }
    };
    let hero = names
        .iter()
        .find(|name| canonical_image_index(name) == Some(1));
    match hero {
        Some(name) => web_asset_path(slug, name),
        None => HERO_PLACEHOLDER.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn title_prefers_first_heading() {
        let md = "intro line\n\n# 'Real' Title\n\n# Second\n";
        assert_eq!(extract_title(md, "fallback-slug"), "Real Title");
        assert_eq!(extract_title("no heading here\n", "fallback-slug"), "fallback-slug");
    }

    #[test]
    fn description_skips_headings_images_and_tags() {
        let md = "# Title\n\n![hero](image-1.png)\n<div>markup</div>\n\n본문 첫 줄입니다.\n더 많은 내용.\n";
        assert_eq!(extract_description(md), "본문 첫 줄입니다.");
    }

    #[test]
    fn description_truncates_to_budget_in_chars() {
        let long = "가".repeat(200);
        let md = format!("# T\n\n{}\n", long);
        let desc = extract_description(&md);
        assert_eq!(desc.chars().count(), DESCRIPTION_BUDGET + 3);
        assert!(desc.ends_with("..."));
    }

    #[test]
    fn exact_budget_is_not_truncated() {
        let exact = "a".repeat(DESCRIPTION_BUDGET);
        let md = format!("# T\n\n{}\n", exact);
        assert_eq!(extract_description(&md), exact);
    }

    #[test]
    fn authored_date_parses_from_front_matter() {
        let md = "---\ndate: 2024-03-15\n---\n\n# T\nbody\n";
        assert_eq!(
            authored_date(md),
            NaiveDate::from_ymd_opt(2024, 3, 15)
        );
        assert_eq!(authored_date("# T\nbody\n"), None);
    }

    #[test]
    fn unlistable_folder_falls_back_to_placeholder_hero() {
        let hero = hero_image(Path::new("/no/such/folder"), "ghost");
        assert_eq!(hero, HERO_PLACEHOLDER);
    }

    #[test]
    fn front_matter_is_not_a_description() {
        let md = "---\ndate: 2024-03-15\n---\n\nActual first line.\n";
        assert_eq!(extract_description(md), "Actual first line.");
    }
}
