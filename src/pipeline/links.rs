// SPDX-License-Identifier: PMPL-1.0-or-later

//! Markdown image-link surgery: rewriting renamed targets, dropping broken
//! references, rescuing Hangul-named files, and whitespace cleanup.
//!
//! All functions here operate on the in-memory Markdown string; the per-tree
//! drivers ([`sweep_tree`], [`cleanup_tree`]) persist the result back to the
//! canonical `index.md` only when something changed.

use crate::pipeline::{file_names, post_folders};
use crate::types::{CANONICAL_MARKDOWN, IMAGE_EXTENSIONS};
use anyhow::Result;
use colored::*;
use regex::Regex;
use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

/// Markdown image reference syntax: `![alt](path)`.
pub fn image_ref_regex() -> Regex {
    Regex::new(r"!\[([^\]]*)\]\(([^)]+)\)").unwrap()
}

/// True for targets the pipeline must never touch: remote URLs, absolute
/// site paths, and data URIs.
pub fn is_external_target(path: &str) -> bool {
    path.starts_with("http://")
        || path.starts_with("https://")
        || path.starts_with('/')
        || path.starts_with("data:")
}

fn percent_decode(path: &str) -> String {
    match urlencoding::decode(path) {
        Ok(decoded) => decoded.into_owned(),
        // Malformed escapes: treat the raw string as the filename.
        Err(_) => path.to_string(),
    }
}

fn contains_hangul(s: &str) -> bool {
    s.chars().any(|c| {
        matches!(c,
            '\u{1100}'..='\u{11FF}' | '\u{3130}'..='\u{318F}' | '\u{AC00}'..='\u{D7A3}')
    })
}

/// First unused canonical index for the given extension within `names`.
///
/// Check-before-assign: the returned `image-<n>.<ext>` is guaranteed absent
/// from `names`, so a rename can never overwrite a pre-existing canonical
/// file.
pub fn next_canonical_name(names: &[String], ext: &str) -> String {
    let mut idx: u32 = 1;
    loop {
        let candidate = format!("image-{}.{}", idx, ext);
        if !names.iter().any(|n| n == &candidate) {
            return candidate;
        }
        idx += 1;
    }
}

/// Apply an old-name -> new-name map to the Markdown body.
///
/// Every occurrence of each old filename is replaced, in both its literal
/// form and its percent-encoded form (editors export either). Identity
/// entries are skipped.
pub fn rewrite_links(content: &str, renames: &BTreeMap<String, String>) -> String {
    let mut result = content.to_string();
    for (old, new) in renames {
        if old == new {
            continue;
        }
        result = result.replace(old.as_str(), new);
        let encoded = urlencoding::encode(old);
        if encoded.as_ref() != old.as_str() {
            result = result.replace(encoded.as_ref(), new);
        }
    }
    result
}

/// Remove image references whose relative target does not exist in the
/// post folder. Returns the new body and the removed targets.
///
/// Lossy by design: a silently dropped image beats a broken image icon in
/// production, and every removal is logged for manual review.
pub fn sweep_broken_refs(content: &str, folder: &Path) -> (String, Vec<String>) {
    let re = image_ref_regex();
    let mut removed = Vec::new();
    let result = re.replace_all(content, |caps: &regex::Captures<'_>| {
        let target = &caps[2];
        if is_external_target(target) {
            return caps[0].to_string();
        }
        let decoded = percent_decode(target);
        if folder.join(&decoded).is_file() {
            caps[0].to_string()
        } else {
            removed.push(decoded);
            String::new()
        }
    });
    (result.into_owned(), removed)
}

/// Rename Hangul-named image files that are still referenced under their
/// original name, rewriting the reference to the new canonical name.
///
/// Returns the rewritten body and the applied (old path, new name) pairs.
pub fn rescue_hangul_names(content: &str, folder: &Path) -> Result<(String, Vec<(String, String)>)> {
    let re = image_ref_regex();
    let mut names = file_names(folder)?;
    let mut renames: Vec<(String, String)> = Vec::new();

    for caps in re.captures_iter(content) {
        let raw = caps[2].to_string();
        if is_external_target(&raw) {
            continue;
        }
        let decoded = percent_decode(&raw);
        if !contains_hangul(&decoded) || !folder.join(&decoded).is_file() {
            continue;
        }
        if renames.iter().any(|(old, _)| old == &raw) {
            continue;
        }
        let ext = match decoded.rsplit_once('.') {
            Some((_, ext)) if IMAGE_EXTENSIONS.contains(&ext.to_ascii_lowercase().as_str()) => {
                ext.to_ascii_lowercase()
            }
            _ => continue,
        };
        let new_name = next_canonical_name(&names, &ext);
        fs::rename(folder.join(&decoded), folder.join(&new_name))?;
        names.push(new_name.clone());
        renames.push((raw, new_name));
    }

    let mut result = content.to_string();
    for (old, new) in &renames {
        result = result.replace(old.as_str(), new);
    }
    Ok((result, renames))
}

/// Collapse excess whitespace and drop broken-reference remnants.
///
/// Stray lines like `.png)` or a lone `!` are left behind when a reference
/// was split across lines and partially removed; they go first, then runs of
/// three or more newlines collapse to two, and the body ends with exactly
/// one trailing newline.
pub fn collapse_whitespace(content: &str) -> String {
    let remnant = Regex::new(r"(?m)^\s*\.?(png|jpg|jpeg|gif|webp)\s*\)\s*$").unwrap();
    let lone_bang = Regex::new(r"(?m)^\s*!\s*$").unwrap();
    let runs = Regex::new(r"\n{3,}").unwrap();

    let content = remnant.replace_all(content, "");
    let content = lone_bang.replace_all(&content, "");
    let content = runs.replace_all(&content, "\n\n");
    format!("{}\n", content.trim())
}

/// Broken-link sweep over every post folder: Hangul rescue first, then
/// dangling-reference removal. Returns the number of removed references.
pub fn sweep_tree(content_dir: &Path) -> Result<usize> {
    let mut total_removed = 0;
    for folder in post_folders(content_dir)? {
        let md_path = folder.join(CANONICAL_MARKDOWN);
        if !md_path.is_file() {
            continue;
        }
        let slug = folder.file_name().map(|n| n.to_string_lossy().to_string());
        let slug = slug.unwrap_or_else(|| folder.display().to_string());

        let original = fs::read_to_string(&md_path)?;

        let (content, rescued) = match rescue_hangul_names(&original, &folder) {
            Ok(result) => result,
            Err(err) => {
                println!("  {} {}: {}", "[WARN]".yellow(), slug, err);
                (original.clone(), Vec::new())
            }
        };
        for (old, new) in &rescued {
            println!("  renamed {} -> {} in {}", old, new, slug);
        }

        let (content, removed) = sweep_broken_refs(&content, &folder);
        for target in &removed {
            println!(
                "  {} removing broken link {} in {}",
                "[WARN]".yellow(),
                target,
                slug
            );
        }
        total_removed += removed.len();

        if content != original {
            fs::write(&md_path, content)?;
        }
    }
    Ok(total_removed)
}

/// Whitespace/remnant cleanup over every post folder. Returns the number of
/// files rewritten.
pub fn cleanup_tree(content_dir: &Path) -> Result<usize> {
    let mut rewritten = 0;
    for folder in post_folders(content_dir)? {
        let md_path = folder.join(CANONICAL_MARKDOWN);
        if !md_path.is_file() {
            continue;
        }
        let original = fs::read_to_string(&md_path)?;
        // A reference may have become dangling since the last sweep.
        let (content, _) = sweep_broken_refs(&original, &folder);
        let content = collapse_whitespace(&content);
        if content != original {
            fs::write(&md_path, content)?;
            rewritten += 1;
        }
    }
    Ok(rewritten)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn external_targets_are_left_alone() {
        assert!(is_external_target("https://example.com/a.png"));
        assert!(is_external_target("/images/blog/sample.png"));
        assert!(is_external_target("data:image/png;base64,xyz"));
        assert!(is_external_target("http://example.com/a.png"));
        assert!(!is_external_target("image-1.png"));
        assert!(!is_external_target("스크린샷.png"));
        // A local folder whose name merely starts with "http" is not a URL.
        assert!(!is_external_target("httpdocs/a.png"));
    }

    #[test]
    fn rewrite_replaces_literal_and_encoded_forms() {
        let mut renames = BTreeMap::new();
        renames.insert("스크린샷.png".to_string(), "image-1.png".to_string());
        let body = "![대표이미지](스크린샷.png)\n![again](%EC%8A%A4%ED%81%AC%EB%A6%B0%EC%83%B7.png)\n";
        let rewritten = rewrite_links(body, &renames);
        assert_eq!(
            rewritten,
            "![대표이미지](image-1.png)\n![again](image-1.png)\n"
        );
    }

    #[test]
    fn next_canonical_name_skips_existing() {
        let names = vec![
            "image-1.png".to_string(),
            "image-2.png".to_string(),
            "image-1.jpg".to_string(),
        ];
        assert_eq!(next_canonical_name(&names, "png"), "image-3.png");
        assert_eq!(next_canonical_name(&names, "jpg"), "image-2.jpg");
        assert_eq!(next_canonical_name(&names, "webp"), "image-1.webp");
    }

    #[test]
    fn collapse_squeezes_newline_runs_and_remnants() {
        let body = "# Title\n\n\n\nBody text\n\n.png)\n!\n\n\n";
        let cleaned = collapse_whitespace(body);
        assert_eq!(cleaned, "# Title\n\nBody text\n");
    }
}
