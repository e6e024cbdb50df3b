// SPDX-License-Identifier: PMPL-1.0-or-later

//! Self-diagnostics for the content tree, the generated index, and the
//! translation catalogs. Content problems report as warnings (the site
//! degrades gracefully); broken invariants of the data contract report as
//! errors and fail the run.

use crate::i18n::{keys_for, Lang};
use crate::types::{canonical_image_index, PostIndex, CANONICAL_MARKDOWN, HERO_PLACEHOLDER};
use anyhow::{anyhow, Result};
use colored::*;
use std::collections::BTreeSet;
use std::fs;
use std::path::Path;

pub fn run_doctor(content_dir: &Path, index_path: &Path) -> Result<()> {
    println!("artsite self-diagnostics");

    let mut checks = Vec::new();
    checks.push(Diagnostic::ok(
        "version",
        format!("artsite {}", env!("CARGO_PKG_VERSION")),
    ));

    checks.push(check_content_dir(content_dir));
    if content_dir.is_dir() {
        check_post_folders(content_dir, &mut checks);
    }
    checks.push(check_index(content_dir, index_path));
    checks.push(check_catalog_parity());

    println!();
    for entry in &checks {
        entry.print();
    }

    if checks.iter().any(|entry| matches!(entry.level, Level::Error)) {
        Err(anyhow!("self-diagnostics reported issues"))
    } else {
        Ok(())
    }
}

#[derive(Debug, PartialEq, Eq)]
enum Level {
    Ok,
    Warn,
    Error,
}

impl Level {
    fn tag(&self) -> ColoredString {
        match self {
            Level::Ok => "OK".green(),
            Level::Warn => "WARN".yellow(),
            Level::Error => "ERR".red(),
        }
    }
}

struct Diagnostic {
    label: String,
    level: Level,
    detail: String,
}

impl Diagnostic {
    fn ok(label: impl Into<String>, detail: String) -> Self {
        Self {
            label: label.into(),
            level: Level::Ok,
            detail,
        }
    }

    fn warning(label: impl Into<String>, detail: String) -> Self {
        Self {
            label: label.into(),
            level: Level::Warn,
            detail,
        }
    }

    fn error(label: impl Into<String>, detail: String) -> Self {
        Self {
            label: label.into(),
            level: Level::Error,
            detail,
        }
    }

    fn print(&self) {
        println!("  [{}] {:24} {}", self.level.tag(), self.label, self.detail);
    }
}

fn check_content_dir(content_dir: &Path) -> Diagnostic {
    if content_dir.is_dir() {
        Diagnostic::ok("content directory", format!("{} exists", content_dir.display()))
    } else {
        Diagnostic::error(
            "content directory",
            format!("{} missing", content_dir.display()),
        )
    }
}

/// Per-folder content checks: canonical Markdown present, hero image present.
/// Both are authoring defects, not contract violations, so they warn.
fn check_post_folders(content_dir: &Path, checks: &mut Vec<Diagnostic>) {
    let Ok(entries) = fs::read_dir(content_dir) else {
        checks.push(Diagnostic::error(
            "content directory",
            format!("unable to read {}", content_dir.display()),
        ));
        return;
    };

    let mut folders: Vec<_> = entries
        .filter_map(|entry| entry.ok())
        .map(|entry| entry.path())
        .filter(|path| path.is_dir())
        .collect();
    folders.sort();

    for folder in folders {
        let slug = folder
            .file_name()
            .map(|n| n.to_string_lossy().to_string())
            .unwrap_or_else(|| folder.display().to_string());
        let label = format!("post {}", slug);

        if !folder.join(CANONICAL_MARKDOWN).is_file() {
            checks.push(Diagnostic::warning(
                label,
                format!("no {}", CANONICAL_MARKDOWN),
            ));
            continue;
        }

        let has_hero = fs::read_dir(&folder)
            .map(|entries| {
                entries.filter_map(|e| e.ok()).any(|e| {
                    canonical_image_index(&e.file_name().to_string_lossy()) == Some(1)
                })
            })
            .unwrap_or(false);
        if has_hero {
            checks.push(Diagnostic::ok(label, "canonical markdown + hero".to_string()));
        } else {
            checks.push(Diagnostic::warning(
                label,
                "no image-1 hero (placeholder will be used)".to_string(),
            ));
        }
    }
}

/// Index checks are contract-level: parse failures, duplicate slugs, and
/// order violations are errors.
fn check_index(content_dir: &Path, index_path: &Path) -> Diagnostic {
    if !index_path.is_file() {
        return Diagnostic::warning(
            "post index",
            format!("{} missing (run generate)", index_path.display()),
        );
    }
    let index = match PostIndex::load(index_path) {
        Ok(index) => index,
        Err(err) => return Diagnostic::error("post index", format!("{:#}", err)),
    };
    if !index.is_sorted() {
        return Diagnostic::error("post index", "records not in date-descending order".to_string());
    }
    let mut missing_heroes = 0;
    for record in &index.posts {
        if record.hero_image == HERO_PLACEHOLDER {
            continue;
        }
        let file_name = record.hero_image.rsplit('/').next().unwrap_or_default();
        if !content_dir.join(&record.slug).join(file_name).is_file() {
            missing_heroes += 1;
        }
    }
    if missing_heroes > 0 {
        Diagnostic::warning(
            "post index",
            format!(
                "{} post(s), {} hero image(s) missing on disk",
                index.posts.len(),
                missing_heroes
            ),
        )
    } else {
        Diagnostic::ok(
            "post index",
            format!("{} post(s), sorted, slugs unique", index.posts.len()),
        )
    }
}

/// Every key must resolve in every language; a one-sided key would render
/// as its raw key string in the other language.
fn check_catalog_parity() -> Diagnostic {
    let ko: BTreeSet<_> = keys_for(Lang::Ko).collect();
    let en: BTreeSet<_> = keys_for(Lang::En).collect();
    if ko == en {
        return Diagnostic::ok(
            "translation catalog",
            format!("{} keys, ko/en in parity", ko.len()),
        );
    }
    let only_ko: Vec<_> = ko.difference(&en).collect();
    let only_en: Vec<_> = en.difference(&ko).collect();
    Diagnostic::error(
        "translation catalog",
        format!("{} key(s) only in ko, {} only in en", only_ko.len(), only_en.len()),
    )
}
