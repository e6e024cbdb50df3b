// SPDX-License-Identifier: PMPL-1.0-or-later

//! Single-owner store for the active display language.
//!
//! The browser build keeps this in local storage under one key; here the
//! analog is one small state file holding the bare language tag. The store
//! is the only writer — callers mutate the language exclusively through
//! [`LanguageStore::set`], which persists on every change (last write wins).

use crate::i18n::catalog::{t, Lang};
use anyhow::Result;
use std::env;
use std::fs;
use std::path::{Path, PathBuf};

/// Default state file, relative to the working directory.
pub const DEFAULT_STATE_FILE: &str = ".artsite-lang";

pub struct LanguageStore {
    current: Lang,
    state_file: PathBuf,
}

impl LanguageStore {
    /// Open the store, resolving the initial language in order:
    /// persisted preference, process locale, `en`.
    pub fn open(state_file: &Path) -> Self {
        let current = read_persisted(state_file)
            .or_else(locale_language)
            .unwrap_or_default();
        Self {
            current,
            state_file: state_file.to_path_buf(),
        }
    }

    pub fn language(&self) -> Lang {
        self.current
    }

    /// Switch the active language and persist the choice.
    ///
    /// Persistence failure is non-fatal: the in-memory language still
    /// changes, the error is surfaced to the caller for a log line.
    pub fn set(&mut self, lang: Lang) -> Result<()> {
        self.current = lang;
        fs::write(&self.state_file, format!("{}\n", lang.code()))?;
        Ok(())
    }

    /// Translate a key in the currently active language.
    pub fn translate<'a>(&self, key: &'a str) -> &'a str {
        t(self.current, key)
    }
}

fn read_persisted(state_file: &Path) -> Option<Lang> {
    let content = fs::read_to_string(state_file).ok()?;
    Lang::from_code(content.trim())
}

/// Best-effort locale sniff: `LC_ALL` then `LANG`, matched by tag prefix
/// (`ko_KR.UTF-8` selects Korean). Mirrors the browser-locale heuristic.
fn locale_language() -> Option<Lang> {
    for var in ["LC_ALL", "LANG"] {
        if let Ok(value) = env::var(var) {
            let lower = value.to_lowercase();
            for &lang in Lang::all() {
                if lower.starts_with(lang.code()) {
                    return Some(lang);
                }
            }
        }
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn persisted_preference_wins() {
        let dir = TempDir::new().unwrap();
        let state = dir.path().join("lang");
        fs::write(&state, "ko\n").unwrap();
        let store = LanguageStore::open(&state);
        assert_eq!(store.language(), Lang::Ko);
    }

    #[test]
    fn invalid_persisted_value_is_ignored() {
        let dir = TempDir::new().unwrap();
        let state = dir.path().join("lang");
        fs::write(&state, "klingon").unwrap();
        let store = LanguageStore::open(&state);
        // Falls through to locale/default; never an invalid tag.
        assert!(Lang::all().contains(&store.language()));
    }

    #[test]
    fn set_persists_round_trip() {
        let dir = TempDir::new().unwrap();
        let state = dir.path().join("lang");
        let mut store = LanguageStore::open(&state);
        store.set(Lang::Ko).unwrap();
        drop(store);
        let reopened = LanguageStore::open(&state);
        assert_eq!(reopened.language(), Lang::Ko);
    }

    #[test]
    fn translate_follows_active_language() {
        let dir = TempDir::new().unwrap();
        let state = dir.path().join("lang");
        let mut store = LanguageStore::open(&state);
        store.set(Lang::Ko).unwrap();
        assert_eq!(store.translate("nav.blog"), "블로그");
        store.set(Lang::En).unwrap();
        assert_eq!(store.translate("nav.blog"), "Blog");
        assert_eq!(store.translate("not.a.key"), "not.a.key");
    }
}
