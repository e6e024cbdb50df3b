// SPDX-License-Identifier: PMPL-1.0-or-later

//! Tests for the translation catalog and the persisted language store

use artsite::i18n::{t, Lang, LanguageStore};
use std::fs;
use tempfile::TempDir;

#[test]
fn known_keys_resolve_in_every_language() {
    assert_eq!(t(Lang::Ko, "brand.name"), "아이스크림아트");
    assert_eq!(t(Lang::En, "brand.name"), "i-Scream arts");
    assert_eq!(t(Lang::Ko, "footer.copyright"), "© 2024 아이스크림아트. All rights reserved.");
    assert_eq!(t(Lang::En, "cta.partnership"), "Partnership Inquiry");
}

#[test]
fn missing_key_returns_the_key_for_every_language() {
    for &lang in Lang::all() {
        assert_eq!(t(lang, "definitely.not.a.key"), "definitely.not.a.key");
    }
}

#[test]
fn lookups_always_produce_visible_text() {
    for &lang in Lang::all() {
        assert!(!t(lang, "nav.blog").is_empty());
        // Unknown keys echo as themselves, never as empty text.
        assert!(!t(lang, "some.unknown.key").is_empty());
    }
}

#[test]
fn set_language_survives_a_reload() {
    let dir = TempDir::new().unwrap();
    let state = dir.path().join("lang-state");

    let mut store = LanguageStore::open(&state);
    store.set(Lang::Ko).expect("persist should succeed");
    drop(store);

    // Simulated reload: a fresh store over the same state file.
    let reloaded = LanguageStore::open(&state);
    assert_eq!(reloaded.language(), Lang::Ko);
    assert_eq!(reloaded.translate("nav.contact"), "문의하기");
}

#[test]
fn last_write_wins_across_rapid_switches() {
    let dir = TempDir::new().unwrap();
    let state = dir.path().join("lang-state");

    let mut store = LanguageStore::open(&state);
    store.set(Lang::Ko).unwrap();
    store.set(Lang::En).unwrap();
    store.set(Lang::Ko).unwrap();

    assert_eq!(fs::read_to_string(&state).unwrap().trim(), "ko");
    assert_eq!(LanguageStore::open(&state).language(), Lang::Ko);
}

#[test]
fn garbage_state_file_falls_back_cleanly() {
    let dir = TempDir::new().unwrap();
    let state = dir.path().join("lang-state");
    fs::write(&state, "not-a-language\n").unwrap();

    let store = LanguageStore::open(&state);
    assert!(Lang::all().contains(&store.language()));
}
