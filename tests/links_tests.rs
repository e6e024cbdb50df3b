// SPDX-License-Identifier: PMPL-1.0-or-later

//! Tests for the broken-link sweep and markdown cleanup steps

use artsite::pipeline::links;
use std::fs;
use std::path::Path;
use tempfile::TempDir;

fn make_post(base: &Path, folder: &str, body: &str, images: &[&str]) {
    let dir = base.join(folder);
    fs::create_dir_all(&dir).unwrap();
    fs::write(dir.join("index.md"), body).unwrap();
    for image in images {
        fs::write(dir.join(image), b"\x89PNG fake").unwrap();
    }
}

#[test]
fn dangling_reference_is_removed() {
    let dir = TempDir::new().unwrap();
    make_post(
        dir.path(),
        "a-post",
        "# Title\n\n![](missing.png)\n\nBody.\n",
        &[],
    );

    let removed = links::sweep_tree(dir.path()).expect("sweep should succeed");

    assert_eq!(removed, 1);
    let body = fs::read_to_string(dir.path().join("a-post/index.md")).unwrap();
    assert!(!body.contains("missing.png"));
    assert!(body.contains("Body."));
}

#[test]
fn existing_and_external_references_survive() {
    let dir = TempDir::new().unwrap();
    make_post(
        dir.path(),
        "a-post",
        "![ok](image-1.png)\n![site](/images/blog/sample.png)\n![cdn](https://cdn.example/x.png)\n![data](data:image/png;base64,AA==)\n",
        &["image-1.png"],
    );

    let removed = links::sweep_tree(dir.path()).expect("sweep should succeed");

    assert_eq!(removed, 0);
    let body = fs::read_to_string(dir.path().join("a-post/index.md")).unwrap();
    assert!(body.contains("image-1.png"));
    assert!(body.contains("/images/blog/sample.png"));
    assert!(body.contains("https://cdn.example/x.png"));
    assert!(body.contains("data:image/png;base64,AA=="));
}

#[test]
fn encoded_reference_to_existing_file_survives() {
    let dir = TempDir::new().unwrap();
    make_post(
        dir.path(),
        "a-post",
        "![img](some%20photo.png)\n",
        &["some photo.png"],
    );

    let removed = links::sweep_tree(dir.path()).expect("sweep should succeed");
    assert_eq!(removed, 0);
}

#[test]
fn hangul_named_image_is_rescued_and_relinked() {
    let dir = TempDir::new().unwrap();
    make_post(
        dir.path(),
        "a-post",
        "![대표이미지](스크린샷.png)\n",
        &["스크린샷.png"],
    );

    links::sweep_tree(dir.path()).expect("sweep should succeed");

    let post = dir.path().join("a-post");
    assert!(post.join("image-1.png").is_file());
    assert!(!post.join("스크린샷.png").exists());
    let body = fs::read_to_string(post.join("index.md")).unwrap();
    assert_eq!(body, "![대표이미지](image-1.png)\n");
}

#[test]
fn rescue_respects_existing_canonical_indices() {
    let dir = TempDir::new().unwrap();
    make_post(
        dir.path(),
        "a-post",
        "![one](image-1.png)\n![two](그림.png)\n",
        &["image-1.png", "그림.png"],
    );

    links::sweep_tree(dir.path()).expect("sweep should succeed");

    let post = dir.path().join("a-post");
    assert!(post.join("image-1.png").is_file());
    assert!(post.join("image-2.png").is_file());
    let body = fs::read_to_string(post.join("index.md")).unwrap();
    assert!(body.contains("![two](image-2.png)"));
}

#[test]
fn cleanup_collapses_newlines_and_remnants() {
    let dir = TempDir::new().unwrap();
    make_post(
        dir.path(),
        "a-post",
        "# Title\n\n\n\n\nBody text\n\n.png)\n!\n\n\n\n",
        &[],
    );

    let rewritten = links::cleanup_tree(dir.path()).expect("cleanup should succeed");

    assert_eq!(rewritten, 1);
    let body = fs::read_to_string(dir.path().join("a-post/index.md")).unwrap();
    assert_eq!(body, "# Title\n\nBody text\n");
}

#[test]
fn cleanup_is_idempotent() {
    let dir = TempDir::new().unwrap();
    make_post(dir.path(), "a-post", "# Title\n\n\n\nBody\n", &[]);

    links::cleanup_tree(dir.path()).expect("first cleanup should succeed");
    let first = fs::read_to_string(dir.path().join("a-post/index.md")).unwrap();

    let rewritten = links::cleanup_tree(dir.path()).expect("second cleanup should succeed");
    assert_eq!(rewritten, 0, "second pass should change nothing");
    let second = fs::read_to_string(dir.path().join("a-post/index.md")).unwrap();
    assert_eq!(first, second);
}

#[test]
fn folders_without_markdown_are_skipped() {
    let dir = TempDir::new().unwrap();
    fs::create_dir_all(dir.path().join("images-only")).unwrap();
    fs::write(dir.path().join("images-only/photo.png"), b"png").unwrap();

    let removed = links::sweep_tree(dir.path()).expect("sweep should succeed");
    assert_eq!(removed, 0);
    let rewritten = links::cleanup_tree(dir.path()).expect("cleanup should succeed");
    assert_eq!(rewritten, 0);
}
