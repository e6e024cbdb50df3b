// SPDX-License-Identifier: PMPL-1.0-or-later

//! artsite: content pipeline and bilingual translation toolkit for the
//! i-Scream arts site.
//!
//! Each subcommand is one of the original standalone content scripts; every
//! path argument defaults to the path those scripts hard-coded, so each step
//! runs with no arguments from the repository root.

use anyhow::Result;
use artsite::diagnostics;
use artsite::i18n::{Lang, LanguageStore, DEFAULT_STATE_FILE};
use artsite::pipeline::{self, index, links, migrate};
use artsite::site::{self, Resolution};
use artsite::types::PostIndex;
use clap::{Parser, Subcommand};
use colored::*;
use std::path::PathBuf;

const DEFAULT_CONTENT_DIR: &str = "public/content/blog";
const DEFAULT_INDEX_OUTPUT: &str = "src/data/posts.json";
const DEFAULT_SLUG_MAP: &str = "slug-map.json";

#[derive(Parser)]
#[command(name = "artsite")]
#[command(version)]
#[command(about = "Content pipeline and bilingual translation toolkit for the i-Scream arts site")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Rename folders to slugs, canonicalize markdown and image names,
    /// rewrite links
    Migrate {
        /// Base content directory holding one folder per post
        #[arg(long, default_value = DEFAULT_CONTENT_DIR)]
        content_dir: PathBuf,

        /// Slug map file (JSON or YAML): original folder name -> slug
        #[arg(long, default_value = DEFAULT_SLUG_MAP)]
        map: PathBuf,
    },

    /// Remove markdown image references whose targets no longer exist
    FixImages {
        #[arg(long, default_value = DEFAULT_CONTENT_DIR)]
        content_dir: PathBuf,
    },

    /// Collapse excess whitespace and broken-reference remnants
    Cleanup {
        #[arg(long, default_value = DEFAULT_CONTENT_DIR)]
        content_dir: PathBuf,
    },

    /// Regenerate the post index from the content tree
    Generate {
        #[arg(long, default_value = DEFAULT_CONTENT_DIR)]
        content_dir: PathBuf,

        /// Output path for the generated index JSON
        #[arg(short, long, default_value = DEFAULT_INDEX_OUTPUT)]
        output: PathBuf,
    },

    /// Run every pipeline phase in order: migrate, fix-images, cleanup,
    /// generate
    Pipeline {
        #[arg(long, default_value = DEFAULT_CONTENT_DIR)]
        content_dir: PathBuf,

        #[arg(long, default_value = DEFAULT_SLUG_MAP)]
        map: PathBuf,

        #[arg(short, long, default_value = DEFAULT_INDEX_OUTPUT)]
        output: PathBuf,
    },

    /// Print or set the persisted site language
    Lang {
        /// Language tag to switch to; prints the current one when omitted
        #[arg(value_enum)]
        tag: Option<Lang>,

        #[arg(long, default_value = DEFAULT_STATE_FILE)]
        state_file: PathBuf,
    },

    /// Resolve one post and print its body through the fallback chain
    Show {
        /// Post slug
        slug: String,

        #[arg(long, default_value = DEFAULT_CONTENT_DIR)]
        content_dir: PathBuf,

        /// Post index to resolve against
        #[arg(long, default_value = DEFAULT_INDEX_OUTPUT)]
        index: PathBuf,

        #[arg(long, default_value = DEFAULT_STATE_FILE)]
        state_file: PathBuf,
    },

    /// Check the content tree, the generated index, and catalog parity
    Doctor {
        #[arg(long, default_value = DEFAULT_CONTENT_DIR)]
        content_dir: PathBuf,

        #[arg(long, default_value = DEFAULT_INDEX_OUTPUT)]
        index: PathBuf,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Migrate { content_dir, map } => {
            println!("Migrating content in: {}", content_dir.display());
            let slug_map = load_slug_map(&map)?;
            let report = migrate::run(&content_dir, &slug_map)?;
            migrate::print_summary(&report);
        }

        Commands::FixImages { content_dir } => {
            println!("Sweeping broken image links in: {}", content_dir.display());
            let removed = links::sweep_tree(&content_dir)?;
            println!("\nRemoved {} broken reference(s)", removed);
        }

        Commands::Cleanup { content_dir } => {
            println!("Cleaning markdown in: {}", content_dir.display());
            let rewritten = links::cleanup_tree(&content_dir)?;
            println!("\nRewrote {} file(s)", rewritten);
        }

        Commands::Generate {
            content_dir,
            output,
        } => {
            println!("Generating post index from: {}", content_dir.display());
            let index = index::generate(&content_dir)?;
            index.save(&output)?;
            println!("\n{} post(s) -> {}", index.posts.len(), output.display());
        }

        Commands::Pipeline {
            content_dir,
            map,
            output,
        } => {
            println!("Running full pipeline on: {}\n", content_dir.display());
            let slug_map = load_slug_map(&map)?;
            pipeline::run_all(&content_dir, &slug_map, &output)?;
            println!("{}", "Pipeline complete.".green());
        }

        Commands::Lang { tag, state_file } => {
            let mut store = LanguageStore::open(&state_file);
            match tag {
                Some(lang) => {
                    if let Err(err) = store.set(lang) {
                        println!("{} could not persist language: {}", "[WARN]".yellow(), err);
                    }
                    println!("language set to {}", store.language());
                }
                None => println!("{}", store.language()),
            }
        }

        Commands::Show {
            slug,
            content_dir,
            index,
            state_file,
        } => {
            let index = PostIndex::load(&index)?;
            let store = LanguageStore::open(&state_file);
            let lang = store.language();

            match site::resolve(&index, &slug) {
                Resolution::RedirectToList => {
                    println!("unknown slug {:?}; redirecting to {}", slug, store.translate("nav.blog"));
                }
                Resolution::Found { record, prev, next } => {
                    println!("{}", record.title.bold());
                    println!("{} | {} | {}", record.date, record.author, record.tags.join(", "));
                    println!();
                    let body = site::load_body(&content_dir, &slug, lang);
                    println!("{}", site::rewrite_image_paths(&body, &slug));
                    if let Some(prev) = prev {
                        println!("{}: {}", store.translate("blog.prev"), prev.slug);
                    }
                    if let Some(next) = next {
                        println!("{}: {}", store.translate("blog.next"), next.slug);
                    }
                }
            }
        }

        Commands::Doctor { content_dir, index } => {
            diagnostics::run_doctor(&content_dir, &index)?;
        }
    }

    Ok(())
}

/// A missing slug map file is not an error — migration then runs with no
/// folder renames, canonicalizing assets in place.
fn load_slug_map(path: &PathBuf) -> Result<migrate::SlugMap> {
    if path.is_file() {
        migrate::SlugMap::load(path)
    } else {
        println!(
            "  {} no slug map at {}, folder names left as-is",
            "[WARN]".yellow(),
            path.display()
        );
        Ok(migrate::SlugMap::empty())
    }
}
