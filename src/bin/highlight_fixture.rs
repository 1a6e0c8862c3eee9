//! Highlight fixture runner.
//!
//! Loads a JSON fixture describing a document's pages (text runs plus
//! native/rendered dimensions) and a set of search targets, runs the
//! highlight engine over every cited page, and prints the resulting
//! rectangle report. Useful for validating matcher behavior against run
//! dumps captured from a real rendering engine.

use pdf_highlight::engine::{RenderEngine, StaticEngine, StaticPage};
use pdf_highlight::{Highlighter, OverlayStore, SearchTarget};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// Fixture file format: a document plus the targets to highlight in it.
#[derive(Debug, Clone, Serialize, Deserialize)]
struct Fixture {
    pages: Vec<StaticPage>,
    targets: Vec<SearchTarget>,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    let path = match std::env::args().nth(1) {
        Some(path) => path,
        None => {
            eprintln!("Usage: highlight_fixture <fixture.json>");
            std::process::exit(1);
        }
    };

    println!("Highlight Fixture Runner");
    println!("========================\n");

    let json = std::fs::read_to_string(&path)?;
    let fixture: Fixture = serde_json::from_str(&json)?;

    let engine = StaticEngine::new(fixture.pages);
    println!(
        "Loaded {} page(s), {} target(s) from {}\n",
        engine.page_count(),
        fixture.targets.len(),
        path
    );

    // Fail early on targets citing pages the fixture does not contain.
    for target in &fixture.targets {
        engine.page_strict(target.page_number)?;
    }

    let cited_pages: BTreeSet<usize> =
        fixture.targets.iter().map(|t| t.page_number).collect();

    let mut highlighter = Highlighter::new(&engine, OverlayStore::new());
    let mut total = 0;

    for page_number in cited_pages {
        let painted = highlighter.highlight_page(page_number, &fixture.targets);
        total += painted;

        println!("Page {page_number}: {painted} rect(s)");
        if let Some(overlay) = highlighter.compositor().overlay(page_number) {
            for rect in overlay {
                println!(
                    "  x={:.1} y={:.1} w={:.1} h={:.1}",
                    rect.x, rect.y, rect.width, rect.height
                );
            }
        }
    }

    println!("\nTotal: {total} rect(s) painted");
    Ok(())
}
