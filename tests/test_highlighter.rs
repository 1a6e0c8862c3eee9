//! End-to-end tests for the highlight pass: extraction → alignment →
//! projection → composition.

use pdf_highlight::engine::{StaticEngine, StaticPage};
use pdf_highlight::{Highlighter, OverlayStore, Rect, SearchTarget, TextRun};

/// A one-page document rendered 1:1, with runs laid out on two lines.
fn invoice_engine() -> StaticEngine {
    StaticEngine::new(vec![StaticPage::new(
        vec![
            TextRun::new("Invoice #1042", [1.0, 0.0, 0.0, 1.0, 72.0, 740.0], 120.0, 14.0),
            TextRun::new("Total amount due:", [1.0, 0.0, 0.0, 1.0, 72.0, 700.0], 140.0, 12.0),
            TextRun::new("$1,204.50", [1.0, 0.0, 0.0, 1.0, 220.0, 700.0], 70.0, 12.0),
            TextRun::new("Payment terms: net 30", [1.0, 0.0, 0.0, 1.0, 72.0, 680.0], 180.0, 12.0),
        ],
        (612.0, 792.0),
    )
    .with_rendered_size(612.0, 792.0)])
}

#[test]
fn test_highlight_composes_matched_runs() {
    let engine = invoice_engine();
    let mut highlighter = Highlighter::new(&engine, OverlayStore::new());

    let painted =
        highlighter.highlight_page(1, &[SearchTarget::new(1, "total amount due 120450")]);
    assert_eq!(painted, 2);

    let overlay = highlighter.compositor().overlay(1).unwrap();
    assert_eq!(overlay[0], Rect::new(72.0, 792.0 - 700.0 - 12.0, 140.0, 12.0));
    assert_eq!(overlay[1], Rect::new(220.0, 792.0 - 700.0 - 12.0, 70.0, 12.0));
}

#[test]
fn test_repeated_calls_leave_one_overlay() {
    let engine = invoice_engine();
    let mut highlighter = Highlighter::new(&engine, OverlayStore::new());
    let targets = [SearchTarget::new(1, "total amount due 120450")];

    highlighter.highlight_page(1, &targets);
    highlighter.highlight_page(1, &targets);

    // Exactly one rect set on screen, not two overlapping copies.
    assert_eq!(highlighter.compositor().overlay(1).unwrap().len(), 2);
}

#[test]
fn test_multi_line_target_unions_segments() {
    let engine = invoice_engine();
    let mut highlighter = Highlighter::new(&engine, OverlayStore::new());

    let painted = highlighter.highlight_page(
        1,
        &[SearchTarget::new(1, "invoice 1042\npayment terms net 30")],
    );
    assert_eq!(painted, 2);
}

#[test]
fn test_multiple_targets_union_in_one_paint() {
    let engine = invoice_engine();
    let mut highlighter = Highlighter::new(&engine, OverlayStore::new());

    let painted = highlighter.highlight_page(
        1,
        &[
            SearchTarget::new(1, "invoice 1042"),
            SearchTarget::new(1, "payment terms net 30"),
        ],
    );
    assert_eq!(painted, 2);
    assert_eq!(highlighter.compositor().overlay(1).unwrap().len(), 2);
}

#[test]
fn test_no_match_clears_previous_overlay() {
    let engine = invoice_engine();
    let mut highlighter = Highlighter::new(&engine, OverlayStore::new());

    highlighter.highlight_page(1, &[SearchTarget::new(1, "invoice 1042")]);
    assert!(highlighter.compositor().overlay(1).is_some());

    // Navigating to a citation with no presence on this page clears it.
    highlighter.highlight_page(1, &[SearchTarget::new(1, "zebra quantum waffle")]);
    assert!(highlighter.compositor().overlay(1).is_none());
}

#[test]
fn test_missing_page_is_silent() {
    let engine = invoice_engine();
    let mut highlighter = Highlighter::new(&engine, OverlayStore::new());

    let painted = highlighter.highlight_page(9, &[SearchTarget::new(9, "invoice 1042")]);
    assert_eq!(painted, 0);
}

#[test]
fn test_unrendered_page_is_silent() {
    let engine = StaticEngine::new(vec![StaticPage::new(
        vec![TextRun::new("hello world", [1.0, 0.0, 0.0, 1.0, 0.0, 0.0], 50.0, 12.0)],
        (612.0, 792.0),
    )]);
    let mut highlighter = Highlighter::new(&engine, OverlayStore::new());

    let painted = highlighter.highlight_page(1, &[SearchTarget::new(1, "hello world")]);
    assert_eq!(painted, 0);
}

#[test]
fn test_downscaled_canvas_halves_coordinates() {
    let engine = StaticEngine::new(vec![StaticPage::new(
        vec![TextRun::new(
            "the quick brown fox",
            [1.0, 0.0, 0.0, 1.0, 100.0, 700.0],
            50.0,
            12.0,
        )],
        (800.0, 1000.0),
    )
    .with_rendered_size(400.0, 500.0)]);
    let mut highlighter = Highlighter::new(&engine, OverlayStore::new());

    highlighter.highlight_page(1, &[SearchTarget::new(1, "the quick brown fox")]);
    let overlay = highlighter.compositor().overlay(1).unwrap();
    assert_eq!(overlay[0], Rect::new(50.0, 144.0, 25.0, 6.0));
}

#[test]
fn test_fixture_json_end_to_end() {
    let json = r#"{
        "pages": [{
            "runs": [
                {"text": "the quick brown fox", "transform": [1.0, 0.0, 0.0, 1.0, 100.0, 700.0], "width": 50.0, "height": 12.0}
            ],
            "native_width": 800.0,
            "native_height": 1000.0,
            "rendered_width": 400.0,
            "rendered_height": 500.0
        }]
    }"#;

    let engine = StaticEngine::from_json(json).expect("fixture should parse");
    let mut highlighter = Highlighter::new(&engine, OverlayStore::new());

    let painted = highlighter.highlight_page(1, &[SearchTarget::new(1, "quick brown fox")]);
    assert_eq!(painted, 1);
    assert_eq!(
        highlighter.compositor().overlay(1).unwrap()[0],
        Rect::new(50.0, 144.0, 25.0, 6.0)
    );
}
