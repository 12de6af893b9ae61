//! Integration tests for the line-breaking layout engine.

use parchment_layout::{
    ApproximateTextMeasurer, BlockStyle, CachingMeasurer, LINE_HEIGHT, LayoutConfig, Paragraph,
    Point, RootBox, Size, TextMeasurer, TextRun, TextStyle, layout, layout_with_config,
};
use quickcheck_macros::quickcheck;

/// One unit per character, every font.
struct MonospaceMeasurer;

impl TextMeasurer for MonospaceMeasurer {
    #[allow(clippy::cast_precision_loss)]
    fn measure(&self, text: &str, _font_key: &str) -> Size {
        Size::new(text.chars().count() as f32, 1.0)
    }
}

fn mono(paragraphs: &[Paragraph], width: f32) -> RootBox {
    layout(paragraphs, Size::new(width, 0.0), &MonospaceMeasurer)
}

fn line_texts(root: &RootBox, block: usize) -> Vec<String> {
    root.blocks[block].lines.iter().map(|l| l.text()).collect()
}

fn paragraphs_from(texts: &[Vec<String>]) -> Vec<Paragraph> {
    texts
        .iter()
        .map(|runs| {
            Paragraph::new(
                runs.iter().map(|t| TextRun::plain(t.as_str())).collect(),
                BlockStyle::PLAIN,
            )
        })
        .collect()
}

fn approx_eq(a: f32, b: f32) -> bool {
    (a - b).abs() < 1e-3
}

fn assert_close(actual: f32, expected: f32) {
    assert!(
        approx_eq(actual, expected),
        "expected {expected} but got {actual}"
    );
}

// ============================================================================
// Scenarios
// ============================================================================

#[test]
fn test_wraps_when_width_holds_exactly_two_chunks() {
    // line width = 29 - 2*5 (root) - 2*5 (block) = 9 = "aaaa bbbb"
    let root = mono(&[Paragraph::plain("aaaa bbbb cccc")], 29.0);
    assert_eq!(line_texts(&root, 0), vec!["aaaa bbbb", "cccc"]);

    let lines = &root.blocks[0].lines;
    assert_close(lines[0].position.y, 5.0);
    assert_close(lines[1].position.y, 5.0 + LINE_HEIGHT);
    assert_eq!(lines[0].size, Size::new(9.0, LINE_HEIGHT));
}

#[test]
fn test_empty_paragraph_reserves_one_line() {
    let root = mono(&[Paragraph::new(Vec::new(), BlockStyle::PLAIN)], 100.0);
    let block = &root.blocks[0];
    assert!(block.lines.is_empty());
    assert_close(block.size.height, 2.0 * 5.0 + LINE_HEIGHT);
}

#[test]
fn test_whitespace_only_run_produces_no_lines() {
    let root = mono(&[Paragraph::plain(" \n\t ")], 100.0);
    assert!(root.blocks[0].lines.is_empty());
    assert_close(root.blocks[0].size.height, 30.0);
}

// ============================================================================
// Geometry
// ============================================================================

#[test]
fn test_blocks_stack_with_root_padding_gap() {
    let paragraphs = vec![
        Paragraph::plain("one"),
        Paragraph::new(vec![TextRun::plain("two")], BlockStyle::QUOTE),
        Paragraph::plain("three"),
    ];
    let root = mono(&paragraphs, 200.0);
    let origins: Vec<Point> = root.blocks.iter().map(|b| b.position).collect();
    // plain block: 2*5 + 20 = 30, quote block: 2*10 + 20 = 40
    assert_eq!(
        origins,
        vec![Point::new(5.0, 5.0), Point::new(5.0, 40.0), Point::new(5.0, 85.0)]
    );
    assert!(root.blocks.iter().all(|b| approx_eq(b.size.width, 190.0)));
    assert_eq!(root.blocks[1].lines[0].position, Point::new(10.0, 10.0));
    assert_close(root.size.height, 85.0 + 30.0 + 5.0);
}

#[test]
fn test_root_never_shorter_than_available() {
    let root = layout(
        &[Paragraph::plain("short")],
        Size::new(100.0, 500.0),
        &MonospaceMeasurer,
    );
    assert_eq!(root.size, Size::new(100.0, 500.0));
}

#[test]
fn test_empty_document_has_minimal_root() {
    let root = mono(&[], 100.0);
    assert!(root.blocks.is_empty());
    assert_eq!(root.size, Size::new(100.0, 10.0));
}

#[test]
fn test_runs_flow_inline_as_separate_spans() {
    let paragraph = Paragraph::new(
        vec![
            TextRun::plain("one two"),
            TextRun::new("three", TextStyle::BOLD),
        ],
        BlockStyle::PLAIN,
    );
    let root = mono(&[paragraph], 200.0);
    let line = &root.blocks[0].lines[0];
    assert_eq!(line.spans.len(), 2);
    assert_eq!(line.spans[0].text, "one two");
    assert_eq!(line.spans[0].position, Point::new(0.0, LINE_HEIGHT));
    assert_close(line.spans[0].width, 7.0);
    assert_eq!(line.spans[1].text, "three");
    assert_close(line.spans[1].position.x, 8.0);
    assert_close(line.spans[1].width, 5.0);
    assert_eq!(line.spans[1].style, TextStyle::BOLD);
}

#[test]
fn test_run_split_across_lines_keeps_its_style() {
    let paragraph = Paragraph::new(
        vec![TextRun::plain("aa"), TextRun::new("bbb ccc", TextStyle::BOLD)],
        BlockStyle::PLAIN,
    );
    // line width 6
    let root = mono(&[paragraph], 26.0);
    let lines = &root.blocks[0].lines;
    assert_eq!(lines.len(), 2);
    assert_eq!(lines[0].text(), "aa bbb");
    assert_eq!(lines[1].spans.len(), 1);
    assert_eq!(lines[1].spans[0].text, "ccc");
    assert_eq!(lines[1].spans[0].style, TextStyle::BOLD);
    assert_close(lines[1].spans[0].position.x, 0.0);
}

#[test]
fn test_overlong_chunk_overflows_its_own_line() {
    let root = mono(&[Paragraph::plain("a supercalifragilistic b")], 30.0);
    assert_eq!(
        line_texts(&root, 0),
        vec!["a", "supercalifragilistic", "b"]
    );
    assert_close(root.blocks[0].lines[1].spans[0].width, 20.0);
}

#[test]
fn test_zero_and_negative_width_do_not_fail() {
    for width in [0.0, -50.0, f32::NAN] {
        let root = mono(&[Paragraph::plain("a b c")], width);
        assert_close(root.size.width, 0.0);
        assert_close(root.blocks[0].size.width, 0.0);
        assert_eq!(line_texts(&root, 0), vec!["a", "b", "c"]);
    }
}

#[test]
fn test_custom_line_height_and_root_style() {
    let config = LayoutConfig {
        root_style: BlockStyle {
            padding_width: 0.0,
            ..BlockStyle::PLAIN
        },
        line_height: 10.0,
    };
    let root = layout_with_config(
        &[Paragraph::plain("aaaa bbbb")],
        Size::new(14.0, 0.0),
        &MonospaceMeasurer,
        &config,
    );
    assert_eq!(root.blocks[0].position, Point::new(0.0, 0.0));
    assert_eq!(root.blocks[0].lines.len(), 2);
    assert_close(root.blocks[0].size.height, 2.0 * 5.0 + 2.0 * 10.0);
}

#[test]
fn test_approximate_measurer_wraps_by_advance() {
    // advance 6 at size 10; line width 60 holds "aaaa" (24) + " " (6) + "bbbb" (24)
    let measurer = ApproximateTextMeasurer::new(10.0);
    let root = layout(
        &[Paragraph::plain("aaaa bbbb cccc")],
        Size::new(80.0, 0.0),
        &measurer,
    );
    assert_eq!(line_texts(&root, 0), vec!["aaaa bbbb", "cccc"]);
}

#[test]
fn test_caching_measurer_gives_same_tree() {
    let paragraphs = vec![Paragraph::plain("the the the cat"), Paragraph::plain("cat")];
    let cached = CachingMeasurer::new(MonospaceMeasurer);
    let first = layout(&paragraphs, Size::new(30.0, 0.0), &cached);
    // "the", "cat" and " " in the base font
    assert_eq!(cached.cached_entries(), 3);
    assert_eq!(first, mono(&paragraphs, 30.0));
}

// ============================================================================
// Properties
// ============================================================================

#[quickcheck]
fn prop_lines_never_overlap(texts: Vec<Vec<String>>, width: u16) -> bool {
    let root = mono(&paragraphs_from(&texts), f32::from(width % 400));
    root.blocks.iter().all(|block| {
        block.lines.windows(2).all(|pair| {
            pair[1].position.y >= pair[0].position.y + pair[0].size.height
                && approx_eq(pair[0].size.height, LINE_HEIGHT)
        })
    })
}

#[quickcheck]
fn prop_blocks_stack_monotonically(texts: Vec<Vec<String>>, width: u16) -> bool {
    let root = mono(&paragraphs_from(&texts), f32::from(width % 400));
    let stacked = root
        .blocks
        .windows(2)
        .all(|pair| pair[1].position.y >= pair[0].position.y + pair[0].size.height);
    let contained = root
        .blocks
        .last()
        .is_none_or(|last| root.size.height >= last.position.y + last.size.height);
    stacked && contained && root.blocks.len() == texts.len()
}

#[quickcheck]
fn prop_layout_is_idempotent(texts: Vec<Vec<String>>, width: u16) -> bool {
    let paragraphs = paragraphs_from(&texts);
    let width = f32::from(width % 400);
    mono(&paragraphs, width) == mono(&paragraphs, width)
}

#[quickcheck]
fn prop_spans_reassemble_collapsed_text(text: String, width: u16) -> bool {
    let root = mono(&[Paragraph::plain(text.as_str())], f32::from(width % 200));
    let spans: Vec<&str> = root.blocks[0]
        .lines
        .iter()
        .flat_map(|line| line.spans.iter().map(|span| span.text.as_str()))
        .collect();
    spans.join(" ") == text.split_whitespace().collect::<Vec<_>>().join(" ")
}
