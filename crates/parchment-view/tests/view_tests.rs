//! Integration tests for the rich-text view lifecycle.

use parchment_layout::{
    BlockStyle, BoxId, DisplayCommand, DisplayList, LayoutConfig, Paragraph, Point, Size,
    TextMeasurer, TextRun,
};
use parchment_markup::ParseErrorKind;
use parchment_view::{LoadError, RichTextView, load_document, parse_document, parse_markup_string};

/// One unit per character, every font.
struct MonospaceMeasurer;

impl TextMeasurer for MonospaceMeasurer {
    #[allow(clippy::cast_precision_loss)]
    fn measure(&self, text: &str, _font_key: &str) -> Size {
        Size::new(text.chars().count() as f32, 1.0)
    }
}

const MARKUP: &str = "<root>\n  <h1>Welcome My Son</h1>\n  <p>Welcome to the machine!</p>\n</root>\n";

fn laid_out(width: f32) -> RichTextView {
    let mut view = RichTextView::from_markup(MARKUP).unwrap();
    let _ = view.layout(Size::new(width, 100.0), &MonospaceMeasurer);
    view
}

#[test]
fn test_parse_document_yields_paragraphs() {
    let paragraphs = parse_document(MARKUP).unwrap();
    assert_eq!(paragraphs.len(), 2);
    assert_eq!(paragraphs[0].style, BlockStyle::HEADER);
    assert_eq!(paragraphs[1].style, BlockStyle::PLAIN);
}

#[test]
fn test_loaded_document_keeps_every_stage() {
    let doc = parse_markup_string("<doc><p>a<b>b</p></doc>").unwrap();
    assert_eq!(doc.tokens.len(), 7);
    assert_eq!(doc.parse_issues.len(), 1);
    assert_eq!(doc.paragraphs.len(), 1);
    assert!(doc.source_path.is_empty());
}

#[test]
fn test_parse_error_is_surfaced() {
    let err = parse_document("<p>unterminated <a href='x>").unwrap_err();
    let LoadError::Parse(err) = err else {
        panic!("expected a parse error, got {err:?}");
    };
    assert!(matches!(err.kind, ParseErrorKind::UnterminatedAttributeValue { .. }));
}

#[test]
fn test_empty_markup_is_a_projection_error() {
    assert!(matches!(parse_document(""), Err(LoadError::Projection(_))));
    assert!(RichTextView::from_markup("").is_err());
}

#[test]
fn test_missing_file_reports_path() {
    let err = load_document("/definitely/not/here.pm").unwrap_err();
    assert!(matches!(err, LoadError::File { .. }));
    assert!(err.to_string().contains("/definitely/not/here.pm"));
}

#[test]
fn test_layout_returns_content_size() {
    let mut view = RichTextView::from_markup(MARKUP).unwrap();
    let size = view.layout(Size::new(200.0, 10.0), &MonospaceMeasurer);
    // two single-line blocks: 5 + 30 + 5 + 30 + 5
    assert_eq!(size, Size::new(200.0, 75.0));
    assert_eq!(view.box_tree().map(|t| t.blocks.len()), Some(2));
}

#[test]
fn test_layout_reruns_only_on_width_change() {
    let mut view = laid_out(200.0);
    assert_eq!(view.layout_passes(), 1);

    let _ = view.layout(Size::new(200.0, 400.0), &MonospaceMeasurer);
    assert_eq!(view.layout_passes(), 1);

    let _ = view.layout(Size::new(30.0, 100.0), &MonospaceMeasurer);
    assert_eq!(view.layout_passes(), 2);
    assert!(view.box_tree().unwrap().line_count() > 2);
}

#[test]
fn test_document_change_forces_layout() {
    let mut view = laid_out(200.0);
    view.set_document(vec![Paragraph::plain("replaced")]);
    let _ = view.layout(Size::new(200.0, 100.0), &MonospaceMeasurer);
    assert_eq!(view.layout_passes(), 2);
    assert_eq!(view.box_tree().unwrap().blocks.len(), 1);
    assert_eq!(view.document(), &[Paragraph::plain("replaced")]);
}

#[test]
fn test_pointer_move_reports_highlight_changes() {
    let mut view = laid_out(200.0);
    assert!(view.pointer_move(Point::new(20.0, 15.0)));
    assert_eq!(view.highlighted(), Some(BoxId::Line { block: 0, line: 0 }));

    // same line, no repaint needed
    assert!(!view.pointer_move(Point::new(30.0, 20.0)));

    assert!(view.pointer_move(Point::new(7.0, 7.0)));
    assert_eq!(view.highlighted(), Some(BoxId::Block { block: 0 }));

    assert!(view.pointer_move(Point::new(500.0, 7.0)));
    assert_eq!(view.highlighted(), None);
}

#[test]
fn test_relayout_clears_highlight() {
    let mut view = laid_out(200.0);
    assert!(view.pointer_move(Point::new(20.0, 15.0)));
    let _ = view.layout(Size::new(150.0, 100.0), &MonospaceMeasurer);
    assert_eq!(view.highlighted(), None);
}

#[test]
fn test_pointer_leave_clears_highlight() {
    let mut view = laid_out(200.0);
    assert!(!view.pointer_leave());
    assert!(view.pointer_move(Point::new(20.0, 15.0)));
    assert!(view.pointer_leave());
    assert_eq!(view.highlighted(), None);
}

#[test]
fn test_draw_before_layout_is_a_no_op() {
    let view = RichTextView::from_markup(MARKUP).unwrap();
    let mut list = DisplayList::new();
    view.draw(&mut list);
    assert!(list.is_empty());
}

#[test]
fn test_draw_strokes_highlighted_line() {
    let mut view = laid_out(200.0);
    let _ = view.pointer_move(Point::new(20.0, 15.0));
    let mut list = DisplayList::new();
    view.draw(&mut list);
    let strokes = list
        .commands()
        .iter()
        .filter(|c| matches!(c, DisplayCommand::StrokeRect { .. }))
        .count();
    assert_eq!(strokes, 1);
}

#[test]
fn test_programmatic_document_with_config() {
    let config = LayoutConfig {
        line_height: 12.0,
        ..LayoutConfig::default()
    };
    let paragraphs = vec![Paragraph::new(
        vec![TextRun::plain("built"), TextRun::plain("directly")],
        BlockStyle::QUOTE,
    )];
    let mut view = RichTextView::with_config(paragraphs, config);
    let size = view.layout(Size::new(100.0, 0.0), &MonospaceMeasurer);
    // 5 + (2*10 + 12) + 5
    assert_eq!(size, Size::new(100.0, 42.0));
    assert_eq!(view.box_tree().unwrap().blocks[0].lines[0].text(), "built directly");
}
