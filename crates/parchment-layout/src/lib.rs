//! Styles, paragraph projection, line-breaking layout, hit testing and
//! painting for Parchment.
//!
//! # Scope
//!
//! This crate implements:
//! - **Style resolution** - static block styles per element name and text
//!   styles per inline element name
//! - **Projection** - element tree to an ordered sequence of paragraphs
//! - **Layout** - greedy line breaking into a box tree:
//!   root → blocks → lines → spans
//! - **Hit testing** - the deepest box under a point
//! - **Painting** - box tree to drawing calls on a [`Paint`] surface
//!
//! # Not Yet Implemented
//!
//! - Per-font line heights (line height is fixed per layout pass)
//! - Hyphenation, justification and bidirectional text
//! - Incremental relayout
//!
//! ```
//! use parchment_layout::{ApproximateTextMeasurer, Paragraph, Size, layout};
//!
//! let paragraphs = vec![Paragraph::plain("Welcome to the machine!")];
//! let root = layout(&paragraphs, Size::new(120.0, 40.0), &ApproximateTextMeasurer::default());
//! assert_eq!(root.blocks.len(), 1);
//! assert!(root.size.height >= 40.0);
//! ```

/// Paragraphs, text runs and projection from the element tree.
pub mod document;
/// Box tree and line-breaking layout.
pub mod layout;
/// Display list and painting.
pub mod paint;
/// Colors, text styles and block styles.
pub mod style;

// Re-exports for convenience
pub use document::{Paragraph, ProjectionError, TextRun, project};
pub use hit_test::find_box;
pub use layout::{
    ApproximateTextMeasurer, BlockBox, BoxId, CachingMeasurer, HitBox, LINE_HEIGHT, LayoutConfig,
    LineBox, Point, Rect, RootBox, Size, SpanBox, TextMeasurer, chunks, layout, layout_with_config,
};
pub use paint::{DisplayCommand, DisplayList, Paint, Painter, paint};
pub use style::{
    BASE_FONT_KEY, BOLD_FONT_KEY, BlockStyle, ColorValue, FontWeight, TextStyle, style_for_tag,
    text_style_for_tag,
};
