//! Painting
//!
//! Converts a box tree into drawing calls on a [`Paint`] surface. The
//! surface is supplied by the host; [`DisplayList`] is a recording surface
//! whose commands can be replayed, compared in tests or dumped.
//!
//! # Architecture
//!
//! ```text
//! Markup → Paragraphs → Layout → Paint → Surface
//!                                  ↓
//!                            DisplayList
//! ```
//!
//! Calls are ordered back to front: later calls draw over earlier ones.

mod display_list;
mod painter;

pub use display_list::{DisplayCommand, DisplayList};
pub use painter::{HIGHLIGHT_COLOR, Painter, UNDERLINE_THICKNESS, paint};

use crate::layout::Rect;
use crate::style::ColorValue;

/// A drawing surface provided by the host.
///
/// All coordinates are absolute view-space units.
pub trait Paint {
    /// Fill `rect` with a solid color.
    fn fill(&mut self, rect: Rect, color: ColorValue);

    /// Outline `rect` with a solid color.
    fn stroke(&mut self, rect: Rect, color: ColorValue);

    /// Draw `text` with its baseline origin at `(x, y)`.
    fn draw_text(&mut self, text: &str, x: f32, y: f32, font_key: &str, color: ColorValue);
}
