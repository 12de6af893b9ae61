//! Layout engine.
//!
//! Turns a paragraph sequence and an available size into a box tree:
//! root → blocks (one per paragraph) → lines → spans.
//!
//! # Module Structure
//!
//! - [`box_model`] - Points, sizes and rectangles
//! - [`box_tree`] - Root, block, line and span boxes, box identity
//! - [`measure`] - Text measurement capability and its helpers
//! - [`engine`] - Greedy line breaking

pub mod box_model;
pub mod box_tree;
pub mod engine;
pub mod measure;

// Re-exports for convenience
pub use box_model::{Point, Rect, Size};
pub use box_tree::{BlockBox, BoxId, HitBox, LineBox, RootBox, SpanBox};
pub use engine::{LINE_HEIGHT, LayoutConfig, chunks, layout, layout_with_config};
pub use measure::{ApproximateTextMeasurer, CachingMeasurer, TextMeasurer};
