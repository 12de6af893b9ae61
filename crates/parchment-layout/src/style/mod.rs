//! Text and block styles.
//!
//! Styles are immutable values. Paragraphs and runs own copies; nothing
//! mutates a style after it is attached.

mod color;
mod stylesheet;
mod values;

pub use color::ColorValue;
pub use stylesheet::{style_for_tag, text_style_for_tag};
pub use values::{BASE_FONT_KEY, BOLD_FONT_KEY, BlockStyle, FontWeight, TextStyle, non_negative};
