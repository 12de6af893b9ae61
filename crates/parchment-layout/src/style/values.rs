use std::borrow::Cow;

use serde::Serialize;
use strum_macros::Display;

use super::color::ColorValue;

/// Font key used for bold runs, regardless of the run's font family.
pub const BOLD_FONT_KEY: &str = "bold";

/// Font family key of the default text style.
pub const BASE_FONT_KEY: &str = "base";

/// Weight of a text run. Only two weights exist.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Display)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum FontWeight {
    /// Regular weight.
    Plain,
    /// Bold weight; selects the `bold` font key.
    Bold,
}

/// Presentation of a text run. Immutable once attached to a run.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct TextStyle {
    /// Font family key handed to the measurer and the paint surface.
    pub font: Cow<'static, str>,
    /// Text color, also used for the underline.
    pub color: ColorValue,
    /// Plain or bold.
    pub weight: FontWeight,
    /// Draw an underline beneath the text.
    pub underline: bool,
}

impl TextStyle {
    /// Black, plain, base font.
    pub const PLAIN: Self = Self {
        font: Cow::Borrowed(BASE_FONT_KEY),
        color: ColorValue::BLACK,
        weight: FontWeight::Plain,
        underline: false,
    };

    /// Bold variant of [`TextStyle::PLAIN`].
    pub const BOLD: Self = Self {
        weight: FontWeight::Bold,
        ..Self::PLAIN
    };

    /// Blue underlined text for links.
    pub const LINK: Self = Self {
        color: ColorValue::rgb(0, 0, 255),
        underline: true,
        ..Self::PLAIN
    };

    /// Underlined variant of [`TextStyle::PLAIN`].
    pub const UNDERLINE: Self = Self {
        underline: true,
        ..Self::PLAIN
    };

    /// The key used to measure and draw this run: `"bold"` for bold runs,
    /// otherwise the run's font family.
    #[must_use]
    pub fn font_key(&self) -> &str {
        match self.weight {
            FontWeight::Bold => BOLD_FONT_KEY,
            FontWeight::Plain => self.font.as_ref(),
        }
    }
}

impl Default for TextStyle {
    fn default() -> Self {
        Self::PLAIN
    }
}

/// Decoration of a block: background, border and padding.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct BlockStyle {
    /// Fill of the block's border box.
    pub background_color: ColorValue,
    /// Border thickness; 0 means no border.
    pub border_width: f32,
    /// Border fill color.
    pub border_color: ColorValue,
    /// Space between the block edge and its lines, on all four sides.
    pub padding_width: f32,
}

impl BlockStyle {
    /// White background, no border, padding 5.
    pub const PLAIN: Self = Self {
        background_color: ColorValue::WHITE,
        border_width: 0.0,
        border_color: ColorValue::BLACK,
        padding_width: 5.0,
    };

    /// Green header band, no border, padding 5.
    pub const HEADER: Self = Self {
        background_color: ColorValue::rgb(0x00, 0xff, 0x66),
        ..Self::PLAIN
    };

    /// Cyan box with a 1-unit dark gray border and padding 10.
    pub const QUOTE: Self = Self {
        background_color: ColorValue::rgb(0x00, 0xff, 0xff),
        border_width: 1.0,
        border_color: ColorValue::rgb(0x44, 0x44, 0x44),
        padding_width: 10.0,
    };

    /// Copy of this style with negative or NaN widths replaced by 0.
    #[must_use]
    pub const fn sanitized(self) -> Self {
        Self {
            border_width: non_negative(self.border_width),
            padding_width: non_negative(self.padding_width),
            ..self
        }
    }
}

impl Default for BlockStyle {
    fn default() -> Self {
        Self::PLAIN
    }
}

/// Clamp to `[0, +inf)`, mapping NaN to 0.
#[must_use]
pub const fn non_negative(value: f32) -> f32 {
    if value > 0.0 { value } else { 0.0 }
}
