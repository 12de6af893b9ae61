//! Text measurement supplied by the host.

use std::cell::RefCell;
use std::collections::HashMap;

use super::box_model::Size;

/// Measurement interface for text during layout.
///
/// Implementations must be deterministic for a given font configuration:
/// layout relies on measuring the same text twice giving the same width.
/// Only the width is used for line breaking; line height is fixed by the
/// layout configuration.
pub trait TextMeasurer {
    /// Rendered extent of `text` in the font identified by `font_key`.
    fn measure(&self, text: &str, font_key: &str) -> Size;
}

/// Approximate measurement using fixed ratios.
///
/// Without access to actual font data, we use a fixed advance per
/// character: the average advance width of Latin glyphs in a proportional
/// font is approximately 0.6× the font size. Height uses 1.2× the font size.
/// Every font key measures the same.
///
/// This is used by the CLI and in tests.
#[derive(Debug, Clone, Copy)]
pub struct ApproximateTextMeasurer {
    /// Font size in units.
    pub font_size: f32,
}

impl ApproximateTextMeasurer {
    const CHAR_WIDTH_RATIO: f32 = 0.6;
    const LINE_HEIGHT_RATIO: f32 = 1.2;

    /// Measurer for the given font size.
    #[must_use]
    pub const fn new(font_size: f32) -> Self {
        Self { font_size }
    }

    /// Width of a single character.
    #[must_use]
    pub fn advance(&self) -> f32 {
        self.font_size * Self::CHAR_WIDTH_RATIO
    }
}

impl Default for ApproximateTextMeasurer {
    fn default() -> Self {
        Self::new(16.0)
    }
}

impl TextMeasurer for ApproximateTextMeasurer {
    fn measure(&self, text: &str, _font_key: &str) -> Size {
        #[allow(clippy::cast_precision_loss)]
        let chars = text.chars().count() as f32;
        Size::new(
            chars * self.advance(),
            self.font_size * Self::LINE_HEIGHT_RATIO,
        )
    }
}

/// Memoizes `(text, font_key)` measurements of an inner measurer.
///
/// Layout measures every chunk and one space per run; hosts whose
/// measurement round-trips to a renderer can wrap it in this cache and
/// keep the cache across layouts.
pub struct CachingMeasurer<M> {
    inner: M,
    /// Font key to text to size. Hits look up by `&str` and allocate nothing.
    cache: RefCell<HashMap<String, HashMap<String, Size>>>,
}

impl<M: TextMeasurer> CachingMeasurer<M> {
    /// Wrap `inner` with an empty cache.
    #[must_use]
    pub fn new(inner: M) -> Self {
        Self {
            inner,
            cache: RefCell::new(HashMap::new()),
        }
    }

    /// Number of distinct measurements stored.
    #[must_use]
    pub fn cached_entries(&self) -> usize {
        self.cache.borrow().values().map(HashMap::len).sum()
    }

    /// Drop all cached measurements, e.g. after the host's fonts changed.
    pub fn clear(&self) {
        self.cache.borrow_mut().clear();
    }

    /// The wrapped measurer.
    #[must_use]
    pub const fn inner(&self) -> &M {
        &self.inner
    }
}

impl<M: TextMeasurer> TextMeasurer for CachingMeasurer<M> {
    fn measure(&self, text: &str, font_key: &str) -> Size {
        let cached = self
            .cache
            .borrow()
            .get(font_key)
            .and_then(|by_text| by_text.get(text))
            .copied();
        if let Some(size) = cached {
            return size;
        }
        let size = self.inner.measure(text, font_key);
        let _ = self
            .cache
            .borrow_mut()
            .entry(font_key.to_string())
            .or_default()
            .insert(text.to_string(), size);
        size
    }
}
