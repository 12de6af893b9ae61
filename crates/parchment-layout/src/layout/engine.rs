//! Greedy line-breaking layout.
//!
//! Each paragraph becomes one block. Its runs are split into chunks at
//! whitespace and placed left to right; a chunk that does not fit starts a
//! new line. Chunks are never split, so an over-long chunk overflows its line.

use crate::document::Paragraph;
use crate::style::{BlockStyle, TextStyle, non_negative};

use super::box_model::{Point, Size};
use super::box_tree::{BlockBox, LineBox, RootBox, SpanBox};
use super::measure::TextMeasurer;

/// Height of every line. Fonts are consulted for widths only.
pub const LINE_HEIGHT: f32 = 20.0;

/// Parameters that hold for a whole layout pass.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LayoutConfig {
    /// Style of the root box. Its padding is the view margin and the gap
    /// between consecutive blocks.
    pub root_style: BlockStyle,
    /// Fixed line height.
    pub line_height: f32,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            root_style: BlockStyle::PLAIN,
            line_height: LINE_HEIGHT,
        }
    }
}

/// Lay out `paragraphs` in `available` space with the default configuration.
#[must_use]
pub fn layout(paragraphs: &[Paragraph], available: Size, measurer: &dyn TextMeasurer) -> RootBox {
    layout_with_config(paragraphs, available, measurer, &LayoutConfig::default())
}

/// Lay out `paragraphs` in `available` space.
///
/// Pure function of its inputs: the same inputs always give the same tree.
/// Negative or NaN sizes are treated as 0 and produce minimal boxes.
#[must_use]
pub fn layout_with_config(
    paragraphs: &[Paragraph],
    available: Size,
    measurer: &dyn TextMeasurer,
    config: &LayoutConfig,
) -> RootBox {
    let root_style = config.root_style.sanitized();
    let line_height = non_negative(config.line_height);
    let available = Size::new(non_negative(available.width), non_negative(available.height));
    let root_pad = root_style.padding_width;
    let block_width = non_negative(available.width - 2.0 * root_pad);

    let mut blocks = Vec::with_capacity(paragraphs.len());
    let mut y = root_pad;
    for paragraph in paragraphs {
        let block = layout_block(
            paragraph,
            Point::new(root_pad, y),
            block_width,
            line_height,
            measurer,
        );
        y = block.position.y + block.size.height + root_pad;
        blocks.push(block);
    }

    let content_bottom = if blocks.is_empty() { 2.0 * root_pad } else { y };
    let root = RootBox {
        style: root_style,
        position: Point::default(),
        size: Size::new(available.width, available.height.max(content_bottom)),
        blocks,
    };
    log::debug!(
        target: "parchment::layout",
        "laid out {} blocks, {} lines, root {}x{}",
        root.blocks.len(),
        root.line_count(),
        root.size.width,
        root.size.height
    );
    root
}

fn layout_block(
    paragraph: &Paragraph,
    position: Point,
    block_width: f32,
    line_height: f32,
    measurer: &dyn TextMeasurer,
) -> BlockBox {
    let style = paragraph.style.sanitized();
    let pad = style.padding_width;
    let line_width = non_negative(block_width - 2.0 * pad);

    let mut breaker = LineBreaker::new(line_width, line_height, pad);
    for run in &paragraph.runs {
        let font = run.style.font_key();
        let space = measurer.measure(" ", font).width;
        for chunk in chunks(&run.text) {
            let width = measurer.measure(chunk, font).width;
            breaker.push_chunk(chunk, width, space, &run.style);
        }
        breaker.end_run();
    }
    let lines = breaker.finish();

    #[allow(clippy::cast_precision_loss)]
    let line_rows = lines.len().max(1) as f32;
    BlockBox {
        style,
        position,
        size: Size::new(block_width, 2.0 * pad + line_rows * line_height),
        lines,
    }
}

/// Split text into chunks: maximal runs of non-whitespace characters.
#[must_use]
pub fn chunks(text: &str) -> impl Iterator<Item = &str> {
    text.split_whitespace()
}

/// Accumulates chunks into lines for one block.
struct LineBreaker {
    line_width: f32,
    line_height: f32,
    padding: f32,
    lines: Vec<LineBox>,
    /// Finished spans of the current line.
    spans: Vec<SpanBox>,
    /// Text of the span being built for the current run on the current line.
    span_text: String,
    span_style: Option<TextStyle>,
    span_x: f32,
    /// Width used on the current line, separators included.
    used: f32,
    line_y: f32,
}

impl LineBreaker {
    fn new(line_width: f32, line_height: f32, padding: f32) -> Self {
        Self {
            line_width,
            line_height,
            padding,
            lines: Vec::new(),
            spans: Vec::new(),
            span_text: String::new(),
            span_style: None,
            span_x: 0.0,
            used: 0.0,
            line_y: padding,
        }
    }

    fn line_is_empty(&self) -> bool {
        self.spans.is_empty() && self.span_text.is_empty()
    }

    fn push_chunk(&mut self, chunk: &str, width: f32, space: f32, style: &TextStyle) {
        if self.line_is_empty() {
            self.place(chunk, width, 0.0, style);
            return;
        }
        // Inclusive so a line exactly as wide as its content keeps it.
        if self.used + space + width <= self.line_width {
            self.place(chunk, width, space, style);
        } else {
            #[cfg(feature = "layout-trace")]
            log::trace!(
                target: "parchment::layout",
                "break before {chunk:?}: {} + {space} + {width} > {}",
                self.used,
                self.line_width
            );
            self.flush_line();
            self.place(chunk, width, 0.0, style);
        }
    }

    fn place(&mut self, chunk: &str, width: f32, separator: f32, style: &TextStyle) {
        #[cfg(feature = "layout-trace")]
        log::trace!(target: "parchment::layout", "place {chunk:?} at {}", self.used + separator);
        if self.span_text.is_empty() {
            self.span_x = self.used + separator;
            self.span_style = Some(style.clone());
        } else {
            self.span_text.push(' ');
        }
        self.span_text.push_str(chunk);
        self.used += separator + width;
    }

    /// Close the span of the current run; the next run starts a new span.
    fn end_run(&mut self) {
        if self.span_text.is_empty() {
            return;
        }
        let text = std::mem::take(&mut self.span_text);
        let style = self.span_style.take().unwrap_or_default();
        self.spans.push(SpanBox {
            position: Point::new(self.span_x, self.line_height),
            width: self.used - self.span_x,
            text,
            style,
        });
    }

    fn flush_line(&mut self) {
        self.end_run();
        if self.spans.is_empty() {
            return;
        }
        self.lines.push(LineBox {
            position: Point::new(self.padding, self.line_y),
            size: Size::new(self.line_width, self.line_height),
            spans: std::mem::take(&mut self.spans),
        });
        self.line_y += self.line_height;
        self.used = 0.0;
    }

    fn finish(mut self) -> Vec<LineBox> {
        self.flush_line();
        self.lines
    }
}
