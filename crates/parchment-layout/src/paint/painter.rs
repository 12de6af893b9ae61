//! Painter - walks the box tree and issues drawing calls
//!
//! Painting order for each block, back to front:
//! 1. Border (outer fill) and background (inner fill)
//! 2. Text of every span, then its underline
//! 3. Highlight outline, if the block or one of its lines is highlighted
//!
//! Positions in the box tree are relative to the parent box, so the walker
//! accumulates the origin on the way down.

use crate::layout::{BlockBox, BoxId, LineBox, Point, Rect, RootBox};
use crate::style::{BlockStyle, ColorValue};

use super::{DisplayList, Paint};

/// Outline color of the highlighted box.
pub const HIGHLIGHT_COLOR: ColorValue = ColorValue::RED;

/// Height of the underline rectangle drawn at the baseline.
pub const UNDERLINE_THICKNESS: f32 = 2.0;

/// Painter for one box tree and the currently highlighted box.
#[derive(Debug, Clone, Copy, Default)]
pub struct Painter {
    highlighted: Option<BoxId>,
}

impl Painter {
    /// Create a painter. `highlighted` must come from the tree being painted.
    #[must_use]
    pub const fn new(highlighted: Option<BoxId>) -> Self {
        Self { highlighted }
    }

    /// Paint a box tree and return the display list.
    #[must_use]
    pub fn paint(&self, root: &RootBox) -> DisplayList {
        let mut display_list = DisplayList::new();
        self.paint_onto(root, &mut display_list);
        display_list
    }

    /// Paint a box tree onto a host surface.
    pub fn paint_onto(&self, root: &RootBox, surface: &mut dyn Paint) {
        surface.fill(
            Rect::from_origin_size(root.position, root.size),
            root.style.background_color,
        );
        for (index, block) in root.blocks.iter().enumerate() {
            self.paint_block(index, block, root.position, surface);
        }
    }

    fn paint_block(&self, index: usize, block: &BlockBox, parent: Point, surface: &mut dyn Paint) {
        let origin = parent + block.position;
        let rect = Rect::from_origin_size(origin, block.size);
        paint_decoration(&block.style, rect, surface);

        for (line_index, line) in block.lines.iter().enumerate() {
            paint_line(line, origin, surface);
            if self.highlighted == Some(BoxId::Line { block: index, line: line_index }) {
                surface.stroke(
                    Rect::from_origin_size(origin + line.position, line.size),
                    HIGHLIGHT_COLOR,
                );
            }
        }

        if self.highlighted == Some(BoxId::Block { block: index }) {
            surface.stroke(rect, HIGHLIGHT_COLOR);
        }
    }
}

/// Paint `root` onto `surface`, outlining `highlighted` if it is a line or
/// a block of this tree.
pub fn paint(root: &RootBox, surface: &mut dyn Paint, highlighted: Option<BoxId>) {
    Painter::new(highlighted).paint_onto(root, surface);
}

/// Border as an outer fill, background as the inner fill inset by the
/// border width.
fn paint_decoration(style: &BlockStyle, rect: Rect, surface: &mut dyn Paint) {
    if style.border_width > 0.0 {
        surface.fill(rect, style.border_color);
        surface.fill(rect.inset(style.border_width), style.background_color);
    } else {
        surface.fill(rect, style.background_color);
    }
}

fn paint_line(line: &LineBox, parent: Point, surface: &mut dyn Paint) {
    let origin = parent + line.position;
    for span in &line.spans {
        let baseline = origin + span.position;
        surface.draw_text(
            &span.text,
            baseline.x,
            baseline.y,
            span.style.font_key(),
            span.style.color,
        );
        if span.style.underline {
            surface.fill(
                Rect::new(baseline.x, baseline.y, span.width, UNDERLINE_THICKNESS),
                span.style.color,
            );
        }
    }
}
