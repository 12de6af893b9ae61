//! The box tree produced by layout.
//!
//! Every box's `position` is relative to its parent: blocks to the root,
//! lines to their block, spans to their line. The absolute position of a box
//! is the sum of its ancestors' positions. A tree is never mutated after
//! layout; a width change produces a new tree.

use serde::Serialize;

use super::box_model::{Point, Rect, Size};
use crate::style::{BlockStyle, TextStyle};

/// Identity of a box inside one box tree, as a path of indices.
///
/// Ids are only meaningful for the tree they were taken from. Holders must
/// drop them whenever the tree is replaced.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum BoxId {
    /// The root box.
    Root,
    /// A block, by paragraph index.
    Block {
        /// Index into [`RootBox::blocks`].
        block: usize,
    },
    /// A line, by paragraph and line index.
    Line {
        /// Index into [`RootBox::blocks`].
        block: usize,
        /// Index into [`BlockBox::lines`].
        line: usize,
    },
}

/// The top of the box tree, covering the whole view.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RootBox {
    /// Background and padding of the view.
    pub style: BlockStyle,
    /// Always the view origin.
    pub position: Point,
    /// Available width; height grows to contain the last block.
    pub size: Size,
    /// One block per paragraph, in document order.
    pub blocks: Vec<BlockBox>,
}

/// The laid-out representation of one paragraph.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BlockBox {
    /// The paragraph's block style.
    pub style: BlockStyle,
    /// Relative to the root.
    pub position: Point,
    /// Border box extent.
    pub size: Size,
    /// Wrapped lines, top to bottom.
    pub lines: Vec<LineBox>,
}

/// One wrapped line of a block.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LineBox {
    /// Relative to the block.
    pub position: Point,
    /// Full line width of the block by the fixed line height.
    pub size: Size,
    /// Styled text segments, left to right.
    pub spans: Vec<SpanBox>,
}

/// A contiguous run of same-styled text within a line.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SpanBox {
    /// Baseline origin, relative to the line.
    pub position: Point,
    /// Measured width of `text`.
    pub width: f32,
    /// Chunks joined by single spaces.
    pub text: String,
    /// Style of the run this span came from.
    pub style: TextStyle,
}

/// A box of the tree together with its identity.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum HitBox<'a> {
    /// The root box.
    Root(&'a RootBox),
    /// A block and its index.
    Block(usize, &'a BlockBox),
    /// A line, its block index and its line index.
    Line(usize, usize, &'a LineBox),
}

impl HitBox<'_> {
    /// The identity of this box.
    #[must_use]
    pub const fn id(&self) -> BoxId {
        match *self {
            Self::Root(_) => BoxId::Root,
            Self::Block(block, _) => BoxId::Block { block },
            Self::Line(block, line, _) => BoxId::Line { block, line },
        }
    }

    /// Position and size relative to the box's parent.
    #[must_use]
    pub const fn local_rect(&self) -> Rect {
        match self {
            Self::Root(b) => Rect::from_origin_size(b.position, b.size),
            Self::Block(_, b) => Rect::from_origin_size(b.position, b.size),
            Self::Line(_, _, b) => Rect::from_origin_size(b.position, b.size),
        }
    }
}

impl RootBox {
    /// Resolve an id taken from this tree. `None` if it does not exist here.
    #[must_use]
    pub fn get(&self, id: BoxId) -> Option<HitBox<'_>> {
        match id {
            BoxId::Root => Some(HitBox::Root(self)),
            BoxId::Block { block } => self.blocks.get(block).map(|b| HitBox::Block(block, b)),
            BoxId::Line { block, line } => self
                .blocks
                .get(block)
                .and_then(|b| b.lines.get(line))
                .map(|l| HitBox::Line(block, line, l)),
        }
    }

    /// The view-space rectangle of a box, summing ancestor positions.
    #[must_use]
    pub fn absolute_rect(&self, id: BoxId) -> Option<Rect> {
        let root_rect = Rect::from_origin_size(self.position, self.size);
        match id {
            BoxId::Root => Some(root_rect),
            BoxId::Block { block } => {
                let b = self.blocks.get(block)?;
                Some(Rect::from_origin_size(b.position + self.position, b.size))
            }
            BoxId::Line { block, line } => {
                let b = self.blocks.get(block)?;
                let l = b.lines.get(line)?;
                let origin = l.position + b.position + self.position;
                Some(Rect::from_origin_size(origin, l.size))
            }
        }
    }

    /// Total number of lines across all blocks.
    #[must_use]
    pub fn line_count(&self) -> usize {
        self.blocks.iter().map(|b| b.lines.len()).sum()
    }
}

impl LineBox {
    /// The line's text, spans joined by single spaces.
    #[must_use]
    pub fn text(&self) -> String {
        self.spans
            .iter()
            .map(|s| s.text.as_str())
            .collect::<Vec<_>>()
            .join(" ")
    }
}
