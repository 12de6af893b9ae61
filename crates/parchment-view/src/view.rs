//! The rich-text view: one document, its current box tree and the box
//! under the pointer.
//!
//! The box tree is replaced wholesale on every layout and the highlight is
//! cleared with it, so a [`BoxId`] held by the view always refers to the
//! tree it came from.

use parchment_layout::{
    BoxId, LayoutConfig, Paint, Paragraph, Point, RootBox, Size, TextMeasurer, find_box,
    layout_with_config, paint,
};

use crate::{LoadError, parse_document};

/// A view that displays one document.
///
/// Hosts call [`RichTextView::layout`] whenever the view may have been
/// resized, [`RichTextView::pointer_move`] on pointer motion and
/// [`RichTextView::draw`] on repaint.
#[derive(Debug, Clone, Default)]
pub struct RichTextView {
    paragraphs: Vec<Paragraph>,
    config: LayoutConfig,
    box_tree: Option<RootBox>,
    /// Width of the last layout; `None` forces the next layout to run.
    laid_out_width: Option<f32>,
    highlighted: Option<BoxId>,
    layout_passes: usize,
}

impl RichTextView {
    /// An empty view.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// A view over `paragraphs`, laid out with `config`.
    #[must_use]
    pub fn with_config(paragraphs: Vec<Paragraph>, config: LayoutConfig) -> Self {
        Self {
            paragraphs,
            config,
            ..Self::default()
        }
    }

    /// Parse `markup` and show it.
    ///
    /// # Errors
    ///
    /// Returns the [`LoadError`] of [`parse_document`]; nothing is shown.
    pub fn from_markup(markup: &str) -> Result<Self, LoadError> {
        let mut view = Self::new();
        view.set_document(parse_document(markup)?);
        Ok(view)
    }

    /// Replace the document. The next [`RichTextView::layout`] always runs.
    pub fn set_document(&mut self, paragraphs: Vec<Paragraph>) {
        self.paragraphs = paragraphs;
        self.invalidate();
    }

    /// The paragraphs being shown.
    #[must_use]
    pub fn document(&self) -> &[Paragraph] {
        &self.paragraphs
    }

    /// Force the next [`RichTextView::layout`] to run, e.g. after the host's
    /// fonts changed.
    pub fn invalidate(&mut self) {
        self.laid_out_width = None;
    }

    /// Lay the document out if the available width changed since the last
    /// layout, or the document did.
    ///
    /// A new tree replaces the old one in a single assignment and the
    /// highlight is cleared. Returns the content size: the available width
    /// and the root height.
    pub fn layout(&mut self, available: Size, measurer: &dyn TextMeasurer) -> Size {
        if let (Some(width), Some(tree)) = (self.laid_out_width, &self.box_tree)
            && width.to_bits() == available.width.to_bits()
        {
            return tree.size;
        }

        let tree = layout_with_config(&self.paragraphs, available, measurer, &self.config);
        let size = tree.size;
        self.box_tree = Some(tree);
        self.highlighted = None;
        self.laid_out_width = Some(available.width);
        self.layout_passes += 1;
        log::debug!(
            target: "parchment::view",
            "layout pass {} at width {}",
            self.layout_passes,
            available.width
        );
        size
    }

    /// Hit-test `point` and remember the box under it.
    ///
    /// Returns `true` if the highlighted box changed and the host should
    /// repaint. Before the first layout nothing can be hit.
    pub fn pointer_move(&mut self, point: Point) -> bool {
        let hit = self
            .box_tree
            .as_ref()
            .and_then(|tree| find_box(tree, point))
            .map(|hit| hit.id());
        self.set_highlighted(hit)
    }

    /// The pointer left the view. Returns `true` if a highlight was cleared.
    pub fn pointer_leave(&mut self) -> bool {
        self.set_highlighted(None)
    }

    fn set_highlighted(&mut self, id: Option<BoxId>) -> bool {
        if self.highlighted == id {
            return false;
        }
        log::trace!(target: "parchment::view", "highlight {:?} -> {id:?}", self.highlighted);
        self.highlighted = id;
        true
    }

    /// Paint the current box tree. Does nothing before the first layout.
    pub fn draw(&self, surface: &mut dyn Paint) {
        if let Some(tree) = &self.box_tree {
            paint(tree, surface, self.highlighted);
        }
    }

    /// The current box tree, if the view has been laid out.
    #[must_use]
    pub const fn box_tree(&self) -> Option<&RootBox> {
        self.box_tree.as_ref()
    }

    /// The box under the pointer, as of the last [`RichTextView::pointer_move`].
    #[must_use]
    pub const fn highlighted(&self) -> Option<BoxId> {
        self.highlighted
    }

    /// Number of layouts actually performed.
    #[must_use]
    pub const fn layout_passes(&self) -> usize {
        self.layout_passes
    }
}
