//! Paragraph projection.
//!
//! Flattens the children of the document's wrapper element into an ordered
//! sequence of paragraphs, each a list of styled text runs. This is the
//! document model the layout engine consumes; hosts that build documents
//! programmatically construct [`Paragraph`]s directly.

use parchment_common::warning::warn_once;
use parchment_dom::{DomTree, NodeId, NodeType};
use serde::Serialize;
use thiserror::Error;

use crate::style::{BlockStyle, TextStyle, style_for_tag, text_style_for_tag};

/// A piece of text with a single style.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TextRun {
    /// The run's text. Whitespace inside is a break opportunity.
    pub text: String,
    /// Presentation of every chunk of the run.
    pub style: TextStyle,
}

impl TextRun {
    /// Create a run.
    #[must_use]
    pub fn new(text: impl Into<String>, style: TextStyle) -> Self {
        Self {
            text: text.into(),
            style,
        }
    }

    /// A run in [`TextStyle::PLAIN`].
    #[must_use]
    pub fn plain(text: impl Into<String>) -> Self {
        Self::new(text, TextStyle::PLAIN)
    }
}

/// One block of the document: styled runs flowed together.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Paragraph {
    /// Runs in reading order.
    pub runs: Vec<TextRun>,
    /// Decoration of the block this paragraph lays out into.
    pub style: BlockStyle,
}

impl Paragraph {
    /// Create a paragraph.
    #[must_use]
    pub const fn new(runs: Vec<TextRun>, style: BlockStyle) -> Self {
        Self { runs, style }
    }

    /// A plain paragraph holding a single plain run.
    #[must_use]
    pub fn plain(text: impl Into<String>) -> Self {
        Self::new(vec![TextRun::plain(text)], BlockStyle::PLAIN)
    }

    /// The paragraph's text, runs joined by single spaces.
    #[must_use]
    pub fn text(&self) -> String {
        self.runs
            .iter()
            .map(|run| run.text.as_str())
            .collect::<Vec<_>>()
            .join(" ")
    }
}

/// Failure to project an element tree into paragraphs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ProjectionError {
    /// The synthetic root has no children at all.
    ///
    /// Distinct from a document that projects to zero paragraphs; hosts
    /// usually render it as an empty view.
    #[error("document is empty")]
    EmptyDocument,
}

/// Project the tree's wrapper element into paragraphs.
///
/// The wrapper is [`DomTree::document_element`]. Every element child of the
/// wrapper becomes one paragraph styled by [`style_for_tag`]; every text child
/// with visible content becomes a plain paragraph. Whitespace-only text
/// between elements is formatting and produces nothing.
///
/// # Errors
///
/// Returns [`ProjectionError::EmptyDocument`] when the root has no children.
pub fn project(tree: &DomTree) -> Result<Vec<Paragraph>, ProjectionError> {
    if tree.children(tree.root()).is_empty() {
        return Err(ProjectionError::EmptyDocument);
    }
    let Some(wrapper) = tree.document_element() else {
        return Ok(Vec::new());
    };

    let ignored = tree
        .children(tree.root())
        .iter()
        .skip_while(|&&id| id != wrapper)
        .skip(1)
        .filter(|&&id| !tree.is_whitespace_text(id))
        .count();
    if ignored > 0 {
        warn_once(
            "layout",
            &format!("ignoring {ignored} top-level node(s) after the document wrapper"),
        );
    }

    if let Some(text) = tree.as_text(wrapper) {
        return Ok(vec![Paragraph::plain(text.trim())]);
    }

    let mut paragraphs = Vec::new();
    for &child in tree.children(wrapper) {
        match tree.get(child).map(|node| &node.node_type) {
            Some(NodeType::Text(text)) => {
                let text = text.trim();
                if !text.is_empty() {
                    paragraphs.push(Paragraph::plain(text));
                }
            }
            Some(NodeType::Element(data)) => {
                paragraphs.push(Paragraph::new(
                    runs_of(tree, child),
                    style_for_tag(&data.tag_name),
                ));
            }
            None => {}
        }
    }
    log::debug!(
        target: "parchment::layout",
        "projected {} paragraphs",
        paragraphs.len()
    );
    Ok(paragraphs)
}

/// One run per text-bearing child of a paragraph element.
fn runs_of(tree: &DomTree, paragraph: NodeId) -> Vec<TextRun> {
    tree.children(paragraph)
        .iter()
        .filter_map(|&child| match tree.get(child).map(|node| &node.node_type) {
            Some(NodeType::Text(text)) => Some(TextRun::plain(text.trim())),
            Some(NodeType::Element(data)) => Some(TextRun::new(
                collapse_whitespace(&tree.text_content(child)),
                text_style_for_tag(&data.tag_name),
            )),
            None => None,
        })
        .filter(|run| !run.text.is_empty())
        .collect()
}

fn collapse_whitespace(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}
