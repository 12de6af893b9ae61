//! High-level rich-text view API for Parchment.
//!
//! # Scope
//!
//! This crate provides:
//! - **Document Loading** - read markup, tokenize, build the element tree and
//!   project it into paragraphs
//! - **Rich-Text View** - owns one document, lays it out again when the
//!   available width changes, tracks the box under the pointer and paints
//!   the current box tree
//!
//! The host supplies text measurement ([`layout::TextMeasurer`]) and a
//! drawing surface ([`layout::Paint`]); the view never talks to a window
//! system itself.

mod view;

pub use parchment_dom as dom;
pub use parchment_layout as layout;
pub use parchment_markup as markup;

pub use view::RichTextView;

use std::fs;
use std::path::{Path, PathBuf};

use parchment_common::warning::clear_warnings;
use parchment_dom::DomTree;
use parchment_layout::{Paragraph, ProjectionError, project};
use parchment_markup::{ParseError, ParseIssue, Token, TreeBuilder, tokenize};
use thiserror::Error;

/// A fully loaded and parsed document.
///
/// Keeps every intermediate stage so hosts and tools can inspect them.
#[derive(Debug, Clone)]
pub struct LoadedDocument {
    /// Original markup source
    pub source: String,

    /// Source path, empty for markup given as a string
    pub source_path: String,

    /// Markup tokens (for debugging)
    pub tokens: Vec<Token>,

    /// Element tree under the synthetic root
    pub dom: DomTree,

    /// Recovered tree-building problems
    pub parse_issues: Vec<ParseIssue>,

    /// Paragraphs ready for layout
    pub paragraphs: Vec<Paragraph>,
}

/// Error type for document loading.
#[derive(Debug, Error)]
pub enum LoadError {
    /// Failed to read file
    #[error("failed to read '{}'", path.display())]
    File {
        /// The path that could not be read.
        path: PathBuf,
        /// The underlying I/O error.
        #[source]
        source: std::io::Error,
    },
    /// The markup does not match the grammar
    #[error(transparent)]
    Parse(#[from] ParseError),
    /// The markup parsed to an empty document
    #[error(transparent)]
    Projection(#[from] ProjectionError),
}

/// Load a document from a file path.
///
/// # Errors
///
/// Returns [`LoadError::File`] if the file cannot be read, otherwise any
/// error of [`parse_markup_string`].
pub fn load_document(path: impl AsRef<Path>) -> Result<LoadedDocument, LoadError> {
    let path = path.as_ref();
    let source = fs::read_to_string(path).map_err(|source| LoadError::File {
        path: path.to_path_buf(),
        source,
    })?;
    let mut doc = parse_markup_string(&source)?;
    doc.source_path = path.display().to_string();
    Ok(doc)
}

/// Parse a markup string into a [`LoadedDocument`].
///
/// Resets deduplicated warnings, so problems in this document are reported
/// even if an earlier document had the same ones.
///
/// # Errors
///
/// Returns [`LoadError::Parse`] if tokenization fails and
/// [`LoadError::Projection`] if the document is empty.
pub fn parse_markup_string(markup: &str) -> Result<LoadedDocument, LoadError> {
    clear_warnings();

    let tokens = tokenize(markup)?;
    let (dom, parse_issues) = TreeBuilder::new(tokens.clone()).run_with_issues();
    let paragraphs = project(&dom)?;
    log::debug!(
        target: "parchment::view",
        "loaded {} tokens, {} nodes, {} paragraphs, {} issues",
        tokens.len(),
        dom.node_count(),
        paragraphs.len(),
        parse_issues.len()
    );

    Ok(LoadedDocument {
        source: markup.to_string(),
        source_path: String::new(),
        tokens,
        dom,
        parse_issues,
        paragraphs,
    })
}

/// Tokenize, build and project `markup` into paragraphs.
///
/// # Errors
///
/// Same as [`parse_markup_string`].
pub fn parse_document(markup: &str) -> Result<Vec<Paragraph>, LoadError> {
    parse_markup_string(markup).map(|doc| doc.paragraphs)
}
