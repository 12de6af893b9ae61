//! Markup tokenizer and tree builder for the Parchment layout engine.
//!
//! # Scope
//!
//! This crate implements:
//! - **Tokenizer**: a state machine over the restricted markup grammar
//!   (open, close and self-closing tags with quoted attributes, and text runs).
//!   Input that does not match the grammar fails with a positioned [`ParseError`].
//! - **Tree builder**: reduces the token stream to a [`parchment_dom::DomTree`]
//!   under a synthetic `root` element, recovering from misnested and stray
//!   close tags by name matching.
//!
//! # Example
//!
//! ```
//! use parchment_markup::{build, tokenize};
//!
//! let tokens = tokenize("<doc><p>Hello</p></doc>").unwrap();
//! let tree = build(tokens);
//! assert_eq!(tree.text_content(tree.root()), "Hello");
//! ```

/// Tree construction.
pub mod parser;
/// Tokenizer for converting markup into tokens.
pub mod tokenizer;

pub use parser::{ParseIssue, TreeBuilder, build, write_tree};
pub use tokenizer::{MarkupTokenizer, ParseError, ParseErrorKind, Token, tokenize};
