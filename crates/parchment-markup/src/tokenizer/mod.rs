//! Markup tokenizer module.
//!
//! A character-at-a-time state machine over the markup grammar, producing
//! `Open`, `Close`, `Empty` and `Text` tokens.

/// Tokenization errors with source positions.
pub mod error;
/// Helper methods for tokenizer state transitions.
pub mod helpers;
/// Tokenizer state machine implementation.
pub mod state_machine;
/// Token types produced by the tokenizer.
pub mod token;

pub use error::{ParseError, ParseErrorKind};
pub use state_machine::{MarkupTokenizer, TokenizerState, tokenize};
pub use token::Token;
