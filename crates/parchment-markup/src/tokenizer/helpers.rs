//! Helper functions for the markup tokenizer.
//!
//! This module contains utility functions used throughout the tokenizer:
//! - State transitions ("switch to", "reconsume in")
//! - Input/character handling and character classes
//! - Token emission, including text buffering
//! - Attribute bookkeeping and duplicate detection
//! - Error construction

use parchment_common::warning::warn_once;

use super::error::{ParseError, ParseErrorKind};
use super::state_machine::{MarkupTokenizer, TokenizerState};
use super::token::Token;

// =============================================================================
// State Transition Helpers
// =============================================================================

impl MarkupTokenizer {
    /// Transitions to a new state. The next character will be consumed on the
    /// next iteration of the main loop.
    pub(super) const fn switch_to(&mut self, new_state: TokenizerState) {
        self.state = new_state;
    }

    /// Transitions to a new state without consuming the current character.
    /// The same character will be processed again in the new state.
    pub(super) const fn reconsume_in(&mut self, new_state: TokenizerState) {
        self.reconsume = true;
        self.state = new_state;
    }
}

// =============================================================================
// Input/Character Helpers
// =============================================================================

impl MarkupTokenizer {
    /// Returns the character at the current position and advances the position.
    /// Returns None if we've reached the end of input.
    pub(super) fn consume(&mut self) -> Option<char> {
        let c = self.input[self.current_pos..].chars().next()?;
        self.current_pos += c.len_utf8();
        Some(c)
    }

    /// ASCII whitespace: tab, line feed, form feed, carriage return, space.
    pub(super) const fn is_whitespace_char(input_char: char) -> bool {
        input_char.is_ascii_whitespace()
    }

    /// `letter`: any Unicode alphabetic character.
    pub(super) fn is_ident_start(input_char: char) -> bool {
        input_char.is_alphabetic()
    }

    /// `letter | digit`, where digits are ASCII `0-9`.
    pub(super) fn is_ident_continue(input_char: char) -> bool {
        input_char.is_alphabetic() || input_char.is_ascii_digit()
    }
}

// =============================================================================
// Token Emission Helpers
// =============================================================================

impl MarkupTokenizer {
    /// Adds the current token to the output stream.
    pub(super) fn emit_token(&mut self) {
        if let Some(token) = self.current_token.take() {
            self.push_token(token);
        }
    }

    /// Emit the buffered text run, if any, as a single `Text` token.
    pub(super) fn flush_text(&mut self) {
        if !self.text_buffer.is_empty() {
            let value = std::mem::take(&mut self.text_buffer);
            self.push_token(Token::Text { value });
        }
    }

    pub(super) fn append_to_tag_name(&mut self, c: char) {
        if let Some(ref mut token) = self.current_token {
            token.append_to_tag_name(c);
        }
    }

    fn push_token(&mut self, token: Token) {
        log::trace!(target: "parchment::markup", "emit {token}");
        self.token_stream.push(token);
    }
}

// =============================================================================
// Attribute Helpers
// =============================================================================

impl MarkupTokenizer {
    pub(super) fn start_new_attribute(&mut self) {
        self.current_attribute_name.clear();
        self.current_attribute_value.clear();
    }

    /// Move the pending attribute onto the current token.
    ///
    /// A repeated attribute name keeps the last value; the repetition is
    /// reported once through the warning system.
    pub(super) fn commit_attribute(&mut self) {
        let name = std::mem::take(&mut self.current_attribute_name);
        let value = std::mem::take(&mut self.current_attribute_value);
        let Some(ref mut token) = self.current_token else {
            return;
        };
        let tag = token.tag_name().unwrap_or_default().to_string();
        if token.set_attribute(name.clone(), value).is_some() {
            warn_once(
                "markup",
                &format!("duplicate attribute '{name}' on <{tag}>, keeping the last value"),
            );
        }
    }
}

// =============================================================================
// Error Handling
// =============================================================================

impl MarkupTokenizer {
    /// Build an error of `kind` at the current input character.
    pub(super) fn error(&self, kind: ParseErrorKind) -> ParseError {
        ParseError::at(&self.input, self.current_char_offset, kind)
    }

    /// The current character is not allowed here; `expected` describes what is.
    pub(super) fn unexpected(&self, expected: &'static str) -> ParseError {
        let kind = match self.current_input_character {
            Some(found) => ParseErrorKind::UnexpectedCharacter { found, expected },
            None => ParseErrorKind::UnexpectedEof { expected },
        };
        log::debug!(
            target: "parchment::markup",
            "tokenizer stopped in {} state",
            self.state
        );
        self.error(kind)
    }
}
