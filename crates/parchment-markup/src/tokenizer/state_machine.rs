use strum_macros::Display;

use super::error::{ParseError, ParseErrorKind};
use super::token::Token;

/// The tokenizer state machine. Each state corresponds to one position in
/// the markup grammar:
///
/// ```text
/// ident   = letter (letter|digit)*
/// Open    = "<" ident Atts ">"
/// Close   = "<" "/" ident ">"
/// Empty   = "<" ident "/" ">"
/// Atts    = (Att (" " Att)*)?
/// Att     = ident "=" ( "'" (not "'")* "'" | '"' (not '"')* '"' )
/// Text    = (not "<")+
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
pub enum TokenizerState {
    /// Between tags, accumulating a text run.
    Text,
    /// After `<`.
    TagOpen,
    /// After `</`.
    CloseTagOpen,
    /// Inside the name of an open tag.
    TagName,
    /// Inside the name of a close tag.
    CloseTagName,
    /// Whitespace after a close tag's name.
    AfterCloseTagName,
    /// Whitespace after a tag name or after an attribute value.
    BeforeAttributeName,
    /// Inside an attribute name.
    AttributeName,
    /// Whitespace between an attribute name and `=`.
    AfterAttributeName,
    /// After `=`, waiting for the opening quote.
    BeforeAttributeValue,
    /// Inside `"..."`.
    AttributeValueDoubleQuoted,
    /// Inside `'...'`.
    AttributeValueSingleQuoted,
    /// Right after the closing quote of an attribute value.
    AfterAttributeValueQuoted,
    /// After the `/` of `<name/`.
    SelfClosingTag,
}

/// Converts markup into a flat token stream.
///
/// Tokenization is all-or-nothing: the first position that matches no
/// grammar rule stops the machine with a [`ParseError`].
pub struct MarkupTokenizer {
    pub(super) state: TokenizerState,
    pub(super) input: String,
    pub(super) current_pos: usize,
    pub(super) current_input_character: Option<char>,
    /// Byte offset of `current_input_character`, used for error positions.
    pub(super) current_char_offset: usize,
    pub(super) current_token: Option<Token>,
    pub(super) text_buffer: String,
    pub(super) current_attribute_name: String,
    pub(super) current_attribute_value: String,
    pub(super) at_eof: bool,
    pub(super) token_stream: Vec<Token>,
    // When true, the next iteration of the main loop will not consume a new character.
    pub(super) reconsume: bool,
}

impl MarkupTokenizer {
    /// Create a new tokenizer for the given input. The initial state is `Text`.
    #[must_use]
    pub const fn new(input: String) -> Self {
        Self {
            state: TokenizerState::Text,
            input,
            current_pos: 0,
            current_input_character: None,
            current_char_offset: 0,
            current_token: None,
            text_buffer: String::new(),
            current_attribute_name: String::new(),
            current_attribute_value: String::new(),
            at_eof: false,
            token_stream: Vec::new(),
            reconsume: false,
        }
    }

    /// Consume the tokenizer and return the token stream.
    /// Call this after [`run`](Self::run) succeeded.
    #[must_use]
    pub fn into_tokens(self) -> Vec<Token> {
        self.token_stream
    }

    /// Run the tokenizer to completion.
    ///
    /// # Errors
    ///
    /// Returns a [`ParseError`] at the first position that does not match
    /// the grammar. The token stream is then incomplete and should be dropped.
    pub fn run(&mut self) -> Result<(), ParseError> {
        while !self.at_eof {
            // Each state begins by consuming the next input character,
            // unless we're reconsuming from a previous state transition.
            if self.reconsume {
                self.reconsume = false;
            } else {
                self.current_char_offset = self.current_pos;
                self.current_input_character = self.consume();
            }

            match self.state {
                TokenizerState::Text => self.handle_text_state(),
                TokenizerState::TagOpen => self.handle_tag_open_state()?,
                TokenizerState::CloseTagOpen => self.handle_close_tag_open_state()?,
                TokenizerState::TagName => self.handle_tag_name_state()?,
                TokenizerState::CloseTagName => self.handle_close_tag_name_state()?,
                TokenizerState::AfterCloseTagName => self.handle_after_close_tag_name_state()?,
                TokenizerState::BeforeAttributeName => {
                    self.handle_before_attribute_name_state()?;
                }
                TokenizerState::AttributeName => self.handle_attribute_name_state()?,
                TokenizerState::AfterAttributeName => self.handle_after_attribute_name_state()?,
                TokenizerState::BeforeAttributeValue => {
                    self.handle_before_attribute_value_state()?;
                }
                TokenizerState::AttributeValueDoubleQuoted => {
                    self.handle_attribute_value_quoted_state('"')?;
                }
                TokenizerState::AttributeValueSingleQuoted => {
                    self.handle_attribute_value_quoted_state('\'')?;
                }
                TokenizerState::AfterAttributeValueQuoted => {
                    self.handle_after_attribute_value_quoted_state()?;
                }
                TokenizerState::SelfClosingTag => self.handle_self_closing_tag_state()?,
            }
        }
        Ok(())
    }

    /// `Text = (not "<")+`
    fn handle_text_state(&mut self) {
        match self.current_input_character {
            Some('<') => {
                self.flush_text();
                self.switch_to(TokenizerState::TagOpen);
            }
            None => {
                self.flush_text();
                self.at_eof = true;
            }
            Some(c) => self.text_buffer.push(c),
        }
    }

    /// After `<`: either a close tag or the first letter of a tag name.
    fn handle_tag_open_state(&mut self) -> Result<(), ParseError> {
        match self.current_input_character {
            Some('/') => {
                self.switch_to(TokenizerState::CloseTagOpen);
                Ok(())
            }
            Some(c) if Self::is_ident_start(c) => {
                self.current_token = Some(Token::new_open());
                self.reconsume_in(TokenizerState::TagName);
                Ok(())
            }
            _ => Err(self.unexpected("tag name or '/'")),
        }
    }

    /// After `</`: the first letter of the closed tag's name.
    fn handle_close_tag_open_state(&mut self) -> Result<(), ParseError> {
        match self.current_input_character {
            Some(c) if Self::is_ident_start(c) => {
                self.current_token = Some(Token::new_close());
                self.reconsume_in(TokenizerState::CloseTagName);
                Ok(())
            }
            _ => Err(self.unexpected("tag name")),
        }
    }

    fn handle_tag_name_state(&mut self) -> Result<(), ParseError> {
        match self.current_input_character {
            Some(c) if Self::is_ident_continue(c) => {
                self.append_to_tag_name(c);
                Ok(())
            }
            Some(c) if Self::is_whitespace_char(c) => {
                self.switch_to(TokenizerState::BeforeAttributeName);
                Ok(())
            }
            Some('/') => {
                self.switch_to(TokenizerState::SelfClosingTag);
                Ok(())
            }
            Some('>') => {
                self.emit_token();
                self.switch_to(TokenizerState::Text);
                Ok(())
            }
            _ => Err(self.unexpected("letter, digit, whitespace, '/' or '>'")),
        }
    }

    fn handle_close_tag_name_state(&mut self) -> Result<(), ParseError> {
        match self.current_input_character {
            Some(c) if Self::is_ident_continue(c) => {
                self.append_to_tag_name(c);
                Ok(())
            }
            Some(c) if Self::is_whitespace_char(c) => {
                self.switch_to(TokenizerState::AfterCloseTagName);
                Ok(())
            }
            Some('>') => {
                self.emit_token();
                self.switch_to(TokenizerState::Text);
                Ok(())
            }
            _ => Err(self.unexpected("letter, digit or '>'")),
        }
    }

    fn handle_after_close_tag_name_state(&mut self) -> Result<(), ParseError> {
        match self.current_input_character {
            Some(c) if Self::is_whitespace_char(c) => Ok(()),
            Some('>') => {
                self.emit_token();
                self.switch_to(TokenizerState::Text);
                Ok(())
            }
            _ => Err(self.unexpected("'>'")),
        }
    }

    /// Whitespace seen after a tag name or attribute: another attribute may follow.
    fn handle_before_attribute_name_state(&mut self) -> Result<(), ParseError> {
        match self.current_input_character {
            Some(c) if Self::is_whitespace_char(c) => Ok(()),
            Some(c) if Self::is_ident_start(c) => {
                self.start_new_attribute();
                self.reconsume_in(TokenizerState::AttributeName);
                Ok(())
            }
            Some('/') => {
                self.switch_to(TokenizerState::SelfClosingTag);
                Ok(())
            }
            Some('>') => {
                self.emit_token();
                self.switch_to(TokenizerState::Text);
                Ok(())
            }
            _ => Err(self.unexpected("attribute name, '/' or '>'")),
        }
    }

    fn handle_attribute_name_state(&mut self) -> Result<(), ParseError> {
        match self.current_input_character {
            Some(c) if Self::is_ident_continue(c) => {
                self.current_attribute_name.push(c);
                Ok(())
            }
            Some(c) if Self::is_whitespace_char(c) => {
                self.switch_to(TokenizerState::AfterAttributeName);
                Ok(())
            }
            Some('=') => {
                self.switch_to(TokenizerState::BeforeAttributeValue);
                Ok(())
            }
            _ => Err(self.unexpected("'='")),
        }
    }

    fn handle_after_attribute_name_state(&mut self) -> Result<(), ParseError> {
        match self.current_input_character {
            Some(c) if Self::is_whitespace_char(c) => Ok(()),
            Some('=') => {
                self.switch_to(TokenizerState::BeforeAttributeValue);
                Ok(())
            }
            _ => Err(self.unexpected("'='")),
        }
    }

    /// Values must be quoted; unquoted values are not part of the grammar.
    fn handle_before_attribute_value_state(&mut self) -> Result<(), ParseError> {
        match self.current_input_character {
            Some(c) if Self::is_whitespace_char(c) => Ok(()),
            Some('"') => {
                self.switch_to(TokenizerState::AttributeValueDoubleQuoted);
                Ok(())
            }
            Some('\'') => {
                self.switch_to(TokenizerState::AttributeValueSingleQuoted);
                Ok(())
            }
            _ => Err(self.unexpected("quoted attribute value")),
        }
    }

    fn handle_attribute_value_quoted_state(&mut self, quote: char) -> Result<(), ParseError> {
        match self.current_input_character {
            Some(c) if c == quote => {
                self.commit_attribute();
                self.switch_to(TokenizerState::AfterAttributeValueQuoted);
                Ok(())
            }
            Some(c) => {
                self.current_attribute_value.push(c);
                Ok(())
            }
            None => Err(self.error(ParseErrorKind::UnterminatedAttributeValue { quote })),
        }
    }

    /// Attributes must be separated by whitespace: `a='1'b='2'` is rejected.
    fn handle_after_attribute_value_quoted_state(&mut self) -> Result<(), ParseError> {
        match self.current_input_character {
            Some(c) if Self::is_whitespace_char(c) => {
                self.switch_to(TokenizerState::BeforeAttributeName);
                Ok(())
            }
            Some('/') => {
                self.switch_to(TokenizerState::SelfClosingTag);
                Ok(())
            }
            Some('>') => {
                self.emit_token();
                self.switch_to(TokenizerState::Text);
                Ok(())
            }
            _ => Err(self.unexpected("whitespace, '/' or '>'")),
        }
    }

    fn handle_self_closing_tag_state(&mut self) -> Result<(), ParseError> {
        match self.current_input_character {
            Some(c) if Self::is_whitespace_char(c) => Ok(()),
            Some('>') => {
                if self.current_token.as_ref().is_some_and(Token::has_attributes) {
                    let name = self
                        .current_token
                        .as_ref()
                        .and_then(Token::tag_name)
                        .unwrap_or_default()
                        .to_string();
                    return Err(self.error(ParseErrorKind::AttributesOnSelfClosingTag { name }));
                }
                self.current_token = self.current_token.take().map(Token::into_empty);
                self.emit_token();
                self.switch_to(TokenizerState::Text);
                Ok(())
            }
            _ => Err(self.unexpected("'>'")),
        }
    }
}

/// Tokenize `input` into an ordered sequence of tokens.
///
/// # Errors
///
/// Fails with a [`ParseError`] if any suffix of the input cannot be matched.
pub fn tokenize(input: &str) -> Result<Vec<Token>, ParseError> {
    let mut tokenizer = MarkupTokenizer::new(input.to_string());
    tokenizer.run()?;
    Ok(tokenizer.into_tokens())
}
