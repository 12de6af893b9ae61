use thiserror::Error;

/// What went wrong when the input stopped matching the markup grammar.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseErrorKind {
    /// Input ended in the middle of a tag.
    #[error("unexpected end of input, expected {expected}")]
    UnexpectedEof {
        /// What the grammar required at this point.
        expected: &'static str,
    },

    /// A character that no grammar rule allows at this point.
    #[error("unexpected character {found:?}, expected {expected}")]
    UnexpectedCharacter {
        /// The offending character.
        found: char,
        /// What the grammar required at this point.
        expected: &'static str,
    },

    /// A quoted attribute value with no closing quote.
    #[error("unterminated attribute value, missing closing {quote}")]
    UnterminatedAttributeValue {
        /// The quote character that opened the value.
        quote: char,
    },

    /// `<name a='1'/>`: self-closing tags cannot carry attributes.
    #[error("self-closing tag <{name}/> cannot carry attributes")]
    AttributesOnSelfClosingTag {
        /// The tag's name.
        name: String,
    },
}

/// Tokenization failure. No partial token stream is produced.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{kind} at line {line}, column {column}")]
pub struct ParseError {
    /// Byte offset into the input where matching failed.
    pub offset: usize,
    /// 1-based line of `offset`.
    pub line: usize,
    /// 1-based column of `offset`, counted in characters.
    pub column: usize,
    /// The failure itself.
    pub kind: ParseErrorKind,
}

impl ParseError {
    /// Build an error at `offset` in `input`, computing line and column.
    #[must_use]
    pub fn at(input: &str, offset: usize, kind: ParseErrorKind) -> Self {
        let offset = offset.min(input.len());
        let before = input.get(..offset).unwrap_or(input);
        let line = before.matches('\n').count() + 1;
        let line_start = before.rfind('\n').map_or(0, |i| i + 1);
        let column = before[line_start..].chars().count() + 1;
        Self {
            offset,
            line,
            column,
            kind,
        }
    }
}
