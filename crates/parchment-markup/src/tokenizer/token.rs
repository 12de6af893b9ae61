use core::fmt;

use parchment_dom::AttributesMap;

/// A lexical unit of markup.
///
/// Tokens carry no nesting information; the tree builder reconstructs
/// structure from their order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Token {
    /// `<name a='1' b="2">`
    Open {
        /// Tag name as written.
        name: String,
        /// Attributes in the tag. A repeated name keeps its last value.
        attributes: AttributesMap,
    },

    /// `</name>`
    Close {
        /// Tag name as written.
        name: String,
    },

    /// `<name/>`, an element with no children and no attributes.
    Empty {
        /// Tag name as written.
        name: String,
    },

    /// Everything between tags, verbatim.
    Text {
        /// The literal text, including whitespace and newlines.
        value: String,
    },
}

impl Token {
    /// Create an open tag token with an empty name and no attributes.
    #[must_use]
    pub fn new_open() -> Self {
        Self::Open {
            name: String::new(),
            attributes: AttributesMap::new(),
        }
    }

    /// Create a close tag token with an empty name.
    #[must_use]
    pub const fn new_close() -> Self {
        Self::Close {
            name: String::new(),
        }
    }

    /// The tag name of a tag token, `None` for text.
    #[must_use]
    pub fn tag_name(&self) -> Option<&str> {
        match self {
            Self::Open { name, .. } | Self::Close { name } | Self::Empty { name } => Some(name),
            Self::Text { .. } => None,
        }
    }

    /// Append a character to the tag name of a tag token.
    /// Text tokens are left untouched.
    pub fn append_to_tag_name(&mut self, c: char) {
        match self {
            Self::Open { name, .. } | Self::Close { name } | Self::Empty { name } => {
                name.push(c);
            }
            Self::Text { .. } => {}
        }
    }

    /// `true` if this is an open tag that already has at least one attribute.
    #[must_use]
    pub fn has_attributes(&self) -> bool {
        matches!(self, Self::Open { attributes, .. } if !attributes.is_empty())
    }

    /// Set an attribute on an open tag token.
    ///
    /// Returns the previous value when the name was already present.
    pub fn set_attribute(&mut self, name: String, value: String) -> Option<String> {
        match self {
            Self::Open { attributes, .. } => attributes.insert(name, value),
            _ => None,
        }
    }

    /// Turn an attribute-less open tag into an empty (self-closing) tag.
    #[must_use]
    pub fn into_empty(self) -> Self {
        match self {
            Self::Open { name, .. } => Self::Empty { name },
            other => other,
        }
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Open { name, attributes } => {
                write!(f, "<{name}")?;
                // HashMap order is unstable; sort so dumps are reproducible.
                let mut attrs: Vec<_> = attributes.iter().collect();
                attrs.sort();
                for (key, value) in attrs {
                    write!(f, " {key}=\"{value}\"")?;
                }
                write!(f, ">")
            }
            Self::Close { name } => write!(f, "</{name}>"),
            Self::Empty { name } => write!(f, "<{name}/>"),
            Self::Text { value } => write!(f, "{value:?}"),
        }
    }
}
