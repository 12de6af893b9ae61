use core::fmt;

use parchment_common::warning::warn_once;
use parchment_dom::{AttributesMap, DomTree, ElementData, NodeId, NodeType};

use crate::tokenizer::Token;

/// A recoverable problem found while building the tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseIssue {
    /// Human-readable description.
    pub message: String,
    /// Index into the token stream where this issue was encountered.
    pub token_index: usize,
    /// `true` for malformed structure (stray or misnested close tags),
    /// `false` for tolerated omissions (elements left open at end of input).
    pub is_error: bool,
}

/// Builds an element tree from a token stream.
///
/// The builder keeps an explicit stack of open elements seeded with the
/// synthetic root:
/// - `Open` appends an element to the stack top and pushes it.
/// - `Empty` appends a childless element and does not push.
/// - `Text` appends a text node with the literal value.
/// - `Close` pops up to and including the nearest open element with the
///   same name. A close tag with no match is ignored. The root is never popped.
pub struct TreeBuilder {
    /// Stores `NodeId`s into the arena. Index 0 is always `NodeId::ROOT`.
    stack_of_open_elements: Vec<NodeId>,

    /// `NodeId::ROOT` (index 0) is the synthetic `root` element.
    tree: DomTree,

    /// Input tokens from the tokenizer.
    tokens: Vec<Token>,

    /// Current position in token stream.
    token_index: usize,

    /// Parse issues (errors and warnings) encountered during building.
    issues: Vec<ParseIssue>,
}

impl TreeBuilder {
    /// Create a new builder from a token stream.
    #[must_use]
    pub fn new(tokens: Vec<Token>) -> Self {
        Self {
            stack_of_open_elements: vec![NodeId::ROOT],
            tree: DomTree::new(),
            tokens,
            token_index: 0,
            issues: Vec::new(),
        }
    }

    /// Run the builder and return the tree.
    #[must_use]
    pub fn run(self) -> DomTree {
        self.run_with_issues().0
    }

    /// Run the builder and return both the tree and any parse issues.
    #[must_use]
    pub fn run_with_issues(mut self) -> (DomTree, Vec<ParseIssue>) {
        let tokens = std::mem::take(&mut self.tokens);
        for (index, token) in tokens.into_iter().enumerate() {
            self.token_index = index;
            self.process_token(token);
        }
        self.finish();
        (self.tree, self.issues)
    }

    fn process_token(&mut self, token: Token) {
        match token {
            Token::Open { name, attributes } => {
                let id = self.insert_element(ElementData::new(name, attributes));
                self.stack_of_open_elements.push(id);
            }
            Token::Empty { name } => {
                let _ = self.insert_element(ElementData::new(name, AttributesMap::new()));
            }
            Token::Text { value } => {
                let parent = self.current_node();
                let id = self.tree.alloc(NodeType::Text(value));
                self.tree.append_child(parent, id);
            }
            Token::Close { name } => self.handle_close_tag(&name),
        }
    }

    /// The stack top, or the root if only the root is open.
    fn current_node(&self) -> NodeId {
        self.stack_of_open_elements
            .last()
            .copied()
            .unwrap_or(NodeId::ROOT)
    }

    fn insert_element(&mut self, data: ElementData) -> NodeId {
        let parent = self.current_node();
        let id = self.tree.alloc(NodeType::Element(data));
        self.tree.append_child(parent, id);
        id
    }

    fn tag_name_of(&self, id: NodeId) -> String {
        self.tree
            .as_element(id)
            .map(|data| data.tag_name.clone())
            .unwrap_or_default()
    }

    fn handle_close_tag(&mut self, name: &str) {
        // Index 0 is the synthetic root; it never matches and is never popped.
        let matching = self
            .stack_of_open_elements
            .iter()
            .enumerate()
            .skip(1)
            .rev()
            .find(|&(_, &id)| {
                self.tree
                    .as_element(id)
                    .is_some_and(|data| data.has_tag_name(name))
            })
            .map(|(index, _)| index);

        let Some(index) = matching else {
            self.parse_error(format!("ignored stray close tag </{name}>"));
            return;
        };

        let implicitly_closed: Vec<NodeId> = self.stack_of_open_elements[index + 1..].to_vec();
        for id in implicitly_closed.into_iter().rev() {
            let open = self.tag_name_of(id);
            self.parse_error(format!("<{open}> implicitly closed by </{name}>"));
        }
        self.stack_of_open_elements.truncate(index);
    }

    /// Report every element other than the root still open at end of input.
    fn finish(&mut self) {
        let still_open: Vec<NodeId> = self.stack_of_open_elements.drain(1..).collect();
        for id in still_open.into_iter().rev() {
            let open = self.tag_name_of(id);
            self.parse_warning(format!("<{open}> not closed before end of input"));
        }
    }

    /// Record a structural parse error. Logged once via the warning system.
    fn parse_error(&mut self, message: String) {
        warn_once("markup", &message);
        self.issues.push(ParseIssue {
            message,
            token_index: self.token_index,
            is_error: true,
        });
    }

    /// Record a tolerated omission. Logged once via the warning system.
    fn parse_warning(&mut self, message: String) {
        warn_once("markup", &message);
        self.issues.push(ParseIssue {
            message,
            token_index: self.token_index,
            is_error: false,
        });
    }
}

/// Build a tree from `tokens`, discarding the issue list.
#[must_use]
pub fn build(tokens: Vec<Token>) -> DomTree {
    TreeBuilder::new(tokens).run()
}

/// Write an indented dump of the subtree at `id`.
///
/// # Errors
///
/// Propagates errors from `out`.
pub fn write_tree(
    tree: &DomTree,
    id: NodeId,
    indent: usize,
    out: &mut impl fmt::Write,
) -> fmt::Result {
    let prefix = "  ".repeat(indent);
    let Some(node) = tree.get(id) else {
        return Ok(());
    };
    match &node.node_type {
        NodeType::Element(data) => {
            if data.attrs.is_empty() {
                writeln!(out, "{prefix}<{}>", data.tag_name)?;
            } else {
                let mut attrs: Vec<String> = data
                    .attrs
                    .iter()
                    .map(|(k, v)| format!("{k}=\"{v}\""))
                    .collect();
                attrs.sort();
                writeln!(out, "{prefix}<{} {}>", data.tag_name, attrs.join(" "))?;
            }
        }
        NodeType::Text(data) => {
            let display = data.replace('\n', "\\n").replace(' ', "\u{00B7}");
            writeln!(out, "{prefix}\"{display}\"")?;
        }
    }
    for &child_id in tree.children(id) {
        write_tree(tree, child_id, indent + 1, out)?;
    }
    Ok(())
}
