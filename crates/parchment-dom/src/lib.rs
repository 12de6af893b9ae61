//! Element tree for parsed Parchment markup.
//!
//! The tree builder reduces a flat token stream to this tree; the layout
//! crate projects it into paragraphs. After building, the tree is read-only.
//!
//! # Design
//!
//! The tree uses arena allocation with [`NodeId`] indices for all relationships,
//! providing O(1) access and traversal without borrow checker issues. Node 0 is
//! always the synthetic `root` element that holds all top-level content.

use std::collections::HashMap;

/// Map of attribute names to values for an element.
pub type AttributesMap = HashMap<String, String>;

/// Tag name of the synthetic element at [`NodeId::ROOT`].
pub const ROOT_ELEMENT_NAME: &str = "root";

/// A type-safe index into the element tree.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NodeId(pub usize);

impl NodeId {
    /// The synthetic root element is always at index 0.
    pub const ROOT: Self = Self(0);
}

/// A node in the arena: its payload plus its place in the tree.
#[derive(Debug, Clone)]
pub struct Node {
    /// Element or text payload.
    pub node_type: NodeType,
    /// Parent element, `None` for the root and for detached nodes.
    pub parent: Option<NodeId>,
    /// Ordered children; only elements have any.
    pub children: Vec<NodeId>,
}

/// The two kinds of node the markup can produce.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NodeType {
    /// A named element with attributes and ordered children.
    Element(ElementData),
    /// A run of literal text, kept exactly as it appeared in the source.
    Text(String),
}

/// Element-specific data.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ElementData {
    /// The element's tag name, as written in the source.
    pub tag_name: String,
    /// The element's attributes.
    pub attrs: AttributesMap,
}

impl ElementData {
    /// Create element data with the given name and attributes.
    #[must_use]
    pub fn new(tag_name: impl Into<String>, attrs: AttributesMap) -> Self {
        Self {
            tag_name: tag_name.into(),
            attrs,
        }
    }

    /// ASCII case-insensitive tag name comparison.
    #[must_use]
    pub fn has_tag_name(&self, name: &str) -> bool {
        self.tag_name.eq_ignore_ascii_case(name)
    }
}

/// Arena-based element tree with O(1) node access and traversal.
///
/// All nodes live in a contiguous vector and refer to each other by index:
/// - O(1) access to any node by `NodeId`
/// - O(1) parent traversal
/// - No borrowing issues (indices instead of references)
#[derive(Debug, Clone)]
pub struct DomTree {
    /// All nodes in the tree, indexed by `NodeId`.
    /// The synthetic root element is always at index 0 (`NodeId::ROOT`).
    nodes: Vec<Node>,
}

impl DomTree {
    /// Create a new tree holding only the synthetic `root` element.
    #[must_use]
    pub fn new() -> Self {
        let root = Node {
            node_type: NodeType::Element(ElementData::new(
                ROOT_ELEMENT_NAME,
                AttributesMap::new(),
            )),
            parent: None,
            children: Vec::new(),
        };
        Self { nodes: vec![root] }
    }

    /// Get the root element ID.
    #[must_use]
    pub const fn root(&self) -> NodeId {
        NodeId::ROOT
    }

    /// Get a node by its ID.
    #[must_use]
    pub fn get(&self, id: NodeId) -> Option<&Node> {
        self.nodes.get(id.0)
    }

    /// Number of nodes in the tree, including the root.
    #[must_use]
    pub const fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Allocate a new node and return its ID.
    /// The node is not yet attached to the tree.
    pub fn alloc(&mut self, node_type: NodeType) -> NodeId {
        let id = NodeId(self.nodes.len());
        self.nodes.push(Node {
            node_type,
            parent: None,
            children: Vec::new(),
        });
        id
    }

    /// Append `child` as the last child of `parent`.
    ///
    /// Out-of-range ids are ignored.
    pub fn append_child(&mut self, parent: NodeId, child: NodeId) {
        if parent.0 >= self.nodes.len() || child.0 >= self.nodes.len() {
            return;
        }
        self.nodes[parent.0].children.push(child);
        self.nodes[child.0].parent = Some(parent);
    }

    /// Get the parent of a node.
    #[must_use]
    pub fn parent(&self, id: NodeId) -> Option<NodeId> {
        self.get(id).and_then(|n| n.parent)
    }

    /// Get all children of a node.
    #[must_use]
    pub fn children(&self, id: NodeId) -> &[NodeId] {
        self.get(id).map_or(&[], |n| n.children.as_slice())
    }

    /// Get element data if this node is an element.
    #[must_use]
    pub fn as_element(&self, id: NodeId) -> Option<&ElementData> {
        self.get(id).and_then(|n| match &n.node_type {
            NodeType::Element(data) => Some(data),
            NodeType::Text(_) => None,
        })
    }

    /// Get text content if this node is a text node.
    #[must_use]
    pub fn as_text(&self, id: NodeId) -> Option<&str> {
        self.get(id).and_then(|n| match &n.node_type {
            NodeType::Text(s) => Some(s.as_str()),
            NodeType::Element(_) => None,
        })
    }

    /// `true` if the node is a text node holding only whitespace.
    #[must_use]
    pub fn is_whitespace_text(&self, id: NodeId) -> bool {
        self.as_text(id)
            .is_some_and(|text| text.chars().all(char::is_whitespace))
    }

    /// The concatenated text of a node and all of its descendants, in tree order.
    #[must_use]
    pub fn text_content(&self, id: NodeId) -> String {
        let mut out = String::new();
        self.collect_text(id, &mut out);
        out
    }

    fn collect_text(&self, id: NodeId, out: &mut String) {
        match self.get(id).map(|n| &n.node_type) {
            Some(NodeType::Text(text)) => out.push_str(text),
            Some(NodeType::Element(_)) => {
                for &child in self.children(id) {
                    self.collect_text(child, out);
                }
            }
            None => {}
        }
    }

    /// The document's top-level wrapper: the first child of the root that is
    /// not whitespace-only text.
    ///
    /// Leading formatting whitespace before the wrapper element is skipped so
    /// that a markup file starting with a newline still has a wrapper.
    #[must_use]
    pub fn document_element(&self) -> Option<NodeId> {
        self.children(NodeId::ROOT)
            .iter()
            .copied()
            .find(|&id| !self.is_whitespace_text(id))
    }
}

impl Default for DomTree {
    fn default() -> Self {
        Self::new()
    }
}
