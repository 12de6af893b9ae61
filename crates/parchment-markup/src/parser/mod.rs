//! Tree construction from the token stream.

/// Stack-based tree builder.
pub mod tree_builder;

pub use tree_builder::{ParseIssue, TreeBuilder, build, write_tree};
