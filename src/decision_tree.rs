//! The ID3 induction engine and the tree it produces.

// Shannon entropy over class distributions.
pub(crate) mod entropy;
// Numeric/categorical split finders and the attribute selector.
pub(crate) mod split;
// The recursive tree builder.
pub(crate) mod builder;
// The induced tree.
pub(crate) mod node;

pub use builder::{build_tree, TreeBuilder};
pub use node::Tree;
