//! The ordered binary tree - the in-memory BST and its traversals.

pub mod binary_tree;
pub mod builder;
pub mod search;

pub use binary_tree::{BinaryTree, Nodes, TreeNode, Values};
pub use builder::build_tree;
pub use search::{find_breadth_first, find_depth_first};
