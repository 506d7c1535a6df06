// Tree module - arena FP-tree and its operations

mod tree;
mod tree_ops;

pub use tree::{FPNode, FPTree, NodeIndex};
