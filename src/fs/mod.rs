//! In-memory directory tree.
//!
//! The tree is a pure simulation: directories and files are plain nodes in
//! an arena, there is no backing storage and files carry no contents. All
//! mutation goes through [`DirTree`], which also tracks the current
//! directory that relative names resolve against.

mod node;
mod tree;

pub use node::{Node, NodeId, NodeKind};
pub use tree::{DirTree, FsError};
