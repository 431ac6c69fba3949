use derive_more::Display;

/// Stable handle to a node in the tree's arena.
///
/// Handles stay valid until the node they refer to is removed from the
/// tree; the arena never moves live nodes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NodeId(pub(crate) usize);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
pub enum NodeKind {
    #[display("directory")]
    Directory,
    #[display("file")]
    File,
}

/// A single file-or-directory entry.
///
/// The name is empty only for the root and unique among siblings otherwise.
/// `children` is kept sorted strictly ascending by child name; files never
/// have children.
#[derive(Debug, Clone)]
pub struct Node {
    pub(crate) name: String,
    pub(crate) kind: NodeKind,
    pub(crate) parent: Option<NodeId>,
    pub(crate) children: Vec<NodeId>,
}

impl Node {
    pub(crate) fn new(name: String, kind: NodeKind, parent: Option<NodeId>) -> Self {
        Node {
            name,
            kind,
            parent,
            children: Vec::new(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn is_dir(&self) -> bool {
        self.kind == NodeKind::Directory
    }
}
