use snafu::{Snafu, ensure};
use tracing::debug;

use crate::fs::node::{Node, NodeId, NodeKind};

/// Mutable directory tree with a current-directory cursor.
///
/// Nodes live in an arena of slots addressed by [`NodeId`]; removing a
/// subtree clears its slots and recycles them through a free list, so no
/// node ever holds a dangling link. The cursor always refers to a live
/// directory: every mutation targets an immediate child of the cursor, and
/// a child is never the cursor itself, so no operation can detach the node
/// the cursor points at.
#[derive(Debug, Clone)]
pub struct DirTree {
    nodes: Vec<Option<Node>>,
    free: Vec<usize>,
    root: NodeId,
    cursor: NodeId,
}

impl DirTree {
    /// Creates a tree holding a lone root directory, with the cursor on it.
    pub fn new() -> Self {
        let root = Node::new(String::new(), NodeKind::Directory, None);
        DirTree {
            nodes: vec![Some(root)],
            free: Vec::new(),
            root: NodeId(0),
            cursor: NodeId(0),
        }
    }

    /// Changes the current directory by a single path token.
    ///
    /// `".."` ascends (invalid at root), `"/"` and `"~"` reset to root,
    /// `"."` is a no-op, anything else is an exact-name child lookup that
    /// must resolve to a directory. The cursor moves only on success.
    pub fn cd(&mut self, path: &str) -> Result<(), FsError> {
        match path {
            ".." => {
                let parent = self.node(self.cursor).parent;
                self.cursor = parent.ok_or_else(|| FsError::InvalidPath {
                    path: path.to_string(),
                })?;
            }
            "/" | "~" => self.cursor = self.root,
            "." => {}
            name => {
                let child = self.find_child(self.cursor, name).ok_or_else(|| {
                    FsError::InvalidPath {
                        path: name.to_string(),
                    }
                })?;
                ensure!(self.node(child).is_dir(), InvalidPathSnafu { path: name });
                self.cursor = child;
            }
        }
        Ok(())
    }

    /// Lists the immediate children of the current directory, one per line
    /// in stored (alphabetical) order, directories suffixed with `/`.
    pub fn ls(&self) -> String {
        self.node(self.cursor)
            .children
            .iter()
            .map(|&id| self.entry_label(id))
            .collect::<Vec<_>>()
            .join("\n")
    }

    /// Absolute path of the current directory; root renders as `/`.
    pub fn pwd(&self) -> String {
        let mut segments = Vec::new();
        let mut id = self.cursor;
        while let Some(parent) = self.node(id).parent {
            segments.push(self.node(id).name.as_str());
            id = parent;
        }
        if segments.is_empty() {
            "/".to_string()
        } else {
            segments
                .iter()
                .rev()
                .map(|name| format!("/{name}"))
                .collect()
        }
    }

    /// Pre-order rendering of the subtree below the current directory,
    /// indented two spaces per level. The current directory itself is the
    /// header line (`/` for root).
    pub fn tree(&self) -> String {
        let current = self.node(self.cursor);
        let mut out = if current.parent.is_none() {
            "/".to_string()
        } else {
            format!("{}/", current.name)
        };
        for &child in &current.children {
            self.render_subtree(child, 1, &mut out);
        }
        out
    }

    /// Creates an empty file under the current directory.
    pub fn touch(&mut self, name: &str) -> Result<(), FsError> {
        self.create_child(name, NodeKind::File)
    }

    /// Creates an empty directory under the current directory.
    pub fn mkdir(&mut self, name: &str) -> Result<(), FsError> {
        self.create_child(name, NodeKind::Directory)
    }

    /// Removes a file from the current directory.
    pub fn rm(&mut self, name: &str) -> Result<(), FsError> {
        let target = self
            .find_child(self.cursor, name)
            .ok_or_else(|| FsError::NotFound {
                name: name.to_string(),
            })?;
        ensure!(!self.node(target).is_dir(), NotAFileSnafu { name });

        debug!("Removing file '{}'", name);
        self.detach(self.cursor, target);
        self.free_subtree(target);
        Ok(())
    }

    /// Removes an empty directory from the current directory.
    ///
    /// Non-recursive by design: a directory holding anything is refused.
    pub fn rmdir(&mut self, name: &str) -> Result<(), FsError> {
        let target = self
            .find_child(self.cursor, name)
            .ok_or_else(|| FsError::NotFound {
                name: name.to_string(),
            })?;
        ensure!(self.node(target).is_dir(), NotADirectorySnafu { name });
        ensure!(
            self.node(target).children.is_empty(),
            DirectoryNotEmptySnafu { name }
        );

        debug!("Removing directory '{}'", name);
        self.detach(self.cursor, target);
        self.free_subtree(target);
        Ok(())
    }

    /// Moves or renames the entry `src` of the current directory.
    ///
    /// When `dest` is `".."` or names an existing sibling directory, `src`
    /// is relocated into it under its own name; otherwise `src` is renamed
    /// to `dest` in place. Either way the entry is re-inserted in
    /// alphabetical order, and every check runs before anything is
    /// detached, so a failure leaves the tree untouched.
    pub fn mv(&mut self, src: &str, dest: &str) -> Result<(), FsError> {
        ensure!(src != dest, SameSourceDestinationSnafu);

        if dest == ".." {
            let parent = self.node(self.cursor).parent.ok_or_else(|| {
                FsError::InvalidPath {
                    path: dest.to_string(),
                }
            })?;
            let src_id = self.lookup_source(src)?;
            ensure!(
                self.find_child(parent, src).is_none(),
                NameConflictSnafu { name: src }
            );
            debug!("Moving '{}' into parent directory", src);
            self.relocate(src_id, parent);
            return Ok(());
        }

        let src_id = self.lookup_source(src)?;
        match self.find_child(self.cursor, dest) {
            Some(dest_id) if self.node(dest_id).is_dir() => {
                ensure!(
                    self.find_child(dest_id, src).is_none(),
                    NameConflictSnafu { name: src }
                );
                debug!("Moving '{}' into directory '{}'", src, dest);
                self.relocate(src_id, dest_id);
            }
            Some(_) => {
                return DestinationIsFileSnafu {
                    src,
                    dest,
                    src_is_dir: self.node(src_id).is_dir(),
                }
                .fail();
            }
            None => {
                // A rename target must be a usable entry name: non-empty
                // and not a token that cd intercepts as navigation.
                ensure!(!dest.is_empty(), InvalidNameSnafu);
                ensure!(
                    !matches!(dest, "." | "/" | "~"),
                    InvalidPathSnafu { path: dest }
                );
                // Unreachable given the branch condition; kept as a guard.
                ensure!(
                    self.find_child(self.cursor, dest).is_none(),
                    NameConflictSnafu { name: dest }
                );
                debug!("Renaming '{}' to '{}'", src, dest);
                self.detach(self.cursor, src_id);
                self.node_mut(src_id).name = dest.to_string();
                self.insert_sorted(self.cursor, src_id);
            }
        }
        Ok(())
    }

    /// Handle of the current directory, for saving across a mutation-free
    /// span (see [`DirTree::restore_cursor`]).
    pub fn cursor_id(&self) -> NodeId {
        self.cursor
    }

    /// Puts the cursor back on a directory whose handle was obtained from
    /// [`DirTree::cursor_id`] with no intervening mutation.
    pub fn restore_cursor(&mut self, id: NodeId) {
        debug_assert!(
            matches!(self.nodes.get(id.0), Some(Some(node)) if node.is_dir()),
            "cursor restored to a stale or non-directory handle"
        );
        self.cursor = id;
    }

    /// Exact, case-sensitive lookup among the immediate children of `dir`.
    fn find_child(&self, dir: NodeId, name: &str) -> Option<NodeId> {
        self.node(dir)
            .children
            .iter()
            .copied()
            .find(|&id| self.node(id).name == name)
    }

    fn create_child(&mut self, name: &str, kind: NodeKind) -> Result<(), FsError> {
        ensure!(!name.is_empty(), InvalidNameSnafu);
        ensure!(
            self.find_child(self.cursor, name).is_none(),
            AlreadyExistsSnafu { name }
        );

        debug!("Creating {} '{}'", kind, name);
        let id = self.alloc(Node::new(name.to_string(), kind, Some(self.cursor)));
        self.insert_sorted(self.cursor, id);
        Ok(())
    }

    fn lookup_source(&self, src: &str) -> Result<NodeId, FsError> {
        self.find_child(self.cursor, src)
            .ok_or_else(|| FsError::SourceNotFound {
                name: src.to_string(),
            })
    }

    /// Detaches `node` from the cursor's child list and re-inserts it under
    /// `new_parent`, keeping its name.
    fn relocate(&mut self, node: NodeId, new_parent: NodeId) {
        self.detach(self.cursor, node);
        self.node_mut(node).parent = Some(new_parent);
        self.insert_sorted(new_parent, node);
    }

    /// Inserts `child` into `dir`'s child list at its alphabetical position.
    /// Linear scan; sibling order is otherwise untouched.
    fn insert_sorted(&mut self, dir: NodeId, child: NodeId) {
        let name = self.node(child).name.clone();
        let position = self
            .node(dir)
            .children
            .iter()
            .position(|&id| self.node(id).name > name)
            .unwrap_or_else(|| self.node(dir).children.len());
        self.node_mut(dir).children.insert(position, child);
    }

    fn detach(&mut self, dir: NodeId, child: NodeId) {
        self.node_mut(dir).children.retain(|&id| id != child);
    }

    /// Frees a detached node and everything below it.
    fn free_subtree(&mut self, id: NodeId) {
        let node = self.nodes[id.0].take().expect("freeing a stale node id");
        for child in node.children {
            self.free_subtree(child);
        }
        self.free.push(id.0);
    }

    fn alloc(&mut self, node: Node) -> NodeId {
        match self.free.pop() {
            Some(slot) => {
                self.nodes[slot] = Some(node);
                NodeId(slot)
            }
            None => {
                self.nodes.push(Some(node));
                NodeId(self.nodes.len() - 1)
            }
        }
    }

    fn render_subtree(&self, id: NodeId, depth: usize, out: &mut String) {
        out.push('\n');
        out.push_str(&"  ".repeat(depth));
        out.push_str(&self.entry_label(id));
        if self.node(id).is_dir() {
            for &child in &self.node(id).children {
                self.render_subtree(child, depth + 1, out);
            }
        }
    }

    fn entry_label(&self, id: NodeId) -> String {
        let node = self.node(id);
        if node.is_dir() {
            format!("{}/", node.name)
        } else {
            node.name.clone()
        }
    }

    fn node(&self, id: NodeId) -> &Node {
        self.nodes[id.0].as_ref().expect("stale node id")
    }

    fn node_mut(&mut self, id: NodeId) -> &mut Node {
        self.nodes[id.0].as_mut().expect("stale node id")
    }
}

impl Default for DirTree {
    fn default() -> Self {
        Self::new()
    }
}

#[derive(Debug, Snafu, PartialEq, Eq)]
pub enum FsError {
    #[snafu(display("invalid path: '{path}'"))]
    InvalidPath { path: String },
    #[snafu(display("invalid name: names must not be empty"))]
    InvalidName,
    #[snafu(display("'{name}' already exists"))]
    AlreadyExists { name: String },
    #[snafu(display("'{name}' not found"))]
    NotFound { name: String },
    #[snafu(display("'{name}' is a directory"))]
    NotAFile { name: String },
    #[snafu(display("'{name}' is not a directory"))]
    NotADirectory { name: String },
    #[snafu(display("directory '{name}' is not empty"))]
    DirectoryNotEmpty { name: String },
    #[snafu(display("source and destination are the same"))]
    SameSourceDestination,
    #[snafu(display("{}", if *src_is_dir {
        format!("cannot move directory '{src}' into file '{dest}'")
    } else {
        format!("destination '{dest}' already exists as a file")
    }))]
    DestinationIsFile {
        src: String,
        dest: String,
        src_is_dir: bool,
    },
    #[snafu(display("destination already contains an entry named '{name}'"))]
    NameConflict { name: String },
    #[snafu(display("source '{name}' not found"))]
    SourceNotFound { name: String },
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::*;

    /// Root layout `a.txt, b/{bb1/{bbb.txt}, bb2/}, c.txt, d.txt, e/{ee.txt}`,
    /// cursor left on root.
    fn sample_tree() -> DirTree {
        let mut tree = DirTree::new();
        for op in [
            "mkdir e", "touch d.txt", "touch c.txt", "mkdir b", "touch a.txt",
        ] {
            apply(&mut tree, op);
        }
        tree.cd("b").unwrap();
        apply(&mut tree, "mkdir bb2");
        apply(&mut tree, "mkdir bb1");
        tree.cd("bb1").unwrap();
        apply(&mut tree, "touch bbb.txt");
        tree.cd("/").unwrap();
        tree.cd("e").unwrap();
        apply(&mut tree, "touch ee.txt");
        tree.cd("/").unwrap();
        tree
    }

    fn apply(tree: &mut DirTree, op: &str) {
        let (verb, name) = op.split_once(' ').unwrap();
        match verb {
            "mkdir" => tree.mkdir(name).unwrap(),
            "touch" => tree.touch(name).unwrap(),
            _ => unreachable!(),
        }
    }

    /// Every directory's children must stay strictly ascending by name, and
    /// every child must point back at its parent.
    fn assert_tree_consistent(tree: &DirTree) {
        for (slot, entry) in tree.nodes.iter().enumerate() {
            let Some(node) = entry else { continue };
            let names: Vec<&str> = node
                .children
                .iter()
                .map(|&id| tree.node(id).name())
                .collect();
            for pair in names.windows(2) {
                assert!(pair[0] < pair[1], "children out of order: {names:?}");
            }
            for &child in &node.children {
                assert_eq!(tree.node(child).parent, Some(NodeId(slot)));
            }
        }
        assert!(tree.node(tree.cursor).is_dir());
    }

    #[test]
    fn new_tree_has_root_cursor_and_empty_listing() {
        let tree = DirTree::new();
        assert_eq!(tree.pwd(), "/");
        assert_eq!(tree.ls(), "");
        assert_eq!(tree.tree(), "/");
    }

    #[test]
    fn cd_dot_is_a_noop() {
        let mut tree = sample_tree();
        tree.cd("b").unwrap();
        tree.cd(".").unwrap();
        assert_eq!(tree.pwd(), "/b");
    }

    #[test]
    fn cd_parent_of_root_is_rejected() {
        let mut tree = DirTree::new();
        let err = tree.cd("..").unwrap_err();
        assert_eq!(err, FsError::InvalidPath { path: "..".into() });
        assert_eq!(tree.pwd(), "/");
    }

    #[rstest]
    #[case("/")]
    #[case("~")]
    fn cd_root_tokens_reset_cursor(#[case] token: &str) {
        let mut tree = sample_tree();
        tree.cd("b").unwrap();
        tree.cd("bb1").unwrap();
        tree.cd(token).unwrap();
        assert_eq!(tree.pwd(), "/");
    }

    #[test]
    fn cd_into_missing_child_leaves_cursor_unchanged() {
        let mut tree = sample_tree();
        let err = tree.cd("nope").unwrap_err();
        assert!(matches!(err, FsError::InvalidPath { .. }));
        assert_eq!(tree.pwd(), "/");
    }

    #[test]
    fn cd_into_file_is_rejected() {
        let mut tree = sample_tree();
        let err = tree.cd("a.txt").unwrap_err();
        assert_eq!(
            err,
            FsError::InvalidPath {
                path: "a.txt".into()
            }
        );
        assert_eq!(tree.pwd(), "/");
    }

    #[test]
    fn mkdir_cd_cd_back_round_trip() {
        let mut tree = sample_tree();
        tree.cd("b").unwrap();
        let before = tree.cursor_id();
        tree.mkdir("x").unwrap();
        tree.cd("x").unwrap();
        tree.cd("..").unwrap();
        assert_eq!(tree.cursor_id(), before);
        assert_eq!(tree.pwd(), "/b");
    }

    #[test]
    fn ls_suffixes_directories_and_keeps_stored_order() {
        let tree = sample_tree();
        assert_eq!(tree.ls(), "a.txt\nb/\nc.txt\nd.txt\ne/");
    }

    #[test]
    fn ls_is_alphabetical_not_insertion_order() {
        let mut tree = DirTree::new();
        tree.mkdir("b").unwrap();
        tree.mkdir("a").unwrap();
        assert_eq!(tree.ls(), "a/\nb/");
        assert_tree_consistent(&tree);
    }

    #[test]
    fn ls_of_empty_directory_is_empty() {
        let mut tree = sample_tree();
        tree.cd("b").unwrap();
        tree.cd("bb2").unwrap();
        assert_eq!(tree.ls(), "");
    }

    #[test]
    fn pwd_walks_back_to_root() {
        let mut tree = sample_tree();
        tree.cd("b").unwrap();
        tree.cd("bb1").unwrap();
        assert_eq!(tree.pwd(), "/b/bb1");
    }

    #[test]
    fn tree_renders_pre_order_with_two_space_indent() {
        let tree = sample_tree();
        let expected = "/\n  a.txt\n  b/\n    bb1/\n      bbb.txt\n    bb2/\n  c.txt\n  d.txt\n  e/\n    ee.txt";
        assert_eq!(tree.tree(), expected);
    }

    #[test]
    fn tree_header_is_the_current_directory() {
        let mut tree = sample_tree();
        tree.cd("b").unwrap();
        assert_eq!(tree.tree(), "b/\n  bb1/\n    bbb.txt\n  bb2/");
    }

    #[test]
    fn touch_rejects_empty_name_then_duplicate() {
        let mut tree = DirTree::new();
        assert_eq!(tree.touch("").unwrap_err(), FsError::InvalidName);
        tree.touch("a").unwrap();
        assert_eq!(
            tree.touch("a").unwrap_err(),
            FsError::AlreadyExists { name: "a".into() }
        );
    }

    #[test]
    fn mkdir_conflicts_with_existing_file_of_same_name() {
        let mut tree = DirTree::new();
        tree.touch("a").unwrap();
        assert_eq!(
            tree.mkdir("a").unwrap_err(),
            FsError::AlreadyExists { name: "a".into() }
        );
    }

    #[test]
    fn rm_removes_a_file() {
        let mut tree = sample_tree();
        tree.rm("a.txt").unwrap();
        assert_eq!(tree.ls(), "b/\nc.txt\nd.txt\ne/");
        assert_tree_consistent(&tree);
    }

    #[test]
    fn rm_rejects_directories_and_missing_names() {
        let mut tree = sample_tree();
        assert_eq!(
            tree.rm("b").unwrap_err(),
            FsError::NotAFile { name: "b".into() }
        );
        assert_eq!(
            tree.rm("zz").unwrap_err(),
            FsError::NotFound { name: "zz".into() }
        );
    }

    #[test]
    fn rmdir_rejects_files_and_missing_names() {
        let mut tree = sample_tree();
        assert_eq!(
            tree.rmdir("a.txt").unwrap_err(),
            FsError::NotADirectory {
                name: "a.txt".into()
            }
        );
        assert_eq!(
            tree.rmdir("zz").unwrap_err(),
            FsError::NotFound { name: "zz".into() }
        );
    }

    #[test]
    fn rmdir_on_non_empty_directory_fails_without_side_effects() {
        let mut tree = sample_tree();
        let before = tree.tree();
        tree.cd("b").unwrap();
        let err = tree.rmdir("bb1").unwrap_err();
        assert_eq!(err, FsError::DirectoryNotEmpty { name: "bb1".into() });
        tree.cd("/").unwrap();
        assert_eq!(tree.tree(), before);
    }

    #[test]
    fn rmdir_succeeds_once_the_directory_is_emptied() {
        let mut tree = sample_tree();
        tree.cd("b").unwrap();
        assert!(matches!(
            tree.rmdir("bb1"),
            Err(FsError::DirectoryNotEmpty { .. })
        ));
        tree.cd("bb1").unwrap();
        tree.rm("bbb.txt").unwrap();
        tree.cd("..").unwrap();
        tree.rmdir("bb1").unwrap();
        assert_eq!(tree.ls(), "bb2/");
        assert_tree_consistent(&tree);
    }

    #[test]
    fn freed_slots_are_recycled() {
        let mut tree = sample_tree();
        let slots = tree.nodes.len();
        tree.rm("a.txt").unwrap();
        tree.touch("z.txt").unwrap();
        assert_eq!(tree.nodes.len(), slots);
    }

    #[test]
    fn mv_identity_is_rejected() {
        let mut tree = sample_tree();
        assert_eq!(
            tree.mv("b", "b").unwrap_err(),
            FsError::SameSourceDestination
        );
    }

    #[test]
    fn mv_missing_source_is_rejected() {
        let mut tree = sample_tree();
        assert_eq!(
            tree.mv("zz", "b").unwrap_err(),
            FsError::SourceNotFound { name: "zz".into() }
        );
    }

    #[test]
    fn mv_into_existing_directory_relocates_keeping_name() {
        let mut tree = DirTree::new();
        tree.mkdir("a").unwrap();
        tree.mkdir("b").unwrap();
        tree.mv("a", "b").unwrap();
        assert_eq!(tree.ls(), "b/");
        tree.cd("b").unwrap();
        assert_eq!(tree.ls(), "a/");
        assert_tree_consistent(&tree);
    }

    #[test]
    fn mv_reinserts_alphabetically_in_destination() {
        let mut tree = sample_tree();
        tree.mv("c.txt", "b").unwrap();
        tree.cd("b").unwrap();
        assert_eq!(tree.ls(), "bb1/\nbb2/\nc.txt");
        assert_tree_consistent(&tree);
    }

    #[test]
    fn mv_to_dotdot_moves_into_parent() {
        let mut tree = sample_tree();
        tree.cd("b").unwrap();
        tree.mv("bb2", "..").unwrap();
        assert_eq!(tree.ls(), "bb1/");
        tree.cd("..").unwrap();
        assert_eq!(tree.ls(), "a.txt\nb/\nbb2/\nc.txt\nd.txt\ne/");
        assert_tree_consistent(&tree);
    }

    #[test]
    fn mv_to_dotdot_at_root_is_invalid() {
        let mut tree = sample_tree();
        assert_eq!(
            tree.mv("b", "..").unwrap_err(),
            FsError::InvalidPath { path: "..".into() }
        );
    }

    #[test]
    fn mv_to_dotdot_with_conflicting_name_in_parent_fails() {
        let mut tree = DirTree::new();
        tree.touch("x").unwrap();
        tree.mkdir("d").unwrap();
        tree.cd("d").unwrap();
        tree.touch("x").unwrap();
        assert_eq!(
            tree.mv("x", "..").unwrap_err(),
            FsError::NameConflict { name: "x".into() }
        );
        assert_eq!(tree.ls(), "x");
    }

    #[test]
    fn mv_conflict_in_destination_leaves_tree_unchanged() {
        let mut tree = DirTree::new();
        tree.mkdir("a").unwrap();
        tree.mkdir("b").unwrap();
        tree.cd("b").unwrap();
        tree.mkdir("a").unwrap();
        tree.cd("..").unwrap();
        let before = tree.tree();
        assert_eq!(
            tree.mv("a", "b").unwrap_err(),
            FsError::NameConflict { name: "a".into() }
        );
        assert_eq!(tree.tree(), before);
    }

    #[test]
    fn mv_onto_file_reports_destination_is_file() {
        let mut tree = DirTree::new();
        tree.mkdir("dir").unwrap();
        tree.touch("file.txt").unwrap();
        tree.touch("other.txt").unwrap();

        let err = tree.mv("dir", "file.txt").unwrap_err();
        assert_eq!(
            err,
            FsError::DestinationIsFile {
                src: "dir".into(),
                dest: "file.txt".into(),
                src_is_dir: true,
            }
        );
        assert!(err.to_string().contains("cannot move directory"));

        let err = tree.mv("other.txt", "file.txt").unwrap_err();
        assert_eq!(
            err,
            FsError::DestinationIsFile {
                src: "other.txt".into(),
                dest: "file.txt".into(),
                src_is_dir: false,
            }
        );
        assert!(err.to_string().contains("already exists as a file"));
    }

    #[test]
    fn mv_renames_when_destination_does_not_exist() {
        let mut tree = DirTree::new();
        tree.mkdir("a").unwrap();
        tree.mv("a", "c").unwrap();
        assert_eq!(tree.ls(), "c/");
        assert_tree_consistent(&tree);
    }

    #[test]
    fn mv_rename_to_empty_name_is_rejected() {
        let mut tree = DirTree::new();
        tree.mkdir("x").unwrap();
        assert_eq!(tree.mv("x", "").unwrap_err(), FsError::InvalidName);
        assert_eq!(tree.ls(), "x/");
    }

    #[rstest]
    #[case(".")]
    #[case("/")]
    #[case("~")]
    fn mv_rename_to_navigation_token_is_rejected(#[case] dest: &str) {
        let mut tree = DirTree::new();
        tree.mkdir("x").unwrap();
        assert_eq!(
            tree.mv("x", dest).unwrap_err(),
            FsError::InvalidPath { path: dest.into() }
        );
        assert_eq!(tree.ls(), "x/");
    }

    #[test]
    fn mv_rename_re_sorts_among_siblings() {
        let mut tree = DirTree::new();
        tree.mkdir("a").unwrap();
        tree.mkdir("m").unwrap();
        tree.touch("x.txt").unwrap();
        tree.mv("a", "z").unwrap();
        assert_eq!(tree.ls(), "m/\nx.txt\nz/");
        assert_tree_consistent(&tree);
    }

    #[test]
    fn cursor_stays_live_across_mutations() {
        let mut tree = sample_tree();
        tree.cd("b").unwrap();
        tree.mv("bb2", "..").unwrap();
        tree.cd("bb1").unwrap();
        tree.rm("bbb.txt").unwrap();
        tree.cd("..").unwrap();
        tree.rmdir("bb1").unwrap();
        assert_eq!(tree.pwd(), "/b");
        assert_tree_consistent(&tree);
    }
}
