//! Read-only virtual filesystem.
//!
//! Nodes live in an arena and are addressed by [`NodeId`]. Directories keep
//! their children in insertion order, which is also the `ls` order.

use std::collections::HashMap;

use log::warn;

use crate::config::ROOT_NAME;
use crate::models::Manifest;

/// Index of a node in the tree's arena.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct NodeId(usize);

/// A directory or a file with template content.
#[derive(Clone, Debug)]
pub enum Node {
    Directory(Directory),
    File { content: String },
}

impl Node {
    pub fn is_directory(&self) -> bool {
        matches!(self, Self::Directory(_))
    }

    pub fn as_directory(&self) -> Option<&Directory> {
        match self {
            Self::Directory(dir) => Some(dir),
            Self::File { .. } => None,
        }
    }

    pub fn content(&self) -> Option<&str> {
        match self {
            Self::File { content } => Some(content),
            Self::Directory(_) => None,
        }
    }
}

/// Children of a directory, by name.
#[derive(Clone, Debug, Default)]
pub struct Directory {
    order: Vec<String>,
    children: HashMap<String, NodeId>,
}

impl Directory {
    pub fn child(&self, name: &str) -> Option<NodeId> {
        self.children.get(name).copied()
    }

    /// Child names in insertion order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.order.iter().map(String::as_str)
    }

    fn insert(&mut self, name: &str, id: NodeId) {
        self.order.push(name.to_string());
        self.children.insert(name.to_string(), id);
    }
}

/// The namespace tree. Immutable once built.
///
/// # Path Convention
///
/// Absolute paths are segment slices whose first element is the root `~`,
/// e.g. `["~", "projects", "huaythai"]`.
#[derive(Clone, Debug)]
pub struct NamespaceTree {
    nodes: Vec<Node>,
}

impl NamespaceTree {
    /// Tree holding only the root directory.
    pub fn empty() -> Self {
        Self {
            nodes: vec![Node::Directory(Directory::default())],
        }
    }

    pub fn root(&self) -> NodeId {
        NodeId(0)
    }

    /// Build the tree from a manifest.
    ///
    /// Directories are created first, then files, each in manifest order.
    /// Entries that collide with an existing node, or that need to descend
    /// through a file, are skipped with a warning.
    pub fn from_manifest(manifest: &Manifest) -> Self {
        let mut tree = Self::empty();

        for dir in &manifest.directories {
            if tree.ensure_directory(&segments(&dir.path)).is_none() {
                warn!("manifest conflict: directory '{}' blocked by a file", dir.path);
            }
        }

        for file in &manifest.files {
            let parts = segments(&file.path);
            let Some((name, parents)) = parts.split_last() else {
                warn!("manifest entry with empty file path skipped");
                continue;
            };

            let Some(parent) = tree.ensure_directory(parents) else {
                warn!("manifest conflict: '{}' blocked by an existing file", file.path);
                continue;
            };

            if tree.child(parent, name).is_some() {
                warn!("manifest conflict: duplicate entry '{}'", file.path);
                continue;
            }

            tree.push_child(
                parent,
                name,
                Node::File {
                    content: file.content.clone(),
                },
            );
        }

        tree
    }

    /// Walk (creating as needed) the directory chain below the root.
    fn ensure_directory(&mut self, parts: &[&str]) -> Option<NodeId> {
        let mut current = self.root();

        for part in parts {
            current = match self.child(current, part) {
                Some(id) if self.node(id).is_directory() => id,
                Some(_) => return None,
                None => self.push_child(current, part, Node::Directory(Directory::default())),
            };
        }

        Some(current)
    }

    fn push_child(&mut self, parent: NodeId, name: &str, node: Node) -> NodeId {
        let id = NodeId(self.nodes.len());
        self.nodes.push(node);
        if let Node::Directory(dir) = &mut self.nodes[parent.0] {
            dir.insert(name, id);
        }
        id
    }

    pub fn node(&self, id: NodeId) -> &Node {
        &self.nodes[id.0]
    }

    /// Child of a directory node by name; `None` for files.
    pub fn child(&self, parent: NodeId, name: &str) -> Option<NodeId> {
        self.node(parent).as_directory()?.child(name)
    }

    /// Look up a node by absolute path (`["~", ...]`).
    pub fn lookup<S: AsRef<str>>(&self, path: &[S]) -> Option<&Node> {
        let (first, rest) = path.split_first()?;
        if first.as_ref() != ROOT_NAME {
            return None;
        }

        let mut current = self.root();
        for part in rest {
            current = self.child(current, part.as_ref())?;
        }

        Some(self.node(current))
    }
}

impl Default for NamespaceTree {
    fn default() -> Self {
        Self::empty()
    }
}

fn segments(path: &str) -> Vec<&str> {
    path.split('/').filter(|s| !s.is_empty()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{DirectoryEntry, FileEntry};

    fn create_test_tree() -> NamespaceTree {
        let manifest = Manifest {
            directories: vec![DirectoryEntry {
                path: "drafts".to_string(),
            }],
            files: vec![
                FileEntry::new("about", "Hi, I'm ${name}."),
                FileEntry::new("projects/bettermango", "BetterMango"),
                FileEntry::new("projects/huaythai", "HuayThai"),
                FileEntry::new("projects/aigenfootball", "AI Gen Football"),
                FileEntry::new("contact", "Email: ${email}"),
            ],
        };
        NamespaceTree::from_manifest(&manifest)
    }

    fn names(tree: &NamespaceTree, path: &[&str]) -> Vec<String> {
        tree.lookup(path)
            .and_then(Node::as_directory)
            .map(|d| d.names().map(str::to_string).collect())
            .unwrap_or_default()
    }

    #[test]
    fn test_empty_tree() {
        let tree = NamespaceTree::empty();
        assert!(tree.lookup(&["~"]).is_some_and(Node::is_directory));
        assert!(names(&tree, &["~"]).is_empty());
    }

    #[test]
    fn test_from_manifest() {
        let tree = create_test_tree();

        assert!(tree.lookup(&["~", "projects"]).is_some_and(Node::is_directory));
        assert!(tree.lookup(&["~", "drafts"]).is_some_and(Node::is_directory));
        assert_eq!(
            tree.lookup(&["~", "projects", "huaythai"])
                .and_then(Node::content),
            Some("HuayThai")
        );
    }

    #[test]
    fn test_insertion_order() {
        let tree = create_test_tree();

        assert_eq!(
            names(&tree, &["~", "projects"]),
            vec!["bettermango", "huaythai", "aigenfootball"]
        );
        assert_eq!(
            names(&tree, &["~"]),
            vec!["drafts", "about", "projects", "contact"]
        );
    }

    #[test]
    fn test_lookup_nonexistent() {
        let tree = create_test_tree();

        assert!(tree.lookup(&["~", "nope"]).is_none());
        assert!(tree.lookup(&["~", "about", "deeper"]).is_none());
        assert!(tree.lookup::<&str>(&[]).is_none());
        assert!(tree.lookup(&["projects"]).is_none());
    }

    #[test]
    fn test_manifest_conflicts_are_skipped() {
        let manifest = Manifest {
            directories: vec![],
            files: vec![
                FileEntry::new("notes", "first"),
                FileEntry::new("notes", "second"),
                FileEntry::new("notes/inner", "blocked"),
                FileEntry::new("", "empty"),
            ],
        };
        let tree = NamespaceTree::from_manifest(&manifest);

        assert_eq!(tree.lookup(&["~", "notes"]).and_then(Node::content), Some("first"));
        assert!(tree.lookup(&["~", "notes", "inner"]).is_none());
        assert_eq!(names(&tree, &["~"]), vec!["notes"]);
    }
}
