//! Folder and file nodes.

use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};

use serde::{Deserialize, Serialize};

/// Unique identifier for a node.
///
/// Ids come from a process-wide counter, so an id is never handed out twice
/// and view state keyed by a deleted id can never be picked up by a new node.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(u64);

impl NodeId {
    pub(crate) fn next() -> Self {
        static COUNTER: AtomicU64 = AtomicU64::new(1);
        Self(COUNTER.fetch_add(1, Ordering::Relaxed))
    }
}

impl std::fmt::Display for NodeId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "node-{}", self.0)
    }
}

/// Whether a node is a folder or a file. Fixed at creation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NodeKind {
    Folder,
    File,
}

impl NodeKind {
    /// Name given to freshly inserted nodes.
    pub fn default_name(self) -> &'static str {
        match self {
            NodeKind::Folder => "New Folder",
            NodeKind::File => "New File.txt",
        }
    }
}

impl std::fmt::Display for NodeKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            NodeKind::Folder => f.write_str("folder"),
            NodeKind::File => f.write_str("file"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Folder {
    pub(crate) id: NodeId,
    pub(crate) name: String,
    pub(crate) children: Vec<Arc<Node>>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct File {
    pub(crate) id: NodeId,
    pub(crate) name: String,
}

/// A node in the tree.
///
/// Nodes carry no parent pointer; parents are found by searching from the
/// roots. Once a node is part of a published [`Tree`](crate::Tree) it is never
/// mutated, edits build replacement nodes and share everything else.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Node {
    Folder(Folder),
    File(File),
}

impl Node {
    /// Create an empty folder with a fresh id.
    pub fn folder(name: impl Into<String>) -> Self {
        Self::folder_with(name, Vec::new())
    }

    /// Create a folder with a fresh id and the given children.
    pub fn folder_with(name: impl Into<String>, children: Vec<Node>) -> Self {
        Node::Folder(Folder {
            id: NodeId::next(),
            name: name.into(),
            children: children.into_iter().map(Arc::new).collect(),
        })
    }

    /// Create a file with a fresh id.
    pub fn file(name: impl Into<String>) -> Self {
        Node::File(File {
            id: NodeId::next(),
            name: name.into(),
        })
    }

    /// Create a node of the given kind carrying its default name.
    pub fn new_default(kind: NodeKind) -> Self {
        match kind {
            NodeKind::Folder => Self::folder(kind.default_name()),
            NodeKind::File => Self::file(kind.default_name()),
        }
    }

    pub fn id(&self) -> NodeId {
        match self {
            Node::Folder(f) => f.id,
            Node::File(f) => f.id,
        }
    }

    pub fn name(&self) -> &str {
        match self {
            Node::Folder(f) => &f.name,
            Node::File(f) => &f.name,
        }
    }

    pub fn kind(&self) -> NodeKind {
        match self {
            Node::Folder(_) => NodeKind::Folder,
            Node::File(_) => NodeKind::File,
        }
    }

    pub fn is_folder(&self) -> bool {
        matches!(self, Node::Folder(_))
    }

    /// Children in display order. Always empty for files.
    pub fn children(&self) -> &[Arc<Node>] {
        match self {
            Node::Folder(f) => &f.children,
            Node::File(_) => &[],
        }
    }

    /// Ids of this node and everything below it, pre-order.
    pub fn descendant_ids(&self) -> Vec<NodeId> {
        let mut ids = Vec::new();
        collect_ids(self, &mut ids);
        ids
    }

    /// Find a node by id within this subtree (including self).
    pub fn find(&self, id: NodeId) -> Option<&Node> {
        if self.id() == id {
            return Some(self);
        }
        self.children().iter().find_map(|child| child.find(id))
    }

    /// Copy of this node with a different name. Id, kind and children are kept.
    pub(crate) fn with_name(&self, name: String) -> Node {
        match self {
            Node::Folder(f) => Node::Folder(Folder {
                id: f.id,
                name,
                children: f.children.clone(),
            }),
            Node::File(f) => Node::File(File { id: f.id, name }),
        }
    }

    /// Copy of a folder with replaced children. Files are returned unchanged.
    pub(crate) fn with_children(&self, children: Vec<Arc<Node>>) -> Node {
        match self {
            Node::Folder(f) => Node::Folder(Folder {
                id: f.id,
                name: f.name.clone(),
                children,
            }),
            Node::File(_) => self.clone(),
        }
    }
}

fn collect_ids(node: &Node, out: &mut Vec<NodeId>) {
    out.push(node.id());
    for child in node.children() {
        collect_ids(child, out);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ids_are_distinct() {
        let a = Node::file("a");
        let b = Node::file("a");
        assert_ne!(a.id(), b.id());
    }

    #[test]
    fn test_file_has_no_children() {
        let file = Node::file("readme.md");
        assert!(file.children().is_empty());
        assert_eq!(file.with_children(vec![Arc::new(Node::file("x"))]), file);
    }

    #[test]
    fn test_descendant_ids_pre_order() {
        let tree = Node::folder_with(
            "src",
            vec![Node::folder_with("lib", vec![Node::file("a.rs")]), Node::file("main.rs")],
        );
        let ids = tree.descendant_ids();
        assert_eq!(ids.len(), 4);
        assert_eq!(ids[0], tree.id());
        assert_eq!(ids[1], tree.children()[0].id());
        assert_eq!(ids[2], tree.children()[0].children()[0].id());
        assert_eq!(ids[3], tree.children()[1].id());
    }

    #[test]
    fn test_with_name_keeps_identity() {
        let folder = Node::folder_with("old", vec![Node::file("x")]);
        let renamed = folder.with_name("new".into());
        assert_eq!(renamed.id(), folder.id());
        assert_eq!(renamed.kind(), NodeKind::Folder);
        assert_eq!(renamed.name(), "new");
        assert!(Arc::ptr_eq(&renamed.children()[0], &folder.children()[0]));
    }
}
