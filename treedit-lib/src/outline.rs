//! Flattening a tree into the rows a front end draws.

use crate::node::{Node, NodeId, NodeKind};
use crate::tree::Tree;
use crate::view_state::ViewState;

/// Something the user can do from a row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Action {
    AddFolder,
    AddFile,
    Rename,
    Delete,
}

impl Action {
    pub fn label(self) -> &'static str {
        match self {
            Action::AddFolder => "+ Folder",
            Action::AddFile => "+ File",
            Action::Rename => "Rename",
            Action::Delete => "Delete",
        }
    }
}

/// A visible node in the flattened outline.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Row {
    pub id: NodeId,
    pub kind: NodeKind,
    pub name: String,
    /// Depth in tree (0 = root).
    pub depth: usize,
    /// `Some` for folders, `None` for files.
    pub expanded: Option<bool>,
    /// Whether the name is shown as an edit field.
    pub editing: bool,
}

impl Row {
    fn new(node: &Node, depth: usize, view: &ViewState) -> Self {
        Self {
            id: node.id(),
            kind: node.kind(),
            name: node.name().to_string(),
            depth,
            expanded: node.is_folder().then(|| view.is_expanded(node.id())),
            editing: view.is_editing(node.id()),
        }
    }

    pub fn is_folder(&self) -> bool {
        self.kind == NodeKind::Folder
    }

    /// Affordances offered on this row. Only folders offer "add folder".
    pub fn actions(&self) -> &'static [Action] {
        match self.kind {
            NodeKind::Folder => &[Action::AddFolder, Action::AddFile, Action::Rename, Action::Delete],
            NodeKind::File => &[Action::AddFile, Action::Rename, Action::Delete],
        }
    }

    /// Leading whitespace for this row's depth.
    pub fn indent(&self, width: usize) -> String {
        " ".repeat(self.depth * width)
    }
}

/// Visible rows of `tree`, pre-order. Children of collapsed folders are skipped.
pub fn outline(tree: &Tree, view: &ViewState) -> Vec<Row> {
    let mut rows = Vec::new();
    for root in tree.roots() {
        push_rows(root, 0, view, &mut rows);
    }
    rows
}

fn push_rows(node: &Node, depth: usize, view: &ViewState, rows: &mut Vec<Row>) {
    let row = Row::new(node, depth, view);
    let show_children = row.expanded == Some(true);
    rows.push(row);
    if show_children {
        for child in node.children() {
            push_rows(child, depth + 1, view, rows);
        }
    }
}
