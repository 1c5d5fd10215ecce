//! Per-node transient view state.

use std::collections::HashMap;

use crate::node::{Node, NodeId, NodeKind};
use crate::tree::Tree;

/// View flags for a single node.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NodeView {
    pub kind: NodeKind,
    /// Only meaningful for folders.
    pub expanded: bool,
    pub editing: bool,
}

impl NodeView {
    fn new(kind: NodeKind) -> Self {
        Self {
            kind,
            expanded: kind == NodeKind::Folder,
            editing: false,
        }
    }
}

/// Expanded/editing flags keyed by node id.
///
/// Owned next to the tree rather than by whatever draws it, so redraws never
/// reset it. Entries must be dropped when their node is deleted, see
/// [`ViewState::on_node_removed`].
#[derive(Debug, Clone, Default)]
pub struct ViewState {
    entries: HashMap<NodeId, NodeView>,
}

impl ViewState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed an entry for every node in `tree`. Folders start expanded.
    pub fn for_tree(tree: &Tree) -> Self {
        let mut state = Self::new();
        for (_, node) in tree.depth_first() {
            state.entries.insert(node.id(), NodeView::new(node.kind()));
        }
        state
    }

    /// Register a newly inserted node and its subtree.
    pub fn track(&mut self, node: &Node) {
        self.entries
            .entry(node.id())
            .or_insert_with(|| NodeView::new(node.kind()));
        for child in node.children() {
            self.track(child);
        }
    }

    pub fn get(&self, id: NodeId) -> Option<&NodeView> {
        self.entries.get(&id)
    }

    pub fn contains(&self, id: NodeId) -> bool {
        self.entries.contains_key(&id)
    }

    /// Number of tracked nodes.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    // -------------------------------------------------------------------------
    // Expand/collapse
    // -------------------------------------------------------------------------

    /// Whether folder `id` shows its children.
    ///
    /// Untracked ids report `true`, the default for new folders.
    pub fn is_expanded(&self, id: NodeId) -> bool {
        self.entries.get(&id).is_none_or(|view| view.expanded)
    }

    /// Flip the expanded flag of folder `id`. Returns `false` if nothing changed.
    pub fn toggle_expanded(&mut self, id: NodeId) -> bool {
        match self.folder_mut(id) {
            Some(view) => {
                view.expanded = !view.expanded;
                true
            }
            None => false,
        }
    }

    /// Returns `true` if the folder was collapsed before.
    pub fn expand(&mut self, id: NodeId) -> bool {
        self.set_expanded(id, true)
    }

    /// Returns `true` if the folder was expanded before.
    pub fn collapse(&mut self, id: NodeId) -> bool {
        self.set_expanded(id, false)
    }

    fn set_expanded(&mut self, id: NodeId, expanded: bool) -> bool {
        match self.folder_mut(id) {
            Some(view) if view.expanded != expanded => {
                view.expanded = expanded;
                true
            }
            _ => false,
        }
    }

    fn folder_mut(&mut self, id: NodeId) -> Option<&mut NodeView> {
        self.entries
            .get_mut(&id)
            .filter(|view| view.kind == NodeKind::Folder)
    }

    // -------------------------------------------------------------------------
    // Editing
    // -------------------------------------------------------------------------

    pub fn is_editing(&self, id: NodeId) -> bool {
        self.entries.get(&id).is_some_and(|view| view.editing)
    }

    /// The node currently being renamed, if any.
    pub fn editing(&self) -> Option<NodeId> {
        self.entries
            .iter()
            .find(|(_, view)| view.editing)
            .map(|(id, _)| *id)
    }

    /// Set the editing flag of `id`.
    ///
    /// Starting an edit ends any edit in progress on another node, so at most
    /// one node is ever editing. Untracked ids are ignored.
    pub fn set_editing(&mut self, id: NodeId, editing: bool) -> bool {
        if !self.entries.contains_key(&id) {
            return false;
        }
        if editing {
            for (other, view) in self.entries.iter_mut() {
                if *other != id {
                    view.editing = false;
                }
            }
        }
        match self.entries.get_mut(&id) {
            Some(view) if view.editing != editing => {
                view.editing = editing;
                true
            }
            _ => false,
        }
    }

    // -------------------------------------------------------------------------
    // Purge
    // -------------------------------------------------------------------------

    /// Drop the entries of a deleted node and all of its descendants.
    pub fn on_node_removed(&mut self, node: &Node) {
        self.purge(node.descendant_ids());
    }

    /// Drop the entries for `ids`.
    pub fn purge(&mut self, ids: impl IntoIterator<Item = NodeId>) {
        for id in ids {
            self.entries.remove(&id);
        }
    }
}
