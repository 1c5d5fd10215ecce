//! Editing session: current snapshot, view state and intent dispatch.

use serde::{Deserialize, Serialize};

use crate::error::EditError;
use crate::node::{NodeId, NodeKind};
use crate::outline::{Row, outline};
use crate::tree::Tree;
use crate::view_state::ViewState;

/// Yes/no prompt consulted before deleting.
pub trait Confirm {
    /// Ask the user `message`. Returns `true` to proceed.
    fn confirm(&mut self, message: &str) -> bool;
}

impl<F: FnMut(&str) -> bool> Confirm for F {
    fn confirm(&mut self, message: &str) -> bool {
        self(message)
    }
}

/// Light or dark display mode. Has no effect on the tree.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemeMode {
    #[default]
    Dark,
    Light,
}

impl ThemeMode {
    pub fn toggle(self) -> Self {
        match self {
            ThemeMode::Dark => ThemeMode::Light,
            ThemeMode::Light => ThemeMode::Dark,
        }
    }
}

/// A user action routed to the model.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Intent {
    ToggleExpanded(NodeId),
    /// Add a folder to the folder at (or containing) this node.
    AddFolder(NodeId),
    /// Add a file to the folder at (or containing) this node.
    AddFile(NodeId),
    /// Add a node at the end of the root sequence.
    AddRoot(NodeKind),
    StartRename(NodeId),
    CommitRename(NodeId, String),
    CancelRename(NodeId),
    /// Delete after confirmation.
    Delete(NodeId),
    ToggleTheme,
}

/// The state of one editor view.
///
/// Every dispatched intent runs to completion and leaves a new tree snapshot
/// in place. Edits the model refuses (stale ids, empty names) are no-ops.
#[derive(Debug, Clone, Default)]
pub struct Session {
    tree: Tree,
    view: ViewState,
    theme: ThemeMode,
    /// Node created by the last successful insert.
    last_inserted: Option<NodeId>,
}

impl Session {
    pub fn new(tree: Tree) -> Self {
        let view = ViewState::for_tree(&tree);
        Self {
            tree,
            view,
            theme: ThemeMode::default(),
            last_inserted: None,
        }
    }

    pub fn with_theme(mut self, theme: ThemeMode) -> Self {
        self.theme = theme;
        self
    }

    pub fn tree(&self) -> &Tree {
        &self.tree
    }

    pub fn view(&self) -> &ViewState {
        &self.view
    }

    pub fn theme(&self) -> ThemeMode {
        self.theme
    }

    /// Id of the node created by the most recent insert.
    pub fn last_inserted(&self) -> Option<NodeId> {
        self.last_inserted
    }

    /// Visible rows for the current snapshot.
    pub fn rows(&self) -> Vec<Row> {
        outline(&self.tree, &self.view)
    }

    /// Apply `intent`. Returns `true` if anything visible changed.
    pub fn dispatch(&mut self, intent: Intent, confirm: &mut dyn Confirm) -> bool {
        log::debug!("dispatch {:?}", intent);
        let result = match intent {
            Intent::ToggleExpanded(id) => Ok(self.view.toggle_expanded(id)),
            Intent::AddFolder(id) => self.add(id, NodeKind::Folder),
            Intent::AddFile(id) => self.add(id, NodeKind::File),
            Intent::AddRoot(kind) => Ok(self.add_root(kind)),
            Intent::StartRename(id) => Ok(self.view.set_editing(id, true)),
            Intent::CommitRename(id, name) => self.commit_rename(id, &name),
            Intent::CancelRename(id) => Ok(self.view.set_editing(id, false)),
            Intent::Delete(id) => self.delete(id, confirm),
            Intent::ToggleTheme => {
                self.theme = self.theme.toggle();
                Ok(true)
            }
        };

        match result {
            Ok(changed) => changed,
            Err(err) => {
                log::debug!("ignored edit: {}", err);
                false
            }
        }
    }

    fn add(&mut self, id: NodeId, kind: NodeKind) -> Result<bool, EditError> {
        let parent = self.tree.resolve_add_target(id)?;
        let inserted = self.tree.insert_child(parent, kind)?;
        self.view.track(&inserted.node);
        self.view.expand(parent);
        self.last_inserted = Some(inserted.node.id());
        self.tree = inserted.tree;
        Ok(true)
    }

    fn add_root(&mut self, kind: NodeKind) -> bool {
        let inserted = self.tree.insert_root(kind);
        self.view.track(&inserted.node);
        self.last_inserted = Some(inserted.node.id());
        self.tree = inserted.tree;
        true
    }

    fn commit_rename(&mut self, id: NodeId, name: &str) -> Result<bool, EditError> {
        let was_editing = self.view.set_editing(id, false);
        let tree = match self.tree.rename(id, name) {
            Ok(tree) => tree,
            Err(err) => {
                log::debug!("rename of {} discarded: {}", id, err);
                return Ok(was_editing);
            }
        };
        let changed = tree != self.tree;
        self.tree = tree;
        Ok(changed || was_editing)
    }

    fn delete(&mut self, id: NodeId, confirm: &mut dyn Confirm) -> Result<bool, EditError> {
        let node = self.tree.find(id).ok_or(EditError::NotFound(id))?;
        let message = format!("Are you sure you want to delete {}?", node.name());
        if !confirm.confirm(&message) {
            log::debug!("delete of {} cancelled", id);
            return Ok(false);
        }

        let removed = self.tree.delete(id)?;
        self.view.on_node_removed(&removed.node);
        if self
            .last_inserted
            .is_some_and(|last| !removed.tree.contains(last))
        {
            self.last_inserted = None;
        }
        self.tree = removed.tree;
        Ok(true)
    }
}
