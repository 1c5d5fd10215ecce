//! Immutable tree snapshots and structural edits.

use std::sync::Arc;

use crate::error::EditError;
use crate::node::{Node, NodeId, NodeKind};

/// An immutable snapshot of the root sequence.
///
/// Every edit returns a new `Tree`. Subtrees the edit does not touch are
/// shared with the previous snapshot, only the path from the root down to the
/// edited node is copied.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Tree {
    roots: Vec<Arc<Node>>,
}

/// Result of a successful insert.
#[derive(Debug, Clone)]
pub struct Inserted {
    /// Snapshot containing the new node.
    pub tree: Tree,
    /// The node that was created.
    pub node: Arc<Node>,
}

/// Result of a successful delete.
#[derive(Debug, Clone)]
pub struct Removed {
    /// Snapshot without the removed subtree.
    pub tree: Tree,
    /// The subtree that was removed, as it was in the previous snapshot.
    pub node: Arc<Node>,
}

impl Tree {
    pub fn new(roots: Vec<Node>) -> Self {
        Self {
            roots: roots.into_iter().map(Arc::new).collect(),
        }
    }

    pub fn empty() -> Self {
        Self::default()
    }

    pub fn roots(&self) -> &[Arc<Node>] {
        &self.roots
    }

    /// Number of root-level nodes.
    pub fn len(&self) -> usize {
        self.roots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.roots.is_empty()
    }

    // -------------------------------------------------------------------------
    // Lookup
    // -------------------------------------------------------------------------

    pub fn find(&self, id: NodeId) -> Option<&Arc<Node>> {
        find_in(&self.roots, id)
    }

    pub fn contains(&self, id: NodeId) -> bool {
        self.find(id).is_some()
    }

    /// Walk every node pre-order, yielding `(depth, node)`.
    pub fn depth_first(&self) -> DepthFirst<'_> {
        DepthFirst {
            stack: self.roots.iter().rev().map(|node| (0, node)).collect(),
        }
    }

    /// Ids of every node, pre-order.
    pub fn ids(&self) -> Vec<NodeId> {
        self.depth_first().map(|(_, node)| node.id()).collect()
    }

    /// The folder directly containing `id`.
    ///
    /// Returns `None` for root-level nodes and for ids not in the tree.
    pub fn find_parent(&self, id: NodeId) -> Option<&Arc<Node>> {
        parent_in(&self.roots, id)
    }

    /// Folder that receives a child when "add" is triggered on `id`.
    ///
    /// Folders receive children themselves; a file hands the request to its
    /// parent folder. A root-level file has no such folder.
    pub fn resolve_add_target(&self, id: NodeId) -> Result<NodeId, EditError> {
        let node = self.find(id).ok_or(EditError::NotFound(id))?;
        if node.is_folder() {
            return Ok(id);
        }
        self.find_parent(id)
            .map(|parent| parent.id())
            .ok_or(EditError::NoParent(id))
    }

    // -------------------------------------------------------------------------
    // Structural edits
    // -------------------------------------------------------------------------

    /// Append a new node of `kind` to the children of folder `parent`.
    pub fn insert_child(&self, parent: NodeId, kind: NodeKind) -> Result<Inserted, EditError> {
        let target = self.find(parent).ok_or(EditError::NotFound(parent))?;
        if !target.is_folder() {
            return Err(EditError::NotAFolder(parent));
        }

        let node = Arc::new(Node::new_default(kind));
        let roots = rewrite(&self.roots, parent, &mut |folder| {
            let mut children = folder.children().to_vec();
            children.push(Arc::clone(&node));
            Some(Arc::new(folder.with_children(children)))
        })
        .ok_or(EditError::NotFound(parent))?;

        log::debug!("inserted {} {} under {}", kind, node.id(), parent);
        Ok(Inserted {
            tree: Tree { roots },
            node,
        })
    }

    /// Append a new node of `kind` to the end of the root sequence.
    pub fn insert_root(&self, kind: NodeKind) -> Inserted {
        let node = Arc::new(Node::new_default(kind));
        let mut roots = self.roots.clone();
        roots.push(Arc::clone(&node));
        log::debug!("inserted {} {} at root", kind, node.id());
        Inserted {
            tree: Tree { roots },
            node,
        }
    }

    /// Rename node `id`. Surrounding whitespace is trimmed from `new_name`.
    pub fn rename(&self, id: NodeId, new_name: &str) -> Result<Tree, EditError> {
        let name = new_name.trim();
        if name.is_empty() {
            return Err(EditError::EmptyName);
        }

        let node = self.find(id).ok_or(EditError::NotFound(id))?;
        if node.name() == name {
            return Ok(self.clone());
        }

        let roots = rewrite(&self.roots, id, &mut |node| {
            Some(Arc::new(node.with_name(name.to_string())))
        })
        .ok_or(EditError::NotFound(id))?;

        log::debug!("renamed {} to {:?}", id, name);
        Ok(Tree { roots })
    }

    /// Remove node `id` and its subtree.
    ///
    /// Only the target is dropped. A folder left without children by the
    /// removal stays in the tree.
    pub fn delete(&self, id: NodeId) -> Result<Removed, EditError> {
        let node = Arc::clone(self.find(id).ok_or(EditError::NotFound(id))?);
        let roots = rewrite(&self.roots, id, &mut |_| None).ok_or(EditError::NotFound(id))?;

        log::debug!("deleted {} ({} nodes)", id, node.descendant_ids().len());
        Ok(Removed {
            tree: Tree { roots },
            node,
        })
    }
}

impl From<Vec<Node>> for Tree {
    fn from(roots: Vec<Node>) -> Self {
        Self::new(roots)
    }
}

/// Pre-order iterator over a [`Tree`].
pub struct DepthFirst<'a> {
    stack: Vec<(usize, &'a Arc<Node>)>,
}

impl<'a> Iterator for DepthFirst<'a> {
    type Item = (usize, &'a Arc<Node>);

    fn next(&mut self) -> Option<Self::Item> {
        let (depth, node) = self.stack.pop()?;
        self.stack
            .extend(node.children().iter().rev().map(|child| (depth + 1, child)));
        Some((depth, node))
    }
}

fn find_in(nodes: &[Arc<Node>], id: NodeId) -> Option<&Arc<Node>> {
    for node in nodes {
        if node.id() == id {
            return Some(node);
        }
        if let Some(found) = find_in(node.children(), id) {
            return Some(found);
        }
    }
    None
}

fn parent_in(nodes: &[Arc<Node>], id: NodeId) -> Option<&Arc<Node>> {
    for node in nodes {
        if node.children().iter().any(|child| child.id() == id) {
            return Some(node);
        }
        if let Some(parent) = parent_in(node.children(), id) {
            return Some(parent);
        }
    }
    None
}

/// Rebuild `nodes` with node `id` replaced by `edit(node)`, or dropped when
/// `edit` returns `None`.
///
/// Ancestors of `id` are copied, siblings are shared. Returns `None` when `id`
/// does not occur anywhere below `nodes`.
fn rewrite(
    nodes: &[Arc<Node>],
    id: NodeId,
    edit: &mut dyn FnMut(&Arc<Node>) -> Option<Arc<Node>>,
) -> Option<Vec<Arc<Node>>> {
    for (index, node) in nodes.iter().enumerate() {
        if node.id() == id {
            let mut out = nodes.to_vec();
            match edit(node) {
                Some(replacement) => out[index] = replacement,
                None => {
                    out.remove(index);
                }
            }
            return Some(out);
        }

        if let Some(children) = rewrite(node.children(), id, edit) {
            let mut out = nodes.to_vec();
            out[index] = Arc::new(node.with_children(children));
            return Some(out);
        }
    }
    None
}
