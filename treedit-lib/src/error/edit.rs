//! Structural edit errors

use crate::node::NodeId;

/// Reasons a structural edit was refused.
///
/// A refused edit never touches the tree it was applied to. Callers driving a
/// UI treat every variant as a no-op.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum EditError {
    /// The id does not refer to a node in this tree (e.g. it was already deleted).
    #[error("node {0} not found")]
    NotFound(NodeId),

    /// Children can only be added to folders.
    #[error("node {0} is not a folder")]
    NotAFolder(NodeId),

    /// A root-level file has no folder that could receive a sibling.
    #[error("node {0} has no parent folder")]
    NoParent(NodeId),

    /// The new name was empty after trimming whitespace.
    #[error("name must not be empty")]
    EmptyName,
}
