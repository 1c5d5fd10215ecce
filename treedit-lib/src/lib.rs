//! Hierarchical folder/file tree editing.
//!
//! [`Tree`] is an immutable snapshot with persistent insert, rename and delete.
//! [`ViewState`] keeps expanded/editing flags per node id, [`outline`] turns
//! both into drawable rows and [`Session`] routes user intents to them.

pub mod error;
pub mod node;
pub mod outline;
pub mod seed;
pub mod session;
pub mod tree;
pub mod view_state;

pub use error::{EditError, SeedError};
pub use node::{Node, NodeId, NodeKind};
pub use outline::{Action, Row, outline};
pub use seed::Seed;
pub use session::{Confirm, Intent, Session, ThemeMode};
pub use tree::{Inserted, Removed, Tree};
pub use view_state::{NodeView, ViewState};
