//! Error types

mod edit;
mod seed;

pub use edit::*;
pub use seed::*;
