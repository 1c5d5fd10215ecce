use thiserror::Error;
use treedit_lib::SeedError;

use crate::config::ConfigError;

/// Errors that stop the editor from starting or keep it from drawing.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("terminal error: {0}")]
    Io(#[from] std::io::Error),
    #[error("could not load tree: {0}")]
    Seed(#[from] SeedError),
    #[error("config error: {0}")]
    Config(#[from] ConfigError),
}
