mod app;
mod config;
mod confirm;
mod editor;
mod error;
mod event;
mod input;
mod paths;
mod term;
mod text;
mod theme;
mod view;

use std::fs::{self, File};
use std::io;
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use log::LevelFilter;
use simplelog::WriteLogger;
use treedit_lib::seed::{load_seeds, sample};
use treedit_lib::{Session, Tree};

use crate::app::App;
use crate::config::Config;
use crate::error::AppError;

fn main() -> ExitCode {
    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}

fn run() -> Result<(), AppError> {
    let config = Config::load()?;
    init_logging(config.log_level()?);

    let tree_path = std::env::args_os().nth(1).map(PathBuf::from).or(config.tree.clone());
    let seeds = match &tree_path {
        Some(path) => {
            log::info!("loading tree from {}", path.display());
            load_seeds(path)?
        }
        None => sample(),
    };
    let tree = Tree::from_seeds(&seeds)?;
    let session = Session::new(tree).with_theme(config.theme);

    App::new(session, config.indent)?.run()
}

/// Log to `latest.log` in the cache dir. The editor still runs without it.
fn init_logging(level: LevelFilter) {
    paths::rotate_logs();
    let Some(path) = paths::log_file() else {
        return;
    };
    let file = match open_log(&path) {
        Ok(file) => file,
        Err(err) => {
            eprintln!("logging disabled, could not open {}: {}", path.display(), err);
            return;
        }
    };
    if WriteLogger::init(level, simplelog::Config::default(), file).is_ok() {
        log::info!("treedit {} logging to {}", env!("CARGO_PKG_VERSION"), path.display());
    }
}

/// Create `path` and any missing parent directories.
fn open_log(path: &Path) -> io::Result<File> {
    if let Some(dir) = path.parent() {
        fs::create_dir_all(dir)?;
    }
    File::create(path)
}
