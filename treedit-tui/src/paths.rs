//! Platform-specific directory paths.
//!
//! Uses XDG on Linux, standard locations on macOS/Windows.

use std::fs;
use std::path::{Path, PathBuf};

use directories::ProjectDirs;

const QUALIFIER: &str = "dev";
const ORGANIZATION: &str = "treedit";
const APPLICATION: &str = "treedit";

/// Get project directories, or None if home directory cannot be determined.
fn project_dirs() -> Option<ProjectDirs> {
    ProjectDirs::from(QUALIFIER, ORGANIZATION, APPLICATION)
}

/// Get the cache directory for logs.
///
/// - Linux: `$XDG_CACHE_HOME/treedit` or `~/.cache/treedit`
/// - macOS: `~/Library/Caches/dev.treedit.treedit`
/// - Windows: `C:\Users\<User>\AppData\Local\treedit\treedit\cache`
pub fn cache_dir() -> Option<PathBuf> {
    project_dirs().map(|dirs| dirs.cache_dir().to_path_buf())
}

/// Get the config directory.
///
/// - Linux: `$XDG_CONFIG_HOME/treedit` or `~/.config/treedit`
/// - macOS: `~/Library/Application Support/dev.treedit.treedit`
/// - Windows: `C:\Users\<User>\AppData\Roaming\treedit\treedit\config`
pub fn config_dir() -> Option<PathBuf> {
    project_dirs().map(|dirs| dirs.config_dir().to_path_buf())
}

/// Get the path to the config file.
pub fn config_file() -> Option<PathBuf> {
    config_dir().map(|dir| dir.join("config.json"))
}

const LATEST_LOG: &str = "latest.log";

/// Archived logs kept next to `latest.log`.
const KEPT_LOGS: usize = 25;

/// Get the path to the log of the current run.
pub fn log_file() -> Option<PathBuf> {
    cache_dir().map(|dir| dir.join(LATEST_LOG))
}

/// Archive the previous run's log under its start time and prune old archives.
///
/// Call before the logger opens `latest.log`.
pub fn rotate_logs() {
    let Some(cache) = cache_dir() else { return };
    let latest = cache.join(LATEST_LOG);

    if let Ok(meta) = fs::metadata(&latest) {
        let started: chrono::DateTime<chrono::Local> = meta
            .modified()
            .map(Into::into)
            .unwrap_or_else(|_| chrono::Local::now());
        let archived = cache.join(format!("{}.log", started.format("%Y-%m-%d_%H-%M-%S")));
        if let Err(err) = fs::rename(&latest, &archived) {
            eprintln!("could not archive {}: {}", latest.display(), err);
        }
    }

    cleanup_old_logs(&cache, KEPT_LOGS);
}

/// Delete archived logs beyond the newest `keep`. Archive names sort by time.
fn cleanup_old_logs(cache_dir: &Path, keep: usize) {
    let Ok(entries) = fs::read_dir(cache_dir) else { return };

    let mut archives: Vec<PathBuf> = entries
        .filter_map(Result::ok)
        .map(|entry| entry.path())
        .filter(|path| {
            path.extension().is_some_and(|ext| ext == "log")
                && path.file_name().is_some_and(|name| name != LATEST_LOG)
        })
        .collect();
    archives.sort_unstable_by(|a, b| b.cmp(a));

    for stale in archives.iter().skip(keep) {
        let _ = fs::remove_file(stale);
    }
}
