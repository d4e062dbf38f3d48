//! Diagnostic log setup.
//!
//! The terminal belongs to the UI, so everything goes to a file.

use std::fs::{self, File, OpenOptions};
use std::io;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use tracing_subscriber::EnvFilter;

/// `<state dir>/storefront/storefront.log`, falling back to the cache dir and
/// then the system temp dir.
pub fn default_log_path() -> PathBuf {
    dirs::state_dir()
        .or_else(dirs::cache_dir)
        .unwrap_or_else(std::env::temp_dir)
        .join("storefront")
        .join("storefront.log")
}

fn open_log_file(path: &Path) -> io::Result<File> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    OpenOptions::new().create(true).append(true).open(path)
}

/// Install the global subscriber writing to `path`.
///
/// `RUST_LOG` overrides `default_filter`.
pub fn init_tracing(default_filter: &str, path: &Path) -> io::Result<()> {
    let file = open_log_file(path)?;
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_filter));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_level(true)
        .with_ansi(false)
        .with_timer(tracing_subscriber::fmt::time::UtcTime::rfc_3339())
        .with_writer(Mutex::new(file))
        .try_init()
        .map_err(io::Error::other)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_path_ends_with_log_name() {
        let path = default_log_path();
        assert!(path.ends_with("storefront/storefront.log"));
    }

    #[test]
    fn open_creates_missing_parent_dirs() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("nested").join("app.log");
        open_log_file(&path).unwrap();
        assert!(path.exists());
    }
}
