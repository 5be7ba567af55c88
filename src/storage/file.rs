use directories::ProjectDirs;
use std::fs;
use std::path::PathBuf;
use tracing::warn;

use super::StorageBackend;

/// File-per-key store rooted at a directory.
///
/// Each key maps to `<dir>/<key>.json`. Read failures of any kind are a
/// plain `None`; write and remove failures are logged and swallowed so a
/// broken disk degrades to an always-miss cache instead of failed readings.
#[derive(Debug, Clone)]
pub struct FileStore {
    dir: PathBuf,
}

impl FileStore {
    /// Store rooted at an explicit directory (created lazily on first write).
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// Store rooted at the platform cache directory for this application
    /// (`~/.cache/astrocast/` on Linux, or the XDG equivalent elsewhere).
    ///
    /// Returns `None` when no home directory can be determined.
    pub fn default_location() -> Option<Self> {
        let dirs = ProjectDirs::from("", "", "astrocast")?;
        Some(Self::new(dirs.cache_dir()))
    }

    pub fn dir(&self) -> &std::path::Path {
        &self.dir
    }

    fn path_for(&self, key: &str) -> PathBuf {
        // Keys are normally hex digests; anything else is flattened into a
        // filename-safe form.
        let safe: String = key
            .chars()
            .map(|c| if c.is_ascii_alphanumeric() || c == '-' || c == '_' { c } else { '_' })
            .collect();
        self.dir.join(format!("{}.json", safe))
    }
}

impl StorageBackend for FileStore {
    fn read(&self, key: &str) -> Option<String> {
        fs::read_to_string(self.path_for(key)).ok()
    }

    fn write(&self, key: &str, value: &str) {
        if let Err(e) = fs::create_dir_all(&self.dir) {
            warn!(dir = %self.dir.display(), error = %e, "cache directory creation failed");
            return;
        }
        if let Err(e) = fs::write(self.path_for(key), value) {
            warn!(key, error = %e, "cache write failed");
        }
    }

    fn remove(&self, key: &str) {
        let path = self.path_for(key);
        if let Err(e) = fs::remove_file(&path) {
            if e.kind() != std::io::ErrorKind::NotFound {
                warn!(key, error = %e, "cache remove failed");
            }
        }
    }

    fn name(&self) -> &'static str {
        "file"
    }
}
