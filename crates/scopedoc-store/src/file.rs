//! File-based store.

use std::fs;
use std::path::{Path, PathBuf};

use crate::ValueStore;

/// File-based [`ValueStore`] rooted at a directory on disk.
///
/// Each key is stored as one file directly under the root; key names are
/// sanitized to a safe file-name alphabet so a hostile key cannot escape
/// the root. I/O failures are logged and swallowed; persistence is
/// best-effort, and a failed write only costs a rebuild next session.
pub struct FileStore {
    root: PathBuf,
}

impl FileStore {
    /// Create a store rooted at `root`. The directory is created lazily on
    /// first write.
    #[must_use]
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    fn path_for(&self, name: &str) -> PathBuf {
        self.root.join(sanitize(name))
    }
}

impl ValueStore for FileStore {
    fn get(&self, name: &str) -> Option<String> {
        fs::read_to_string(self.path_for(name)).ok()
    }

    fn set(&self, name: &str, value: &str) {
        let path = self.path_for(name);
        if let Err(e) = write_value(&self.root, &path, value) {
            tracing::warn!(key = %name, "failed to persist value: {e}");
        }
    }
}

fn write_value(root: &Path, path: &Path, value: &str) -> std::io::Result<()> {
    fs::create_dir_all(root)?;
    fs::write(path, value)
}

/// Map a key to a safe file name: alphanumerics, `-`, `_` and `.` pass
/// through, everything else becomes `_`.
fn sanitize(name: &str) -> String {
    let mut out: String = name
        .chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() || matches!(c, '-' | '_' | '.') {
                c
            } else {
                '_'
            }
        })
        .collect();
    if out.is_empty() {
        out.push('_');
    }
    out
}
