use std::fs;
use std::path::{Path, PathBuf};

use crate::config::constants::BACKUP_SUFFIX;
use crate::errors::{LazyDevError, LazyDevResult};

/// File reads and the destructive in-place overwrite, with an optional
/// write-ahead backup of the original bytes.
pub struct FileEditor;

impl FileEditor {
    pub fn read(path: &Path) -> LazyDevResult<String> {
        if !path.exists() {
            return Err(LazyDevError::not_found(path));
        }

        fs::read_to_string(path)
            .map_err(|e| LazyDevError::file_error(path, "read", &e.to_string()))
    }

    pub fn backup_path(path: &Path) -> PathBuf {
        let mut name = path.as_os_str().to_os_string();
        name.push(".");
        name.push(BACKUP_SUFFIX);
        PathBuf::from(name)
    }

    /// Replace the file's entire contents.
    ///
    /// With `backup`, the original bytes are written to `<path>.bak` before
    /// the overwrite; if the overwrite itself fails, restoration from the
    /// backup is attempted before the error is returned.
    pub fn overwrite(path: &Path, contents: &str, backup: bool) -> LazyDevResult<()> {
        if !path.exists() {
            return Err(LazyDevError::not_found(path));
        }

        let backup_file = if backup {
            let original = fs::read(path)
                .map_err(|e| LazyDevError::file_error(path, "read", &e.to_string()))?;
            let backup_file = Self::backup_path(path);
            fs::write(&backup_file, original)
                .map_err(|e| LazyDevError::file_error(&backup_file, "write backup", &e.to_string()))?;
            log::info!("💾 Wrote backup to {}", backup_file.display());
            Some(backup_file)
        } else {
            None
        };

        if let Err(e) = fs::write(path, contents) {
            if let Some(backup_file) = &backup_file {
                if let Err(restore_err) = fs::copy(backup_file, path) {
                    log::error!(
                        "❌ Failed to restore {} from backup: {}",
                        path.display(),
                        restore_err
                    );
                }
            }
            return Err(LazyDevError::file_error(path, "write", &e.to_string()));
        }

        Ok(())
    }
}
