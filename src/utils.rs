//! Helpers for log formatting and storage directory checks.

use crate::error::{NewswireError, Result};
use std::fs as stdfs;
use std::path::Path;
use tokio::fs;
use tracing::{info, instrument};

/// Truncate a string for logging purposes.
///
/// Long strings are cut after `max` bytes (backing off to a character
/// boundary) with an ellipsis and byte count appended.
///
/// # Examples
///
/// ```ignore
/// assert_eq!(truncate_for_log("short", 100), "short");
/// assert_eq!(truncate_for_log(&"a".repeat(500), 10), "aaaaaaaaaa…(+490 bytes)");
/// ```
pub fn truncate_for_log(s: &str, max: usize) -> String {
    if s.len() <= max {
        return s.to_string();
    }
    let cut = (0..=max).rev().find(|&i| s.is_char_boundary(i)).unwrap_or(0);
    format!("{}…(+{} bytes)", &s[..cut], s.len() - cut)
}

/// Ensure the storage directory exists and accepts writes.
///
/// Unlike a plain `create_dir_all`, a missing directory is an error: output
/// only ever goes to a directory the operator prepared. Writability is probed
/// by creating and removing a small file.
///
/// # Errors
///
/// [`NewswireError::Io`] if the path is missing, not a directory, or not
/// writable.
#[instrument(level = "info", skip_all, fields(path = %path.display()))]
pub async fn check_writable_dir(path: &Path) -> Result<()> {
    let meta = fs::metadata(path)
        .await
        .map_err(|e| NewswireError::io(path, e))?;
    if !meta.is_dir() {
        return Err(NewswireError::io(
            path,
            std::io::Error::new(std::io::ErrorKind::NotADirectory, "not a directory"),
        ));
    }

    let probe_path = path.join("..__probe_write__");
    match stdfs::File::create(&probe_path) {
        Ok(_) => {
            let _ = stdfs::remove_file(&probe_path);
            info!("Storage directory is writable");
            Ok(())
        }
        Err(e) => Err(NewswireError::io(path, e)),
    }
}
