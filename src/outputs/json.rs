//! JSON file writer for fetched payloads.
//!
//! # Output Structure
//!
//! Every fetch lands as one flat file in the storage directory:
//! ```text
//! storage_dir/
//! ├── newswire-25_05_06-14_30_00-section-list.json
//! ├── newswire-25_05_06-14_31_12-nyt_arts.json
//! ├── newswire-25_05_06-14_32_40.json
//! └── mostpopular-25_05_06-14_33_05-viewed_7.json
//! ```
//!
//! # Collisions
//!
//! Two fetches with the same parameters in the same second produce the same
//! name. The later write replaces the earlier one and a warning is logged.

use crate::error::{NewswireError, Result};
use chrono::{DateTime, Local, TimeZone};
use serde_json::Value;
use std::path::{Path, PathBuf};
use tokio::fs;
use tracing::{info, instrument, warn};

/// `strftime` pattern of the timestamp segment: `yy_MM_dd-HH_mm_ss`.
pub const TIMESTAMP_FORMAT: &str = "%y_%m_%d-%H_%M_%S";

/// Build an output filename.
///
/// The result is `<prefix>-<timestamp>-<p1>_<p2>....json`, or
/// `<prefix>-<timestamp>.json` when `params` is empty. Empty parameters are
/// skipped; separators and whitespace inside a parameter become `-` so the
/// name stays a single path component.
///
/// # Examples
///
/// ```ignore
/// let name = output_filename("newswire", &ts, &["nyt".into(), "arts".into()]);
/// assert_eq!(name, "newswire-25_05_06-14_30_00-nyt_arts.json");
/// ```
pub fn output_filename<Tz>(prefix: &str, at: &DateTime<Tz>, params: &[String]) -> String
where
    Tz: TimeZone,
    Tz::Offset: std::fmt::Display,
{
    let mut name = format!("{prefix}-{}", at.format(TIMESTAMP_FORMAT));
    let params: Vec<String> = params
        .iter()
        .filter(|p| !p.is_empty())
        .map(|p| sanitize_component(p))
        .collect();
    if !params.is_empty() {
        name.push('-');
        name.push_str(&params.join("_"));
    }
    name.push_str(".json");
    name
}

/// Filename for a fetch happening now, in local time.
pub fn output_filename_now(prefix: &str, params: &[String]) -> String {
    output_filename(prefix, &Local::now(), params)
}

fn sanitize_component(s: &str) -> String {
    s.chars()
        .map(|c| if c == '/' || c == '\\' || c.is_whitespace() { '-' } else { c })
        .collect()
}

/// Serialize `payload` into `dir/filename`.
///
/// The directory must already exist; it is never created here. An existing
/// file with the same name is overwritten.
///
/// # Returns
///
/// The full path written.
///
/// # Errors
///
/// [`NewswireError::Io`] if `dir` is missing, is not a directory, or the write
/// fails.
#[instrument(level = "info", skip_all, fields(dir = %dir.display(), %filename))]
pub async fn write_payload(dir: &Path, filename: &str, payload: &Value) -> Result<PathBuf> {
    let meta = fs::metadata(dir)
        .await
        .map_err(|e| NewswireError::io(dir, e))?;
    if !meta.is_dir() {
        return Err(NewswireError::io(
            dir,
            std::io::Error::new(std::io::ErrorKind::NotADirectory, "not a directory"),
        ));
    }

    let path = dir.join(filename);
    if fs::try_exists(&path).await.unwrap_or(false) {
        warn!(path = %path.display(), "Output file already exists; overwriting");
    }

    let json = serde_json::to_string(payload)?;
    fs::write(&path, json)
        .await
        .map_err(|e| NewswireError::io(&path, e))?;
    info!(path = %path.display(), "Wrote JSON payload");

    Ok(path)
}
