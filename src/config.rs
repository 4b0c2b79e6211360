use std::fs;
use std::path::{Path, PathBuf};

use serde_json::Value;
use tracing::debug;

use crate::errors::Result;

/// Join a relative file path onto a base directory.
pub fn build_local_path(file_path: &str, dir: &Path) -> PathBuf {
    dir.join(file_path)
}

/// Read the file at `dir`/`file_path` as UTF-8 text.
///
/// An absent or unreadable file surfaces as [`crate::HelperError::Io`].
pub fn read_json_file(file_path: &str, dir: &Path) -> Result<String> {
    let path = build_local_path(file_path, dir);
    debug!(path = %path.display(), "reading json file");
    Ok(fs::read_to_string(path)?)
}

/// Parse text as JSON.
///
/// Malformed input surfaces as [`crate::HelperError::Json`].
pub fn parse_json(input: &str) -> Result<Value> {
    Ok(serde_json::from_str(input)?)
}

/// Load a JSON config file: path join, file read, parse.
pub fn load_config(file_path: &str, dir: &Path) -> Result<Value> {
    parse_json(&read_json_file(file_path, dir)?)
}
