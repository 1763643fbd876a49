//! Writing the JSON outputs to disk.

use std::fs;
use std::io;
use std::path::Path;

use serde::Serialize;

use crate::error::{Error, Result};

/// Pretty-print `value` to `path`, creating parent directories as needed.
///
/// Non-ASCII text is written as-is. The file is overwritten in place.
pub fn write_json<T: Serialize + ?Sized>(path: &Path, value: &T) -> Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(|e| Error::fs("create directory", parent, e))?;
    }
    let json = serde_json::to_string_pretty(value)
        .map_err(|e| Error::fs("encode JSON for", path, io::Error::other(e)))?;
    fs::write(path, json).map_err(|e| Error::fs("write", path, e))
}

/// Read an id block file.
pub fn read_text(path: &Path) -> Result<String> {
    fs::read_to_string(path).map_err(|e| Error::fs("read", path, e))
}
