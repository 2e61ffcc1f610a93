//! Command helper utilities

use std::fs;
use std::path::Path;

use crate::error::{MdstitchError, Result};

/// Read a whole input document as UTF-8 text.
pub fn read_input(path: &Path) -> Result<String> {
    if !path.is_file() {
        return Err(MdstitchError::FileNotFound {
            path: path.display().to_string(),
        });
    }
    fs::read_to_string(path).map_err(|e| MdstitchError::FileReadFailed {
        path: path.display().to_string(),
        reason: e.to_string(),
    })
}

/// Write the result document, creating the destination directory if absent.
pub fn write_output(path: &Path, content: &str) -> Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() && !parent.exists() {
            fs::create_dir_all(parent).map_err(|e| MdstitchError::FileWriteFailed {
                path: path.display().to_string(),
                reason: e.to_string(),
            })?;
        }
    }
    fs::write(path, content).map_err(|e| MdstitchError::FileWriteFailed {
        path: path.display().to_string(),
        reason: e.to_string(),
    })
}
