// Chunk: docs/chunks/text_codec - Document file access
//! Reading and writing whole documents.
//!
//! Writes go to a sibling temp file that is then renamed over the target, so
//! a failed save never leaves a truncated document behind.

use std::fs;
use std::io;
use std::path::Path;

use crate::error::{EditorError, EditorResult};

/// Reads the full contents of `path`.
///
/// A missing file is reported as [`EditorError::FileNotFound`] so callers can
/// treat it as a new document.
pub fn read_document(path: &Path) -> EditorResult<Vec<u8>> {
    fs::read(path).map_err(|source| {
        if source.kind() == io::ErrorKind::NotFound {
            EditorError::FileNotFound(path.to_path_buf())
        } else {
            EditorError::Read {
                path: path.to_path_buf(),
                source,
            }
        }
    })
}

/// Replaces the contents of `path` with `bytes`.
pub fn write_document(path: &Path, bytes: &[u8]) -> EditorResult<()> {
    let write_err = |source| EditorError::Write {
        path: path.to_path_buf(),
        source,
    };

    let mut temp_name = path.file_name().unwrap_or_default().to_os_string();
    temp_name.push(".tmp");
    let temp_path = path.with_file_name(temp_name);

    fs::write(&temp_path, bytes).map_err(write_err)?;
    if let Err(source) = fs::rename(&temp_path, path) {
        let _ = fs::remove_file(&temp_path);
        return Err(write_err(source));
    }
    Ok(())
}
