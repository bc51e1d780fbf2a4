//! Plain file reads with size limits

use std::fs::{self, File};
use std::io::Read;

use crate::{Error, NormalizedPath, Result};

/// Maximum accepted size for a configuration document (4 MiB).
pub const MAX_FILE_SIZE: u64 = 4 * 1024 * 1024;

/// Read text content from a file.
pub fn read_text(path: &NormalizedPath) -> Result<String> {
    let content = read_bytes(path)?;
    String::from_utf8(content).map_err(|e| {
        Error::io(path.to_native(), std::io::Error::new(std::io::ErrorKind::InvalidData, e))
    })
}

/// Read raw bytes from a file.
///
/// The size limit is checked against the file's metadata before reading,
/// and the read itself stops one byte past the limit.
pub fn read_bytes(path: &NormalizedPath) -> Result<Vec<u8>> {
    let native_path = path.to_native();
    let file = File::open(&native_path).map_err(|e| Error::io(&native_path, e))?;
    let size = file.metadata().map_err(|e| Error::io(&native_path, e))?.len();
    check_size(path, size)?;

    let mut content = Vec::with_capacity(size as usize);
    file.take(MAX_FILE_SIZE + 1)
        .read_to_end(&mut content)
        .map_err(|e| Error::io(&native_path, e))?;
    check_size(path, content.len() as u64)?;
    Ok(content)
}

/// List the regular files directly inside `dir`, sorted by name.
pub fn list_files(dir: &NormalizedPath) -> Result<Vec<NormalizedPath>> {
    let native_dir = dir.to_native();
    let entries = fs::read_dir(&native_dir).map_err(|e| Error::io(&native_dir, e))?;

    let mut files = Vec::new();
    for entry in entries.flatten() {
        let is_file = entry.file_type().map(|t| t.is_file()).unwrap_or(false);
        if is_file {
            files.push(NormalizedPath::new(entry.path()));
        }
    }
    files.sort_by(|a, b| a.as_str().cmp(b.as_str()));
    Ok(files)
}

/// Check whether `dir` is a directory holding at least one entry.
pub fn is_non_empty_dir(dir: &NormalizedPath) -> Result<bool> {
    if !dir.is_dir() {
        return Ok(false);
    }
    let native_dir = dir.to_native();
    let mut entries = fs::read_dir(&native_dir).map_err(|e| Error::io(&native_dir, e))?;
    Ok(entries.next().is_some())
}

fn check_size(path: &NormalizedPath, size: u64) -> Result<()> {
    if size > MAX_FILE_SIZE {
        return Err(Error::TooLarge {
            path: path.to_native(),
            size,
            max: MAX_FILE_SIZE,
        });
    }
    Ok(())
}
