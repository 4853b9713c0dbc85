//! Filesystem primitives with explicit directory creation

use crate::error::Result;
use std::fs;
use std::io;
use std::path::Path;
use walkdir::WalkDir;

/// Create the parent directory of `dest` if needed, then copy `src` over it
pub fn copy_file(src: &Path, dest: &Path) -> io::Result<u64> {
    if let Some(parent) = dest.parent() {
        fs::create_dir_all(parent)?;
    }
    fs::copy(src, dest)
}

/// Write `content` to `dest`, creating parent directories
pub fn write_file(dest: &Path, content: &str) -> io::Result<()> {
    if let Some(parent) = dest.parent() {
        fs::create_dir_all(parent)?;
    }
    fs::write(dest, content)
}

/// Remove a directory tree; a missing directory is not an error
pub fn remove_dir_if_exists(dir: &Path) -> io::Result<()> {
    match fs::remove_dir_all(dir) {
        Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(()),
        other => other,
    }
}

/// Recursively copy the contents of `src_dir` into `dest_dir`
pub fn copy_dir(src_dir: &Path, dest_dir: &Path) -> Result<usize> {
    let mut copied = 0;
    fs::create_dir_all(dest_dir)?;

    for entry in WalkDir::new(src_dir).min_depth(1) {
        let entry = entry.map_err(io::Error::from)?;
        let relative = entry
            .path()
            .strip_prefix(src_dir)
            .map_err(|e| io::Error::new(io::ErrorKind::InvalidInput, e))?;
        let target = dest_dir.join(relative);

        if entry.file_type().is_dir() {
            fs::create_dir_all(&target)?;
        } else {
            copy_file(entry.path(), &target)?;
            copied += 1;
        }
    }

    Ok(copied)
}
