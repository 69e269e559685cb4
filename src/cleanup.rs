//! Removal of generated message body files

use crate::error::Result;
use crate::prompt::prompt_line;
use crate::types::is_body_file_name;
use std::fs;
use std::io::{BufRead, Write};
use std::path::{Path, PathBuf};
use tracing::debug;

/// Ask the operator whether to delete generated body files in `dir`, and
/// delete them on `y`. Returns the removed paths.
pub fn cleanup_files<R, W>(dir: &Path, input: &mut R, out: &mut W) -> Result<Vec<PathBuf>>
where
    R: BufRead,
    W: Write,
{
    let choice = prompt_line(
        input,
        out,
        "Do you want to clean up the generated HTML files? (y/n): ",
    )?;
    if !choice.trim().eq_ignore_ascii_case("y") {
        debug!("Cleanup declined");
        return Ok(Vec::new());
    }

    let mut removed = Vec::new();
    for path in body_files(dir)? {
        fs::remove_file(&path)?;
        let name = path.file_name().map_or_else(
            || path.display().to_string(),
            |n| n.to_string_lossy().into_owned(),
        );
        writeln!(out, "Removed {name}")?;
        removed.push(path);
    }
    Ok(removed)
}

/// Generated body files currently in `dir`, sorted by name
pub fn body_files(dir: &Path) -> Result<Vec<PathBuf>> {
    let mut files = Vec::new();
    for entry in fs::read_dir(dir)? {
        let entry = entry?;
        if !entry.file_type()?.is_file() {
            continue;
        }
        if entry.file_name().to_str().is_some_and(is_body_file_name) {
            files.push(entry.path());
        }
    }
    files.sort();
    Ok(files)
}
