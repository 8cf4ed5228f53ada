//! File system helpers for the application layer.
//!
//! Validates the route specification file given on the command line and
//! writes the answer report when `--output` is set.

use std::fs::OpenOptions;
use std::io::{BufWriter, Error as IoError, Write};
use std::path::Path;

use super::error::AppError;
use super::verbose_eprintln;

/// Checks that `route_file_path` exists and is a file, and returns it as a
/// `&str` for the graph loader.
///
/// # Errors
/// Returns `AppError::General` if the path is missing or not a file, and
/// `AppError::InvalidPath` if it is not valid UTF-8.
pub fn validate_route_file<'p>(route_file_path: &'p Path, quiet_mode: bool) -> Result<&'p str, AppError> {
    if !route_file_path.exists() {
        let error_msg = format!("File not found: {}", route_file_path.display());
        verbose_eprintln!(quiet_mode, "Input Error: {}", error_msg);
        return Err(AppError::General(error_msg));
    }
    if !route_file_path.is_file() {
        let error_msg = format!("Path is not a file: {}", route_file_path.display());
        verbose_eprintln!(quiet_mode, "Input Error: {}", error_msg);
        return Err(AppError::General(error_msg));
    }

    route_file_path
        .to_str()
        .ok_or_else(|| AppError::InvalidPath(route_file_path.display().to_string()))
}

/// Writes string content to a file, creating or truncating it.
///
/// The writer is flushed before returning so the caller sees the complete
/// file immediately.
pub fn write_content_to_file(file_path: &Path, content: &str) -> Result<(), IoError> {
    let file = OpenOptions::new()
        .create(true)
        .write(true)
        .truncate(true)
        .open(file_path)?;
    let mut writer = BufWriter::new(file);
    writer.write_all(content.as_bytes())?;
    writer.flush()?;
    Ok(())
}
