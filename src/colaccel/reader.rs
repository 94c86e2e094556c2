use std::fs;
use std::path::Path;
use log::info;

use super::format::layout;
use super::types::error::Result;
use super::types::models::{ParsedFile, SectionMap};

/// Reads and parses a collision accelerator file from disk.
///
/// The whole file is loaded into memory first; the buffer is dropped once
/// the records are decoded.
///
/// # Errors
/// Returns an error if:
/// - File cannot be read
/// - A section count implies more bytes than the file holds
pub fn read_file(path: impl AsRef<Path>) -> Result<ParsedFile> {
    let path = path.as_ref();
    info!("Opening collision accelerator: {}", path.display());
    let buffer = fs::read(path)?;
    layout::parse(&buffer)
}

/// Reads a file from disk and locates its sections without decoding records.
pub fn scan_file(path: impl AsRef<Path>) -> Result<SectionMap> {
    let path = path.as_ref();
    info!("Scanning collision accelerator layout: {}", path.display());
    let buffer = fs::read(path)?;
    layout::scan(&buffer)
}
