//! Reading and writing SAM files
//!
//! Thin wrappers that pair the parser and serializer with the filesystem.
//! Every failure carries the path it happened on.

use std::fs::{self, File};
use std::io::{BufRead, BufReader, BufWriter, Write};
use std::path::Path;

use crate::sam::ast::{Header, SamFile};
use crate::sam::error::{Result, SamError};
use crate::sam::formats::write_sam;
use crate::sam::parser::{parse_header, parse_sam_file};

/// Read a whole file into memory
pub fn read_to_string(path: impl AsRef<Path>) -> Result<String> {
    let path = path.as_ref();
    log::debug!("reading {}", path.display());
    fs::read_to_string(path).map_err(|e| SamError::io(path, e))
}

/// Read and parse a complete SAM file
pub fn read_sam_file(path: impl AsRef<Path>) -> Result<SamFile> {
    let text = read_to_string(path)?;
    Ok(parse_sam_file(&text)?)
}

/// Read only the leading `@` lines of a file, joined with `\n`
///
/// Reading stops at the first line that does not start with `@`, so large
/// alignment sections are never loaded.
pub fn read_header_text(path: impl AsRef<Path>) -> Result<String> {
    let path = path.as_ref();
    let file = File::open(path).map_err(|e| SamError::io(path, e))?;

    let mut header_lines = Vec::new();
    'lines: for line in BufReader::new(file).lines() {
        let line = line.map_err(|e| SamError::io(path, e))?;
        // `lines` only splits on `\n`; files using bare `\r` arrive in one piece
        for record in line.split('\r') {
            if !record.starts_with('@') {
                break 'lines;
            }
            header_lines.push(record.to_string());
        }
    }
    log::debug!("read {} header lines from {}", header_lines.len(), path.display());
    Ok(header_lines.join("\n"))
}

/// Read and parse only the header section of a file
pub fn read_header(path: impl AsRef<Path>) -> Result<Header> {
    let text = read_header_text(path)?;
    Ok(parse_header(&text)?)
}

/// Write a document with the full-file writer
pub fn write_sam_file(path: impl AsRef<Path>, file: &SamFile) -> Result<()> {
    let path = path.as_ref();
    log::debug!(
        "writing {} alignments to {}",
        file.alignments.len(),
        path.display()
    );
    let handle = File::create(path).map_err(|e| SamError::io(path, e))?;
    let mut writer = BufWriter::new(handle);
    write_sam(&mut writer, file).map_err(|e| SamError::io(path, e))?;
    writer.flush().map_err(|e| SamError::io(path, e))
}
