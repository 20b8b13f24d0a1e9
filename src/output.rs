//! Result file handling
//!
//! Writes the collected lines to the user-named output file and optionally
//! streams the file back to the console.

use crate::error::OcrError;
use std::fs::File;
use std::io::{BufRead, BufReader, BufWriter, Write};
use std::path::Path;

/// Write each line followed by a line terminator, in collection order.
/// The destination is created or truncated. No atomic replace is used;
/// whatever was written before a failure remains on disk.
pub fn write_lines(path: &Path, lines: &[String]) -> Result<(), OcrError> {
    let file = File::create(path).map_err(|e| OcrError::FileWrite {
        path: path.to_path_buf(),
        source: e,
    })?;

    let mut writer = BufWriter::new(file);
    for line in lines {
        writeln!(writer, "{}", line).map_err(|e| OcrError::FileWrite {
            path: path.to_path_buf(),
            source: e,
        })?;
    }

    writer.flush().map_err(|e| OcrError::FileWrite {
        path: path.to_path_buf(),
        source: e,
    })?;

    tracing::debug!("Wrote {} lines to {}", lines.len(), path.display());

    Ok(())
}

/// Stream the previously written file to `out`, line by line.
pub fn read_back<W: Write>(path: &Path, out: &mut W) -> Result<(), OcrError> {
    let file = File::open(path).map_err(|e| OcrError::FileRead {
        path: path.to_path_buf(),
        source: e,
    })?;

    for line in BufReader::new(file).lines() {
        let line = line.map_err(|e| OcrError::FileRead {
            path: path.to_path_buf(),
            source: e,
        })?;
        writeln!(out, "{}", line)?;
    }

    Ok(())
}
