//! Interactive console prompts
//!
//! Generic over the reader and writer so the interactive flow can be driven
//! by in-memory buffers in tests.

use std::io::{self, BufRead, Write};
use std::path::PathBuf;

/// Ask for the output file name and return the entered path.
pub fn output_path<R: BufRead, W: Write>(input: &mut R, output: &mut W) -> io::Result<PathBuf> {
    write!(output, "Enter output file name: ")?;
    output.flush()?;

    let mut line = String::new();
    input.read_line(&mut line)?;
    Ok(PathBuf::from(line.trim_end_matches(['\r', '\n'])))
}

/// Ask whether to load the saved result. Only `y` or `Y` confirms.
pub fn confirm_read_back<R: BufRead, W: Write>(input: &mut R, output: &mut W) -> io::Result<bool> {
    write!(output, "Do you want to load the saved OCR result? (y/n): ")?;
    output.flush()?;

    let mut line = String::new();
    input.read_line(&mut line)?;
    Ok(matches!(line.trim().chars().next(), Some('y') | Some('Y')))
}
