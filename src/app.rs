//! Pipeline orchestration
//!
//! Load -> Preprocess -> Recognize -> Collect -> Write -> optional read-back.
//! Any failure before the Result Writer aborts the run: the output-filename
//! prompt never fires and no empty result file is left behind.

use crate::config::OcrConfig;
use crate::error::OcrError;
use crate::{engines, lines, loader, output, preprocessing, prompts};
use std::io::{self, BufRead, Write};
use std::path::Path;

/// Run one OCR pass over the image at `input`, interacting on stdin/stdout.
pub fn run(config: &OcrConfig, input: &Path) -> anyhow::Result<()> {
    let recognized = recognize_lines(config, input)?;

    let stdin = io::stdin();
    let stdout = io::stdout();
    save_and_report(&recognized, &mut stdin.lock(), &mut stdout.lock())?;

    Ok(())
}

/// The non-interactive half: decode, binarize, recognize, collect.
fn recognize_lines(config: &OcrConfig, input: &Path) -> Result<Vec<String>, OcrError> {
    let image = loader::load(input)?;
    let prepared = preprocessing::Pipeline::new(config).process(image)?;

    let engine = engines::create(config)?;
    let text = engine.recognize(&prepared)?;

    let recognized = lines::split_lines(&text);
    tracing::info!(
        "Collected {} lines from {} engine",
        recognized.len(),
        engine.name()
    );

    Ok(recognized)
}

/// The interactive half: prompt for a destination, write the lines, and on
/// confirmation stream the file back.
fn save_and_report<R: BufRead, W: Write>(
    recognized: &[String],
    input: &mut R,
    console: &mut W,
) -> Result<(), OcrError> {
    let destination = prompts::output_path(input, console)?;
    output::write_lines(&destination, recognized)?;
    writeln!(console, "OCR result saved to {}", destination.display())?;

    if prompts::confirm_read_back(input, console)? {
        writeln!(console, "Content of {}:", destination.display())?;
        output::read_back(&destination, console)?;
    }

    Ok(())
}
