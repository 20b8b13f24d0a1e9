use std::io;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum OcrError {
    #[error("Could not open or decode the input image: {0}")]
    ImageDecode(String),

    #[error("Failed to initialize OCR engine: {0}")]
    EngineInit(String),

    #[error("Text recognition failed: {0}")]
    Recognition(String),

    #[error("Could not write OCR result to {}: {source}", .path.display())]
    FileWrite { path: PathBuf, source: io::Error },

    #[error("Could not read OCR result from {}: {source}", .path.display())]
    FileRead { path: PathBuf, source: io::Error },

    #[error("Console I/O failed: {0}")]
    Console(#[from] io::Error),
}
