//! OCR engine implementations
//!
//! This module contains implementations of the OcrEngine trait. Engines are
//! conditionally compiled based on feature flags.

#[cfg(feature = "engine-tesseract")]
pub mod tesseract;

use crate::config::OcrConfig;
use crate::engine::OcrEngine;
use crate::error::OcrError;

/// Create the OCR engine compiled into this binary.
#[cfg(feature = "engine-tesseract")]
pub fn create(config: &OcrConfig) -> Result<Box<dyn OcrEngine>, OcrError> {
    tracing::info!("Initializing tesseract engine...");
    Ok(Box::new(tesseract::TesseractEngine::new(config)?))
}

#[cfg(not(feature = "engine-tesseract"))]
pub fn create(_config: &OcrConfig) -> Result<Box<dyn OcrEngine>, OcrError> {
    Err(OcrError::EngineInit(
        "No OCR engine available. Build with --features engine-tesseract".to_string(),
    ))
}
