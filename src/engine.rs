use crate::error::OcrError;
use image::DynamicImage;

/// Trait that all OCR engines must implement
pub trait OcrEngine {
    /// Returns the engine identifier (e.g., "tesseract")
    fn name(&self) -> &'static str;

    /// Recognize text in a preprocessed image buffer and return it as a
    /// single UTF-8 block. Engine resources acquired for the call must be
    /// released before returning, on success and failure alike.
    fn recognize(&self, image: &DynamicImage) -> Result<String, OcrError>;
}
