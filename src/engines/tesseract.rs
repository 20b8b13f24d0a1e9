//! Tesseract engine implementation
//!
//! Uses the tesseract-static crate for static linking (no system
//! dependencies). Downloads tessdata (training data) automatically on first
//! use unless a tessdata directory is configured.

use crate::config::{OcrConfig, PageSegMode};
use crate::engine::OcrEngine;
use crate::error::OcrError;
use image::DynamicImage;
use std::fs::File;
use std::io::Write;
use std::path::Path;
use tesseract_static::tesseract::{OcrEngineMode, Tesseract};

/// Tesseract OCR engine
pub struct TesseractEngine {
    /// Path to tessdata directory
    tessdata_path: String,
    /// Languages in Tesseract's `+`-joined form
    language_spec: String,
    /// Page segmentation mode applied before recognition
    page_seg_mode: PageSegMode,
}

impl TesseractEngine {
    /// Create a new Tesseract-based OCR engine
    pub fn new(config: &OcrConfig) -> Result<Self, OcrError> {
        let language_spec = config.language_spec();

        // Ensure tessdata is available for every configured language
        let tessdata_path = match &config.tessdata_dir {
            Some(dir) => dir
                .to_str()
                .map(|s| s.to_string())
                .ok_or_else(|| OcrError::EngineInit("Invalid tessdata path".to_string()))?,
            None => ensure_tessdata_available(&config.languages)?,
        };

        // Validate that tessdata is accessible by doing a test initialization
        let test_tess = Tesseract::new_with_oem(
            Some(&tessdata_path),
            Some(&language_spec),
            OcrEngineMode::LstmOnly,
        )
        .map_err(|e| {
            OcrError::EngineInit(format!("Failed to initialize Tesseract: {}", e))
        })?;
        drop(test_tess);

        tracing::info!(
            "Tesseract engine initialized (tessdata: {}, languages: {})",
            tessdata_path,
            language_spec
        );

        Ok(Self {
            tessdata_path,
            language_spec,
            page_seg_mode: config.page_seg_mode,
        })
    }
}

impl OcrEngine for TesseractEngine {
    fn name(&self) -> &'static str {
        "tesseract"
    }

    fn recognize(&self, image: &DynamicImage) -> Result<String, OcrError> {
        // Convert to RGB8 for consistent handling
        let rgb_img = image.to_rgb8();
        let (width, height) = rgb_img.dimensions();

        // Convert to BMP in memory (BMP is always supported by leptonica)
        let mut bmp_data = Vec::new();
        {
            let mut cursor = std::io::Cursor::new(&mut bmp_data);
            rgb_img
                .write_to(&mut cursor, image::ImageFormat::Bmp)
                .map_err(|e| {
                    OcrError::Recognition(format!("Failed to convert to BMP: {}", e))
                })?;
        }

        tracing::debug!(
            "Recognizing image: {}x{}, BMP size: {} bytes",
            width,
            height,
            bmp_data.len()
        );

        // The handle lives only for this call; dropping it on any early
        // return releases the engine resources.
        let mut tess = Tesseract::new_with_oem(
            Some(&self.tessdata_path),
            Some(&self.language_spec),
            OcrEngineMode::LstmOnly,
        )
        .map_err(|e| OcrError::Recognition(format!("Failed to create Tesseract: {}", e)))?;

        tess = tess
            .set_variable("tessedit_pageseg_mode", self.page_seg_mode.as_tess_value())
            .map_err(|e| {
                OcrError::Recognition(format!("Failed to set page segmentation mode: {}", e))
            })?;

        tess = tess.set_image_from_mem(&bmp_data).map_err(|e| {
            OcrError::Recognition(format!(
                "Failed to set image ({}x{}, {} bytes): {}",
                width,
                height,
                bmp_data.len(),
                e
            ))
        })?;

        tess = tess
            .recognize()
            .map_err(|e| OcrError::Recognition(format!("Failed to recognize text: {}", e)))?;

        let text = tess
            .get_text()
            .map_err(|e| OcrError::Recognition(format!("Failed to get text: {}", e)))?;

        // Mean confidence on a 0-100 scale
        let confidence = tess.mean_text_conf();
        tracing::info!(
            "Recognition finished, mean confidence: {}, text length: {}",
            confidence,
            text.len()
        );

        Ok(text)
    }
}

// ============================================================================
// Tessdata download helpers
// ============================================================================

/// Ensure tessdata is available for all languages, downloading if needed
fn ensure_tessdata_available(languages: &[String]) -> Result<String, OcrError> {
    // Get cache directory for tessdata
    let cache_dir = dirs::cache_dir()
        .unwrap_or_else(std::env::temp_dir)
        .join("ocrpipe")
        .join("tessdata");

    std::fs::create_dir_all(&cache_dir).map_err(|e| {
        OcrError::EngineInit(format!("Failed to create tessdata directory: {}", e))
    })?;

    for language in languages {
        let traineddata_path = cache_dir.join(format!("{}.traineddata", language));
        if traineddata_path.exists() {
            tracing::debug!("Using cached tessdata for '{}'", language);
            continue;
        }

        let url = tessdata_url(language);
        tracing::info!(
            "Downloading tessdata for '{}' (this may take a moment)...",
            language
        );
        download_file(&url, &traineddata_path)?;
        tracing::info!("Downloaded tessdata to {:?}", traineddata_path);
    }

    // Return the directory path (Tesseract expects the directory, not the file)
    cache_dir
        .to_str()
        .map(|s| s.to_string())
        .ok_or_else(|| OcrError::EngineInit("Invalid tessdata path".to_string()))
}

/// Get tessdata download URL for a language
fn tessdata_url(language: &str) -> String {
    // Use tessdata_fast for smaller, faster downloads
    format!(
        "https://github.com/tesseract-ocr/tessdata_fast/raw/main/{}.traineddata",
        language
    )
}

/// Download a file from URL to path using ureq
fn download_file(url: &str, path: &Path) -> Result<(), OcrError> {
    let response = ureq::get(url)
        .call()
        .map_err(|e| OcrError::EngineInit(format!("Failed to download tessdata: {}", e)))?;

    let mut file = File::create(path).map_err(|e| {
        OcrError::EngineInit(format!("Failed to create tessdata file: {}", e))
    })?;

    let buffer = response.into_body().read_to_vec().map_err(|e| {
        OcrError::EngineInit(format!("Failed to read tessdata response: {}", e))
    })?;

    file.write_all(&buffer).map_err(|e| {
        OcrError::EngineInit(format!("Failed to write tessdata file: {}", e))
    })?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tessdata_url_points_at_fast_models() {
        let url = tessdata_url("kor");
        assert!(url.contains("tessdata_fast"));
        assert!(url.ends_with("kor.traineddata"));
    }
}
