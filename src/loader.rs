use crate::error::OcrError;
use image::DynamicImage;
use std::path::Path;

/// Decode the image at `path` into an in-memory pixel buffer.
pub fn load(path: &Path) -> Result<DynamicImage, OcrError> {
    let image = image::open(path)
        .map_err(|e| OcrError::ImageDecode(format!("{}: {}", path.display(), e)))?;

    tracing::debug!(
        "Loaded image {} ({}x{})",
        path.display(),
        image.width(),
        image.height()
    );

    Ok(image)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_load_missing_file_is_decode_error() {
        let result = load(Path::new("definitely/does/not/exist.png"));
        assert!(matches!(result, Err(OcrError::ImageDecode(_))));
    }

    #[test]
    fn test_load_non_image_file_is_decode_error() {
        let mut file = tempfile::Builder::new().suffix(".png").tempfile().unwrap();
        file.write_all(b"this is not a png").unwrap();

        let result = load(file.path());
        assert!(matches!(result, Err(OcrError::ImageDecode(_))));
    }

    #[test]
    fn test_load_decodes_valid_image() {
        let img = image::GrayImage::from_pixel(8, 4, image::Luma([255]));
        let file = tempfile::Builder::new().suffix(".png").tempfile().unwrap();
        img.save(file.path()).unwrap();

        let loaded = load(file.path()).unwrap();
        assert_eq!(loaded.width(), 8);
        assert_eq!(loaded.height(), 4);
    }
}
