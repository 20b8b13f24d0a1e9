use crate::error::OcrError;
use image::{DynamicImage, GrayImage, Luma};

/// Apply fixed-cutoff binarization.
///
/// Pixels below the cutoff become black (0), pixels at or above become
/// white (255). Applying the same cutoff twice yields the same buffer.
pub fn apply(image: DynamicImage, cutoff: u8) -> Result<DynamicImage, OcrError> {
    let gray = image.to_luma8();
    let binarized = GrayImage::from_fn(gray.width(), gray.height(), |x, y| {
        if gray.get_pixel(x, y).0[0] >= cutoff {
            Luma([255u8])
        } else {
            Luma([0u8])
        }
    });
    Ok(DynamicImage::ImageLuma8(binarized))
}
