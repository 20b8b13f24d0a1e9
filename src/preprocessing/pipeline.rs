use crate::config::OcrConfig;
use crate::error::OcrError;
use image::DynamicImage;
use std::time::Instant;

use super::steps;

/// Preprocessing pipeline with a fixed step order: grayscale, then
/// binarization at the configured cutoff.
pub struct Pipeline {
    cutoff: u8,
}

impl Pipeline {
    pub fn new(config: &OcrConfig) -> Self {
        Self {
            cutoff: config.binarize_cutoff,
        }
    }

    /// Run the preprocessing steps and return the binarized buffer.
    /// Output dimensions always equal input dimensions.
    pub fn process(&self, image: DynamicImage) -> Result<DynamicImage, OcrError> {
        let start = Instant::now();

        let mut img = image;
        img = run_step("grayscale", img, steps::grayscale::apply)?;

        let cutoff = self.cutoff;
        img = run_step("threshold", img, |i| steps::threshold::apply(i, cutoff))?;

        tracing::debug!(
            "Preprocessing finished in {}ms",
            start.elapsed().as_millis()
        );

        Ok(img)
    }
}

fn run_step<F>(name: &str, img: DynamicImage, step_fn: F) -> Result<DynamicImage, OcrError>
where
    F: FnOnce(DynamicImage) -> Result<DynamicImage, OcrError>,
{
    let step_start = Instant::now();
    let result = step_fn(img)?;
    tracing::debug!(
        "Preprocessing step '{}' took {}ms",
        name,
        step_start.elapsed().as_millis()
    );
    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{Rgb, RgbImage};

    #[test]
    fn test_pipeline_produces_binary_buffer() {
        let mut img = RgbImage::from_pixel(20, 10, Rgb([200, 200, 200]));
        img.put_pixel(3, 3, Rgb([10, 10, 10]));

        let pipeline = Pipeline::new(&OcrConfig::default());
        let result = pipeline.process(DynamicImage::ImageRgb8(img)).unwrap();
        let gray = result.to_luma8();

        for pixel in gray.pixels() {
            assert!(pixel.0[0] == 0 || pixel.0[0] == 255);
        }
    }

    #[test]
    fn test_pipeline_preserves_dimensions() {
        let img = RgbImage::new(33, 17);
        let pipeline = Pipeline::new(&OcrConfig::default());
        let result = pipeline.process(DynamicImage::ImageRgb8(img)).unwrap();
        assert_eq!(result.width(), 33);
        assert_eq!(result.height(), 17);
    }
}
