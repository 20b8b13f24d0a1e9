use std::path::PathBuf;

/// Page segmentation modes understood by the engine.
///
/// Values mirror Tesseract's PSM numbering; only the modes that make sense
/// for whole-image recognition are exposed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[allow(dead_code)]
pub enum PageSegMode {
    /// Fully automatic page segmentation, no orientation detection (PSM 3).
    #[default]
    Auto,
    /// Assume a single uniform block of text (PSM 6).
    SingleBlock,
    /// Treat the image as a single text line (PSM 7).
    SingleLine,
}

impl PageSegMode {
    /// Numeric value expected by Tesseract's `tessedit_pageseg_mode`.
    pub fn as_tess_value(&self) -> &'static str {
        match self {
            Self::Auto => "3",
            Self::SingleBlock => "6",
            Self::SingleLine => "7",
        }
    }
}

/// OCR pipeline configuration.
///
/// None of these are exposed on the command line; the defaults below are the
/// tool's fixed operating point. Keeping them in one struct separates the
/// tunable parameters from structural constants.
#[derive(Debug, Clone)]
pub struct OcrConfig {
    /// Languages the engine recognizes, in priority order.
    pub languages: Vec<String>,
    /// Grayscale cutoff for binarization. Pixels at or above the cutoff
    /// become white (255), pixels below become black (0).
    pub binarize_cutoff: u8,
    /// How the engine segments the page before recognizing characters.
    pub page_seg_mode: PageSegMode,
    /// Directory holding `<lang>.traineddata` files. When unset, training
    /// data is downloaded into a per-user cache directory on first use.
    pub tessdata_dir: Option<PathBuf>,
}

impl Default for OcrConfig {
    fn default() -> Self {
        Self {
            languages: vec!["eng".to_string(), "kor".to_string()],
            binarize_cutoff: 150,
            page_seg_mode: PageSegMode::Auto,
            tessdata_dir: None,
        }
    }
}

impl OcrConfig {
    /// Language list in Tesseract's `+`-joined form, e.g. "eng+kor".
    pub fn language_spec(&self) -> String {
        self.languages.join("+")
    }
}
