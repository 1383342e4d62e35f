//! Roof area estimation from an uploaded photo.
//!
//! No image model is wired in. The placeholder estimator only checks that the
//! upload is a known image format and reports a nominal area for it.

use thiserror::Error;
use tracing::{debug, warn};

use crate::domain::SquareMeters;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum RoofEstimateError {
    #[error("Uploaded image is empty")]
    EmptyImage,
    #[error("Uploaded file is not a supported image")]
    UnsupportedFormat,
}

/// Image container formats recognised by their leading bytes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImageFormat {
    Png,
    Jpeg,
    Gif,
    WebP,
    Bmp,
}

impl ImageFormat {
    pub fn sniff(bytes: &[u8]) -> Option<Self> {
        match bytes {
            [0x89, b'P', b'N', b'G', 0x0D, 0x0A, 0x1A, 0x0A, ..] => Some(ImageFormat::Png),
            [0xFF, 0xD8, 0xFF, ..] => Some(ImageFormat::Jpeg),
            [b'G', b'I', b'F', b'8', b'7' | b'9', b'a', ..] => Some(ImageFormat::Gif),
            [b'R', b'I', b'F', b'F', _, _, _, _, b'W', b'E', b'B', b'P', ..] => {
                Some(ImageFormat::WebP)
            }
            [b'B', b'M', ..] => Some(ImageFormat::Bmp),
            _ => None,
        }
    }
}

pub trait RoofAreaEstimator: Send + Sync {
    fn estimate(&self, image: &[u8]) -> Result<SquareMeters, RoofEstimateError>;
}

pub struct PlaceholderRoofEstimator {
    nominal_area: SquareMeters,
}

impl PlaceholderRoofEstimator {
    pub fn new(nominal_area: SquareMeters) -> Self {
        Self { nominal_area }
    }
}

impl Default for PlaceholderRoofEstimator {
    fn default() -> Self {
        Self::new(SquareMeters::new(150.0))
    }
}

impl RoofAreaEstimator for PlaceholderRoofEstimator {
    fn estimate(&self, image: &[u8]) -> Result<SquareMeters, RoofEstimateError> {
        if image.is_empty() {
            return Err(RoofEstimateError::EmptyImage);
        }

        let Some(format) = ImageFormat::sniff(image) else {
            warn!(bytes = image.len(), "roof photo is not a recognised image");
            return Err(RoofEstimateError::UnsupportedFormat);
        };

        debug!(?format, bytes = image.len(), area = %self.nominal_area, "placeholder roof estimate");
        Ok(self.nominal_area)
    }
}
