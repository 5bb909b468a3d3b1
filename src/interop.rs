//! Conversions to and from the `image` crate's buffers.
//!
//! Decoded sources may carry alpha or wider channels; everything is reduced
//! to 8-bit RGB on the way in.
use image::{DynamicImage, RgbImage};

use crate::error::{RasterError, Result};
use crate::raster::RasterImage;

impl RasterImage {
    pub fn to_rgb_image(&self) -> RgbImage {
        RgbImage::from_fn(self.width(), self.height(), |x, y| {
            image::Rgb(<[u8; 3]>::from(self.at(x, y)))
        })
    }
}

impl TryFrom<RgbImage> for RasterImage {
    type Error = RasterError;

    fn try_from(value: RgbImage) -> Result<Self> {
        let (width, height) = value.dimensions();
        RasterImage::from_rgb_bytes(width as i64, height as i64, value.as_raw())
    }
}

impl TryFrom<&DynamicImage> for RasterImage {
    type Error = RasterError;

    fn try_from(value: &DynamicImage) -> Result<Self> {
        RasterImage::try_from(value.to_rgb8())
    }
}
