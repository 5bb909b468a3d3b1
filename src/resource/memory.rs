use anyhow::{anyhow, Result};

use crate::raster::RasterImage;
use crate::resource::ImageSource;

/// Encoded image bytes already held in memory, e.g. from a network response.
pub struct MemoryImageSource {
    pub bytes: Vec<u8>,
    pub mime_type: Option<String>,
}

impl MemoryImageSource {
    pub fn new(bytes: Vec<u8>) -> Self {
        Self {
            bytes,
            mime_type: None,
        }
    }

    pub fn with_mime_type(bytes: Vec<u8>, mime_type: impl Into<String>) -> Self {
        Self {
            bytes,
            mime_type: Some(mime_type.into()),
        }
    }
}

impl ImageSource for MemoryImageSource {
    fn load_image(&self) -> Result<RasterImage> {
        let image_format = match &self.mime_type {
            Some(mime_type) => match image::ImageFormat::from_mime_type(mime_type) {
                Some(image_format) => Some(image_format),
                None => return Err(anyhow!("The given MIME type is not supported: {mime_type}")),
            },
            None => None,
        };

        log::debug!(
            "Decoding {} bytes of image data (format: {image_format:?})",
            self.bytes.len()
        );
        let decoded = match image_format {
            Some(image_format) => image::load_from_memory_with_format(&self.bytes, image_format)?,
            None => image::load_from_memory(&self.bytes)?,
        };

        Ok(RasterImage::try_from(&decoded)?)
    }
}
