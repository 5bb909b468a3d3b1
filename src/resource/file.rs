use std::path::PathBuf;

use anyhow::{Context, Result};

use crate::raster::RasterImage;
use crate::resource::ImageSource;

pub struct FileImageSource {
    pub path: PathBuf,
}

impl FileImageSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl ImageSource for FileImageSource {
    fn load_image(&self) -> Result<RasterImage> {
        log::debug!("Loading image file: {}", self.path.display());
        let decoded = image::open(&self.path)
            .with_context(|| format!("Failed to open {}", self.path.display()))?;
        Ok(RasterImage::try_from(&decoded)?)
    }
}
