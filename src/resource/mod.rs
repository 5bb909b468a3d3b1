use anyhow::Result;

use crate::raster::RasterImage;

pub mod file;
pub mod memory;

pub trait ImageSource {
    fn load_image(&self) -> Result<RasterImage>;
}
