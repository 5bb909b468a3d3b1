use serde::{Deserialize, Serialize};

use crate::config::Settings;
use crate::error::{RasterError, Result};
use crate::raster::RasterImage;

mod resample;

pub use self::resample::{Bilinear, NearestNeighbor, Resampler};

#[derive(Debug, Default, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Resampling {
    #[default]
    Nearest,
    Bilinear,
    Triangle,
    CatmullRom,
    Gaussian,
    Lanczos3,
}

impl Resampler for Resampling {
    fn resample(&self, source: &RasterImage, width: u32, height: u32) -> Result<RasterImage> {
        use image::imageops::FilterType;
        match self {
            Resampling::Nearest => NearestNeighbor.resample(source, width, height),
            Resampling::Bilinear => Bilinear.resample(source, width, height),
            Resampling::Triangle => FilterType::Triangle.resample(source, width, height),
            Resampling::CatmullRom => FilterType::CatmullRom.resample(source, width, height),
            Resampling::Gaussian => FilterType::Gaussian.resample(source, width, height),
            Resampling::Lanczos3 => FilterType::Lanczos3.resample(source, width, height),
        }
    }
}

/// `None` when the image already fits. Squares take the landscape branch.
pub fn fit_dimensions(width: u32, height: u32, max_dimension: u32) -> Option<(u32, u32)> {
    if width <= max_dimension && height <= max_dimension {
        return None;
    }
    let proportional = |short: u32, long: u32| -> u32 {
        let scaled = (short as f64 * max_dimension as f64 / long as f64).round();
        (scaled as u32).clamp(1, max_dimension)
    };
    if width >= height {
        Some((max_dimension, proportional(height, width)))
    } else {
        Some((proportional(width, height), max_dimension))
    }
}

/// Returns `image` itself when it already fits.
pub fn scale_to_fit<R>(image: RasterImage, max_dimension: u32, resampler: &R) -> Result<RasterImage>
where
    R: Resampler + ?Sized,
{
    if max_dimension == 0 {
        return Err(RasterError::InvalidDimension {
            width: 0,
            height: 0,
        });
    }

    let (width, height) = image.dimensions();
    match fit_dimensions(width, height, max_dimension) {
        None => {
            log::debug!("Skipping scale: {width}x{height} fits within {max_dimension}");
            Ok(image)
        }
        Some((new_width, new_height)) => {
            log::debug!("Scaling {width}x{height} to {new_width}x{new_height}");
            let scaled = resampler.resample(&image, new_width, new_height)?;
            if scaled.dimensions() != (new_width, new_height) {
                return Err(RasterError::ResampleSize {
                    expected: (new_width, new_height),
                    found: scaled.dimensions(),
                });
            }
            Ok(scaled)
        }
    }
}

impl RasterImage {
    /// [`scale_to_fit`] with nearest-neighbour resampling.
    pub fn scale_to_fit(self, max_dimension: u32) -> Result<RasterImage> {
        scale_to_fit(self, max_dimension, &NearestNeighbor)
    }

    /// [`scale_to_fit`] with the resampler chosen in `settings`.
    pub fn scale_to_fit_with(self, max_dimension: u32, settings: &Settings) -> Result<RasterImage> {
        scale_to_fit(self, max_dimension, &settings.resampling)
    }
}
