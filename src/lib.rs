//! In-memory RGB raster images with bounds-checked pixel access, point-wise
//! brightness filters and proportional downscaling.

pub mod color;
pub mod config;
pub mod diagnostics;
mod error;
pub mod filter;
mod interop;
mod raster;
pub mod resource;
pub mod scale;

pub use crate::color::{BrightnessFactor, Rgb};
pub use crate::config::Settings;
pub use crate::diagnostics::{DiagnosticsSink, LogSink, NoopSink};
pub use crate::error::{RasterError, Result};
pub use crate::filter::Filter;
pub use crate::raster::RasterImage;
pub use crate::scale::{fit_dimensions, scale_to_fit, Resampler, Resampling};
