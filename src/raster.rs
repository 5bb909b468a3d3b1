//! Owned RGB raster in row-major layout (`index = y * width + x`).
//!
//! Coordinates and requested dimensions are taken as `i64` so that negative
//! values coming from a host coordinate space are reported as errors instead
//! of being unrepresentable or wrapping.
use crate::color::{BrightnessFactor, Rgb};
use crate::config::Settings;
use crate::diagnostics::{DiagnosticsSink, NoopSink};
use crate::error::{RasterError, Result};
use crate::filter::Filter;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RasterImage {
    width: u32,
    height: u32,
    pixels: Vec<Rgb>,
}

impl RasterImage {
    /// Construct a black canvas of size `width × height`.
    pub fn new(width: i64, height: i64) -> Result<Self> {
        let (w, h, len) = checked_dimensions(width, height)?;
        Ok(Self {
            width: w,
            height: h,
            pixels: vec![Rgb::BLACK; len],
        })
    }

    /// Deep copy of `source`. Never shares storage with it.
    pub fn copy_from(source: &RasterImage) -> Self {
        source.clone()
    }

    /// Construct from tightly packed RGB bytes.
    pub fn from_rgb_bytes(width: i64, height: i64, bytes: &[u8]) -> Result<Self> {
        let (w, h, len) = checked_dimensions(width, height)?;
        let expected = len * 3;
        if bytes.len() != expected {
            return Err(RasterError::BufferSize {
                expected,
                found: bytes.len(),
            });
        }
        let pixels: &[Rgb] = bytemuck::cast_slice(bytes);
        Ok(Self {
            width: w,
            height: h,
            pixels: pixels.to_vec(),
        })
    }

    pub(crate) fn from_pixels(width: u32, height: u32, pixels: Vec<Rgb>) -> Result<Self> {
        let (width, height, len) = checked_dimensions(width as i64, height as i64)?;
        if pixels.len() != len {
            return Err(RasterError::BufferSize {
                expected: len * 3,
                found: pixels.len() * 3,
            });
        }
        Ok(Self {
            width,
            height,
            pixels,
        })
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn dimensions(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    /// Read-only view of the whole buffer, row-major.
    pub fn pixels(&self) -> &[Rgb] {
        &self.pixels
    }

    /// The buffer as packed RGB bytes, three per pixel.
    pub fn as_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.pixels)
    }

    pub fn rows(&self) -> std::slice::ChunksExact<'_, Rgb> {
        self.pixels.chunks_exact(self.width as usize)
    }

    pub fn get_pixel(&self, x: i64, y: i64) -> Result<Rgb> {
        let i = self.index(x, y)?;
        Ok(self.pixels[i])
    }

    pub fn set_pixel(&mut self, x: i64, y: i64, color: Rgb) -> Result<()> {
        let i = self.index(x, y)?;
        self.pixels[i] = color;
        Ok(())
    }

    /// Unchecked read for in-crate loops over known-valid coordinates.
    #[inline]
    pub(crate) fn at(&self, x: u32, y: u32) -> Rgb {
        self.pixels[y as usize * self.width as usize + x as usize]
    }

    pub fn darken(&mut self) {
        self.darken_by(BrightnessFactor::default());
    }

    pub fn darken_by(&mut self, factor: BrightnessFactor) {
        self.map_pixels(|_, _, px| px.darker_by(factor));
    }

    pub fn brighten(&mut self) {
        self.brighten_by(BrightnessFactor::default());
    }

    pub fn brighten_by(&mut self, factor: BrightnessFactor) {
        self.map_pixels(|_, _, px| px.brighter_by(factor));
    }

    /// Reports every pixel's channel sum and then brightens the pixel.
    ///
    /// The sum is only reported; it is not written back as a grey value.
    pub fn apply_threshold(&mut self) {
        self.apply_threshold_with(BrightnessFactor::default(), &mut NoopSink);
    }

    pub fn apply_threshold_with(
        &mut self,
        factor: BrightnessFactor,
        sink: &mut impl DiagnosticsSink,
    ) {
        self.map_pixels(|x, y, px| {
            sink.greyscale(x, y, px.greyscale_sum());
            px.brighter_by(factor)
        });
    }

    /// Run a named filter with the factor configured in `settings`.
    pub fn apply(&mut self, filter: Filter, settings: &Settings, sink: &mut impl DiagnosticsSink) {
        let factor = settings.brightness_factor;
        match filter {
            Filter::Darken => self.darken_by(factor),
            Filter::Brighten => self.brighten_by(factor),
            Filter::Threshold => self.apply_threshold_with(factor, sink),
        }
    }

    /// Replace every pixel with `f(x, y, old)`, visiting each coordinate once in row-major order.
    fn map_pixels(&mut self, mut f: impl FnMut(u32, u32, Rgb) -> Rgb) {
        let w = self.width as usize;
        for (y, row) in self.pixels.chunks_exact_mut(w).enumerate() {
            for (x, px) in row.iter_mut().enumerate() {
                *px = f(x as u32, y as u32, *px);
            }
        }
    }

    fn index(&self, x: i64, y: i64) -> Result<usize> {
        if x < 0 || y < 0 || x >= self.width as i64 || y >= self.height as i64 {
            return Err(RasterError::OutOfBounds {
                x,
                y,
                width: self.width,
                height: self.height,
            });
        }
        Ok(y as usize * self.width as usize + x as usize)
    }
}

/// Validate requested dimensions, returning them with the pixel count.
pub(crate) fn checked_dimensions(width: i64, height: i64) -> Result<(u32, u32, usize)> {
    let invalid = || RasterError::InvalidDimension { width, height };
    let w = u32::try_from(width).map_err(|_| invalid())?;
    let h = u32::try_from(height).map_err(|_| invalid())?;
    if w == 0 || h == 0 {
        return Err(invalid());
    }
    let len = (w as usize)
        .checked_mul(h as usize)
        .filter(|n| n.checked_mul(3).is_some())
        .ok_or_else(invalid)?;
    Ok((w, h, len))
}
