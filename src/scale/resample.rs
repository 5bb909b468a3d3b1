use image::imageops::FilterType;

use crate::color::Rgb;
use crate::error::Result;
use crate::raster::{checked_dimensions, RasterImage};

/// Produces a new image of exactly `width × height` from `source`.
pub trait Resampler {
    fn resample(&self, source: &RasterImage, width: u32, height: u32) -> Result<RasterImage>;
}

impl<F> Resampler for F
where
    F: Fn(&RasterImage, u32, u32) -> Result<RasterImage>,
{
    fn resample(&self, source: &RasterImage, width: u32, height: u32) -> Result<RasterImage> {
        self(source, width, height)
    }
}

/// Center-aligned nearest-neighbour sampling.
#[derive(Debug, Default, Copy, Clone)]
pub struct NearestNeighbor;

impl Resampler for NearestNeighbor {
    fn resample(&self, source: &RasterImage, width: u32, height: u32) -> Result<RasterImage> {
        let (_, _, len) = checked_dimensions(width as i64, height as i64)?;
        let (sw, sh) = source.dimensions();
        let xs: Vec<u32> = (0..width).map(|x| nearest(x, width, sw)).collect();
        let mut pixels = Vec::with_capacity(len);
        for y in 0..height {
            let sy = nearest(y, height, sh);
            pixels.extend(xs.iter().map(|&sx| source.at(sx, sy)));
        }
        RasterImage::from_pixels(width, height, pixels)
    }
}

#[inline]
fn nearest(dst: u32, dst_len: u32, src_len: u32) -> u32 {
    let s = ((dst as f64 + 0.5) * src_len as f64 / dst_len as f64) as u32;
    s.min(src_len - 1)
}

/// No prefiltering, so prefer an `image` filter for large reductions.
#[derive(Debug, Default, Copy, Clone)]
pub struct Bilinear;

impl Resampler for Bilinear {
    fn resample(&self, source: &RasterImage, width: u32, height: u32) -> Result<RasterImage> {
        let (_, _, len) = checked_dimensions(width as i64, height as i64)?;
        let (sw, sh) = source.dimensions();
        let xs: Vec<Tap> = (0..width).map(|x| Tap::new(x, width, sw)).collect();
        let mut pixels = Vec::with_capacity(len);
        for y in 0..height {
            let ty = Tap::new(y, height, sh);
            for tx in &xs {
                let top = lerp(source.at(tx.i0, ty.i0), source.at(tx.i1, ty.i0), tx.t);
                let bottom = lerp(source.at(tx.i0, ty.i1), source.at(tx.i1, ty.i1), tx.t);
                pixels.push(to_rgb(lerp3(top, bottom, ty.t)));
            }
        }
        RasterImage::from_pixels(width, height, pixels)
    }
}

struct Tap {
    i0: u32,
    i1: u32,
    t: f32,
}

impl Tap {
    fn new(dst: u32, dst_len: u32, src_len: u32) -> Self {
        let pos = (dst as f32 + 0.5) * src_len as f32 / dst_len as f32 - 0.5;
        let pos = pos.clamp(0.0, (src_len - 1) as f32);
        let i0 = pos.floor() as u32;
        Self {
            i0,
            i1: (i0 + 1).min(src_len - 1),
            t: pos - i0 as f32,
        }
    }
}

fn lerp(a: Rgb, b: Rgb, t: f32) -> [f32; 3] {
    let a = [a.r as f32, a.g as f32, a.b as f32];
    let b = [b.r as f32, b.g as f32, b.b as f32];
    lerp3(a, b, t)
}

fn lerp3(a: [f32; 3], b: [f32; 3], t: f32) -> [f32; 3] {
    [
        a[0] + (b[0] - a[0]) * t,
        a[1] + (b[1] - a[1]) * t,
        a[2] + (b[2] - a[2]) * t,
    ]
}

fn to_rgb(c: [f32; 3]) -> Rgb {
    let q = |v: f32| v.round().clamp(0.0, 255.0) as u8;
    Rgb::new(q(c[0]), q(c[1]), q(c[2]))
}

/// Delegates to `image::imageops::resize`.
impl Resampler for FilterType {
    fn resample(&self, source: &RasterImage, width: u32, height: u32) -> Result<RasterImage> {
        checked_dimensions(width as i64, height as i64)?;
        let resized = image::imageops::resize(&source.to_rgb_image(), width, height, *self);
        let pixels: &[Rgb] = bytemuck::cast_slice(resized.as_raw());
        RasterImage::from_pixels(width, height, pixels.to_vec())
    }
}
