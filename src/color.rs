use serde::{Deserialize, Deserializer, Serialize};

use crate::error::{RasterError, Result};

/// A packed 8-bit RGB pixel.
#[repr(C)]
#[derive(
    Debug,
    Default,
    Copy,
    Clone,
    PartialEq,
    Eq,
    Hash,
    bytemuck::Pod,
    bytemuck::Zeroable,
    Serialize,
    Deserialize,
)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const BLACK: Rgb = Rgb::new(0, 0, 0);
    pub const WHITE: Rgb = Rgb::new(255, 255, 255);

    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    pub fn greyscale_sum(self) -> u16 {
        self.r as u16 + self.g as u16 + self.b as u16
    }

    pub fn darker(self) -> Self {
        self.darker_by(BrightnessFactor::default())
    }

    pub fn brighter(self) -> Self {
        self.brighter_by(BrightnessFactor::default())
    }

    pub fn darker_by(self, factor: BrightnessFactor) -> Self {
        let f = factor.get();
        let scale = |c: u8| (c as f64 * f) as u8;
        Self::new(scale(self.r), scale(self.g), scale(self.b))
    }

    // Channels below floor(1 / (1 - f)) are raised to it; black becomes grey.
    pub fn brighter_by(self, factor: BrightnessFactor) -> Self {
        let f = factor.get();
        let floor = (1.0 / (1.0 - f)).min(255.0) as u8;

        if self == Self::BLACK {
            return Self::new(floor, floor, floor);
        }

        let scale = |c: u8| {
            let c = if c > 0 && c < floor { floor } else { c };
            (c as f64 / f).min(255.0) as u8
        };
        Self::new(scale(self.r), scale(self.g), scale(self.b))
    }
}

impl From<[u8; 3]> for Rgb {
    fn from([r, g, b]: [u8; 3]) -> Self {
        Self::new(r, g, b)
    }
}

impl From<Rgb> for [u8; 3] {
    fn from(value: Rgb) -> Self {
        [value.r, value.g, value.b]
    }
}

/// In the open interval `(0, 1)`.
#[derive(Debug, Copy, Clone, PartialEq, PartialOrd, Serialize)]
#[serde(transparent)]
pub struct BrightnessFactor(f64);

impl BrightnessFactor {
    pub const DEFAULT: BrightnessFactor = BrightnessFactor(0.7);

    pub fn new(value: f64) -> Result<Self> {
        if value > 0.0 && value < 1.0 {
            Ok(Self(value))
        } else {
            Err(RasterError::InvalidFactor(value))
        }
    }

    pub fn get(self) -> f64 {
        self.0
    }
}

impl Default for BrightnessFactor {
    fn default() -> Self {
        Self::DEFAULT
    }
}

impl<'de> Deserialize<'de> for BrightnessFactor {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let value = f64::deserialize(deserializer)?;
        Self::new(value).map_err(serde::de::Error::custom)
    }
}
