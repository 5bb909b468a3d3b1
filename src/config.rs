use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::color::BrightnessFactor;
use crate::scale::Resampling;

/// Tunables for filters and scaling. Every field has a default, so a
/// partial JSON document is enough.
#[derive(Debug, Default, Copy, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct Settings {
    pub brightness_factor: BrightnessFactor,
    pub resampling: Resampling,
}

impl Settings {
    pub fn from_json(json: &str) -> Result<Self> {
        serde_json::from_str(json).context("Failed to parse raster settings")
    }
}
