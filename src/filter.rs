use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::RasterError;

/// The point-wise filters a host can request by name.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Filter {
    Darken,
    Brighten,
    Threshold,
}

impl Filter {
    pub const ALL: [Filter; 3] = [Filter::Darken, Filter::Brighten, Filter::Threshold];

    pub fn name(self) -> &'static str {
        match self {
            Filter::Darken => "darken",
            Filter::Brighten => "brighten",
            Filter::Threshold => "threshold",
        }
    }
}

impl fmt::Display for Filter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Filter {
    type Err = RasterError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Filter::ALL
            .into_iter()
            .find(|filter| filter.name().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| RasterError::UnknownFilter(s.to_string()))
    }
}
