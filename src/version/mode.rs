//! Resolution modes

use std::fmt;
use std::str::FromStr;

use crate::version::error::InvalidModeError;

/// Which version a caller wants to link against
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ResolutionMode {
    /// The version the viewer is on, or the site default
    #[default]
    Latest,
    /// The highest-numbered version other than `current`
    LatestReleased,
}

impl ResolutionMode {
    /// Returns the canonical string representation of the mode
    pub fn as_str(&self) -> &'static str {
        match self {
            ResolutionMode::Latest => "latest",
            ResolutionMode::LatestReleased => "latestReleased",
        }
    }
}

impl fmt::Display for ResolutionMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ResolutionMode {
    type Err = InvalidModeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "latest" => Ok(ResolutionMode::Latest),
            "latestReleased" => Ok(ResolutionMode::LatestReleased),
            _ => Err(InvalidModeError {
                mode: s.to_string(),
            }),
        }
    }
}
