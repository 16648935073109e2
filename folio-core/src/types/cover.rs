//! Cover image sizes

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Size variant of a cover image
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
pub enum CoverSize {
    #[serde(rename = "S")]
    Small,

    #[default]
    #[serde(rename = "M")]
    Medium,

    #[serde(rename = "L")]
    Large,
}

impl fmt::Display for CoverSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let letter = match self {
            CoverSize::Small => "S",
            CoverSize::Medium => "M",
            CoverSize::Large => "L",
        };
        f.write_str(letter)
    }
}

impl FromStr for CoverSize {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_uppercase().as_str() {
            "S" => Ok(CoverSize::Small),
            "M" => Ok(CoverSize::Medium),
            "L" => Ok(CoverSize::Large),
            other => Err(format!("unknown cover size '{}', expected S, M or L", other)),
        }
    }
}
