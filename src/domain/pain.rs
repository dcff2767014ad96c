//! Pain score scale

use crate::error::{BodylogError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Pain intensity on a 0-5 scale, 0 meaning no pain recorded
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct PainScore(u8);

impl PainScore {
    pub const MAX: u8 = 5;

    pub fn new(value: u8) -> Result<Self> {
        if value <= Self::MAX {
            Ok(PainScore(value))
        } else {
            Err(BodylogError::InvalidPainScore(value))
        }
    }

    pub fn value(self) -> u8 {
        self.0
    }
}

impl fmt::Display for PainScore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for PainScore {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        let value: u8 = s
            .trim()
            .parse()
            .map_err(|_| format!("Invalid pain score: '{}'. Expected a number from 0 to 5", s))?;
        PainScore::new(value).map_err(|e| e.to_string())
    }
}
