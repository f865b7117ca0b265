//! ID types for Fantasy Premier League.

use crate::error::{Result, ScraplError};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Type-safe wrapper for FPL element (player) IDs.
///
/// # Examples
///
/// ```rust
/// use scrapl::PlayerId;
///
/// let id = PlayerId::new(351);
/// assert_eq!(id.as_u32(), 351);
/// assert_eq!(id.to_string(), "351");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct PlayerId(pub u32);

impl PlayerId {
    pub fn new(id: u32) -> Self {
        Self(id)
    }

    pub fn as_u32(&self) -> u32 {
        self.0
    }
}

impl fmt::Display for PlayerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for PlayerId {
    type Err = ScraplError;

    fn from_str(s: &str) -> Result<Self> {
        Ok(Self(s.parse()?))
    }
}

/// Type-safe wrapper for gameweek numbers (FPL "events").
///
/// A Premier League season has 38 gameweeks; anything outside `1..=38`
/// is rejected when parsed from text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Gameweek(pub u32);

impl Gameweek {
    pub const LAST: u32 = 38;

    pub fn new(gw: u32) -> Self {
        Self(gw)
    }

    pub fn as_u32(&self) -> u32 {
        self.0
    }
}

impl fmt::Display for Gameweek {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for Gameweek {
    type Err = ScraplError;

    fn from_str(s: &str) -> Result<Self> {
        let gw: u32 = s.parse()?;
        if !(1..=Self::LAST).contains(&gw) {
            return Err(ScraplError::InvalidConfig {
                message: format!("gameweek must be between 1 and {}, got {gw}", Self::LAST),
            });
        }
        Ok(Self(gw))
    }
}
