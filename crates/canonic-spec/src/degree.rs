//! Harmonic scale degrees.

use std::fmt;

use serde::{Deserialize, Serialize};

/// A scale degree, 1 (tonic) through 7.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct Degree(u8);

impl Degree {
    pub const TONIC: Degree = Degree(1);
    pub const SUPERTONIC: Degree = Degree(2);
    pub const MEDIANT: Degree = Degree(3);
    pub const PREDOMINANT: Degree = Degree(4);
    pub const DOMINANT: Degree = Degree(5);
    pub const RELATIVE: Degree = Degree(6);
    pub const LEADING: Degree = Degree(7);

    /// Lowest valid degree.
    pub const MIN: u8 = 1;
    /// Highest valid degree.
    pub const MAX: u8 = 7;

    /// Creates a degree, returning `None` outside 1..=7.
    pub fn new(value: u8) -> Option<Self> {
        (Self::MIN..=Self::MAX).contains(&value).then_some(Degree(value))
    }

    /// The 1-based degree number.
    pub fn get(self) -> u8 {
        self.0
    }

    /// Zero-based catalog index for this degree.
    pub fn index(self) -> usize {
        (self.0 - 1) as usize
    }
}

/// Error for a degree outside 1..=7.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("degree must be 1..=7, got {0}")]
pub struct InvalidDegree(pub u8);

impl TryFrom<u8> for Degree {
    type Error = InvalidDegree;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Degree::new(value).ok_or(InvalidDegree(value))
    }
}

impl From<Degree> for u8 {
    fn from(degree: Degree) -> u8 {
        degree.0
    }
}

impl fmt::Display for Degree {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Builds a degree list from raw numbers, rejecting anything outside 1..=7.
pub fn degrees(values: &[u8]) -> Result<Vec<Degree>, InvalidDegree> {
    values.iter().map(|&v| Degree::try_from(v)).collect()
}
