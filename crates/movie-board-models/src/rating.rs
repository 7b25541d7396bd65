use serde::{Deserialize, Serialize};
use std::fmt;

/// Star rating on a 0-5 scale, where 0 means "not rated".
///
/// Out-of-range input is clamped rather than rejected, both when built in code
/// and when read back from storage.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[serde(from = "f64", into = "u8")]
pub struct Rating(u8);

impl Rating {
    pub const MAX: u8 = 5;
    pub const UNRATED: Rating = Rating(0);

    pub fn new(value: i64) -> Self {
        Self(value.clamp(0, Self::MAX as i64) as u8)
    }

    pub fn value(&self) -> u8 {
        self.0
    }

    pub fn is_rated(&self) -> bool {
        self.0 > 0
    }

    /// Filled/empty star string, e.g. "★★★☆☆"
    pub fn stars(&self) -> String {
        let filled = self.0 as usize;
        let empty = (Self::MAX - self.0) as usize;
        format!("{}{}", "★".repeat(filled), "☆".repeat(empty))
    }
}

impl From<i64> for Rating {
    fn from(value: i64) -> Self {
        Self::new(value)
    }
}

/// Stored ratings may come back as floats (`4.0`); round before clamping
impl From<f64> for Rating {
    fn from(value: f64) -> Self {
        if value.is_nan() {
            return Self::UNRATED;
        }
        Self(value.round().clamp(0.0, Self::MAX as f64) as u8)
    }
}

impl From<Rating> for u8 {
    fn from(rating: Rating) -> Self {
        rating.0
    }
}

impl fmt::Display for Rating {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.0, Self::MAX)
    }
}
