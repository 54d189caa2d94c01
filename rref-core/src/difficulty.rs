//! Difficulty levels and their dimension policy

use crate::RrefError;

/// Practice difficulty, selecting which matrix shapes may be generated
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "lowercase")
)]
pub enum Difficulty {
    /// Fixed 2x2
    #[default]
    Easy,
    /// 3x4 or 4x3
    Medium,
    /// 4x5 or 5x4
    Hard,
}

impl Difficulty {
    /// Every difficulty, easiest first
    pub const ALL: [Difficulty; 3] = [Difficulty::Easy, Difficulty::Medium, Difficulty::Hard];

    /// Allowed `(rows, cols)` shapes, each equally likely
    pub const fn shapes(self) -> &'static [(usize, usize)] {
        match self {
            Difficulty::Easy => &[(2, 2)],
            Difficulty::Medium => &[(3, 4), (4, 3)],
            Difficulty::Hard => &[(4, 5), (5, 4)],
        }
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            Difficulty::Easy => "easy",
            Difficulty::Medium => "medium",
            Difficulty::Hard => "hard",
        }
    }

    /// Parse an optional selector, falling back to `Easy`
    ///
    /// Unrecognised and absent values never fail.
    pub fn parse_or_default(value: Option<&str>) -> Self {
        value.and_then(|v| v.parse().ok()).unwrap_or_default()
    }
}

impl core::str::FromStr for Difficulty {
    type Err = RrefError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "easy" => Ok(Difficulty::Easy),
            "medium" => Ok(Difficulty::Medium),
            "hard" => Ok(Difficulty::Hard),
            _ => Err(RrefError::InvalidInput),
        }
    }
}

impl core::fmt::Display for Difficulty {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
