//! Fixed color palette for task highlighting.

use super::ParseTaskColorError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Palette color assignable to a task.
///
/// The palette is closed; "no color" is modelled as `Option::<TaskColor>::None`
/// rather than an extra variant, and serializes as the empty string at wire
/// boundaries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TaskColor {
    /// Green highlight.
    Green,
    /// Blue highlight.
    Blue,
    /// Orange highlight.
    Orange,
    /// Purple highlight.
    Purple,
    /// Red highlight.
    Red,
}

impl TaskColor {
    /// All palette colors in presentation order.
    pub const ALL: [Self; 5] = [
        Self::Green,
        Self::Blue,
        Self::Orange,
        Self::Purple,
        Self::Red,
    ];

    /// Returns the color name in canonical storage format.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Green => "green",
            Self::Blue => "blue",
            Self::Orange => "orange",
            Self::Purple => "purple",
            Self::Red => "red",
        }
    }
}

impl TryFrom<&str> for TaskColor {
    type Error = ParseTaskColorError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        let normalized = value.trim().to_ascii_lowercase();
        match normalized.as_str() {
            "green" => Ok(Self::Green),
            "blue" => Ok(Self::Blue),
            "orange" => Ok(Self::Orange),
            "purple" => Ok(Self::Purple),
            "red" => Ok(Self::Red),
            _ => Err(ParseTaskColorError(value.to_owned())),
        }
    }
}

impl fmt::Display for TaskColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
