use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::errors::{Result, SentimenError};

/// Sentiment class.
///
/// The discriminant is the class index that trained classifiers use by default.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[repr(u8)]
pub enum Category {
    Negative = 0,
    Neutral = 1,
    Positive = 2,
}

impl Category {
    /// All categories in index order.
    pub const ALL: [Self; 3] = [Self::Negative, Self::Neutral, Self::Positive];

    /// Returns the class index.
    #[inline(always)]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Returns the category of the given class index.
    pub const fn from_index(index: usize) -> Option<Self> {
        match index {
            0 => Some(Self::Negative),
            1 => Some(Self::Neutral),
            2 => Some(Self::Positive),
            _ => None,
        }
    }

    /// Returns the name of the category.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Negative => "Negative",
            Self::Neutral => "Neutral",
            Self::Positive => "Positive",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Category {
    type Err = SentimenError;

    /// Parses English names and the Indonesian labels of the survey interface.
    fn from_str(label: &str) -> Result<Self> {
        match label.trim().to_lowercase().as_str() {
            "negative" | "negatif" => Ok(Self::Negative),
            "neutral" | "netral" => Ok(Self::Neutral),
            "positive" | "positif" => Ok(Self::Positive),
            _ => Err(SentimenError::invalid_argument(
                "label",
                format!("unknown category: {:?}", label),
            )),
        }
    }
}
