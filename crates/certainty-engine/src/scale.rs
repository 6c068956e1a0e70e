//! The labelled confidence scale offered to users when rating a trait.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Discrete confidence answers, from "not sure at all" to "certain".
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ConfidenceLevel {
    NotSure,
    SlightlySure,
    FairlySure,
    Sure,
    VerySure,
    Certain,
}

impl ConfidenceLevel {
    /// All levels, weakest first.
    pub const ALL: [ConfidenceLevel; 6] = [
        Self::NotSure,
        Self::SlightlySure,
        Self::FairlySure,
        Self::Sure,
        Self::VerySure,
        Self::Certain,
    ];

    pub fn value(self) -> f64 {
        match self {
            Self::NotSure => 0.0,
            Self::SlightlySure => 0.2,
            Self::FairlySure => 0.4,
            Self::Sure => 0.6,
            Self::VerySure => 0.8,
            Self::Certain => 1.0,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::NotSure => "not sure",
            Self::SlightlySure => "slightly sure",
            Self::FairlySure => "fairly sure",
            Self::Sure => "sure",
            Self::VerySure => "very sure",
            Self::Certain => "certain",
        }
    }

    /// The level whose value equals `value`, if any.
    pub fn from_value(value: f64) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|level| (level.value() - value).abs() < 1e-9)
    }
}

impl std::fmt::Display for ConfidenceLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// Error returned when a string names no confidence level.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[error("unknown confidence level: {0}")]
pub struct UnknownLevel(pub String);

impl FromStr for ConfidenceLevel {
    type Err = UnknownLevel;

    /// Accepts labels in any case with spaces, dashes or underscores.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized: String = s
            .trim()
            .chars()
            .map(|c| match c {
                '-' | '_' => ' ',
                c => c.to_ascii_lowercase(),
            })
            .collect();
        Self::ALL
            .into_iter()
            .find(|level| level.label() == normalized)
            .ok_or_else(|| UnknownLevel(s.to_string()))
    }
}
