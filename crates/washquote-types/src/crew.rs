//! Crew configuration.

use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::ParseEnumError;

/// Default hourly rate for a lead technician.
pub const DEFAULT_LEAD_RATE: f64 = 21.0;

/// Default hourly rate for a junior technician.
pub const DEFAULT_JUNIOR_RATE: f64 = 19.0;

/// Technicians staffed on every truck (one lead, one junior).
pub const TECHS_PER_TRUCK: u32 = 2;

/// Crew experience level.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Experience {
    /// New crew, slower and with longer setup.
    #[default]
    Novice,
    /// Seasoned crew.
    Medium,
    /// Veteran crew.
    Expert,
}

impl Experience {
    /// Returns the experience level as a string identifier.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Novice => "novice",
            Self::Medium => "medium",
            Self::Expert => "expert",
        }
    }

    /// Returns the display label.
    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Novice => "Novice",
            Self::Medium => "Medium",
            Self::Expert => "Expert",
        }
    }

    /// Returns all experience levels.
    #[must_use]
    pub const fn all() -> &'static [Self] {
        &[Self::Novice, Self::Medium, Self::Expert]
    }
}

impl std::fmt::Display for Experience {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Experience {
    type Err = ParseEnumError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "novice" | "junior" | "new" => Ok(Self::Novice),
            "medium" | "intermediate" => Ok(Self::Medium),
            "expert" | "senior" => Ok(Self::Expert),
            _ => Err(ParseEnumError::new("experience level", s, "novice, medium, expert")),
        }
    }
}

/// How add-on work is scheduled against wall cleaning.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum CleaningMode {
    /// Add-ons run on a separate sub-crew; walls are the critical path.
    #[default]
    Parallel,
    /// Every task runs back to back on one crew.
    Linear,
}

impl CleaningMode {
    /// Returns the mode as a string identifier.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Parallel => "parallel",
            Self::Linear => "linear",
        }
    }

    /// Returns the display label.
    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Parallel => "Parallel (Crew Efficient)",
            Self::Linear => "Linear (Additive)",
        }
    }

    /// Returns all modes.
    #[must_use]
    pub const fn all() -> &'static [Self] {
        &[Self::Parallel, Self::Linear]
    }
}

impl std::fmt::Display for CleaningMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for CleaningMode {
    type Err = ParseEnumError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "parallel" | "crew-efficient" => Ok(Self::Parallel),
            "linear" | "additive" | "sequential" => Ok(Self::Linear),
            _ => Err(ParseEnumError::new("cleaning mode", s, "parallel, linear")),
        }
    }
}

/// Pay rates for the two technicians on one truck.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TruckCrew {
    /// Lead technician hourly rate.
    pub lead_rate: f64,
    /// Junior technician hourly rate.
    pub junior_rate: f64,
}

impl TruckCrew {
    /// Creates a truck crew with the given rates.
    #[must_use]
    pub const fn new(lead_rate: f64, junior_rate: f64) -> Self {
        Self {
            lead_rate,
            junior_rate,
        }
    }

    /// Returns the combined hourly rate of both technicians.
    #[must_use]
    pub const fn hourly_cost(&self) -> f64 {
        self.lead_rate + self.junior_rate
    }
}

impl Default for TruckCrew {
    fn default() -> Self {
        Self::new(DEFAULT_LEAD_RATE, DEFAULT_JUNIOR_RATE)
    }
}
