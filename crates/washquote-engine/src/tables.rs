//! Factor tables used by the time calculator.

use std::sync::OnceLock;

use serde::{Deserialize, Serialize};
use washquote_types::{BuildUp, DeckMaterial, Experience, SurfaceMaterial};

/// Embedded JSON with the standard factor tables.
const RATE_TABLES_JSON: &str = include_str!("../data/rate_tables.json");

/// Static table instance.
static TABLES: OnceLock<RateTables> = OnceLock::new();

/// Efficiency and fixed daily overhead for one experience level.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ExperienceProfile {
    /// Multiplier on wall-cleaning minutes (below 1.0 is faster).
    pub efficiency_factor: f64,
    /// Setup time per day in hours.
    pub setup_hours: f64,
    /// Breakdown time per day in hours.
    pub breakdown_hours: f64,
}

/// Experience table.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ExperienceTable {
    /// Novice crews.
    pub novice: ExperienceProfile,
    /// Medium crews.
    pub medium: ExperienceProfile,
    /// Expert crews.
    pub expert: ExperienceProfile,
}

/// Build-up factor table.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BuildUpTable {
    /// Light soiling.
    pub light: f64,
    /// Medium soiling.
    pub medium: f64,
    /// Heavy soiling.
    pub heavy: f64,
}

/// Surface modifier table.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SurfaceTable {
    /// Vinyl.
    pub vinyl: f64,
    /// Brick.
    pub brick: f64,
    /// Concrete.
    pub concrete: f64,
    /// Wood.
    pub wood: f64,
    /// Stone.
    pub stone: f64,
}

/// Deck cleaning rates in square feet per hour.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DeckRateTable {
    /// Wood decking.
    pub wood: f64,
    /// Composite decking.
    pub composite: f64,
}

/// Every lookup constant the engine applies to job inputs.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RateTables {
    /// Per-experience efficiency and overhead.
    pub experience: ExperienceTable,
    /// Build-up multipliers.
    pub build_up: BuildUpTable,
    /// Surface material multipliers on wall area.
    pub surface: SurfaceTable,
    /// Deck cleaning rates.
    pub deck_rate: DeckRateTable,
    /// Wall-minute multiplier when a lift or drone is on site.
    pub lift_slowdown: f64,
    /// Fixed allowance per patio or deck unit, in minutes.
    pub patio_minutes_per_unit: f64,
}

impl RateTables {
    /// Returns the global table instance.
    ///
    /// This lazily parses the embedded JSON on first access.
    #[must_use]
    pub fn global() -> &'static Self {
        TABLES.get_or_init(|| {
            Self::from_json(RATE_TABLES_JSON).expect("embedded rate_tables.json should be valid")
        })
    }

    /// Creates tables from a JSON string.
    ///
    /// # Errors
    ///
    /// Returns an error if the JSON is invalid.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// Returns the profile for an experience level.
    #[must_use]
    pub const fn experience(&self, level: Experience) -> &ExperienceProfile {
        match level {
            Experience::Novice => &self.experience.novice,
            Experience::Medium => &self.experience.medium,
            Experience::Expert => &self.experience.expert,
        }
    }

    /// Returns the build-up multiplier.
    #[must_use]
    pub const fn build_up_factor(&self, level: BuildUp) -> f64 {
        match level {
            BuildUp::Light => self.build_up.light,
            BuildUp::Medium => self.build_up.medium,
            BuildUp::Heavy => self.build_up.heavy,
        }
    }

    /// Returns the surface modifier applied to wall area.
    #[must_use]
    pub const fn surface_modifier(&self, material: SurfaceMaterial) -> f64 {
        match material {
            SurfaceMaterial::Vinyl => self.surface.vinyl,
            SurfaceMaterial::Brick => self.surface.brick,
            SurfaceMaterial::Concrete => self.surface.concrete,
            SurfaceMaterial::Wood => self.surface.wood,
            SurfaceMaterial::Stone => self.surface.stone,
        }
    }

    /// Returns the deck cleaning rate in square feet per hour.
    #[must_use]
    pub const fn deck_rate(&self, material: DeckMaterial) -> f64 {
        match material {
            DeckMaterial::Wood => self.deck_rate.wood,
            DeckMaterial::Composite => self.deck_rate.composite,
        }
    }
}

impl Default for RateTables {
    fn default() -> Self {
        *Self::global()
    }
}
