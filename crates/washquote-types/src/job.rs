//! Job inputs collected from a site survey.
//!
//! A [`JobInputs`] value is built once per estimation request and never
//! mutated by the engine. Every section deserializes with defaults, so a job
//! file only needs to list what differs from a typical job.

use serde::{Deserialize, Serialize};

use crate::crew::{CleaningMode, Experience, TECHS_PER_TRUCK, TruckCrew};
use crate::surface::{BuildUp, DeckMaterial, SurfaceMaterial};
use crate::ValidationError;

/// Default mileage reimbursement rate in dollars per mile.
pub const DEFAULT_MILEAGE_RATE: f64 = 0.65;

/// Default reference wall-cleaning rate in square feet per minute.
pub const DEFAULT_REFERENCE_WALL_RATE: f64 = 107.0;

/// Default fuel cost share, percent of price.
pub const DEFAULT_FUEL_PCT: f64 = 4.0;

/// Default chemical cost share, percent of price.
pub const DEFAULT_CHEMICAL_PCT: f64 = 5.0;

/// Default marketing cost share, percent of price.
pub const DEFAULT_MARKETING_PCT: f64 = 5.0;

/// Default franchise royalty, percent of price.
pub const DEFAULT_ROYALTY_PCT: f64 = 10.0;

/// Building shell dimensions.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Geometry {
    /// Number of stories.
    pub stories: u32,
    /// Height of one story in feet.
    pub height_per_story_ft: f64,
    /// Front wall length in feet.
    pub front_ft: f64,
    /// Back wall length in feet.
    pub back_ft: f64,
    /// Left wall length in feet.
    pub left_ft: f64,
    /// Right wall length in feet.
    pub right_ft: f64,
    /// Number of identical buildings.
    pub buildings: u32,
}

impl Geometry {
    /// Returns the perimeter of one building in feet.
    #[must_use]
    pub const fn perimeter_ft(&self) -> f64 {
        self.front_ft + self.back_ft + self.left_ft + self.right_ft
    }
}

impl Default for Geometry {
    fn default() -> Self {
        Self {
            stories: 2,
            height_per_story_ft: 10.0,
            front_ft: 100.0,
            back_ft: 100.0,
            left_ft: 50.0,
            right_ft: 50.0,
            buildings: 1,
        }
    }
}

/// Work beyond the building walls.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AddOns {
    /// Breezeway area in square feet.
    pub breezeway_sqft: f64,
    /// Flatwork (sidewalks, driveways) area in square feet.
    pub flatwork_sqft: f64,
    /// Deck and patio area in square feet.
    pub deck_sqft: f64,
    /// Number of individual patio or deck units.
    pub patio_count: u32,
}

impl AddOns {
    /// Returns true if any add-on work is present.
    #[must_use]
    pub const fn any(&self) -> bool {
        self.breezeway_sqft > 0.0
            || self.flatwork_sqft > 0.0
            || self.deck_sqft > 0.0
            || self.patio_count > 0
    }
}

/// Crew staffing and pay.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CrewConfig {
    /// Scheduled work hours per technician per day.
    pub daily_hours_per_tech: f64,
    /// Crew experience level.
    pub experience: Experience,
    /// One entry per truck.
    pub trucks: Vec<TruckCrew>,
}

impl CrewConfig {
    /// Returns the number of trucks.
    #[must_use]
    pub fn truck_count(&self) -> u32 {
        u32::try_from(self.trucks.len()).unwrap_or(u32::MAX)
    }

    /// Returns the number of technicians (one lead and one junior per truck).
    #[must_use]
    pub fn tech_count(&self) -> u32 {
        self.truck_count().saturating_mul(TECHS_PER_TRUCK)
    }

    /// Returns the sum of every lead and junior hourly rate.
    #[must_use]
    pub fn total_hourly_rate(&self) -> f64 {
        self.trucks.iter().map(TruckCrew::hourly_cost).sum()
    }
}

impl Default for CrewConfig {
    fn default() -> Self {
        Self {
            daily_hours_per_tech: 8.0,
            experience: Experience::default(),
            trucks: vec![TruckCrew::default()],
        }
    }
}

/// Surface conditions.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SurfaceConditions {
    /// Wall material.
    pub material: SurfaceMaterial,
    /// Soiling level.
    pub build_up: BuildUp,
    /// Deck and patio material.
    pub deck_material: DeckMaterial,
}

/// Travel between the shop and the site.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Logistics {
    /// Round-trip mileage for one day.
    pub round_trip_miles: f64,
    /// Mileage cost in dollars per mile.
    pub mileage_rate: f64,
    /// Average travel speed in miles per hour.
    pub average_speed_mph: f64,
}

impl Default for Logistics {
    fn default() -> Self {
        Self {
            round_trip_miles: 0.0,
            mileage_rate: DEFAULT_MILEAGE_RATE,
            average_speed_mph: 50.0,
        }
    }
}

/// Production rates and equipment.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProductionRates {
    /// Reference wall-cleaning rate in square feet per minute.
    pub reference_wall_rate: f64,
    /// Breezeway cleaning rate in square feet per hour.
    pub breezeway_rate: f64,
    /// Flatwork cleaning rate in square feet per hour.
    pub flatwork_rate: f64,
    /// Lift or drone rental cost; any positive value slows wall cleaning.
    pub lift_cost: f64,
}

impl Default for ProductionRates {
    fn default() -> Self {
        Self {
            reference_wall_rate: DEFAULT_REFERENCE_WALL_RATE,
            breezeway_rate: 300.0,
            flatwork_rate: 400.0,
            lift_cost: 0.0,
        }
    }
}

/// Fixed cost shares, each in percent of the quoted price.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CostShares {
    /// Fuel.
    pub fuel_pct: f64,
    /// Chemicals.
    pub chemical_pct: f64,
    /// Marketing.
    pub marketing_pct: f64,
    /// Franchise royalty (daily-revenue model only).
    pub royalty_pct: f64,
}

impl Default for CostShares {
    fn default() -> Self {
        Self {
            fuel_pct: DEFAULT_FUEL_PCT,
            chemical_pct: DEFAULT_CHEMICAL_PCT,
            marketing_pct: DEFAULT_MARKETING_PCT,
            royalty_pct: DEFAULT_ROYALTY_PCT,
        }
    }
}

/// Business revenue targets.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PricingTargets {
    /// Target revenue per truck per day.
    pub daily_revenue_per_truck: f64,
    /// Target revenue per usable technician hour.
    pub hourly_rate: f64,
    /// Markup applied on top of the hourly model, in percent.
    pub competitive_advantage_pct: f64,
    /// Fixed cost shares.
    pub cost_shares: CostShares,
}

impl Default for PricingTargets {
    fn default() -> Self {
        Self {
            daily_revenue_per_truck: 3000.0,
            hourly_rate: 250.0,
            competitive_advantage_pct: 0.0,
            cost_shares: CostShares::default(),
        }
    }
}

/// Everything the engine needs to price one job.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct JobInputs {
    /// How add-on time is scheduled.
    pub cleaning_mode: CleaningMode,
    /// Manual day count replacing the computed one.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub day_override: Option<u32>,
    /// Building dimensions.
    pub geometry: Geometry,
    /// Add-on work areas.
    pub add_ons: AddOns,
    /// Crew staffing.
    pub crew: CrewConfig,
    /// Surface conditions.
    pub surface: SurfaceConditions,
    /// Travel.
    pub logistics: Logistics,
    /// Production rates.
    pub rates: ProductionRates,
    /// Revenue targets.
    pub targets: PricingTargets,
}

impl JobInputs {
    /// Returns a copy with the given cleaning mode.
    #[must_use]
    pub fn with_cleaning_mode(mut self, mode: CleaningMode) -> Self {
        self.cleaning_mode = mode;
        self
    }

    /// Returns a copy with the given day-count override.
    #[must_use]
    pub fn with_day_override(mut self, days: Option<u32>) -> Self {
        self.day_override = days;
        self
    }

    /// Checks every input against the engine's domain.
    ///
    /// # Errors
    ///
    /// Returns the first [`ValidationError`] found. Values are never clamped.
    pub fn validate(&self) -> Result<(), ValidationError> {
        let g = &self.geometry;
        non_negative("geometry.height_per_story_ft", g.height_per_story_ft)?;
        non_negative("geometry.front_ft", g.front_ft)?;
        non_negative("geometry.back_ft", g.back_ft)?;
        non_negative("geometry.left_ft", g.left_ft)?;
        non_negative("geometry.right_ft", g.right_ft)?;

        let a = &self.add_ons;
        non_negative("add_ons.breezeway_sqft", a.breezeway_sqft)?;
        non_negative("add_ons.flatwork_sqft", a.flatwork_sqft)?;
        non_negative("add_ons.deck_sqft", a.deck_sqft)?;

        if self.crew.trucks.is_empty() {
            return Err(ValidationError::NoTrucks);
        }
        for truck in &self.crew.trucks {
            non_negative("crew.trucks.lead_rate", truck.lead_rate)?;
            non_negative("crew.trucks.junior_rate", truck.junior_rate)?;
        }
        positive("crew.daily_hours_per_tech", self.crew.daily_hours_per_tech)?;

        let l = &self.logistics;
        non_negative("logistics.round_trip_miles", l.round_trip_miles)?;
        non_negative("logistics.mileage_rate", l.mileage_rate)?;
        positive("logistics.average_speed_mph", l.average_speed_mph)?;

        let r = &self.rates;
        positive("rates.reference_wall_rate", r.reference_wall_rate)?;
        positive("rates.breezeway_rate", r.breezeway_rate)?;
        positive("rates.flatwork_rate", r.flatwork_rate)?;
        non_negative("rates.lift_cost", r.lift_cost)?;

        let t = &self.targets;
        non_negative("targets.daily_revenue_per_truck", t.daily_revenue_per_truck)?;
        non_negative("targets.hourly_rate", t.hourly_rate)?;
        non_negative(
            "targets.competitive_advantage_pct",
            t.competitive_advantage_pct,
        )?;
        let c = &t.cost_shares;
        non_negative("targets.cost_shares.fuel_pct", c.fuel_pct)?;
        non_negative("targets.cost_shares.chemical_pct", c.chemical_pct)?;
        non_negative("targets.cost_shares.marketing_pct", c.marketing_pct)?;
        non_negative("targets.cost_shares.royalty_pct", c.royalty_pct)?;

        match self.day_override {
            Some(0) => Err(ValidationError::InvalidDayOverride(0)),
            _ => Ok(()),
        }
    }
}

fn finite(field: &'static str, value: f64) -> Result<f64, ValidationError> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(ValidationError::NotFinite { field })
    }
}

fn non_negative(field: &'static str, value: f64) -> Result<(), ValidationError> {
    if finite(field, value)? < 0.0 {
        return Err(ValidationError::Negative { field, value });
    }
    Ok(())
}

fn positive(field: &'static str, value: f64) -> Result<(), ValidationError> {
    if finite(field, value)? <= 0.0 {
        return Err(ValidationError::NonPositive { field, value });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_valid() {
        let job = JobInputs::default();
        assert!(job.validate().is_ok());
        assert_eq!(job.crew.truck_count(), 1);
        assert_eq!(job.crew.tech_count(), 2);
        assert!((job.crew.total_hourly_rate() - 40.0).abs() < 1e-10);
        assert!((job.geometry.perimeter_ft() - 300.0).abs() < 1e-10);
    }

    #[test]
    fn test_zero_speed_rejected() {
        let mut job = JobInputs::default();
        job.logistics.average_speed_mph = 0.0;
        assert_eq!(
            job.validate(),
            Err(ValidationError::NonPositive {
                field: "logistics.average_speed_mph",
                value: 0.0,
            })
        );
    }

    #[test]
    fn test_negative_area_rejected() {
        let mut job = JobInputs::default();
        job.add_ons.deck_sqft = -5.0;
        assert!(matches!(
            job.validate(),
            Err(ValidationError::Negative {
                field: "add_ons.deck_sqft",
                ..
            })
        ));
    }

    #[test]
    fn test_zero_day_override_rejected() {
        let job = JobInputs::default().with_day_override(Some(0));
        assert_eq!(job.validate(), Err(ValidationError::InvalidDayOverride(0)));

        let job = JobInputs::default().with_day_override(Some(1));
        assert!(job.validate().is_ok());
    }

    #[test]
    fn test_no_trucks_rejected() {
        let mut job = JobInputs::default();
        job.crew.trucks.clear();
        assert_eq!(job.validate(), Err(ValidationError::NoTrucks));
    }

    #[test]
    fn test_nan_rejected() {
        let mut job = JobInputs::default();
        job.rates.lift_cost = f64::NAN;
        assert_eq!(
            job.validate(),
            Err(ValidationError::NotFinite {
                field: "rates.lift_cost"
            })
        );
    }

    #[test]
    fn test_add_ons_any() {
        let mut add_ons = AddOns::default();
        assert!(!add_ons.any());
        add_ons.patio_count = 3;
        assert!(add_ons.any());
    }

    #[test]
    fn test_partial_toml_uses_defaults() {
        let job: JobInputs = toml::from_str(
            r#"
            cleaning_mode = "linear"

            [geometry]
            stories = 3

            [surface]
            material = "brick"

            [[crew.trucks]]
            lead_rate = 25.0
            junior_rate = 20.0

            [[crew.trucks]]
            lead_rate = 22.0
            junior_rate = 18.0
            "#,
        )
        .unwrap();

        assert_eq!(job.cleaning_mode, CleaningMode::Linear);
        assert_eq!(job.geometry.stories, 3);
        assert!((job.geometry.front_ft - 100.0).abs() < 1e-10);
        assert_eq!(job.surface.material, SurfaceMaterial::Brick);
        assert_eq!(job.crew.truck_count(), 2);
        assert!((job.crew.daily_hours_per_tech - 8.0).abs() < 1e-10);
        assert!((job.targets.cost_shares.royalty_pct - 10.0).abs() < 1e-10);
        assert_eq!(job.day_override, None);
    }

    #[test]
    fn test_json_round_trip() {
        let job = JobInputs::default().with_day_override(Some(3));
        let json = serde_json::to_string(&job).unwrap();
        let parsed: JobInputs = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, job);
    }
}
