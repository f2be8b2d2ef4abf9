//! Estimate breakdown records.
//!
//! Each record is the output of one stage of the estimation pipeline. Ratios
//! whose denominator can be zero are `Option<f64>`: `None` means the value is
//! undefined for this job rather than NaN or infinity.

use serde::{Deserialize, Serialize};

use crate::CleaningMode;

/// Surface areas in square feet.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AreaBreakdown {
    /// Exterior wall area across every building.
    pub wall_sqft: f64,
    /// Breezeway area.
    pub breezeway_sqft: f64,
    /// Flatwork area.
    pub flatwork_sqft: f64,
    /// Deck and patio area.
    pub deck_sqft: f64,
    /// Walls plus every add-on area.
    pub total_sqft: f64,
}

/// Technician time allocation, in hours unless noted.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TimeBreakdown {
    /// Mode used for `cleaning_hours`.
    pub mode: CleaningMode,
    /// Wall area after the surface modifier.
    pub adjusted_wall_sqft: f64,
    /// Wall-cleaning minutes after build-up, experience and lift factors.
    pub wall_minutes: f64,
    /// Wall-cleaning hours.
    pub wall_hours: f64,
    /// Deck and patio surface hours.
    pub deck_hours: f64,
    /// Per-unit patio allowance hours.
    pub patio_hours: f64,
    /// Breezeway hours.
    pub breezeway_hours: f64,
    /// Flatwork hours.
    pub flatwork_hours: f64,
    /// Elapsed cleaning hours under `mode`.
    pub cleaning_hours: f64,
    /// Setup time per day.
    pub setup_hours: f64,
    /// Breakdown time per day.
    pub breakdown_hours: f64,
    /// Drive time per day.
    pub drive_hours_per_day: f64,
    /// Drive time across every scheduled day.
    pub drive_hours: f64,
}

impl TimeBreakdown {
    /// Returns the sum of every add-on time.
    #[must_use]
    pub const fn add_on_hours(&self) -> f64 {
        self.deck_hours + self.patio_hours + self.breezeway_hours + self.flatwork_hours
    }
}

/// Day-count scheduling.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Schedule {
    /// Cleaning, setup and breakdown hours; drive time is excluded.
    pub raw_hours: f64,
    /// Technician-hours the whole crew works in one day.
    pub crew_hours_per_day: f64,
    /// Days computed from raw hours and crew capacity.
    pub estimated_days: u32,
    /// Days used by every downstream calculation. Equals `estimated_days`
    /// unless the job carries a day override.
    pub days: u32,
}

/// Crew labor cost and capacity.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LaborBreakdown {
    /// Number of technicians on the job.
    pub tech_count: u32,
    /// Average hourly rate across every technician.
    pub blended_rate: f64,
    /// Scheduled payroll for every technician and day.
    pub crew_payroll: f64,
    /// Wages paid while driving.
    pub drive_labor_cost: f64,
    /// Mileage cost across every day.
    pub drive_mileage_cost: f64,
    /// Payroll plus drive labor plus mileage.
    pub labor_cost: f64,
    /// Productive hours per technician per day.
    pub usable_daily_hours: f64,
    /// Productive technician-hours across the job.
    pub usable_total_hours: f64,
}

/// Daily-revenue pricing model.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ModelAQuote {
    /// Quoted price.
    pub price: f64,
    /// Fuel cost.
    pub fuel: f64,
    /// Chemical cost.
    pub chemical: f64,
    /// Marketing cost.
    pub marketing: f64,
    /// Royalty cost.
    pub royalty: f64,
    /// Labor plus every fixed share.
    pub total_cost: f64,
    /// Price minus total cost.
    pub profit: f64,
    /// Profit as a percent of price; undefined for a zero price.
    pub margin_pct: Option<f64>,
}

/// Hourly-target pricing model.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ModelBQuote {
    /// Usable hours times the hourly target.
    pub gross: f64,
    /// Gross after the competitive-advantage markup.
    pub price: f64,
    /// Fuel cost.
    pub fuel: f64,
    /// Chemical cost.
    pub chemical: f64,
    /// Marketing cost.
    pub marketing: f64,
    /// Labor plus every fixed share.
    pub total_cost: f64,
    /// Price minus total cost.
    pub net_profit: f64,
    /// Net profit as a percent of price; undefined for a zero price.
    pub net_margin_pct: Option<f64>,
    /// Net profit per scheduled day.
    pub net_profit_per_day: f64,
    /// Net profit per usable technician hour; undefined with no usable hours.
    pub net_profit_per_hour: Option<f64>,
}

/// Complete estimate for one job.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EstimateResult {
    /// Areas.
    pub areas: AreaBreakdown,
    /// Time allocation.
    pub time: TimeBreakdown,
    /// Day count.
    pub schedule: Schedule,
    /// Labor.
    pub labor: LaborBreakdown,
    /// Daily-revenue model.
    pub model_a: ModelAQuote,
    /// Hourly-target model.
    pub model_b: ModelBQuote,
}

impl EstimateResult {
    /// Returns cleaning, setup, breakdown and total drive hours combined.
    #[must_use]
    pub const fn total_hours(&self) -> f64 {
        self.time.cleaning_hours
            + self.time.setup_hours
            + self.time.breakdown_hours
            + self.time.drive_hours
    }

    /// Returns the number of days in effect.
    #[must_use]
    pub const fn days(&self) -> u32 {
        self.schedule.days
    }
}

/// Divides, returning `None` when the denominator is zero.
#[must_use]
pub const fn checked_ratio(numerator: f64, denominator: f64) -> Option<f64> {
    if denominator == 0.0 {
        None
    } else {
        Some(numerator / denominator)
    }
}
