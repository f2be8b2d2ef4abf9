//! Technician time allocation.
//!
//! Cleaning time is independent of the schedule; drive time is computed
//! afterwards from the day count the schedule settles on.

use washquote_types::{AreaBreakdown, CleaningMode, JobInputs, Logistics, TimeBreakdown};

use crate::tables::RateTables;

const MINUTES_PER_HOUR: f64 = 60.0;

/// Cleaning time before any drive time is known.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CleaningTime {
    /// Mode used for `cleaning_hours`.
    pub mode: CleaningMode,
    /// Wall area after the surface modifier.
    pub adjusted_wall_sqft: f64,
    /// Wall-cleaning minutes after every factor.
    pub wall_minutes: f64,
    /// Deck hours.
    pub deck_hours: f64,
    /// Patio allowance hours.
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
}

impl CleaningTime {
    /// Returns the wall-cleaning hours.
    #[must_use]
    pub const fn wall_hours(&self) -> f64 {
        self.wall_minutes / MINUTES_PER_HOUR
    }

    /// Returns cleaning plus one day of setup and breakdown.
    #[must_use]
    pub const fn raw_hours(&self) -> f64 {
        self.cleaning_hours + self.setup_hours + self.breakdown_hours
    }

    /// Completes the breakdown with drive time.
    #[must_use]
    pub fn with_drive(&self, drive: DriveTime) -> TimeBreakdown {
        TimeBreakdown {
            mode: self.mode,
            adjusted_wall_sqft: self.adjusted_wall_sqft,
            wall_minutes: self.wall_minutes,
            wall_hours: self.wall_hours(),
            deck_hours: self.deck_hours,
            patio_hours: self.patio_hours,
            breezeway_hours: self.breezeway_hours,
            flatwork_hours: self.flatwork_hours,
            cleaning_hours: self.cleaning_hours,
            setup_hours: self.setup_hours,
            breakdown_hours: self.breakdown_hours,
            drive_hours_per_day: drive.hours_per_day,
            drive_hours: drive.total_hours,
        }
    }
}

/// Travel time.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DriveTime {
    /// Round-trip hours for one day.
    pub hours_per_day: f64,
    /// Round-trip hours across every day.
    pub total_hours: f64,
}

/// Converts areas into cleaning hours under the job's cleaning mode.
///
/// Parallel mode counts wall time only: add-ons are handled by a sub-crew and
/// never extend the elapsed duration. Linear mode sums every task.
#[must_use]
pub fn cleaning_time(job: &JobInputs, areas: &AreaBreakdown, tables: &RateTables) -> CleaningTime {
    let experience = tables.experience(job.crew.experience);

    let adjusted_wall_sqft = areas.wall_sqft * tables.surface_modifier(job.surface.material);
    let mut wall_minutes = (adjusted_wall_sqft / job.rates.reference_wall_rate)
        * tables.build_up_factor(job.surface.build_up)
        * experience.efficiency_factor;
    // Flat penalty on throughput, not added time.
    if job.rates.lift_cost > 0.0 {
        wall_minutes *= tables.lift_slowdown;
    }

    let patio_hours =
        f64::from(job.add_ons.patio_count) * tables.patio_minutes_per_unit / MINUTES_PER_HOUR;
    let deck_hours = areas.deck_sqft / tables.deck_rate(job.surface.deck_material);
    let breezeway_hours = areas.breezeway_sqft / job.rates.breezeway_rate;
    let flatwork_hours = areas.flatwork_sqft / job.rates.flatwork_rate;

    let wall_hours = wall_minutes / MINUTES_PER_HOUR;
    let cleaning_hours = match job.cleaning_mode {
        CleaningMode::Parallel => wall_hours,
        CleaningMode::Linear => {
            wall_hours + deck_hours + patio_hours + breezeway_hours + flatwork_hours
        }
    };

    CleaningTime {
        mode: job.cleaning_mode,
        adjusted_wall_sqft,
        wall_minutes,
        deck_hours,
        patio_hours,
        breezeway_hours,
        flatwork_hours,
        cleaning_hours,
        setup_hours: experience.setup_hours,
        breakdown_hours: experience.breakdown_hours,
    }
}

/// Computes drive time for the number of days in effect.
///
/// The average speed must already be validated as positive.
#[must_use]
pub fn drive_time(logistics: &Logistics, days: u32) -> DriveTime {
    let hours_per_day = logistics.round_trip_miles / logistics.average_speed_mph;
    DriveTime {
        hours_per_day,
        total_hours: hours_per_day * f64::from(days),
    }
}
