//! Estimation pipeline.

use std::sync::OnceLock;

use tracing::debug;
use washquote_types::{EstimateError, EstimateResult, JobInputs, Result};

use crate::area::calculate_areas;
use crate::labor::labor_cost;
use crate::pricing::{model_a, model_b};
use crate::schedule::schedule;
use crate::tables::RateTables;
use crate::time::{cleaning_time, drive_time};

/// Static estimator instance.
static ESTIMATOR: OnceLock<Estimator> = OnceLock::new();

/// Job cost and pricing estimator.
///
/// The estimator holds only its factor tables. Every call to
/// [`Estimator::estimate`] is independent: the same inputs always produce
/// the same result.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Estimator {
    tables: RateTables,
}

impl Estimator {
    /// Creates an estimator with the given factor tables.
    #[must_use]
    pub const fn new(tables: RateTables) -> Self {
        Self { tables }
    }

    /// Returns the global estimator using the standard tables.
    #[must_use]
    pub fn global() -> &'static Self {
        ESTIMATOR.get_or_init(|| Self::new(*RateTables::global()))
    }

    /// Returns the factor tables.
    #[must_use]
    pub const fn tables(&self) -> &RateTables {
        &self.tables
    }

    /// Estimates cost, time and price for a job.
    ///
    /// Runs areas, cleaning time, scheduling, drive time, labor and both
    /// pricing models in that order.
    ///
    /// # Errors
    ///
    /// Returns a validation error for out-of-domain inputs,
    /// `NoProductiveTime` when daily overhead leaves the crew no working
    /// time, or `Overflow` when finite inputs produce an infinite area, time
    /// or amount. No partial result is produced.
    pub fn estimate(&self, job: &JobInputs) -> Result<EstimateResult> {
        job.validate()?;

        let areas = calculate_areas(&job.geometry, &job.add_ons);
        finite("areas.wall_sqft", areas.wall_sqft)?;
        finite("areas.total_sqft", areas.total_sqft)?;
        debug!(
            wall_sqft = areas.wall_sqft,
            total_sqft = areas.total_sqft,
            "Computed areas"
        );

        let cleaning = cleaning_time(job, &areas, &self.tables);
        debug!(
            mode = %cleaning.mode,
            wall_minutes = cleaning.wall_minutes,
            cleaning_hours = cleaning.cleaning_hours,
            "Computed cleaning time"
        );

        let schedule = schedule(&cleaning, &job.crew, job.day_override)?;
        debug!(
            raw_hours = schedule.raw_hours,
            estimated_days = schedule.estimated_days,
            days = schedule.days,
            overridden = job.day_override.is_some(),
            "Scheduled job"
        );

        let time = cleaning.with_drive(drive_time(&job.logistics, schedule.days));
        finite("time.add_on_hours", time.add_on_hours())?;
        finite("time.drive_hours", time.drive_hours)?;

        let labor = labor_cost(&job.crew, &job.logistics, &time, schedule.days)?;
        finite("labor.labor_cost", labor.labor_cost)?;
        debug!(
            blended_rate = labor.blended_rate,
            labor_cost = labor.labor_cost,
            usable_total_hours = labor.usable_total_hours,
            "Computed labor"
        );

        let model_a = model_a(
            &job.targets,
            job.crew.truck_count(),
            schedule.days,
            labor.labor_cost,
        );
        let model_b = model_b(
            &job.targets,
            labor.usable_total_hours,
            schedule.days,
            labor.labor_cost,
        );
        for (quantity, value) in [
            ("model_a.price", model_a.price),
            ("model_a.total_cost", model_a.total_cost),
            ("model_a.margin_pct", model_a.margin_pct.unwrap_or_default()),
            ("model_b.price", model_b.price),
            ("model_b.total_cost", model_b.total_cost),
            ("model_b.net_margin_pct", model_b.net_margin_pct.unwrap_or_default()),
            (
                "model_b.net_profit_per_hour",
                model_b.net_profit_per_hour.unwrap_or_default(),
            ),
        ] {
            finite(quantity, value)?;
        }
        debug!(
            model_a_price = model_a.price,
            model_b_price = model_b.price,
            "Priced job"
        );

        Ok(EstimateResult {
            areas,
            time,
            schedule,
            labor,
            model_a,
            model_b,
        })
    }
}

impl Default for Estimator {
    fn default() -> Self {
        *Self::global()
    }
}

/// Returns `value`, or an overflow error naming `quantity` if it is NaN or
/// infinite.
pub(crate) fn finite(quantity: &'static str, value: f64) -> Result<f64> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(EstimateError::Overflow { quantity })
    }
}

/// Estimates a job with the standard tables.
///
/// # Errors
///
/// See [`Estimator::estimate`].
pub fn estimate(job: &JobInputs) -> Result<EstimateResult> {
    Estimator::global().estimate(job)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use washquote_types::{
        BuildUp, CleaningMode, EstimateError, Experience, Geometry, TruckCrew, ValidationError,
    };

    fn reference_job() -> JobInputs {
        let mut job = JobInputs::default();
        job.geometry = Geometry {
            stories: 1,
            height_per_story_ft: 10.0,
            front_ft: 100.0,
            back_ft: 100.0,
            left_ft: 50.0,
            right_ft: 50.0,
            buildings: 1,
        };
        job.surface.build_up = BuildUp::Medium;
        job.crew.experience = Experience::Medium;
        job
    }

    fn large_job() -> JobInputs {
        let mut job = reference_job();
        job.geometry.stories = 3;
        job.geometry.buildings = 12;
        job.add_ons.breezeway_sqft = 1200.0;
        job.add_ons.flatwork_sqft = 5000.0;
        job.add_ons.deck_sqft = 900.0;
        job.add_ons.patio_count = 36;
        job.logistics.round_trip_miles = 40.0;
        job.crew.trucks = vec![TruckCrew::default(), TruckCrew::new(24.0, 18.0)];
        job
    }

    #[test]
    fn test_reference_scenario() {
        let result = estimate(&reference_job()).unwrap();

        assert_relative_eq!(result.areas.wall_sqft, 3000.0);
        assert_relative_eq!(result.time.adjusted_wall_sqft, 3000.0);
        assert!((result.time.wall_minutes - 42.06).abs() < 0.01);
        assert!((result.time.cleaning_hours - 0.701).abs() < 0.001);
        assert_eq!(result.schedule.days, 1);
        assert_eq!(result.labor.blended_rate, 20.0);
        assert_relative_eq!(result.model_a.price, 3000.0);
    }

    #[test]
    fn test_deterministic() {
        let job = large_job();
        let first = estimate(&job).unwrap();
        for _ in 0..5 {
            assert_eq!(estimate(&job).unwrap(), first);
        }
    }

    #[test]
    fn test_override_matching_estimate_is_identical() {
        let job = large_job();
        let automatic = estimate(&job).unwrap();
        let days = automatic.schedule.estimated_days;

        let overridden = estimate(&job.with_day_override(Some(days))).unwrap();

        assert_eq!(overridden, automatic);
    }

    #[test]
    fn test_override_drives_downstream_math() {
        let job = reference_job().with_day_override(Some(4));
        let result = estimate(&job).unwrap();

        assert_eq!(result.schedule.estimated_days, 1);
        assert_eq!(result.days(), 4);
        assert_relative_eq!(result.model_a.price, 12_000.0);
        assert_relative_eq!(result.labor.crew_payroll, 40.0 * 4.0 * 8.0);
    }

    #[test]
    fn test_parallel_not_longer_than_linear() {
        let job = large_job();
        let parallel = estimate(&job.clone().with_cleaning_mode(CleaningMode::Parallel)).unwrap();
        let linear = estimate(&job.with_cleaning_mode(CleaningMode::Linear)).unwrap();

        assert!(parallel.time.cleaning_hours <= linear.time.cleaning_hours);
        assert!(parallel.schedule.days <= linear.schedule.days);
    }

    #[test]
    fn test_zero_mileage_has_no_drive_components() {
        let mut job = large_job();
        job.logistics.round_trip_miles = 0.0;
        let result = estimate(&job).unwrap();

        assert_eq!(result.time.drive_hours_per_day, 0.0);
        assert_eq!(result.time.drive_hours, 0.0);
        assert_eq!(result.labor.drive_labor_cost, 0.0);
        assert_eq!(result.labor.drive_mileage_cost, 0.0);
    }

    #[test]
    fn test_drive_time_scales_with_days() {
        let result = estimate(&large_job()).unwrap();
        assert_relative_eq!(
            result.time.drive_hours,
            0.8 * f64::from(result.schedule.days),
            epsilon = 1e-9
        );
    }

    #[test]
    fn test_margins_match_profit_over_price() {
        let result = estimate(&large_job()).unwrap();

        let a = result.model_a;
        assert_relative_eq!(a.margin_pct.unwrap(), a.profit / a.price * 100.0);
        let b = result.model_b;
        assert_relative_eq!(b.net_margin_pct.unwrap(), b.net_profit / b.price * 100.0);
    }

    #[test]
    fn test_total_hours() {
        let result = estimate(&large_job()).unwrap();
        let t = result.time;
        assert_relative_eq!(
            result.total_hours(),
            t.cleaning_hours + t.setup_hours + t.breakdown_hours + t.drive_hours
        );
    }

    #[test]
    fn test_zero_speed_rejected() {
        let mut job = reference_job();
        job.logistics.average_speed_mph = 0.0;
        assert!(matches!(
            estimate(&job),
            Err(EstimateError::Validation(ValidationError::NonPositive { .. }))
        ));
    }

    #[test]
    fn test_zero_day_override_rejected() {
        let job = reference_job().with_day_override(Some(0));
        assert_eq!(
            estimate(&job),
            Err(EstimateError::Validation(
                ValidationError::InvalidDayOverride(0)
            ))
        );
    }

    #[test]
    fn test_short_day_is_infeasible() {
        let mut job = reference_job();
        job.crew.daily_hours_per_tech = 2.0;
        job.logistics.round_trip_miles = 100.0;
        assert!(matches!(
            estimate(&job),
            Err(EstimateError::NoProductiveTime { usable_daily_hours }) if usable_daily_hours < 0.0
        ));
    }

    #[test]
    fn test_overflowing_geometry_rejected() {
        let mut job = reference_job();
        job.geometry.front_ft = 1e308;
        job.geometry.back_ft = 1e308;
        assert!(job.validate().is_ok());

        assert_eq!(
            estimate(&job),
            Err(EstimateError::Overflow {
                quantity: "areas.wall_sqft"
            })
        );
    }

    #[test]
    fn test_overflowing_pay_rate_rejected() {
        let mut job = reference_job();
        job.crew.trucks = vec![TruckCrew::new(1e308, 15.0)];

        assert_eq!(
            estimate(&job),
            Err(EstimateError::Overflow {
                quantity: "labor.labor_cost"
            })
        );
    }

    #[test]
    fn test_zero_hourly_target_margin_undefined() {
        let mut job = reference_job();
        job.targets.hourly_rate = 0.0;
        let result = estimate(&job).unwrap();

        assert_eq!(result.model_b.price, 0.0);
        assert_eq!(result.model_b.net_margin_pct, None);
        assert!(result.model_b.net_profit_per_hour.is_some());
    }

    #[test]
    fn test_custom_tables() {
        let mut tables = *RateTables::global();
        tables.surface.vinyl = 2.0;
        let estimator = Estimator::new(tables);

        let result = estimator.estimate(&reference_job()).unwrap();
        assert_relative_eq!(result.time.adjusted_wall_sqft, 6000.0);
    }
}
