//! Crew labor cost and usable capacity.

use tracing::warn;
use washquote_types::{
    CrewConfig, EstimateError, LaborBreakdown, Logistics, Result, TimeBreakdown,
};

/// Computes labor cost and usable technician-hours.
///
/// Labor cost covers scheduled payroll for every day, wages paid while
/// driving, and mileage.
///
/// # Errors
///
/// Returns [`EstimateError::NoProductiveTime`] when setup, breakdown and
/// drive time per day exceed the working day. A negative usable capacity
/// would flip the sign of every per-hour figure downstream.
pub fn labor_cost(
    crew: &CrewConfig,
    logistics: &Logistics,
    time: &TimeBreakdown,
    days: u32,
) -> Result<LaborBreakdown> {
    let tech_count = crew.tech_count();
    let techs = f64::from(tech_count);
    let days_f = f64::from(days);
    let hourly_total = crew.total_hourly_rate();

    let blended_rate = hourly_total / techs;
    let crew_payroll = hourly_total * days_f * crew.daily_hours_per_tech;
    let drive_labor_cost = blended_rate * time.drive_hours * techs;
    let drive_mileage_cost = logistics.round_trip_miles * logistics.mileage_rate * days_f;
    let labor_cost = crew_payroll + drive_labor_cost + drive_mileage_cost;

    let overhead = time.setup_hours + time.breakdown_hours + time.drive_hours_per_day;
    let usable_daily_hours = crew.daily_hours_per_tech - overhead;
    if usable_daily_hours < 0.0 {
        warn!(
            daily_hours = crew.daily_hours_per_tech,
            overhead, "Daily overhead exceeds the working day"
        );
        return Err(EstimateError::NoProductiveTime { usable_daily_hours });
    }
    let usable_total_hours = techs * days_f * usable_daily_hours;

    Ok(LaborBreakdown {
        tech_count,
        blended_rate,
        crew_payroll,
        drive_labor_cost,
        drive_mileage_cost,
        labor_cost,
        usable_daily_hours,
        usable_total_hours,
    })
}
