//! Day-count scheduling.

use washquote_types::{CrewConfig, Result, Schedule};

use crate::estimator::finite;
use crate::time::CleaningTime;

/// Settles the number of days for the job.
///
/// The estimate divides raw hours (cleaning, setup, breakdown) by the crew's
/// daily capacity and rounds up. Drive time is left out: it is derived from
/// the day count afterwards, never the other way round. A manual override
/// replaces the estimate but the estimate is still reported.
///
/// The result is never below one day. The override must already be
/// validated as at least one.
///
/// # Errors
///
/// Returns [`EstimateError::Overflow`](washquote_types::EstimateError::Overflow)
/// when raw hours, crew capacity or their ratio is not finite.
pub fn schedule(
    cleaning: &CleaningTime,
    crew: &CrewConfig,
    day_override: Option<u32>,
) -> Result<Schedule> {
    let raw_hours = finite("schedule.raw_hours", cleaning.raw_hours())?;
    let crew_hours_per_day = finite(
        "schedule.crew_hours_per_day",
        crew.daily_hours_per_tech * f64::from(crew.tech_count()),
    )?;
    let estimated_days = estimate_days(raw_hours, crew_hours_per_day)?;

    Ok(Schedule {
        raw_hours,
        crew_hours_per_day,
        estimated_days,
        days: day_override.unwrap_or(estimated_days),
    })
}

/// Rounds raw hours up to whole crew-days, with a floor of one day.
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn estimate_days(raw_hours: f64, crew_hours_per_day: f64) -> Result<u32> {
    let days = finite(
        "schedule.estimated_days",
        (raw_hours / crew_hours_per_day).ceil(),
    )?;
    if days >= 1.0 {
        Ok(days.min(f64::from(u32::MAX)) as u32)
    } else {
        Ok(1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use washquote_types::{CleaningMode, EstimateError, TruckCrew};

    fn cleaning(hours: f64) -> CleaningTime {
        CleaningTime {
            mode: CleaningMode::Parallel,
            adjusted_wall_sqft: 0.0,
            wall_minutes: hours * 60.0,
            deck_hours: 0.0,
            patio_hours: 0.0,
            breezeway_hours: 0.0,
            flatwork_hours: 0.0,
            cleaning_hours: hours,
            setup_hours: 0.25,
            breakdown_hours: 0.17,
        }
    }

    #[test]
    fn test_small_job_is_one_day() {
        let result = schedule(&cleaning(0.701), &CrewConfig::default(), None).unwrap();
        assert_eq!(result.estimated_days, 1);
        assert_eq!(result.days, 1);
        assert!((result.crew_hours_per_day - 16.0).abs() < 1e-10);
    }

    #[test]
    fn test_rounds_up_partial_days() {
        // 40 + 0.42 raw hours over 16 crew-hours a day
        let result = schedule(&cleaning(40.0), &CrewConfig::default(), None).unwrap();
        assert!((result.raw_hours - 40.42).abs() < 1e-10);
        assert_eq!(result.days, 3);
    }

    #[test]
    fn test_more_trucks_fewer_days() {
        let crew = CrewConfig {
            trucks: vec![TruckCrew::default(); 3],
            ..CrewConfig::default()
        };
        let result = schedule(&cleaning(40.0), &crew, None).unwrap();
        assert!((result.crew_hours_per_day - 48.0).abs() < 1e-10);
        assert_eq!(result.days, 1);
    }

    #[test]
    fn test_override_replaces_estimate() {
        let result = schedule(&cleaning(40.0), &CrewConfig::default(), Some(5)).unwrap();
        assert_eq!(result.estimated_days, 3);
        assert_eq!(result.days, 5);
    }

    #[test]
    fn test_zero_hours_still_one_day() {
        let mut time = cleaning(0.0);
        time.setup_hours = 0.0;
        time.breakdown_hours = 0.0;
        let result = schedule(&time, &CrewConfig::default(), None).unwrap();
        assert_eq!(result.days, 1);
    }

    #[test]
    fn test_infinite_hours_rejected() {
        let result = schedule(&cleaning(f64::INFINITY), &CrewConfig::default(), None);
        assert_eq!(
            result,
            Err(EstimateError::Overflow {
                quantity: "schedule.raw_hours"
            })
        );
    }

    #[test]
    fn test_days_overflowing_ratio_rejected() {
        let crew = CrewConfig {
            daily_hours_per_tech: f64::MIN_POSITIVE,
            ..CrewConfig::default()
        };
        let result = schedule(&cleaning(f64::MAX / 2.0), &crew, None);
        assert_eq!(
            result,
            Err(EstimateError::Overflow {
                quantity: "schedule.estimated_days"
            })
        );
    }
}
