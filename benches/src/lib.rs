//! Benchmark fixtures for washquote.
//!
//! Provides representative jobs of increasing size so the engine and the
//! exporters can be measured on realistic inputs.

use chrono::NaiveDate;
use washquote_lib::{CleaningMode, EstimateReport, JobInputs, TruckCrew, estimate};

/// A named benchmark job.
#[derive(Debug, Clone)]
pub struct BenchmarkJob {
    /// Short label used as the benchmark ID.
    pub name: &'static str,
    /// The job inputs.
    pub job: JobInputs,
}

/// Jobs from a single house up to a large apartment complex.
#[must_use]
pub fn benchmark_jobs() -> Vec<BenchmarkJob> {
    let house = JobInputs::default();

    let mut strip_mall = JobInputs::default();
    strip_mall.geometry.stories = 1;
    strip_mall.geometry.height_per_story_ft = 18.0;
    strip_mall.geometry.front_ft = 600.0;
    strip_mall.geometry.back_ft = 600.0;
    strip_mall.add_ons.flatwork_sqft = 12_000.0;
    strip_mall.logistics.round_trip_miles = 30.0;

    let mut complex = JobInputs::default();
    complex.cleaning_mode = CleaningMode::Linear;
    complex.geometry.stories = 3;
    complex.geometry.buildings = 24;
    complex.add_ons.breezeway_sqft = 9_600.0;
    complex.add_ons.deck_sqft = 4_800.0;
    complex.add_ons.patio_count = 288;
    complex.crew.trucks = vec![TruckCrew::default(); 3];
    complex.logistics.round_trip_miles = 45.0;
    complex.rates.lift_cost = 600.0;

    vec![
        BenchmarkJob {
            name: "house",
            job: house,
        },
        BenchmarkJob {
            name: "strip-mall",
            job: strip_mall,
        },
        BenchmarkJob {
            name: "apartment-complex",
            job: complex,
        },
    ]
}

/// Builds `count` report rows by estimating the benchmark jobs in turn.
///
/// # Panics
///
/// Panics if a benchmark job fails to estimate.
#[must_use]
pub fn sample_reports(count: usize) -> Vec<EstimateReport> {
    let date = NaiveDate::from_ymd_opt(2024, 5, 1).unwrap_or_default();
    let jobs = benchmark_jobs();
    (0..count)
        .map(|i| {
            let bench = &jobs[i % jobs.len()];
            let result = estimate(&bench.job).expect("benchmark jobs are valid");
            EstimateReport::new(date, format!("{} #{i}", bench.name), &result)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_benchmark_jobs_estimate() {
        for bench in benchmark_jobs() {
            assert!(estimate(&bench.job).is_ok(), "{}", bench.name);
        }
    }

    #[test]
    fn test_sample_reports() {
        let reports = sample_reports(7);
        assert_eq!(reports.len(), 7);
        assert_eq!(reports[6].customer, "house #6");
    }
}
