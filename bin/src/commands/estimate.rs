//! Estimate command implementation.
//!
//! This module loads job files, runs the estimator on each and prints a
//! summary or exports report rows.

use anyhow::{Context, Result};
use std::io::Write;
use std::path::{Path, PathBuf};
use tracing::info;
use washquote_lib::prelude::*;

use crate::display::{Format, load_job, open_output, parse_date, write_reports};

/// Per-run adjustments applied on top of every job file.
#[derive(Debug, Default)]
pub(crate) struct Overrides {
    pub(crate) days: Option<u32>,
    pub(crate) mode: Option<CleaningMode>,
}

impl Overrides {
    fn apply(&self, mut job: JobInputs) -> JobInputs {
        if let Some(mode) = self.mode {
            job = job.with_cleaning_mode(mode);
        }
        if let Some(days) = self.days {
            job = job.with_day_override(Some(days));
        }
        job
    }
}

/// Estimate every job file and write the results.
pub(crate) fn estimate_files(
    files: &[PathBuf],
    overrides: &Overrides,
    customer: Option<&str>,
    date: Option<&str>,
    format: Format,
    output: Option<&Path>,
) -> Result<()> {
    let date = parse_date(date)?;
    let estimator = Estimator::global();

    let mut estimates = Vec::with_capacity(files.len());
    for path in files {
        let job = overrides.apply(load_job(path)?);
        let result = estimator
            .estimate(&job)
            .with_context(|| format!("Cannot estimate {}", path.display()))?;
        let name = customer.map_or_else(|| customer_from_path(path), str::to_string);
        info!(
            file = %path.display(),
            days = result.days(),
            model_a = result.model_a.price,
            model_b = result.model_b.price,
            "Estimated job"
        );
        estimates.push((name, job, result));
    }

    if format == Format::Text {
        let mut writer = open_output(output)?;
        for (i, (name, job, result)) in estimates.iter().enumerate() {
            if i > 0 {
                writeln!(writer)?;
            }
            SummaryFormatter::new()
                .with_title(format!("{name} ({date})"))
                .write_summary(job, result, &mut writer)?;
        }
        return Ok(());
    }

    let reports: Vec<_> = estimates
        .iter()
        .map(|(name, _, result)| EstimateReport::new(date, name.as_str(), result))
        .collect();
    write_reports(&reports, output, format)?;

    if let Some(path) = output {
        info!(path = %path.display(), rows = reports.len(), "Wrote report");
    }
    Ok(())
}

/// Uses the job file stem as the customer name.
fn customer_from_path(path: &Path) -> String {
    path.file_stem()
        .map(|s| s.to_string_lossy().replace(['_', '-'], " "))
        .unwrap_or_default()
}
