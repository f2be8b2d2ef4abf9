//! Display utilities, job file I/O and output handling for the washquote CLI.

use anyhow::{Context, Result, bail};
use chrono::NaiveDate;
use clap::ValueEnum;
use std::fs::{self, File};
use std::io::{self, BufWriter, Write};
use std::path::Path;
use washquote_lib::prelude::*;

/// Output format for estimates.
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub(crate) enum Format {
    /// Plain-text summary per job.
    Text,
    Csv,
    Tsv,
    Json,
    Ndjson,
}

impl Format {
    /// Returns the report export format, or `None` for the text summary.
    pub(crate) const fn export(self) -> Option<OutputFormat> {
        match self {
            Self::Text => None,
            Self::Csv => Some(OutputFormat::Csv),
            Self::Tsv => Some(OutputFormat::Tsv),
            Self::Json => Some(OutputFormat::Json),
            Self::Ndjson => Some(OutputFormat::Ndjson),
        }
    }
}

/// Job file format.
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub(crate) enum JobFormat {
    Toml,
    Json,
}

impl JobFormat {
    /// Picks the format from a file extension, defaulting to TOML.
    pub(crate) fn from_path(path: &Path) -> Self {
        match path.extension().and_then(|e| e.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("json") => Self::Json,
            _ => Self::Toml,
        }
    }
}

/// Reads a job file. Missing fields take their defaults.
pub(crate) fn load_job(path: &Path) -> Result<JobInputs> {
    let content =
        fs::read_to_string(path).with_context(|| format!("Failed to read {}", path.display()))?;

    let job = match JobFormat::from_path(path) {
        JobFormat::Json => serde_json::from_str(&content)
            .with_context(|| format!("Invalid JSON job file: {}", path.display()))?,
        JobFormat::Toml => toml::from_str(&content)
            .with_context(|| format!("Invalid TOML job file: {}", path.display()))?,
    };
    Ok(job)
}

/// Renders a job as a job file.
pub(crate) fn render_job(job: &JobInputs, format: JobFormat) -> Result<String> {
    let text = match format {
        JobFormat::Toml => toml::to_string_pretty(job).context("Failed to render TOML")?,
        JobFormat::Json => {
            let mut json = serde_json::to_string_pretty(job).context("Failed to render JSON")?;
            json.push('\n');
            json
        }
    };
    Ok(text)
}

/// Parses a `YYYY-MM-DD` date, defaulting to today.
pub(crate) fn parse_date(date: Option<&str>) -> Result<NaiveDate> {
    date.map_or_else(
        || Ok(chrono::Local::now().date_naive()),
        |s| {
            NaiveDate::parse_from_str(s, "%Y-%m-%d")
                .with_context(|| format!("Invalid date: {s} (expected YYYY-MM-DD)"))
        },
    )
}

/// Opens the output file, or stdout when no path is given.
pub(crate) fn open_output(output: Option<&Path>) -> Result<Box<dyn Write>> {
    match output {
        Some(path) => {
            let file = File::create(path)
                .with_context(|| format!("Failed to create {}", path.display()))?;
            Ok(Box::new(BufWriter::new(file)))
        }
        None => Ok(Box::new(io::stdout().lock())),
    }
}

/// Writes report rows in the given export format.
pub(crate) fn write_reports(
    reports: &[EstimateReport],
    output: Option<&Path>,
    format: Format,
) -> Result<()> {
    let Some(export) = format.export() else {
        bail!("Text output has no report rows");
    };
    let writer = open_output(output)?;
    export.write_reports(reports, writer)?;
    Ok(())
}
