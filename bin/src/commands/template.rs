//! Template command implementation.
//!
//! This module writes a job file seeded from the business profile.

use anyhow::{Context, Result, bail};
use std::fs;
use std::path::Path;
use washquote_lib::prelude::*;

use crate::display::{JobFormat, render_job};

/// Write a job template to a file or stdout.
pub(crate) fn template(
    format: Option<JobFormat>,
    output: Option<&Path>,
    force: bool,
    quiet: bool,
) -> Result<()> {
    let profile = ProfileStore::with_default_path()
        .load()
        .context("Failed to load profile")?;
    let job = profile.job_template();

    let format = format.unwrap_or_else(|| output.map_or(JobFormat::Toml, JobFormat::from_path));
    let text = render_job(&job, format)?;

    match output {
        Some(path) => {
            if path.exists() && !force {
                bail!(
                    "{} already exists (use --force to overwrite)",
                    path.display()
                );
            }
            fs::write(path, text)
                .with_context(|| format!("Failed to write {}", path.display()))?;
            if !quiet {
                println!("Job template written to: {}", path.display());
            }
        }
        None => print!("{text}"),
    }
    Ok(())
}
