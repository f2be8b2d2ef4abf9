//! Quote command implementation.
//!
//! This module walks an estimator through a site survey with interactive
//! prompts seeded from the business profile, then prints the estimate and
//! optionally exports it.

use anyhow::{Context, Result};
use inquire::validator::Validation;
use inquire::{Confirm, CustomType, CustomUserError, Select, Text};
use std::fmt::Display;
use std::fs;
use std::io;
use std::path::Path;
use tracing::info;
use washquote_lib::prelude::*;

use crate::display::{Format, JobFormat, render_job, write_reports};

/// Collect a job interactively, estimate it and offer a CSV export.
pub(crate) fn quote(output_dir: Option<&Path>, save_job: Option<&Path>) -> Result<()> {
    let profile = ProfileStore::with_default_path()
        .load()
        .context("Failed to load profile")?;
    let job = collect_job(profile.job_template())?;

    let result = Estimator::global()
        .estimate(&job)
        .context("Cannot estimate this job")?;

    let customer = Text::new("Customer/Job name:")
        .prompt()
        .context("Prompt cancelled")?;
    let customer = customer.trim();
    let date = chrono::Local::now().date_naive();
    let title = if customer.is_empty() {
        format!("Estimate ({date})")
    } else {
        format!("{customer} ({date})")
    };

    println!();
    SummaryFormatter::new()
        .with_title(title)
        .write_summary(&job, &result, io::stdout().lock())?;

    let guidance = GuidanceRegistry::global();
    println!("\nSuggested Chemicals for {}:", job.surface.material);
    for chemical in guidance.chemicals(job.surface.material) {
        println!("  - {chemical}");
    }
    println!();

    if let Some(path) = save_job {
        fs::write(path, render_job(&job, JobFormat::from_path(path))?)
            .with_context(|| format!("Failed to write {}", path.display()))?;
        println!("Job saved to: {}", path.display());
    }

    let export = Confirm::new("Export estimate as CSV?")
        .with_default(false)
        .prompt()
        .context("Prompt cancelled")?;
    if export {
        let report = EstimateReport::new(date, customer, &result);
        let path = output_dir
            .unwrap_or_else(|| Path::new("."))
            .join(format!("{}_estimate.csv", report.file_stem("washquote")));
        write_reports(&[report], Some(&path), Format::Csv)?;
        info!(path = %path.display(), "Exported estimate");
        println!("Estimate written to: {}", path.display());
    }

    Ok(())
}

/// Prompts for every job field, starting from `job`.
fn collect_job(mut job: JobInputs) -> Result<JobInputs> {
    println!("Building Geometry");
    let g = &mut job.geometry;
    g.stories = ask("Stories per building:", g.stories)?;
    g.height_per_story_ft = ask("Height per story (ft):", g.height_per_story_ft)?;
    g.front_ft = ask("Front length (ft):", g.front_ft)?;
    g.back_ft = ask("Back length (ft):", g.back_ft)?;
    g.left_ft = ask("Left length (ft):", g.left_ft)?;
    g.right_ft = ask("Right length (ft):", g.right_ft)?;
    g.buildings = ask("Number of buildings:", g.buildings)?;

    println!("\nSurface");
    job.surface.material = choose(
        "Surface material:",
        SurfaceMaterial::all(),
        job.surface.material,
    )?;
    job.surface.build_up = choose("Build-up level:", BuildUp::all(), job.surface.build_up)?;

    if confirm(
        "Any breezeways, flatwork, decks or patios?",
        job.add_ons.any(),
    )? {
        let a = &mut job.add_ons;
        a.breezeway_sqft = ask("Breezeway area (sqft):", a.breezeway_sqft)?;
        a.flatwork_sqft = ask("Flatwork area (sqft):", a.flatwork_sqft)?;
        a.deck_sqft = ask("Deck area (sqft):", a.deck_sqft)?;
        if a.deck_sqft > 0.0 {
            job.surface.deck_material = choose(
                "Deck material:",
                DeckMaterial::all(),
                job.surface.deck_material,
            )?;
        }
        job.add_ons.patio_count = ask("Patios/decks count:", job.add_ons.patio_count)?;
    }

    println!("\nCrew");
    job.crew.experience = choose("Crew experience:", Experience::all(), job.crew.experience)?;
    job.crew.daily_hours_per_tech =
        ask("Hours per technician per day:", job.crew.daily_hours_per_tech)?;
    let base = job.crew.trucks.first().copied().unwrap_or_default();
    let trucks = ask_count("Number of trucks:", job.crew.truck_count())?;
    job.crew.trucks = (1..=trucks)
        .map(|n| {
            Ok(TruckCrew::new(
                ask(&format!("Truck {n} lead tech rate ($/hr):"), base.lead_rate)?,
                ask(&format!("Truck {n} junior tech rate ($/hr):"), base.junior_rate)?,
            ))
        })
        .collect::<Result<_>>()?;
    job.cleaning_mode = choose("Cleaning mode:", CleaningMode::all(), job.cleaning_mode)?;

    println!("\nLogistics");
    job.logistics.round_trip_miles =
        ask("Round-trip miles per day:", job.logistics.round_trip_miles)?;
    job.rates.lift_cost = ask("Lift/drone cost ($, 0 if none):", job.rates.lift_cost)?;

    println!("\nTargets");
    let t = &mut job.targets;
    t.daily_revenue_per_truck = ask(
        "Target revenue per truck per day ($):",
        t.daily_revenue_per_truck,
    )?;
    t.hourly_rate = ask("Target hourly rate ($/hr):", t.hourly_rate)?;
    t.competitive_advantage_pct = ask("Competitive advantage (%):", t.competitive_advantage_pct)?;

    job.day_override = None;
    let estimated_days = Estimator::global()
        .estimate(&job)
        .context("Cannot estimate this job")?
        .schedule
        .estimated_days;
    println!("\nEstimated days on site: {estimated_days}");
    if confirm("Override the estimated day count?", false)? {
        job.day_override = Some(ask_count("Days on site:", estimated_days)?);
    }

    Ok(job)
}

/// Prompts for a value with a default.
fn ask<T>(message: &str, default: T) -> Result<T>
where
    T: Clone + std::str::FromStr + ToString,
{
    CustomType::<T>::new(message)
        .with_default(default)
        .with_error_message("Please enter a valid number")
        .prompt()
        .context("Prompt cancelled")
}

/// Prompts for one of `options`, starting at `current`.
fn choose<T>(message: &str, options: &[T], current: T) -> Result<T>
where
    T: Copy + Display + PartialEq,
{
    let cursor = options.iter().position(|o| *o == current).unwrap_or(0);
    Select::new(message, options.to_vec())
        .with_starting_cursor(cursor)
        .prompt()
        .context("Prompt cancelled")
}

/// Prompts for a whole number of at least one.
fn ask_count(message: &str, default: u32) -> Result<u32> {
    CustomType::<u32>::new(message)
        .with_default(default.max(1))
        .with_error_message("Please enter a whole number")
        .with_validator(at_least_one)
        .prompt()
        .context("Prompt cancelled")
}

#[allow(clippy::unnecessary_wraps)]
fn at_least_one(value: &u32) -> Result<Validation, CustomUserError> {
    Ok(if *value >= 1 {
        Validation::Valid
    } else {
        Validation::Invalid("Must be at least 1".into())
    })
}

fn confirm(message: &str, default: bool) -> Result<bool> {
    Confirm::new(message)
        .with_default(default)
        .prompt()
        .context("Prompt cancelled")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_counts_must_be_at_least_one() {
        assert!(matches!(at_least_one(&0), Ok(Validation::Invalid(_))));
        assert!(matches!(at_least_one(&1), Ok(Validation::Valid)));
        assert!(matches!(at_least_one(&12), Ok(Validation::Valid)));
    }
}
