//! washquote CLI - Power-washing job cost and pricing estimator.

use anyhow::Result;
use clap::{CommandFactory, Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;
use washquote_lib::{CleaningMode, SurfaceMaterial};

mod commands;
mod display;

use display::{Format, JobFormat};

#[derive(Parser)]
#[command(name = "washquote")]
#[command(about = "Power-washing job cost and pricing estimator", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Verbosity level (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    /// Quiet mode (errors only, no status messages)
    #[arg(short, long, global = true)]
    quiet: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Estimate one or more job files (.toml or .json)
    Estimate {
        /// Job files
        #[arg(required = true)]
        files: Vec<PathBuf>,

        /// Override the number of days on site
        #[arg(short, long, value_parser = clap::value_parser!(u32).range(1..))]
        days: Option<u32>,

        /// Override the cleaning mode (parallel, linear)
        #[arg(short, long)]
        mode: Option<CleaningMode>,

        /// Customer/job name. Defaults to each file name.
        #[arg(short, long)]
        customer: Option<String>,

        /// Report date (YYYY-MM-DD). Defaults to today.
        #[arg(long)]
        date: Option<String>,

        /// Output format
        #[arg(short, long, value_enum, default_value = "text")]
        format: Format,

        /// Output file path. Defaults to stdout.
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Build an estimate interactively
    Quote {
        /// Directory for the CSV export. Defaults to the current directory.
        #[arg(short, long)]
        output_dir: Option<PathBuf>,

        /// Also save the collected job to this file (.toml or .json)
        #[arg(long)]
        save_job: Option<PathBuf>,
    },

    /// Write a job file seeded from the business profile
    Template {
        /// Job file format. Defaults to the output extension, else TOML.
        #[arg(short, long, value_enum)]
        format: Option<JobFormat>,

        /// Output file path. Defaults to stdout.
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Overwrite an existing file
        #[arg(long)]
        force: bool,
    },

    /// Show recommended chemicals by surface
    Chemicals {
        /// Surface material (vinyl, brick, concrete, wood, stone)
        surface: Option<SurfaceMaterial>,
    },

    /// Show the recommended dilution for a surface temperature
    Dilution {
        /// Estimated surface temperature in °F
        #[arg(allow_negative_numbers = true)]
        temp_f: f64,

        /// Also list chemicals for this surface
        #[arg(short, long)]
        surface: Option<SurfaceMaterial>,
    },

    /// Show job guidance by property type
    Tips {
        /// Property type (e.g. casino, "hoa community")
        property: Option<String>,
    },

    /// Show the on-site checklist
    Checklist,

    /// Manage the business defaults profile
    Profile {
        #[command(subcommand)]
        action: ProfileAction,
    },
}

/// Actions for the business profile.
#[derive(Subcommand)]
enum ProfileAction {
    /// Show every setting
    Show,

    /// Print the profile file path
    Path,

    /// Change one setting
    Set {
        /// Setting name (e.g. hourly_rate, lead_rate, royalty_pct)
        key: String,

        /// New value
        value: String,
    },

    /// Delete the saved profile and return to defaults
    Reset,
}

/// Initializes logging to stderr.
///
/// `-v` flags take precedence over `RUST_LOG`; without either only warnings
/// are shown.
fn init_tracing(verbose: u8, quiet: bool) {
    let level = match (quiet, verbose) {
        (true, _) => Some("error"),
        (false, 0) => None,
        (false, 1) => Some("info"),
        (false, 2) => Some("debug"),
        (false, _) => Some("trace"),
    };
    let filter = level.map_or_else(
        || EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        EnvFilter::new,
    );

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose, cli.quiet);

    // Show help if no command provided
    let Some(command) = cli.command else {
        Cli::command().print_help()?;
        return Ok(());
    };

    match command {
        Commands::Estimate {
            files,
            days,
            mode,
            customer,
            date,
            format,
            output,
        } => commands::estimate::estimate_files(
            &files,
            &commands::estimate::Overrides { days, mode },
            customer.as_deref(),
            date.as_deref(),
            format,
            output.as_deref(),
        ),
        Commands::Quote {
            output_dir,
            save_job,
        } => commands::quote::quote(output_dir.as_deref(), save_job.as_deref()),
        Commands::Template {
            format,
            output,
            force,
        } => commands::template::template(format, output.as_deref(), force, cli.quiet),
        Commands::Chemicals { surface } => commands::guidance::chemicals(surface),
        Commands::Dilution { temp_f, surface } => commands::guidance::dilution(temp_f, surface),
        Commands::Tips { property } => commands::guidance::tips(property.as_deref()),
        Commands::Checklist => commands::guidance::checklist(),
        Commands::Profile { action } => match action {
            ProfileAction::Show => commands::profile::show(),
            ProfileAction::Path => commands::profile::path(),
            ProfileAction::Set { key, value } => commands::profile::set(&key, &value, cli.quiet),
            ProfileAction::Reset => commands::profile::reset(cli.quiet),
        },
    }
}
