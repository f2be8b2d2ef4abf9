//! Cost, schedule and pricing estimation for power-washing jobs.
//!
//! This crate turns a [`JobInputs`](washquote_types::JobInputs) into an
//! [`EstimateResult`](washquote_types::EstimateResult):
//!
//! - [`calculate_areas`] - Wall and add-on square footage
//! - [`cleaning_time`] / [`drive_time`] - Technician time allocation
//! - [`schedule`] - Day count with optional override
//! - [`labor_cost`] - Payroll, drive and mileage costs
//! - [`model_a`] / [`model_b`] - The two pricing models
//! - [`Estimator`] - Runs the full pipeline
//! - [`RateTables`] - Factor tables for experience, build-up and surfaces

#![doc = include_str!("../README.md")]
#![doc(issue_tracker_base_url = "https://github.com/washquote/washquote/issues/")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod area;
mod estimator;
mod labor;
mod pricing;
mod schedule;
mod tables;
mod time;

pub use area::calculate_areas;
pub use estimator::{Estimator, estimate};
pub use labor::labor_cost;
pub use pricing::{model_a, model_b};
pub use schedule::schedule;
pub use tables::{
    BuildUpTable, DeckRateTable, ExperienceProfile, ExperienceTable, RateTables, SurfaceTable,
};
pub use time::{CleaningTime, DriveTime, cleaning_time, drive_time};
