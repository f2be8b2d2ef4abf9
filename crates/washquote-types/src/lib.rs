//! Core types for the washquote power-washing estimator.
//!
//! This crate provides the data structures shared across washquote:
//!
//! - [`JobInputs`] - Immutable job description collected from a site survey
//! - [`SurfaceMaterial`], [`BuildUp`], [`DeckMaterial`] - Surface conditions
//! - [`Experience`], [`CleaningMode`], [`TruckCrew`] - Crew configuration
//! - [`EstimateResult`] - Derived cost, time and price breakdown
//! - [`EstimateReport`] - Exported report row
//! - [`EstimateError`], [`ValidationError`] - Failure modes

#![doc = include_str!("../README.md")]
#![doc(issue_tracker_base_url = "https://github.com/washquote/washquote/issues/")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod crew;
mod error;
mod estimate;
mod job;
mod report;
mod surface;

pub use crew::{
    CleaningMode, DEFAULT_JUNIOR_RATE, DEFAULT_LEAD_RATE, Experience, TECHS_PER_TRUCK, TruckCrew,
};
pub use error::{EstimateError, ParseEnumError, Result, ValidationError};
pub use estimate::{
    AreaBreakdown, EstimateResult, LaborBreakdown, ModelAQuote, ModelBQuote, Schedule,
    TimeBreakdown, checked_ratio,
};
pub use job::{
    AddOns, CostShares, CrewConfig, DEFAULT_CHEMICAL_PCT, DEFAULT_FUEL_PCT, DEFAULT_MARKETING_PCT,
    DEFAULT_MILEAGE_RATE, DEFAULT_REFERENCE_WALL_RATE, DEFAULT_ROYALTY_PCT, Geometry, JobInputs,
    Logistics, PricingTargets, ProductionRates, SurfaceConditions,
};
pub use report::EstimateReport;
pub use surface::{BuildUp, DeckMaterial, SurfaceMaterial};
