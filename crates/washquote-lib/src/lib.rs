//! Power-washing job cost and pricing estimator.
//!
//! This is a facade crate that re-exports functionality from the washquote
//! workspace crates for convenient access.
//!
//! # Quick Start
//!
//! ```
//! use washquote_lib::prelude::*;
//!
//! let mut job = JobInputs::default();
//! job.geometry.buildings = 4;
//! job.logistics.round_trip_miles = 30.0;
//!
//! let result = estimate(&job)?;
//! println!(
//!     "{} days, Model A {:.2}, Model B {:.2}",
//!     result.days(),
//!     result.model_a.price,
//!     result.model_b.price
//! );
//! # Ok::<(), EstimateError>(())
//! ```

#![doc = include_str!("../README.md")]
#![doc(issue_tracker_base_url = "https://github.com/washquote/washquote/issues/")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

// Re-export core types
pub use washquote_types::*;

// Re-export the engine
pub use washquote_engine::{
    CleaningTime, DriveTime, Estimator, RateTables, calculate_areas, cleaning_time, drive_time,
    estimate, labor_cost, model_a, model_b, schedule,
};

// Re-export guidance
#[cfg(feature = "guidance")]
pub use washquote_guidance::{Dilution, GuidanceRegistry, PropertyType, Tone};

// Re-export formatters
#[cfg(feature = "format")]
pub use washquote_format::{
    CsvFormatter, FormatError, JsonFormatter, OutputFormat, ReportFormatter, SummaryFormatter,
};

// Re-export profile storage
#[cfg(feature = "profile")]
pub use washquote_profile::{BusinessProfile, ProfileError, ProfileStore};

/// Prelude module for convenient imports.
///
/// ```
/// use washquote_lib::prelude::*;
/// ```
pub mod prelude {
    pub use washquote_types::{
        BuildUp, CleaningMode, DeckMaterial, EstimateError, EstimateReport, EstimateResult,
        Experience, JobInputs, SurfaceMaterial, TruckCrew, ValidationError,
    };

    pub use washquote_engine::{Estimator, RateTables, estimate};

    #[cfg(feature = "guidance")]
    pub use washquote_guidance::{GuidanceRegistry, PropertyType};

    #[cfg(feature = "format")]
    pub use washquote_format::{
        CsvFormatter, JsonFormatter, OutputFormat, ReportFormatter, SummaryFormatter,
    };

    #[cfg(feature = "profile")]
    pub use washquote_profile::{BusinessProfile, ProfileStore};
}
