//! Business profile configuration for washquote.
//!
//! This crate stores the defaults a business applies to every new job:
//!
//! - [`BusinessProfile`] - Crew rates, production rates and pricing targets
//! - [`ProfileStore`] - JSON file in the platform config directory
//! - [`ProfileError`] - Failure modes

#![doc = include_str!("../README.md")]
#![doc(issue_tracker_base_url = "https://github.com/washquote/washquote/issues/")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod error;
mod profile;
mod store;

pub use error::{ProfileError, Result};
pub use profile::BusinessProfile;
pub use store::ProfileStore;
