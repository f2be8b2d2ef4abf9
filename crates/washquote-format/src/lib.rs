//! Report export and presentation for washquote.
//!
//! This crate writes estimates in the formats estimators hand to
//! customers or load into spreadsheets:
//!
//! - [`CsvFormatter`] - CSV or TSV report rows
//! - [`JsonFormatter`] - JSON array or NDJSON report rows
//! - [`SummaryFormatter`] - Plain-text summary of a full estimate

#![doc = include_str!("../README.md")]
#![doc(issue_tracker_base_url = "https://github.com/washquote/washquote/issues/")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod csv;
mod formatter;
mod json;
mod summary;

pub use crate::csv::CsvFormatter;
pub use formatter::{FormatError, OutputFormat, ReportFormatter};
pub use json::JsonFormatter;
pub use summary::{SummaryFormatter, hours, money, percent, sqft};
