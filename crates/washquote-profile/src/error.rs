//! Profile errors.

use std::path::PathBuf;
use thiserror::Error;
use washquote_types::{ParseEnumError, ValidationError};

/// Errors that can occur while loading, saving or editing a profile.
#[derive(Error, Debug)]
pub enum ProfileError {
    /// Failed to create the profile directory.
    #[error("Failed to create directory '{path}': {source}")]
    CreateDir {
        /// The path that could not be created.
        path: PathBuf,
        /// The underlying I/O error.
        source: std::io::Error,
    },

    /// Failed to read the profile file.
    #[error("Failed to read file '{path}': {source}")]
    ReadFile {
        /// The path that could not be read.
        path: PathBuf,
        /// The underlying I/O error.
        source: std::io::Error,
    },

    /// Failed to write the profile file.
    #[error("Failed to write file '{path}': {source}")]
    WriteFile {
        /// The path that could not be written.
        path: PathBuf,
        /// The underlying I/O error.
        source: std::io::Error,
    },

    /// Failed to delete the profile file.
    #[error("Failed to delete file '{path}': {source}")]
    DeleteFile {
        /// The path that could not be deleted.
        path: PathBuf,
        /// The underlying I/O error.
        source: std::io::Error,
    },

    /// Failed to parse the profile file.
    #[error("Failed to parse profile '{path}': {source}")]
    ParseJson {
        /// The path that could not be parsed.
        path: PathBuf,
        /// The underlying JSON error.
        source: serde_json::Error,
    },

    /// Failed to serialize the profile.
    #[error("Failed to serialize profile: {0}")]
    SerializeJson(#[from] serde_json::Error),

    /// No setting with this key.
    #[error("Unknown profile key: {0}")]
    UnknownKey(String),

    /// The value is not a number.
    #[error("Invalid value '{value}' for '{key}': expected a number")]
    InvalidValue {
        /// The key being set.
        key: String,
        /// The rejected value.
        value: String,
    },

    /// The value is not an experience level.
    #[error(transparent)]
    Experience(#[from] ParseEnumError),

    /// The value is outside the valid domain.
    #[error("Invalid profile: {0}")]
    Invalid(#[from] ValidationError),
}

/// Result type for profile operations.
pub type Result<T> = std::result::Result<T, ProfileError>;
