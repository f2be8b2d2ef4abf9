//! On-disk profile storage.

use directories::ProjectDirs;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

use crate::{BusinessProfile, ProfileError, Result};

/// File name of the stored profile.
const PROFILE_FILE: &str = "profile.json";

/// Reads and writes the business profile as JSON.
#[derive(Debug, Clone)]
pub struct ProfileStore {
    /// Path to the profile file.
    path: PathBuf,
}

impl ProfileStore {
    /// Creates a store for the profile file at `path`.
    ///
    /// Nothing is touched on disk until the profile is saved.
    #[must_use]
    pub const fn new(path: PathBuf) -> Self {
        Self { path }
    }

    /// Returns the default profile location.
    ///
    /// Uses the `directories` crate to find the appropriate location:
    /// - Linux: `~/.config/washquote/profile.json`
    /// - macOS: `~/Library/Application Support/washquote/profile.json`
    /// - Windows: `C:\Users\<User>\AppData\Roaming\washquote\config\profile.json`
    ///
    /// Falls back to `~/.washquote/profile.json` if the platform-specific
    /// location cannot be determined.
    #[must_use]
    pub fn default_path() -> PathBuf {
        ProjectDirs::from("", "", "washquote")
            .map_or_else(dirs_fallback, |proj_dirs| {
                proj_dirs.config_dir().to_path_buf()
            })
            .join(PROFILE_FILE)
    }

    /// Creates a store at the default location.
    #[must_use]
    pub fn with_default_path() -> Self {
        Self::new(Self::default_path())
    }

    /// Returns the profile file path.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Returns true if a profile has been saved.
    #[must_use]
    pub fn exists(&self) -> bool {
        self.path.is_file()
    }

    /// Loads the stored profile, or the defaults if none has been saved.
    ///
    /// # Errors
    ///
    /// Returns an error if the file exists but cannot be read or parsed.
    pub fn load(&self) -> Result<BusinessProfile> {
        if !self.exists() {
            debug!(path = %self.path.display(), "No saved profile, using defaults");
            return Ok(BusinessProfile::default());
        }

        let content = fs::read_to_string(&self.path).map_err(|e| ProfileError::ReadFile {
            path: self.path.clone(),
            source: e,
        })?;
        let profile = serde_json::from_str(&content).map_err(|e| ProfileError::ParseJson {
            path: self.path.clone(),
            source: e,
        })?;
        debug!(path = %self.path.display(), "Loaded profile");
        Ok(profile)
    }

    /// Saves the profile, creating the parent directory if needed.
    ///
    /// # Errors
    ///
    /// Returns an error if the directory or file cannot be written.
    pub fn save(&self, profile: &BusinessProfile) -> Result<()> {
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).map_err(|e| ProfileError::CreateDir {
                path: parent.to_path_buf(),
                source: e,
            })?;
        }

        let json = serde_json::to_string_pretty(profile)?;
        fs::write(&self.path, json).map_err(|e| ProfileError::WriteFile {
            path: self.path.clone(),
            source: e,
        })?;
        debug!(path = %self.path.display(), "Saved profile");
        Ok(())
    }

    /// Deletes the saved profile so the defaults apply again.
    ///
    /// # Errors
    ///
    /// Returns an error if the file exists but cannot be deleted.
    pub fn reset(&self) -> Result<BusinessProfile> {
        if self.exists() {
            fs::remove_file(&self.path).map_err(|e| ProfileError::DeleteFile {
                path: self.path.clone(),
                source: e,
            })?;
            debug!(path = %self.path.display(), "Deleted profile");
        }
        Ok(BusinessProfile::default())
    }
}

/// Fallback directory when the platform config dir is unavailable.
fn dirs_fallback() -> PathBuf {
    std::env::var("HOME")
        .map(PathBuf::from)
        .unwrap_or_else(|_| PathBuf::from("."))
        .join(".washquote")
}
