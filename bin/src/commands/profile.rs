//! Profile command implementation.
//!
//! This module shows and edits the stored business defaults.

use anyhow::{Context, Result};
use washquote_lib::prelude::*;

/// Print every profile setting.
pub(crate) fn show() -> Result<()> {
    let store = ProfileStore::with_default_path();
    let profile = store.load().context("Failed to load profile")?;

    let source = if store.exists() {
        store.path().display().to_string()
    } else {
        "built-in defaults".to_string()
    };
    println!("Profile ({source})");
    println!("{}", "-".repeat(40));
    for key in BusinessProfile::KEYS {
        println!("{key:<28} {}", profile.get(key).unwrap_or_default());
    }
    Ok(())
}

/// Print the profile file path.
pub(crate) fn path() -> Result<()> {
    println!("{}", ProfileStore::with_default_path().path().display());
    Ok(())
}

/// Update one setting and save the profile.
pub(crate) fn set(key: &str, value: &str, quiet: bool) -> Result<()> {
    let store = ProfileStore::with_default_path();
    let mut profile = store.load().context("Failed to load profile")?;

    profile.set(key, value).with_context(|| {
        format!(
            "Cannot set {key} (valid keys: {})",
            BusinessProfile::KEYS.join(", ")
        )
    })?;
    store.save(&profile).context("Failed to save profile")?;

    if !quiet {
        println!("{key} = {}", profile.get(key).unwrap_or_default());
    }
    Ok(())
}

/// Delete the saved profile.
pub(crate) fn reset(quiet: bool) -> Result<()> {
    let store = ProfileStore::with_default_path();
    store.reset().context("Failed to reset profile")?;
    if !quiet {
        println!("Profile reset to defaults.");
    }
    Ok(())
}
