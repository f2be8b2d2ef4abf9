//! Guidance command implementations.
//!
//! Chemical recommendations, dilution, property-type tips and the on-site
//! checklist.

use anyhow::{Context, Result};
use washquote_lib::prelude::*;

/// Print recommended chemicals for one surface, or for all of them.
pub(crate) fn chemicals(surface: Option<SurfaceMaterial>) -> Result<()> {
    let guidance = GuidanceRegistry::global();
    let surfaces = surface.map_or_else(|| SurfaceMaterial::all().to_vec(), |s| vec![s]);

    for (i, material) in surfaces.iter().enumerate() {
        if i > 0 {
            println!();
        }
        println!("Suggested Chemicals for {material}:");
        for chemical in guidance.chemicals(*material) {
            println!("  - {chemical}");
        }
    }

    if surface.is_none() {
        println!("\nOptional Chemical Treatments:");
        for treatment in guidance.treatments() {
            println!("  - {treatment}");
        }
    }
    Ok(())
}

/// Print the recommended dilution for a surface temperature.
pub(crate) fn dilution(temp_f: f64, surface: Option<SurfaceMaterial>) -> Result<()> {
    let guidance = GuidanceRegistry::global();
    println!(
        "Recommended Dilution Based on {temp_f}°F: {}",
        guidance.dilution(temp_f)
    );

    if let Some(material) = surface {
        println!("\nSuggested Chemicals for {material}:");
        for chemical in guidance.chemicals(material) {
            println!("  - {chemical}");
        }
    }
    Ok(())
}

/// Print tips for one property type, or list all of them.
pub(crate) fn tips(property: Option<&str>) -> Result<()> {
    let guidance = GuidanceRegistry::global();

    if let Some(query) = property {
        let property = guidance.property(query).with_context(|| {
            let known: Vec<_> = guidance.properties().map(PropertyType::id).collect();
            format!(
                "Unknown property type: {query}. Valid options: {}",
                known.join(", ")
            )
        })?;
        println!("{} [{}]", property.name(), property.tone());
        println!("  {}", property.tip());
        return Ok(());
    }

    println!("{:<20} {:<20} {:<8}", "ID", "NAME", "TONE");
    println!("{}", "-".repeat(50));
    for property in guidance.properties() {
        println!(
            "{:<20} {:<20} {:<8}",
            property.id(),
            property.name(),
            property.tone()
        );
    }
    Ok(())
}

/// Print the on-site checklist.
pub(crate) fn checklist() -> Result<()> {
    println!("On-Site Checklist & Scope Notes");
    for item in GuidanceRegistry::global().checklist() {
        println!("  [ ] {item}");
    }
    Ok(())
}
