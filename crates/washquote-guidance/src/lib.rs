//! Operational guidance for power-washing estimators.
//!
//! This crate holds the static lookups shown alongside an estimate:
//! recommended chemicals per surface, optional treatments, dilution by
//! surface temperature, property-type tips and the on-site checklist.
//!
//! # Example
//!
//! ```
//! use washquote_guidance::GuidanceRegistry;
//! use washquote_types::SurfaceMaterial;
//!
//! let guidance = GuidanceRegistry::global();
//!
//! for chemical in guidance.chemicals(SurfaceMaterial::Brick) {
//!     println!("- {chemical}");
//! }
//! println!("{}", guidance.dilution(80.0));
//! ```

#![doc = include_str!("../README.md")]
#![doc(issue_tracker_base_url = "https://github.com/washquote/washquote/issues/")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

use std::sync::OnceLock;

use serde::{Deserialize, Serialize};
use washquote_types::SurfaceMaterial;

/// The guidance data embedded at compile time.
const GUIDANCE_JSON: &str = include_str!("../data/guidance.json");

/// Global guidance registry instance.
static REGISTRY: OnceLock<GuidanceRegistry> = OnceLock::new();

/// How prominently a tip should be presented.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Tone {
    /// Neutral advice.
    Info,
    /// Something that commonly goes wrong on this kind of property.
    Warning,
    /// An upsell or easy win.
    Success,
}

impl Tone {
    /// Returns the tone as a string slice.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Info => "info",
            Self::Warning => "warning",
            Self::Success => "success",
        }
    }
}

impl std::fmt::Display for Tone {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A water to chemical mix ratio.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Dilution {
    /// Water share in percent.
    pub water_pct: u8,
    /// Chemical share in percent.
    pub chemical_pct: u8,
}

impl std::fmt::Display for Dilution {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}% water / {}% chem",
            self.water_pct, self.chemical_pct
        )
    }
}

/// Guidance for one kind of commercial property.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PropertyType {
    id: String,
    name: String,
    tone: Tone,
    tip: String,
}

impl PropertyType {
    /// Returns the identifier (e.g. "hoa-community").
    #[must_use]
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Returns the display name (e.g. "HOA Community").
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the presentation tone.
    #[must_use]
    pub const fn tone(&self) -> Tone {
        self.tone
    }

    /// Returns the tip text.
    #[must_use]
    pub fn tip(&self) -> &str {
        &self.tip
    }
}

#[derive(Debug, Deserialize)]
struct ChemicalTable {
    vinyl: Vec<String>,
    brick: Vec<String>,
    concrete: Vec<String>,
    wood: Vec<String>,
    stone: Vec<String>,
}

#[derive(Debug, Deserialize)]
struct DilutionBand {
    min_temp_f: f64,
    #[serde(flatten)]
    mix: Dilution,
}

/// Bands are ordered from hottest to coldest; below every band the cold mix
/// applies.
#[derive(Debug, Deserialize)]
struct DilutionTable {
    bands: Vec<DilutionBand>,
    cold: Dilution,
}

/// Registry of static guidance data.
#[derive(Debug, Deserialize)]
pub struct GuidanceRegistry {
    chemicals: ChemicalTable,
    treatments: Vec<String>,
    dilution: DilutionTable,
    property_types: Vec<PropertyType>,
    checklist: Vec<String>,
}

impl GuidanceRegistry {
    /// Returns the global guidance registry.
    ///
    /// The registry is initialized lazily on first access.
    #[must_use]
    pub fn global() -> &'static Self {
        REGISTRY.get_or_init(Self::load)
    }

    /// Loads guidance from the embedded JSON data.
    fn load() -> Self {
        serde_json::from_str(GUIDANCE_JSON).expect("Invalid guidance.json")
    }

    /// Returns the recommended chemicals for a surface material.
    #[must_use]
    pub fn chemicals(&self, material: SurfaceMaterial) -> &[String] {
        let table = &self.chemicals;
        match material {
            SurfaceMaterial::Vinyl => &table.vinyl,
            SurfaceMaterial::Brick => &table.brick,
            SurfaceMaterial::Concrete => &table.concrete,
            SurfaceMaterial::Wood => &table.wood,
            SurfaceMaterial::Stone => &table.stone,
        }
    }

    /// Returns the optional chemical treatments.
    #[must_use]
    pub fn treatments(&self) -> &[String] {
        &self.treatments
    }

    /// Returns the recommended dilution for a surface temperature in °F.
    #[must_use]
    pub fn dilution(&self, temp_f: f64) -> Dilution {
        self.dilution
            .bands
            .iter()
            .find(|band| temp_f >= band.min_temp_f)
            .map_or(self.dilution.cold, |band| band.mix)
    }

    /// Looks up a property type by ID or name (case-insensitive).
    #[must_use]
    pub fn property(&self, query: &str) -> Option<&PropertyType> {
        let query = query.trim();
        self.property_types
            .iter()
            .find(|p| p.id.eq_ignore_ascii_case(query) || p.name.eq_ignore_ascii_case(query))
    }

    /// Returns all property types in display order.
    pub fn properties(&self) -> impl Iterator<Item = &PropertyType> {
        self.property_types.iter()
    }

    /// Returns the on-site checklist items.
    #[must_use]
    pub fn checklist(&self) -> &[String] {
        &self.checklist
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_registry_loads() {
        let registry = GuidanceRegistry::global();
        assert_eq!(registry.properties().count(), 6);
        assert_eq!(registry.checklist().len(), 6);
        assert_eq!(registry.treatments().len(), 5);
    }

    #[test]
    fn test_chemicals_for_every_surface() {
        let registry = GuidanceRegistry::global();
        for material in SurfaceMaterial::all() {
            assert!(!registry.chemicals(*material).is_empty());
        }
        assert_eq!(
            registry.chemicals(SurfaceMaterial::Brick)[3],
            "NMD 80 (mortar/efflorescence)"
        );
    }

    #[test]
    fn test_dilution_bands() {
        let registry = GuidanceRegistry::global();
        let mix = |t: f64| {
            let d = registry.dilution(t);
            (d.water_pct, d.chemical_pct)
        };

        assert_eq!(mix(110.0), (75, 25));
        assert_eq!(mix(95.0), (75, 25));
        assert_eq!(mix(94.9), (50, 50));
        assert_eq!(mix(75.0), (50, 50));
        assert_eq!(mix(60.0), (25, 75));
        assert_eq!(mix(59.0), (15, 85));
        assert_eq!(mix(30.0), (15, 85));
    }

    #[test]
    fn test_dilution_display() {
        let dilution = GuidanceRegistry::global().dilution(80.0);
        assert_eq!(dilution.to_string(), "50% water / 50% chem");
    }

    #[test]
    fn test_property_lookup_case_insensitive() {
        let registry = GuidanceRegistry::global();
        let by_id = registry.property("hoa-community").unwrap();
        let by_name = registry.property("hoa community").unwrap();
        assert_eq!(by_id, by_name);
        assert_eq!(by_id.tone(), Tone::Success);
        assert!(registry.property("CASINO").is_some());
        assert!(registry.property("lighthouse").is_none());
    }

    #[test]
    fn test_property_tones() {
        let registry = GuidanceRegistry::global();
        let warnings: Vec<_> = registry
            .properties()
            .filter(|p| p.tone() == Tone::Warning)
            .map(PropertyType::name)
            .collect();
        assert_eq!(warnings, ["Casino", "Parking Garage"]);
    }
}
