//! Surface conditions that drive cleaning speed.

use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::ParseEnumError;

/// Exterior wall material.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum SurfaceMaterial {
    /// Vinyl siding.
    #[default]
    Vinyl,
    /// Brick.
    Brick,
    /// Poured or block concrete.
    Concrete,
    /// Wood siding.
    Wood,
    /// Natural or cultured stone.
    Stone,
}

impl SurfaceMaterial {
    /// Returns the material as a string identifier.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Vinyl => "vinyl",
            Self::Brick => "brick",
            Self::Concrete => "concrete",
            Self::Wood => "wood",
            Self::Stone => "stone",
        }
    }

    /// Returns the display label.
    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Vinyl => "Vinyl",
            Self::Brick => "Brick",
            Self::Concrete => "Concrete",
            Self::Wood => "Wood",
            Self::Stone => "Stone",
        }
    }

    /// Returns all materials.
    #[must_use]
    pub const fn all() -> &'static [Self] {
        &[
            Self::Vinyl,
            Self::Brick,
            Self::Concrete,
            Self::Wood,
            Self::Stone,
        ]
    }
}

impl std::fmt::Display for SurfaceMaterial {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for SurfaceMaterial {
    type Err = ParseEnumError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "vinyl" => Ok(Self::Vinyl),
            "brick" => Ok(Self::Brick),
            "concrete" => Ok(Self::Concrete),
            "wood" => Ok(Self::Wood),
            "stone" => Ok(Self::Stone),
            _ => Err(ParseEnumError::new(
                "surface material",
                s,
                "vinyl, brick, concrete, wood, stone",
            )),
        }
    }
}

/// Degree of soiling on the walls.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum BuildUp {
    /// Light dust and pollen.
    #[default]
    Light,
    /// Visible mildew or grime.
    Medium,
    /// Heavy organic growth or staining.
    Heavy,
}

impl BuildUp {
    /// Returns the build-up level as a string identifier.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Medium => "medium",
            Self::Heavy => "heavy",
        }
    }

    /// Returns the display label.
    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Light => "Light",
            Self::Medium => "Medium",
            Self::Heavy => "Heavy",
        }
    }

    /// Returns all build-up levels.
    #[must_use]
    pub const fn all() -> &'static [Self] {
        &[Self::Light, Self::Medium, Self::Heavy]
    }
}

impl std::fmt::Display for BuildUp {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for BuildUp {
    type Err = ParseEnumError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "light" | "low" => Ok(Self::Light),
            "medium" | "moderate" => Ok(Self::Medium),
            "heavy" | "high" => Ok(Self::Heavy),
            _ => Err(ParseEnumError::new("build-up level", s, "light, medium, heavy")),
        }
    }
}

/// Deck and patio decking material.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum DeckMaterial {
    /// Natural wood boards.
    #[default]
    Wood,
    /// Composite boards.
    Composite,
}

impl DeckMaterial {
    /// Returns the deck material as a string identifier.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Wood => "wood",
            Self::Composite => "composite",
        }
    }

    /// Returns the display label.
    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Wood => "Wood",
            Self::Composite => "Composite",
        }
    }

    /// Returns all deck materials.
    #[must_use]
    pub const fn all() -> &'static [Self] {
        &[Self::Wood, Self::Composite]
    }
}

impl std::fmt::Display for DeckMaterial {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for DeckMaterial {
    type Err = ParseEnumError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "wood" => Ok(Self::Wood),
            "composite" | "trex" => Ok(Self::Composite),
            _ => Err(ParseEnumError::new("deck material", s, "wood, composite")),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_surface_parse() {
        assert_eq!(
            "Brick".parse::<SurfaceMaterial>().unwrap(),
            SurfaceMaterial::Brick
        );
        assert_eq!(
            " stone ".parse::<SurfaceMaterial>().unwrap(),
            SurfaceMaterial::Stone
        );
        assert!("glass".parse::<SurfaceMaterial>().is_err());
    }

    #[test]
    fn test_build_up_aliases() {
        assert_eq!("moderate".parse::<BuildUp>().unwrap(), BuildUp::Medium);
        assert_eq!("HEAVY".parse::<BuildUp>().unwrap(), BuildUp::Heavy);
    }

    #[test]
    fn test_identifiers_round_trip() {
        for material in SurfaceMaterial::all() {
            assert_eq!(material.as_str().parse::<SurfaceMaterial>().unwrap(), *material);
        }
        for deck in DeckMaterial::all() {
            assert_eq!(deck.as_str().parse::<DeckMaterial>().unwrap(), *deck);
        }
    }

    #[test]
    fn test_defaults() {
        assert_eq!(SurfaceMaterial::default(), SurfaceMaterial::Vinyl);
        assert_eq!(BuildUp::default(), BuildUp::Light);
        assert_eq!(DeckMaterial::default(), DeckMaterial::Wood);
    }
}
