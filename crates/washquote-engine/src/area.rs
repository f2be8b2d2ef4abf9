//! Surface area calculation.

use washquote_types::{AddOns, AreaBreakdown, Geometry};

/// Computes wall and total square footage.
///
/// Wall area is perimeter x stories x story height x buildings, so it scales
/// linearly with each of them.
#[must_use]
pub fn calculate_areas(geometry: &Geometry, add_ons: &AddOns) -> AreaBreakdown {
    let wall_sqft = geometry.perimeter_ft()
        * f64::from(geometry.stories)
        * geometry.height_per_story_ft
        * f64::from(geometry.buildings);
    let total_sqft = wall_sqft + add_ons.breezeway_sqft + add_ons.flatwork_sqft + add_ons.deck_sqft;

    AreaBreakdown {
        wall_sqft,
        breezeway_sqft: add_ons.breezeway_sqft,
        flatwork_sqft: add_ons.flatwork_sqft,
        deck_sqft: add_ons.deck_sqft,
        total_sqft,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn single_story() -> Geometry {
        Geometry {
            stories: 1,
            height_per_story_ft: 10.0,
            front_ft: 100.0,
            back_ft: 100.0,
            left_ft: 50.0,
            right_ft: 50.0,
            buildings: 1,
        }
    }

    #[test]
    fn test_wall_area() {
        let areas = calculate_areas(&single_story(), &AddOns::default());
        assert!((areas.wall_sqft - 3000.0).abs() < 1e-10);
        assert!((areas.total_sqft - 3000.0).abs() < 1e-10);
    }

    #[test]
    fn test_total_includes_add_ons() {
        let add_ons = AddOns {
            breezeway_sqft: 200.0,
            flatwork_sqft: 500.0,
            deck_sqft: 300.0,
            patio_count: 4,
        };
        let areas = calculate_areas(&single_story(), &add_ons);
        assert!((areas.total_sqft - 4000.0).abs() < 1e-10);
        assert!((areas.deck_sqft - 300.0).abs() < 1e-10);
    }

    #[test]
    fn test_scales_with_buildings_and_stories() {
        let base = calculate_areas(&single_story(), &AddOns::default()).wall_sqft;

        let two_buildings = Geometry {
            buildings: 2,
            ..single_story()
        };
        let two_stories = Geometry {
            stories: 2,
            ..single_story()
        };

        let add_ons = AddOns::default();
        assert!((calculate_areas(&two_buildings, &add_ons).wall_sqft - 2.0 * base).abs() < 1e-9);
        assert!((calculate_areas(&two_stories, &add_ons).wall_sqft - 2.0 * base).abs() < 1e-9);
    }

    #[test]
    fn test_zero_buildings_has_no_wall_area() {
        let geometry = Geometry {
            buildings: 0,
            ..single_story()
        };
        let areas = calculate_areas(&geometry, &AddOns::default());
        assert!(areas.wall_sqft.abs() < 1e-10);
    }
}
