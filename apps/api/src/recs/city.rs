//! Target-city constants. Wayfinder recommends in a single city; every
//! coordinate the generator returns is checked against this region.

use crate::models::location::Coordinates;

pub const CITY_NAME: &str = "Toronto";

/// Known-good downtown center, used whenever a candidate's coordinates are
/// missing or fall outside the plausible region.
pub const DEFAULT_CENTER: Coordinates = Coordinates {
    lat: 43.6532,
    lng: -79.3832,
};

// Plausible bounding region for the Greater Toronto Area.
const MIN_LAT: f64 = 43.40;
const MAX_LAT: f64 = 44.00;
const MIN_LNG: f64 = -79.80;
const MAX_LNG: f64 = -79.00;

pub fn in_city_bounds(coordinates: &Coordinates) -> bool {
    (MIN_LAT..=MAX_LAT).contains(&coordinates.lat)
        && (MIN_LNG..=MAX_LNG).contains(&coordinates.lng)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_downtown_is_in_bounds() {
        assert!(in_city_bounds(&DEFAULT_CENTER));
    }

    #[test]
    fn test_cn_tower_is_in_bounds() {
        assert!(in_city_bounds(&Coordinates { lat: 43.6426, lng: -79.3871 }));
    }

    #[test]
    fn test_vancouver_is_out_of_bounds() {
        assert!(!in_city_bounds(&Coordinates { lat: 49.2827, lng: -123.1207 }));
    }

    #[test]
    fn test_zero_island_is_out_of_bounds() {
        assert!(!in_city_bounds(&Coordinates { lat: 0.0, lng: 0.0 }));
    }
}
