//! Fixed reference-point geographic classification.

use crate::models::AreaType;

/// Metropolitan reference points checked first (0.5 deg tolerance).
const URBAN_CENTERS: [(f64, f64); 3] = [
    (19.43, -99.13),  // Mexico City
    (40.7, -74.0),    // New York
    (34.0, -118.2),   // Los Angeles
];

/// Industrial-corridor reference points (1.0 deg tolerance).
const INDUSTRIAL_CORRIDORS: [(f64, f64); 2] = [
    (25.7, -100.3),  // Monterrey
    (32.5, -117.0),  // Tijuana
];

/// Anchors for the simulation's urban factor (2.0 deg tolerance).
const MAJOR_CITY_ANCHORS: [(f64, f64); 5] = [
    (19.43, -99.13),
    (40.7, -74.0),
    (34.0, -118.2),
    (25.7, -100.3),
    (32.5, -117.0),
];

const URBAN_TOLERANCE_DEG: f64 = 0.5;
const INDUSTRIAL_TOLERANCE_DEG: f64 = 1.0;
const ANCHOR_TOLERANCE_DEG: f64 = 2.0;

fn near(lat: f64, lon: f64, reference: (f64, f64), tolerance_deg: f64) -> bool {
    (lat - reference.0).abs() < tolerance_deg && (lon - reference.1).abs() < tolerance_deg
}

/// Classify a coordinate into an area type.
///
/// Rules are evaluated in order and the first match wins; the ordering
/// matters because wider tolerances could claim points that belong to an
/// earlier rule. Total: every coordinate maps to exactly one area type.
pub fn classify(lat: f64, lon: f64) -> AreaType {
    if URBAN_CENTERS
        .iter()
        .any(|reference| near(lat, lon, *reference, URBAN_TOLERANCE_DEG))
    {
        AreaType::UrbanCenter
    } else if INDUSTRIAL_CORRIDORS
        .iter()
        .any(|reference| near(lat, lon, *reference, INDUSTRIAL_TOLERANCE_DEG))
    {
        AreaType::Industrial
    } else {
        AreaType::Residential
    }
}

/// Whether a coordinate lies within the wide band around a major city,
/// used by the simulation's urban amplification factor.
pub fn is_major_city_anchor(lat: f64, lon: f64) -> bool {
    MAJOR_CITY_ANCHORS
        .iter()
        .any(|anchor| near(lat, lon, *anchor, ANCHOR_TOLERANCE_DEG))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn metropolitan_points_classify_as_urban_center() {
        assert_eq!(classify(19.43, -99.13), AreaType::UrbanCenter);
        assert_eq!(classify(40.9, -74.3), AreaType::UrbanCenter);
        assert_eq!(classify(34.0, -118.2), AreaType::UrbanCenter);
    }

    #[test]
    fn industrial_corridors_classify_as_industrial() {
        assert_eq!(classify(25.7, -100.3), AreaType::Industrial);
        assert_eq!(classify(32.0, -117.5), AreaType::Industrial);
    }

    #[test]
    fn everything_else_is_residential() {
        assert_eq!(classify(0.0, 0.0), AreaType::Residential);
        assert_eq!(classify(-33.45, -70.66), AreaType::Residential);
        assert_eq!(classify(48.85, 2.35), AreaType::Residential);
    }

    #[test]
    fn tolerance_edges_are_exclusive() {
        assert_eq!(classify(19.43 + 0.49, -99.13), AreaType::UrbanCenter);
        assert_eq!(classify(19.43 + 0.51, -99.13), AreaType::Residential);
    }

    #[test]
    fn classification_is_deterministic() {
        for _ in 0..3 {
            assert_eq!(classify(25.7, -100.3), AreaType::Industrial);
        }
    }

    #[test]
    fn anchors_use_the_wide_band() {
        // Outside the 0.5 deg urban rectangle but inside the 2 deg anchor band.
        assert!(is_major_city_anchor(20.9, -100.0));
        assert!(!is_major_city_anchor(0.0, 0.0));
    }
}
