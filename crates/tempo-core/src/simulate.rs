//! Synthetic tropospheric NO2 concentration model.

use crate::geo;
use crate::noise::NoiseSource;
use std::f64::consts::PI;

const URBAN_FACTOR: f64 = 2.5;
const BASE_LEVEL: f64 = 8.0;
const LATITUDE_WEIGHT: f64 = 0.3;
const WIND_SUPPRESSION: f64 = 0.1;
const MIN_WIND_FACTOR: f64 = 0.3;
const NOISE_STD_DEV: f64 = 1.5;
const MIN_CONCENTRATION: f64 = 1.0;

/// Estimate the NO2 concentration at a coordinate.
///
/// Combines a latitude-dependent base level, urban amplification near the
/// major-city anchors, a diurnal traffic curve peaking mid-day, and wind
/// suppression floored at 0.3, plus one Gaussian noise draw. The result
/// never drops below 1.0.
pub fn simulate_no2(
    lat: f64,
    lon: f64,
    wind_speed: f64,
    hour_utc: u32,
    noise: &dyn NoiseSource,
) -> f64 {
    let urban_factor = if geo::is_major_city_anchor(lat, lon) {
        URBAN_FACTOR
    } else {
        1.0
    };
    let traffic_pattern = 1.0 + 0.5 * ((hour_utc as f64 - 8.0) * PI / 12.0).sin();
    let wind_factor = (1.0 - wind_speed * WIND_SUPPRESSION).max(MIN_WIND_FACTOR);
    let base_level = BASE_LEVEL + lat.abs() * LATITUDE_WEIGHT;

    let concentration = base_level * urban_factor * traffic_pattern * wind_factor;
    (concentration + noise.sample(0.0, NOISE_STD_DEV)).max(MIN_CONCENTRATION)
}
