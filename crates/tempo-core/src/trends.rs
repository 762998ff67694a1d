//! Synthetic historical trend, 24-hour forecast and risk-map series.
//!
//! These series are independent of live telemetry and of the simulation's
//! own noise stream, but share its quality-labeling function.

use crate::models::{ForecastPoint, RiskMap, RiskZone, TrendPoint};
use crate::noise::NoiseSource;
use crate::quality::{round2, AirQualityLabel};
use chrono::{Duration, NaiveDate};

const TREND_DAYS: usize = 7;
const FORECAST_HOURS: u32 = 24;
const MIN_SERIES_VALUE: f64 = 5.0;

/// Seven daily points, ascending from six days ago through `today`.
pub fn historical_trend(lat: f64, today: NaiveDate, noise: &dyn NoiseSource) -> Vec<TrendPoint> {
    (0..TREND_DAYS)
        .map(|i| {
            let date = today - Duration::days((TREND_DAYS - i - 1) as i64);
            let base_no2 = 10.0 + lat.abs() * 0.3 + (i as f64 * 0.5).sin() * 8.0;
            TrendPoint {
                date: date.format("%Y-%m-%d").to_string(),
                no2: round2((base_no2 + noise.sample(0.0, 3.0)).max(MIN_SERIES_VALUE)),
                quality: AirQualityLabel::from_no2(base_no2),
            }
        })
        .collect()
}

/// Hourly points for the next 24 hours, wrapping through the day.
pub fn forecast(lat: f64, current_hour: u32, noise: &dyn NoiseSource) -> Vec<ForecastPoint> {
    (0..FORECAST_HOURS)
        .map(|offset| {
            let future_hour = (current_hour + offset) % 24;
            let traffic_peak = if (7..=9).contains(&future_hour) || (17..=19).contains(&future_hour)
            {
                2.0
            } else {
                1.0
            };
            let base_no2 = 8.0 + lat.abs() * 0.3 * traffic_peak;
            ForecastPoint {
                hour: future_hour,
                no2: round2((base_no2 + noise.sample(0.0, 2.0)).max(MIN_SERIES_VALUE)),
                quality: AirQualityLabel::from_no2(base_no2),
            }
        })
        .collect()
}

/// Static risk-map overlay centered on the request coordinate.
pub fn risk_map(lat: f64, lon: f64) -> RiskMap {
    RiskMap {
        center: [lat, lon],
        risk_zones: vec![RiskZone {
            coords: [lat + 0.01, lon + 0.01],
            risk: "high".to_string(),
            radius: 1000.0,
        }],
    }
}
