//! Payload data models for the air-quality dashboard.

use crate::quality::{round1, AirQualityLabel};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Categorical geographic classification driving vulnerability rules.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AreaType {
    UrbanCenter,
    Industrial,
    Residential,
}

/// Population segment whose exposure risk is tracked and advised separately.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum VulnerableGroup {
    Children,
    Elderly,
    Asthmatics,
    Schools,
    Hospitals,
    OutdoorWorkers,
    LowIncome,
    ElderlyCommunities,
}

/// Ordered risk level: Bajo < Moderado < Alto < Muy Alto.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum RiskLevel {
    #[serde(rename = "Bajo")]
    Bajo,
    #[serde(rename = "Moderado")]
    Moderado,
    #[serde(rename = "Alto")]
    Alto,
    #[serde(rename = "Muy Alto")]
    MuyAlto,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ProtectionPriority {
    #[serde(rename = "Alta")]
    Alta,
    #[serde(rename = "Media")]
    Media,
}

/// One aggregated air-quality reading: synthetic NO2 plus the measured
/// particulate estimate when a nearby station reported one.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AirQualityReading {
    pub no2_tropospheric: f64,
    pub pm25: f64,
    pub quality_index: AirQualityLabel,
    pub aqi_value: u32,
    pub timestamp: DateTime<Utc>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum WeatherCondition {
    #[serde(rename = "Caluroso")]
    Caluroso,
    #[serde(rename = "Templado")]
    Templado,
    #[serde(rename = "Frío")]
    Frio,
}

impl WeatherCondition {
    pub fn from_temperature(temperature_c: f64) -> Self {
        if temperature_c > 30.0 {
            Self::Caluroso
        } else if temperature_c > 20.0 {
            Self::Templado
        } else {
            Self::Frio
        }
    }
}

/// Current weather at the requested coordinate. Fields a provider failed to
/// report fall back to defaults instead of surfacing as nulls.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WeatherSnapshot {
    pub temperature: f64,
    pub wind_speed: f64,
    pub humidity: f64,
    pub condition: WeatherCondition,
}

const DEFAULT_TEMPERATURE_C: f64 = 20.0;
const DEFAULT_WIND_SPEED: f64 = 5.0;
const DEFAULT_HUMIDITY_PCT: f64 = 60.0;

impl WeatherSnapshot {
    /// Assemble a snapshot from partial provider output.
    pub fn from_readings(
        temperature: Option<f64>,
        wind_speed: Option<f64>,
        humidity: Option<f64>,
    ) -> Self {
        let temperature = round1(temperature.unwrap_or(DEFAULT_TEMPERATURE_C));
        Self {
            temperature,
            wind_speed: round1(wind_speed.unwrap_or(DEFAULT_WIND_SPEED)),
            humidity: round1(humidity.unwrap_or(DEFAULT_HUMIDITY_PCT)),
            condition: WeatherCondition::from_temperature(temperature),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VulnerabilityAssessment {
    pub area_type: AreaType,
    pub vulnerable_groups: Vec<VulnerableGroup>,
    pub risk_level: RiskLevel,
    pub risk_factors: Vec<String>,
    pub protection_priority: ProtectionPriority,
}

/// Advisory text lists keyed by audience. Empty lists are valid output.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RecommendationSet {
    pub general: Vec<String>,
    pub for_schools: Vec<String>,
    pub for_elderly: Vec<String>,
    pub for_health_centers: Vec<String>,
    pub immediate_actions: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TrendPoint {
    pub date: String,
    pub no2: f64,
    pub quality: AirQualityLabel,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ForecastPoint {
    pub hour: u32,
    pub no2: f64,
    pub quality: AirQualityLabel,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RiskZone {
    pub coords: [f64; 2],
    pub risk: String,
    pub radius: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RiskMap {
    pub center: [f64; 2],
    pub risk_zones: Vec<RiskZone>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VisualizationData {
    pub historical_trend: Vec<TrendPoint>,
    pub forecast: Vec<ForecastPoint>,
    pub risk_map: RiskMap,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Metadata {
    pub data_source: String,
    pub location: String,
    pub last_updated: DateTime<Utc>,
    pub resolution: String,
}

/// The sole externally observable result; immutable once constructed.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DashboardPayload {
    pub air_quality: AirQualityReading,
    pub weather: WeatherSnapshot,
    pub vulnerability_analysis: VulnerabilityAssessment,
    pub recommendations: RecommendationSet,
    pub visualization_data: VisualizationData,
    pub metadata: Metadata,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn enums_serialize_to_wire_names() {
        assert_eq!(
            serde_json::to_value(AreaType::UrbanCenter).unwrap(),
            "urban_center"
        );
        assert_eq!(
            serde_json::to_value(VulnerableGroup::OutdoorWorkers).unwrap(),
            "outdoor_workers"
        );
        assert_eq!(serde_json::to_value(RiskLevel::MuyAlto).unwrap(), "Muy Alto");
        assert_eq!(
            serde_json::to_value(ProtectionPriority::Alta).unwrap(),
            "Alta"
        );
        assert_eq!(
            serde_json::to_value(WeatherCondition::Frio).unwrap(),
            "Frío"
        );
    }

    #[test]
    fn risk_levels_are_ordered() {
        assert!(RiskLevel::Bajo < RiskLevel::Moderado);
        assert!(RiskLevel::Moderado < RiskLevel::Alto);
        assert!(RiskLevel::Alto < RiskLevel::MuyAlto);
    }

    #[test]
    fn weather_snapshot_defaults_missing_fields() {
        let snapshot = WeatherSnapshot::from_readings(None, None, None);
        assert_eq!(snapshot.temperature, 20.0);
        assert_eq!(snapshot.wind_speed, 5.0);
        assert_eq!(snapshot.humidity, 60.0);
        assert_eq!(snapshot.condition, WeatherCondition::Frio);
    }

    #[test]
    fn weather_condition_tracks_temperature() {
        let hot = WeatherSnapshot::from_readings(Some(33.42), Some(2.0), Some(40.0));
        assert_eq!(hot.temperature, 33.4);
        assert_eq!(hot.condition, WeatherCondition::Caluroso);

        let mild = WeatherSnapshot::from_readings(Some(24.0), None, None);
        assert_eq!(mild.condition, WeatherCondition::Templado);

        let cold = WeatherSnapshot::from_readings(Some(12.0), None, None);
        assert_eq!(cold.condition, WeatherCondition::Frio);
    }
}
