//! Dashboard orchestration: cache lookup, provider fetches, simulation,
//! analysis, assembly and the fallback path.

use crate::cache::DashboardCache;
use crate::error::DashboardError;
use crate::providers::WeatherObservation;
use crate::state::AppState;
use chrono::{DateTime, Timelike, Utc};
use tempo_core::models::{
    AirQualityReading, AreaType, DashboardPayload, Metadata, ProtectionPriority,
    RecommendationSet, RiskLevel, VisualizationData, VulnerabilityAssessment, VulnerableGroup,
    WeatherCondition, WeatherSnapshot,
};
use tempo_core::quality::{round2, AirQualityLabel};
use tempo_core::{geo, recommend, simulate, trends, vulnerability};

const LIVE_DATA_SOURCE: &str = "NASA TEMPO Simulation + OpenAQ + Open-Meteo";
const FALLBACK_DATA_SOURCE: &str = "Fallback data";
const SPATIAL_RESOLUTION: &str = "2km x 5.5km";
const DEFAULT_PM25: f64 = 15.5;

/// Produce the aggregated dashboard payload for a coordinate.
///
/// Fresh cache hits return unchanged. On a miss the full pipeline runs and
/// the result is cached under the rounded coordinate. A computation
/// failure is recovered here with the static fallback payload, which is
/// never cached.
pub async fn build_dashboard(
    state: &AppState,
    lat: f64,
    lon: f64,
) -> Result<DashboardPayload, DashboardError> {
    let cache_key = DashboardCache::key_for(lat, lon);
    if let Some(cached) = state.cache().get(&cache_key) {
        tracing::debug!("cache hit for {}", cache_key);
        return Ok(cached);
    }

    let pm25 = state.providers().fetch_pm25(lat, lon).await;
    let observation = state.providers().fetch_weather(lat, lon).await;

    match assemble(state, lat, lon, pm25, observation) {
        Ok(payload) => {
            state.cache().insert(cache_key, payload.clone());
            Ok(payload)
        }
        Err(err) => {
            tracing::error!("dashboard pipeline failed for {}, {}: {}", lat, lon, err);
            Ok(fallback_dashboard(state, lat, lon))
        }
    }
}

fn assemble(
    state: &AppState,
    lat: f64,
    lon: f64,
    pm25: Option<f64>,
    observation: WeatherObservation,
) -> Result<DashboardPayload, DashboardError> {
    let now = Utc::now();
    let weather = WeatherSnapshot::from_readings(
        observation.temperature,
        observation.wind_speed,
        observation.humidity,
    );

    let no2 = simulate::simulate_no2(lat, lon, weather.wind_speed, now.hour(), state.noise());
    if !no2.is_finite() {
        return Err(DashboardError::Computation(format!(
            "non-finite NO2 estimate for {lat}, {lon}"
        )));
    }

    let area_type = geo::classify(lat, lon);
    let assessment = vulnerability::analyze(area_type, no2);
    let recommendations = recommend::recommend(no2, &assessment.vulnerable_groups);
    let quality = AirQualityLabel::from_no2(no2);

    Ok(DashboardPayload {
        air_quality: AirQualityReading {
            no2_tropospheric: round2(no2),
            pm25: pm25.unwrap_or(DEFAULT_PM25),
            quality_index: quality,
            aqi_value: quality.aqi_value(),
            timestamp: now,
        },
        weather,
        vulnerability_analysis: assessment,
        recommendations,
        visualization_data: visualization(state, lat, lon, now),
        metadata: metadata(LIVE_DATA_SOURCE, lat, lon, now),
    })
}

fn visualization(state: &AppState, lat: f64, lon: f64, now: DateTime<Utc>) -> VisualizationData {
    VisualizationData {
        historical_trend: trends::historical_trend(lat, now.date_naive(), state.noise()),
        forecast: trends::forecast(lat, now.hour(), state.noise()),
        risk_map: trends::risk_map(lat, lon),
    }
}

fn metadata(data_source: &str, lat: f64, lon: f64, now: DateTime<Utc>) -> Metadata {
    Metadata {
        data_source: data_source.to_string(),
        location: format!("{lat}, {lon}"),
        last_updated: now,
        resolution: SPATIAL_RESOLUTION.to_string(),
    }
}

/// Static plausible defaults used when the pipeline fails mid-flight. The
/// trend and forecast series are still computed fresh.
fn fallback_dashboard(state: &AppState, lat: f64, lon: f64) -> DashboardPayload {
    let now = Utc::now();
    DashboardPayload {
        air_quality: AirQualityReading {
            no2_tropospheric: 15.0,
            pm25: DEFAULT_PM25,
            quality_index: AirQualityLabel::Moderada,
            aqi_value: 50,
            timestamp: now,
        },
        weather: WeatherSnapshot {
            temperature: 22.0,
            wind_speed: 5.0,
            humidity: 60.0,
            condition: WeatherCondition::Templado,
        },
        vulnerability_analysis: VulnerabilityAssessment {
            area_type: AreaType::Residential,
            vulnerable_groups: vec![
                VulnerableGroup::Children,
                VulnerableGroup::Elderly,
                VulnerableGroup::Schools,
            ],
            risk_level: RiskLevel::Moderado,
            risk_factors: vec!["Datos limitados disponibles".to_string()],
            protection_priority: ProtectionPriority::Media,
        },
        recommendations: RecommendationSet {
            general: vec![
                "Monitorear calidad del aire".to_string(),
                "Evitar zonas de alto tráfico".to_string(),
            ],
            for_schools: vec!["Limitar recreo al aire libre si la calidad empeora".to_string()],
            for_elderly: vec!["Tomar precauciones normales".to_string()],
            for_health_centers: vec![
                "Estar preparado para consultas respiratorias".to_string()
            ],
            immediate_actions: Vec::new(),
        },
        visualization_data: visualization(state, lat, lon, now),
        metadata: metadata(FALLBACK_DATA_SOURCE, lat, lon, now),
    }
}
