pub mod geo;
pub mod models;
pub mod noise;
pub mod quality;
pub mod recommend;
pub mod simulate;
pub mod trends;
pub mod vulnerability;

pub use models::{
    AirQualityReading, AreaType, DashboardPayload, ForecastPoint, Metadata, ProtectionPriority,
    RecommendationSet, RiskLevel, RiskMap, RiskZone, TrendPoint, VisualizationData,
    VulnerabilityAssessment, VulnerableGroup, WeatherCondition, WeatherSnapshot,
};
pub use noise::{FixedNoise, GaussianNoise, NoiseSource};
pub use quality::AirQualityLabel;
