//! Server configuration from environment.

use std::env;

#[derive(Debug, Clone)]
pub struct Config {
    pub server_port: u16,
    pub openaq_url: String,
    pub open_meteo_url: String,
    /// Per-request timeout for both external providers, in seconds.
    pub provider_timeout_s: u64,
    /// Station search radius for the particulate lookup, in meters.
    pub station_radius_m: u32,
    pub cache_ttl_s: u64,
    pub cache_max_entries: usize,
    pub static_dir: String,
}

impl Config {
    pub fn from_env() -> Self {
        Self {
            server_port: env::var("TEMPO_PORT")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(8000),
            openaq_url: env::var("TEMPO_OPENAQ_URL")
                .unwrap_or_else(|_| "https://api.openaq.org/v2/latest".to_string()),
            open_meteo_url: env::var("TEMPO_OPEN_METEO_URL")
                .unwrap_or_else(|_| "https://api.open-meteo.com/v1/forecast".to_string()),
            provider_timeout_s: env::var("TEMPO_PROVIDER_TIMEOUT_S")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(10),
            station_radius_m: env::var("TEMPO_STATION_RADIUS_M")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(50_000),
            cache_ttl_s: env::var("TEMPO_CACHE_TTL_S")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(300),
            cache_max_entries: env::var("TEMPO_CACHE_MAX_ENTRIES")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(256),
            static_dir: env::var("TEMPO_STATIC_DIR").unwrap_or_else(|_| "static".to_string()),
        }
    }
}
