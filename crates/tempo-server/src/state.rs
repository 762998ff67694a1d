//! Shared application state.

use crate::cache::DashboardCache;
use crate::config::Config;
use crate::providers::ProviderGateway;
use std::sync::Arc;
use std::time::Duration;
use tempo_core::noise::{GaussianNoise, NoiseSource};

/// Everything a dashboard request needs, shared behind one `Arc`.
pub struct AppState {
    config: Config,
    cache: DashboardCache,
    providers: ProviderGateway,
    noise: Arc<dyn NoiseSource>,
}

impl AppState {
    pub fn new(config: Config) -> Self {
        Self::with_noise(config, Arc::new(GaussianNoise))
    }

    /// Build state with an explicit noise source, deterministic in tests.
    pub fn with_noise(config: Config, noise: Arc<dyn NoiseSource>) -> Self {
        let cache = DashboardCache::new(
            Duration::from_secs(config.cache_ttl_s),
            config.cache_max_entries,
        );
        let providers = ProviderGateway::new(&config);
        Self {
            config,
            cache,
            providers,
            noise,
        }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn cache(&self) -> &DashboardCache {
        &self.cache
    }

    pub fn providers(&self) -> &ProviderGateway {
        &self.providers
    }

    pub fn noise(&self) -> &dyn NoiseSource {
        self.noise.as_ref()
    }
}
