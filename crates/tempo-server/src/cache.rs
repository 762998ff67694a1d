//! Time-boxed result cache shared across dashboard requests.

use dashmap::DashMap;
use std::time::{Duration, Instant};
use tempo_core::models::DashboardPayload;

struct CachedDashboard {
    payload: DashboardPayload,
    stored_at: Instant,
}

/// TTL cache keyed by rounded coordinate.
///
/// Entries are replaced atomically per key, so readers never observe a
/// torn (payload, timestamp) pair. A hit older than the TTL is treated as
/// a miss; inserts prune expired entries and evict oldest-first above
/// `max_entries` so the map stays bounded.
pub struct DashboardCache {
    entries: DashMap<String, CachedDashboard>,
    ttl: Duration,
    max_entries: usize,
}

impl DashboardCache {
    pub fn new(ttl: Duration, max_entries: usize) -> Self {
        Self {
            entries: DashMap::new(),
            ttl,
            max_entries,
        }
    }

    /// Cache key for a coordinate, rounded to 2 decimal digits so
    /// near-identical requests within the TTL window deduplicate.
    pub fn key_for(lat: f64, lon: f64) -> String {
        format!("{lat:.2}_{lon:.2}")
    }

    pub fn get(&self, key: &str) -> Option<DashboardPayload> {
        let entry = self.entries.get(key)?;
        if entry.stored_at.elapsed() <= self.ttl {
            Some(entry.payload.clone())
        } else {
            None
        }
    }

    pub fn insert(&self, key: String, payload: DashboardPayload) {
        self.entries.insert(
            key,
            CachedDashboard {
                payload,
                stored_at: Instant::now(),
            },
        );
        self.prune();
    }

    fn prune(&self) {
        let now = Instant::now();
        let mut stamps: Vec<(String, Instant)> = self
            .entries
            .iter()
            .map(|entry| (entry.key().clone(), entry.value().stored_at))
            .collect();

        for (key, stored_at) in &stamps {
            if now.duration_since(*stored_at) > self.ttl {
                self.entries.remove(key);
            }
        }

        if self.entries.len() <= self.max_entries {
            return;
        }

        stamps.sort_by_key(|(_, stored_at)| *stored_at);
        for (key, _) in stamps {
            if self.entries.len() <= self.max_entries {
                break;
            }
            self.entries.remove(&key);
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
