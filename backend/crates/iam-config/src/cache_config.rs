use crate::{ConfigError, ConfigErrorResult};

use std::time::Duration;

use serde::Deserialize;

// Cache constraints
pub const MIN_CAPACITY: usize = 1;
pub const MAX_CAPACITY: usize = 10000;
pub const DEFAULT_CAPACITY: usize = 100;

pub const MIN_TTL_SECS: u64 = 1;
pub const MAX_TTL_SECS: u64 = 3600;
pub const DEFAULT_TTL_SECS: u64 = 60;

/// Sizing for the by-id user and role caches. Both caches share it.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct CacheConfig {
    /// Maximum entries per cache before least recently used ones are evicted
    pub capacity: usize,
    /// Seconds an entry stays valid after insertion
    pub ttl_secs: u64,
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            capacity: DEFAULT_CAPACITY,
            ttl_secs: DEFAULT_TTL_SECS,
        }
    }
}

impl CacheConfig {
    pub fn ttl(&self) -> Duration {
        Duration::from_secs(self.ttl_secs)
    }

    pub fn validate(&self) -> ConfigErrorResult<()> {
        if self.capacity < MIN_CAPACITY || self.capacity > MAX_CAPACITY {
            return Err(ConfigError::cache(format!(
                "cache.capacity must be {}-{}, got {}",
                MIN_CAPACITY, MAX_CAPACITY, self.capacity
            )));
        }

        if self.ttl_secs < MIN_TTL_SECS || self.ttl_secs > MAX_TTL_SECS {
            return Err(ConfigError::cache(format!(
                "cache.ttl_secs must be {}-{}, got {}",
                MIN_TTL_SECS, MAX_TTL_SECS, self.ttl_secs
            )));
        }

        Ok(())
    }
}
