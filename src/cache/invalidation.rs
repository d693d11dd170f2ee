//! Watermark-driven invalidation of every cache

use std::sync::Mutex;

use chrono::{DateTime, Utc};
use tracing::{debug, info};

use crate::cache::CacheTable;
use crate::error::RegistryError;
use crate::registry::client::RegistryClient;

/// Keeps caches coherent with the registry's data generation
///
/// Holds the last observed `cacheUpdatedAt` of the registry. Scheduling the
/// checks is up to the host.
pub struct InvalidationController {
    watermark: Mutex<DateTime<Utc>>,
}

impl InvalidationController {
    pub fn new() -> Self {
        Self {
            watermark: Mutex::new(DateTime::<Utc>::MIN_UTC),
        }
    }

    pub fn watermark(&self) -> Result<DateTime<Utc>, RegistryError> {
        self.watermark
            .lock()
            .map(|watermark| *watermark)
            .map_err(|_| RegistryError::LockPoisoned)
    }

    /// Clear every cache when forced or when the registry reports a new
    /// data generation
    ///
    /// Returns whether the caches were cleared. A failing status probe is
    /// returned as an error and leaves both caches and watermark untouched.
    pub fn check_and_clean(
        &self,
        client: &dyn RegistryClient,
        caches: &dyn CacheTable,
        force: bool,
    ) -> Result<bool, RegistryError> {
        // Held for the whole run so checks never interleave
        let mut watermark = self
            .watermark
            .lock()
            .map_err(|_| RegistryError::LockPoisoned)?;

        let remote = client.get_service_status()?.cache_updated_at;

        if force || *watermark != remote {
            info!(
                "Cleaning registry caches force={} {} != {}",
                force, *watermark, remote
            );
            caches.clear_all();
            *watermark = remote;
            Ok(true)
        } else {
            debug!(
                "Skip cleaning registry caches force={} watermark={} remote={}",
                force, *watermark, remote
            );
            Ok(false)
        }
    }
}

impl Default for InvalidationController {
    fn default() -> Self {
        Self::new()
    }
}
