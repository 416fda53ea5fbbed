//! Revenue Cache Layer
//!
//! Wraps the active revenue source with a TTL cache keyed by tenant and
//! property. A cache malfunction degrades to direct computation; the
//! layer never constructs a key that omits the tenant id.

use std::sync::Arc;

use tokio::sync::RwLock;
use tracing::{debug, warn};

use crate::cache::key::revenue_cache_key;
use crate::cache::CacheStore;
use crate::error::Result;
use crate::models::RevenueSummary;
use crate::revenue::RevenueSource;

// == Revenue Cache ==
/// TTL cache in front of the revenue source.
#[derive(Clone)]
pub struct RevenueCache {
    /// Thread-safe cache store, shared with the cleanup task
    store: Arc<RwLock<CacheStore>>,
    /// Active revenue source
    source: Arc<dyn RevenueSource>,
    /// TTL applied to every stored summary
    ttl_seconds: u64,
}

impl RevenueCache {
    // == Constructor ==
    /// Creates a cache layer over the given source.
    pub fn new(store: CacheStore, source: Arc<dyn RevenueSource>, ttl_seconds: u64) -> Self {
        Self {
            store: Arc::new(RwLock::new(store)),
            source,
            ttl_seconds,
        }
    }

    // == Store Handle ==
    /// Shared handle to the underlying store, used by the cleanup task
    /// and the stats endpoint.
    pub fn store_handle(&self) -> Arc<RwLock<CacheStore>> {
        self.store.clone()
    }

    // == Get Revenue Summary ==
    /// Returns the summary for a (property, tenant) pair, computing and
    /// caching it on a miss.
    ///
    /// A hit deserializes the cached payload and returns without
    /// invoking the source. A miss invokes the source once and performs
    /// exactly one store. If a cached payload cannot be decoded, or the
    /// store rejects the entry, the freshly computed summary is returned
    /// uncached.
    pub async fn get_revenue_summary(
        &self,
        property_id: &str,
        tenant_id: &str,
    ) -> Result<RevenueSummary> {
        let key = revenue_cache_key(tenant_id, property_id);

        // Write lock: lookups refresh the access order and stats
        let cached = {
            let mut store = self.store.write().await;
            store.lookup(&key)
        };

        if let Some(payload) = cached {
            match serde_json::from_str(&payload) {
                Ok(summary) => {
                    debug!("Cache hit for {}", key);
                    return Ok(summary);
                }
                Err(err) => {
                    warn!("Discarding undecodable cache entry {}: {}", key, err);
                }
            }
        }

        let summary = self.source.total_revenue(property_id, tenant_id).await?;

        match serde_json::to_string(&summary) {
            Ok(payload) => {
                let mut store = self.store.write().await;
                if let Err(err) = store.insert(key.clone(), payload, self.ttl_seconds) {
                    warn!("Skipping cache store for {}: {}", key, err);
                }
            }
            Err(err) => {
                warn!("Skipping cache store for {}: {}", key, err);
            }
        }

        Ok(summary)
    }
}
