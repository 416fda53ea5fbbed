//! Cache Key Module
//!
//! Builds the composite cache key for revenue summaries. The key embeds
//! the tenant id so that two tenants sharing a property id can never
//! collide. The exact format is stable: operational tooling matches on
//! it.

/// Fixed prefix of every revenue cache key.
pub const KEY_PREFIX: &str = "revenue";

/// Builds the cache key for a (tenant, property) pair.
///
/// The format is exactly `revenue:{tenant_id}:{property_id}`.
pub fn revenue_cache_key(tenant_id: &str, property_id: &str) -> String {
    format!("{}:{}:{}", KEY_PREFIX, tenant_id, property_id)
}
