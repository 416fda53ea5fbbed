//! Property-Based Tests for Cache Module
//!
//! Uses proptest to verify the tenant-isolation and bookkeeping
//! properties of the key format and the store.

use proptest::prelude::*;

use crate::cache::key::revenue_cache_key;
use crate::cache::CacheStore;

// == Test Configuration ==
const TEST_MAX_ENTRIES: usize = 100;
const TEST_TTL: u64 = 300;

// == Strategies ==
/// Generates tenant and property identifiers in the dashboard's id
/// alphabet.
fn id_strategy() -> impl Strategy<Value = String> {
    "[a-z0-9-]{1,32}".prop_map(|s| s)
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    // Any two distinct tenants sharing a property id receive distinct
    // cache keys.
    #[test]
    fn prop_keys_distinct_across_tenants(
        tenant_a in id_strategy(),
        tenant_b in id_strategy(),
        property in id_strategy(),
    ) {
        prop_assume!(tenant_a != tenant_b);

        let key_a = revenue_cache_key(&tenant_a, &property);
        let key_b = revenue_cache_key(&tenant_b, &property);

        prop_assert_ne!(key_a, key_b, "Tenants must never share a cache key");
    }

    // The key is the literal concatenation of prefix, tenant and
    // property.
    #[test]
    fn prop_key_format_literal(tenant in id_strategy(), property in id_strategy()) {
        let key = revenue_cache_key(&tenant, &property);
        let expected = format!("revenue:{}:{}", tenant, property);

        prop_assert_eq!(key, expected);
    }

    // Payloads stored under two tenants' keys for the same property
    // come back unmixed.
    #[test]
    fn prop_store_isolates_tenants(
        tenant_a in id_strategy(),
        tenant_b in id_strategy(),
        property in id_strategy(),
        payload_a in "[a-z0-9 ]{1,64}",
        payload_b in "[a-z0-9 ]{1,64}",
    ) {
        prop_assume!(tenant_a != tenant_b);

        let mut store = CacheStore::new(TEST_MAX_ENTRIES);
        store.insert(revenue_cache_key(&tenant_a, &property), payload_a.clone(), TEST_TTL).unwrap();
        store.insert(revenue_cache_key(&tenant_b, &property), payload_b.clone(), TEST_TTL).unwrap();

        prop_assert_eq!(store.lookup(&revenue_cache_key(&tenant_a, &property)), Some(payload_a));
        prop_assert_eq!(store.lookup(&revenue_cache_key(&tenant_b, &property)), Some(payload_b));
    }

    // Round-trip: any stored payload is returned unchanged before
    // expiration.
    #[test]
    fn prop_store_roundtrip(key in "[a-z0-9:_-]{1,64}", payload in "[a-zA-Z0-9 ]{1,256}") {
        let mut store = CacheStore::new(TEST_MAX_ENTRIES);

        store.insert(key.clone(), payload.clone(), TEST_TTL).unwrap();

        prop_assert_eq!(store.lookup(&key), Some(payload));
    }

    // Hit and miss counters track lookups exactly.
    #[test]
    fn prop_stats_track_lookups(
        keys in prop::collection::vec("[a-z0-9-]{1,16}", 1..30),
        stored in prop::collection::vec("[a-z0-9-]{1,16}", 1..30),
    ) {
        let mut store = CacheStore::new(TEST_MAX_ENTRIES);
        for key in &stored {
            let _ = store.insert(key.clone(), "payload".to_string(), TEST_TTL);
        }

        let mut expected_hits: u64 = 0;
        let mut expected_misses: u64 = 0;
        for key in &keys {
            match store.lookup(key) {
                Some(_) => expected_hits += 1,
                None => expected_misses += 1,
            }
        }

        let stats = store.stats();
        prop_assert_eq!(stats.hits, expected_hits, "Hits mismatch");
        prop_assert_eq!(stats.misses, expected_misses, "Misses mismatch");
        prop_assert_eq!(stats.total_entries, store.len(), "Total entries mismatch");
    }
}
