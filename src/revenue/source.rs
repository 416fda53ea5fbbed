//! Revenue Source Module
//!
//! `RevenueSource` is the seam between the cache layer and the data
//! backing it: one implementation queries the reservations database,
//! the other serves the static fallback table. Selection happens once
//! at startup from the pool initialization outcome, so substituting a
//! source in tests is ordinary dependency injection.

use std::sync::Arc;

use async_trait::async_trait;
use rust_decimal::Decimal;
use tracing::warn;

use crate::db::{DatabasePool, PoolInit};
use crate::error::Result;
use crate::models::RevenueSummary;
use crate::revenue::mock::MockRevenueTable;
use crate::revenue::money::{round_to_currency, sum_amounts};

// == Revenue Source Trait ==
/// Computes the revenue summary for one (property, tenant) pair.
#[async_trait]
pub trait RevenueSource: Send + Sync {
    /// Sums reservation amounts scoped by exact match on both
    /// identifiers.
    async fn total_revenue(&self, property_id: &str, tenant_id: &str) -> Result<RevenueSummary>;
}

// == Database-Backed Source ==
/// Sums reservation rows from the database.
pub struct PgRevenueSource {
    db: DatabasePool,
}

impl PgRevenueSource {
    /// Creates a source over an established pool.
    pub fn new(db: DatabasePool) -> Self {
        Self { db }
    }
}

#[async_trait]
impl RevenueSource for PgRevenueSource {
    async fn total_revenue(&self, property_id: &str, tenant_id: &str) -> Result<RevenueSummary> {
        // Amounts come back as NUMERIC and are summed as exact decimals;
        // rounding to currency precision happens exactly once, after the
        // full sum.
        let amounts: Vec<Decimal> = sqlx::query_scalar(
            "SELECT amount FROM reservations WHERE property_id = $1 AND tenant_id = $2",
        )
        .bind(property_id)
        .bind(tenant_id)
        .fetch_all(self.db.pool())
        .await?;

        let count = amounts.len() as i64;
        let total = round_to_currency(sum_amounts(amounts));

        Ok(RevenueSummary::new(property_id, tenant_id, total, count))
    }
}

// == Fallback Source ==
/// Serves the static per-tenant fallback table.
pub struct MockRevenueSource {
    table: MockRevenueTable,
}

impl MockRevenueSource {
    /// Creates a source over the given table.
    pub fn new(table: MockRevenueTable) -> Self {
        Self { table }
    }

    /// Creates a source over the fixed fallback entries.
    pub fn with_fixtures() -> Self {
        Self::new(MockRevenueTable::with_fixtures())
    }
}

#[async_trait]
impl RevenueSource for MockRevenueSource {
    async fn total_revenue(&self, property_id: &str, tenant_id: &str) -> Result<RevenueSummary> {
        Ok(self.table.summary_for(property_id, tenant_id))
    }
}

// == Source Kind ==
/// Which backing source is active, surfaced in the stats endpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SourceKind {
    Database,
    Fallback,
}

impl SourceKind {
    /// Stable name used in API responses and logs.
    pub fn as_str(&self) -> &'static str {
        match self {
            SourceKind::Database => "database",
            SourceKind::Fallback => "fallback",
        }
    }
}

// == Source Selection ==
/// Selects the active revenue source from the pool initialization
/// outcome.
///
/// A ready pool yields the database-backed source; an unavailable pool
/// yields the static fallback table.
pub fn select_source(init: PoolInit) -> (Arc<dyn RevenueSource>, SourceKind) {
    match init {
        PoolInit::Ready(db) => (Arc::new(PgRevenueSource::new(db)), SourceKind::Database),
        PoolInit::Unavailable => {
            warn!("Reservations database unavailable, serving fallback revenue data");
            (
                Arc::new(MockRevenueSource::with_fixtures()),
                SourceKind::Fallback,
            )
        }
    }
}

// == Unit Tests ==
#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_mock_source_serves_table() {
        let source = MockRevenueSource::with_fixtures();

        let summary = source.total_revenue("prop-001", "tenant-a").await.unwrap();
        assert_eq!(summary.total, "2250.00");
        assert_eq!(summary.count, 4);
    }

    #[tokio::test]
    async fn test_mock_source_unknown_pair_is_zero() {
        let source = MockRevenueSource::with_fixtures();

        let summary = source
            .total_revenue("prop-404", "tenant-404")
            .await
            .unwrap();
        assert_eq!(summary.total, "0.00");
        assert_eq!(summary.count, 0);
    }

    #[tokio::test]
    async fn test_select_source_unavailable_pool_falls_back() {
        let (source, kind) = select_source(PoolInit::Unavailable);

        assert_eq!(kind, SourceKind::Fallback);
        let summary = source.total_revenue("prop-001", "tenant-a").await.unwrap();
        assert_eq!(summary.total, "2250.00");
    }

    #[test]
    fn test_source_kind_names() {
        assert_eq!(SourceKind::Database.as_str(), "database");
        assert_eq!(SourceKind::Fallback.as_str(), "fallback");
    }
}
