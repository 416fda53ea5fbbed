//! Mock Revenue Table Module
//!
//! Static fallback revenue data, used only when the reservations
//! database is unavailable. Entries are keyed by the full
//! (tenant, property) pair so that two tenants sharing a property id
//! never see each other's figures.

use std::collections::HashMap;

use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use crate::models::RevenueSummary;
use crate::revenue::money::round_to_currency;

// == Mock Revenue ==
/// One fallback figure: exact total plus reservation count.
#[derive(Debug, Clone, Copy)]
struct MockRevenue {
    total: Decimal,
    count: i64,
}

// == Mock Revenue Table ==
/// Static mapping from (tenant_id, property_id) to fallback revenue.
///
/// Built once at startup and read-only afterwards. Absent pairs resolve
/// to the zero summary: unavailability and "no data for this tenant"
/// are both valid zero results, never errors.
#[derive(Debug, Clone)]
pub struct MockRevenueTable {
    entries: HashMap<(String, String), MockRevenue>,
}

impl MockRevenueTable {
    // == Constructor ==
    /// Builds the table with the fixed fallback entries.
    ///
    /// prop-002 appears under both tenants with different figures; the
    /// lookup must keep them apart.
    pub fn with_fixtures() -> Self {
        let mut entries = HashMap::new();

        let mut insert = |tenant: &str, property: &str, total: Decimal, count: i64| {
            entries.insert(
                (tenant.to_string(), property.to_string()),
                MockRevenue { total, count },
            );
        };

        insert("tenant-a", "prop-001", dec!(2250.00), 4);
        insert("tenant-a", "prop-002", dec!(1480.50), 3);
        insert("tenant-b", "prop-002", dec!(910.00), 2);
        insert("tenant-b", "prop-003", dec!(3075.25), 5);

        Self { entries }
    }

    // == Lookup ==
    /// Returns the fallback summary for a (tenant, property) pair.
    ///
    /// Unknown pairs resolve to the zero summary.
    pub fn summary_for(&self, property_id: &str, tenant_id: &str) -> RevenueSummary {
        match self
            .entries
            .get(&(tenant_id.to_string(), property_id.to_string()))
        {
            Some(revenue) => RevenueSummary::new(
                property_id,
                tenant_id,
                round_to_currency(revenue.total),
                revenue.count,
            ),
            None => RevenueSummary::zero(property_id, tenant_id),
        }
    }

    // == Length ==
    /// Returns the number of fixture entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if the table has no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
