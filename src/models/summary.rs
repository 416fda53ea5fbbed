//! Revenue Summary Model
//!
//! The consumer-facing shape of a per-property revenue figure.

use serde::{Deserialize, Serialize};

/// ISO 4217 code for all dashboard amounts.
pub const CURRENCY_CODE: &str = "USD";

/// Aggregated reservation revenue for one property under one tenant.
///
/// `total` always carries exactly two fractional digits, produced by
/// rounding an exact decimal sum. Summaries are immutable once produced
/// and live only as long as their cache entry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RevenueSummary {
    /// Property the reservations belong to
    pub property_id: String,
    /// Tenant that owns the property
    pub tenant_id: String,
    /// Rounded total with two fractional digits
    pub total: String,
    /// Currency code of the total
    pub currency: String,
    /// Number of reservations summed
    pub count: i64,
}

impl RevenueSummary {
    /// Creates a summary with an already-rounded total.
    pub fn new(
        property_id: impl Into<String>,
        tenant_id: impl Into<String>,
        total: String,
        count: i64,
    ) -> Self {
        Self {
            property_id: property_id.into(),
            tenant_id: tenant_id.into(),
            total,
            currency: CURRENCY_CODE.to_string(),
            count,
        }
    }

    /// Creates the zero-value summary.
    ///
    /// Used for unknown (tenant, property) pairs: "no data for this
    /// tenant" is a valid zero result, not an error.
    pub fn zero(property_id: impl Into<String>, tenant_id: impl Into<String>) -> Self {
        Self::new(property_id, tenant_id, "0.00".to_string(), 0)
    }
}
