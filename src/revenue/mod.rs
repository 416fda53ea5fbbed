//! Revenue Module
//!
//! Revenue calculation for the dashboard: database-backed summation in
//! exact decimal arithmetic, plus the static tenant-aware fallback table
//! used when the pool is unavailable.

pub mod mock;
pub mod money;
mod source;

// Re-export public types
pub use mock::MockRevenueTable;
pub use money::{round_to_currency, sum_amounts};
pub use source::{select_source, MockRevenueSource, PgRevenueSource, RevenueSource, SourceKind};
