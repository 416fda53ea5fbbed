//! Revenue Dashboard - multi-tenant property revenue backend
//!
//! Serves per-property revenue summaries with tenant-scoped TTL caching
//! and a static fallback when the reservations database is unavailable.

pub mod api;
pub mod cache;
pub mod config;
pub mod db;
pub mod error;
pub mod models;
pub mod revenue;
pub mod tasks;

pub use api::AppState;
pub use config::Settings;
pub use tasks::spawn_cleanup_task;
