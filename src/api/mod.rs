//! API Module
//!
//! HTTP handlers and routing for the dashboard REST API.
//!
//! # Endpoints
//! - `GET /revenue/:tenant_id/:property_id` - Revenue summary for one pair
//! - `GET /stats` - Cache statistics and active data source
//! - `GET /health` - Health check endpoint

pub mod handlers;
pub mod routes;

pub use handlers::*;
pub use routes::create_router;
