//! API Handlers
//!
//! HTTP request handlers for each dashboard endpoint.

use axum::{
    extract::{Path, State},
    Json,
};

use crate::cache::RevenueCache;
use crate::error::{DashboardError, Result};
use crate::models::{HealthResponse, RevenueSummary, StatsResponse};
use crate::revenue::SourceKind;

/// Maximum accepted length of tenant and property identifiers.
const MAX_ID_LENGTH: usize = 100;

/// Application state shared across all handlers.
#[derive(Clone)]
pub struct AppState {
    /// Cache layer over the active revenue source
    pub cache: RevenueCache,
    /// Which revenue source is active
    pub source_kind: SourceKind,
}

impl AppState {
    /// Creates a new AppState.
    pub fn new(cache: RevenueCache, source_kind: SourceKind) -> Self {
        Self { cache, source_kind }
    }
}

/// Handler for GET /revenue/:tenant_id/:property_id
///
/// Returns the revenue summary for the pair, served from cache when an
/// unexpired entry exists. An unknown pair yields the zero summary, not
/// an error.
pub async fn revenue_handler(
    State(state): State<AppState>,
    Path((tenant_id, property_id)): Path<(String, String)>,
) -> Result<Json<RevenueSummary>> {
    if tenant_id.len() > MAX_ID_LENGTH || property_id.len() > MAX_ID_LENGTH {
        return Err(DashboardError::InvalidRequest(format!(
            "Identifiers exceed maximum length of {} characters",
            MAX_ID_LENGTH
        )));
    }

    let summary = state
        .cache
        .get_revenue_summary(&property_id, &tenant_id)
        .await?;

    Ok(Json(summary))
}

/// Handler for GET /stats
///
/// Returns cache statistics and the active data source.
pub async fn stats_handler(State(state): State<AppState>) -> Json<StatsResponse> {
    let store = state.cache.store_handle();
    let stats = store.read().await.stats();

    Json(StatsResponse::new(
        stats.hits,
        stats.misses,
        stats.evictions,
        stats.total_entries,
        state.source_kind.as_str(),
    ))
}

/// Handler for GET /health
///
/// Returns health status of the server.
pub async fn health_handler() -> Json<HealthResponse> {
    Json(HealthResponse::healthy())
}
