//! Liveness endpoint.

use std::sync::Arc;

use axum::{Json, extract::State};

use crate::dto::HealthResponse;
use crate::state::AppState;

/// GET /api/health - Liveness plus what the server has loaded.
pub async fn health(State(state): State<Arc<AppState>>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        records: state.dataset.all_records().count(),
        qubits: state.topology.num_qubits(),
    })
}
