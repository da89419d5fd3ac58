//! Benchmark dataset endpoints.

use std::sync::Arc;

use axum::{
    Json,
    extract::{Path, Query, State},
};
use folio_bench::aggregate::{RegimeSummary, SummaryCards, mean_and_std, per_run_gain, win_tally};
use folio_bench::{CircuitFamily, Regime};

use crate::dto::{BenchmarksResponse, RecordResponse, WinRateQuery, WinRateResponse};
use crate::error::ApiError;
use crate::state::{AppState, DISPLAY_REGIME};

/// GET /api/benchmarks - Metadata, summary cards and per-regime summaries.
pub async fn overview(State(state): State<Arc<AppState>>) -> Json<BenchmarksResponse> {
    let threshold = state.config.win_threshold;
    let regimes = Regime::ALL
        .into_iter()
        .filter_map(|regime| {
            RegimeSummary::compute(regime, state.dataset.records(regime), threshold)
        })
        .collect();

    Json(BenchmarksResponse {
        metadata: state.dataset.metadata().clone(),
        collections: state.dataset.collection_names().map(str::to_string).collect(),
        display_regime: DISPLAY_REGIME,
        threshold,
        cards: SummaryCards::compute(state.display_records(), threshold),
        regimes,
    })
}

/// GET /api/benchmarks/{regime}/{circuit} - One record with per-run gains.
pub async fn get_record(
    State(state): State<Arc<AppState>>,
    Path((regime, circuit)): Path<(String, String)>,
) -> Result<Json<RecordResponse>, ApiError> {
    let regime: Regime = regime.parse()?;
    let record = state.dataset.select(regime, &circuit).ok_or_else(|| {
        ApiError::NotFound(format!("Circuit '{circuit}' not found in regime '{regime}'"))
    })?;

    let run_gains = per_run_gain(record);
    Ok(Json(RecordResponse {
        family: CircuitFamily::from_circuit_name(&record.circuit),
        run_gain_spread: mean_and_std(&run_gains),
        run_gains,
        record: record.clone(),
    }))
}

/// GET /api/benchmarks/win-rate - Win tally at a threshold.
pub async fn win_rate(
    State(state): State<Arc<AppState>>,
    Query(query): Query<WinRateQuery>,
) -> Result<Json<WinRateResponse>, ApiError> {
    let threshold = query.threshold.unwrap_or(state.config.win_threshold);
    if !threshold.is_finite() {
        return Err(ApiError::BadRequest(format!(
            "Threshold must be a finite number, got {threshold}"
        )));
    }

    let regime = query
        .regime
        .as_deref()
        .map(str::parse::<Regime>)
        .transpose()?;
    let tally = match regime {
        Some(regime) => win_tally(state.dataset.records(regime), threshold),
        None => win_tally(state.dataset.all_records(), threshold),
    };

    Ok(Json(WinRateResponse { regime, tally }))
}
