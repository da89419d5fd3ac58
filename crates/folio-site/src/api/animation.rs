//! Live error-accumulation animation endpoints.

use std::sync::Arc;

use axum::{
    Json,
    extract::{Path, State},
};
use tracing::debug;

use crate::dto::AnimationResponse;
use crate::state::AppState;

/// GET /api/animation - Current step of the server-side animation.
pub async fn current_step(State(state): State<Arc<AppState>>) -> Json<AnimationResponse> {
    let animation = *state.animation.lock().await;
    Json(AnimationResponse::from_state(&animation))
}

/// POST /api/animation/step/{step} - Jump to a step and pause.
pub async fn jump_to(
    State(state): State<Arc<AppState>>,
    Path(step): Path<usize>,
) -> Json<AnimationResponse> {
    let mut animation = state.animation.lock().await;
    animation.jump_to(step);
    debug!(requested = step, step = animation.step(), "animation jumped");
    Json(AnimationResponse::from_state(&animation))
}

/// POST /api/animation/toggle - Play/pause.
pub async fn toggle_playing(State(state): State<Arc<AppState>>) -> Json<AnimationResponse> {
    let mut animation = state.animation.lock().await;
    animation.toggle_playing();
    debug!(playing = animation.is_playing(), "animation toggled");
    Json(AnimationResponse::from_state(&animation))
}
