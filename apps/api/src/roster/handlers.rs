//! Axum route handlers for the dashboard API.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::errors::AppError;
use crate::models::CandidateId;
use crate::roster::board::{CompareView, DashboardView, SelectionView};
use crate::roster::loader::spawn_reload;
use crate::roster::ranking::RankedEntry;
use crate::roster::tabs::{tab_views, Tab, TabView};
use crate::scoring::{build_heatmap, Heatmap};
use crate::state::AppState;

// ────────────────────────────────────────────────────────────────────────────
// Request / Response types
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
pub struct TabRequest {
    pub tab: Tab,
}

#[derive(Debug, Serialize)]
pub struct CandidateDetailResponse {
    #[serde(flatten)]
    pub entry: RankedEntry,
    /// Single-column heatmap of the candidate's own skills.
    pub skills: Heatmap,
}

// ────────────────────────────────────────────────────────────────────────────
// Handlers
// ────────────────────────────────────────────────────────────────────────────

/// GET /api/v1/dashboard
pub async fn handle_get_dashboard(State(state): State<AppState>) -> Json<DashboardView> {
    Json(state.board.read().await.view())
}

/// GET /api/v1/candidates
///
/// Ranked candidates, empty while loading or after a failed load.
pub async fn handle_list_candidates(State(state): State<AppState>) -> Json<Vec<RankedEntry>> {
    Json(state.board.read().await.ranked_entries())
}

/// GET /api/v1/candidates/:id
pub async fn handle_get_candidate(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<CandidateDetailResponse>, AppError> {
    let id = CandidateId::new(id);
    let board = state.board.read().await;

    let entry = board
        .ranked_entries()
        .into_iter()
        .find(|entry| entry.candidate.id() == &id)
        .ok_or_else(|| AppError::NotFound(format!("Candidate {id} not found")))?;
    let skills = build_heatmap(board.candidates(), std::slice::from_ref(&id));

    Ok(Json(CandidateDetailResponse { entry, skills }))
}

/// GET /api/v1/selection
pub async fn handle_get_selection(State(state): State<AppState>) -> Json<SelectionView> {
    Json(state.board.read().await.selection_view())
}

/// POST /api/v1/selection/:id/toggle
///
/// Adds the id if absent, removes it if present. Ids are not checked against
/// the roster.
pub async fn handle_toggle_selection(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Json<SelectionView> {
    let id = CandidateId::new(id);
    let mut board = state.board.write().await;
    let selected = board.toggle(&id);
    info!(
        "Candidate {id} {}",
        if selected { "selected" } else { "deselected" }
    );
    Json(board.selection_view())
}

/// GET /api/v1/compare
pub async fn handle_get_compare(State(state): State<AppState>) -> Json<CompareView> {
    Json(state.board.read().await.compare_view())
}

/// PUT /api/v1/tab
pub async fn handle_set_tab(
    State(state): State<AppState>,
    Json(req): Json<TabRequest>,
) -> Result<Json<Vec<TabView>>, AppError> {
    let mut board = state.board.write().await;
    if !board.set_tab(req.tab) {
        return Err(AppError::Validation(format!(
            "{} is not available",
            req.tab.label()
        )));
    }
    Ok(Json(tab_views(board.active_tab())))
}

/// POST /api/v1/reload
///
/// Drops the current candidates and selection and starts a fresh load.
/// Responds without waiting for the load; the returned board is whatever
/// state it is in by then, so it may already hold the new candidates.
pub async fn handle_reload(State(state): State<AppState>) -> (StatusCode, Json<DashboardView>) {
    spawn_reload(state.board.clone(), state.source.clone()).await;
    let view = state.board.read().await.view();
    (StatusCode::ACCEPTED, Json(view))
}
