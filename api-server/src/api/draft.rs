//! DraftService: team composition analysis
//!
//! Endpoints:
//! - POST /counterpick.DraftService/AnalyzeRoster
//! - POST /counterpick.DraftService/AnalyzeDraft
//!
//! Slots are positional: `null` marks an empty slot. Every listed key must
//! exist and may appear only once across the whole board.

use axum::{extract::State, routing::post, Json, Router};
use serde::{Deserialize, Serialize};
use tracing::debug;

use counterpick_core::catalog::{Catalog, HeroFilter};
use counterpick_core::composition::{DraftBoard, DraftError, RosterAnalysis, Side};
use counterpick_core::constants::ROSTER_SIZE;

use super::ApiState;

pub fn routes() -> Router<ApiState> {
    Router::new()
        .route("/counterpick.DraftService/AnalyzeRoster", post(analyze_roster))
        .route("/counterpick.DraftService/AnalyzeDraft", post(analyze_draft))
}

// ============================================================================
// Request/Response Types
// ============================================================================

#[derive(Deserialize)]
pub struct AnalyzeRosterRequest {
    pub slots: Vec<Option<String>>,
}

#[derive(Serialize, Default)]
pub struct AnalyzeRosterResponse {
    pub success: bool,
    pub failure_reason: String,
    /// `None` when every slot is empty
    pub analysis: Option<RosterAnalysis>,
}

#[derive(Deserialize, Default)]
#[serde(default)]
pub struct AnalyzeDraftRequest {
    pub radiant: Vec<Option<String>>,
    pub dire: Vec<Option<String>>,
}

#[derive(Serialize, Default)]
pub struct AnalyzeDraftResponse {
    pub success: bool,
    pub failure_reason: String,
    pub radiant: Option<RosterAnalysis>,
    pub dire: Option<RosterAnalysis>,
    /// Heroes still free to pick
    pub available: Vec<String>,
}

// ============================================================================
// Handlers
// ============================================================================

/// Fill one side of the board from positional slot keys
fn fill_side<'a>(
    board: &mut DraftBoard<'a>,
    catalog: &'a Catalog,
    side: Side,
    slots: &[Option<String>],
) -> Result<(), DraftError> {
    for (index, key) in slots.iter().enumerate() {
        match key {
            Some(key) => {
                board.place_key(catalog, side, index, key)?;
            }
            None if index >= ROSTER_SIZE => {
                return Err(DraftError::SlotOutOfRange(index));
            }
            None => {}
        }
    }
    Ok(())
}

async fn analyze_roster(
    State(state): State<ApiState>,
    Json(req): Json<AnalyzeRosterRequest>,
) -> Json<AnalyzeRosterResponse> {
    let mut board = DraftBoard::new();
    if let Err(e) = fill_side(&mut board, &state.catalog, Side::Radiant, &req.slots) {
        return Json(AnalyzeRosterResponse {
            failure_reason: e.to_string(),
            ..Default::default()
        });
    }

    let analysis = board.analyze().radiant;
    debug!(filled = analysis.as_ref().map_or(0, |a| a.filled), "AnalyzeRoster");
    Json(AnalyzeRosterResponse {
        success: true,
        failure_reason: String::new(),
        analysis,
    })
}

async fn analyze_draft(
    State(state): State<ApiState>,
    Json(req): Json<AnalyzeDraftRequest>,
) -> Json<AnalyzeDraftResponse> {
    let catalog: &Catalog = &state.catalog;
    let mut board = DraftBoard::new();
    let filled = fill_side(&mut board, catalog, Side::Radiant, &req.radiant)
        .and_then(|_| fill_side(&mut board, catalog, Side::Dire, &req.dire));
    if let Err(e) = filled {
        return Json(AnalyzeDraftResponse {
            failure_reason: e.to_string(),
            ..Default::default()
        });
    }

    let analysis = board.analyze();
    let available = catalog
        .available_heroes(&HeroFilter::default(), &board.picked_keys())
        .into_iter()
        .map(|h| h.key.clone())
        .collect();
    Json(AnalyzeDraftResponse {
        success: true,
        failure_reason: String::new(),
        radiant: analysis.radiant,
        dire: analysis.dire,
        available,
    })
}
