//! CounterService: counter recommendations for an enemy selection
//!
//! Endpoints:
//! - POST /counterpick.CounterService/ComputeCounters

use axum::{extract::State, routing::post, Json, Router};
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use counterpick_core::catalog::{Hero, Item};
use counterpick_core::counters::{CounterReport, CounterScorer, Selection};

use super::ApiState;

pub fn routes() -> Router<ApiState> {
    Router::new().route(
        "/counterpick.CounterService/ComputeCounters",
        post(compute_counters),
    )
}

// ============================================================================
// Request/Response Types
// ============================================================================

#[derive(Deserialize)]
pub struct ComputeCountersRequest {
    /// Enemy hero keys, at most five, no repeats
    pub selection: Vec<String>,
}

#[derive(Serialize)]
pub struct RecommendedHero {
    pub hero: Hero,
    pub score: u32,
    pub reasons: Vec<String>,
}

#[derive(Serialize)]
pub struct RecommendedItem {
    pub item: Item,
    pub score: u32,
    pub reasons: Vec<String>,
}

#[derive(Serialize)]
pub struct WeakAgainst {
    pub hero: Hero,
    pub score: u32,
}

#[derive(Serialize, Default)]
pub struct ComputeCountersResponse {
    pub success: bool,
    pub failure_reason: String,
    pub heroes: Vec<RecommendedHero>,
    pub items: Vec<RecommendedItem>,
    pub team_weaknesses: Vec<WeakAgainst>,
}

impl From<CounterReport<'_>> for ComputeCountersResponse {
    fn from(report: CounterReport<'_>) -> Self {
        Self {
            success: true,
            failure_reason: String::new(),
            heroes: report
                .heroes
                .into_iter()
                .map(|r| RecommendedHero {
                    hero: r.hero.clone(),
                    score: r.score,
                    reasons: r.reasons,
                })
                .collect(),
            items: report
                .items
                .into_iter()
                .map(|r| RecommendedItem {
                    item: r.item.clone(),
                    score: r.score,
                    reasons: r.reasons,
                })
                .collect(),
            team_weaknesses: report
                .team_weaknesses
                .into_iter()
                .map(|w| WeakAgainst {
                    hero: w.hero.clone(),
                    score: w.score,
                })
                .collect(),
        }
    }
}

// ============================================================================
// Handlers
// ============================================================================

async fn compute_counters(
    State(state): State<ApiState>,
    Json(req): Json<ComputeCountersRequest>,
) -> Json<ComputeCountersResponse> {
    let selection = match Selection::from_keys(&state.catalog, &req.selection) {
        Ok(selection) => selection,
        Err(e) => {
            warn!(error = %e, "ComputeCounters rejected selection");
            return Json(ComputeCountersResponse {
                failure_reason: e.to_string(),
                ..Default::default()
            });
        }
    };

    let scorer = CounterScorer::with_limits(&state.catalog, state.limits);
    let report = scorer.report(selection.heroes());
    debug!(
        picks = selection.len(),
        heroes = report.heroes.len(),
        items = report.items.len(),
        "ComputeCounters"
    );
    Json(report.into())
}
