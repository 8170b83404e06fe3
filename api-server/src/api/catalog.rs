//! CatalogService: hero and item browsing endpoints
//!
//! Endpoints:
//! - POST /counterpick.CatalogService/ListHeroes
//! - POST /counterpick.CatalogService/GetHero
//! - POST /counterpick.CatalogService/ListItems
//! - POST /counterpick.CatalogService/GetItem
//! - POST /counterpick.CatalogService/MetaHeroes

use axum::{extract::State, routing::post, Json, Router};
use serde::{Deserialize, Serialize};
use tracing::debug;

use counterpick_core::catalog::{DerivedStats, Hero, HeroFilter, Item, ItemFilter};
use counterpick_core::constants::META_HERO_COUNT;
use counterpick_core::ingest::{meta_heroes, MetaHero};

use super::ApiState;

pub fn routes() -> Router<ApiState> {
    Router::new()
        .route("/counterpick.CatalogService/ListHeroes", post(list_heroes))
        .route("/counterpick.CatalogService/GetHero", post(get_hero))
        .route("/counterpick.CatalogService/ListItems", post(list_items))
        .route("/counterpick.CatalogService/GetItem", post(get_item))
        .route("/counterpick.CatalogService/MetaHeroes", post(get_meta_heroes))
}

// ============================================================================
// Request/Response Types
// ============================================================================

#[derive(Deserialize, Default)]
#[serde(default)]
pub struct ListHeroesRequest {
    #[serde(flatten)]
    pub filter: HeroFilter,
    /// Keys to leave out, e.g. heroes already on the draft board
    pub exclude: Vec<String>,
}

#[derive(Serialize)]
pub struct ListHeroesResponse {
    pub heroes: Vec<Hero>,
    pub roles: Vec<String>,
}

#[derive(Deserialize)]
pub struct KeyRequest {
    pub key: String,
}

#[derive(Serialize, Default)]
pub struct GetHeroResponse {
    pub success: bool,
    pub failure_reason: String,
    pub hero: Option<Hero>,
    pub derived: Option<DerivedStats>,
    pub strong_against: Vec<Hero>,
    pub weak_against: Vec<Hero>,
    pub counter_items: Vec<Item>,
}

#[derive(Serialize)]
pub struct ListItemsResponse {
    pub items: Vec<Item>,
}

#[derive(Serialize, Default)]
pub struct GetItemResponse {
    pub success: bool,
    pub failure_reason: String,
    pub item: Option<Item>,
    pub strong_against: Vec<Hero>,
}

#[derive(Deserialize, Default)]
#[serde(default)]
pub struct MetaHeroesRequest {
    pub count: Option<usize>,
}

#[derive(Serialize)]
pub struct MetaHeroesResponse {
    pub heroes: Vec<MetaHero>,
}

// ============================================================================
// Handlers
// ============================================================================

async fn list_heroes(
    State(state): State<ApiState>,
    Json(req): Json<ListHeroesRequest>,
) -> Json<ListHeroesResponse> {
    let heroes: Vec<Hero> = state
        .catalog
        .available_heroes(&req.filter, &req.exclude)
        .into_iter()
        .cloned()
        .collect();
    debug!(matched = heroes.len(), "ListHeroes");
    Json(ListHeroesResponse {
        heroes,
        roles: state.catalog.roles().into_iter().map(String::from).collect(),
    })
}

async fn get_hero(State(state): State<ApiState>, Json(req): Json<KeyRequest>) -> Json<GetHeroResponse> {
    let Some(profile) = state.catalog.hero_profile(&req.key) else {
        return Json(GetHeroResponse {
            failure_reason: format!("Hero '{}' not found", req.key),
            ..Default::default()
        });
    };

    Json(GetHeroResponse {
        success: true,
        failure_reason: String::new(),
        hero: Some(profile.hero.clone()),
        derived: Some(profile.derived),
        strong_against: profile.strong_against.into_iter().cloned().collect(),
        weak_against: profile.weak_against.into_iter().cloned().collect(),
        counter_items: profile.counter_items.into_iter().cloned().collect(),
    })
}

async fn list_items(
    State(state): State<ApiState>,
    Json(filter): Json<ItemFilter>,
) -> Json<ListItemsResponse> {
    let items = state.catalog.find_items(&filter).into_iter().cloned().collect();
    Json(ListItemsResponse { items })
}

async fn get_item(State(state): State<ApiState>, Json(req): Json<KeyRequest>) -> Json<GetItemResponse> {
    let Some(profile) = state.catalog.item_profile(&req.key) else {
        return Json(GetItemResponse {
            failure_reason: format!("Item '{}' not found", req.key),
            ..Default::default()
        });
    };

    Json(GetItemResponse {
        success: true,
        failure_reason: String::new(),
        item: Some(profile.item.clone()),
        strong_against: profile.strong_against.into_iter().cloned().collect(),
    })
}

async fn get_meta_heroes(
    State(state): State<ApiState>,
    Json(req): Json<MetaHeroesRequest>,
) -> Json<MetaHeroesResponse> {
    let count = req.count.unwrap_or(META_HERO_COUNT);
    Json(MetaHeroesResponse {
        heroes: meta_heroes(&state.catalog, count),
    })
}
