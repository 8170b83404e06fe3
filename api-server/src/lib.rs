//! Counterpick Server Library
//!
//! JSON-over-HTTP front end for the counterpick core:
//! - Catalog browsing (heroes, items, meta picks)
//! - Counter recommendations for an enemy selection
//! - Roster and two-sided draft analysis

pub mod api;

use counterpick_core::catalog::{load_catalog, CatalogError};
use counterpick_core::config::{AppConfig, ConfigError};

/// Startup and serving failures
#[derive(Debug, thiserror::Error)]
pub enum ServerError {
    #[error("config: {0}")]
    Config(#[from] ConfigError),
    #[error("catalog: {0}")]
    Catalog(#[from] CatalogError),
    #[error("failed to bind {addr}: {source}")]
    Bind {
        addr: String,
        #[source]
        source: std::io::Error,
    },
    #[error("server error: {0}")]
    Serve(#[source] std::io::Error),
}

/// Load the catalog named by `config` and wrap it in handler state
pub fn load_state(config: &AppConfig) -> Result<api::ApiState, ServerError> {
    let data = &config.data;
    let catalog = load_catalog(&data.heroes_path(), &data.counters_path(), &data.items_path())?;
    Ok(api::ApiState::new(catalog).with_limits(config.scoring))
}
