//! Catalog Loader
//!
//! Materializes a [`Catalog`] from the JSON data files produced by the
//! offline data pipeline:
//! - `heroes.json`  : `{ "heroes": [Hero…] }` (stats, roles, abilities)
//! - `counters.json`: `{ "heroCounters": { key: CounterEntry } }`
//! - `items.json`   : `{ "items": [Item…] }`
//!
//! The counter overlay is merged into each hero at load time. A list present
//! in the overlay replaces the hero's own list; a missing one falls back to
//! whatever the hero record already carried.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fs;
use std::path::Path;
use tracing::{debug, info};

use super::{Catalog, CounterReason, Hero, Item};

/// Error type for catalog loading
#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    #[error("IO error reading {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("JSON error in {path}: {source}")]
    Json {
        path: String,
        #[source]
        source: serde_json::Error,
    },
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct HeroDocument {
    #[serde(default)]
    pub heroes: Vec<Hero>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ItemDocument {
    #[serde(default)]
    pub items: Vec<Item>,
}

/// Matchup data for one hero as stored in the counter overlay
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CounterEntry {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub strong_against: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub weak_against: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub counter_items: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reason: Option<CounterReason>,
}

/// Counter overlay file. Keys are ordered so regenerated files diff cleanly.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CounterDocument {
    #[serde(default)]
    pub hero_counters: BTreeMap<String, CounterEntry>,
}

/// Apply the overlay to a hero in place
pub fn merge_counters(hero: &mut Hero, entry: &CounterEntry) {
    if let Some(strong) = &entry.strong_against {
        hero.counters = strong.clone();
    }
    if let Some(weak) = &entry.weak_against {
        hero.countered_by = weak.clone();
    }
    if let Some(items) = &entry.counter_items {
        hero.counter_items = items.clone();
    }
    if let Some(reason) = &entry.reason {
        hero.counter_reason = Some(reason.clone());
    }
}

/// Build a catalog from already-parsed documents
pub fn assemble(heroes: HeroDocument, counters: &CounterDocument, items: ItemDocument) -> Catalog {
    let mut merged = 0usize;
    let heroes: Vec<Hero> = heroes
        .heroes
        .into_iter()
        .map(|mut hero| {
            if let Some(entry) = counters.hero_counters.get(&hero.key) {
                merge_counters(&mut hero, entry);
                merged += 1;
            }
            hero
        })
        .collect();
    debug!(merged, total = heroes.len(), "counter overlay merged");
    Catalog::new(heroes, items.items)
}

fn read_json<T: for<'de> Deserialize<'de>>(path: &Path) -> Result<T, CatalogError> {
    let display = path.display().to_string();
    let content = fs::read_to_string(path).map_err(|source| CatalogError::Io {
        path: display.clone(),
        source,
    })?;
    serde_json::from_str(&content).map_err(|source| CatalogError::Json {
        path: display,
        source,
    })
}

/// Load the three data files. A missing counter overlay is allowed and
/// treated as empty; missing hero or item files are errors.
pub fn load_catalog(
    heroes_path: &Path,
    counters_path: &Path,
    items_path: &Path,
) -> Result<Catalog, CatalogError> {
    let heroes: HeroDocument = read_json(heroes_path)?;
    let items: ItemDocument = read_json(items_path)?;
    let counters: CounterDocument = if counters_path.exists() {
        read_json(counters_path)?
    } else {
        debug!(path = %counters_path.display(), "no counter overlay, using hero records only");
        CounterDocument::default()
    };

    let catalog = assemble(heroes, &counters, items);
    info!(
        heroes = catalog.hero_count(),
        items = catalog.item_count(),
        "catalog loaded"
    );
    Ok(catalog)
}

/// Load `heroes.json`, `counters.json` and `items.json` from one directory
pub fn load_catalog_dir(dir: &Path) -> Result<Catalog, CatalogError> {
    load_catalog(
        &dir.join("heroes.json"),
        &dir.join("counters.json"),
        &dir.join("items.json"),
    )
}

/// Parse a counter overlay file
pub fn load_counter_document(path: &Path) -> Result<CounterDocument, CatalogError> {
    read_json(path)
}
