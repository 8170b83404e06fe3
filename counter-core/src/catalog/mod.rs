//! Hero & Item Catalog
//!
//! Immutable collections of heroes and items keyed by slug. Built once at
//! startup (see [`loader`]) and shared read-only afterwards, either by
//! reference or behind an `Arc`.
//!
//! - Slug `key` is the only identifier the scorer and analyzer use
//! - Numeric `id` is indexed for import-time lookups only
//! - Duplicate keys: the first record wins, later ones are dropped
//! - Dangling references resolve to nothing instead of failing

pub mod hero;
pub mod item;
pub mod loader;
pub mod query;

use serde::Serialize;
use std::collections::HashMap;
use tracing::{debug, warn};

pub use hero::{Ability, AttackType, BaseStats, CounterReason, DerivedStats, Hero, PrimaryAttr};
pub use item::{Item, ItemCategory};
pub use loader::{
    assemble, load_catalog, load_catalog_dir, load_counter_document, CatalogError, CounterDocument,
    CounterEntry, HeroDocument, ItemDocument,
};
pub use query::{HeroFilter, ItemFilter};

/// Read-only hero and item catalog
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    heroes: Vec<Hero>,
    items: Vec<Item>,
    hero_by_key: HashMap<String, usize>,
    hero_by_id: HashMap<u32, usize>,
    item_by_key: HashMap<String, usize>,
}

impl Catalog {
    /// Build the catalog, dropping any record whose key was already seen.
    pub fn new(heroes: Vec<Hero>, items: Vec<Item>) -> Self {
        let mut catalog = Catalog::default();

        for hero in heroes {
            if catalog.hero_by_key.contains_key(&hero.key) {
                warn!(key = %hero.key, "duplicate hero key, keeping first record");
                continue;
            }
            let idx = catalog.heroes.len();
            catalog.hero_by_key.insert(hero.key.clone(), idx);
            catalog.hero_by_id.entry(hero.id).or_insert(idx);
            catalog.heroes.push(hero);
        }

        for item in items {
            if catalog.item_by_key.contains_key(&item.key) {
                warn!(key = %item.key, "duplicate item key, keeping first record");
                continue;
            }
            let idx = catalog.items.len();
            catalog.item_by_key.insert(item.key.clone(), idx);
            catalog.items.push(item);
        }

        debug!(
            heroes = catalog.heroes.len(),
            items = catalog.items.len(),
            "catalog built"
        );
        catalog
    }

    pub fn heroes(&self) -> &[Hero] {
        &self.heroes
    }

    pub fn items(&self) -> &[Item] {
        &self.items
    }

    pub fn hero_count(&self) -> usize {
        self.heroes.len()
    }

    pub fn item_count(&self) -> usize {
        self.items.len()
    }

    pub fn hero(&self, key: &str) -> Option<&Hero> {
        self.hero_by_key.get(key).map(|&idx| &self.heroes[idx])
    }

    pub fn hero_by_id(&self, id: u32) -> Option<&Hero> {
        self.hero_by_id.get(&id).map(|&idx| &self.heroes[idx])
    }

    pub fn item(&self, key: &str) -> Option<&Item> {
        self.item_by_key.get(key).map(|&idx| &self.items[idx])
    }

    /// Resolve hero keys in order, skipping unknown ones
    pub fn resolve_heroes<'a, I, S>(&'a self, keys: I) -> Vec<&'a Hero>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        keys.into_iter()
            .filter_map(|k| self.hero(k.as_ref()))
            .collect()
    }

    /// Resolve item keys in order, skipping unknown ones
    pub fn resolve_items<'a, I, S>(&'a self, keys: I) -> Vec<&'a Item>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        keys.into_iter()
            .filter_map(|k| self.item(k.as_ref()))
            .collect()
    }

    /// Every distinct role tag, in first-seen order
    pub fn roles(&self) -> Vec<&str> {
        let mut roles: Vec<&str> = Vec::new();
        for role in self.heroes.iter().flat_map(|h| h.roles.iter()) {
            if !roles.contains(&role.as_str()) {
                roles.push(role);
            }
        }
        roles
    }

    /// Hero with its matchup lists resolved against this catalog
    pub fn hero_profile(&self, key: &str) -> Option<HeroProfile<'_>> {
        let hero = self.hero(key)?;
        Some(HeroProfile {
            hero,
            derived: hero.derived_stats(),
            strong_against: self.resolve_heroes(&hero.counters),
            weak_against: self.resolve_heroes(&hero.countered_by),
            counter_items: self.resolve_items(&hero.counter_items),
        })
    }

    /// Item with the heroes it counters resolved against this catalog
    pub fn item_profile(&self, key: &str) -> Option<ItemProfile<'_>> {
        let item = self.item(key)?;
        Some(ItemProfile {
            item,
            strong_against: self.resolve_heroes(&item.counters_heroes),
        })
    }
}

/// Detail view of a hero
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HeroProfile<'a> {
    pub hero: &'a Hero,
    pub derived: DerivedStats,
    pub strong_against: Vec<&'a Hero>,
    pub weak_against: Vec<&'a Hero>,
    pub counter_items: Vec<&'a Item>,
}

/// Detail view of an item
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ItemProfile<'a> {
    pub item: &'a Item,
    pub strong_against: Vec<&'a Hero>,
}
