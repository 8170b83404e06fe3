//! Counter Recommendation Scoring
//!
//! Turns a selection of opposing heroes into:
//! - ranked counter heroes (from each pick's `countered_by` list)
//! - ranked counter items (from each pick's `counter_items` list)
//! - ranked heroes the selection itself is weak against (from `counters`)
//!
//! Every list upstream is sorted strongest first, so a candidate's
//! contribution decays linearly with its rank. A hero that shows up in
//! several picks' lists accumulates the contributions.
//!
//! Ranking: score descending, ties in first-contribution order. Candidates
//! are resolved against the catalog before the top-N cut so dangling keys
//! never under-fill the result.

pub mod score;
pub mod selection;

use serde::Serialize;
use tracing::debug;

use crate::catalog::{Catalog, Hero, Item};
use crate::constants::{
    RECOMMENDATION_WEIGHT_MULT, TOP_COUNTER_HEROES, TOP_COUNTER_ITEMS, TOP_TEAM_WEAKNESSES,
    WEAKNESS_WEIGHT_MULT,
};
use crate::logging::TimingSpan;

pub use score::{rank_weight, CounterScore, ScoreBoard};
pub use selection::{Selection, SelectionError};

/// Result sizes for one scoring run
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, serde::Deserialize)]
#[serde(default)]
pub struct ScoringLimits {
    pub heroes: usize,
    pub items: usize,
    pub weaknesses: usize,
}

impl ScoringLimits {
    /// Each size capped at its default. A config can shrink results, never grow them.
    pub fn clamped(self) -> Self {
        Self {
            heroes: self.heroes.min(TOP_COUNTER_HEROES),
            items: self.items.min(TOP_COUNTER_ITEMS),
            weaknesses: self.weaknesses.min(TOP_TEAM_WEAKNESSES),
        }
    }
}

impl Default for ScoringLimits {
    fn default() -> Self {
        Self {
            heroes: TOP_COUNTER_HEROES,
            items: TOP_COUNTER_ITEMS,
            weaknesses: TOP_TEAM_WEAKNESSES,
        }
    }
}

/// Recommended counter hero
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RankedHero<'a> {
    pub hero: &'a Hero,
    pub score: u32,
    pub reasons: Vec<String>,
}

/// Recommended counter item
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RankedItem<'a> {
    pub item: &'a Item,
    pub score: u32,
    pub reasons: Vec<String>,
}

/// Hero the selected lineup is collectively weak against
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WeaknessEntry<'a> {
    pub hero: &'a Hero,
    pub score: u32,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct CounterRecommendations<'a> {
    pub heroes: Vec<RankedHero<'a>>,
    pub items: Vec<RankedItem<'a>>,
}

/// Recommendations plus team weaknesses for one selection
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CounterReport<'a> {
    pub heroes: Vec<RankedHero<'a>>,
    pub items: Vec<RankedItem<'a>>,
    pub team_weaknesses: Vec<WeaknessEntry<'a>>,
}

/// Pure scorer over a catalog snapshot
#[derive(Debug, Clone, Copy)]
pub struct CounterScorer<'a> {
    catalog: &'a Catalog,
    limits: ScoringLimits,
}

impl<'a> CounterScorer<'a> {
    pub fn new(catalog: &'a Catalog) -> Self {
        Self::with_limits(catalog, ScoringLimits::default())
    }

    pub fn with_limits(catalog: &'a Catalog, limits: ScoringLimits) -> Self {
        Self {
            catalog,
            limits: limits.clamped(),
        }
    }

    pub fn limits(&self) -> ScoringLimits {
        self.limits
    }

    /// Counter heroes and counter items for `selection`
    pub fn compute_counters(&self, selection: &[&Hero]) -> CounterRecommendations<'a> {
        if selection.is_empty() {
            return CounterRecommendations::default();
        }
        let _span = TimingSpan::new("compute_counters");

        let mut hero_scores = ScoreBoard::new();
        let mut item_scores = ScoreBoard::new();

        for picked in selection {
            hero_scores.add_ranked(&picked.countered_by, RECOMMENDATION_WEIGHT_MULT, || {
                Some(format!("Counters {}", picked.name))
            });
            item_scores.add_ranked(&picked.counter_items, RECOMMENDATION_WEIGHT_MULT, || {
                Some(format!("Effective vs {}", picked.name))
            });
        }

        let catalog = self.catalog;
        let heroes: Vec<RankedHero<'a>> = hero_scores
            .ranked()
            .into_iter()
            .filter_map(|s| {
                catalog.hero(&s.key).map(|hero| RankedHero {
                    hero,
                    score: s.score,
                    reasons: s.reasons,
                })
            })
            .take(self.limits.heroes)
            .collect();

        let items: Vec<RankedItem<'a>> = item_scores
            .ranked()
            .into_iter()
            .filter_map(|s| {
                catalog.item(&s.key).map(|item| RankedItem {
                    item,
                    score: s.score,
                    reasons: s.reasons,
                })
            })
            .take(self.limits.items)
            .collect();

        debug!(
            picks = selection.len(),
            heroes = heroes.len(),
            items = items.len(),
            "counters computed"
        );
        CounterRecommendations { heroes, items }
    }

    /// Heroes the selection is weak against, from each pick's `counters`
    pub fn team_weaknesses(&self, selection: &[&Hero]) -> Vec<WeaknessEntry<'a>> {
        let mut board = ScoreBoard::new();
        for picked in selection {
            board.add_ranked(&picked.counters, WEAKNESS_WEIGHT_MULT, || None);
        }

        let catalog = self.catalog;
        board
            .ranked()
            .into_iter()
            .filter_map(|s| {
                catalog
                    .hero(&s.key)
                    .map(|hero| WeaknessEntry { hero, score: s.score })
            })
            .take(self.limits.weaknesses)
            .collect()
    }

    /// Both outputs in one call
    pub fn report(&self, selection: &[&Hero]) -> CounterReport<'a> {
        let CounterRecommendations { heroes, items } = self.compute_counters(selection);
        CounterReport {
            heroes,
            items,
            team_weaknesses: self.team_weaknesses(selection),
        }
    }
}
