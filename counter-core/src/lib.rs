//! Counterpick - Draft Helper Core Library
//!
//! Deterministic draft-assist logic for a 5v5 hero game:
//! - Hero & item catalog (loaded from JSON data files, shared read-only)
//! - Counter recommendations (rank-decayed scoring over precomputed lists)
//! - Team composition analysis (role/attribute/attack-type tallies, tags)
//! - Two-sided draft board
//! - Offline ingest (advantage matrix → counter overlay, meta heroes)
//! - Config and structured logging for the binaries

pub mod catalog;
pub mod composition;
pub mod config;
pub mod constants;
pub mod counters;
pub mod ingest;
pub mod logging;

pub use catalog::{Catalog, CatalogError, Hero, HeroFilter, Item, ItemFilter};
pub use composition::{analyze_roster, DraftBoard, Roster, RosterAnalysis, Side};
pub use config::{AppConfig, ConfigError};
pub use counters::{CounterReport, CounterScorer, ScoringLimits, Selection, SelectionError};
