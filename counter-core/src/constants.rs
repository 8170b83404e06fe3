//! Centralized ranking and draft constants.
//!
//! The scorer, analyzer, ingest step and service layer all read their
//! limits from here so the cut-offs cannot drift apart.

// =====================================================
// Draft shape
// =====================================================

/// Slots per side in a roster
pub const ROSTER_SIZE: usize = 5;

/// Maximum opposing heroes in a counter-pick selection
pub const MAX_SELECTION: usize = 5;

// =====================================================
// Counter scoring
// =====================================================

/// Length of every precomputed counter list (strong/weak/items).
/// Rank weight is `COUNTER_LIST_DEPTH - index`, so index 0 is worth the most
/// and anything at or past this depth is worth nothing.
pub const COUNTER_LIST_DEPTH: usize = 6;

/// Multiplier applied to rank weight for hero and item recommendations
pub const RECOMMENDATION_WEIGHT_MULT: u32 = 2;

/// Multiplier applied to rank weight for team weaknesses
pub const WEAKNESS_WEIGHT_MULT: u32 = 1;

/// Counter heroes returned per recommendation
pub const TOP_COUNTER_HEROES: usize = 10;

/// Counter items returned per recommendation
pub const TOP_COUNTER_ITEMS: usize = 8;

/// Heroes returned in the team-weakness list
pub const TOP_TEAM_WEAKNESSES: usize = 5;

// =====================================================
// Composition analysis
// =====================================================

/// Roles reported in the role summary
pub const TOP_ROLES: usize = 5;

/// Same-role heroes needed for a role-based strength
pub const ROLE_STACK_THRESHOLD: usize = 2;

/// Same attack type heroes that unbalance a lineup
pub const ATTACK_TYPE_IMBALANCE: usize = 4;

// =====================================================
// Derived hero stats
// =====================================================

/// Health granted per point of strength
pub const HEALTH_PER_STR: f64 = 22.0;

/// Mana granted per point of intelligence
pub const MANA_PER_INT: f64 = 12.0;

/// Armor granted per point of agility
pub const ARMOR_PER_AGI: f64 = 0.167;

// =====================================================
// Ingest
// =====================================================

/// Heroes surfaced in the meta list
pub const META_HERO_COUNT: usize = 15;
