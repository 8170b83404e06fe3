use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::constants::{ARMOR_PER_AGI, HEALTH_PER_STR, MANA_PER_INT};

/// Primary attribute of a hero. `All` is the universal attribute.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PrimaryAttr {
    Str,
    Agi,
    Int,
    All,
}

impl PrimaryAttr {
    pub fn as_str(&self) -> &'static str {
        match self {
            PrimaryAttr::Str => "str",
            PrimaryAttr::Agi => "agi",
            PrimaryAttr::Int => "int",
            PrimaryAttr::All => "all",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            PrimaryAttr::Str => "Strength",
            PrimaryAttr::Agi => "Agility",
            PrimaryAttr::Int => "Intelligence",
            PrimaryAttr::All => "Universal",
        }
    }

    pub fn all_attrs() -> [PrimaryAttr; 4] {
        [
            PrimaryAttr::Str,
            PrimaryAttr::Agi,
            PrimaryAttr::Int,
            PrimaryAttr::All,
        ]
    }
}

impl fmt::Display for PrimaryAttr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PrimaryAttr {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "str" | "strength" => Ok(PrimaryAttr::Str),
            "agi" | "agility" => Ok(PrimaryAttr::Agi),
            "int" | "intelligence" => Ok(PrimaryAttr::Int),
            "all" | "uni" | "universal" => Ok(PrimaryAttr::All),
            other => Err(format!("unknown primary attribute '{other}'")),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AttackType {
    Melee,
    Ranged,
}

impl AttackType {
    pub fn as_str(&self) -> &'static str {
        match self {
            AttackType::Melee => "Melee",
            AttackType::Ranged => "Ranged",
        }
    }
}

/// Base numeric stats as published upstream. Display-only: the scorer never
/// reads them.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct BaseStats {
    pub base_health: f64,
    pub base_mana: f64,
    pub base_armor: f64,
    pub base_move_speed: f64,
    pub base_attack_min: f64,
    pub base_attack_max: f64,
    pub base_str: f64,
    pub base_agi: f64,
    pub base_int: f64,
    pub str_gain: f64,
    pub agi_gain: f64,
    pub int_gain: f64,
    pub attack_range: f64,
    pub attack_rate: f64,
    pub projectile_speed: f64,
}

/// Level-1 stats after attribute bonuses are applied
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DerivedStats {
    pub health: f64,
    pub mana: f64,
    pub armor: f64,
    pub move_speed: f64,
}

impl BaseStats {
    pub fn derived(&self) -> DerivedStats {
        DerivedStats {
            health: self.base_health + self.base_str * HEALTH_PER_STR,
            mana: self.base_mana + self.base_int * MANA_PER_INT,
            armor: self.base_armor + self.base_agi * ARMOR_PER_AGI,
            move_speed: self.base_move_speed,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Ability {
    pub name: String,
    /// active / passive / toggle / ultimate, kept open
    #[serde(rename = "type")]
    pub kind: String,
    pub description: String,
    /// Per-level cooldown in seconds
    pub cooldown: Vec<f64>,
    /// Per-level mana cost
    pub mana_cost: Vec<f64>,
}

/// Hand-written notes explaining a hero's counter lists
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CounterReason {
    pub strong_against: String,
    pub weak_against: String,
    pub item_counters: String,
}

impl CounterReason {
    pub fn is_empty(&self) -> bool {
        self.strong_against.is_empty()
            && self.weak_against.is_empty()
            && self.item_counters.is_empty()
    }
}

/// A selectable hero with stats, abilities and precomputed matchup lists.
///
/// `counters`, `countered_by` and `counter_items` are ordered strongest
/// first and hold at most [`crate::constants::COUNTER_LIST_DEPTH`] keys.
/// Keys may dangle; consumers resolve them through the catalog.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Hero {
    pub key: String,
    pub id: u32,
    pub name: String,
    pub primary_attr: PrimaryAttr,
    pub attack_type: AttackType,
    #[serde(default)]
    pub roles: Vec<String>,
    #[serde(flatten)]
    pub stats: BaseStats,
    #[serde(default)]
    pub abilities: Vec<Ability>,
    /// Heroes this hero is strong against
    #[serde(default)]
    pub counters: Vec<String>,
    /// Heroes strong against this hero
    #[serde(default)]
    pub countered_by: Vec<String>,
    /// Items effective against this hero
    #[serde(default)]
    pub counter_items: Vec<String>,
    #[serde(default)]
    pub counter_reason: Option<CounterReason>,
    #[serde(default)]
    pub complexity: Option<u8>,
    #[serde(default)]
    pub total_picks: Option<u64>,
    #[serde(default)]
    pub winrate: Option<f64>,
}

impl Hero {
    /// Minimal hero with no stats or matchup data
    pub fn new(
        key: impl Into<String>,
        id: u32,
        name: impl Into<String>,
        primary_attr: PrimaryAttr,
        attack_type: AttackType,
    ) -> Self {
        Self {
            key: key.into(),
            id,
            name: name.into(),
            primary_attr,
            attack_type,
            roles: Vec::new(),
            stats: BaseStats::default(),
            abilities: Vec::new(),
            counters: Vec::new(),
            countered_by: Vec::new(),
            counter_items: Vec::new(),
            counter_reason: None,
            complexity: None,
            total_picks: None,
            winrate: None,
        }
    }

    pub fn with_roles<I, S>(mut self, roles: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.roles = roles.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_counters<I, S>(mut self, keys: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.counters = keys.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_countered_by<I, S>(mut self, keys: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.countered_by = keys.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_counter_items<I, S>(mut self, keys: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.counter_items = keys.into_iter().map(Into::into).collect();
        self
    }

    pub fn has_role(&self, role: &str) -> bool {
        self.roles.iter().any(|r| r == role)
    }

    pub fn is_melee(&self) -> bool {
        self.attack_type == AttackType::Melee
    }

    pub fn derived_stats(&self) -> DerivedStats {
        self.stats.derived()
    }

    /// True when the hero carries none of the three matchup lists
    pub fn lacks_counter_data(&self) -> bool {
        self.counters.is_empty() && self.countered_by.is_empty() && self.counter_items.is_empty()
    }
}
