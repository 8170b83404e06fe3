use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Shop category of an item
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ItemCategory {
    Consumable,
    Attribute,
    Equipment,
    Miscellaneous,
    Secret,
    Accessory,
    Support,
    Magical,
    Armor,
    Weapon,
    Artifact,
    Neutral,
}

impl ItemCategory {
    pub fn as_str(&self) -> &'static str {
        match self {
            ItemCategory::Consumable => "consumable",
            ItemCategory::Attribute => "attribute",
            ItemCategory::Equipment => "equipment",
            ItemCategory::Miscellaneous => "miscellaneous",
            ItemCategory::Secret => "secret",
            ItemCategory::Accessory => "accessory",
            ItemCategory::Support => "support",
            ItemCategory::Magical => "magical",
            ItemCategory::Armor => "armor",
            ItemCategory::Weapon => "weapon",
            ItemCategory::Artifact => "artifact",
            ItemCategory::Neutral => "neutral",
        }
    }

    pub fn all_categories() -> Vec<ItemCategory> {
        vec![
            ItemCategory::Consumable,
            ItemCategory::Attribute,
            ItemCategory::Equipment,
            ItemCategory::Miscellaneous,
            ItemCategory::Secret,
            ItemCategory::Accessory,
            ItemCategory::Support,
            ItemCategory::Magical,
            ItemCategory::Armor,
            ItemCategory::Weapon,
            ItemCategory::Artifact,
            ItemCategory::Neutral,
        ]
    }
}

impl fmt::Display for ItemCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ItemCategory {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lower = s.to_ascii_lowercase();
        ItemCategory::all_categories()
            .into_iter()
            .find(|c| c.as_str() == lower)
            .ok_or_else(|| format!("unknown item category '{s}'"))
    }
}

/// An equippable item
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Item {
    pub key: String,
    pub id: u32,
    pub name: String,
    #[serde(default)]
    pub cost: u32,
    pub category: ItemCategory,
    #[serde(default)]
    pub description: String,
    /// Display lines such as "+10 Strength"
    #[serde(default)]
    pub attributes: Vec<String>,
    /// Role tags this item is situationally good against
    #[serde(default)]
    pub counters_hero_types: Vec<String>,
    /// Hero keys this item is specifically good against
    #[serde(default)]
    pub counters_heroes: Vec<String>,
}

impl Item {
    pub fn new(key: impl Into<String>, id: u32, name: impl Into<String>, category: ItemCategory) -> Self {
        Self {
            key: key.into(),
            id,
            name: name.into(),
            cost: 0,
            category,
            description: String::new(),
            attributes: Vec::new(),
            counters_hero_types: Vec::new(),
            counters_heroes: Vec::new(),
        }
    }

    pub fn with_cost(mut self, cost: u32) -> Self {
        self.cost = cost;
        self
    }

    pub fn with_counters_heroes<I, S>(mut self, keys: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.counters_heroes = keys.into_iter().map(Into::into).collect();
        self
    }

    /// Whether this item is flagged as effective against heroes with `role`
    pub fn counters_role(&self, role: &str) -> bool {
        self.counters_hero_types.iter().any(|r| r == role)
    }
}
