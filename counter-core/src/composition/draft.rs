//! Two-sided draft board: Radiant and Dire, five slots each.
//!
//! A hero may occupy at most one slot across both sides.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::{analyze_roster, Roster, RosterAnalysis};
use crate::catalog::{Catalog, Hero};
use crate::constants::ROSTER_SIZE;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Side {
    Radiant,
    Dire,
}

impl Side {
    pub fn as_str(&self) -> &'static str {
        match self {
            Side::Radiant => "radiant",
            Side::Dire => "dire",
        }
    }

    pub fn opponent(&self) -> Side {
        match self {
            Side::Radiant => Side::Dire,
            Side::Dire => Side::Radiant,
        }
    }
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DraftError {
    #[error("slot {0} is out of range (0..{max})", max = ROSTER_SIZE)]
    SlotOutOfRange(usize),
    #[error("hero '{key}' is already picked for {side}")]
    AlreadyPicked { key: String, side: Side },
    #[error("unknown hero '{0}'")]
    UnknownHero(String),
}

/// Analysis of both sides. A side with no picks has no analysis.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DraftAnalysis {
    pub radiant: Option<RosterAnalysis>,
    pub dire: Option<RosterAnalysis>,
}

#[derive(Debug, Clone, Default)]
pub struct DraftBoard<'a> {
    radiant: Roster<'a>,
    dire: Roster<'a>,
}

impl<'a> DraftBoard<'a> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn roster(&self, side: Side) -> &Roster<'a> {
        match side {
            Side::Radiant => &self.radiant,
            Side::Dire => &self.dire,
        }
    }

    fn roster_mut(&mut self, side: Side) -> &mut Roster<'a> {
        match side {
            Side::Radiant => &mut self.radiant,
            Side::Dire => &mut self.dire,
        }
    }

    /// Side currently holding `key`, if any
    pub fn side_of(&self, key: &str) -> Option<Side> {
        if self.radiant.contains(key) {
            Some(Side::Radiant)
        } else if self.dire.contains(key) {
            Some(Side::Dire)
        } else {
            None
        }
    }

    /// Place `hero` in a slot. Replacing the slot's current occupant is
    /// allowed; picking a hero already on the board is not.
    pub fn place(&mut self, side: Side, slot: usize, hero: &'a Hero) -> Result<Option<&'a Hero>, DraftError> {
        if slot >= ROSTER_SIZE {
            return Err(DraftError::SlotOutOfRange(slot));
        }
        if let Some(holder) = self.side_of(&hero.key) {
            let same_slot = holder == side && self.roster(side).get(slot).is_some_and(|h| h.key == hero.key);
            if !same_slot {
                return Err(DraftError::AlreadyPicked {
                    key: hero.key.clone(),
                    side: holder,
                });
            }
        }
        Ok(self.roster_mut(side).set(slot, Some(hero)))
    }

    pub fn place_key(
        &mut self,
        catalog: &'a Catalog,
        side: Side,
        slot: usize,
        key: &str,
    ) -> Result<Option<&'a Hero>, DraftError> {
        let hero = catalog
            .hero(key)
            .ok_or_else(|| DraftError::UnknownHero(key.to_string()))?;
        self.place(side, slot, hero)
    }

    /// Empty a slot; returns the removed hero
    pub fn remove(&mut self, side: Side, slot: usize) -> Result<Option<&'a Hero>, DraftError> {
        if slot >= ROSTER_SIZE {
            return Err(DraftError::SlotOutOfRange(slot));
        }
        Ok(self.roster_mut(side).set(slot, None))
    }

    pub fn clear(&mut self) {
        self.radiant.clear();
        self.dire.clear();
    }

    /// Keys of every hero on the board, Radiant first
    pub fn picked_keys(&self) -> Vec<&'a str> {
        self.radiant
            .heroes()
            .chain(self.dire.heroes())
            .map(|h| h.key.as_str())
            .collect()
    }

    pub fn analyze(&self) -> DraftAnalysis {
        DraftAnalysis {
            radiant: analyze_roster(&self.radiant),
            dire: analyze_roster(&self.dire),
        }
    }
}
