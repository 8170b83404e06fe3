//! Team Composition Analysis
//!
//! Summarizes one side's 5-slot roster:
//! - role frequency (top 5)
//! - primary attribute split (str/agi/int; universal heroes are not counted)
//! - melee/ranged split
//! - qualitative strength and weakness tags from fixed thresholds
//!
//! Empty slots never count toward anything. An all-empty roster has no
//! analysis at all.

pub mod draft;

use serde::{Deserialize, Serialize};

use crate::catalog::{Catalog, Hero, PrimaryAttr};
use crate::constants::{ATTACK_TYPE_IMBALANCE, ROLE_STACK_THRESHOLD, ROSTER_SIZE, TOP_ROLES};

pub use draft::{DraftAnalysis, DraftBoard, DraftError, Side};

/// One side's slots, each filled or empty
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Roster<'a> {
    slots: [Option<&'a Hero>; ROSTER_SIZE],
}

impl<'a> Roster<'a> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_slots(slots: [Option<&'a Hero>; ROSTER_SIZE]) -> Self {
        Self { slots }
    }

    /// Resolve slot keys against the catalog. Missing, `None` or unknown
    /// keys leave the slot empty; keys past the fifth are ignored.
    pub fn from_keys<S: AsRef<str>>(catalog: &'a Catalog, keys: &[Option<S>]) -> Self {
        let mut roster = Self::new();
        for (slot, key) in roster.slots.iter_mut().zip(keys.iter()) {
            *slot = key.as_ref().and_then(|k| catalog.hero(k.as_ref()));
        }
        roster
    }

    pub fn slots(&self) -> &[Option<&'a Hero>; ROSTER_SIZE] {
        &self.slots
    }

    pub fn get(&self, index: usize) -> Option<&'a Hero> {
        self.slots.get(index).copied().flatten()
    }

    /// Put `hero` into slot `index`; returns the previous occupant
    pub fn set(&mut self, index: usize, hero: Option<&'a Hero>) -> Option<&'a Hero> {
        match self.slots.get_mut(index) {
            Some(slot) => std::mem::replace(slot, hero),
            None => None,
        }
    }

    pub fn clear(&mut self) {
        self.slots = [None; ROSTER_SIZE];
    }

    pub fn heroes(&self) -> impl Iterator<Item = &'a Hero> + '_ {
        self.slots.iter().flatten().copied()
    }

    pub fn filled(&self) -> usize {
        self.slots.iter().filter(|s| s.is_some()).count()
    }

    pub fn is_empty(&self) -> bool {
        self.filled() == 0
    }

    pub fn contains(&self, key: &str) -> bool {
        self.heroes().any(|h| h.key == key)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoleCount {
    pub role: String,
    pub count: usize,
}

/// Filled slots per primary attribute. Universal heroes land in none.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AttrCounts {
    pub str: usize,
    pub agi: usize,
    pub int: usize,
}

/// Summed base attributes of the filled slots
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct AttrTotals {
    pub str: f64,
    pub agi: f64,
    pub int: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Strength {
    StrongLockdown,
    HighDamagePotential,
    GoodTeamSupport,
    GoodInitiation,
    StrongPushing,
    TankyFrontline,
}

impl Strength {
    pub fn label(&self) -> &'static str {
        match self {
            Strength::StrongLockdown => "Strong lockdown",
            Strength::HighDamagePotential => "High damage potential",
            Strength::GoodTeamSupport => "Good team support",
            Strength::GoodInitiation => "Good initiation",
            Strength::StrongPushing => "Strong pushing",
            Strength::TankyFrontline => "Tanky frontline",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Weakness {
    LacksSupport,
    LacksLateGame,
    LacksDisable,
    TooManyMelee,
    NoFrontline,
    SquishyLineup,
}

impl Weakness {
    pub fn label(&self) -> &'static str {
        match self {
            Weakness::LacksSupport => "Lacks support",
            Weakness::LacksLateGame => "Lacks late game",
            Weakness::LacksDisable => "Lacks disable",
            Weakness::TooManyMelee => "Too many melee",
            Weakness::NoFrontline => "No frontline",
            Weakness::SquishyLineup => "Squishy lineup",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RosterAnalysis {
    pub filled: usize,
    /// Top roles by count, ties in first-seen order
    pub role_counts: Vec<RoleCount>,
    pub attr_counts: AttrCounts,
    pub attr_totals: AttrTotals,
    pub melee_count: usize,
    pub ranged_count: usize,
    pub strengths: Vec<Strength>,
    pub weaknesses: Vec<Weakness>,
}

impl RosterAnalysis {
    pub fn strength_labels(&self) -> Vec<&'static str> {
        self.strengths.iter().map(Strength::label).collect()
    }

    pub fn weakness_labels(&self) -> Vec<&'static str> {
        self.weaknesses.iter().map(Weakness::label).collect()
    }
}

/// Full role tally in first-seen order. Each hero counts at most once per role.
fn tally_roles<'h>(heroes: impl Iterator<Item = &'h Hero>) -> Vec<RoleCount> {
    let mut tally: Vec<RoleCount> = Vec::new();
    for hero in heroes {
        for (i, role) in hero.roles.iter().enumerate() {
            if hero.roles[..i].contains(role) {
                continue;
            }
            match tally.iter_mut().find(|rc| &rc.role == role) {
                Some(rc) => rc.count += 1,
                None => tally.push(RoleCount {
                    role: role.clone(),
                    count: 1,
                }),
            }
        }
    }
    tally
}

fn role_count(tally: &[RoleCount], role: &str) -> usize {
    tally
        .iter()
        .find(|rc| rc.role == role)
        .map_or(0, |rc| rc.count)
}

/// Analyze one roster. `None` when every slot is empty.
pub fn analyze_roster(roster: &Roster) -> Option<RosterAnalysis> {
    if roster.is_empty() {
        return None;
    }

    let tally = tally_roles(roster.heroes());

    let mut attr_counts = AttrCounts::default();
    let mut attr_totals = AttrTotals::default();
    let mut melee_count = 0;
    let mut ranged_count = 0;
    for hero in roster.heroes() {
        match hero.primary_attr {
            PrimaryAttr::Str => attr_counts.str += 1,
            PrimaryAttr::Agi => attr_counts.agi += 1,
            PrimaryAttr::Int => attr_counts.int += 1,
            PrimaryAttr::All => {}
        }
        attr_totals.str += hero.stats.base_str;
        attr_totals.agi += hero.stats.base_agi;
        attr_totals.int += hero.stats.base_int;
        if hero.is_melee() {
            melee_count += 1;
        } else {
            ranged_count += 1;
        }
    }

    let disablers = role_count(&tally, "Disabler");
    let carries = role_count(&tally, "Carry");
    let supports = role_count(&tally, "Support");
    let initiators = role_count(&tally, "Initiator");
    let pushers = role_count(&tally, "Pusher");

    let mut strengths = Vec::new();
    if disablers >= ROLE_STACK_THRESHOLD {
        strengths.push(Strength::StrongLockdown);
    }
    if carries >= ROLE_STACK_THRESHOLD {
        strengths.push(Strength::HighDamagePotential);
    }
    if supports >= ROLE_STACK_THRESHOLD {
        strengths.push(Strength::GoodTeamSupport);
    }
    if initiators >= 1 {
        strengths.push(Strength::GoodInitiation);
    }
    if pushers >= ROLE_STACK_THRESHOLD {
        strengths.push(Strength::StrongPushing);
    }
    if attr_counts.str >= ROLE_STACK_THRESHOLD {
        strengths.push(Strength::TankyFrontline);
    }

    let mut weaknesses = Vec::new();
    if supports == 0 {
        weaknesses.push(Weakness::LacksSupport);
    }
    if carries == 0 {
        weaknesses.push(Weakness::LacksLateGame);
    }
    if disablers == 0 {
        weaknesses.push(Weakness::LacksDisable);
    }
    if melee_count >= ATTACK_TYPE_IMBALANCE {
        weaknesses.push(Weakness::TooManyMelee);
    }
    if ranged_count >= ATTACK_TYPE_IMBALANCE {
        weaknesses.push(Weakness::NoFrontline);
    }
    if attr_counts.str == 0 {
        weaknesses.push(Weakness::SquishyLineup);
    }

    let mut role_counts = tally;
    role_counts.sort_by_key(|rc| std::cmp::Reverse(rc.count));
    role_counts.truncate(TOP_ROLES);

    Some(RosterAnalysis {
        filled: roster.filled(),
        role_counts,
        attr_counts,
        attr_totals,
        melee_count,
        ranged_count,
        strengths,
        weaknesses,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::AttackType;

    fn hero(key: &str, attr: PrimaryAttr, attack: AttackType, roles: &[&str]) -> Hero {
        Hero::new(key, 0, key, attr, attack).with_roles(roles.iter().copied())
    }

    #[test]
    fn test_empty_roster_has_no_analysis() {
        assert!(analyze_roster(&Roster::new()).is_none());
    }

    #[test]
    fn test_five_carries() {
        let heroes: Vec<Hero> = (0..5)
            .map(|i| hero(&format!("c{i}"), PrimaryAttr::Agi, AttackType::Melee, &["Carry"]))
            .collect();
        let roster = Roster::from_slots([
            Some(&heroes[0]),
            Some(&heroes[1]),
            Some(&heroes[2]),
            Some(&heroes[3]),
            Some(&heroes[4]),
        ]);
        let analysis = analyze_roster(&roster).unwrap();

        assert_eq!(
            analysis.role_counts,
            vec![RoleCount {
                role: "Carry".into(),
                count: 5
            }]
        );
        assert!(analysis.strengths.contains(&Strength::HighDamagePotential));
        assert!(analysis.weaknesses.contains(&Weakness::LacksSupport));
        assert!(analysis.weaknesses.contains(&Weakness::LacksDisable));
        assert!(analysis.weaknesses.contains(&Weakness::TooManyMelee));
        assert!(analysis.weaknesses.contains(&Weakness::SquishyLineup));
        assert!(!analysis.weaknesses.contains(&Weakness::LacksLateGame));
        assert_eq!(analysis.melee_count, 5);
    }

    #[test]
    fn test_universal_heroes_not_in_attr_buckets() {
        let marci = hero("marci", PrimaryAttr::All, AttackType::Melee, &["Support"]);
        let lion = hero("lion", PrimaryAttr::Int, AttackType::Ranged, &["Support", "Disabler"]);
        let roster = Roster::from_slots([Some(&marci), None, Some(&lion), None, None]);
        let analysis = analyze_roster(&roster).unwrap();

        assert_eq!(analysis.filled, 2);
        assert_eq!(
            analysis.attr_counts,
            AttrCounts {
                str: 0,
                agi: 0,
                int: 1
            }
        );
        assert_eq!(analysis.melee_count, 1);
        assert_eq!(analysis.ranged_count, 1);
        assert!(analysis.strengths.contains(&Strength::GoodTeamSupport));
        assert!(analysis.weaknesses.contains(&Weakness::SquishyLineup));
    }

    #[test]
    fn test_role_ranking_ties_keep_first_seen() {
        let a = hero("a", PrimaryAttr::Str, AttackType::Melee, &["Initiator", "Durable", "Disabler"]);
        let b = hero("b", PrimaryAttr::Str, AttackType::Melee, &["Escape", "Nuker", "Disabler"]);
        let c = hero("c", PrimaryAttr::Int, AttackType::Ranged, &["Pusher", "Support"]);
        let roster = Roster::from_slots([Some(&a), Some(&b), Some(&c), None, None]);
        let analysis = analyze_roster(&roster).unwrap();

        let roles: Vec<&str> = analysis.role_counts.iter().map(|r| r.role.as_str()).collect();
        assert_eq!(roles, vec!["Disabler", "Initiator", "Durable", "Escape", "Nuker"]);
        assert_eq!(analysis.role_counts[0].count, 2);
    }

    #[test]
    fn test_thresholds_use_full_tally() {
        // Pusher ranks outside the top five but still counts
        let common = ["Nuker", "Escape", "Durable", "Initiator", "Disabler"];
        let mut pusher_roles = common.to_vec();
        pusher_roles.push("Pusher");
        let a = hero("a", PrimaryAttr::Str, AttackType::Melee, &pusher_roles);
        let b = hero("b", PrimaryAttr::Str, AttackType::Ranged, &pusher_roles);
        let c = hero("c", PrimaryAttr::Agi, AttackType::Ranged, &common);
        let roster = Roster::from_slots([Some(&a), Some(&b), Some(&c), None, None]);
        let analysis = analyze_roster(&roster).unwrap();

        assert_eq!(analysis.role_counts.len(), TOP_ROLES);
        assert!(analysis.role_counts.iter().all(|rc| rc.role != "Pusher"));
        assert!(analysis.strengths.contains(&Strength::StrongPushing));
        assert!(analysis.strengths.contains(&Strength::TankyFrontline));
        assert!(!analysis.weaknesses.contains(&Weakness::SquishyLineup));
    }

    #[test]
    fn test_balanced_lineup_labels() {
        let heroes = [
            hero("h1", PrimaryAttr::Agi, AttackType::Melee, &["Carry", "Escape"]),
            hero("h2", PrimaryAttr::Str, AttackType::Melee, &["Initiator", "Disabler", "Durable"]),
            hero("h3", PrimaryAttr::Int, AttackType::Ranged, &["Support", "Disabler"]),
            hero("h4", PrimaryAttr::Int, AttackType::Ranged, &["Support", "Nuker"]),
            hero("h5", PrimaryAttr::Str, AttackType::Ranged, &["Carry", "Pusher"]),
        ];
        let roster = Roster::from_slots([
            Some(&heroes[0]),
            Some(&heroes[1]),
            Some(&heroes[2]),
            Some(&heroes[3]),
            Some(&heroes[4]),
        ]);
        let analysis = analyze_roster(&roster).unwrap();
        assert_eq!(
            analysis.strength_labels(),
            vec![
                "Strong lockdown",
                "High damage potential",
                "Good team support",
                "Good initiation",
                "Tanky frontline"
            ]
        );
        assert!(analysis.weakness_labels().is_empty());
    }

    #[test]
    fn test_repeated_role_tag_counts_once() {
        let doubled = hero("d", PrimaryAttr::Agi, AttackType::Melee, &["Carry", "Carry"]);
        let roster = Roster::from_slots([Some(&doubled), None, None, None, None]);
        let analysis = analyze_roster(&roster).unwrap();

        assert_eq!(
            analysis.role_counts,
            vec![RoleCount {
                role: "Carry".into(),
                count: 1
            }]
        );
        assert!(analysis.role_counts.iter().all(|rc| rc.count <= analysis.filled));
        assert!(!analysis.strengths.contains(&Strength::HighDamagePotential));
    }

    #[test]
    fn test_four_ranged_is_no_frontline() {
        let heroes: Vec<Hero> = (0..4)
            .map(|i| hero(&format!("r{i}"), PrimaryAttr::Int, AttackType::Ranged, &["Nuker"]))
            .collect();
        let roster = Roster::from_slots([
            Some(&heroes[0]),
            Some(&heroes[1]),
            None,
            Some(&heroes[2]),
            Some(&heroes[3]),
        ]);
        let analysis = analyze_roster(&roster).unwrap();

        assert_eq!(analysis.ranged_count, 4);
        assert!(analysis.weaknesses.contains(&Weakness::NoFrontline));
        assert!(!analysis.weaknesses.contains(&Weakness::TooManyMelee));
    }

    #[test]
    fn test_four_melee_is_too_many_melee() {
        let heroes: Vec<Hero> = (0..4)
            .map(|i| hero(&format!("m{i}"), PrimaryAttr::Str, AttackType::Melee, &["Initiator"]))
            .collect();
        let ranged = hero("r", PrimaryAttr::Int, AttackType::Ranged, &["Support"]);
        let roster = Roster::from_slots([
            Some(&heroes[0]),
            Some(&heroes[1]),
            Some(&heroes[2]),
            Some(&heroes[3]),
            Some(&ranged),
        ]);
        let analysis = analyze_roster(&roster).unwrap();

        assert_eq!(analysis.melee_count, 4);
        assert!(analysis.weaknesses.contains(&Weakness::TooManyMelee));
        assert!(!analysis.weaknesses.contains(&Weakness::NoFrontline));
    }

    #[test]
    fn test_three_of_an_attack_type_is_balanced_enough() {
        let melee: Vec<Hero> = (0..3)
            .map(|i| hero(&format!("m{i}"), PrimaryAttr::Str, AttackType::Melee, &[]))
            .collect();
        let ranged: Vec<Hero> = (0..3)
            .map(|i| hero(&format!("r{i}"), PrimaryAttr::Int, AttackType::Ranged, &[]))
            .collect();

        let mostly_melee = Roster::from_slots([
            Some(&melee[0]),
            Some(&melee[1]),
            Some(&melee[2]),
            Some(&ranged[0]),
            None,
        ]);
        let analysis = analyze_roster(&mostly_melee).unwrap();
        assert_eq!(analysis.melee_count, 3);
        assert!(!analysis.weaknesses.contains(&Weakness::TooManyMelee));
        assert!(!analysis.weaknesses.contains(&Weakness::NoFrontline));

        let mostly_ranged = Roster::from_slots([
            Some(&ranged[0]),
            Some(&ranged[1]),
            Some(&ranged[2]),
            None,
            None,
        ]);
        let analysis = analyze_roster(&mostly_ranged).unwrap();
        assert_eq!(analysis.ranged_count, 3);
        assert!(!analysis.weaknesses.contains(&Weakness::NoFrontline));
        assert!(!analysis.weaknesses.contains(&Weakness::TooManyMelee));
    }

    #[test]
    fn test_from_keys_tolerates_unknown_and_short_input() {
        let catalog = Catalog::new(
            vec![hero("axe", PrimaryAttr::Str, AttackType::Melee, &["Initiator"])],
            vec![],
        );
        let roster = Roster::from_keys(&catalog, &[Some("axe"), None, Some("ghost")]);
        assert_eq!(roster.filled(), 1);
        assert_eq!(roster.get(0).unwrap().key, "axe");
        assert!(roster.get(2).is_none());
        assert!(roster.get(9).is_none());
    }

    #[test]
    fn test_set_returns_previous_occupant() {
        let axe = hero("axe", PrimaryAttr::Str, AttackType::Melee, &[]);
        let lion = hero("lion", PrimaryAttr::Int, AttackType::Ranged, &[]);
        let mut roster = Roster::new();
        assert!(roster.set(1, Some(&axe)).is_none());
        assert_eq!(roster.set(1, Some(&lion)).unwrap().key, "axe");
        assert!(roster.set(7, Some(&axe)).is_none());
        assert!(roster.contains("lion"));
        roster.clear();
        assert!(roster.is_empty());
    }
}
