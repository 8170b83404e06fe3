/// Integration tests: data files → catalog → JSON output.
///
/// Loads the fixture data set the same way the binaries do, runs the
/// scorer and analyzer over it, and checks the serialized shapes the
/// HTTP layer and the CLI `--json` flag hand to clients.
use std::path::PathBuf;

use counterpick_core::catalog::{load_catalog_dir, Catalog, HeroFilter, ItemCategory, ItemFilter, PrimaryAttr};
use counterpick_core::composition::{analyze_roster, Roster};
use counterpick_core::counters::{CounterScorer, Selection};
use counterpick_core::ingest::meta_heroes;

// ============================================================
// Helpers
// ============================================================

fn fixtures() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures")
}

fn catalog() -> Catalog {
    load_catalog_dir(&fixtures()).unwrap_or_else(|e| panic!("fixture catalog failed to load: {e}"))
}

fn keys(value: &serde_json::Value, list: &str, inner: &str) -> Vec<String> {
    value[list]
        .as_array()
        .unwrap()
        .iter()
        .map(|e| e[inner]["key"].as_str().unwrap().to_string())
        .collect()
}

// ============================================================
// Loading
// ============================================================

#[test]
fn test_fixture_catalog_loads_and_merges_overlay() {
    let catalog = catalog();
    assert_eq!(catalog.hero_count(), 8);
    assert_eq!(catalog.item_count(), 5);

    let am = catalog.hero("anti_mage").unwrap();
    assert_eq!(am.countered_by, vec!["axe", "pudge", "ghost_hero"]);
    assert_eq!(am.abilities.len(), 1);
    assert_eq!(am.abilities[0].kind, "passive");
    assert_eq!(am.counter_reason.as_ref().unwrap().weak_against, "Gets locked down early.");

    // No overlay entry at all: the hero record is kept as-is
    assert!(catalog.hero("sven").unwrap().lacks_counter_data());
    // Overlay without strongAgainst keeps the hero's own (empty) list
    assert!(catalog.hero("pudge").unwrap().counters.is_empty());
}

// ============================================================
// Counter report
// ============================================================

#[test]
fn test_counter_report_json_shape() {
    let catalog = catalog();
    let selection = Selection::from_keys(&catalog, &["anti_mage", "axe"]).unwrap();
    let report = CounterScorer::new(&catalog).report(selection.heroes());
    let json = serde_json::to_value(&report).unwrap();

    assert_eq!(keys(&json, "heroes", "hero"), vec!["axe", "lion", "pudge", "crystal_maiden"]);
    assert_eq!(json["heroes"][0]["score"], 12);
    assert_eq!(json["heroes"][0]["reasons"][0], "Counters Anti-Mage");

    // ghost_scepter is not in the item list and is dropped
    assert_eq!(keys(&json, "items", "item"), vec!["abyssal_blade", "force_staff", "orchid"]);
    assert_eq!(json["items"][1]["reasons"][0], "Effective vs Axe");

    assert_eq!(
        keys(&json, "teamWeaknesses", "hero"),
        vec!["lion", "anti_mage", "crystal_maiden", "drow_ranger"]
    );
    assert_eq!(json["teamWeaknesses"][0]["score"], 6);
}

#[test]
fn test_hero_json_uses_camel_case() {
    let catalog = catalog();
    let json = serde_json::to_value(catalog.hero("axe").unwrap()).unwrap();
    assert_eq!(json["primaryAttr"], "str");
    assert_eq!(json["attackType"], "Melee");
    assert_eq!(json["baseStr"], 25.0);
    assert!(json["counteredBy"].is_array());
}

// ============================================================
// Profiles & queries
// ============================================================

#[test]
fn test_hero_profile_resolves_and_derives() {
    let catalog = catalog();
    let profile = catalog.hero_profile("axe").unwrap();
    let json = serde_json::to_value(&profile).unwrap();

    // 120 + 25 * 22
    assert_eq!(json["derived"]["health"], 670.0);
    // 75 + 18 * 12
    assert_eq!(json["derived"]["mana"], 291.0);
    assert_eq!(json["strongAgainst"].as_array().unwrap().len(), 2);
    // ghost_scepter dangles
    assert_eq!(json["counterItems"].as_array().unwrap().len(), 1);
}

#[test]
fn test_item_profile_resolves_counters_heroes() {
    let catalog = catalog();
    let profile = catalog.item_profile("orchid").unwrap();
    assert_eq!(profile.strong_against.len(), 1);
    assert_eq!(profile.strong_against[0].key, "anti_mage");
}

#[test]
fn test_filters_over_fixture_data() {
    let catalog = catalog();
    let supports = catalog.find_heroes(&HeroFilter {
        role: Some("Support".into()),
        attribute: Some(PrimaryAttr::Int),
        ..Default::default()
    });
    let keys: Vec<&str> = supports.iter().map(|h| h.key.as_str()).collect();
    assert_eq!(keys, vec!["lion", "crystal_maiden"]);

    let armor = catalog.find_items(&ItemFilter {
        category: Some(ItemCategory::Armor),
        ..Default::default()
    });
    assert_eq!(armor.len(), 1);

    let available = catalog.available_heroes(&HeroFilter::default(), &["axe", "lion"]);
    assert_eq!(available.len(), 6);
}

// ============================================================
// Composition & meta
// ============================================================

#[test]
fn test_roster_analysis_json() {
    let catalog = catalog();
    let roster = Roster::from_keys(
        &catalog,
        &[Some("axe"), Some("lion"), None, Some("drow_ranger"), Some("marci")],
    );
    let analysis = analyze_roster(&roster).unwrap();
    let json = serde_json::to_value(&analysis).unwrap();

    assert_eq!(json["filled"], 4);
    assert_eq!(json["roleCounts"][0]["role"], "Disabler");
    assert_eq!(json["roleCounts"][0]["count"], 4);
    // marci is universal and lands in no bucket
    assert_eq!(json["attrCounts"]["str"], 1);
    assert_eq!(json["attrCounts"]["agi"], 1);
    assert_eq!(json["attrCounts"]["int"], 1);
    assert_eq!(json["meleeCount"], 2);
    assert_eq!(json["rangedCount"], 2);
    let strengths: Vec<&str> = json["strengths"].as_array().unwrap().iter().map(|s| s.as_str().unwrap()).collect();
    assert_eq!(
        strengths,
        vec!["StrongLockdown", "HighDamagePotential", "GoodTeamSupport", "GoodInitiation"]
    );
}

#[test]
fn test_meta_heroes_from_fixture() {
    let catalog = catalog();
    let meta = meta_heroes(&catalog, 3);
    let keys: Vec<&str> = meta.iter().map(|m| m.key.as_str()).collect();
    assert_eq!(keys, vec!["pudge", "axe", "anti_mage"]);
    let json = serde_json::to_value(&meta[0]).unwrap();
    assert_eq!(json["totalPicks"], 310900);
}
