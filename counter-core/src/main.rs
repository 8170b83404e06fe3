//! Counterpick CLI
//!
//! Query the catalog, score counters and analyze rosters from the shell,
//! and rebuild the counter overlay from an advantage matrix.

use anyhow::{bail, Context, Result};
use clap::{ArgAction, Parser, Subcommand};
use std::fmt::Write as _;
use std::path::{Path, PathBuf};
use tracing::info;

use counterpick_core::catalog::{load_catalog, Catalog};
use counterpick_core::composition::{analyze_roster, Roster, RosterAnalysis};
use counterpick_core::config::AppConfig;
use counterpick_core::constants::{META_HERO_COUNT, ROSTER_SIZE};
use counterpick_core::counters::{CounterScorer, Selection};
use counterpick_core::ingest::{ingest_matrix_file, meta_heroes};
use counterpick_core::logging::init_tracing;

/// Slot placeholder for an empty roster position
const EMPTY_SLOT: &str = "-";

#[derive(Parser)]
#[command(name = "counterpick")]
#[command(about = "Draft helper: counters, roster analysis and data ingest", long_about = None)]
struct Cli {
    /// Config file (.ron or .json); falls back to $COUNTERPICK_CONFIG
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Data directory holding heroes.json, counters.json and items.json
    #[arg(long, global = true)]
    data: Option<PathBuf>,

    /// Print JSON instead of text
    #[arg(long, global = true, default_value = "false")]
    json: bool,

    /// Raise log verbosity (-v debug, -vv trace)
    #[arg(short, long, global = true, action = ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Recommend counter heroes and items against enemy picks
    Counters {
        /// Enemy hero keys (up to five)
        #[arg(required = true)]
        heroes: Vec<String>,
    },

    /// Analyze one roster; use "-" for an empty slot
    Analyze {
        #[arg(required = true)]
        slots: Vec<String>,
    },

    /// Show a hero with resolved matchups and derived stats
    Hero { key: String },

    /// Most-picked heroes
    Meta {
        #[arg(long, default_value_t = META_HERO_COUNT)]
        count: usize,
    },

    /// Rebuild counters.json from an advantage matrix
    Ingest {
        /// Matrix JSON with `heronames` and `adv_rates`
        #[arg(long)]
        matrix: PathBuf,

        /// Overlay to update; curated items and reasons are kept
        #[arg(long)]
        out: PathBuf,
    },
}

fn load_config(cli: &Cli) -> Result<AppConfig> {
    let mut config = match &cli.config {
        Some(path) => AppConfig::from_file(path)?,
        None => AppConfig::from_env()?,
    };
    if let Some(dir) = &cli.data {
        config.data.dir = dir.clone();
    }
    Ok(config)
}

fn open_catalog(config: &AppConfig) -> Result<Catalog> {
    let data = &config.data;
    load_catalog(&data.heroes_path(), &data.counters_path(), &data.items_path())
        .with_context(|| format!("loading catalog from {}", data.dir.display()))
}

fn print_json<T: serde::Serialize>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

fn run_counters(catalog: &Catalog, config: &AppConfig, keys: &[String], json: bool) -> Result<()> {
    let selection = Selection::from_keys(catalog, keys)?;
    let scorer = CounterScorer::with_limits(catalog, config.scoring);
    let report = scorer.report(selection.heroes());

    if json {
        return print_json(&report);
    }
    println!("Against: {}", selection.keys().join(", "));
    println!("\nCounter heroes:");
    for (rank, r) in report.heroes.iter().enumerate() {
        println!("  {:>2}. {:<24} {:>3}  {}", rank + 1, r.hero.name, r.score, r.reasons.join("; "));
    }
    println!("\nCounter items:");
    for (rank, r) in report.items.iter().enumerate() {
        println!("  {:>2}. {:<24} {:>3}", rank + 1, r.item.name, r.score);
    }
    println!("\nThis lineup is weak against:");
    for w in &report.team_weaknesses {
        println!("      {:<24} {:>3}", w.hero.name, w.score);
    }
    Ok(())
}

fn run_analyze(catalog: &Catalog, slots: &[String], json: bool) -> Result<()> {
    if slots.len() > ROSTER_SIZE {
        bail!("a roster has {} slots, got {}", ROSTER_SIZE, slots.len());
    }
    for key in slots.iter().filter(|s| s.as_str() != EMPTY_SLOT) {
        if catalog.hero(key).is_none() {
            bail!("unknown hero '{key}'");
        }
    }
    let keys: Vec<Option<&str>> = slots
        .iter()
        .map(|s| (s != EMPTY_SLOT).then_some(s.as_str()))
        .collect();
    let roster = Roster::from_keys(catalog, &keys);
    print!("{}", render_analysis(analyze_roster(&roster).as_ref(), json)?);
    Ok(())
}

/// Text or JSON for one roster analysis. An empty roster renders as `null`
/// in JSON mode.
fn render_analysis(analysis: Option<&RosterAnalysis>, json: bool) -> Result<String> {
    if json {
        return Ok(format!("{}\n", serde_json::to_string_pretty(&analysis)?));
    }
    let Some(analysis) = analysis else {
        return Ok("Roster is empty\n".to_string());
    };
    let mut out = String::new();
    writeln!(out, "Filled: {}/{}", analysis.filled, ROSTER_SIZE)?;
    let roles: Vec<String> = analysis
        .role_counts
        .iter()
        .map(|rc| format!("{} x{}", rc.role, rc.count))
        .collect();
    writeln!(out, "Roles: {}", roles.join(", "))?;
    let a = analysis.attr_counts;
    writeln!(out, "Attributes: str {} / agi {} / int {}", a.str, a.agi, a.int)?;
    writeln!(out, "Melee {} / Ranged {}", analysis.melee_count, analysis.ranged_count)?;
    writeln!(out, "Strengths: {}", analysis.strength_labels().join(", "))?;
    writeln!(out, "Weaknesses: {}", analysis.weakness_labels().join(", "))?;
    Ok(out)
}

fn run_hero(catalog: &Catalog, key: &str, json: bool) -> Result<()> {
    let Some(profile) = catalog.hero_profile(key) else {
        bail!("unknown hero '{key}'");
    };
    if json {
        return print_json(&profile);
    }
    let hero = profile.hero;
    let names = |heroes: &[&counterpick_core::Hero]| {
        heroes.iter().map(|h| h.name.as_str()).collect::<Vec<_>>().join(", ")
    };
    println!("{} ({}, {})", hero.name, hero.primary_attr.display_name(), hero.attack_type.as_str());
    println!("Roles: {}", hero.roles.join(", "));
    let d = profile.derived;
    println!(
        "Health {:.0}  Mana {:.0}  Armor {:.1}  Speed {:.0}",
        d.health, d.mana, d.armor, d.move_speed
    );
    println!("Strong against: {}", names(&profile.strong_against));
    println!("Weak against:   {}", names(&profile.weak_against));
    let items: Vec<&str> = profile.counter_items.iter().map(|i| i.name.as_str()).collect();
    println!("Counter items:  {}", items.join(", "));
    Ok(())
}

fn run_meta(catalog: &Catalog, count: usize, json: bool) -> Result<()> {
    let meta = meta_heroes(catalog, count);
    if json {
        return print_json(&meta);
    }
    for (rank, m) in meta.iter().enumerate() {
        let winrate = m
            .winrate
            .map(|w| format!("{:.1}%", w * 100.0))
            .unwrap_or_else(|| "n/a".into());
        println!("  {:>2}. {:<24} {:>8} picks  {}", rank + 1, m.name, m.total_picks, winrate);
    }
    Ok(())
}

fn run_ingest(matrix: &Path, out: &Path) -> Result<()> {
    let doc = ingest_matrix_file(matrix, out)?;
    println!("Generated counters for {} heroes -> {}", doc.hero_counters.len(), out.display());
    Ok(())
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let config = load_config(&cli)?;

    let logging = config
        .logging
        .clone()
        .with_level(config.logging.default_level.raised_by(cli.verbose));
    init_tracing(&logging);

    if let Commands::Ingest { matrix, out } = &cli.command {
        return run_ingest(matrix, out);
    }

    let catalog = open_catalog(&config)?;
    info!(heroes = catalog.hero_count(), items = catalog.item_count(), "catalog ready");

    match &cli.command {
        Commands::Counters { heroes } => run_counters(&catalog, &config, heroes, cli.json),
        Commands::Analyze { slots } => run_analyze(&catalog, slots, cli.json),
        Commands::Hero { key } => run_hero(&catalog, key, cli.json),
        Commands::Meta { count } => run_meta(&catalog, *count, cli.json),
        Commands::Ingest { .. } => Ok(()),
    }
}
