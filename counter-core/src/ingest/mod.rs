//! Offline data ingest
//!
//! Rebuilds the counter overlay from a pairwise advantage matrix and ranks
//! meta heroes from pick counts. Nothing here touches the network; the
//! matrix is read from disk.
//!
//! Matrix layout: `adv_rates[i][j] = [adv_normal, adv_pro, synergy]`, hero
//! i's advantage over hero j, `null` where no data exists. Names come from
//! `heronames` in the same order.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fs;
use std::path::Path;
use tracing::{debug, info, warn};

use crate::catalog::{Catalog, CounterDocument, CounterEntry, CounterReason};
use crate::constants::{COUNTER_LIST_DEPTH, META_HERO_COUNT};

/// Upstream display names whose slug differs from our keys
const SLUG_OVERRIDES: &[(&str, &str)] = &[
    ("Natures Prophet", "nature_s_prophet"),
    ("Outworld Devourer", "outworld_destroyer"),
];

#[derive(Debug, thiserror::Error)]
pub enum IngestError {
    #[error("IO error on {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("JSON error in {path}: {source}")]
    Json {
        path: String,
        #[source]
        source: serde_json::Error,
    },
    #[error("matrix has {rows} rows for {names} hero names")]
    MatrixShape { rows: usize, names: usize },
}

/// Hero key for an upstream display name
pub fn slugify(name: &str) -> String {
    if let Some((_, slug)) = SLUG_OVERRIDES.iter().find(|(n, _)| *n == name) {
        return (*slug).to_string();
    }

    let mut slug = String::with_capacity(name.len());
    let mut pending_sep = false;
    for c in name.chars().flat_map(char::to_lowercase) {
        if c == '\'' {
            continue;
        }
        if c.is_ascii_alphanumeric() {
            if pending_sep && !slug.is_empty() {
                slug.push('_');
            }
            pending_sep = false;
            slug.push(c);
        } else {
            pending_sep = true;
        }
    }
    slug
}

/// `[adv_normal, adv_pro, synergy]` for one ordered pair
pub type Matchup = [f64; 3];

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AdvantageMatrix {
    #[serde(rename = "heronames", default)]
    pub hero_names: Vec<String>,
    #[serde(default)]
    pub adv_rates: Vec<Vec<Option<Matchup>>>,
}

impl AdvantageMatrix {
    pub fn len(&self) -> usize {
        self.hero_names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.hero_names.is_empty()
    }

    fn check_shape(&self) -> Result<(), IngestError> {
        if self.adv_rates.len() != self.hero_names.len() {
            return Err(IngestError::MatrixShape {
                rows: self.adv_rates.len(),
                names: self.hero_names.len(),
            });
        }
        Ok(())
    }

    /// Off-diagonal normal-bracket advantages of hero `i`, column order
    fn row_advantages(&self, i: usize) -> Vec<(String, f64)> {
        let Some(row) = self.adv_rates.get(i) else {
            return Vec::new();
        };
        self.hero_names
            .iter()
            .enumerate()
            .filter(|(j, _)| *j != i)
            .filter_map(|(j, name)| {
                row.get(j)
                    .copied()
                    .flatten()
                    .map(|m| (slugify(name), m[0]))
            })
            .collect()
    }

    /// (strong_against, weak_against) for hero `i`, strongest first
    pub fn matchups_for(&self, i: usize, top_n: usize) -> (Vec<String>, Vec<String>) {
        let scores = self.row_advantages(i);

        let mut strong: Vec<&(String, f64)> = scores.iter().filter(|(_, adv)| *adv > 0.0).collect();
        strong.sort_by(|a, b| b.1.total_cmp(&a.1));

        let mut weak: Vec<&(String, f64)> = scores.iter().filter(|(_, adv)| *adv < 0.0).collect();
        weak.sort_by(|a, b| a.1.total_cmp(&b.1));

        let keys = |list: Vec<&(String, f64)>| -> Vec<String> {
            list.into_iter().take(top_n).map(|(k, _)| k.clone()).collect()
        };
        (keys(strong), keys(weak))
    }
}

/// Rebuild the overlay. Hand-curated counter items and reasons from
/// `existing` survive; the two hero lists are always regenerated.
pub fn build_counter_document(
    matrix: &AdvantageMatrix,
    existing: &CounterDocument,
    top_n: usize,
) -> Result<CounterDocument, IngestError> {
    matrix.check_shape()?;

    let mut hero_counters = BTreeMap::new();
    for (i, name) in matrix.hero_names.iter().enumerate() {
        let key = slugify(name);
        let previous = existing.hero_counters.get(&key);
        let (strong, weak) = matrix.matchups_for(i, top_n);

        let entry = CounterEntry {
            strong_against: Some(strong),
            weak_against: Some(weak),
            counter_items: Some(
                previous
                    .and_then(|p| p.counter_items.clone())
                    .unwrap_or_default(),
            ),
            reason: Some(
                previous
                    .and_then(|p| p.reason.clone())
                    .unwrap_or_else(CounterReason::default),
            ),
        };
        if hero_counters.insert(key.clone(), entry).is_some() {
            warn!(key = %key, "two matrix names map to the same key, keeping the later row");
        }
    }
    debug!(heroes = hero_counters.len(), "counter overlay rebuilt");
    Ok(CounterDocument { hero_counters })
}

pub fn load_matrix(path: &Path) -> Result<AdvantageMatrix, IngestError> {
    let display = path.display().to_string();
    let content = fs::read_to_string(path).map_err(|source| IngestError::Io {
        path: display.clone(),
        source,
    })?;
    serde_json::from_str(&content).map_err(|source| IngestError::Json {
        path: display,
        source,
    })
}

/// Read the matrix, merge with the overlay already at `out` (if any) and
/// write the result back to `out` as pretty JSON.
pub fn ingest_matrix_file(matrix_path: &Path, out: &Path) -> Result<CounterDocument, IngestError> {
    let matrix = load_matrix(matrix_path)?;
    let out_display = out.display().to_string();

    let existing: CounterDocument = if out.exists() {
        let content = fs::read_to_string(out).map_err(|source| IngestError::Io {
            path: out_display.clone(),
            source,
        })?;
        serde_json::from_str(&content).map_err(|source| IngestError::Json {
            path: out_display.clone(),
            source,
        })?
    } else {
        CounterDocument::default()
    };
    debug!(existing = existing.hero_counters.len(), "existing overlay read");

    let doc = build_counter_document(&matrix, &existing, COUNTER_LIST_DEPTH)?;
    let json = serde_json::to_string_pretty(&doc).map_err(|source| IngestError::Json {
        path: out_display.clone(),
        source,
    })?;
    fs::write(out, json).map_err(|source| IngestError::Io {
        path: out_display.clone(),
        source,
    })?;
    info!(heroes = doc.hero_counters.len(), out = %out_display, "counter overlay written");
    Ok(doc)
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MetaHero {
    pub key: String,
    pub name: String,
    pub total_picks: u64,
    pub winrate: Option<f64>,
}

/// Most-picked heroes, descending. Heroes without pick data are skipped.
pub fn meta_heroes(catalog: &Catalog, n: usize) -> Vec<MetaHero> {
    let mut picked: Vec<MetaHero> = catalog
        .heroes()
        .iter()
        .filter_map(|h| {
            h.total_picks.map(|total_picks| MetaHero {
                key: h.key.clone(),
                name: h.name.clone(),
                total_picks,
                winrate: h.winrate,
            })
        })
        .collect();
    picked.sort_by_key(|m| std::cmp::Reverse(m.total_picks));
    picked.truncate(n);
    picked
}

pub fn default_meta_heroes(catalog: &Catalog) -> Vec<MetaHero> {
    meta_heroes(catalog, META_HERO_COUNT)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{AttackType, Hero, PrimaryAttr};

    fn matrix(names: &[&str], rows: Vec<Vec<Option<Matchup>>>) -> AdvantageMatrix {
        AdvantageMatrix {
            hero_names: names.iter().map(|s| s.to_string()).collect(),
            adv_rates: rows,
        }
    }

    fn adv(v: f64) -> Option<Matchup> {
        Some([v, 0.0, 0.0])
    }

    #[test]
    fn test_slugify() {
        assert_eq!(slugify("Anti-Mage"), "anti_mage");
        assert_eq!(slugify("Queen of Pain"), "queen_of_pain");
        assert_eq!(slugify("Nature's Prophet"), "natures_prophet");
        assert_eq!(slugify("Natures Prophet"), "nature_s_prophet");
        assert_eq!(slugify("Outworld Devourer"), "outworld_destroyer");
        assert_eq!(slugify("  Keeper of the Light!! "), "keeper_of_the_light");
        assert_eq!(slugify("Io"), "io");
    }

    #[test]
    fn test_matchups_sorted_and_diagonal_skipped() {
        let m = matrix(
            &["A", "B", "C", "D"],
            vec![
                vec![adv(99.0), adv(1.5), adv(-2.0), adv(3.0)],
                vec![adv(-1.5), None, None, None],
                vec![adv(2.0), None, None, None],
                vec![adv(-3.0), None, None, None],
            ],
        );
        let (strong, weak) = m.matchups_for(0, 6);
        assert_eq!(strong, vec!["d", "b"]);
        assert_eq!(weak, vec!["c"]);

        let (strong, weak) = m.matchups_for(1, 6);
        assert!(strong.is_empty());
        assert_eq!(weak, vec!["a"]);
    }

    #[test]
    fn test_matchups_capped() {
        let names: Vec<String> = (0..10).map(|i| format!("H{i}")).collect();
        let mut first = vec![None];
        first.extend((1..10).map(|j| adv(j as f64)));
        let mut rows = vec![first];
        rows.extend((1..10).map(|_| vec![None; 10]));
        let m = AdvantageMatrix {
            hero_names: names,
            adv_rates: rows,
        };
        let (strong, _) = m.matchups_for(0, 6);
        assert_eq!(strong, vec!["h9", "h8", "h7", "h6", "h5", "h4"]);
    }

    #[test]
    fn test_build_preserves_curated_fields() {
        let m = matrix(&["A", "B"], vec![vec![None, adv(1.0)], vec![adv(-1.0), None]]);
        let mut existing = CounterDocument::default();
        existing.hero_counters.insert(
            "a".into(),
            CounterEntry {
                strong_against: Some(vec!["stale".into()]),
                counter_items: Some(vec!["blink".into()]),
                reason: Some(CounterReason {
                    strong_against: "curated".into(),
                    ..Default::default()
                }),
                ..Default::default()
            },
        );

        let doc = build_counter_document(&m, &existing, 6).unwrap();
        let a = &doc.hero_counters["a"];
        assert_eq!(a.strong_against, Some(vec!["b".to_string()]));
        assert_eq!(a.counter_items, Some(vec!["blink".to_string()]));
        assert_eq!(a.reason.as_ref().unwrap().strong_against, "curated");

        let b = &doc.hero_counters["b"];
        assert_eq!(b.weak_against, Some(vec!["a".to_string()]));
        assert_eq!(b.counter_items, Some(vec![]));
        assert_eq!(b.reason, Some(CounterReason::default()));
    }

    #[test]
    fn test_shape_mismatch() {
        let m = matrix(&["A", "B"], vec![vec![None, adv(1.0)]]);
        let err = build_counter_document(&m, &CounterDocument::default(), 6).unwrap_err();
        assert!(matches!(err, IngestError::MatrixShape { rows: 1, names: 2 }));
    }

    #[test]
    fn test_ingest_matrix_file_writes_overlay() {
        let tmp = tempfile::tempdir().unwrap();
        let matrix_path = tmp.path().join("matrix.json");
        let out = tmp.path().join("counters.json");
        fs::write(
            &matrix_path,
            r#"{"heronames": ["Axe", "Lion"], "adv_rates": [[null, [2.1, 1.0, 0.5]], [[-2.1, -1.0, 0.5], null]]}"#,
        )
        .unwrap();
        fs::write(&out, r#"{"heroCounters": {"axe": {"counterItems": ["blade_mail"]}}}"#).unwrap();

        let doc = ingest_matrix_file(&matrix_path, &out).unwrap();
        assert_eq!(doc.hero_counters["axe"].strong_against, Some(vec!["lion".to_string()]));

        let written: CounterDocument = serde_json::from_str(&fs::read_to_string(&out).unwrap()).unwrap();
        assert_eq!(written, doc);
        assert_eq!(
            written.hero_counters["axe"].counter_items,
            Some(vec!["blade_mail".to_string()])
        );
    }

    #[test]
    fn test_meta_heroes_order_and_cap() {
        let mut heroes = Vec::new();
        for (i, picks) in [(0, Some(50)), (1, None), (2, Some(900)), (3, Some(300))] {
            let mut h = Hero::new(format!("h{i}"), i, format!("H{i}"), PrimaryAttr::Agi, AttackType::Melee);
            h.total_picks = picks;
            h.winrate = Some(0.5);
            heroes.push(h);
        }
        let catalog = Catalog::new(heroes, vec![]);

        let meta = meta_heroes(&catalog, 2);
        let keys: Vec<&str> = meta.iter().map(|m| m.key.as_str()).collect();
        assert_eq!(keys, vec!["h2", "h3"]);
        assert_eq!(meta[0].total_picks, 900);
        assert_eq!(default_meta_heroes(&catalog).len(), 3);
    }
}
