use serde::Serialize;
use std::collections::HashMap;

use crate::constants::COUNTER_LIST_DEPTH;

/// Rank-decayed weight for the entry at `index` of a strongest-first list.
/// Entries at or beyond [`COUNTER_LIST_DEPTH`] are worth nothing.
pub fn rank_weight(index: usize, multiplier: u32) -> u32 {
    if index >= COUNTER_LIST_DEPTH {
        return 0;
    }
    (COUNTER_LIST_DEPTH - index) as u32 * multiplier
}

/// Accumulated score for one candidate key
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CounterScore {
    pub key: String,
    pub score: u32,
    pub reasons: Vec<String>,
}

/// Insertion-ordered score accumulator.
///
/// Buckets remember the order they were first touched; [`ScoreBoard::ranked`]
/// sorts stably so equal scores keep that order.
#[derive(Debug, Default)]
pub struct ScoreBoard {
    entries: Vec<CounterScore>,
    index: HashMap<String, usize>,
}

impl ScoreBoard {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add `points` to `key`, recording `reason` if given
    pub fn add(&mut self, key: &str, points: u32, reason: Option<String>) {
        let idx = match self.index.get(key) {
            Some(&idx) => idx,
            None => {
                let idx = self.entries.len();
                self.entries.push(CounterScore {
                    key: key.to_string(),
                    score: 0,
                    reasons: Vec::new(),
                });
                self.index.insert(key.to_string(), idx);
                idx
            }
        };
        let entry = &mut self.entries[idx];
        entry.score += points;
        if let Some(reason) = reason {
            entry.reasons.push(reason);
        }
    }

    /// Accumulate a strongest-first key list with rank decay
    pub fn add_ranked<S, F>(&mut self, keys: &[S], multiplier: u32, mut reason: F)
    where
        S: AsRef<str>,
        F: FnMut() -> Option<String>,
    {
        for (i, key) in keys.iter().enumerate().take(COUNTER_LIST_DEPTH) {
            self.add(key.as_ref(), rank_weight(i, multiplier), reason());
        }
    }

    pub fn get(&self, key: &str) -> Option<&CounterScore> {
        self.index.get(key).map(|&idx| &self.entries[idx])
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// All buckets, highest score first, ties in first-touched order
    pub fn ranked(self) -> Vec<CounterScore> {
        let mut entries = self.entries;
        entries.sort_by_key(|e| std::cmp::Reverse(e.score));
        entries
    }
}
