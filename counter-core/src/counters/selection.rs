use crate::catalog::{Catalog, Hero};
use crate::constants::MAX_SELECTION;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SelectionError {
    #[error("selection is full ({0} heroes)")]
    Full(usize),
    #[error("hero '{0}' is already selected")]
    Duplicate(String),
    #[error("unknown hero '{0}'")]
    UnknownHero(String),
}

/// Ordered, duplicate-free list of opposing heroes
#[derive(Debug, Clone)]
pub struct Selection<'a> {
    heroes: Vec<&'a Hero>,
    capacity: usize,
}

impl Default for Selection<'_> {
    fn default() -> Self {
        Self::new()
    }
}

impl<'a> Selection<'a> {
    pub fn new() -> Self {
        Self::with_capacity(MAX_SELECTION)
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            heroes: Vec::with_capacity(capacity),
            capacity,
        }
    }

    /// Resolve and add every key, failing on the first bad one
    pub fn from_keys<S: AsRef<str>>(catalog: &'a Catalog, keys: &[S]) -> Result<Self, SelectionError> {
        let mut selection = Self::new();
        for key in keys {
            selection.add_key(catalog, key.as_ref())?;
        }
        Ok(selection)
    }

    pub fn add(&mut self, hero: &'a Hero) -> Result<(), SelectionError> {
        if self.contains(&hero.key) {
            return Err(SelectionError::Duplicate(hero.key.clone()));
        }
        if self.is_full() {
            return Err(SelectionError::Full(self.capacity));
        }
        self.heroes.push(hero);
        Ok(())
    }

    pub fn add_key(&mut self, catalog: &'a Catalog, key: &str) -> Result<(), SelectionError> {
        let hero = catalog
            .hero(key)
            .ok_or_else(|| SelectionError::UnknownHero(key.to_string()))?;
        self.add(hero)
    }

    /// Remove by key; returns whether anything was removed
    pub fn remove(&mut self, key: &str) -> bool {
        let before = self.heroes.len();
        self.heroes.retain(|h| h.key != key);
        self.heroes.len() != before
    }

    pub fn clear(&mut self) {
        self.heroes.clear();
    }

    pub fn contains(&self, key: &str) -> bool {
        self.heroes.iter().any(|h| h.key == key)
    }

    pub fn heroes(&self) -> &[&'a Hero] {
        &self.heroes
    }

    pub fn keys(&self) -> Vec<&str> {
        self.heroes.iter().map(|h| h.key.as_str()).collect()
    }

    pub fn len(&self) -> usize {
        self.heroes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.heroes.is_empty()
    }

    pub fn is_full(&self) -> bool {
        self.heroes.len() >= self.capacity
    }
}
