use serde::{Deserialize, Serialize};

use super::{Catalog, Hero, Item, ItemCategory, PrimaryAttr};

/// Hero browsing filter. Empty filter matches every hero.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct HeroFilter {
    /// Case-insensitive substring of the hero name
    pub search: String,
    /// `None` matches any attribute
    pub attribute: Option<PrimaryAttr>,
    /// `None` matches any role
    pub role: Option<String>,
}

impl HeroFilter {
    pub fn matches(&self, hero: &Hero) -> bool {
        let matches_search = self.search.is_empty()
            || hero
                .name
                .to_lowercase()
                .contains(&self.search.to_lowercase());
        let matches_attr = self.attribute.map_or(true, |a| hero.primary_attr == a);
        let matches_role = self.role.as_deref().map_or(true, |r| hero.has_role(r));
        matches_search && matches_attr && matches_role
    }
}

/// Item browsing filter. Empty filter matches every item.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ItemFilter {
    pub search: String,
    pub category: Option<ItemCategory>,
}

impl ItemFilter {
    pub fn matches(&self, item: &Item) -> bool {
        let matches_search = self.search.is_empty()
            || item
                .name
                .to_lowercase()
                .contains(&self.search.to_lowercase());
        let matches_category = self.category.map_or(true, |c| item.category == c);
        matches_search && matches_category
    }
}

impl Catalog {
    pub fn find_heroes(&self, filter: &HeroFilter) -> Vec<&Hero> {
        self.heroes().iter().filter(|h| filter.matches(h)).collect()
    }

    pub fn find_items(&self, filter: &ItemFilter) -> Vec<&Item> {
        self.items().iter().filter(|i| filter.matches(i)).collect()
    }

    /// Heroes matching `filter` that are not already in `taken`
    pub fn available_heroes<S: AsRef<str>>(&self, filter: &HeroFilter, taken: &[S]) -> Vec<&Hero> {
        self.heroes()
            .iter()
            .filter(|h| !taken.iter().any(|t| t.as_ref() == h.key))
            .filter(|h| filter.matches(h))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::AttackType;

    fn catalog() -> Catalog {
        Catalog::new(
            vec![
                Hero::new("axe", 2, "Axe", PrimaryAttr::Str, AttackType::Melee)
                    .with_roles(["Initiator", "Durable"]),
                Hero::new("anti_mage", 1, "Anti-Mage", PrimaryAttr::Agi, AttackType::Melee)
                    .with_roles(["Carry", "Escape"]),
                Hero::new("lion", 26, "Lion", PrimaryAttr::Int, AttackType::Ranged)
                    .with_roles(["Support", "Disabler"]),
                Hero::new("marci", 136, "Marci", PrimaryAttr::All, AttackType::Melee)
                    .with_roles(["Support", "Carry"]),
            ],
            vec![
                Item::new("tango", 44, "Tango", ItemCategory::Consumable),
                Item::new("satanic", 156, "Satanic", ItemCategory::Artifact),
                Item::new("sange", 162, "Sange", ItemCategory::Armor),
            ],
        )
    }

    fn keys(heroes: &[&Hero]) -> Vec<String> {
        heroes.iter().map(|h| h.key.clone()).collect()
    }

    #[test]
    fn test_empty_filter_matches_all() {
        let catalog = catalog();
        assert_eq!(catalog.find_heroes(&HeroFilter::default()).len(), 4);
        assert_eq!(catalog.find_items(&ItemFilter::default()).len(), 3);
    }

    #[test]
    fn test_search_is_case_insensitive() {
        let catalog = catalog();
        let filter = HeroFilter {
            search: "MAGE".into(),
            ..Default::default()
        };
        assert_eq!(keys(&catalog.find_heroes(&filter)), vec!["anti_mage"]);
    }

    #[test]
    fn test_attribute_and_role_filters_combine() {
        let catalog = catalog();
        let filter = HeroFilter {
            attribute: Some(PrimaryAttr::All),
            role: Some("Support".into()),
            ..Default::default()
        };
        assert_eq!(keys(&catalog.find_heroes(&filter)), vec!["marci"]);

        let support = HeroFilter {
            role: Some("Support".into()),
            ..Default::default()
        };
        assert_eq!(keys(&catalog.find_heroes(&support)), vec!["lion", "marci"]);
    }

    #[test]
    fn test_item_category_filter() {
        let catalog = catalog();
        let filter = ItemFilter {
            search: "sa".into(),
            category: None,
        };
        assert_eq!(catalog.find_items(&filter).len(), 2);
        let filter = ItemFilter {
            search: "sa".into(),
            category: Some(ItemCategory::Armor),
        };
        let found = catalog.find_items(&filter);
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].key, "sange");
    }

    #[test]
    fn test_available_heroes_excludes_taken() {
        let catalog = catalog();
        let taken = ["axe", "lion"];
        let available = catalog.available_heroes(&HeroFilter::default(), &taken);
        assert_eq!(keys(&available), vec!["anti_mage", "marci"]);
    }
}
