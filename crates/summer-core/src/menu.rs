//! # Menu Display Derivations
//!
//! Values the menu card, the customize modal and the category navigation
//! compute from menu data: sale badges, the default size, add-on groups.

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::money::Money;
use crate::types::{AddOn, MenuItem, Variation};
use crate::ALL_CATEGORIES;

/// Name fragments that mark a variation list as sizes.
const SIZE_MARKERS: [&str; 4] = ["small", "medium", "large", "oz"];

/// Whether an item's variations are cup sizes or flavors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "lowercase")]
#[ts(export)]
pub enum VariationKind {
    Sizes,
    Flavors,
}

impl VariationKind {
    /// Heading of the variation picker.
    pub fn heading(&self) -> &'static str {
        match self {
            VariationKind::Sizes => "Choose Size",
            VariationKind::Flavors => "Choose Flavor",
        }
    }

    /// Plural noun for the "3 sizes" chip.
    pub fn noun(&self) -> &'static str {
        match self {
            VariationKind::Sizes => "sizes",
            VariationKind::Flavors => "flavors",
        }
    }
}

impl MenuItem {
    /// On discount with a non-zero discount price set.
    ///
    /// A discount price of zero counts as unset.
    pub fn has_discount(&self) -> bool {
        self.is_on_discount && self.discount_price().is_some_and(|p| !p.is_zero())
    }

    /// Price before variation and add-ons: the discount price while on
    /// discount, the base price otherwise.
    pub fn effective_price(&self) -> Money {
        match self.discount_price() {
            Some(discount) if self.has_discount() => discount,
            _ => self.base_price(),
        }
    }

    /// Rounded percent for the "% OFF" badge.
    pub fn discount_percent(&self) -> Option<i64> {
        if !self.has_discount() {
            return None;
        }
        self.effective_price().percent_below(self.base_price())
    }

    /// "Save ₱30.00" amount.
    pub fn savings(&self) -> Option<Money> {
        self.has_discount()
            .then(|| self.base_price() - self.effective_price())
    }

    /// Items with variations or add-ons open the customize modal instead of
    /// going straight to the cart.
    pub fn needs_customization(&self) -> bool {
        !self.variations.is_empty() || !self.add_ons.is_empty()
    }

    /// Preselected variation: the first one priced at zero, else the first.
    pub fn default_variation(&self) -> Option<&Variation> {
        self.variations
            .iter()
            .find(|v| v.price_cents == 0)
            .or_else(|| self.variations.first())
    }

    pub fn variation_kind(&self) -> VariationKind {
        let is_size = self.variations.iter().any(|v| {
            let name = v.name.to_lowercase();
            SIZE_MARKERS.iter().any(|marker| name.contains(marker))
        });
        if is_size {
            VariationKind::Sizes
        } else {
            VariationKind::Flavors
        }
    }

    /// Price shown next to a variation in the picker.
    pub fn price_with(&self, variation: &Variation) -> Money {
        self.effective_price() + variation.price()
    }

    /// Add-ons grouped by category, groups and members in first-seen order.
    pub fn add_ons_by_category(&self) -> Vec<(&str, Vec<&AddOn>)> {
        let mut groups: Vec<(&str, Vec<&AddOn>)> = Vec::new();
        for add_on in &self.add_ons {
            match groups.iter_mut().find(|(c, _)| *c == add_on.category) {
                Some((_, members)) => members.push(add_on),
                None => groups.push((add_on.category.as_str(), vec![add_on])),
            }
        }
        groups
    }
}

/// Display label for an add-on category key: `"cream-toppings"` becomes
/// `"Cream toppings"`.
pub fn category_label(key: &str) -> String {
    let spaced = key.replacen('-', " ", 1);
    let mut chars = spaced.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

// =============================================================================
// Category Filter
// =============================================================================

/// Selected entry of the category navigation.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum CategoryFilter {
    #[default]
    All,
    Id(String),
}

impl CategoryFilter {
    /// Parses a navigation id, where `all` selects everything.
    pub fn from_id(id: &str) -> Self {
        if id == ALL_CATEGORIES {
            CategoryFilter::All
        } else {
            CategoryFilter::Id(id.to_string())
        }
    }

    pub fn matches(&self, item: &MenuItem) -> bool {
        match self {
            CategoryFilter::All => true,
            CategoryFilter::Id(id) => item.category == *id,
        }
    }

    /// Items in the selected category, in menu order.
    pub fn filter_items<'a>(&self, items: &'a [MenuItem]) -> Vec<&'a MenuItem> {
        items.iter().filter(|i| self.matches(i)).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sized_item() -> MenuItem {
        MenuItem::new("classic", "Classic", Money::from_major(100))
            .with_variation(Variation::new("16oz", "16 oz", Money::from_major(10)))
            .with_variation(Variation::new("12oz", "12 oz", Money::zero()))
    }

    #[test]
    fn test_discount_derivations() {
        let item = MenuItem::new("b", "Okinawa", Money::from_major(150))
            .with_discount(Money::from_major(120));

        assert!(item.has_discount());
        assert_eq!(item.effective_price(), Money::from_major(120));
        assert_eq!(item.discount_percent(), Some(20));
        assert_eq!(item.savings(), Some(Money::from_major(30)));
    }

    #[test]
    fn test_no_discount_derivations() {
        let item = MenuItem::new("a", "Classic", Money::from_major(100));
        assert!(!item.has_discount());
        assert_eq!(item.discount_percent(), None);
        assert_eq!(item.savings(), None);
    }

    #[test]
    fn test_zero_discount_price_counts_as_unset() {
        let item = MenuItem::new("b", "Okinawa", Money::from_major(150))
            .with_discount(Money::zero());

        assert!(item.is_on_discount);
        assert!(!item.has_discount());
        assert_eq!(item.effective_price(), Money::from_major(150));
        assert_eq!(item.discount_percent(), None);
        assert_eq!(item.savings(), None);
    }

    #[test]
    fn test_default_variation_prefers_zero_price() {
        let item = sized_item();
        assert_eq!(item.default_variation().unwrap().id, "12oz");

        let no_zero = MenuItem::new("x", "X", Money::from_major(100))
            .with_variation(Variation::new("m", "Mango", Money::from_major(5)))
            .with_variation(Variation::new("s", "Strawberry", Money::from_major(8)));
        assert_eq!(no_zero.default_variation().unwrap().id, "m");

        assert!(MenuItem::new("y", "Y", Money::zero()).default_variation().is_none());
    }

    #[test]
    fn test_variation_kind() {
        assert_eq!(sized_item().variation_kind(), VariationKind::Sizes);
        assert_eq!(sized_item().variation_kind().heading(), "Choose Size");

        let flavors = MenuItem::new("x", "Fruit Tea", Money::from_major(90))
            .with_variation(Variation::new("m", "Mango", Money::zero()));
        assert_eq!(flavors.variation_kind(), VariationKind::Flavors);
        assert_eq!(flavors.variation_kind().noun(), "flavors");

        let large = MenuItem::new("z", "Z", Money::zero())
            .with_variation(Variation::new("l", "LARGE", Money::zero()));
        assert_eq!(large.variation_kind(), VariationKind::Sizes);
    }

    #[test]
    fn test_needs_customization() {
        assert!(sized_item().needs_customization());
        assert!(!MenuItem::new("p", "Plain", Money::from_major(50)).needs_customization());

        let with_add_on = MenuItem::new("p", "Plain", Money::from_major(50)).with_add_on(
            AddOn::new("pearls", "Pearls", "sinkers", Money::from_major(10)),
        );
        assert!(with_add_on.needs_customization());
    }

    #[test]
    fn test_price_with_variation_uses_effective_price() {
        let item = sized_item().with_discount(Money::from_major(80));
        let big = item.variation("16oz").unwrap().clone();
        assert_eq!(item.price_with(&big), Money::from_major(90));
    }

    #[test]
    fn test_add_ons_by_category() {
        let item = MenuItem::new("a", "A", Money::from_major(100))
            .with_add_on(AddOn::new("pearls", "Pearls", "sinkers", Money::from_major(10)))
            .with_add_on(AddOn::new("cheese", "Cheese", "cream-toppings", Money::from_major(25)))
            .with_add_on(AddOn::new("jelly", "Jelly", "sinkers", Money::from_major(15)));

        let groups = item.add_ons_by_category();
        assert_eq!(groups.len(), 2);
        assert_eq!(groups[0].0, "sinkers");
        let ids: Vec<_> = groups[0].1.iter().map(|a| a.id.as_str()).collect();
        assert_eq!(ids, vec!["pearls", "jelly"]);
        assert_eq!(groups[1].0, "cream-toppings");
    }

    #[test]
    fn test_category_label() {
        assert_eq!(category_label("cream-toppings"), "Cream toppings");
        assert_eq!(category_label("sinkers"), "Sinkers");
        assert_eq!(category_label(""), "");
    }

    #[test]
    fn test_category_filter() {
        let items = vec![
            MenuItem::new("a", "A", Money::zero()).in_category("milktea"),
            MenuItem::new("b", "B", Money::zero()).in_category("fruit-tea"),
            MenuItem::new("c", "C", Money::zero()).in_category("milktea"),
        ];

        assert_eq!(CategoryFilter::from_id("all").filter_items(&items).len(), 3);

        let milktea = CategoryFilter::from_id("milktea").filter_items(&items);
        let ids: Vec<_> = milktea.iter().map(|i| i.id.as_str()).collect();
        assert_eq!(ids, vec!["a", "c"]);

        assert!(CategoryFilter::from_id("coffee").filter_items(&items).is_empty());
    }
}
