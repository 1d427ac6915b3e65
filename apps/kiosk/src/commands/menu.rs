//! # Menu Commands
//!
//! Menu browsing: the category navigation and the item cards.
//!
//! ## User Workflow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  [ All ] [ 🧋 Milktea ] [ 🍓 Fruit Tea ] [ 🍟 Snacks ]                   │
//! │                                                                         │
//! │  ┌──────────────────────┐  ┌──────────────────────┐                     │
//! │  │ SALE         20% OFF │  │          UNAVAILABLE │                     │
//! │  │ Okinawa Milktea      │  │ Hong Kong Waffle     │                     │
//! │  │ ₱120.00  ₱150.00     │  │ ₱110.00              │                     │
//! │  │ Save ₱30.00          │  │                      │                     │
//! │  │          [Customize] │  │        [Unavailable] │                     │
//! │  └──────────────────────┘  └──────────────────────┘                     │
//! │                                                                         │
//! │  invoke {"cmd":"get_menu","category":"milktea"}                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use serde::{Deserialize, Serialize};
use summer_core::menu::category_label;
use summer_core::{AddOn, Category, CategoryFilter, MenuItem, Money, VariationKind};
use tracing::debug;

use crate::state::{CartState, CatalogState, ConfigState};

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GetMenuRequest {
    /// Category id, or `all`. Missing means `all`.
    #[serde(default)]
    pub category: Option<String>,
}

/// Add-ons of one category inside the customize modal.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AddOnGroup {
    pub category: String,
    pub label: String,
    pub add_ons: Vec<AddOn>,
}

/// One menu card with everything the frontend derives from the item.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MenuCard {
    #[serde(flatten)]
    pub item: MenuItem,
    pub effective_price: Money,
    pub formatted_price: String,
    pub discount_percent: Option<i64>,
    pub savings: Option<Money>,
    pub action_label: &'static str,
    pub variation_kind: Option<VariationKind>,
    pub default_variation_id: Option<String>,
    pub add_on_groups: Vec<AddOnGroup>,
    /// Units of this item across all cart lines (drives the +/- stepper).
    pub quantity_in_cart: i64,
}

impl MenuCard {
    fn new(item: &MenuItem, quantity_in_cart: i64, config: &ConfigState) -> Self {
        let action_label = if !item.available {
            "Unavailable"
        } else if item.needs_customization() {
            "Customize"
        } else {
            "Add to Cart"
        };

        let add_on_groups = item
            .add_ons_by_category()
            .into_iter()
            .map(|(category, add_ons)| AddOnGroup {
                category: category.to_string(),
                label: category_label(category),
                add_ons: add_ons.into_iter().cloned().collect(),
            })
            .collect();

        MenuCard {
            effective_price: item.effective_price(),
            formatted_price: config.format_money(item.effective_price()),
            discount_percent: item.discount_percent(),
            savings: item.savings(),
            action_label,
            variation_kind: (!item.variations.is_empty()).then(|| item.variation_kind()),
            default_variation_id: item.default_variation().map(|v| v.id.clone()),
            add_on_groups,
            quantity_in_cart,
            item: item.clone(),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MenuResponse {
    pub categories: Vec<Category>,
    pub selected_category: String,
    pub items: Vec<MenuCard>,
}

/// Lists the menu cards of one category.
pub fn get_menu(
    request: GetMenuRequest,
    catalog: &CatalogState,
    cart: &CartState,
    config: &ConfigState,
) -> MenuResponse {
    let selected = request
        .category
        .unwrap_or_else(|| summer_core::ALL_CATEGORIES.to_string());
    debug!(category = %selected, "get_menu command");

    let filter = CategoryFilter::from_id(&selected);
    let catalog = catalog.catalog();

    let items: Vec<MenuCard> = cart.with_cart(|cart| {
        filter
            .filter_items(&catalog.items)
            .into_iter()
            .map(|item| MenuCard::new(item, cart.quantity_of_item(&item.id), config))
            .collect()
    });

    MenuResponse {
        categories: catalog.categories.clone(),
        selected_category: selected,
        items,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::ToastQueue;

    fn fixtures() -> (CatalogState, CartState, ConfigState) {
        let config = ConfigState::default();
        let catalog = CatalogState::load(&config).unwrap();
        (catalog, CartState::new(ToastQueue::new(3000)), config)
    }

    fn card<'a>(menu: &'a MenuResponse, id: &str) -> &'a MenuCard {
        menu.items.iter().find(|c| c.item.id == id).unwrap()
    }

    #[test]
    fn test_all_categories() {
        let (catalog, cart, config) = fixtures();
        let menu = get_menu(GetMenuRequest::default(), &catalog, &cart, &config);

        assert_eq!(menu.selected_category, "all");
        assert_eq!(menu.items.len(), catalog.catalog().items.len());
        assert_eq!(menu.categories.len(), 3);
    }

    #[test]
    fn test_filter_by_category() {
        let (catalog, cart, config) = fixtures();
        let request = GetMenuRequest {
            category: Some("snacks".to_string()),
        };
        let menu = get_menu(request, &catalog, &cart, &config);

        assert!(menu.items.iter().all(|c| c.item.category == "snacks"));
        assert_eq!(card(&menu, "fries").action_label, "Add to Cart");
        assert_eq!(card(&menu, "waffle").action_label, "Unavailable");
    }

    #[test]
    fn test_card_derivations() {
        let (catalog, cart, config) = fixtures();
        let menu = get_menu(GetMenuRequest::default(), &catalog, &cart, &config);

        let okinawa = card(&menu, "okinawa");
        assert_eq!(okinawa.discount_percent, Some(20));
        assert_eq!(okinawa.savings, Some(Money::from_major(30)));
        assert_eq!(okinawa.formatted_price, "₱120.00");
        assert_eq!(okinawa.variation_kind, Some(VariationKind::Sizes));

        let fruit = card(&menu, "mango-tea");
        assert_eq!(fruit.variation_kind, Some(VariationKind::Flavors));
        assert_eq!(fruit.default_variation_id.as_deref(), Some("mango"));
        assert_eq!(fruit.add_on_groups[1].label, "Cream toppings");

        let fries = card(&menu, "fries");
        assert_eq!(fries.variation_kind, None);
        assert!(fries.add_on_groups.is_empty());
    }

    #[test]
    fn test_quantity_in_cart() {
        let (catalog, cart, config) = fixtures();
        let fries = catalog.item("fries").unwrap().clone();
        cart.with_cart_mut(|c| c.add_to_cart(&fries, 3, None, &[]))
            .unwrap();

        let menu = get_menu(GetMenuRequest::default(), &catalog, &cart, &config);
        assert_eq!(card(&menu, "fries").quantity_in_cart, 3);
        assert_eq!(card(&menu, "okinawa").quantity_in_cart, 0);
    }
}
