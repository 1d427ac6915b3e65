//! # Menu Types
//!
//! Menu data as supplied by the menu collaborator. These values are treated
//! as immutable, trusted inputs: the cart never rewrites them, it snapshots
//! what it needs.
//!
//! ## Type Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                          Menu Types                                     │
//! │                                                                         │
//! │  ┌─────────────────────┐        ┌─────────────────┐                    │
//! │  │      MenuItem       │───────►│   Variation     │  (0..n, ordered)   │
//! │  │  ─────────────────  │        │  id, name       │                    │
//! │  │  id, name           │        │  price_cents Δ  │                    │
//! │  │  base_price_cents   │        └─────────────────┘                    │
//! │  │  discount_price_... │        ┌─────────────────┐                    │
//! │  │  is_on_discount     │───────►│     AddOn       │  (0..n)            │
//! │  │  available          │        │  id, name       │                    │
//! │  │  category           │        │  category       │                    │
//! │  └─────────────────────┘        │  price_cents    │                    │
//! │                                 └─────────────────┘                    │
//! │  ┌─────────────────────┐        ┌─────────────────┐                    │
//! │  │     Category        │        │  SelectedAddOn  │                    │
//! │  │  id, name, icon     │        │  AddOn × qty≥1  │                    │
//! │  └─────────────────────┘        └─────────────────┘                    │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::money::Money;

// =============================================================================
// Variation
// =============================================================================

/// A size or flavor option of a menu item.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct Variation {
    pub id: String,
    pub name: String,
    /// Added to the item's effective base price. Usually zero or positive.
    pub price_cents: i64,
}

impl Variation {
    pub fn new(id: impl Into<String>, name: impl Into<String>, price: Money) -> Self {
        Variation {
            id: id.into(),
            name: name.into(),
            price_cents: price.cents(),
        }
    }

    #[inline]
    pub fn price(&self) -> Money {
        Money::from_cents(self.price_cents)
    }
}

// =============================================================================
// Add-On
// =============================================================================

/// An extra that can be added to an item any number of times.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct AddOn {
    pub id: String,
    pub name: String,
    /// Grouping key for display ("sinkers", "cream-toppings", ...).
    pub category: String,
    /// Unit price of one portion.
    pub price_cents: i64,
}

impl AddOn {
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        category: impl Into<String>,
        price: Money,
    ) -> Self {
        AddOn {
            id: id.into(),
            name: name.into(),
            category: category.into(),
            price_cents: price.cents(),
        }
    }

    #[inline]
    pub fn price(&self) -> Money {
        Money::from_cents(self.price_cents)
    }

    /// Whether the add-on is offered at no charge ("Free").
    #[inline]
    pub fn is_free(&self) -> bool {
        self.price_cents <= 0
    }
}

/// An add-on together with how many portions were picked.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct SelectedAddOn {
    pub add_on: AddOn,
    /// Always >= 1 for an entry that is present.
    pub quantity: u32,
}

impl SelectedAddOn {
    pub fn new(add_on: AddOn, quantity: u32) -> Self {
        SelectedAddOn { add_on, quantity }
    }

    /// Price of all portions of this add-on.
    #[inline]
    pub fn subtotal(&self) -> Money {
        self.add_on.price() * self.quantity
    }
}

// =============================================================================
// Menu Item
// =============================================================================

/// A product on the menu.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct MenuItem {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub description: String,
    /// Regular price in centavos.
    pub base_price_cents: i64,
    /// Sale price, used only while `is_on_discount` is set.
    #[serde(default)]
    pub discount_price_cents: Option<i64>,
    #[serde(default)]
    pub is_on_discount: bool,
    #[serde(default = "default_available")]
    pub available: bool,
    #[serde(default)]
    pub image: Option<String>,
    /// Id of the menu category this item is listed under.
    #[serde(default)]
    pub category: String,
    #[serde(default)]
    pub variations: Vec<Variation>,
    #[serde(default)]
    pub add_ons: Vec<AddOn>,
}

fn default_available() -> bool {
    true
}

impl MenuItem {
    /// Creates an available item with no discount, variations or add-ons.
    pub fn new(id: impl Into<String>, name: impl Into<String>, base_price: Money) -> Self {
        MenuItem {
            id: id.into(),
            name: name.into(),
            description: String::new(),
            base_price_cents: base_price.cents(),
            discount_price_cents: None,
            is_on_discount: false,
            available: true,
            image: None,
            category: String::new(),
            variations: Vec::new(),
            add_ons: Vec::new(),
        }
    }

    /// Puts the item on sale at `price`.
    pub fn with_discount(mut self, price: Money) -> Self {
        self.discount_price_cents = Some(price.cents());
        self.is_on_discount = true;
        self
    }

    pub fn with_variation(mut self, variation: Variation) -> Self {
        self.variations.push(variation);
        self
    }

    pub fn with_add_on(mut self, add_on: AddOn) -> Self {
        self.add_ons.push(add_on);
        self
    }

    pub fn in_category(mut self, category: impl Into<String>) -> Self {
        self.category = category.into();
        self
    }

    #[inline]
    pub fn base_price(&self) -> Money {
        Money::from_cents(self.base_price_cents)
    }

    #[inline]
    pub fn discount_price(&self) -> Option<Money> {
        self.discount_price_cents.map(Money::from_cents)
    }

    /// Looks up one of the item's variations by id.
    pub fn variation(&self, id: &str) -> Option<&Variation> {
        self.variations.iter().find(|v| v.id == id)
    }

    /// Looks up one of the item's add-ons by id.
    pub fn add_on(&self, id: &str) -> Option<&AddOn> {
        self.add_ons.iter().find(|a| a.id == id)
    }
}

// =============================================================================
// Category & Catalog
// =============================================================================

/// A menu category shown in the sub navigation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct Category {
    pub id: String,
    pub name: String,
    /// Emoji shown before the name.
    #[serde(default)]
    pub icon: String,
}

/// Everything the menu collaborator supplies: categories and items.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct Catalog {
    #[serde(default)]
    pub categories: Vec<Category>,
    #[serde(default)]
    pub items: Vec<MenuItem>,
}

impl Catalog {
    /// Looks up a menu item by id.
    pub fn item(&self, id: &str) -> Option<&MenuItem> {
        self.items.iter().find(|i| i.id == id)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
