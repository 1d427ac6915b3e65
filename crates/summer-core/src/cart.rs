//! # Cart
//!
//! In-memory shopping cart: lines keyed by composite identity, derived
//! totals and the open/closed flag of the cart panel.
//!
//! ## Cart Operations Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Cart Store Operations                                │
//! │                                                                         │
//! │  Frontend Action          Store Method             Notice               │
//! │  ───────────────          ────────────             ──────               │
//! │                                                                         │
//! │  Add (new combo) ───────► add_to_cart() ─────────► "X added to cart"    │
//! │  Add (same combo) ──────► add_to_cart() ─────────► "X quantity updated" │
//! │  Stepper +/- ───────────► update_quantity() ─────► "X quantity updated" │
//! │  Stepper to 0 ──────────► update_quantity() ─────► "X removed from cart"│
//! │  Trash icon ────────────► remove_from_cart() ────► "X removed from cart"│
//! │  Clear / checkout ──────► clear_cart() ──────────► "Cart cleared"       │
//! │  Cart icon / close ─────► open_cart()/close_cart()   (no notice)        │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Line Identity
//! Two adds land on the same line iff item id, variation id (or `default`)
//! and the sorted `(add-on id, count)` pairs all match. "Taro, Large, 2×
//! Pearls" and "Taro, Large, 1× Pearls" are different lines.
//!
//! ## Invariants
//! - every line in the cart has quantity >= 1
//! - lines keep insertion order
//! - a line's unit price is fixed when the line is created

use std::fmt;

use serde::{Deserialize, Deserializer, Serialize};
use ts_rs::TS;

use crate::error::{CoreError, CoreResult};
use crate::money::Money;
use crate::notify::{Notifier, Severity};
use crate::pricing::{collapse_add_ons, unit_price};
use crate::types::{AddOn, MenuItem, SelectedAddOn, Variation};
use crate::validation::{validate_add_on_quantity, validate_quantity};
use crate::{DEFAULT_VARIATION_KEY, MAX_ITEM_QUANTITY};

// =============================================================================
// Line Key
// =============================================================================

/// One `(add-on id, count)` pair of a line key.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct AddOnCount {
    pub id: String,
    pub quantity: u32,
}

/// Composite identity of a cart line.
///
/// Keys read from JSON are normalized the same way as keys built with
/// [`LineKey::new`], so the order of `addOns` on the wire does not matter.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct LineKey {
    pub item_id: String,
    /// `None` when the item was added without choosing a variation.
    pub variation_id: Option<String>,
    /// Sorted by id, one entry per id, counts >= 1.
    pub add_ons: Vec<AddOnCount>,
}

impl LineKey {
    /// Derives the key for an item with the given (collapsed) choices.
    ///
    /// ```rust
    /// use summer_core::{LineKey, Money, AddOn, SelectedAddOn};
    ///
    /// let jelly = AddOn::new("jelly", "Jelly", "sinkers", Money::from_major(15));
    /// let pearls = AddOn::new("pearls", "Pearls", "sinkers", Money::from_major(10));
    ///
    /// let a = LineKey::new("taro", None, &[
    ///     SelectedAddOn::new(pearls.clone(), 2),
    ///     SelectedAddOn::new(jelly.clone(), 1),
    /// ]);
    /// let b = LineKey::new("taro", None, &[
    ///     SelectedAddOn::new(jelly, 1),
    ///     SelectedAddOn::new(pearls, 2),
    /// ]);
    /// assert_eq!(a, b);
    /// assert_eq!(a.to_string(), "taro-default-jelly:1,pearls:2");
    /// ```
    pub fn new(item_id: &str, variation: Option<&Variation>, add_ons: &[SelectedAddOn]) -> Self {
        let counts = add_ons
            .iter()
            .map(|a| AddOnCount {
                id: a.add_on.id.clone(),
                quantity: a.quantity,
            })
            .collect();

        LineKey::from_parts(
            item_id.to_string(),
            variation.map(|v| v.id.clone()),
            counts,
        )
    }

    /// Drops zero counts, sorts by id and merges repeated ids.
    fn from_parts(item_id: String, variation_id: Option<String>, mut add_ons: Vec<AddOnCount>) -> Self {
        add_ons.retain(|a| a.quantity > 0);
        add_ons.sort();
        add_ons.dedup_by(|next, kept| {
            if next.id != kept.id {
                return false;
            }
            kept.quantity = kept.quantity.saturating_add(next.quantity);
            true
        });

        LineKey {
            item_id,
            variation_id,
            add_ons,
        }
    }

    /// Key of an item added with no variation and no add-ons.
    pub fn plain(item_id: &str) -> Self {
        LineKey::new(item_id, None, &[])
    }
}

impl<'de> Deserialize<'de> for LineKey {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        #[derive(Deserialize)]
        #[serde(rename_all = "camelCase")]
        struct Raw {
            item_id: String,
            #[serde(default)]
            variation_id: Option<String>,
            #[serde(default)]
            add_ons: Vec<AddOnCount>,
        }

        let raw = Raw::deserialize(deserializer)?;
        Ok(LineKey::from_parts(raw.item_id, raw.variation_id, raw.add_ons))
    }
}

/// Renders the key as `item-variation-addon:count,...` for use as a
/// display id. `default` stands in for no variation, `none` for no add-ons.
impl fmt::Display for LineKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let variation = self.variation_id.as_deref().unwrap_or(DEFAULT_VARIATION_KEY);
        write!(f, "{}-{}-", self.item_id, variation)?;

        if self.add_ons.is_empty() {
            return f.write_str("none");
        }
        for (i, a) in self.add_ons.iter().enumerate() {
            if i > 0 {
                f.write_str(",")?;
            }
            write!(f, "{}:{}", a.id, a.quantity)?;
        }
        Ok(())
    }
}

// =============================================================================
// Cart Line
// =============================================================================

/// A line in the cart.
///
/// Snapshots the item fields the cart panel shows, so later menu updates
/// do not change what is already in the cart.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct CartLine {
    pub key: LineKey,
    /// `key` rendered as a string.
    pub id: String,
    pub item_id: String,
    pub name: String,
    pub image: Option<String>,
    pub selected_variation: Option<Variation>,
    pub selected_add_ons: Vec<SelectedAddOn>,
    pub quantity: i64,
    /// Price of one unit including variation and add-ons.
    pub unit_price: Money,
}

impl CartLine {
    fn new(
        key: LineKey,
        item: &MenuItem,
        variation: Option<&Variation>,
        add_ons: Vec<SelectedAddOn>,
        quantity: i64,
    ) -> Self {
        let unit_price = unit_price(item, variation, &add_ons);
        CartLine {
            id: key.to_string(),
            key,
            item_id: item.id.clone(),
            name: item.name.clone(),
            image: item.image.clone(),
            selected_variation: variation.cloned(),
            selected_add_ons: add_ons,
            quantity,
            unit_price,
        }
    }

    /// Unit price × quantity.
    #[inline]
    pub fn line_total(&self) -> Money {
        self.unit_price * self.quantity
    }
}

// =============================================================================
// Cart
// =============================================================================

/// What happened to the cart on an add.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AddOutcome {
    /// A new line was created.
    Added,
    /// An existing line grew to `quantity`.
    Incremented { quantity: i64 },
}

/// Cart contents and panel state. Mutations here are silent; see
/// [`CartStore`] for the notifying wrapper.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct Cart {
    pub lines: Vec<CartLine>,
    pub is_open: bool,
}

impl Cart {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn line(&self, key: &LineKey) -> Option<&CartLine> {
        self.lines.iter().find(|l| &l.key == key)
    }

    fn line_mut(&mut self, key: &LineKey) -> Option<&mut CartLine> {
        self.lines.iter_mut().find(|l| &l.key == key)
    }

    /// Adds `quantity` units of the given combination.
    ///
    /// `add_ons` must already be collapsed (unique ids, counts >= 1).
    ///
    /// ## Errors
    /// - `quantity` or an add-on count outside the allowed range
    /// - the merged line would exceed [`MAX_ITEM_QUANTITY`]
    ///
    /// The cart is unchanged on error.
    pub fn add(
        &mut self,
        item: &MenuItem,
        quantity: i64,
        variation: Option<&Variation>,
        add_ons: Vec<SelectedAddOn>,
    ) -> CoreResult<(LineKey, AddOutcome)> {
        validate_quantity(quantity)?;
        for selected in &add_ons {
            validate_add_on_quantity(selected.quantity)?;
        }

        let key = LineKey::new(&item.id, variation, &add_ons);

        if let Some(line) = self.line_mut(&key) {
            let new_qty = line.quantity.saturating_add(quantity);
            if new_qty > MAX_ITEM_QUANTITY {
                return Err(CoreError::QuantityTooLarge {
                    requested: new_qty,
                    max: MAX_ITEM_QUANTITY,
                });
            }
            line.quantity = new_qty;
            return Ok((key, AddOutcome::Incremented { quantity: new_qty }));
        }

        self.lines
            .push(CartLine::new(key.clone(), item, variation, add_ons, quantity));
        Ok((key, AddOutcome::Added))
    }

    /// Sets the quantity of an existing line. Returns the line if found.
    ///
    /// `quantity` must be within `1..=MAX_ITEM_QUANTITY`; callers handle
    /// removal before calling this.
    pub fn set_quantity(&mut self, key: &LineKey, quantity: i64) -> CoreResult<Option<&CartLine>> {
        validate_quantity(quantity)?;
        Ok(self.line_mut(key).map(|line| {
            line.quantity = quantity;
            &*line
        }))
    }

    /// Removes a line, returning it if it was present.
    pub fn remove(&mut self, key: &LineKey) -> Option<CartLine> {
        let index = self.lines.iter().position(|l| &l.key == key)?;
        Some(self.lines.remove(index))
    }

    /// Removes all lines. The panel flag is left as is.
    pub fn clear(&mut self) {
        self.lines.clear();
    }

    /// Σ unit price × quantity.
    pub fn total_price(&self) -> Money {
        self.lines.iter().map(CartLine::line_total).sum()
    }

    /// Σ quantity.
    pub fn total_items(&self) -> i64 {
        self.lines.iter().map(|l| l.quantity).sum()
    }

    /// Units of one menu item across all of its lines.
    pub fn quantity_of_item(&self, item_id: &str) -> i64 {
        self.lines
            .iter()
            .filter(|l| l.item_id == item_id)
            .map(|l| l.quantity)
            .sum()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Number of distinct lines.
    pub fn line_count(&self) -> usize {
        self.lines.len()
    }
}

/// Cart totals summary for the header badge and the cart panel footer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct CartTotals {
    pub line_count: usize,
    pub total_items: i64,
    pub total_price: Money,
}

impl From<&Cart> for CartTotals {
    fn from(cart: &Cart) -> Self {
        CartTotals {
            line_count: cart.line_count(),
            total_items: cart.total_items(),
            total_price: cart.total_price(),
        }
    }
}

// =============================================================================
// Cart Store
// =============================================================================

/// The cart plus the notifier that hears about every change.
#[derive(Debug, Default)]
pub struct CartStore<N> {
    cart: Cart,
    notifier: N,
}

impl<N: Notifier> CartStore<N> {
    /// Creates an empty, closed cart.
    pub fn new(notifier: N) -> Self {
        CartStore {
            cart: Cart::new(),
            notifier,
        }
    }

    /// Adds `quantity` units of `item` with the chosen variation and add-ons.
    ///
    /// `add_ons` is a flat list where an add-on picked twice appears twice.
    ///
    /// ## Behavior
    /// - Same combination already in cart: its quantity grows by `quantity`
    /// - Otherwise: a new line is appended with the current unit price
    ///
    /// ## Errors
    /// `quantity` outside `1..=MAX_ITEM_QUANTITY`, or a merge that would
    /// take the line past it, is rejected and the cart is left untouched.
    pub fn add_to_cart(
        &mut self,
        item: &MenuItem,
        quantity: i64,
        variation: Option<&Variation>,
        add_ons: &[AddOn],
    ) -> CoreResult<LineKey> {
        self.add_collapsed(item, quantity, variation, collapse_add_ons(add_ons))
    }

    /// Same as [`add_to_cart`](Self::add_to_cart) for callers holding
    /// counted add-ons. Zero counts are dropped and repeated ids merged.
    pub fn add_selected(
        &mut self,
        item: &MenuItem,
        quantity: i64,
        variation: Option<&Variation>,
        add_ons: &[SelectedAddOn],
    ) -> CoreResult<LineKey> {
        let mut merged: Vec<SelectedAddOn> = Vec::new();
        for selected in add_ons.iter().filter(|a| a.quantity > 0) {
            match merged.iter_mut().find(|m| m.add_on.id == selected.add_on.id) {
                Some(existing) => existing.quantity += selected.quantity,
                None => merged.push(selected.clone()),
            }
        }
        self.add_collapsed(item, quantity, variation, merged)
    }

    fn add_collapsed(
        &mut self,
        item: &MenuItem,
        quantity: i64,
        variation: Option<&Variation>,
        add_ons: Vec<SelectedAddOn>,
    ) -> CoreResult<LineKey> {
        let (key, outcome) = self.cart.add(item, quantity, variation, add_ons)?;
        let message = match outcome {
            AddOutcome::Added => format!("{} added to cart", item.name),
            AddOutcome::Incremented { quantity } => {
                format!("{} quantity updated to {}", item.name, quantity)
            }
        };
        self.notifier.notify(&message, Severity::Success);

        Ok(key)
    }

    /// Sets a line's quantity.
    ///
    /// ## Behavior
    /// - `quantity <= 0`: the line is removed
    /// - `quantity > MAX_ITEM_QUANTITY`: rejected, the line keeps its quantity
    /// - line not in cart: nothing happens, no notice
    pub fn update_quantity(&mut self, key: &LineKey, quantity: i64) -> CoreResult<()> {
        if quantity <= 0 {
            self.remove_from_cart(key);
            return Ok(());
        }

        if let Some(line) = self.cart.set_quantity(key, quantity)? {
            let message = format!("{} quantity updated to {}", line.name, quantity);
            self.notifier.notify(&message, Severity::Success);
        }
        Ok(())
    }

    /// Removes a line. Missing lines are ignored without a notice.
    pub fn remove_from_cart(&mut self, key: &LineKey) {
        if let Some(line) = self.cart.remove(key) {
            let message = format!("{} removed from cart", line.name);
            self.notifier.notify(&message, Severity::Success);
        }
    }

    /// Empties the cart.
    pub fn clear_cart(&mut self) {
        self.cart.clear();
        self.notifier.notify("Cart cleared", Severity::Success);
    }

    pub fn open_cart(&mut self) {
        self.cart.is_open = true;
    }

    pub fn close_cart(&mut self) {
        self.cart.is_open = false;
    }

    pub fn is_open(&self) -> bool {
        self.cart.is_open
    }

    pub fn total_price(&self) -> Money {
        self.cart.total_price()
    }

    pub fn total_items(&self) -> i64 {
        self.cart.total_items()
    }

    pub fn totals(&self) -> CartTotals {
        CartTotals::from(&self.cart)
    }

    pub fn lines(&self) -> &[CartLine] {
        &self.cart.lines
    }

    pub fn line(&self, key: &LineKey) -> Option<&CartLine> {
        self.cart.line(key)
    }

    pub fn quantity_of_item(&self, item_id: &str) -> i64 {
        self.cart.quantity_of_item(item_id)
    }

    pub fn is_empty(&self) -> bool {
        self.cart.is_empty()
    }

    pub fn cart(&self) -> &Cart {
        &self.cart
    }

    pub fn notifier(&self) -> &N {
        &self.notifier
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
