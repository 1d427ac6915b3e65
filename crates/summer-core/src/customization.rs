//! # Customization
//!
//! Selection state of the "Customize" modal for one menu item.
//!
//! ## User Workflow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  Customize Classic Milktea                                         ✕   │
//! │                                                                         │
//! │  Choose Size      (•) 12 oz  ₱100.00    ( ) 16 oz  ₱110.00             │
//! │                                                                         │
//! │  Add-ons                                                                │
//! │   Sinkers         Pearls  ₱10.00 each       [ - ]  2  [ + ]            │
//! │                   Jelly   ₱15.00 each       [ Add ]                    │
//! │                                                                         │
//! │  Total:                                                 ₱120.00         │
//! │  [ Add to Cart - ₱120.00 ]                                              │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! "Add to Cart" hands `variation()` and `flattened_add_ons()` to
//! [`CartStore::add_to_cart`](crate::CartStore::add_to_cart) with quantity 1,
//! then the modal resets its add-ons.

use crate::error::{CoreError, CoreResult};
use crate::money::Money;
use crate::pricing::unit_price;
use crate::types::{AddOn, MenuItem, SelectedAddOn, Variation};
use crate::validation::validate_add_on_quantity;

/// Choices made so far for one item.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Customization {
    item: MenuItem,
    variation: Option<Variation>,
    add_ons: Vec<SelectedAddOn>,
}

impl Customization {
    /// Starts with the item's default variation and no add-ons.
    pub fn new(item: MenuItem) -> Self {
        let variation = item.default_variation().cloned();
        Customization {
            item,
            variation,
            add_ons: Vec::new(),
        }
    }

    pub fn item(&self) -> &MenuItem {
        &self.item
    }

    pub fn variation(&self) -> Option<&Variation> {
        self.variation.as_ref()
    }

    /// Picked add-ons in the order they were first added.
    pub fn add_ons(&self) -> &[SelectedAddOn] {
        &self.add_ons
    }

    /// Selects one of the item's variations.
    pub fn select_variation(&mut self, id: &str) -> CoreResult<()> {
        let variation = self
            .item
            .variation(id)
            .ok_or_else(|| CoreError::VariationNotFound {
                item_id: self.item.id.clone(),
                variation_id: id.to_string(),
            })?;
        self.variation = Some(variation.clone());
        Ok(())
    }

    /// Sets how many portions of an add-on are picked. Zero unpicks it.
    pub fn set_add_on_quantity(&mut self, id: &str, quantity: u32) -> CoreResult<()> {
        let add_on = self.lookup_add_on(id)?;
        validate_add_on_quantity(quantity)?;

        if quantity == 0 {
            self.add_ons.retain(|a| a.add_on.id != id);
            return Ok(());
        }

        match self.add_ons.iter_mut().find(|a| a.add_on.id == id) {
            Some(existing) => existing.quantity = quantity,
            None => self.add_ons.push(SelectedAddOn::new(add_on, quantity)),
        }
        Ok(())
    }

    /// The `+` button.
    pub fn increment_add_on(&mut self, id: &str) -> CoreResult<()> {
        let current = self.add_on_quantity(id);
        self.set_add_on_quantity(id, current + 1)
    }

    /// The `-` button. Stops at zero.
    pub fn decrement_add_on(&mut self, id: &str) -> CoreResult<()> {
        let current = self.add_on_quantity(id);
        self.set_add_on_quantity(id, current.saturating_sub(1))
    }

    /// Portions of an add-on currently picked.
    pub fn add_on_quantity(&self, id: &str) -> u32 {
        self.add_ons
            .iter()
            .find(|a| a.add_on.id == id)
            .map_or(0, |a| a.quantity)
    }

    /// Running total shown in the modal.
    pub fn unit_price(&self) -> Money {
        unit_price(&self.item, self.variation.as_ref(), &self.add_ons)
    }

    /// Add-ons as a flat list, each repeated once per portion.
    pub fn flattened_add_ons(&self) -> Vec<AddOn> {
        self.add_ons
            .iter()
            .flat_map(|a| std::iter::repeat(a.add_on.clone()).take(a.quantity as usize))
            .collect()
    }

    /// Clears picked add-ons. The variation stays selected.
    pub fn reset(&mut self) {
        self.add_ons.clear();
    }

    fn lookup_add_on(&self, id: &str) -> CoreResult<AddOn> {
        self.item
            .add_on(id)
            .cloned()
            .ok_or_else(|| CoreError::AddOnNotFound {
                item_id: self.item.id.clone(),
                add_on_id: id.to_string(),
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cart::CartStore;
    use crate::notify::SilentNotifier;
    use crate::pricing::collapse_add_ons;

    fn classic() -> MenuItem {
        MenuItem::new("classic", "Classic Milktea", Money::from_major(100))
            .with_variation(Variation::new("regular", "Regular", Money::zero()))
            .with_variation(Variation::new("large", "Large", Money::from_major(20)))
            .with_add_on(AddOn::new("pearls", "Pearls", "sinkers", Money::from_major(10)))
            .with_add_on(AddOn::new("jelly", "Jelly", "sinkers", Money::from_major(15)))
    }

    #[test]
    fn test_starts_with_default_variation() {
        let custom = Customization::new(classic());
        assert_eq!(custom.variation().unwrap().id, "regular");
        assert!(custom.add_ons().is_empty());
        assert_eq!(custom.unit_price(), Money::from_major(100));
    }

    #[test]
    fn test_running_total() {
        let mut custom = Customization::new(classic());
        custom.select_variation("large").unwrap();
        custom.increment_add_on("pearls").unwrap();
        custom.increment_add_on("pearls").unwrap();
        custom.increment_add_on("jelly").unwrap();

        assert_eq!(custom.add_on_quantity("pearls"), 2);
        // 100 + 20 + 10×2 + 15
        assert_eq!(custom.unit_price(), Money::from_major(155));
    }

    #[test]
    fn test_decrement_to_zero_unpicks() {
        let mut custom = Customization::new(classic());
        custom.increment_add_on("jelly").unwrap();
        custom.decrement_add_on("jelly").unwrap();
        custom.decrement_add_on("jelly").unwrap();

        assert_eq!(custom.add_on_quantity("jelly"), 0);
        assert!(custom.add_ons().is_empty());
    }

    #[test]
    fn test_unknown_ids_rejected() {
        let mut custom = Customization::new(classic());
        assert!(matches!(
            custom.select_variation("xl"),
            Err(CoreError::VariationNotFound { .. })
        ));
        assert!(matches!(
            custom.set_add_on_quantity("nata", 1),
            Err(CoreError::AddOnNotFound { .. })
        ));
    }

    #[test]
    fn test_add_on_count_is_capped() {
        let mut custom = Customization::new(classic());
        custom.set_add_on_quantity("pearls", 999).unwrap();

        assert!(custom.increment_add_on("pearls").is_err());
        assert!(custom.set_add_on_quantity("jelly", u32::MAX).is_err());
        assert_eq!(custom.add_on_quantity("pearls"), 999);
        assert_eq!(custom.add_on_quantity("jelly"), 0);
    }

    #[test]
    fn test_flattened_add_ons_collapse_back() {
        let mut custom = Customization::new(classic());
        custom.set_add_on_quantity("pearls", 3).unwrap();
        custom.set_add_on_quantity("jelly", 1).unwrap();

        let flat = custom.flattened_add_ons();
        assert_eq!(flat.len(), 4);
        assert_eq!(collapse_add_ons(&flat), custom.add_ons().to_vec());
    }

    #[test]
    fn test_modal_price_matches_cart_line() {
        let mut custom = Customization::new(classic());
        custom.select_variation("large").unwrap();
        custom.set_add_on_quantity("pearls", 2).unwrap();

        let mut store = CartStore::new(SilentNotifier);
        let key = store
            .add_to_cart(custom.item(), 1, custom.variation(), &custom.flattened_add_ons())
            .unwrap();

        assert_eq!(store.line(&key).unwrap().unit_price, custom.unit_price());

        custom.reset();
        assert!(custom.add_ons().is_empty());
        assert_eq!(custom.variation().unwrap().id, "large");
    }
}
