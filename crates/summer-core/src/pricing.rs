//! # Pricing
//!
//! Per-unit price of one cart line.
//!
//! ## Algorithm
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  unit_price(item, variation, add_ons)                                  │
//! │                                                                         │
//! │  1. base  = discount price   if on discount and it is non-zero         │
//! │           = base price       otherwise                                 │
//! │  2. base += variation.price  if a variation is selected                │
//! │  3. base += Σ add_on.price × add_on.quantity                           │
//! │                                                                         │
//! │  line total = unit price × line quantity (done by the cart)            │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Prices are trusted inputs. A negative variation or add-on price can push
//! the result below zero and it is returned as-is.

use crate::money::Money;
use crate::types::{AddOn, MenuItem, SelectedAddOn, Variation};

/// Computes the per-unit price of `item` with the given choices.
///
/// ## Example
/// ```rust
/// use summer_core::{unit_price, AddOn, MenuItem, Money, SelectedAddOn, Variation};
///
/// let large = Variation::new("large", "Large", Money::from_major(20));
/// let pearls = AddOn::new("pearls", "Pearls", "sinkers", Money::from_major(10));
/// let item = MenuItem::new("a", "Classic", Money::from_major(100));
///
/// let price = unit_price(&item, Some(&large), &[SelectedAddOn::new(pearls, 2)]);
/// assert_eq!(price, Money::from_major(140));
/// ```
pub fn unit_price(
    item: &MenuItem,
    variation: Option<&Variation>,
    add_ons: &[SelectedAddOn],
) -> Money {
    let mut price = item.effective_price();

    if let Some(variation) = variation {
        price += variation.price();
    }

    price + add_ons.iter().map(SelectedAddOn::subtotal).sum::<Money>()
}

/// Collapses a flat, possibly repeated list of add-ons into counted entries.
///
/// Entries keep the order in which each id was first seen.
///
/// ```rust
/// use summer_core::{collapse_add_ons, AddOn, Money};
///
/// let pearls = AddOn::new("pearls", "Pearls", "sinkers", Money::from_major(10));
/// let jelly = AddOn::new("jelly", "Jelly", "sinkers", Money::from_major(15));
///
/// let grouped = collapse_add_ons(&[pearls.clone(), jelly, pearls]);
/// assert_eq!(grouped.len(), 2);
/// assert_eq!(grouped[0].add_on.id, "pearls");
/// assert_eq!(grouped[0].quantity, 2);
/// ```
pub fn collapse_add_ons(add_ons: &[AddOn]) -> Vec<SelectedAddOn> {
    let mut grouped: Vec<SelectedAddOn> = Vec::new();

    for add_on in add_ons {
        match grouped.iter_mut().find(|g| g.add_on.id == add_on.id) {
            Some(existing) => existing.quantity += 1,
            None => grouped.push(SelectedAddOn::new(add_on.clone(), 1)),
        }
    }

    grouped
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn pearls() -> AddOn {
        AddOn::new("pearls", "Pearls", "sinkers", Money::from_major(10))
    }

    fn cream_cheese() -> AddOn {
        AddOn::new("cream-cheese", "Cream Cheese", "toppings", Money::from_cents(2550))
    }

    #[test]
    fn test_plain_item_uses_base_price() {
        let item = MenuItem::new("a", "Classic", Money::from_major(100));
        assert_eq!(unit_price(&item, None, &[]), Money::from_major(100));
    }

    #[test]
    fn test_discounted_item_uses_discount_price() {
        let item = MenuItem::new("b", "Okinawa", Money::from_major(150))
            .with_discount(Money::from_major(120));
        assert_eq!(unit_price(&item, None, &[]), Money::from_major(120));
    }

    #[test]
    fn test_discount_price_ignored_without_flag() {
        let mut item = MenuItem::new("b", "Okinawa", Money::from_major(150))
            .with_discount(Money::from_major(120));
        item.is_on_discount = false;
        assert_eq!(unit_price(&item, None, &[]), Money::from_major(150));
    }

    #[test]
    fn test_flag_without_discount_price_uses_base() {
        let mut item = MenuItem::new("b", "Okinawa", Money::from_major(150));
        item.is_on_discount = true;
        assert_eq!(unit_price(&item, None, &[]), Money::from_major(150));
    }

    #[test]
    fn test_variation_and_add_ons() {
        let item = MenuItem::new("a", "Classic", Money::from_major(100));
        let large = Variation::new("large", "Large", Money::from_major(20));
        let add_ons = [
            SelectedAddOn::new(pearls(), 2),
            SelectedAddOn::new(cream_cheese(), 1),
        ];

        // 100 + 20 + 10×2 + 25.50
        assert_eq!(
            unit_price(&item, Some(&large), &add_ons),
            Money::from_cents(16550)
        );
    }

    #[test]
    fn test_variation_applies_on_top_of_discount() {
        let item = MenuItem::new("b", "Okinawa", Money::from_major(150))
            .with_discount(Money::from_major(120));
        let large = Variation::new("large", "Large", Money::from_major(20));
        assert_eq!(unit_price(&item, Some(&large), &[]), Money::from_major(140));
    }

    #[test]
    fn test_negative_variation_is_not_clamped() {
        let item = MenuItem::new("a", "Classic", Money::from_major(10));
        let odd = Variation::new("odd", "Odd", Money::from_major(-30));
        assert_eq!(unit_price(&item, Some(&odd), &[]), Money::from_major(-20));
    }

    #[test]
    fn test_negative_add_on_is_not_clamped() {
        let item = MenuItem::new("a", "Classic", Money::from_major(10));
        let rebate = AddOn::new("rebate", "Rebate", "promos", Money::from_major(-8));

        // 10 - 8×2
        assert_eq!(
            unit_price(&item, None, &[SelectedAddOn::new(rebate, 2)]),
            Money::from_major(-6)
        );
    }

    #[test]
    fn test_add_on_price_scales_with_count() {
        let item = MenuItem::new("a", "Classic", Money::zero());
        let add_ons = [SelectedAddOn::new(cream_cheese(), 999)];

        // 25.50 × 999
        assert_eq!(unit_price(&item, None, &add_ons), Money::from_cents(2_547_450));
    }

    #[test]
    fn test_zero_discount_price_uses_base() {
        let item = MenuItem::new("b", "Okinawa", Money::from_major(150))
            .with_discount(Money::zero());
        assert_eq!(unit_price(&item, None, &[]), Money::from_major(150));
    }

    #[test]
    fn test_collapse_add_ons() {
        let grouped = collapse_add_ons(&[pearls(), cream_cheese(), pearls(), pearls()]);

        assert_eq!(grouped.len(), 2);
        assert_eq!(grouped[0], SelectedAddOn::new(pearls(), 3));
        assert_eq!(grouped[1], SelectedAddOn::new(cream_cheese(), 1));
        assert!(collapse_add_ons(&[]).is_empty());
    }
}
