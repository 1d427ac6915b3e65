//! # Validation Module
//!
//! Input checks for quantities and menu data.
//!
//! ## Validation Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Where Validation Happens                           │
//! │                                                                         │
//! │  Catalog load (kiosk)                                                   │
//! │  └── validate_catalog() → problems are logged, data is still used      │
//! │                                                                         │
//! │  Cart add                                                               │
//! │  └── validate_quantity() → adds outside 1..=999 are rejected           │
//! │                                                                         │
//! │  Pricing                                                                │
//! │  └── nothing: prices are trusted and flow into totals as given         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use summer_core::validation::validate_quantity;
//!
//! assert!(validate_quantity(2).is_ok());
//! assert!(validate_quantity(0).is_err());
//! assert!(validate_quantity(1000).is_err());
//! ```

use std::collections::HashSet;

use crate::error::ValidationError;
use crate::types::{Catalog, MenuItem};
use crate::MAX_ITEM_QUANTITY;

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;

/// Validates a line quantity.
///
/// ## Rules
/// - Must be positive (> 0)
/// - Must not exceed MAX_ITEM_QUANTITY (999)
pub fn validate_quantity(qty: i64) -> ValidationResult<()> {
    if qty <= 0 {
        return Err(ValidationError::MustBePositive {
            field: "quantity".to_string(),
        });
    }
    within_limit("quantity", 1, qty)
}

/// Validates how many portions of one add-on are picked.
///
/// Zero is allowed and means "not picked".
pub fn validate_add_on_quantity(qty: u32) -> ValidationResult<()> {
    within_limit("add-on quantity", 0, i64::from(qty))
}

fn within_limit(field: &str, min: i64, qty: i64) -> ValidationResult<()> {
    if qty > MAX_ITEM_QUANTITY {
        return Err(ValidationError::OutOfRange {
            field: field.to_string(),
            min,
            max: MAX_ITEM_QUANTITY,
        });
    }
    Ok(())
}

/// Checks one menu item.
///
/// ## Rules
/// - id and name must not be blank
/// - variation ids are unique within the item
/// - add-on ids are unique within the item
/// - an item on discount has a discount price below its base price
pub fn validate_menu_item(item: &MenuItem) -> ValidationResult<()> {
    require("id", &item.id)?;
    require("name", &item.name)?;

    unique("variation id", item.variations.iter().map(|v| v.id.as_str()))?;
    unique("add-on id", item.add_ons.iter().map(|a| a.id.as_str()))?;

    if item.has_discount() && item.effective_price() >= item.base_price() {
        return Err(ValidationError::DiscountNotLower {
            item_id: item.id.clone(),
        });
    }

    Ok(())
}

/// Checks every item of a catalog and that item ids are unique.
///
/// Returns all problems found rather than stopping at the first.
pub fn validate_catalog(catalog: &Catalog) -> Vec<ValidationError> {
    let mut problems: Vec<ValidationError> = catalog
        .items
        .iter()
        .filter_map(|item| validate_menu_item(item).err())
        .collect();

    if let Err(e) = unique("item id", catalog.items.iter().map(|i| i.id.as_str())) {
        problems.push(e);
    }
    if let Err(e) = unique("category id", catalog.categories.iter().map(|c| c.id.as_str())) {
        problems.push(e);
    }

    problems
}

fn require(field: &str, value: &str) -> ValidationResult<()> {
    if value.trim().is_empty() {
        return Err(ValidationError::Required {
            field: field.to_string(),
        });
    }
    Ok(())
}

fn unique<'a>(field: &str, ids: impl Iterator<Item = &'a str>) -> ValidationResult<()> {
    let mut seen = HashSet::new();
    for id in ids {
        if !seen.insert(id) {
            return Err(ValidationError::Duplicate {
                field: field.to_string(),
                value: id.to_string(),
            });
        }
    }
    Ok(())
}

// =============================================================================
// Unit Tests
// =============================================================================
