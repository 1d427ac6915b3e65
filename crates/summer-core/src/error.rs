//! # Error Types
//!
//! Domain-specific error types for summer-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                     │
//! │                                                                         │
//! │  summer-core errors (this file)                                        │
//! │  ├── CoreError        - Menu lookups and cart preconditions            │
//! │  └── ValidationError  - Input validation failures                      │
//! │                                                                         │
//! │  summer-kiosk errors (app)                                             │
//! │  ├── KioskError       - Startup failures (config, catalog file)        │
//! │  └── ApiError         - What the frontend sees (serialized)            │
//! │                                                                         │
//! │  Flow: ValidationError → CoreError → ApiError → Frontend               │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## What Is NOT an Error
//! The cart store treats a few anomalies as normal outcomes:
//! - updating or removing a line that is not in the cart is a no-op
//! - setting a line quantity to zero or below removes the line
//! - odd prices (negative deltas, discount above base) flow into totals as-is

use thiserror::Error;

// =============================================================================
// Core Error
// =============================================================================

/// Core ordering errors.
#[derive(Debug, Error)]
pub enum CoreError {
    /// Menu item id is not in the catalog.
    #[error("Menu item not found: {0}")]
    ItemNotFound(String),

    /// Variation id does not belong to the item.
    #[error("Variation {variation_id} not found on {item_id}")]
    VariationNotFound {
        item_id: String,
        variation_id: String,
    },

    /// Add-on id is not offered for the item.
    #[error("Add-on {add_on_id} not found on {item_id}")]
    AddOnNotFound { item_id: String, add_on_id: String },

    /// Item is flagged unavailable and cannot be ordered.
    ///
    /// ## When This Occurs
    /// The menu card renders a disabled "Unavailable" button, so the
    /// frontend only hits this with stale menu data.
    #[error("{name} is currently unavailable")]
    ItemUnavailable { item_id: String, name: String },

    /// A line would grow past the per-line limit.
    #[error("Quantity {requested} exceeds maximum allowed ({max})")]
    QuantityTooLarge { requested: i64, max: i64 },

    /// Validation error (wraps ValidationError).
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),
}

// =============================================================================
// Validation Error
// =============================================================================

/// Input validation errors.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ValidationError {
    /// A required field is missing or empty.
    #[error("{field} is required")]
    Required { field: String },

    /// Value must be positive.
    #[error("{field} must be positive")]
    MustBePositive { field: String },

    /// Invalid format.
    #[error("{field} has invalid format: {reason}")]
    InvalidFormat { field: String, reason: String },

    /// Duplicate value (e.g., two variations sharing an id).
    #[error("{field} '{value}' already exists")]
    Duplicate { field: String, value: String },

    /// Value outside the allowed range.
    #[error("{field} must be between {min} and {max}")]
    OutOfRange { field: String, min: i64, max: i64 },

    /// Discount price is not below the base price.
    #[error("discount price of {item_id} must be lower than its base price")]
    DiscountNotLower { item_id: String },
}

// =============================================================================
// Result Type Alias
// =============================================================================

/// Convenience type alias for Results with CoreError.
pub type CoreResult<T> = Result<T, CoreError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = CoreError::VariationNotFound {
            item_id: "taro".to_string(),
            variation_id: "xl".to_string(),
        };
        assert_eq!(err.to_string(), "Variation xl not found on taro");

        let err = CoreError::ItemUnavailable {
            item_id: "taro".to_string(),
            name: "Taro Milktea".to_string(),
        };
        assert_eq!(err.to_string(), "Taro Milktea is currently unavailable");

        let err = CoreError::QuantityTooLarge {
            requested: 1200,
            max: 999,
        };
        assert_eq!(err.to_string(), "Quantity 1200 exceeds maximum allowed (999)");
    }

    #[test]
    fn test_validation_error_messages() {
        let err = ValidationError::MustBePositive {
            field: "quantity".to_string(),
        };
        assert_eq!(err.to_string(), "quantity must be positive");

        let err = ValidationError::Duplicate {
            field: "variation id".to_string(),
            value: "large".to_string(),
        };
        assert_eq!(err.to_string(), "variation id 'large' already exists");

        let err = ValidationError::OutOfRange {
            field: "quantity".to_string(),
            min: 1,
            max: 999,
        };
        assert_eq!(err.to_string(), "quantity must be between 1 and 999");
    }

    #[test]
    fn test_validation_converts_to_core_error() {
        let validation_err = ValidationError::Required {
            field: "name".to_string(),
        };
        let core_err: CoreError = validation_err.into();
        assert!(matches!(core_err, CoreError::Validation(_)));
    }
}
