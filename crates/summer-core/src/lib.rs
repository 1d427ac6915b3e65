//! # summer-core: Pure Ordering Logic for Summer Milktea
//!
//! This crate holds the logic behind the customer-facing ordering screen:
//! menu data types, the per-item price calculator and the cart store.
//! It has zero I/O dependencies.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Summer Milktea Ordering                            │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                    Frontend (web)                               │   │
//! │  │    Menu Card ──► Customize Modal ──► Cart Panel ──► Toasts     │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │ JSON lines                             │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │                    summer-kiosk commands                        │   │
//! │  │    get_menu, add_to_cart, update_quantity, clear_cart, ...     │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │               ★ summer-core (THIS CRATE) ★                      │   │
//! │  │                                                                 │   │
//! │  │   ┌─────────┐ ┌─────────┐ ┌─────────┐ ┌─────────┐ ┌─────────┐  │   │
//! │  │   │  types  │ │  money  │ │ pricing │ │  cart   │ │ notify  │  │   │
//! │  │   │MenuItem │ │  Money  │ │unit_    │ │CartStore│ │Notifier │  │   │
//! │  │   │ AddOn   │ │         │ │ price   │ │ LineKey │ │Severity │  │   │
//! │  │   └─────────┘ └─────────┘ └─────────┘ └─────────┘ └─────────┘  │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO NETWORK • NO GLOBAL STATE                        │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`types`] - Menu data (MenuItem, Variation, AddOn, Category)
//! - [`money`] - Money type with integer arithmetic (no floating point!)
//! - [`pricing`] - Per-unit price of a cart line
//! - [`cart`] - Cart lines, composite identity and the cart store
//! - [`notify`] - Notification seam used by the cart store
//! - [`menu`] - Display derivations for menu cards and navigation
//! - [`customization`] - State of the "Customize" modal
//! - [`validation`] - Checks for menu data and quantities
//! - [`error`] - Domain error types
//!
//! ## Example Usage
//!
//! ```rust
//! use summer_core::{CartStore, MenuItem, Money, SilentNotifier};
//!
//! let item = MenuItem::new("taro", "Taro Milktea", Money::from_major(100));
//! let mut store = CartStore::new(SilentNotifier);
//!
//! store.add_to_cart(&item, 2, None, &[]).unwrap();
//! assert_eq!(store.total_items(), 2);
//! assert_eq!(store.total_price(), Money::from_major(200));
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod cart;
pub mod customization;
pub mod error;
pub mod menu;
pub mod money;
pub mod notify;
pub mod pricing;
pub mod types;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================

pub use cart::{Cart, CartLine, CartStore, CartTotals, LineKey};
pub use customization::Customization;
pub use error::{CoreError, CoreResult, ValidationError};
pub use menu::{CategoryFilter, VariationKind};
pub use money::Money;
pub use notify::{Notice, Notifier, RecordingNotifier, Severity, SilentNotifier};
pub use pricing::{collapse_add_ons, unit_price};
pub use types::*;

// =============================================================================
// Crate-Level Constants
// =============================================================================

/// Variation id used in a line key when no variation was chosen.
pub const DEFAULT_VARIATION_KEY: &str = "default";

/// Category id that selects every item in the menu navigation.
pub const ALL_CATEGORIES: &str = "all";

/// Maximum units on one cart line, and maximum portions of one add-on.
///
/// Keeps line totals far from `i64` overflow whatever the input.
pub const MAX_ITEM_QUANTITY: i64 = 999;
