//! # Cart Commands
//!
//! Commands for cart manipulation.
//!
//! ## Cart Lifecycle
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Cart Lifecycle                                       │
//! │                                                                         │
//! │  ┌──────────┐     ┌──────────┐     ┌──────────┐                        │
//! │  │  Empty   │────►│ In Cart  │────►│  Cleared │                        │
//! │  │  Cart    │     │          │     │          │                        │
//! │  └──────────┘     └──────────┘     └──────────┘                        │
//! │                        │                 │                              │
//! │                   add_to_cart       clear_cart                          │
//! │                   update_quantity                                       │
//! │                   remove_from_cart                                      │
//! │                                                                         │
//! │  open_cart / close_cart only toggle the panel                           │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Every command answers with the whole cart so the frontend can re-render
//! the panel and the header badge from one response.

use serde::{Deserialize, Serialize};
use summer_core::{CartLine, CartTotals, CoreError, LineKey, MenuItem, Variation};
use tracing::debug;

use crate::error::ApiError;
use crate::state::{CartState, CatalogState, ConfigState, KioskCart};

/// Cart response including lines and totals.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CartResponse {
    pub lines: Vec<CartLine>,
    pub totals: CartTotals,
    pub is_open: bool,
    pub formatted_total: String,
}

impl CartResponse {
    fn from_store(cart: &KioskCart, config: &ConfigState) -> Self {
        let totals = cart.totals();
        CartResponse {
            lines: cart.lines().to_vec(),
            formatted_total: config.format_money(totals.total_price),
            totals,
            is_open: cart.is_open(),
        }
    }
}

fn default_quantity() -> i64 {
    1
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AddToCartRequest {
    pub item_id: String,
    #[serde(default = "default_quantity")]
    pub quantity: i64,
    #[serde(default)]
    pub variation_id: Option<String>,
    /// Flat list: an add-on picked twice appears twice.
    #[serde(default)]
    pub add_on_ids: Vec<String>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateQuantityRequest {
    pub line: LineKey,
    pub quantity: i64,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RemoveFromCartRequest {
    pub line: LineKey,
}

/// Gets the current cart contents.
pub fn get_cart(cart: &CartState, config: &ConfigState) -> CartResponse {
    debug!("get_cart command");
    cart.with_cart(|c| CartResponse::from_store(c, config))
}

/// Adds an item with the chosen variation and add-ons.
///
/// ## Behavior
/// - Ids are resolved against the catalog first; unknown ids fail
/// - No `variationId` on an item with variations: the default variation is
///   used, as the customize modal preselects it
/// - Unavailable items are rejected
/// - Same combination already in cart: quantity increases
pub fn add_to_cart(
    request: AddToCartRequest,
    catalog: &CatalogState,
    cart: &CartState,
    config: &ConfigState,
) -> Result<CartResponse, ApiError> {
    debug!(
        item_id = %request.item_id,
        quantity = request.quantity,
        variation = ?request.variation_id,
        add_ons = request.add_on_ids.len(),
        "add_to_cart command"
    );

    let item = catalog.item(&request.item_id)?;
    if !item.available {
        return Err(CoreError::ItemUnavailable {
            item_id: item.id.clone(),
            name: item.name.clone(),
        }
        .into());
    }

    let variation = resolve_variation(item, request.variation_id.as_deref())?;
    let add_ons = request
        .add_on_ids
        .iter()
        .map(|id| {
            item.add_on(id).cloned().ok_or_else(|| CoreError::AddOnNotFound {
                item_id: item.id.clone(),
                add_on_id: id.clone(),
            })
        })
        .collect::<Result<Vec<_>, _>>()?;

    cart.with_cart_mut(|c| -> Result<CartResponse, ApiError> {
        c.add_to_cart(item, request.quantity, variation, &add_ons)?;
        Ok(CartResponse::from_store(c, config))
    })
}

fn resolve_variation<'a>(
    item: &'a MenuItem,
    variation_id: Option<&str>,
) -> Result<Option<&'a Variation>, CoreError> {
    match variation_id {
        Some(id) => item
            .variation(id)
            .map(Some)
            .ok_or_else(|| CoreError::VariationNotFound {
                item_id: item.id.clone(),
                variation_id: id.to_string(),
            }),
        None => Ok(item.default_variation()),
    }
}

/// Sets a line's quantity; zero or below removes the line.
///
/// Unknown lines are ignored and the unchanged cart is returned. Quantities
/// above the per-line limit are rejected.
pub fn update_quantity(
    request: UpdateQuantityRequest,
    cart: &CartState,
    config: &ConfigState,
) -> Result<CartResponse, ApiError> {
    debug!(line = %request.line, quantity = request.quantity, "update_quantity command");
    cart.with_cart_mut(|c| -> Result<CartResponse, ApiError> {
        c.update_quantity(&request.line, request.quantity)?;
        Ok(CartResponse::from_store(c, config))
    })
}

/// Removes a line. Unknown lines are ignored.
pub fn remove_from_cart(
    request: RemoveFromCartRequest,
    cart: &CartState,
    config: &ConfigState,
) -> CartResponse {
    debug!(line = %request.line, "remove_from_cart command");
    cart.with_cart_mut(|c| {
        c.remove_from_cart(&request.line);
        CartResponse::from_store(c, config)
    })
}

/// Empties the cart.
pub fn clear_cart(cart: &CartState, config: &ConfigState) -> CartResponse {
    debug!("clear_cart command");
    cart.with_cart_mut(|c| {
        c.clear_cart();
        CartResponse::from_store(c, config)
    })
}

/// Shows the cart panel.
pub fn open_cart(cart: &CartState, config: &ConfigState) -> CartResponse {
    cart.with_cart_mut(|c| {
        c.open_cart();
        CartResponse::from_store(c, config)
    })
}

/// Hides the cart panel.
pub fn close_cart(cart: &CartState, config: &ConfigState) -> CartResponse {
    cart.with_cart_mut(|c| {
        c.close_cart();
        CartResponse::from_store(c, config)
    })
}
