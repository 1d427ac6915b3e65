//! # Commands Module
//!
//! One function per frontend action, plus the request/response envelope of
//! the JSON-lines protocol.
//!
//! ## Wire Format
//! ```text
//! stdin  ─► {"cmd":"add_to_cart","itemId":"okinawa","variationId":"large"}
//! stdout ◄─ {"ok":true,"data":{...cart...},"toasts":[{...}]}
//!
//! stdin  ─► {"cmd":"add_to_cart","itemId":"matcha"}
//! stdout ◄─ {"ok":false,"error":{"code":"NOT_FOUND","message":"..."},"toasts":[...]}
//! ```

pub mod cart;
pub mod config;
pub mod menu;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::ApiError;
use crate::state::Toast;
use crate::Kiosk;

use self::cart::{AddToCartRequest, RemoveFromCartRequest, UpdateQuantityRequest};
use self::menu::GetMenuRequest;

/// A command read from the frontend.
#[derive(Debug, Clone, Deserialize)]
#[serde(tag = "cmd", rename_all = "snake_case")]
pub enum Request {
    GetMenu(GetMenuRequest),
    GetCart,
    AddToCart(AddToCartRequest),
    UpdateQuantity(UpdateQuantityRequest),
    RemoveFromCart(RemoveFromCartRequest),
    ClearCart,
    OpenCart,
    CloseCart,
    GetConfig,
    GetHeader,
}

/// The answer to one command.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Response {
    pub ok: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<ApiError>,
    /// Notifications raised while handling the command.
    pub toasts: Vec<Toast>,
}

impl Response {
    pub fn new(result: Result<Value, ApiError>, toasts: Vec<Toast>) -> Self {
        match result {
            Ok(data) => Response {
                ok: true,
                data: Some(data),
                error: None,
                toasts,
            },
            Err(error) => Response {
                ok: false,
                data: None,
                error: Some(error),
                toasts,
            },
        }
    }
}

/// Routes a request to its command.
pub fn dispatch(kiosk: &Kiosk, request: Request) -> Result<Value, ApiError> {
    let Kiosk {
        config,
        catalog,
        cart,
        ..
    } = kiosk;

    let data = match request {
        Request::GetMenu(req) => serde_json::to_value(menu::get_menu(req, catalog, cart, config))?,
        Request::GetCart => serde_json::to_value(cart::get_cart(cart, config))?,
        Request::AddToCart(req) => {
            serde_json::to_value(cart::add_to_cart(req, catalog, cart, config)?)?
        }
        Request::UpdateQuantity(req) => {
            serde_json::to_value(cart::update_quantity(req, cart, config)?)?
        }
        Request::RemoveFromCart(req) => {
            serde_json::to_value(cart::remove_from_cart(req, cart, config))?
        }
        Request::ClearCart => serde_json::to_value(cart::clear_cart(cart, config))?,
        Request::OpenCart => serde_json::to_value(cart::open_cart(cart, config))?,
        Request::CloseCart => serde_json::to_value(cart::close_cart(cart, config))?,
        Request::GetConfig => serde_json::to_value(config::get_config(config))?,
        Request::GetHeader => serde_json::to_value(config::get_header(cart, config))?,
    };

    Ok(data)
}
