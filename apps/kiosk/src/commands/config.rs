//! # Config Commands
//!
//! Read-only configuration and the header bar.

use serde::Serialize;
use tracing::debug;

use crate::state::{CartState, ConfigState};

/// Returns the kiosk configuration.
pub fn get_config(config: &ConfigState) -> ConfigState {
    debug!("get_config command");
    config.clone()
}

/// Header bar: shop name, logo and the cart badge.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct HeaderResponse {
    pub shop_name: String,
    pub logo: String,
    /// Badge count; the frontend hides the badge at zero.
    pub cart_items_count: i64,
}

pub fn get_header(cart: &CartState, config: &ConfigState) -> HeaderResponse {
    debug!("get_header command");
    HeaderResponse {
        shop_name: config.shop_name.clone(),
        logo: config.logo_or_fallback(None).to_string(),
        cart_items_count: cart.with_cart(|c| c.total_items()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::ToastQueue;
    use summer_core::{MenuItem, Money};

    #[test]
    fn test_header_badge_counts_units() {
        let config = ConfigState::default();
        let cart = CartState::new(ToastQueue::new(3000));
        let tea = MenuItem::new("tea", "Tea", Money::from_major(80));

        assert_eq!(get_header(&cart, &config).cart_items_count, 0);

        cart.with_cart_mut(|c| c.add_to_cart(&tea, 3, None, &[])).unwrap();

        let header = get_header(&cart, &config);
        assert_eq!(header.cart_items_count, 3);
        assert_eq!(header.shop_name, "Summer Milktea");
        assert_eq!(header.logo, "/logo.jpeg");
    }
}
