//! # Configuration State
//!
//! Stores kiosk configuration loaded at startup.
//!
//! ## Configuration Sources (Priority Order)
//! 1. Environment variables (`SUMMER_*`)
//! 2. Defaults (this file)
//!
//! ## Thread Safety
//! Configuration is read-only after initialization, so no mutex needed.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};
use summer_core::Money;

/// Kiosk configuration.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ConfigState {
    /// Shop name shown in the header
    pub shop_name: String,

    /// Header logo used when site settings have none or it fails to load
    pub logo_fallback: String,

    /// Currency code (ISO 4217)
    pub currency_code: String,

    /// Currency symbol (for display)
    pub currency_symbol: String,

    /// How long a toast stays on screen
    pub toast_duration_ms: u64,

    /// Menu catalog JSON. `None` uses the bundled sample menu.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub menu_path: Option<PathBuf>,
}

impl Default for ConfigState {
    /// Returns default configuration suitable for development.
    ///
    /// ## Default Values
    /// - Shop: "Summer Milktea"
    /// - Currency: PHP (₱)
    /// - Toasts: 3 seconds
    /// - Menu: bundled sample
    fn default() -> Self {
        ConfigState {
            shop_name: "Summer Milktea".to_string(),
            logo_fallback: "/logo.jpeg".to_string(),
            currency_code: "PHP".to_string(),
            currency_symbol: "₱".to_string(),
            toast_duration_ms: 3000,
            menu_path: None,
        }
    }
}

impl ConfigState {
    /// Creates a ConfigState from environment variables and defaults.
    ///
    /// ## Environment Variables
    /// - `SUMMER_SHOP_NAME`: Override shop name
    /// - `SUMMER_MENU_PATH`: Menu catalog JSON file
    /// - `SUMMER_TOAST_MS`: Toast duration in milliseconds
    /// - `SUMMER_CURRENCY_SYMBOL`: Override currency symbol
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Same as [`from_env`](Self::from_env) with an injectable lookup.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let mut config = ConfigState::default();

        if let Some(shop_name) = lookup("SUMMER_SHOP_NAME") {
            config.shop_name = shop_name;
        }

        if let Some(path) = lookup("SUMMER_MENU_PATH") {
            config.menu_path = Some(PathBuf::from(path));
        }

        if let Some(ms) = lookup("SUMMER_TOAST_MS") {
            match ms.parse::<u64>() {
                Ok(ms) => config.toast_duration_ms = ms,
                Err(_) => tracing::warn!(value = %ms, "Ignoring invalid SUMMER_TOAST_MS"),
            }
        }

        if let Some(symbol) = lookup("SUMMER_CURRENCY_SYMBOL") {
            config.currency_symbol = symbol;
        }

        config
    }

    /// Formats an amount with the configured currency symbol.
    ///
    /// ## Example
    /// ```rust
    /// use summer_core::Money;
    /// use summer_kiosk_lib::state::ConfigState;
    ///
    /// let config = ConfigState::default();
    /// assert_eq!(config.format_money(Money::from_cents(12050)), "₱120.50");
    /// ```
    pub fn format_money(&self, amount: Money) -> String {
        amount.format_with(&self.currency_symbol)
    }

    /// Header logo: the site logo if set, else the fallback.
    pub fn logo_or_fallback<'a>(&'a self, site_logo: Option<&'a str>) -> &'a str {
        site_logo
            .filter(|logo| !logo.trim().is_empty())
            .unwrap_or(self.logo_fallback.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_defaults() {
        let config = ConfigState::from_lookup(lookup(&[]));
        assert_eq!(config, ConfigState::default());
        assert_eq!(config.toast_duration_ms, 3000);
    }

    #[test]
    fn test_env_overrides() {
        let config = ConfigState::from_lookup(lookup(&[
            ("SUMMER_SHOP_NAME", "Winter Milktea"),
            ("SUMMER_MENU_PATH", "/srv/menu.json"),
            ("SUMMER_TOAST_MS", "1500"),
            ("SUMMER_CURRENCY_SYMBOL", "PHP "),
        ]));

        assert_eq!(config.shop_name, "Winter Milktea");
        assert_eq!(config.menu_path, Some(PathBuf::from("/srv/menu.json")));
        assert_eq!(config.toast_duration_ms, 1500);
        assert_eq!(config.format_money(Money::from_cents(9900)), "PHP 99.00");
    }

    #[test]
    fn test_invalid_toast_duration_keeps_default() {
        let config = ConfigState::from_lookup(lookup(&[("SUMMER_TOAST_MS", "soon")]));
        assert_eq!(config.toast_duration_ms, 3000);
    }

    #[test]
    fn test_logo_fallback() {
        let config = ConfigState::default();
        assert_eq!(config.logo_or_fallback(None), "/logo.jpeg");
        assert_eq!(config.logo_or_fallback(Some("")), "/logo.jpeg");
        assert_eq!(config.logo_or_fallback(Some("/brand.png")), "/brand.png");
    }
}
