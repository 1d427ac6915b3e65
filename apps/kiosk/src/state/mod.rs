//! # State Module
//!
//! Kiosk state, one type per concern.
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    State Architecture                                   │
//! │                                                                         │
//! │  ┌──────────────┐  ┌──────────────┐  ┌──────────────┐  ┌────────────┐  │
//! │  │  CartState   │  │ CatalogState │  │  ToastQueue  │  │ConfigState │  │
//! │  │              │  │              │  │              │  │            │  │
//! │  │  Arc<Mutex<  │  │  Catalog     │  │  Arc<Mutex<  │  │ shop name  │  │
//! │  │   CartStore  │  │  (read-only) │  │   Vec<Toast> │  │ currency   │  │
//! │  │  >>          │  │              │  │  >>          │  │ toast ms   │  │
//! │  └──────┬───────┘  └──────────────┘  └──────▲───────┘  └────────────┘  │
//! │         │              notices               │                          │
//! │         └────────────────────────────────────┘                          │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Commands declare exactly which of these they need.

mod cart;
mod catalog;
mod config;
mod toasts;

pub use cart::{CartState, KioskCart};
pub use catalog::CatalogState;
pub use config::ConfigState;
pub use toasts::{Toast, ToastQueue};
