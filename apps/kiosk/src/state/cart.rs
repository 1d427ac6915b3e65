//! # Cart State
//!
//! Holds the one cart of this kiosk session.
//!
//! ## Thread Safety
//! The store is wrapped in `Arc<Mutex<T>>` so every command gets exclusive
//! access for the duration of its mutation. The command loop is
//! single-threaded today; the lock keeps the state shareable if the
//! transport changes.

use std::sync::{Arc, Mutex};

use summer_core::CartStore;

use crate::state::ToastQueue;

/// Cart store that reports to the toast queue.
pub type KioskCart = CartStore<ToastQueue>;

#[derive(Debug, Clone)]
pub struct CartState {
    cart: Arc<Mutex<KioskCart>>,
}

impl CartState {
    /// Creates an empty cart whose notices go to `toasts`.
    pub fn new(toasts: ToastQueue) -> Self {
        CartState {
            cart: Arc::new(Mutex::new(CartStore::new(toasts))),
        }
    }

    /// Executes a function with read access to the cart.
    ///
    /// ## Usage
    /// ```rust,ignore
    /// let totals = cart_state.with_cart(|cart| cart.totals());
    /// ```
    pub fn with_cart<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&KioskCart) -> R,
    {
        let cart = self.cart.lock().expect("Cart mutex poisoned");
        f(&cart)
    }

    /// Executes a function with write access to the cart.
    ///
    /// ## Usage
    /// ```rust,ignore
    /// cart_state.with_cart_mut(|cart| cart.add_to_cart(&item, 1, None, &[]))?;
    /// ```
    pub fn with_cart_mut<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&mut KioskCart) -> R,
    {
        let mut cart = self.cart.lock().expect("Cart mutex poisoned");
        f(&mut cart)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use summer_core::{MenuItem, Money};

    #[test]
    fn test_mutations_reach_toast_queue() {
        let toasts = ToastQueue::new(3000);
        let state = CartState::new(toasts.clone());
        let item = MenuItem::new("fries", "Cheese Fries", Money::from_major(75));

        state
            .with_cart_mut(|cart| cart.add_to_cart(&item, 2, None, &[]))
            .unwrap();

        assert_eq!(state.with_cart(|cart| cart.total_items()), 2);
        assert_eq!(toasts.drain()[0].message, "Cheese Fries added to cart");
    }

    #[test]
    fn test_clones_share_cart() {
        let state = CartState::new(ToastQueue::new(3000));
        let other = state.clone();

        other.with_cart_mut(|cart| cart.open_cart());

        assert!(state.with_cart(|cart| cart.is_open()));
    }
}
