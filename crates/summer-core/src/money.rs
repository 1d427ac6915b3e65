//! # Money Module
//!
//! Provides the `Money` type for menu prices and cart totals.
//!
//! ## Why Integer Money?
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  THE FLOATING POINT PROBLEM                                             │
//! │                                                                         │
//! │  A ₱39.90 add-on picked three times in floating point:                  │
//! │    39.9 * 3 = 119.69999999999999  ❌                                    │
//! │                                                                         │
//! │  OUR SOLUTION: Integer Centavos                                         │
//! │    3990 * 3 = 11970 centavos = ₱119.70                                  │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use summer_core::money::Money;
//!
//! let price = Money::from_cents(12050); // ₱120.50
//! let doubled = price * 2_u32;          // ₱241.00
//! assert_eq!(doubled.cents(), 24100);
//! assert_eq!(price.to_string(), "₱120.50");
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;
use std::iter::Sum;
use std::ops::{Add, AddAssign, Mul, Sub, SubAssign};
use ts_rs::TS;

/// Currency symbol used by `Display`.
pub const DEFAULT_CURRENCY_SYMBOL: &str = "₱";

// =============================================================================
// Money Type
// =============================================================================

/// A monetary value in the smallest currency unit (centavos).
///
/// ## Design Decisions
/// - **i64 (signed)**: negative variation deltas are representable
/// - **Single field tuple struct**: zero-cost abstraction over i64
///
/// ## Where Money is Used
/// ```text
/// MenuItem.base_price ──┬──► unit_price() ──► CartLine.unit_price
///                       │                           │
/// Variation.price ──────┤                           ▼
/// AddOn.price × qty ────┘              × quantity ──► total_price()
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Money(i64);

impl Money {
    /// Creates a Money value from centavos.
    ///
    /// ## Example
    /// ```rust
    /// use summer_core::money::Money;
    ///
    /// let price = Money::from_cents(3990);
    /// assert_eq!(price.cents(), 3990);
    /// ```
    #[inline]
    pub const fn from_cents(cents: i64) -> Self {
        Money(cents)
    }

    /// Creates a Money value from whole pesos.
    ///
    /// ```rust
    /// use summer_core::money::Money;
    ///
    /// assert_eq!(Money::from_major(120).cents(), 12000);
    /// ```
    #[inline]
    pub const fn from_major(major: i64) -> Self {
        Money(major * 100)
    }

    /// Returns the value in centavos.
    #[inline]
    pub const fn cents(&self) -> i64 {
        self.0
    }

    /// Returns the whole-peso portion.
    #[inline]
    pub const fn major(&self) -> i64 {
        self.0 / 100
    }

    /// Returns the centavo portion (always 0-99).
    #[inline]
    pub const fn cents_part(&self) -> i64 {
        (self.0 % 100).abs()
    }

    /// Returns zero money value.
    #[inline]
    pub const fn zero() -> Self {
        Money(0)
    }

    /// Checks if the value is zero.
    #[inline]
    pub const fn is_zero(&self) -> bool {
        self.0 == 0
    }

    /// Checks if the value is positive (greater than zero).
    #[inline]
    pub const fn is_positive(&self) -> bool {
        self.0 > 0
    }

    /// Checks if the value is negative (less than zero).
    #[inline]
    pub const fn is_negative(&self) -> bool {
        self.0 < 0
    }

    /// Share of `base` that `self` is below it, as a rounded whole percent.
    ///
    /// Used for the "20% OFF" badge. Returns `None` when `base` is not
    /// positive. Half percents round away from zero.
    ///
    /// ```rust
    /// use summer_core::money::Money;
    ///
    /// let base = Money::from_major(150);
    /// let sale = Money::from_major(120);
    /// assert_eq!(sale.percent_below(base), Some(20));
    /// ```
    pub fn percent_below(&self, base: Money) -> Option<i64> {
        if !base.is_positive() {
            return None;
        }
        let diff = (base.0 - self.0) as i128 * 100;
        let base = base.0 as i128;
        // Round half away from zero on the integer quotient
        let rounded = if diff >= 0 {
            (diff * 2 + base) / (base * 2)
        } else {
            -((-diff * 2 + base) / (base * 2))
        };
        Some(rounded as i64)
    }

    /// Formats with an explicit currency symbol.
    ///
    /// ```rust
    /// use summer_core::money::Money;
    ///
    /// assert_eq!(Money::from_cents(-550).format_with("$"), "-$5.50");
    /// ```
    pub fn format_with(&self, symbol: &str) -> String {
        let sign = if self.0 < 0 { "-" } else { "" };
        format!(
            "{}{}{}.{:02}",
            sign,
            symbol,
            self.major().abs(),
            self.cents_part()
        )
    }
}

// =============================================================================
// Trait Implementations
// =============================================================================

/// Shows money the way the menu cards print it (`₱120.00`).
impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.format_with(DEFAULT_CURRENCY_SYMBOL))
    }
}

impl Default for Money {
    fn default() -> Self {
        Money::zero()
    }
}

impl Add for Money {
    type Output = Self;

    #[inline]
    fn add(self, other: Self) -> Self {
        Money(self.0 + other.0)
    }
}

impl AddAssign for Money {
    #[inline]
    fn add_assign(&mut self, other: Self) {
        self.0 += other.0;
    }
}

impl Sub for Money {
    type Output = Self;

    #[inline]
    fn sub(self, other: Self) -> Self {
        Money(self.0 - other.0)
    }
}

impl SubAssign for Money {
    #[inline]
    fn sub_assign(&mut self, other: Self) {
        self.0 -= other.0;
    }
}

/// Multiplication by i64 (line quantities).
impl Mul<i64> for Money {
    type Output = Self;

    #[inline]
    fn mul(self, qty: i64) -> Self {
        Money(self.0 * qty)
    }
}

/// Multiplication by u32 (add-on counts).
impl Mul<u32> for Money {
    type Output = Self;

    #[inline]
    fn mul(self, qty: u32) -> Self {
        Money(self.0 * qty as i64)
    }
}

impl Sum for Money {
    fn sum<I: Iterator<Item = Money>>(iter: I) -> Self {
        iter.fold(Money::zero(), Add::add)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_cents_and_major() {
        let money = Money::from_cents(12050);
        assert_eq!(money.cents(), 12050);
        assert_eq!(money.major(), 120);
        assert_eq!(money.cents_part(), 50);
        assert_eq!(Money::from_major(150).cents(), 15000);
    }

    #[test]
    fn test_display() {
        assert_eq!(Money::from_cents(12000).to_string(), "₱120.00");
        assert_eq!(Money::from_cents(3990).to_string(), "₱39.90");
        assert_eq!(Money::from_cents(-550).to_string(), "-₱5.50");
        assert_eq!(Money::zero().to_string(), "₱0.00");
    }

    #[test]
    fn test_arithmetic() {
        let a = Money::from_cents(1000);
        let b = Money::from_cents(500);

        assert_eq!((a + b).cents(), 1500);
        assert_eq!((a - b).cents(), 500);
        assert_eq!((a * 3i64).cents(), 3000);
        assert_eq!((b * 2u32).cents(), 1000);
    }

    #[test]
    fn test_sum() {
        let total: Money = [100, 250, -50]
            .into_iter()
            .map(Money::from_cents)
            .sum();
        assert_eq!(total.cents(), 300);

        let empty: Money = std::iter::empty().sum();
        assert!(empty.is_zero());
    }

    #[test]
    fn test_percent_below() {
        let base = Money::from_major(150);
        assert_eq!(Money::from_major(120).percent_below(base), Some(20));
        // 1/3 off rounds to 33
        assert_eq!(Money::from_major(100).percent_below(base), Some(33));
        // 12.5% rounds up to 13
        assert_eq!(
            Money::from_major(70).percent_below(Money::from_major(80)),
            Some(13)
        );
        assert_eq!(Money::from_major(10).percent_below(Money::zero()), None);
    }

    #[test]
    fn test_sign_checks() {
        assert!(Money::zero().is_zero());
        assert!(Money::from_cents(1).is_positive());
        assert!(Money::from_cents(-1).is_negative());
    }
}
