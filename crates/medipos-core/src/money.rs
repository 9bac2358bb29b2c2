//! # Money Module
//!
//! Provides the `Money` type used for every price, line amount and total.
//!
//! ## Why Integer Minor Units?
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  Prices arrive as decimals (e.g. 12.50) but are stored as 1250 paise.  │
//! │                                                                         │
//! │  Line totals and subtotals are exact integer sums.                      │
//! │  Only two places ever round: percent discount and tax, both scaled      │
//! │  from basis points and rounded half away from zero to one paisa.       │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use medipos_core::money::Money;
//!
//! let price = Money::from_cents(1250);   // 12.50
//! let line = price.multiply_quantity(3); // 37.50
//! assert_eq!(line.to_string(), "37.50");
//!
//! // 10% of 37.50, rounded to the nearest paisa
//! assert_eq!(line.scale_bps(1000).cents(), 375);
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;
use std::iter::Sum;
use std::ops::{Add, AddAssign, Mul, Neg, Sub, SubAssign};
use std::str::FromStr;
use ts_rs::TS;

use crate::error::ParseMoneyError;

/// Basis points in one whole (100%).
pub const BPS_SCALE: i64 = 10_000;

// =============================================================================
// Money Type
// =============================================================================

/// A monetary value in the smallest currency unit (paise, cents).
///
/// Signed on purpose: a discount larger than the subtotal produces a negative
/// intermediate amount, and only the final total is floored at zero.
/// Arithmetic saturates at the `i64` bounds instead of overflowing.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS,
)]
#[ts(export)]
pub struct Money(i64);

impl Money {
    /// Creates a Money value from minor units.
    #[inline]
    pub const fn from_cents(cents: i64) -> Self {
        Money(cents)
    }

    /// Creates a Money value from whole units and a two-digit fraction.
    ///
    /// ```rust
    /// use medipos_core::money::Money;
    ///
    /// assert_eq!(Money::from_major_minor(12, 50).cents(), 1250);
    /// assert_eq!(Money::from_major_minor(-5, 50).cents(), -550);
    /// ```
    #[inline]
    pub const fn from_major_minor(major: i64, minor: i64) -> Self {
        if major < 0 {
            Money(major * 100 - minor)
        } else {
            Money(major * 100 + minor)
        }
    }

    /// Returns the raw value in minor units.
    #[inline]
    pub const fn cents(&self) -> i64 {
        self.0
    }

    #[inline]
    pub const fn zero() -> Self {
        Money(0)
    }

    #[inline]
    pub const fn is_zero(&self) -> bool {
        self.0 == 0
    }

    #[inline]
    pub const fn is_positive(&self) -> bool {
        self.0 > 0
    }

    #[inline]
    pub const fn is_negative(&self) -> bool {
        self.0 < 0
    }

    /// Unit price times quantity. Exact, saturating at the `i64` bounds.
    #[inline]
    pub const fn multiply_quantity(&self, qty: i64) -> Self {
        Money(self.0.saturating_mul(qty))
    }

    /// Scales the amount by a rate in basis points (1000 = 10%).
    ///
    /// The product is computed in `i128` and rounded half away from zero, so
    /// `-0.5` paise becomes `-1` just as `0.5` becomes `1`.
    ///
    /// ```rust
    /// use medipos_core::money::Money;
    ///
    /// // 8.25% of 10.00 = 0.825 -> 0.83
    /// assert_eq!(Money::from_cents(1000).scale_bps(825).cents(), 83);
    /// assert_eq!(Money::from_cents(-1000).scale_bps(825).cents(), -83);
    /// ```
    pub fn scale_bps(&self, bps: i64) -> Money {
        let product = i128::from(self.0) * i128::from(bps);
        let scale = i128::from(BPS_SCALE);
        let half = scale / 2;
        let rounded = if product >= 0 {
            (product + half) / scale
        } else {
            (product - half) / scale
        };
        Money(rounded.clamp(i128::from(i64::MIN), i128::from(i64::MAX)) as i64)
    }

    /// Returns `self` or zero, whichever is larger.
    #[inline]
    pub fn floor_zero(self) -> Money {
        if self.0 < 0 {
            Money::zero()
        } else {
            self
        }
    }

    /// Formats the amount with a leading currency symbol: `₹12.50`, `-₹5.00`.
    pub fn format_with(&self, symbol: &str) -> String {
        let sign = if self.0 < 0 { "-" } else { "" };
        format!(
            "{}{}{}.{:02}",
            sign,
            symbol,
            (self.0 / 100).abs(),
            (self.0 % 100).abs()
        )
    }
}

// =============================================================================
// Trait Implementations
// =============================================================================

/// Plain decimal rendering with two fraction digits and no symbol.
impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.format_with(""))
    }
}

/// Parses operator input such as `200`, `199.5` or `-12.05`.
///
/// At most two fraction digits are accepted; anything finer is an error
/// rather than a silent rounding.
impl FromStr for Money {
    type Err = ParseMoneyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || ParseMoneyError(s.to_string());
        let trimmed = s.trim();
        let (negative, digits) = match trimmed.strip_prefix('-') {
            Some(rest) => (true, rest),
            None => (false, trimmed),
        };
        let (whole, frac) = digits.split_once('.').unwrap_or((digits, ""));

        let all_digits = |part: &str| part.chars().all(|c| c.is_ascii_digit());
        if whole.is_empty() || frac.len() > 2 || !all_digits(whole) || !all_digits(frac) {
            return Err(invalid());
        }

        let whole: i64 = whole.parse().map_err(|_| invalid())?;
        let frac: i64 = match frac.len() {
            0 => 0,
            1 => frac.parse::<i64>().map_err(|_| invalid())? * 10,
            _ => frac.parse().map_err(|_| invalid())?,
        };
        let cents = whole
            .checked_mul(100)
            .and_then(|c| c.checked_add(frac))
            .ok_or_else(invalid)?;

        Ok(Money(if negative { -cents } else { cents }))
    }
}

impl Add for Money {
    type Output = Self;

    #[inline]
    fn add(self, other: Self) -> Self {
        Money(self.0.saturating_add(other.0))
    }
}

impl AddAssign for Money {
    #[inline]
    fn add_assign(&mut self, other: Self) {
        self.0 = self.0.saturating_add(other.0);
    }
}

impl Sub for Money {
    type Output = Self;

    #[inline]
    fn sub(self, other: Self) -> Self {
        Money(self.0.saturating_sub(other.0))
    }
}

impl SubAssign for Money {
    #[inline]
    fn sub_assign(&mut self, other: Self) {
        self.0 = self.0.saturating_sub(other.0);
    }
}

impl Neg for Money {
    type Output = Self;

    #[inline]
    fn neg(self) -> Self {
        Money(self.0.saturating_neg())
    }
}

impl Mul<i64> for Money {
    type Output = Self;

    #[inline]
    fn mul(self, qty: i64) -> Self {
        self.multiply_quantity(qty)
    }
}

impl Sum for Money {
    fn sum<I: Iterator<Item = Money>>(iter: I) -> Self {
        iter.fold(Money::zero(), Add::add)
    }
}

impl<'a> Sum<&'a Money> for Money {
    fn sum<I: Iterator<Item = &'a Money>>(iter: I) -> Self {
        iter.copied().sum()
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display() {
        assert_eq!(Money::from_cents(1099).to_string(), "10.99");
        assert_eq!(Money::from_cents(500).to_string(), "5.00");
        assert_eq!(Money::from_cents(-550).to_string(), "-5.50");
        assert_eq!(Money::from_cents(-5).to_string(), "-0.05");
        assert_eq!(Money::zero().to_string(), "0.00");
    }

    #[test]
    fn test_format_with_symbol() {
        assert_eq!(Money::from_cents(1250).format_with("₹"), "₹12.50");
        assert_eq!(Money::from_cents(-1250).format_with("$"), "-$12.50");
    }

    #[test]
    fn test_arithmetic() {
        let a = Money::from_cents(1000);
        let b = Money::from_cents(500);

        assert_eq!((a + b).cents(), 1500);
        assert_eq!((b - a).cents(), -500);
        assert_eq!((a * 3).cents(), 3000);
        assert_eq!((-a).cents(), -1000);

        let total: Money = [a, b, b].iter().sum();
        assert_eq!(total.cents(), 2000);
    }

    #[test]
    fn test_scale_bps_rounds_half_away_from_zero() {
        // 0.5 paise either way
        assert_eq!(Money::from_cents(5).scale_bps(1000).cents(), 1);
        assert_eq!(Money::from_cents(-5).scale_bps(1000).cents(), -1);
        // 0.4 paise
        assert_eq!(Money::from_cents(4).scale_bps(1000).cents(), 0);
        // exact
        assert_eq!(Money::from_cents(10000).scale_bps(1000).cents(), 1000);
    }

    #[test]
    fn test_scale_bps_does_not_overflow() {
        let large = Money::from_cents(i64::MAX / 2);
        assert_eq!(large.scale_bps(BPS_SCALE), large);
    }

    #[test]
    fn test_arithmetic_saturates() {
        let max = Money::from_cents(i64::MAX);
        assert_eq!(Money::from_cents(100).multiply_quantity(i64::MAX / 10), max);
        assert_eq!(max + Money::from_cents(1), max);
        assert_eq!((-max - Money::from_cents(10)).cents(), i64::MIN);
        assert_eq!(max.scale_bps(20_000), max);
    }

    #[test]
    fn test_floor_zero() {
        assert_eq!(Money::from_cents(-1).floor_zero(), Money::zero());
        assert_eq!(Money::from_cents(7).floor_zero().cents(), 7);
    }

    #[test]
    fn test_parse() {
        assert_eq!("200".parse::<Money>().unwrap().cents(), 20000);
        assert_eq!("199.5".parse::<Money>().unwrap().cents(), 19950);
        assert_eq!(" 0.05 ".parse::<Money>().unwrap().cents(), 5);
        assert_eq!("-12.05".parse::<Money>().unwrap().cents(), -1205);
        assert!("12.345".parse::<Money>().is_err());
        assert!("abc".parse::<Money>().is_err());
        assert!(".50".parse::<Money>().is_err());
        assert!("".parse::<Money>().is_err());
    }

    #[test]
    fn test_sign_checks() {
        assert!(Money::zero().is_zero());
        assert!(Money::from_cents(1).is_positive());
        assert!(Money::from_cents(-1).is_negative());
    }
}
