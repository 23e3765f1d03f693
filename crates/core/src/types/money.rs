//! Money in Uzbek som.
//!
//! All catalog prices and order totals are whole-som amounts, so money is an
//! unsigned integer in the minor currency unit rather than a decimal type.
//! Negative amounts are unrepresentable by construction.

use std::iter::Sum;
use std::ops::Add;

use serde::{Deserialize, Serialize};

/// An amount of money in Uzbek som.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct Som(u64);

impl Som {
    /// Zero som.
    pub const ZERO: Self = Self(0);

    /// Create an amount from a whole number of som.
    #[must_use]
    pub const fn new(amount: u64) -> Self {
        Self(amount)
    }

    /// Get the underlying amount.
    #[must_use]
    pub const fn as_u64(&self) -> u64 {
        self.0
    }

    /// Saturating addition. Order totals cannot wrap.
    #[must_use]
    pub const fn saturating_add(self, other: Self) -> Self {
        Self(self.0.saturating_add(other.0))
    }

    /// Saturating multiplication by a quantity.
    #[must_use]
    pub const fn saturating_mul(self, quantity: u32) -> Self {
        Self(self.0.saturating_mul(quantity as u64))
    }

    /// Format for display with thousands grouping (e.g., "70 000 so'm").
    #[must_use]
    pub fn display(&self) -> String {
        let digits = self.0.to_string();
        let mut grouped = String::with_capacity(digits.len() + digits.len() / 3 + 6);
        for (i, ch) in digits.chars().enumerate() {
            if i > 0 && (digits.len() - i) % 3 == 0 {
                grouped.push(' ');
            }
            grouped.push(ch);
        }
        grouped.push_str(" so'm");
        grouped
    }
}

impl Add for Som {
    type Output = Self;

    fn add(self, other: Self) -> Self {
        self.saturating_add(other)
    }
}

impl Sum for Som {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::ZERO, Self::saturating_add)
    }
}

impl std::fmt::Display for Som {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display())
    }
}

impl From<u64> for Som {
    fn from(amount: u64) -> Self {
        Self(amount)
    }
}
