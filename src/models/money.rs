//! Money type for portfolio allocations
//!
//! Portfolio amounts are whole dollars. Stored as an i64 so totals never go
//! through floating point.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::{Add, AddAssign};

/// A whole-dollar amount
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, Default,
)]
#[serde(transparent)]
pub struct Money(i64);

impl Money {
    /// Largest amount an edit box accepts: just under one trillion dollars
    pub const MAX_INPUT: Money = Money(999_999_999_999);

    /// Create a Money amount from whole dollars
    ///
    /// # Examples
    /// ```
    /// use onboard_cli::models::Money;
    /// let amount = Money::from_dollars(270_000);
    /// assert_eq!(amount.to_string(), "$270,000");
    /// ```
    pub const fn from_dollars(dollars: i64) -> Self {
        Self(dollars)
    }

    /// Create a zero Money amount
    pub const fn zero() -> Self {
        Self(0)
    }

    /// Get the amount in dollars
    pub const fn dollars(&self) -> i64 {
        self.0
    }

    /// Check if the amount is zero
    pub const fn is_zero(&self) -> bool {
        self.0 == 0
    }

    /// Parse an amount typed into an edit box
    ///
    /// Everything except ASCII digits is discarded, so "$270,000" and
    /// "270000" are equal. Input with no digits is zero; anything above
    /// `MAX_INPUT` is capped there.
    pub fn parse_lenient(s: &str) -> Self {
        let mut value: i64 = 0;
        for digit in s.chars().filter_map(|c| c.to_digit(10)) {
            value = value * 10 + i64::from(digit);
            if value >= Self::MAX_INPUT.0 {
                return Self::MAX_INPUT;
            }
        }
        Self(value)
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let digits = self.0.unsigned_abs().to_string();
        let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
        for (i, c) in digits.chars().enumerate() {
            if i > 0 && (digits.len() - i) % 3 == 0 {
                grouped.push(',');
            }
            grouped.push(c);
        }
        if self.0 < 0 {
            write!(f, "-${}", grouped)
        } else {
            write!(f, "${}", grouped)
        }
    }
}

impl Add for Money {
    type Output = Self;

    fn add(self, other: Self) -> Self {
        Self(self.0.saturating_add(other.0))
    }
}

impl AddAssign for Money {
    fn add_assign(&mut self, other: Self) {
        self.0 = self.0.saturating_add(other.0);
    }
}

impl std::iter::Sum for Money {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Money::zero(), |acc, m| acc + m)
    }
}
