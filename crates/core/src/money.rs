//! Currency amounts in smallest currency units.

use serde::{Deserialize, Serialize};

/// Non-negative currency amount in cents.
///
/// Arithmetic stays in integer cents so accumulation never drifts; rounding
/// to a display precision happens only in `Display`.
#[derive(
    Debug, Copy, Clone, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct Money(u64);

impl Money {
    pub const ZERO: Money = Money(0);

    pub const fn from_cents(cents: u64) -> Self {
        Self(cents)
    }

    pub const fn from_dollars(dollars: u64) -> Self {
        Self(dollars.saturating_mul(100))
    }

    pub const fn cents(self) -> u64 {
        self.0
    }

    /// Extended amount for `quantity` units.
    pub fn times(self, quantity: u32) -> Self {
        Self(self.0.saturating_mul(u64::from(quantity)))
    }

    pub fn saturating_add(self, other: Money) -> Self {
        Self(self.0.saturating_add(other.0))
    }

    /// Grouped dollars with cents only when non-zero and without trailing
    /// zeros: `$9,855`, `$1,234.5`, `$0.05`.
    pub fn compact(self) -> String {
        let dollars = group_thousands(self.0 / 100);
        match self.0 % 100 {
            0 => format!("${dollars}"),
            cents if cents % 10 == 0 => format!("${dollars}.{}", cents / 10),
            cents => format!("${dollars}.{cents:02}"),
        }
    }
}

impl core::iter::Sum for Money {
    fn sum<I: Iterator<Item = Money>>(iter: I) -> Self {
        iter.fold(Money::ZERO, Money::saturating_add)
    }
}

/// Renders as `$1,234.56`.
impl core::fmt::Display for Money {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        let dollars = self.0 / 100;
        let cents = self.0 % 100;
        write!(f, "${}.{cents:02}", group_thousands(dollars))
    }
}

fn group_thousands(value: u64) -> String {
    let digits = value.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}
