use std::fmt;
use std::iter::Sum;
use std::ops::{Add, AddAssign};

/// A euro amount carried in minor units (cents).
///
/// Backed by `i128` so that summing any realistic number of `i64` payment
/// amounts cannot overflow.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default, Hash)]
pub struct Money(i128);

impl Money {
    pub const ZERO: Self = Self(0);

    pub fn minor(&self) -> i128 {
        self.0
    }

    /// Whole euros, truncated toward zero.
    pub fn whole(&self) -> i128 {
        self.0 / 100
    }

    /// Remainder in cents; carries the sign of the amount.
    pub fn cents(&self) -> i128 {
        self.0 % 100
    }
}

/// Renders `<whole>.<cents> EUR` with the whole part space-padded to four
/// columns and the cents zero-padded to two digits.
impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:>4}.{:02} EUR", self.whole(), self.cents())
    }
}

impl From<i64> for Money {
    fn from(minor: i64) -> Self {
        Self(minor.into())
    }
}

impl Add for Money {
    type Output = Self;
    fn add(self, rhs: Self) -> Self::Output {
        Self(self.0 + rhs.0)
    }
}

impl AddAssign for Money {
    fn add_assign(&mut self, rhs: Self) {
        self.0 += rhs.0;
    }
}

impl Money {
    /// `None` when the product leaves the `i128` range.
    pub fn checked_mul(self, factor: i64) -> Option<Self> {
        self.0.checked_mul(i128::from(factor)).map(Self)
    }
}

impl Sum for Money {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::ZERO, Add::add)
    }
}

/// Formats an amount given in minor units.
pub fn format_money(minor: i64) -> String {
    Money::from(minor).to_string()
}
