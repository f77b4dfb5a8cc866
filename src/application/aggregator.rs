use crate::domain::money::Money;
use crate::error::{PaymentError, Result};

/// Width of the separator rules framing the total.
pub const RULE_WIDTH: usize = 13;
/// Column the total block is right-aligned to.
pub const DEFAULT_COLUMN_WIDTH: usize = 91;

/// Running total of accepted payments for one run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Aggregator {
    sum: Money,
    scale: i64,
}

impl Default for Aggregator {
    fn default() -> Self {
        Self::new(1)
    }
}

impl Aggregator {
    /// `scale` multiplies the summed minor units before rendering. A scale of
    /// 1 renders the minor-unit sum directly.
    pub fn new(scale: i64) -> Self {
        Self {
            sum: Money::ZERO,
            scale,
        }
    }

    pub fn add(&mut self, amount_minor: i64) {
        self.sum += Money::from(amount_minor);
    }

    pub fn total(&self) -> Result<Money> {
        self.sum
            .checked_mul(self.scale)
            .ok_or(PaymentError::TotalOverflow { scale: self.scale })
    }

    /// The dashed rule, the total and the double rule, each right-aligned to
    /// `width` columns.
    pub fn render(&self, width: usize) -> Result<String> {
        let total = self.total()?.to_string();
        Ok(format!(
            "{:>width$}\n{:>width$}\n{:>width$}",
            "-".repeat(RULE_WIDTH),
            total,
            "=".repeat(RULE_WIDTH),
        ))
    }
}

impl Extend<i64> for Aggregator {
    fn extend<T: IntoIterator<Item = i64>>(&mut self, iter: T) {
        for amount in iter {
            self.add(amount);
        }
    }
}
