use super::payment::PaymentCandidate;
use super::ports::PaymentValidator;
use chrono::{DateTime, Utc};
use std::fmt;

pub const PAYMENT_ID_PREFIX: &str = "PY-";
pub const MIN_ORDER_ID: i64 = 1_000_000_000;
pub const MAX_ORDER_ID: i64 = 9_999_999_999;
/// `2020-01-01T00:00:00.000` UTC in epoch milliseconds.
pub const EARLIEST_RECEIVED_MILLIS: i64 = 1_577_836_800_000;

/// A business rule broken by a candidate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Violation {
    MissingPrefix,
    OrderIdOutOfRange,
    NonPositiveAmount,
    UnparseableTimestamp,
    ReceivedOutsideWindow,
}

impl fmt::Display for Violation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match self {
            Violation::MissingPrefix => "payment id lacks the PY- prefix",
            Violation::OrderIdOutOfRange => "order id is not a 10-digit number",
            Violation::NonPositiveAmount => "amount is not positive",
            Violation::UnparseableTimestamp => "received timestamp is unparseable",
            Violation::ReceivedOutsideWindow => "received timestamp is outside the accepted window",
        };
        f.write_str(text)
    }
}

/// The half-open interval `[lower, upper)` a payment must be received in,
/// held as epoch milliseconds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ValidityWindow {
    lower_millis: i64,
    upper_millis: i64,
}

impl ValidityWindow {
    /// Window from 2020-01-01 up to (excluding) `upper`, normally the run's
    /// start time.
    pub fn until(upper: DateTime<Utc>) -> Self {
        Self {
            lower_millis: EARLIEST_RECEIVED_MILLIS,
            upper_millis: upper.timestamp_millis(),
        }
    }

    pub fn contains(&self, instant: DateTime<Utc>) -> bool {
        let millis = instant.timestamp_millis();
        millis >= self.lower_millis && millis < self.upper_millis
    }
}

/// Applies the payment business rules against a fixed window.
#[derive(Debug, Clone, Copy)]
pub struct BusinessRuleValidator {
    window: ValidityWindow,
}

impl BusinessRuleValidator {
    pub fn new(window: ValidityWindow) -> Self {
        Self { window }
    }
}

impl PaymentValidator for BusinessRuleValidator {
    fn violations(&self, candidate: &PaymentCandidate) -> Vec<Violation> {
        let mut violations = Vec::new();

        if !candidate.payment_id().starts_with(PAYMENT_ID_PREFIX) {
            violations.push(Violation::MissingPrefix);
        }
        if !(MIN_ORDER_ID..=MAX_ORDER_ID).contains(&candidate.order_id()) {
            violations.push(Violation::OrderIdOutOfRange);
        }
        if candidate.amount_minor() <= 0 {
            violations.push(Violation::NonPositiveAmount);
        }
        match candidate.received_instant() {
            None => violations.push(Violation::UnparseableTimestamp),
            Some(instant) if !self.window.contains(instant) => {
                violations.push(Violation::ReceivedOutsideWindow)
            }
            Some(_) => {}
        }

        violations
    }
}
