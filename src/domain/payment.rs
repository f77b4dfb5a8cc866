use super::money::Money;
use super::validation::Violation;
use chrono::{DateTime, Utc};

/// Field names read from each element of the payments array.
pub mod fields {
    pub const PAYMENT_ID: &str = "payment_id";
    pub const ORDER_ID: &str = "order_id";
    pub const PAYMENT: &str = "payment";
    /// Accepted in place of `payment` when that field is absent.
    pub const AMOUNT: &str = "amount";
    pub const RECEIVED: &str = "received";
}

/// Defaults substituted when a field is missing or malformed.
pub mod defaults {
    pub const PAYMENT_ID: &str = " **** ***** ";
    pub const ORDER_ID: i64 = -1;
    pub const AMOUNT_MINOR: i64 = -1;
    pub const RECEIVED: &str = "";
}

/// A payment as extracted from one JSON record, before validation.
///
/// Built once by a coercer and never mutated afterwards; validity is decided
/// purely from these fields.
#[derive(Debug, Clone, PartialEq)]
pub struct PaymentCandidate {
    payment_id: String,
    order_id: i64,
    amount_minor: i64,
    received_raw: String,
    received_instant: Option<DateTime<Utc>>,
}

impl PaymentCandidate {
    pub fn new(
        payment_id: String,
        order_id: i64,
        amount_minor: i64,
        received_raw: String,
        received_instant: Option<DateTime<Utc>>,
    ) -> Self {
        Self {
            payment_id,
            order_id,
            amount_minor,
            received_raw,
            received_instant,
        }
    }

    pub fn payment_id(&self) -> &str {
        &self.payment_id
    }

    pub fn order_id(&self) -> i64 {
        self.order_id
    }

    pub fn amount_minor(&self) -> i64 {
        self.amount_minor
    }

    pub fn amount(&self) -> Money {
        Money::from(self.amount_minor)
    }

    pub fn received_raw(&self) -> &str {
        &self.received_raw
    }

    pub fn received_instant(&self) -> Option<DateTime<Utc>> {
        self.received_instant
    }
}

/// A candidate that passed every rule, with its statement line.
#[derive(Debug, Clone, PartialEq)]
pub struct AcceptedPayment {
    pub payment_id: String,
    pub order_id: i64,
    pub amount_minor: i64,
    pub line: String,
}

/// A candidate that failed at least one rule.
#[derive(Debug, Clone, PartialEq)]
pub struct Rejection {
    /// Best-effort description of the record.
    pub description: String,
    pub violations: Vec<Violation>,
}
