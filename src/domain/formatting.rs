use super::payment::PaymentCandidate;
use super::ports::PaymentFormatter;
use chrono::{DateTime, Utc};

/// `26.Nov 2023, 14:05`
pub const STATEMENT_TIME_FORMAT: &str = "%d.%b %Y, %H:%M";
/// `26.Nov 2023, 14:05:00 (+000ms)`
pub const DESCRIPTION_TIME_FORMAT: &str = "%d.%b %Y, %H:%M:%S (+%3fms)";
/// Stands in for a timestamp that could not be parsed.
pub const MISSING_TIME: &str = " **** ";

/// Produces the German statement lines printed for accepted payments.
#[derive(Debug, Default, Clone, Copy)]
pub struct StatementFormatter;

impl StatementFormatter {
    pub fn new() -> Self {
        Self
    }
}

fn format_instant(instant: Option<DateTime<Utc>>, pattern: &str) -> String {
    instant
        .map(|t| t.format(pattern).to_string())
        .unwrap_or_else(|| MISSING_TIME.to_string())
}

impl PaymentFormatter for StatementFormatter {
    fn statement(&self, candidate: &PaymentCandidate) -> String {
        format!(
            "Zahlungseingang am [{} Uhr] fuer Bestellung ({}) ueber {}",
            format_instant(candidate.received_instant(), STATEMENT_TIME_FORMAT),
            candidate.order_id(),
            candidate.amount(),
        )
    }

    fn describe(&self, candidate: &PaymentCandidate) -> String {
        format!(
            "payment({}) for order({}) of [{}], received \"{}\"",
            candidate.payment_id(),
            candidate.order_id(),
            candidate.amount(),
            format_instant(candidate.received_instant(), DESCRIPTION_TIME_FORMAT),
        )
    }
}
