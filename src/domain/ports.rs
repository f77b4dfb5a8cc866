use super::payment::PaymentCandidate;
use super::validation::Violation;
use serde_json::Value;

/// Builds a candidate from one raw JSON record. Never fails.
pub trait RecordCoercer {
    fn coerce(&self, record: &Value) -> PaymentCandidate;
}

/// Decides whether a candidate may be accepted.
pub trait PaymentValidator {
    /// Every rule the candidate breaks; empty when it is valid.
    fn violations(&self, candidate: &PaymentCandidate) -> Vec<Violation>;

    fn is_valid(&self, candidate: &PaymentCandidate) -> bool {
        self.violations(candidate).is_empty()
    }
}

/// Renders candidates as text.
pub trait PaymentFormatter {
    /// The statement line for an accepted payment.
    fn statement(&self, candidate: &PaymentCandidate) -> String;

    /// A description that stays readable even when fields hold defaults.
    fn describe(&self, candidate: &PaymentCandidate) -> String;
}

pub type RecordCoercerBox = Box<dyn RecordCoercer>;
pub type PaymentValidatorBox = Box<dyn PaymentValidator>;
pub type PaymentFormatterBox = Box<dyn PaymentFormatter>;
