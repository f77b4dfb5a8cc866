use crate::domain::payment::{AcceptedPayment, Rejection};
use crate::domain::ports::{PaymentFormatterBox, PaymentValidatorBox, RecordCoercerBox};
use serde_json::Value;
use tracing::debug;

/// Outcome of one pipeline run, in input order.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct PipelineReport {
    accepted: Vec<AcceptedPayment>,
    rejections: Vec<Rejection>,
}

impl PipelineReport {
    pub fn accepted(&self) -> &[AcceptedPayment] {
        &self.accepted
    }

    pub fn rejections(&self) -> &[Rejection] {
        &self.rejections
    }

    /// Minor-unit amounts of the accepted payments.
    pub fn amounts(&self) -> impl Iterator<Item = i64> + '_ {
        self.accepted.iter().map(|payment| payment.amount_minor)
    }
}

/// Turns raw JSON records into statement lines.
///
/// `PaymentPipeline` owns its collaborators and applies them to each record in
/// turn: coerce, validate, then format. A record that fails validation is
/// recorded as a rejection and never stops the run.
pub struct PaymentPipeline {
    coercer: RecordCoercerBox,
    validator: PaymentValidatorBox,
    formatter: PaymentFormatterBox,
}

impl PaymentPipeline {
    /// Creates a new `PaymentPipeline` instance.
    ///
    /// # Arguments
    ///
    /// * `coercer` - Builds candidates from raw records.
    /// * `validator` - Applies the business rules.
    /// * `formatter` - Renders statement lines and rejection descriptions.
    pub fn new(
        coercer: RecordCoercerBox,
        validator: PaymentValidatorBox,
        formatter: PaymentFormatterBox,
    ) -> Self {
        Self {
            coercer,
            validator,
            formatter,
        }
    }

    pub fn run(&self, records: &[Value]) -> PipelineReport {
        let mut report = PipelineReport::default();

        for record in records {
            let candidate = self.coercer.coerce(record);
            let violations = self.validator.violations(&candidate);

            if violations.is_empty() {
                let line = self.formatter.statement(&candidate);
                debug!(payment_id = candidate.payment_id(), "accepted payment");
                report.accepted.push(AcceptedPayment {
                    payment_id: candidate.payment_id().to_string(),
                    order_id: candidate.order_id(),
                    amount_minor: candidate.amount_minor(),
                    line,
                });
            } else {
                let description = self.formatter.describe(&candidate);
                debug!(?violations, %description, "rejected payment");
                report.rejections.push(Rejection {
                    description,
                    violations,
                });
            }
        }

        report
    }
}
