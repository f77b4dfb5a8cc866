//! Application layer orchestrating the payment statement run.
//!
//! `PaymentPipeline` takes raw records through coercion, validation and
//! formatting; `Aggregator` folds the accepted amounts into the grand total.

pub mod aggregator;
pub mod pipeline;
