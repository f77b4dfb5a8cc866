use crate::domain::payment::{AcceptedPayment, Rejection};
use crate::error::PaymentError;
use std::io::{self, Write};

pub const GREETING: &str = "Hello, payment system!";
pub const REJECTION_PREFIX: &str = "dropped (invalid payment): ";

/// Writes the run's results to two sinks.
///
/// Statements and the total block go to `out`; rejections and load failures go
/// to `err`. In the binary these are stdout and stderr.
pub struct ReportWriter<O: Write, E: Write> {
    out: O,
    err: E,
}

impl<O: Write, E: Write> ReportWriter<O, E> {
    pub fn new(out: O, err: E) -> Self {
        Self { out, err }
    }

    pub fn write_greeting(&mut self) -> io::Result<()> {
        writeln!(self.out, "{GREETING}")
    }

    pub fn write_statements(&mut self, payments: &[AcceptedPayment]) -> io::Result<()> {
        for payment in payments {
            writeln!(self.out, "{}", payment.line)?;
        }
        Ok(())
    }

    pub fn write_rejections(&mut self, rejections: &[Rejection]) -> io::Result<()> {
        for rejection in rejections {
            writeln!(self.err, "{REJECTION_PREFIX}{}", rejection.description)?;
        }
        Ok(())
    }

    pub fn write_failure(&mut self, error: &PaymentError) -> io::Result<()> {
        writeln!(self.err, "{error}")
    }

    /// Writes the total block produced by `Aggregator::render`.
    pub fn write_total(&mut self, block: &str) -> io::Result<()> {
        writeln!(self.out, "{block}")
    }

    pub fn flush(&mut self) -> io::Result<()> {
        self.out.flush()?;
        self.err.flush()
    }

    pub fn into_inner(self) -> (O, E) {
        (self.out, self.err)
    }
}
