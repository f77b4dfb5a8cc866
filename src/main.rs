use clap::Parser;
use miette::{IntoDiagnostic, Result};
use payment_statements::application::aggregator::Aggregator;
use payment_statements::application::pipeline::PaymentPipeline;
use payment_statements::config::Config;
use payment_statements::domain::coercion::JsonRecordCoercer;
use payment_statements::domain::formatting::StatementFormatter;
use payment_statements::domain::validation::BusinessRuleValidator;
use payment_statements::interfaces::console::report_writer::ReportWriter;
use payment_statements::interfaces::json::payment_reader::PaymentReader;
use std::io;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_writer(io::stderr)
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .init();

    let cli = Config::parse();
    // upper bound is fixed once for the whole run
    let window = cli.validity_window();

    let stdout = io::stdout();
    let stderr = io::stderr();
    let mut writer = ReportWriter::new(stdout.lock(), stderr.lock());

    if !cli.quiet {
        writer.write_greeting().into_diagnostic()?;
    }

    // A file that cannot be loaded is reported and the run continues empty
    let reader = PaymentReader::new(cli.property.as_str());
    let records = match reader.read_path(&cli.input) {
        Ok(records) => {
            info!(
                path = %cli.input.display(),
                property = reader.property(),
                count = records.len(),
                "loaded payments"
            );
            records
        }
        Err(e) => {
            warn!(error = %e, "failed to load payments");
            writer.write_failure(&e).into_diagnostic()?;
            Vec::new()
        }
    };

    let pipeline = PaymentPipeline::new(
        Box::new(JsonRecordCoercer::new()),
        Box::new(BusinessRuleValidator::new(window)),
        Box::new(StatementFormatter::new()),
    );
    let report = pipeline.run(&records);
    info!(
        accepted = report.accepted().len(),
        rejected = report.rejections().len(),
        "processed payments"
    );

    writer.write_rejections(report.rejections()).into_diagnostic()?;
    writer.write_statements(report.accepted()).into_diagnostic()?;

    let mut aggregator = Aggregator::new(cli.scale);
    aggregator.extend(report.amounts());
    let block = aggregator.render(cli.width).into_diagnostic()?;
    writer.write_total(&block).into_diagnostic()?;
    writer.flush().into_diagnostic()?;

    Ok(())
}
