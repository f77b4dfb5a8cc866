use crate::application::aggregator::DEFAULT_COLUMN_WIDTH;
use crate::domain::validation::ValidityWindow;
use crate::interfaces::json::payment_reader::DEFAULT_PROPERTY;
use chrono::Utc;
use clap::Parser;
use std::path::PathBuf;

pub const DEFAULT_INPUT: &str = "./data/payments.json";

/// Print statements for the valid payments in a JSON file and their total.
#[derive(Parser, Debug, Clone)]
#[command(author, version, about, long_about = None)]
pub struct Config {
    /// Input payments JSON file
    #[arg(default_value = DEFAULT_INPUT)]
    pub input: PathBuf,

    /// Top-level property holding the payments array
    #[arg(long, default_value = DEFAULT_PROPERTY)]
    pub property: String,

    /// Column the total block is right-aligned to
    #[arg(long, default_value_t = DEFAULT_COLUMN_WIDTH)]
    pub width: usize,

    /// Precision scale applied to the summed minor units (precision scale: 1)
    #[arg(long, default_value_t = 1, value_parser = clap::value_parser!(i64).range(1..))]
    pub scale: i64,

    /// Do not print the greeting line
    #[arg(long, short)]
    pub quiet: bool,
}

impl Config {
    /// Captures the current time as the exclusive upper bound for this run.
    pub fn validity_window(&self) -> ValidityWindow {
        ValidityWindow::until(Utc::now())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = Config::parse_from(["payment-statements"]);
        assert_eq!(config.input, PathBuf::from("./data/payments.json"));
        assert_eq!(config.property, "payments");
        assert_eq!(config.width, 91);
        assert_eq!(config.scale, 1);
        assert!(!config.quiet);
    }

    #[test]
    fn test_overrides() {
        let config = Config::parse_from([
            "payment-statements",
            "in.json",
            "--property",
            "incoming",
            "--width",
            "40",
            "--scale",
            "10",
            "-q",
        ]);
        assert_eq!(config.input, PathBuf::from("in.json"));
        assert_eq!(config.property, "incoming");
        assert_eq!(config.width, 40);
        assert_eq!(config.scale, 10);
        assert!(config.quiet);
    }

    #[test]
    fn test_scale_must_be_positive() {
        for scale in ["0", "-3"] {
            let result = Config::try_parse_from(["payment-statements", "--scale", scale]);
            assert!(result.is_err(), "scale {scale} should be refused");
        }
    }

    #[test]
    fn test_clap_definition() {
        use clap::CommandFactory;
        Config::command().debug_assert();
    }
}
