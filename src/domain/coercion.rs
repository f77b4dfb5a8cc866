//! Total projections from untyped JSON values to the scalars a payment needs.
//!
//! None of these functions fail: absent or malformed input yields the
//! caller's default (or `None` for timestamps).

use super::payment::{PaymentCandidate, defaults, fields};
use super::ports::RecordCoercer;
use chrono::{DateTime, NaiveDateTime, Timelike, Utc};
use serde_json::Value;

/// chrono pattern for `YYYY-MM-DDTHH:mm:ss.sss`.
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%dT%H:%M:%S%.3f";

/// `D` marks a digit position, anything else must match literally.
const TIMESTAMP_SHAPE: &[u8; 23] = b"DDDD-DD-DDTDD:DD:DD.DDD";

pub fn coerce_string(value: Option<&Value>, default: &str) -> String {
    match value {
        Some(Value::String(s)) => s.clone(),
        Some(Value::Number(n)) => n.to_string(),
        Some(Value::Bool(b)) => b.to_string(),
        _ => default.to_string(),
    }
}

pub fn coerce_integer(value: Option<&Value>, default: i64) -> i64 {
    match value {
        Some(Value::Number(n)) => {
            if let Some(i) = n.as_i64() {
                i
            } else if n.is_u64() {
                // larger than i64::MAX
                default
            } else {
                n.as_f64().and_then(truncate_f64).unwrap_or(default)
            }
        }
        Some(Value::String(s)) => parse_integer_text(s.trim()).unwrap_or(default),
        _ => default,
    }
}

/// Integer text parses directly; decimal text such as `"129.99"` truncates.
fn parse_integer_text(text: &str) -> Option<i64> {
    text.parse()
        .ok()
        .or_else(|| text.parse::<f64>().ok().and_then(truncate_f64))
}

fn truncate_f64(f: f64) -> Option<i64> {
    // i64::MAX as f64 rounds up to 2^63, which is itself out of range
    if f.is_finite() && f >= i64::MIN as f64 && f < i64::MAX as f64 {
        Some(f.trunc() as i64)
    } else {
        None
    }
}

/// Parses a UTC timestamp of the exact form `2023-11-26T14:05:00.000`.
pub fn coerce_timestamp(text: &str) -> Option<DateTime<Utc>> {
    if !matches_shape(text) {
        return None;
    }
    NaiveDateTime::parse_from_str(text, TIMESTAMP_FORMAT)
        .ok()
        // %S admits a leap second `60`, carried as nanoseconds past 1e9
        .filter(|naive| naive.nanosecond() < 1_000_000_000)
        .map(|naive| naive.and_utc())
}

fn matches_shape(text: &str) -> bool {
    let bytes = text.as_bytes();
    bytes.len() == TIMESTAMP_SHAPE.len()
        && bytes
            .iter()
            .zip(TIMESTAMP_SHAPE)
            .all(|(&b, &expected)| match expected {
                b'D' => b.is_ascii_digit(),
                _ => b == expected,
            })
}

/// Coerces records using the field names of the payments file.
#[derive(Debug, Default, Clone, Copy)]
pub struct JsonRecordCoercer;

impl JsonRecordCoercer {
    pub fn new() -> Self {
        Self
    }
}

impl RecordCoercer for JsonRecordCoercer {
    fn coerce(&self, record: &Value) -> PaymentCandidate {
        let payment_id = coerce_string(record.get(fields::PAYMENT_ID), defaults::PAYMENT_ID);
        let order_id = coerce_integer(record.get(fields::ORDER_ID), defaults::ORDER_ID);
        let amount = record
            .get(fields::PAYMENT)
            .or_else(|| record.get(fields::AMOUNT));
        let amount_minor = coerce_integer(amount, defaults::AMOUNT_MINOR);
        let received_raw = coerce_string(record.get(fields::RECEIVED), defaults::RECEIVED);
        let received_instant = coerce_timestamp(&received_raw);

        PaymentCandidate::new(
            payment_id,
            order_id,
            amount_minor,
            received_raw,
            received_instant,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use serde_json::json;

    #[test]
    fn test_coerce_string_variants() {
        assert_eq!(coerce_string(Some(&json!("PY-1")), "x"), "PY-1");
        assert_eq!(coerce_string(Some(&json!(42)), "x"), "42");
        assert_eq!(coerce_string(Some(&json!(true)), "x"), "true");
        assert_eq!(coerce_string(Some(&Value::Null), "x"), "x");
        assert_eq!(coerce_string(Some(&json!([1, 2])), "x"), "x");
        assert_eq!(coerce_string(Some(&json!({"a": 1})), "x"), "x");
        assert_eq!(coerce_string(None, "x"), "x");
    }

    #[test]
    fn test_coerce_integer_variants() {
        assert_eq!(coerce_integer(Some(&json!(8592356245_i64)), -1), 8592356245);
        assert_eq!(coerce_integer(Some(&json!(-7)), -1), -7);
        assert_eq!(coerce_integer(Some(&json!(129.99)), -1), 129);
        assert_eq!(coerce_integer(Some(&json!(" 12979 ")), -1), 12979);
        assert_eq!(coerce_integer(Some(&json!("129.99")), -1), 129);
        assert_eq!(coerce_integer(Some(&json!("-0.5")), -1), 0);
        assert_eq!(coerce_integer(Some(&json!("12,50")), -1), -1);
        assert_eq!(coerce_integer(Some(&json!("NaN")), -1), -1);
        assert_eq!(coerce_integer(Some(&json!("inf")), -1), -1);
        assert_eq!(coerce_integer(Some(&json!(true)), -1), -1);
        assert_eq!(coerce_integer(Some(&Value::Null), -1), -1);
        assert_eq!(coerce_integer(None, -1), -1);
    }

    #[test]
    fn test_coerce_integer_out_of_range() {
        assert_eq!(coerce_integer(Some(&json!(u64::MAX)), -1), -1);
        assert_eq!(coerce_integer(Some(&json!(1e300)), -1), -1);
    }

    #[test]
    fn test_coerce_timestamp_exact_pattern() {
        let ts = coerce_timestamp("2023-11-26T14:05:00.000").unwrap();
        assert_eq!(ts, Utc.with_ymd_and_hms(2023, 11, 26, 14, 5, 0).unwrap());

        let ts = coerce_timestamp("2020-01-01T00:00:00.123").unwrap();
        assert_eq!(ts.nanosecond(), 123_000_000);
    }

    #[test]
    fn test_coerce_timestamp_rejects_other_shapes() {
        for text in [
            "",
            "2023-11-26",
            "2023-11-26T14:05:00",
            "2023-11-26T14:05:00.0",
            "2023-11-26T14:05:00.0000",
            "2023-11-26T14:05:00.000Z",
            "2023-11-26 14:05:00.000",
            "2023-11-26T14:05:00,000",
            "20200-1-01T00:00:00.000",
            " 2023-11-26T14:05:00.00",
        ] {
            assert_eq!(coerce_timestamp(text), None, "{text:?}");
        }
    }

    #[test]
    fn test_coerce_timestamp_rejects_impossible_dates() {
        assert_eq!(coerce_timestamp("2023-02-30T10:00:00.000"), None);
        assert_eq!(coerce_timestamp("2023-11-26T24:00:00.000"), None);
        assert_eq!(coerce_timestamp("2023-06-30T23:59:60.000"), None);
        assert_eq!(coerce_timestamp("2023-11-26T14:05:60.000"), None);
        assert!(coerce_timestamp("2023-06-30T23:59:59.999").is_some());
    }

    #[test]
    fn test_record_coercer_full_record() {
        let record = json!({
            "payment_id": "PY-529999371",
            "order_id": 8592356245_i64,
            "payment": 12979,
            "received": "2023-11-26T14:05:00.000"
        });
        let candidate = JsonRecordCoercer::new().coerce(&record);

        assert_eq!(candidate.payment_id(), "PY-529999371");
        assert_eq!(candidate.order_id(), 8592356245);
        assert_eq!(candidate.amount_minor(), 12979);
        assert_eq!(candidate.received_raw(), "2023-11-26T14:05:00.000");
        assert!(candidate.received_instant().is_some());
    }

    #[test]
    fn test_record_coercer_amount_fallback() {
        let record = json!({ "amount": 500 });
        let candidate = JsonRecordCoercer::new().coerce(&record);
        assert_eq!(candidate.amount_minor(), 500);

        // `payment` wins when both are present
        let record = json!({ "payment": 1, "amount": 500 });
        let candidate = JsonRecordCoercer::new().coerce(&record);
        assert_eq!(candidate.amount_minor(), 1);
    }

    #[test]
    fn test_record_coercer_defaults() {
        let candidate = JsonRecordCoercer::new().coerce(&json!({}));
        assert_eq!(candidate.payment_id(), " **** ***** ");
        assert_eq!(candidate.order_id(), -1);
        assert_eq!(candidate.amount_minor(), -1);
        assert_eq!(candidate.received_raw(), "");
        assert_eq!(candidate.received_instant(), None);

        // non-object elements coerce to all defaults as well
        let candidate = JsonRecordCoercer::new().coerce(&json!("PY-1"));
        assert_eq!(candidate.payment_id(), " **** ***** ");
    }
}
