#![allow(dead_code)]

use serde_json::{Value, json};
use std::io::Write;
use tempfile::NamedTempFile;

/// A record that passes every rule when the timestamp is in the past.
pub fn record(payment_id: &str, order_id: i64, payment: i64, received: &str) -> Value {
    json!({
        "payment_id": payment_id,
        "order_id": order_id,
        "payment": payment,
        "received": received,
    })
}

pub fn write_document(document: &Value) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    serde_json::to_writer(&mut file, document).unwrap();
    file.flush().unwrap();
    file
}

pub fn write_payments(records: Vec<Value>) -> NamedTempFile {
    write_document(&json!({ "payments": records }))
}

pub fn write_raw(contents: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(contents.as_bytes()).unwrap();
    file.flush().unwrap();
    file
}
