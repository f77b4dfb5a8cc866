use crate::error::{PaymentError, Result};
use serde_json::Value;
use std::fs::File;
use std::io::{self, BufReader, Read};
use std::path::Path;

pub const DEFAULT_PROPERTY: &str = "payments";

/// Reads the payments array out of a JSON document.
///
/// The array is looked up under a configurable top-level property. A missing
/// property, or one that does not hold an array, yields no records rather than
/// an error.
#[derive(Debug, Clone)]
pub struct PaymentReader {
    property: String,
}

impl Default for PaymentReader {
    fn default() -> Self {
        Self::new(DEFAULT_PROPERTY)
    }
}

impl PaymentReader {
    pub fn new(property: impl Into<String>) -> Self {
        Self {
            property: property.into(),
        }
    }

    pub fn property(&self) -> &str {
        &self.property
    }

    /// Loads the file at `path` fully into memory and extracts its records.
    ///
    /// The file handle is released before this returns.
    pub fn read_path(&self, path: &Path) -> Result<Vec<Value>> {
        let file = File::open(path).map_err(|source| match source.kind() {
            io::ErrorKind::NotFound => PaymentError::FileNotFound(path.to_path_buf()),
            _ => PaymentError::Io {
                path: path.to_path_buf(),
                source,
            },
        })?;
        self.read(file, path)
    }

    /// Reads records from any `Read` source; `origin` names it in errors.
    pub fn read<R: Read>(&self, input: R, origin: &Path) -> Result<Vec<Value>> {
        let document: Value =
            serde_json::from_reader(BufReader::new(input)).map_err(|source| {
                if source.is_io() {
                    PaymentError::Io {
                        path: origin.to_path_buf(),
                        source: source.into(),
                    }
                } else {
                    PaymentError::Json {
                        path: origin.to_path_buf(),
                        source,
                    }
                }
            })?;
        Ok(self.extract(document))
    }

    /// Pulls the records out of a parsed document.
    ///
    /// A document whose root is already an array is taken as-is.
    pub fn extract(&self, document: Value) -> Vec<Value> {
        match document {
            Value::Array(records) => records,
            Value::Object(mut root) => match root.remove(&self.property) {
                Some(Value::Array(records)) => records,
                _ => Vec::new(),
            },
            _ => Vec::new(),
        }
    }
}
