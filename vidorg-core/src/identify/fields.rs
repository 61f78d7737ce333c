//! Lenient field access over the ffprobe JSON document.
//!
//! ffprobe reports most numbers as strings (`"size": "1048576"`), some as JSON
//! numbers (`"channels": 2`), and omits anything it does not know. Every read
//! in the extractor goes through [`ProbeValueExt`] so that a missing or
//! mistyped field turns into `None` instead of a panic.

use serde_json::Value;

/// Placeholder stored for string fields that ffprobe did not report.
pub const UNKNOWN: &str = "Unknown";

pub trait ProbeValueExt {
    /// Returns the raw value under `key`, if this is an object that has it.
    fn field(&self, key: &str) -> Option<&Value>;

    /// Returns the string under `key`.
    fn text(&self, key: &str) -> Option<&str>;

    /// Returns the string under `key` or [`UNKNOWN`].
    fn text_or_unknown(&self, key: &str) -> String {
        self.text(key).unwrap_or(UNKNOWN).to_string()
    }

    /// Returns an unsigned integer stored either as a JSON number or as a
    /// numeric string. Fractional values are truncated; negative values
    /// are rejected.
    fn uint(&self, key: &str) -> Option<u64>;

    /// Returns a float stored either as a JSON number or as a numeric string.
    fn float(&self, key: &str) -> Option<f64>;

    /// Reads a disposition-style flag (`0`/`1`, or a JSON boolean).
    fn flag(&self, key: &str) -> bool {
        match self.field(key) {
            Some(Value::Bool(b)) => *b,
            Some(v) => as_u64(v).is_some_and(|n| n != 0),
            None => false,
        }
    }

    /// Returns the string stored under `tags.<key>`.
    fn tag(&self, key: &str) -> Option<&str> {
        self.field("tags").and_then(|tags| tags.text(key))
    }

    /// Returns the unsigned integer stored under `tags.<key>`.
    fn tag_uint(&self, key: &str) -> Option<u64> {
        self.field("tags").and_then(|tags| tags.uint(key))
    }
}

impl ProbeValueExt for Value {
    fn field(&self, key: &str) -> Option<&Value> {
        self.get(key).filter(|v| !v.is_null())
    }

    fn text(&self, key: &str) -> Option<&str> {
        self.field(key).and_then(Value::as_str)
    }

    fn uint(&self, key: &str) -> Option<u64> {
        self.field(key).and_then(as_u64)
    }

    fn float(&self, key: &str) -> Option<f64> {
        self.field(key).and_then(as_f64)
    }
}

fn as_u64(value: &Value) -> Option<u64> {
    match value {
        Value::Number(n) => n.as_u64().or_else(|| {
            n.as_f64()
                .filter(|f| f.is_finite() && *f >= 0.0)
                .map(|f| f as u64)
        }),
        Value::String(s) => {
            let s = s.trim();
            s.parse::<u64>().ok().or_else(|| {
                s.parse::<f64>()
                    .ok()
                    .filter(|f| f.is_finite() && *f >= 0.0)
                    .map(|f| f as u64)
            })
        }
        _ => None,
    }
}

fn as_f64(value: &Value) -> Option<f64> {
    let parsed = match value {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse::<f64>().ok(),
        _ => None,
    };
    parsed.filter(|f| f.is_finite())
}
