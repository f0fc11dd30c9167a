//! Canonical JSON bytes: the single serialization-for-hashing routine.
//!
//! # Canonicalization rules
//!
//! 1. Object keys sorted lexicographically (byte order).
//! 2. Compact form, no whitespace: `{"a":1,"b":[2,3]}`.
//! 3. Numbers must be integers. Floats are rejected so digests never depend
//!    on float formatting.
//! 4. Strings are emitted as UTF-8 with JSON escaping.
//!
//! Objects are rebuilt with keys inserted in sorted order before
//! serialization, so the output is sorted whether or not some crate in the
//! build graph enables `serde_json/preserve_order`.

use serde_json::Value;

/// Error type for canonical JSON serialization.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CanonError {
    /// A JSON number was not an integer.
    NonIntegerNumber { raw: String },
    /// `serde_json` failed to serialize the value.
    Serialize { detail: String },
}

impl std::fmt::Display for CanonError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NonIntegerNumber { raw } => {
                write!(f, "non-integer number in canonical JSON: {raw}")
            }
            Self::Serialize { detail } => write!(f, "JSON serialization failed: {detail}"),
        }
    }
}

impl std::error::Error for CanonError {}

/// Produce canonical JSON bytes from a `serde_json::Value`.
///
/// # Errors
///
/// Returns [`CanonError::NonIntegerNumber`] if any number is not representable
/// as `i64` or `u64`.
pub fn canonical_json_bytes(value: &Value) -> Result<Vec<u8>, CanonError> {
    reject_non_integers(value)?;
    serde_json::to_vec(&sorted(value)).map_err(|e| CanonError::Serialize {
        detail: e.to_string(),
    })
}

/// True if `bytes` parse as JSON and re-serialize to exactly the same bytes.
#[must_use]
pub fn is_canonical_json(bytes: &[u8]) -> bool {
    let Ok(value) = serde_json::from_slice::<Value>(bytes) else {
        return false;
    };
    canonical_json_bytes(&value).is_ok_and(|canon| canon == bytes)
}

fn sorted(value: &Value) -> Value {
    match value {
        Value::Array(items) => Value::Array(items.iter().map(sorted).collect()),
        Value::Object(map) => {
            let mut keys: Vec<&String> = map.keys().collect();
            keys.sort();
            let mut out = serde_json::Map::new();
            for key in keys {
                out.insert(key.clone(), sorted(&map[key]));
            }
            Value::Object(out)
        }
        other => other.clone(),
    }
}

fn reject_non_integers(value: &Value) -> Result<(), CanonError> {
    match value {
        Value::Number(n) if !(n.is_i64() || n.is_u64()) => Err(CanonError::NonIntegerNumber {
            raw: n.to_string(),
        }),
        Value::Array(items) => items.iter().try_for_each(reject_non_integers),
        Value::Object(map) => map.values().try_for_each(reject_non_integers),
        _ => Ok(()),
    }
}
