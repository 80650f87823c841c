use crate::core::data_type::DataType;
use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

/// A single scalar cell decoded from a query result.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub enum Value {
    Int(i64),
    Uint(u64),
    Float(f64),
    String(String),
    Boolean(bool),
    Json(serde_json::Value),
    Uuid(Uuid),
    Bytes(Vec<u8>),
    Date(NaiveDate),
    Timestamp(DateTime<Utc>),
    Null,
}

impl Value {
    /// Numeric coercion used for index tracking: integers and floats pass
    /// through, strings are parsed, booleans map to 0/1.
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Value::Int(v) => Some(*v as f64),
            Value::Uint(v) => Some(*v as f64),
            Value::Float(v) => Some(*v),
            Value::String(v) => v.parse::<f64>().ok(),
            Value::Boolean(v) => Some(if *v { 1.0 } else { 0.0 }),
            Value::Json(v) => v.as_f64(),
            Value::Uuid(_) => None,
            Value::Bytes(_) => None,
            Value::Date(_) => None,
            Value::Timestamp(_) => None,
            Value::Null => None,
        }
    }

    /// Lossless mapping into a JSON value for the `json` row format.
    pub fn to_json(&self) -> serde_json::Value {
        match self {
            Value::Int(v) => serde_json::Value::from(*v),
            Value::Uint(v) => serde_json::Value::from(*v),
            Value::Float(v) => serde_json::Number::from_f64(*v)
                .map(serde_json::Value::Number)
                .unwrap_or(serde_json::Value::Null),
            Value::String(v) => serde_json::Value::String(v.clone()),
            Value::Boolean(v) => serde_json::Value::Bool(*v),
            Value::Json(v) => v.clone(),
            Value::Uuid(v) => serde_json::Value::String(v.to_string()),
            Value::Bytes(v) => serde_json::Value::String(hex_string(v)),
            Value::Date(v) => serde_json::Value::String(v.to_string()),
            Value::Timestamp(v) => serde_json::Value::String(v.to_rfc3339()),
            Value::Null => serde_json::Value::Null,
        }
    }

}

fn hex_string(bytes: &[u8]) -> String {
    bytes
        .iter()
        .fold(String::new(), |acc, byte| acc + &format!("{byte:02x}"))
}

/// Plain unquoted rendering used by the `dbx` format and the ROW
/// timestamp field. NULL renders as the empty string.
impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Int(v) => write!(f, "{v}"),
            Value::Uint(v) => write!(f, "{v}"),
            Value::Float(v) => write!(f, "{v}"),
            Value::String(v) => write!(f, "{v}"),
            Value::Boolean(v) => write!(f, "{v}"),
            Value::Json(v) => write!(f, "{v}"),
            Value::Uuid(v) => write!(f, "{v}"),
            Value::Bytes(v) => write!(f, "{}", hex_string(v)),
            Value::Date(v) => write!(f, "{v}"),
            Value::Timestamp(v) => write!(f, "{}", v.to_rfc3339()),
            Value::Null => Ok(()),
        }
    }
}

/// A named column slot within a row. `value` is `None` when the driver
/// could not decode the cell.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FieldValue {
    pub name: String,
    pub value: Option<Value>,
    pub data_type: DataType,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_as_f64_numeric_variants() {
        assert_eq!(Value::Int(-3).as_f64(), Some(-3.0));
        assert_eq!(Value::Uint(7).as_f64(), Some(7.0));
        assert_eq!(Value::Float(2.5).as_f64(), Some(2.5));
        assert_eq!(Value::Boolean(true).as_f64(), Some(1.0));
    }

    #[test]
    fn test_as_f64_parses_strings() {
        assert_eq!(Value::String("42".into()).as_f64(), Some(42.0));
        assert_eq!(Value::String("3.14".into()).as_f64(), Some(3.14));
        assert_eq!(Value::String("abc".into()).as_f64(), None);
    }

    #[test]
    fn test_as_f64_rejects_non_numeric() {
        assert_eq!(Value::Null.as_f64(), None);
        assert_eq!(Value::Bytes(vec![1, 2]).as_f64(), None);
        assert_eq!(Value::Date(NaiveDate::from_ymd_opt(2024, 1, 1).unwrap()).as_f64(), None);
    }

    #[test]
    fn test_display_is_plain_text() {
        assert_eq!(Value::Int(3).to_string(), "3");
        assert_eq!(Value::Float(3.0).to_string(), "3");
        assert_eq!(Value::String("hello world".into()).to_string(), "hello world");
        assert_eq!(Value::Null.to_string(), "");
        assert_eq!(Value::Bytes(vec![0xde, 0xad]).to_string(), "dead");
    }

    #[test]
    fn test_to_json_round_trips_scalars() {
        assert_eq!(Value::Int(3).to_json(), serde_json::json!(3));
        assert_eq!(Value::String("c".into()).to_json(), serde_json::json!("c"));
        assert_eq!(Value::Boolean(false).to_json(), serde_json::json!(false));
        assert_eq!(Value::Null.to_json(), serde_json::Value::Null);
    }

    #[test]
    fn test_to_json_nan_becomes_null() {
        assert_eq!(Value::Float(f64::NAN).to_json(), serde_json::Value::Null);
    }
}
