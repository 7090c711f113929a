//! Transaction validation.
//!
//! Uploads are checked strictly: one bad record rejects the whole file before
//! anything is sent. Lists read back from the backend are normalized leniently:
//! fields are coerced the way a browser's `Number()`/`String()` would and only
//! the records that still don't conform are dropped.

use serde_json::{Map, Value};

use crate::error::ValidationError;
use crate::models::Transaction;

pub fn validate_upload(value: &Value) -> Result<Vec<Transaction>, ValidationError> {
    let records = value.as_array().ok_or(ValidationError::NotAnArray)?;
    records
        .iter()
        .enumerate()
        .map(|(index, record)| validate_record(index, record))
        .collect()
}

fn validate_record(index: usize, record: &Value) -> Result<Transaction, ValidationError> {
    let fields = record
        .as_object()
        .ok_or(ValidationError::NotAnObject { index })?;

    Ok(Transaction {
        id: strict_number(fields, index, "id")?,
        amount: strict_number(fields, index, "amount")?,
        category: strict_text(fields, index, "category")?,
        date: strict_text(fields, index, "date")?,
    })
}

fn strict_number(
    fields: &Map<String, Value>,
    index: usize,
    field: &'static str,
) -> Result<f64, ValidationError> {
    fields
        .get(field)
        .and_then(Value::as_f64)
        .filter(|n| n.is_finite())
        .ok_or(ValidationError::InvalidField {
            index,
            field,
            expected: "a number",
        })
}

fn strict_text(
    fields: &Map<String, Value>,
    index: usize,
    field: &'static str,
) -> Result<String, ValidationError> {
    match fields.get(field) {
        Some(Value::String(s)) if !s.is_empty() => Ok(s.clone()),
        _ => Err(ValidationError::InvalidField {
            index,
            field,
            expected: "a non-empty string",
        }),
    }
}

pub fn normalize_transactions(records: Vec<Value>) -> Vec<Transaction> {
    let total = records.len();
    let kept: Vec<Transaction> = records.iter().filter_map(coerce_record).collect();
    if kept.len() < total {
        log::debug!("dropped {} malformed transaction(s)", total - kept.len());
    }
    kept
}

fn coerce_record(record: &Value) -> Option<Transaction> {
    let fields = record.as_object()?;
    let id = coerce_number(fields.get("id"));
    let amount = coerce_number(fields.get("amount"));
    if !id.is_finite() || !amount.is_finite() {
        return None;
    }
    let category = coerce_text(fields.get("category")).filter(|s| !s.is_empty())?;
    let date = coerce_text(fields.get("date")).filter(|s| !s.is_empty())?;
    Some(Transaction {
        id,
        amount,
        category,
        date,
    })
}

/// `Number(value)` as a browser evaluates it. Missing fields are `undefined`,
/// which becomes NaN.
pub fn coerce_number(value: Option<&Value>) -> f64 {
    match value {
        None => f64::NAN,
        Some(Value::Null) => 0.0,
        Some(Value::Bool(b)) => {
            if *b {
                1.0
            } else {
                0.0
            }
        }
        Some(Value::Number(n)) => n.as_f64().unwrap_or(f64::NAN),
        Some(Value::String(s)) => {
            let s = s.trim();
            if s.is_empty() {
                0.0
            } else {
                s.parse::<f64>().unwrap_or(f64::NAN)
            }
        }
        Some(Value::Array(_)) | Some(Value::Object(_)) => f64::NAN,
    }
}

/// `String(value)` for scalar values. Null, missing and compound values have
/// no usable text and yield `None`.
pub fn coerce_text(value: Option<&Value>) -> Option<String> {
    match value? {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => n.as_f64().map(|f| f.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        Value::Null | Value::Array(_) | Value::Object(_) => None,
    }
}
