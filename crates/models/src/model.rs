//! The validation-gate and serialization contract shared by every model.

use rust_decimal::Decimal;
use serde_json::{Map, Value};
use time::OffsetDateTime;
use tracing::debug;

use crate::datetime;
use crate::error::ModelError;
use crate::guard::Schema;
use crate::numeric;

/// A value object with a validated JSON shape.
pub trait JsonModel: Sized {
    /// Human-readable model name used in diagnostics.
    const KIND: &'static str;

    /// The field-by-field shape of this model's JSON.
    fn schema() -> &'static Schema;

    /// Build the model from an object that has already passed [`Self::schema`].
    fn from_valid_json(input: &Map<String, Value>) -> Result<Self, ModelError>;

    /// The JSON form. Always succeeds and always satisfies the schema.
    fn to_json(&self) -> Value;

    fn is_json(input: &Value) -> bool {
        Self::schema().is_valid(input)
    }

    /// Failing field names, `["root"]` for non-objects, empty when valid.
    fn json_test(input: &Value) -> Vec<String> {
        Self::schema().failing_fields(input)
    }

    fn from_json(input: &Value) -> Result<Self, ModelError> {
        match input.as_object() {
            Some(obj) if Self::is_json(input) => Self::from_valid_json(obj),
            _ => {
                let fields = Self::json_test(input);
                debug!(kind = Self::KIND, ?fields, "rejected invalid input");
                Err(ModelError::InvalidInput { fields })
            }
        }
    }

    /// Merge `overrides` onto the current JSON and validate the result.
    fn copy_with(&self, overrides: &Map<String, Value>) -> Result<Self, ModelError> {
        let mut merged = match self.to_json() {
            Value::Object(obj) => obj,
            _ => Map::new(),
        };
        for (key, value) in overrides {
            merged.insert(key.clone(), value.clone());
        }
        Self::from_json(&Value::Object(merged))
    }
}

// ── Field extraction ────────────────────────────────────────────────
//
// Each helper re-checks its field so that a schema/extractor mismatch
// surfaces as an InvalidInput naming the field rather than a panic.

pub(crate) fn required_str(obj: &Map<String, Value>, field: &str) -> Result<String, ModelError> {
    obj.get(field)
        .and_then(Value::as_str)
        .map(str::to_string)
        .ok_or_else(|| ModelError::invalid_input([field]))
}

fn decimal_field(value: &Value, field: &str) -> Result<Decimal, ModelError> {
    match value {
        Value::Number(n) => {
            numeric::decimal_from_json(value).ok_or_else(|| ModelError::NumberOutOfRange {
                field: field.to_string(),
                value: n.to_string(),
            })
        }
        _ => Err(ModelError::invalid_input([field])),
    }
}

pub(crate) fn required_decimal(
    obj: &Map<String, Value>,
    field: &str,
) -> Result<Decimal, ModelError> {
    let value = obj
        .get(field)
        .ok_or_else(|| ModelError::invalid_input([field]))?;
    decimal_field(value, field)
}

pub(crate) fn optional_decimal(
    obj: &Map<String, Value>,
    field: &str,
) -> Result<Option<Decimal>, ModelError> {
    match obj.get(field) {
        None | Some(Value::Null) => Ok(None),
        Some(value) => decimal_field(value, field).map(Some),
    }
}

pub(crate) fn required_date(
    obj: &Map<String, Value>,
    field: &str,
) -> Result<OffsetDateTime, ModelError> {
    let raw = obj
        .get(field)
        .and_then(Value::as_str)
        .ok_or_else(|| ModelError::invalid_input([field]))?;
    datetime::parse_date_time(raw)
}

pub(crate) fn required_object<'a>(
    obj: &'a Map<String, Value>,
    field: &str,
) -> Result<&'a Value, ModelError> {
    obj.get(field)
        .filter(|v| v.is_object())
        .ok_or_else(|| ModelError::invalid_input([field]))
}

/// Insert `value` under `field` of a JSON object unless it is `None`.
pub(crate) fn insert_optional_decimal(target: &mut Value, field: &str, value: Option<Decimal>) {
    if let (Some(d), Some(obj)) = (value, target.as_object_mut()) {
        obj.insert(field.to_string(), numeric::decimal_to_json(d));
    }
}

pub(crate) fn new_id() -> String {
    uuid::Uuid::new_v4().to_string()
}
