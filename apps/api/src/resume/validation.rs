use serde_json::{Map, Value};

use crate::errors::AppError;
use crate::models::resume::Record;

/// Checks a candidate field-set against the required fields of `T` and
/// builds the record.
///
/// A field passes when it is present, is a JSON string, and is not blank.
/// The same rule applies to create and replace. Unknown fields are ignored.
pub fn validate_record<T: Record>(payload: &Value) -> Result<T, AppError> {
    let fields = payload.as_object().ok_or_else(missing_fields::<T>)?;

    if !has_required_fields(fields, T::REQUIRED_FIELDS) {
        return Err(missing_fields::<T>());
    }

    let required: Map<String, Value> = T::REQUIRED_FIELDS
        .iter()
        .filter_map(|&name| fields.get(name).map(|v| (name.to_string(), v.clone())))
        .collect();

    serde_json::from_value(Value::Object(required)).map_err(|_| missing_fields::<T>())
}

pub fn has_required_fields(fields: &Map<String, Value>, required: &[&str]) -> bool {
    required.iter().all(|name| {
        fields
            .get(*name)
            .and_then(Value::as_str)
            .is_some_and(|s| !s.trim().is_empty())
    })
}

fn missing_fields<T: Record>() -> AppError {
    AppError::Validation(format!(
        "Invalid input, all fields ({}) are required",
        T::REQUIRED_FIELDS.join(", ")
    ))
}
