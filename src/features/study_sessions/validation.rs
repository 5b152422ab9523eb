use serde_json::{Map, Value};

use crate::data::models::{ApiError, ReviewRequest};

/// Any non-object body, including falsy ones like `[]` or `0`, is rejected here
/// before field checks run.
pub fn require_object(body: &Value) -> Result<&Map<String, Value>, ApiError> {
    body.as_object()
        .ok_or_else(|| ApiError::BadRequest("Request body must be a JSON object".into()))
}

fn missing(field: &str) -> ApiError {
    ApiError::BadRequest(format!("Missing required field: {}", field))
}

fn wrong_type(field: &str, expected: &str) -> ApiError {
    ApiError::BadRequest(format!(
        "Invalid type for field {}. Expected {}",
        field, expected
    ))
}

/// Lenient integer conversion: integers, finite floats (truncated), booleans and
/// decimal strings are accepted.
pub fn coerce_int(value: &Value) -> Option<i64> {
    match value {
        Value::Number(n) => n.as_i64().or_else(|| {
            n.as_f64()
                .filter(|f| f.is_finite() && f.trunc() >= i64::MIN as f64 && f.trunc() < i64::MAX as f64)
                .map(|f| f.trunc() as i64)
        }),
        Value::Bool(b) => Some(i64::from(*b)),
        Value::String(s) => s.trim().parse::<i64>().ok(),
        _ => None,
    }
}

/// Required id field, coerced to an integer. Ids outside the 32-bit range are
/// reported as a type error.
pub fn coerced_id_field(fields: &Map<String, Value>, field: &str) -> Result<i32, ApiError> {
    let value = fields.get(field).ok_or_else(|| missing(field))?;
    coerce_int(value)
        .and_then(|n| i32::try_from(n).ok())
        .ok_or_else(|| wrong_type(field, "int"))
}

/// Builds a review request with no coercion: `rating` must be a JSON integer and
/// `completion_status` a JSON string. Range and enum checks are left to `validate()`.
pub fn strict_review_request(fields: &Map<String, Value>) -> Result<ReviewRequest, ApiError> {
    let rating = match fields.get("rating") {
        None => return Err(missing("rating")),
        // integers beyond i64 are still ints; the range check rejects them
        Some(Value::Number(n)) if n.is_u64() => n.as_i64().unwrap_or(i64::MAX),
        Some(Value::Number(n)) => n.as_i64().ok_or_else(|| wrong_type("rating", "int"))?,
        Some(_) => return Err(wrong_type("rating", "int")),
    };

    let completion_status = match fields.get("completion_status") {
        None => return Err(missing("completion_status")),
        Some(Value::String(s)) => s.clone(),
        Some(_) => return Err(wrong_type("completion_status", "str")),
    };

    let feedback = match fields.get("feedback") {
        None | Some(Value::Null) => None,
        Some(Value::String(s)) => Some(s.clone()),
        Some(_) => return Err(wrong_type("feedback", "str")),
    };

    Ok(ReviewRequest {
        rating,
        completion_status,
        feedback,
    })
}
