use axum::{
    body::Bytes,
    extract::{FromRequest, Request},
    http::header,
};
use serde_json::Value;

use crate::data::models::ApiError;

/// JSON request body that reports malformed requests as `ApiError`s instead of
/// axum's plain-text rejections.
#[derive(Debug)]
pub struct JsonBody(pub Value);

impl<S> FromRequest<S> for JsonBody
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let content_type = req
            .headers()
            .get(header::CONTENT_TYPE)
            .and_then(|value| value.to_str().ok())
            .map(str::to_owned);

        let bytes = Bytes::from_request(req, state)
            .await
            .map_err(|e| ApiError::BadRequest(format!("Failed to read request body: {}", e)))?;

        parse_json_body(content_type.as_deref(), &bytes).map(JsonBody)
    }
}

fn is_json_content_type(content_type: &str) -> bool {
    let mime = content_type
        .split(';')
        .next()
        .unwrap_or_default()
        .trim()
        .to_ascii_lowercase();

    mime == "application/json" || (mime.starts_with("application/") && mime.ends_with("+json"))
}

pub fn parse_json_body(content_type: Option<&str>, body: &[u8]) -> Result<Value, ApiError> {
    if body.iter().all(u8::is_ascii_whitespace) {
        return Err(ApiError::BadRequest("No data provided".into()));
    }

    if !content_type.is_some_and(is_json_content_type) {
        return Err(ApiError::BadRequest(
            "Content-Type must be application/json".into(),
        ));
    }

    match serde_json::from_slice::<Value>(body) {
        Ok(Value::Null) => Err(ApiError::BadRequest("No data provided".into())),
        Ok(value) => Ok(value),
        Err(e) => {
            log::debug!("Rejected request body: {}", e);
            Err(ApiError::BadRequest("Invalid JSON data".into()))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_body_reports_no_data() {
        let err = parse_json_body(None, b"").unwrap_err();
        assert_eq!(err.to_string(), "No data provided");

        let err = parse_json_body(Some("application/json"), b"  \n").unwrap_err();
        assert_eq!(err.to_string(), "No data provided");

        let err = parse_json_body(Some("application/json"), b"null").unwrap_err();
        assert_eq!(err.to_string(), "No data provided");
    }

    #[test]
    fn test_requires_json_content_type() {
        let err = parse_json_body(Some("text/plain"), br#"{"group_id": 1}"#).unwrap_err();
        assert_eq!(err.to_string(), "Content-Type must be application/json");

        let err = parse_json_body(None, br#"{"group_id": 1}"#).unwrap_err();
        assert_eq!(err.to_string(), "Content-Type must be application/json");
    }

    #[test]
    fn test_accepts_json_variants() {
        assert!(parse_json_body(Some("application/json; charset=utf-8"), b"{}").is_ok());
        assert!(parse_json_body(Some("Application/JSON"), b"{}").is_ok());
        assert!(parse_json_body(Some("application/merge-patch+json"), b"{}").is_ok());
    }

    #[test]
    fn test_unparsable_body() {
        let err = parse_json_body(Some("application/json"), b"{group_id: 1").unwrap_err();
        assert_eq!(err.to_string(), "Invalid JSON data");
    }
}
