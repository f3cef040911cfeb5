//! HTTP helpers for Lambda functions.

use lambda_http::{Body, Request, RequestExt, Response};
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;
use uuid::Uuid;

use crate::models::ErrorResponse;
use crate::NotificationError;

/// Methods the booking widget may use.
pub const ALLOWED_METHODS: &str = "POST, OPTIONS";
/// Headers the booking widget sends along with its requests.
pub const ALLOWED_HEADERS: &str = "Content-Type, X-User-Id, X-Auth-Token";
/// How long browsers may cache a preflight answer, in seconds.
pub const PREFLIGHT_MAX_AGE: &str = "86400";

/// Create a JSON response with the given status code and data.
pub fn json_response<T: Serialize>(status: u16, data: &T) -> Result<Response<Body>, lambda_http::Error> {
    Ok(Response::builder()
        .status(status)
        .header("Content-Type", "application/json")
        .header("Access-Control-Allow-Origin", "*")
        .body(Body::from(serde_json::to_string(data)?))?)
}

/// Create an error response for a failed notification.
pub fn error_response(
    error: &NotificationError,
    request_id: &str,
) -> Result<Response<Body>, lambda_http::Error> {
    let body = ErrorResponse {
        error: error.to_string(),
        request_id: error.includes_request_id().then(|| request_id.to_string()),
    };
    json_response(error.status_code(), &body)
}

/// Answer a CORS preflight request.
pub fn preflight_response() -> Result<Response<Body>, lambda_http::Error> {
    Ok(Response::builder()
        .status(200)
        .header("Access-Control-Allow-Origin", "*")
        .header("Access-Control-Allow-Methods", ALLOWED_METHODS)
        .header("Access-Control-Allow-Headers", ALLOWED_HEADERS)
        .header("Access-Control-Max-Age", PREFLIGHT_MAX_AGE)
        .body(Body::Empty)?)
}

/// Parse request body as a JSON object.
///
/// A request without a body parses as `{}`. Any other JSON value is rejected, so a
/// struct is never filled positionally from an array.
pub fn parse_json_body<T: DeserializeOwned>(body: &Body) -> Result<T, NotificationError> {
    let bytes: &[u8] = match body {
        Body::Empty => b"{}",
        other => other.as_ref(),
    };

    let value: Value = serde_json::from_slice(bytes).map_err(NotificationError::InvalidJson)?;
    if !value.is_object() {
        return Err(NotificationError::InvalidJson(serde::de::Error::custom(
            "expected a JSON object",
        )));
    }

    serde_json::from_value(value).map_err(NotificationError::InvalidJson)
}

/// Request id assigned by the Lambda runtime.
///
/// Falls back to a random id when the request carries no Lambda context, as happens
/// when the handler is driven locally.
pub fn request_id(event: &Request) -> String {
    event
        .lambda_context_ref()
        .map(|ctx| ctx.request_id.clone())
        .unwrap_or_else(|| Uuid::new_v4().to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::BookingRequest;

    #[test]
    fn test_empty_body_parses_as_empty_object() {
        let request: BookingRequest = parse_json_body(&Body::Empty).unwrap();
        assert!(request.service.is_none());
    }

    #[test]
    fn test_invalid_json() {
        let result = parse_json_body::<BookingRequest>(&Body::from("{not json"));
        assert!(matches!(result, Err(NotificationError::InvalidJson(_))));
    }

    #[test]
    fn test_wrong_field_type_is_invalid_json() {
        let result = parse_json_body::<BookingRequest>(&Body::from(r#"{"service":42}"#));
        assert!(matches!(result, Err(NotificationError::InvalidJson(_))));
    }

    #[test]
    fn test_non_object_bodies_are_invalid_json() {
        for body in ["[]", r#"["a","b","c"]"#, r#""str""#, "42", "null"] {
            let result = parse_json_body::<BookingRequest>(&Body::from(body));
            assert!(
                matches!(result, Err(NotificationError::InvalidJson(_))),
                "expected invalid JSON for {}",
                body
            );
        }
    }

    #[test]
    fn test_preflight_headers() {
        let response = preflight_response().unwrap();
        let headers = response.headers();
        assert_eq!(response.status().as_u16(), 200);
        assert_eq!(headers["Access-Control-Allow-Origin"], "*");
        assert_eq!(headers["Access-Control-Allow-Methods"], "POST, OPTIONS");
        assert_eq!(headers["Access-Control-Max-Age"], "86400");
        assert!(matches!(response.body(), Body::Empty));
    }

    #[test]
    fn test_request_id_fallback() {
        let event = Request::default();
        let id = request_id(&event);
        assert!(Uuid::parse_str(&id).is_ok());
    }
}
