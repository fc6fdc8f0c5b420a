use crate::error::{FaxError, Result};
use serde_json::Value;

/// Decoded JSON body of a fax.to response, together with the HTTP status
/// it arrived with.
///
/// The body is kept exactly as the service sent it; accessors read from it
/// without reshaping it.
#[derive(Debug, Clone, PartialEq)]
pub struct Response {
    http_status: u16,
    body: Value,
}

impl Response {
    pub fn new(http_status: u16, body: Value) -> Self {
        Response { http_status, body }
    }

    /// Decode a raw HTTP body.
    ///
    /// An empty body on a successful status decodes to `null`. Any other
    /// body that is not JSON becomes [`FaxError::Http`] when the status code
    /// signals an error, and [`FaxError::Decode`] otherwise.
    pub fn from_slice(http_status: u16, bytes: &[u8]) -> Result<Self> {
        if http_status < 400 && bytes.iter().all(u8::is_ascii_whitespace) {
            return Ok(Response::new(http_status, Value::Null));
        }

        match serde_json::from_slice::<Value>(bytes) {
            Ok(body) => Ok(Response::new(http_status, body)),
            Err(_) if http_status >= 400 => Err(FaxError::Http {
                status: http_status,
                body: String::from_utf8_lossy(bytes).to_string(),
            }),
            Err(e) => Err(FaxError::Decode(e.to_string())),
        }
    }

    pub fn http_status(&self) -> u16 {
        self.http_status
    }

    /// Get the decoded body
    pub fn raw(&self) -> &Value {
        &self.body
    }

    pub fn into_value(self) -> Value {
        self.body
    }

    /// The top-level `status` field, if it is a string
    pub fn status(&self) -> Option<&str> {
        self.body.get("status").and_then(Value::as_str)
    }

    /// Check if the service reported `"status": "success"`
    pub fn is_success(&self) -> bool {
        self.status() == Some("success")
    }

    /// Human readable failure message, if any
    pub fn message(&self) -> Option<String> {
        self.get_string("message")
    }

    /// Machine readable failure code (e.g. `no_answer`), if any
    pub fn msg_code(&self) -> Option<String> {
        self.get_string("msg_code")
    }

    /// Get a value from the body by a slash-separated path.
    /// For example, "data/0/id" reads the "id" field of the first element of "data".
    /// An empty path returns the whole body.
    pub fn get(&self, path: &str) -> Option<&Value> {
        let mut current = &self.body;

        for part in path.split('/').filter(|s| !s.is_empty()) {
            current = match current {
                Value::Object(map) => map.get(part)?,
                Value::Array(arr) => {
                    let index: usize = part.parse().ok()?;
                    arr.get(index)?
                }
                _ => return None,
            };
        }

        Some(current)
    }

    /// Get a string value from the body by a slash-separated path
    pub fn get_string(&self, path: &str) -> Option<String> {
        self.get(path).and_then(|v| v.as_str().map(|s| s.to_string()))
    }

    /// Get a numeric value by path, accepting JSON numbers and numeric strings
    pub fn get_f64(&self, path: &str) -> Option<f64> {
        match self.get(path)? {
            Value::Number(n) => n.as_f64(),
            Value::String(s) => s.trim().parse().ok(),
            _ => None,
        }
    }

    /// Unmarshal the whole body into the provided type
    pub fn apply<T>(&self) -> Result<T>
    where
        T: serde::de::DeserializeOwned,
    {
        serde_json::from_value(self.body.clone()).map_err(FaxError::from)
    }

    /// Extract the numeric `field` of a successful response.
    ///
    /// Any response whose status is not `"success"` is returned unchanged
    /// inside [`FaxError::Remote`].
    pub fn into_amount(self, field: &str) -> Result<f64> {
        if !self.is_success() {
            return Err(FaxError::from_response(self));
        }

        self.get_f64(field)
            .ok_or_else(|| FaxError::Decode(format!("missing numeric field {}", field)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_response_get() {
        let response = Response::new(200, json!({"data": [{"id": 7, "name": "doc.pdf"}]}));
        assert_eq!(response.get_string("data/0/name"), Some("doc.pdf".to_string()));
        assert_eq!(response.get_f64("data/0/id"), Some(7.0));
        assert_eq!(response.get("data/1"), None);
        assert_eq!(response.get(""), Some(response.raw()));
    }

    #[test]
    fn test_into_amount_success() {
        let response = Response::new(200, json!({"status": "success", "balance": 12.5}));
        assert_eq!(response.into_amount("balance").unwrap(), 12.5);
    }

    #[test]
    fn test_into_amount_numeric_string() {
        let response = Response::new(200, json!({"status": "success", "balance": "3.20"}));
        assert_eq!(response.into_amount("balance").unwrap(), 3.2);
    }

    #[test]
    fn test_into_amount_error_passthrough() {
        let body = json!({"status": "error", "message": "bad key"});
        let err = Response::new(200, body.clone()).into_amount("balance").unwrap_err();
        assert_eq!(err.response().map(Response::raw), Some(&body));
    }

    #[test]
    fn test_into_amount_missing_field() {
        let response = Response::new(200, json!({"status": "success"}));
        let err = response.into_amount("balance").unwrap_err();
        assert_eq!(err.kind(), crate::error::ErrorKind::Decode);
    }

    #[test]
    fn test_from_slice_empty_body() {
        let response = Response::from_slice(200, b"").unwrap();
        assert_eq!(response.raw(), &Value::Null);
        assert_eq!(response.status(), None);

        let err = Response::from_slice(500, b"").unwrap_err();
        assert!(matches!(err, FaxError::Http { status: 500, .. }));
    }

    #[test]
    fn test_from_slice_not_json() {
        let err = Response::from_slice(200, b"<html>").unwrap_err();
        assert!(matches!(err, FaxError::Decode(_)));

        let err = Response::from_slice(502, b"Bad Gateway").unwrap_err();
        match err {
            FaxError::Http { status, body } => {
                assert_eq!(status, 502);
                assert_eq!(body, "Bad Gateway");
            }
            other => panic!("expected FaxError::Http, got {:?}", other),
        }
    }
}
