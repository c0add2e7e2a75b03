//! Raw transport responses.

use std::fmt;

use serde_json::Value;

/// A response exactly as the transport received it.
#[derive(Clone, PartialEq, Eq)]
pub struct Response {
    pub status: u16,
    /// Reason phrase, e.g. `Not Found`; may be empty.
    pub reason: String,
    pub headers: Vec<(String, String)>,
    pub body: Vec<u8>,
}

impl Response {
    /// Assemble a response.
    pub fn new(
        status: u16,
        reason: impl Into<String>,
        headers: Vec<(String, String)>,
        body: Vec<u8>,
    ) -> Self {
        Self {
            status,
            reason: reason.into(),
            headers,
            body,
        }
    }

    /// True for statuses in `200..=299`.
    pub fn is_success(&self) -> bool {
        (200..=299).contains(&self.status)
    }

    /// First header with this name, compared case-insensitively.
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(k, _)| k.eq_ignore_ascii_case(name))
            .map(|(_, v)| v.as_str())
    }

    /// Parse the body as JSON; an empty body reads as `null`.
    pub fn json(&self) -> Result<Value, serde_json::Error> {
        if self.body.iter().all(u8::is_ascii_whitespace) {
            return Ok(Value::Null);
        }
        serde_json::from_slice(&self.body)
    }

    /// The body as lossy UTF-8 text.
    pub fn text(&self) -> String {
        String::from_utf8_lossy(&self.body).into_owned()
    }
}

impl fmt::Debug for Response {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Response")
            .field("status", &self.status)
            .field("reason", &self.reason)
            .field("headers", &self.headers)
            .field("body_len", &self.body.len())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn success_range() {
        assert!(Response::new(200, "OK", vec![], vec![]).is_success());
        assert!(Response::new(299, "", vec![], vec![]).is_success());
        assert!(!Response::new(199, "", vec![], vec![]).is_success());
        assert!(!Response::new(300, "", vec![], vec![]).is_success());
    }

    #[test]
    fn empty_body_is_null() {
        let response = Response::new(204, "No Content", vec![], vec![]);
        assert_eq!(response.json().unwrap(), Value::Null);
    }

    #[test]
    fn json_body() {
        let response = Response::new(200, "OK", vec![], br#"{"a":1}"#.to_vec());
        assert_eq!(response.json().unwrap(), json!({"a": 1}));
    }

    #[test]
    fn headers_are_case_insensitive() {
        let response = Response::new(
            200,
            "OK",
            vec![("Content-Type".to_string(), "application/json".to_string())],
            vec![],
        );
        assert_eq!(response.header("content-type"), Some("application/json"));
        assert!(response.header("etag").is_none());
    }
}
