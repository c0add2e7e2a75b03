//! Fully resolved request descriptors.

use std::fmt;

use crate::types::Params;

use super::Auth;

/// HTTP method; the browser binding only uses GET for reads and POST for writes.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Method {
    Get,
    Post,
}

impl Method {
    /// The method name.
    pub fn as_str(self) -> &'static str {
        match self {
            Method::Get => "GET",
            Method::Post => "POST",
        }
    }
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The multipart `content` part carrying document bytes.
#[derive(Clone, PartialEq, Eq)]
pub struct ContentPart {
    pub filename: String,
    pub mime_type: Option<String>,
    pub bytes: Vec<u8>,
}

impl fmt::Debug for ContentPart {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ContentPart")
            .field("filename", &self.filename)
            .field("mime_type", &self.mime_type)
            .field("len", &self.bytes.len())
            .finish()
    }
}

/// A `multipart/form-data` body: the content part first, then one text part
/// per field in order.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Multipart {
    pub content: ContentPart,
    pub fields: Params,
}

/// Request body.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Body {
    /// GET requests carry everything in the query string.
    Empty,
    /// `application/x-www-form-urlencoded;charset=UTF-8`.
    Form(Params),
    /// `multipart/form-data` with document content.
    Multipart(Multipart),
}

impl Body {
    /// Content type for form bodies.
    pub const FORM_CONTENT_TYPE: &'static str = "application/x-www-form-urlencoded;charset=UTF-8";

    /// The protocol parameters carried in the body, if any.
    pub fn params(&self) -> Option<&Params> {
        match self {
            Body::Empty => None,
            Body::Form(params) => Some(params),
            Body::Multipart(multipart) => Some(&multipart.fields),
        }
    }
}

/// One CMIS call, ready to be put on the wire.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Request {
    pub method: Method,
    /// Target URL without the query string.
    pub url: String,
    pub query: Params,
    pub body: Body,
    pub auth: Auth,
}

impl Request {
    /// The target URL with `query` appended.
    pub fn full_url(&self) -> String {
        if self.query.is_empty() {
            self.url.clone()
        } else {
            let separator = if self.url.contains('?') { '&' } else { '?' };
            format!("{}{}{}", self.url, separator, self.query.encode())
        }
    }

    /// All protocol parameters of the request, wherever they travel.
    pub fn params(&self) -> &Params {
        self.body.params().unwrap_or(&self.query)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn full_url_appends_query() {
        let mut query = Params::new();
        query.insert("cmisselector", "object");
        query.insert("objectId", "id 1");

        let request = Request {
            method: Method::Get,
            url: "http://localhost/browser/A1/root".to_string(),
            query,
            body: Body::Empty,
            auth: Auth::Ambient,
        };

        assert_eq!(
            request.full_url(),
            "http://localhost/browser/A1/root?cmisselector=object&objectId=id+1"
        );
        assert_eq!(request.params().get("objectId"), Some("id 1"));
    }

    #[test]
    fn full_url_without_query() {
        let request = Request {
            method: Method::Post,
            url: "http://localhost/browser".to_string(),
            query: Params::new(),
            body: Body::Form(Params::new()),
            auth: Auth::Ambient,
        };
        assert_eq!(request.full_url(), "http://localhost/browser");
    }
}
