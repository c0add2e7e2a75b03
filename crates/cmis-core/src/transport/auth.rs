//! Authorization selection.

use std::fmt;

use base64::Engine as _;
use base64::engine::general_purpose::STANDARD as BASE64_STANDARD;

use crate::credentials::{BearerToken, Credentials};

/// How a request authenticates.
#[derive(Clone, PartialEq, Eq)]
pub enum Auth {
    /// HTTP Basic with a username and password.
    Basic(Credentials),
    /// `Authorization: Bearer <token>`.
    Bearer(BearerToken),
    /// No header; the transport sends whatever ambient credentials it holds
    /// (session cookies).
    Ambient,
}

impl Auth {
    /// Pick the scheme for a request.
    ///
    /// Basic wins whenever both username and password are non-empty, bearer
    /// is used only without them, and ambient credentials are the fallback.
    pub fn select(credentials: Option<&Credentials>, token: Option<&BearerToken>) -> Self {
        let credentials = credentials.filter(|c| c.is_complete());
        let token = token.filter(|t| !t.as_str().is_empty());
        match (credentials, token) {
            (Some(credentials), _) => Auth::Basic(credentials.clone()),
            (None, Some(token)) => Auth::Bearer(token.clone()),
            (None, None) => Auth::Ambient,
        }
    }

    /// The `Authorization` header value, or `None` for ambient credentials.
    pub fn header_value(&self) -> Option<String> {
        match self {
            Auth::Basic(credentials) => {
                let pair = format!("{}:{}", credentials.username(), credentials.password());
                Some(format!("Basic {}", BASE64_STANDARD.encode(pair)))
            }
            Auth::Bearer(token) => Some(format!("Bearer {}", token.as_str())),
            Auth::Ambient => None,
        }
    }

    /// True when the transport should attach ambient credentials.
    pub fn is_ambient(&self) -> bool {
        matches!(self, Auth::Ambient)
    }
}

impl fmt::Debug for Auth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Auth::Basic(credentials) => f.debug_tuple("Basic").field(credentials).finish(),
            Auth::Bearer(token) => f.debug_tuple("Bearer").field(token).finish(),
            Auth::Ambient => f.write_str("Ambient"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn basic_header_is_base64_of_user_and_password() {
        let auth = Auth::select(Some(&Credentials::new("admin", "admin")), None);
        assert_eq!(auth.header_value().as_deref(), Some("Basic YWRtaW46YWRtaW4="));
    }

    #[test]
    fn basic_wins_over_token() {
        let credentials = Credentials::new("alice", "secret");
        let token = BearerToken::new("tkn");
        let auth = Auth::select(Some(&credentials), Some(&token));
        assert!(matches!(auth, Auth::Basic(_)));
    }

    #[test]
    fn bearer_without_credentials() {
        let token = BearerToken::new("tkn");
        let auth = Auth::select(None, Some(&token));
        assert_eq!(auth.header_value().as_deref(), Some("Bearer tkn"));
    }

    #[test]
    fn empty_password_falls_back_to_token() {
        let credentials = Credentials::new("alice", "");
        let token = BearerToken::new("tkn");
        let auth = Auth::select(Some(&credentials), Some(&token));
        assert!(matches!(auth, Auth::Bearer(_)));
    }

    #[test]
    fn ambient_without_anything() {
        let auth = Auth::select(None, None);
        assert!(auth.is_ambient());
        assert!(auth.header_value().is_none());
    }

    #[test]
    fn debug_never_shows_secrets() {
        let auth = Auth::select(Some(&Credentials::new("alice", "hunter2")), None);
        let debug = format!("{:?}", auth);
        assert!(debug.contains("alice"));
        assert!(!debug.contains("hunter2"));
    }
}
