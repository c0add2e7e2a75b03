//! Service document URL.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use url::Url;

use crate::error::{Error, InvalidInputError};

/// A validated browser-binding service URL, e.g.
/// `http://localhost:8080/alfresco/api/-default-/public/cmis/versions/1.1/browser`.
///
/// # Example
///
/// ```
/// use cmis_core::ServiceUrl;
///
/// let url = ServiceUrl::new("https://cmis.example.com/browser").unwrap();
/// assert_eq!(url.host(), Some("cmis.example.com"));
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct ServiceUrl(Url);

impl ServiceUrl {
    /// Parse and validate a service URL.
    ///
    /// # Errors
    ///
    /// Returns an error unless the URL is absolute, uses `http` or `https`
    /// and names a host.
    pub fn new(s: impl AsRef<str>) -> Result<Self, Error> {
        let s = s.as_ref();
        let url = Url::parse(s).map_err(|e| InvalidInputError::ServiceUrl {
            value: s.to_string(),
            reason: e.to_string(),
        })?;

        Self::validate(&url, s)?;

        Ok(Self(url))
    }

    /// Returns the URL as a string.
    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }

    /// Returns the inner URL.
    pub fn as_url(&self) -> &Url {
        &self.0
    }

    /// Returns the host string.
    pub fn host(&self) -> Option<&str> {
        self.0.host_str()
    }

    /// Returns the URL scheme.
    pub fn scheme(&self) -> &str {
        self.0.scheme()
    }

    fn validate(url: &Url, original: &str) -> Result<(), Error> {
        let reason = if url.cannot_be_a_base() {
            "must be an absolute URL"
        } else if !matches!(url.scheme(), "http" | "https") {
            "must use http or https"
        } else if url.host_str().is_none() {
            "must have a host"
        } else {
            return Ok(());
        };

        Err(InvalidInputError::ServiceUrl {
            value: original.to_string(),
            reason: reason.to_string(),
        }
        .into())
    }
}

impl fmt::Display for ServiceUrl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for ServiceUrl {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl Serialize for ServiceUrl {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(self.0.as_str())
    }
}

impl<'de> Deserialize<'de> for ServiceUrl {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        ServiceUrl::new(&s).map_err(serde::de::Error::custom)
    }
}

impl AsRef<str> for ServiceUrl {
    fn as_ref(&self) -> &str {
        self.0.as_str()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn valid_https_url() {
        let url = ServiceUrl::new("https://cmis.alfresco.com/cmisbrowser").unwrap();
        assert_eq!(url.host(), Some("cmis.alfresco.com"));
        assert_eq!(url.scheme(), "https");
    }

    #[test]
    fn plain_http_is_allowed() {
        let url = ServiceUrl::new("http://10.0.0.5:18080/alfresco/cmisbrowser").unwrap();
        assert_eq!(url.as_str(), "http://10.0.0.5:18080/alfresco/cmisbrowser");
    }

    #[test]
    fn invalid_relative_url() {
        assert!(ServiceUrl::new("/cmisbrowser").is_err());
    }

    #[test]
    fn invalid_scheme() {
        assert!(ServiceUrl::new("file:///tmp/repo").is_err());
        assert!(ServiceUrl::new("mailto:admin@example.com").is_err());
    }
}
