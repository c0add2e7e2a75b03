//! Saved connection profile.

pub mod storage;

use anyhow::{Context, Result};
use cmis_core::CmisSession;
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Everything needed to reconnect to a repository.
#[derive(Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Profile {
    pub url: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub username: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub token: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub repository: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub charset: Option<String>,
}

impl Profile {
    /// Open a session and load its repositories.
    ///
    /// `repository` overrides the saved repository id.
    pub async fn connect(&self, repository: Option<&str>) -> Result<CmisSession> {
        let mut session = cmis_http::connect(&self.url).context("Invalid service URL")?;

        if let (Some(username), Some(password)) = (&self.username, &self.password) {
            session.set_credentials(username, password);
        }
        if let Some(token) = &self.token {
            session.set_token(token);
        }
        if let Some(charset) = &self.charset {
            session.set_charset(charset);
        }

        session
            .load_repositories()
            .await
            .context("Failed to load repositories")?;

        if let Some(id) = repository.or(self.repository.as_deref()) {
            debug!(repository = id, "Selecting repository");
            session
                .set_default_repository(id)
                .with_context(|| format!("Repository '{id}' is not exposed by {}", self.url))?;
        }

        Ok(session)
    }
}

impl std::fmt::Debug for Profile {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Profile")
            .field("url", &self.url)
            .field("username", &self.username)
            .field("password", &self.password.as_ref().map(|_| "[REDACTED]"))
            .field("token", &self.token.as_ref().map(|_| "[REDACTED]"))
            .field("repository", &self.repository)
            .field("charset", &self.charset)
            .finish()
    }
}

/// Load the saved profile and connect, failing when nobody logged in.
pub async fn connect(repository: Option<&str>) -> Result<CmisSession> {
    let profile = storage::load_profile()
        .context("Failed to load profile")?
        .context("No saved profile. Run 'cmis login' first.")?;
    profile.connect(repository).await
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn optional_fields_are_omitted() {
        let profile = Profile {
            url: "http://localhost/browser".to_string(),
            username: None,
            password: None,
            token: Some("t".to_string()),
            repository: None,
            charset: None,
        };

        let json = serde_json::to_value(&profile).unwrap();
        assert_eq!(
            json,
            serde_json::json!({"url": "http://localhost/browser", "token": "t"})
        );
    }

    #[test]
    fn debug_hides_secrets() {
        let profile = Profile {
            url: "http://localhost/browser".to_string(),
            username: Some("admin".to_string()),
            password: Some("hunter2".to_string()),
            token: None,
            repository: None,
            charset: None,
        };

        let debug = format!("{:?}", profile);
        assert!(debug.contains("admin"));
        assert!(!debug.contains("hunter2"));
    }
}
