//! Repository discovery.

use serde::de::Error as _;
use serde_json::Value;
use tracing::{debug, info, instrument};

use crate::error::{Error, InvalidInputError};
use crate::types::{Params, Repository};
use crate::Result;

use super::protocol::*;
use super::CmisSession;

impl CmisSession {
    /// Fetch the service document and select the default repository.
    ///
    /// The first repository in document order becomes the default. That order
    /// is whatever the server emits, so it is only meaningful when the service
    /// exposes a single repository; use [`set_default_repository`] otherwise.
    ///
    /// [`set_default_repository`]: CmisSession::set_default_repository
    #[instrument(skip(self), fields(url = %self.url))]
    pub async fn load_repositories(&mut self) -> Result<()> {
        let url = self.url.as_str().to_string();
        let data = self.get_json(&url, Params::new()).await?;

        let Value::Object(repositories) = data else {
            return Err(Error::Decode(serde_json::Error::custom(
                "service document is not a JSON object",
            )));
        };

        let first = repositories.values().next().ok_or_else(|| {
            Error::Decode(serde_json::Error::custom(
                "service document lists no repositories",
            ))
        })?;
        let default = Repository::from_value(first)?;

        info!(
            repository = %default.repository_id,
            count = repositories.len(),
            "Loaded repositories"
        );

        self.default_repository = Some(default);
        self.repositories = repositories;
        Ok(())
    }

    /// Make another loaded repository the default.
    pub fn set_default_repository(&mut self, repository_id: &str) -> Result<&Repository> {
        let value = self.repositories.get(repository_id).ok_or_else(|| {
            InvalidInputError::UnknownRepository {
                id: repository_id.to_string(),
            }
        })?;
        let repository = Repository::from_value(value)?;
        debug!(repository = %repository.repository_id, "Switching default repository");
        Ok(self.default_repository.insert(repository))
    }

    /// Repository information of the default repository.
    #[instrument(skip(self))]
    pub async fn get_repository_info(&self) -> Result<Value> {
        let url = self.repository_url()?;
        let mut params = Params::new();
        params.insert(CMISSELECTOR, SELECT_REPOSITORY_INFO);
        self.get_json(url, params).await
    }

    /// Result of the last write operation performed in this HTTP session.
    #[instrument(skip(self))]
    pub async fn get_last_result(&self) -> Result<Value> {
        let url = self.repository_url()?;
        let mut params = Params::new();
        params.insert(CMISACTION, ACTION_LAST_RESULT);
        self.post_json(url, params, None).await
    }
}
