//! Query, checked-out listing and change log.

use serde_json::Value;
use tracing::{debug, instrument};

use crate::types::Options;
use crate::Result;

use super::protocol::*;
use super::{CmisSession, call_params};

impl CmisSession {
    /// Run a CMIS query against the default repository.
    #[instrument(skip(self, options))]
    pub async fn query(
        &self,
        statement: &str,
        search_all_versions: bool,
        options: &Options,
    ) -> Result<Value> {
        let url = self.repository_url()?;
        let mut params = call_params(options);
        params.insert(CMISACTION, ACTION_QUERY);
        params.insert("statement", statement);
        params.insert_bool("searchAllVersions", search_all_versions);
        self.post_json(url, params, None).await
    }

    /// Documents checked out in the repository, optionally scoped to a folder.
    #[instrument(skip(self, options))]
    pub async fn get_checked_out_docs(
        &self,
        object_id: Option<&str>,
        options: &Options,
    ) -> Result<Value> {
        let url = self.repository_url()?;
        let mut params = call_params(options);
        params.insert(CMISSELECTOR, SELECT_CHECKED_OUT);
        params.insert_opt(OBJECT_ID, object_id);
        self.get_json(url, params).await
    }

    /// Changed objects since `change_log_token`.
    ///
    /// The returned list carries the token to resume from; it is opaque and
    /// passed back verbatim.
    #[instrument(skip(self, options))]
    pub async fn get_content_changes(
        &self,
        change_log_token: Option<&str>,
        include_properties: bool,
        include_policy_ids: bool,
        include_acl: bool,
        options: &Options,
    ) -> Result<Value> {
        let url = self.repository_url()?;
        let mut params = call_params(options);
        params.insert(CMISSELECTOR, SELECT_CONTENT_CHANGES);
        params.insert_opt("changeLogToken", change_log_token);
        params.insert_bool("includeProperties", include_properties);
        params.insert_bool("includePolicyIds", include_policy_ids);
        params.insert_bool("includeACL", include_acl);
        debug!("Fetching content changes");
        self.get_json(url, params).await
    }
}
