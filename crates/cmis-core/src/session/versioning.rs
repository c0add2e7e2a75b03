//! Check-out, check-in and version series lookup.

use serde_json::Value;
use tracing::instrument;

use crate::types::{Content, DocumentInput, ObjectControls, Options, Params, ReturnVersion};
use crate::Result;

use super::protocol::*;
use super::{CmisSession, call_params};

impl CmisSession {
    /// Check out a document, returning the private working copy.
    #[instrument(skip(self, options))]
    pub async fn check_out(&self, object_id: &str, options: &Options) -> Result<Value> {
        let url = self.root_folder_url()?;
        let mut params = call_params(options);
        params.insert(CMISACTION, ACTION_CHECK_OUT);
        params.insert(OBJECT_ID, object_id);
        self.post_json(url, params, None).await
    }

    /// Discard a private working copy.
    #[instrument(skip(self))]
    pub async fn cancel_check_out(&self, object_id: &str) -> Result<()> {
        let url = self.root_folder_url()?;
        let mut params = Params::new();
        params.insert(CMISACTION, ACTION_CANCEL_CHECK_OUT);
        params.insert(OBJECT_ID, object_id);
        self.post(url, params, None).await?;
        Ok(())
    }

    /// Check in a private working copy with new content.
    ///
    /// The request is always multipart. When `input` is `None` no property is
    /// changed and the content part keeps its own name (or `content`).
    #[allow(clippy::too_many_arguments)]
    #[instrument(skip(self, input, content, controls, options))]
    pub async fn check_in(
        &self,
        object_id: &str,
        major: bool,
        input: Option<DocumentInput>,
        content: Content,
        comment: Option<&str>,
        controls: &ObjectControls,
        options: &Options,
    ) -> Result<Value> {
        let url = self.root_folder_url()?;
        let properties = input.map(DocumentInput::into_properties).unwrap_or_default();

        let mut params = call_params(options);
        params.insert(CMISACTION, ACTION_CHECK_IN);
        params.insert(OBJECT_ID, object_id);
        params.insert_bool(MAJOR, major);
        params.insert_opt("checkinComment", comment.filter(|c| !c.is_empty()));
        properties.flatten_into(&mut params);
        controls.flatten_into(&mut params);

        let part = content.into_part(properties.name());
        self.post_json(url, params, Some(part)).await
    }

    /// Latest (or latest major) version in a version series.
    #[instrument(skip(self, options))]
    pub async fn get_object_of_latest_version(
        &self,
        version_series_id: &str,
        major: bool,
        options: &Options,
    ) -> Result<Value> {
        let url = self.root_folder_url()?;
        let return_version = if major {
            ReturnVersion::LatestMajor
        } else {
            ReturnVersion::Latest
        };

        let mut params = call_params(options);
        params.insert(CMISSELECTOR, SELECT_OBJECT);
        params.insert(OBJECT_ID, version_series_id);
        params.insert(VERSION_SERIES_ID, version_series_id);
        params.insert_bool(MAJOR, major);
        params.insert(RETURN_VERSION, return_version);
        self.get_json(url, params).await
    }

    /// Every version in a version series.
    #[instrument(skip(self, options))]
    pub async fn get_all_versions(
        &self,
        version_series_id: &str,
        options: &Options,
    ) -> Result<Value> {
        let url = self.root_folder_url()?;
        let mut params = call_params(options);
        params.insert(CMISSELECTOR, SELECT_VERSIONS);
        params.insert(VERSION_SERIES_ID, version_series_id);
        self.get_json(url, params).await
    }
}
