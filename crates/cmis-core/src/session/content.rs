//! Content stream operations.

use serde_json::Value;
use tracing::{debug, instrument};

use crate::types::{Content, ContentStream, Download, Options, Params};
use crate::Result;

use super::protocol::*;
use super::{CmisSession, call_params};

impl CmisSession {
    /// Download a document's content stream, fully buffered.
    #[instrument(skip(self))]
    pub async fn get_content_stream(
        &self,
        object_id: &str,
        download: Download,
        stream_id: Option<&str>,
    ) -> Result<ContentStream> {
        let url = self.root_folder_url()?;
        let params = content_params(object_id, download, stream_id);
        let response = self.get(url, params).await?;
        let stream = ContentStream::from_response(response);
        debug!(bytes = stream.bytes.len(), "Downloaded content stream");
        Ok(stream)
    }

    /// URL a browser can fetch the content stream from. No request is made.
    ///
    /// Session defaults are appended after the call's own parameters, skipping
    /// any key the call already set. Credentials are never part of the URL.
    pub fn get_content_stream_url(
        &self,
        object_id: &str,
        download: Download,
        stream_id: Option<&str>,
    ) -> Result<String> {
        let root = self.root_folder_url()?;
        let mut params = content_params(object_id, download, stream_id);
        for (key, value) in self.default_options() {
            if !params.contains_key(key) {
                params.insert(key, value);
            }
        }
        Ok(format!("{root}?{}", params.encode()))
    }

    /// Replace (or, without `overwrite`, set if absent) a document's content.
    #[instrument(skip(self, content, options))]
    pub async fn set_content_stream(
        &self,
        object_id: &str,
        content: Content,
        overwrite: bool,
        options: &Options,
    ) -> Result<Value> {
        let url = self.root_folder_url()?;
        let mut params = call_params(options);
        params.insert(CMISACTION, ACTION_SET_CONTENT);
        params.insert(OBJECT_ID, object_id);
        params.insert_bool("overwriteFlag", overwrite);
        self.post_json(url, params, Some(content.into_part(None)))
            .await
    }

    /// Append a chunk to a document's content.
    #[instrument(skip(self, content, options))]
    pub async fn append_content_stream(
        &self,
        object_id: &str,
        content: Content,
        is_last_chunk: bool,
        options: &Options,
    ) -> Result<Value> {
        let url = self.root_folder_url()?;
        let mut params = call_params(options);
        params.insert(CMISACTION, ACTION_APPEND_CONTENT);
        params.insert(OBJECT_ID, object_id);
        params.insert_bool("isLastChunk", is_last_chunk);
        self.post_json(url, params, Some(content.into_part(None)))
            .await
    }

    /// Remove a document's content.
    #[instrument(skip(self, options))]
    pub async fn delete_content_stream(&self, object_id: &str, options: &Options) -> Result<Value> {
        let url = self.root_folder_url()?;
        let mut params = call_params(options);
        params.insert(CMISACTION, ACTION_DELETE_CONTENT);
        params.insert(OBJECT_ID, object_id);
        self.post_json(url, params, None).await
    }
}

fn content_params(object_id: &str, download: Download, stream_id: Option<&str>) -> Params {
    let mut params = Params::new();
    params.insert(CMISSELECTOR, SELECT_CONTENT);
    params.insert(OBJECT_ID, object_id);
    params.insert("download", download);
    params.insert_opt("streamId", stream_id);
    params
}
