//! Type definition operations.

use serde_json::Value;
use tracing::instrument;

use crate::types::{Options, Params};
use crate::Result;

use super::protocol::*;
use super::{CmisSession, call_params};

impl CmisSession {
    /// Immediate children of `type_id`, or the base types when `None`.
    #[instrument(skip(self, options))]
    pub async fn get_type_children(
        &self,
        type_id: Option<&str>,
        include_property_definitions: bool,
        options: &Options,
    ) -> Result<Value> {
        let url = self.repository_url()?;
        let mut params = call_params(options);
        params.insert(CMISSELECTOR, SELECT_TYPE_CHILDREN);
        params.insert_opt(TYPE_ID, type_id);
        params.insert_bool("includePropertyDefinitions", include_property_definitions);
        self.get_json(url, params).await
    }

    /// All types below `type_id` (or every type), down to `depth` levels.
    #[instrument(skip(self))]
    pub async fn get_type_descendants(
        &self,
        type_id: Option<&str>,
        depth: Option<i32>,
        include_property_definitions: bool,
    ) -> Result<Value> {
        let url = self.repository_url()?;
        let mut params = Params::new();
        params.insert(CMISSELECTOR, SELECT_TYPE_DESCENDANTS);
        params.insert_opt(TYPE_ID, type_id);
        params.insert_bool("includePropertyDefinitions", include_property_definitions);
        params.insert_opt(DEPTH, depth.map(|d| d.to_string()));
        self.get_json(url, params).await
    }

    /// Definition of one type.
    #[instrument(skip(self))]
    pub async fn get_type_definition(&self, type_id: &str) -> Result<Value> {
        let url = self.repository_url()?;
        let mut params = Params::new();
        params.insert(CMISSELECTOR, SELECT_TYPE_DEFINITION);
        params.insert(TYPE_ID, type_id);
        self.get_json(url, params).await
    }

    /// Create a type from its JSON definition.
    #[instrument(skip(self, definition))]
    pub async fn create_type(&self, definition: &Value) -> Result<Value> {
        self.post_type(ACTION_CREATE_TYPE, definition).await
    }

    /// Update a type from its JSON definition.
    #[instrument(skip(self, definition))]
    pub async fn update_type(&self, definition: &Value) -> Result<Value> {
        self.post_type(ACTION_UPDATE_TYPE, definition).await
    }

    /// Delete a type.
    #[instrument(skip(self))]
    pub async fn delete_type(&self, type_id: &str) -> Result<Value> {
        let url = self.repository_url()?;
        let mut params = Params::new();
        params.insert(CMISACTION, ACTION_DELETE_TYPE);
        params.insert(TYPE_ID, type_id);
        self.post_json(url, params, None).await
    }

    async fn post_type(&self, action: &str, definition: &Value) -> Result<Value> {
        let url = self.repository_url()?;
        let mut params = Params::new();
        params.insert(CMISACTION, action);
        params.insert("type", serde_json::to_string(definition)?);
        self.post_json(url, params, None).await
    }
}
