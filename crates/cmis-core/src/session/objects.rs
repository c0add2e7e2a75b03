//! Object creation, update, filing and deletion.

use serde_json::Value;
use tracing::{debug, instrument};

use crate::types::{
    flatten_secondary_type_ids, Content, DocumentInput, ObjectControls, Options, Params,
    Properties, UnfileObjects, VersioningState, CMIS_NAME, CMIS_OBJECT_TYPE_ID,
};
use crate::Result;

use super::protocol::*;
use super::{CmisSession, call_params};

impl CmisSession {
    /// Create a folder under `parent_id`. The type defaults to `cmis:folder`.
    #[instrument(skip(self, controls))]
    pub async fn create_folder(
        &self,
        parent_id: &str,
        name: &str,
        type_id: Option<&str>,
        controls: &ObjectControls,
    ) -> Result<Value> {
        let url = self.root_folder_url()?;
        let repository_id = self.repository()?.repository_id.clone();

        let properties = Properties::new()
            .with(CMIS_NAME, name)
            .with(CMIS_OBJECT_TYPE_ID, type_id.unwrap_or(DEFAULT_FOLDER_TYPE));

        let mut params = Params::new();
        params.insert(CMISACTION, ACTION_CREATE_FOLDER);
        params.insert(OBJECT_ID, parent_id);
        params.insert(REPOSITORY_ID, repository_id);
        properties.flatten_into(&mut params);
        controls.flatten_into(&mut params);

        self.post_json(url, params, None).await
    }

    /// Create a document with content under `parent_id`.
    ///
    /// `input` is either a bare name or a property map; `cmis:objectTypeId`
    /// defaults to `cmis:document`. The uploaded part is named after
    /// `cmis:name` unless the content carries its own filename.
    #[instrument(skip(self, content, input, controls, options))]
    pub async fn create_document(
        &self,
        parent_id: &str,
        content: Content,
        input: impl Into<DocumentInput>,
        versioning_state: Option<VersioningState>,
        controls: &ObjectControls,
        options: &Options,
    ) -> Result<Value> {
        let url = self.root_folder_url()?;
        let properties = document_properties(input.into());

        let mut params = call_params(options);
        params.insert(CMISACTION, ACTION_CREATE_DOCUMENT);
        params.insert(OBJECT_ID, parent_id);
        params.insert(REPOSITORY_ID, self.repository()?.repository_id.as_str());
        params.insert_opt("versioningState", versioning_state);
        properties.flatten_into(&mut params);
        controls.flatten_into(&mut params);

        debug!(bytes = content.len(), "Uploading document content");
        let part = content.into_part(properties.name());
        self.post_json(url, params, Some(part)).await
    }

    /// Create a document by copying `source_id`, optionally replacing its content.
    #[allow(clippy::too_many_arguments)]
    #[instrument(skip(self, content, input, controls, options))]
    pub async fn create_document_from_source(
        &self,
        parent_id: &str,
        source_id: &str,
        content: Option<Content>,
        input: impl Into<DocumentInput>,
        versioning_state: Option<VersioningState>,
        controls: &ObjectControls,
        options: &Options,
    ) -> Result<Value> {
        let url = self.root_folder_url()?;
        let properties = document_properties(input.into());

        let mut params = call_params(options);
        params.insert(CMISACTION, ACTION_CREATE_DOCUMENT_FROM_SOURCE);
        params.insert(OBJECT_ID, parent_id);
        params.insert(REPOSITORY_ID, self.repository()?.repository_id.as_str());
        params.insert("sourceId", source_id);
        params.insert_opt("versioningState", versioning_state);
        properties.flatten_into(&mut params);
        controls.flatten_into(&mut params);

        let part = content.map(|content| content.into_part(properties.name()));
        self.post_json(url, params, part).await
    }

    /// Create an item in `folder_id`.
    #[instrument(skip(self, properties, controls, options))]
    pub async fn create_item(
        &self,
        folder_id: &str,
        properties: &Properties,
        controls: &ObjectControls,
        options: &Options,
    ) -> Result<Value> {
        self.create_in_repository(ACTION_CREATE_ITEM, Some(folder_id), properties, controls, options)
            .await
    }

    /// Create a policy in `folder_id`.
    #[instrument(skip(self, properties, controls, options))]
    pub async fn create_policy(
        &self,
        folder_id: &str,
        properties: &Properties,
        controls: &ObjectControls,
        options: &Options,
    ) -> Result<Value> {
        self.create_in_repository(ACTION_CREATE_POLICY, Some(folder_id), properties, controls, options)
            .await
    }

    /// Create a relationship; source and target ids travel as properties.
    #[instrument(skip(self, properties, controls, options))]
    pub async fn create_relationship(
        &self,
        properties: &Properties,
        controls: &ObjectControls,
        options: &Options,
    ) -> Result<Value> {
        self.create_in_repository(ACTION_CREATE_RELATIONSHIP, None, properties, controls, options)
            .await
    }

    /// Update properties of one object.
    #[instrument(skip(self, properties, options))]
    pub async fn update_properties(
        &self,
        object_id: &str,
        properties: &Properties,
        options: &Options,
    ) -> Result<Value> {
        let url = self.root_folder_url()?;
        let mut params = call_params(options);
        params.insert(CMISACTION, ACTION_UPDATE);
        params.insert(OBJECT_ID, object_id);
        properties.flatten_into(&mut params);
        self.post_json(url, params, None).await
    }

    /// Update the same properties and secondary types on many objects.
    #[instrument(skip(self, properties))]
    pub async fn bulk_update_properties(
        &self,
        object_ids: &[String],
        properties: &Properties,
        add_secondary_type_ids: &[String],
        remove_secondary_type_ids: &[String],
    ) -> Result<Value> {
        let url = self.repository_url()?;
        let mut params = Params::new();
        params.insert(CMISACTION, ACTION_BULK_UPDATE);
        for (i, object_id) in object_ids.iter().enumerate() {
            params.insert(format!("objectId[{i}]"), object_id);
        }
        properties.flatten_into(&mut params);
        flatten_secondary_type_ids("add", add_secondary_type_ids, &mut params);
        flatten_secondary_type_ids("remove", remove_secondary_type_ids, &mut params);
        self.post_json(url, params, None).await
    }

    /// Move an object from one folder to another.
    #[instrument(skip(self, options))]
    pub async fn move_object(
        &self,
        object_id: &str,
        source_folder_id: &str,
        target_folder_id: &str,
        options: &Options,
    ) -> Result<Value> {
        let url = self.root_folder_url()?;
        let mut params = call_params(options);
        params.insert(CMISACTION, ACTION_MOVE);
        params.insert(OBJECT_ID, object_id);
        params.insert("sourceFolderId", source_folder_id);
        params.insert("targetFolderId", target_folder_id);
        self.post_json(url, params, None).await
    }

    /// File an object in an additional folder.
    #[instrument(skip(self, options))]
    pub async fn add_object_to_folder(
        &self,
        object_id: &str,
        folder_id: &str,
        all_versions: bool,
        options: &Options,
    ) -> Result<Value> {
        let url = self.root_folder_url()?;
        let mut params = call_params(options);
        params.insert(CMISACTION, ACTION_ADD_OBJECT_TO_FOLDER);
        params.insert(OBJECT_ID, object_id);
        params.insert(FOLDER_ID, folder_id);
        params.insert_bool(ALL_VERSIONS, all_versions);
        self.post_json(url, params, None).await
    }

    /// Unfile an object from one folder.
    #[instrument(skip(self, options))]
    pub async fn remove_object_from_folder(
        &self,
        object_id: &str,
        folder_id: &str,
        options: &Options,
    ) -> Result<Value> {
        let url = self.root_folder_url()?;
        let mut params = call_params(options);
        params.insert(CMISACTION, ACTION_REMOVE_OBJECT_FROM_FOLDER);
        params.insert(OBJECT_ID, object_id);
        params.insert(FOLDER_ID, folder_id);
        self.post_json(url, params, None).await
    }

    /// Delete an object. The response body, if any, is discarded.
    #[instrument(skip(self))]
    pub async fn delete_object(&self, object_id: &str, all_versions: bool) -> Result<()> {
        let url = self.root_folder_url()?;
        let mut params = Params::new();
        params.insert(CMISACTION, ACTION_DELETE);
        params.insert(REPOSITORY_ID, self.repository()?.repository_id.as_str());
        params.insert(OBJECT_ID, object_id);
        params.insert_bool(ALL_VERSIONS, all_versions);
        self.post(url, params, None).await?;
        Ok(())
    }

    /// Delete a folder and everything below it.
    ///
    /// Returns the ids that could not be deleted, or `Null` when the server
    /// reports none with an empty body.
    #[instrument(skip(self))]
    pub async fn delete_tree(
        &self,
        object_id: &str,
        all_versions: bool,
        unfile_objects: Option<UnfileObjects>,
        continue_on_failure: bool,
    ) -> Result<Value> {
        let url = self.root_folder_url()?;
        let mut params = Params::new();
        params.insert(CMISACTION, ACTION_DELETE_TREE);
        params.insert(REPOSITORY_ID, self.repository()?.repository_id.as_str());
        params.insert(OBJECT_ID, object_id);
        params.insert_bool(ALL_VERSIONS, all_versions);
        params.insert_opt("unfileObjects", unfile_objects);
        params.insert_bool("continueOnFailure", continue_on_failure);
        self.post_json(url, params, None).await
    }

    async fn create_in_repository(
        &self,
        action: &str,
        folder_id: Option<&str>,
        properties: &Properties,
        controls: &ObjectControls,
        options: &Options,
    ) -> Result<Value> {
        let url = self.repository_url()?;
        let mut params = call_params(options);
        params.insert(CMISACTION, action);
        params.insert_opt(OBJECT_ID, folder_id);
        properties.flatten_into(&mut params);
        controls.flatten_into(&mut params);
        self.post_json(url, params, None).await
    }
}

/// Normalize document input, defaulting the type to `cmis:document`.
fn document_properties(input: DocumentInput) -> Properties {
    let mut properties = input.into_properties();
    if !properties.contains(CMIS_OBJECT_TYPE_ID) {
        properties.insert(CMIS_OBJECT_TYPE_ID, DEFAULT_DOCUMENT_TYPE);
    }
    properties
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bare_name_becomes_named_document() {
        let properties = document_properties("report.pdf".into());
        assert_eq!(properties.name(), Some("report.pdf"));
        assert_eq!(
            properties.get(CMIS_OBJECT_TYPE_ID).and_then(|v| v.as_single()).and_then(|s| s.as_str()),
            Some("cmis:document")
        );
    }

    #[test]
    fn explicit_type_is_kept() {
        let input = Properties::new()
            .with(CMIS_NAME, "invoice")
            .with(CMIS_OBJECT_TYPE_ID, "acme:invoice");
        let properties = document_properties(input.into());

        let mut params = Params::new();
        properties.flatten_into(&mut params);
        assert_eq!(params.get("propertyValue[1]"), Some("acme:invoice"));
    }
}
