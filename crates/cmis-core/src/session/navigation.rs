//! Object lookup and folder navigation.

use serde_json::Value;
use tracing::instrument;

use crate::types::{Options, Params, RelationshipDirection, ReturnVersion};
use crate::Result;

use super::protocol::*;
use super::{CmisSession, call_params};

impl CmisSession {
    /// Fetch an object by id.
    #[instrument(skip(self, options))]
    pub async fn get_object(
        &self,
        object_id: &str,
        return_version: Option<ReturnVersion>,
        options: &Options,
    ) -> Result<Value> {
        let url = self.root_folder_url()?;
        let mut params = call_params(options);
        params.insert(CMISSELECTOR, SELECT_OBJECT);
        params.insert(OBJECT_ID, object_id);
        params.insert_opt(RETURN_VERSION, return_version);
        self.get_json(url, params).await
    }

    /// Fetch an object by its path below the root folder.
    #[instrument(skip(self, options))]
    pub async fn get_object_by_path(&self, path: &str, options: &Options) -> Result<Value> {
        let url = path_url(self.root_folder_url()?, path);
        let mut params = call_params(options);
        params.insert(CMISSELECTOR, SELECT_OBJECT);
        self.get_json(&url, params).await
    }

    /// Immediate children of a folder.
    #[instrument(skip(self, options))]
    pub async fn get_children(&self, folder_id: &str, options: &Options) -> Result<Value> {
        self.get_by_id(SELECT_CHILDREN, folder_id, call_params(options))
            .await
    }

    /// Descendants of a folder, down to `depth` levels.
    #[instrument(skip(self, options))]
    pub async fn get_descendants(
        &self,
        folder_id: &str,
        depth: Option<i32>,
        options: &Options,
    ) -> Result<Value> {
        let mut params = call_params(options);
        params.insert_opt(DEPTH, depth.map(|d| d.to_string()));
        self.get_by_id(SELECT_DESCENDANTS, folder_id, params).await
    }

    /// Folder-only descendants of a folder.
    #[instrument(skip(self, options))]
    pub async fn get_folder_tree(
        &self,
        folder_id: &str,
        depth: Option<i32>,
        options: &Options,
    ) -> Result<Value> {
        let mut params = call_params(options);
        params.insert_opt(DEPTH, depth.map(|d| d.to_string()));
        self.get_by_id(SELECT_FOLDER_TREE, folder_id, params).await
    }

    /// Parent of a folder.
    #[instrument(skip(self, options))]
    pub async fn get_folder_parent(&self, folder_id: &str, options: &Options) -> Result<Value> {
        self.get_by_id(SELECT_PARENT, folder_id, call_params(options))
            .await
    }

    /// Every folder an object is filed in.
    #[instrument(skip(self, options))]
    pub async fn get_parents(&self, object_id: &str, options: &Options) -> Result<Value> {
        self.get_by_id(SELECT_PARENTS, object_id, call_params(options))
            .await
    }

    #[instrument(skip(self, options))]
    pub async fn get_allowable_actions(
        &self,
        object_id: &str,
        options: &Options,
    ) -> Result<Value> {
        self.get_by_id(SELECT_ALLOWABLE_ACTIONS, object_id, call_params(options))
            .await
    }

    #[instrument(skip(self, options))]
    pub async fn get_properties(
        &self,
        object_id: &str,
        return_version: Option<ReturnVersion>,
        options: &Options,
    ) -> Result<Value> {
        let mut params = call_params(options);
        params.insert_opt(RETURN_VERSION, return_version);
        self.get_by_id(SELECT_PROPERTIES, object_id, params).await
    }

    /// Renditions of a document; every rendition unless a filter is given.
    #[instrument(skip(self, options))]
    pub async fn get_renditions(&self, object_id: &str, options: &Options) -> Result<Value> {
        let mut params = call_params(options);
        if !params.contains_key(RENDITION_FILTER) {
            params.insert(RENDITION_FILTER, ALL_RENDITIONS);
        }
        self.get_by_id(SELECT_RENDITIONS, object_id, params).await
    }

    /// Relationships an object takes part in. Direction defaults to `either`.
    #[instrument(skip(self, options))]
    pub async fn get_object_relationships(
        &self,
        object_id: &str,
        include_sub_relationship_types: bool,
        direction: Option<RelationshipDirection>,
        type_id: Option<&str>,
        options: &Options,
    ) -> Result<Value> {
        let mut params = call_params(options);
        params.insert_bool("includeSubRelationshipTypes", include_sub_relationship_types);
        params.insert("relationshipDirection", direction.unwrap_or_default());
        params.insert_opt(TYPE_ID, type_id);
        self.get_by_id(SELECT_RELATIONSHIPS, object_id, params).await
    }

    /// GET against the root folder URL with a selector and `objectId`.
    pub(super) async fn get_by_id(
        &self,
        selector: &str,
        object_id: &str,
        mut params: Params,
    ) -> Result<Value> {
        let url = self.root_folder_url()?;
        params.insert(CMISSELECTOR, selector);
        params.insert(OBJECT_ID, object_id);
        self.get_json(url, params).await
    }
}

/// Append `path` to the root folder URL, percent-encoding each segment on its own.
fn path_url(root: &str, path: &str) -> String {
    let encoded = path
        .trim_start_matches('/')
        .split('/')
        .map(|segment| urlencoding::encode(segment).into_owned())
        .collect::<Vec<_>>()
        .join("/");

    format!("{}/{}", root.trim_end_matches('/'), encoded)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn each_segment_is_encoded() {
        assert_eq!(
            path_url("http://host/browser/repo/root", "/a b/c"),
            "http://host/browser/repo/root/a%20b/c"
        );
    }

    #[test]
    fn reserved_characters_are_escaped() {
        assert_eq!(
            path_url("http://host/root", "/Sites/Q&A?/x#1"),
            "http://host/root/Sites/Q%26A%3F/x%231"
        );
    }

    #[test]
    fn leading_slash_is_optional() {
        assert_eq!(path_url("http://host/root/", "docs"), "http://host/root/docs");
        assert_eq!(path_url("http://host/root", "/"), "http://host/root/");
    }

    #[test]
    fn non_ascii_names_are_utf8_encoded() {
        assert_eq!(path_url("http://h/root", "/café"), "http://h/root/caf%C3%A9");
    }
}
