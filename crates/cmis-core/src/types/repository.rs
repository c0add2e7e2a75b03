//! Repository descriptor returned by the service document.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// One entry of the browser-binding service document.
///
/// Only the keys the session needs are typed; everything else the repository
/// reports is kept untouched in [`Repository::extra`].
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Repository {
    pub repository_id: String,
    pub repository_url: String,
    pub root_folder_url: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub repository_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub latest_change_log_token: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cmis_version_supported: Option<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Repository {
    /// Read a descriptor from its JSON form.
    pub fn from_value(value: &Value) -> Result<Self, serde_json::Error> {
        Repository::deserialize(value)
    }

    /// Look up an untyped field of the descriptor by its wire name.
    pub fn field(&self, key: &str) -> Option<&Value> {
        self.extra.get(key)
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn reads_known_keys_and_keeps_the_rest() {
        let value = json!({
            "repositoryId": "A1",
            "repositoryName": "Main Repository",
            "repositoryUrl": "http://localhost/cmis/browser/A1",
            "rootFolderUrl": "http://localhost/cmis/browser/A1/root",
            "cmisVersionSupported": "1.1",
            "productName": "Alfresco"
        });

        let repo = Repository::from_value(&value).unwrap();
        assert_eq!(repo.repository_id, "A1");
        assert_eq!(repo.root_folder_url, "http://localhost/cmis/browser/A1/root");
        assert_eq!(repo.cmis_version_supported.as_deref(), Some("1.1"));
        assert!(repo.latest_change_log_token.is_none());
        assert_eq!(repo.field("productName"), Some(&json!("Alfresco")));
    }

    #[test]
    fn missing_urls_are_rejected() {
        let value = json!({ "repositoryId": "A1" });
        assert!(Repository::from_value(&value).is_err());
    }
}
