//! Policies and access control.

use serde_json::Value;
use tracing::instrument;

use crate::types::{AceAction, AclPropagation, Aces, Options, Params};
use crate::Result;

use super::protocol::*;
use super::{CmisSession, call_params};

impl CmisSession {
    #[instrument(skip(self, options))]
    pub async fn apply_policy(
        &self,
        object_id: &str,
        policy_id: &str,
        options: &Options,
    ) -> Result<Value> {
        self.post_policy(ACTION_APPLY_POLICY, object_id, policy_id, options)
            .await
    }

    #[instrument(skip(self, options))]
    pub async fn remove_policy(
        &self,
        object_id: &str,
        policy_id: &str,
        options: &Options,
    ) -> Result<Value> {
        self.post_policy(ACTION_REMOVE_POLICY, object_id, policy_id, options)
            .await
    }

    /// Policies applied to an object.
    #[instrument(skip(self, options))]
    pub async fn get_applied_policies(&self, object_id: &str, options: &Options) -> Result<Value> {
        self.get_by_id(SELECT_POLICIES, object_id, call_params(options))
            .await
    }

    /// Add and remove ACEs in one request.
    #[instrument(skip(self, add_aces, remove_aces))]
    pub async fn apply_acl(
        &self,
        object_id: &str,
        add_aces: &Aces,
        remove_aces: &Aces,
        propagation: Option<AclPropagation>,
    ) -> Result<Value> {
        let url = self.root_folder_url()?;
        let mut params = Params::new();
        params.insert(CMISACTION, ACTION_APPLY_ACL);
        params.insert(OBJECT_ID, object_id);
        params.insert_opt("ACLPropagation", propagation);
        add_aces.flatten_into(AceAction::Add, &mut params);
        remove_aces.flatten_into(AceAction::Remove, &mut params);
        self.post_json(url, params, None).await
    }

    /// ACL of an object.
    #[instrument(skip(self))]
    pub async fn get_acl(&self, object_id: &str, only_basic_permissions: bool) -> Result<Value> {
        let mut params = Params::new();
        params.insert_bool("onlyBasicPermissions", only_basic_permissions);
        self.get_by_id(SELECT_ACL, object_id, params).await
    }

    async fn post_policy(
        &self,
        action: &str,
        object_id: &str,
        policy_id: &str,
        options: &Options,
    ) -> Result<Value> {
        let url = self.root_folder_url()?;
        let mut params = call_params(options);
        params.insert(CMISACTION, action);
        params.insert(OBJECT_ID, object_id);
        params.insert("policyId", policy_id);
        self.post_json(url, params, None).await
    }
}
