//! Access control entries and the create-time controls that carry them.

use indexmap::IndexMap;

use super::params::Params;
use super::properties::flatten_policies;

/// Ordered principal → permissions map.
///
/// # Example
///
/// ```
/// use cmis_core::Aces;
///
/// let aces = Aces::new().grant("GROUP_EVERYONE", ["cmis:read"]);
/// assert_eq!(aces.len(), 1);
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Aces(IndexMap<String, Vec<String>>);

impl Aces {
    /// Create an empty ACE list.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add permissions for a principal, builder style.
    pub fn grant<I, S>(mut self, principal: impl Into<String>, permissions: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.0
            .entry(principal.into())
            .or_default()
            .extend(permissions.into_iter().map(Into::into));
        self
    }

    /// Number of principals.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// True when there are no entries.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Iterate over `(principal, permissions)` in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &[String])> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_slice()))
    }

    /// Write `{action}ACEPrincipal[i]` / `{action}ACEPermission[i][j]` keys.
    pub fn flatten_into(&self, action: AceAction, params: &mut Params) {
        let prefix = action.as_str();
        for (i, (principal, permissions)) in self.iter().enumerate() {
            params.insert(format!("{prefix}ACEPrincipal[{i}]"), principal);
            for (j, permission) in permissions.iter().enumerate() {
                params.insert(format!("{prefix}ACEPermission[{i}][{j}]"), permission);
            }
        }
    }
}

/// Whether ACEs are being added or removed.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AceAction {
    Add,
    Remove,
}

impl AceAction {
    fn as_str(self) -> &'static str {
        match self {
            AceAction::Add => "add",
            AceAction::Remove => "remove",
        }
    }
}

/// Policies and ACEs applied when an object is created or checked in.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ObjectControls {
    pub policies: Vec<String>,
    pub add_aces: Aces,
    pub remove_aces: Aces,
}

impl ObjectControls {
    /// No policies, no ACE changes.
    pub fn new() -> Self {
        Self::default()
    }

    /// Apply a policy.
    pub fn policy(mut self, policy_id: impl Into<String>) -> Self {
        self.policies.push(policy_id.into());
        self
    }

    /// ACEs to add.
    pub fn add_aces(mut self, aces: Aces) -> Self {
        self.add_aces = aces;
        self
    }

    /// ACEs to remove.
    pub fn remove_aces(mut self, aces: Aces) -> Self {
        self.remove_aces = aces;
        self
    }

    pub(crate) fn flatten_into(&self, params: &mut Params) {
        flatten_policies(&self.policies, params);
        self.add_aces.flatten_into(AceAction::Add, params);
        self.remove_aces.flatten_into(AceAction::Remove, params);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn aces_flatten_with_action_prefix() {
        let aces = Aces::new()
            .grant("alice", ["cmis:read", "cmis:write"])
            .grant("bob", ["cmis:all"]);

        let mut params = Params::new();
        aces.flatten_into(AceAction::Add, &mut params);

        assert_eq!(params.get("addACEPrincipal[0]"), Some("alice"));
        assert_eq!(params.get("addACEPermission[0][0]"), Some("cmis:read"));
        assert_eq!(params.get("addACEPermission[0][1]"), Some("cmis:write"));
        assert_eq!(params.get("addACEPrincipal[1]"), Some("bob"));
        assert_eq!(params.get("addACEPermission[1][0]"), Some("cmis:all"));
    }

    #[test]
    fn grant_merges_same_principal() {
        let aces = Aces::new()
            .grant("alice", ["cmis:read"])
            .grant("alice", ["cmis:write"]);
        assert_eq!(aces.len(), 1);
        let (_, permissions) = aces.iter().next().unwrap();
        assert_eq!(permissions, ["cmis:read", "cmis:write"]);
    }

    #[test]
    fn controls_flatten_everything() {
        let controls = ObjectControls::new()
            .policy("policy-1")
            .add_aces(Aces::new().grant("alice", ["cmis:read"]))
            .remove_aces(Aces::new().grant("GROUP_EVERYONE", ["cmis:write"]));

        let mut params = Params::new();
        controls.flatten_into(&mut params);

        assert_eq!(params.get("policy[0]"), Some("policy-1"));
        assert_eq!(params.get("addACEPrincipal[0]"), Some("alice"));
        assert_eq!(params.get("removeACEPrincipal[0]"), Some("GROUP_EVERYONE"));
        assert_eq!(params.get("removeACEPermission[0][0]"), Some("cmis:write"));
    }
}
