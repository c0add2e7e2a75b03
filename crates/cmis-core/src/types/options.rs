//! Per-call option bag.

use super::enums::IncludeRelationships;
use super::params::Params;

/// Optional protocol parameters supplied by the caller for one operation.
///
/// An `Options` value is only ever read by the session: the effective request
/// parameters are built in a fresh map, so the same bag can be reused across
/// calls.
///
/// # Example
///
/// ```
/// use cmis_core::Options;
///
/// let options = Options::new().max_items(3).filter("cmis:name,cmis:objectId");
/// assert_eq!(options.params().get("maxItems"), Some("3"));
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Options {
    params: Params,
}

impl Options {
    /// Create an empty option bag.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set an arbitrary protocol parameter.
    pub fn set(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.params.insert(key, value);
        self
    }

    fn set_bool(self, key: &str, value: bool) -> Self {
        self.set(key, value.to_string())
    }

    /// `maxItems`
    pub fn max_items(self, value: u32) -> Self {
        self.set("maxItems", value.to_string())
    }

    /// `skipCount`
    pub fn skip_count(self, value: u32) -> Self {
        self.set("skipCount", value.to_string())
    }

    /// `orderBy`
    pub fn order_by(self, value: impl Into<String>) -> Self {
        self.set("orderBy", value)
    }

    /// `filter`
    pub fn filter(self, value: impl Into<String>) -> Self {
        self.set("filter", value)
    }

    /// `renditionFilter`
    pub fn rendition_filter(self, value: impl Into<String>) -> Self {
        self.set("renditionFilter", value)
    }

    /// `includeAllowableActions`
    pub fn include_allowable_actions(self, value: bool) -> Self {
        self.set_bool("includeAllowableActions", value)
    }

    /// `includeRelationships`
    pub fn include_relationships(self, value: IncludeRelationships) -> Self {
        self.set("includeRelationships", value)
    }

    /// `includeACL`
    pub fn include_acl(self, value: bool) -> Self {
        self.set_bool("includeACL", value)
    }

    /// `includePolicyIds`
    pub fn include_policy_ids(self, value: bool) -> Self {
        self.set_bool("includePolicyIds", value)
    }

    /// `includePathSegment`
    pub fn include_path_segment(self, value: bool) -> Self {
        self.set_bool("includePathSegment", value)
    }

    /// `succinct`; the session sends `true` unless overridden here.
    pub fn succinct(self, value: bool) -> Self {
        self.set_bool("succinct", value)
    }

    /// `changeToken`, for optimistic locking on updates.
    pub fn change_token(self, value: impl Into<String>) -> Self {
        self.set("changeToken", value)
    }

    /// True when the caller set `key`.
    pub fn contains(&self, key: &str) -> bool {
        self.params.contains_key(key)
    }

    /// The parameters set so far.
    pub fn params(&self) -> &Params {
        &self.params
    }
}

impl From<Params> for Options {
    fn from(params: Params) -> Self {
        Self { params }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builder_uses_wire_names() {
        let options = Options::new()
            .max_items(10)
            .skip_count(20)
            .order_by("cmis:name ASC")
            .include_relationships(IncludeRelationships::Source)
            .include_acl(true)
            .succinct(false);

        let params = options.params();
        assert_eq!(params.get("maxItems"), Some("10"));
        assert_eq!(params.get("skipCount"), Some("20"));
        assert_eq!(params.get("orderBy"), Some("cmis:name ASC"));
        assert_eq!(params.get("includeRelationships"), Some("source"));
        assert_eq!(params.get("includeACL"), Some("true"));
        assert_eq!(params.get("succinct"), Some("false"));
    }

    #[test]
    fn arbitrary_parameters() {
        let options = Options::new().set("includePropertyDefinitions", "true");
        assert!(options.contains("includePropertyDefinitions"));
        assert!(!options.contains("maxItems"));
    }
}
