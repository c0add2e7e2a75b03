//! Ordered protocol parameter map.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use url::form_urlencoded;

/// Browser-binding request parameters, in insertion order.
///
/// Every value is already in its wire spelling. Inserting a key that is
/// already present replaces the value and keeps the original position.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Params(IndexMap<String, String>);

impl Params {
    /// Create an empty parameter map.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set a parameter.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.0.insert(key.into(), value.into());
    }

    /// Set a parameter when a value is present.
    pub fn insert_opt(&mut self, key: impl Into<String>, value: Option<impl Into<String>>) {
        if let Some(value) = value {
            self.insert(key, value);
        }
    }

    /// Set a boolean parameter (`true` / `false`).
    pub fn insert_bool(&mut self, key: impl Into<String>, value: bool) {
        self.insert(key, value.to_string());
    }

    /// Overlay `other` on top of these parameters.
    pub fn merge(&mut self, other: &Params) {
        for (key, value) in other.iter() {
            self.insert(key, value);
        }
    }

    /// Look up a parameter.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.0.get(key).map(String::as_str)
    }

    /// True when the key is present.
    pub fn contains_key(&self, key: &str) -> bool {
        self.0.contains_key(key)
    }

    /// Remove a parameter, keeping the order of the others.
    pub fn remove(&mut self, key: &str) -> Option<String> {
        self.0.shift_remove(key)
    }

    /// Number of parameters.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// True when there are no parameters.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Iterate over `(key, value)` pairs in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Encode as `application/x-www-form-urlencoded`.
    pub fn encode(&self) -> String {
        let mut serializer = form_urlencoded::Serializer::new(String::new());
        for (key, value) in self.iter() {
            serializer.append_pair(key, value);
        }
        serializer.finish()
    }

    /// Parse an `application/x-www-form-urlencoded` string.
    pub fn decode(input: &str) -> Self {
        form_urlencoded::parse(input.as_bytes())
            .map(|(k, v)| (k.into_owned(), v.into_owned()))
            .collect()
    }
}

impl FromIterator<(String, String)> for Params {
    fn from_iter<I: IntoIterator<Item = (String, String)>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl<'a> IntoIterator for &'a Params {
    type Item = (&'a String, &'a String);
    type IntoIter = indexmap::map::Iter<'a, String, String>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn insert_overwrites_in_place() {
        let mut params = Params::new();
        params.insert("succinct", "true");
        params.insert("objectId", "abc");
        params.insert("succinct", "false");

        let pairs: Vec<_> = params.iter().collect();
        assert_eq!(pairs, vec![("succinct", "false"), ("objectId", "abc")]);
    }

    #[test]
    fn merge_prefers_later_values() {
        let mut defaults = Params::new();
        defaults.insert("succinct", "true");
        defaults.insert("filter", "*");

        let mut call = Params::new();
        call.insert("filter", "cmis:name");
        call.insert("cmisselector", "object");

        defaults.merge(&call);
        assert_eq!(defaults.get("succinct"), Some("true"));
        assert_eq!(defaults.get("filter"), Some("cmis:name"));
        assert_eq!(defaults.get("cmisselector"), Some("object"));
    }

    #[test]
    fn insert_opt_skips_missing_values() {
        let mut params = Params::new();
        params.insert_opt("typeId", None::<String>);
        params.insert_opt("depth", Some("2"));
        assert!(!params.contains_key("typeId"));
        assert_eq!(params.get("depth"), Some("2"));
    }

    #[test]
    fn encodes_form_urlencoded() {
        let mut params = Params::new();
        params.insert("statement", "SELECT * FROM cmis:document");
        params.insert("propertyId[0]", "cmis:name");

        let encoded = params.encode();
        assert_eq!(
            encoded,
            "statement=SELECT+*+FROM+cmis%3Adocument&propertyId%5B0%5D=cmis%3Aname"
        );
        assert_eq!(Params::decode(&encoded), params);
    }
}
