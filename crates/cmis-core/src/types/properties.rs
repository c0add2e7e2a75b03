//! Property bags and their indexed wire encoding.
//!
//! The browser binding has no nested form encoding, so a property map is sent
//! as `propertyId[i]` / `propertyValue[i]` pairs, with multi-valued
//! properties expanded to `propertyValue[i][j]`.

use chrono::{DateTime, Utc};
use indexmap::IndexMap;

use super::params::Params;

/// Property id of an object's name.
pub const CMIS_NAME: &str = "cmis:name";

/// Property id of an object's type.
pub const CMIS_OBJECT_TYPE_ID: &str = "cmis:objectTypeId";

/// A single property value.
#[derive(Clone, Debug, PartialEq)]
pub enum Scalar {
    String(String),
    Integer(i64),
    Decimal(f64),
    Boolean(bool),
    /// Sent as milliseconds since the Unix epoch.
    DateTime(DateTime<Utc>),
}

impl Scalar {
    /// The value in its wire spelling.
    pub fn to_wire(&self) -> String {
        match self {
            Scalar::String(s) => s.clone(),
            Scalar::Integer(i) => i.to_string(),
            Scalar::Decimal(d) => d.to_string(),
            Scalar::Boolean(b) => b.to_string(),
            Scalar::DateTime(dt) => dt.timestamp_millis().to_string(),
        }
    }

    /// The string content, if this is a string value.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Scalar::String(s) => Some(s),
            _ => None,
        }
    }
}

impl From<&str> for Scalar {
    fn from(value: &str) -> Self {
        Scalar::String(value.to_string())
    }
}

impl From<String> for Scalar {
    fn from(value: String) -> Self {
        Scalar::String(value)
    }
}

impl From<i64> for Scalar {
    fn from(value: i64) -> Self {
        Scalar::Integer(value)
    }
}

impl From<i32> for Scalar {
    fn from(value: i32) -> Self {
        Scalar::Integer(value.into())
    }
}

impl From<f64> for Scalar {
    fn from(value: f64) -> Self {
        Scalar::Decimal(value)
    }
}

impl From<bool> for Scalar {
    fn from(value: bool) -> Self {
        Scalar::Boolean(value)
    }
}

impl From<DateTime<Utc>> for Scalar {
    fn from(value: DateTime<Utc>) -> Self {
        Scalar::DateTime(value)
    }
}

/// The value of one property in a [`Properties`] bag.
#[derive(Clone, Debug, PartialEq)]
pub enum PropertyValue {
    Single(Scalar),
    Multi(Vec<Scalar>),
    /// Sends the id without a value, which clears the property on update.
    Unset,
}

impl PropertyValue {
    /// The single value, if this is a single-valued property.
    pub fn as_single(&self) -> Option<&Scalar> {
        match self {
            PropertyValue::Single(s) => Some(s),
            _ => None,
        }
    }
}

impl From<Scalar> for PropertyValue {
    fn from(value: Scalar) -> Self {
        PropertyValue::Single(value)
    }
}

macro_rules! property_value_from {
    ($($ty:ty),+) => {
        $(
            impl From<$ty> for PropertyValue {
                fn from(value: $ty) -> Self {
                    PropertyValue::Single(value.into())
                }
            }

            impl From<Vec<$ty>> for PropertyValue {
                fn from(values: Vec<$ty>) -> Self {
                    PropertyValue::Multi(values.into_iter().map(Into::into).collect())
                }
            }
        )+
    };
}

property_value_from!(&str, String, i64, i32, f64, bool, DateTime<Utc>);

/// An ordered property map: property id to value.
///
/// # Example
///
/// ```
/// use cmis_core::Properties;
///
/// let props = Properties::new()
///     .with("cmis:name", "report.pdf")
///     .with("cmis:secondaryObjectTypeIds", vec!["P:cm:titled"]);
/// assert_eq!(props.len(), 2);
/// ```
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Properties(IndexMap<String, PropertyValue>);

impl Properties {
    /// Create an empty property map.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a property, builder style.
    pub fn with(mut self, id: impl Into<String>, value: impl Into<PropertyValue>) -> Self {
        self.insert(id, value);
        self
    }

    /// Add or replace a property.
    pub fn insert(&mut self, id: impl Into<String>, value: impl Into<PropertyValue>) {
        self.0.insert(id.into(), value.into());
    }

    /// Look up a property.
    pub fn get(&self, id: &str) -> Option<&PropertyValue> {
        self.0.get(id)
    }

    /// True when the property is present.
    pub fn contains(&self, id: &str) -> bool {
        self.0.contains_key(id)
    }

    /// The `cmis:name` value when it is a single string.
    pub fn name(&self) -> Option<&str> {
        self.get(CMIS_NAME)
            .and_then(PropertyValue::as_single)
            .and_then(Scalar::as_str)
    }

    /// Number of properties.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// True when there are no properties.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Iterate in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &PropertyValue)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// Write the indexed `propertyId[i]` / `propertyValue[i]([j])` keys.
    pub fn flatten_into(&self, params: &mut Params) {
        for (i, (id, value)) in self.iter().enumerate() {
            params.insert(format!("propertyId[{i}]"), id);
            match value {
                PropertyValue::Single(scalar) => {
                    params.insert(format!("propertyValue[{i}]"), scalar.to_wire());
                }
                PropertyValue::Multi(values) => {
                    for (j, scalar) in values.iter().enumerate() {
                        params.insert(format!("propertyValue[{i}][{j}]"), scalar.to_wire());
                    }
                }
                PropertyValue::Unset => {}
            }
        }
    }
}

impl<K: Into<String>, V: Into<PropertyValue>> FromIterator<(K, V)> for Properties {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self(
            iter.into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        )
    }
}

/// Either a bare document name or a full property map.
#[derive(Clone, Debug, PartialEq)]
pub enum DocumentInput {
    Name(String),
    Properties(Properties),
}

impl DocumentInput {
    /// Normalize to a property map; a bare name becomes `{cmis:name: name}`.
    pub fn into_properties(self) -> Properties {
        match self {
            DocumentInput::Name(name) => Properties::new().with(CMIS_NAME, name),
            DocumentInput::Properties(properties) => properties,
        }
    }
}

impl From<&str> for DocumentInput {
    fn from(name: &str) -> Self {
        DocumentInput::Name(name.to_string())
    }
}

impl From<String> for DocumentInput {
    fn from(name: String) -> Self {
        DocumentInput::Name(name)
    }
}

impl From<Properties> for DocumentInput {
    fn from(properties: Properties) -> Self {
        DocumentInput::Properties(properties)
    }
}

/// Write `policy[i]` keys.
pub fn flatten_policies(policies: &[String], params: &mut Params) {
    for (i, policy) in policies.iter().enumerate() {
        params.insert(format!("policy[{i}]"), policy);
    }
}

/// Write `addSecondaryTypeId[i]` or `removeSecondaryTypeId[i]` keys.
pub fn flatten_secondary_type_ids(action: &str, type_ids: &[String], params: &mut Params) {
    for (i, type_id) in type_ids.iter().enumerate() {
        params.insert(format!("{action}SecondaryTypeId[{i}]"), type_id);
    }
}

#[cfg(test)]
mod tests {
    use chrono::TimeZone;

    use super::*;

    #[test]
    fn scalar_values_flatten_to_single_index() {
        let props = Properties::new()
            .with("cmis:name", "Test")
            .with("cmis:objectTypeId", "cmis:folder");

        let mut params = Params::new();
        props.flatten_into(&mut params);

        assert_eq!(params.get("propertyId[0]"), Some("cmis:name"));
        assert_eq!(params.get("propertyValue[0]"), Some("Test"));
        assert_eq!(params.get("propertyId[1]"), Some("cmis:objectTypeId"));
        assert_eq!(params.get("propertyValue[1]"), Some("cmis:folder"));
        assert_eq!(params.len(), 4);
    }

    #[test]
    fn multi_values_expand_to_second_index() {
        let props = Properties::new()
            .with("cmis:name", "doc")
            .with("cmis:secondaryObjectTypeIds", vec!["P:cm:titled", "P:cm:author"]);

        let mut params = Params::new();
        props.flatten_into(&mut params);

        assert_eq!(params.get("propertyId[1]"), Some("cmis:secondaryObjectTypeIds"));
        assert_eq!(params.get("propertyValue[1][0]"), Some("P:cm:titled"));
        assert_eq!(params.get("propertyValue[1][1]"), Some("P:cm:author"));
        assert!(!params.contains_key("propertyValue[1]"));
    }

    #[test]
    fn unset_sends_only_the_id() {
        let props = Properties::new().with("cm:title", PropertyValue::Unset);
        let mut params = Params::new();
        props.flatten_into(&mut params);
        assert_eq!(params.get("propertyId[0]"), Some("cm:title"));
        assert_eq!(params.len(), 1);
    }

    #[test]
    fn typed_scalars_use_wire_spelling() {
        let when = Utc.with_ymd_and_hms(2020, 1, 1, 0, 0, 0).unwrap();
        let props = Properties::new()
            .with("n", 42)
            .with("d", 1.5)
            .with("b", true)
            .with("t", when);

        let mut params = Params::new();
        props.flatten_into(&mut params);
        assert_eq!(params.get("propertyValue[0]"), Some("42"));
        assert_eq!(params.get("propertyValue[1]"), Some("1.5"));
        assert_eq!(params.get("propertyValue[2]"), Some("true"));
        assert_eq!(params.get("propertyValue[3]"), Some("1577836800000"));
    }

    #[test]
    fn document_input_from_name() {
        let props = DocumentInput::from("report.txt").into_properties();
        assert_eq!(props.name(), Some("report.txt"));
        assert_eq!(props.len(), 1);
    }

    #[test]
    fn policies_and_secondary_types() {
        let mut params = Params::new();
        flatten_policies(&["p1".to_string(), "p2".to_string()], &mut params);
        flatten_secondary_type_ids("remove", &["P:cm:titled".to_string()], &mut params);
        assert_eq!(params.get("policy[0]"), Some("p1"));
        assert_eq!(params.get("policy[1]"), Some("p2"));
        assert_eq!(params.get("removeSecondaryTypeId[0]"), Some("P:cm:titled"));
    }
}
