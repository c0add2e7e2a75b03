//! Value types shared by the session and its callers.

mod acl;
mod content;
mod enums;
mod options;
mod params;
mod properties;
mod repository;
mod service_url;

pub use acl::{AceAction, Aces, ObjectControls};
pub use content::{Content, ContentStream};
pub use enums::{
    AclPropagation, Download, IncludeRelationships, RelationshipDirection, ReturnVersion,
    UnfileObjects, VersioningState,
};
pub use options::Options;
pub use params::Params;
pub use properties::{
    CMIS_NAME, CMIS_OBJECT_TYPE_ID, DocumentInput, Properties, PropertyValue, Scalar,
    flatten_policies, flatten_secondary_type_ids,
};
pub use repository::Repository;
pub use service_url::ServiceUrl;
