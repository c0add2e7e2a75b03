//! Browser-binding parameter names, selectors and actions.

// ============================================================================
// Parameter Names
// ============================================================================

pub const CMISACTION: &str = "cmisaction";
pub const CMISSELECTOR: &str = "cmisselector";
pub const SUCCINCT: &str = "succinct";
pub const CHARSET: &str = "_charset_";
pub const OBJECT_ID: &str = "objectId";
pub const REPOSITORY_ID: &str = "repositoryId";
pub const TYPE_ID: &str = "typeId";
pub const VERSION_SERIES_ID: &str = "versionSeriesId";
pub const FOLDER_ID: &str = "folderId";
pub const ALL_VERSIONS: &str = "allVersions";
pub const RETURN_VERSION: &str = "returnVersion";
pub const DEPTH: &str = "depth";
pub const MAJOR: &str = "major";
pub const RENDITION_FILTER: &str = "renditionFilter";

// ============================================================================
// Selectors (GET)
// ============================================================================

pub const SELECT_REPOSITORY_INFO: &str = "repositoryInfo";
pub const SELECT_TYPE_CHILDREN: &str = "typeChildren";
pub const SELECT_TYPE_DESCENDANTS: &str = "typeDescendants";
pub const SELECT_TYPE_DEFINITION: &str = "typeDefinition";
pub const SELECT_CHECKED_OUT: &str = "checkedOut";
pub const SELECT_OBJECT: &str = "object";
pub const SELECT_CHILDREN: &str = "children";
pub const SELECT_DESCENDANTS: &str = "descendants";
pub const SELECT_FOLDER_TREE: &str = "folderTree";
pub const SELECT_PARENT: &str = "parent";
pub const SELECT_PARENTS: &str = "parents";
pub const SELECT_ALLOWABLE_ACTIONS: &str = "allowableActions";
pub const SELECT_PROPERTIES: &str = "properties";
pub const SELECT_CONTENT: &str = "content";
pub const SELECT_RENDITIONS: &str = "renditions";
pub const SELECT_VERSIONS: &str = "versions";
pub const SELECT_POLICIES: &str = "policies";
pub const SELECT_ACL: &str = "acl";
pub const SELECT_CONTENT_CHANGES: &str = "contentChanges";
pub const SELECT_RELATIONSHIPS: &str = "relationships";

// ============================================================================
// Actions (POST)
// ============================================================================

pub const ACTION_QUERY: &str = "query";
pub const ACTION_CREATE_TYPE: &str = "createType";
pub const ACTION_UPDATE_TYPE: &str = "updateType";
pub const ACTION_DELETE_TYPE: &str = "deleteType";
pub const ACTION_CREATE_FOLDER: &str = "createFolder";
pub const ACTION_UPDATE: &str = "update";
pub const ACTION_MOVE: &str = "move";
pub const ACTION_CREATE_DOCUMENT: &str = "createDocument";
pub const ACTION_BULK_UPDATE: &str = "bulkUpdate";
pub const ACTION_CREATE_DOCUMENT_FROM_SOURCE: &str = "createDocumentFromSource";
pub const ACTION_CHECK_OUT: &str = "checkOut";
pub const ACTION_CANCEL_CHECK_OUT: &str = "cancelCheckOut";
pub const ACTION_CHECK_IN: &str = "checkIn";
pub const ACTION_SET_CONTENT: &str = "setContent";
pub const ACTION_APPEND_CONTENT: &str = "appendContent";
pub const ACTION_DELETE_CONTENT: &str = "deleteContent";
pub const ACTION_DELETE: &str = "delete";
pub const ACTION_DELETE_TREE: &str = "deleteTree";
pub const ACTION_CREATE_RELATIONSHIP: &str = "createRelationship";
pub const ACTION_CREATE_POLICY: &str = "createPolicy";
pub const ACTION_CREATE_ITEM: &str = "createItem";
pub const ACTION_LAST_RESULT: &str = "lastResult";
pub const ACTION_ADD_OBJECT_TO_FOLDER: &str = "addObjectToFolder";
pub const ACTION_REMOVE_OBJECT_FROM_FOLDER: &str = "removeObjectFromFolder";
pub const ACTION_APPLY_POLICY: &str = "applyPolicy";
pub const ACTION_REMOVE_POLICY: &str = "removePolicy";
pub const ACTION_APPLY_ACL: &str = "applyACL";

// ============================================================================
// Defaults
// ============================================================================

pub const DEFAULT_FOLDER_TYPE: &str = "cmis:folder";
pub const DEFAULT_DOCUMENT_TYPE: &str = "cmis:document";
pub const ALL_RENDITIONS: &str = "*";
