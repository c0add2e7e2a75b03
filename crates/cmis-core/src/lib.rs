//! cmis-core - CMIS Browser Binding Client
//!
//! This library exposes the CMIS 1.1 browser binding as a session-centric API.
//! Every operation flows through a [`CmisSession`], which shapes parameters,
//! picks the target URL and authenticates requests before handing them to a
//! pluggable [`Transport`].
//!
//! # Example
//!
//! ```no_run
//! use cmis_core::{CmisSession, Options, ServiceUrl};
//! # use cmis_core::transport::{Request, Response, Transport};
//! # use cmis_core::TransportError;
//! # struct HttpTransport;
//! # #[async_trait::async_trait]
//! # impl Transport for HttpTransport {
//! #     async fn send(&self, _: Request) -> Result<Response, TransportError> { unimplemented!() }
//! # }
//!
//! # async fn example() -> Result<(), cmis_core::Error> {
//! let url = ServiceUrl::new("http://localhost:8080/alfresco/api/-default-/public/cmis/versions/1.1/browser")?;
//! let mut session = CmisSession::new(url, HttpTransport);
//! session.set_credentials("admin", "admin");
//! session.load_repositories().await?;
//!
//! let root = session.get_object_by_path("/", &Options::new()).await?;
//! let children = session
//!     .get_children(root["succinctProperties"]["cmis:objectId"].as_str().unwrap_or_default(), &Options::new())
//!     .await?;
//! println!("{children:#}");
//! # Ok(())
//! # }
//! ```

pub mod credentials;
pub mod error;
pub mod session;
pub mod transport;
pub mod types;

// Re-export primary types at crate root for convenience
pub use credentials::{BearerToken, Credentials};
pub use error::{CmisException, Error, HttpError, InvalidInputError, TransportError};
pub use session::{CmisSession, ErrorHandler};
pub use transport::Transport;
pub use types::{
    AceAction, AclPropagation, Aces, CMIS_NAME, CMIS_OBJECT_TYPE_ID, Content, ContentStream,
    DocumentInput, Download, IncludeRelationships, ObjectControls, Options, Params, Properties,
    PropertyValue, RelationshipDirection, Repository, ReturnVersion, Scalar, ServiceUrl,
    UnfileObjects, VersioningState,
};

/// Result type alias using the crate's Error type.
pub type Result<T> = std::result::Result<T, Error>;
