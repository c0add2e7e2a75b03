//! cmis-http - HTTP transport for cmis-core
//!
//! Provides [`ReqwestTransport`], the production [`Transport`] for
//! [`CmisSession`], and [`connect`] to build a session over it in one call.
//!
//! # Example
//!
//! ```no_run
//! use cmis_core::Options;
//!
//! # async fn example() -> Result<(), cmis_core::Error> {
//! let mut session = cmis_http::connect("http://localhost:8080/alfresco/api/-default-/public/cmis/versions/1.1/browser")?;
//! session.set_credentials("admin", "admin");
//! session.load_repositories().await?;
//!
//! let results = session
//!     .query("SELECT cmis:name FROM cmis:folder", false, &Options::new().max_items(10))
//!     .await?;
//! println!("{results:#}");
//! # Ok(())
//! # }
//! ```
//!
//! [`Transport`]: cmis_core::Transport

mod transport;

use cmis_core::{CmisSession, ServiceUrl};

pub use transport::{ReqwestTransport, ReqwestTransportBuilder};

/// Create a session for `url` over a default [`ReqwestTransport`].
pub fn connect(url: &str) -> cmis_core::Result<CmisSession> {
    let url = ServiceUrl::new(url)?;
    let transport = ReqwestTransport::new()?;
    Ok(CmisSession::new(url, transport))
}
