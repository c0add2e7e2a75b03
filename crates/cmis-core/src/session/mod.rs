//! The CMIS session façade.
//!
//! A [`CmisSession`] holds connection state and exposes one method per CMIS
//! operation. Each method shapes its inputs into a [`Request`], hands it to
//! the configured [`Transport`] and maps the [`Response`] back to parsed JSON
//! or raw content.

mod content;
mod discovery;
mod navigation;
mod objects;
mod policies;
mod protocol;
mod repository;
mod type_definitions;
mod versioning;

use std::fmt;
use std::sync::Arc;

use serde_json::{Map, Value};
use tracing::{debug, instrument, trace, warn};

use crate::credentials::{BearerToken, Credentials};
use crate::error::{Error, HttpError};
use crate::transport::{Auth, Body, ContentPart, Method, Multipart, Request, Response, Transport};
use crate::types::{Options, Params, Repository, ServiceUrl};
use crate::Result;

/// Observer invoked with every failed request.
pub type ErrorHandler = Arc<dyn Fn(&Error) + Send + Sync>;

/// Entry point for all CMIS requests.
///
/// Configuration setters take `&mut self`, so they cannot race with requests
/// in flight; every operation takes `&self` and may run concurrently.
///
/// # Example
///
/// ```no_run
/// use cmis_core::{CmisSession, Options, ServiceUrl};
/// # use cmis_core::transport::{Request, Response, Transport};
/// # use cmis_core::error::TransportError;
/// # struct MyTransport;
/// # #[async_trait::async_trait]
/// # impl Transport for MyTransport {
/// #     async fn send(&self, _: Request) -> Result<Response, TransportError> { unimplemented!() }
/// # }
///
/// # async fn example() -> Result<(), cmis_core::Error> {
/// let url = ServiceUrl::new("http://localhost:8080/alfresco/cmisbrowser")?;
/// let mut session = CmisSession::new(url, MyTransport);
/// session.set_credentials("admin", "admin");
/// session.load_repositories().await?;
///
/// let results = session
///     .query("SELECT * FROM cmis:document", false, &Options::new().max_items(3))
///     .await?;
/// println!("{results}");
/// # Ok(())
/// # }
/// ```
#[derive(Clone)]
pub struct CmisSession {
    url: ServiceUrl,
    transport: Arc<dyn Transport>,
    credentials: Option<Credentials>,
    token: Option<BearerToken>,
    charset: Option<String>,
    defaults: Params,
    error_handler: Option<ErrorHandler>,
    default_repository: Option<Repository>,
    repositories: Map<String, Value>,
}

impl CmisSession {
    /// Create a session for a service URL. No request is made yet.
    pub fn new(url: ServiceUrl, transport: impl Transport + 'static) -> Self {
        Self::with_transport(url, Arc::new(transport))
    }

    /// Create a session sharing an existing transport.
    pub fn with_transport(url: ServiceUrl, transport: Arc<dyn Transport>) -> Self {
        let mut defaults = Params::new();
        defaults.insert_bool(protocol::SUCCINCT, true);

        Self {
            url,
            transport,
            credentials: None,
            token: None,
            charset: None,
            defaults,
            error_handler: None,
            default_repository: None,
            repositories: Map::new(),
        }
    }

    /// Use HTTP Basic authentication on all subsequent requests.
    pub fn set_credentials(
        &mut self,
        username: impl Into<String>,
        password: impl Into<String>,
    ) -> &mut Self {
        self.credentials = Some(Credentials::new(username, password));
        self
    }

    /// Use bearer authentication; ignored while credentials are set.
    pub fn set_token(&mut self, token: impl Into<String>) -> &mut Self {
        self.token = Some(BearerToken::new(token));
        self
    }

    /// Charset sent as the `_charset_` field of multipart requests.
    pub fn set_charset(&mut self, charset: impl Into<String>) -> &mut Self {
        self.charset = Some(charset.into());
        self
    }

    /// Observe every failed request. The failure is still returned to the caller.
    pub fn set_error_handler<F>(&mut self, handler: F) -> &mut Self
    where
        F: Fn(&Error) + Send + Sync + 'static,
    {
        self.error_handler = Some(Arc::new(handler));
        self
    }

    /// Add a parameter sent with every request unless a call overrides it.
    pub fn set_default_option(
        &mut self,
        key: impl Into<String>,
        value: impl Into<String>,
    ) -> &mut Self {
        self.defaults.insert(key, value);
        self
    }

    /// The service URL.
    pub fn url(&self) -> &ServiceUrl {
        &self.url
    }

    /// Session-wide default parameters.
    pub fn default_options(&self) -> &Params {
        &self.defaults
    }

    /// The repository used by all operations, once loaded.
    pub fn default_repository(&self) -> Option<&Repository> {
        self.default_repository.as_ref()
    }

    /// Every repository listed by the service document, in document order.
    pub fn repositories(&self) -> &Map<String, Value> {
        &self.repositories
    }

    pub(crate) fn repository(&self) -> Result<&Repository> {
        self.default_repository.as_ref().ok_or(Error::NotConnected)
    }

    pub(crate) fn root_folder_url(&self) -> Result<&str> {
        Ok(self.repository()?.root_folder_url.as_str())
    }

    pub(crate) fn repository_url(&self) -> Result<&str> {
        Ok(self.repository()?.repository_url.as_str())
    }

    fn auth(&self) -> Auth {
        Auth::select(self.credentials.as_ref(), self.token.as_ref())
    }

    /// Session defaults overlaid with the call's parameters.
    fn effective(&self, params: Params) -> Params {
        let mut merged = self.defaults.clone();
        merged.merge(&params);
        merged
    }

    pub(crate) fn build(
        &self,
        method: Method,
        url: &str,
        params: Params,
        content: Option<ContentPart>,
    ) -> Request {
        let params = self.effective(params);
        trace!(?params, "effective parameters");

        let (query, body) = match (method, content) {
            (Method::Get, _) => (params, Body::Empty),
            (Method::Post, None) => (Params::new(), Body::Form(params)),
            (Method::Post, Some(content)) => {
                let mut fields = params;
                if let Some(charset) = &self.charset {
                    fields.insert(protocol::CHARSET, charset.as_str());
                }
                (Params::new(), Body::Multipart(Multipart { content, fields }))
            }
        };

        Request {
            method,
            url: url.to_string(),
            query,
            body,
            auth: self.auth(),
        }
    }

    /// Send a request; any status outside `200..=299` becomes [`Error::Http`].
    #[instrument(skip_all, fields(method = %request.method, url = %request.url))]
    pub(crate) async fn dispatch(&self, request: Request) -> Result<Response> {
        debug!("dispatching request");

        let result = match self.transport.send(request).await {
            Ok(response) if response.is_success() => {
                trace!(status = response.status, "response");
                Ok(response)
            }
            Ok(response) => Err(Error::Http(HttpError::new(response))),
            Err(err) => Err(Error::Transport(err)),
        };

        if let Err(err) = &result {
            if let Some(handler) = &self.error_handler {
                warn!(error = %err, "request failed");
                handler(err);
            }
        }

        result
    }

    pub(crate) async fn get(&self, url: &str, params: Params) -> Result<Response> {
        let request = self.build(Method::Get, url, params, None);
        self.dispatch(request).await
    }

    pub(crate) async fn post(
        &self,
        url: &str,
        params: Params,
        content: Option<ContentPart>,
    ) -> Result<Response> {
        let request = self.build(Method::Post, url, params, content);
        self.dispatch(request).await
    }

    pub(crate) async fn get_json(&self, url: &str, params: Params) -> Result<Value> {
        Ok(self.get(url, params).await?.json()?)
    }

    pub(crate) async fn post_json(
        &self,
        url: &str,
        params: Params,
        content: Option<ContentPart>,
    ) -> Result<Value> {
        Ok(self.post(url, params, content).await?.json()?)
    }
}

/// Start a call's parameters from the caller's option bag.
pub(crate) fn call_params(options: &Options) -> Params {
    options.params().clone()
}

impl fmt::Debug for CmisSession {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CmisSession")
            .field("url", &self.url)
            .field("credentials", &self.credentials)
            .field("token", &self.token)
            .field("charset", &self.charset)
            .field("defaults", &self.defaults)
            .field(
                "default_repository",
                &self.default_repository.as_ref().map(|r| &r.repository_id),
            )
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use async_trait::async_trait;

    use super::*;
    use crate::error::TransportError;

    struct Unreachable;

    #[async_trait]
    impl Transport for Unreachable {
        async fn send(&self, _request: Request) -> std::result::Result<Response, TransportError> {
            Err(TransportError::Connection {
                message: "unreachable".to_string(),
            })
        }
    }

    fn session() -> CmisSession {
        CmisSession::new(ServiceUrl::new("http://localhost/browser").unwrap(), Unreachable)
    }

    #[test]
    fn defaults_to_succinct() {
        assert_eq!(session().default_options().get("succinct"), Some("true"));
    }

    #[test]
    fn call_parameters_override_defaults() {
        let mut params = Params::new();
        params.insert("succinct", "false");
        params.insert("cmisselector", "object");

        let request = session().build(Method::Get, "http://localhost/root", params, None);
        assert_eq!(request.query.get("succinct"), Some("false"));
        assert_eq!(request.query.get("cmisselector"), Some("object"));
        assert_eq!(request.body, Body::Empty);
    }

    #[test]
    fn post_without_content_is_a_form() {
        let mut params = Params::new();
        params.insert("cmisaction", "query");

        let request = session().build(Method::Post, "http://localhost/repo", params, None);
        assert!(request.query.is_empty());
        let Body::Form(fields) = &request.body else {
            panic!("expected a form body");
        };
        assert_eq!(fields.get("cmisaction"), Some("query"));
        assert_eq!(fields.get("succinct"), Some("true"));
    }

    #[test]
    fn charset_is_only_added_to_multipart() {
        let mut session = session();
        session.set_charset("ISO-8859-1");

        let form = session.build(Method::Post, "http://x/", Params::new(), None);
        assert!(!form.params().contains_key("_charset_"));

        let part = ContentPart {
            filename: "a.txt".to_string(),
            mime_type: None,
            bytes: b"a".to_vec(),
        };
        let multipart = session.build(Method::Post, "http://x/", Params::new(), Some(part));
        assert_eq!(multipart.params().get("_charset_"), Some("ISO-8859-1"));
    }

    #[test]
    fn operations_fail_fast_before_loading() {
        assert!(matches!(session().root_folder_url(), Err(Error::NotConnected)));
        assert!(matches!(session().repository_url(), Err(Error::NotConnected)));
    }

    #[test]
    fn debug_redacts_secrets() {
        let mut session = session();
        session.set_credentials("admin", "s3cret").set_token("t0ken");
        let debug = format!("{:?}", session);
        assert!(!debug.contains("s3cret"));
        assert!(!debug.contains("t0ken"));
    }

    #[tokio::test]
    async fn error_handler_observes_failures() {
        use std::sync::atomic::{AtomicUsize, Ordering};

        let seen = Arc::new(AtomicUsize::new(0));
        let observer = Arc::clone(&seen);

        let mut session = session();
        session.set_error_handler(move |_| {
            observer.fetch_add(1, Ordering::SeqCst);
        });

        let result = session.get("http://localhost/root", Params::new()).await;
        assert!(matches!(result, Err(Error::Transport(_))));
        assert_eq!(seen.load(Ordering::SeqCst), 1);
    }
}
