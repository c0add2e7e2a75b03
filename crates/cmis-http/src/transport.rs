//! reqwest implementation of the CMIS transport.

use std::error::Error as _;
use std::fmt;
use std::io;
use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use cmis_core::TransportError;
use cmis_core::transport::{Body, Method, Multipart, Request, Response, Transport};
use reqwest::Url;
use reqwest::cookie::{CookieStore, Jar};
use reqwest::header::{AUTHORIZATION, CONTENT_TYPE, COOKIE, SET_COOKIE};
use reqwest::multipart::{Form, Part};
use tracing::{debug, instrument, trace};

const DEFAULT_USER_AGENT: &str = concat!("cmis-http/", env!("CARGO_PKG_VERSION"));

/// HTTP transport backed by a shared [`reqwest::Client`].
///
/// The transport keeps its own cookie jar. Every `Set-Cookie` it sees is
/// stored, and the jar is replayed only on requests that carry
/// [`Auth::Ambient`](cmis_core::transport::Auth::Ambient) credentials, so
/// servers that authenticate with a session cookie work without credentials
/// on the session.
#[derive(Clone)]
pub struct ReqwestTransport {
    client: reqwest::Client,
    cookies: Option<Arc<Jar>>,
    timeout: Option<Duration>,
}

impl ReqwestTransport {
    /// A transport with default settings.
    pub fn new() -> Result<Self, TransportError> {
        Self::builder().build()
    }

    /// Configure a transport.
    pub fn builder() -> ReqwestTransportBuilder {
        ReqwestTransportBuilder::default()
    }

    /// Wrap an existing client, e.g. one configured with a proxy or custom roots.
    ///
    /// Ambient credentials come from the transport's own cookie jar, so the
    /// client does not need a cookie store of its own.
    pub fn with_client(client: reqwest::Client) -> Self {
        Self {
            client,
            cookies: Some(Arc::default()),
            timeout: None,
        }
    }

    /// Cookie header for an ambient request to `url`.
    fn ambient_cookies(&self, url: &Url) -> Option<reqwest::header::HeaderValue> {
        self.cookies.as_ref()?.cookies(url)
    }

    fn store_cookies(&self, response: &reqwest::Response) {
        if let Some(jar) = &self.cookies {
            let mut set_cookies = response.headers().get_all(SET_COOKIE).iter();
            jar.set_cookies(&mut set_cookies, response.url());
        }
    }

    fn map_error(&self, err: reqwest::Error) -> TransportError {
        if err.is_timeout() {
            TransportError::Timeout {
                duration_ms: self.timeout.map_or(0, |t| t.as_millis() as u64),
            }
        } else if err.is_connect() {
            map_connect_error(err)
        } else {
            TransportError::Http {
                message: err.to_string(),
            }
        }
    }
}

impl fmt::Debug for ReqwestTransport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ReqwestTransport")
            .field("cookies", &self.cookies.is_some())
            .field("timeout", &self.timeout)
            .finish()
    }
}

/// Classify a connect failure by walking its causes.
///
/// The resolver reports `dns error`; a TLS handshake against something that
/// does not speak TLS surfaces as an `InvalidData` I/O error on an https URL.
fn map_connect_error(err: reqwest::Error) -> TransportError {
    let https = err.url().is_some_and(|url| url.scheme() == "https");
    let mut source = err.source();
    while let Some(cause) = source {
        if cause.to_string().starts_with("dns error") {
            return TransportError::Dns {
                host: err
                    .url()
                    .and_then(Url::host_str)
                    .unwrap_or_default()
                    .to_string(),
            };
        }
        let invalid_data = cause
            .downcast_ref::<io::Error>()
            .is_some_and(|io| io.kind() == io::ErrorKind::InvalidData);
        if https && invalid_data {
            return TransportError::Tls {
                message: cause.to_string(),
            };
        }
        source = cause.source();
    }
    TransportError::Connection {
        message: err.to_string(),
    }
}

#[async_trait]
impl Transport for ReqwestTransport {
    #[instrument(skip_all, fields(method = %request.method, url = %request.url))]
    async fn send(&self, request: Request) -> Result<Response, TransportError> {
        let url = Url::parse(&request.full_url()).map_err(|e| TransportError::Http {
            message: format!("invalid URL '{}': {e}", request.url),
        })?;
        let mut builder = match request.method {
            Method::Get => self.client.get(url.clone()),
            Method::Post => self.client.post(url.clone()),
        };

        if let Some(value) = request.auth.header_value() {
            builder = builder.header(AUTHORIZATION, value);
        }
        if request.auth.is_ambient() {
            if let Some(cookie) = self.ambient_cookies(&url) {
                builder = builder.header(COOKIE, cookie);
            }
        }

        builder = match request.body {
            Body::Empty => builder,
            Body::Form(fields) => builder
                .header(CONTENT_TYPE, Body::FORM_CONTENT_TYPE)
                .body(fields.encode()),
            Body::Multipart(multipart) => builder.multipart(multipart_form(multipart)?),
        };

        debug!("HTTP request");
        let response = builder.send().await.map_err(|e| self.map_error(e))?;

        self.store_cookies(&response);

        let status = response.status();
        trace!(status = %status, "HTTP response");

        let headers = response
            .headers()
            .iter()
            .filter_map(|(name, value)| {
                let value = value.to_str().ok()?;
                Some((name.as_str().to_string(), value.to_string()))
            })
            .collect();
        let reason = status.canonical_reason().unwrap_or_default();
        let body = response.bytes().await.map_err(|e| self.map_error(e))?;

        Ok(Response::new(status.as_u16(), reason, headers, body.to_vec()))
    }
}

/// Content part first, then the fields in insertion order.
fn multipart_form(multipart: Multipart) -> Result<Form, TransportError> {
    let content = multipart.content;
    let mut part = Part::bytes(content.bytes).file_name(content.filename);
    if let Some(mime_type) = &content.mime_type {
        part = part.mime_str(mime_type).map_err(|e| TransportError::Http {
            message: format!("invalid content type '{mime_type}': {e}"),
        })?;
    }

    let mut form = Form::new().part("content", part);
    for (key, value) in multipart.fields.iter() {
        form = form.text(key.to_string(), value.to_string());
    }
    Ok(form)
}

/// Builder for [`ReqwestTransport`].
#[derive(Debug, Clone)]
pub struct ReqwestTransportBuilder {
    user_agent: String,
    timeout: Option<Duration>,
    cookie_store: bool,
}

impl Default for ReqwestTransportBuilder {
    fn default() -> Self {
        Self {
            user_agent: DEFAULT_USER_AGENT.to_string(),
            timeout: None,
            cookie_store: true,
        }
    }
}

impl ReqwestTransportBuilder {
    pub fn user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = user_agent.into();
        self
    }

    /// Whole-request timeout. No timeout by default.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Keep cookies between requests and replay them as ambient credentials.
    /// Enabled by default.
    pub fn cookie_store(mut self, enabled: bool) -> Self {
        self.cookie_store = enabled;
        self
    }

    pub fn build(self) -> Result<ReqwestTransport, TransportError> {
        let mut builder = reqwest::Client::builder().user_agent(self.user_agent);
        if let Some(timeout) = self.timeout {
            builder = builder.timeout(timeout);
        }

        let client = builder.build().map_err(|e| TransportError::Http {
            message: format!("failed to build HTTP client: {e}"),
        })?;

        Ok(ReqwestTransport {
            client,
            cookies: self.cookie_store.then(Arc::default),
            timeout: self.timeout,
        })
    }
}
