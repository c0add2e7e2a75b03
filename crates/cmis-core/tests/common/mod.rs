//! Shared helpers for session tests.
//!
//! [`RecordingTransport`] answers from a queue of scripted responses and keeps
//! every request it was handed, so tests can assert on the exact shape of the
//! traffic without a network.

#![allow(dead_code)]

use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use cmis_core::transport::{Request, Response, Transport};
use cmis_core::{CmisSession, ServiceUrl, TransportError};
use serde_json::{Value, json};

pub const SERVICE_URL: &str = "http://cmis.test/browser";
pub const REPOSITORY_URL: &str = "http://cmis.test/browser/A1";
pub const ROOT_URL: &str = "http://cmis.test/browser/A1/root";

#[derive(Clone, Default)]
pub struct RecordingTransport {
    responses: Arc<Mutex<VecDeque<Result<Response, TransportError>>>>,
    requests: Arc<Mutex<Vec<Request>>>,
}

impl RecordingTransport {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue a JSON response with the given status.
    pub fn push_json(&self, status: u16, body: Value) -> &Self {
        let headers = vec![("Content-Type".to_string(), "application/json".to_string())];
        let body = serde_json::to_vec(&body).unwrap();
        self.push(Ok(Response::new(status, "", headers, body)))
    }

    /// Queue a raw response.
    pub fn push_raw(&self, status: u16, headers: &[(&str, &str)], body: &[u8]) -> &Self {
        let headers = headers
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        self.push(Ok(Response::new(status, "", headers, body.to_vec())))
    }

    pub fn push(&self, response: Result<Response, TransportError>) -> &Self {
        self.responses.lock().unwrap().push_back(response);
        self
    }

    pub fn requests(&self) -> Vec<Request> {
        self.requests.lock().unwrap().clone()
    }

    pub fn last_request(&self) -> Request {
        self.requests
            .lock()
            .unwrap()
            .last()
            .cloned()
            .expect("no request was sent")
    }
}

#[async_trait]
impl Transport for RecordingTransport {
    async fn send(&self, request: Request) -> Result<Response, TransportError> {
        self.requests.lock().unwrap().push(request);
        self.responses
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| Ok(Response::new(200, "OK", Vec::new(), b"{}".to_vec())))
    }
}

/// A service document with one repository.
pub fn service_document() -> Value {
    json!({
        "A1": {
            "repositoryId": "A1",
            "repositoryName": "Main Repository",
            "repositoryUrl": REPOSITORY_URL,
            "rootFolderUrl": ROOT_URL,
            "latestChangeLogToken": "0",
            "cmisVersionSupported": "1.1"
        }
    })
}

/// A session that has already loaded [`service_document`].
pub async fn connected_session() -> (CmisSession, RecordingTransport) {
    let transport = RecordingTransport::new();
    transport.push_json(200, service_document());

    let mut session = CmisSession::new(ServiceUrl::new(SERVICE_URL).unwrap(), transport.clone());
    session.load_repositories().await.unwrap();

    (session, transport)
}
