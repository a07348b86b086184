//! Shared test fixtures

#![allow(dead_code)]

use std::path::PathBuf;
use std::sync::Mutex;

use async_trait::async_trait;
use objctl::errors::CliError;
use objctl::http::client::{ApiRequest, HttpClientExt};
use objctl::storage::settings::Context;

#[derive(Debug, Clone)]
enum Reply {
    Body(String),
    Status(u16, String),
}

/// Transport fake that records every request and answers from canned replies
#[derive(Default)]
pub struct RecordingClient {
    replies: Vec<(String, Reply)>,
    requests: Mutex<Vec<ApiRequest>>,
}

impl RecordingClient {
    pub fn new() -> Self {
        Self::default()
    }

    /// Answer requests whose path contains `pattern` with a 2xx body
    pub fn reply(mut self, pattern: &str, body: &str) -> Self {
        self.replies
            .push((pattern.to_string(), Reply::Body(body.to_string())));
        self
    }

    /// Answer requests whose path contains `pattern` with an error status
    pub fn fail(mut self, pattern: &str, status: u16, body: &str) -> Self {
        self.replies
            .push((pattern.to_string(), Reply::Status(status, body.to_string())));
        self
    }

    pub fn requests(&self) -> Vec<ApiRequest> {
        self.requests.lock().unwrap().clone()
    }
}

#[async_trait]
impl HttpClientExt for RecordingClient {
    async fn send(&self, request: ApiRequest) -> Result<String, CliError> {
        let reply = self
            .replies
            .iter()
            .find(|(pattern, _)| request.path.contains(pattern.as_str()))
            .map(|(_, reply)| reply.clone());
        self.requests.lock().unwrap().push(request);

        match reply {
            Some(Reply::Status(status, body)) => Err(CliError::ApiError { status, body }),
            Some(Reply::Body(body)) => Ok(body),
            None => Ok(String::new()),
        }
    }
}

pub fn tenant_context(tenant: &str) -> Context {
    Context {
        name: "test".to_string(),
        url: "https://objstore.example.com".to_string(),
        tenant: tenant.to_string(),
        token: None,
    }
}

pub fn write_object_file(dir: &tempfile::TempDir, contents: &str) -> PathBuf {
    let path = dir.path().join("obj.json");
    std::fs::write(&path, contents).unwrap();
    path
}
