//! HTTP client implementation

use std::time::Duration;

use async_trait::async_trait;
use http::{HeaderMap, Method};
use reqwest::{header, Client};
use secrecy::{ExposeSecret, SecretString};
use tracing::{debug, error};

use crate::errors::CliError;
use crate::storage::settings::Context;

/// A single call against the service
#[derive(Debug, Clone)]
pub struct ApiRequest {
    pub method: Method,
    /// Path relative to the service base URL, including any query string
    pub path: String,
    pub headers: HeaderMap,
    pub body: Option<serde_json::Value>,
}

impl ApiRequest {
    pub fn new(method: Method, path: impl Into<String>, headers: HeaderMap) -> Self {
        Self {
            method,
            path: path.into(),
            headers,
            body: None,
        }
    }

    pub fn with_body(mut self, body: serde_json::Value) -> Self {
        self.body = Some(body);
        self
    }
}

/// Transport trait for testability
#[async_trait]
pub trait HttpClientExt: Send + Sync {
    /// Send a request and return the raw response body of a 2xx response
    async fn send(&self, request: ApiRequest) -> Result<String, CliError>;
}

/// HTTP client for the object store service
pub struct HttpClient {
    client: Client,
    base_url: String,
    token: Option<SecretString>,
}

impl HttpClient {
    /// Create a new HTTP client
    pub fn new(base_url: &str) -> Result<Self, CliError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(30))
            .build()?;

        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
            token: None,
        })
    }

    /// Create a client for the given context
    pub fn for_context(context: &Context) -> Result<Self, CliError> {
        if context.url.is_empty() {
            return Err(CliError::ConfigError(format!(
                "context {} has no url",
                context.name
            )));
        }

        let mut client = Self::new(&context.url)?;
        client.token = context.token.clone().map(SecretString::from);
        Ok(client)
    }

    /// Get the base URL
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }
}

#[async_trait]
impl HttpClientExt for HttpClient {
    async fn send(&self, request: ApiRequest) -> Result<String, CliError> {
        let url = self.url(&request.path);
        debug!("{} {}", request.method, url);

        let mut builder = self
            .client
            .request(request.method.clone(), &url)
            .headers(request.headers);

        if let Some(token) = &self.token {
            builder = builder.header(
                header::AUTHORIZATION,
                format!("Bearer {}", token.expose_secret()),
            );
        }

        if let Some(body) = &request.body {
            builder = builder.json(body);
        }

        let response = builder.send().await?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            error!("HTTP {} failed: {} - {}", request.method, status, body);
            return Err(CliError::ApiError {
                status: status.as_u16(),
                body,
            });
        }

        Ok(response.text().await?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_url_join() {
        let client = HttpClient::new("https://example.com/").unwrap();
        assert_eq!(client.base_url(), "https://example.com");
        assert_eq!(
            client.url("objstore/v1beta/objects/a:b"),
            "https://example.com/objstore/v1beta/objects/a:b"
        );
        assert_eq!(client.url("/x"), "https://example.com/x");
    }

    #[test]
    fn test_context_without_url_is_rejected() {
        let context = Context {
            name: "empty".to_string(),
            url: String::new(),
            tenant: "acme".to_string(),
            token: None,
        };
        assert!(matches!(
            HttpClient::for_context(&context),
            Err(CliError::ConfigError(_))
        ));
    }
}
