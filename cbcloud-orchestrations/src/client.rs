//! Signed request client for the Couchbase Cloud control plane
//!
//! Every request carries an HMAC-SHA256 signature over
//! `"{METHOD}\n{PATH}\n{TIMESTAMP_MS}"` keyed with the API secret, sent as
//! `Authorization: Bearer {access_key}:{signature}` together with the raw
//! timestamp in `Couchbase-Timestamp`.

use async_trait::async_trait;
use base64::{engine::general_purpose::STANDARD, Engine as _};
use hmac::{Hmac, Mac};
use serde::de::DeserializeOwned;
use sha2::Sha256;
use std::fmt;
use thiserror::Error;

type HmacSha256 = Hmac<Sha256>;

/// Header carrying the millisecond timestamp that was signed
pub const TIMESTAMP_HEADER: &str = "Couchbase-Timestamp";

#[derive(Error, Debug)]
pub enum ClientError {
    #[error("HTTP transport error: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("request signing failed: {0}")]
    Signing(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HttpMethod {
    Get,
    Post,
    Delete,
}

impl HttpMethod {
    pub fn as_str(self) -> &'static str {
        match self {
            HttpMethod::Get => "GET",
            HttpMethod::Post => "POST",
            HttpMethod::Delete => "DELETE",
        }
    }
}

impl fmt::Display for HttpMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<HttpMethod> for reqwest::Method {
    fn from(method: HttpMethod) -> Self {
        match method {
            HttpMethod::Get => reqwest::Method::GET,
            HttpMethod::Post => reqwest::Method::POST,
            HttpMethod::Delete => reqwest::Method::DELETE,
        }
    }
}

/// Status and body of a control-plane response, uninterpreted
#[derive(Debug, Clone, PartialEq)]
pub struct RawResponse {
    pub status: u16,
    pub body: String,
}

impl RawResponse {
    pub fn new(status: u16, body: impl Into<String>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }

    pub fn json<T: DeserializeOwned>(&self) -> Result<T, serde_json::Error> {
        serde_json::from_str(&self.body)
    }
}

/// Transport to the control plane
///
/// [`SignedClient`] talks to the real API. Tests substitute scripted
/// implementations.
#[async_trait]
pub trait ControlPlane: Send + Sync {
    async fn request(
        &self,
        method: HttpMethod,
        path: &str,
        body: Option<&serde_json::Value>,
    ) -> Result<RawResponse, ClientError>;
}

/// Credentials and endpoint of the control plane
#[derive(Clone)]
pub struct ClientConfig {
    pub access_key: String,
    pub secret_key: String,
    pub base_url: String,
}

impl ClientConfig {
    pub fn new(
        access_key: impl Into<String>,
        secret_key: impl Into<String>,
        base_url: impl Into<String>,
    ) -> Self {
        let base_url = base_url.into();
        Self {
            access_key: access_key.into(),
            secret_key: secret_key.into(),
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }
}

impl fmt::Debug for ClientConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ClientConfig")
            .field("access_key", &self.access_key)
            .field("secret_key", &"<redacted>")
            .field("base_url", &self.base_url)
            .finish()
    }
}

/// Message that gets signed for a request
pub fn canonical_message(method: HttpMethod, path: &str, timestamp_ms: i64) -> String {
    format!("{}\n{}\n{}", method.as_str(), path, timestamp_ms)
}

/// Base64 encoded HMAC-SHA256 of the canonical message
pub fn sign_request(
    secret: &str,
    method: HttpMethod,
    path: &str,
    timestamp_ms: i64,
) -> Result<String, ClientError> {
    let mut mac = HmacSha256::new_from_slice(secret.as_bytes())
        .map_err(|e| ClientError::Signing(e.to_string()))?;
    mac.update(canonical_message(method, path, timestamp_ms).as_bytes());
    Ok(STANDARD.encode(mac.finalize().into_bytes()))
}

/// Value of the `Authorization` header
pub fn authorization_header(access_key: &str, signature: &str) -> String {
    format!("Bearer {}:{}", access_key, signature)
}

/// Control-plane client signing each request with the configured key pair
pub struct SignedClient {
    http: reqwest::Client,
    config: ClientConfig,
}

impl SignedClient {
    pub fn new(config: ClientConfig) -> Self {
        Self {
            http: reqwest::Client::new(),
            config,
        }
    }

    pub fn base_url(&self) -> &str {
        &self.config.base_url
    }
}

#[async_trait]
impl ControlPlane for SignedClient {
    async fn request(
        &self,
        method: HttpMethod,
        path: &str,
        body: Option<&serde_json::Value>,
    ) -> Result<RawResponse, ClientError> {
        let timestamp_ms = chrono::Utc::now().timestamp_millis();
        let signature = sign_request(&self.config.secret_key, method, path, timestamp_ms)?;

        let url = format!("{}{}", self.config.base_url, path);
        tracing::debug!(%method, %url, timestamp_ms, "Sending control-plane request");

        let mut request = self
            .http
            .request(method.into(), &url)
            .header(
                reqwest::header::AUTHORIZATION,
                authorization_header(&self.config.access_key, &signature),
            )
            .header(TIMESTAMP_HEADER, timestamp_ms.to_string());

        if let Some(body) = body {
            request = request.json(body);
        }

        let response = request.send().await?;
        let status = response.status().as_u16();
        let body = response.text().await?;

        tracing::debug!(%method, path, status, "Control-plane response received");

        Ok(RawResponse { status, body })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_canonical_message_layout() {
        assert_eq!(
            canonical_message(HttpMethod::Get, "/v2/clouds", 1_700_000_000_000),
            "GET\n/v2/clouds\n1700000000000"
        );
    }

    #[test]
    fn test_signature_matches_known_vector() {
        let signature =
            sign_request("test-secret", HttpMethod::Get, "/v2/clouds", 1_700_000_000_000).unwrap();
        assert_eq!(signature, "JRFpjWUL5hihZwcrwoCjpbUsSm1TliybQWiRsQ+rB84=");

        let signature =
            sign_request("test-secret", HttpMethod::Post, "/v2/projects", 1_700_000_000_000).unwrap();
        assert_eq!(signature, "N8CxtThfpzwapm7vtz/Ix0N6p2OTFscu7rjd2UHDmHY=");
    }

    #[test]
    fn test_signature_is_deterministic() {
        let first = sign_request("k", HttpMethod::Delete, "/v2/clusters/c1", 42).unwrap();
        let second = sign_request("k", HttpMethod::Delete, "/v2/clusters/c1", 42).unwrap();
        let other_time = sign_request("k", HttpMethod::Delete, "/v2/clusters/c1", 43).unwrap();
        assert_eq!(first, second);
        assert_ne!(first, other_time);
    }

    #[test]
    fn test_authorization_header() {
        assert_eq!(authorization_header("AK", "c2ln"), "Bearer AK:c2ln");
    }

    #[test]
    fn test_client_config_trims_trailing_slash_and_redacts_secret() {
        let config = ClientConfig::new("AK", "very-secret", "https://cloudapi.cloud.couchbase.com/");
        assert_eq!(config.base_url, "https://cloudapi.cloud.couchbase.com");
        assert!(!format!("{:?}", config).contains("very-secret"));
    }

    #[test]
    fn test_raw_response_json() {
        let response = RawResponse::new(201, r#"{"id":"p1"}"#);
        let value: serde_json::Value = response.json().unwrap();
        assert_eq!(value["id"], "p1");
    }
}
