//! Signed request construction and generic execution
//!
//! Every request to the timetable API carries the developer id and an
//! HMAC-SHA1 signature computed over the exact bytes after the host
//! (path, query and `devid` included). The signature itself is appended
//! last and is not part of the signed region.

use hmac::{Hmac, Mac};
use reqwest::Client;
use serde_json::Value;
use sha1::Sha1;
use tracing::{debug, instrument};

use crate::config::{Credentials, PtvConfig};
use crate::error::PtvError;

type HmacSha1 = Hmac<Sha1>;

/// Signing HTTP client for the PTV Timetable API.
///
/// Holds the externally-owned shared [`reqwest::Client`]; cloning this
/// struct shares the same connection pool.
#[derive(Debug, Clone)]
pub struct ApiClient {
    http: Client,
    base_url: String,
    credentials: Credentials,
}

impl ApiClient {
    /// Create a client around a shared HTTP connection facility
    #[must_use]
    pub fn new(http: Client, config: &PtvConfig, credentials: Credentials) -> Self {
        Self {
            http,
            base_url: config.base_url.clone(),
            credentials,
        }
    }

    /// Append `key=value`, using `?` for the first pair and `&` afterwards
    fn push_pair(url: &mut String, key: &str, value: &str) {
        url.push(if url.contains('?') { '&' } else { '?' });
        url.push_str(key);
        url.push('=');
        url.push_str(value);
    }

    /// Build the fully-qualified signed URL for a request.
    ///
    /// Parameter order is preserved as given; the order is part of the
    /// signed bytes. Values are sent literally (ids, comma-joined lists
    /// and plain tokens), matching what the upstream signature scheme
    /// expects.
    pub fn build_url(&self, path: &str, params: &[(&str, String)]) -> Result<String, PtvError> {
        let mut url = format!("{}{}", self.base_url, path);
        for (key, value) in params {
            Self::push_pair(&mut url, key, value);
        }
        Self::push_pair(&mut url, "devid", &self.credentials.dev_id);

        let raw = &url[self.base_url.len()..];
        let mut mac = HmacSha1::new_from_slice(self.credentials.api_key.as_bytes())
            .map_err(|e| PtvError::Auth(format!("unusable signing key: {e}")))?;
        mac.update(raw.as_bytes());
        let signature = hex::encode(mac.finalize().into_bytes());

        Self::push_pair(&mut url, "signature", &signature);
        Ok(url)
    }

    /// Issue one signed request and decode the JSON body.
    ///
    /// No retries and no per-call timeout override; a non-success status
    /// is an error, with 401/403 classified as an authentication failure.
    #[instrument(skip(self, params))]
    pub async fn request(
        &self,
        method: reqwest::Method,
        path: &str,
        params: &[(&str, String)],
    ) -> Result<Value, PtvError> {
        let url = self.build_url(path, params)?;
        debug!("requesting signed URL");

        let response = self
            .http
            .request(method, &url)
            .send()
            .await
            .map_err(|e| PtvError::Connection(e.to_string()))?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| PtvError::Connection(e.to_string()))?;

        if status == reqwest::StatusCode::UNAUTHORIZED || status == reqwest::StatusCode::FORBIDDEN {
            return Err(PtvError::Auth(format!("HTTP {status}")));
        }

        if !status.is_success() {
            return Err(PtvError::HttpStatus {
                status: status.as_u16(),
                body,
            });
        }

        serde_json::from_str(&body).map_err(|e| PtvError::Decode(e.to_string()))
    }

    /// Signed GET; the timetable API is read-only
    pub async fn get(&self, path: &str, params: &[(&str, String)]) -> Result<Value, PtvError> {
        self.request(reqwest::Method::GET, path, params).await
    }
}
