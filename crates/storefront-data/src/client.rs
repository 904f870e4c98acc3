//! HTTP client with per-call timeouts and bearer auth.

use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::error::FetchError;
use crate::timeout::TimeoutConfig;

/// Thin wrapper over `reqwest::Client` bound to one API base URL.
///
/// Every call is a single attempt. Authenticated calls carry a bearer
/// token supplied by the caller; this client never reaches into ambient
/// storage for credentials.
#[derive(Debug, Clone)]
pub struct ApiClient {
    http: reqwest::Client,
    base_url: String,
}

impl ApiClient {
    /// Create a client for the given base URL with default timeouts.
    pub fn new(base_url: impl Into<String>) -> Result<Self, FetchError> {
        Self::with_timeouts(base_url, TimeoutConfig::default())
    }

    /// Create a client with explicit timeouts.
    pub fn with_timeouts(
        base_url: impl Into<String>,
        timeout: TimeoutConfig,
    ) -> Result<Self, FetchError> {
        let http = reqwest::Client::builder()
            .connect_timeout(timeout.connect)
            .timeout(timeout.total)
            .build()
            .map_err(|e| FetchError::Request(e.to_string()))?;

        Ok(Self {
            http,
            base_url: base_url.into().trim_end_matches('/').to_string(),
        })
    }

    /// The API base URL.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// GET a JSON resource.
    pub async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T, FetchError> {
        let url = self.url(path);
        let resp = self
            .http
            .get(&url)
            .send()
            .await
            .map_err(|e| FetchError::from_reqwest(e, &url))?;

        Self::check_status(&url, resp.status())?;

        let bytes = resp
            .bytes()
            .await
            .map_err(|e| FetchError::from_reqwest(e, &url))?;
        serde_json::from_slice(&bytes).map_err(|e| FetchError::Deserialization(e.to_string()))
    }

    /// POST a JSON body with a bearer token. The response body is not
    /// consumed beyond success/failure.
    pub async fn post_json<B: Serialize>(
        &self,
        path: &str,
        body: &B,
        bearer: &str,
    ) -> Result<(), FetchError> {
        let url = self.url(path);
        let resp = self
            .http
            .post(&url)
            .bearer_auth(bearer)
            .json(body)
            .send()
            .await
            .map_err(|e| FetchError::from_reqwest(e, &url))?;

        Self::check_status(&url, resp.status())
    }

    /// DELETE a resource with a bearer token.
    pub async fn delete(&self, path: &str, bearer: &str) -> Result<(), FetchError> {
        let url = self.url(path);
        let resp = self
            .http
            .delete(&url)
            .bearer_auth(bearer)
            .send()
            .await
            .map_err(|e| FetchError::from_reqwest(e, &url))?;

        Self::check_status(&url, resp.status())
    }

    fn check_status(url: &str, status: reqwest::StatusCode) -> Result<(), FetchError> {
        if status == reqwest::StatusCode::UNAUTHORIZED
            || status == reqwest::StatusCode::FORBIDDEN
        {
            return Err(FetchError::Unauthorized(url.to_string()));
        }
        if status.is_client_error() || status.is_server_error() {
            return Err(FetchError::Http {
                status: status.as_u16(),
                url: url.to_string(),
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_base_url_trailing_slash_trimmed() {
        let client = ApiClient::new("http://api.example/").unwrap();
        assert_eq!(client.base_url(), "http://api.example");
        assert_eq!(client.url("/products"), "http://api.example/products");
    }

    #[test]
    fn test_check_status() {
        let ok = ApiClient::check_status("u", reqwest::StatusCode::OK);
        assert!(ok.is_ok());

        let unauthorized = ApiClient::check_status("u", reqwest::StatusCode::UNAUTHORIZED);
        assert!(matches!(unauthorized, Err(FetchError::Unauthorized(_))));

        let server = ApiClient::check_status("u", reqwest::StatusCode::BAD_GATEWAY);
        assert!(matches!(server, Err(FetchError::Http { status: 502, .. })));
    }
}
