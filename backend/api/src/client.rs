use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use tracing::debug;

use carebridge_core::{ApiResponse, BridgeError, Endpoint, VerificationApi, VerificationRequest};

/// Per-request ceiling so a stalled remote API cannot leave a chat
/// interaction in "loading" forever. The upstream service defines none.
const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

/// HTTP client for the healthcare-verification API.
///
/// One attempt per call, no retries, no connection reuse guarantees beyond
/// what reqwest's pool provides.
pub struct ApiClient {
    base_url: String,
    http: Client,
}

impl ApiClient {
    pub fn new(base_url: &str) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            http: Client::new(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }
}

#[async_trait]
impl VerificationApi for ApiClient {
    async fn fetch(
        &self,
        endpoint: Endpoint,
        body: Option<&VerificationRequest>,
    ) -> Result<ApiResponse, BridgeError> {
        let url = format!("{}{}", self.base_url, endpoint.path());
        debug!(
            "[Api] {} {}",
            if endpoint.is_post() { "POST" } else { "GET" },
            url
        );

        let request = match body {
            Some(body) => self.http.post(&url).json(body),
            None => self.http.get(&url),
        };

        let response = request
            .timeout(REQUEST_TIMEOUT)
            .send()
            .await
            .map_err(|e| BridgeError::Transport(e.to_string()))?;

        let status = response.status().as_u16();
        // Error statuses carry a JSON {detail} body, so parse regardless.
        let body = response
            .json::<serde_json::Value>()
            .await
            .map_err(|e| BridgeError::Transport(e.to_string()))?;

        Ok(ApiResponse { status, body })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strips_trailing_slash_from_base_url() {
        let client = ApiClient::new("https://api.example.com/");
        assert_eq!(client.base_url(), "https://api.example.com");
        let client = ApiClient::new("https://api.example.com");
        assert_eq!(client.base_url(), "https://api.example.com");
    }

    #[tokio::test]
    async fn refused_connection_is_a_transport_error() {
        // Port 1 on loopback refuses immediately.
        let client = ApiClient::new("http://127.0.0.1:1");
        let result = client.fetch(Endpoint::Health, None).await;
        match result {
            Err(BridgeError::Transport(_)) => {}
            other => panic!("expected transport error, got {other:?}"),
        }
    }
}
