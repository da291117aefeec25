use async_trait::async_trait;

use crate::error::BridgeError;
use crate::types::{ApiResponse, Endpoint, VerificationRequest};

/// Seam between the command dispatcher and the HTTP client.
///
/// Test doubles implement this to observe, answer, or refuse calls without a
/// network. One call per invocation, no retries.
#[async_trait]
pub trait VerificationApi: Send + Sync {
    /// Issue one request against `endpoint`, POSTing `body` when present.
    ///
    /// Transport failures (DNS, refused connection, timeout, unparseable
    /// body) come back as `BridgeError::Transport`; an HTTP error status is a
    /// normal `ApiResponse` for the classifier to judge.
    async fn fetch(
        &self,
        endpoint: Endpoint,
        body: Option<&VerificationRequest>,
    ) -> Result<ApiResponse, BridgeError>;
}
