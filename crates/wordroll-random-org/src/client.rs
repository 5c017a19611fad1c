//! random.org JSON-RPC client for the `generateIntegers` method.

use secrecy::{ExposeSecret, SecretString};

use crate::error::RandomOrgError;
use crate::types::{
    GenerateIntegersParams, GenerateIntegersResult, RandomOrgConfig, RpcRequest, RpcResponse,
    REQUEST_ID,
};

/// HTTP client for the random.org JSON-RPC API.
#[derive(Debug, Clone)]
pub struct RandomOrgClient {
    /// Client configuration.
    config: RandomOrgConfig,
    /// Underlying HTTP client, carrying the request timeout.
    client: reqwest::Client,
}

impl RandomOrgClient {
    /// Create a client with the given configuration.
    ///
    /// # Errors
    ///
    /// Returns [`RandomOrgError::Http`] if the HTTP client cannot be built
    /// (TLS backend initialisation failure).
    pub fn new(config: RandomOrgConfig) -> Result<Self, RandomOrgError> {
        let client = reqwest::Client::builder().timeout(config.timeout).build()?;
        Ok(Self { config, client })
    }

    /// Request `n` integers uniformly drawn from `min..=max` with replacement.
    ///
    /// The returned integers are in service order and are checked against
    /// the requested count and range.
    ///
    /// # Errors
    ///
    /// Any transport failure, timeout, non-2xx status, JSON-RPC error,
    /// malformed body, wrong count or out-of-range value.
    pub async fn generate_integers(
        &self,
        api_key: &SecretString,
        n: usize,
        min: u16,
        max: u16,
    ) -> Result<Vec<u16>, RandomOrgError> {
        let body = RpcRequest {
            jsonrpc: "2.0",
            method: "generateIntegers",
            params: GenerateIntegersParams {
                api_key: api_key.expose_secret(),
                n,
                min,
                max,
                replacement: true,
            },
            id: REQUEST_ID,
        };

        let resp = self
            .client
            .post(&self.config.endpoint)
            .json(&body)
            .send()
            .await
            .map_err(RandomOrgError::from_transport)?;

        let status = resp.status();
        if !status.is_success() {
            return Err(RandomOrgError::Status {
                status_code: status.as_u16(),
            });
        }

        let bytes = resp.bytes().await.map_err(RandomOrgError::from_transport)?;
        let parsed: RpcResponse<GenerateIntegersResult> = serde_json::from_slice(&bytes)
            .map_err(|e| RandomOrgError::MalformedResponse(e.to_string()))?;

        if let Some(err) = parsed.error {
            return Err(RandomOrgError::Rpc {
                code: err.code,
                message: err.message,
            });
        }
        let result = parsed
            .result
            .ok_or_else(|| RandomOrgError::MalformedResponse("missing `result`".to_string()))?;

        tracing::debug!(
            bits_used = ?result.bits_used,
            requests_left = ?result.requests_left,
            bits_left = ?result.bits_left,
            advisory_delay_ms = ?result.advisory_delay,
            "random.org quota"
        );

        check_integers(result.random.data, n, min, max)
    }
}

/// Narrow service output to `u16`, enforcing count and range.
fn check_integers(
    data: Vec<i64>,
    expected: usize,
    min: u16,
    max: u16,
) -> Result<Vec<u16>, RandomOrgError> {
    if data.len() != expected {
        return Err(RandomOrgError::CountMismatch {
            expected,
            got: data.len(),
        });
    }
    data.into_iter()
        .map(|value| {
            u16::try_from(value)
                .ok()
                .filter(|v| (min..=max).contains(v))
                .ok_or(RandomOrgError::OutOfRange { value, min, max })
        })
        .collect()
}
