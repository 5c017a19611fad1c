//! random.org JSON-RPC data types: configuration, request and response bodies.

use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Public random.org JSON-RPC endpoint.
pub const DEFAULT_ENDPOINT: &str = "https://api.random.org/json-rpc/2/invoke";

/// Default bound on one round trip to the service.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

/// JSON-RPC request id; responses are matched by connection, not by id.
pub const REQUEST_ID: u64 = 42;

/// Configuration for a [`RandomOrgClient`](crate::RandomOrgClient).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RandomOrgConfig {
    /// JSON-RPC endpoint URL.
    pub endpoint: String,
    /// Timeout applied to every request.
    pub timeout: Duration,
}

impl Default for RandomOrgConfig {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_ENDPOINT.to_string(),
            timeout: DEFAULT_TIMEOUT,
        }
    }
}

/// JSON-RPC 2.0 request envelope.
#[derive(Debug, Serialize)]
pub struct RpcRequest<P> {
    /// Protocol version, always `"2.0"`.
    pub jsonrpc: &'static str,
    /// Method name.
    pub method: &'static str,
    /// Method parameters.
    pub params: P,
    /// Request id.
    pub id: u64,
}

/// Parameters of the `generateIntegers` method.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerateIntegersParams<'a> {
    /// Caller-supplied API key.
    pub api_key: &'a str,
    /// How many integers to generate.
    pub n: usize,
    /// Inclusive lower bound.
    pub min: u16,
    /// Inclusive upper bound.
    pub max: u16,
    /// Sample with replacement.
    pub replacement: bool,
}

/// JSON-RPC 2.0 response envelope; exactly one of `result`/`error` is set.
#[derive(Debug, Deserialize)]
pub struct RpcResponse<R> {
    /// Successful result.
    pub result: Option<R>,
    /// Error object.
    #[serde(default)]
    pub error: Option<RpcErrorObject>,
}

/// JSON-RPC error object.
#[derive(Debug, Deserialize)]
pub struct RpcErrorObject {
    /// Error code.
    pub code: i64,
    /// Error message.
    pub message: String,
}

/// `result` member of a `generateIntegers` response.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerateIntegersResult {
    /// The generated numbers.
    pub random: RandomData,
    /// Bits consumed by this request.
    #[serde(default)]
    pub bits_used: Option<i64>,
    /// Remaining daily bit allowance for the key.
    #[serde(default)]
    pub bits_left: Option<i64>,
    /// Remaining daily request allowance for the key.
    #[serde(default)]
    pub requests_left: Option<i64>,
    /// Milliseconds the service asks clients to wait before the next request.
    #[serde(default)]
    pub advisory_delay: Option<u64>,
}

/// `result.random` member.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RandomData {
    /// Generated integers. Kept wide so out-of-range values can be reported.
    pub data: Vec<i64>,
}
