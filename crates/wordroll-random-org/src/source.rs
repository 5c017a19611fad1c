//! Remote random source backed by random.org.

use secrecy::SecretString;
use wordroll_core::MAX_INDEX;

use crate::client::RandomOrgClient;
use crate::error::RandomOrgError;

/// Random source that asks random.org for word-list indices.
///
/// The caller's API key is forwarded as-is and never logged; `Debug`
/// output redacts it.
#[derive(Debug)]
pub struct RemoteSource {
    client: RandomOrgClient,
    api_key: SecretString,
}

impl RemoteSource {
    /// Bind a client to the caller's API key.
    pub fn new(client: RandomOrgClient, api_key: impl Into<String>) -> Self {
        Self {
            client,
            api_key: SecretString::from(api_key.into()),
        }
    }

    /// Produce `count` indices in `0..=7775` with one JSON-RPC round trip.
    ///
    /// # Errors
    ///
    /// Propagates every [`RandomOrgError`]; failures are logged at warn level.
    pub async fn produce(&self, count: usize) -> Result<Vec<u16>, RandomOrgError> {
        self.client
            .generate_integers(&self.api_key, count, 0, MAX_INDEX)
            .await
            .inspect_err(|e| tracing::warn!(error = %e, count, "random.org request failed"))
    }
}
