//! Shared application state.
//!
//! The word list is loaded once at startup and shared read-only behind an
//! `Arc`; the random.org client is cheap to clone (its connection pool is
//! reference-counted). Nothing here is mutated after startup, so no locks.

use std::sync::Arc;

use wordroll_core::Wordlist;
use wordroll_random_org::RandomOrgClient;

/// State handed to every request handler.
#[derive(Debug, Clone)]
pub struct AppState {
    /// Process-wide word list.
    pub wordlist: Arc<Wordlist>,
    /// Client used when a request carries a random.org token.
    pub random_org: RandomOrgClient,
}

impl AppState {
    /// Bundle a loaded word list with a random.org client.
    #[must_use]
    pub fn new(wordlist: Wordlist, random_org: RandomOrgClient) -> Self {
        Self {
            wordlist: Arc::new(wordlist),
            random_org,
        }
    }
}
