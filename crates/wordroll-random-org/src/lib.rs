#![deny(missing_docs)]
#![cfg_attr(test, allow(clippy::unwrap_used, clippy::arithmetic_side_effects))]

//! # wordroll-random-org
//!
//! Async client for the random.org JSON-RPC `generateIntegers` method and
//! the [`RemoteSource`] built on it. Every failure is returned as a
//! [`RandomOrgError`]; nothing degrades to an empty result.
//!
//! # Example
//!
//! ```no_run
//! use wordroll_random_org::{RandomOrgClient, RandomOrgConfig, RemoteSource};
//!
//! # async fn demo() -> Result<(), wordroll_random_org::RandomOrgError> {
//! let client = RandomOrgClient::new(RandomOrgConfig::default())?;
//! let source = RemoteSource::new(client, "00000000-0000-0000-0000-000000000000");
//! let indices = source.produce(6).await?;
//! # Ok(())
//! # }
//! ```

pub mod client;
pub mod error;
pub mod source;
pub mod types;


pub use client::RandomOrgClient;
pub use error::RandomOrgError;
pub use source::RemoteSource;
pub use types::{RandomOrgConfig, DEFAULT_ENDPOINT, DEFAULT_TIMEOUT};
