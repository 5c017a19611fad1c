//! Command-line and environment configuration.

use std::net::SocketAddr;
use std::path::PathBuf;
use std::time::Duration;

use clap::Parser;
use wordroll_random_org::{RandomOrgConfig, DEFAULT_ENDPOINT};

/// wordroll server configuration. Every flag can also be set from the
/// environment.
#[derive(Debug, Clone, Parser)]
#[command(name = "wordroll")]
#[command(about = "Diceware passphrase HTTP service")]
pub struct Config {
    /// Address to listen on
    #[arg(long, env = "WORDROLL_LISTEN", default_value = "0.0.0.0:8787")]
    pub listen: SocketAddr,

    /// Word list file (EFF `11111<TAB>word` format or one word per line)
    #[arg(
        long,
        env = "WORDROLL_WORDLIST",
        default_value = "data/eff_large_wordlist.txt"
    )]
    pub wordlist: PathBuf,

    /// random.org JSON-RPC endpoint
    #[arg(long, env = "WORDROLL_RANDOM_ORG_URL", default_value = DEFAULT_ENDPOINT)]
    pub random_org_url: String,

    /// Timeout for one random.org round trip, in seconds
    #[arg(
        long,
        env = "WORDROLL_REMOTE_TIMEOUT_SECS",
        default_value_t = 10,
        value_parser = clap::value_parser!(u64).range(1..=300)
    )]
    pub remote_timeout_secs: u64,

    /// Directory for a daily rolling log file (stdout only when unset)
    #[arg(long, env = "WORDROLL_LOG_DIR")]
    pub log_dir: Option<PathBuf>,

    /// Log filter directive, e.g. `info` or `wordroll=debug`
    #[arg(long, env = "RUST_LOG", default_value = "info")]
    pub log_filter: String,
}

impl Config {
    /// Settings for the random.org client.
    #[must_use]
    pub fn random_org(&self) -> RandomOrgConfig {
        RandomOrgConfig {
            endpoint: self.random_org_url.clone(),
            timeout: Duration::from_secs(self.remote_timeout_secs),
        }
    }
}
