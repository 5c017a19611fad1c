//! wordroll HTTP service, a thin shell over `wordroll-core`.
//!
//! Loads the word list once, wires the local and random.org sources into
//! the axum router, and serves until SIGINT/SIGTERM.

#![cfg_attr(test, allow(clippy::unwrap_used, clippy::arithmetic_side_effects))]

pub mod config;
pub mod error;
pub mod generator;
pub mod logging;
pub mod routes;
pub mod state;

#[cfg(test)]
mod testing;

use std::future::Future;

use tokio::net::TcpListener;
use wordroll_core::Wordlist;
use wordroll_random_org::RandomOrgClient;

pub use config::Config;
pub use error::{ApiError, StartupError};
pub use generator::{PassphraseGenerator, RandomSource};
pub use routes::router;
pub use state::AppState;

/// Load the word list, bind the listener and serve until a shutdown signal.
///
/// # Errors
///
/// Returns [`StartupError`] if the word list cannot be loaded, the
/// random.org client cannot be built, or binding/serving fails.
pub async fn run(config: Config) -> Result<(), StartupError> {
    let wordlist = Wordlist::load(&config.wordlist).map_err(StartupError::Wordlist)?;
    tracing::info!(
        path = %config.wordlist.display(),
        words = wordlist.len(),
        "word list loaded"
    );

    let random_org = RandomOrgClient::new(config.random_org())?;
    let state = AppState::new(wordlist, random_org);

    let listener = TcpListener::bind(config.listen).await?;
    tracing::info!(addr = %listener.local_addr()?, "wordroll listening");

    serve(listener, state, shutdown_signal()).await
}

/// Serve `state` on an already-bound listener until `shutdown` resolves.
///
/// # Errors
///
/// Returns [`StartupError::Io`] if the server fails.
pub async fn serve(
    listener: TcpListener,
    state: AppState,
    shutdown: impl Future<Output = ()> + Send + 'static,
) -> Result<(), StartupError> {
    axum::serve(listener, router(state))
        .with_graceful_shutdown(shutdown)
        .await?;
    tracing::info!("wordroll stopped");
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::warn!(error = %e, "cannot listen for Ctrl-C");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        use tokio::signal::unix::{signal, SignalKind};
        match signal(SignalKind::terminate()) {
            Ok(mut sigterm) => {
                sigterm.recv().await;
            }
            Err(e) => {
                tracing::warn!(error = %e, "cannot listen for SIGTERM");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => tracing::info!("received SIGINT, shutting down"),
        () = terminate => tracing::info!("received SIGTERM, shutting down"),
    }
}
