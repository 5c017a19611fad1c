//! HTTP routes.
//!
//! Every passphrase endpoint answers `200 text/plain` with the passphrase,
//! or an error status with a plain-text message. Generated values are never
//! logged.

use axum::extract::{Path, State};
use axum::routing::get;
use axum::Router;
use wordroll_core::{parse_count, DEFAULT_WORD_COUNT};

use crate::error::ApiError;
use crate::generator::{PassphraseGenerator, RandomSource};
use crate::state::AppState;

/// Usage text served at `/`.
const USAGE: &str = "\
wordroll - diceware passphrases

GET /api/random                        6 words from the local CSPRNG
GET /api/random/{count}                {count} words (1-1000) from the local CSPRNG
GET /api/random/{count}/token/{token}  {count} words from random.org using API key {token}

Words are joined with '-'. Counts are sanitized: negatives use their
absolute value, fractions are floored, values above 1000 are capped and
0 or non-numeric input means 6.
";

/// Build the application router.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(usage))
        .route("/healthz", get(health))
        .route("/api/random", get(random_default))
        .route("/api/random/{count}", get(random_count))
        .route("/api/random/{count}/token", get(random_count))
        .route("/api/random/{count}/token/{token}", get(random_with_token))
        .with_state(state)
}

async fn usage() -> &'static str {
    USAGE
}

async fn health() -> &'static str {
    "ok"
}

async fn random_default(State(state): State<AppState>) -> Result<String, ApiError> {
    roll(&state, DEFAULT_WORD_COUNT, None).await
}

async fn random_count(
    State(state): State<AppState>,
    Path(count): Path<String>,
) -> Result<String, ApiError> {
    roll(&state, parse_count(&count), None).await
}

async fn random_with_token(
    State(state): State<AppState>,
    Path((count, token)): Path<(String, String)>,
) -> Result<String, ApiError> {
    roll(&state, parse_count(&count), Some(&token)).await
}

async fn roll(state: &AppState, count: usize, token: Option<&str>) -> Result<String, ApiError> {
    let source = RandomSource::select(token, &state.random_org);
    PassphraseGenerator::new(&state.wordlist)
        .generate(count, &source)
        .await
}
