//! Passphrase generation over interchangeable random sources.

use wordroll_core::{assemble, validate_word_count, LocalSource, PassphraseError, Wordlist};
use wordroll_random_org::{RandomOrgClient, RemoteSource};

use crate::error::ApiError;

/// Where random word-list indices come from.
#[derive(Debug)]
pub enum RandomSource {
    /// OS CSPRNG, no I/O.
    Local(LocalSource),
    /// random.org, authenticated with the caller's token.
    Remote(RemoteSource),
}

impl RandomSource {
    /// Remote when `token` is present and non-empty, local otherwise.
    ///
    /// The token is forwarded exactly as given; whitespace is not stripped.
    #[must_use]
    pub fn select(token: Option<&str>, client: &RandomOrgClient) -> Self {
        match token {
            Some(token) if !token.is_empty() => {
                Self::Remote(RemoteSource::new(client.clone(), token))
            }
            _ => Self::Local(LocalSource),
        }
    }

    /// Short name for logs.
    #[must_use]
    pub const fn kind(&self) -> &'static str {
        match self {
            Self::Local(_) => "local",
            Self::Remote(_) => "random.org",
        }
    }

    /// Produce `count` indices in `0..=7775` in one batch.
    ///
    /// # Errors
    ///
    /// [`ApiError::Passphrase`] if the local CSPRNG fails,
    /// [`ApiError::Upstream`] for any random.org failure.
    pub async fn produce(&self, count: usize) -> Result<Vec<u16>, ApiError> {
        match self {
            Self::Local(source) => Ok(source.produce(count)?),
            Self::Remote(source) => Ok(source.produce(count).await?),
        }
    }
}

/// Turns random indices into hyphen-joined passphrases.
#[derive(Debug, Clone, Copy)]
pub struct PassphraseGenerator<'a> {
    wordlist: &'a Wordlist,
}

impl<'a> PassphraseGenerator<'a> {
    /// Generator resolving words through `wordlist`.
    #[must_use]
    pub const fn new(wordlist: &'a Wordlist) -> Self {
        Self { wordlist }
    }

    /// Generate a `count`-word passphrase from `source`.
    ///
    /// Words appear in the order the source produced them; repeats are kept.
    /// Never returns fewer words than requested: a short batch, an
    /// out-of-range index or a missing word is an error.
    ///
    /// # Errors
    ///
    /// - [`PassphraseError::InvalidWordCount`] if `count` is outside `1..=1000`
    /// - [`PassphraseError::ShortRead`] if the source returns the wrong count
    /// - [`PassphraseError::OutOfRange`] / [`PassphraseError::LookupMiss`] on
    ///   a bad index
    /// - any error from [`RandomSource::produce`]
    pub async fn generate(&self, count: usize, source: &RandomSource) -> Result<String, ApiError> {
        validate_word_count(count)?;

        let numbers = source.produce(count).await?;
        let passphrase = self.resolve_batch(count, &numbers)?;
        tracing::debug!(words = count, source = source.kind(), "passphrase generated");
        Ok(passphrase)
    }

    /// Resolve one batch of source output that should hold `count` indices.
    ///
    /// # Errors
    ///
    /// - [`PassphraseError::ShortRead`] if `numbers.len() != count`
    /// - [`PassphraseError::OutOfRange`] / [`PassphraseError::LookupMiss`] on
    ///   a bad index
    pub fn resolve_batch(&self, count: usize, numbers: &[u16]) -> Result<String, PassphraseError> {
        if numbers.len() != count {
            return Err(PassphraseError::ShortRead {
                expected: count,
                got: numbers.len(),
            });
        }
        assemble(numbers, self.wordlist)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{integers_body, synthetic_wordlist};
    use wiremock::matchers::{body_partial_json, method};
    use wiremock::{Mock, MockServer, ResponseTemplate};
    use wordroll_core::WORDLIST_SIZE;
    use wordroll_random_org::{RandomOrgConfig, RandomOrgError};

    fn client_for(server: &MockServer) -> RandomOrgClient {
        RandomOrgClient::new(RandomOrgConfig {
            endpoint: server.uri(),
            ..RandomOrgConfig::default()
        })
        .unwrap()
    }

    fn offline_client() -> RandomOrgClient {
        RandomOrgClient::new(RandomOrgConfig::default()).unwrap()
    }

    #[test]
    fn empty_or_missing_token_selects_local() {
        let client = offline_client();
        for token in [None, Some("")] {
            let source = RandomSource::select(token, &client);
            assert!(matches!(source, RandomSource::Local(_)), "{token:?}");
        }
    }

    #[test]
    fn token_selects_remote() {
        let client = offline_client();
        for token in ["abc", " ", "  padded  "] {
            let source = RandomSource::select(Some(token), &client);
            assert!(matches!(source, RandomSource::Remote(_)), "{token:?}");
            assert_eq!(source.kind(), "random.org");
        }
    }

    #[test]
    fn short_batch_is_rejected() {
        let list = synthetic_wordlist();
        let generator = PassphraseGenerator::new(&list);
        let err = generator.resolve_batch(3, &[0, 1]).unwrap_err();
        assert!(matches!(
            err,
            PassphraseError::ShortRead {
                expected: 3,
                got: 2
            }
        ));
        assert!(matches!(
            generator.resolve_batch(1, &[0, 1]).unwrap_err(),
            PassphraseError::ShortRead {
                expected: 1,
                got: 2
            }
        ));
        assert_eq!(generator.resolve_batch(2, &[5, 5]).unwrap(), "w5-w5");
    }

    #[test]
    fn short_read_maps_to_internal_error() {
        let err = ApiError::from(PassphraseError::ShortRead {
            expected: 3,
            got: 0,
        });
        assert_eq!(err.status(), axum::http::StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[tokio::test]
    async fn whitespace_token_is_forwarded_unchanged() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(body_partial_json(serde_json::json!({ "params": { "apiKey": " " } })))
            .respond_with(ResponseTemplate::new(200).set_body_json(integers_body(&[7, 8])))
            .expect(1)
            .mount(&server)
            .await;

        let list = synthetic_wordlist();
        let source = RandomSource::select(Some(" "), &client_for(&server));
        let pp = PassphraseGenerator::new(&list)
            .generate(2, &source)
            .await
            .unwrap();
        assert_eq!(pp, "w7-w8");
    }

    #[tokio::test]
    async fn local_generation_has_requested_word_count() {
        let list = synthetic_wordlist();
        let generator = PassphraseGenerator::new(&list);
        let source = RandomSource::Local(LocalSource);
        for count in [1, 6, 250, 1000] {
            let pp = generator.generate(count, &source).await.unwrap();
            let words: Vec<&str> = pp.split('-').collect();
            assert_eq!(words.len(), count);
            assert!(words.iter().all(|w| list.contains(w)));
        }
    }

    #[tokio::test]
    async fn invalid_count_rejected_before_drawing() {
        let list = synthetic_wordlist();
        let generator = PassphraseGenerator::new(&list);
        let err = generator
            .generate(0, &RandomSource::Local(LocalSource))
            .await
            .unwrap_err();
        assert!(matches!(
            err,
            ApiError::Passphrase(PassphraseError::InvalidWordCount { got: 0, .. })
        ));
    }

    #[tokio::test]
    async fn remote_numbers_resolve_in_order() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(200).set_body_json(integers_body(&[0, 7775, 100])))
            .mount(&server)
            .await;

        let list = synthetic_wordlist();
        let source = RandomSource::select(Some("token"), &client_for(&server));
        let pp = PassphraseGenerator::new(&list)
            .generate(3, &source)
            .await
            .unwrap();

        let expected = [
            list.get_index(0).unwrap(),
            list.get_index(WORDLIST_SIZE - 1).unwrap(),
            list.get_index(100).unwrap(),
        ];
        assert_eq!(pp, expected.join("-"));
    }

    #[tokio::test]
    async fn remote_failure_is_an_error_not_a_short_passphrase() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(500))
            .mount(&server)
            .await;

        let list = synthetic_wordlist();
        let source = RandomSource::select(Some("token"), &client_for(&server));
        let err = PassphraseGenerator::new(&list)
            .generate(3, &source)
            .await
            .unwrap_err();

        assert!(matches!(
            err,
            ApiError::Upstream(RandomOrgError::Status { status_code: 500 })
        ));
    }
}
