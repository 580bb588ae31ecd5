use std::time::Instant;

use async_trait::async_trait;
use tracing::{debug, warn};
use url::Url;

use formscan_core::{FetchConfig, FetchError};
use formscan_parser::{parse_document, DomTree};

/// Resolves a URL to a parsed document tree. The batch driver only talks
/// to this trait, so it can be fed canned trees in tests.
#[async_trait]
pub trait PageFetcher: Send + Sync {
    async fn fetch(&self, url: &str) -> Result<DomTree, FetchError>;
}

/// reqwest-backed fetcher. One client is built up front; every request
/// shares its timeout, redirect policy and user agent.
pub struct HttpFetcher {
    client: reqwest::Client,
    config: FetchConfig,
}

impl HttpFetcher {
    pub fn new(config: FetchConfig) -> Result<Self, FetchError> {
        let redirect = if config.follow_redirects {
            reqwest::redirect::Policy::limited(10)
        } else {
            reqwest::redirect::Policy::none()
        };

        let client = reqwest::Client::builder()
            .timeout(config.timeout)
            .redirect(redirect)
            .user_agent(config.user_agent.clone())
            .build()
            .map_err(|e| FetchError::Client(e.to_string()))?;

        Ok(Self { client, config })
    }

    fn transport_error(&self, e: reqwest::Error) -> FetchError {
        if e.is_timeout() {
            FetchError::Timeout(self.config.timeout.as_secs())
        } else {
            FetchError::Network(e.to_string())
        }
    }
}

#[async_trait]
impl PageFetcher for HttpFetcher {
    async fn fetch(&self, url: &str) -> Result<DomTree, FetchError> {
        let parsed = Url::parse(url).map_err(|e| FetchError::InvalidUrl(e.to_string()))?;

        let start = Instant::now();
        debug!(url = %parsed, "fetching page");

        let resp = self.client.get(parsed.clone()).send().await.map_err(|e| {
            warn!(url = %parsed, error = %e, "fetch failed");
            self.transport_error(e)
        })?;

        // Non-2xx bodies still get parsed; error pages can carry forms too.
        let status = resp.status().as_u16();
        let body = resp.bytes().await.map_err(|e| self.transport_error(e))?;

        // Oversized bodies are truncated before parsing, not rejected.
        let body = if body.len() > self.config.max_body_size {
            &body[..self.config.max_body_size]
        } else {
            &body[..]
        };
        let html = String::from_utf8_lossy(body);

        debug!(
            url = %parsed,
            status,
            bytes = body.len(),
            elapsed_ms = start.elapsed().as_millis() as u64,
            "page fetched"
        );

        Ok(parse_document(&html))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builds_client_from_default_config() {
        assert!(HttpFetcher::new(FetchConfig::default()).is_ok());
    }

    #[tokio::test]
    async fn unparseable_url_is_rejected_before_any_request() {
        let fetcher = HttpFetcher::new(FetchConfig::default()).unwrap();
        let err = fetcher.fetch("http://[not-a-host").await.unwrap_err();
        assert!(matches!(err, FetchError::InvalidUrl(_)));
    }
}
