use thiserror::Error;

#[derive(Error, Debug)]
pub enum FetchError {
    #[error("invalid URL: {0}")]
    InvalidUrl(String),

    #[error("network error: {0}")]
    Network(String),

    #[error("timeout after {0}s")]
    Timeout(u64),

    #[error("client error: {0}")]
    Client(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    // These strings end up verbatim in per-URL diagnostics.
    #[test]
    fn errors_render_with_their_cause() {
        assert_eq!(
            FetchError::Network("connection refused".to_string()).to_string(),
            "network error: connection refused"
        );
        assert_eq!(FetchError::Timeout(30).to_string(), "timeout after 30s");
        assert_eq!(
            FetchError::InvalidUrl("empty host".to_string()).to_string(),
            "invalid URL: empty host"
        );
    }
}
