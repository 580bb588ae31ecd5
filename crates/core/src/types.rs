use std::time::Duration;

use serde::{Deserialize, Serialize};

/// One discovered form: its method attribute verbatim and the names of its
/// direct-child inputs, in document order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FormDescriptor {
    pub method: String,
    pub inputs: Vec<String>,
}

#[derive(Debug, Clone)]
pub struct FetchConfig {
    pub timeout: Duration,
    pub max_body_size: usize,
    pub follow_redirects: bool,
    pub user_agent: String,
}

impl Default for FetchConfig {
    fn default() -> Self {
        Self {
            timeout: Duration::from_secs(30),
            max_body_size: 10 * 1024 * 1024,
            follow_redirects: true,
            user_agent: format!("formscan/{}", env!("CARGO_PKG_VERSION")),
        }
    }
}
