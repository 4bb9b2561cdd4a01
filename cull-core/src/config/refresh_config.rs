use serde::{Deserialize, Serialize};

use super::defaults;

/// One downstream media server to poke after the pass.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct RefreshConfig {
    /// Display name for log lines.
    pub name: String,
    pub url: String,
    pub api_key: String,
    /// Status code that counts as success; anything else is logged.
    pub expected_status: u16,
}

impl Default for RefreshConfig {
    fn default() -> Self {
        Self {
            name: String::new(),
            url: String::new(),
            api_key: String::new(),
            expected_status: defaults::DEFAULT_REFRESH_STATUS,
        }
    }
}
