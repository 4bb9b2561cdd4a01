use serde::{Deserialize, Serialize};

use super::defaults;
use crate::constants::DEFAULT_PUSH_URL;

/// Push-notification settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct PushConfig {
    pub enabled: bool,
    pub user_key: String,
    pub api_token: String,
    /// Delivery sound name, passed through to the push service.
    pub sound: String,
    /// Endpoint override, mainly for tests.
    pub url: String,
}

impl Default for PushConfig {
    fn default() -> Self {
        Self {
            enabled: false,
            user_key: String::new(),
            api_token: String::new(),
            sound: String::new(),
            url: DEFAULT_PUSH_URL.to_string(),
        }
    }
}

/// Summary-mail settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct MailConfig {
    pub enabled: bool,
    /// Only mail when something was removed or warned this pass.
    pub only_when_removed: bool,
    pub server: String,
    pub port: u16,
    pub login: String,
    pub password: String,
    pub sender: String,
    pub recipients: Vec<String>,
}

impl Default for MailConfig {
    fn default() -> Self {
        Self {
            enabled: false,
            only_when_removed: false,
            server: String::new(),
            port: defaults::DEFAULT_SMTP_PORT,
            login: String::new(),
            password: String::new(),
            sender: String::new(),
            recipients: vec![],
        }
    }
}
