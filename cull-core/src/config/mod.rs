pub mod catalog_config;
pub mod defaults;
pub mod notify_config;
pub mod prune_config;
pub mod refresh_config;

use std::path::Path;

use serde::{Deserialize, Serialize};

pub use catalog_config::{CatalogConfig, CatalogKind};
pub use notify_config::{MailConfig, PushConfig};
pub use prune_config::PruneConfig;
pub use refresh_config::RefreshConfig;

use crate::errors::ConfigError;

/// Full tool configuration. Constructed once at startup, validated, then
/// passed by reference into each component; nothing reads ambient state.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct CullConfig {
    pub catalog: CatalogConfig,
    pub prune: PruneConfig,
    pub push: PushConfig,
    pub mail: MailConfig,
    pub refresh: Vec<RefreshConfig>,
}

impl CullConfig {
    /// Parse a TOML document. Missing sections and fields fall back to their
    /// defaults. Does not validate; call [`CullConfig::validate`] before
    /// using the result.
    pub fn from_toml(raw: &str) -> Result<Self, ConfigError> {
        toml::from_str(raw).map_err(|e| ConfigError::Malformed {
            path: "<inline>".to_string(),
            reason: e.to_string(),
        })
    }

    /// Read and parse a TOML config file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let raw = std::fs::read_to_string(path).map_err(|e| ConfigError::Unreadable {
            path: path.display().to_string(),
            reason: e.to_string(),
        })?;
        toml::from_str(&raw).map_err(|e| ConfigError::Malformed {
            path: path.display().to_string(),
            reason: e.to_string(),
        })
    }

    /// Cross-field validation. Any error here aborts the run before the
    /// first item is evaluated.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.catalog.enabled {
            if self.catalog.url.is_empty() {
                return Err(invalid("catalog.url", "must be set when the catalog is enabled"));
            }
            if self.catalog.api_key.is_empty() {
                return Err(invalid(
                    "catalog.api_key",
                    "must be set when the catalog is enabled",
                ));
            }
        }

        if self.prune.retention_days < 1 {
            return Err(invalid("prune.retention_days", "must be at least 1"));
        }
        if self.prune.warn_lead_days < 1 {
            return Err(invalid("prune.warn_lead_days", "must be at least 1"));
        }
        if let Some(pct) = self.prune.disk_threshold_percent {
            if !(0.0..=100.0).contains(&pct) || pct == 0.0 {
                return Err(invalid(
                    "prune.disk_threshold_percent",
                    "must be within (0, 100]",
                ));
            }
        }
        if let Some(month) = self
            .prune
            .override_months
            .iter()
            .find(|m| !(1..=12).contains(*m))
        {
            return Err(invalid(
                "prune.override_months",
                &format!("{month} is not a calendar month"),
            ));
        }
        if self.prune.monitored_extensions.is_empty() {
            return Err(invalid(
                "prune.monitored_extensions",
                "at least one extension is required",
            ));
        }

        if self.push.enabled && (self.push.user_key.is_empty() || self.push.api_token.is_empty()) {
            return Err(invalid(
                "push",
                "user_key and api_token must be set when push is enabled",
            ));
        }

        if self.mail.enabled {
            if self.mail.server.is_empty() {
                return Err(invalid("mail.server", "must be set when mail is enabled"));
            }
            if self.mail.sender.is_empty() {
                return Err(invalid("mail.sender", "must be set when mail is enabled"));
            }
            if self.mail.recipients.is_empty() {
                return Err(invalid(
                    "mail.recipients",
                    "at least one recipient is required when mail is enabled",
                ));
            }
        }

        for (i, refresh) in self.refresh.iter().enumerate() {
            if refresh.url.is_empty() {
                return Err(invalid(
                    &format!("refresh[{i}].url"),
                    "must be set for every refresh target",
                ));
            }
        }

        Ok(())
    }
}

fn invalid(setting: &str, reason: &str) -> ConfigError {
    ConfigError::Invalid {
        setting: setting.to_string(),
        reason: reason.to_string(),
    }
}
