use cull_core::config::RefreshConfig;
use cull_core::errors::CatalogError;
use cull_core::traits::IRefreshTrigger;

/// Library-refresh trigger for a downstream media server (Emby-style
/// `POST {url}/Library/Refresh?api_key=`). One expected status counts as
/// success; anything else is reported and logged by the caller.
pub struct MediaServerRefresh {
    http: reqwest::blocking::Client,
    name: String,
    url: String,
    api_key: String,
    expected_status: u16,
}

impl MediaServerRefresh {
    pub fn new(config: &RefreshConfig) -> Self {
        Self {
            http: reqwest::blocking::Client::new(),
            name: config.name.clone(),
            url: config.url.trim_end_matches('/').to_string(),
            api_key: config.api_key.clone(),
            expected_status: config.expected_status,
        }
    }

    fn refresh_url(&self) -> String {
        format!("{}/Library/Refresh?api_key={}", self.url, self.api_key)
    }
}

impl IRefreshTrigger for MediaServerRefresh {
    fn name(&self) -> &str {
        &self.name
    }

    fn trigger(&self) -> Result<(), CatalogError> {
        let url = self.refresh_url();
        let response = self
            .http
            .post(&url)
            .send()
            .map_err(|e| CatalogError::Transport {
                url: self.url.clone(),
                reason: e.to_string(),
            })?;

        let status = response.status().as_u16();
        if status != self.expected_status {
            return Err(CatalogError::Status {
                url: self.url.clone(),
                status,
            });
        }
        Ok(())
    }
}
