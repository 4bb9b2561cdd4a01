use cull_core::config::PushConfig;
use cull_core::errors::NotifyError;
use cull_core::traits::INotifier;

/// Pushover-style notifier: one form POST per message, with the configured
/// delivery sound.
pub struct PushoverNotifier {
    http: reqwest::blocking::Client,
    url: String,
    api_token: String,
    user_key: String,
    sound: String,
}

impl PushoverNotifier {
    pub fn new(config: &PushConfig) -> Self {
        Self {
            http: reqwest::blocking::Client::new(),
            url: config.url.clone(),
            api_token: config.api_token.clone(),
            user_key: config.user_key.clone(),
            sound: config.sound.clone(),
        }
    }
}

impl INotifier for PushoverNotifier {
    fn send(&self, message: &str) -> Result<(), NotifyError> {
        let mut form = vec![
            ("token", self.api_token.as_str()),
            ("user", self.user_key.as_str()),
            ("message", message),
        ];
        if !self.sound.is_empty() {
            form.push(("sound", self.sound.as_str()));
        }

        let response = self
            .http
            .post(&self.url)
            .form(&form)
            .send()
            .map_err(|e| NotifyError::Transport {
                url: self.url.clone(),
                reason: e.to_string(),
            })?;

        let status = response.status();
        if !status.is_success() {
            return Err(NotifyError::Status {
                status: status.as_u16(),
            });
        }
        Ok(())
    }
}
