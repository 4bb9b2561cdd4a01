use std::path::Path;

use lettre::message::header::ContentType;
use lettre::message::{Attachment, Mailbox, MultiPart, SinglePart};
use lettre::transport::smtp::authentication::Credentials;
use lettre::{Message, SmtpTransport, Transport};

use cull_core::config::MailConfig;
use cull_core::errors::MailError;
use cull_core::traits::IMailer;

/// Summary mailer over a blocking STARTTLS SMTP relay. The run log is
/// attached as plain text so the mail alone is enough to audit a pass.
pub struct SmtpMailer {
    server: String,
    port: u16,
    login: String,
    password: String,
    sender: String,
}

impl SmtpMailer {
    pub fn new(config: &MailConfig) -> Self {
        Self {
            server: config.server.clone(),
            port: config.port,
            login: config.login.clone(),
            password: config.password.clone(),
            sender: config.sender.clone(),
        }
    }

    fn parse_mailbox(address: &str) -> Result<Mailbox, MailError> {
        address.parse().map_err(|_| MailError::Address {
            address: address.to_string(),
        })
    }

    fn map_smtp_error(&self, e: lettre::transport::smtp::Error) -> MailError {
        let reason = e.to_string();
        if e.is_timeout() || e.is_tls() {
            return MailError::Connection {
                server: self.server.clone(),
                reason,
            };
        }
        if e.is_permanent() || e.is_transient() {
            // A response from the server: a permanent rejection of our
            // credentials reads differently from a protocol hiccup.
            if reason.to_lowercase().contains("auth") || reason.to_lowercase().contains("credential")
            {
                return MailError::Auth { reason };
            }
            return MailError::Protocol { reason };
        }
        MailError::Connection {
            server: self.server.clone(),
            reason,
        }
    }
}

impl IMailer for SmtpMailer {
    fn send(
        &self,
        subject: &str,
        body: &str,
        attachment: Option<&Path>,
        recipients: &[String],
    ) -> Result<(), MailError> {
        let mut builder = Message::builder()
            .from(Self::parse_mailbox(&self.sender)?)
            .subject(subject);
        for recipient in recipients {
            builder = builder.to(Self::parse_mailbox(recipient)?);
        }

        let message = match attachment {
            Some(path) => {
                let content = std::fs::read(path).map_err(|e| MailError::Build {
                    reason: format!("cannot read attachment {}: {}", path.display(), e),
                })?;
                let filename = path
                    .file_name()
                    .map(|n| n.to_string_lossy().into_owned())
                    .unwrap_or_else(|| "cull.log".to_string());
                let part = Attachment::new(filename).body(content, ContentType::TEXT_PLAIN);
                builder
                    .multipart(
                        MultiPart::mixed()
                            .singlepart(SinglePart::plain(body.to_string()))
                            .singlepart(part),
                    )
                    .map_err(|e| MailError::Build {
                        reason: e.to_string(),
                    })?
            }
            None => builder
                .header(ContentType::TEXT_PLAIN)
                .body(body.to_string())
                .map_err(|e| MailError::Build {
                    reason: e.to_string(),
                })?,
        };

        let mut transport =
            SmtpTransport::starttls_relay(&self.server).map_err(|e| MailError::Connection {
                server: self.server.clone(),
                reason: e.to_string(),
            })?;
        transport = transport.port(self.port);
        if !self.login.is_empty() {
            transport =
                transport.credentials(Credentials::new(self.login.clone(), self.password.clone()));
        }

        transport
            .build()
            .send(&message)
            .map_err(|e| self.map_smtp_error(e))?;

        tracing::info!(recipients = recipients.len(), "summary mail sent");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn mailer() -> SmtpMailer {
        SmtpMailer::new(&MailConfig {
            enabled: true,
            only_when_removed: false,
            server: "smtp.example.test".to_string(),
            port: 587,
            login: "user".to_string(),
            password: "pass".to_string(),
            sender: "cull@example.test".to_string(),
            recipients: vec!["a@example.test".to_string()],
        })
    }

    #[test]
    fn bad_sender_address_is_reported_as_such() {
        let mut mailer = mailer();
        mailer.sender = "not an address".to_string();
        let err = mailer
            .send("subject", "body", None, &["a@example.test".to_string()])
            .unwrap_err();
        assert!(matches!(err, MailError::Address { .. }));
    }

    #[test]
    fn missing_attachment_fails_the_build() {
        let err = mailer()
            .send(
                "subject",
                "body",
                Some(Path::new("/nonexistent/cull.log")),
                &["a@example.test".to_string()],
            )
            .unwrap_err();
        assert!(matches!(err, MailError::Build { .. }));
    }
}
