//! SMTP delivery via lettre's tokio transport.

use async_trait::async_trait;
use lettre::message::header::ContentType;
use lettre::message::Mailbox;
use lettre::transport::smtp::authentication::Credentials;
use lettre::{AsyncSmtpTransport, AsyncTransport, Message, Tokio1Executor};

use crate::{MailConfig, Notifier, NotifyError};

/// Parsed sender and recipient mailboxes.
#[derive(Debug, Clone)]
pub struct Recipients {
    from: Mailbox,
    to: Mailbox,
    cc: Option<Mailbox>,
}

impl Recipients {
    /// # Errors
    /// Returns an error if any configured address does not parse.
    pub fn from_config(config: &MailConfig) -> Result<Self, NotifyError> {
        Ok(Self {
            from: config.username.parse()?,
            to: config.developer_email.parse()?,
            cc: config.cc_email.as_deref().map(str::parse).transpose()?,
        })
    }

    /// Build a plain-text message addressed to the developer (and CC, if set).
    ///
    /// # Errors
    /// Returns an error if the message cannot be assembled.
    pub fn compose(&self, subject: &str, body: &str) -> Result<Message, NotifyError> {
        let mut builder = Message::builder()
            .from(self.from.clone())
            .to(self.to.clone())
            .subject(subject)
            .header(ContentType::TEXT_PLAIN);
        if let Some(cc) = &self.cc {
            builder = builder.cc(cc.clone());
        }
        Ok(builder.body(body.to_owned())?)
    }
}

/// Sends notifications through an authenticated SMTP relay.
pub struct SmtpNotifier {
    transport: AsyncSmtpTransport<Tokio1Executor>,
    recipients: Recipients,
}

impl SmtpNotifier {
    /// Builds the transport. No connection is opened until the first send.
    ///
    /// Port 465 uses implicit TLS; any other port upgrades with STARTTLS.
    ///
    /// # Errors
    /// Returns an error if an address is invalid or TLS setup fails.
    pub fn new(config: &MailConfig) -> Result<Self, NotifyError> {
        let recipients = Recipients::from_config(config)?;
        let builder = if config.smtp_port == 465 {
            AsyncSmtpTransport::<Tokio1Executor>::relay(&config.smtp_host)?
        } else {
            AsyncSmtpTransport::<Tokio1Executor>::starttls_relay(&config.smtp_host)?
        };
        let transport = builder
            .port(config.smtp_port)
            .credentials(Credentials::new(config.username.clone(), config.password.clone()))
            .build();
        Ok(Self { transport, recipients })
    }
}

#[async_trait]
impl Notifier for SmtpNotifier {
    async fn send(&self, subject: &str, body: &str) -> Result<(), NotifyError> {
        let message = self.recipients.compose(subject, body)?;
        self.transport.send(message).await?;
        tracing::info!(subject, "Notification email sent");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config(cc: Option<&str>) -> MailConfig {
        MailConfig {
            smtp_host: "smtp.example.org".to_owned(),
            smtp_port: 465,
            username: "reports@example.org".to_owned(),
            password: "secret".to_owned(),
            developer_email: "dev@example.org".to_owned(),
            cc_email: cc.map(ToOwned::to_owned),
        }
    }

    #[test]
    fn compose_includes_cc_when_configured() {
        let recipients = Recipients::from_config(&config(Some("lead@example.org"))).unwrap();
        let message = recipients.compose("New issue reported: Pier", "body text").unwrap();
        let raw = String::from_utf8(message.formatted()).unwrap();
        assert!(raw.contains("To: dev@example.org"));
        assert!(raw.contains("Cc: lead@example.org"));
        assert!(raw.contains("Subject: New issue reported: Pier"));
        assert!(raw.contains("body text"));
    }

    #[test]
    fn compose_without_cc() {
        let recipients = Recipients::from_config(&config(None)).unwrap();
        let message = recipients.compose("s", "b").unwrap();
        let raw = String::from_utf8(message.formatted()).unwrap();
        assert!(!raw.contains("Cc:"));
    }

    #[test]
    fn invalid_developer_address_is_rejected() {
        let mut bad = config(None);
        bad.developer_email = "not-an-address".to_owned();
        let err = Recipients::from_config(&bad).unwrap_err();
        assert!(matches!(err, NotifyError::Address(_)));
    }
}
