//! Mail settings read from the environment.

use civic_report_core::env_config::{env_non_empty, env_parse_with_default};

/// Default SMTP relay (implicit TLS on 465).
pub const DEFAULT_SMTP_HOST: &str = "smtp.gmail.com";
pub const DEFAULT_SMTP_PORT: u16 = 465;

/// Account, app password and recipients for developer notifications.
#[derive(Clone, PartialEq, Eq)]
pub struct MailConfig {
    pub smtp_host: String,
    pub smtp_port: u16,
    /// Sending account; also used as the `From` address
    pub username: String,
    pub password: String,
    pub developer_email: String,
    pub cc_email: Option<String>,
}

impl std::fmt::Debug for MailConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MailConfig")
            .field("smtp_host", &self.smtp_host)
            .field("smtp_port", &self.smtp_port)
            .field("username", &self.username)
            .field("password", &"***")
            .field("developer_email", &self.developer_email)
            .field("cc_email", &self.cc_email)
            .finish()
    }
}

impl MailConfig {
    /// Reads `EMAIL_USER`, `EMAIL_PASS`, `DEVELOPER_EMAIL`, `CC_EMAIL`,
    /// `SMTP_HOST` and `SMTP_PORT`.
    ///
    /// Returns `None` when the account, password or developer address is
    /// missing; notifications are then disabled.
    #[must_use]
    pub fn from_env() -> Option<Self> {
        let username = env_non_empty("EMAIL_USER")?;
        let password = env_non_empty("EMAIL_PASS")?;
        let developer_email = env_non_empty("DEVELOPER_EMAIL")?;
        Some(Self {
            smtp_host: env_non_empty("SMTP_HOST").unwrap_or_else(|| DEFAULT_SMTP_HOST.to_owned()),
            smtp_port: env_parse_with_default("SMTP_PORT", DEFAULT_SMTP_PORT),
            username,
            password,
            developer_email,
            cc_email: env_non_empty("CC_EMAIL"),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn debug_redacts_password() {
        let config = MailConfig {
            smtp_host: DEFAULT_SMTP_HOST.to_owned(),
            smtp_port: DEFAULT_SMTP_PORT,
            username: "reports@example.org".to_owned(),
            password: "app-password-123".to_owned(),
            developer_email: "dev@example.org".to_owned(),
            cc_email: None,
        };
        let rendered = format!("{config:?}");
        assert!(!rendered.contains("app-password-123"));
        assert!(rendered.contains("***"));
    }
}
