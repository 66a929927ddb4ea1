//! Gmail mail transport

use async_trait::async_trait;
use lettre::{transport::smtp::authentication::Credentials, SmtpTransport, Transport};

use crate::{
    domain::notifications::{Mailer, Message, SendError},
    infrastructure::email::{smtp::build_email, SEND_TIMEOUT},
};

const GMAIL_RELAY: &str = "smtp.gmail.com";
const GMAIL_PORT: u16 = 587;

/// Gmail credentials
///
/// `password` is a Google app password, not the account password.
#[derive(Clone, Debug, Default)]
pub struct GmailConfig {
    /// The Gmail account to authenticate as
    pub username: Option<String>,

    /// The app password for the account
    pub password: Option<String>,

    /// Sender override (defaults to the account address)
    pub sender: Option<String>,
}

/// Sends mail through Gmail's SMTP relay
#[derive(Clone, Debug, Default)]
pub struct GmailMailer {
    config: GmailConfig,
}

impl GmailMailer {
    /// Create a new Gmail mailer
    pub fn new(config: GmailConfig) -> Self {
        Self { config }
    }
}

#[async_trait]
impl Mailer for GmailMailer {
    async fn send(&self, message: &Message) -> Result<(), SendError> {
        let (Some(username), Some(password)) = (&self.config.username, &self.config.password)
        else {
            return Err(SendError::MissingCredentials { provider: "gmail" });
        };

        // Gmail rewrites the From header to the authenticated account unless
        // the address is a registered alias.
        let from = self.config.sender.as_deref().unwrap_or(username);
        let email = build_email(message, from)?;

        let transport = SmtpTransport::starttls_relay(GMAIL_RELAY)?
            .port(GMAIL_PORT)
            .credentials(Credentials::new(username.clone(), password.clone()))
            .timeout(Some(SEND_TIMEOUT))
            .build();

        transport.send(&email)?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use testresult::TestResult;

    use crate::domain::notifications::EmailAddress;

    use super::*;

    fn submission() -> Result<Message, crate::domain::notifications::EmailAddressError> {
        Ok(Message::call_to_action_submission(
            EmailAddress::new("luk@lenoweb.be")?,
            EmailAddress::new("noreply@yourdomain.com")?,
            &EmailAddress::new("visitor@example.com")?,
        ))
    }

    #[tokio::test]
    async fn test_missing_credentials_is_a_configuration_error() -> TestResult {
        let mailer = GmailMailer::new(GmailConfig::default());

        let result = mailer.send(&submission()?).await;

        assert!(matches!(
            result.unwrap_err(),
            SendError::MissingCredentials { provider: "gmail" }
        ));

        Ok(())
    }

    #[tokio::test]
    async fn test_password_alone_is_not_enough() -> TestResult {
        let mailer = GmailMailer::new(GmailConfig {
            username: None,
            password: Some("app-password".to_string()),
            sender: None,
        });

        let result = mailer.send(&submission()?).await;

        assert!(matches!(
            result.unwrap_err(),
            SendError::MissingCredentials { provider: "gmail" }
        ));

        Ok(())
    }
}
