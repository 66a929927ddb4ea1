//! SMTP mail transport

use async_trait::async_trait;
use lettre::{
    message::{header::ContentType, MultiPart},
    transport::smtp::authentication::Credentials,
    SmtpTransport, Transport,
};

use crate::{
    domain::notifications::{Mailer, Message, SendError},
    infrastructure::email::SEND_TIMEOUT,
};

/// SMTP relay configuration
#[derive(Clone, Debug, Default)]
pub struct SmtpConfig {
    /// The SMTP host
    pub host: String,

    /// The SMTP port
    pub port: u16,

    /// The SMTP username
    pub username: Option<String>,

    /// The SMTP password
    pub password: Option<String>,
}

/// Sends mail through an SMTP relay with STARTTLS
#[derive(Clone, Debug, Default)]
pub struct SmtpMailer {
    config: SmtpConfig,
}

impl SmtpMailer {
    /// Create a new SMTP mailer
    pub fn new(config: SmtpConfig) -> Self {
        Self { config }
    }

    fn transport(&self) -> Result<SmtpTransport, SendError> {
        let mut relay = SmtpTransport::starttls_relay(&self.config.host)?
            .port(self.config.port)
            .timeout(Some(SEND_TIMEOUT));

        if let (Some(username), Some(password)) = (&self.config.username, &self.config.password) {
            relay = relay.credentials(Credentials::new(username.clone(), password.clone()));
        }

        Ok(relay.build())
    }
}

/// Build the wire-format email for an envelope, with an explicit sender
pub(crate) fn build_email(message: &Message, from: &str) -> Result<lettre::Message, SendError> {
    let builder = lettre::Message::builder()
        .from(from.parse()?)
        .to(message.to.as_str().parse()?)
        .subject(message.subject.clone());

    let email = match message.html.as_deref() {
        Some(html) => builder.multipart(MultiPart::alternative_plain_html(
            message.text.clone(),
            html.to_string(),
        ))?,
        None => builder
            .header(ContentType::TEXT_PLAIN)
            .body(message.text.clone())?,
    };

    Ok(email)
}

#[async_trait]
impl Mailer for SmtpMailer {
    async fn send(&self, message: &Message) -> Result<(), SendError> {
        let email = build_email(message, message.from.as_str())?;

        self.transport()?.send(&email)?;

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

    #[test]
    fn test_build_email_multipart_when_html_present() -> TestResult {
        let email = build_email(&submission()?, "noreply@yourdomain.com")?;

        let formatted = String::from_utf8(email.formatted())?;

        assert!(formatted.contains("Subject: New email submission from Call to Action block"));
        assert!(formatted.contains("multipart/alternative"));

        Ok(())
    }

    #[test]
    fn test_build_email_plain_only_when_html_absent() -> TestResult {
        let mut message = submission()?;
        message.html = None;

        let email = build_email(&message, "noreply@yourdomain.com")?;

        let formatted = String::from_utf8(email.formatted())?;

        assert!(formatted.contains("Content-Type: text/plain"));
        assert!(!formatted.contains("multipart/alternative"));

        Ok(())
    }

    #[test]
    fn test_build_email_uses_explicit_sender() -> TestResult {
        let email = build_email(&submission()?, "override@yourdomain.com")?;

        let formatted = String::from_utf8(email.formatted())?;

        assert!(formatted.contains("From: override@yourdomain.com"));

        Ok(())
    }
}
