//! Log-only mail transport

use async_trait::async_trait;
use chrono::Utc;
use tracing::info;

use crate::domain::notifications::{Mailer, Message, SendError};

/// Serializes the envelope to the operational log instead of sending it.
///
/// The default transport; used in development and whenever no real provider
/// is configured.
#[derive(Clone, Copy, Debug, Default)]
pub struct ConsoleMailer;

#[async_trait]
impl Mailer for ConsoleMailer {
    async fn send(&self, message: &Message) -> Result<(), SendError> {
        info!(
            to = %message.to,
            from = %message.from,
            subject = %message.subject,
            text = %message.text,
            html = ?message.html,
            timestamp = %Utc::now().to_rfc3339(),
            "email would be sent"
        );

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use testresult::TestResult;

    use crate::domain::notifications::EmailAddress;

    use super::*;

    #[tokio::test]
    async fn test_console_mailer_always_succeeds() -> TestResult {
        let message = Message::call_to_action_submission(
            EmailAddress::new("luk@lenoweb.be")?,
            EmailAddress::new("noreply@yourdomain.com")?,
            &EmailAddress::new("visitor@example.com")?,
        );

        ConsoleMailer.send(&message).await?;

        Ok(())
    }
}
