//! Mail transport implementations.
//!
//! Each provider implements the [`Mailer`] trait. The active provider is
//! selected once at startup from [`MailerConfig`] and injected into the
//! notification service; changing provider requires a restart.
//!
//! | Provider | Description |
//! |----------|-------------|
//! | [`ConsoleMailer`] | Logs the envelope, always succeeds |
//! | [`ResendMailer`] | Resend API |
//! | [`SendGridMailer`] | SendGrid API |
//! | [`SmtpMailer`] | SMTP via lettre |
//! | [`GmailMailer`] | Gmail SMTP with an app password |

use std::time::Duration;

use async_trait::async_trait;

use crate::domain::notifications::{Mailer, Message, SendError};

mod config;
mod console;
mod gmail;
mod resend;
mod sendgrid;
mod smtp;

pub use config::{MailerConfig, MailerKind, NotificationConfig};
pub use console::ConsoleMailer;
pub use gmail::{GmailConfig, GmailMailer};
pub use resend::ResendMailer;
pub use sendgrid::SendGridMailer;
pub use smtp::{SmtpConfig, SmtpMailer};

/// Timeout applied to every outbound send
pub(crate) const SEND_TIMEOUT: Duration = Duration::from_secs(10);

/// The active mail transport, selected at startup
#[derive(Clone, Debug)]
pub enum Provider {
    /// Log-only transport
    Console(ConsoleMailer),

    /// Resend REST API
    Resend(ResendMailer),

    /// SendGrid REST API
    SendGrid(SendGridMailer),

    /// SMTP relay
    Smtp(SmtpMailer),

    /// Gmail SMTP relay
    Gmail(GmailMailer),
}

impl Provider {
    /// Build the transport selected by `config`
    pub fn from_config(config: &MailerConfig) -> anyhow::Result<Self> {
        Ok(match config.provider {
            MailerKind::Console => Self::Console(ConsoleMailer),
            MailerKind::Resend => Self::Resend(ResendMailer::new(config.api_key.clone())?),
            MailerKind::Sendgrid => Self::SendGrid(SendGridMailer::new(config.api_key.clone())?),
            MailerKind::Smtp => Self::Smtp(SmtpMailer::new(SmtpConfig {
                host: config.smtp_host.clone(),
                port: config.smtp_port,
                username: config.smtp_user.clone(),
                password: config.smtp_password.clone(),
            })),
            MailerKind::Gmail => Self::Gmail(GmailMailer::new(GmailConfig {
                username: config.gmail_user.clone(),
                password: config.gmail_pass.clone(),
                sender: config.gmail_from.clone(),
            })),
        })
    }
}

#[async_trait]
impl Mailer for Provider {
    async fn send(&self, message: &Message) -> Result<(), SendError> {
        match self {
            Self::Console(mailer) => mailer.send(message).await,
            Self::Resend(mailer) => mailer.send(message).await,
            Self::SendGrid(mailer) => mailer.send(message).await,
            Self::Smtp(mailer) => mailer.send(message).await,
            Self::Gmail(mailer) => mailer.send(message).await,
        }
    }
}
