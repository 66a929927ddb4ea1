//! Mail transport configuration

use clap::{Parser, ValueEnum};

/// The selectable mail transports
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum)]
pub enum MailerKind {
    /// Log the envelope instead of sending
    #[default]
    Console,

    /// Resend REST API
    Resend,

    /// SendGrid REST API
    Sendgrid,

    /// SMTP relay
    Smtp,

    /// Gmail SMTP with an app password
    Gmail,
}

/// Mail transport configuration
///
/// Only the fragment matching the selected provider needs to be populated.
/// Missing credentials for the selected provider surface as a send-time
/// configuration error, not at startup.
#[derive(Clone, Debug, Default, Parser)]
pub struct MailerConfig {
    /// The mail provider to send through
    #[clap(long, env = "EMAIL_PROVIDER", value_enum, default_value = "console")]
    pub provider: MailerKind,

    /// API key for the Resend and SendGrid providers
    #[clap(long, env = "EMAIL_API_KEY")]
    pub api_key: Option<String>,

    /// The SMTP host
    #[clap(long, env = "SMTP_HOST", default_value = "localhost")]
    pub smtp_host: String,

    /// The SMTP port
    #[clap(long, env = "SMTP_PORT", default_value = "587")]
    pub smtp_port: u16,

    /// The SMTP username
    #[clap(long, env = "SMTP_USER")]
    pub smtp_user: Option<String>,

    /// The SMTP password
    #[clap(long, env = "SMTP_PASSWORD")]
    pub smtp_password: Option<String>,

    /// The Gmail account to send from
    #[clap(long, env = "GMAIL_USER")]
    pub gmail_user: Option<String>,

    /// The Gmail app password
    #[clap(long, env = "GMAIL_PASS")]
    pub gmail_pass: Option<String>,

    /// Sender override for the Gmail provider (defaults to the account)
    #[clap(long, env = "GMAIL_FROM")]
    pub gmail_from: Option<String>,
}

/// Notification envelope configuration
#[derive(Clone, Debug, Parser)]
pub struct NotificationConfig {
    /// Where contact-form notifications are delivered
    #[clap(long, env = "NOTIFY_TO", default_value = "luk@lenoweb.be")]
    pub recipient: String,

    /// Default sender address
    #[clap(long, env = "EMAIL_FROM", default_value = "noreply@yourdomain.com")]
    pub sender: String,
}
