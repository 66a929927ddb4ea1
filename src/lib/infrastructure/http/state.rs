//! Application state module

use std::fmt;
use std::sync::Arc;

use chrono::{DateTime, Utc};

use crate::domain::notifications::{EmailAddress, Mailer, NotificationService};

/// Application configuration
#[derive(Clone, Debug)]
pub struct AppConfig {
    /// Where contact-form notifications are delivered
    pub recipient: EmailAddress,

    /// Default sender address
    pub sender: EmailAddress,
}

/// Global application state
#[derive(Clone)]
pub struct AppState<M: Mailer> {
    /// The time the server started
    pub start_time: DateTime<Utc>,

    /// The application configuration
    pub config: AppConfig,

    /// Notification dispatch service
    pub notifications: Arc<NotificationService<M>>,
}

impl<M> AppState<M>
where
    M: Mailer,
{
    /// Create a new application state
    pub fn new(config: AppConfig, mailer: M) -> Self {
        Self {
            start_time: Utc::now(),
            config,
            notifications: Arc::new(NotificationService::new(mailer)),
        }
    }
}

impl<M> fmt::Debug for AppState<M>
where
    M: Mailer,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AppState")
            .field("start_time", &self.start_time)
            .field("config", &self.config)
            .field("notifications", &"NotificationService")
            .finish()
    }
}

#[cfg(test)]
use crate::domain::notifications::tests::MockMailer;

#[cfg(test)]
pub fn test_state(mailer: Option<MockMailer>) -> AppState<MockMailer> {
    let mailer = mailer.unwrap_or_else(MockMailer::new);

    let config = AppConfig {
        recipient: EmailAddress::new("luk@lenoweb.be").expect("valid recipient"),
        sender: EmailAddress::new("noreply@yourdomain.com").expect("valid sender"),
    };

    AppState::new(config, mailer)
}
