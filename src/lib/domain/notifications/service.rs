//! Notification dispatch service

use std::sync::Arc;

use tracing::{error, info};

use crate::domain::notifications::{Mailer, Message};

/// Dispatches notification messages through the configured mail transport.
///
/// One attempt per call, no retries and no queueing. Transport failures are
/// logged server-side and reduced to `false`; the call never propagates an
/// error past its boundary.
#[derive(Debug, Clone)]
pub struct NotificationService<M>
where
    M: Mailer,
{
    mailer: Arc<M>,
}

impl<M> NotificationService<M>
where
    M: Mailer,
{
    /// Create a new notification service
    pub fn new(mailer: M) -> Self {
        Self {
            mailer: Arc::new(mailer),
        }
    }

    /// Attempt to deliver `message`, returning whether delivery succeeded
    pub async fn dispatch(&self, message: &Message) -> bool {
        match self.mailer.send(message).await {
            Ok(()) => {
                info!(to = %message.to, subject = %message.subject, "notification sent");
                true
            }
            Err(err) => {
                error!(error = %err, to = %message.to, "failed to send notification");
                false
            }
        }
    }
}
