//! Mail transport trait

use async_trait::async_trait;

#[cfg(test)]
use mockall::mock;

use crate::domain::notifications::{errors::SendError, message::Message};

/// A mail transport
#[async_trait]
pub trait Mailer: Clone + Send + Sync + 'static {
    /// Deliver a message through this transport
    ///
    /// # Arguments
    /// * `message` - The [`Message`] to deliver.
    ///
    /// # Returns
    /// A [`Result`] indicating success or failure.
    async fn send(&self, message: &Message) -> Result<(), SendError>;
}

#[cfg(test)]
mock! {
    pub Mailer {}

    impl Clone for Mailer {
        fn clone(&self) -> Self;
    }

    #[async_trait]
    impl Mailer for Mailer {
        async fn send(&self, message: &Message) -> Result<(), SendError>;
    }
}
