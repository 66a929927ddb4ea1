//! Notifications module.

mod email_address;
mod errors;
mod mailer;
mod message;
mod service;

pub use email_address::{EmailAddress, EmailAddressError};
pub use errors::SendError;
pub use mailer::Mailer;
pub use message::Message;
pub use service::NotificationService;
