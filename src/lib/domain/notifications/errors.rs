//! Error types for the notifications module

use lettre::address::AddressError;
use thiserror::Error;

/// Errors raised by a mail transport
#[derive(Debug, Error)]
pub enum SendError {
    /// The selected provider is missing a required credential
    #[error("missing credentials for the {provider} provider")]
    MissingCredentials {
        /// Provider name, for the server-side log
        provider: &'static str,
    },

    /// The provider rejected the message
    #[error("{provider} rejected the message: {detail}")]
    Rejected {
        /// Provider name, for the server-side log
        provider: &'static str,

        /// Status line and error body returned by the provider
        detail: String,
    },

    /// Unknown error
    #[error(transparent)]
    Unknown(anyhow::Error),
}

impl From<anyhow::Error> for SendError {
    fn from(err: anyhow::Error) -> Self {
        SendError::Unknown(err)
    }
}

impl From<AddressError> for SendError {
    fn from(err: AddressError) -> Self {
        SendError::Unknown(err.into())
    }
}

impl From<lettre::error::Error> for SendError {
    fn from(err: lettre::error::Error) -> Self {
        SendError::Unknown(err.into())
    }
}

impl From<lettre::transport::smtp::Error> for SendError {
    fn from(err: lettre::transport::smtp::Error) -> Self {
        SendError::Unknown(err.into())
    }
}

impl From<reqwest::Error> for SendError {
    fn from(err: reqwest::Error) -> Self {
        SendError::Unknown(err.into())
    }
}
