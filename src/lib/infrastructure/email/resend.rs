//! Resend mail transport

use async_trait::async_trait;
use serde::Serialize;

use crate::{
    domain::notifications::{Mailer, Message, SendError},
    infrastructure::email::SEND_TIMEOUT,
};

const RESEND_API_URL: &str = "https://api.resend.com/emails";

/// Sends mail through the Resend REST API
#[derive(Clone, Debug)]
pub struct ResendMailer {
    api_key: Option<String>,
    endpoint: String,
    client: reqwest::Client,
}

#[derive(Debug, Serialize)]
struct ResendRequest<'a> {
    to: &'a str,
    from: &'a str,
    subject: &'a str,
    text: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    html: Option<&'a str>,
}

impl ResendMailer {
    /// Create a new Resend mailer
    pub fn new(api_key: Option<String>) -> anyhow::Result<Self> {
        Self::with_endpoint(api_key, RESEND_API_URL)
    }

    fn with_endpoint(api_key: Option<String>, endpoint: &str) -> anyhow::Result<Self> {
        Ok(Self {
            api_key,
            endpoint: endpoint.to_string(),
            client: reqwest::Client::builder().timeout(SEND_TIMEOUT).build()?,
        })
    }
}

#[async_trait]
impl Mailer for ResendMailer {
    async fn send(&self, message: &Message) -> Result<(), SendError> {
        let Some(api_key) = self.api_key.as_deref() else {
            return Err(SendError::MissingCredentials { provider: "resend" });
        };

        let body = ResendRequest {
            to: message.to.as_str(),
            from: message.from.as_str(),
            subject: &message.subject,
            text: &message.text,
            html: message.html.as_deref(),
        };

        let response = self
            .client
            .post(&self.endpoint)
            .bearer_auth(api_key)
            .json(&body)
            .send()
            .await?;

        let status = response.status();

        if !status.is_success() {
            let detail = response.text().await.unwrap_or_default();

            return Err(SendError::Rejected {
                provider: "resend",
                detail: format!("{status}: {detail}"),
            });
        }

        Ok(())
    }
}
