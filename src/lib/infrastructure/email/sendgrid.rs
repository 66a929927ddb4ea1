//! SendGrid mail transport

use async_trait::async_trait;
use serde::Serialize;

use crate::{
    domain::notifications::{Mailer, Message, SendError},
    infrastructure::email::SEND_TIMEOUT,
};

const SENDGRID_API_URL: &str = "https://api.sendgrid.com/v3/mail/send";

/// Sends mail through the SendGrid v3 REST API
#[derive(Clone, Debug)]
pub struct SendGridMailer {
    api_key: Option<String>,
    endpoint: String,
    client: reqwest::Client,
}

#[derive(Debug, Serialize)]
struct SendGridRequest<'a> {
    personalizations: Vec<Personalization<'a>>,
    from: Recipient<'a>,
    subject: &'a str,
    content: Vec<Content<'a>>,
}

#[derive(Debug, Serialize)]
struct Personalization<'a> {
    to: Vec<Recipient<'a>>,
}

#[derive(Debug, Serialize)]
struct Recipient<'a> {
    email: &'a str,
}

#[derive(Debug, Serialize)]
struct Content<'a> {
    #[serde(rename = "type")]
    kind: &'a str,
    value: &'a str,
}

impl<'a> SendGridRequest<'a> {
    /// SendGrid requires the plain-text part to precede the HTML part
    fn from_message(message: &'a Message) -> Self {
        let mut content = vec![Content {
            kind: "text/plain",
            value: &message.text,
        }];

        if let Some(html) = message.html.as_deref() {
            content.push(Content {
                kind: "text/html",
                value: html,
            });
        }

        Self {
            personalizations: vec![Personalization {
                to: vec![Recipient {
                    email: message.to.as_str(),
                }],
            }],
            from: Recipient {
                email: message.from.as_str(),
            },
            subject: &message.subject,
            content,
        }
    }
}

impl SendGridMailer {
    /// Create a new SendGrid mailer
    pub fn new(api_key: Option<String>) -> anyhow::Result<Self> {
        Self::with_endpoint(api_key, SENDGRID_API_URL)
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
impl Mailer for SendGridMailer {
    async fn send(&self, message: &Message) -> Result<(), SendError> {
        let Some(api_key) = self.api_key.as_deref() else {
            return Err(SendError::MissingCredentials {
                provider: "sendgrid",
            });
        };

        let response = self
            .client
            .post(&self.endpoint)
            .bearer_auth(api_key)
            .json(&SendGridRequest::from_message(message))
            .send()
            .await?;

        let status = response.status();

        if !status.is_success() {
            let detail = response.text().await.unwrap_or_default();

            return Err(SendError::Rejected {
                provider: "sendgrid",
                detail: format!("{status}: {detail}"),
            });
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use axum::{http::StatusCode, routing::post, Json, Router};
    use serde_json::json;
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

    /// Serve a stand-in for the provider API on an ephemeral port
    async fn spawn_provider(status: StatusCode) -> String {
        let app = Router::new().route(
            "/v3/mail/send",
            post(move || async move {
                (status, Json(json!({ "errors": [{ "message": "boom" }] })))
            }),
        );

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let address = listener.local_addr().unwrap();

        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });

        format!("http://{address}/v3/mail/send")
    }

    #[tokio::test]
    async fn test_missing_api_key_is_a_configuration_error() -> TestResult {
        let mailer = SendGridMailer::new(None)?;

        let result = mailer.send(&submission()?).await;

        assert!(matches!(
            result.unwrap_err(),
            SendError::MissingCredentials {
                provider: "sendgrid",
            }
        ));

        Ok(())
    }

    #[tokio::test]
    async fn test_successful_send() -> TestResult {
        let endpoint = spawn_provider(StatusCode::ACCEPTED).await;
        let mailer = SendGridMailer::with_endpoint(Some("SG.123".to_string()), &endpoint)?;

        mailer.send(&submission()?).await?;

        Ok(())
    }

    #[tokio::test]
    async fn test_non_2xx_response_is_rejected() -> TestResult {
        let endpoint = spawn_provider(StatusCode::BAD_REQUEST).await;
        let mailer = SendGridMailer::with_endpoint(Some("SG.123".to_string()), &endpoint)?;

        let result = mailer.send(&submission()?).await;

        match result.unwrap_err() {
            SendError::Rejected { provider, detail } => {
                assert_eq!(provider, "sendgrid");
                assert!(detail.contains("400"));
                assert!(detail.contains("boom"));
            }
            err => panic!("expected a rejection, got {err:?}"),
        }

        Ok(())
    }

    #[test]
    fn test_request_body_shape() -> TestResult {
        let message = submission()?;
        let html = message.html.clone().expect("submission has an HTML body");

        let value = serde_json::to_value(SendGridRequest::from_message(&message))?;

        assert_eq!(
            value,
            json!({
                "personalizations": [{ "to": [{ "email": "luk@lenoweb.be" }] }],
                "from": { "email": "noreply@yourdomain.com" },
                "subject": "New email submission from Call to Action block",
                "content": [
                    { "type": "text/plain", "value": message.text },
                    { "type": "text/html", "value": html },
                ],
            })
        );

        Ok(())
    }

    #[test]
    fn test_request_body_omits_missing_html() -> TestResult {
        let mut message = submission()?;
        message.html = None;

        let value = serde_json::to_value(SendGridRequest::from_message(&message))?;

        assert_eq!(
            value["content"],
            json!([{ "type": "text/plain", "value": message.text }])
        );

        Ok(())
    }
}
