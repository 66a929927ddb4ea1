//! Send email handler
//!
//! Boundary for the contact form on the Call to Action block. Validates the
//! submitted address, builds the notification envelope, and hands it to the
//! dispatcher; transport detail never reaches the response.

use axum::{
    extract::{rejection::JsonRejection, State},
    Json,
};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::{
    domain::notifications::{EmailAddress, Mailer, Message},
    infrastructure::http::{errors::ApiError, state::AppState},
};

/// Send email request body
#[derive(Clone, Debug, Serialize, Deserialize, ToSchema)]
pub struct SendEmailBody {
    /// The submitted email address
    #[schema(example = "email@example.com")]
    email: String,
}

/// Send email response body
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct SendEmailResponse {
    /// Outcome message
    #[schema(example = "Email sent successfully")]
    pub message: String,
}

/// Send a contact-form notification email
#[utoipa::path(
    post,
    operation_id = "send_email",
    tag = "Notifications",
    path = "/api/v1/send-email",
    request_body = SendEmailBody,
    responses(
        (status = StatusCode::OK, description = "Email sent", body = SendEmailResponse, example = json!({"message": "Email sent successfully"})),
        (status = StatusCode::BAD_REQUEST, description = "Invalid email address", body = ErrorResponse, example = json!({"message": "Invalid email address"})),
        (status = StatusCode::INTERNAL_SERVER_ERROR, description = "Dispatch failed", body = ErrorResponse, example = json!({"message": "Failed to send email"})),
    )
)]
pub async fn handler<M: Mailer>(
    State(state): State<AppState<M>>,
    request: Result<Json<SendEmailBody>, JsonRejection>,
) -> Result<Json<SendEmailResponse>, ApiError> {
    let Json(request) = request?;

    let submitter = EmailAddress::new(&request.email)?;

    let message = Message::call_to_action_submission(
        state.config.recipient.clone(),
        state.config.sender.clone(),
        &submitter,
    );

    if !state.notifications.dispatch(&message).await {
        return Err(ApiError::new_500("Failed to send email"));
    }

    Ok(Json(SendEmailResponse {
        message: "Email sent successfully".to_string(),
    }))
}
