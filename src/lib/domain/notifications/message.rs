//! Notification message

use chrono::Utc;

use crate::domain::notifications::EmailAddress;

/// The envelope handed to a mail transport
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Message {
    /// The recipient of the email
    pub to: EmailAddress,

    /// The sender of the email
    pub from: EmailAddress,

    /// The subject of the email
    pub subject: String,

    /// The plain text body of the email
    pub text: String,

    /// The HTML body of the email, if any
    pub html: Option<String>,
}

impl Message {
    /// Notification for a contact-form submission from the Call to Action block
    pub fn call_to_action_submission(
        to: EmailAddress,
        from: EmailAddress,
        submitter: &EmailAddress,
    ) -> Self {
        let submitted_at = Utc::now().to_rfc2822();

        Self {
            to,
            from,
            subject: "New email submission from Call to Action block".to_string(),
            text: format!("A new email submission was received from: {submitter}"),
            html: Some(format!(
                "<h2>New Email Submission</h2>\n\
                 <p><strong>From:</strong> {submitter}</p>\n\
                 <p><strong>Time:</strong> {submitted_at}</p>\n\
                 <p><strong>Source:</strong> Call to Action block on website</p>"
            )),
        }
    }
}
