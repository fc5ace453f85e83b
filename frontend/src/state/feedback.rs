//! Feedback form submission.

use crate::services::api::PaperApi;
use crate::types::{AppResult, Notice, ServerReply};

/// Values of the feedback form.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FeedbackFields {
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
}

impl FeedbackFields {
    /// Multipart fields of the `/feedback` request.
    pub fn form_fields(&self) -> Vec<(&'static str, String)> {
        vec![
            ("name", self.name.clone()),
            ("email", self.email.clone()),
            ("subject", self.subject.clone()),
            ("message", self.message.clone()),
        ]
    }
}

/// What the form does once the server answered.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FeedbackOutcome {
    pub notice: Notice,
    /// Clear the fields and close the modal
    pub sent: bool,
}

impl FeedbackOutcome {
    pub fn from_reply(reply: AppResult<ServerReply>) -> Self {
        match reply {
            Ok(reply) if reply.is_success() => Self {
                notice: Notice::success(reply.message.unwrap_or_else(|| "Thank you for your feedback!".into())),
                sent: true,
            },
            Ok(reply) => Self {
                notice: Notice::danger(reply.message.unwrap_or_else(|| "Failed to send feedback".into())),
                sent: false,
            },
            Err(e) => {
                log::error!("Feedback error: {}", e);
                Self {
                    notice: Notice::danger("Network error. Please try again."),
                    sent: false,
                }
            }
        }
    }
}

/// Post the feedback form.
pub async fn send_feedback<A: PaperApi>(api: &A, fields: &FeedbackFields) -> FeedbackOutcome {
    FeedbackOutcome::from_reply(api.send_feedback(fields).await)
}
