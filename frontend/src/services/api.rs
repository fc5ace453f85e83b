//! HTTP client for the Paper Vault endpoints.
//!
//! Every endpoint answers JSON. The form endpoints (`/upload`,
//! `/feedback`) may answer an error status with a `{status, message}`
//! body, which is still a usable reply; anything unparseable is an error.

use gloo_net::http::{Request, Response};
use serde::de::DeserializeOwned;
use web_sys::FormData;

use crate::config::{BACKEND_URL, BOOKMARK_ENDPOINT, FEEDBACK_ENDPOINT, UPLOAD_ENDPOINT};
use crate::state::feedback::FeedbackFields;
use crate::state::submission::PaperSubmission;
use crate::types::{AppError, AppResult, BookmarkReply, BookmarkStatus, ServerReply};

/// Requests the page scripts make to the server.
///
/// Implemented over HTTP by [`HttpApi`]; tests substitute in-memory fakes.
#[allow(async_fn_in_trait)]
pub trait PaperApi {
    /// POST the paper form with its uploaded file.
    async fn submit_paper(&self, submission: &PaperSubmission) -> AppResult<ServerReply>;

    /// Flip the bookmark of a paper for the signed-in user.
    async fn toggle_bookmark(&self, paper_id: u64) -> AppResult<BookmarkStatus>;

    /// POST the feedback form.
    async fn send_feedback(&self, feedback: &FeedbackFields) -> AppResult<ServerReply>;
}

/// [`PaperApi`] over `fetch`.
#[derive(Clone, Debug)]
pub struct HttpApi {
    base_url: String,
}

impl Default for HttpApi {
    fn default() -> Self {
        Self::new(BACKEND_URL)
    }
}

impl HttpApi {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
        }
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url.trim_end_matches('/'), path)
    }

    async fn post_form<T: DeserializeOwned>(&self, path: &str, fields: &[(&str, String)]) -> AppResult<T> {
        let form_data = build_form_data(fields)?;
        let url = self.url(path);

        let response = Request::post(&url)
            .body(form_data)
            .map_err(|e| AppError::Network(format!("Failed to build request: {}", e)))?
            .send()
            .await
            .map_err(|e| AppError::Network(format!("HTTP request failed: {}", e)))?;

        read_reply(response, true).await
    }
}

impl PaperApi for HttpApi {
    async fn submit_paper(&self, submission: &PaperSubmission) -> AppResult<ServerReply> {
        log::info!("📤 Submitting paper '{}'", submission.fields.title);
        self.post_form(UPLOAD_ENDPOINT, &submission.form_fields()?).await
    }

    async fn toggle_bookmark(&self, paper_id: u64) -> AppResult<BookmarkStatus> {
        let url = self.url(&format!("{}/{}", BOOKMARK_ENDPOINT, paper_id));

        let response = Request::post(&url)
            .header("Content-Type", "application/json")
            .send()
            .await
            .map_err(|e| AppError::Network(format!("HTTP request failed: {}", e)))?;

        let reply: BookmarkReply = read_reply(response, false).await?;
        Ok(reply.status)
    }

    async fn send_feedback(&self, feedback: &FeedbackFields) -> AppResult<ServerReply> {
        log::info!("✉️ Sending feedback");
        self.post_form(FEEDBACK_ENDPOINT, &feedback.form_fields()).await
    }
}

fn build_form_data(fields: &[(&str, String)]) -> AppResult<FormData> {
    let form_data =
        FormData::new().map_err(|e| AppError::Dom(format!("Failed to create FormData: {:?}", e)))?;

    for (name, value) in fields {
        form_data
            .append_with_str(name, value)
            .map_err(|e| AppError::Dom(format!("Failed to append '{}': {:?}", name, e)))?;
    }

    Ok(form_data)
}

async fn read_reply<T: DeserializeOwned>(response: Response, accept_error_body: bool) -> AppResult<T> {
    let status = response.status();
    let ok = response.ok();
    let text = response
        .text()
        .await
        .map_err(|e| AppError::Network(format!("Failed to read response: {}", e)))?;

    parse_reply(status, ok || accept_error_body, &text)
}

/// Decode a response body. Non-2xx statuses are errors unless `accept` is set.
fn parse_reply<T: DeserializeOwned>(status: u16, accept: bool, body: &str) -> AppResult<T> {
    if !accept {
        return Err(AppError::Server {
            status,
            message: body.to_string(),
        });
    }

    serde_json::from_str(body).map_err(|e| AppError::Server {
        status,
        message: format!("Failed to parse response: {}", e),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reply_deserialization() {
        let json = r#"{
            "status": "success",
            "message": "Paper uploaded successfully! It will be visible after admin approval.",
            "redirect": "/papers/42"
        }"#;

        let reply: ServerReply = parse_reply(200, true, json).unwrap();
        assert!(reply.is_success());
        assert_eq!(reply.redirect.as_deref(), Some("/papers/42"));
    }

    #[test]
    fn test_error_body_is_a_reply() {
        let reply: ServerReply =
            parse_reply(400, true, r#"{"status": "error", "message": "Invalid year"}"#).unwrap();
        assert!(!reply.is_success());
        assert_eq!(reply.message.as_deref(), Some("Invalid year"));
        assert_eq!(reply.redirect, None);
    }

    #[test]
    fn test_unparseable_or_rejected_bodies() {
        let html = parse_reply::<ServerReply>(500, true, "<html>Internal Server Error</html>");
        assert!(matches!(html, Err(AppError::Server { status: 500, .. })));

        let rejected = parse_reply::<BookmarkReply>(401, false, r#"{"status": "added"}"#);
        assert!(matches!(rejected, Err(AppError::Server { status: 401, .. })));
    }

    #[test]
    fn test_url_joining() {
        assert_eq!(HttpApi::default().url("/upload"), "/upload");
        assert_eq!(HttpApi::new("http://localhost:5000/").url("/feedback"), "http://localhost:5000/feedback");
    }
}
