//! Upload-flow coordinator.
//!
//! Tracks one upload attempt through the hosted widget:
//!
//! ```text
//!            upload-added / queues-start
//!   Idle ───────────────────────────────▶ InProgress
//!    ▲  ▲                                   │    │
//!    │  └──────── abort / error ────────────┘    │ success
//!    │                                            ▼
//!    └────────────── remove file ─────────── Result
//! ```
//!
//! `success` is accepted from any state. The widget's event order is not
//! guaranteed, and the latest stored file always wins.

use serde_json::Value;

use crate::types::{Notice, UploadedFile};

/// Which of the three upload regions is visible.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum UploadFlowState {
    /// Widget button shown, nothing in flight
    #[default]
    Idle,
    /// The widget is uploading
    InProgress,
    /// A file is stored and summarized
    Result,
}

/// Event delivered by the upload widget callback.
#[derive(Clone, Debug, PartialEq)]
pub enum WidgetEvent {
    UploadAdded,
    QueuesStart,
    Success(UploadedFile),
    Abort,
    /// Error payload, with the widget's message when it gave one
    Failed(Option<String>),
    /// Any other widget event (`display-changed`, `close`, ...)
    Other(String),
}

impl WidgetEvent {
    /// Interpret the `(error, result)` pair passed to the widget callback.
    ///
    /// An error payload wins over the result. Returns `None` when the
    /// callback carried neither.
    pub fn from_callback(error: Option<Value>, result: Option<Value>) -> Option<Self> {
        if let Some(error) = error.filter(|e| !e.is_null()) {
            let message = error
                .get("message")
                .or_else(|| error.get("statusText"))
                .and_then(|m| m.as_str())
                .or_else(|| error.as_str())
                .filter(|m| !m.is_empty())
                .map(str::to_string);
            return Some(WidgetEvent::Failed(message));
        }

        let result = result.filter(|r| !r.is_null())?;
        let event = result.get("event").and_then(|e| e.as_str()).unwrap_or_default();

        Some(match event {
            "upload-added" => WidgetEvent::UploadAdded,
            "queues-start" => WidgetEvent::QueuesStart,
            "abort" => WidgetEvent::Abort,
            "success" => {
                let info = result.get("info").cloned().unwrap_or(Value::Null);
                match serde_json::from_value::<UploadedFile>(info) {
                    Ok(file) => WidgetEvent::Success(file),
                    Err(e) => {
                        log::error!("Unreadable upload info: {}", e);
                        WidgetEvent::Failed(None)
                    }
                }
            }
            other => WidgetEvent::Other(other.to_string()),
        })
    }

    /// Event for a callback whose result could not be read.
    ///
    /// A lost `success`, or a result without a readable name, counts as a
    /// failed upload so the progress region does not stay up.
    pub fn from_unreadable(event: Option<&str>) -> Self {
        match event {
            Some("upload-added") => WidgetEvent::UploadAdded,
            Some("queues-start") => WidgetEvent::QueuesStart,
            Some("abort") => WidgetEvent::Abort,
            Some("success") | None => WidgetEvent::Failed(None),
            Some(other) => WidgetEvent::Other(other.to_string()),
        }
    }
}

/// Whether the paper form may be submitted.
///
/// Derived from the presence of an uploaded file; never stored.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SubmitGate(bool);

impl SubmitGate {
    pub fn is_ready(&self) -> bool {
        self.0
    }
}

/// State of the upload region for the lifetime of the page.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct UploadFlow {
    state: UploadFlowState,
    file: Option<UploadedFile>,
}

impl UploadFlow {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> UploadFlowState {
        self.state
    }

    /// The stored file, if an upload succeeded and was not removed.
    pub fn file(&self) -> Option<&UploadedFile> {
        self.file.as_ref()
    }

    pub fn gate(&self) -> SubmitGate {
        SubmitGate(self.file.is_some())
    }

    /// Apply a widget event. Returns the notice to show, if any.
    pub fn handle(&mut self, event: WidgetEvent) -> Option<Notice> {
        match event {
            WidgetEvent::UploadAdded | WidgetEvent::QueuesStart => {
                log::debug!("Upload started");
                self.state = UploadFlowState::InProgress;
                None
            }
            WidgetEvent::Success(file) => {
                log::info!("✅ Upload successful: {}", file.original_filename);
                self.file = Some(file);
                self.state = UploadFlowState::Result;
                None
            }
            WidgetEvent::Abort => {
                log::info!("Upload aborted");
                self.leave_progress();
                Some(Notice::danger("Upload was cancelled"))
            }
            WidgetEvent::Failed(message) => {
                log::error!("❌ Upload widget error: {:?}", message);
                self.leave_progress();
                let reason = message.unwrap_or_else(|| "Please try again".to_string());
                Some(Notice::danger(format!("Upload failed: {}", reason)))
            }
            WidgetEvent::Other(name) => {
                log::debug!("Ignoring widget event '{}'", name);
                None
            }
        }
    }

    /// Drop the stored file and go back to the widget button.
    pub fn remove_file(&mut self) {
        self.file = None;
        self.state = UploadFlowState::Idle;
    }

    // A file kept from an earlier upload stays on display.
    fn leave_progress(&mut self) {
        if self.state == UploadFlowState::InProgress {
            self.state = if self.file.is_some() {
                UploadFlowState::Result
            } else {
                UploadFlowState::Idle
            };
        }
    }
}
