//! Common types used across the frontend application.
//!
//! This module centralizes type definitions to avoid duplication
//! and ensure consistency across components.
//!
//! # Categories
//!
//! - **Notice Types** - Transient messages shown to the user
//! - **Upload Types** - Widget configuration and uploaded file descriptor
//! - **API Types** - Server response structures
//! - **Error Types** - Frontend error handling

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use thiserror::Error;

// =============================================================================
// Notice Types
// =============================================================================

/// Severity of a notice.
///
/// Maps onto the Bootstrap alert variants.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NoticeKind {
    /// Operation completed
    Success,
    /// Neutral information
    Info,
    /// Something needs attention
    Warning,
    /// Operation failed
    Danger,
}

impl NoticeKind {
    /// Get CSS class for styling.
    pub fn css_class(&self) -> &'static str {
        match self {
            NoticeKind::Success => "alert-success",
            NoticeKind::Info => "alert-info",
            NoticeKind::Warning => "alert-warning",
            NoticeKind::Danger => "alert-danger",
        }
    }
}

/// A message to show on the notification surface.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Notice {
    pub kind: NoticeKind,
    pub message: String,
}

impl Notice {
    pub fn new(kind: NoticeKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }

    pub fn success(message: impl Into<String>) -> Self {
        Self::new(NoticeKind::Success, message)
    }

    pub fn info(message: impl Into<String>) -> Self {
        Self::new(NoticeKind::Info, message)
    }

    pub fn danger(message: impl Into<String>) -> Self {
        Self::new(NoticeKind::Danger, message)
    }
}

// =============================================================================
// Upload Types
// =============================================================================

/// Credentials for the hosted upload widget.
///
/// Both fields are required; see [`UploadWidgetConfig::new`].
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct UploadWidgetConfig {
    pub cloud_name: String,
    pub upload_preset: String,
}

impl UploadWidgetConfig {
    /// Build a config from possibly-missing values.
    ///
    /// Blank values count as missing.
    pub fn new(cloud_name: Option<String>, upload_preset: Option<String>) -> AppResult<Self> {
        let cloud_name = cloud_name.map(|v| v.trim().to_string()).unwrap_or_default();
        let upload_preset = upload_preset.map(|v| v.trim().to_string()).unwrap_or_default();

        match (cloud_name.is_empty(), upload_preset.is_empty()) {
            (false, false) => Ok(Self {
                cloud_name,
                upload_preset,
            }),
            (true, true) => Err(AppError::Config("cloud name and upload preset missing".into())),
            (true, false) => Err(AppError::Config("cloud name missing".into())),
            (false, true) => Err(AppError::Config("upload preset missing".into())),
        }
    }
}

/// Metadata of a file stored by the upload widget.
///
/// Produced by a `success` widget event. Fields this crate does not
/// interpret (public id, secure URL, resource type...) are kept in
/// `extra` and sent back to the server untouched.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct UploadedFile {
    /// Name of the file on the user's machine
    #[serde(default)]
    pub original_filename: String,
    /// Size in bytes
    #[serde(default)]
    pub bytes: u64,
    /// Extension reported by the storage service (e.g. `pdf`)
    #[serde(default)]
    pub format: String,
    /// Passthrough fields
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

// =============================================================================
// API Response Types
// =============================================================================

/// Generic `{status, message, redirect}` reply of the form endpoints.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServerReply {
    /// "success" or anything else
    pub status: String,
    #[serde(default)]
    pub message: Option<String>,
    /// Where to go next (paper submission only)
    #[serde(default)]
    pub redirect: Option<String>,
}

impl ServerReply {
    pub fn is_success(&self) -> bool {
        self.status == "success"
    }
}

/// Reply of the bookmark toggle endpoint.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BookmarkStatus {
    Added,
    Removed,
    #[serde(other)]
    Unknown,
}

#[derive(Deserialize)]
pub(crate) struct BookmarkReply {
    pub status: BookmarkStatus,
}

// =============================================================================
// Error Types
// =============================================================================

/// Frontend application errors.
///
/// Unified error type for all frontend operations.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum AppError {
    /// Upload widget credentials missing.
    #[error("Upload configuration error: {0}")]
    Config(String),

    /// The widget script is not on the page.
    #[error("Upload widget library not loaded")]
    WidgetUnavailable,

    /// The widget threw.
    #[error("Upload widget error: {0}")]
    Widget(String),

    /// Invalid user input.
    #[error("Validation error: {0}")]
    Validation(String),

    /// Request never got a response.
    #[error("Network error: {0}")]
    Network(String),

    /// Unusable response.
    #[error("Server error ({status}): {message}")]
    Server { status: u16, message: String },

    /// `localStorage` unavailable or refused the write.
    #[error("Storage error: {0}")]
    Storage(String),

    /// Expected page element missing or of the wrong type.
    #[error("DOM error: {0}")]
    Dom(String),
}

impl AppError {
    /// Text shown to the user for errors of the upload widget setup.
    pub fn user_message(&self) -> String {
        match self {
            AppError::Config(_) => "Upload configuration error. Please contact administrator.".into(),
            AppError::WidgetUnavailable => "Upload service not available. Please refresh the page.".into(),
            AppError::Widget(_) => "Failed to initialize upload service. Please refresh the page.".into(),
            AppError::Validation(msg) => msg.clone(),
            other => other.to_string(),
        }
    }
}

/// Result type alias for frontend operations.
pub type AppResult<T> = Result<T, AppError>;
