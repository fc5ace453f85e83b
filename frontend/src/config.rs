//! Application configuration.
//!
//! Centralized configuration for the Paper Vault page scripts.
//! Endpoints are relative to the page origin since the bundle is served
//! by the same application that renders the pages. Upload widget
//! credentials are not compiled in: they are read at runtime from the
//! upload anchor (see [`crate::types::UploadWidgetConfig`]).

/// Backend API base URL.
///
/// Empty means same origin.
pub const BACKEND_URL: &str = "";

/// Paper submission endpoint.
pub const UPLOAD_ENDPOINT: &str = "/upload";

/// Bookmark toggle endpoint, suffixed with `/{paper_id}`.
pub const BOOKMARK_ENDPOINT: &str = "/toggle_bookmark";

/// Feedback submission endpoint.
pub const FEEDBACK_ENDPOINT: &str = "/feedback";

/// Path of the page listing the user's bookmarks.
///
/// Un-bookmarking a paper on this page also removes its card.
pub const BOOKMARKS_PAGE: &str = "/bookmarks";

/// `localStorage` key holding the theme preference.
pub const THEME_STORAGE_KEY: &str = "theme";

/// Lifetime of a notification overlay (ms).
pub const NOTIFICATION_TIMEOUT_MS: u32 = 5_000;

/// Lifetime of server-rendered flash messages (ms).
pub const FLASH_TIMEOUT_MS: u32 = 5_000;

/// Delay before following the redirect of a successful submission (ms).
pub const REDIRECT_DELAY_MS: u32 = 2_000;

/// Duration of the shrink/fade animation of a removed bookmark card (ms).
pub const CARD_REMOVAL_MS: u32 = 300;

/// Stagger between card fade-in animations (seconds).
pub const CARD_ANIMATION_STEP_SECS: f64 = 0.1;

// =============================================================================
// Upload widget
// =============================================================================

/// Maximum file size accepted by the upload widget (in bytes).
///
/// 16 MB limit.
pub const MAX_FILE_SIZE: u64 = 16_000_000;

/// File formats the upload widget lets the user pick.
pub const ALLOWED_FORMATS: &[&str] = &["pdf", "doc", "docx", "jpg", "jpeg", "png"];

// =============================================================================
// Host page anchors
// =============================================================================

/// Element the upload form is mounted into. Carries the widget credentials
/// as `data-cloud-name` / `data-upload-preset`.
pub const UPLOAD_ANCHOR_ID: &str = "upload-root";

/// Element the feedback form is mounted into.
pub const FEEDBACK_ANCHOR_ID: &str = "feedback-root";

/// Bootstrap modal wrapping the feedback form.
pub const FEEDBACK_MODAL_ID: &str = "feedbackModal";

/// Id of the navbar theme toggle button.
pub const THEME_TOGGLE_ID: &str = "themeToggle";

/// Elements that get a Bootstrap tooltip.
pub const TOOLTIP_SELECTOR: &str = r#"[data-bs-toggle="tooltip"]"#;

// =============================================================================
// Button labels
// =============================================================================

pub const SUBMIT_LABEL: &str = "Upload Paper";
pub const SUBMIT_BUSY_LABEL: &str = "Uploading...";
pub const FEEDBACK_LABEL: &str = "Send Feedback";
pub const FEEDBACK_BUSY_LABEL: &str = "Sending...";
