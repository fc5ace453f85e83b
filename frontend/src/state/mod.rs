//! Browser-independent state of the page scripts.
//!
//! Every piece of UI state lives here as a plain value with its
//! transitions, so it can be tested without a DOM. Components and
//! services only render these values and feed events into them.
//!
//! - [`upload_flow`] - Upload widget coordinator and submit gate
//! - [`upload_view`] - Widget / progress / result regions
//! - [`submission`] - Paper form validation and busy guard
//! - [`notifications`] - Auto-dismissing notices
//! - [`bookmark`] - Bookmark button updates
//! - [`feedback`] - Feedback form outcome
//! - [`theme`] - Light/dark preference

pub mod bookmark;
pub mod feedback;
pub mod notifications;
pub mod submission;
pub mod theme;
pub mod upload_flow;
pub mod upload_view;

pub use notifications::{Notification, NotificationQueue};
pub use submission::{PaperFields, SubmissionGuard, SubmitOutcome};
pub use theme::Theme;
pub use upload_flow::{SubmitGate, UploadFlow, UploadFlowState, WidgetEvent};
pub use upload_view::{format_file_size, FileSummary, UploadPanels};
