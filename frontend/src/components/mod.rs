//! UI Components for the Paper Vault page scripts.
//!
//! This module contains the Leptos components and the handlers wired onto
//! server-rendered markup, organized by function:
//!
//! # Leptos Components
//! - [`NotificationStack`] - Auto-dismissing notices (with [`Notifier`])
//! - [`ThemeToggle`] - Navbar dark mode button
//! - [`UploadPaperForm`] - Upload widget, progress/result regions and paper form
//! - [`FeedbackForm`] - Feedback modal form
//!
//! # Page Wiring
//! - [`init_bookmark_buttons`] - Bookmark toggle buttons
//! - [`init_flash_messages`], [`init_card_animations`], [`init_admin_modals`]

mod bookmarks;
mod feedback;
mod notifications;
mod page;
mod theme_toggle;
mod upload;

pub use bookmarks::*;
pub use feedback::*;
pub use notifications::*;
pub use page::*;
pub use theme_toggle::*;
pub use upload::*;
