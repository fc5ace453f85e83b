//! Paper Vault - Frontend Rust/Leptos page scripts
//!
//! A WebAssembly bundle loaded into the server-rendered pages of the
//! Paper Vault question-paper library. Instead of owning the whole page
//! it mounts small components into anchors the templates provide and
//! wires handlers onto server-rendered markup.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  server-rendered page                                       │
//! ├─────────────────────────────────────────────────────────────┤
//! │  .navbar .container      ← ThemeToggle                      │
//! │  #upload-root            ← UploadPaperForm                  │
//! │  │   ├── widget / progress / result regions                 │
//! │  │   └── paper details + guarded submit                     │
//! │  #feedback-root          ← FeedbackForm                     │
//! │  .bookmark-btn           ← click handlers                   │
//! │  .flash-messages .alert  ← auto-dismiss                     │
//! │  [data-bs-toggle=tooltip] ← Bootstrap tooltips              │
//! ├─────────────────────────────────────────────────────────────┤
//! │  body                    ← NotificationStack                │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! # Modules
//!
//! - [`types`] - Common types (Notice, UploadedFile, AppError, etc.)
//! - [`state`] - Browser-independent UI state and transitions
//! - [`components`] - Leptos components and page wiring
//! - [`services`] - Server API, upload widget, storage, DOM helpers

use leptos::*;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::HtmlElement;

// =============================================================================
// Module declarations
// =============================================================================

pub mod config;
pub mod types;
pub mod state;
pub mod components;
pub mod services;

// =============================================================================
// Re-exports
// =============================================================================

// Configuration
pub use config::*;

// Types
pub use types::{
    // Notices
    Notice, NoticeKind,
    // Upload
    UploadWidgetConfig, UploadedFile,
    // API
    BookmarkStatus, ServerReply,
    // Errors
    AppError, AppResult,
};

// Components
pub use components::*;

// =============================================================================
// Application Entry Point
// =============================================================================

/// Wire every page feature present on the current page.
#[wasm_bindgen]
pub fn boot() {
    // Setup panic hook for better error messages
    console_error_panic_hook::set_once();

    // Setup console logging
    _ = console_log::init_with_level(log::Level::Debug);

    log::info!("📚 Paper Vault - wiring page scripts");

    let notifier = Notifier::new();
    mount_to_body(move || view! { <NotificationStack notifier=notifier/> });

    init_theme();
    services::dom::init_tooltips();
    init_flash_messages();
    init_bookmark_buttons(notifier);
    init_card_animations();
    init_admin_modals();

    if let Some(anchor) = anchor(UPLOAD_ANCHOR_ID) {
        log::info!("Upload page detected, initializing upload functionality");
        let config = services::dom::widget_config_from(&anchor);
        mount_to(anchor, move || view! { <UploadPaperForm config=config notifier=notifier/> });
    }

    if let Some(anchor) = anchor(FEEDBACK_ANCHOR_ID) {
        mount_to(anchor, move || view! { <FeedbackForm notifier=notifier/> });
    }

    log::info!("✅ Page scripts initialized");
}

fn anchor(id: &str) -> Option<HtmlElement> {
    services::dom::element_by_id(id).and_then(|el| el.dyn_into::<HtmlElement>().ok())
}

/// Apply the saved theme and put a toggle in the navbar.
fn init_theme() {
    let theme = services::storage::load_theme();
    services::storage::apply_theme(theme);

    if let Some(existing) = services::dom::element_by_id(THEME_TOGGLE_ID) {
        wire_theme_button(existing);
        return;
    }

    let navbar = services::dom::query_all(".navbar .container .navbar-nav:last-child")
        .into_iter()
        .chain(services::dom::query_all(".navbar .container"))
        .find_map(|el| el.dyn_into::<HtmlElement>().ok());

    match navbar {
        Some(navbar) => mount_to(navbar, move || view! { <ThemeToggle initial=theme/> }),
        None => log::debug!("No navbar, theme toggle not mounted"),
    }
}
