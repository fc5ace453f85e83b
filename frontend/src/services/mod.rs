//! Browser and server services.
//!
//! This module provides services for external communication:
//!
//! # Services
//!
//! - [`api`] - Paper, bookmark and feedback endpoints
//! - [`widget`] - Cloudinary upload widget
//! - [`storage`] - Theme preference in `localStorage`
//! - [`dom`] - Queries and listeners on the server-rendered page
//!
//! # JavaScript Bindings
//!
//! Some services use JavaScript bindings located in `src/js/`:
//! - `upload_widget.js` - Cloudinary widget script
//! - `bootstrap.js` - Bootstrap modal and tooltip API

use wasm_bindgen::JsValue;

pub mod api;
pub mod dom;
pub mod storage;
pub mod widget;

pub use api::{HttpApi, PaperApi};
pub use widget::{CloudinaryWidget, UploadWidget};

/// Best-effort text of a thrown JavaScript value.
pub fn js_error_message(error: &JsValue) -> String {
    js_sys::Reflect::get(error, &"message".into())
        .ok()
        .and_then(|v| v.as_string())
        .or_else(|| error.as_string())
        .unwrap_or_else(|| "Unknown JS error".to_string())
}
