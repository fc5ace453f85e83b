//! Cloudinary upload widget integration.
//!
//! The widget script is loaded by the host page; we only create one
//! instance, open it on demand and translate its callback into
//! [`WidgetEvent`]s.

use serde::Serialize;
use serde_json::{json, Value};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;

use super::js_error_message;
use crate::config::{ALLOWED_FORMATS, MAX_FILE_SIZE};
use crate::state::WidgetEvent;
use crate::types::{AppError, AppResult, UploadWidgetConfig};

/// Something that can show an upload dialog.
pub trait UploadWidget {
    fn open(&self) -> AppResult<()>;
}

/// Options passed to `cloudinary.createUploadWidget`.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct WidgetOptions<'a> {
    cloud_name: &'a str,
    upload_preset: &'a str,
    sources: &'static [&'static str],
    multiple: bool,
    max_file_size: u64,
    client_allowed_formats: &'static [&'static str],
    cropping: bool,
    show_advanced_options: bool,
    show_insecure_preview: bool,
    show_upload_more_button: bool,
}

impl<'a> WidgetOptions<'a> {
    fn new(config: &'a UploadWidgetConfig) -> Self {
        Self {
            cloud_name: &config.cloud_name,
            upload_preset: &config.upload_preset,
            sources: &["local"],
            multiple: false,
            max_file_size: MAX_FILE_SIZE,
            client_allowed_formats: ALLOWED_FORMATS,
            cropping: false,
            show_advanced_options: false,
            show_insecure_preview: false,
            show_upload_more_button: false,
        }
    }
}

/// A live widget instance.
pub struct CloudinaryWidget {
    handle: JsValue,
    // Must outlive the widget, which keeps calling it.
    _on_event: Closure<dyn FnMut(JsValue, JsValue)>,
}

impl CloudinaryWidget {
    /// Create the widget, delivering its events to `on_event`.
    pub fn create(config: &UploadWidgetConfig, on_event: impl Fn(WidgetEvent) + 'static) -> AppResult<Self> {
        if !is_library_loaded_js() {
            log::error!("❌ Cloudinary library not loaded");
            return Err(AppError::WidgetUnavailable);
        }

        log::info!(
            "Initializing upload widget (cloud: {}, preset: {})",
            config.cloud_name,
            config.upload_preset
        );

        let options = serde_wasm_bindgen::to_value(&WidgetOptions::new(config))
            .map_err(|e| AppError::Widget(format!("Failed to serialize options: {}", e)))?;

        let on_event = Closure::wrap(Box::new(move |error: JsValue, result: JsValue| {
            let error = error_to_json(&error);
            let event = match result_to_json(&result) {
                Ok(result) => {
                    log::debug!("Widget callback: error={:?} result={:?}", error, result);
                    WidgetEvent::from_callback(error, result)
                }
                Err(name) if error.is_none() => Some(WidgetEvent::from_unreadable(name.as_deref())),
                Err(_) => WidgetEvent::from_callback(error, None),
            };

            if let Some(event) = event {
                on_event(event);
            }
        }) as Box<dyn FnMut(JsValue, JsValue)>);

        let handle = create_upload_widget_js(&options, on_event.as_ref().unchecked_ref())
            .map_err(|e| AppError::Widget(js_error_message(&e)))?;

        log::info!("✅ Upload widget created");

        Ok(Self {
            handle,
            _on_event: on_event,
        })
    }
}

impl UploadWidget for CloudinaryWidget {
    fn open(&self) -> AppResult<()> {
        log::info!("Opening upload widget");
        open_upload_widget_js(&self.handle).map_err(|e| AppError::Widget(js_error_message(&e)))
    }
}

/// Open a widget, or repeat the error that kept it from being created.
pub fn open_or_report<W: UploadWidget>(widget: &AppResult<W>) -> AppResult<()> {
    match widget {
        Ok(widget) => widget.open(),
        Err(e) => Err(e.clone()),
    }
}

/// `Error` instances keep `message` non-enumerable, so read it explicitly.
/// The widget itself reports plain objects (`{status, statusText}`) or strings.
fn error_to_json(error: &JsValue) -> Option<Value> {
    if error.is_null() || error.is_undefined() {
        return None;
    }
    if error.is_instance_of::<js_sys::Error>() {
        return Some(json!({ "message": js_error_message(error) }));
    }
    let value = serde_wasm_bindgen::from_value(error.clone()).unwrap_or_else(|e| {
        log::warn!("Unreadable widget error: {}", e);
        json!({})
    });
    Some(value)
}

/// On failure, returns the event name if it can still be read.
fn result_to_json(result: &JsValue) -> Result<Option<Value>, Option<String>> {
    if result.is_null() || result.is_undefined() {
        return Ok(None);
    }
    serde_wasm_bindgen::from_value(result.clone()).map(Some).map_err(|e| {
        log::warn!("Unreadable widget result: {}", e);
        js_sys::Reflect::get(result, &"event".into())
            .ok()
            .and_then(|v| v.as_string())
    })
}

/// JavaScript functions from upload_widget.js
#[wasm_bindgen(module = "/src/js/upload_widget.js")]
extern "C" {
    #[wasm_bindgen(js_name = "isUploadLibraryLoaded")]
    fn is_library_loaded_js() -> bool;

    #[wasm_bindgen(catch, js_name = "createUploadWidget")]
    fn create_upload_widget_js(options: &JsValue, callback: &js_sys::Function) -> Result<JsValue, JsValue>;

    #[wasm_bindgen(catch, js_name = "openUploadWidget")]
    fn open_upload_widget_js(widget: &JsValue) -> Result<(), JsValue>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_options_shape() {
        let config = UploadWidgetConfig {
            cloud_name: "demo".into(),
            upload_preset: "university_papers".into(),
        };
        let options = serde_json::to_value(WidgetOptions::new(&config)).unwrap();

        assert_eq!(options["cloudName"], "demo");
        assert_eq!(options["uploadPreset"], "university_papers");
        assert_eq!(options["sources"], json!(["local"]));
        assert_eq!(options["multiple"], false);
        assert_eq!(options["maxFileSize"], 16_000_000);
        assert_eq!(options["clientAllowedFormats"], json!(["pdf", "doc", "docx", "jpg", "jpeg", "png"]));
        assert_eq!(options["showUploadMoreButton"], false);
    }

    struct CountingWidget(std::cell::Cell<u32>);

    impl UploadWidget for CountingWidget {
        fn open(&self) -> AppResult<()> {
            self.0.set(self.0.get() + 1);
            Ok(())
        }
    }

    #[test]
    fn test_open_repeats_creation_error() {
        let missing: AppResult<CountingWidget> = Err(AppError::Config("cloud name missing".into()));
        let err = open_or_report(&missing).unwrap_err();
        assert_eq!(
            err.user_message(),
            "Upload configuration error. Please contact administrator."
        );

        let unloaded: AppResult<CountingWidget> = Err(AppError::WidgetUnavailable);
        assert_eq!(open_or_report(&unloaded), Err(AppError::WidgetUnavailable));

        let live: AppResult<CountingWidget> = Ok(CountingWidget(std::cell::Cell::new(0)));
        assert_eq!(open_or_report(&live), Ok(()));
        assert_eq!(live.as_ref().map(|w| w.0.get()).ok(), Some(1));
    }
}
