//! Helpers over the server-rendered page.

use gloo_timers::future::TimeoutFuture;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Element, Event, EventTarget};

use crate::config::{BOOKMARKS_PAGE, TOOLTIP_SELECTOR};
use crate::state::submission::Redirect;
use crate::types::{AppResult, UploadWidgetConfig};

/// Elements matching a CSS selector, in document order.
pub fn query_all(selector: &str) -> Vec<Element> {
    let nodes = match gloo_utils::document().query_selector_all(selector) {
        Ok(nodes) => nodes,
        Err(e) => {
            log::warn!("Bad selector '{}': {:?}", selector, e);
            return Vec::new();
        }
    };

    (0..nodes.length())
        .filter_map(|i| nodes.get(i))
        .filter_map(|node| node.dyn_into::<Element>().ok())
        .collect()
}

pub fn element_by_id(id: &str) -> Option<Element> {
    gloo_utils::document().get_element_by_id(id)
}

/// Attach a listener for the page lifetime.
pub fn listen(target: &EventTarget, event: &str, handler: impl FnMut(Event) + 'static) {
    let closure = Closure::wrap(Box::new(handler) as Box<dyn FnMut(Event)>);
    if let Err(e) = target.add_event_listener_with_callback(event, closure.as_ref().unchecked_ref()) {
        log::warn!("Could not listen to '{}': {:?}", event, e);
    }
    closure.forget();
}

pub fn on_bookmarks_page() -> bool {
    gloo_utils::window()
        .location()
        .pathname()
        .map(|path| path == BOOKMARKS_PAGE)
        .unwrap_or(false)
}

/// Wait out the redirect delay, then navigate.
pub async fn follow_redirect(redirect: Redirect) {
    TimeoutFuture::new(redirect.after_ms).await;
    log::info!("Redirecting to {}", redirect.to);
    if let Err(e) = gloo_utils::window().location().set_href(&redirect.to) {
        log::error!("Redirect failed: {:?}", e);
    }
}

/// Widget credentials from the `data-cloud-name` / `data-upload-preset`
/// attributes of the upload anchor.
pub fn widget_config_from(anchor: &Element) -> AppResult<UploadWidgetConfig> {
    UploadWidgetConfig::new(
        anchor.get_attribute("data-cloud-name"),
        anchor.get_attribute("data-upload-preset"),
    )
}

/// Close a Bootstrap modal, if Bootstrap is on the page.
pub fn hide_modal(id: &str) {
    hide_modal_js(id);
}

/// Attach Bootstrap tooltips to every `[data-bs-toggle="tooltip"]`.
///
/// Does nothing when Bootstrap's script is not on the page.
pub fn init_tooltips() {
    let count = init_tooltips_js(TOOLTIP_SELECTOR);
    log::debug!("💬 {} tooltips initialized", count);
}

/// JavaScript functions from bootstrap.js
#[wasm_bindgen(module = "/src/js/bootstrap.js")]
extern "C" {
    #[wasm_bindgen(js_name = "hideModal")]
    fn hide_modal_js(id: &str);

    #[wasm_bindgen(js_name = "initTooltips")]
    fn init_tooltips_js(selector: &str) -> u32;
}
