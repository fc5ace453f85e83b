//! Decorations of the server-rendered page: flash messages, card
//! animations and the admin modals.

use gloo_timers::callback::Timeout;
use wasm_bindgen::JsCast;
use web_sys::HtmlElement;

use crate::config::{CARD_ANIMATION_STEP_SECS, FLASH_TIMEOUT_MS};
use crate::services::dom::{listen, query_all};

/// Remove server flash messages once they have been up for a while.
pub fn init_flash_messages() {
    for message in query_all(".flash-messages .alert") {
        Timeout::new(FLASH_TIMEOUT_MS, move || {
            if message.parent_node().is_some() {
                message.remove();
            }
        })
        .forget();
    }
}

/// Staggered fade-in for cards, hover lift for interactive elements.
pub fn init_card_animations() {
    for (index, card) in query_all(".card").into_iter().enumerate() {
        if let Some(html) = card.dyn_ref::<HtmlElement>() {
            let delay = format!("{:.1}s", index as f64 * CARD_ANIMATION_STEP_SECS);
            let _ = html.style().set_property("animation-delay", &delay);
        }
        let _ = card.class_list().add_1("fade-in");
    }

    for element in query_all(".btn, .card, .upload-area") {
        let _ = element.class_list().add_1("hover-lift");
    }
}

/// Admin modals close on a backdrop click or their close button.
pub fn init_admin_modals() {
    for modal in query_all(".modal") {
        let Ok(modal) = modal.dyn_into::<HtmlElement>() else {
            continue;
        };

        let backdrop = modal.clone();
        listen(&modal, "click", move |ev| {
            let on_backdrop = ev
                .target()
                .map(|target| js_sys::Object::is(&target, &backdrop))
                .unwrap_or(false);
            if on_backdrop {
                hide(&backdrop);
            }
        });

        if let Ok(Some(close)) = modal.query_selector(".modal-close") {
            let target = modal.clone();
            listen(&close, "click", move |_| hide(&target));
        }
    }
}

fn hide(modal: &HtmlElement) {
    let _ = modal.style().set_property("display", "none");
}
