//! Bookmark buttons rendered by the server.
//!
//! Each `.bookmark-btn[data-paper-id]` gets a click handler toggling
//! the bookmark and restyling the button from the reply.

use gloo_timers::callback::Timeout;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;
use web_sys::{HtmlButtonElement, HtmlElement};

use crate::components::Notifier;
use crate::config::CARD_REMOVAL_MS;
use crate::services::dom::{listen, on_bookmarks_page, query_all};
use crate::services::HttpApi;
use crate::state::bookmark::{toggle_bookmark, SPINNER_HTML};

const CARD_SELECTOR: &str = ".col-md-6, .col-lg-4";

/// Attach handlers to every bookmark button on the page.
pub fn init_bookmark_buttons(notifier: Notifier) {
    let mut wired = 0;

    for element in query_all(".bookmark-btn") {
        let button = match element.dyn_into::<HtmlButtonElement>() {
            Ok(button) => button,
            Err(_) => {
                log::warn!("Ignoring .bookmark-btn that is not a <button>");
                continue;
            }
        };

        let target = button.clone();
        listen(&button, "click", move |ev| {
            ev.prevent_default();
            on_bookmark_click(target.clone(), notifier);
        });
        wired += 1;
    }

    log::debug!("🔖 {} bookmark buttons wired", wired);
}

fn on_bookmark_click(button: HtmlButtonElement, notifier: Notifier) {
    let Some(paper_id) = button
        .get_attribute("data-paper-id")
        .and_then(|id| id.trim().parse::<u64>().ok())
    else {
        return;
    };
    if button.disabled() {
        return;
    }

    let original = button.inner_html();
    let class = button.class_name();
    button.set_inner_html(SPINNER_HTML);
    button.set_disabled(true);

    spawn_local(async move {
        let update = toggle_bookmark(&HttpApi::default(), paper_id, &class, on_bookmarks_page()).await;

        if let Some(class) = &update.class {
            button.set_class_name(class);
        }
        let html = update.html.map(str::to_string).unwrap_or(original);
        button.set_inner_html(&html);
        if let Some(notice) = update.notice {
            notifier.notify(notice);
        }
        if update.remove_card {
            remove_card(&button);
        }
        button.set_disabled(false);
    });
}

/// Shrink and fade the paper's card, then drop it.
fn remove_card(button: &HtmlButtonElement) {
    let card = match button.closest(CARD_SELECTOR) {
        Ok(Some(card)) => card,
        _ => return,
    };

    if let Some(html) = card.dyn_ref::<HtmlElement>() {
        let style = html.style();
        let _ = style.set_property("transition", "all 0.3s ease");
        let _ = style.set_property("transform", "scale(0)");
        let _ = style.set_property("opacity", "0");
    }

    Timeout::new(CARD_REMOVAL_MS, move || card.remove()).forget();
}
