//! Navbar dark mode toggle.

use leptos::*;
use web_sys::Element;

use crate::config::THEME_TOGGLE_ID;
use crate::services::dom::listen;
use crate::services::storage::{apply_theme, current_theme, save_theme};
use crate::state::Theme;

fn switch_to(theme: Theme) {
    log::info!("🎨 Theme: {}", theme.as_str());
    apply_theme(theme);
    if let Err(e) = save_theme(theme) {
        log::warn!("Theme not saved: {}", e);
    }
}

#[component]
pub fn ThemeToggle(initial: Theme) -> impl IntoView {
    let (theme, set_theme) = create_signal(initial);

    let on_click = move |_| {
        let next = theme.get_untracked().toggled();
        set_theme.set(next);
        switch_to(next);
    };

    view! {
        <button
            id=THEME_TOGGLE_ID
            type="button"
            class="theme-toggle ms-2"
            title=move || theme.get().toggle_title()
            on:click=on_click
        >
            <i class=move || theme.get().icon_class()></i>
        </button>
    }
}

/// Wire a toggle button the server already rendered.
pub fn wire_theme_button(button: Element) {
    decorate(&button, current_theme());

    let target = button.clone();
    listen(&button, "click", move |_| {
        let next = current_theme().toggled();
        switch_to(next);
        decorate(&target, next);
    });
}

fn decorate(button: &Element, theme: Theme) {
    let _ = button.set_attribute("title", theme.toggle_title());
    if let Ok(Some(icon)) = button.query_selector("i") {
        icon.set_class_name(theme.icon_class());
    }
}
