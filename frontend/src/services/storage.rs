//! Theme preference persistence in `localStorage`.

use web_sys::Storage;

use crate::config::THEME_STORAGE_KEY;
use crate::state::Theme;
use crate::types::{AppError, AppResult};

fn local_storage() -> AppResult<Storage> {
    gloo_utils::window()
        .local_storage()
        .map_err(|e| AppError::Storage(format!("{:?}", e)))?
        .ok_or_else(|| AppError::Storage("localStorage unavailable".to_string()))
}

/// Saved theme, light when nothing usable is stored.
pub fn load_theme() -> Theme {
    let stored = local_storage()
        .and_then(|storage| {
            storage
                .get_item(THEME_STORAGE_KEY)
                .map_err(|e| AppError::Storage(format!("{:?}", e)))
        })
        .unwrap_or_else(|e| {
            log::warn!("Could not read theme preference: {}", e);
            None
        });

    Theme::from_stored(stored.as_deref())
}

pub fn save_theme(theme: Theme) -> AppResult<()> {
    local_storage()?
        .set_item(THEME_STORAGE_KEY, theme.as_str())
        .map_err(|e| AppError::Storage(format!("{:?}", e)))
}

/// Set `data-theme` on `<html>`.
pub fn apply_theme(theme: Theme) {
    if let Err(e) = gloo_utils::document_element().set_attribute("data-theme", theme.as_str()) {
        log::warn!("Could not apply theme: {:?}", e);
    }
}

/// Theme currently applied to the document.
pub fn current_theme() -> Theme {
    Theme::from_stored(gloo_utils::document_element().get_attribute("data-theme").as_deref())
}
