//! Bookmark button behaviour.
//!
//! The buttons are rendered by the server; this module only decides how a
//! button looks after the toggle request returns.

use crate::services::api::PaperApi;
use crate::types::{AppResult, BookmarkStatus, Notice};

pub const UNSAVED_CLASS: &str = "btn-outline-secondary";
pub const SAVED_CLASS: &str = "btn-warning";

pub const SPINNER_HTML: &str = r#"<i class="fas fa-spinner fa-spin"></i>"#;
pub const SAVED_HTML: &str = r#"<i class="fas fa-bookmark"></i> Saved"#;
pub const UNSAVED_HTML: &str = r#"<i class="fas fa-bookmark"></i>"#;

/// Changes to apply to a button once its request settled.
///
/// The button is re-enabled in every case.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BookmarkUpdate {
    /// New `class` attribute, if it changes
    pub class: Option<String>,
    /// New inner HTML; `None` restores what the button showed before
    pub html: Option<&'static str>,
    pub notice: Option<Notice>,
    /// Remove the paper's card from the page
    pub remove_card: bool,
}

impl BookmarkUpdate {
    pub fn from_reply(reply: AppResult<BookmarkStatus>, class: &str, on_bookmarks_page: bool) -> Self {
        match reply {
            Ok(BookmarkStatus::Added) => Self {
                class: Some(class.replacen(UNSAVED_CLASS, SAVED_CLASS, 1)),
                html: Some(SAVED_HTML),
                notice: Some(Notice::success("Paper bookmarked!")),
                remove_card: false,
            },
            Ok(BookmarkStatus::Removed) => Self {
                class: Some(class.replacen(SAVED_CLASS, UNSAVED_CLASS, 1)),
                html: Some(UNSAVED_HTML),
                notice: Some(Notice::info("Bookmark removed")),
                remove_card: on_bookmarks_page,
            },
            Ok(BookmarkStatus::Unknown) => {
                log::warn!("Unexpected bookmark status");
                Self::restore(None)
            }
            Err(e) => {
                log::error!("Bookmark error: {}", e);
                Self::restore(Some(Notice::danger("Failed to update bookmark")))
            }
        }
    }

    fn restore(notice: Option<Notice>) -> Self {
        Self {
            class: None,
            html: None,
            notice,
            remove_card: false,
        }
    }
}

/// Toggle one paper's bookmark.
pub async fn toggle_bookmark<A: PaperApi>(
    api: &A,
    paper_id: u64,
    class: &str,
    on_bookmarks_page: bool,
) -> BookmarkUpdate {
    BookmarkUpdate::from_reply(api.toggle_bookmark(paper_id).await, class, on_bookmarks_page)
}
