//! Page keys, their URLs, and the navigator that keeps the two in step.
//!
//! The shell owns a single [`Navigator`] (provided through context) and every
//! view navigates through it; nothing reads the address bar directly.

mod history;
mod navigator;
mod table;

pub use history::{History, HistoryState, MemoryHistory};
#[cfg(target_arch = "wasm32")]
pub use history::BrowserHistory;
pub use navigator::{use_navigator, Navigator, ViewState};
pub use table::{
    category_of, page_to_url, search_from_query_string, split_target, url_to_page, Page, PageKey,
    STATIC_ROUTES,
};

/// History backend of the current target.
#[cfg(target_arch = "wasm32")]
pub type PlatformHistory = BrowserHistory;

/// History backend of the current target.
#[cfg(not(target_arch = "wasm32"))]
pub type PlatformHistory = MemoryHistory;
