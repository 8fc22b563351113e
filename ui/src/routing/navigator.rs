use dioxus::prelude::*;

use super::history::{History, HistoryState};
use super::table::{category_of, page_to_url, search_from_query_string, split_target, url_to_page, Page, PageKey};
use super::PlatformHistory;

/// What the shell is showing. Lives for the session only.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ViewState {
    pub page: PageKey,
    /// Set exactly when `page` has the `courses/{x}` shape.
    pub category: Option<String>,
    /// Query attached by the last forward navigation.
    pub search_query: Option<String>,
}

/// Single owner of the view state, mirroring it into `H`.
///
/// Invariant: once [`establish`](Self::establish) has run, the history's path
/// is always the URL of `view().page`.
#[derive(Debug, Clone)]
pub struct Navigator<H> {
    history: H,
    state: ViewState,
    generation: u64,
}

impl<H: History> Navigator<H> {
    /// Derive the initial view from the history's current URL.
    pub fn new(history: H) -> Self {
        let page = url_to_page(&history.pathname());
        let state = ViewState {
            category: category_of(page.as_str()),
            search_query: search_from_query_string(&history.query_string()),
            page,
        };
        Self {
            history,
            state,
            generation: 0,
        }
    }

    /// Rewrite the URL to the canonical one for the current page without
    /// adding a history entry. Run once on mount.
    pub fn establish(&mut self) {
        let url = self.url_with_search(self.state.search_query.as_deref());
        let state = self.history_state();
        self.history.replace(&state, &url);
    }

    /// Go to `target`, a page key optionally followed by `?search=<text>`.
    ///
    /// Unknown keys become the current page but map to `/`.
    pub fn navigate(&mut self, target: &str) {
        let (page, search_query) = split_target(target);
        self.state = ViewState {
            category: category_of(page.as_str()),
            page,
            search_query,
        };
        self.history.scroll_to_top();

        let url = self.url_with_search(self.state.search_query.as_deref());
        let state = self.history_state();
        self.history.push(&state, &url);
        self.generation += 1;
        tracing::debug!(page = %self.state.page, url = %url, "navigate");
    }

    /// React to a back/forward step that already moved the history.
    ///
    /// The page comes from the path itself, not the pushed payload.
    pub fn on_pop(&mut self) {
        let page = url_to_page(&self.history.pathname());
        self.history.scroll_to_top();
        self.state.category = category_of(page.as_str());
        self.state.page = page;
        self.generation += 1;
        tracing::debug!(page = %self.state.page, "history pop");
    }

    /// Mirror catalog search text into the URL in place.
    pub fn reflect_search(&mut self, query: &str) {
        let query = Some(query.to_string()).filter(|q| !q.is_empty());
        let url = self.url_with_search(query.as_deref());
        self.state.search_query = query;
        let state = self.history_state();
        self.history.replace(&state, &url);
    }

    pub fn view(&self) -> &ViewState {
        &self.state
    }

    pub fn page(&self) -> Page {
        Page::resolve(&self.state.page)
    }

    /// The `search` parameter as the address bar shows it right now.
    pub fn url_search_query(&self) -> Option<String> {
        search_from_query_string(&self.history.query_string())
    }

    /// Bumped on every navigate and pop; views key on it to remount.
    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn history(&self) -> &H {
        &self.history
    }

    pub fn history_mut(&mut self) -> &mut H {
        &mut self.history
    }

    fn url_with_search(&self, query: Option<&str>) -> String {
        let mut url = page_to_url(self.state.page.as_str());
        if let Some(query) = query {
            url.push_str("?search=");
            url.push_str(&urlencoding::encode(query));
        }
        url
    }

    fn history_state(&self) -> HistoryState {
        HistoryState {
            page: self.state.page.to_string(),
            category: self.state.category.clone(),
            search_query: self.state.search_query.clone(),
        }
    }
}

/// The navigator the platform crate provided.
pub fn use_navigator() -> Signal<Navigator<PlatformHistory>> {
    use_context::<Signal<Navigator<PlatformHistory>>>()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::routing::MemoryHistory;

    #[test]
    fn initial_state_comes_from_url() {
        let nav = Navigator::new(MemoryHistory::new("/courses/excel?search=pivot"));
        assert_eq!(nav.view().page.as_str(), "courses/excel");
        assert_eq!(nav.view().category.as_deref(), Some("excel"));
        assert_eq!(nav.view().search_query.as_deref(), Some("pivot"));
    }

    #[test]
    fn establish_replaces_unknown_path_with_home() {
        let mut nav = Navigator::new(MemoryHistory::new("/does-not-exist"));
        nav.establish();
        assert_eq!(nav.history().url(), "/");
        assert_eq!(nav.history().len(), 1);
    }

    #[test]
    fn unknown_key_maps_to_root() {
        let mut nav = Navigator::new(MemoryHistory::default());
        nav.navigate("spaceship");
        assert_eq!(nav.view().page.as_str(), "spaceship");
        assert_eq!(nav.history().url(), "/");
        assert_eq!(nav.page(), Page::Home);
    }

    #[test]
    fn reflect_search_does_not_add_entries() {
        let mut nav = Navigator::new(MemoryHistory::default());
        nav.navigate("courses/python");
        let generation = nav.generation();
        nav.reflect_search("data science");
        assert_eq!(nav.history().url(), "/courses/python?search=data%20science");
        assert_eq!(nav.history().len(), 2);
        assert_eq!(nav.generation(), generation);
        assert_eq!(nav.url_search_query().as_deref(), Some("data science"));

        nav.reflect_search("");
        assert_eq!(nav.history().url(), "/courses/python");
    }

    #[test]
    fn every_navigation_scrolls() {
        let mut nav = Navigator::new(MemoryHistory::default());
        nav.navigate("blog");
        nav.navigate("faq");
        nav.history_mut().back();
        nav.on_pop();
        assert_eq!(nav.history().scroll_count(), 3);
    }
}
