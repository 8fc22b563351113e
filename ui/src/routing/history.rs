use serde::{Deserialize, Serialize};

/// Payload pushed with every history entry.
///
/// Only used to notice back/forward transitions; the navigator re-derives
/// the page from the path on pop rather than trusting this.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HistoryState {
    pub page: String,
    pub category: Option<String>,
    pub search_query: Option<String>,
}

#[cfg(target_arch = "wasm32")]
impl HistoryState {
    /// JS object for `pushState`. Absent fields become `null`, not `undefined`.
    pub fn to_js_value(&self) -> Result<wasm_bindgen::JsValue, serde_wasm_bindgen::Error> {
        self.serialize(&serde_wasm_bindgen::Serializer::json_compatible())
    }
}

/// The session history and viewport the navigator drives.
pub trait History {
    /// Current path, e.g. `/courses/python`.
    fn pathname(&self) -> String;
    /// Current query string including the leading `?`, or empty.
    fn query_string(&self) -> String;
    fn push(&mut self, state: &HistoryState, url: &str);
    fn replace(&mut self, state: &HistoryState, url: &str);
    fn scroll_to_top(&mut self);
}

#[derive(Debug, Clone, PartialEq)]
struct Entry {
    url: String,
    state: Option<HistoryState>,
}

/// In-process history stack. Backs the desktop shell and tests.
#[derive(Debug, Clone)]
pub struct MemoryHistory {
    entries: Vec<Entry>,
    index: usize,
    scrolls: u32,
}

impl Default for MemoryHistory {
    fn default() -> Self {
        Self::new("/")
    }
}

impl MemoryHistory {
    pub fn new(initial_url: &str) -> Self {
        Self {
            entries: vec![Entry {
                url: initial_url.to_string(),
                state: None,
            }],
            index: 0,
            scrolls: 0,
        }
    }

    /// Full URL of the current entry.
    pub fn url(&self) -> &str {
        &self.entries[self.index].url
    }

    pub fn state(&self) -> Option<&HistoryState> {
        self.entries[self.index].state.as_ref()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Number of scroll-to-top requests so far.
    pub fn scroll_count(&self) -> u32 {
        self.scrolls
    }

    /// Step back one entry. Returns `false` at the start of the stack.
    pub fn back(&mut self) -> bool {
        if self.index == 0 {
            return false;
        }
        self.index -= 1;
        true
    }

    /// Step forward one entry. Returns `false` at the end of the stack.
    pub fn forward(&mut self) -> bool {
        if self.index + 1 >= self.entries.len() {
            return false;
        }
        self.index += 1;
        true
    }

    fn split_url(&self) -> (&str, &str) {
        let url = self.url();
        match url.find('?') {
            Some(at) => url.split_at(at),
            None => (url, ""),
        }
    }
}

impl History for MemoryHistory {
    fn pathname(&self) -> String {
        self.split_url().0.to_string()
    }

    fn query_string(&self) -> String {
        self.split_url().1.to_string()
    }

    fn push(&mut self, state: &HistoryState, url: &str) {
        self.entries.truncate(self.index + 1);
        self.entries.push(Entry {
            url: url.to_string(),
            state: Some(state.clone()),
        });
        self.index = self.entries.len() - 1;
    }

    fn replace(&mut self, state: &HistoryState, url: &str) {
        self.entries[self.index] = Entry {
            url: url.to_string(),
            state: Some(state.clone()),
        };
    }

    fn scroll_to_top(&mut self) {
        self.scrolls = self.scrolls.saturating_add(1);
    }
}

/// The browser's session history, via `window.history` and `window.location`.
#[cfg(target_arch = "wasm32")]
#[derive(Debug, Default, Clone, Copy)]
pub struct BrowserHistory;

#[cfg(target_arch = "wasm32")]
impl BrowserHistory {
    fn location() -> Option<web_sys::Location> {
        web_sys::window().map(|w| w.location())
    }

    fn write(state: &HistoryState, url: &str, replace: bool) {
        let Some(history) = web_sys::window().and_then(|w| w.history().ok()) else {
            tracing::warn!("window.history unavailable; URL not updated");
            return;
        };
        let payload = state.to_js_value().unwrap_or_else(|err| {
            tracing::warn!(%err, "history state not serializable");
            wasm_bindgen::JsValue::NULL
        });
        let result = if replace {
            history.replace_state_with_url(&payload, "", Some(url))
        } else {
            history.push_state_with_url(&payload, "", Some(url))
        };
        if let Err(err) = result {
            tracing::warn!(?err, url = %url, "history update rejected");
        }
    }
}

#[cfg(target_arch = "wasm32")]
impl History for BrowserHistory {
    fn pathname(&self) -> String {
        Self::location()
            .and_then(|l| l.pathname().ok())
            .unwrap_or_else(|| "/".to_string())
    }

    fn query_string(&self) -> String {
        Self::location()
            .and_then(|l| l.search().ok())
            .unwrap_or_default()
    }

    fn push(&mut self, state: &HistoryState, url: &str) {
        Self::write(state, url, false);
    }

    fn replace(&mut self, state: &HistoryState, url: &str) {
        Self::write(state, url, true);
    }

    fn scroll_to_top(&mut self) {
        if let Some(window) = web_sys::window() {
            let options = web_sys::ScrollToOptions::new();
            options.set_top(0.0);
            options.set_behavior(web_sys::ScrollBehavior::Smooth);
            window.scroll_to_with_scroll_to_options(&options);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn state(page: &str) -> HistoryState {
        HistoryState {
            page: page.into(),
            category: None,
            search_query: None,
        }
    }

    #[test]
    fn push_drops_forward_entries() {
        let mut history = MemoryHistory::new("/");
        history.push(&state("blog"), "/blog");
        history.push(&state("faq"), "/faq");
        assert!(history.back());
        history.push(&state("about"), "/about");
        assert_eq!(history.len(), 3);
        assert!(!history.forward());
        assert_eq!(history.url(), "/about");
    }

    #[test]
    fn splits_path_and_query() {
        let mut history = MemoryHistory::default();
        history.push(&state("courses"), "/courses?search=excel");
        assert_eq!(history.pathname(), "/courses");
        assert_eq!(history.query_string(), "?search=excel");
    }

    #[test]
    fn replace_keeps_stack_length() {
        let mut history = MemoryHistory::new("/nowhere");
        history.replace(&state("home"), "/");
        assert_eq!(history.len(), 1);
        assert_eq!(history.url(), "/");
        assert!(!history.back());
    }

    #[test]
    fn state_serializes_with_camel_case_keys() {
        let payload = HistoryState {
            page: "courses".into(),
            category: None,
            search_query: Some("excel".into()),
        };
        let json = serde_json::to_value(&payload).unwrap();
        assert_eq!(
            json,
            serde_json::json!({ "page": "courses", "category": null, "searchQuery": "excel" })
        );
    }
}

#[cfg(all(test, target_arch = "wasm32"))]
mod browser_tests {
    use wasm_bindgen::JsValue;
    use wasm_bindgen_test::wasm_bindgen_test;

    use super::HistoryState;

    fn field(payload: &JsValue, name: &str) -> JsValue {
        js_sys::Reflect::get(payload, &JsValue::from_str(name)).unwrap()
    }

    #[wasm_bindgen_test]
    fn absent_fields_are_null() {
        let payload = HistoryState {
            page: "courses".into(),
            category: None,
            search_query: Some("excel".into()),
        }
        .to_js_value()
        .unwrap();
        assert_eq!(field(&payload, "page").as_string().as_deref(), Some("courses"));
        assert!(field(&payload, "category").is_null());
        assert_eq!(field(&payload, "searchQuery").as_string().as_deref(), Some("excel"));
    }
}
