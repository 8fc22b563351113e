use std::borrow::Cow;
use std::fmt;

/// Static page keys and their URL paths.
pub const STATIC_ROUTES: &[(&str, &str)] = &[
    ("home", "/"),
    ("features", "/features"),
    ("categories", "/categories"),
    ("courses", "/courses"),
    ("paths", "/paths"),
    ("my-paths", "/my-paths"),
    ("teach", "/teach"),
    ("blog", "/blog"),
    ("course", "/course"),
    ("about", "/about"),
    ("faq", "/faq"),
    ("breadcrumbs", "/breadcrumbs"),
    ("carousel", "/carousel"),
];

const SEARCH_MARKER: &str = "?search=";

/// Internal identifier of the displayed view, e.g. `courses/python`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PageKey(String);

impl PageKey {
    pub fn new(key: impl Into<String>) -> Self {
        Self(key.into())
    }

    pub fn home() -> Self {
        Self::new("home")
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for PageKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for PageKey {
    fn from(key: &str) -> Self {
        Self::new(key)
    }
}

/// The views the shell can render.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Page {
    Home,
    Features,
    Categories,
    /// Catalog, optionally opened on one category.
    Courses { category: Option<String> },
    Paths,
    /// Ids too large for `u64` clamp to `u64::MAX`, which matches no path.
    PathDetail { id: u64 },
    MyPaths,
    Teach,
    Blog,
    Course,
    About,
    Faq,
    Breadcrumbs,
    Carousel,
}

impl Page {
    /// Resolve by the key's first segment. Anything unknown renders home.
    pub fn resolve(key: &PageKey) -> Self {
        let (head, rest) = match key.as_str().split_once('/') {
            Some((head, rest)) => (head, Some(rest)),
            None => (key.as_str(), None),
        };
        match head {
            "courses" => Self::Courses {
                category: rest.filter(|r| !r.is_empty()).map(str::to_string),
            },
            "paths" => match rest.filter(|r| is_path_id(r)) {
                Some(digits) => Self::PathDetail {
                    id: digits.parse().unwrap_or(u64::MAX),
                },
                None => Self::Paths,
            },
            "features" => Self::Features,
            "categories" => Self::Categories,
            "my-paths" => Self::MyPaths,
            "teach" => Self::Teach,
            "blog" => Self::Blog,
            "course" => Self::Course,
            "about" => Self::About,
            "faq" => Self::Faq,
            "breadcrumbs" => Self::Breadcrumbs,
            "carousel" => Self::Carousel,
            _ => Self::Home,
        }
    }
}

fn is_category_key(raw: &str) -> bool {
    !raw.is_empty() && raw.chars().all(|c| c.is_ascii_lowercase())
}

fn is_path_id(raw: &str) -> bool {
    !raw.is_empty() && raw.chars().all(|c| c.is_ascii_digit())
}

/// URL path for a page key: table entry, then the category and path-detail
/// families, then `/`.
pub fn page_to_url(key: &str) -> String {
    if let Some((_, url)) = STATIC_ROUTES.iter().find(|(page, _)| *page == key) {
        return (*url).to_string();
    }
    if let Some(category) = key.strip_prefix("courses/").filter(|c| is_category_key(c)) {
        return format!("/courses/{category}");
    }
    if let Some(id) = key.strip_prefix("paths/").filter(|id| is_path_id(id)) {
        return format!("/paths/{id}");
    }
    "/".to_string()
}

/// Page key for a URL path, mirroring [`page_to_url`]. Unknown paths are home.
pub fn url_to_page(path: &str) -> PageKey {
    if let Some((page, _)) = STATIC_ROUTES.iter().find(|(_, url)| *url == path) {
        return PageKey::new(*page);
    }
    if let Some(category) = path.strip_prefix("/courses/").filter(|c| is_category_key(c)) {
        return PageKey::new(format!("courses/{category}"));
    }
    if let Some(id) = path.strip_prefix("/paths/").filter(|id| is_path_id(id)) {
        return PageKey::new(format!("paths/{id}"));
    }
    PageKey::home()
}

/// Category selected by a `courses/{x}` key; `None` for everything else,
/// including plain `courses`.
pub fn category_of(key: &str) -> Option<String> {
    key.strip_prefix("courses/")
        .filter(|category| !category.is_empty())
        .map(str::to_string)
}

/// Split `courses?search=raw text` into the page key and the decoded query.
///
/// An empty query counts as absent. Text that is not valid percent-encoding
/// is kept as typed.
pub fn split_target(target: &str) -> (PageKey, Option<String>) {
    match target.split_once(SEARCH_MARKER) {
        Some((page, raw)) => {
            let query = urlencoding::decode(raw).unwrap_or(Cow::Borrowed(raw));
            let query = Some(query.into_owned()).filter(|q| !q.is_empty());
            (PageKey::new(page), query)
        }
        None => (PageKey::new(target), None),
    }
}

/// The `search` parameter of a `?a=b&search=c` string, decoded the way
/// `URLSearchParams` does (`+` is a space). Empty values count as absent.
pub fn search_from_query_string(query: &str) -> Option<String> {
    query
        .trim_start_matches('?')
        .split('&')
        .filter_map(|pair| pair.split_once('=').or(Some((pair, ""))))
        .find(|(key, _)| *key == "search")
        .map(|(_, value)| {
            let spaced = value.replace('+', " ");
            let decoded = urlencoding::decode(&spaced).map(Cow::into_owned).ok();
            decoded.unwrap_or(spaced)
        })
        .filter(|value| !value.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn static_keys_round_trip() {
        for (page, _) in STATIC_ROUTES {
            let url = page_to_url(page);
            assert_eq!(url_to_page(&url).as_str(), *page, "via {url}");
        }
    }

    #[test]
    fn dynamic_families_round_trip() {
        assert_eq!(page_to_url("courses/python"), "/courses/python");
        assert_eq!(url_to_page("/courses/python").as_str(), "courses/python");
        assert_eq!(page_to_url("paths/12"), "/paths/12");
        assert_eq!(url_to_page("/paths/12").as_str(), "paths/12");
    }

    #[test]
    fn patterns_reject_other_shapes() {
        assert_eq!(page_to_url("courses/Python"), "/");
        assert_eq!(page_to_url("courses/web-dev"), "/");
        assert_eq!(page_to_url("paths/abc"), "/");
        assert_eq!(page_to_url("nowhere"), "/");
        assert_eq!(url_to_page("/courses/Python").as_str(), "home");
        assert_eq!(url_to_page("/paths/3a").as_str(), "home");
        assert_eq!(url_to_page("/missing").as_str(), "home");
    }

    #[test]
    fn category_only_for_course_category_keys() {
        assert_eq!(category_of("courses/excel").as_deref(), Some("excel"));
        assert_eq!(category_of("courses"), None);
        assert_eq!(category_of("courses/"), None);
        assert_eq!(category_of("paths/3"), None);
    }

    #[test]
    fn resolve_uses_leading_segment() {
        assert_eq!(
            Page::resolve(&"courses/python".into()),
            Page::Courses {
                category: Some("python".into())
            }
        );
        assert_eq!(
            Page::resolve(&"courses".into()),
            Page::Courses { category: None }
        );
        assert_eq!(Page::resolve(&"paths/3".into()), Page::PathDetail { id: 3 });
        assert_eq!(Page::resolve(&"paths/x".into()), Page::Paths);
        assert_eq!(
            Page::resolve(&"paths/99999999999".into()),
            Page::PathDetail { id: 99_999_999_999 }
        );
        assert_eq!(
            Page::resolve(&"paths/99999999999999999999999".into()),
            Page::PathDetail { id: u64::MAX }
        );
        assert_eq!(Page::resolve(&"faq".into()), Page::Faq);
        assert_eq!(Page::resolve(&"spaceship".into()), Page::Home);
    }

    #[test]
    fn split_target_decodes_query() {
        let (page, query) = split_target("courses?search=data%20science");
        assert_eq!(page.as_str(), "courses");
        assert_eq!(query.as_deref(), Some("data science"));

        let (page, query) = split_target("courses?search=c++ & rust");
        assert_eq!(page.as_str(), "courses");
        assert_eq!(query.as_deref(), Some("c++ & rust"));

        let (_, query) = split_target("courses?search=100%");
        assert_eq!(query.as_deref(), Some("100%"));

        let (page, query) = split_target("courses?search=");
        assert_eq!(page.as_str(), "courses");
        assert_eq!(query, None);
    }

    #[test]
    fn query_string_uses_url_search_params_rules() {
        assert_eq!(
            search_from_query_string("?search=excel").as_deref(),
            Some("excel")
        );
        assert_eq!(
            search_from_query_string("?lang=ar&search=data+science").as_deref(),
            Some("data science")
        );
        assert_eq!(
            search_from_query_string("?search=%D8%A5%D9%83%D8%B3%D9%84").as_deref(),
            Some("إكسل")
        );
        assert_eq!(search_from_query_string(""), None);
        assert_eq!(search_from_query_string("?search="), None);
    }
}
