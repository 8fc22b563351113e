use dioxus::prelude::*;

use super::NavLink;
use crate::catalog::category_by_key;
use crate::i18n::{use_language, Language, Localize};
use crate::routing::{use_navigator, Page};
use crate::t;

/// One step of a breadcrumb trail. The last step has no target.
#[derive(Debug, Clone, PartialEq)]
pub struct Crumb {
    pub label: String,
    pub target: Option<String>,
}

impl Crumb {
    fn link(label: String, target: &str) -> Self {
        Self {
            label,
            target: Some(target.to_string()),
        }
    }

    fn here(label: String) -> Self {
        Self {
            label,
            target: None,
        }
    }
}

/// Trail from home to `page`.
pub fn breadcrumb_trail(page: &Page, lang: Language) -> Vec<Crumb> {
    let home = t!("nav-home");
    let leaf = match page {
        Page::Home => return vec![Crumb::here(home)],
        Page::Courses { category: None } => t!("nav-courses"),
        Page::Courses {
            category: Some(key),
        } => {
            let name = category_by_key(key)
                .map(|c| c.name.text(lang).to_string())
                .unwrap_or_else(|| key.clone());
            return vec![
                Crumb::link(home, "home"),
                Crumb::link(t!("nav-courses"), "courses"),
                Crumb::here(name),
            ];
        }
        Page::PathDetail { id } => {
            let title = api::sample_paths()
                .into_iter()
                .find(|p| u64::from(p.id) == *id)
                .map(|p| p.title.text(lang).to_string())
                .unwrap_or_else(|| format!("#{id}"));
            return vec![
                Crumb::link(home, "home"),
                Crumb::link(t!("nav-paths"), "paths"),
                Crumb::here(title),
            ];
        }
        Page::Paths => t!("nav-paths"),
        Page::Features => t!("nav-features"),
        Page::Categories => t!("nav-categories"),
        Page::MyPaths => t!("nav-my-paths"),
        Page::Teach => t!("nav-teach"),
        Page::Blog => t!("nav-blog"),
        Page::Course => t!("nav-course"),
        Page::About => t!("nav-about"),
        Page::Faq => t!("nav-faq"),
        Page::Breadcrumbs => t!("nav-breadcrumbs"),
        Page::Carousel => t!("nav-carousel"),
    };
    vec![Crumb::link(home, "home"), Crumb::here(leaf)]
}

/// Trail for the page currently shown.
#[component]
pub fn Breadcrumbs() -> Element {
    let lang = use_language();
    let page = use_navigator().read().page();
    let trail = breadcrumb_trail(&page, lang);

    rsx! {
        nav { class: "breadcrumbs", aria_label: t!("breadcrumbs-label"),
            ol { class: "breadcrumbs__list",
                for (index, crumb) in trail.into_iter().enumerate() {
                    li { key: "{index}", class: "breadcrumbs__item",
                        match crumb.target {
                            Some(target) => rsx! {
                                NavLink { to: target, class: "breadcrumbs__link", "{crumb.label}" }
                            },
                            None => rsx! {
                                span { class: "breadcrumbs__current", aria_current: "page", "{crumb.label}" }
                            },
                        }
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn targets(trail: &[Crumb]) -> Vec<Option<&str>> {
        trail.iter().map(|c| c.target.as_deref()).collect()
    }

    #[test]
    fn home_is_a_single_current_crumb() {
        let trail = breadcrumb_trail(&Page::Home, Language::En);
        assert_eq!(targets(&trail), vec![None]);
    }

    #[test]
    fn category_trail_links_back_to_catalog() {
        let page = Page::Courses {
            category: Some("excel".into()),
        };
        let trail = breadcrumb_trail(&page, Language::En);
        assert_eq!(targets(&trail), vec![Some("home"), Some("courses"), None]);
        assert_eq!(trail[2].label, "Excel");
    }

    #[test]
    fn unknown_category_uses_raw_key() {
        let page = Page::Courses {
            category: Some("cooking".into()),
        };
        let trail = breadcrumb_trail(&page, Language::Ar);
        assert_eq!(trail[2].label, "cooking");
    }

    #[test]
    fn path_detail_uses_path_title() {
        let trail = breadcrumb_trail(&Page::PathDetail { id: 2 }, Language::En);
        assert_eq!(targets(&trail), vec![Some("home"), Some("paths"), None]);
        assert_eq!(trail[2].label, "Data Analysis Path");
    }

    #[test]
    fn unknown_path_shows_its_id() {
        let trail = breadcrumb_trail(&Page::PathDetail { id: 99_999_999_999 }, Language::En);
        assert_eq!(trail[2].label, "#99999999999");
    }
}
