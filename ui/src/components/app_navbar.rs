use dioxus::prelude::*;

use super::NavLink;
use crate::app::change_language;
use crate::i18n::Language;
use crate::routing::use_navigator;
use crate::t;

/// Primary navigation targets, in display order.
const NAV_TARGETS: [&str; 7] = [
    "home",
    "courses",
    "categories",
    "paths",
    "blog",
    "teach",
    "about",
];

fn nav_label(target: &str) -> String {
    match target {
        "home" => t!("nav-home"),
        "courses" => t!("nav-courses"),
        "categories" => t!("nav-categories"),
        "paths" => t!("nav-paths"),
        "blog" => t!("nav-blog"),
        "teach" => t!("nav-teach"),
        _ => t!("nav-about"),
    }
}

fn link_class(section: &str, target: &str) -> &'static str {
    if section == target {
        "navbar__link navbar__link--active"
    } else {
        "navbar__link"
    }
}

/// Header with the brand, navigation, a global course search, and the
/// language switch.
///
/// Labels come from Fluent on every render; the language signal read below
/// is what makes a switch re-render this component.
#[component]
pub fn AppNavbar() -> Element {
    let language = use_context::<Signal<Language>>();
    let mut navigator = use_navigator();
    let mut query = use_signal(String::new);

    let lang = language();
    let current = navigator.read().view().page.to_string();
    let section = current.split('/').next().unwrap_or_default().to_string();

    let on_search = move |evt: FormEvent| {
        evt.prevent_default();
        let text = query().trim().to_string();
        if text.is_empty() {
            navigator.write().navigate("courses");
        } else {
            navigator.write().navigate(&format!("courses?search={text}"));
        }
        query.set(String::new());
    };

    let switch_label = match lang {
        Language::Ar => "English",
        Language::En => "العربية",
    };

    rsx! {
        header { id: "navbar", class: "navbar",
            div { class: "navbar__inner",
                NavLink { to: "home", class: "navbar__brand",
                    span { class: "navbar__brand-mark", {t!("brand-name")} }
                    span { class: "navbar__brand-subtitle", {t!("tagline")} }
                }

                nav { class: "navbar__links",
                    for target in NAV_TARGETS {
                        NavLink {
                            key: "{target}",
                            to: target,
                            class: link_class(&section, target),
                            {nav_label(target)}
                        }
                    }
                }

                form { class: "navbar__search", onsubmit: on_search,
                    label { class: "visually-hidden", r#for: "navbar-search", {t!("search-label")} }
                    input {
                        id: "navbar-search",
                        r#type: "search",
                        placeholder: t!("search-placeholder"),
                        value: "{query}",
                        oninput: move |evt: FormEvent| query.set(evt.value()),
                    }
                }

                button {
                    r#type: "button",
                    class: "navbar__locale button button--ghost",
                    lang: lang.toggled().html_lang(),
                    onclick: move |_| change_language(language, lang.toggled()),
                    "{switch_label}"
                }
            }
        }
    }
}
