use dioxus::prelude::*;

use crate::catalog::{
    categories, category_by_key, courses, run, subcategories_of, CategoryStats, FilterState,
    SortKey, ViewMode, ALL_SUBCATEGORIES, FEATURED,
};
use crate::components::{Breadcrumbs, CourseCard, NavLink};
use crate::core::format::format_rating;
use crate::core::settings::SEARCH_DEBOUNCE_MS;
use crate::core::timing::{sleep_ms, Debounce};
use crate::i18n::{use_language, Localize};
use crate::routing::use_navigator;
use crate::t;

fn sort_label(sort: SortKey) -> String {
    match sort {
        SortKey::Featured => t!("sort-featured"),
        SortKey::Rating => t!("sort-rating"),
        SortKey::PriceLow => t!("sort-price-low"),
        SortKey::PriceHigh => t!("sort-price-high"),
        SortKey::Newest => t!("sort-newest"),
    }
}

fn tab_target(key: &str) -> String {
    if key == FEATURED {
        "courses".to_string()
    } else {
        format!("courses/{key}")
    }
}

fn toggle_class(active: bool, base: &str) -> String {
    if active {
        format!("{base} {base}--active")
    } else {
        base.to_string()
    }
}

/// The course catalog, optionally opened on one category.
///
/// Filter state is created on mount from the category and the URL's
/// `search` parameter. Switching category navigates, which remounts this
/// page with fresh filters.
#[component]
pub fn CoursesPage(#[props(!optional)] category: Option<String>) -> Element {
    let lang = use_language();
    let mut navigator = use_navigator();
    let mut filters = use_signal(|| {
        let search = navigator.peek().url_search_query();
        FilterState::new(category.as_deref(), search.as_deref())
    });
    let mut debounce = use_signal(Debounce::default);

    let state = filters();
    let results = run(courses(), &state.to_query());
    let chips = subcategories_of(&state.category);
    let active = category_by_key(&state.category).filter(|c| c.key != FEATURED);
    let stats = active.map(|c| CategoryStats::for_category(c.key));

    let on_search = move |evt: FormEvent| {
        let text = evt.value();
        filters.write().search = text.clone();
        let ticket = debounce.write().arm();
        spawn(async move {
            sleep_ms(SEARCH_DEBOUNCE_MS).await;
            if debounce.peek().is_current(ticket) {
                navigator.write().reflect_search(&text);
            }
        });
    };

    let reset = move |_| {
        let category = filters.peek().category.clone();
        filters.set(FilterState::new(Some(&category), None));
        debounce.write().arm();
        navigator.write().reflect_search("");
    };

    let results_class = match state.view_mode {
        ViewMode::Grid => "course-grid",
        ViewMode::List => "course-list",
    };

    rsx! {
        section { class: "page page-catalog",
            Breadcrumbs {}

            header { class: "catalog__hero",
                match active {
                    Some(category) => rsx! {
                        h1 { class: "catalog__title catalog__title--{category.gradient}",
                            span { aria_hidden: "true", "{category.icon} " }
                            {category.name.text(lang)}
                        }
                    },
                    None => rsx! {
                        h1 { class: "catalog__title", {t!("catalog-title")} }
                    },
                }
                if let Some(stats) = stats {
                    ul { class: "catalog__stats",
                        li { {t!("category-course-count", count = stats.course_count)} }
                        li { {t!("category-learners", count = stats.learners.clone())} }
                        if let Some(rating) = stats.average_rating {
                            li { {format!("★ {}", format_rating(rating))} }
                        }
                    }
                }
            }

            nav { class: "catalog__tabs", aria_label: t!("catalog-categories-label"),
                for tab in categories() {
                    NavLink {
                        key: "{tab.key}",
                        to: tab_target(tab.key),
                        class: toggle_class(tab.key == state.category, "catalog__tab"),
                        {tab.name.text(lang).to_string()}
                    }
                }
            }

            if !chips.is_empty() {
                div { class: "catalog__chips", role: "group",
                    button {
                        r#type: "button",
                        class: toggle_class(state.subcategory == ALL_SUBCATEGORIES, "chip"),
                        onclick: move |_| filters.write().subcategory = ALL_SUBCATEGORIES.to_string(),
                        {t!("catalog-all-subcategories")}
                    }
                    for chip in chips {
                        button {
                            key: "{chip.key}",
                            r#type: "button",
                            class: toggle_class(state.subcategory == chip.key, "chip"),
                            onclick: move |_| filters.write().subcategory = chip.key.to_string(),
                            {chip.name.text(lang).to_string()}
                        }
                    }
                }
            }

            div { class: "catalog__toolbar",
                label { class: "visually-hidden", r#for: "catalog-search", {t!("search-label")} }
                input {
                    id: "catalog-search",
                    class: "catalog__search",
                    r#type: "search",
                    placeholder: t!("search-placeholder"),
                    value: "{state.search}",
                    oninput: on_search,
                }
                select {
                    class: "catalog__sort",
                    aria_label: t!("sort-label"),
                    value: state.sort.as_str(),
                    onchange: move |evt: FormEvent| filters.write().sort = SortKey::parse(&evt.value()),
                    for sort in SortKey::ALL {
                        option {
                            key: "{sort.as_str()}",
                            value: sort.as_str(),
                            selected: sort == state.sort,
                            {sort_label(sort)}
                        }
                    }
                }
                div { class: "catalog__view-toggle", role: "group",
                    button {
                        r#type: "button",
                        class: toggle_class(state.view_mode == ViewMode::Grid, "icon-button"),
                        aria_label: t!("view-grid"),
                        onclick: move |_| filters.write().view_mode = ViewMode::Grid,
                        "▦"
                    }
                    button {
                        r#type: "button",
                        class: toggle_class(state.view_mode == ViewMode::List, "icon-button"),
                        aria_label: t!("view-list"),
                        onclick: move |_| filters.write().view_mode = ViewMode::List,
                        "☰"
                    }
                }
            }

            p { class: "catalog__count", {t!("catalog-result-count", count = results.len())} }

            if results.is_empty() {
                div { class: "empty-state",
                    h2 { {t!("catalog-empty-title")} }
                    p { {t!("catalog-empty-hint")} }
                    button { r#type: "button", class: "button button--primary", onclick: reset,
                        {t!("catalog-reset")}
                    }
                }
            } else {
                div { class: results_class,
                    for course in results {
                        CourseCard { key: "{course.id}", course, mode: state.view_mode }
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn featured_tab_opens_plain_catalog() {
        assert_eq!(tab_target(FEATURED), "courses");
        assert_eq!(tab_target("excel"), "courses/excel");
    }

    #[test]
    fn active_controls_get_modifier_class() {
        assert_eq!(toggle_class(true, "chip"), "chip chip--active");
        assert_eq!(toggle_class(false, "chip"), "chip");
    }
}
