//! Showcase pages for shared components.

use dioxus::prelude::*;

use crate::catalog::{courses, run, CatalogQuery, SortKey};
use crate::components::{breadcrumb_trail, Breadcrumbs, Carousel};
use crate::i18n::use_language;
use crate::routing::Page;
use crate::t;

#[component]
pub fn BreadcrumbsDemo() -> Element {
    let lang = use_language();
    let samples = [
        Page::Courses {
            category: Some("python".to_string()),
        },
        Page::PathDetail { id: 1 },
        Page::Faq,
    ];

    rsx! {
        section { class: "page page-demo",
            Breadcrumbs {}
            h1 { {t!("nav-breadcrumbs")} }
            ul { class: "demo__list",
                for (index, page) in samples.iter().enumerate() {
                    li { key: "{index}", class: "demo__item",
                        {breadcrumb_trail(page, lang)
                            .into_iter()
                            .map(|crumb| crumb.label)
                            .collect::<Vec<_>>()
                            .join(" › ")}
                    }
                }
            }
        }
    }
}

#[component]
pub fn CarouselDemo() -> Element {
    // Fluent lookups don't track the language signal; this read does.
    use_language();
    let top_rated: Vec<_> = run(courses(), &CatalogQuery::default().sort(SortKey::Rating))
        .into_iter()
        .take(5)
        .collect();

    rsx! {
        section { class: "page page-demo",
            Breadcrumbs {}
            h1 { {t!("nav-carousel")} }
            Carousel { courses: top_rated }
        }
    }
}
