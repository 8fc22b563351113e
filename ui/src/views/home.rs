use dioxus::prelude::*;

use crate::catalog::{categories, courses, run, CatalogQuery, CategoryStats, FEATURED};
use crate::components::{CategoryCard, CourseCard, NavLink};
use crate::core::settings::HOME_FEATURED_COUNT;
use crate::i18n::use_language;
use crate::t;

#[component]
pub fn Home() -> Element {
    let lang = use_language();
    let featured: Vec<_> = run(courses(), &CatalogQuery::default())
        .into_iter()
        .take(HOME_FEATURED_COUNT)
        .collect();

    rsx! {
        section { class: "page page-home",
            div { class: "hero",
                h1 { class: "hero__title", {t!("home-title")} }
                p { class: "hero__subtitle", {t!("home-subtitle")} }
                div { class: "hero__actions",
                    NavLink { to: "courses", class: "button button--primary", {t!("home-cta-courses")} }
                    NavLink { to: "paths", class: "button button--ghost", {t!("home-cta-paths")} }
                }
            }

            section { class: "page-home__section",
                h2 { {t!("home-categories-heading")} }
                div { class: "category-grid",
                    for category in categories().iter().filter(|c| c.key != FEATURED) {
                        CategoryCard {
                            key: "{category.key}",
                            category,
                            stats: CategoryStats::for_category(category.key),
                        }
                    }
                }
            }

            section { class: "page-home__section",
                div { class: "section-heading",
                    h2 { {t!("home-featured-heading")} }
                    NavLink { to: "courses", class: "section-heading__more", {t!("home-see-all")} }
                }
                div { class: "course-grid",
                    for course in featured {
                        CourseCard { key: "{course.id}", course }
                    }
                }
            }

            section { class: "page-home__section page-home__teach",
                h2 { {lang.pick("شارك خبرتك مع آلاف المتعلمين", "Share your expertise with thousands of learners")} }
                NavLink { to: "teach", class: "button button--accent", {t!("nav-teach")} }
            }
        }
    }
}
