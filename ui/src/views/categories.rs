use dioxus::prelude::*;

use crate::catalog::{categories, CategoryStats, FEATURED};
use crate::components::{Breadcrumbs, CategoryCard};
use crate::i18n::use_language;
use crate::t;

#[component]
pub fn CategoriesPage() -> Element {
    // Fluent lookups don't track the language signal; this read does.
    use_language();
    rsx! {
        section { class: "page page-categories",
            Breadcrumbs {}
            h1 { {t!("categories-title")} }
            p { class: "page__lead", {t!("categories-lead")} }
            div { class: "category-grid category-grid--large",
                for category in categories().iter().filter(|c| c.key != FEATURED) {
                    CategoryCard {
                        key: "{category.key}",
                        category,
                        stats: CategoryStats::for_category(category.key),
                    }
                }
            }
        }
    }
}
