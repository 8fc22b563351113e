use dioxus::prelude::*;

use crate::catalog::{categories, courses, format_learners, parse_learners, FEATURED};
use crate::components::Breadcrumbs;
use crate::i18n::use_language;
use crate::t;

/// Headline figures computed from the bundled catalog.
fn site_figures() -> (usize, usize, String) {
    let course_count = courses().len();
    let category_count = categories().iter().filter(|c| c.key != FEATURED).count();
    let learners = courses()
        .iter()
        .filter_map(|c| c.learners)
        .map(parse_learners)
        .sum();
    (course_count, category_count, format_learners(learners))
}

#[component]
pub fn About() -> Element {
    let lang = use_language();
    let (course_count, category_count, learners) = site_figures();

    rsx! {
        section { class: "page page-about",
            Breadcrumbs {}
            h1 { {t!("about-title")} }
            p { class: "page__lead",
                {lang.pick(
                    "نؤمن بأن التعليم عالي الجودة حق للجميع، لذلك نقدم دورات عملية بالعربية والإنجليزية يقدمها خبراء من مختلف المجالات.",
                    "We believe quality education belongs to everyone, so we offer practical courses in Arabic and English taught by experts from every field.",
                )}
            }
            ul { class: "about__figures",
                li { class: "about__figure",
                    strong { "{course_count}" }
                    span { {t!("about-courses")} }
                }
                li { class: "about__figure",
                    strong { "{category_count}" }
                    span { {t!("about-categories")} }
                }
                li { class: "about__figure",
                    strong { "{learners}" }
                    span { {t!("about-learners")} }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn figures_skip_the_featured_pseudo_category() {
        let (courses, categories, learners) = site_figures();
        assert_eq!(courses, 18);
        assert_eq!(categories, 6);
        assert!(learners.ends_with('k'));
    }
}
