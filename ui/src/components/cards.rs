use api::LearningPath;
use dioxus::prelude::*;

use super::NavLink;
use crate::catalog::{Category, CategoryStats, Course, ViewMode};
use crate::core::format::{format_discount, format_rating};
use crate::i18n::{use_language, Localize};
use crate::t;

#[component]
pub fn CourseCard(course: &'static Course, #[props(default)] mode: ViewMode) -> Element {
    let lang = use_language();
    let layout = match mode {
        ViewMode::Grid => "course-card",
        ViewMode::List => "course-card course-card--row",
    };

    let price = if course.pricing.free {
        Some(t!("course-free"))
    } else {
        course.price().map(str::to_string)
    };

    rsx! {
        article { class: "{layout}",
            div { class: "course-card__media",
                img { src: course.image, alt: course.title.text(lang), loading: "lazy" }
                div { class: "course-card__badges",
                    if course.bestseller {
                        span { class: "badge badge--bestseller", {t!("badge-bestseller")} }
                    }
                    if course.is_new {
                        span { class: "badge badge--new", {t!("badge-new")} }
                    }
                    if let Some(discount) = course.pricing.discount_percent {
                        span { class: "badge badge--discount", {format_discount(discount)} }
                    }
                }
            }
            div { class: "course-card__body",
                h3 { class: "course-card__title",
                    NavLink { to: "course", {course.title.text(lang).to_string()} }
                }
                p { class: "course-card__description", {course.description.text(lang)} }
                if let Some(instructor) = course.instructor.as_ref().or(course.institution.as_ref()) {
                    p { class: "course-card__instructor", {instructor.text(lang)} }
                }
                ul { class: "course-card__meta",
                    li { {course.duration.text(lang)} }
                    li { {course.level.text(lang)} }
                    if let Some(rating) = course.rating {
                        li { class: "course-card__rating", {format!("★ {}", format_rating(rating))} }
                    }
                    if let Some(learners) = course.learners {
                        li { {t!("course-learners", count = learners)} }
                    }
                    if course.certificate {
                        li { {t!("course-certificate")} }
                    }
                }
                if let Some(path) = course.path.as_ref() {
                    NavLink { to: "paths/{path.id}", class: "course-card__path",
                        {path.title.text(lang).to_string()}
                    }
                }
                div { class: "course-card__footer",
                    if let Some(price) = price {
                        span { class: "course-card__price", "{price}" }
                    }
                    if let Some(original) = course.pricing.original_price.as_deref() {
                        span { class: "course-card__price course-card__price--original", "{original}" }
                    }
                }
            }
        }
    }
}

#[component]
pub fn CategoryCard(category: &'static Category, #[props(default)] stats: Option<CategoryStats>) -> Element {
    let lang = use_language();

    rsx! {
        NavLink {
            to: "courses/{category.key}",
            class: "category-card category-card--{category.color}",
            span { class: "category-card__icon", aria_hidden: "true", "{category.icon}" }
            span { class: "category-card__name", {category.name.text(lang).to_string()} }
            if let Some(stats) = stats.as_ref() {
                span { class: "category-card__stats",
                    {t!("category-course-count", count = stats.course_count)}
                    " · "
                    {t!("category-learners", count = stats.learners.clone())}
                    if let Some(rating) = stats.average_rating {
                        {format!(" · ★ {}", format_rating(rating))}
                    }
                }
            }
        }
    }
}

#[component]
pub fn PathCard(path: LearningPath) -> Element {
    let lang = use_language();

    rsx! {
        article { class: "path-card",
            h3 { class: "path-card__title", {path.title.text(lang)} }
            p { class: "path-card__description", {path.description.text(lang)} }
            ul { class: "path-card__meta",
                li { {path.level.text(lang)} }
                li { {path.duration.text(lang)} }
                li { {t!("path-course-count", count = path.course_ids.len())} }
                li { {t!("course-learners", count = path.learners.clone())} }
            }
            NavLink { to: "paths/{path.id}", class: "button button--primary", {t!("path-view")} }
        }
    }
}
