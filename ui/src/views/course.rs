use dioxus::prelude::*;

use crate::catalog::course_by_id;
use crate::components::{Breadcrumbs, NavLink};
use crate::core::format::{format_discount, format_rating};
use crate::i18n::{use_language, Localize};
use crate::t;

/// The sample course shown at `/course`.
const SAMPLE_COURSE_ID: u32 = 1;

const SYLLABUS: &[(&str, &str)] = &[
    ("مقدمة في الويب وكيف يعمل المتصفح", "How the web and the browser work"),
    ("هيكلة الصفحات باستخدام HTML", "Structuring pages with HTML"),
    ("تنسيق الواجهات باستخدام CSS", "Styling interfaces with CSS"),
    ("أساسيات JavaScript والتفاعل", "JavaScript fundamentals and interactivity"),
    ("مشروع تطبيقي متكامل", "A complete hands-on project"),
];

#[component]
pub fn CourseDetail() -> Element {
    let lang = use_language();
    let Some(course) = course_by_id(SAMPLE_COURSE_ID) else {
        return rsx! {
            section { class: "page page-course",
                p { class: "empty-state", {t!("course-missing")} }
            }
        };
    };

    let price = if course.pricing.free {
        t!("course-free")
    } else {
        course.price().unwrap_or_default().to_string()
    };

    rsx! {
        section { class: "page page-course",
            Breadcrumbs {}
            div { class: "course-detail",
                div { class: "course-detail__main",
                    h1 { {course.title.text(lang)} }
                    p { class: "page__lead", {course.description.text(lang)} }
                    ul { class: "course-detail__meta",
                        if let Some(rating) = course.rating {
                            li { {format!("★ {}", format_rating(rating))} }
                        }
                        if let Some(learners) = course.learners {
                            li { {t!("course-learners", count = learners)} }
                        }
                        li { {course.duration.text(lang)} }
                        li { {course.level.text(lang)} }
                    }
                    if let Some(instructor) = course.instructor.as_ref() {
                        p { class: "course-detail__instructor",
                            {t!("course-instructor", name = instructor.text(lang))}
                        }
                    }
                    h2 { {t!("course-syllabus")} }
                    ol { class: "course-detail__syllabus",
                        for (ar, en) in SYLLABUS.iter().copied() {
                            li { key: "{en}", {lang.pick(ar, en)} }
                        }
                    }
                }
                aside { class: "course-detail__aside",
                    img { src: course.image, alt: course.title.text(lang) }
                    p { class: "course-detail__price", "{price}" }
                    if let Some(original) = course.pricing.original_price.as_deref() {
                        p { class: "course-card__price--original", "{original}" }
                    }
                    if let Some(discount) = course.pricing.discount_percent {
                        span { class: "badge badge--discount", {format_discount(discount)} }
                    }
                    button { r#type: "button", class: "button button--primary", {t!("course-enroll")} }
                    if course.certificate {
                        p { class: "course-detail__certificate", {t!("course-certificate")} }
                    }
                    if let Some(path) = course.path.as_ref() {
                        NavLink { to: "paths/{path.id}", class: "course-card__path",
                            {path.title.text(lang).to_string()}
                        }
                    }
                }
            }
        }
    }
}
