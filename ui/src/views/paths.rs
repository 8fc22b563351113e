use api::LearningPath;
use dioxus::prelude::*;

use crate::catalog::{course_by_id, ViewMode};
use crate::components::{Breadcrumbs, CourseCard, NavLink, PathCard};
use crate::core::platform::reload_page;
use crate::i18n::{use_language, Localize};
use crate::t;

#[derive(Clone, Debug, PartialEq)]
enum PathsStatus {
    Loading,
    Failed,
    Ready(Vec<LearningPath>),
}

/// Fetch the listing. Failures are logged and left for a manual retry.
fn fetch_paths(mut status: Signal<PathsStatus>) {
    spawn(async move {
        match api::load_paths().await {
            Ok(paths) => {
                tracing::debug!(count = paths.len(), "learning paths loaded");
                status.set(PathsStatus::Ready(paths));
            }
            Err(err) => {
                tracing::warn!(%err, "learning paths unavailable");
                status.set(PathsStatus::Failed);
            }
        }
    });
}

#[component]
pub fn PathsPage() -> Element {
    let lang = use_language();
    let mut status = use_signal(|| PathsStatus::Loading);
    use_hook(move || fetch_paths(status));

    let body = match status() {
        PathsStatus::Loading => rsx! {
            p { class: "status status--loading", role: "status", {t!("paths-loading")} }
        },
        PathsStatus::Failed => rsx! {
            div { class: "status status--error", role: "alert",
                p {
                    {lang.pick(
                        "تعذّر تحميل المسارات التعليمية. تحقق من اتصالك وحاول مرة أخرى.",
                        "Could not load learning paths. Check your connection and try again.",
                    )}
                }
                button {
                    r#type: "button",
                    class: "button button--primary",
                    onclick: move |_| {
                        if !reload_page() {
                            status.set(PathsStatus::Loading);
                            fetch_paths(status);
                        }
                    },
                    {t!("paths-retry")}
                }
            }
        },
        PathsStatus::Ready(paths) => rsx! {
            div { class: "path-grid",
                for path in paths {
                    PathCard { key: "{path.id}", path: path.clone() }
                }
            }
        },
    };

    rsx! {
        section { class: "page page-paths",
            Breadcrumbs {}
            h1 { {t!("paths-title")} }
            p { class: "page__lead", {t!("paths-lead")} }
            {body}
        }
    }
}

/// One learning path and the courses it bundles.
#[component]
pub fn PathDetail(id: u64) -> Element {
    let lang = use_language();
    let Some(path) = api::sample_paths()
        .into_iter()
        .find(|p| u64::from(p.id) == id) else {
        return rsx! {
            section { class: "page page-path",
                Breadcrumbs {}
                div { class: "empty-state",
                    h1 { {t!("path-not-found")} }
                    NavLink { to: "paths", class: "button button--primary", {t!("nav-paths")} }
                }
            }
        };
    };
    let steps: Vec<_> = path
        .course_ids
        .iter()
        .filter_map(|course_id| course_by_id(*course_id))
        .collect();

    rsx! {
        section { class: "page page-path",
            Breadcrumbs {}
            header { class: "path__hero",
                h1 { {path.title.text(lang)} }
                p { class: "page__lead", {path.description.text(lang)} }
                ul { class: "path__meta",
                    li { {path.level.text(lang)} }
                    li { {path.duration.text(lang)} }
                    li { {t!("path-course-count", count = steps.len())} }
                    li { {t!("course-learners", count = path.learners.clone())} }
                }
            }
            h2 { {t!("path-courses-heading")} }
            ol { class: "path__steps",
                for (index, course) in steps.into_iter().enumerate() {
                    li { key: "{course.id}", class: "path__step",
                        span { class: "path__step-number", "{index + 1}" }
                        CourseCard { course, mode: ViewMode::List }
                    }
                }
            }
        }
    }
}

/// Enrolled paths. Nothing is stored, so this is always the empty state.
#[component]
pub fn MyPaths() -> Element {
    // Fluent lookups don't track the language signal; this read does.
    use_language();
    rsx! {
        section { class: "page page-my-paths",
            Breadcrumbs {}
            h1 { {t!("nav-my-paths")} }
            div { class: "empty-state",
                p { {t!("my-paths-empty")} }
                NavLink { to: "paths", class: "button button--primary", {t!("my-paths-browse")} }
            }
        }
    }
}
