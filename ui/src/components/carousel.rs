use dioxus::prelude::*;

use super::CourseCard;
use crate::catalog::Course;
use crate::i18n::use_language;
use crate::t;

/// Step `current` by `step` within `0..len`, wrapping at both ends.
pub fn wrap_index(current: usize, step: isize, len: usize) -> usize {
    if len == 0 {
        return 0;
    }
    let len = len as isize;
    (current as isize + step).rem_euclid(len) as usize
}

/// One course at a time with previous/next controls.
#[component]
pub fn Carousel(courses: Vec<&'static Course>) -> Element {
    let _lang = use_language();
    let mut index = use_signal(|| 0usize);
    let len = courses.len();

    let Some(course) = courses.get(index().min(len.saturating_sub(1))).copied() else {
        return rsx! {
            p { class: "carousel__empty", {t!("carousel-empty")} }
        };
    };

    rsx! {
        section { class: "carousel",
            button {
                r#type: "button",
                class: "carousel__control carousel__control--prev",
                aria_label: t!("carousel-previous"),
                onclick: move |_| index.set(wrap_index(index(), -1, len)),
                "‹"
            }
            div { class: "carousel__slide", key: "{course.id}",
                CourseCard { course }
            }
            button {
                r#type: "button",
                class: "carousel__control carousel__control--next",
                aria_label: t!("carousel-next"),
                onclick: move |_| index.set(wrap_index(index(), 1, len)),
                "›"
            }
            p { class: "carousel__position", "{index() + 1} / {len}" }
        }
    }
}
