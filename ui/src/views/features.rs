use dioxus::prelude::*;

use crate::components::{Breadcrumbs, NavLink};
use crate::i18n::use_language;
use crate::t;

const FEATURES: &[(&str, (&str, &str), (&str, &str))] = &[
    (
        "🎓",
        ("شهادات معتمدة", "Recognized certificates"),
        (
            "أثبت مهاراتك بشهادات إتمام قابلة للتحقق.",
            "Prove your skills with verifiable certificates of completion.",
        ),
    ),
    (
        "🧭",
        ("مسارات تعليمية", "Guided learning paths"),
        (
            "دورات مرتبة تقودك من البداية حتى الاحتراف.",
            "Ordered courses that take you from first steps to mastery.",
        ),
    ),
    (
        "🗣️",
        ("محتوى بلغتك", "Content in your language"),
        (
            "دروس بالعربية والإنجليزية مع واجهة تدعم الاتجاهين.",
            "Lessons in Arabic and English with an interface that reads both ways.",
        ),
    ),
    (
        "⏱️",
        ("تعلم بمرونة", "Learn on your schedule"),
        (
            "وصول دائم للدروس من أي جهاز.",
            "Lifetime access to lessons from any device.",
        ),
    ),
];

#[component]
pub fn Features() -> Element {
    let lang = use_language();

    rsx! {
        section { class: "page page-features",
            Breadcrumbs {}
            h1 { {t!("features-title")} }
            div { class: "feature-grid",
                for (icon, title, body) in FEATURES.iter().copied() {
                    article { key: "{title.1}", class: "feature-card",
                        span { class: "feature-card__icon", aria_hidden: "true", "{icon}" }
                        h2 { {lang.pick(title.0, title.1)} }
                        p { {lang.pick(body.0, body.1)} }
                    }
                }
            }
            NavLink { to: "courses", class: "button button--primary", {t!("home-cta-courses")} }
        }
    }
}
