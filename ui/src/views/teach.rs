use dioxus::prelude::*;

use crate::components::Breadcrumbs;
use crate::i18n::use_language;
use crate::t;

const STEPS: &[(&str, &str)] = &[
    ("قدّم طلبك وعرّفنا بخبرتك", "Apply and tell us about your expertise"),
    ("خطط لدورتك مع فريق المحتوى", "Plan your course with our content team"),
    ("سجّل الدروس بدعم من الاستوديو", "Record lessons with studio support"),
    ("انشر دورتك وابدأ بتحقيق الدخل", "Publish and start earning"),
];

#[component]
pub fn Teach() -> Element {
    let lang = use_language();
    let mut applied = use_signal(|| false);

    rsx! {
        section { class: "page page-teach",
            Breadcrumbs {}
            div { class: "hero hero--compact",
                h1 { {t!("teach-title")} }
                p { class: "hero__subtitle",
                    {lang.pick(
                        "انضم إلى نخبة المدربين وشارك معرفتك مع متعلمين في كل العالم العربي.",
                        "Join our instructors and share what you know with learners across the Arab world.",
                    )}
                }
            }
            h2 { {t!("teach-steps-heading")} }
            ol { class: "steps",
                for (ar, en) in STEPS.iter().copied() {
                    li { key: "{en}", class: "steps__item", {lang.pick(ar, en)} }
                }
            }
            if applied() {
                p { class: "status status--success", role: "status", {t!("teach-applied")} }
            } else {
                button {
                    r#type: "button",
                    class: "button button--accent",
                    onclick: move |_| {
                        tracing::info!("instructor application started");
                        applied.set(true);
                    },
                    {t!("teach-apply")}
                }
            }
        }
    }
}
