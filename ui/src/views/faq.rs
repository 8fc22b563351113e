use dioxus::prelude::*;

use crate::components::Breadcrumbs;
use crate::i18n::use_language;
use crate::t;

type Pair = (&'static str, &'static str);

const ENTRIES: &[(Pair, Pair)] = &[
    (
        ("هل الشهادات معتمدة؟", "Are the certificates accredited?"),
        (
            "تحصل على شهادة إتمام موثقة في الدورات التي تحمل علامة الشهادة.",
            "Courses marked with a certificate award a verifiable certificate of completion.",
        ),
    ),
    (
        ("هل يمكنني التعلم بالسرعة التي تناسبني؟", "Can I learn at my own pace?"),
        (
            "نعم، جميع الدروس مسجلة ومتاحة في أي وقت.",
            "Yes, every lesson is recorded and available at any time.",
        ),
    ),
    (
        ("هل توجد دورات مجانية؟", "Are there free courses?"),
        (
            "نعم، ابحث عن شارة «مجاني» في صفحة الدورات.",
            "Yes, look for the \"Free\" badge on the courses page.",
        ),
    ),
    (
        ("كيف أصبح مدرباً على المنصة؟", "How do I become an instructor?"),
        (
            "قدّم طلبك من صفحة «علّم معنا» وسيتواصل معك فريقنا.",
            "Apply from the Teach page and our team will get in touch.",
        ),
    ),
    (
        ("ما هي المسارات التعليمية؟", "What are learning paths?"),
        (
            "مجموعات مرتبة من الدورات تقودك نحو هدف مهني محدد.",
            "Ordered sets of courses that lead you towards a specific career goal.",
        ),
    ),
];

fn item_class(open: bool) -> &'static str {
    if open {
        "accordion__item accordion__item--open"
    } else {
        "accordion__item"
    }
}

/// Accordion; at most one answer is open.
#[component]
pub fn Faq() -> Element {
    let lang = use_language();
    let mut open = use_signal(|| Option::<usize>::None);

    rsx! {
        section { class: "page page-faq",
            Breadcrumbs {}
            h1 { {t!("faq-title")} }
            div { class: "accordion",
                for (index, (question, answer)) in ENTRIES.iter().enumerate() {
                    div {
                        key: "{index}",
                        class: item_class(open() == Some(index)),
                        button {
                            r#type: "button",
                            class: "accordion__question",
                            aria_expanded: open() == Some(index),
                            onclick: move |_| {
                                let next = if open() == Some(index) { None } else { Some(index) };
                                open.set(next);
                            },
                            {lang.pick(question.0, question.1)}
                        }
                        if open() == Some(index) {
                            p { class: "accordion__answer", {lang.pick(answer.0, answer.1)} }
                        }
                    }
                }
            }
        }
    }
}
