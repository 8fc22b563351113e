use dioxus::prelude::*;
use time::macros::date;
use time::Date;

use crate::components::Breadcrumbs;
use crate::i18n::{use_language, Language};
use crate::t;

struct Post {
    slug: &'static str,
    title: (&'static str, &'static str),
    excerpt: (&'static str, &'static str),
    published: Date,
    read_minutes: u8,
}

const POSTS: &[Post] = &[
    Post {
        slug: "learn-python-2025",
        title: (
            "كيف تبدأ تعلم بايثون في ٢٠٢٥",
            "How to start learning Python in 2025",
        ),
        excerpt: (
            "خطة عملية من الصفر حتى أول مشروع حقيقي.",
            "A practical plan from zero to your first real project.",
        ),
        published: date!(2025 - 03 - 14),
        read_minutes: 7,
    },
    Post {
        slug: "excel-pivot-tables",
        title: (
            "الجداول المحورية: أقوى أداة في إكسل",
            "Pivot tables: Excel's most powerful tool",
        ),
        excerpt: (
            "لخّص آلاف الصفوف في دقائق دون معادلات معقدة.",
            "Summarize thousands of rows in minutes without complex formulas.",
        ),
        published: date!(2025 - 02 - 02),
        read_minutes: 5,
    },
    Post {
        slug: "ux-portfolio",
        title: (
            "بناء معرض أعمال لمصممي تجربة المستخدم",
            "Building a UX design portfolio",
        ),
        excerpt: (
            "ما الذي يبحث عنه أصحاب العمل فعلاً في معرض أعمالك.",
            "What hiring managers actually look for in your portfolio.",
        ),
        published: date!(2024 - 12 - 09),
        read_minutes: 6,
    },
    Post {
        slug: "business-english-meetings",
        title: (
            "عبارات إنجليزية أساسية للاجتماعات",
            "Essential English phrases for meetings",
        ),
        excerpt: (
            "تحدث بثقة في اجتماعات العمل الدولية.",
            "Speak with confidence in international business meetings.",
        ),
        published: date!(2024 - 11 - 21),
        read_minutes: 4,
    },
];

/// Publication date for display: month name in English, numeric day first
/// in Arabic.
pub fn format_published(date: Date, lang: Language) -> String {
    match lang {
        Language::En => format!("{} {}, {}", date.month(), date.day(), date.year()),
        Language::Ar => format!("{}/{}/{}", date.day(), u8::from(date.month()), date.year()),
    }
}

#[component]
pub fn BlogPage() -> Element {
    let lang = use_language();

    rsx! {
        section { class: "page page-blog",
            Breadcrumbs {}
            h1 { {t!("blog-title")} }
            p { class: "page__lead", {t!("blog-lead")} }
            div { class: "blog-grid",
                for post in POSTS {
                    article { key: "{post.slug}", class: "blog-card",
                        h2 { class: "blog-card__title", {lang.pick(post.title.0, post.title.1)} }
                        p { class: "blog-card__meta",
                            time { datetime: "{post.published}", {format_published(post.published, lang)} }
                            " · "
                            {t!("blog-read-minutes", minutes = post.read_minutes)}
                        }
                        p { class: "blog-card__excerpt", {lang.pick(post.excerpt.0, post.excerpt.1)} }
                    }
                }
            }
        }
    }
}
