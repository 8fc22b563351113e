use std::collections::HashMap;

use api::Bilingual;
use once_cell::sync::Lazy;
use thiserror::Error;

use super::model::{Category, Course, PathLink, Pricing, Subcategory, FEATURED};

/// Dataset integrity violations.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CatalogError {
    #[error("course {id} references unknown category `{category}`")]
    UnknownCategory { id: u32, category: String },
    #[error("course {id} uses subcategory `{subcategory}`, which is not part of `{category}`")]
    ForeignSubcategory {
        id: u32,
        category: String,
        subcategory: String,
    },
    #[error("course id {0} is used more than once")]
    DuplicateId(u32),
}

static CATEGORIES: Lazy<Vec<Category>> = Lazy::new(|| {
    vec![
        category(FEATURED, "المميزة", "Featured", "amber", "from-amber-to-orange", "★"),
        category("programming", "البرمجة", "Programming", "blue", "from-blue-to-indigo", "</>"),
        category("python", "بايثون", "Python", "yellow", "from-yellow-to-green", "Py"),
        category("excel", "إكسل", "Excel", "green", "from-green-to-emerald", "⊞"),
        category("design", "التصميم", "Design", "pink", "from-pink-to-rose", "✎"),
        category("english", "اللغة الإنجليزية", "English", "red", "from-red-to-orange", "Aa"),
        category("business", "الأعمال", "Business", "purple", "from-purple-to-violet", "◆"),
    ]
});

static SUBCATEGORIES: Lazy<HashMap<&'static str, Vec<Subcategory>>> = Lazy::new(|| {
    HashMap::from([
        (
            "programming",
            vec![
                sub("web", "تطوير الويب", "Web Development"),
                sub("mobile", "تطبيقات الجوال", "Mobile Apps"),
            ],
        ),
        (
            "python",
            vec![
                sub("basics", "الأساسيات", "Basics"),
                sub("data", "تحليل البيانات", "Data Analysis"),
                sub("ai", "الذكاء الاصطناعي", "Artificial Intelligence"),
            ],
        ),
        (
            "excel",
            vec![
                sub("basics", "الأساسيات", "Basics"),
                sub("advanced", "متقدم", "Advanced"),
            ],
        ),
        (
            "design",
            vec![
                sub("graphic", "التصميم الجرافيكي", "Graphic Design"),
                sub("uiux", "تجربة المستخدم", "UI/UX"),
            ],
        ),
        (
            "english",
            vec![
                sub("conversation", "المحادثة", "Conversation"),
                sub("business", "إنجليزية الأعمال", "Business English"),
            ],
        ),
        (
            "business",
            vec![
                sub("marketing", "التسويق", "Marketing"),
                sub("management", "الإدارة", "Management"),
            ],
        ),
    ])
});

static COURSES: Lazy<Vec<Course>> = Lazy::new(|| {
    vec![
        Course {
            rating: Some(4.7),
            learners: Some("12.5k"),
            bestseller: true,
            certificate: true,
            instructor: Some(Bilingual::new("أحمد سالم", "Ahmed Salem")),
            path: Some(web_path()),
            pricing: priced("$49", Some("$99"), Some(50)),
            ..course(
                1,
                "programming",
                Some("web"),
                "html-css-fundamentals",
                ("أساسيات HTML و CSS", "HTML & CSS Fundamentals"),
                (
                    "ابنِ صفحات ويب متجاوبة من الصفر باستخدام HTML و CSS.",
                    "Build responsive web pages from scratch with HTML and CSS.",
                ),
                ("٨ ساعات", "8 hours"),
                ("مبتدئ", "Beginner"),
            )
        },
        Course {
            rating: Some(4.8),
            learners: Some("9.8k"),
            certificate: true,
            instructor: Some(Bilingual::new("أحمد سالم", "Ahmed Salem")),
            path: Some(web_path()),
            pricing: priced("$59", Some("$119"), Some(50)),
            ..course(
                2,
                "programming",
                Some("web"),
                "javascript-from-zero",
                ("جافاسكربت من الصفر", "JavaScript from Zero"),
                (
                    "تعلّم المتغيرات والدوال والتعامل مع DOM خطوة بخطوة.",
                    "Learn variables, functions and DOM manipulation step by step.",
                ),
                ("١٢ ساعة", "12 hours"),
                ("مبتدئ", "Beginner"),
            )
        },
        Course {
            rating: Some(4.6),
            learners: Some("6.2k"),
            is_new: true,
            certificate: true,
            path: Some(web_path()),
            pricing: priced("$79", None, None),
            ..course(
                3,
                "programming",
                Some("web"),
                "react-for-beginners",
                ("React للمبتدئين", "React for Beginners"),
                (
                    "أنشئ واجهات تفاعلية بالمكوّنات والحالة والخطافات.",
                    "Create interactive interfaces with components, state and hooks.",
                ),
                ("١٠ ساعات", "10 hours"),
                ("متوسط", "Intermediate"),
            )
        },
        Course {
            rating: Some(4.9),
            learners: Some("15k"),
            bestseller: true,
            certificate: true,
            institution: Some(Bilingual::new("أكاديمية البيانات", "Data Academy")),
            path: Some(data_path()),
            pricing: priced("$89", Some("$149"), Some(40)),
            ..course(
                4,
                "python",
                Some("data"),
                "python-data-analysis",
                ("بايثون لتحليل البيانات", "Python for Data Analysis"),
                (
                    "استخدم pandas و NumPy لتنظيف البيانات وتحليلها.",
                    "Use pandas and NumPy to clean and analyze real datasets.",
                ),
                ("١٤ ساعة", "14 hours"),
                ("متوسط", "Intermediate"),
            )
        },
        Course {
            rating: Some(4.7),
            learners: Some("8.4k"),
            certificate: true,
            institution: Some(Bilingual::new("أكاديمية البيانات", "Data Academy")),
            pricing: priced("$1,299", None, None),
            ..course(
                5,
                "python",
                Some("ai"),
                "machine-learning-python",
                ("تعلم الآلة باستخدام بايثون", "Machine Learning with Python"),
                (
                    "درّب نماذج التصنيف والانحدار وقيّم أداءها.",
                    "Train classification and regression models and evaluate them.",
                ),
                ("٢٠ ساعة", "20 hours"),
                ("متقدم", "Advanced"),
            )
        },
        Course {
            rating: Some(4.5),
            learners: Some("21k"),
            bestseller: true,
            certificate: true,
            path: Some(data_path()),
            pricing: free(),
            ..course(
                6,
                "excel",
                Some("basics"),
                "excel-essentials",
                ("أساسيات إكسل", "Excel Essentials"),
                (
                    "الصيغ والتنسيق والجداول لإدارة بيانات العمل اليومية.",
                    "Formulas, formatting and tables for everyday business data.",
                ),
                ("٦ ساعات", "6 hours"),
                ("مبتدئ", "Beginner"),
            )
        },
        Course {
            rating: Some(4.8),
            learners: Some("7.3k"),
            certificate: true,
            path: Some(data_path()),
            pricing: priced("$39", Some("$69"), Some(43)),
            ..course(
                7,
                "excel",
                Some("advanced"),
                "advanced-excel-dashboards",
                ("إكسل المتقدم: الجداول المحورية ولوحات المعلومات", "Advanced Excel: Pivot Tables & Dashboards"),
                (
                    "لوحات معلومات تفاعلية وأتمتة التقارير باستخدام Power Query و Python.",
                    "Interactive dashboards and report automation with Power Query and Python.",
                ),
                ("٩ ساعات", "9 hours"),
                ("متقدم", "Advanced"),
            )
        },
        Course {
            rating: Some(4.4),
            learners: Some("5.1k"),
            pricing: priced("$45", None, None),
            instructor: Some(Bilingual::new("سارة يوسف", "Sara Youssef")),
            ..course(
                8,
                "design",
                Some("graphic"),
                "graphic-design-photoshop",
                ("التصميم الجرافيكي بالفوتوشوب", "Graphic Design with Photoshop"),
                (
                    "صمّم منشورات وشعارات احترافية باستخدام فوتوشوب.",
                    "Design professional posts and logos with Photoshop.",
                ),
                ("٧ ساعات", "7 hours"),
                ("مبتدئ", "Beginner"),
            )
        },
        Course {
            rating: None,
            learners: Some("950"),
            is_new: true,
            pricing: priced("$69", None, None),
            instructor: Some(Bilingual::new("سارة يوسف", "Sara Youssef")),
            ..course(
                9,
                "design",
                Some("uiux"),
                "ui-ux-principles",
                ("مبادئ تصميم واجهات وتجربة المستخدم", "UI/UX Design Principles"),
                (
                    "من أبحاث المستخدم إلى النماذج الأولية في Figma.",
                    "From user research to interactive prototypes in Figma.",
                ),
                ("٨ ساعات", "8 hours"),
                ("متوسط", "Intermediate"),
            )
        },
        Course {
            rating: Some(4.9),
            learners: Some("1.2M"),
            bestseller: true,
            certificate: true,
            path: Some(PathLink {
                id: 3,
                title: Bilingual::new("مسار الذكاء الاصطناعي", "Artificial Intelligence Path"),
            }),
            pricing: free(),
            ..course(
                10,
                "python",
                Some("basics"),
                "python-programming-basics",
                ("أساسيات البرمجة ببايثون", "Python Programming Basics"),
                (
                    "أول خطوة في البرمجة: المتغيرات والحلقات والدوال.",
                    "Your first step into programming: variables, loops and functions.",
                ),
                ("٥ ساعات", "5 hours"),
                ("مبتدئ", "Beginner"),
            )
        },
        Course {
            rating: Some(4.6),
            learners: Some("30k"),
            pricing: priced("$29", None, None),
            path: Some(english_path()),
            ..course(
                11,
                "english",
                Some("conversation"),
                "everyday-english-conversation",
                ("محادثة إنجليزية يومية", "Everyday English Conversation"),
                (
                    "تحدث بطلاقة في المواقف اليومية مع تمارين استماع.",
                    "Speak fluently in everyday situations with listening drills.",
                ),
                ("١٠ ساعات", "10 hours"),
                ("جميع المستويات", "All levels"),
            )
        },
        Course {
            rating: Some(4.3),
            learners: Some("4k"),
            certificate: true,
            pricing: priced("$49", None, None),
            path: Some(english_path()),
            ..course(
                12,
                "english",
                Some("business"),
                "business-english-communication",
                ("التواصل بالإنجليزية في بيئة العمل", "Business English Communication"),
                (
                    "اكتب رسائل بريد مهنية وأدر الاجتماعات بثقة.",
                    "Write professional emails and run meetings with confidence.",
                ),
                ("٦ ساعات", "6 hours"),
                ("متوسط", "Intermediate"),
            )
        },
        Course {
            rating: Some(4.2),
            learners: Some("2.5k"),
            pricing: free(),
            path: Some(english_path()),
            ..course(
                13,
                "english",
                None,
                "english-grammar-essentials",
                ("قواعد اللغة الإنجليزية الأساسية", "English Grammar Essentials"),
                (
                    "الأزمنة وتركيب الجمل والأخطاء الشائعة.",
                    "Tenses, sentence structure and common mistakes.",
                ),
                ("٤ ساعات", "4 hours"),
                ("مبتدئ", "Beginner"),
            )
        },
        Course {
            rating: Some(4.5),
            learners: Some("11k"),
            is_new: true,
            pricing: priced("$35", Some("$70"), Some(50)),
            ..course(
                14,
                "business",
                Some("marketing"),
                "digital-marketing-fundamentals",
                ("أساسيات التسويق الرقمي", "Digital Marketing Fundamentals"),
                (
                    "خطط لحملات على وسائل التواصل وقِس نتائجها.",
                    "Plan social media campaigns and measure their results.",
                ),
                ("٨ ساعات", "8 hours"),
                ("مبتدئ", "Beginner"),
            )
        },
        Course {
            rating: Some(4.7),
            learners: Some("3.6k"),
            certificate: true,
            institution: Some(Bilingual::new("معهد الإدارة", "Management Institute")),
            pricing: priced("$199", Some("$249"), Some(20)),
            ..course(
                15,
                "business",
                Some("management"),
                "project-management-professional",
                ("احتراف إدارة المشاريع", "Project Management Professional"),
                (
                    "تخطيط المشاريع وإدارة المخاطر والتحضير لشهادة PMP.",
                    "Project planning, risk management and PMP exam preparation.",
                ),
                ("٣٥ ساعة", "35 hours"),
                ("متقدم", "Advanced"),
            )
        },
        Course {
            rating: None,
            learners: None,
            is_new: true,
            pricing: Pricing::default(),
            ..course(
                16,
                "programming",
                Some("mobile"),
                "flutter-mobile-apps",
                ("تطبيقات الجوال باستخدام Flutter", "Flutter Mobile Apps"),
                (
                    "ابنِ تطبيقًا واحدًا يعمل على أندرويد و iOS.",
                    "Build one app that runs on Android and iOS.",
                ),
                ("١٥ ساعة", "15 hours"),
                ("متوسط", "Intermediate"),
            )
        },
        Course {
            rating: Some(4.8),
            learners: Some("2.1k"),
            is_new: true,
            certificate: true,
            pricing: priced("$149", None, None),
            path: Some(PathLink {
                id: 3,
                title: Bilingual::new("مسار الذكاء الاصطناعي", "Artificial Intelligence Path"),
            }),
            ..course(
                17,
                "python",
                Some("ai"),
                "deep-learning-python",
                ("التعلم العميق", "Deep Learning"),
                (
                    "شبكات عصبية باستخدام PyTorch من النظرية إلى التطبيق.",
                    "Neural networks with PyTorch, from theory to practice.",
                ),
                ("٢٤ ساعة", "24 hours"),
                ("متقدم", "Advanced"),
            )
        },
        Course {
            rating: Some(4.1),
            learners: Some("780"),
            pricing: priced("$25", None, None),
            ..course(
                18,
                "business",
                None,
                "entrepreneurship-101",
                ("ريادة الأعمال ١٠١", "Entrepreneurship 101"),
                (
                    "حوّل فكرتك إلى مشروع قابل للنمو.",
                    "Turn your idea into a business that can grow.",
                ),
                ("٣ ساعات", "3 hours"),
                ("مبتدئ", "Beginner"),
            )
        },
    ]
});

/// Every course, in catalog order.
pub fn courses() -> &'static [Course] {
    &COURSES
}

/// Every category, `featured` first.
pub fn categories() -> &'static [Category] {
    &CATEGORIES
}

/// Subcategory table keyed by parent category.
pub fn subcategories() -> &'static HashMap<&'static str, Vec<Subcategory>> {
    &SUBCATEGORIES
}

/// Check that every course points at a real category and one of its
/// subcategories, and that ids are unique.
pub fn validate(
    courses: &[Course],
    categories: &[Category],
    subcategories: &HashMap<&'static str, Vec<Subcategory>>,
) -> Result<(), CatalogError> {
    let mut seen = std::collections::HashSet::new();
    for course in courses {
        if !seen.insert(course.id) {
            return Err(CatalogError::DuplicateId(course.id));
        }
        let known = categories
            .iter()
            .any(|c| c.key == course.category && c.key != FEATURED);
        if !known {
            return Err(CatalogError::UnknownCategory {
                id: course.id,
                category: course.category.to_string(),
            });
        }
        if let Some(subcategory) = course.subcategory {
            let belongs = subcategories
                .get(course.category)
                .is_some_and(|subs| subs.iter().any(|s| s.key == subcategory));
            if !belongs {
                return Err(CatalogError::ForeignSubcategory {
                    id: course.id,
                    category: course.category.to_string(),
                    subcategory: subcategory.to_string(),
                });
            }
        }
    }
    Ok(())
}

fn category(
    key: &'static str,
    ar: &str,
    en: &str,
    color: &'static str,
    gradient: &'static str,
    icon: &'static str,
) -> Category {
    Category {
        key,
        name: Bilingual::new(ar, en),
        color,
        gradient,
        icon,
    }
}

fn sub(key: &'static str, ar: &str, en: &str) -> Subcategory {
    Subcategory {
        key,
        name: Bilingual::new(ar, en),
    }
}

#[allow(clippy::too_many_arguments)]
fn course(
    id: u32,
    category: &'static str,
    subcategory: Option<&'static str>,
    slug: &'static str,
    title: (&str, &str),
    description: (&str, &str),
    duration: (&str, &str),
    level: (&str, &str),
) -> Course {
    Course {
        id,
        title: Bilingual::new(title.0, title.1),
        description: Bilingual::new(description.0, description.1),
        category,
        subcategory,
        image: "/assets/courses/placeholder.webp",
        duration: Bilingual::new(duration.0, duration.1),
        level: Bilingual::new(level.0, level.1),
        slug,
        rating: None,
        learners: None,
        pricing: Pricing::default(),
        bestseller: false,
        is_new: false,
        certificate: false,
        instructor: None,
        institution: None,
        path: None,
    }
}

fn priced(price: &str, original: Option<&str>, discount: Option<u8>) -> Pricing {
    Pricing {
        price: Some(price.to_string()),
        original_price: original.map(str::to_string),
        discount_percent: discount,
        free: false,
    }
}

fn free() -> Pricing {
    Pricing {
        free: true,
        ..Pricing::default()
    }
}

fn web_path() -> PathLink {
    PathLink {
        id: 1,
        title: Bilingual::new("مسار مطوّر الويب", "Web Developer Path"),
    }
}

fn data_path() -> PathLink {
    PathLink {
        id: 2,
        title: Bilingual::new("مسار تحليل البيانات", "Data Analysis Path"),
    }
}

fn english_path() -> PathLink {
    PathLink {
        id: 4,
        title: Bilingual::new("مسار اللغة الإنجليزية للأعمال", "Business English Path"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bundled_dataset_is_consistent() {
        assert_eq!(validate(courses(), categories(), subcategories()), Ok(()));
    }

    #[test]
    fn unknown_category_is_reported() {
        let mut broken = courses()[0].clone();
        broken.category = "cooking";
        let err = validate(&[broken], categories(), subcategories()).unwrap_err();
        assert_eq!(
            err,
            CatalogError::UnknownCategory {
                id: 1,
                category: "cooking".into()
            }
        );
    }

    #[test]
    fn subcategory_from_another_category_is_reported() {
        let mut broken = courses()[0].clone();
        broken.subcategory = Some("conversation");
        assert!(matches!(
            validate(&[broken], categories(), subcategories()),
            Err(CatalogError::ForeignSubcategory { id: 1, .. })
        ));
    }

    #[test]
    fn featured_is_not_a_course_category() {
        let mut broken = courses()[0].clone();
        broken.category = FEATURED;
        assert!(validate(&[broken], categories(), subcategories()).is_err());
    }

    #[test]
    fn duplicate_ids_are_reported() {
        let course = courses()[0].clone();
        assert_eq!(
            validate(&[course.clone(), course], categories(), subcategories()),
            Err(CatalogError::DuplicateId(1))
        );
    }
}
