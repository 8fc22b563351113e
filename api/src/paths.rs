use dioxus::prelude::*;

use crate::model::{Bilingual, LearningPath};

/// Learning-path listing served to the paths page.
///
/// Callers render loading / error / success themselves; there is no retry here.
#[server]
pub async fn get_paths() -> Result<Vec<LearningPath>, ServerFnError> {
    let paths = sample_paths();
    tracing::debug!(count = paths.len(), "serving learning paths");
    Ok(paths)
}

/// Where this build reads the path listing from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PathSource {
    /// The `get_paths` server function.
    Remote,
    /// [`sample_paths`], for native clients with no server to call.
    Bundled,
}

impl PathSource {
    pub const fn current() -> Self {
        if cfg!(any(target_arch = "wasm32", feature = "server")) {
            Self::Remote
        } else {
            Self::Bundled
        }
    }
}

/// The path listing from whichever source this build has.
pub async fn load_paths() -> Result<Vec<LearningPath>, ServerFnError> {
    match PathSource::current() {
        PathSource::Remote => get_paths().await,
        PathSource::Bundled => Ok(sample_paths()),
    }
}

/// The bundled path listing.
pub fn sample_paths() -> Vec<LearningPath> {
    vec![
        LearningPath {
            id: 1,
            title: Bilingual::new("مسار مطوّر الويب", "Web Developer Path"),
            description: Bilingual::new(
                "من أساسيات HTML إلى تطبيقات React كاملة.",
                "From HTML basics to complete React applications.",
            ),
            level: Bilingual::new("مبتدئ", "Beginner"),
            duration: Bilingual::new("٦ أشهر", "6 months"),
            course_ids: vec![1, 2, 3],
            learners: "18.2k".into(),
        },
        LearningPath {
            id: 2,
            title: Bilingual::new("مسار تحليل البيانات", "Data Analysis Path"),
            description: Bilingual::new(
                "حلّل البيانات باستخدام Excel وبايثون وأدوات التصوير.",
                "Analyze data with Excel, Python and visualization tools.",
            ),
            level: Bilingual::new("متوسط", "Intermediate"),
            duration: Bilingual::new("٤ أشهر", "4 months"),
            course_ids: vec![6, 7, 4, 10],
            learners: "9.6k".into(),
        },
        LearningPath {
            id: 3,
            title: Bilingual::new("مسار الذكاء الاصطناعي", "Artificial Intelligence Path"),
            description: Bilingual::new(
                "ابدأ ببايثون وانتهِ ببناء نماذج تعلم الآلة.",
                "Start with Python and finish by building machine learning models.",
            ),
            level: Bilingual::new("متقدم", "Advanced"),
            duration: Bilingual::new("٨ أشهر", "8 months"),
            course_ids: vec![4, 5, 10],
            learners: "7.1k".into(),
        },
        LearningPath {
            id: 4,
            title: Bilingual::new("مسار اللغة الإنجليزية للأعمال", "Business English Path"),
            description: Bilingual::new(
                "تواصل بثقة في الاجتماعات والمراسلات المهنية.",
                "Communicate confidently in meetings and professional email.",
            ),
            level: Bilingual::new("جميع المستويات", "All levels"),
            duration: Bilingual::new("٣ أشهر", "3 months"),
            course_ids: vec![11, 12, 13],
            learners: "22k".into(),
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sample_paths_have_unique_ids() {
        let paths = sample_paths();
        let mut ids: Vec<u32> = paths.iter().map(|p| p.id).collect();
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), paths.len());
    }

    #[cfg(not(feature = "server"))]
    #[test]
    fn native_client_reads_bundled_listing() {
        assert_eq!(PathSource::current(), PathSource::Bundled);
        let loaded = futures::executor::block_on(load_paths()).unwrap();
        assert_eq!(loaded, sample_paths());
    }

    #[test]
    fn every_path_lists_courses() {
        assert!(sample_paths().iter().all(|p| !p.course_ids.is_empty()));
    }
}
