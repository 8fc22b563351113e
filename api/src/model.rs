use serde::{Deserialize, Serialize};

/// A display string carried in both site languages.
///
/// Records keep one `Bilingual` per field instead of `*_ar` / `*_en` pairs,
/// so adding a locale touches this type only.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Bilingual {
    pub ar: String,
    pub en: String,
}

impl Bilingual {
    pub fn new(ar: impl Into<String>, en: impl Into<String>) -> Self {
        Self {
            ar: ar.into(),
            en: en.into(),
        }
    }

    /// Pick the Arabic or English variant.
    pub fn pick(&self, arabic: bool) -> &str {
        if arabic {
            &self.ar
        } else {
            &self.en
        }
    }

    /// Case-insensitive substring match against either variant.
    ///
    /// `needle_lower` must already be lowercased.
    pub fn contains_lowercase(&self, needle_lower: &str) -> bool {
        self.ar.to_lowercase().contains(needle_lower) || self.en.to_lowercase().contains(needle_lower)
    }
}

/// A curated sequence of courses offered as one track.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LearningPath {
    pub id: u32,
    pub title: Bilingual,
    pub description: Bilingual,
    pub level: Bilingual,
    pub duration: Bilingual,
    /// Catalog ids, in the order the path recommends taking them.
    pub course_ids: Vec<u32>,
    /// Display string, e.g. `"12.4k"`.
    pub learners: String,
}
