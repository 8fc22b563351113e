use api::Bilingual;

/// Category key meaning "no category filter".
pub const FEATURED: &str = "featured";

/// Subcategory key meaning "no subcategory filter".
pub const ALL_SUBCATEGORIES: &str = "all";

/// Price and discount details shown on cards. All display strings.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Pricing {
    pub price: Option<String>,
    pub original_price: Option<String>,
    pub discount_percent: Option<u8>,
    pub free: bool,
}

/// Membership of a course in a learning path.
#[derive(Debug, Clone, PartialEq)]
pub struct PathLink {
    pub id: u32,
    pub title: Bilingual,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Course {
    /// Higher ids were added later.
    pub id: u32,
    pub title: Bilingual,
    pub description: Bilingual,
    pub category: &'static str,
    pub subcategory: Option<&'static str>,
    pub image: &'static str,
    pub duration: Bilingual,
    pub level: Bilingual,
    pub slug: &'static str,
    pub rating: Option<f32>,
    /// Display string with an optional `k`/`m` suffix.
    pub learners: Option<&'static str>,
    pub pricing: Pricing,
    pub bestseller: bool,
    pub is_new: bool,
    pub certificate: bool,
    pub instructor: Option<Bilingual>,
    pub institution: Option<Bilingual>,
    pub path: Option<PathLink>,
}

impl Course {
    pub fn price(&self) -> Option<&str> {
        self.pricing.price.as_deref()
    }

    /// Case-insensitive match on the four searchable text fields.
    pub fn matches_text(&self, needle_lower: &str) -> bool {
        self.title.contains_lowercase(needle_lower)
            || self.description.contains_lowercase(needle_lower)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Category {
    pub key: &'static str,
    pub name: Bilingual,
    /// Theme color token, e.g. `"blue"`.
    pub color: &'static str,
    /// Gradient token used by hero sections.
    pub gradient: &'static str,
    /// Short glyph shown on category cards.
    pub icon: &'static str,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Subcategory {
    pub key: &'static str,
    pub name: Bilingual,
}
