use super::data::{categories, courses, subcategories};
use super::model::{Category, Course, Subcategory, ALL_SUBCATEGORIES, FEATURED};

/// Catalog ordering. Unknown keys parse as [`SortKey::Featured`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortKey {
    /// Dataset order.
    #[default]
    Featured,
    Rating,
    PriceLow,
    PriceHigh,
    Newest,
}

impl SortKey {
    pub const ALL: [SortKey; 5] = [
        SortKey::Featured,
        SortKey::Rating,
        SortKey::PriceLow,
        SortKey::PriceHigh,
        SortKey::Newest,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Featured => "featured",
            Self::Rating => "rating",
            Self::PriceLow => "price-low",
            Self::PriceHigh => "price-high",
            Self::Newest => "newest",
        }
    }

    pub fn parse(raw: &str) -> Self {
        match raw {
            "rating" => Self::Rating,
            "price-low" => Self::PriceLow,
            "price-high" => Self::PriceHigh,
            "newest" => Self::Newest,
            _ => Self::Featured,
        }
    }
}

/// Parameters of one catalog lookup.
#[derive(Debug, Clone, PartialEq)]
pub struct CatalogQuery {
    pub category: String,
    pub subcategory: Option<String>,
    pub search: String,
    pub sort: SortKey,
}

impl Default for CatalogQuery {
    fn default() -> Self {
        Self {
            category: FEATURED.to_string(),
            subcategory: None,
            search: String::new(),
            sort: SortKey::Featured,
        }
    }
}

impl CatalogQuery {
    pub fn category(mut self, key: impl Into<String>) -> Self {
        self.category = key.into();
        self
    }

    pub fn subcategory(mut self, key: impl Into<String>) -> Self {
        self.subcategory = Some(key.into());
        self
    }

    pub fn search(mut self, text: impl Into<String>) -> Self {
        self.search = text.into();
        self
    }

    pub fn sort(mut self, sort: SortKey) -> Self {
        self.sort = sort;
        self
    }

    fn unfiltered_category(&self) -> bool {
        self.category == FEATURED || self.category == ALL_SUBCATEGORIES
    }

    fn active_subcategory(&self) -> Option<&str> {
        self.subcategory
            .as_deref()
            .filter(|key| *key != ALL_SUBCATEGORIES)
    }
}

/// Filter and order `dataset` for display.
///
/// Ties keep dataset order. An empty result is not an error.
pub fn run<'a>(dataset: &'a [Course], query: &CatalogQuery) -> Vec<&'a Course> {
    let needle = query.search.to_lowercase();
    let subcategory = query.active_subcategory();

    let mut selected: Vec<&Course> = dataset
        .iter()
        .filter(|course| query.unfiltered_category() || course.category == query.category)
        .filter(|course| match subcategory {
            Some(key) => course.subcategory == Some(key),
            None => true,
        })
        .filter(|course| needle.is_empty() || course.matches_text(&needle))
        .collect();

    // `sort_by` is stable, which is what keeps ties in dataset order.
    match query.sort {
        SortKey::Featured => {}
        SortKey::Rating => selected.sort_by(|a, b| rating_of(b).total_cmp(&rating_of(a))),
        SortKey::PriceLow => selected.sort_by_key(|course| price_of(course)),
        SortKey::PriceHigh => selected.sort_by(|a, b| price_of(b).cmp(&price_of(a))),
        SortKey::Newest => selected.sort_by(|a, b| b.id.cmp(&a.id)),
    }

    selected
}

fn rating_of(course: &Course) -> f32 {
    course.rating.unwrap_or(0.0)
}

fn price_of(course: &Course) -> i64 {
    course.price().map(parse_price).unwrap_or(0)
}

/// Parse a display price like `"$1,299"`.
///
/// `$` and `,` are stripped, then the leading integer is read; anything
/// unreadable counts as zero.
pub fn parse_price(raw: &str) -> i64 {
    let cleaned: String = raw
        .chars()
        .filter(|c| *c != '$' && *c != ',')
        .collect();
    let cleaned = cleaned.trim();
    let (negative, digits) = match cleaned.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, cleaned.strip_prefix('+').unwrap_or(cleaned)),
    };
    let leading: String = digits.chars().take_while(char::is_ascii_digit).collect();
    match leading.parse::<i64>() {
        Ok(value) if negative => -value,
        Ok(value) => value,
        Err(_) => 0,
    }
}

/// Courses in one category, unsorted. Reserved keys return everything.
pub fn courses_in_category(key: &str) -> Vec<&'static Course> {
    run(courses(), &CatalogQuery::default().category(key))
}

pub fn category_by_key(key: &str) -> Option<&'static Category> {
    categories().iter().find(|c| c.key == key)
}

/// Subcategories of `key`, empty when the category defines none.
pub fn subcategories_of(key: &str) -> &'static [Subcategory] {
    subcategories()
        .get(key)
        .map(Vec::as_slice)
        .unwrap_or_default()
}

pub fn course_by_id(id: u32) -> Option<&'static Course> {
    courses().iter().find(|c| c.id == id)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ids(result: &[&Course]) -> Vec<u32> {
        result.iter().map(|c| c.id).collect()
    }

    #[test]
    fn excel_category_keeps_dataset_order() {
        let query = CatalogQuery::default()
            .category("excel")
            .subcategory(ALL_SUBCATEGORIES);
        assert_eq!(ids(&run(courses(), &query)), vec![6, 7]);
    }

    #[test]
    fn subcategory_filter_excludes_courses_without_one() {
        let query = CatalogQuery::default()
            .category("english")
            .subcategory("conversation");
        let result = run(courses(), &query);
        assert_eq!(ids(&result), vec![11]);
        assert!(result.iter().all(|c| c.subcategory == Some("conversation")));
    }

    #[test]
    fn search_matches_arabic_text() {
        let query = CatalogQuery::default().search("إكسل");
        let result = run(courses(), &query);
        assert_eq!(ids(&result), vec![6, 7]);
    }

    #[test]
    fn search_is_case_insensitive() {
        let upper = run(courses(), &CatalogQuery::default().search("PYTHON"));
        let lower = run(courses(), &CatalogQuery::default().search("python"));
        assert!(!lower.is_empty());
        assert_eq!(ids(&upper), ids(&lower));
    }

    #[test]
    fn no_match_is_empty_not_error() {
        let query = CatalogQuery::default().search("quantum basket weaving");
        assert!(run(courses(), &query).is_empty());
    }

    #[test]
    fn price_low_puts_free_and_unpriced_first() {
        let query = CatalogQuery::default().sort(SortKey::PriceLow);
        let result = run(courses(), &query);
        let prices: Vec<i64> = result.iter().map(|c| price_of(c)).collect();
        assert!(prices.windows(2).all(|w| w[0] <= w[1]));
        assert_eq!(prices[0], 0);
        assert_eq!(result.last().map(|c| c.id), Some(5));
    }

    #[test]
    fn price_high_reverses_price_low_extremes() {
        let result = run(courses(), &CatalogQuery::default().sort(SortKey::PriceHigh));
        assert_eq!(result.first().map(|c| c.id), Some(5));
    }

    #[test]
    fn rating_ties_keep_dataset_order() {
        let result = run(courses(), &CatalogQuery::default().sort(SortKey::Rating));
        let top: Vec<u32> = result
            .iter()
            .filter(|c| c.rating == Some(4.9))
            .map(|c| c.id)
            .collect();
        assert_eq!(top, vec![4, 10]);
        assert_eq!(ids(&result[..2]), vec![4, 10]);
    }

    #[test]
    fn parse_price_handles_symbols_and_garbage() {
        assert_eq!(parse_price("$1,299"), 1299);
        assert_eq!(parse_price("$49"), 49);
        assert_eq!(parse_price("49.99"), 49);
        assert_eq!(parse_price("free"), 0);
        assert_eq!(parse_price(""), 0);
    }

    #[test]
    fn sort_key_round_trips_and_defaults() {
        for key in SortKey::ALL {
            assert_eq!(SortKey::parse(key.as_str()), key);
        }
        assert_eq!(SortKey::parse("popular"), SortKey::Featured);
    }

    #[test]
    fn helpers_are_total() {
        assert!(category_by_key("python").is_some());
        assert!(category_by_key("cooking").is_none());
        assert_eq!(subcategories_of("excel").len(), 2);
        assert!(subcategories_of("featured").is_empty());
        assert!(subcategories_of("cooking").is_empty());
        assert_eq!(courses_in_category("featured").len(), courses().len());
        assert!(courses_in_category("cooking").is_empty());
    }
}
