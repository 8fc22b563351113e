use super::model::Course;
use super::query::courses_in_category;

/// Summary figures shown in a category hero.
#[derive(Debug, Clone, PartialEq)]
pub struct CategoryStats {
    pub course_count: usize,
    /// Mean over rated courses, one decimal. `None` when nothing is rated.
    pub average_rating: Option<f32>,
    /// Aggregate learner count, re-formatted for display.
    pub learners: String,
}

impl CategoryStats {
    pub fn for_category(key: &str) -> Self {
        Self::from_courses(&courses_in_category(key))
    }

    pub fn from_courses(courses: &[&Course]) -> Self {
        let ratings: Vec<f32> = courses.iter().filter_map(|c| c.rating).collect();
        let average_rating = if ratings.is_empty() {
            None
        } else {
            let mean = ratings.iter().sum::<f32>() / ratings.len() as f32;
            Some((mean * 10.0).round() / 10.0)
        };
        let total: u64 = courses
            .iter()
            .filter_map(|c| c.learners)
            .map(parse_learners)
            .sum();

        Self {
            course_count: courses.len(),
            average_rating,
            learners: format_learners(total),
        }
    }
}

/// Parse `"12.5k"`, `"1.2M"` or `"850"` into a head count. Malformed input is 0.
pub fn parse_learners(raw: &str) -> u64 {
    let raw = raw.trim();
    let (number, multiplier) = match raw.chars().last() {
        Some('k' | 'K') => (&raw[..raw.len() - 1], 1_000.0),
        Some('m' | 'M') => (&raw[..raw.len() - 1], 1_000_000.0),
        _ => (raw, 1.0),
    };
    let cleaned: String = number.chars().filter(|c| *c != ',').collect();
    match cleaned.trim().parse::<f64>() {
        Ok(value) if value.is_finite() && value > 0.0 => (value * multiplier).round() as u64,
        _ => 0,
    }
}

/// `12500` → `"12.5k"`, `45000` → `"45k"`, `850` → `"850"`.
pub fn format_learners(total: u64) -> String {
    if total < 1_000 {
        return total.to_string();
    }
    let thousands = format!("{:.1}", total as f64 / 1_000.0);
    let thousands = thousands.strip_suffix(".0").unwrap_or(&thousands);
    format!("{thousands}k")
}
