//! Static course catalog and the pure query pipeline over it.
//!
//! Nothing in here touches the UI: pages hand a [`CatalogQuery`] to [`run`]
//! and render whatever comes back. The dataset is built once and never
//! mutated; sorting always works on a copy of the reference list.

mod data;
mod filters;
mod model;
mod query;
mod stats;

pub use data::{categories, courses, subcategories, validate, CatalogError};
pub use filters::{FilterState, ViewMode};
pub use model::{Category, Course, PathLink, Pricing, Subcategory, ALL_SUBCATEGORIES, FEATURED};
pub use query::{
    category_by_key, course_by_id, courses_in_category, parse_price, run, subcategories_of,
    CatalogQuery, SortKey,
};
pub use stats::{format_learners, parse_learners, CategoryStats};
