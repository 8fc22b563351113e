//! Shared contracts and server functions for the academy site.
//!
//! Types here cross the client/server boundary, so everything is serde-ready.

mod model;
mod paths;

pub use model::{Bilingual, LearningPath};
pub use paths::{get_paths, load_paths, sample_paths, PathSource};
