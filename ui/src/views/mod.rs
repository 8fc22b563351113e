//! One component per page the shell can show.

mod about;
mod blog;
mod catalog;
mod categories;
mod course;
mod demos;
mod faq;
mod features;
mod home;
mod paths;
mod teach;

pub use about::About;
pub use blog::{format_published, BlogPage};
pub use catalog::CoursesPage;
pub use categories::CategoriesPage;
pub use course::CourseDetail;
pub use demos::{BreadcrumbsDemo, CarouselDemo};
pub use faq::Faq;
pub use features::Features;
pub use home::Home;
pub use paths::{MyPaths, PathDetail, PathsPage};
pub use teach::Teach;
