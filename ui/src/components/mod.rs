//! Building blocks shared by several views.

mod app_navbar;
pub use app_navbar::AppNavbar;

mod breadcrumbs;
pub use breadcrumbs::{breadcrumb_trail, Breadcrumbs, Crumb};

mod cards;
pub use cards::{CategoryCard, CourseCard, PathCard};

mod carousel;
pub use carousel::{wrap_index, Carousel};

mod footer;
pub use footer::Footer;

mod nav_link;
pub use nav_link::NavLink;
