use dioxus::prelude::*;

use crate::components::{AppNavbar, Footer};
use crate::i18n::use_language;
use crate::routing::{use_navigator, Page};
use crate::views::{
    About, BlogPage, BreadcrumbsDemo, CarouselDemo, CategoriesPage, CourseDetail, CoursesPage,
    Faq, Features, Home, MyPaths, PathDetail, PathsPage, Teach,
};

/// Page chrome plus whichever view the navigator points at.
///
/// `main` is keyed by the navigator generation, so every navigation or
/// back/forward step mounts the view afresh.
#[component]
pub fn Shell() -> Element {
    let lang = use_language();
    let navigator = use_navigator();
    let (page, generation) = {
        let nav = navigator.read();
        (nav.page(), nav.generation())
    };

    rsx! {
        div {
            class: "app",
            dir: lang.dir().as_str(),
            lang: lang.html_lang(),
            AppNavbar {}
            main { key: "{generation}", class: "app__main", {render_page(page)} }
            Footer {}
        }
    }
}

fn render_page(page: Page) -> Element {
    match page {
        Page::Home => rsx! { Home {} },
        Page::Features => rsx! { Features {} },
        Page::Categories => rsx! { CategoriesPage {} },
        Page::Courses { category } => rsx! { CoursesPage { category } },
        Page::Paths => rsx! { PathsPage {} },
        Page::PathDetail { id } => rsx! { PathDetail { id } },
        Page::MyPaths => rsx! { MyPaths {} },
        Page::Teach => rsx! { Teach {} },
        Page::Blog => rsx! { BlogPage {} },
        Page::Course => rsx! { CourseDetail {} },
        Page::About => rsx! { About {} },
        Page::Faq => rsx! { Faq {} },
        Page::Breadcrumbs => rsx! { BreadcrumbsDemo {} },
        Page::Carousel => rsx! { CarouselDemo {} },
    }
}
