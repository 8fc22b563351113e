use dioxus::prelude::*;

use super::NavLink;
use crate::i18n::use_language;
use crate::t;

#[component]
pub fn Footer() -> Element {
    let _lang = use_language();

    rsx! {
        footer { class: "footer",
            div { class: "footer__inner",
                div { class: "footer__brand",
                    span { class: "footer__mark", {t!("brand-name")} }
                    p { class: "footer__tagline", {t!("footer-tagline")} }
                }
                nav { class: "footer__links",
                    NavLink { to: "about", class: "footer__link", {t!("nav-about")} }
                    NavLink { to: "faq", class: "footer__link", {t!("nav-faq")} }
                    NavLink { to: "teach", class: "footer__link", {t!("nav-teach")} }
                    NavLink { to: "blog", class: "footer__link", {t!("nav-blog")} }
                }
                p { class: "footer__copyright", {t!("footer-copyright")} }
            }
        }
    }
}
