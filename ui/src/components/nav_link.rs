use dioxus::prelude::*;

use crate::routing::{page_to_url, split_target, use_navigator};

/// An anchor that navigates in-app instead of reloading.
///
/// `to` is a page key, optionally with a `?search=` suffix.
#[component]
pub fn NavLink(
    #[props(into)] to: String,
    #[props(default, into)] class: String,
    children: Element,
) -> Element {
    let mut navigator = use_navigator();
    let href = {
        let (page, _) = split_target(&to);
        page_to_url(page.as_str())
    };

    rsx! {
        a {
            class: "{class}",
            href: "{href}",
            onclick: move |evt: MouseEvent| {
                evt.prevent_default();
                navigator.write().navigate(&to);
            },
            {children}
        }
    }
}
