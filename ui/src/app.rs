use dioxus::prelude::*;

use crate::catalog;
use crate::core::platform::{self, DocumentSettings, Platform};
use crate::core::storage::{self, Preferences};
use crate::i18n::{self, Language};
use crate::routing::{Navigator, PlatformHistory};

/// Install the session-wide state every view reads from context:
/// the active [`Language`] and the [`Navigator`].
///
/// Call once at the platform root, before rendering [`Shell`](crate::Shell).
pub fn use_app_state(history: impl FnOnce() -> PlatformHistory) {
    let language = use_context_provider(|| {
        let initial = i18n::initial_language();
        i18n::init(initial);
        tracing::info!(language = %initial, platform = ?Platform::current(), "academy starting");
        if let Err(err) = catalog::validate(
            catalog::courses(),
            catalog::categories(),
            catalog::subcategories(),
        ) {
            tracing::error!(%err, "bundled catalog is inconsistent");
        }
        Signal::new(initial)
    });

    let navigator = use_context_provider(|| {
        let mut navigator = Navigator::new(history());
        navigator.establish();
        Signal::new(navigator)
    });

    use_pop_listener(navigator);

    // One place for the document-level effect of a language change.
    use_effect(move || {
        platform::apply_document_settings(DocumentSettings::for_language(language()));
    });
}

/// Switch language: bundle first so the re-render already sees it, then the
/// signal, then the stored preference.
pub fn change_language(mut language: Signal<Language>, next: Language) {
    if let Err(err) = i18n::set_language(next) {
        tracing::warn!(%err, language = %next, "language bundle unavailable");
        return;
    }
    language.set(next);
    if let Err(err) = storage::save_preferences(&Preferences { language: next }) {
        tracing::warn!(%err, "could not persist language preference");
    }
}

/// Forward browser back/forward events to the navigator.
#[cfg(target_arch = "wasm32")]
fn use_pop_listener(mut navigator: Signal<Navigator<PlatformHistory>>) {
    use futures_util::StreamExt;
    use wasm_bindgen::{closure::Closure, JsCast};

    use_hook(move || {
        let (tx, mut rx) = futures_channel::mpsc::unbounded::<()>();

        spawn(async move {
            while rx.next().await.is_some() {
                navigator.write().on_pop();
            }
        });

        let Some(window) = web_sys::window() else {
            tracing::warn!("no window; back/forward navigation disabled");
            return;
        };
        let listener = Closure::<dyn FnMut(web_sys::Event)>::new(move |_: web_sys::Event| {
            let _ = tx.unbounded_send(());
        });
        if let Err(err) =
            window.add_event_listener_with_callback("popstate", listener.as_ref().unchecked_ref())
        {
            tracing::warn!(?err, "could not listen for popstate");
        }
        // The shell lives as long as the page.
        listener.forget();
    });
}

/// The in-memory history only moves when the navigator moves it.
#[cfg(not(target_arch = "wasm32"))]
fn use_pop_listener(_navigator: Signal<Navigator<PlatformHistory>>) {}
