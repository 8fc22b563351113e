//! Platform detection and document-level side effects.

use crate::i18n::{Direction, Language};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Platform {
    Web,
    Desktop,
}

impl Platform {
    pub fn current() -> Self {
        if cfg!(target_arch = "wasm32") {
            Self::Web
        } else {
            Self::Desktop
        }
    }
}

/// Presentation attributes derived from the active language.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DocumentSettings {
    pub lang: &'static str,
    pub dir: Direction,
}

impl DocumentSettings {
    pub fn for_language(language: Language) -> Self {
        Self {
            lang: language.html_lang(),
            dir: language.dir(),
        }
    }
}

/// Write `settings` onto the root `<html>` element.
#[cfg(target_arch = "wasm32")]
pub fn apply_document_settings(settings: DocumentSettings) {
    let Some(root) = web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.document_element())
    else {
        tracing::warn!("no document element; presentation settings not applied");
        return;
    };
    for (name, value) in [("lang", settings.lang), ("dir", settings.dir.as_str())] {
        if let Err(err) = root.set_attribute(name, value) {
            tracing::warn!(?err, name, "could not set document attribute");
        }
    }
}

/// Desktop webviews get the direction from the shell's root element instead.
#[cfg(not(target_arch = "wasm32"))]
pub fn apply_document_settings(settings: DocumentSettings) {
    tracing::debug!(lang = settings.lang, dir = settings.dir.as_str(), "document settings");
}

/// Reload the whole page. Returns `false` where there is no page to reload.
#[cfg(target_arch = "wasm32")]
pub fn reload_page() -> bool {
    match web_sys::window().map(|w| w.location().reload()) {
        Some(Ok(())) => true,
        Some(Err(err)) => {
            tracing::warn!(?err, "page reload rejected");
            false
        }
        None => false,
    }
}

#[cfg(not(target_arch = "wasm32"))]
pub fn reload_page() -> bool {
    false
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn arabic_documents_are_rtl() {
        let settings = DocumentSettings::for_language(Language::Ar);
        assert_eq!(settings.lang, "ar");
        assert_eq!(settings.dir, Direction::Rtl);
    }

    #[test]
    fn english_documents_are_ltr() {
        let settings = DocumentSettings::for_language(Language::En);
        assert_eq!(settings.lang, "en");
        assert_eq!(settings.dir, Direction::Ltr);
    }

    #[test]
    fn native_build_reports_desktop() {
        assert_eq!(Platform::current(), Platform::Desktop);
    }

    #[test]
    fn native_build_has_no_page_to_reload() {
        assert!(!reload_page());
    }
}
