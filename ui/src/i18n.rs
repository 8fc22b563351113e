//! Internationalization for `academy-ui`.
//!
//! Two sources of translated text meet here:
//! - Site chrome (navigation, headings, buttons) lives in Fluent bundles under
//!   `i18n/<lang>/academy-ui.ftl`, embedded with `rust-embed` and looked up with
//!   the [`t!`](crate::t) macro (compile-time checked through `i18n-embed-fl`).
//! - Catalog records carry their own [`Bilingual`] pairs, resolved with
//!   [`Localize::text`].
//!
//! Folder layout (relative to this crate root):
//! ```text
//! i18n.toml
//! i18n/
//!   en-US/academy-ui.ftl   (fallback/reference)
//!   ar/academy-ui.ftl
//! ```
//!
//! The active [`Language`] is a `Signal<Language>` provided by the platform
//! crate through context. Switching it re-selects the Fluent bundle and the
//! platform applies the matching [`DocumentSettings`](crate::core::platform::DocumentSettings).
use std::fmt;
use std::sync::Once;

use api::Bilingual;
use dioxus::prelude::*;
use i18n_embed::fluent::FluentLanguageLoader;
use once_cell::sync::Lazy;
use rust_embed::Embed;
use serde::{Deserialize, Serialize};
use unic_langid::LanguageIdentifier;

pub use i18n_embed_fl::fl;

/// Translation macro, e.g. `t!("nav-home")` or
/// `t!("catalog-result-count", count = 12)`.
#[macro_export]
macro_rules! t {
    ($key:literal) => {
        $crate::i18n::fl!(&*$crate::i18n::LOADER, $key)
    };
    ($key:literal, $( $arg:ident = $value:expr ),+ $(,)?) => {
        $crate::i18n::fl!(&*$crate::i18n::LOADER, $key, $( $arg = $value ),+ )
    };
}

/// Fluent domain; the fallback file is `i18n/en-US/{DOMAIN}.ftl`.
const DOMAIN: &str = "academy-ui";

#[derive(Embed)]
#[folder = "i18n"]
struct Localizations;

/// Global language loader used with the `fl!` macro.
pub static LOADER: Lazy<FluentLanguageLoader> = Lazy::new(|| {
    let fallback: LanguageIdentifier = "en-US".parse().expect("valid fallback language identifier");
    FluentLanguageLoader::new(DOMAIN, fallback)
});

static INIT: Once = Once::new();

/// Site languages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    #[default]
    Ar,
    En,
}

/// Text direction of a language.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Rtl,
    Ltr,
}

impl Direction {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Rtl => "rtl",
            Self::Ltr => "ltr",
        }
    }
}

impl Language {
    /// Fluent bundle folder name.
    pub fn tag(self) -> &'static str {
        match self {
            Self::Ar => "ar",
            Self::En => "en-US",
        }
    }

    /// Value for the document's `lang` attribute.
    pub fn html_lang(self) -> &'static str {
        match self {
            Self::Ar => "ar",
            Self::En => "en",
        }
    }

    pub fn dir(self) -> Direction {
        match self {
            Self::Ar => Direction::Rtl,
            Self::En => Direction::Ltr,
        }
    }

    pub fn is_arabic(self) -> bool {
        self == Self::Ar
    }

    pub fn toggled(self) -> Self {
        match self {
            Self::Ar => Self::En,
            Self::En => Self::Ar,
        }
    }

    /// Parse a language tag, ignoring case and any region subtag.
    pub fn parse(tag: &str) -> Option<Self> {
        let primary = tag.trim().split(['-', '_']).next()?.to_ascii_lowercase();
        match primary.as_str() {
            "ar" => Some(Self::Ar),
            "en" => Some(Self::En),
            _ => None,
        }
    }

    /// Inline `t(ar, en)` for one-off strings that do not belong in a bundle.
    pub fn pick<'a>(self, ar: &'a str, en: &'a str) -> &'a str {
        match self {
            Self::Ar => ar,
            Self::En => en,
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

/// Resolve a language-keyed value for the active language.
pub trait Localize {
    fn text(&self, lang: Language) -> &str;
}

impl Localize for Bilingual {
    fn text(&self, lang: Language) -> &str {
        self.pick(lang.is_arabic())
    }
}

/// Initialize i18n (idempotent). Selects the bundle for `initial`.
pub fn init(initial: Language) {
    INIT.call_once(|| {
        if let Err(err) = select(initial) {
            tracing::warn!(%err, "failed selecting language bundle; continuing with fallback");
        }
    });
}

/// Switch the Fluent bundle at runtime.
pub fn set_language(lang: Language) -> Result<(), i18n_embed::I18nEmbedError> {
    select(lang)
}

fn select(lang: Language) -> Result<(), i18n_embed::I18nEmbedError> {
    let id: LanguageIdentifier = lang
        .tag()
        .parse()
        .expect("language tags are valid identifiers");
    i18n_embed::select(&*LOADER, &Localizations, &[id]).map(|_| ())
}

/// List embedded bundle folders.
pub fn available_languages() -> Vec<String> {
    let mut langs = Localizations::iter()
        .filter_map(|path| path.split('/').next().map(|s| s.to_string()))
        .collect::<Vec<_>>();
    langs.sort();
    langs.dedup();
    langs
}

/// Language requested by the OS or browser, if it is one the site speaks.
pub fn requested_language() -> Option<Language> {
    requested_languages()
        .iter()
        .find_map(|id| Language::parse(id.language.as_str()))
}

/// Stored choice, else the OS/browser preference, else Arabic.
pub fn initial_language() -> Language {
    crate::core::storage::load_preferences()
        .map(|prefs| prefs.language)
        .or_else(requested_language)
        .unwrap_or_default()
}

#[cfg(target_arch = "wasm32")]
fn requested_languages() -> Vec<LanguageIdentifier> {
    i18n_embed::WebLanguageRequester::requested_languages()
}

#[cfg(not(target_arch = "wasm32"))]
fn requested_languages() -> Vec<LanguageIdentifier> {
    i18n_embed::DesktopLanguageRequester::requested_languages()
}

/// Active language from context, defaulting when no provider exists.
pub fn use_language() -> Language {
    try_use_context::<Signal<Language>>()
        .map(|lang| lang())
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn both_bundles_are_embedded() {
        let langs = available_languages();
        assert!(langs.iter().any(|l| l == "en-US"));
        assert!(langs.iter().any(|l| l == "ar"));
    }

    #[test]
    fn parse_accepts_region_and_case_variants() {
        assert_eq!(Language::parse("ar-EG"), Some(Language::Ar));
        assert_eq!(Language::parse("EN_us"), Some(Language::En));
        assert_eq!(Language::parse("en"), Some(Language::En));
        assert_eq!(Language::parse("fr-FR"), None);
        assert_eq!(Language::parse(""), None);
    }

    #[test]
    fn direction_follows_language() {
        assert_eq!(Language::Ar.dir(), Direction::Rtl);
        assert_eq!(Language::En.dir(), Direction::Ltr);
        assert_eq!(Language::Ar.toggled(), Language::En);
    }

    #[test]
    fn localize_resolves_bilingual_pairs() {
        let title = Bilingual::new("إكسل", "Excel");
        assert_eq!(title.text(Language::Ar), "إكسل");
        assert_eq!(title.text(Language::En), "Excel");
        assert_eq!(Language::En.pick("نعم", "Yes"), "Yes");
    }

    #[test]
    fn english_lookup_after_switch() {
        set_language(Language::En).unwrap();
        let s = fl!(&*LOADER, "nav-home");
        assert_eq!(s, "Home");
    }
}
