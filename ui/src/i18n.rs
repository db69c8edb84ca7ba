//! Internationalization (i18n) support for `civicsite-ui`.
//!
//! This module wires together:
//! - `i18n-embed` (language negotiation + asset loading)
//! - `i18n_embed::fluent` (message formatting)
//! - `rust-embed` (compile-time embedding of `.ftl` files)
//! - `i18n-embed-fl` (`fl!` macro for compile‑time checked lookups)
//!
//! Folder layout (relative to this crate root):
//! ```text
//! i18n.toml
//! i18n/
//!   en/civicsite_ui.ftl   (fallback/reference)
//!   es/civicsite_ui.ftl
//! ```
//!
//! Components never read a process-wide "current language". The active
//! [`Locale`] is passed to them as a prop and every lookup goes through the
//! loader that belongs to that locale:
//! ```ignore
//! use ui::i18n::Locale;
//! let label = ui::t!(Locale::Spanish, "contact-survey-text");
//! ```
//!
//! To add a new locale:
//! 1. Add a variant to [`Locale`] and extend the `match`es (the compiler will
//!    point at every table that needs an entry, including the survey links).
//! 2. Copy `en/civicsite_ui.ftl` to `i18n/<code>/civicsite_ui.ftl` and translate it.
//! 3. Run tests to ensure completeness.
use std::fmt;
use std::str::FromStr;

use i18n_embed::fluent::FluentLanguageLoader;
use once_cell::sync::Lazy;
use rust_embed::Embed;
use serde::{Deserialize, Serialize};
use unic_langid::LanguageIdentifier;

use crate::error::LocaleError;

pub use i18n_embed_fl::fl; // Re-export for convenience.

/// Translation macro bound to an explicit locale.
/// Example:
///     t!(locale, "contact-survey-text")
///
/// Fluent arguments follow the key as `name = value` pairs. Expands to
/// `fl!(loader(locale), ...)`, so keys are checked against the fallback FTL
/// at compile time. `fl!` reads `i18n.toml` of the crate it expands in, so
/// the macro is only usable inside this crate; pages live in `views`.
#[macro_export]
macro_rules! t {
    ($locale:expr, $key:literal) => {
        $crate::i18n::fl!($crate::i18n::loader($locale), $key)
    };
    ($locale:expr, $key:literal, $( $arg:ident = $value:expr ),+ $(,)?) => {
        $crate::i18n::fl!($crate::i18n::loader($locale), $key, $( $arg = $value ),+ )
    };
}

/// Fluent "domain". `fl!` derives it from the crate name (hyphens become
/// underscores), so every locale folder holds `civicsite_ui.ftl`.
pub(crate) const DOMAIN: &str = "civicsite_ui";

/// Embed all locale folders under `i18n/`.
#[derive(Embed)]
#[folder = "i18n"]
struct Localizations;

/// A supported UI locale.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Locale {
    #[default]
    #[serde(rename = "en")]
    English,
    #[serde(rename = "es")]
    Spanish,
}

impl Locale {
    /// Every supported locale, in selector order.
    pub const ALL: [Locale; 2] = [Locale::English, Locale::Spanish];

    /// Locale used whenever a code has no translation set.
    pub const DEFAULT: Locale = Locale::English;

    pub fn code(self) -> &'static str {
        match self {
            Locale::English => "en",
            Locale::Spanish => "es",
        }
    }

    /// Total mapping from an arbitrary locale code to a supported locale.
    ///
    /// Only the exact code `"es"` selects Spanish. Every other value,
    /// including region-qualified tags such as `"es-MX"`, resolves to
    /// [`Locale::DEFAULT`].
    pub fn resolve(code: &str) -> Locale {
        match code {
            "es" => Locale::Spanish,
            "en" => Locale::English,
            other => {
                tracing::debug!(
                    code = other,
                    fallback = Locale::DEFAULT.code(),
                    "unsupported locale, falling back"
                );
                Locale::DEFAULT
            }
        }
    }

    /// Map a negotiated language identifier onto a supported locale using its
    /// primary language subtag (`es-MX` -> `es`).
    pub fn from_language_identifier(id: &LanguageIdentifier) -> Locale {
        Locale::resolve(id.language.as_str())
    }

    pub fn language_identifier(self) -> LanguageIdentifier {
        match self {
            Locale::English => unic_langid::langid!("en"),
            Locale::Spanish => unic_langid::langid!("es"),
        }
    }
}

impl FromStr for Locale {
    type Err = LocaleError;

    /// Strict parse: unlike [`Locale::resolve`], unknown codes are an error.
    fn from_str(code: &str) -> Result<Self, Self::Err> {
        match code.trim() {
            "" => Err(LocaleError::Empty),
            "en" => Ok(Locale::English),
            "es" => Ok(Locale::Spanish),
            other => Err(LocaleError::Unsupported(other.to_string())),
        }
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

static ENGLISH: Lazy<FluentLanguageLoader> = Lazy::new(|| build_loader(Locale::English));
static SPANISH: Lazy<FluentLanguageLoader> = Lazy::new(|| build_loader(Locale::Spanish));

fn build_loader(locale: Locale) -> FluentLanguageLoader {
    let loader = FluentLanguageLoader::new(DOMAIN, Locale::DEFAULT.language_identifier());
    if let Err(err) = i18n_embed::select(&loader, &Localizations, &[locale.language_identifier()]) {
        tracing::warn!(
            locale = locale.code(),
            %err,
            "failed loading translations; continuing with fallback"
        );
    }
    loader
}

/// Loader holding the messages of `locale` (with the English fallback behind it).
pub fn loader(locale: Locale) -> &'static FluentLanguageLoader {
    match locale {
        Locale::English => &*ENGLISH,
        Locale::Spanish => &*SPANISH,
    }
}

/// Explicitly passed locale context: the active locale plus translation lookup.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct LocaleContext {
    locale: Locale,
}

impl LocaleContext {
    pub fn new(locale: Locale) -> Self {
        Self { locale }
    }

    /// Build a context from a raw locale code, applying the fallback rule.
    pub fn from_code(code: &str) -> Self {
        Self::new(Locale::resolve(code))
    }

    pub fn current_locale(&self) -> Locale {
        self.locale
    }

    /// Runtime-keyed lookup. Prefer `t!` for literal keys (compile-time checked).
    /// Missing keys are handled by the Fluent loader (it returns a marker string).
    pub fn translate(&self, key: &str) -> String {
        loader(self.locale).get(key)
    }
}

/// List available (embedded) language identifiers.
pub fn available_languages() -> Vec<String> {
    let mut langs = Localizations::iter()
        .filter_map(|path| path.split('/').next().map(|s| s.to_string()))
        .collect::<Vec<_>>();
    langs.sort();
    langs.dedup();
    langs
}

/// Locale requested by the platform (browser `navigator.languages` on web, the
/// OS locale list on native), resolved through [`Locale::resolve`].
pub fn requested_locale() -> Locale {
    requested_languages()
        .first()
        .map(Locale::from_language_identifier)
        .unwrap_or(Locale::DEFAULT)
}

#[cfg(target_arch = "wasm32")]
fn requested_languages() -> Vec<LanguageIdentifier> {
    i18n_embed::WebLanguageRequester::requested_languages()
}

#[cfg(not(target_arch = "wasm32"))]
fn requested_languages() -> Vec<LanguageIdentifier> {
    i18n_embed::DesktopLanguageRequester::requested_languages()
}
