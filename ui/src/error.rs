//! Error types for locale handling.

use thiserror::Error;

/// Errors raised when a locale code is parsed strictly.
///
/// Rendering never produces these: components go through
/// [`Locale::resolve`](crate::i18n::Locale::resolve), which falls back to
/// English instead of failing.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LocaleError {
    /// The code is well formed but no translation set exists for it.
    #[error("unsupported locale `{0}` (supported: en, es)")]
    Unsupported(String),

    /// The code is empty or whitespace.
    #[error("empty locale code")]
    Empty,
}
