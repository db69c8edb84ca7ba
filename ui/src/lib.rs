//! Shared UI crate for Civicsite: the government banner, the survey
//! call-to-action, the landing page and the locale plumbing they share.

pub mod config;
pub mod error;
pub mod i18n;
pub mod theme;

pub mod views {
    mod home;
    pub use home::Home;
}

pub mod components {
    // Design-system widgets (components/design_system.rs)
    pub mod design_system;
    pub use design_system::{BannerLanguage, Button, GovBanner, MainGridContainer};

    // Locale switcher (components/language.rs)
    pub mod language;
    pub use language::LanguageSelector;

    pub mod government_banner;
    pub use government_banner::GovernmentBanner;

    pub mod survey_button;
    pub use survey_button::SurveyButton;
}

pub use error::LocaleError;
pub use i18n::{Locale, LocaleContext};

#[cfg(test)]
mod tests {
    mod i18n_completeness;
}
