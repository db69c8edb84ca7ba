//! Static site configuration compiled into the UI crate.

use crate::i18n::Locale;

/// Destination of the site-satisfaction survey, one URL per supported locale.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[allow(non_snake_case)]
pub struct SurveyLinkTable {
    pub EN: &'static str,
    pub ES: &'static str,
}

impl SurveyLinkTable {
    /// Survey URL for `locale`. Total over [`Locale`], so every locale that can
    /// reach a render has a destination.
    pub fn href(&self, locale: Locale) -> &'static str {
        match locale {
            Locale::English => self.EN,
            Locale::Spanish => self.ES,
        }
    }
}

pub const SITE_SATISFACTION_SURVEY_LINKS: SurveyLinkTable = SurveyLinkTable {
    EN: "https://surveys.civicsite.example/site-satisfaction/en",
    ES: "https://surveys.civicsite.example/site-satisfaction/es",
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_locale_has_an_https_destination() {
        for locale in Locale::ALL {
            let href = SITE_SATISFACTION_SURVEY_LINKS.href(locale);
            assert!(href.starts_with("https://"), "{locale}: {href}");
        }
        assert_ne!(
            SITE_SATISFACTION_SURVEY_LINKS.EN,
            SITE_SATISFACTION_SURVEY_LINKS.ES
        );
    }

    #[test]
    fn unknown_codes_use_the_english_link() {
        let links = SITE_SATISFACTION_SURVEY_LINKS;
        let href = |code: &str| links.href(Locale::resolve(code));
        assert_eq!(href("es"), links.ES);
        assert_eq!(href("en"), links.EN);
        assert_eq!(href("fr"), links.EN);
        assert_eq!(href("es-ES"), links.EN);
    }
}
