//! Design-system widgets (USWDS markup) consumed by the site components.
//!
//! These are leaf widgets with no knowledge of the app's copy tables: the
//! banner owns its own official wording per [`BannerLanguage`], and the button
//! and grid container only contribute markup and base classes.
use std::fmt;

use dioxus::prelude::*;

use crate::i18n::Locale;

/// Languages the government banner widget ships copy for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BannerLanguage {
    English,
    Spanish,
}

impl BannerLanguage {
    /// Spanish for the Spanish locale, English for everything else.
    pub fn for_locale(locale: Locale) -> Self {
        match locale {
            Locale::Spanish => BannerLanguage::Spanish,
            Locale::English => BannerLanguage::English,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            BannerLanguage::English => "english",
            BannerLanguage::Spanish => "spanish",
        }
    }

    fn copy(self) -> &'static BannerCopy {
        match self {
            BannerLanguage::English => &ENGLISH_COPY,
            BannerLanguage::Spanish => &SPANISH_COPY,
        }
    }
}

impl fmt::Display for BannerLanguage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

struct BannerCopy {
    aria_label: &'static str,
    header: &'static str,
    toggle: &'static str,
    domain_heading: &'static str,
    domain_body: &'static str,
    https_heading: &'static str,
    https_body: &'static str,
}

const ENGLISH_COPY: BannerCopy = BannerCopy {
    aria_label: "Official website of the United States government",
    header: "An official website of the United States government",
    toggle: "Here’s how you know",
    domain_heading: "Official websites use .gov",
    domain_body: "A .gov website belongs to an official government organization in the United States.",
    https_heading: "Secure .gov websites use HTTPS",
    https_body: "A lock or https:// means you’ve safely connected to the .gov website. Share sensitive information only on official, secure websites.",
};

const SPANISH_COPY: BannerCopy = BannerCopy {
    aria_label: "Un sitio oficial del Gobierno de Estados Unidos",
    header: "Un sitio oficial del Gobierno de Estados Unidos",
    toggle: "Así es como usted puede verificarlo",
    domain_heading: "Los sitios web oficiales usan .gov",
    domain_body: "Un sitio web .gov pertenece a una organización oficial del Gobierno de Estados Unidos.",
    https_heading: "Los sitios web seguros .gov usan HTTPS",
    https_body: "Un candado o https:// significa que usted se conectó de forma segura a un sitio web .gov. Comparta información sensible sólo en sitios web oficiales y seguros.",
};

const BANNER_CONTENT_ID: &str = "gov-banner-default";

/// Join a widget's base class with caller-supplied classes.
pub(crate) fn classes(base: &str, extra: &str) -> String {
    let extra = extra.trim();
    if extra.is_empty() {
        base.to_string()
    } else {
        format!("{base} {extra}")
    }
}

/// Official government website banner. The guidance panel starts collapsed
/// unless `expanded` is set; the toggle button flips it either way.
#[component]
pub fn GovBanner(language: BannerLanguage, #[props(default)] expanded: bool) -> Element {
    let copy = language.copy();
    let mut expanded = use_signal(|| expanded);

    rsx! {
        section {
            class: "usa-banner",
            aria_label: copy.aria_label,
            "data-language": language.as_str(),
            div { class: "usa-banner__header",
                span { class: "usa-banner__flag", aria_hidden: "true" }
                p { class: "usa-banner__header-text", {copy.header} }
                button {
                    r#type: "button",
                    class: "usa-banner__button",
                    aria_expanded: "{expanded()}",
                    aria_controls: BANNER_CONTENT_ID,
                    onclick: move |_| expanded.set(!expanded()),
                    {copy.toggle}
                }
            }
            if expanded() {
                div { class: "usa-banner__content", id: BANNER_CONTENT_ID,
                    div { class: "usa-banner__guidance",
                        p {
                            strong { {copy.domain_heading} }
                            br {}
                            {copy.domain_body}
                        }
                    }
                    div { class: "usa-banner__guidance",
                        p {
                            strong { {copy.https_heading} }
                            br {}
                            {copy.https_body}
                        }
                    }
                }
            }
        }
    }
}

/// Design-system button.
#[component]
pub fn Button(
    #[props(default = "button")] button_type: &'static str,
    #[props(default)] class: String,
    onclick: Option<EventHandler<MouseEvent>>,
    children: Element,
) -> Element {
    rsx! {
        button {
            r#type: button_type,
            class: classes("usa-button", &class),
            onclick: move |evt| {
                if let Some(handler) = onclick {
                    handler.call(evt);
                }
            },
            {children}
        }
    }
}

/// Page-width grid container used by main-column content.
#[component]
pub fn MainGridContainer(#[props(default)] class: String, children: Element) -> Element {
    rsx! {
        div { class: classes("grid-container", &class), {children} }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn render_banner(language: BannerLanguage, expanded: bool) -> String {
        let mut dom = VirtualDom::new_with_props(
            GovBanner,
            GovBannerProps::builder()
                .language(language)
                .expanded(expanded)
                .build(),
        );
        dom.rebuild_in_place();
        dioxus_ssr::render(&dom)
    }

    #[test]
    fn banner_language_follows_the_spanish_code_only() {
        let for_code = |code: &str| BannerLanguage::for_locale(Locale::resolve(code));
        assert_eq!(for_code("es"), BannerLanguage::Spanish);
        assert_eq!(for_code("en"), BannerLanguage::English);
        assert_eq!(for_code("fr"), BannerLanguage::English);
        assert_eq!(BannerLanguage::Spanish.to_string(), "spanish");
    }

    #[test]
    fn classes_skips_empty_extras() {
        assert_eq!(classes("usa-button", ""), "usa-button");
        assert_eq!(classes("usa-button", "  "), "usa-button");
        assert_eq!(classes("usa-button", "survey-button"), "usa-button survey-button");
    }

    #[test]
    fn banner_starts_collapsed_with_localized_label() {
        let html = render_banner(BannerLanguage::Spanish, false);

        assert!(html.contains(r#"data-language="spanish""#), "{html}");
        assert!(html.contains(SPANISH_COPY.aria_label), "{html}");
        assert!(html.contains(r#"aria-expanded="false""#), "{html}");
        assert!(!html.contains("usa-banner__content"), "{html}");
    }

    #[test]
    fn expanded_banner_shows_both_guidance_paragraphs() {
        let html = render_banner(BannerLanguage::English, true);
        assert!(html.contains("usa-banner__content"), "{html}");
        assert!(html.contains(r#"aria-expanded="true""#), "{html}");
        assert!(html.contains(r#"id="gov-banner-default""#), "{html}");
        assert_eq!(html.matches("usa-banner__guidance").count(), 2, "{html}");
        assert!(html.contains(ENGLISH_COPY.domain_heading), "{html}");
        assert!(html.contains(ENGLISH_COPY.https_heading), "{html}");
    }
}
