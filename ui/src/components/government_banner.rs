use dioxus::prelude::*;

use crate::components::design_system::{BannerLanguage, GovBanner};
use crate::components::language::LanguageSelector;
use crate::i18n::Locale;

/// Full-width government identification banner with the desktop locale
/// switcher beside it.
///
/// `on_locale_change` is forwarded to the switcher; without it the switcher
/// still renders but selecting a language does nothing.
#[component]
pub fn GovernmentBanner(locale: Locale, on_locale_change: Option<EventHandler<Locale>>) -> Element {
    let language = BannerLanguage::for_locale(locale);

    rsx! {
        div { class: "government-banner__fullscreen",
            div { class: "government-banner__container",
                GovBanner { language }
                LanguageSelector {
                    locale,
                    is_desktop: true,
                    on_change: move |next: Locale| {
                        if let Some(handler) = on_locale_change {
                            handler.call(next);
                        }
                    },
                }
            }
        }
    }
}
