use dioxus::prelude::*;

use crate::components::design_system::{Button, MainGridContainer};
use crate::config::SITE_SATISFACTION_SURVEY_LINKS;
use crate::i18n::Locale;
use crate::t;

const LAUNCH_ICON: Asset = asset!("/assets/icons/launch.svg");

/// Alt text of the launch icon. Fixed across locales.
pub const LAUNCH_ICON_ALT: &str = "launch icon";

/// Call-to-action linking to the site-satisfaction survey for `locale`.
/// The survey always opens in a new browsing context without a referrer.
#[component]
pub fn SurveyButton(locale: Locale) -> Element {
    let href = SITE_SATISFACTION_SURVEY_LINKS.href(locale);

    rsx! {
        MainGridContainer { class: "survey-button__container",
            a { href, target: "_blank", rel: "noreferrer",
                Button { class: "survey-button",
                    {t!(locale, "contact-survey-text")}
                    img {
                        class: "survey-button__launch-icon",
                        src: LAUNCH_ICON,
                        alt: LAUNCH_ICON_ALT,
                    }
                }
            }
        }
    }
}
