//! Site stylesheets shared by every host.

use dioxus::prelude::*;

const THEME_CSS: Asset = asset!("/assets/theme/main.css");
const GOVERNMENT_BANNER_CSS: Asset = asset!("/assets/styling/government_banner.css");
const SURVEY_BUTTON_CSS: Asset = asset!("/assets/styling/survey_button.css");

/// Registers the design-system theme and the component stylesheets in the
/// document head. Render once near the root of the app.
#[component]
pub fn Stylesheets() -> Element {
    rsx! {
        document::Link { rel: "stylesheet", href: THEME_CSS }
        document::Link { rel: "stylesheet", href: GOVERNMENT_BANNER_CSS }
        document::Link { rel: "stylesheet", href: SURVEY_BUTTON_CSS }
    }
}
