use dioxus::prelude::*;

use ui::components::{GovernmentBanner, SurveyButton};
use ui::i18n::{self, Locale};
use ui::theme::Stylesheets;

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum Route {
    #[layout(SiteLayout)]
    #[route("/")]
    Home {},
}

const MAIN_CSS: Asset = asset!("/assets/main.css");

fn main() {
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    // Global reactive locale. Components never look it up themselves; the
    // layout reads it and passes it down as a prop.
    let locale = use_signal(i18n::requested_locale);
    use_context_provider(|| locale);

    rsx! {
        // Global app resources
        Stylesheets {}
        document::Link { rel: "stylesheet", href: MAIN_CSS }

        Router::<Route> {}
    }
}

/// Page chrome shared by every route: government banner on top, survey
/// call-to-action below the content.
#[component]
fn SiteLayout() -> Element {
    let mut locale = use_context::<Signal<Locale>>();
    let current = locale();

    rsx! {
        GovernmentBanner {
            locale: current,
            on_locale_change: move |next: Locale| {
                let previous = *locale.peek();
                tracing::info!(from = %previous, to = %next, "locale changed");
                locale.set(next);
            },
        }
        // Keyed by locale so the routed page remounts on change.
        div { key: "{current}", Outlet::<Route> {} }
        SurveyButton { locale: current }
    }
}

#[component]
fn Home() -> Element {
    let locale = use_context::<Signal<Locale>>();
    rsx! {
        ui::views::Home { locale: locale() }
    }
}
