use dioxus::prelude::*;

use crate::i18n::Locale;
use crate::t;

#[component]
pub fn Home(locale: Locale) -> Element {
    rsx! {
        main { class: "page page-home", lang: locale.code(),
            h1 { {t!(locale, "home-title")} }
            p { {t!(locale, "home-intro")} }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn landing_copy_follows_the_locale() {
        let mut dom =
            VirtualDom::new_with_props(Home, HomeProps::builder().locale(Locale::Spanish).build());
        dom.rebuild_in_place();
        let html = dioxus_ssr::render(&dom);
        assert!(html.contains(r#"lang="es""#), "{html}");
        assert!(html.contains("Bienvenido"), "{html}");
        assert!(!html.contains("Welcome"), "{html}");
    }
}
