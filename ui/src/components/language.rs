use dioxus::prelude::*;

use crate::i18n::Locale;
use crate::t;

/// Native display name of a locale, taken from that locale's own messages.
pub fn native_name(locale: Locale) -> String {
    match locale {
        Locale::English => t!(locale, "locale-name-en"),
        Locale::Spanish => t!(locale, "locale-name-es"),
    }
}

/// Locale switcher. One option per supported locale; the current one is
/// marked active and does not emit `on_change`.
#[component]
pub fn LanguageSelector(
    locale: Locale,
    #[props(default)] is_desktop: bool,
    on_change: Option<EventHandler<Locale>>,
) -> Element {
    let variant = if is_desktop {
        "language-selector--desktop"
    } else {
        "language-selector--mobile"
    };
    let select = move |option: Locale| {
        dispatch_selection(locale, option, |next| {
            if let Some(handler) = on_change {
                handler.call(next);
            }
        })
    };

    rsx! {
        div {
            class: "language-selector {variant}",
            role: "group",
            aria_label: t!(locale, "language-selector-label"),
            for option in Locale::ALL {
                button {
                    key: "{option}",
                    r#type: "button",
                    class: option_class(option == locale),
                    lang: option.code(),
                    aria_current: if option == locale { "true" },
                    onclick: move |_| select(option),
                    {native_name(option)}
                }
            }
        }
    }
}

/// Click on `clicked` while `current` is active: forwards only a change of locale.
fn dispatch_selection(current: Locale, clicked: Locale, on_change: impl FnOnce(Locale)) {
    if clicked != current {
        on_change(clicked);
    }
}

fn option_class(active: bool) -> &'static str {
    if active {
        "language-selector__option language-selector__option--active"
    } else {
        "language-selector__option"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn render(locale: Locale, is_desktop: bool) -> String {
        // Props with an `EventHandler` build into an owner-wrapped type, so
        // mount the selector through a root component.
        fn root(props: LanguageSelectorProps) -> Element {
            rsx! { LanguageSelector { ..props } }
        }
        let mut dom = VirtualDom::new_with_props(
            root,
            LanguageSelectorProps {
                locale,
                is_desktop,
                on_change: None,
            },
        );
        dom.rebuild_in_place();
        dioxus_ssr::render(&dom)
    }

    #[test]
    fn native_names_do_not_depend_on_the_active_locale() {
        assert_eq!(native_name(Locale::English), "English");
        assert_eq!(native_name(Locale::Spanish), "Español");
    }

    #[test]
    fn marks_only_the_current_locale_active() {
        let html = render(Locale::Spanish, true);
        assert_eq!(html.matches("language-selector__option--active").count(), 1, "{html}");
        assert_eq!(html.matches(r#"aria-current="true""#).count(), 1, "{html}");
        assert_eq!(html.matches("<button").count(), Locale::ALL.len(), "{html}");
        assert!(html.contains("language-selector--desktop"), "{html}");
    }

    #[test]
    fn clicking_another_locale_reports_it() {
        let picked = std::cell::Cell::new(None);
        dispatch_selection(Locale::English, Locale::Spanish, |next| picked.set(Some(next)));
        assert_eq!(picked.get(), Some(Locale::Spanish));

        dispatch_selection(Locale::Spanish, Locale::English, |next| picked.set(Some(next)));
        assert_eq!(picked.get(), Some(Locale::English));
    }

    #[test]
    fn clicking_the_active_locale_is_ignored() {
        for locale in Locale::ALL {
            let mut calls = 0;
            dispatch_selection(locale, locale, |_| calls += 1);
            assert_eq!(calls, 0, "{locale}");
        }
    }

    #[test]
    fn label_and_variant_follow_props() {
        let html = render(Locale::English, false);
        assert!(html.contains("language-selector--mobile"), "{html}");
        assert!(html.contains(r#"aria-label="Select a language""#), "{html}");
    }
}
