use crate::theme::Theme;
use crate::theme_store::ThemeStore;
use crate::types::ThemeMode;
use dioxus::prelude::*;

/// Icon and label for switching away from `mode`.
fn toggle_label(mode: ThemeMode) -> (&'static str, &'static str) {
    match mode {
        ThemeMode::Light => ("🌙", "Dark"),
        ThemeMode::Dark => ("☀️", "Light"),
    }
}

#[component]
pub fn ThemeToggle() -> Element {
    let store = use_context::<ThemeStore>();
    let mode = use_context::<Signal<ThemeMode>>();
    let (icon, label) = toggle_label(mode());

    rsx! {
        button {
            class: "theme-toggle",
            r#type: "button",
            onclick: move |_| {
                store.toggle();
            },
            span { "{icon}" }
            "{label}"
        }
    }
}

#[component]
pub fn ThemeDemo() -> Element {
    let mode = use_context::<Signal<ThemeMode>>();
    let theme = Theme::for_mode(mode());
    let swatches = [
        ("Primary", theme.colors.primary),
        ("Secondary", theme.colors.secondary),
        ("Background", theme.colors.background),
        ("Surface", theme.colors.surface),
        ("Text Primary", theme.colors.text.primary),
        ("Text Secondary", theme.colors.text.secondary),
    ];

    rsx! {
        div { class: "card",
            h3 { "Theme Demo - {mode} mode" }
            p {
                "This component demonstrates the current theme colors and styling. "
                "Switch between light and dark themes using the toggle in the navbar."
            }
            div { class: "swatches",
                for (label, color) in swatches {
                    div { key: "{label}", class: "swatch", style: "background-color: {color};",
                        "{label}"
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toggle_label_names_other_mode() {
        assert_eq!(toggle_label(ThemeMode::Light).1, "Dark");
        assert_eq!(toggle_label(ThemeMode::Dark).1, "Light");
    }
}
