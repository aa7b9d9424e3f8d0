use crate::views::ThemeDemo;
use dioxus::prelude::*;

const TECH_STACK: &[&str] = &[
    "Rust for the application core",
    "Dioxus for UI components",
    "Tokio for async tasks",
    "Dioxus Router for navigation",
];

const FEATURES: &[&str] = &[
    "Light and dark themes",
    "Interactive 3D scene",
    "Simulated brain chat",
    "Responsive Design",
];

#[component]
pub fn About() -> Element {
    rsx! {
        div {
            h1 { class: "page-title", "About InWintors" }
            div { class: "card-grid",
                AboutSection { title: "Our Tech Stack", items: TECH_STACK }
                AboutSection { title: "Features", items: FEATURES }
            }
            ThemeDemo {}
        }
    }
}

#[component]
fn AboutSection(title: &'static str, items: &'static [&'static str]) -> Element {
    rsx! {
        section { class: "card",
            h2 { "{title}" }
            ul {
                for item in items {
                    li { key: "{item}", "{item}" }
                }
            }
        }
    }
}
