use crate::ui::Route;
use dioxus::prelude::*;

#[component]
pub fn NotFound(segments: Vec<String>) -> Element {
    let path = segments.join("/");
    rsx! {
        div { class: "error-fallback",
            h2 { "Page not found" }
            p { "Nothing lives at /{path}." }
            Link { class: "nav-link", to: Route::Home {}, "Back home" }
        }
    }
}
