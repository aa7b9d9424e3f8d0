use crate::config::AppConfig;
use crate::views::ChatWidget;
use dioxus::prelude::*;

const SPLINE_VIEWER_JS: &str = "https://unpkg.com/@splinetool/viewer@1.10.38/build/spline-viewer.js";

#[component]
pub fn Home() -> Element {
    rsx! {
        SplineScene {}
        ChatWidget {}
    }
}

/// Full-viewport 3D scene behind the chat.
#[component]
fn SplineScene() -> Element {
    let scene = use_context::<AppConfig>().spline_scene;

    use_effect(|| {
        let _ = document::eval("document.body.style.overflow = 'hidden';");
    });
    use_drop(|| {
        let _ = document::eval("document.body.style.overflow = 'auto';");
    });

    rsx! {
        document::Script { r#type: "module", src: SPLINE_VIEWER_JS }
        div { class: "spline-viewer",
            spline-viewer {
                url: "{scene}",
                "auto-rotate": "true",
                "auto-rotate-speed": "1",
            }
        }
    }
}
