use dioxus::prelude::*;

const ACTIVITY: &[(&str, &str)] = &[
    ("2 hours ago", "New feature added: Dashboard analytics"),
    ("5 hours ago", "Updated Dioxus components"),
    ("1 day ago", "Integrated the 3D brain scene"),
];

/// Reports the viewport now and on every resize.
const WATCH_VIEWPORT: &str = r#"
window.__inwintorsViewport = () => dioxus.send([window.innerWidth, window.innerHeight]);
window.addEventListener("resize", window.__inwintorsViewport);
window.__inwintorsViewport();
await new Promise(() => {});
"#;

const UNWATCH_VIEWPORT: &str = r#"
window.removeEventListener("resize", window.__inwintorsViewport);
delete window.__inwintorsViewport;
"#;

fn format_viewport(size: Option<(u32, u32)>) -> String {
    match size {
        Some((width, height)) => format!("{width}px × {height}px"),
        None => "unknown".to_string(),
    }
}

#[component]
pub fn Dashboard() -> Element {
    let mut viewport = use_signal(|| None::<(u32, u32)>);
    use_future(move || async move {
        let mut watcher = document::eval(WATCH_VIEWPORT);
        while let Ok(size) = watcher.recv::<(u32, u32)>().await {
            viewport.set(Some(size));
        }
        tracing::debug!("viewport watcher stopped");
    });
    use_drop(|| {
        let _ = document::eval(UNWATCH_VIEWPORT);
    });
    let viewport_label = format_viewport(viewport());

    rsx! {
        div {
            header {
                h1 { class: "page-title", "Dashboard" }
                div { class: "card-grid",
                    StatCard { title: "Viewport Size", value: viewport_label }
                    StatCard { title: "Active Users", value: "1,234" }
                    StatCard { title: "Total Projects", value: "42" }
                }
            }
            section { class: "card",
                h2 { "Recent Activity" }
                for (time, text) in ACTIVITY {
                    div { key: "{time}", class: "activity",
                        span { class: "activity-time", "{time}" }
                        p { "{text}" }
                    }
                }
            }
        }
    }
}

#[component]
fn StatCard(title: &'static str, #[props(into)] value: String) -> Element {
    rsx! {
        div { class: "card",
            h3 { "{title}" }
            p { class: "stat-value", "{value}" }
        }
    }
}
