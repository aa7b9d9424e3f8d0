use crate::config::AppConfig;
use crate::storage::platform_preferences;
use crate::theme::theme_css;
use crate::theme_store::ThemeStore;
use crate::types::ThemeMode;
use crate::views::{About, Contact, Dashboard, Home, NotFound, ThemeToggle};
use dioxus::prelude::*;

const MAIN_CSS: Asset = asset!("/assets/main.css");

#[derive(Clone, Debug, PartialEq, Routable)]
#[rustfmt::skip]
pub enum Route {
    #[layout(MainLayout)]
        #[route("/")]
        Home {},
        #[route("/about")]
        About {},
        #[route("/dashboard")]
        Dashboard {},
        #[route("/contact")]
        Contact {},
        #[route("/:..segments")]
        NotFound { segments: Vec<String> },
}

#[component]
pub fn App() -> Element {
    let config = use_context_provider(AppConfig::from_env);
    let store =
        use_context_provider(|| ThemeStore::load(platform_preferences(config.data_dir.clone())));
    let mode = use_theme_mode(store);
    use_context_provider(|| mode);

    rsx! {
        ThemeStyles { mode: mode() }
        ErrorBoundary {
            handle_error: move |errors: ErrorContext| {
                let detail = errors
                    .errors()
                    .first()
                    .map(|err| err.to_string())
                    .unwrap_or_default();
                rsx! {
                    div { class: "error-fallback",
                        h2 { "Something went wrong" }
                        p { "We're sorry - something has gone wrong." }
                        if !detail.is_empty() {
                            pre { "{detail}" }
                        }
                        button {
                            class: "btn-primary",
                            r#type: "button",
                            onclick: move |_| errors.clear_errors(),
                            "Try again"
                        }
                    }
                }
            },
            Router::<Route> {}
        }
    }
}

/// Mirror the store's mode into a signal so views re-render on change.
fn use_theme_mode(store: ThemeStore) -> Signal<ThemeMode> {
    let mut mode = use_signal(|| store.mode());
    use_hook(move || {
        let mut changes = store.subscribe();
        spawn(async move {
            while changes.changed().await.is_ok() {
                let next = *changes.borrow_and_update();
                mode.set(next);
            }
        });
    });
    mode
}

#[component]
fn ThemeStyles(mode: ThemeMode) -> Element {
    let css = theme_css(mode);
    rsx! {
        document::Link { rel: "stylesheet", href: MAIN_CSS }
        style { dangerous_inner_html: "{css}" }
    }
}

#[component]
fn MainLayout() -> Element {
    rsx! {
        div { class: "layout",
            Navbar {}
            main { class: "main-content", Outlet::<Route> {} }
            footer { class: "footer",
                p { "© 2025 InWintors. Built with Rust" }
            }
        }
    }
}

#[component]
fn Navbar() -> Element {
    rsx! {
        nav { class: "navbar",
            div { class: "nav-content",
                div { class: "nav-brand",
                    Link { to: Route::Home {}, "InWintors" }
                }
                div { class: "nav-menu",
                    NavLink { to: Route::Home {}, label: "Home" }
                    NavLink { to: Route::Dashboard {}, label: "Dashboard" }
                    NavLink { to: Route::About {}, label: "About" }
                    NavLink { to: Route::Contact {}, label: "Contact" }
                    ThemeToggle {}
                }
            }
        }
    }
}

#[component]
fn NavLink(to: Route, label: &'static str) -> Element {
    rsx! {
        Link { class: "nav-link", active_class: "active", to, "{label}" }
    }
}
