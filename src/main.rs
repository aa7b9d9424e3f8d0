use tracing_subscriber::EnvFilter;

/// Bundled config for mobile builds (iOS/Android)
const BUNDLED_CONFIG: &str = include_str!("../assets/config.env");

fn load_dotenv() {
    // First try to load from .env file (desktop dev)
    if dotenvy::dotenv().is_ok() {
        return;
    }

    // Fall back to bundled config (mobile builds)
    load_bundled_config();
}

fn load_bundled_config() {
    for item in dotenvy::from_read_iter(BUNDLED_CONFIG.as_bytes()) {
        let Ok((key, value)) = item else {
            continue;
        };
        // Only set if not already set (allow env override)
        if std::env::var(&key).is_err() {
            // SAFETY: We're setting env vars at startup before any threads are spawned
            unsafe {
                std::env::set_var(key, value);
            }
        }
    }
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let _ = tracing_subscriber::fmt().with_env_filter(filter).try_init();
}

fn main() {
    load_dotenv();
    init_tracing();
    dioxus::launch(inwintors::ui::App);
}
