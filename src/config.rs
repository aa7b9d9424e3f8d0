use std::path::PathBuf;
use std::time::Duration;

pub const REPLY_DELAY_VAR: &str = "INWINTORS_REPLY_DELAY_MS";
pub const CONTACT_DELAY_VAR: &str = "INWINTORS_CONTACT_DELAY_MS";
pub const DATA_DIR_VAR: &str = "INWINTORS_DATA_DIR";
pub const SPLINE_SCENE_VAR: &str = "INWINTORS_SPLINE_SCENE";

pub const DEFAULT_SPLINE_SCENE: &str =
    "https://prod.spline.design/kHYtzxsJOmRJhaiu/scene.splinecode";

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("{var} must be a whole number of milliseconds, got {value:?}")]
    InvalidMillis { var: &'static str, value: String },

    #[error("{var} must not be empty")]
    Empty { var: &'static str },
}

/// Runtime settings read from the environment.
#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    pub reply_delay: Duration,
    pub contact_delay: Duration,
    pub data_dir: Option<PathBuf>,
    pub spline_scene: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            reply_delay: crate::chat::DEFAULT_REPLY_DELAY,
            contact_delay: crate::contact::DEFAULT_SUBMIT_DELAY,
            data_dir: None,
            spline_scene: DEFAULT_SPLINE_SCENE.to_string(),
        }
    }
}

impl AppConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|var| std::env::var(var).ok())
    }

    /// Malformed values are logged and replaced by their defaults.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();
        let data_dir = lookup(DATA_DIR_VAR)
            .map(|v| v.trim().to_string())
            .filter(|v| !v.is_empty())
            .map(PathBuf::from);

        Self {
            reply_delay: or_default(
                millis(REPLY_DELAY_VAR, lookup(REPLY_DELAY_VAR)),
                defaults.reply_delay,
            ),
            contact_delay: or_default(
                millis(CONTACT_DELAY_VAR, lookup(CONTACT_DELAY_VAR)),
                defaults.contact_delay,
            ),
            data_dir,
            spline_scene: or_default(
                non_empty(SPLINE_SCENE_VAR, lookup(SPLINE_SCENE_VAR)),
                defaults.spline_scene,
            ),
        }
    }
}

/// Unset keeps the default silently; malformed keeps it with a warning.
fn or_default<T>(parsed: Result<Option<T>, ConfigError>, default: T) -> T {
    match parsed {
        Ok(Some(value)) => value,
        Ok(None) => default,
        Err(err) => {
            tracing::warn!("{}; using default", err);
            default
        }
    }
}

fn millis(var: &'static str, raw: Option<String>) -> Result<Option<Duration>, ConfigError> {
    let Some(raw) = raw else {
        return Ok(None);
    };
    raw.trim()
        .parse::<u64>()
        .map(|ms| Some(Duration::from_millis(ms)))
        .map_err(|_| ConfigError::InvalidMillis { var, value: raw })
}

fn non_empty(var: &'static str, raw: Option<String>) -> Result<Option<String>, ConfigError> {
    match raw {
        None => Ok(None),
        Some(value) if value.trim().is_empty() => Err(ConfigError::Empty { var }),
        Some(value) => Ok(Some(value.trim().to_string())),
    }
}
