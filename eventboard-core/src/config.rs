//! eventboard configuration.

use std::path::{Path, PathBuf};
use std::time::Duration;

use config::{Config, Environment, File, Map};
use serde::{Deserialize, Serialize};
use url::Url;

use crate::error::{EventBoardError, EventBoardResult};

static DEFAULT_BASE_URL: &str = "http://localhost:5173";
static DEFAULT_EVENTS_PATH: &str = "/events.json";
const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 10;
const ENV_PREFIX: &str = "EVENTBOARD";

fn default_base_url() -> String {
    DEFAULT_BASE_URL.to_string()
}

fn default_events_path() -> String {
    DEFAULT_EVENTS_PATH.to_string()
}

fn default_request_timeout_secs() -> u64 {
    DEFAULT_REQUEST_TIMEOUT_SECS
}

fn default_true() -> bool {
    true
}

/// How a newly added event gets its id.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum IdStrategy {
    /// Number of events on the page plus one. Collides after a delete.
    #[default]
    Length,
    /// Highest id on the page plus one.
    Monotonic,
}

/// Configuration at ~/.config/eventboard/config.toml
///
/// Every key can be overridden with an `EVENTBOARD_` environment variable,
/// e.g. `EVENTBOARD_BASE_URL`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BoardConfig {
    /// Origin of the app; routes and the events document resolve against it.
    #[serde(default = "default_base_url")]
    pub base_url: String,

    #[serde(default = "default_events_path")]
    pub events_path: String,

    /// Read the events document from this file instead of over HTTP.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub events_file: Option<PathBuf>,

    #[serde(default = "default_request_timeout_secs")]
    pub request_timeout_secs: u64,

    /// Re-read the events document after an event is added.
    #[serde(default = "default_true")]
    pub refetch_after_add: bool,

    #[serde(default)]
    pub id_strategy: IdStrategy,
}

impl Default for BoardConfig {
    fn default() -> Self {
        BoardConfig {
            base_url: default_base_url(),
            events_path: default_events_path(),
            events_file: None,
            request_timeout_secs: default_request_timeout_secs(),
            refetch_after_add: true,
            id_strategy: IdStrategy::default(),
        }
    }
}

impl BoardConfig {
    pub fn config_path() -> EventBoardResult<PathBuf> {
        let config_dir = dirs::config_dir()
            .ok_or_else(|| EventBoardError::Config("Could not determine config directory".into()))?
            .join("eventboard");

        Ok(config_dir.join("config.toml"))
    }

    /// Load the config file (creating a commented-out one on first run),
    /// then apply environment overrides.
    pub fn load() -> EventBoardResult<Self> {
        let config_path = Self::config_path()?;

        if !config_path.exists() {
            Self::create_default_config(&config_path)?;
        }

        Self::load_from(&config_path)
    }

    /// Load `path`, then apply `EVENTBOARD_*` variables from the process
    /// environment.
    pub fn load_from(path: &Path) -> EventBoardResult<Self> {
        Self::load_with_env(path, None)
    }

    /// Like [`BoardConfig::load_from`], reading overrides from `env`
    /// instead of the process environment when given.
    fn load_with_env(path: &Path, env: Option<Map<String, String>>) -> EventBoardResult<Self> {
        let overrides = Environment::with_prefix(ENV_PREFIX)
            .try_parsing(true)
            .source(env);

        Config::builder()
            .add_source(File::from(path.to_path_buf()).required(false))
            .add_source(overrides)
            .build()
            .map_err(|e| EventBoardError::Config(e.to_string()))?
            .try_deserialize()
            .map_err(|e| EventBoardError::Config(e.to_string()))
    }

    pub fn base_url(&self) -> EventBoardResult<Url> {
        Url::parse(&self.base_url).map_err(|e| {
            EventBoardError::Config(format!("Invalid base_url '{}': {e}", self.base_url))
        })
    }

    /// Full URL of the events document.
    pub fn events_url(&self) -> EventBoardResult<Url> {
        self.base_url()?
            .join(&self.events_path)
            .map_err(|e| {
                EventBoardError::Config(format!("Invalid events_path '{}': {e}", self.events_path))
            })
    }

    /// `events_file` with `~` expanded.
    pub fn events_file(&self) -> Option<PathBuf> {
        self.events_file.as_ref().map(|p| {
            PathBuf::from(shellexpand::tilde(&p.to_string_lossy()).into_owned())
        })
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }

    /// Effective configuration as TOML, for display.
    pub fn to_toml(&self) -> EventBoardResult<String> {
        toml::to_string_pretty(self).map_err(|e| EventBoardError::Config(e.to_string()))
    }

    /// Create a default config file with all options commented out.
    pub fn create_default_config(path: &Path) -> EventBoardResult<()> {
        let contents = format!(
            "\
# eventboard configuration

# Where the app is served (routes and the events document resolve against it):
# base_url = \"{DEFAULT_BASE_URL}\"

# Path of the events document:
# events_path = \"{DEFAULT_EVENTS_PATH}\"

# Read events from a local file instead:
# events_file = \"~/events.json\"

# Give up on a read after this many seconds:
# request_timeout_secs = {DEFAULT_REQUEST_TIMEOUT_SECS}

# Re-read the events document after adding an event:
# refetch_after_add = true

# Id for new events: \"length\" (count + 1) or \"monotonic\" (max id + 1):
# id_strategy = \"length\"
"
        );

        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(|e| {
                EventBoardError::Config(format!("Could not create config directory: {e}"))
            })?;
        }

        std::fs::write(path, contents)
            .map_err(|e| EventBoardError::Config(format!("Could not write config file: {e}")))?;

        Ok(())
    }
}
