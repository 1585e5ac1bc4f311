//! Configuration data model.
//!
//! Runtime structs (`Config` and friends) are always fully resolved. The
//! `File*` structs mirror the TOML layout with every field optional so that
//! absent keys fall through to env overrides and built-in defaults.

use serde::Deserialize;

use super::defaults::{DEFAULT_API_BASE_URL, DEFAULT_API_TIMEOUT_SECS, DEFAULT_MODEL_ID};
use crate::session::ContentType;

/// Top-level runtime configuration.
#[derive(Debug, Clone, Default)]
pub struct Config {
    pub api: ApiConfig,
    pub network: NetworkConfig,
    pub display: DisplayConfig,
    pub session: SessionConfig,
}

/// Resolved API connection settings used by the completion client.
#[derive(Debug, Clone)]
pub struct ApiConfig {
    pub base_url: String,
    pub api_key: String,
    pub model: String,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_API_BASE_URL.into(),
            api_key: String::new(),
            model: DEFAULT_MODEL_ID.into(),
        }
    }
}

/// Network timeouts.
#[derive(Debug, Clone)]
pub struct NetworkConfig {
    pub api_timeout_secs: u64,
}

impl Default for NetworkConfig {
    fn default() -> Self {
        Self {
            api_timeout_secs: DEFAULT_API_TIMEOUT_SECS,
        }
    }
}

/// Terminal display settings.
#[derive(Debug, Clone)]
pub struct DisplayConfig {
    pub color: bool,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self { color: true }
    }
}

/// Initial session UI state.
#[derive(Debug, Clone, Default)]
pub struct SessionConfig {
    /// Content type selected when a session starts.
    pub content_type: ContentType,
}

// ---------------------------------------------------------------------------
// On-disk layout
// ---------------------------------------------------------------------------

#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub(super) struct FileConfig {
    #[serde(default)]
    pub api: FileApiConfig,
    #[serde(default)]
    pub network: FileNetworkConfig,
    #[serde(default)]
    pub display: FileDisplayConfig,
    #[serde(default)]
    pub session: FileSessionConfig,
}

#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub(super) struct FileApiConfig {
    pub base_url: Option<String>,
    pub model: Option<String>,
    /// Literal key. Mutually exclusive with `api_key_env`.
    pub api_key: Option<String>,
    /// Name of an environment variable holding the key.
    pub api_key_env: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub(super) struct FileNetworkConfig {
    pub api_timeout_secs: Option<u64>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub(super) struct FileDisplayConfig {
    pub color: Option<bool>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub(super) struct FileSessionConfig {
    pub content_type: Option<ContentType>,
}
