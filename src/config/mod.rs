//! Configuration loading from TOML files and environment variables.
//!
//! Config is loaded in this order of precedence (highest wins):
//! 1. Environment variables (`CONTENTFLOW_API_KEY` / `GEMINI_API_KEY`,
//!    `CONTENTFLOW_BASE_URL`, `CONTENTFLOW_MODEL`,
//!    `CONTENTFLOW_API_TIMEOUT_SECS`)
//! 2. TOML file specified via --config CLI flag
//! 3. ./contentflow.toml in the current directory
//! 4. $XDG_CONFIG_HOME/contentflow/contentflow.toml (or
//!    ~/.config/contentflow/contentflow.toml)
//! 5. Built-in defaults
//!
//! CLI flags are applied on top by the binary.

use crate::error::ConfigError;
use std::path::{Path, PathBuf};

mod defaults;
mod env;
mod types;

use defaults::{CONFIG_DIR_NAME, CONFIG_FILE_NAME};
use env::{api_key_override_with, apply_runtime_env_overrides, non_empty};
use types::FileConfig;
pub use types::{ApiConfig, Config, DisplayConfig, NetworkConfig, SessionConfig};

/// Where the config text came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigSource {
    Explicit(PathBuf),
    Local,
    Global(PathBuf),
    BuiltInDefaults,
}

/// Resolved config plus the source it was read from.
#[derive(Debug, Clone)]
pub struct LoadedConfig {
    pub config: Config,
    pub source: ConfigSource,
}

impl Config {
    /// Reject configurations that cannot reach the completion endpoint.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.api.api_key.trim().is_empty() {
            return Err(ConfigError::Invalid(format!(
                "no API key configured; set {} (or {}) or `api.api_key_env` in {CONFIG_FILE_NAME}",
                env::ENV_API_KEY,
                env::ENV_API_KEY_FALLBACK,
            )));
        }
        if self.api.base_url.trim().is_empty() {
            return Err(ConfigError::Invalid("api.base_url must not be empty".into()));
        }
        if self.api.model.trim().is_empty() {
            return Err(ConfigError::Invalid("api.model must not be empty".into()));
        }
        Ok(())
    }
}

// ---------------------------------------------------------------------------
// Loading
// ---------------------------------------------------------------------------

/// Load configuration from disk and environment.
///
/// `path_override` is an explicit config file path (from --config flag).
pub fn load_config(path_override: Option<&str>) -> Result<LoadedConfig, ConfigError> {
    load_config_from_sources(
        path_override,
        |path| std::fs::read_to_string(path),
        |name| std::env::var(name).ok(),
        config_root_dir,
    )
}

fn load_config_from_sources<FRead, FEnv, FRoot>(
    path_override: Option<&str>,
    read_file: FRead,
    env_lookup: FEnv,
    config_root: FRoot,
) -> Result<LoadedConfig, ConfigError>
where
    FRead: Fn(&Path) -> Result<String, std::io::Error>,
    FEnv: Fn(&str) -> Option<String>,
    FRoot: Fn() -> Option<PathBuf>,
{
    let (config_text, source) = read_config_text(path_override, &read_file, &config_root)?;
    tracing::debug!(?source, "loading configuration");
    let parsed: FileConfig = toml::from_str(&config_text)?;
    let mut config = resolve_file_config(parsed, &env_lookup)?;
    apply_runtime_env_overrides(&mut config, &env_lookup)?;
    Ok(LoadedConfig { config, source })
}

fn read_config_text<FRead, FRoot>(
    path_override: Option<&str>,
    read_file: &FRead,
    config_root: &FRoot,
) -> Result<(String, ConfigSource), ConfigError>
where
    FRead: Fn(&Path) -> Result<String, std::io::Error>,
    FRoot: Fn() -> Option<PathBuf>,
{
    if let Some(p) = path_override {
        let path = PathBuf::from(p);
        let text = read_file(&path).map_err(|source| ConfigError::Io {
            path: path.clone(),
            source,
        })?;
        return Ok((text, ConfigSource::Explicit(path)));
    }

    if let Ok(text) = read_file(Path::new(CONFIG_FILE_NAME)) {
        return Ok((text, ConfigSource::Local));
    }
    if let Some(dir) = config_root() {
        let global = dir.join(CONFIG_DIR_NAME).join(CONFIG_FILE_NAME);
        if let Ok(text) = read_file(&global) {
            return Ok((text, ConfigSource::Global(global)));
        }
    }

    Ok((String::new(), ConfigSource::BuiltInDefaults))
}

fn resolve_file_config<FEnv>(parsed: FileConfig, env_lookup: &FEnv) -> Result<Config, ConfigError>
where
    FEnv: Fn(&str) -> Option<String>,
{
    let mut config = Config::default();
    let api = parsed.api;

    if let Some(url) = normalized(api.base_url) {
        config.api.base_url = url;
    }
    if let Some(model) = normalized(api.model) {
        config.api.model = model;
    }

    let literal_key = normalized(api.api_key);
    let key_env = normalized(api.api_key_env);
    if literal_key.is_some() && key_env.is_some() {
        return Err(ConfigError::Invalid(
            "api.api_key and api.api_key_env are mutually exclusive".into(),
        ));
    }
    let file_key = match key_env {
        Some(name) => non_empty(env_lookup, &name),
        None => literal_key,
    };
    config.api.api_key = api_key_override_with(env_lookup)
        .or(file_key)
        .unwrap_or_default();

    if let Some(timeout) = parsed.network.api_timeout_secs {
        config.network.api_timeout_secs = timeout.max(1);
    }
    if let Some(color) = parsed.display.color {
        config.display.color = color;
    }
    if let Some(content_type) = parsed.session.content_type {
        config.session.content_type = content_type;
    }
    Ok(config)
}

fn normalized(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

/// Root directory for per-user config (`$XDG_CONFIG_HOME` or `~/.config`).
pub fn config_root_dir() -> Option<PathBuf> {
    if let Ok(path) = std::env::var("XDG_CONFIG_HOME") {
        let trimmed = path.trim();
        if !trimmed.is_empty() {
            return Some(PathBuf::from(trimmed));
        }
    }
    dirs::home_dir()
        .map(|home| home.join(".config"))
        .or_else(dirs::config_dir)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::session::ContentType;
    use std::collections::HashMap;
    use std::io;

    fn no_files(_: &Path) -> Result<String, io::Error> {
        Err(io::Error::new(io::ErrorKind::NotFound, "missing"))
    }

    fn env_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |name| map.get(name).cloned()
    }

    fn files_from(pairs: &[(&str, &str)]) -> impl Fn(&Path) -> Result<String, io::Error> {
        let map: HashMap<PathBuf, String> = pairs
            .iter()
            .map(|(k, v)| (PathBuf::from(k), v.to_string()))
            .collect();
        move |path| {
            map.get(path)
                .cloned()
                .ok_or_else(|| io::Error::new(io::ErrorKind::NotFound, "missing"))
        }
    }

    #[test]
    fn defaults_when_no_file_or_env() {
        let loaded = load_config_from_sources(None, no_files, env_from(&[]), || None).unwrap();
        assert_eq!(loaded.source, ConfigSource::BuiltInDefaults);
        let config = loaded.config;
        assert_eq!(
            config.api.base_url,
            "https://generativelanguage.googleapis.com/v1beta"
        );
        assert_eq!(config.api.model, "gemini-1.5-flash-latest");
        assert_eq!(config.network.api_timeout_secs, 60);
        assert!(config.display.color);
        assert_eq!(config.session.content_type, ContentType::Video);
        assert!(config.api.api_key.is_empty());
        assert!(config.validate().is_err(), "missing key must not validate");
    }

    #[test]
    fn local_file_wins_over_global() {
        let files = files_from(&[
            ("contentflow.toml", "[api]\nmodel = \"local-model\"\n"),
            (
                "/cfg/contentflow/contentflow.toml",
                "[api]\nmodel = \"global-model\"\n",
            ),
        ]);
        let loaded = load_config_from_sources(None, files, env_from(&[]), || {
            Some(PathBuf::from("/cfg"))
        })
        .unwrap();
        assert_eq!(loaded.source, ConfigSource::Local);
        assert_eq!(loaded.config.api.model, "local-model");
    }

    #[test]
    fn global_file_used_when_no_local() {
        let files = files_from(&[(
            "/cfg/contentflow/contentflow.toml",
            "[display]\ncolor = false\n[session]\ncontent_type = \"blog\"\n",
        )]);
        let loaded = load_config_from_sources(None, files, env_from(&[]), || {
            Some(PathBuf::from("/cfg"))
        })
        .unwrap();
        assert_eq!(
            loaded.source,
            ConfigSource::Global(PathBuf::from("/cfg/contentflow/contentflow.toml"))
        );
        assert!(!loaded.config.display.color);
        assert_eq!(loaded.config.session.content_type, ContentType::Blog);
    }

    #[test]
    fn explicit_path_must_exist() {
        let err = load_config_from_sources(Some("/nope.toml"), no_files, env_from(&[]), || None)
            .unwrap_err();
        assert!(matches!(err, ConfigError::Io { .. }), "got: {err}");
    }

    #[test]
    fn env_overrides_file_values() {
        let files = files_from(&[(
            "custom.toml",
            "[api]\nbase_url = \"https://file.example\"\nmodel = \"file-model\"\napi_key = \"file-key\"\n[network]\napi_timeout_secs = 10\n",
        )]);
        let env = env_from(&[
            ("CONTENTFLOW_BASE_URL", "https://env.example"),
            ("CONTENTFLOW_MODEL", "env-model"),
            ("CONTENTFLOW_API_KEY", "env-key"),
            ("CONTENTFLOW_API_TIMEOUT_SECS", "0"),
        ]);
        let config = load_config_from_sources(Some("custom.toml"), files, env, || None)
            .unwrap()
            .config;
        assert_eq!(config.api.base_url, "https://env.example");
        assert_eq!(config.api.model, "env-model");
        assert_eq!(config.api.api_key, "env-key");
        assert_eq!(config.network.api_timeout_secs, 1, "timeout clamps to 1s");
        assert!(config.validate().is_ok());
    }

    #[test]
    fn gemini_key_is_fallback_and_api_key_env_is_read() {
        let config = load_config_from_sources(
            None,
            no_files,
            env_from(&[("GEMINI_API_KEY", "fallback")]),
            || None,
        )
        .unwrap()
        .config;
        assert_eq!(config.api.api_key, "fallback");

        let files = files_from(&[("contentflow.toml", "[api]\napi_key_env = \"MY_KEY\"\n")]);
        let config =
            load_config_from_sources(None, files, env_from(&[("MY_KEY", " secret ")]), || None)
                .unwrap()
                .config;
        assert_eq!(config.api.api_key, "secret");
    }

    #[test]
    fn conflicting_key_sources_rejected() {
        let files = files_from(&[(
            "contentflow.toml",
            "[api]\napi_key = \"a\"\napi_key_env = \"B\"\n",
        )]);
        let err = load_config_from_sources(None, files, env_from(&[]), || None).unwrap_err();
        assert!(err.to_string().contains("mutually exclusive"), "got: {err}");
    }

    #[test]
    fn invalid_timeout_env_rejected() {
        let err = load_config_from_sources(
            None,
            no_files,
            env_from(&[("CONTENTFLOW_API_TIMEOUT_SECS", "soon")]),
            || None,
        )
        .unwrap_err();
        assert!(err.to_string().contains("CONTENTFLOW_API_TIMEOUT_SECS"), "got: {err}");
    }

    #[test]
    fn unknown_keys_rejected() {
        let files = files_from(&[("contentflow.toml", "[api]\nendpoint = \"x\"\n")]);
        let err = load_config_from_sources(None, files, env_from(&[]), || None).unwrap_err();
        assert!(matches!(err, ConfigError::Toml(_)), "got: {err}");
    }
}
