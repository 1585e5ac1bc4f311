//! Environment variable overrides.
//!
//! `CONTENTFLOW_*` variables take precedence over file values. The API key
//! additionally accepts the provider-conventional `GEMINI_API_KEY`.

use crate::error::ConfigError;

use super::Config;

pub(super) const ENV_API_KEY: &str = "CONTENTFLOW_API_KEY";
pub(super) const ENV_API_KEY_FALLBACK: &str = "GEMINI_API_KEY";
pub(super) const ENV_BASE_URL: &str = "CONTENTFLOW_BASE_URL";
pub(super) const ENV_MODEL: &str = "CONTENTFLOW_MODEL";
pub(super) const ENV_API_TIMEOUT_SECS: &str = "CONTENTFLOW_API_TIMEOUT_SECS";

pub(super) fn apply_runtime_env_overrides<FEnv>(
    config: &mut Config,
    env_lookup: &FEnv,
) -> Result<(), ConfigError>
where
    FEnv: Fn(&str) -> Option<String>,
{
    if let Some(url) = non_empty(env_lookup, ENV_BASE_URL) {
        config.api.base_url = url;
    }
    if let Some(model) = non_empty(env_lookup, ENV_MODEL) {
        config.api.model = model;
    }
    if let Some(timeout) = non_empty(env_lookup, ENV_API_TIMEOUT_SECS) {
        // Clamp to at least 1 second to avoid "no-timeout" accidental behavior.
        let parsed = timeout.parse::<u64>().map_err(|_| {
            ConfigError::Invalid(format!(
                "invalid {ENV_API_TIMEOUT_SECS} value `{timeout}`: expected positive integer seconds"
            ))
        })?;
        config.network.api_timeout_secs = parsed.max(1);
    }
    Ok(())
}

/// Return the runtime API key override from env vars, if any.
pub(super) fn api_key_override_with<FEnv>(env_lookup: &FEnv) -> Option<String>
where
    FEnv: Fn(&str) -> Option<String>,
{
    non_empty(env_lookup, ENV_API_KEY).or_else(|| non_empty(env_lookup, ENV_API_KEY_FALLBACK))
}

/// Look up `name`, treating blank values as unset.
pub(super) fn non_empty<FEnv>(env_lookup: &FEnv, name: &str) -> Option<String>
where
    FEnv: Fn(&str) -> Option<String>,
{
    env_lookup(name)
        .map(|value| value.trim().to_string())
        .filter(|value| !value.is_empty())
}
