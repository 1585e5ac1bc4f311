//! Default configuration constants.

/// Default generative-language API base URL.
pub(super) const DEFAULT_API_BASE_URL: &str = "https://generativelanguage.googleapis.com/v1beta";
/// Default model ID used for completions.
pub(super) const DEFAULT_MODEL_ID: &str = "gemini-1.5-flash-latest";
/// Default timeout for completion requests.
pub(super) const DEFAULT_API_TIMEOUT_SECS: u64 = 60;
/// Config file name looked up in the working directory and config root.
pub(super) const CONFIG_FILE_NAME: &str = "contentflow.toml";
/// Subdirectory of the config root holding the global config file.
pub(super) const CONFIG_DIR_NAME: &str = "contentflow";
