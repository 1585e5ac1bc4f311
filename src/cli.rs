//! CLI argument parsing via clap.

use clap::Parser;
use contentflow::session::ContentType;

/// A terminal content-ideation assistant backed by a generative-language API.
#[derive(Debug, Parser)]
#[command(name = "contentflow", version)]
pub struct Args {
    /// Prompt to send. If provided, runs in one-shot mode and exits.
    pub prompt: Option<String>,

    /// Path to config file (default: ./contentflow.toml or
    /// ~/.config/contentflow/contentflow.toml).
    #[arg(short = 'c', long = "config")]
    pub config: Option<String>,

    /// Override model name.
    #[arg(short = 'm', long = "model")]
    pub model: Option<String>,

    /// Override API base URL.
    #[arg(long = "base-url")]
    pub base_url: Option<String>,

    /// Content type for submitted ideas: video, blog, or social.
    #[arg(short = 't', long = "type", value_parser = parse_content_type)]
    pub content_type: Option<ContentType>,

    /// In one-shot mode, print the transcript as JSON instead of rendering it.
    #[arg(long = "json", requires = "prompt")]
    pub json: bool,

    /// Disable color output.
    #[arg(long = "no-color")]
    pub no_color: bool,
}

fn parse_content_type(raw: &str) -> Result<ContentType, String> {
    raw.parse::<ContentType>().map_err(|e| e.to_string())
}
