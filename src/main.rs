//! CLI entry point for contentflow.

mod cli;

use clap::Parser;
use contentflow::api::GeminiClient;
use contentflow::app::{run_once, stdin_lines, Repl};
use contentflow::config::{load_config, ConfigSource};
use contentflow::session::{FinishOutcome, SessionController, SubmitOutcome};
use contentflow::ui::{RenderSink, Renderer};
use std::time::Duration;
use tracing_subscriber::EnvFilter;

/// Env var holding the tracing filter directive.
const LOG_ENV: &str = "CONTENTFLOW_LOG";

#[tokio::main]
async fn main() {
    init_tracing();
    let args = cli::Args::parse();

    // Load config.
    let loaded = match load_config(args.config.as_deref()) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("error: {e}");
            std::process::exit(1);
        }
    };
    if let ConfigSource::Global(path) | ConfigSource::Explicit(path) = &loaded.source {
        tracing::debug!(path = %path.display(), "using config file");
    }
    let mut config = loaded.config;

    // Apply CLI overrides.
    if let Some(model) = &args.model {
        config.api.model = model.clone();
    }
    if let Some(url) = &args.base_url {
        config.api.base_url = url.clone();
    }
    if let Some(content_type) = args.content_type {
        config.session.content_type = content_type;
    }
    if args.no_color {
        config.display.color = false;
    }
    if let Err(e) = config.validate() {
        eprintln!("error: {e}");
        std::process::exit(1);
    }

    let renderer = Renderer::new(config.display.color);
    let client = GeminiClient::new(
        &config.api,
        Duration::from_secs(config.network.api_timeout_secs),
    );
    let mut session = SessionController::with_content_type(config.session.content_type);

    // One-shot mode.
    if let Some(prompt) = args.prompt.as_deref() {
        let outcome = if args.json {
            let outcome = session
                .submit(&client, prompt, config.session.content_type)
                .await;
            match serde_json::to_string_pretty(session.transcript()) {
                Ok(json) => println!("{json}"),
                Err(e) => {
                    eprintln!("error: failed to encode transcript: {e}");
                    std::process::exit(1);
                }
            }
            outcome
        } else {
            run_once(
                &client,
                &mut session,
                &renderer,
                prompt,
                config.session.content_type,
            )
            .await
        };
        match outcome {
            SubmitOutcome::Finished(FinishOutcome::Answered) => {}
            SubmitOutcome::Skipped(_) => {
                renderer.error("prompt is empty");
                std::process::exit(2);
            }
            SubmitOutcome::Finished(_) => std::process::exit(1),
        }
        return;
    }

    // Interactive mode.
    let mut repl = Repl::new(&client, &renderer, || async {
        let _ = tokio::signal::ctrl_c().await;
    });
    if let Err(e) = repl.run(stdin_lines(), &mut session).await {
        renderer.error(&format!("failed to read input: {e}"));
        std::process::exit(1);
    }
}

fn init_tracing() {
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}
