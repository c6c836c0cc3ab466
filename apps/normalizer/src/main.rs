use std::path::PathBuf;

use anyhow::{bail, Result};
use clap::Parser;
use serde_json::{Map, Value};
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use profile_normalizer::config::Config;
use profile_normalizer::harness::{load_json_file, LocalRunner};
use profile_normalizer::{execute, InvocationMetadata};

/// Run the profile normalizer locally against a profile JSON file.
#[derive(Parser, Debug)]
#[command(name = "profile-normalizer", version)]
struct Cli {
    /// Profile JSON file, sent to the function as `profile_data`
    profile: Option<PathBuf>,

    /// JSON file with context variables to inject into the event
    #[arg(short, long)]
    context: Option<PathBuf>,

    /// Value for the `run_id` context variable (defaults to RUN_ID)
    #[arg(long)]
    run_id: Option<String>,

    /// Print the full response body instead of the formatted text
    #[arg(long)]
    raw: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    let config = Config::from_env()?;

    // Logs go to stderr; stdout carries only the response.
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("profile_normalizer={}", &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    info!("Starting profile normalizer v{}", env!("CARGO_PKG_VERSION"));

    let mut runner = LocalRunner::new(InvocationMetadata::local(
        &config.function_name,
        config.memory_limit_mb,
    ));

    if let Some(path) = &cli.context {
        if path.exists() {
            match load_json_file(path).await? {
                Value::Object(vars) => runner.context.set_variables(vars),
                _ => bail!("Context file {} must contain a JSON object", path.display()),
            }
        } else {
            warn!(
                "Context file {} not found, using empty context",
                path.display()
            );
        }
    }
    runner
        .context
        .set_variable("run_id", cli.run_id.unwrap_or(config.run_id));

    let additional_body = match &cli.profile {
        Some(path) => {
            let mut body = Map::new();
            body.insert("profile_data".to_string(), load_json_file(path).await?);
            Some(body)
        }
        None => None,
    };

    let response = runner.run(execute, additional_body);
    let body: Value = serde_json::from_str(&response.body)?;

    println!("Status Code: {}", response.status_code);
    match body.get("formatted_text").and_then(Value::as_str) {
        Some(text) if !cli.raw => {
            println!("\nFormatted Text for LLM:");
            println!("------------------------");
            println!("{text}");
        }
        _ => {
            println!("\nBody:");
            println!("{}", serde_json::to_string_pretty(&body)?);
        }
    }

    Ok(())
}
