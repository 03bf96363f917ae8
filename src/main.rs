use std::fs::OpenOptions;
use std::sync::Mutex;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use codemaster::catalog::Catalog;
use codemaster::explain::{ApiKeyManager, provider_from_config};
use codemaster::quiz::FALLBACK_EXPLANATION;
use codemaster::{App, Config, Topic};
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "codemaster")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Topic to start with (javascript, react)
    #[arg(short, long)]
    topic: Option<Topic>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// List topics, question counts and resource links
    Topics,
    /// Validate the built-in question catalog
    Check,
    /// Ask Claude to explain a concept
    Explain {
        /// Topic the concept belongs to
        topic: Topic,
        /// Concept to explain, e.g. "closures"
        #[arg(required = true, num_args = 1..)]
        concept: Vec<String>,
    },
    /// Store your Anthropic API key in the system keyring
    SetKey {
        /// API key (starts with sk-ant-)
        key: String,
    },
    /// Remove the stored API key
    ClearKey,
}

fn env_filter() -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| "codemaster=info".into())
}

/// Log to a file while the TUI owns the terminal
fn init_file_logging() -> Result<()> {
    let path = Config::log_path()?;
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create log directory {:?}", parent))?;
    }
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(&path)
        .with_context(|| format!("Failed to open log file {:?}", path))?;

    tracing_subscriber::registry()
        .with(env_filter())
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_ansi(false)
                .with_writer(Mutex::new(file)),
        )
        .init();
    Ok(())
}

fn init_stderr_logging() {
    tracing_subscriber::registry()
        .with(env_filter())
        .with(tracing_subscriber::fmt::layer().with_target(false).with_writer(std::io::stderr))
        .init();
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        None => {
            init_file_logging()?;
            let config = Config::load()?;
            let catalog = Catalog::builtin().context("Built-in question catalog is invalid")?;
            let topic = cli.topic.unwrap_or(config.default_topic);

            let mut app = App::new(config, catalog, topic)?;
            app.run().await?;
        }
        Some(command) => {
            init_stderr_logging();
            run_command(command).await?;
        }
    }

    Ok(())
}

async fn run_command(command: Commands) -> Result<()> {
    match command {
        Commands::Topics => {
            let catalog = Catalog::builtin()?;
            for topic in Topic::all() {
                let res = topic.resources();
                println!("{} ({})", topic.display_name(), topic.key());
                println!("  questions: {}", catalog.question_set(*topic).len());
                println!("  video:     {}", res.video_url);
                println!("  docs:      {}", res.docs_url);
            }
        }
        Commands::Check => {
            let catalog = Catalog::builtin().context("Catalog check failed")?;
            for topic in Topic::all() {
                let set = catalog.question_set(*topic);
                println!("{:<12} {} questions OK", topic.display_name(), set.len());
            }
        }
        Commands::Explain { topic, concept } => {
            let config = Config::load()?;
            let concept = concept.join(" ");
            let provider = provider_from_config(&config);

            match provider.explain(topic, &concept).await {
                Ok(text) => println!("{}", text),
                Err(e) => {
                    tracing::warn!("Explanation failed: {}", e);
                    println!("{}", FALLBACK_EXPLANATION);
                    eprintln!("error: {}", e);
                }
            }
        }
        Commands::SetKey { key } => {
            ApiKeyManager::set_api_key(&key)?;
            println!("Stored API key {}", ApiKeyManager::mask_key(&key));
        }
        Commands::ClearKey => {
            ApiKeyManager::delete_api_key()?;
            println!("API key removed");
        }
    }

    Ok(())
}
