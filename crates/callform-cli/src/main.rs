//! Callform CLI - Start AI voice calls
//!
//! Submits call requests to a Callform server and manages the default
//! voice and prompt.

mod config;
mod console;

use anyhow::{bail, Context, Result};
use callform::{CallRequest, FormSubmissionHandler, HttpCallTransport, SubmitEvent, Voice};
use clap::{Parser, Subcommand};
use colored::Colorize;
use dialoguer::{Input, Select};
use std::sync::Arc;
use std::time::Duration;

use config::Config;
use console::ConsolePage;

#[derive(Parser)]
#[command(name = "callform")]
#[command(about = "Callform CLI - Start AI voice calls", long_about = None)]
#[command(version)]
struct Cli {
    /// Log filter when RUST_LOG is unset (e.g. "debug", "callform=trace")
    #[arg(long, global = true, default_value = "warn")]
    log_level: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Start a call to the specified number
    Call {
        /// Phone number to call
        #[arg(short, long)]
        number: String,
        /// Voice (defaults to configured voice)
        #[arg(short, long)]
        voice: Option<Voice>,
        /// Prompt (defaults to configured prompt)
        #[arg(short, long)]
        prompt: Option<String>,
        /// Server base URL
        #[arg(long)]
        server: Option<String>,
        /// Give up after this many seconds
        #[arg(long)]
        timeout: Option<u64>,
    },

    /// Fill in the call form interactively and submit it
    Form {
        /// Server base URL
        #[arg(long)]
        server: Option<String>,
    },

    /// List available voices
    Voices,

    /// Manage application configuration
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

#[derive(Subcommand)]
enum ConfigAction {
    /// Set or show the default voice
    Voice {
        /// Voice to use
        #[arg(long)]
        name: Option<Voice>,
    },
    /// Configure the prompt/personality
    Prompt {
        /// Set the current prompt
        #[arg(long)]
        set: Option<String>,
        /// Save a prompt with a name
        #[arg(long, num_args = 2, value_names = ["NAME", "TEXT"])]
        save: Option<Vec<String>>,
        /// Load a saved prompt
        #[arg(long)]
        load: Option<String>,
        /// List saved prompts
        #[arg(long)]
        list: bool,
    },
    /// Set or show the server URL
    Server {
        /// Server base URL
        #[arg(long)]
        url: Option<String>,
    },
    /// Show current configuration
    Show,
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();
    let cli = Cli::parse();

    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(&cli.log_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    match cli.command {
        Commands::Call { number, voice, prompt, server, timeout } => {
            cmd_call(number, voice, prompt, server, timeout).await
        }
        Commands::Form { server } => cmd_form(server).await,
        Commands::Voices => cmd_voices(),
        Commands::Config { action } => cmd_config(action),
    }
}

// ============================================
// Command Implementations
// ============================================

async fn cmd_call(
    number: String,
    voice: Option<Voice>,
    prompt: Option<String>,
    server: Option<String>,
    timeout: Option<u64>,
) -> Result<()> {
    let config = Config::load()?;

    let request = CallRequest::new(
        number,
        voice.unwrap_or(config.voice).as_str(),
        prompt.unwrap_or_else(|| config.prompt.clone()),
    );

    println!("Calling {}", request.phone_number.cyan());
    println!("  Voice:  {}", request.voice);
    println!("  Prompt: {}", truncate_string(&request.prompt, 50).dimmed());

    submit(request, &config.server_url(server.as_deref()), timeout).await
}

async fn cmd_form(server: Option<String>) -> Result<()> {
    let config = Config::load()?;

    let phone_number: String = Input::new()
        .with_prompt("Phone number")
        .interact_text()
        .context("Failed to read phone number")?;

    let labels: Vec<String> = Voice::ALL
        .iter()
        .map(|v| format!("{:<8} ({})", v.as_str(), v.description()))
        .collect();
    let default_index = Voice::ALL
        .iter()
        .position(|v| *v == config.voice)
        .unwrap_or(0);
    let voice_index = Select::new()
        .with_prompt("Voice")
        .items(&labels)
        .default(default_index)
        .interact()
        .context("Failed to read voice")?;

    let prompt: String = Input::new()
        .with_prompt("Prompt")
        .default(config.prompt.clone())
        .allow_empty(true)
        .interact_text()
        .context("Failed to read prompt")?;

    let request = CallRequest::new(phone_number, Voice::ALL[voice_index].as_str(), prompt);
    submit(request, &config.server_url(server.as_deref()), None).await
}

async fn submit(request: CallRequest, server_url: &str, timeout: Option<u64>) -> Result<()> {
    tracing::debug!("Using server {}", server_url);

    let mut transport = HttpCallTransport::new(server_url);
    if let Some(secs) = timeout {
        transport = transport.with_timeout(Duration::from_secs(secs));
    }

    let page = Arc::new(ConsolePage::new(&request));
    let handler = FormSubmissionHandler::setup(page, Arc::new(transport))
        .context("Call form is incomplete")?;

    let outcome = handler.submit(&mut SubmitEvent::new()).await;
    if !outcome.status().is_initiated() {
        bail!("Call was not initiated");
    }

    Ok(())
}

fn cmd_voices() -> Result<()> {
    println!("{}", "Available Voices:".bold());
    for voice in Voice::ALL {
        println!("  {:<8} ({})", voice.as_str().cyan(), voice.description());
    }

    Ok(())
}

fn cmd_config(action: ConfigAction) -> Result<()> {
    let mut config = Config::load()?;

    match action {
        ConfigAction::Voice { name } => match name {
            Some(voice) => {
                config.voice = voice;
                config.save()?;
                println!("{} Voice set to: {}", "✓".green(), voice);
            }
            None => println!("Current voice: {}", config.voice.as_str().cyan()),
        },

        ConfigAction::Prompt { set, save, load, list } => {
            if let Some(text) = set {
                config.prompt = text;
                config.save()?;
                println!("{} Prompt updated", "✓".green());
            } else if let Some(pair) = save {
                let [name, text]: [String; 2] = pair
                    .try_into()
                    .map_err(|_| anyhow::anyhow!("--save takes NAME and TEXT"))?;
                config.save_prompt(name.clone(), text);
                config.save()?;
                println!("{} Prompt saved as '{}'", "✓".green(), name);
            } else if let Some(name) = load {
                if !config.load_prompt(&name) {
                    bail!("No prompt found with name: {}", name);
                }
                config.save()?;
                println!("{} Loaded prompt: '{}'", "✓".green(), name);
            } else if list {
                if config.saved_prompts.is_empty() {
                    println!("No saved prompts.");
                    println!("\n{}", "Save one with:".dimmed());
                    println!("  callform config prompt --save <name> <text>");
                    return Ok(());
                }

                println!("{}", "Saved prompts:".bold());
                for (name, text) in &config.saved_prompts {
                    println!("  {} {}", name.cyan(), truncate_string(text, 100).dimmed());
                }
            } else {
                println!("{}", "Current prompt:".bold());
                println!("{}", config.prompt);
            }
        }

        ConfigAction::Server { url } => match url {
            Some(url) => {
                config.server_url = url.trim_end_matches('/').to_string();
                config.save()?;
                println!("{} Server set to: {}", "✓".green(), config.server_url);
            }
            None => println!("Current server: {}", config.server_url(None).cyan()),
        },

        ConfigAction::Show => {
            println!("{}", "Configuration:".bold());
            println!("  Path: {:?}", Config::config_path()?);
            println!("  Server: {}", config.server_url(None));
            println!("  Voice: {}", config.voice.as_str().cyan());
            println!("  Prompt: {}", truncate_string(&config.prompt, 80));
            println!("  Saved Prompts: {}", config.saved_prompts.len());
            for name in config.saved_prompts.keys() {
                println!("    - {}", name);
            }
        }
    }

    Ok(())
}

/// Truncate string safely for UTF-8 (by char count, not bytes)
fn truncate_string(s: &str, max_chars: usize) -> String {
    let chars: Vec<char> = s.chars().take(max_chars).collect();
    if s.chars().count() > max_chars {
        format!("{}...", chars.into_iter().collect::<String>())
    } else {
        s.to_string()
    }
}
