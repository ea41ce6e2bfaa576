use anyhow::Result;
use clap::{CommandFactory, Parser, Subcommand};
use clap_complete::{generate, Shell};
use colored::Colorize;
use std::io;

mod commands;
mod config;
mod ingest;
mod llm;
mod prompt;

/// ASCII art banner for the application
const BANNER: &str = r#"
  __  __          _  ___
 |  \/  | ___  __| |/ _ \ _   _  ___ _ __ _   _
 | |\/| |/ _ \/ _` | | | | | | |/ _ \ '__| | | |
 | |  | |  __/ (_| | |_| | |_| |  __/ |  | |_| |
 |_|  |_|\___|\__,_|\__\_\\__,_|\___|_|   \__, |
                                          |___/
"#;

/// Print the application banner
fn print_banner() {
    println!("{}", BANNER.cyan().bold());
}

/// Print a styled status line
fn print_status(label: &str, value: &str, icon: &str) {
    println!(
        "  {} {} {}",
        icon,
        format!("{}:", label).dimmed(),
        value.cyan()
    );
}

#[derive(Parser)]
#[command(name = "medquery")]
#[command(about = "Ask questions about a medical report file with LLM assistance")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Ask a question about a report file
    Ask {
        /// Path to the report file (skips interactive prompt if provided)
        file: Option<String>,
        /// The question to ask (skips interactive prompt if provided)
        question: Option<String>,
    },
    /// Configure settings (API key, model)
    Config,
    /// Generate shell completions
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Some(Commands::Ask { file, question }) => {
            commands::ask::run(file, question).await?;
        }
        Some(Commands::Config) => {
            commands::config::run().await?;
        }
        Some(Commands::Completions { shell }) => {
            let mut cmd = Cli::command();
            let name = cmd.get_name().to_string();
            generate(shell, &mut cmd, name, &mut io::stdout());
        }
        None => {
            // No subcommand - banner, status, then straight into the ask flow
            run_interactive().await?;
        }
    }

    Ok(())
}

async fn run_interactive() -> Result<()> {
    print_banner();

    println!(
        "  {} {}",
        "Version:".dimmed(),
        env!("CARGO_PKG_VERSION").cyan()
    );
    println!(
        "  {} {}\n",
        "Note:".dimmed(),
        "Not a medical diagnosis".yellow()
    );

    println!("{}", "─".repeat(50).dimmed());

    let config = config::Config::load()?;

    let model = config
        .default_model
        .clone()
        .unwrap_or_else(|| "llama-3.3-70b-versatile".to_string());
    print_status("Model", &model, "🤖");

    let api_status = if config.has_api_key() {
        "Configured".green().to_string()
    } else {
        "Not set (run 'config')".red().to_string()
    };
    print_status("API Key", &api_status, "🔑");

    println!("{}\n", "─".repeat(50).dimmed());

    commands::ask::run(None, None).await
}
