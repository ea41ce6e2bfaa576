use anyhow::Result;
use colored::Colorize;
use indicatif::{ProgressBar, ProgressStyle};
use inquire::Text;
use std::path::Path;

use crate::config::Config;
use crate::ingest::{self, SourceFormat};
use crate::llm::GroqClient;
use crate::prompt::{self, Limits};

/// One-shot question answering: read a report file, ask one question, print
/// one answer. `file` and `question` skip the interactive prompts when given.
pub async fn run(file: Option<String>, question: Option<String>) -> Result<()> {
    let config = Config::load()?;

    // The model comes up before any input is consumed; without credentials
    // there is nothing to ask.
    let api_key = match config.get_api_key() {
        Some(key) => key,
        None => {
            println!(
                "{} No API key configured. Run {} to set up.",
                "Error:".red().bold(),
                "medquery config".cyan()
            );
            return Ok(());
        }
    };

    let client = GroqClient::new(api_key, config.default_model);
    let limits = Limits::default();

    let file = match file {
        Some(f) => f,
        None => Text::new("Path to the medical report file:")
            .with_help_message("Any document: pdf, docx, txt, csv, json, xml, or a scanned image")
            .prompt()?,
    };

    let question = match question {
        Some(q) => q,
        None => Text::new("Your medical question:")
            .with_help_message("e.g. 'Are any lab values out of range?'")
            .prompt()?,
    };
    let question = question.trim();

    let path = Path::new(file.trim());

    if !path.exists() {
        println!("{} File not found: {}", "❌".red(), path.display());
        return Ok(());
    }

    let format = SourceFormat::from_path(path);
    println!(
        "  📄 {} {}",
        "Detected format:".dimmed(),
        format.label().cyan()
    );

    let spinner = create_spinner("Extracting text...");
    let extraction = ingest::extract(path).await;
    spinner.finish_and_clear();

    let report_text = prompt::truncate(&extraction.into_text(), limits.max_input_chars);

    if report_text.trim().is_empty() {
        println!("{} No readable text found in file", "❌".red());
        return Ok(());
    }

    let prompt_text = prompt::build_prompt(&report_text, question);

    let spinner = create_spinner("Generating answer...");
    let answer = client.generate(&prompt_text, limits.max_new_tokens).await?;
    spinner.finish_and_clear();

    println!("\n{}\n", "✅ ANSWER:".green().bold());
    let skin = termimad::MadSkin::default();
    skin.print_text(&answer);
    println!();

    Ok(())
}

/// Spinner for indeterminate progress
fn create_spinner(message: &str) -> ProgressBar {
    let spinner = ProgressBar::new_spinner();
    spinner.set_style(
        ProgressStyle::default_spinner()
            .tick_chars("⠋⠙⠹⠸⠼⠴⠦⠧⠇⠏")
            .template("{spinner:.cyan} {msg}")
            .unwrap(),
    );
    spinner.set_message(message.to_string());
    spinner.enable_steady_tick(std::time::Duration::from_millis(80));
    spinner
}
