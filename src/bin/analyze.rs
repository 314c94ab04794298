//! Analyze binary - prints the language breakdown of a code-mixed sentence
//!
//! Usage:
//!   cargo run --bin analyze -- "Mera naam John hai"            # Analyze locally
//!   cargo run --bin analyze -- --remote "Mera naam John hai"   # Ask a running server
//!   cargo run --bin analyze -- --json "Tum kahan ho?"          # Print the raw JSON result
//!   echo "Aaj office la meeting aahe" | cargo run --bin analyze
//!
//! Optional environment variables:
//! - CODEMIX_API_URL (defaults to http://localhost:5000, used with --remote)
//! - LEXICON_FILE (extra lexicon entries, used for local analysis)
//! - MAX_TEXT_CHARS (defaults to 500, used for local analysis)

use anyhow::{Context, Result};
use codemix::client::ProcessClient;
use codemix::config::Config;
use codemix::lexicon::Lexicon;
use codemix::{AnalysisResult, Processor};
use std::io::Read;
use tracing::info;

/// Render the result the way the web front end lays it out.
fn print_result(result: &AnalysisResult) {
    let stats = &result.language_stats;
    let percent = |count: usize| {
        if result.word_count == 0 {
            0.0
        } else {
            count as f64 / result.word_count as f64 * 100.0
        }
    };

    println!("Main language: {}", result.main_language);
    println!("Total words:   {}", result.word_count);
    println!();
    println!("  Hindi    {:>3} words ({:>5.1}%)", stats.hindi, percent(stats.hindi));
    println!("  Marathi  {:>3} words ({:>5.1}%)", stats.marathi, percent(stats.marathi));
    println!("  English  {:>3} words ({:>5.1}%)", stats.english, percent(stats.english));
    println!();

    for (name, words) in [
        ("Hindi", &result.hindi_words),
        ("Marathi", &result.marathi_words),
        ("English", &result.english_words),
    ] {
        if !words.is_empty() {
            println!("{} words: {}", name, words.join(", "));
        }
    }

    println!();
    println!("Original:  \"{}\"", result.original_text);
    println!(
        "Converted ({}): \"{}\"",
        result.main_language, result.converted_text
    );
}

fn read_input(args: &[String]) -> Result<String> {
    let words: Vec<&str> = args
        .iter()
        .skip(1)
        .filter(|arg| !arg.starts_with("--"))
        .map(String::as_str)
        .collect();

    if !words.is_empty() {
        return Ok(words.join(" "));
    }

    let mut input = String::new();
    std::io::stdin()
        .read_to_string(&mut input)
        .context("Failed to read text from stdin")?;
    Ok(input)
}

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("codemix=warn".parse()?),
        )
        .with_writer(std::io::stderr)
        .init();

    // Load environment from .env file
    dotenvy::dotenv().ok();

    // Parse CLI arguments
    let args: Vec<String> = std::env::args().collect();
    let remote = args.iter().any(|arg| arg == "--remote");
    let as_json = args.iter().any(|arg| arg == "--json");

    let text = read_input(&args)?;

    let result = if remote {
        let api_url = std::env::var("CODEMIX_API_URL")
            .unwrap_or_else(|_| "http://localhost:5000".to_string());
        info!("Sending text to {}", api_url);

        let client = ProcessClient::new(&api_url)?;
        client
            .wait_until_healthy()
            .await
            .with_context(|| format!("Server at {} is not reachable", api_url))?;
        client.process(&text).await?
    } else {
        let config = Config::from_env()?;
        let lexicon = match &config.lexicon_file {
            Some(path) => Lexicon::from_file(path)?,
            None => Lexicon::builtin(),
        };
        let processor = Processor::new(&lexicon).with_max_chars(config.max_text_chars);
        processor.process(&text)?
    };

    if as_json {
        println!("{}", serde_json::to_string_pretty(&result)?);
    } else {
        print_result(&result);
    }

    Ok(())
}
