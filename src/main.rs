use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use colored::Colorize;
use futures::stream::{self, StreamExt};
use indicatif::ProgressBar;
use tracing::info;

use kavach::ai::{self, gemini::GeminiProducer, VerdictProducer};
use kavach::config::Config;
use kavach::engine::ScamEngine;
use kavach::output;

/// Kavach: rule-based scam detection for SMS and chat messages.
///
/// Classifies a message into one of five risk tiers using a deterministic,
/// auditable pattern registry — no network access required. An optional
/// AI mode cross-checks messages against a generative provider.
#[derive(Parser)]
#[command(name = "kavach", version, about)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Analyze a single message with the rule engine
    Analyze {
        /// The message text to analyze
        message: String,

        /// Path to a custom rules JSON file (overrides KAVACH_RULES)
        #[arg(long)]
        rules: Option<String>,

        /// Print the flat JSON assessment instead of formatted output
        #[arg(long)]
        json: bool,
    },

    /// Analyze a file of messages, one per line
    Batch {
        /// Path to the input file
        file: String,

        /// Cross-check each message with the AI producer (falls back to
        /// the rule engine per message on provider errors)
        #[arg(long)]
        ai: bool,

        /// Number of messages to check in parallel in --ai mode (default: 4)
        #[arg(long, default_value = "4")]
        concurrency: usize,

        /// Write a markdown report to this path
        #[arg(long)]
        report: Option<String>,

        /// Path to a custom rules JSON file (overrides KAVACH_RULES)
        #[arg(long)]
        rules: Option<String>,

        /// Print one JSON assessment per line instead of formatted output
        #[arg(long)]
        json: bool,
    },

    /// Analyze a single message with the AI producer (engine fallback)
    AiCheck {
        /// The message text to analyze
        message: String,
    },

    /// Show the rule registry: patterns, categories, special phrases
    Patterns {
        /// Path to a custom rules JSON file (overrides KAVACH_RULES)
        #[arg(long)]
        rules: Option<String>,
    },

    /// Serve the HTTP API
    #[cfg(feature = "web")]
    Serve {
        /// Port to listen on
        #[arg(long, default_value = "3000")]
        port: u16,

        /// Address to bind
        #[arg(long, default_value = "127.0.0.1")]
        bind: String,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file if present (silently ignore if missing)
    let _ = dotenvy::dotenv();

    // Set up structured logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("kavach=info")),
        )
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Analyze { message, rules, json } => {
            require_message(&message)?;
            let config = Config::load()?;
            let engine = ScamEngine::new(config.load_registry(rules.as_deref())?);

            let assessment = engine.analyze(&message);

            if json {
                println!("{}", serde_json::to_string_pretty(&assessment)?);
            } else {
                output::terminal::display_assessment(&assessment);
            }
        }

        Commands::Batch {
            file,
            ai,
            concurrency,
            report,
            rules,
            json,
        } => {
            let config = Config::load()?;
            let engine = ScamEngine::new(config.load_registry(rules.as_deref())?);

            let raw = std::fs::read_to_string(&file)
                .with_context(|| format!("Failed to read message file {file}"))?;
            let messages: Vec<String> = raw
                .lines()
                .map(str::trim)
                .filter(|l| !l.is_empty())
                .map(str::to_string)
                .collect();

            if messages.is_empty() {
                anyhow::bail!("No messages found in {file} (one message per line)");
            }

            println!("Analyzing {} messages...", messages.len());

            let bar = ProgressBar::new(messages.len() as u64);
            let assessments: Vec<(String, kavach::engine::Assessment)> = messages
                .iter()
                .map(|message| {
                    let assessment = engine.analyze(message);
                    bar.inc(1);
                    (message.clone(), assessment)
                })
                .collect();
            bar.finish_and_clear();

            if json {
                for (_, assessment) in &assessments {
                    println!("{}", serde_json::to_string(assessment)?);
                }
            } else {
                output::terminal::display_batch_summary(&assessments);
            }

            // AI cross-check runs after the engine pass so the comparison
            // is visible even when the provider is flaky.
            if ai {
                config.require_gemini()?;
                let producer = GeminiProducer::new(
                    config.gemini_api_url.clone(),
                    config.gemini_api_key.clone(),
                    config.gemini_model.clone(),
                );
                run_ai_cross_check(&producer, &engine, &messages, concurrency).await;
            }

            if let Some(report_path) = report {
                let path = output::markdown::generate_report(&assessments, &report_path)?;
                println!("{}", format!("Markdown report saved to: {path}").bold());
            }
        }

        Commands::AiCheck { message } => {
            require_message(&message)?;
            let config = Config::load()?;
            config.require_gemini()?;

            let engine = ScamEngine::new(config.load_registry(None)?);
            let producer = GeminiProducer::new(
                config.gemini_api_url.clone(),
                config.gemini_api_key.clone(),
                config.gemini_model.clone(),
            );

            let verdict = ai::check_with_fallback(&producer, &engine, &message).await;
            output::terminal::display_ai_verdict(&verdict);
        }

        Commands::Patterns { rules } => {
            let config = Config::load()?;
            let registry = config.load_registry(rules.as_deref())?;
            output::terminal::display_registry(&registry);
        }

        #[cfg(feature = "web")]
        Commands::Serve { port, bind } => {
            let config = Config::load()?;
            let engine = ScamEngine::new(config.load_registry(None)?);
            kavach::web::run_server(config, engine, port, &bind).await?;
        }
    }

    Ok(())
}

/// Reject empty and whitespace-only input before the engine runs.
fn require_message(message: &str) -> Result<()> {
    if message.trim().is_empty() {
        anyhow::bail!("Message is required");
    }
    Ok(())
}

/// Fan the messages through the AI producer and print disagreements with
/// the rule engine. Provider errors degrade to the engine verdict per
/// message, so the pass always completes.
async fn run_ai_cross_check(
    producer: &dyn VerdictProducer,
    engine: &ScamEngine,
    messages: &[String],
    concurrency: usize,
) {
    println!("Cross-checking with the AI producer...");

    let bar = ProgressBar::new(messages.len() as u64);
    let bar_ref = &bar;

    let mut results: Vec<(usize, kavach::ai::AiVerdict)> =
        stream::iter(messages.iter().enumerate())
            .map(|(i, message)| async move {
                let verdict = ai::check_with_fallback(producer, engine, message).await;
                bar_ref.inc(1);
                (i, verdict)
            })
            .buffer_unordered(concurrency.max(1))
            .collect()
            .await;
    bar.finish_and_clear();

    results.sort_by_key(|(i, _)| *i);

    let mut disagreements = 0;
    for (i, verdict) in &results {
        let engine_verdict = engine.analyze(&messages[*i]);
        // The producers use different label sets; compare on badge class.
        if verdict.badge_class != engine_verdict.badge_class {
            disagreements += 1;
            println!(
                "  {} engine={} ai={}  {}",
                "≠".yellow(),
                engine_verdict.verdict,
                verdict.verdict,
                output::truncate_chars(&messages[*i], 70).dimmed()
            );
        }
    }

    info!(
        messages = messages.len(),
        disagreements, "AI cross-check complete"
    );
    println!("  {} of {} verdicts differ from the rule engine", disagreements, messages.len());
}
