//! MindLens CLI
//!
//! Usage:
//!   mindlens --text "your reflection"        # Single analysis
//!   mindlens --interactive                   # One analysis per line
//!   mindlens --serve                         # HTTP API server
//!   mindlens --text "text" --json            # JSON output

use clap::Parser;
use colored::Colorize;
use std::io::{self, BufRead, Write};
use std::process::ExitCode;
use std::sync::Arc;
use tracing::error;
use tracing_subscriber::EnvFilter;

use mindlens::core::{run_server, InsightEngine};
use mindlens::types::Insight;
use mindlens::{Config, VERSION};

#[derive(Parser, Debug)]
#[command(
    name = "mindlens",
    version = VERSION,
    about = "MindLens - Turn a short reflection into a mood insight",
    long_about = "MindLens reads a short free-text reflection and returns a summary,\n\
                  the dominant mood with a confidence, reflection prompts and\n\
                  micro-actions matched to that mood.\n\n\
                  Mood inference tries a fine-tuned emotion classifier, then a\n\
                  zero-shot classifier, then a local keyword lexicon. Set HF_TOKEN\n\
                  to enable the model path; without it only the lexicon is used.\n\n\
                  Modes:\n  \
                  --text         Analyze one reflection\n  \
                  --interactive  Analyze each line read from stdin\n  \
                  --serve        HTTP API server mode"
)]
struct Args {
    /// Reflection to analyze (single mode)
    #[arg(short, long)]
    text: Option<String>,

    /// Interactive mode - analyze each line read from stdin
    #[arg(short, long)]
    interactive: bool,

    /// Run as HTTP API server
    #[arg(short, long)]
    serve: bool,

    /// Server address (default: 127.0.0.1:3000)
    #[arg(long, default_value = "127.0.0.1:3000")]
    addr: String,

    /// Output as JSON
    #[arg(long)]
    json: bool,

    /// Disable colors in output
    #[arg(long)]
    no_color: bool,

    /// Show per-mood score breakdown
    #[arg(long)]
    verbose: bool,

    /// Skip the model path and use the lexicon only
    #[arg(long)]
    offline: bool,
}

#[tokio::main]
async fn main() -> ExitCode {
    dotenv::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(io::stderr)
        .init();

    let args = Args::parse();
    if args.no_color {
        colored::control::set_override(false);
    }

    let config = if args.offline {
        Config::offline()
    } else {
        match Config::from_env() {
            Ok(config) => config,
            Err(e) => {
                error!(error = %e, "Invalid configuration");
                return ExitCode::FAILURE;
            }
        }
    };
    let engine = Arc::new(InsightEngine::from_config(&config));

    if args.serve {
        if let Err(e) = run_server(&args.addr, engine).await {
            error!(error = %e, "Server stopped");
            return ExitCode::FAILURE;
        }
    } else if let Some(ref text) = args.text {
        run_single(&engine, text, &args).await;
    } else {
        // Default to interactive if no mode specified
        run_interactive(&engine, &args).await;
    }
    ExitCode::SUCCESS
}

/// Analyze one reflection
async fn run_single(engine: &Arc<InsightEngine>, text: &str, args: &Args) {
    match engine.clone().analyze_guarded(text.to_string()).await {
        Ok(insight) => print_insight(&insight, args),
        Err(e) => eprintln!("{}", e),
    }
}

/// Analyze each stdin line until EOF or quit
async fn run_interactive(engine: &Arc<InsightEngine>, args: &Args) {
    print_header(args.no_color);
    println!("Write a short reflection and press Enter. Type 'quit' to exit.");
    println!();

    let stdin = io::stdin();
    let mut stdout = io::stdout();
    let mut analyzed = 0usize;

    loop {
        print!("{} ", ">".bold());
        stdout.flush().ok();

        let mut line = String::new();
        match stdin.lock().read_line(&mut line) {
            Ok(0) => break,
            Ok(_) => {}
            Err(_) => break,
        }

        let line = line.trim();
        if line.eq_ignore_ascii_case("quit") || line.eq_ignore_ascii_case("exit") {
            println!("\nSession ended. Reflections analyzed: {}", analyzed);
            break;
        }
        if line.is_empty() {
            continue;
        }

        match engine.clone().analyze_guarded(line.to_string()).await {
            Ok(insight) => {
                analyzed += 1;
                print_insight(&insight, args);
                println!();
            }
            Err(e) => eprintln!("{}", e),
        }
    }
}

fn print_insight(insight: &Insight, args: &Args) {
    if args.json {
        match serde_json::to_string_pretty(insight) {
            Ok(json) => println!("{}", json),
            Err(e) => eprintln!("Failed to encode insight: {}", e),
        }
        return;
    }

    if args.no_color {
        println!("{}", insight.to_parseable_string());
    } else {
        print!("{}", insight.to_terminal_string());
    }
    if args.verbose {
        print_verbose(insight);
    }
}

fn print_header(no_color: bool) {
    let title = format!("MindLens v{} - Interactive", VERSION);
    if no_color {
        println!("========================================");
        println!("  {}", title);
        println!("========================================");
    } else {
        println!("{}", "========================================".bold());
        println!("  {}", title.bold());
        println!("{}", "========================================".bold());
    }
    println!();
}

/// Score breakdown and provenance
fn print_verbose(insight: &Insight) {
    println!("----------------------------------------");
    println!(" source: {} | tier: {} | id: {}", insight.source, insight.tier, insight.reflection_id);
    for (mood, score) in insight.scores.iter() {
        println!("   {:<11} {:.4}", mood.label(), score);
    }
    println!("----------------------------------------");
}
