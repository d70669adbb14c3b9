//! CVSage — extract a structured profile from CV text.

use std::io::Read;
use std::path::Path;

use anyhow::Context;
use cvsage_core::CvSageConfig;
use cvsage_remote::RemoteConfig;
use cvsage_runtime::{ExtractionOutcome, Orchestrator};
use tracing::info;
use tracing_subscriber::EnvFilter;

fn print_help() {
    println!("CVSage — CV profile extraction");
    println!();
    println!("Usage: cvsage <command> [options]");
    println!();
    println!("Commands:");
    println!("  extract <file|->         Print the extracted profile as JSON");
    println!("  summary <file|->         Print the one-line profile summary");
    println!("  context <file|->         Print the interview-prompt context block");
    println!("  help                     Show this help message");
    println!();
    println!("Options:");
    println!("  --local                  Skip remote extraction, use heuristics only");
}

/// Read CV text from a path, or stdin for `-`.
fn read_input(source: &str) -> anyhow::Result<String> {
    if source == "-" {
        let mut text = String::new();
        std::io::stdin()
            .read_to_string(&mut text)
            .context("Failed to read stdin")?;
        return Ok(text);
    }
    std::fs::read_to_string(Path::new(source)).with_context(|| format!("Failed to read {}", source))
}

fn build_orchestrator(local: bool) -> anyhow::Result<Orchestrator> {
    if local {
        return Ok(Orchestrator::local_only());
    }
    let config = CvSageConfig::from_env()?;
    info!("Data directory: {}", config.data_paths.root.display());
    let remote_config = RemoteConfig::load(&config.data_paths.remote_config_file);
    Ok(Orchestrator::from_config(&config, remote_config)?)
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Logs go to stderr so stdout stays machine-readable.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let args: Vec<String> = std::env::args().skip(1).collect();
    let local = args.iter().any(|a| a == "--local");
    let positional: Vec<&str> = args
        .iter()
        .filter(|a| *a != "--local")
        .map(String::as_str)
        .collect();

    let (command, source) = match positional.as_slice() {
        [] | ["help"] | ["--help"] | ["-h"] => {
            print_help();
            return Ok(());
        }
        [command, source] => (*command, *source),
        [command] => {
            eprintln!("Missing input for '{}'. Use 'cvsage help' for usage.", command);
            std::process::exit(1);
        }
        _ => {
            eprintln!("Too many arguments. Use 'cvsage help' for usage.");
            std::process::exit(1);
        }
    };

    if !matches!(command, "extract" | "summary" | "context") {
        eprintln!("Unknown command: {}. Use 'cvsage help' for usage.", command);
        std::process::exit(1);
    }

    let text = read_input(source)?;
    let orchestrator = build_orchestrator(local)?;
    let outcome: ExtractionOutcome = orchestrator.extract(&text).await;

    info!(
        "Extracted profile via {} path in {}ms",
        outcome.path, outcome.duration_ms
    );

    match command {
        "extract" => println!("{}", serde_json::to_string_pretty(&outcome)?),
        "summary" => println!("{}", outcome.summary()),
        _ => println!("{}", cvsage_extract::build_interview_context(&outcome.profile)),
    }

    Ok(())
}
