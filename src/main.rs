//! APEER rerank gateway
//!
//! Serves Cohere-style rerank requests by asking Gemini on Vertex AI to rank
//! the documents.

#![allow(missing_docs)]

use apeer_rerank::utils::logging::init_tracing;
use apeer_rerank::{Config, server};
use clap::Parser;
use std::path::PathBuf;
use std::process::ExitCode;

#[derive(Debug, Parser)]
#[command(name = "rerank-gateway", version, about)]
struct Cli {
    /// Path to the YAML configuration file
    #[arg(short, long, env = "RERANK_CONFIG")]
    config: Option<PathBuf>,

    /// Send one test prompt before serving and abort if it fails
    #[arg(long)]
    probe: bool,

    /// Print the effective configuration and exit
    #[arg(long)]
    print_config: bool,
}

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    // A missing .env is fine; the process environment may be complete already
    let dotenv = dotenvy::dotenv();

    let mut config = match Config::resolve(cli.config.as_deref()).await {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Error: {}", e);
            return ExitCode::FAILURE;
        }
    };
    if cli.probe {
        config.vertex.startup_probe = true;
    }

    if cli.print_config {
        return match config.to_yaml() {
            Ok(yaml) => {
                print!("{}", yaml);
                ExitCode::SUCCESS
            }
            Err(e) => {
                eprintln!("Error: {}", e);
                ExitCode::FAILURE
            }
        };
    }

    if let Err(e) = config.validate() {
        eprintln!("Error: {}", e);
        return ExitCode::FAILURE;
    }

    if let Err(e) = init_tracing(&config.logging) {
        eprintln!("Error: {}", e);
        return ExitCode::FAILURE;
    }
    match dotenv {
        Ok(path) => tracing::debug!("Loaded environment from {}", path.display()),
        Err(e) if e.not_found() => tracing::debug!("No .env file found"),
        Err(e) => tracing::warn!("Failed to load .env: {}", e),
    }

    match server::run_server(config).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            // Print error using Display (not Debug) to preserve newlines
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}
