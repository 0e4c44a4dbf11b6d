//! Dilemma CLI - Research toolkit for the Iterated Prisoner's Dilemma
//!
//! This CLI provides a unified interface for:
//! - Simulating single matches between roster strategies
//! - Running roster tournaments with CSV/JSON export
//! - Deriving Zero-Determinant strategy parameters

use anyhow::Result;
use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "dilemma")]
#[command(version, about = "Iterated Prisoner's Dilemma research toolkit", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Simulate one match between two named strategies
    Play(dilemma::cli::commands::play::PlayArgs),

    /// Run the roster tournament and export result tables
    Tournament(dilemma::cli::commands::tournament::TournamentArgs),

    /// Derive Zero-Determinant strategy parameters
    Derive(dilemma::cli::commands::derive::DeriveArgs),
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Play(args) => dilemma::cli::commands::play::execute(args),
        Commands::Tournament(args) => dilemma::cli::commands::tournament::execute(args),
        Commands::Derive(args) => dilemma::cli::commands::derive::execute(args),
    }
}
