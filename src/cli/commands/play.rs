//! Play command - Simulate a single match between two roster strategies

use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;
use rand::{SeedableRng, rngs::StdRng};

use crate::{
    cli::{commands::PayoffArgs, output},
    engine::MatchEngine,
    export, strategy,
};

#[derive(Parser, Debug)]
#[command(about = "Simulate one match between two named strategies")]
pub struct PlayArgs {
    /// First strategy name
    pub first: String,

    /// Second strategy name
    pub second: String,

    /// Number of rounds
    #[arg(long, short = 'r', default_value_t = 10_000)]
    pub rounds: u32,

    /// Random seed for reproducibility
    #[arg(long)]
    pub seed: Option<u64>,

    /// Export the running-mean trajectory to a CSV file
    #[arg(long)]
    pub trace: Option<PathBuf>,

    #[command(flatten)]
    pub payoffs: PayoffArgs,
}

pub fn execute(args: PlayArgs) -> Result<()> {
    let payoffs = args.payoffs.matrix()?;
    let seed = args.seed.unwrap_or_else(rand::random);

    // The roster draw (the scrambler's frozen table) shares the run seed.
    let mut roster_rng = StdRng::seed_from_u64(seed);
    let roster = strategy::reference_roster(&payoffs, &mut roster_rng)?;

    let first = super::find_strategy(&roster, &args.first)?;
    let second = super::find_strategy(&roster, &args.second)?;

    output::print_section("Match Configuration");
    output::print_kv("First", first.name());
    output::print_kv("Second", second.name());
    output::print_kv("Rounds", &args.rounds.to_string());
    output::print_kv("Seed", &seed.to_string());

    let mut engine = MatchEngine::with_seed(payoffs, seed);
    let (outcome, trace) = engine.play_traced(args.rounds, first, second)?;

    output::print_section("Match Result");
    output::print_kv(first.name(), &format!("{:.2}", outcome.mean_a));
    output::print_kv(second.name(), &format!("{:.2}", outcome.mean_b));

    if let Some(path) = &args.trace {
        export::write_trace_csv(path, &trace)?;
        println!("\nTrajectory written to: {}", path.display());
    }

    Ok(())
}
