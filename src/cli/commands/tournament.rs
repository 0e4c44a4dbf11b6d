//! Tournament command - Run roster strategies against the full roster

use std::{fs, path::PathBuf};

use anyhow::{Context, Result};
use clap::Parser;
use rand::{SeedableRng, rngs::StdRng};

use crate::{
    cli::{commands::PayoffArgs, output},
    export::{self, RunSummary},
    strategy,
    tournament::{Tournament, TournamentConfig},
};

#[derive(Parser, Debug)]
#[command(about = "Run the roster tournament and export result tables")]
pub struct TournamentArgs {
    /// Number of rounds per match
    #[arg(long, short = 'r', default_value_t = 10_000)]
    pub rounds: u32,

    /// Independent repeats per pairing (means averaged across repeats)
    #[arg(long, default_value_t = 1)]
    pub trials: u32,

    /// Random seed for reproducibility
    #[arg(long)]
    pub seed: Option<u64>,

    /// Only run the named strategy instead of the whole roster
    #[arg(long)]
    pub strategy: Option<String>,

    /// Directory for per-strategy CSV tables
    #[arg(long, default_value = "results")]
    pub out_dir: PathBuf,

    /// Write a JSON summary of the whole run
    #[arg(long)]
    pub summary: Option<PathBuf>,

    #[command(flatten)]
    pub payoffs: PayoffArgs,
}

pub fn execute(args: TournamentArgs) -> Result<()> {
    let payoffs = args.payoffs.matrix()?;
    let seed = args.seed.unwrap_or_else(rand::random);

    let mut roster_rng = StdRng::seed_from_u64(seed);
    let roster = strategy::reference_roster(&payoffs, &mut roster_rng)?;

    let tested: Vec<_> = match &args.strategy {
        Some(name) => vec![super::find_strategy(&roster, name)?.clone()],
        None => roster.clone(),
    };

    output::print_section("Tournament Configuration");
    output::print_kv("Strategies", &tested.len().to_string());
    output::print_kv("Opponents", &roster.len().to_string());
    output::print_kv("Rounds", &args.rounds.to_string());
    output::print_kv("Trials", &args.trials.to_string());
    output::print_kv("Seed", &seed.to_string());

    fs::create_dir_all(&args.out_dir)
        .with_context(|| format!("create output directory {}", args.out_dir.display()))?;

    let config = TournamentConfig::new(args.rounds)
        .with_trials(args.trials)
        .with_seed(seed);
    let mut tournament = Tournament::new(payoffs, config);

    let matches_per_strategy = roster.len() as u64 * u64::from(args.trials);
    let progress = output::create_tournament_progress(tested.len() as u64 * matches_per_strategy);

    let mut tables = Vec::with_capacity(tested.len());
    for spec in &tested {
        progress.set_message(spec.name().to_string());
        let table = tournament.run(spec, &roster)?;
        progress.inc(matches_per_strategy);

        let path = args.out_dir.join(format!("{}.csv", file_stem(spec.name())));
        export::write_table_csv(&path, &table)?;
        tables.push(table);
    }
    progress.finish_with_message("done");

    output::print_section("Results (player mean / opponent mean)");
    for table in &tables {
        output::print_subsection(&table.strategy);
        for row in &table.rows {
            output::print_kv(
                &row.opponent,
                &format!("{:.2} / {:.2}", row.mean_self, row.mean_opponent),
            );
        }
    }

    if let Some(path) = &args.summary {
        let summary = RunSummary {
            payoffs,
            rounds: args.rounds,
            trials: args.trials,
            seed: Some(seed),
            tables,
        };
        export::write_summary_json(path, &summary)?;
        println!("\nSummary written to: {}", path.display());
    }

    println!("\nTables written to: {}", args.out_dir.display());
    Ok(())
}

/// File-system-safe stem for a strategy name.
fn file_stem(name: &str) -> String {
    let stem: String = name
        .chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() {
                c.to_ascii_lowercase()
            } else {
                '_'
            }
        })
        .collect();
    stem.trim_matches('_').to_string()
}
