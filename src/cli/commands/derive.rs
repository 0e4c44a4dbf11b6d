//! Derive command - Print Zero-Determinant strategy parameters

use anyhow::Result;
use clap::{Parser, Subcommand};

use crate::{
    cli::{commands::PayoffArgs, output},
    game::Action,
    strategy::StrategySpec,
    zd,
};

#[derive(Parser, Debug)]
#[command(about = "Derive Zero-Determinant strategy parameters without simulating")]
pub struct DeriveArgs {
    #[command(subcommand)]
    pub family: DeriveFamily,
}

#[derive(Subcommand, Debug)]
pub enum DeriveFamily {
    /// Equalizer: pin the opponent's long-run mean payoff
    Equalizer {
        /// Cooperation probability after mutual cooperation
        #[arg(long)]
        p1: f64,

        /// Cooperation probability after mutual defection
        #[arg(long)]
        p4: f64,

        #[command(flatten)]
        payoffs: PayoffArgs,
    },

    /// Extortionate: pin the payoff-surplus ratio to chi
    Extortionate {
        /// Extortion factor (must exceed 1)
        #[arg(long)]
        chi: f64,

        #[command(flatten)]
        payoffs: PayoffArgs,
    },
}

pub fn execute(args: DeriveArgs) -> Result<()> {
    match args.family {
        DeriveFamily::Equalizer { p1, p4, payoffs } => {
            let payoffs = payoffs.matrix()?;
            let spec = zd::equalizer(&payoffs, p1, p4)?;
            print_spec(&spec);
            output::print_kv(
                "Pinned opponent mean",
                &format!("{:.4}", zd::equalizer_target(&payoffs, p1, p4)),
            );
        }
        DeriveFamily::Extortionate { chi, payoffs } => {
            let payoffs = payoffs.matrix()?;
            let spec = zd::extortionate(&payoffs, chi)?;
            print_spec(&spec);
            output::print_kv("Extortion factor", &chi.to_string());
        }
    }
    Ok(())
}

fn print_spec(spec: &StrategySpec) {
    output::print_section(spec.name());
    output::print_kv("First move", &spec.first_move().to_string());
    for own in [Action::Cooperate, Action::Defect] {
        for theirs in [Action::Cooperate, Action::Defect] {
            output::print_kv(
                &format!("After ({own}, {theirs})"),
                &spec.cooperate_after(own, theirs).to_string(),
            );
        }
    }
}
