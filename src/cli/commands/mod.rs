//! CLI command implementations.

use anyhow::Result;
use clap::Args;

use crate::{game::PayoffMatrix, strategy::StrategySpec};

pub mod derive;
pub mod play;
pub mod tournament;

/// Payoff constants shared by every command.
#[derive(Args, Debug)]
pub struct PayoffArgs {
    /// Sucker payoff S
    #[arg(long, default_value_t = 0.0)]
    pub sucker: f64,

    /// Punishment payoff P
    #[arg(long, default_value_t = 1.0)]
    pub punishment: f64,

    /// Reward payoff R
    #[arg(long, default_value_t = 3.0)]
    pub reward: f64,

    /// Temptation payoff T
    #[arg(long, default_value_t = 5.0)]
    pub temptation: f64,
}

impl PayoffArgs {
    /// Build the validated payoff matrix.
    ///
    /// # Errors
    ///
    /// Fails when the constants violate the dilemma ordering.
    pub fn matrix(&self) -> crate::Result<PayoffMatrix> {
        PayoffMatrix::new(self.sucker, self.punishment, self.reward, self.temptation)
    }
}

/// Look up a roster strategy by name (case-insensitive).
pub(crate) fn find_strategy<'a>(
    roster: &'a [StrategySpec],
    name: &str,
) -> Result<&'a StrategySpec> {
    roster
        .iter()
        .find(|spec| spec.name().eq_ignore_ascii_case(name))
        .ok_or_else(|| {
            let available = roster
                .iter()
                .map(StrategySpec::name)
                .collect::<Vec<_>>()
                .join(", ");
            anyhow::anyhow!("Unknown strategy '{name}'. Available: {available}")
        })
}
