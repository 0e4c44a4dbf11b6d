//! Roster tournaments.
//!
//! A tournament plays one strategy against an ordered roster of opponents
//! and collects a table of mean payoffs, one row per opponent in roster
//! order. Presentation of the table is left to the export module.

use serde::{Deserialize, Serialize};

use crate::{
    engine::{MatchEngine, truncate_mean},
    error::{Error, Result},
    game::PayoffMatrix,
    strategy::StrategySpec,
};

/// Configuration for a roster tournament.
///
/// # Examples
///
/// ```
/// use dilemma::TournamentConfig;
///
/// let config = TournamentConfig::new(10_000).with_trials(3).with_seed(42);
/// ```
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct TournamentConfig {
    /// Rounds per match
    pub rounds: u32,
    /// Independent repeats per pairing; raw means are averaged across
    /// repeats before the final truncation
    pub trials: u32,
    /// Random seed for reproducibility
    pub seed: Option<u64>,
}

impl TournamentConfig {
    /// Create a configuration with the given round count, one trial, and
    /// no fixed seed.
    pub fn new(rounds: u32) -> Self {
        TournamentConfig {
            rounds,
            trials: 1,
            seed: None,
        }
    }

    /// Set the number of independent repeats per pairing.
    pub fn with_trials(mut self, trials: u32) -> Self {
        self.trials = trials;
        self
    }

    /// Set the random seed for deterministic behavior.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }
}

impl Default for TournamentConfig {
    fn default() -> Self {
        Self::new(10_000)
    }
}

/// One row of a tournament table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TournamentRow {
    pub opponent: String,
    pub mean_self: f64,
    pub mean_opponent: f64,
}

/// Mean payoffs of one strategy against a roster, in roster order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TournamentTable {
    pub strategy: String,
    pub rows: Vec<TournamentRow>,
}

/// Runs one strategy against a roster of opponents.
pub struct Tournament {
    engine: MatchEngine,
    config: TournamentConfig,
}

impl Tournament {
    /// Create a tournament over the given payoff constants.
    pub fn new(payoffs: PayoffMatrix, config: TournamentConfig) -> Self {
        let engine = match config.seed {
            Some(seed) => MatchEngine::with_seed(payoffs, seed),
            None => MatchEngine::new(payoffs),
        };
        Tournament { engine, config }
    }

    /// The tournament configuration.
    pub fn config(&self) -> &TournamentConfig {
        &self.config
    }

    /// Play `strategy` against each opponent, in roster order.
    ///
    /// # Errors
    ///
    /// Fails fast on a zero trial count and propagates engine failures
    /// (zero round count).
    pub fn run(
        &mut self,
        strategy: &StrategySpec,
        opponents: &[StrategySpec],
    ) -> Result<TournamentTable> {
        if self.config.trials == 0 {
            return Err(Error::InvalidTrialCount);
        }

        let mut rows = Vec::with_capacity(opponents.len());
        for opponent in opponents {
            rows.push(self.play_pairing(strategy, opponent)?);
        }
        Ok(TournamentTable {
            strategy: strategy.name().to_string(),
            rows,
        })
    }

    fn play_pairing(
        &mut self,
        strategy: &StrategySpec,
        opponent: &StrategySpec,
    ) -> Result<TournamentRow> {
        let mut sum_self = 0.0;
        let mut sum_opponent = 0.0;
        for _ in 0..self.config.trials {
            let (mean_self, mean_opponent) =
                self.engine
                    .play_raw(self.config.rounds, strategy, opponent)?;
            sum_self += mean_self;
            sum_opponent += mean_opponent;
        }

        let trials = f64::from(self.config.trials);
        Ok(TournamentRow {
            opponent: opponent.name().to_string(),
            mean_self: truncate_mean(sum_self / trials),
            mean_opponent: truncate_mean(sum_opponent / trials),
        })
    }
}
