//! Iterated match engine.
//!
//! Runs one repeated match between two strategies, accumulating payoffs
//! round by round. Both players decide simultaneously from the same
//! previous joint state; all randomness flows through the engine's own
//! seedable stream.

use rand::{Rng, SeedableRng, distr::StandardUniform, rngs::StdRng};
use serde::{Deserialize, Serialize};

use crate::{
    error::{Error, Result},
    game::{Action, PayoffMatrix},
    strategy::StrategySpec,
};

/// Mean payoffs of one completed match, truncated to two decimals.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MatchOutcome {
    pub mean_a: f64,
    pub mean_b: f64,
}

/// Running mean payoffs recorded after every round of a traced match.
///
/// One `(mean_a, mean_b)` entry per round, starting with the opening
/// round. Feeds chart-style reporting through the export module.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MatchTrace {
    pub running_means: Vec<(f64, f64)>,
}

/// Plays iterated matches between pairs of strategies.
///
/// The engine owns the payoff constants and the random stream. Separate
/// engines share no state, so independent matches can run off independent
/// seeds without interference.
pub struct MatchEngine {
    payoffs: PayoffMatrix,
    rng: StdRng,
}

impl MatchEngine {
    /// Create an engine with a randomly seeded stream.
    pub fn new(payoffs: PayoffMatrix) -> Self {
        Self::with_seed(payoffs, rand::random::<u64>())
    }

    /// Create an engine with a deterministic seed.
    pub fn with_seed(payoffs: PayoffMatrix, seed: u64) -> Self {
        MatchEngine {
            payoffs,
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// Set or reset the engine's RNG seed.
    pub fn reseed(&mut self, seed: Option<u64>) {
        let rng = match seed {
            Some(value) => StdRng::seed_from_u64(value),
            None => StdRng::seed_from_u64(rand::random::<u64>()),
        };
        self.rng = rng;
    }

    /// The payoff constants this engine plays under.
    pub fn payoffs(&self) -> &PayoffMatrix {
        &self.payoffs
    }

    /// Play one match of `rounds` rounds and return the truncated mean payoffs.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidRoundCount`] if `rounds` is zero.
    pub fn play(&mut self, rounds: u32, a: &StrategySpec, b: &StrategySpec) -> Result<MatchOutcome> {
        let (total_a, total_b) = self.accumulate(rounds, a, b, None)?;
        Ok(MatchOutcome {
            mean_a: truncate_mean(total_a / f64::from(rounds)),
            mean_b: truncate_mean(total_b / f64::from(rounds)),
        })
    }

    /// Play one match while recording the running mean payoffs after each round.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidRoundCount`] if `rounds` is zero.
    pub fn play_traced(
        &mut self,
        rounds: u32,
        a: &StrategySpec,
        b: &StrategySpec,
    ) -> Result<(MatchOutcome, MatchTrace)> {
        let mut trace = MatchTrace::default();
        let (total_a, total_b) = self.accumulate(rounds, a, b, Some(&mut trace))?;
        let outcome = MatchOutcome {
            mean_a: truncate_mean(total_a / f64::from(rounds)),
            mean_b: truncate_mean(total_b / f64::from(rounds)),
        };
        Ok((outcome, trace))
    }

    /// Play one match and return the raw (untruncated) mean payoffs.
    ///
    /// Trial averaging in the tournament runner happens on raw means so
    /// truncation is applied once, at reporting time.
    pub(crate) fn play_raw(
        &mut self,
        rounds: u32,
        a: &StrategySpec,
        b: &StrategySpec,
    ) -> Result<(f64, f64)> {
        let (total_a, total_b) = self.accumulate(rounds, a, b, None)?;
        Ok((total_a / f64::from(rounds), total_b / f64::from(rounds)))
    }

    fn accumulate(
        &mut self,
        rounds: u32,
        a: &StrategySpec,
        b: &StrategySpec,
        mut trace: Option<&mut MatchTrace>,
    ) -> Result<(f64, f64)> {
        if rounds == 0 {
            return Err(Error::InvalidRoundCount);
        }

        // Opening round: first-move probabilities, not the conditional table.
        let mut action_a = self.draw(a.first_move().value());
        let mut action_b = self.draw(b.first_move().value());

        let (mut total_a, mut total_b) = self.payoffs.payoff(action_a, action_b);
        if let Some(trace) = trace.as_deref_mut() {
            trace.running_means.push((total_a, total_b));
        }

        for round in 1..rounds {
            // Both players react to the same previous joint state.
            let next_a = self.draw(a.cooperate_after(action_a, action_b).value());
            let next_b = self.draw(b.cooperate_after(action_b, action_a).value());
            (action_a, action_b) = (next_a, next_b);

            let (gain_a, gain_b) = self.payoffs.payoff(action_a, action_b);
            total_a += gain_a;
            total_b += gain_b;

            if let Some(trace) = trace.as_deref_mut() {
                let played = f64::from(round + 1);
                trace
                    .running_means
                    .push((total_a / played, total_b / played));
            }
        }

        Ok((total_a, total_b))
    }

    fn draw(&mut self, cooperate: f64) -> Action {
        // Ticket in [0, 1): probability 1 always cooperates, 0 never does.
        let ticket: f64 = self.rng.sample(StandardUniform);
        if ticket < cooperate {
            Action::Cooperate
        } else {
            Action::Defect
        }
    }
}

/// Truncate a mean payoff to two decimals, flooring as the historical
/// reports did.
pub fn truncate_mean(value: f64) -> f64 {
    (value * 100.0).floor() / 100.0
}
