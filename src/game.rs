//! Payoff model for the two-player dilemma.

use std::fmt;

use serde::{Deserialize, Serialize};

/// One player's action in a single round.
///
/// Actions double as table indices (0 = cooperate, 1 = defect) into payoff
/// and conditional-probability tables.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Action {
    Cooperate,
    Defect,
}

impl Action {
    /// Table index of this action.
    pub fn index(self) -> usize {
        match self {
            Action::Cooperate => 0,
            Action::Defect => 1,
        }
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Action::Cooperate => write!(f, "C"),
            Action::Defect => write!(f, "D"),
        }
    }
}

/// Per-round payoff constants for the dilemma.
///
/// Parameterized by the four classical constants: sucker (S), punishment
/// (P), reward (R), and temptation (T). Construction enforces the dilemma
/// ordering `T > R > P > S` and the condition `2R > T + S` that makes
/// mutual cooperation beat an alternating exploit-and-be-exploited cycle.
/// Immutable once built; shared read-only by every match.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PayoffMatrix {
    sucker: f64,
    punishment: f64,
    reward: f64,
    temptation: f64,
}

impl PayoffMatrix {
    /// Create a payoff matrix from the four constants `(S, P, R, T)`.
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::InvalidPayoffOrdering`] unless
    /// `T > R > P > S`, and [`crate::Error::UnrewardingCooperation`] unless
    /// `2R > T + S`.
    pub fn new(
        sucker: f64,
        punishment: f64,
        reward: f64,
        temptation: f64,
    ) -> Result<Self, crate::Error> {
        if !(temptation > reward && reward > punishment && punishment > sucker) {
            return Err(crate::Error::InvalidPayoffOrdering {
                sucker,
                punishment,
                reward,
                temptation,
            });
        }
        if 2.0 * reward <= temptation + sucker {
            return Err(crate::Error::UnrewardingCooperation {
                sucker,
                reward,
                temptation,
            });
        }
        Ok(PayoffMatrix {
            sucker,
            punishment,
            reward,
            temptation,
        })
    }

    /// The reference constants `(0, 1, 3, 5)`.
    pub fn standard() -> Self {
        PayoffMatrix {
            sucker: 0.0,
            punishment: 1.0,
            reward: 3.0,
            temptation: 5.0,
        }
    }

    /// Payoffs for one round, as `(payoff_a, payoff_b)`.
    pub fn payoff(&self, a: Action, b: Action) -> (f64, f64) {
        match (a, b) {
            (Action::Cooperate, Action::Cooperate) => (self.reward, self.reward),
            (Action::Cooperate, Action::Defect) => (self.sucker, self.temptation),
            (Action::Defect, Action::Cooperate) => (self.temptation, self.sucker),
            (Action::Defect, Action::Defect) => (self.punishment, self.punishment),
        }
    }

    pub fn sucker(&self) -> f64 {
        self.sucker
    }

    pub fn punishment(&self) -> f64 {
        self.punishment
    }

    pub fn reward(&self) -> f64 {
        self.reward
    }

    pub fn temptation(&self) -> f64 {
        self.temptation
    }
}
