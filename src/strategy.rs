//! Stochastic reactive strategies for the iterated dilemma.
//!
//! A strategy is a first-move cooperation probability plus a 2x2 table of
//! conditional cooperation probabilities indexed by the previous joint
//! actions (own move first, then the opponent's). Strategies are immutable
//! value objects: built once, reused across every match of a tournament.

use rand::{Rng, distr::StandardUniform, rngs::StdRng};
use serde::{Deserialize, Serialize};

use crate::{
    game::{Action, PayoffMatrix},
    types::Probability,
    zd,
};

/// Conditional cooperation table indexed by `(own last action, opponent last action)`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ConditionalMatrix([[Probability; 2]; 2]);

impl ConditionalMatrix {
    /// Validate a raw 2x2 probability table.
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::ProbabilityOutOfRange`] naming the offending
    /// cell if any entry lies outside [0, 1].
    pub fn new(table: [[f64; 2]; 2]) -> Result<Self, crate::Error> {
        const ACTIONS: [Action; 2] = [Action::Cooperate, Action::Defect];

        let mut cells = [[Probability::from_raw(0.0); 2]; 2];
        for own in ACTIONS {
            for theirs in ACTIONS {
                let value = table[own.index()][theirs.index()];
                cells[own.index()][theirs.index()] = Probability::for_quantity(
                    value,
                    &format!("conditional cooperation probability after ({own}, {theirs})"),
                )?;
            }
        }
        Ok(ConditionalMatrix(cells))
    }

    /// Cooperation probability after the given previous joint actions.
    pub fn probability(&self, own_last: Action, their_last: Action) -> Probability {
        self.0[own_last.index()][their_last.index()]
    }
}

/// Immutable description of one reactive strategy.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StrategySpec {
    name: String,
    first_move: Probability,
    conditional: ConditionalMatrix,
}

impl StrategySpec {
    /// Create a strategy from raw probabilities, validating all of them.
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::ProbabilityOutOfRange`] if the first-move
    /// probability or any conditional entry lies outside [0, 1].
    pub fn new(
        name: impl Into<String>,
        first_move: f64,
        conditional: [[f64; 2]; 2],
    ) -> Result<Self, crate::Error> {
        Ok(StrategySpec {
            name: name.into(),
            first_move: Probability::for_quantity(
                first_move,
                "first-move cooperation probability",
            )?,
            conditional: ConditionalMatrix::new(conditional)?,
        })
    }

    /// Display name used in result tables.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Cooperation probability for the opening round.
    ///
    /// The opening round always uses this value directly; the conditional
    /// table only applies once a previous joint state exists.
    pub fn first_move(&self) -> Probability {
        self.first_move
    }

    /// The conditional cooperation table.
    pub fn conditional(&self) -> &ConditionalMatrix {
        &self.conditional
    }

    /// Cooperation probability after the given previous joint actions.
    pub fn cooperate_after(&self, own_last: Action, their_last: Action) -> Probability {
        self.conditional.probability(own_last, their_last)
    }

    /// Build from known-good constant probabilities.
    fn literal(name: &str, first_move: f64, table: [[f64; 2]; 2]) -> Self {
        StrategySpec {
            name: name.to_string(),
            first_move: Probability::from_raw(first_move),
            conditional: ConditionalMatrix([
                [
                    Probability::from_raw(table[0][0]),
                    Probability::from_raw(table[0][1]),
                ],
                [
                    Probability::from_raw(table[1][0]),
                    Probability::from_raw(table[1][1]),
                ],
            ]),
        }
    }

    /// Cooperates unconditionally.
    pub fn always_cooperate() -> Self {
        Self::literal("Always Cooperate", 1.0, [[1.0, 1.0], [1.0, 1.0]])
    }

    /// Defects unconditionally.
    pub fn always_defect() -> Self {
        Self::literal("Always Defect", 0.0, [[0.0, 0.0], [0.0, 0.0]])
    }

    /// Flips a fair coin every round, including the first.
    pub fn random() -> Self {
        Self::literal("Random", 0.5, [[0.5, 0.5], [0.5, 0.5]])
    }

    /// Alternates between cooperation and defection regardless of the opponent.
    pub fn alternator() -> Self {
        Self::literal("Alternator", 1.0, [[0.0, 0.0], [1.0, 1.0]])
    }

    /// Repeats the opponent's previous move, opening with cooperation.
    pub fn tit_for_tat() -> Self {
        Self::literal("Tit for Tat", 1.0, [[1.0, 0.0], [1.0, 0.0]])
    }

    /// Cooperates until the first defection, then defects forever.
    pub fn grim_trigger() -> Self {
        Self::literal("Grim Trigger", 1.0, [[1.0, 0.0], [0.0, 0.0]])
    }

    /// Tit for Tat that forgives a defection one time in ten.
    pub fn generous_tit_for_tat() -> Self {
        Self::literal("Generous Tit for Tat", 1.0, [[1.0, 0.1], [1.0, 0.1]])
    }

    /// Mostly cooperative mixed reactor that sours after bad rounds.
    pub fn cautious() -> Self {
        Self::literal("Cautious", 1.0, [[0.99, 0.5], [0.9, 0.1]])
    }

    /// Cooperates exactly when the opponent defected last round.
    pub fn contrarian() -> Self {
        Self::literal("Contrarian", 1.0, [[0.0, 1.0], [0.0, 1.0]])
    }

    /// Hand-tuned mixed reactor biased toward echoing mutual cooperation.
    pub fn inspired() -> Self {
        Self::literal("Inspired", 1.0, [[0.9, 0.1], [0.1, 0.2]])
    }

    /// Draw a conditional table once from `rng` and freeze it.
    ///
    /// The drawn table is reused for every subsequent match: the strategy is
    /// random once per construction, not once per round or per match.
    /// Constructing again with a different stream yields a different table.
    pub fn scrambled(rng: &mut StdRng) -> Self {
        let mut table = [[Probability::from_raw(0.0); 2]; 2];
        for row in &mut table {
            for cell in row.iter_mut() {
                let ticket: f64 = rng.sample(StandardUniform);
                *cell = Probability::from_raw(ticket);
            }
        }
        StrategySpec {
            name: "Scrambler".to_string(),
            first_move: Probability::from_raw(1.0),
            conditional: ConditionalMatrix(table),
        }
    }
}

/// Roster setting for the equalizer entry: pins the opponent's mean payoff
/// at 2.0 under the standard constants.
pub const EQUALIZER_P1: f64 = 0.9;
pub const EQUALIZER_P4: f64 = 0.1;

/// Roster setting for the extortionate entry.
pub const EXTORTION_FACTOR: f64 = 100.0;

/// The reference roster of eleven strategies, in its historical order:
/// the opponent-independent strategies first, then the deterministic
/// reactors, the mixed reactors, and finally the two Zero-Determinant
/// derivations.
///
/// The scrambler's conditional table is drawn from `rng` once, here.
///
/// # Errors
///
/// Returns an error if either Zero-Determinant derivation is infeasible
/// for `payoffs`.
pub fn reference_roster(
    payoffs: &PayoffMatrix,
    rng: &mut StdRng,
) -> crate::Result<Vec<StrategySpec>> {
    Ok(vec![
        StrategySpec::always_cooperate(),
        StrategySpec::always_defect(),
        StrategySpec::random(),
        StrategySpec::alternator(),
        StrategySpec::tit_for_tat(),
        StrategySpec::grim_trigger(),
        StrategySpec::generous_tit_for_tat(),
        StrategySpec::cautious(),
        StrategySpec::scrambled(rng),
        zd::equalizer(payoffs, EQUALIZER_P1, EQUALIZER_P4)?,
        zd::extortionate(payoffs, EXTORTION_FACTOR)?,
    ])
}

#[cfg(test)]
mod tests {
    use rand::SeedableRng;

    use super::*;

    #[test]
    fn test_spec_validation() {
        assert!(StrategySpec::new("ok", 0.5, [[0.0, 1.0], [0.3, 0.7]]).is_ok());
        assert!(matches!(
            StrategySpec::new("bad first", 1.5, [[0.0, 1.0], [0.3, 0.7]]),
            Err(crate::Error::ProbabilityOutOfRange { .. })
        ));

        let err = StrategySpec::new("bad cell", 1.0, [[0.0, 1.0], [-0.2, 0.7]]).unwrap_err();
        assert!(err.to_string().contains("(D, C)"));
    }

    #[test]
    fn test_conditional_lookup() {
        let spec = StrategySpec::tit_for_tat();
        assert_eq!(
            spec.cooperate_after(Action::Defect, Action::Cooperate)
                .value(),
            1.0
        );
        assert_eq!(
            spec.cooperate_after(Action::Cooperate, Action::Defect)
                .value(),
            0.0
        );
    }

    #[test]
    fn test_contrarian_mirrors_tit_for_tat() {
        let spec = StrategySpec::contrarian();
        for own in [Action::Cooperate, Action::Defect] {
            assert_eq!(spec.cooperate_after(own, Action::Cooperate).value(), 0.0);
            assert_eq!(spec.cooperate_after(own, Action::Defect).value(), 1.0);
        }
    }

    #[test]
    fn test_scrambled_is_frozen_per_construction() {
        let mut rng = StdRng::seed_from_u64(11);
        let first = StrategySpec::scrambled(&mut rng);

        let mut other_rng = StdRng::seed_from_u64(12);
        let second = StrategySpec::scrambled(&mut other_rng);
        assert_ne!(first.conditional(), second.conditional());

        // Identical streams reproduce the identical frozen table.
        let mut replay = StdRng::seed_from_u64(11);
        assert_eq!(StrategySpec::scrambled(&mut replay), first);
    }

    #[test]
    fn test_reference_roster_order() {
        let payoffs = PayoffMatrix::standard();
        let mut rng = StdRng::seed_from_u64(0);
        let roster = reference_roster(&payoffs, &mut rng).unwrap();
        let names: Vec<_> = roster.iter().map(StrategySpec::name).collect();
        assert_eq!(
            names,
            [
                "Always Cooperate",
                "Always Defect",
                "Random",
                "Alternator",
                "Tit for Tat",
                "Grim Trigger",
                "Generous Tit for Tat",
                "Cautious",
                "Scrambler",
                "Equalizer (ZD)",
                "Extortioner (ZD)",
            ]
        );
    }
}
