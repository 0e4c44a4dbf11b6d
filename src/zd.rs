//! Closed-form Zero-Determinant strategy derivations.
//!
//! Press & Dyson showed that a reactive strategy can force a linear
//! relation between the two players' long-run mean payoffs regardless of
//! the opponent's behavior. Two families are derived here: equalizers,
//! which pin the opponent's mean payoff to a fixed value, and extortionate
//! strategies, which pin the ratio of the two payoff surpluses over the
//! punishment payoff to a factor chi.
//!
//! Derivations are pure functions of the payoff constants and the family's
//! free parameters. A derived conditional probability outside [0, 1] means
//! the chosen parameters admit no such strategy; that is surfaced as an
//! error, never clamped.

use crate::{
    error::{Error, Result},
    game::PayoffMatrix,
    strategy::StrategySpec,
    types::Probability,
};

/// Derive an equalizer strategy from the two free corner probabilities.
///
/// `p1` and `p4` are the conditional cooperation probabilities after
/// mutual cooperation and mutual defection; the two remaining entries
/// follow from the zero-determinant constraint:
///
/// ```text
/// p2 = (p1(T-P) - (1+p4)(T-R)) / (R-P)
/// p3 = ((1-p1)(P-S) + p4(R-S)) / (R-P)
/// ```
///
/// The derived strategy opens with cooperation.
///
/// # Errors
///
/// Returns [`Error::ProbabilityOutOfRange`] if `p1` or `p4` lies outside
/// [0, 1], and [`Error::InfeasibleZdParameters`] if a derived entry does.
pub fn equalizer(payoffs: &PayoffMatrix, p1: f64, p4: f64) -> Result<StrategySpec> {
    Probability::for_quantity(p1, "equalizer parameter p1")?;
    Probability::for_quantity(p4, "equalizer parameter p4")?;

    let (s, p, r, t) = constants(payoffs);
    let p2 = (p1 * (t - p) - (1.0 + p4) * (t - r)) / (r - p);
    let p3 = ((1.0 - p1) * (p - s) + p4 * (r - s)) / (r - p);
    check_feasible("equalizer", "p2", p2)?;
    check_feasible("equalizer", "p3", p3)?;

    StrategySpec::new("Equalizer (ZD)", 1.0, [[p1, p2], [p3, p4]])
}

/// Long-run mean payoff an equalizer pins its opponent to:
/// `((1-p1)P + p4 R) / (1 - p1 + p4)`.
///
/// Only meaningful for parameter choices with `p1 < 1` or `p4 > 0`; at
/// `p1 = 1, p4 = 0` the equalizer constraint degenerates and no payoff is
/// pinned.
pub fn equalizer_target(payoffs: &PayoffMatrix, p1: f64, p4: f64) -> f64 {
    let (_, p, r, _) = constants(payoffs);
    ((1.0 - p1) * p + p4 * r) / (1.0 - p1 + p4)
}

/// Derive an extortionate strategy with extortion factor `chi`.
///
/// Over a long match the derived strategy forces
/// `(own mean - P) = chi * (opponent mean - P)` whatever the opponent
/// plays:
///
/// ```text
/// phi = (P-S) / (2((P-S) + chi(T-P)))
/// q1 = 1 - phi(chi-1)(R-P)/(P-S)
/// q2 = 1 - phi(1 + chi(T-P)/(P-S))
/// q3 = phi(chi + (T-P)/(P-S))
/// q4 = 0
/// ```
///
/// The derived strategy opens with cooperation.
///
/// # Errors
///
/// Returns [`Error::InvalidExtortionFactor`] unless `chi > 1`, and
/// [`Error::InfeasibleZdParameters`] if a derived entry falls outside
/// [0, 1].
pub fn extortionate(payoffs: &PayoffMatrix, chi: f64) -> Result<StrategySpec> {
    if !(chi > 1.0) {
        return Err(Error::InvalidExtortionFactor { chi });
    }

    let (s, p, r, t) = constants(payoffs);
    let phi = 0.5 * (p - s) / ((p - s) + chi * (t - p));
    let q1 = 1.0 - phi * (chi - 1.0) * (r - p) / (p - s);
    let q2 = 1.0 - phi * (1.0 + chi * (t - p) / (p - s));
    let q3 = phi * (chi + (t - p) / (p - s));
    let q4 = 0.0;
    check_feasible("extortionate", "q1", q1)?;
    check_feasible("extortionate", "q2", q2)?;
    check_feasible("extortionate", "q3", q3)?;

    StrategySpec::new("Extortioner (ZD)", 1.0, [[q1, q2], [q3, q4]])
}

fn constants(payoffs: &PayoffMatrix) -> (f64, f64, f64, f64) {
    (
        payoffs.sucker(),
        payoffs.punishment(),
        payoffs.reward(),
        payoffs.temptation(),
    )
}

fn check_feasible(family: &str, parameter: &str, value: f64) -> Result<()> {
    if (0.0..=1.0).contains(&value) {
        Ok(())
    } else {
        Err(Error::InfeasibleZdParameters {
            family: family.to_string(),
            parameter: parameter.to_string(),
            value,
        })
    }
}
