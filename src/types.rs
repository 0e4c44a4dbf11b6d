//! Newtype wrappers for improved type safety and domain modeling.

use std::fmt;

use serde::{Deserialize, Serialize};

/// A cooperation probability in [0, 1].
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize)]
pub struct Probability(f64);

impl Probability {
    /// Create a new probability, validating it lies in [0, 1].
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::ProbabilityOutOfRange`] if the value is
    /// outside [0, 1] or not finite.
    pub fn new(value: f64) -> Result<Self, crate::Error> {
        Self::for_quantity(value, "probability")
    }

    /// Validate a probability, naming the offending quantity in the error.
    pub(crate) fn for_quantity(value: f64, quantity: &str) -> Result<Self, crate::Error> {
        if (0.0..=1.0).contains(&value) {
            Ok(Probability(value))
        } else {
            Err(crate::Error::ProbabilityOutOfRange {
                quantity: quantity.to_string(),
                value,
            })
        }
    }

    /// Create a probability from a raw value without validation.
    ///
    /// # Safety
    /// This is const and doesn't validate. Only use with known-good constant values.
    pub const fn from_raw(value: f64) -> Self {
        Probability(value)
    }

    /// Get the inner value.
    pub fn value(&self) -> f64 {
        self.0
    }
}

impl From<Probability> for f64 {
    fn from(probability: Probability) -> Self {
        probability.0
    }
}

impl fmt::Display for Probability {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.4}", self.0)
    }
}
