use fractic_server_error::ServerError;
use rand::Rng;

use crate::errors::{EmptyDistribution, InvalidWeightSum, NegativeWeight};

/// Tolerance when checking that configured weights sum to 1.0.
const WEIGHT_SUM_EPSILON: f64 = 1e-9;

/// Fixed categorical distribution: a list of values with hand-specified
/// probabilities, sampled with a single uniform draw in [0, 1) mapped
/// through the cumulative weights.
///
/// Construction validates the weights explicitly (non-empty, no negative
/// entries, sum equal to 1.0 within [`WEIGHT_SUM_EPSILON`]); a silent
/// mismatch would skew the output distribution without any error.
pub(crate) struct Categorical<T> {
    /// (value, cumulative upper bound) pairs, non-empty by construction.
    entries: Vec<(T, f64)>,
}

impl<T> Categorical<T> {
    pub(crate) fn new(label: &str, weighted: Vec<(T, f64)>) -> Result<Self, ServerError> {
        if weighted.is_empty() {
            return Err(EmptyDistribution::new(label));
        }
        for (_, weight) in &weighted {
            if *weight < 0.0 {
                return Err(NegativeWeight::new(label, *weight));
            }
        }
        let sum: f64 = weighted.iter().map(|(_, weight)| weight).sum();
        if (sum - 1.0).abs() > WEIGHT_SUM_EPSILON {
            return Err(InvalidWeightSum::new(label, sum));
        }
        let mut cumulative = 0.0;
        let entries = weighted
            .into_iter()
            .map(|(value, weight)| {
                cumulative += weight;
                (value, cumulative)
            })
            .collect();
        Ok(Self { entries })
    }

    pub(crate) fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> &T {
        let draw: f64 = rng.random();
        match self.entries.iter().find(|(_, cum)| draw < *cum) {
            Some((value, _)) => value,
            // Cumulative sums can land marginally below 1.0; fall back to
            // the last entry (entries is non-empty by construction).
            None => &self.entries[self.entries.len() - 1].0,
        }
    }
}

// --
