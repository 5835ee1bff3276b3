use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Knobs of the exclusion-zone estimator.
///
/// `epsilon` is the approximation slack and `delta` the failure probability
/// of the stopping rule; together they fix how many consecutive trials
/// without growth end the search (see [`ZoneParams::patience`]).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ZoneParams {
    pub epsilon: f64,
    pub delta: f64,
    /// Probability that a node is drawn into a trial's candidate subset.
    pub inclusion_probability: f64,
    /// Draw a progress bar while the pairwise loss graph is built.
    #[serde(default)]
    pub show_progress: bool,
}

impl ZoneParams {
    pub fn new(epsilon: f64, delta: f64) -> Self {
        Self {
            epsilon,
            delta,
            ..Self::default()
        }
    }

    pub fn with_inclusion_probability(mut self, probability: f64) -> Self {
        self.inclusion_probability = probability;
        self
    }

    pub fn with_progress(mut self, show_progress: bool) -> Self {
        self.show_progress = show_progress;
        self
    }

    /// Checks `0 < epsilon < 1`, `0 < delta < 1` and `0 < inclusion_probability <= 1`.
    pub fn validate(&self) -> Result<()> {
        check_open_unit("epsilon", self.epsilon)?;
        check_open_unit("delta", self.delta)?;
        if !(self.inclusion_probability > 0.0 && self.inclusion_probability <= 1.0) {
            return Err(Error::InvalidParameter {
                name: "inclusion_probability",
                value: self.inclusion_probability,
                expected: "a probability in (0, 1]",
            });
        }
        Ok(())
    }

    /// Consecutive non-growing trials required before stopping:
    /// `ceil(ln(2 / delta) / (2 epsilon²)) + 1`.
    ///
    /// By Hoeffding's inequality, once that many independent trials fail to
    /// find a new winner, the chance that a fresh trial would find one is
    /// below `epsilon` except with probability `delta`.
    pub fn patience(&self) -> usize {
        let trials = (2.0 / self.delta).ln() / (2.0 * self.epsilon * self.epsilon);
        trials.ceil() as usize + 1
    }
}

impl Default for ZoneParams {
    fn default() -> Self {
        Self {
            epsilon: 0.01,
            delta: 0.01,
            inclusion_probability: 0.5,
            show_progress: false,
        }
    }
}

fn check_open_unit(name: &'static str, value: f64) -> Result<()> {
    if value > 0.0 && value < 1.0 {
        Ok(())
    } else {
        Err(Error::InvalidParameter {
            name,
            value,
            expected: "a value in (0, 1)",
        })
    }
}
