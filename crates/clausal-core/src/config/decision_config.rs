use serde::{Deserialize, Serialize};

use super::defaults;
use crate::errors::{ClausalError, ClausalResult};

/// Decision synthesizer configuration.
///
/// Both threshold comparisons are closed: a score equal to
/// `approve_threshold` approves, a score equal to `reject_threshold`
/// rejects.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct DecisionConfig {
    /// Aggregate score at or above which the status is Approved.
    pub approve_threshold: f64,
    /// Aggregate score at or below which the status is Rejected.
    pub reject_threshold: f64,
    /// Margin beyond the crossed threshold required for High confidence.
    pub high_confidence_margin: f64,
}

impl DecisionConfig {
    pub fn validate(&self) -> ClausalResult<()> {
        if self.reject_threshold >= self.approve_threshold {
            return Err(ClausalError::Config {
                reason: format!(
                    "decision.reject_threshold ({}) must be below approve_threshold ({})",
                    self.reject_threshold, self.approve_threshold
                ),
            });
        }
        if self.high_confidence_margin < 0.0 {
            return Err(ClausalError::Config {
                reason: "decision.high_confidence_margin must be non-negative".to_string(),
            });
        }
        Ok(())
    }
}

impl Default for DecisionConfig {
    fn default() -> Self {
        Self {
            approve_threshold: defaults::DEFAULT_APPROVE_THRESHOLD,
            reject_threshold: defaults::DEFAULT_REJECT_THRESHOLD,
            high_confidence_margin: defaults::DEFAULT_HIGH_CONFIDENCE_MARGIN,
        }
    }
}
