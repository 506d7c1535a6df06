use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{LoadError, LoadResult, MiningError, MiningResult};

/// Thresholds for one mining run.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MiningConfig {
    /// Fraction of the transaction count an itemset must reach.
    pub min_support: f64,
    /// Minimum confidence for an emitted rule.
    pub min_confidence: f64,
}

impl Default for MiningConfig {
    fn default() -> Self {
        Self {
            min_support: 0.7,
            min_confidence: 0.9,
        }
    }
}

impl MiningConfig {
    pub fn new(min_support: f64, min_confidence: f64) -> Self {
        Self {
            min_support,
            min_confidence,
        }
    }

    pub fn with_min_support(mut self, min_support: f64) -> Self {
        self.min_support = min_support;
        self
    }

    pub fn with_min_confidence(mut self, min_confidence: f64) -> Self {
        self.min_confidence = min_confidence;
        self
    }

    pub fn from_json_file(path: impl AsRef<Path>) -> LoadResult<Self> {
        let path = path.as_ref();
        let raw = std::fs::read_to_string(path).map_err(|e| LoadError::io(path, e))?;
        Ok(serde_json::from_str(&raw)?)
    }

    /// Support fraction scaled to `num_transactions`, rounded down.
    pub fn min_support_count(&self, num_transactions: usize) -> u64 {
        (self.min_support * num_transactions as f64).floor() as u64
    }

    pub fn validate(&self) -> MiningResult<()> {
        validate_support_fraction(self.min_support)?;
        validate_confidence(self.min_confidence)
    }
}

pub(crate) fn validate_support_fraction(fraction: f64) -> MiningResult<()> {
    if fraction.is_finite() && fraction > 0.0 && fraction <= 1.0 {
        Ok(())
    } else {
        Err(MiningError::InvalidSupportFraction { fraction })
    }
}

pub(crate) fn validate_support_count(count: u64) -> MiningResult<()> {
    if count == 0 {
        return Err(MiningError::InvalidSupport { count });
    }
    Ok(())
}

pub(crate) fn validate_confidence(confidence: f64) -> MiningResult<()> {
    // NaN fails both comparisons.
    if confidence > 0.0 && confidence <= 1.0 {
        Ok(())
    } else {
        Err(MiningError::InvalidConfidence { confidence })
    }
}
