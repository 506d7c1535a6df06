//! Frequent itemset mining with FP-Growth, plus association rules derived
//! from the mined itemsets.
//!
//! ```
//! use fpminer::fp::TransactionSet;
//! use fpminer::{mine, MiningConfig};
//!
//! let mut set = TransactionSet::default();
//! set.push_labels("T1", "item", &["X", "Y"]);
//! set.push_labels("T2", "item", &["X", "Y"]);
//! set.push_labels("T3", "item", &["X"]);
//!
//! let mined = mine(&set, &MiningConfig::new(0.6, 0.9)).unwrap();
//! assert_eq!(mined.min_support_count, 1);
//! assert_eq!(mined.itemsets.len(), 3);
//! assert_eq!(mined.rules.len(), 1);
//! ```

pub mod config;
pub mod error;
pub mod fp;
pub mod io;
pub mod report;

#[cfg(feature = "python")]
mod python;

pub use config::MiningConfig;
pub use error::{LoadError, MiningError};

use fp::{association_rules, fp_growth, FrequentItemsets, RuleSet, TransactionSet};

/// Output of a full mining run.
#[derive(Debug, Clone)]
pub struct Mined {
    pub min_support_count: u64,
    pub itemsets: FrequentItemsets,
    pub rules: RuleSet,
}

/// Validates `config`, mines frequent itemsets and derives rules from them.
pub fn mine(set: &TransactionSet, config: &MiningConfig) -> Result<Mined, MiningError> {
    config.validate()?;
    let min_support_count = config.min_support_count(set.len());
    let itemsets = fp_growth(set, min_support_count)?;
    let rules = association_rules(set, &itemsets, config.min_confidence)?;

    Ok(Mined {
        min_support_count,
        itemsets,
        rules,
    })
}
