pub mod builder;
pub mod catalog;
pub mod mining;
pub mod rules;
pub mod storage;
pub mod transaction;
pub mod tree;


pub use builder::{build_fp_tree, HeaderEntry, HeaderTable, RankMap};
pub use catalog::{Catalog, Item, ItemId};
pub use mining::{fp_growth, fp_growth_fraction, fp_growth_with_stats, MiningStats};
pub use rules::{association_rules, Rule, RuleGenerator, RuleSet};
pub use storage::{FrequentItemset, FrequentItemsets};
pub use transaction::{Transaction, TransactionSet};
pub use tree::{FPNode, FPTree, NodeIndex};
