use super::builder::build_fp_tree;
use super::catalog::ItemId;
use super::storage::FrequentItemsets;
use super::transaction::{Transaction, TransactionSet};
use super::tree::FPTree;
use crate::config::{validate_support_count, validate_support_fraction};
use crate::error::MiningResult;
use tracing::{info, trace};

/// Counters collected over one mining run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MiningStats {
    /// Trees built, the top-level tree included.
    pub trees_built: usize,
    /// Deepest recursion frame reached; the top-level tree is depth 1.
    pub max_depth: usize,
}

/// Mines every itemset of `set` whose support reaches `min_support_count`.
pub fn fp_growth(set: &TransactionSet, min_support_count: u64) -> MiningResult<FrequentItemsets> {
    fp_growth_with_stats(&set.transactions, min_support_count).map(|(itemsets, _)| itemsets)
}

/// Like [`fp_growth`] with the threshold given as a fraction of `set.len()`,
/// rounded down.
pub fn fp_growth_fraction(set: &TransactionSet, min_support: f64) -> MiningResult<FrequentItemsets> {
    validate_support_fraction(min_support)?;
    let min_support_count = (min_support * set.len() as f64).floor() as u64;
    fp_growth(set, min_support_count)
}

pub fn fp_growth_with_stats(
    transactions: &[Transaction],
    min_support_count: u64,
) -> MiningResult<(FrequentItemsets, MiningStats)> {
    validate_support_count(min_support_count)?;

    let mut result = FrequentItemsets::new();
    let mut stats = MiningStats::default();

    if let Some(fp_tree) = build_fp_tree(transactions, min_support_count) {
        stats.trees_built += 1;
        mine_tree(&fp_tree, min_support_count, &[], 1, &mut result, &mut stats);
    }

    info!(
        transactions = transactions.len(),
        min_support_count,
        itemsets = result.len(),
        trees = stats.trees_built,
        max_depth = stats.max_depth,
        "fp-growth finished"
    );
    Ok((result, stats))
}

/// Emits `prefix + item` for every header entry of `fp_tree`, then recurses
/// into the conditional tree of that item.
pub fn mine_tree(
    fp_tree: &FPTree,
    min_count: u64,
    prefix: &[ItemId],
    depth: usize,
    result: &mut FrequentItemsets,
    stats: &mut MiningStats,
) {
    stats.max_depth = stats.max_depth.max(depth);
    trace!(prefix_len = prefix.len(), depth, items = fp_tree.header.len(), "mining frame");

    for entry in fp_tree.header.iter() {
        let mut new_pattern = Vec::with_capacity(prefix.len() + 1);
        new_pattern.extend_from_slice(prefix);
        new_pattern.push(entry.item);
        result.push(&new_pattern, entry.support);

        let pattern_base = fp_tree.conditional_pattern_base(entry.item);
        if pattern_base.is_empty() {
            continue;
        }

        if let Some(conditional_tree) = build_fp_tree(&pattern_base, min_count) {
            stats.trees_built += 1;
            if !conditional_tree.header.is_empty() {
                mine_tree(&conditional_tree, min_count, &new_pattern, depth + 1, result, stats);
            }
        }
    }
}
