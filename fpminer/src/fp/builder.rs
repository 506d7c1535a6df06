use super::catalog::ItemId;
use super::transaction::Transaction;
use super::tree::{FPTree, NodeIndex};
use std::collections::HashMap;
use tracing::debug;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeaderEntry {
    pub item: ItemId,
    /// Sum of the counts of every node in `nodes`.
    pub support: u64,
    pub nodes: Vec<NodeIndex>,
}

/// Qualifying items of one tree, in descending support order.
#[derive(Debug, Clone, Default)]
pub struct HeaderTable {
    entries: Vec<HeaderEntry>,
    positions: HashMap<ItemId, usize>,
}

impl HeaderTable {
    /// Empty entries for `ranked` items; position in the slice is the rank.
    pub fn ranked(ranked: &[ItemId]) -> Self {
        let mut table = Self::default();
        for &item in ranked {
            table.push_entry(item);
        }
        table
    }

    fn push_entry(&mut self, item: ItemId) -> usize {
        let position = self.entries.len();
        self.entries.push(HeaderEntry {
            item,
            support: 0,
            nodes: Vec::new(),
        });
        self.positions.insert(item, position);
        position
    }

    pub(crate) fn record_node(&mut self, item: ItemId, node: NodeIndex) {
        let position = match self.positions.get(&item) {
            Some(&position) => position,
            None => self.push_entry(item),
        };
        self.entries[position].nodes.push(node);
    }

    pub(crate) fn add_support(&mut self, item: ItemId, weight: u64) {
        if let Some(&position) = self.positions.get(&item) {
            self.entries[position].support += weight;
        }
    }

    pub fn get(&self, item: ItemId) -> Option<&HeaderEntry> {
        self.positions.get(&item).map(|&position| &self.entries[position])
    }

    pub fn entries(&self) -> &[HeaderEntry] {
        &self.entries
    }

    pub fn iter(&self) -> impl Iterator<Item = &HeaderEntry> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Item to rank for the tree currently being built. Rank 0 is the most
/// frequent item.
#[derive(Debug, Clone, Default)]
pub struct RankMap {
    ranks: HashMap<ItemId, usize>,
}

impl RankMap {
    pub fn from_ordered(items: &[ItemId]) -> Self {
        Self {
            ranks: items
                .iter()
                .enumerate()
                .map(|(rank, &item)| (item, rank))
                .collect(),
        }
    }

    pub fn rank(&self, item: ItemId) -> Option<usize> {
        self.ranks.get(&item).copied()
    }

    /// Drops unranked items and orders the rest most-frequent first.
    pub fn order(&self, items: &[ItemId]) -> Vec<ItemId> {
        let mut ranked: Vec<(ItemId, usize)> = items
            .iter()
            .filter_map(|&item| self.rank(item).map(|rank| (item, rank)))
            .collect();
        ranked.sort_unstable_by_key(|&(_, rank)| rank);
        ranked.into_iter().map(|(item, _)| item).collect()
    }
}

/// Weighted support of every item, in first-seen order.
pub fn count_item_supports(transactions: &[Transaction]) -> Vec<(ItemId, u64)> {
    let mut counts: Vec<(ItemId, u64)> = Vec::new();
    let mut positions: HashMap<ItemId, usize> = HashMap::new();

    for transaction in transactions {
        for &item in &transaction.items {
            match positions.get(&item) {
                Some(&position) => counts[position].1 += transaction.weight,
                None => {
                    positions.insert(item, counts.len());
                    counts.push((item, transaction.weight));
                }
            }
        }
    }
    counts
}

/// Items reaching `min_count`, most frequent first. Equal supports keep
/// their first-seen order.
pub fn frequent_items(transactions: &[Transaction], min_count: u64) -> Vec<(ItemId, u64)> {
    let mut frequent: Vec<(ItemId, u64)> = count_item_supports(transactions)
        .into_iter()
        .filter(|&(_, count)| count >= min_count)
        .collect();

    // Stable, so ties stay in first-seen order.
    frequent.sort_by(|a, b| b.1.cmp(&a.1));
    frequent
}

/// Builds the FP-tree and header table for `transactions`.
///
/// Returns `None` when no item reaches `min_count`.
pub fn build_fp_tree(transactions: &[Transaction], min_count: u64) -> Option<FPTree> {
    let frequent = frequent_items(transactions, min_count);
    if frequent.is_empty() {
        return None;
    }

    let ordered_items: Vec<ItemId> = frequent.iter().map(|&(item, _)| item).collect();
    let ranks = RankMap::from_ordered(&ordered_items);
    let mut fp_tree = FPTree::with_header(HeaderTable::ranked(&ordered_items));

    for transaction in transactions {
        let tx_items = ranks.order(&transaction.items);
        if !tx_items.is_empty() {
            fp_tree.insert_transaction(&tx_items, transaction.weight);
        }
    }

    debug_assert!(frequent
        .iter()
        .all(|&(item, count)| fp_tree.header.get(item).map(|e| e.support) == Some(count)));

    debug!(
        transactions = transactions.len(),
        items = fp_tree.header.len(),
        nodes = fp_tree.len(),
        min_count,
        "built fp-tree"
    );

    Some(fp_tree)
}
