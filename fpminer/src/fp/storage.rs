use super::catalog::ItemId;

/// Borrowed view of one frequent itemset record.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FrequentItemset<'a> {
    /// Pattern in the order the miner grew it.
    pub items: &'a [ItemId],
    pub support: u64,
}

impl FrequentItemset<'_> {
    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Items sorted by handle, for order-insensitive comparison.
    pub fn sorted_items(&self) -> Vec<ItemId> {
        let mut items = self.items.to_vec();
        items.sort_unstable();
        items
    }
}

/// Memory-efficient itemset storage using flat arrays, in emission order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FrequentItemsets {
    items: Vec<ItemId>,
    offsets: Vec<(usize, usize)>,
    supports: Vec<u64>,
}

impl FrequentItemsets {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(estimated_items: usize, estimated_itemsets: usize) -> Self {
        Self {
            items: Vec::with_capacity(estimated_items),
            offsets: Vec::with_capacity(estimated_itemsets),
            supports: Vec::with_capacity(estimated_itemsets),
        }
    }

    pub fn push(&mut self, items: &[ItemId], support: u64) -> usize {
        let start_idx = self.items.len();
        self.items.extend_from_slice(items);
        self.offsets.push((start_idx, items.len()));
        self.supports.push(support);
        self.offsets.len() - 1
    }

    pub fn get(&self, idx: usize) -> FrequentItemset<'_> {
        let (start, length) = self.offsets[idx];
        FrequentItemset {
            items: &self.items[start..start + length],
            support: self.supports[idx],
        }
    }

    pub fn len(&self) -> usize {
        self.offsets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.offsets.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = FrequentItemset<'_>> {
        (0..self.len()).map(move |idx| self.get(idx))
    }

    /// Records holding exactly `size` items.
    pub fn by_size(&self, size: usize) -> impl Iterator<Item = FrequentItemset<'_>> {
        self.iter().filter(move |itemset| itemset.len() == size)
    }

    pub fn max_size(&self) -> usize {
        self.offsets.iter().map(|&(_, len)| len).max().unwrap_or(0)
    }

    /// Support of `itemset` if it was emitted, ignoring item order.
    pub fn support_of(&self, itemset: &[ItemId]) -> Option<u64> {
        let mut wanted = itemset.to_vec();
        wanted.sort_unstable();
        self.iter()
            .find(|candidate| candidate.len() == wanted.len() && candidate.sorted_items() == wanted)
            .map(|candidate| candidate.support)
    }
}
