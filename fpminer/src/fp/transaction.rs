use ndarray::ArrayView2;

use super::catalog::{Catalog, ItemId};

/// A bag of items carrying a support weight.
///
/// Loaded transactions have weight 1; conditional pattern bases reuse this
/// type with the weight of the tree node they were extracted from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Transaction {
    pub items: Vec<ItemId>,
    pub weight: u64,
}

impl Transaction {
    /// Repeated items are collapsed, keeping the first occurrence.
    pub fn new(items: Vec<ItemId>, weight: u64) -> Self {
        let mut seen = Vec::with_capacity(items.len());
        for item in items {
            if !seen.contains(&item) {
                seen.push(item);
            }
        }
        Self {
            items: seen,
            weight,
        }
    }

    pub fn unit(items: Vec<ItemId>) -> Self {
        Self::new(items, 1)
    }

    pub fn contains(&self, item: ItemId) -> bool {
        self.items.contains(&item)
    }

    pub fn contains_all(&self, itemset: &[ItemId]) -> bool {
        itemset.iter().all(|&item| self.contains(item))
    }
}

/// Loaded transactions plus the catalog their items were interned in.
#[derive(Debug, Clone, Default)]
pub struct TransactionSet {
    pub ids: Vec<String>,
    pub transactions: Vec<Transaction>,
    pub catalog: Catalog,
}

impl TransactionSet {
    pub fn new(catalog: Catalog) -> Self {
        Self {
            ids: Vec::new(),
            transactions: Vec::new(),
            catalog,
        }
    }

    pub fn push(&mut self, id: impl Into<String>, items: Vec<ItemId>) {
        self.ids.push(id.into());
        self.transactions.push(Transaction::unit(items));
    }

    /// Interns `labels` as `(attribute, label)` items and appends a transaction.
    pub fn push_labels<S: AsRef<str>>(&mut self, id: impl Into<String>, attribute: &str, labels: &[S]) {
        let items = labels
            .iter()
            .map(|label| self.catalog.intern(attribute, label.as_ref()))
            .collect();
        self.push(id, items);
    }

    /// Builds a set from a binary matrix: rows are transactions, columns are
    /// items `item=<column>`, and any nonzero cell is a membership.
    pub fn from_dense(matrix: ArrayView2<i32>) -> Self {
        let (num_transactions, num_items) = matrix.dim();
        let mut catalog = Catalog::new();
        let columns: Vec<ItemId> = (0..num_items)
            .map(|col| catalog.intern("item", &col.to_string()))
            .collect();

        let mut set = Self::new(catalog);
        for tx_idx in 0..num_transactions {
            let items = (0..num_items)
                .filter(|&col| matrix[[tx_idx, col]] != 0)
                .map(|col| columns[col])
                .collect();
            set.push(tx_idx.to_string(), items);
        }
        set
    }

    pub fn len(&self) -> usize {
        self.transactions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.transactions.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Transaction> {
        self.transactions.iter()
    }

    /// Weighted count of transactions holding every item of `itemset`.
    pub fn support_of(&self, itemset: &[ItemId]) -> u64 {
        support_of(&self.transactions, itemset)
    }
}

pub fn support_of(transactions: &[Transaction], itemset: &[ItemId]) -> u64 {
    transactions
        .iter()
        .filter(|tx| tx.contains_all(itemset))
        .map(|tx| tx.weight)
        .sum()
}
