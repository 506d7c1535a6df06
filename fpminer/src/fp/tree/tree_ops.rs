use super::tree::{FPNode, FPTree, NodeIndex};
use crate::fp::catalog::ItemId;
use crate::fp::transaction::Transaction;

impl FPTree {
    /// Inserts an already-ordered item sequence with the given weight.
    ///
    /// Shared prefixes are merged; a node is added to its header entry only
    /// when it is created.
    pub fn insert_transaction(&mut self, items: &[ItemId], weight: u64) {
        let mut current_index = self.root_index;

        for &item in items {
            let child_index = match self.child_with_item(current_index, item) {
                Some(child_index) => child_index,
                None => {
                    let new_index = self.nodes.len();
                    self.nodes.push(FPNode::new_item(item, current_index));
                    self.nodes[current_index].children.push(new_index);
                    self.header.record_node(item, new_index);
                    new_index
                }
            };

            self.nodes[child_index].count += weight;
            self.header.add_support(item, weight);
            current_index = child_index;
        }
    }

    pub fn child_with_item(&self, parent: NodeIndex, item: ItemId) -> Option<NodeIndex> {
        self.nodes[parent]
            .children
            .iter()
            .copied()
            .find(|&child| self.nodes[child].item == Some(item))
    }

    /// Items on the path root-to-`index`, excluding `index` itself, and the
    /// node's own count.
    pub fn prefix(&self, index: NodeIndex) -> (Vec<ItemId>, u64) {
        let node = &self.nodes[index];
        let mut path = Vec::new();
        let mut current_index = node.parent;

        while let Some(idx) = current_index {
            let parent_node = &self.nodes[idx];
            if let Some(parent_item) = parent_node.item {
                path.push(parent_item);
            }
            current_index = parent_node.parent;
        }
        path.reverse();
        (path, node.count)
    }

    /// One weighted transaction per node holding `item`. Nodes hanging
    /// directly off the root have an empty prefix and are left out.
    pub fn conditional_pattern_base(&self, item: ItemId) -> Vec<Transaction> {
        self.header.get(item).map_or(Vec::new(), |entry| {
            entry
                .nodes
                .iter()
                .filter_map(|&idx| {
                    let (path, count) = self.prefix(idx);
                    (!path.is_empty()).then(|| Transaction { items: path, weight: count })
                })
                .collect()
        })
    }

    /// Sum of node counts for `item`, straight from the arena.
    pub fn node_support(&self, item: ItemId) -> u64 {
        self.header.get(item).map_or(0, |entry| {
            entry.nodes.iter().map(|&idx| self.nodes[idx].count).sum()
        })
    }
}
