use crate::fp::builder::HeaderTable;
use crate::fp::catalog::ItemId;

pub type NodeIndex = usize;

/// One arena slot. The root is the only node without an item.
#[derive(Debug, Clone)]
pub struct FPNode {
    pub item: Option<ItemId>,
    pub count: u64,
    pub parent: Option<NodeIndex>,
    /// Insertion order; no two children share an item.
    pub children: Vec<NodeIndex>,
}

/// Prefix tree stored as an arena of nodes addressed by index.
///
/// The header table lives next to the arena so its node lists can only ever
/// point into this tree.
#[derive(Debug, Clone)]
pub struct FPTree {
    pub nodes: Vec<FPNode>,
    pub header: HeaderTable,
    pub root_index: NodeIndex,
}

impl FPNode {
    pub fn new_root() -> Self {
        Self {
            item: None,
            count: 0,
            parent: None,
            children: Vec::new(),
        }
    }

    pub fn new_item(item: ItemId, parent: NodeIndex) -> Self {
        Self {
            item: Some(item),
            count: 0,
            parent: Some(parent),
            children: Vec::new(),
        }
    }

    pub fn is_root(&self) -> bool {
        self.item.is_none()
    }
}

impl Default for FPTree {
    fn default() -> Self {
        Self::new()
    }
}

impl FPTree {
    pub fn new() -> Self {
        Self::with_header(HeaderTable::default())
    }

    /// Empty tree whose header already lists items in rank order.
    pub fn with_header(header: HeaderTable) -> Self {
        Self {
            nodes: vec![FPNode::new_root()],
            header,
            root_index: 0,
        }
    }

    pub fn root(&self) -> &FPNode {
        &self.nodes[self.root_index]
    }

    pub fn node(&self, index: NodeIndex) -> &FPNode {
        &self.nodes[index]
    }

    /// Number of item nodes, excluding the root.
    pub fn len(&self) -> usize {
        self.nodes.len() - 1
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.len() == 1
    }
}
