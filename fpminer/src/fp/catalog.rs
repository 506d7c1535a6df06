use std::collections::HashMap;
use std::fmt;

use serde::{Deserialize, Serialize};

/// Stable handle to an interned item. Equality is handle equality.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct ItemId(pub usize);

impl ItemId {
    pub fn index(self) -> usize {
        self.0
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Item {
    pub attribute: String,
    pub value: String,
}

impl fmt::Display for Item {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}={}", self.attribute, self.value)
    }
}

/// Interning table for (attribute, value) pairs.
///
/// Items are never removed, so an [`ItemId`] handed out stays valid for the
/// lifetime of the catalog.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    items: Vec<Item>,
    /// attribute -> value -> handle, so lookups can borrow both keys.
    index: HashMap<String, HashMap<String, ItemId>>,
}

impl Catalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the handle for `(attribute, value)`, creating it on first use.
    pub fn intern(&mut self, attribute: &str, value: &str) -> ItemId {
        if let Some(id) = self.find(attribute, value) {
            return id;
        }
        let id = ItemId(self.items.len());
        self.items.push(Item {
            attribute: attribute.to_owned(),
            value: value.to_owned(),
        });
        match self.index.get_mut(attribute) {
            Some(values) => {
                values.insert(value.to_owned(), id);
            }
            None => {
                self.index
                    .insert(attribute.to_owned(), HashMap::from([(value.to_owned(), id)]));
            }
        }
        id
    }

    pub fn find(&self, attribute: &str, value: &str) -> Option<ItemId> {
        self.index.get(attribute)?.get(value).copied()
    }

    /// Panics if `id` was not issued by this catalog.
    pub fn item(&self, id: ItemId) -> &Item {
        &self.items[id.index()]
    }

    pub fn get(&self, id: ItemId) -> Option<&Item> {
        self.items.get(id.index())
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (ItemId, &Item)> {
        self.items
            .iter()
            .enumerate()
            .map(|(idx, item)| (ItemId(idx), item))
    }
}
