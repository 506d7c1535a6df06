use std::collections::BTreeMap;
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

use tracing::debug;

use crate::error::{LoadError, LoadResult};
use crate::fp::{Catalog, TransactionSet};

/// Attribute given to every label of a keyed document.
pub const DOCUMENT_ATTRIBUTE: &str = "item";

/// Reads a JSON object mapping transaction ids to label lists.
///
/// Transactions come out in numeric id order when every id is an integer,
/// otherwise in lexicographic order.
pub fn read_document<R: Read>(reader: R) -> LoadResult<TransactionSet> {
    let document: BTreeMap<String, Vec<String>> = serde_json::from_reader(reader)?;

    let mut entries: Vec<(String, Vec<String>)> = document.into_iter().collect();
    let numeric: Option<Vec<u64>> = entries.iter().map(|(id, _)| id.parse().ok()).collect();
    if let Some(keys) = numeric {
        let mut keyed: Vec<(u64, (String, Vec<String>))> = keys.into_iter().zip(entries).collect();
        keyed.sort_by_key(|&(key, _)| key);
        entries = keyed.into_iter().map(|(_, entry)| entry).collect();
    }

    let mut set = TransactionSet::new(Catalog::new());
    for (id, labels) in entries {
        set.push_labels(id, DOCUMENT_ATTRIBUTE, &labels);
    }

    debug!(transactions = set.len(), items = set.catalog.len(), "loaded keyed document");
    Ok(set)
}

pub fn load_document(path: impl AsRef<Path>) -> LoadResult<TransactionSet> {
    let path = path.as_ref();
    let file = File::open(path).map_err(|e| LoadError::io(path, e))?;
    read_document(BufReader::new(file))
}
