use std::collections::BTreeMap;
use std::fs::File;
use std::io::{Read, Write};
use std::path::Path;

use tracing::debug;

use crate::error::{LoadError, LoadResult};

/// Header names of the order-number and label columns.
#[derive(Debug, Clone)]
pub struct OrderColumns {
    pub order: String,
    pub label: String,
}

impl Default for OrderColumns {
    fn default() -> Self {
        Self {
            order: "Order Number".to_owned(),
            label: "Item Name".to_owned(),
        }
    }
}

fn column_index(headers: &csv::StringRecord, name: &str) -> LoadResult<usize> {
    headers
        .iter()
        .position(|header| header == name)
        .ok_or_else(|| LoadError::MissingColumn {
            column: name.to_owned(),
        })
}

/// Groups order lines into one sorted, deduplicated label list per order.
/// Lines with an empty label are dropped. Later readers add to the orders of
/// earlier ones.
pub fn group_order_lines<R: Read>(
    readers: impl IntoIterator<Item = R>,
    columns: &OrderColumns,
) -> LoadResult<BTreeMap<u64, Vec<String>>> {
    let mut groups: BTreeMap<u64, Vec<String>> = BTreeMap::new();

    for reader in readers {
        let mut csv_reader = csv::ReaderBuilder::new().has_headers(true).from_reader(reader);
        let headers = csv_reader.headers()?.clone();
        if headers.is_empty() {
            return Err(LoadError::MissingHeader);
        }
        let order_idx = column_index(&headers, &columns.order)?;
        let label_idx = column_index(&headers, &columns.label)?;

        for (record_idx, record) in csv_reader.records().enumerate() {
            let record = record?;
            let label = record.get(label_idx).unwrap_or_default();
            if label.is_empty() {
                continue;
            }
            let raw_id = record.get(order_idx).unwrap_or_default();
            let order: u64 = raw_id.trim().parse().map_err(|_| LoadError::InvalidTransactionId {
                id: raw_id.to_owned(),
                record: record_idx + 1,
            })?;

            let labels = groups.entry(order).or_default();
            if !labels.iter().any(|existing| existing == label) {
                labels.push(label.to_owned());
            }
        }
    }

    for labels in groups.values_mut() {
        labels.sort();
    }
    debug!(orders = groups.len(), "grouped order lines");
    Ok(groups)
}

pub fn load_order_files<P: AsRef<Path>>(
    paths: &[P],
    columns: &OrderColumns,
) -> LoadResult<BTreeMap<u64, Vec<String>>> {
    let files = paths
        .iter()
        .map(|path| File::open(path).map_err(|e| LoadError::io(path.as_ref(), e)))
        .collect::<LoadResult<Vec<File>>>()?;
    group_order_lines(files, columns)
}

/// Writes grouped orders in the shape [`read_document`](super::read_document) reads.
pub fn write_document<W: Write>(groups: &BTreeMap<u64, Vec<String>>, writer: W) -> LoadResult<()> {
    serde_json::to_writer_pretty(writer, groups)?;
    Ok(())
}
