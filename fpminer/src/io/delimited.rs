use std::fs::File;
use std::io::Read;
use std::path::Path;

use tracing::debug;

use crate::error::{LoadError, LoadResult};
use crate::fp::{Catalog, TransactionSet};

/// Reads an attribute table: the header row names the attributes, the first
/// column holds the transaction id and every other non-empty cell becomes the
/// item `header=cell`.
pub fn read_delimited<R: Read>(reader: R) -> LoadResult<TransactionSet> {
    let mut csv_reader = csv::ReaderBuilder::new().has_headers(true).from_reader(reader);
    let attrs = csv_reader.headers()?.clone();
    if attrs.is_empty() {
        return Err(LoadError::MissingHeader);
    }

    let mut set = TransactionSet::new(Catalog::new());
    for record in csv_reader.records() {
        let record = record?;
        let Some(tid) = record.get(0) else {
            continue;
        };

        let mut items = Vec::with_capacity(record.len().saturating_sub(1));
        for (attr, value) in attrs.iter().zip(record.iter()).skip(1) {
            if !value.is_empty() {
                items.push(set.catalog.intern(attr, value));
            }
        }
        set.push(tid, items);
    }

    debug!(transactions = set.len(), items = set.catalog.len(), "loaded delimited input");
    Ok(set)
}

pub fn load_delimited(path: impl AsRef<Path>) -> LoadResult<TransactionSet> {
    let path = path.as_ref();
    let file = File::open(path).map_err(|e| LoadError::io(path, e))?;
    read_delimited(file)
}

#[cfg(test)]
mod tests {
    use super::*;

    const ZOO: &str = "\
animal,hair,feathers,legs
aardvark,1,0,4
antelope,1,0,4
bass,0,0,0
";

    #[test]
    fn interns_attribute_value_pairs() {
        let set = read_delimited(ZOO.as_bytes()).unwrap();

        assert_eq!(set.len(), 3);
        assert_eq!(set.ids, vec!["aardvark", "antelope", "bass"]);
        // hair=1, feathers=0, legs=4, hair=0, legs=0
        assert_eq!(set.catalog.len(), 5);

        let hair = set.catalog.find("hair", "1").unwrap();
        let legs = set.catalog.find("legs", "4").unwrap();
        assert_eq!(set.support_of(&[hair, legs]), 2);
        assert_eq!(set.catalog.item(hair).to_string(), "hair=1");
    }

    #[test]
    fn skips_empty_cells() {
        let set = read_delimited("id,a,b\nt1,x,\nt2,,y\n".as_bytes()).unwrap();
        assert_eq!(set.transactions[0].items.len(), 1);
        assert_eq!(set.transactions[1].items.len(), 1);
    }

    #[test]
    fn rejects_ragged_rows() {
        let err = read_delimited("id,a,b\nt1,x\n".as_bytes()).unwrap_err();
        assert!(matches!(err, LoadError::Csv(_)));
    }

    #[test]
    fn rejects_empty_input() {
        assert!(matches!(
            read_delimited("".as_bytes()),
            Err(LoadError::MissingHeader)
        ));
    }
}
