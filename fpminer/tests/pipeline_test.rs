use fpminer::fp::ItemId;
use fpminer::io::{load_delimited, load_document, read_delimited};
use fpminer::{mine, MiningConfig, MiningError};

const SHOP: &str = "\
tid,bread,milk,beer
1,yes,yes,no
2,yes,yes,no
3,yes,no,no
4,no,yes,yes
";

fn find(set: &fpminer::fp::TransactionSet, attr: &str, value: &str) -> ItemId {
    set.catalog.find(attr, value).unwrap()
}

#[test]
fn mines_attribute_table_end_to_end() {
    let set = read_delimited(SHOP.as_bytes()).unwrap();
    let mined = mine(&set, &MiningConfig::new(0.5, 0.9)).unwrap();

    assert_eq!(mined.min_support_count, 2);
    let bread = find(&set, "bread", "yes");
    let milk = find(&set, "milk", "yes");
    let no_beer = find(&set, "beer", "no");

    assert_eq!(mined.itemsets.support_of(&[no_beer]), Some(3));
    assert_eq!(mined.itemsets.support_of(&[bread, milk, no_beer]), Some(2));
    assert!(mined
        .itemsets
        .iter()
        .all(|itemset| itemset.support >= mined.min_support_count));

    // bread=yes always comes with beer=no
    assert!(mined.rules.contains(&[bread], &[no_beer]));
    // milk=yes does not: 2 of 3
    assert!(!mined.rules.contains(&[milk], &[no_beer]));
    // bread=yes, milk=yes implies beer=no
    assert!(mined.rules.contains(&[bread, milk], &[no_beer]));
}

#[test]
fn invalid_thresholds_rejected_before_mining() {
    let set = read_delimited(SHOP.as_bytes()).unwrap();
    assert!(matches!(
        mine(&set, &MiningConfig::new(0.5, 0.0)),
        Err(MiningError::InvalidConfidence { .. })
    ));
    assert!(matches!(
        mine(&set, &MiningConfig::new(0.1, 0.9)),
        Err(MiningError::InvalidSupport { count: 0 })
    ));
}

#[test]
fn empty_result_is_not_an_error() {
    let set = read_delimited("tid,a\n1,x\n2,y\n3,z\n".as_bytes()).unwrap();
    let mined = mine(&set, &MiningConfig::new(1.0, 0.5)).unwrap();
    assert!(mined.itemsets.is_empty());
    assert!(mined.rules.is_empty());
}

#[test]
fn loads_from_files() {
    let dir = tempfile::tempdir().unwrap();
    let table = dir.path().join("shop.csv");
    std::fs::write(&table, SHOP).unwrap();
    let document = dir.path().join("dataset.json");
    std::fs::write(&document, r#"{"1": ["X", "Y"], "2": ["X", "Y"], "3": ["X"]}"#).unwrap();

    let from_table = load_delimited(&table).unwrap();
    assert_eq!(from_table.len(), 4);

    let from_document = load_document(&document).unwrap();
    let mined = mine(&from_document, &MiningConfig::new(0.6, 0.9)).unwrap();
    assert_eq!(mined.rules.len(), 1);

    assert!(load_document(dir.path().join("missing.json")).is_err());
}
