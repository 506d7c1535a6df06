use fpminer::{LoadError, MiningError};

#[test]
fn invalid_support_carries_count() {
    let err = MiningError::InvalidSupport { count: 0 };
    assert!(err.to_string().contains("at least 1, got 0"));
}

#[test]
fn invalid_confidence_carries_value() {
    let err = MiningError::InvalidConfidence { confidence: 1.5 };
    assert!(err.to_string().contains("1.5"));
}

#[test]
fn missing_column_carries_name() {
    let err = LoadError::MissingColumn {
        column: "Item Name".into(),
    };
    assert!(err.to_string().contains("Item Name"));
}

#[test]
fn json_error_converts_to_load_error() {
    let json_err = serde_json::from_str::<Vec<String>>("{").unwrap_err();
    let err: LoadError = json_err.into();
    assert!(matches!(err, LoadError::Json(_)));
    assert!(err.to_string().starts_with("malformed JSON input"));
}
