use numpy::PyReadonlyArray2;
use pyo3::exceptions::PyValueError;
use pyo3::prelude::*;

use crate::error::MiningError;
use crate::fp::{association_rules, fp_growth_fraction, ItemId, TransactionSet};

fn value_error(err: MiningError) -> PyErr {
    PyValueError::new_err(err.to_string())
}

// `from_dense` interns columns in order, so a handle is its column index.
fn columns(items: &[ItemId]) -> Vec<usize> {
    items.iter().map(|item| item.index()).collect()
}

#[pyfunction]
#[pyo3(name = "fp_growth")]
fn fp_growth_py<'py>(
    transactions: PyReadonlyArray2<'py, i32>,
    min_support: f64,
) -> PyResult<Vec<(Vec<usize>, u64)>> {
    let set = TransactionSet::from_dense(transactions.as_array());
    let itemsets = fp_growth_fraction(&set, min_support).map_err(value_error)?;

    Ok(itemsets
        .iter()
        .map(|itemset| (columns(itemset.items), itemset.support))
        .collect())
}

#[pyfunction]
#[pyo3(name = "association_rules")]
fn association_rules_py<'py>(
    transactions: PyReadonlyArray2<'py, i32>,
    min_support: f64,
    min_confidence: f64,
) -> PyResult<Vec<(Vec<usize>, Vec<usize>, u64, u64, f64)>> {
    let set = TransactionSet::from_dense(transactions.as_array());
    let itemsets = fp_growth_fraction(&set, min_support).map_err(value_error)?;
    let rules = association_rules(&set, &itemsets, min_confidence).map_err(value_error)?;

    Ok(rules
        .iter()
        .map(|rule| {
            (
                columns(&rule.antecedent),
                columns(&rule.consequent),
                rule.antecedent_support,
                rule.support,
                rule.confidence,
            )
        })
        .collect())
}

#[pymodule]
fn fpminer(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_function(wrap_pyfunction!(fp_growth_py, m)?)?;
    m.add_function(wrap_pyfunction!(association_rules_py, m)?)?;
    Ok(())
}
