//! Plain-text rendering of mining output. Items print as `attribute=value`.

use std::fmt;

use crate::config::MiningConfig;
use crate::fp::{Catalog, FrequentItemset, ItemId, Rule};
use crate::Mined;

/// Space-separated `attribute=value` tokens.
pub struct DisplayItems<'a> {
    catalog: &'a Catalog,
    items: &'a [ItemId],
}

pub fn display_items<'a>(catalog: &'a Catalog, items: &'a [ItemId]) -> DisplayItems<'a> {
    DisplayItems { catalog, items }
}

impl fmt::Display for DisplayItems<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (idx, &item) in self.items.iter().enumerate() {
            if idx > 0 {
                f.write_str(" ")?;
            }
            match self.catalog.get(item) {
                Some(item) => write!(f, "{item}")?,
                None => write!(f, "#{}", item.0)?,
            }
        }
        Ok(())
    }
}

pub fn format_itemset(catalog: &Catalog, itemset: &FrequentItemset<'_>) -> String {
    format!(
        "{} (Support Count: {})",
        display_items(catalog, itemset.items),
        itemset.support
    )
}

pub fn format_rule(catalog: &Catalog, rule: &Rule) -> String {
    format!(
        "{{{}}} => {{{}}} (Support Count: {}/{}, Confidence: {:.3})",
        display_items(catalog, &rule.antecedent),
        display_items(catalog, &rule.consequent),
        rule.support,
        rule.antecedent_support,
        rule.confidence
    )
}

/// Summary of one run, numbered the way the listing has always looked.
pub struct RunReport<'a> {
    pub catalog: &'a Catalog,
    pub num_transactions: usize,
    pub config: &'a MiningConfig,
    pub mined: &'a Mined,
}

impl fmt::Display for RunReport<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Data Size: {}", self.num_transactions)?;
        writeln!(f, "Minimal Support: {:.2}", self.config.min_support)?;
        writeln!(f, "Minimal Support Count: {}", self.mined.min_support_count)?;
        writeln!(f, "Minimal Confidence: {:.2}", self.config.min_confidence)?;

        writeln!(f, "Frequent Itemset:")?;
        for (idx, itemset) in self.mined.itemsets.iter().enumerate() {
            writeln!(f, "{}\t{}", idx + 1, format_itemset(self.catalog, &itemset))?;
        }

        writeln!(f, "Association Rules:")?;
        for (idx, rule) in self.mined.rules.iter().enumerate() {
            writeln!(f, "{}\t{}", idx + 1, format_rule(self.catalog, rule))?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fp::TransactionSet;
    use crate::mine;

    #[test]
    fn renders_attribute_value_tokens() {
        let mut catalog = Catalog::new();
        let a = catalog.intern("hair", "1");
        let b = catalog.intern("legs", "4");
        assert_eq!(display_items(&catalog, &[a, b]).to_string(), "hair=1 legs=4");
        assert_eq!(display_items(&catalog, &[ItemId(9)]).to_string(), "#9");
    }

    #[test]
    fn renders_full_run() {
        let mut set = TransactionSet::default();
        set.push_labels("T1", "item", &["X", "Y"]);
        set.push_labels("T2", "item", &["X", "Y"]);
        set.push_labels("T3", "item", &["X"]);
        let config = MiningConfig::new(0.6, 0.9);
        let mined = mine(&set, &config).unwrap();

        let report = RunReport {
            catalog: &set.catalog,
            num_transactions: set.len(),
            config: &config,
            mined: &mined,
        }
        .to_string();

        assert!(report.starts_with("Data Size: 3\n"));
        assert!(report.contains("Minimal Support Count: 1\n"));
        assert!(report.contains("1\titem=X (Support Count: 3)\n"));
        assert!(report.contains("3\titem=Y item=X (Support Count: 2)\n"));
        assert!(report.contains("1\t{item=Y} => {item=X} (Support Count: 2/2, Confidence: 1.000)"));
        assert!(!report.contains("{item=X} => {item=Y}"));
    }
}
