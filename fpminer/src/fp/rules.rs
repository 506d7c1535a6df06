use super::catalog::ItemId;
use super::storage::FrequentItemsets;
use super::transaction::{support_of, Transaction, TransactionSet};
use crate::config::validate_confidence;
use crate::error::MiningResult;
use std::collections::{HashMap, HashSet};
use tracing::info;

/// `antecedent => consequent`, scored by confidence.
#[derive(Debug, Clone, PartialEq)]
pub struct Rule {
    pub antecedent: Vec<ItemId>,
    pub antecedent_support: u64,
    /// Every item removed on the way down to `antecedent`, in removal order.
    pub consequent: Vec<ItemId>,
    /// Support of the itemset the antecedent was cut from: the mined itemset
    /// at the top level, the previous antecedent below it.
    pub support: u64,
    /// `support / antecedent_support`.
    pub confidence: f64,
}

/// Sorted antecedent, sorted consequent, both supports and the confidence
/// bits.
type RuleKey = (Vec<ItemId>, Vec<ItemId>, u64, u64, u64);

impl Rule {
    fn key(&self) -> RuleKey {
        (
            sorted(&self.antecedent),
            sorted(&self.consequent),
            self.antecedent_support,
            self.support,
            self.confidence.to_bits(),
        )
    }

    fn has_sides(&self, antecedent: &[ItemId], consequent: &[ItemId]) -> bool {
        sorted(&self.antecedent) == antecedent && sorted(&self.consequent) == consequent
    }
}

fn sorted(items: &[ItemId]) -> Vec<ItemId> {
    let mut items = items.to_vec();
    items.sort_unstable();
    items
}

/// Rules in emission order, without duplicates.
///
/// Two rules are equal when their antecedents and consequents are set-equal
/// and their supports and confidence match. The same pair of sets can be
/// reached through different removal orders with different supports; those
/// are kept apart.
#[derive(Debug, Clone, Default)]
pub struct RuleSet {
    rules: Vec<Rule>,
    seen: HashSet<RuleKey>,
}

impl RuleSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns `false` if an equal rule is already present.
    pub fn insert(&mut self, rule: Rule) -> bool {
        if !self.seen.insert(rule.key()) {
            return false;
        }
        self.rules.push(rule);
        true
    }

    /// Whether any rule has these antecedent and consequent sets.
    pub fn contains(&self, antecedent: &[ItemId], consequent: &[ItemId]) -> bool {
        let (antecedent, consequent) = (sorted(antecedent), sorted(consequent));
        self.rules
            .iter()
            .any(|rule| rule.has_sides(&antecedent, &consequent))
    }

    /// Every rule with these antecedent and consequent sets.
    pub fn find<'s>(
        &'s self,
        antecedent: &[ItemId],
        consequent: &[ItemId],
    ) -> impl Iterator<Item = &'s Rule> + 's {
        let (antecedent, consequent) = (sorted(antecedent), sorted(consequent));
        self.rules
            .iter()
            .filter(move |rule| rule.has_sides(&antecedent, &consequent))
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Rule> {
        self.rules.iter()
    }

    pub fn as_slice(&self) -> &[Rule] {
        &self.rules
    }

    pub fn into_vec(self) -> Vec<Rule> {
        self.rules
    }
}

/// Derives rules from frequent itemsets by shrinking the antecedent one
/// item at a time.
///
/// Antecedent supports come from a scan of the full transaction set and are
/// cached by sorted itemset.
pub struct RuleGenerator<'a> {
    transactions: &'a [Transaction],
    min_confidence: f64,
    support_cache: HashMap<Vec<ItemId>, u64>,
}

impl<'a> RuleGenerator<'a> {
    pub fn new(transactions: &'a [Transaction], min_confidence: f64) -> MiningResult<Self> {
        validate_confidence(min_confidence)?;
        Ok(Self {
            transactions,
            min_confidence,
            support_cache: HashMap::new(),
        })
    }

    pub fn support_of(&mut self, itemset: &[ItemId]) -> u64 {
        let key = sorted(itemset);
        if let Some(&support) = self.support_cache.get(&key) {
            return support;
        }
        let support = support_of(self.transactions, &key);
        self.support_cache.insert(key, support);
        support
    }

    /// Appends every rule reachable from `itemset`. Itemsets of fewer than
    /// two items produce nothing.
    pub fn generate(&mut self, itemset: &[ItemId], support: u64, rules: &mut RuleSet) {
        let mut expanded = HashSet::new();
        self.expand(itemset, support, &[], &mut expanded, rules);
    }

    // Each accepted antecedent becomes the next itemset, carrying its own
    // support. Confidence is not anti-monotone under this recursion, so
    // cutting a branch at the first failing removal can miss rules reachable
    // through another order.
    fn expand(
        &mut self,
        itemset: &[ItemId],
        support: u64,
        consequent: &[ItemId],
        expanded: &mut HashSet<(Vec<ItemId>, u64)>,
        rules: &mut RuleSet,
    ) {
        // Within one `generate` call the consequent set is the source itemset
        // minus `itemset`, so (itemset, support) fixes everything below.
        if itemset.len() < 2 || !expanded.insert((sorted(itemset), support)) {
            return;
        }

        for (idx, &removed) in itemset.iter().enumerate() {
            let antecedent: Vec<ItemId> = itemset
                .iter()
                .enumerate()
                .filter(|&(i, _)| i != idx)
                .map(|(_, &item)| item)
                .collect();
            let mut next_consequent = consequent.to_vec();
            next_consequent.push(removed);

            let antecedent_support = self.support_of(&antecedent);
            if antecedent_support == 0 {
                continue;
            }
            let confidence = support as f64 / antecedent_support as f64;
            if confidence < self.min_confidence {
                continue;
            }

            rules.insert(Rule {
                antecedent: antecedent.clone(),
                antecedent_support,
                consequent: next_consequent.clone(),
                support,
                confidence,
            });
            self.expand(&antecedent, antecedent_support, &next_consequent, expanded, rules);
        }
    }
}

/// Runs the rule generator over every mined itemset of two or more items.
pub fn association_rules(
    set: &TransactionSet,
    itemsets: &FrequentItemsets,
    min_confidence: f64,
) -> MiningResult<RuleSet> {
    let mut generator = RuleGenerator::new(&set.transactions, min_confidence)?;
    let mut rules = RuleSet::new();

    for itemset in itemsets.iter().filter(|itemset| itemset.len() >= 2) {
        generator.generate(itemset.items, itemset.support, &mut rules);
    }

    info!(
        itemsets = itemsets.len(),
        min_confidence,
        rules = rules.len(),
        "rule generation finished"
    );
    Ok(rules)
}
