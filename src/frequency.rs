use std::collections::btree_map::{self, BTreeMap, Entry};

use crate::error::{InvalidInput, Result};

/// Occurrence counts for every symbol of an alphabet.
///
/// Always holds at least two symbols, each with a positive weight. Iteration
/// is in ascending symbol order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FrequencyTable<S> {
    weights: BTreeMap<S, u64>,
    total: u64,
}

impl<S: Ord + Clone> FrequencyTable<S> {
    /// Counts each symbol of a sample sequence.
    pub fn from_symbols<I>(symbols: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
    {
        let weights = symbols
            .into_iter()
            .fold(BTreeMap::new(), |mut acc, symbol| {
                *acc.entry(symbol).or_insert(0u64) += 1;
                acc
            });

        if weights.is_empty() {
            return Err(InvalidInput::EmptySeed.into());
        }
        Self::checked(weights)
    }

    /// Takes explicit weights. Every weight must be positive and every symbol
    /// listed once.
    pub fn from_weights<I>(weights: I) -> Result<Self>
    where
        I: IntoIterator<Item = (S, i64)>,
    {
        let mut table = BTreeMap::new();
        for (symbol, weight) in weights {
            if weight <= 0 {
                return Err(InvalidInput::NonPositiveWeight { weight }.into());
            }
            match table.entry(symbol) {
                Entry::Vacant(slot) => {
                    slot.insert(weight as u64);
                }
                Entry::Occupied(_) => return Err(InvalidInput::DuplicateSymbol.into()),
            }
        }
        Self::checked(table)
    }

    fn checked(weights: BTreeMap<S, u64>) -> Result<Self> {
        if weights.len() < 2 {
            return Err(InvalidInput::TooFewSymbols {
                found: weights.len(),
            }
            .into());
        }
        // every merged node weighs at most the total, so this bounds the tree too
        let total = weights
            .values()
            .try_fold(0u64, |acc, &w| acc.checked_add(w))
            .ok_or(InvalidInput::WeightOverflow)?;
        Ok(FrequencyTable { weights, total })
    }
}

impl<S: Ord> FrequencyTable<S> {
    pub fn weight(&self, symbol: &S) -> Option<u64> {
        self.weights.get(symbol).copied()
    }
}

impl<S> FrequencyTable<S> {
    /// Number of distinct symbols.
    pub fn len(&self) -> usize {
        self.weights.len()
    }

    /// Never true for a constructed table.
    pub fn is_empty(&self) -> bool {
        self.weights.is_empty()
    }

    /// Sum of all weights, i.e. the length of the seed text it was counted from.
    pub fn total(&self) -> u64 {
        self.total
    }

    pub fn iter(&self) -> btree_map::Iter<'_, S, u64> {
        self.weights.iter()
    }
}

impl<'a, S> IntoIterator for &'a FrequencyTable<S> {
    type Item = (&'a S, &'a u64);
    type IntoIter = btree_map::Iter<'a, S, u64>;

    fn into_iter(self) -> Self::IntoIter {
        self.weights.iter()
    }
}
