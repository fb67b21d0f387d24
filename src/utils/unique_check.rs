use std::{collections::HashMap, hash::Hash};

/// Counts how many times each value has been seen.
#[derive(Debug, Clone)]
pub struct Count<S> {
    counts: HashMap<S, usize>,
}

impl<S> Default for Count<S> {
    fn default() -> Self {
        Self {
            counts: HashMap::new(),
        }
    }
}

impl<S: Eq + Hash> Count<S> {
    pub fn get(&self, s: &S) -> usize { self.counts.get(s).copied().unwrap_or(0) }

    /// Increments the count of `s` and returns the new count.
    pub fn inc(&mut self, s: S) -> usize {
        let count = self.counts.entry(s).or_insert(0);
        *count += 1;
        *count
    }
}

/// Tells whether a value is seen for the first time.
#[derive(Debug, Clone)]
pub struct UniqueCheck<S> {
    count: Count<S>,
}

impl<S> Default for UniqueCheck<S> {
    fn default() -> Self {
        Self {
            count: Count::default(),
        }
    }
}

impl<S: Eq + Hash> UniqueCheck<S> {
    pub fn check(&mut self, s: S) -> bool { self.count.inc(s) == 1 }
}
