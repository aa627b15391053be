use hashbrown::HashMap;

/// Counts of candidate translations, kept in the order candidates were first seen.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CooccurrenceCounter {
    entries: Vec<(String, u64)>,
    ids: HashMap<String, usize>,
}

impl CooccurrenceCounter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Increments the count of a candidate by one.
    pub fn add(&mut self, candidate: &str) {
        self.add_n(candidate, 1);
    }

    /// Increments the count of a candidate by `n`.
    pub fn add_n(&mut self, candidate: &str, n: u64) {
        if let Some(&id) = self.ids.get(candidate) {
            self.entries[id].1 += n;
        } else {
            self.ids.insert(candidate.to_string(), self.entries.len());
            self.entries.push((candidate.to_string(), n));
        }
    }

    /// Gets the count of a candidate, 0 if it was never seen.
    pub fn get(&self, candidate: &str) -> u64 {
        self.ids.get(candidate).map_or(0, |&id| self.entries[id].1)
    }

    /// Number of distinct candidates.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterates over candidates in first-seen order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, u64)> {
        self.entries.iter().map(|(c, n)| (c.as_str(), *n))
    }

    /// Returns the `n` most frequent candidates, most frequent first.
    ///
    /// Among candidates with equal counts, the one seen first comes first.
    ///
    /// # Examples
    ///
    /// ```
    /// use lexalign::CooccurrenceCounter;
    ///
    /// let mut counter = CooccurrenceCounter::new();
    /// for w in ["the", "house", "house", "is", "big"] {
    ///     counter.add(w);
    /// }
    /// assert_eq!(
    ///     vec![("house", 2), ("the", 1), ("is", 1)],
    ///     counter.most_common(3),
    /// );
    /// ```
    pub fn most_common(&self, n: usize) -> Vec<(&str, u64)> {
        let mut items: Vec<_> = self.iter().collect();
        // Stable sort preserves first-seen order among ties.
        items.sort_by(|a, b| b.1.cmp(&a.1));
        items.truncate(n);
        items
    }
}
