//! Unindexed baseline dictionary.
//!
//! Every search visits every record and compares its key with the query bit by bit, which gives a
//! reference point for the comparison counts reported by the trie.

use ptrie::{count_bit_comparisons, Keyed, SearchResult, SearchStats};

pub struct ScanDict<R> {
    records: Vec<R>,
}

impl<R> Default for ScanDict<R> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R> ScanDict<R> {
    pub fn new() -> Self {
        Self {
            records: Vec::new(),
        }
    }

    /// Number of records, duplicates included.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, R> {
        self.records.iter()
    }
}

impl<R: Keyed> ScanDict<R> {
    /// Appends `record`; records keep their insertion order.
    pub fn insert(&mut self, record: R) {
        self.records.push(record);
    }

    /// All records whose key equals `query`, in insertion order.
    ///
    /// Each record counts as one node visited and one key comparison, plus the bits needed to tell
    /// its key apart from the query.
    pub fn search(&self, query: &[u8]) -> SearchResult<'_, R> {
        let mut stats = SearchStats::default();
        let mut records = Vec::new();
        for record in &self.records {
            stats.node_comps += 1;
            stats.string_comps += 1;
            stats.bit_comps += count_bit_comparisons(query, record.key());
            if record.key() == query {
                records.push(record);
            }
        }
        SearchResult { records, stats }
    }
}

impl<R: Keyed> Extend<R> for ScanDict<R> {
    fn extend<I: IntoIterator<Item = R>>(&mut self, iter: I) {
        for record in iter {
            self.insert(record);
        }
    }
}

impl<R: Keyed> FromIterator<R> for ScanDict<R> {
    fn from_iter<I: IntoIterator<Item = R>>(iter: I) -> Self {
        let mut dict = ScanDict::new();
        dict.extend(iter);
        dict
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn finds_duplicates_in_order() {
        let dict: ScanDict<String> = ["b", "a", "b", "c", "b"]
            .iter()
            .map(|s| s.to_string())
            .collect();
        let found = dict.search(b"b");
        assert_eq!(found.len(), 3);
        assert!(found.records.iter().all(|r| r.as_str() == "b"));
        assert_eq!(found.stats.node_comps, 5);
        assert_eq!(found.stats.string_comps, 5);
    }

    #[test]
    fn bit_counts_add_up_per_record() {
        let dict: ScanDict<String> = vec!["ab".to_string(), "ac".to_string()].into_iter().collect();
        let found = dict.search(b"ab");
        // "ab" against itself costs all 24 bits; against "ac" the 16th bit differs.
        assert_eq!(found.stats.bit_comps, 24 + 16);
        assert_eq!(found.records, vec![&"ab".to_string()]);
    }

    #[test]
    fn empty_dictionary() {
        let dict: ScanDict<String> = ScanDict::new();
        let found = dict.search(b"x");
        assert!(found.is_empty());
        assert_eq!(found.stats, SearchStats::default());
    }
}
