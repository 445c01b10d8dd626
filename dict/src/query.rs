//! Building a dictionary and answering queries against it.

use std::io::{BufRead, Write};

use ptrie::{BitKey, PatriciaTree, SearchResult, SearchStats, TreeStatsTrait};
use tracing::{debug, info};

use crate::address::Address;
use crate::config::Stage;
use crate::error::Result;
use crate::scan::ScanDict;

pub enum Dictionary {
    Scan(ScanDict<Address>),
    Trie(PatriciaTree<Address>),
}

impl Dictionary {
    /// Loads every record for `stage`. The trie does not index records with an empty key.
    pub fn build<I>(stage: Stage, records: I) -> Result<Self>
    where
        I: IntoIterator<Item = Result<Address>>,
    {
        match stage {
            Stage::Scan => {
                let mut dict = ScanDict::new();
                for record in records {
                    dict.insert(record?);
                }
                info!(records = dict.len(), "scan dictionary built");
                Ok(Dictionary::Scan(dict))
            }
            Stage::Trie => {
                let mut tree = PatriciaTree::new();
                let (mut indexed, mut skipped) = (0usize, 0usize);
                for record in records {
                    let record = record?;
                    if record.key_str().is_empty() {
                        skipped += 1;
                        continue;
                    }
                    let key = BitKey::from(record.key_str());
                    tree.insert_k(&key, record);
                    indexed += 1;
                }
                info!(records = indexed, keys = tree.len(), skipped, "trie built");
                debug!(stats = ?tree.get_tree_stats(), "trie shape");
                Ok(Dictionary::Trie(tree))
            }
        }
    }

    pub fn stage(&self) -> Stage {
        match self {
            Dictionary::Scan(_) => Stage::Scan,
            Dictionary::Trie(_) => Stage::Trie,
        }
    }

    /// Exact lookup for the scan, closest-spelling lookup for the trie.
    pub fn lookup(&self, query: &[u8]) -> SearchResult<'_, Address> {
        match self {
            Dictionary::Scan(dict) => dict.search(query),
            Dictionary::Trie(tree) => tree.search_spell(query),
        }
    }
}

/// Totals over a query session.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct QueryTotals {
    pub queries: usize,
    pub records: usize,
    pub stats: SearchStats,
}

impl QueryTotals {
    fn add(&mut self, result: &SearchResult<'_, Address>) {
        self.queries += 1;
        self.records += result.len();
        self.stats.bit_comps += result.stats.bit_comps;
        self.stats.node_comps += result.stats.node_comps;
        self.stats.string_comps += result.stats.string_comps;
    }
}

/// Cuts a query at its first line-ending byte.
fn chomp(line: &mut Vec<u8>) {
    if let Some(end) = line.iter().position(|b| *b == b'\r' || *b == b'\n') {
        line.truncate(end);
    }
}

/// Answers one query per line of `queries`.
///
/// `output` gets the query followed by one rendered line per matching record. `summary` gets
/// `<query> --> <n> records found - comparisons: b<bits> n<nodes> s<strings>`.
pub fn process_queries<Q, O, S>(
    dict: &Dictionary,
    queries: Q,
    output: &mut O,
    summary: &mut S,
) -> Result<QueryTotals>
where
    Q: BufRead,
    O: Write,
    S: Write,
{
    let mut totals = QueryTotals::default();
    for line in queries.split(b'\n') {
        let mut query = line?;
        chomp(&mut query);

        output.write_all(&query)?;
        output.write_all(b"\n")?;

        let result = dict.lookup(&query);
        for record in &result.records {
            writeln!(output, "{record}")?;
        }

        summary.write_all(&query)?;
        writeln!(
            summary,
            " --> {} records found - comparisons: {}",
            result.len(),
            result.stats
        )?;
        totals.add(&result);
    }
    Ok(totals)
}
