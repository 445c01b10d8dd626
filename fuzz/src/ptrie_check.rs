#![no_main]

use std::collections::BTreeMap;

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;

use ptrie::{edit_distance, PatriciaTree, TreeStatsTrait};

#[derive(Arbitrary, Debug)]
enum TrieMethod {
    Insert { key: Vec<u8>, val: usize },
    Exact { key: Vec<u8> },
    Spell { key: Vec<u8> },
}

fuzz_target!(|methods: Vec<TrieMethod>| {
    let mut trie = PatriciaTree::<usize>::new();
    let mut bt_map = BTreeMap::<Vec<u8>, Vec<usize>>::new();

    for m in methods {
        match m {
            TrieMethod::Insert { key, val } => {
                trie.insert(key.as_slice(), val);
                bt_map.entry(key).or_default().push(val);
                assert_eq!(trie.len(), bt_map.len());
            }
            TrieMethod::Exact { key } => {
                let found: Vec<usize> = trie
                    .search_exact(key.as_slice())
                    .records
                    .into_iter()
                    .copied()
                    .collect();
                let expected = bt_map.get(&key).cloned().unwrap_or_default();
                assert_eq!(found, expected);
            }
            TrieMethod::Spell { key } => {
                let found = trie.search_spell(key.as_slice());
                if let Some(expected) = bt_map.get(&key) {
                    assert_eq!(found.records.into_iter().copied().collect::<Vec<_>>(), *expected);
                    continue;
                }
                if bt_map.is_empty() {
                    assert!(found.is_empty());
                    continue;
                }
                // The returned bucket belongs to a scored candidate no farther than any other.
                let candidates = trie.closest_keys(key.as_slice());
                let best = candidates
                    .iter()
                    .map(|c| edit_distance(&key, c))
                    .min()
                    .unwrap();
                let winner = candidates
                    .iter()
                    .find(|c| edit_distance(&key, c) == best)
                    .unwrap();
                assert_eq!(
                    found.records.into_iter().copied().collect::<Vec<_>>(),
                    bt_map[winner]
                );
            }
        }
    }

    let stats = trie.get_tree_stats();
    assert_eq!(stats.num_keys, bt_map.len());
    assert_eq!(
        stats.num_records,
        bt_map.values().map(Vec::len).sum::<usize>()
    );
    let keys: Vec<Vec<u8>> = trie.keys().collect();
    assert_eq!(keys.len(), bt_map.len());
    assert!(keys.iter().all(|k| bt_map.contains_key(k)));
});
