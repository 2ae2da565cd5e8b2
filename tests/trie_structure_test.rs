use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use typotrie::error::Result;
use typotrie::trie::TrieStructure;

fn random_dictionary(rng: &mut StdRng, count: usize, alphabet: &[char]) -> Vec<String> {
    let mut words: Vec<String> = (0..count)
        .map(|_| {
            let len = rng.random_range(0..8);
            (0..len)
                .map(|_| alphabet[rng.random_range(0..alphabet.len())])
                .collect()
        })
        .collect();
    words.sort();
    words.dedup();
    words
}

#[test]
fn every_value_round_trips_to_its_own_node() -> Result<()> {
    let mut rng = StdRng::seed_from_u64(42);
    let alphabet: Vec<char> = "abcxyzé_".chars().collect();

    for _ in 0..20 {
        let words = random_dictionary(&mut rng, 300, &alphabet);
        let trie = TrieStructure::build(&words);
        assert_eq!(trie.len(), words.len());

        for (index, word) in words.iter().enumerate() {
            let query: Vec<char> = word.chars().collect();
            let node = trie
                .exact_node(&query)
                .unwrap_or_else(|| panic!("{word:?} not found"));
            assert!(trie.values_range(node).contains(&index));
            assert_eq!(trie.index_of(word), Some(index));
        }
    }
    Ok(())
}

#[test]
fn node_count_is_linear_in_distinct_prefixes() -> Result<()> {
    let mut rng = StdRng::seed_from_u64(7);
    let alphabet: Vec<char> = "ab".chars().collect();
    let words = random_dictionary(&mut rng, 500, &alphabet);
    let trie = TrieStructure::build(&words);

    let mut prefixes = std::collections::BTreeSet::new();
    for word in &words {
        let chars: Vec<char> = word.chars().collect();
        for end in 0..=chars.len() {
            prefixes.insert(chars[..end].to_vec());
        }
    }
    assert_eq!(trie.node_count(), prefixes.len().max(1));
    Ok(())
}

#[test]
fn prefix_ranges_match_a_linear_scan() -> Result<()> {
    let mut rng = StdRng::seed_from_u64(3);
    let alphabet: Vec<char> = "abcd".chars().collect();
    let words = random_dictionary(&mut rng, 400, &alphabet);
    let trie = TrieStructure::build(&words);

    for prefix in ["", "a", "ab", "abc", "dd", "dcba", "zz"] {
        let expected: Vec<usize> = words
            .iter()
            .enumerate()
            .filter(|(_, w)| w.starts_with(prefix))
            .map(|(i, _)| i)
            .collect();
        let actual: Vec<usize> = trie.prefix_range(prefix).collect();
        assert_eq!(actual, expected, "prefix {prefix:?}");
    }
    Ok(())
}

#[test]
fn absent_queries_have_no_value() -> Result<()> {
    let words = ["ant", "anteater", "bee"];
    let trie = TrieStructure::build(&words);

    assert!(trie.find("ante").is_some());
    assert!(!trie.contains("ante"));
    assert!(trie.find("antelope").is_none());
    assert!(trie.find("c").is_none());
    Ok(())
}
