//! Dictionary snapshots mapping spellings to caller payloads.

use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::Path;
use std::time::Instant;

use ahash::AHashMap;

use crate::cost::CostModel;
use crate::error::{Result, TypoError};
use crate::probability::ProbabilityModel;
use crate::search::{FuzzySearch, Generator};
use crate::trie::TrieStructure;

/// An immutable dictionary of spellings, each carrying one or more payloads.
///
/// Entries are sorted by spelling and entries that share a spelling are
/// merged, keeping their payloads in insertion order. The trie indexes the
/// same sorted spellings, so a trie value index is also a lexicon index.
#[derive(Debug, Clone)]
pub struct Lexicon<V> {
    /// Sorted, unique spellings.
    names: Vec<String>,
    /// Payloads per spelling (parallel array).
    payloads: Vec<Vec<V>>,
    /// Spelling to index, for constant-time exact lookups.
    index: AHashMap<String, usize>,
    structure: TrieStructure,
}

impl<V> Lexicon<V> {
    /// Build a lexicon from `(spelling, payload)` pairs in any order.
    pub fn from_entries<I, S>(entries: I) -> Self
    where
        I: IntoIterator<Item = (S, V)>,
        S: Into<String>,
    {
        let start = Instant::now();
        let mut entries: Vec<(String, V)> = entries
            .into_iter()
            .map(|(name, value)| (name.into(), value))
            .collect();
        // Stable, so payloads of one spelling keep their order
        entries.sort_by(|a, b| a.0.cmp(&b.0));

        let mut names: Vec<String> = Vec::with_capacity(entries.len());
        let mut payloads: Vec<Vec<V>> = Vec::with_capacity(entries.len());
        for (name, value) in entries {
            if names.last() == Some(&name) {
                if let Some(group) = payloads.last_mut() {
                    group.push(value);
                }
            } else {
                names.push(name);
                payloads.push(vec![value]);
            }
        }

        let index = names
            .iter()
            .enumerate()
            .map(|(i, name)| (name.clone(), i))
            .collect();
        let structure = TrieStructure::build(&names);

        log::debug!(
            "built lexicon: {} spellings, {} trie nodes, depth {} in {:?}",
            names.len(),
            structure.node_count(),
            structure.max_depth(),
            start.elapsed()
        );

        Lexicon {
            names,
            payloads,
            index,
            structure,
        }
    }

    /// Number of distinct spellings.
    pub fn len(&self) -> usize {
        self.names.len()
    }

    /// Whether the lexicon has no spellings.
    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    /// All spellings in sorted order.
    pub fn names(&self) -> &[String] {
        &self.names
    }

    /// The trie over [`names`](Self::names).
    pub fn structure(&self) -> &TrieStructure {
        &self.structure
    }

    /// Whether `spelling` is in the lexicon.
    pub fn contains(&self, spelling: &str) -> bool {
        self.index.contains_key(spelling)
    }

    /// Payloads stored under `spelling`.
    pub fn get(&self, spelling: &str) -> Option<&[V]> {
        self.index
            .get(spelling)
            .map(|&i| self.payloads[i].as_slice())
    }

    /// Every entry whose spelling starts with `prefix`, in sorted order.
    pub fn completions<'a>(
        &'a self,
        prefix: &str,
    ) -> impl Iterator<Item = (&'a str, &'a [V])> + 'a {
        self.structure
            .prefix_range(prefix)
            .map(move |i| (self.names[i].as_str(), self.payloads[i].as_slice()))
    }

    /// A fuzzy search over this lexicon's trie.
    pub fn search<'a, C, P>(&'a self, costs: &'a C, probability: &'a P) -> FuzzySearch<'a, C, P>
    where
        C: CostModel + ?Sized,
        P: ProbabilityModel + ?Sized,
    {
        FuzzySearch::new(&self.structure, costs, probability)
    }
}

impl Lexicon<String> {
    /// Lexicon whose payload for each spelling is the spelling itself.
    pub fn from_words<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::from_entries(words.into_iter().map(|word| {
            let word = word.into();
            (word.clone(), word)
        }))
    }

    /// Load a word list with one entry per line. Surrounding whitespace is
    /// trimmed; blank lines and lines starting with `#` are skipped.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let reader = BufReader::new(File::open(path)?);

        let mut words = Vec::new();
        for (number, line) in reader.lines().enumerate() {
            let line = line.map_err(|e| match e.kind() {
                io::ErrorKind::InvalidData => TypoError::dictionary(format!(
                    "{}:{}: not valid UTF-8",
                    path.display(),
                    number + 1
                )),
                _ => TypoError::Io(e),
            })?;
            let word = line.trim();
            if word.is_empty() || word.starts_with('#') {
                continue;
            }
            words.push(word.to_string());
        }

        log::debug!("read {} entries from {}", words.len(), path.display());
        Ok(Self::from_words(words))
    }
}

impl<V: Clone> Generator<V> for Lexicon<V> {
    fn lookup(&self, spelling: &str) -> Vec<V> {
        self.get(spelling).map(<[V]>::to_vec).unwrap_or_default()
    }
}
