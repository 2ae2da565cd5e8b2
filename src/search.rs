//! Typo-tolerant search over a [`TrieStructure`](crate::trie::TrieStructure).
//!
//! [`FuzzySearch`] walks the trie depth first, extending one distance row per
//! trie level and pruning every subtree whose best possible completion is
//! already over budget. Retained spellings are rescored exactly, weighted by a
//! [`ProbabilityModel`](crate::probability::ProbabilityModel), and handed back
//! as a [`Scored`] collection that resolves caller payloads lazily through a
//! [`Generator`].

pub(crate) mod frame;
pub mod fuzzy;
pub mod results;

pub use fuzzy::FuzzySearch;
pub use results::{
    Alternative, Extractor, FnGenerator, Generator, Scored, WeightedMatch, from_fn, rank,
};
