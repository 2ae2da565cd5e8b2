//! # typotrie
//!
//! Typo-tolerant lookup of identifiers and words: given a dictionary and a
//! string the user actually typed, find the entries they probably meant.
//!
//! ## Features
//!
//! - Compact, flat trie over a sorted dictionary
//! - Branch-and-bound fuzzy search with admissible pruning
//! - Keyboard-aware edit distance (adjacent keys, swapped keys, shift slips)
//! - Poisson-weighted suggestion probabilities
//! - Lazily resolved payloads, so one spelling can stand for many values
//! - Atomic snapshot swap and parallel batch lookups
//!
//! ## Example
//!
//! ```
//! use typotrie::prelude::*;
//!
//! let engine = TypoEngine::new(Lexicon::from_words(["apple", "apples", "apply"]));
//! let suggestions = engine.lookup("aplpe");
//! assert_eq!(suggestions[0].value, "apple");
//! ```

pub mod cli;
pub mod config;
pub mod cost;
pub mod engine;
pub mod error;
pub mod levenshtein;
pub mod lexicon;
pub mod probability;
pub mod search;
pub mod trie;
pub mod workspace;

pub mod prelude {
    pub use crate::config::{EngineConfig, KeyboardCostConfig, LookupConfig};
    pub use crate::cost::{CostModel, KeyboardCostModel, UnitCostModel};
    pub use crate::engine::TypoEngine;
    pub use crate::error::{Result, TypoError};
    pub use crate::levenshtein::distance;
    pub use crate::lexicon::Lexicon;
    pub use crate::probability::{ProbabilityModel, TypoProbability};
    pub use crate::search::{Alternative, FuzzySearch, Generator, Scored, WeightedMatch, from_fn};
    pub use crate::trie::TrieStructure;
    pub use crate::workspace::Workspace;
}

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
