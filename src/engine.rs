//! Engine tying a swappable lexicon snapshot to its cost and probability models.
//!
//! The engine answers "did you mean" lookups against the current [`Lexicon`].
//! [`TypoEngine::rebuild`] replaces the snapshot atomically: a lookup that is
//! already running keeps the snapshot it started with, and every lookup that
//! starts afterwards sees the new one.

use std::sync::Arc;
use std::time::Instant;

use parking_lot::RwLock;
use rayon::prelude::*;

use crate::config::{EngineConfig, LookupConfig};
use crate::cost::{CostModel, KeyboardCostModel};
use crate::error::{Result, TypoError};
use crate::levenshtein;
use crate::lexicon::Lexicon;
use crate::probability::{ProbabilityModel, TypoProbability};
use crate::search::{Alternative, WeightedMatch};

/// Typo-tolerant lookup over a replaceable dictionary snapshot.
#[derive(Debug)]
pub struct TypoEngine<V, C = KeyboardCostModel, P = TypoProbability> {
    lexicon: RwLock<Arc<Lexicon<V>>>,
    costs: C,
    probability: P,
    config: LookupConfig,
}

impl<V> TypoEngine<V> {
    /// Engine with the keyboard cost model and default lookup parameters.
    pub fn new(lexicon: Lexicon<V>) -> Self {
        Self::with_models(
            lexicon,
            KeyboardCostModel::default(),
            TypoProbability,
            LookupConfig::default(),
        )
    }

    /// Engine configured from an [`EngineConfig`], validated first.
    pub fn from_config(lexicon: Lexicon<V>, config: &EngineConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self::with_models(
            lexicon,
            KeyboardCostModel::new(config.costs.clone()),
            TypoProbability,
            config.lookup.clone(),
        ))
    }
}

impl<V, C, P> TypoEngine<V, C, P>
where
    C: CostModel,
    P: ProbabilityModel,
{
    /// Engine with explicit models.
    pub fn with_models(lexicon: Lexicon<V>, costs: C, probability: P, config: LookupConfig) -> Self {
        TypoEngine {
            lexicon: RwLock::new(Arc::new(lexicon)),
            costs,
            probability,
            config,
        }
    }

    /// Default lookup parameters.
    pub fn config(&self) -> &LookupConfig {
        &self.config
    }

    /// The cost model.
    pub fn costs(&self) -> &C {
        &self.costs
    }

    /// The current snapshot.
    pub fn snapshot(&self) -> Arc<Lexicon<V>> {
        self.lexicon.read().clone()
    }

    /// Publish `lexicon` as the new snapshot and return the previous one.
    pub fn rebuild(&self, lexicon: Lexicon<V>) -> Arc<Lexicon<V>> {
        let entries = lexicon.len();
        let mut guard = self.lexicon.write();
        let previous = std::mem::replace(&mut *guard, Arc::new(lexicon));
        drop(guard);
        log::info!(
            "swapped lexicon snapshot: {} -> {} entries",
            previous.len(),
            entries
        );
        previous
    }

    /// Spellings close to `typed` in the current snapshot, in traversal order.
    pub fn matches(&self, typed: &str) -> Vec<WeightedMatch> {
        let snapshot = self.snapshot();
        snapshot
            .search(&self.costs, &self.probability)
            .matches(typed, &self.config)
    }

    /// Typo distance between two strings under this engine's cost model.
    pub fn distance(&self, meant: &str, typed: &str) -> f32 {
        levenshtein::distance(&self.costs, meant, typed)
    }
}

impl<V, C, P> TypoEngine<V, C, P>
where
    V: Clone,
    C: CostModel,
    P: ProbabilityModel,
{
    /// Payloads whose spelling is close to `typed`, most probable first,
    /// capped at `max_results`.
    pub fn lookup(&self, typed: &str) -> Vec<Alternative<V>> {
        self.ranked(typed, &self.config)
    }

    /// [`lookup`](Self::lookup) with per-call parameters.
    ///
    /// Fails with [`TypoError::InvalidArgument`] if `config` does not validate.
    pub fn lookup_with(
        &self,
        typed: &str,
        config: &LookupConfig,
    ) -> Result<Vec<Alternative<V>>> {
        config.validate().map_err(|error| match error {
            TypoError::Config(message) => TypoError::invalid_argument(message),
            other => other,
        })?;
        Ok(self.ranked(typed, config))
    }

    fn ranked(&self, typed: &str, config: &LookupConfig) -> Vec<Alternative<V>> {
        let snapshot = self.snapshot();
        let scored = snapshot
            .search(&self.costs, &self.probability)
            .lookup(snapshot.as_ref(), typed, config);
        let mut ranked = scored.into_ranked();
        if let Some(limit) = config.max_results {
            ranked.truncate(limit);
        }
        ranked
    }

    /// Look up many typed strings in parallel against one snapshot.
    /// Results are in input order.
    pub fn lookup_many<S>(&self, typed: &[S]) -> Vec<Vec<Alternative<V>>>
    where
        S: AsRef<str> + Sync,
        V: Send + Sync,
    {
        let start = Instant::now();
        let snapshot = self.snapshot();
        let search = snapshot.search(&self.costs, &self.probability);
        let results: Vec<Vec<Alternative<V>>> = typed
            .par_iter()
            .map(|t| {
                let mut ranked = search
                    .lookup(snapshot.as_ref(), t.as_ref(), &self.config)
                    .into_ranked();
                if let Some(limit) = self.config.max_results {
                    ranked.truncate(limit);
                }
                ranked
            })
            .collect();
        log::debug!(
            "batch lookup of {} strings in {:?}",
            typed.len(),
            start.elapsed()
        );
        results
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cost::UnitCostModel;

    fn engine() -> TypoEngine<&'static str> {
        TypoEngine::new(Lexicon::from_entries([
            ("apple", "fruit"),
            ("apples", "fruits"),
            ("apply", "verb"),
            ("apply", "method"),
        ]))
    }

    #[test]
    fn test_lookup_ranks_best_spelling_first() {
        let engine = engine();
        let results = engine.lookup("aplpe");
        assert_eq!(results[0].value, "fruit");
        for pair in results.windows(2) {
            assert!(pair[0].probability >= pair[1].probability);
        }
    }

    #[test]
    fn test_exact_spelling_is_not_suggested() {
        let engine = engine();
        let results = engine.lookup("apply");
        assert!(results.iter().all(|a| a.value != "verb" && a.value != "method"));
    }

    #[test]
    fn test_shared_spelling_yields_every_payload() {
        let engine = TypoEngine::with_models(
            Lexicon::from_entries([("apply", "verb"), ("apply", "method")]),
            UnitCostModel::levenshtein(),
            TypoProbability,
            LookupConfig::default().with_max_distance(1.0),
        );
        let values: Vec<&str> = engine.lookup("aply").into_iter().map(|a| a.value).collect();
        assert_eq!(values, vec!["verb", "method"]);
    }

    #[test]
    fn test_max_results_caps_output() {
        let engine = TypoEngine::with_models(
            Lexicon::from_words(["cat", "cot", "cut", "cit"]),
            UnitCostModel::levenshtein(),
            TypoProbability,
            LookupConfig::default().with_max_results(2),
        );
        assert_eq!(engine.lookup("cxt").len(), 2);
    }

    #[test]
    fn test_rebuild_swaps_snapshot() {
        let engine = engine();
        let before = engine.snapshot();

        let previous = engine.rebuild(Lexicon::from_entries([("banana", "fruit")]));
        assert!(Arc::ptr_eq(&before, &previous));
        assert_eq!(before.len(), 3);
        assert_eq!(engine.snapshot().len(), 1);
        assert!(engine.lookup("aplpe").is_empty());
        assert_eq!(engine.lookup("banama")[0].value, "fruit");
    }

    #[test]
    fn test_lookup_many_preserves_order() {
        let engine = engine();
        let typed = ["aplpe", "zzzzzzzz", "applz"];
        let results = engine.lookup_many(&typed);
        assert_eq!(results.len(), 3);
        assert_eq!(results[0], engine.lookup("aplpe"));
        assert!(results[1].is_empty());
        assert_eq!(results[2], engine.lookup("applz"));
    }

    #[test]
    fn test_from_config_validates() {
        let mut config = EngineConfig::default();
        config.lookup.max_distance = -1.0;
        assert!(TypoEngine::from_config(Lexicon::from_words(["a"]), &config).is_err());
    }

    #[test]
    fn test_lookup_with_rejects_invalid_parameters() {
        let engine = engine();
        let invalid = LookupConfig::default().with_max_distance(-1.0);
        match engine.lookup_with("aplpe", &invalid) {
            Err(TypoError::InvalidArgument(message)) => assert!(message.contains("max_distance")),
            other => panic!("expected invalid argument, got {other:?}"),
        }

        let invalid = LookupConfig::default().with_min_probability(1.5);
        assert!(matches!(
            engine.lookup_with("aplpe", &invalid),
            Err(TypoError::InvalidArgument(_))
        ));
    }

    #[test]
    fn test_lookup_with_overrides_engine_parameters() {
        let engine = engine();
        let narrow = LookupConfig::default().with_max_results(1);
        let results = engine.lookup_with("aplpe", &narrow).unwrap();
        assert_eq!(results.len(), 1);
        assert_eq!(results[0].value, "fruit");

        let nothing = LookupConfig::default().with_max_distance(0.0);
        assert!(engine.lookup_with("aplpe", &nothing).unwrap().is_empty());
    }

    #[test]
    fn test_distance_uses_engine_costs() {
        let engine = engine();
        assert_eq!(engine.distance("apple", "apple"), 0.0);
        assert!(engine.distance("apple", "aplpe") < engine.distance("apple", "axxle"));
    }
}
