//! Search results and lazy payload resolution.

use std::sync::Arc;

use serde::{Deserialize, Serialize};

/// A dictionary spelling retained by the search, with its probability.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeightedMatch {
    /// Probability that the user meant this spelling.
    pub probability: f64,
    /// Exact typo distance between the spelling and the typed string.
    pub distance: f32,
    /// The dictionary spelling.
    pub spelling: String,
}

/// A caller payload offered as an alternative to what was typed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Alternative<V> {
    /// Probability of the spelling this payload was resolved from.
    pub probability: f64,
    /// The payload.
    pub value: V,
}

/// Resolves a matched spelling to the payloads that carry it.
///
/// One spelling may stand for several payloads (overloads, shadowed names),
/// so a lookup yields zero or more values, in the order they should be offered.
pub trait Generator<V> {
    /// Payloads for `spelling`.
    fn lookup(&self, spelling: &str) -> Vec<V>;
}

impl<V, G: Generator<V> + ?Sized> Generator<V> for &G {
    fn lookup(&self, spelling: &str) -> Vec<V> {
        (**self).lookup(spelling)
    }
}

impl<V, G: Generator<V> + ?Sized> Generator<V> for Arc<G> {
    fn lookup(&self, spelling: &str) -> Vec<V> {
        (**self).lookup(spelling)
    }
}

/// [`Generator`] backed by a closure. Built with [`from_fn`].
#[derive(Debug, Clone, Copy)]
pub struct FnGenerator<F>(F);

/// Wrap a closure as a [`Generator`].
pub fn from_fn<V, F: Fn(&str) -> Vec<V>>(f: F) -> FnGenerator<F> {
    FnGenerator(f)
}

impl<V, F: Fn(&str) -> Vec<V>> Generator<V> for FnGenerator<F> {
    fn lookup(&self, spelling: &str) -> Vec<V> {
        (self.0)(spelling)
    }
}

/// Orders matches by descending probability; ties keep traversal order.
///
/// Uses the IEEE total order, so a NaN probability sorts deterministically
/// instead of scrambling the neighbours it is compared against.
pub fn rank(matches: &mut [WeightedMatch]) {
    matches.sort_by(|a, b| b.probability.total_cmp(&a.probability));
}

/// Outcome of a fuzzy lookup.
#[derive(Debug)]
pub enum Scored<V, G> {
    /// Nothing in the dictionary is close enough.
    Empty,
    /// At least one alternative, resolved on demand.
    Found(Extractor<V, G>),
}

impl<V, G: Generator<V>> Scored<V, G> {
    pub(crate) fn new(generator: G, matches: Vec<WeightedMatch>) -> Self {
        if matches.is_empty() {
            Scored::Empty
        } else {
            Scored::Found(Extractor::new(generator, matches))
        }
    }

    /// Whether no spelling was retained.
    pub fn is_empty(&self) -> bool {
        matches!(self, Scored::Empty)
    }

    /// The retained spellings, in traversal order.
    pub fn matches(&self) -> &[WeightedMatch] {
        match self {
            Scored::Empty => &[],
            Scored::Found(extractor) => extractor.matches(),
        }
    }

    /// Resolve every payload, most probable spelling first.
    pub fn into_ranked(self) -> Vec<Alternative<V>> {
        match self {
            Scored::Empty => Vec::new(),
            Scored::Found(mut extractor) => {
                extractor.rank();
                extractor.collect()
            }
        }
    }
}

impl<V, G: Generator<V>> IntoIterator for Scored<V, G> {
    type Item = Alternative<V>;
    type IntoIter = std::iter::Flatten<std::option::IntoIter<Extractor<V, G>>>;

    fn into_iter(self) -> Self::IntoIter {
        let extractor = match self {
            Scored::Empty => None,
            Scored::Found(extractor) => Some(extractor),
        };
        extractor.into_iter().flatten()
    }
}

/// Iterator over alternatives that calls the generator only when the next
/// spelling's payloads are needed.
#[derive(Debug)]
pub struct Extractor<V, G> {
    generator: G,
    matches: Vec<WeightedMatch>,
    next: usize,
    pending: std::vec::IntoIter<V>,
    probability: f64,
}

impl<V, G: Generator<V>> Extractor<V, G> {
    fn new(generator: G, matches: Vec<WeightedMatch>) -> Self {
        Extractor {
            generator,
            matches,
            next: 0,
            pending: Vec::new().into_iter(),
            probability: 0.0,
        }
    }

    /// All retained spellings, including the ones already consumed.
    pub fn matches(&self) -> &[WeightedMatch] {
        &self.matches
    }

    /// Reorder the spellings not yet consumed by descending probability.
    pub fn rank(&mut self) {
        rank(&mut self.matches[self.next..]);
    }
}

impl<V, G: Generator<V>> Iterator for Extractor<V, G> {
    type Item = Alternative<V>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if let Some(value) = self.pending.next() {
                return Some(Alternative {
                    probability: self.probability,
                    value,
                });
            }
            let next = self.matches.get(self.next)?;
            self.next += 1;
            self.probability = next.probability;
            self.pending = self.generator.lookup(&next.spelling).into_iter();
        }
    }
}

#[cfg(test)]
mod tests {
    use std::cell::Cell;

    use super::*;

    fn weighted(spelling: &str, probability: f64) -> WeightedMatch {
        WeightedMatch {
            probability,
            distance: 1.0,
            spelling: spelling.to_string(),
        }
    }

    #[test]
    fn test_empty_sentinel() {
        let scored: Scored<String, _> = Scored::new(from_fn(|s: &str| vec![s.to_string()]), vec![]);
        assert!(scored.is_empty());
        assert!(scored.matches().is_empty());
        assert_eq!(scored.into_iter().count(), 0);
    }

    #[test]
    fn test_payloads_resolved_lazily() {
        let calls = Cell::new(0);
        let generator = from_fn(|s: &str| {
            calls.set(calls.get() + 1);
            vec![format!("{s}#1"), format!("{s}#2")]
        });
        let scored = Scored::new(&generator, vec![weighted("foo", 0.5), weighted("bar", 0.25)]);

        let mut iter = scored.into_iter();
        assert_eq!(calls.get(), 0);
        let first = iter.next().unwrap();
        assert_eq!(first.value, "foo#1");
        assert_eq!(first.probability, 0.5);
        assert_eq!(calls.get(), 1);
        assert_eq!(iter.next().unwrap().value, "foo#2");
        assert_eq!(calls.get(), 1);
        assert_eq!(iter.next().unwrap().value, "bar#1");
        assert_eq!(calls.get(), 2);
    }

    #[test]
    fn test_spelling_without_payloads_is_skipped() {
        let generator = from_fn(|s: &str| if s == "gone" { vec![] } else { vec![s.len()] });
        let scored = Scored::new(generator, vec![weighted("gone", 0.9), weighted("kept", 0.1)]);
        let values: Vec<usize> = scored.into_iter().map(|a| a.value).collect();
        assert_eq!(values, vec![4]);
    }

    #[test]
    fn test_into_ranked() {
        let generator = from_fn(|s: &str| vec![s.to_string()]);
        let scored = Scored::new(
            generator,
            vec![weighted("low", 0.1), weighted("high", 0.9), weighted("mid", 0.5)],
        );
        let ranked: Vec<String> = scored.into_ranked().into_iter().map(|a| a.value).collect();
        assert_eq!(ranked, vec!["high", "mid", "low"]);
    }

    #[test]
    fn test_rank_is_total_with_nan() {
        let mut matches = vec![
            weighted("low", 0.1),
            weighted("nan", f64::NAN),
            weighted("high", 0.9),
            weighted("tie_a", 0.5),
            weighted("tie_b", 0.5),
        ];
        rank(&mut matches);
        let order: Vec<&str> = matches.iter().map(|m| m.spelling.as_str()).collect();
        assert_eq!(order, vec!["nan", "high", "tie_a", "tie_b", "low"]);
    }
}
