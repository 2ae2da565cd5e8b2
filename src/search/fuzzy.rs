//! Branch-and-bound typo search over the trie.

use std::time::Instant;

use crate::config::LookupConfig;
use crate::cost::{CostModel, insert_cost, replace_cost_floor, swap_cost};
use crate::levenshtein::levenshtein_distance;
use crate::probability::ProbabilityModel;
use crate::search::frame::SearchFrame;
use crate::search::results::{Generator, Scored, WeightedMatch};
use crate::trie::TrieStructure;
use crate::workspace::{Workspace, with_workspace};

/// Fuzzy lookup of typed strings against one trie.
///
/// The walk keeps one [`SearchFrame`] per trie depth. Each frame's row holds,
/// for every prefix of the typed string, a lower bound on the typo distance
/// from the frame's trie prefix. The row of a child is computed from its
/// parent's row and, for swaps, its grandparent's row. A child whose bound
/// over all completions exceeds `max_distance` is never entered.
#[derive(Debug, Clone, Copy)]
pub struct FuzzySearch<'a, C: ?Sized, P: ?Sized> {
    structure: &'a TrieStructure,
    costs: &'a C,
    probability: &'a P,
}

impl<'a, C, P> FuzzySearch<'a, C, P>
where
    C: CostModel + ?Sized,
    P: ProbabilityModel + ?Sized,
{
    /// Search `structure` with the given cost and probability models.
    pub fn new(structure: &'a TrieStructure, costs: &'a C, probability: &'a P) -> Self {
        FuzzySearch {
            structure,
            costs,
            probability,
        }
    }

    /// Alternatives to `typed`, with payloads resolved through `generator`.
    /// The exact spelling of `typed` is never among them.
    pub fn lookup<V, G: Generator<V>>(
        &self,
        generator: G,
        typed: &str,
        config: &LookupConfig,
    ) -> Scored<V, G> {
        let matches = with_workspace(|workspace| self.matches_in(typed, config, workspace));
        Scored::new(generator, matches)
    }

    /// Retained spellings for `typed`, using this thread's workspace.
    pub fn matches(&self, typed: &str, config: &LookupConfig) -> Vec<WeightedMatch> {
        with_workspace(|workspace| self.matches_in(typed, config, workspace))
    }

    /// Retained spellings for `typed`, in traversal order.
    pub fn matches_in(
        &self,
        typed: &str,
        config: &LookupConfig,
        workspace: &mut Workspace,
    ) -> Vec<WeightedMatch> {
        let start = Instant::now();
        let mut typed_chars = std::mem::take(&mut workspace.typed);
        typed_chars.clear();
        typed_chars.extend(typed.chars());

        let matches = self.search(&typed_chars, config, workspace);
        workspace.typed = typed_chars;

        log::debug!(
            "fuzzy lookup {:?}: {} matches within {} in {:?}",
            typed,
            matches.len(),
            config.max_distance,
            start.elapsed()
        );
        matches
    }

    fn search(
        &self,
        typed: &[char],
        config: &LookupConfig,
        workspace: &mut Workspace,
    ) -> Vec<WeightedMatch> {
        let structure = self.structure;
        let costs = self.costs;
        let max_distance = config.max_distance;
        let typed_len = typed.len();
        let delete = costs.delete_cost();
        let min_swap = costs.min_swap_cost();

        let Workspace {
            table,
            frames,
            prefix,
            ..
        } = workspace;

        let mut result = Vec::new();

        // Looked up only to be left out
        let exact = structure.exact_node(typed);

        if frames.is_empty() {
            frames.push(SearchFrame::default());
        }
        let root = &mut frames[0];
        root.enter(structure.root(), structure.child_count(structure.root()));
        root.reset_row(typed_len);
        let min_insert = costs.min_insert_cost();
        for j in 1..=typed_len {
            root.row[j] = root.row[j - 1] + min_insert;
        }
        root.distance = root.row[typed_len];
        root.min_distance = 0.0;

        prefix.clear();
        let mut level = 0usize;
        let mut pruned = 0usize;

        loop {
            if frames[level].has_next_child() {
                if level + 1 >= frames.len() {
                    frames.push(SearchFrame::default());
                }
                let (head, tail) = frames.split_at_mut(level + 1);
                let (ancestors, current) = head.split_at_mut(level);
                let current = &mut current[0];
                let grandparent = ancestors.last();
                let child = &mut tail[0];

                let edge = structure.children(current.node)[current.next_child];
                current.next_child += 1;
                let c = edge.ch;
                prefix.truncate(level);
                prefix.push(c);

                child.reset_row(typed_len);
                child.row[0] = current.row[0] + delete;
                for j in 1..=typed_len {
                    let del = current.row[j] + delete;
                    let ins = child.row[j - 1] + insert_cost(costs, c, typed, j - 1);
                    let rep = current.row[j - 1] + replace_cost_floor(costs, c, typed, j - 1);
                    let mut best = del.min(ins).min(rep);
                    if let Some(grandparent) = grandparent.filter(|_| j > 1) {
                        let swp = grandparent.row[j - 2]
                            + swap_cost(costs, prefix[level - 1], c, typed, j - 2);
                        best = best.min(swp);
                    }
                    child.row[j] = best;
                }

                child.distance = child.row[typed_len];
                let mut min_distance = f32::MAX;
                for &cell in &child.row {
                    min_distance = min_distance.min(cell);
                }
                // A swap can step over this level entirely.
                for &cell in &current.row[..typed_len.saturating_sub(1)] {
                    min_distance = min_distance.min(cell + min_swap);
                }
                child.min_distance = min_distance;

                if min_distance <= max_distance {
                    child.enter(edge.node, structure.child_count(edge.node));
                    level += 1;
                } else {
                    pruned += 1;
                }
            } else {
                let current = &frames[level];
                if current.distance <= max_distance
                    && Some(current.node) != exact
                    && !structure.values_range(current.node).is_empty()
                {
                    let meant = &prefix[..level];
                    let distance = levenshtein_distance(costs, meant, typed, table);
                    if distance <= max_distance {
                        let probability = self.probability.probability_of(
                            distance as f64,
                            config.expected_distance,
                            max_distance as f64,
                        );
                        if probability > config.min_probability {
                            result.push(WeightedMatch {
                                probability,
                                distance,
                                spelling: meant.iter().collect(),
                            });
                        }
                    }
                }
                if level == 0 {
                    break;
                }
                level -= 1;
            }
        }

        log::trace!("pruned {pruned} subtrees for {typed_len}-character query");
        result
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cost::{KeyboardCostModel, UnitCostModel};
    use crate::probability::TypoProbability;

    fn spellings(matches: &[WeightedMatch]) -> Vec<String> {
        let mut spellings: Vec<String> = matches.iter().map(|m| m.spelling.clone()).collect();
        spellings.sort();
        spellings
    }

    fn config(max_distance: f32) -> LookupConfig {
        LookupConfig::default()
            .with_max_distance(max_distance)
            .with_min_probability(0.0)
    }

    #[test]
    fn test_exact_match_excluded_at_zero_budget() {
        let values = ["apple", "apples", "apply"];
        let trie = TrieStructure::build(&values);
        let costs = KeyboardCostModel::default();
        let search = FuzzySearch::new(&trie, &costs, &TypoProbability);
        for value in values {
            assert!(search.matches(value, &config(0.0)).is_empty(), "{value}");
        }
    }

    #[test]
    fn test_transposition_scenario() {
        let trie = TrieStructure::build(&["apple", "apples", "apply"]);
        let costs = KeyboardCostModel::default();
        let search = FuzzySearch::new(&trie, &costs, &TypoProbability);

        let matches = search.matches("aplpe", &config(2.0));
        let apple = matches.iter().find(|m| m.spelling == "apple").unwrap();
        for other in matches.iter().filter(|m| m.spelling != "apple") {
            assert!(apple.distance < other.distance);
            assert!(apple.probability > other.probability);
        }
    }

    #[test]
    fn test_unit_costs_find_classic_neighbours() {
        let trie = TrieStructure::build(&["cat", "cats", "cot", "dog", "scat"]);
        let costs = UnitCostModel::levenshtein();
        let search = FuzzySearch::new(&trie, &costs, &TypoProbability);

        let matches = search.matches("cat", &config(1.0));
        assert_eq!(spellings(&matches), vec!["cats", "cot", "scat"]);
        for m in &matches {
            assert_eq!(m.distance, 1.0);
        }
    }

    #[test]
    fn test_empty_typed_string() {
        let trie = TrieStructure::build(&["", "a", "ab"]);
        let costs = UnitCostModel::levenshtein();
        let search = FuzzySearch::new(&trie, &costs, &TypoProbability);

        // "" is the exact match and stays out
        let matches = search.matches("", &config(1.0));
        assert_eq!(spellings(&matches), vec!["a"]);
    }

    #[test]
    fn test_empty_dictionary_entry_can_be_suggested() {
        let trie = TrieStructure::build(&["", "xyz"]);
        let costs = UnitCostModel::levenshtein();
        let search = FuzzySearch::new(&trie, &costs, &TypoProbability);

        let matches = search.matches("q", &config(1.0));
        assert_eq!(spellings(&matches), vec![""]);
    }

    #[test]
    fn test_min_probability_filters() {
        let trie = TrieStructure::build(&["cat", "coats", "cot"]);
        let costs = UnitCostModel::levenshtein();
        let search = FuzzySearch::new(&trie, &costs, &TypoProbability);

        let all = search.matches("cat", &config(3.0));
        assert_eq!(spellings(&all), vec!["coats", "cot"]);

        let p_one = TypoProbability.probability_of(1.0, 1.0, 3.0);
        let strict = config(3.0).with_min_probability(p_one - 1e-9);
        assert_eq!(spellings(&search.matches("cat", &strict)), vec!["cot"]);
    }

    #[test]
    fn test_workspace_frames_grow_with_depth() {
        let trie = TrieStructure::build(&["abcdefgh"]);
        let costs = UnitCostModel::levenshtein();
        let search = FuzzySearch::new(&trie, &costs, &TypoProbability);
        let mut workspace = Workspace::new();

        let matches = search.matches_in("abcdefgx", &config(1.0), &mut workspace);
        assert_eq!(spellings(&matches), vec!["abcdefgh"]);
        assert_eq!(workspace.frame_capacity(), 9);
    }
}
