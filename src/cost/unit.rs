//! Unit cost model: every edit costs one, case and keyboard layout are ignored.
//!
//! With transpositions disabled this reduces the typo distance to the
//! classic Levenshtein distance; with them enabled it becomes the restricted
//! Damerau-Levenshtein (optimal string alignment) distance.

use crate::cost::CostModel;

/// Classic unit costs.
#[derive(Debug, Clone, Copy)]
pub struct UnitCostModel {
    /// Whether swapping two adjacent characters counts as a single edit.
    pub transpositions: bool,
}

impl UnitCostModel {
    /// Plain Levenshtein: insert, delete and replace only.
    pub fn levenshtein() -> Self {
        UnitCostModel {
            transpositions: false,
        }
    }

    /// Optimal string alignment: adjacent swaps cost one.
    pub fn damerau() -> Self {
        UnitCostModel {
            transpositions: true,
        }
    }
}

impl Default for UnitCostModel {
    fn default() -> Self {
        Self::levenshtein()
    }
}

impl CostModel for UnitCostModel {
    fn char_distance(&self, a: char, b: char) -> f32 {
        if a == b { 0.0 } else { 1.0 }
    }

    fn delete_cost(&self) -> f32 {
        1.0
    }

    fn min_insert_cost(&self) -> f32 {
        1.0
    }

    fn min_swap_cost(&self) -> f32 {
        self.swap_cost()
    }

    fn swap_cost(&self) -> f32 {
        if self.transpositions {
            1.0
        } else {
            f32::INFINITY
        }
    }

    fn double_type_cost(&self, _distance: f32) -> f32 {
        1.0
    }

    fn insert_shift_cost(&self, _: bool, _: bool, _: bool) -> f32 {
        0.0
    }

    fn replace_shift_cost(&self, _: bool, _: bool, _: bool, _: bool) -> f32 {
        0.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_swap_disabled_by_default() {
        let costs = UnitCostModel::default();
        assert!(costs.swap_cost().is_infinite());
        assert_eq!(UnitCostModel::damerau().swap_cost(), 1.0);
    }

    #[test]
    fn test_unit_char_distance() {
        let costs = UnitCostModel::levenshtein();
        assert_eq!(costs.char_distance('a', 'a'), 0.0);
        assert_eq!(costs.char_distance('a', 'A'), 1.0);
    }
}
