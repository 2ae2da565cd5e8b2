//! Cost models for typo-weighted edit distance.
//!
//! A [`CostModel`] prices the elementary typing mistakes (hitting the wrong
//! key, dropping a key, pressing an extra key, swapping two keys, getting the
//! shift key wrong). The edit-distance routines in [`crate::levenshtein`] and
//! [`crate::search`] combine these primitives into per-position costs through
//! the helpers in this module, so both see exactly the same numbers.
//!
//! # Admissibility
//!
//! The fuzzy search prunes with [`CostModel::min_insert_cost`] and
//! [`CostModel::min_swap_cost`]. Each must be a true lower bound of every
//! concrete insert or swap cost the model can produce, and every cost must be
//! non-negative. A model that breaks this silently loses matches.

pub mod keyboard;
pub mod unit;

pub use keyboard::KeyboardCostModel;
pub use unit::UnitCostModel;

/// Pure per-character cost functions used by the edit-distance recurrence.
pub trait CostModel: Send + Sync {
    /// Keyboard proximity cost of typing `b` when `a` was meant.
    /// Symmetric, and zero iff `a == b`.
    fn char_distance(&self, a: char, b: char) -> f32;

    /// Cost of leaving out a character that was meant.
    fn delete_cost(&self) -> f32;

    /// Lower bound of any value [`insert_cost`] can return.
    fn min_insert_cost(&self) -> f32;

    /// Lower bound of any value [`swap_cost`] can return.
    fn min_swap_cost(&self) -> f32;

    /// Fixed part of the cost of typing two adjacent characters in reverse order.
    fn swap_cost(&self) -> f32;

    /// Cost of an accidental extra key press, given the (clamped, >= 1)
    /// keyboard distance to the nearest plausible intended key.
    fn double_type_cost(&self, distance: f32) -> f32;

    /// Shift penalty for an inserted character.
    fn insert_shift_cost(&self, prev_upper: bool, inserted_upper: bool, intended_upper: bool)
    -> f32;

    /// Shift penalty for a replaced character.
    fn replace_shift_cost(
        &self,
        prev_upper: bool,
        typed_upper: bool,
        intended_upper: bool,
        next_upper: bool,
    ) -> f32;
}

impl<C: CostModel + ?Sized> CostModel for &C {
    fn char_distance(&self, a: char, b: char) -> f32 {
        (**self).char_distance(a, b)
    }
    fn delete_cost(&self) -> f32 {
        (**self).delete_cost()
    }
    fn min_insert_cost(&self) -> f32 {
        (**self).min_insert_cost()
    }
    fn min_swap_cost(&self) -> f32 {
        (**self).min_swap_cost()
    }
    fn swap_cost(&self) -> f32 {
        (**self).swap_cost()
    }
    fn double_type_cost(&self, distance: f32) -> f32 {
        (**self).double_type_cost(distance)
    }
    fn insert_shift_cost(
        &self,
        prev_upper: bool,
        inserted_upper: bool,
        intended_upper: bool,
    ) -> f32 {
        (**self).insert_shift_cost(prev_upper, inserted_upper, intended_upper)
    }
    fn replace_shift_cost(
        &self,
        prev_upper: bool,
        typed_upper: bool,
        intended_upper: bool,
        next_upper: bool,
    ) -> f32 {
        (**self).replace_shift_cost(prev_upper, typed_upper, intended_upper, next_upper)
    }
}

/// Cost of accidentally typing `typed[j]` while meaning to type `meant`
/// (without advancing through the intended string).
#[inline]
pub(crate) fn insert_cost<C: CostModel + ?Sized>(
    costs: &C,
    meant: char,
    typed: &[char],
    j: usize,
) -> f32 {
    let inserted = typed[j];
    let to_meant = costs.char_distance(meant, inserted).max(1.0);
    if j == 0 {
        return costs.double_type_cost(to_meant);
    }
    // Slipped onto a key next to the one just pressed, or the one about to be.
    let before = typed[j - 1];
    let to_before = costs.char_distance(before, inserted).max(1.0);
    costs.insert_shift_cost(
        before.is_uppercase(),
        inserted.is_uppercase(),
        meant.is_uppercase(),
    ) + costs.double_type_cost(to_before.min(to_meant))
}

/// Cost of typing `typed[j]` where `meant` was intended. `next` is the
/// intended character after `meant`, if known.
#[inline]
pub(crate) fn replace_cost<C: CostModel + ?Sized>(
    costs: &C,
    meant: char,
    next: Option<char>,
    typed: &[char],
    j: usize,
) -> f32 {
    let actual = typed[j];
    let next = next.unwrap_or(meant);
    let prev = if j > 0 { typed[j - 1] } else { next };
    costs.replace_shift_cost(
        prev.is_uppercase(),
        actual.is_uppercase(),
        meant.is_uppercase(),
        next.is_uppercase(),
    ) + costs.char_distance(meant, actual)
}

/// Replace cost when the intended character following `meant` is not known
/// yet: the cheaper of the two possible case states of that character.
///
/// Never exceeds [`replace_cost`] for any concrete lookahead.
#[inline]
pub(crate) fn replace_cost_floor<C: CostModel + ?Sized>(
    costs: &C,
    meant: char,
    typed: &[char],
    j: usize,
) -> f32 {
    let actual = typed[j];
    let typed_upper = actual.is_uppercase();
    let meant_upper = meant.is_uppercase();
    let shift = if j > 0 {
        let prev_upper = typed[j - 1].is_uppercase();
        costs
            .replace_shift_cost(prev_upper, typed_upper, meant_upper, false)
            .min(costs.replace_shift_cost(prev_upper, typed_upper, meant_upper, true))
    } else {
        // With no previous typed character the lookahead stands in for it.
        costs
            .replace_shift_cost(false, typed_upper, meant_upper, false)
            .min(costs.replace_shift_cost(true, typed_upper, meant_upper, true))
    };
    shift + costs.char_distance(meant, actual)
}

/// Cost of typing the intended pair `first, second` as `typed[j], typed[j + 1]`
/// with the two keys pressed in reverse order.
///
/// Evaluated on the swapped view: `second` is scored at `j` with `first` as
/// its lookahead, `first` is scored at `j + 1` with no lookahead.
#[inline]
pub(crate) fn swap_cost<C: CostModel + ?Sized>(
    costs: &C,
    first: char,
    second: char,
    typed: &[char],
    j: usize,
) -> f32 {
    costs.swap_cost()
        + replace_cost(costs, second, Some(first), typed, j)
        + replace_cost(costs, first, None, typed, j + 1)
}
