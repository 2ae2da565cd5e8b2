//! Exact typo-weighted edit distance.
//!
//! `d[i][j]` is the cost of having meant the first `i` characters of `meant`
//! while having typed the first `j` characters of `typed`. Moving down drops an
//! intended character, moving right types an extra one, moving diagonally types
//! a (possibly wrong) character, and a two-by-two diagonal step types two
//! intended characters in swapped order.

use crate::cost::{CostModel, insert_cost, replace_cost, swap_cost};
use crate::workspace::{Workspace, with_workspace};

/// Make sure `scratch` holds at least `size` cells. Grows to at least twice
/// the previous size so repeated growth stays amortized; never shrinks.
fn reserve_table(scratch: &mut Vec<f32>, size: usize) {
    if scratch.len() < size {
        let grown = size.max(2 * scratch.len());
        scratch.resize(grown, 0.0);
    }
}

/// Typo distance between `meant` and `typed`, using `scratch` as the table.
pub fn levenshtein_distance<C: CostModel + ?Sized>(
    costs: &C,
    meant: &[char],
    typed: &[char],
    scratch: &mut Vec<f32>,
) -> f32 {
    let rows = meant.len() + 1;
    let cols = typed.len() + 1;
    let size = rows * cols;
    reserve_table(scratch, size);
    let d = &mut scratch[..size];

    let delete = costs.delete_cost();

    // First column: every intended character dropped
    d[0] = 0.0;
    for i in 1..rows {
        d[i * cols] = d[(i - 1) * cols] + delete;
    }

    // First row: every typed character inserted before the first intended one.
    // With nothing intended, each typed character stands in for itself.
    for j in 1..cols {
        let intended = meant.first().copied().unwrap_or(typed[j - 1]);
        d[j] = d[j - 1] + insert_cost(costs, intended, typed, j - 1);
    }

    for i in 1..rows {
        let cm = meant[i - 1];
        let lookahead = meant.get(i).copied();
        for j in 1..cols {
            let del = d[(i - 1) * cols + j] + delete;
            let ins = d[i * cols + j - 1] + insert_cost(costs, cm, typed, j - 1);
            let rep = d[(i - 1) * cols + j - 1] + replace_cost(costs, cm, lookahead, typed, j - 1);
            let mut best = del.min(ins).min(rep);
            if i > 1 && j > 1 {
                let swp = d[(i - 2) * cols + j - 2]
                    + swap_cost(costs, meant[i - 2], cm, typed, j - 2);
                best = best.min(swp);
            }
            d[i * cols + j] = best;
        }
    }

    d[size - 1]
}

/// Typo distance between two strings, using the thread's workspace.
pub fn distance<C: CostModel + ?Sized>(costs: &C, meant: &str, typed: &str) -> f32 {
    with_workspace(|workspace| distance_in(costs, meant, typed, workspace))
}

/// Typo distance between two strings, using an explicit workspace.
pub fn distance_in<C: CostModel + ?Sized>(
    costs: &C,
    meant: &str,
    typed: &str,
    workspace: &mut Workspace,
) -> f32 {
    let Workspace {
        table,
        meant: meant_buf,
        typed: typed_buf,
        ..
    } = workspace;
    meant_buf.clear();
    meant_buf.extend(meant.chars());
    typed_buf.clear();
    typed_buf.extend(typed.chars());
    levenshtein_distance(costs, meant_buf, typed_buf, table)
}
