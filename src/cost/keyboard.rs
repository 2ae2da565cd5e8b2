//! Keyboard-aware cost model.
//!
//! Substitutions between keys that sit next to each other on a QWERTY
//! keyboard are cheaper than arbitrary substitutions, and case mistakes are
//! priced by how they relate to the shift state of the neighbouring keys.

use crate::config::KeyboardCostConfig;
use crate::cost::CostModel;

/// Nearby keys on a QWERTY keyboard for a given lowercase letter.
pub fn nearby_keys(ch: char) -> &'static [char] {
    match ch.to_ascii_lowercase() {
        'q' => &['w', 'a', 's'],
        'w' => &['q', 'e', 'a', 's', 'd'],
        'e' => &['w', 'r', 's', 'd', 'f'],
        'r' => &['e', 't', 'd', 'f', 'g'],
        't' => &['r', 'y', 'f', 'g', 'h'],
        'y' => &['t', 'u', 'g', 'h', 'j'],
        'u' => &['y', 'i', 'h', 'j', 'k'],
        'i' => &['u', 'o', 'j', 'k', 'l'],
        'o' => &['i', 'p', 'k', 'l'],
        'p' => &['o', 'l'],
        'a' => &['q', 'w', 's', 'z'],
        's' => &['a', 'd', 'w', 'e', 'z', 'x'],
        'd' => &['s', 'f', 'e', 'r', 'x', 'c'],
        'f' => &['d', 'g', 'r', 't', 'c', 'v'],
        'g' => &['f', 'h', 't', 'y', 'v', 'b'],
        'h' => &['g', 'j', 'y', 'u', 'b', 'n'],
        'j' => &['h', 'k', 'u', 'i', 'n', 'm'],
        'k' => &['j', 'l', 'i', 'o', 'm'],
        'l' => &['k', 'o', 'p', 'm'],
        'z' => &['a', 's', 'x'],
        'x' => &['z', 'c', 's', 'd'],
        'c' => &['x', 'v', 'd', 'f'],
        'v' => &['c', 'b', 'f', 'g'],
        'b' => &['v', 'n', 'g', 'h'],
        'n' => &['b', 'm', 'h', 'j'],
        'm' => &['n', 'j', 'k', 'l'],
        '1' => &['2', 'q'],
        '2' => &['1', '3', 'q', 'w'],
        '3' => &['2', '4', 'w', 'e'],
        '4' => &['3', '5', 'e', 'r'],
        '5' => &['4', '6', 'r', 't'],
        '6' => &['5', '7', 't', 'y'],
        '7' => &['6', '8', 'y', 'u'],
        '8' => &['7', '9', 'u', 'i'],
        '9' => &['8', '0', 'i', 'o'],
        '0' => &['9', '-', 'o', 'p'],
        '-' => &['0', 'p'],
        _ => &[],
    }
}

/// Whether two keys are physically adjacent. The neighbour table is not
/// symmetric on its own, so both directions are checked.
pub fn is_nearby(a: char, b: char) -> bool {
    let (a, b) = (a.to_ascii_lowercase(), b.to_ascii_lowercase());
    nearby_keys(a).contains(&b) || nearby_keys(b).contains(&a)
}

fn same_key(a: char, b: char) -> bool {
    a.to_lowercase().eq(b.to_lowercase())
}

/// QWERTY cost model with tunable constants.
#[derive(Debug, Clone, Default)]
pub struct KeyboardCostModel {
    config: KeyboardCostConfig,
}

impl KeyboardCostModel {
    /// Create a cost model from explicit constants.
    pub fn new(config: KeyboardCostConfig) -> Self {
        KeyboardCostModel { config }
    }

    /// The constants this model prices with.
    pub fn config(&self) -> &KeyboardCostConfig {
        &self.config
    }
}

impl CostModel for KeyboardCostModel {
    fn char_distance(&self, a: char, b: char) -> f32 {
        if a == b {
            0.0
        } else if same_key(a, b) {
            self.config.case_cost
        } else if is_nearby(a, b) {
            self.config.nearby_cost
        } else {
            self.config.far_cost
        }
    }

    fn delete_cost(&self) -> f32 {
        self.config.delete_cost
    }

    fn min_insert_cost(&self) -> f32 {
        // Insert distances are clamped to >= 1 and shift penalties are >= 0.
        self.double_type_cost(1.0)
    }

    fn min_swap_cost(&self) -> f32 {
        self.config.swap_cost
    }

    fn swap_cost(&self) -> f32 {
        self.config.swap_cost
    }

    fn double_type_cost(&self, distance: f32) -> f32 {
        self.config.double_type_base + self.config.double_type_scale * distance
    }

    fn insert_shift_cost(
        &self,
        prev_upper: bool,
        inserted_upper: bool,
        intended_upper: bool,
    ) -> f32 {
        if inserted_upper == prev_upper || inserted_upper == intended_upper {
            0.0
        } else {
            self.config.shift_cost
        }
    }

    fn replace_shift_cost(
        &self,
        prev_upper: bool,
        typed_upper: bool,
        intended_upper: bool,
        next_upper: bool,
    ) -> f32 {
        if typed_upper == intended_upper {
            0.0
        } else if typed_upper == prev_upper || typed_upper == next_upper {
            // Shift held a key too long, or pressed a key too early.
            self.config.shift_slip_cost
        } else {
            self.config.shift_cost
        }
    }
}
