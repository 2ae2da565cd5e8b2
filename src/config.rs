//! Configuration for lookups and the default cost model.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{Result, TypoError};

/// Parameters of a single typo-tolerant lookup.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LookupConfig {
    /// Largest typo distance a candidate may have.
    pub max_distance: f32,

    /// Distance a typical typo is expected to have; the mean of the
    /// probability model.
    pub expected_distance: f64,

    /// Candidates whose probability does not exceed this are dropped.
    pub min_probability: f64,

    /// Cap on the number of ranked alternatives the engine returns.
    /// If None, every retained alternative is returned.
    pub max_results: Option<usize>,
}

impl Default for LookupConfig {
    fn default() -> Self {
        Self {
            max_distance: 2.0,
            expected_distance: 1.0,
            min_probability: 1e-4,
            max_results: None,
        }
    }
}

impl LookupConfig {
    /// Set the distance budget.
    pub fn with_max_distance(mut self, max_distance: f32) -> Self {
        self.max_distance = max_distance;
        self
    }

    /// Set the expected typo distance.
    pub fn with_expected_distance(mut self, expected_distance: f64) -> Self {
        self.expected_distance = expected_distance;
        self
    }

    /// Set the probability threshold.
    pub fn with_min_probability(mut self, min_probability: f64) -> Self {
        self.min_probability = min_probability;
        self
    }

    /// Limit the number of returned alternatives.
    pub fn with_max_results(mut self, max_results: usize) -> Self {
        self.max_results = Some(max_results);
        self
    }

    /// Check that the parameters describe a meaningful lookup.
    pub fn validate(&self) -> Result<()> {
        if !self.max_distance.is_finite() || self.max_distance < 0.0 {
            return Err(TypoError::config(format!(
                "max_distance must be a finite, non-negative number, got {}",
                self.max_distance
            )));
        }
        if !self.expected_distance.is_finite() || self.expected_distance <= 0.0 {
            return Err(TypoError::config(format!(
                "expected_distance must be positive, got {}",
                self.expected_distance
            )));
        }
        if !(0.0..1.0).contains(&self.min_probability) {
            return Err(TypoError::config(format!(
                "min_probability must be in [0, 1), got {}",
                self.min_probability
            )));
        }
        Ok(())
    }
}

/// Constants of the QWERTY cost model.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct KeyboardCostConfig {
    /// Cost of dropping an intended character.
    pub delete_cost: f32,
    /// Fixed cost of swapping two adjacent characters.
    pub swap_cost: f32,
    /// Substituting a physically adjacent key.
    pub nearby_cost: f32,
    /// Substituting any other key.
    pub far_cost: f32,
    /// Substituting the same key with the other case.
    pub case_cost: f32,
    /// Shift state unrelated to either neighbour.
    pub shift_cost: f32,
    /// Shift state carried over from, or anticipating, a neighbour.
    pub shift_slip_cost: f32,
    /// Constant part of an accidental extra key press.
    pub double_type_base: f32,
    /// Per-unit-distance part of an accidental extra key press.
    pub double_type_scale: f32,
}

impl Default for KeyboardCostConfig {
    fn default() -> Self {
        Self {
            delete_cost: 1.0,
            swap_cost: 1.0,
            nearby_cost: 1.0,
            far_cost: 2.0,
            case_cost: 0.5,
            shift_cost: 0.5,
            shift_slip_cost: 0.25,
            double_type_base: 0.5,
            double_type_scale: 0.5,
        }
    }
}

impl KeyboardCostConfig {
    /// Every constant must be finite and non-negative, otherwise the search
    /// bounds stop being admissible.
    pub fn validate(&self) -> Result<()> {
        let constants = [
            ("delete_cost", self.delete_cost),
            ("swap_cost", self.swap_cost),
            ("nearby_cost", self.nearby_cost),
            ("far_cost", self.far_cost),
            ("case_cost", self.case_cost),
            ("shift_cost", self.shift_cost),
            ("shift_slip_cost", self.shift_slip_cost),
            ("double_type_base", self.double_type_base),
            ("double_type_scale", self.double_type_scale),
        ];
        for (name, value) in constants {
            if !value.is_finite() || value < 0.0 {
                return Err(TypoError::config(format!(
                    "{name} must be a finite, non-negative number, got {value}"
                )));
            }
        }
        if self.nearby_cost <= 0.0 || self.far_cost <= 0.0 || self.case_cost <= 0.0 {
            return Err(TypoError::config(
                "substitution costs must be positive so only equal characters are free",
            ));
        }
        Ok(())
    }
}

/// Complete engine configuration, as stored in a JSON config file.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// Lookup parameters.
    pub lookup: LookupConfig,
    /// Keyboard cost model constants.
    pub costs: KeyboardCostConfig,
}

impl EngineConfig {
    /// Load and validate a configuration from a JSON file.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let text = fs::read_to_string(path.as_ref())?;
        let config: EngineConfig = serde_json::from_str(&text)?;
        config.validate()?;
        log::debug!("loaded engine config from {}", path.as_ref().display());
        Ok(config)
    }

    /// Validate both halves of the configuration.
    pub fn validate(&self) -> Result<()> {
        self.lookup.validate()?;
        self.costs.validate()
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        assert!(EngineConfig::default().validate().is_ok());
    }

    #[test]
    fn test_lookup_validation() {
        assert!(LookupConfig::default().with_max_distance(-1.0).validate().is_err());
        assert!(
            LookupConfig::default()
                .with_max_distance(f32::INFINITY)
                .validate()
                .is_err()
        );
        assert!(LookupConfig::default().with_expected_distance(0.0).validate().is_err());
        assert!(LookupConfig::default().with_min_probability(1.0).validate().is_err());
        assert!(LookupConfig::default().with_max_distance(0.0).validate().is_ok());
    }

    #[test]
    fn test_cost_validation() {
        let costs = KeyboardCostConfig {
            delete_cost: -0.5,
            ..Default::default()
        };
        assert!(costs.validate().is_err());

        let costs = KeyboardCostConfig {
            case_cost: 0.0,
            ..Default::default()
        };
        assert!(costs.validate().is_err());
    }

    #[test]
    fn test_from_file_with_partial_json() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            r#"{{ "lookup": {{ "max_distance": 3.0 }}, "costs": {{ "swap_cost": 0.75 }} }}"#
        )
        .unwrap();

        let config = EngineConfig::from_file(file.path()).unwrap();
        assert_eq!(config.lookup.max_distance, 3.0);
        assert_eq!(config.lookup.expected_distance, 1.0);
        assert_eq!(config.costs.swap_cost, 0.75);
        assert_eq!(config.costs.delete_cost, 1.0);
    }

    #[test]
    fn test_from_file_rejects_invalid_values() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{ "lookup": {{ "min_probability": 2.0 }} }}"#).unwrap();

        match EngineConfig::from_file(file.path()) {
            Err(TypoError::Config(_)) => {}
            other => panic!("expected config error, got {other:?}"),
        }
    }
}
