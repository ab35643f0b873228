//! Configuration of a simulation run.
use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::error::SNNError;
use crate::neuron::NeuronType;

/// Parameters of a simulation run. Missing fields take their default value when deserialized.
#[derive(Debug, PartialEq, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SimulationConfig {
    /// The seed of the random number generator, 0 for a fresh one.
    pub seed: u64,
    /// The number of neurons.
    pub num_neurons: usize,
    /// The fraction of fast-spiking (inhibitory) neurons.
    pub inhibitory_fraction: f64,
    /// Explicit neuron counts per type name, overriding the inhibitory fraction when non-empty.
    pub type_counts: BTreeMap<String, usize>,
    /// The mean out-degree of a neuron.
    pub mean_degree: f64,
    /// The mean strength of a link.
    pub mean_strength: f64,
    /// The number of simulated ticks.
    pub num_steps: usize,
    /// The standard deviation of the (zero-mean) external input.
    pub input_sd: f64,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        SimulationConfig {
            seed: 0,
            num_neurons: 1000,
            inhibitory_fraction: 0.2,
            type_counts: BTreeMap::new(),
            mean_degree: 40.0,
            mean_strength: 4.0,
            num_steps: 1000,
            input_sd: 5.0,
        }
    }
}

impl SimulationConfig {
    /// Parse a configuration from JSON and validate it.
    ///
    /// # Examples
    ///
    /// ```
    /// use rusty_izhikevich::config::SimulationConfig;
    ///
    /// let config = SimulationConfig::from_json(r#"{"seed": 7, "num_neurons": 50}"#).unwrap();
    /// assert_eq!(config.seed, 7);
    /// assert_eq!(config.num_neurons, 50);
    /// assert_eq!(config.num_steps, 1000);
    /// ```
    pub fn from_json(json: &str) -> Result<Self, SNNError> {
        let config: SimulationConfig = serde_json::from_str(json)
            .map_err(|e| SNNError::InvalidParameter(format!("Invalid configuration: {}", e)))?;
        config.validate()?;
        Ok(config)
    }

    /// Check that every parameter lies in its admissible range.
    /// Unknown type names are accepted (and later ignored), but reported.
    pub fn validate(&self) -> Result<(), SNNError> {
        if !(0.0..=1.0).contains(&self.inhibitory_fraction) {
            return Err(SNNError::InvalidParameter(format!(
                "inhibitory fraction must lie in [0, 1], got {}",
                self.inhibitory_fraction
            )));
        }
        if !(self.mean_degree >= 0.0) || !self.mean_degree.is_finite() {
            return Err(SNNError::InvalidParameter(format!(
                "mean degree must be finite and non-negative, got {}",
                self.mean_degree
            )));
        }
        if !(self.mean_strength > 0.0) || !self.mean_strength.is_finite() {
            return Err(SNNError::InvalidParameter(format!(
                "mean strength must be finite and positive, got {}",
                self.mean_strength
            )));
        }
        if !(self.input_sd >= 0.0) || !self.input_sd.is_finite() {
            return Err(SNNError::InvalidParameter(format!(
                "input standard deviation must be finite and non-negative, got {}",
                self.input_sd
            )));
        }
        for name in self.type_counts.keys() {
            if !NeuronType::type_exists(name) {
                log::warn!("Neuron type {} is unknown and will be ignored", name);
            }
        }
        Ok(())
    }
}
