//! This module provides the Izhikevich `Neuron` which composes the `Network` structure.
//!
//! The dynamics follow the two-variable model
//! ```text
//! dv/dt = 0.04v² + 5v + 140 - u + I
//! du/dt = a(bv - u)
//! ```
//! with the reset `v <- c`, `u <- u + d` after a spike.
use std::fmt;
use std::str::FromStr;

use itertools::Itertools;
use serde::{Deserialize, Serialize};

use crate::error::SNNError;
use crate::FIRING_THRESHOLD;

/// The resting potential a neuron starts from.
pub const RESTING_POTENTIAL: f64 = -65.0;

/// Named parameter presets.
#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum NeuronType {
    /// Regular spiking (excitatory).
    RS,
    /// Intrinsically bursting (excitatory).
    IB,
    /// Chattering (excitatory).
    CH,
    /// Fast spiking (inhibitory).
    FS,
    /// Low-threshold spiking (inhibitory).
    LTS,
    /// Thalamo-cortical (excitatory).
    TC,
    /// Resonator (excitatory).
    RZ,
}

impl NeuronType {
    /// Every registered type, in declaration order.
    pub const ALL: [NeuronType; 7] = [
        NeuronType::RS,
        NeuronType::IB,
        NeuronType::CH,
        NeuronType::FS,
        NeuronType::LTS,
        NeuronType::TC,
        NeuronType::RZ,
    ];

    /// Returns the short name of the type, e.g., "RS".
    pub fn name(&self) -> &'static str {
        match self {
            NeuronType::RS => "RS",
            NeuronType::IB => "IB",
            NeuronType::CH => "CH",
            NeuronType::FS => "FS",
            NeuronType::LTS => "LTS",
            NeuronType::TC => "TC",
            NeuronType::RZ => "RZ",
        }
    }

    /// Returns true if a type with this name is registered.
    pub fn type_exists(name: &str) -> bool {
        name.parse::<NeuronType>().is_ok()
    }

    pub fn is_inhibitory(&self) -> bool {
        matches!(self, NeuronType::FS | NeuronType::LTS)
    }

    /// The nominal (a, b, c, d) parameters of the type.
    pub fn default_params(&self) -> NeuronParams {
        let (a, b, c, d) = match self {
            NeuronType::RS => (0.02, 0.2, -65.0, 8.0),
            NeuronType::IB => (0.02, 0.2, -55.0, 4.0),
            NeuronType::CH => (0.02, 0.2, -50.0, 2.0),
            NeuronType::FS => (0.1, 0.2, -65.0, 2.0),
            NeuronType::LTS => (0.02, 0.25, -65.0, 2.0),
            NeuronType::TC => (0.02, 0.25, -65.0, 0.05),
            NeuronType::RZ => (0.1, 0.26, -65.0, 2.0),
        };
        NeuronParams { a, b, c, d }
    }
}

impl fmt::Display for NeuronType {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl FromStr for NeuronType {
    type Err = SNNError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        NeuronType::ALL
            .iter()
            .find(|t| t.name() == s)
            .copied()
            .ok_or_else(|| SNNError::UnknownNeuronType(s.to_string()))
    }
}

/// The Izhikevich parameters of a neuron.
#[derive(Debug, PartialEq, Clone, Copy, Serialize, Deserialize)]
pub struct NeuronParams {
    /// Time scale of the recovery variable.
    pub a: f64,
    /// Sensitivity of the recovery variable to the potential.
    pub b: f64,
    /// Potential after a spike.
    pub c: f64,
    /// Recovery increment after a spike.
    pub d: f64,
}

/// Represents an Izhikevich spiking neuron.
#[derive(Debug, PartialEq, Clone, Serialize, Deserialize)]
pub struct Neuron {
    // The neuron type.
    neuron_type: NeuronType,
    // The model parameters.
    params: NeuronParams,
    // The membrane potential v.
    potential: f64,
    // The recovery variable u.
    recovery: f64,
    // The input delivered for the next step.
    input: f64,
}

impl Default for Neuron {
    fn default() -> Self {
        Neuron::new(NeuronType::RS)
    }
}

impl Neuron {
    /// Create a neuron at rest with the nominal parameters of the given type.
    pub fn new(neuron_type: NeuronType) -> Self {
        let params = neuron_type.default_params();
        Neuron {
            neuron_type,
            params,
            potential: RESTING_POTENTIAL,
            recovery: params.b * RESTING_POTENTIAL,
            input: 0.0,
        }
    }

    /// Set the type and its parameters jittered by `noise` (expected in [0, 1)), and put the neuron at rest.
    /// Excitatory neurons get a larger reset potential and a smaller recovery increment,
    /// inhibitory neurons a faster and more sensitive recovery.
    pub fn set_default_params(&mut self, neuron_type: NeuronType, noise: f64) {
        let mut params = neuron_type.default_params();
        if neuron_type.is_inhibitory() {
            params.a *= 1.0 - 0.8 * noise;
            params.b *= 1.0 + 0.25 * noise;
        } else {
            params.c += 15.0 * noise * noise;
            params.d -= 6.0 * noise * noise;
        }
        self.neuron_type = neuron_type;
        self.params = params;
        self.potential = RESTING_POTENTIAL;
        self.recovery = params.b * RESTING_POTENTIAL;
    }

    pub fn neuron_type(&self) -> NeuronType {
        self.neuron_type
    }

    pub fn set_type(&mut self, neuron_type: NeuronType) {
        self.neuron_type = neuron_type;
    }

    pub fn is_type(&self, neuron_type: NeuronType) -> bool {
        self.neuron_type == neuron_type
    }

    pub fn is_inhibitory(&self) -> bool {
        self.neuron_type.is_inhibitory()
    }

    pub fn params(&self) -> &NeuronParams {
        &self.params
    }

    pub fn set_params(&mut self, params: NeuronParams) {
        self.params = params;
    }

    /// Returns the membrane potential.
    pub fn potential(&self) -> f64 {
        self.potential
    }

    /// Set the membrane potential.
    pub fn set_potential(&mut self, potential: f64) {
        self.potential = potential;
    }

    /// Returns the recovery variable.
    pub fn recovery(&self) -> f64 {
        self.recovery
    }

    /// Returns the input used by the next step.
    pub fn input_value(&self) -> f64 {
        self.input
    }

    /// Set the input used by the next step.
    pub fn input(&mut self, input: f64) {
        self.input = input;
    }

    /// Returns true if the potential reached the firing threshold.
    pub fn firing(&self) -> bool {
        self.potential >= FIRING_THRESHOLD
    }

    /// Post-spike reset.
    pub fn reset(&mut self) {
        self.potential = self.params.c;
        self.recovery += self.params.d;
    }

    /// Advance the neuron by one millisecond.
    /// The potential is integrated in two half steps for numerical stability.
    pub fn step(&mut self) {
        for _ in 0..2 {
            self.potential += 0.5
                * (0.04 * self.potential * self.potential + 5.0 * self.potential + 140.0
                    - self.recovery
                    + self.input);
        }
        self.recovery += self.params.a * (self.params.b * self.potential - self.recovery);
    }

    /// Tab-separated type, parameters and inhibitory flag.
    pub fn formatted_params(&self) -> String {
        [
            self.neuron_type.to_string(),
            format!("{:.3}", self.params.a),
            format!("{:.3}", self.params.b),
            format!("{:.3}", self.params.c),
            format!("{:.3}", self.params.d),
            (self.is_inhibitory() as u8).to_string(),
        ]
        .iter()
        .join("\t")
    }

    /// Tab-separated potential, recovery and input.
    pub fn formatted_values(&self) -> String {
        [self.potential, self.recovery, self.input]
            .iter()
            .map(|v| format!("{:.3}", v))
            .join("\t")
    }
}
