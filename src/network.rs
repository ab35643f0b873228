//! Network (with neurons and links) structure and the discrete-time simulation step.
use std::collections::{BTreeMap, BTreeSet};

use crate::error::SNNError;
use crate::neuron::{Neuron, NeuronParams, NeuronType};
use crate::random::RandomNumbers;

/// Links with a strength below this value are rejected.
pub const LINK_EPSILON: f64 = 1e-6;
/// Strength factor applied to links targeting an inhibitory neuron.
pub const INHIBITORY_LINK_FACTOR: f64 = -2.0;
/// Gain of the external input of an excitatory neuron.
pub const EXCITATORY_INPUT_GAIN: f64 = 1.0;
/// Gain of the external input of an inhibitory neuron.
pub const INHIBITORY_INPUT_GAIN: f64 = 0.4;
/// Gain of the summed strength of links towards excitatory neurons that fired.
/// It scales the drive of the *source* of these links, i.e., a neuron is driven by the targets it projects to.
pub const EXCITATORY_SPIKE_GAIN: f64 = 0.5;

/// A network of neurons with sparse, directed and weighted links.
///
/// Links are keyed by (source, target) in a source-major ordered map,
/// so all the links leaving a neuron are contiguous.
#[derive(Debug, PartialEq, Clone, Default)]
pub struct Network {
    neurons: Vec<Neuron>,
    links: BTreeMap<(usize, usize), f64>,
}

impl Network {
    /// Create an empty network.
    pub fn new() -> Self {
        Network::default()
    }

    /// The number of neurons in the network.
    pub fn size(&self) -> usize {
        self.neurons.len()
    }

    pub fn is_empty(&self) -> bool {
        self.neurons.is_empty()
    }

    /// A reference to a specific neuron in the network.
    /// Returns `None` if the neuron is not found.
    pub fn neuron(&self, n: usize) -> Option<&Neuron> {
        self.neurons.get(n)
    }

    /// A mutable reference to a specific neuron in the network.
    /// Returns `None` if the neuron is not found.
    pub fn neuron_mut(&mut self, n: usize) -> Option<&mut Neuron> {
        self.neurons.get_mut(n)
    }

    pub fn neurons(&self) -> &[Neuron] {
        &self.neurons
    }

    /// Grow the network to `n` neurons; a no-op if the network is already that large.
    /// Among the new neurons, the first `round(inhibitory_fraction * new_count)` become
    /// fast-spiking (inhibitory) and the others regular-spiking.
    ///
    /// # Examples
    ///
    /// ```
    /// use rusty_izhikevich::network::Network;
    /// use rusty_izhikevich::random::RandomNumbers;
    ///
    /// let mut rng = RandomNumbers::new(42);
    /// let mut network = Network::new();
    /// network.resize(10, 0.3, &mut rng).unwrap();
    ///
    /// assert_eq!(network.size(), 10);
    /// assert_eq!(network.neurons().iter().filter(|n| n.is_inhibitory()).count(), 3);
    /// ```
    pub fn resize(
        &mut self,
        n: usize,
        inhibitory_fraction: f64,
        rng: &mut RandomNumbers,
    ) -> Result<(), SNNError> {
        if !(0.0..=1.0).contains(&inhibitory_fraction) {
            return Err(SNNError::InvalidParameter(format!(
                "inhibitory fraction must lie in [0, 1], got {}",
                inhibitory_fraction
            )));
        }

        let old_size = self.size();
        if n <= old_size {
            return Ok(());
        }

        let num_fs = (inhibitory_fraction * (n - old_size) as f64).round() as usize;
        self.neurons.resize_with(n, Neuron::default);
        log::info!(
            "Network resized from {} to {} neurons ({} new inhibitory)",
            old_size,
            n,
            num_fs
        );

        let types = BTreeMap::from([(NeuronType::FS.to_string(), num_fs)]);
        self.set_default_params(&types, old_size, rng)
    }

    /// Assign types to the neurons in `[start, size())` following the requested counts,
    /// walking the type names in order. Each neuron gets its parameters jittered by an
    /// independent uniform noise sample in [0, 1); the samples are drawn for the whole range up front.
    /// Unknown type names are skipped and their counts discarded; the remaining neurons become regular-spiking.
    pub fn set_default_params(
        &mut self,
        types: &BTreeMap<String, usize>,
        start: usize,
        rng: &mut RandomNumbers,
    ) -> Result<(), SNNError> {
        if start > self.size() {
            return Err(SNNError::OutOfBounds(format!(
                "start {} is beyond the network size {}",
                start,
                self.size()
            )));
        }

        let range_size = self.size() - start;
        let mut noise = vec![0.0; range_size];
        rng.uniform_fill(&mut noise, 0.0, 1.0)?;

        let mut k = 0;
        let mut k_max: usize = 0;
        for (name, &count) in types.iter() {
            let neuron_type = match name.parse::<NeuronType>() {
                Ok(neuron_type) => neuron_type,
                Err(_) => {
                    log::debug!("Skipping {} neurons of unknown type {}", count, name);
                    continue;
                }
            };
            k_max = k_max.saturating_add(count);
            while k < k_max && k < range_size {
                self.neurons[start + k].set_default_params(neuron_type, noise[k]);
                k += 1;
            }
        }
        for (neuron, &sample) in self.neurons[start + k..].iter_mut().zip(&noise[k..]) {
            neuron.set_default_params(NeuronType::RS, sample);
        }

        Ok(())
    }

    /// Set types and parameters of the neurons starting at `start`, one-to-one by position.
    pub fn set_types_params(
        &mut self,
        types: &[NeuronType],
        params: &[NeuronParams],
        start: usize,
    ) -> Result<(), SNNError> {
        if types.len() != params.len() {
            return Err(SNNError::IncompatibleLengths(format!(
                "{} types for {} parameter sets",
                types.len(),
                params.len()
            )));
        }
        self.check_range(start, params.len())?;

        for (neuron, (&neuron_type, &neuron_params)) in self.neurons[start..]
            .iter_mut()
            .zip(types.iter().zip(params.iter()))
        {
            neuron.set_type(neuron_type);
            neuron.set_params(neuron_params);
        }
        Ok(())
    }

    /// Overwrite the potentials of the neurons starting at `start`.
    pub fn set_values(&mut self, potentials: &[f64], start: usize) -> Result<(), SNNError> {
        self.check_range(start, potentials.len())?;

        for (neuron, &potential) in self.neurons[start..].iter_mut().zip(potentials) {
            neuron.set_potential(potential);
        }
        Ok(())
    }

    fn check_range(&self, start: usize, len: usize) -> Result<(), SNNError> {
        match start.checked_add(len) {
            Some(end) if end <= self.size() => Ok(()),
            _ => Err(SNNError::OutOfBounds(format!(
                "range starting at {} with {} values exceeds the network size {}",
                start,
                len,
                self.size()
            ))),
        }
    }

    /// Add a link from neuron `a` to neuron `b`.
    /// Returns false and leaves the network untouched if `a == b`, if either neuron does not exist,
    /// if the strength is below [`LINK_EPSILON`] or if the link already exists.
    /// Links targeting an inhibitory neuron have their strength multiplied by [`INHIBITORY_LINK_FACTOR`].
    pub fn add_link(&mut self, a: usize, b: usize, strength: f64) -> bool {
        if a == b || a >= self.size() || b >= self.size() || !(strength >= LINK_EPSILON) {
            log::trace!("Rejected link {} -> {} with strength {}", a, b, strength);
            return false;
        }
        if self.links.contains_key(&(a, b)) {
            log::trace!("Rejected duplicate link {} -> {}", a, b);
            return false;
        }

        let strength = if self.neurons[b].is_inhibitory() {
            strength * INHIBITORY_LINK_FACTOR
        } else {
            strength
        };
        self.links.insert((a, b), strength);
        true
    }

    /// Replace all links by random ones and return the number of links actually created.
    ///
    /// Every neuron draws an out-degree from a Poisson distribution with mean `mean_degree`,
    /// then tries its targets in a random order with strengths uniformly distributed
    /// in `[LINK_EPSILON, 2 * mean_strength)`, until its degree is reached or all targets were tried.
    /// A rejected candidate (e.g., the neuron itself) is skipped and the next one is tried,
    /// so the realized degree of a neuron is `min(draw, size() - 1)`.
    ///
    /// # Examples
    ///
    /// ```
    /// use rusty_izhikevich::network::Network;
    /// use rusty_izhikevich::random::RandomNumbers;
    ///
    /// let mut rng = RandomNumbers::new(42);
    /// let mut network = Network::new();
    /// network.resize(100, 0.2, &mut rng).unwrap();
    ///
    /// let num_links = network.random_connect(4.0, 1.0, &mut rng).unwrap();
    /// assert_eq!(network.num_links(), num_links);
    /// ```
    pub fn random_connect(
        &mut self,
        mean_degree: f64,
        mean_strength: f64,
        rng: &mut RandomNumbers,
    ) -> Result<usize, SNNError> {
        let max_strength = 2.0 * mean_strength;
        if !(max_strength >= LINK_EPSILON) || !max_strength.is_finite() {
            return Err(SNNError::InvalidParameter(format!(
                "mean strength must be finite and at least {}, got {}",
                LINK_EPSILON / 2.0,
                mean_strength
            )));
        }

        let mut degrees = vec![0; self.size()];
        rng.poisson_fill(&mut degrees, mean_degree)?;

        self.links.clear();

        let mut node_ids: Vec<usize> = (0..self.size()).collect();
        let mut num_links = 0;
        for (source_id, &degree) in degrees.iter().enumerate() {
            let degree = usize::try_from(degree)
                .unwrap_or(usize::MAX)
                .min(self.size());
            rng.shuffle(&mut node_ids);
            let mut strengths = vec![0.0; degree];
            rng.uniform_fill(&mut strengths, LINK_EPSILON, max_strength)?;

            let mut num_new = 0;
            for &target_id in node_ids.iter() {
                if num_new >= degree {
                    break;
                }
                if self.add_link(source_id, target_id, strengths[num_new]) {
                    num_new += 1;
                }
            }
            num_links += num_new;
        }

        log::info!(
            "Random connectivity created {} links among {} neurons (mean degree {})",
            num_links,
            self.size(),
            mean_degree
        );
        Ok(num_links)
    }

    /// Returns the strength of the link from `a` to `b`, if any.
    pub fn link(&self, a: usize, b: usize) -> Option<f64> {
        self.links.get(&(a, b)).copied()
    }

    /// An iterator over all links as ((source, target), strength), ordered by source then target.
    pub fn links(&self) -> impl Iterator<Item = ((usize, usize), f64)> + '_ {
        self.links.iter().map(|(&key, &strength)| (key, strength))
    }

    /// The number of links in the network.
    pub fn num_links(&self) -> usize {
        self.links.len()
    }

    /// All the links leaving neuron `n`, as (target, strength) ordered by target.
    pub fn neighbors(&self, n: usize) -> Vec<(usize, f64)> {
        self.links
            .range((n, 0)..=(n, usize::MAX))
            .map(|(&(_, target_id), &strength)| (target_id, strength))
            .collect()
    }

    /// The number of links leaving neuron `n` and the sum of their (signed) strengths.
    pub fn degree(&self, n: usize) -> (usize, f64) {
        self.neighbors(n)
            .iter()
            .fold((0, 0.0), |(count, total), (_, strength)| {
                (count + 1, total + strength)
            })
    }

    /// The potentials of all neurons, in index order.
    pub fn potentials(&self) -> Vec<f64> {
        self.neurons.iter().map(|neuron| neuron.potential()).collect()
    }

    /// The recovery variables of all neurons, in index order.
    pub fn recoveries(&self) -> Vec<f64> {
        self.neurons.iter().map(|neuron| neuron.recovery()).collect()
    }

    /// Advance the first `external_input.len()` neurons by one tick and return those which fired.
    ///
    /// First, every firing neuron is recorded and reset. Then, every neuron receives
    /// `gain * external_input + 0.5 * excitatory_sum + inhibitory_sum` and is advanced, where
    /// `gain` is [`INHIBITORY_INPUT_GAIN`] for inhibitory neurons and [`EXCITATORY_INPUT_GAIN`] otherwise.
    ///
    /// The sums run over the links *leaving* the neuron whose target fired during this tick,
    /// split according to the polarity of that target.
    /// A neuron is hence driven by the firing of the neurons it projects to, not of those projecting to it.
    pub fn step(&mut self, external_input: &[f64]) -> Result<BTreeSet<usize>, SNNError> {
        if external_input.len() > self.size() {
            return Err(SNNError::OutOfBounds(format!(
                "{} external inputs for {} neurons",
                external_input.len(),
                self.size()
            )));
        }

        let mut fired = BTreeSet::new();
        for (id, neuron) in self.neurons[..external_input.len()].iter_mut().enumerate() {
            if neuron.firing() {
                fired.insert(id);
                neuron.reset();
            }
        }

        for (id, &input) in external_input.iter().enumerate() {
            let mut excitatory_sum = 0.0;
            let mut inhibitory_sum = 0.0;
            for (target_id, strength) in self.neighbors(id) {
                if fired.contains(&target_id) {
                    if self.neurons[target_id].is_inhibitory() {
                        inhibitory_sum += strength;
                    } else {
                        excitatory_sum += strength;
                    }
                }
            }

            let neuron = &mut self.neurons[id];
            let gain = if neuron.is_inhibitory() {
                INHIBITORY_INPUT_GAIN
            } else {
                EXCITATORY_INPUT_GAIN
            };
            neuron.input(gain * input + EXCITATORY_SPIKE_GAIN * excitatory_sum + inhibitory_sum);
            neuron.step();
        }

        log::debug!("{} neurons fired", fired.len());
        Ok(fired)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SEED: u64 = 42;

    fn network_with(types: &[NeuronType]) -> Network {
        let mut network = Network::new();
        network.neurons = types.iter().map(|&t| Neuron::new(t)).collect();
        network
    }

    #[test]
    fn test_resize_is_monotonic() {
        let mut rng = RandomNumbers::new(SEED);
        let mut network = Network::new();
        assert!(network.is_empty());

        network.resize(10, 0.3, &mut rng).unwrap();
        assert_eq!(network.size(), 10);
        for id in 0..3 {
            assert!(network.neurons[id].is_type(NeuronType::FS));
        }
        for id in 3..10 {
            assert!(network.neurons[id].is_type(NeuronType::RS));
        }

        network.add_link(0, 4, 1.0);
        let before = network.clone();
        network.resize(5, 0.5, &mut rng).unwrap();
        network.resize(10, 0.5, &mut rng).unwrap();
        assert_eq!(network, before);

        network.resize(14, 0.5, &mut rng).unwrap();
        assert_eq!(network.size(), 14);
        assert_eq!(network.neurons[..10], before.neurons[..]);
        assert_eq!(
            network.neurons[10..]
                .iter()
                .map(|n| n.neuron_type())
                .collect::<Vec<_>>(),
            vec![NeuronType::FS, NeuronType::FS, NeuronType::RS, NeuronType::RS]
        );
        assert_eq!(network.num_links(), 1);
    }

    #[test]
    fn test_resize_invalid_fraction() {
        let mut rng = RandomNumbers::new(SEED);
        let mut network = Network::new();
        assert!(matches!(
            network.resize(10, 1.5, &mut rng),
            Err(SNNError::InvalidParameter(_))
        ));
        assert!(matches!(
            network.resize(10, f64::NAN, &mut rng),
            Err(SNNError::InvalidParameter(_))
        ));
        assert!(network.is_empty());
    }

    #[test]
    fn test_set_default_params() {
        let mut rng = RandomNumbers::new(SEED);
        let mut network = network_with(&[NeuronType::RS; 8]);

        let types = BTreeMap::from([
            ("LTS".to_string(), 2),
            ("XX".to_string(), 3),
            ("CH".to_string(), 1),
        ]);
        network.set_default_params(&types, 2, &mut rng).unwrap();

        // walked in name order: CH, LTS, then XX is dropped
        assert_eq!(
            network
                .neurons
                .iter()
                .map(|n| n.neuron_type())
                .collect::<Vec<_>>(),
            vec![
                NeuronType::RS,
                NeuronType::RS,
                NeuronType::CH,
                NeuronType::LTS,
                NeuronType::LTS,
                NeuronType::RS,
                NeuronType::RS,
                NeuronType::RS,
            ]
        );
    }

    #[test]
    fn test_set_default_params_draws_noise_for_whole_range() {
        let mut rng1 = RandomNumbers::new(SEED);
        let mut rng2 = RandomNumbers::new(SEED);
        let mut network = network_with(&[NeuronType::RS; 6]);

        let types = BTreeMap::from([("FS".to_string(), 100)]);
        network.set_default_params(&types, 0, &mut rng1).unwrap();
        assert!(network.neurons.iter().all(|n| n.is_type(NeuronType::FS)));

        let mut noise = vec![0.0; 6];
        rng2.uniform_fill(&mut noise, 0.0, 1.0).unwrap();
        assert_eq!(rng1.uniform(0.0, 1.0), rng2.uniform(0.0, 1.0));
    }

    #[test]
    fn test_set_default_params_out_of_bounds() {
        let mut rng = RandomNumbers::new(SEED);
        let mut network = network_with(&[NeuronType::RS; 3]);
        assert!(matches!(
            network.set_default_params(&BTreeMap::new(), 4, &mut rng),
            Err(SNNError::OutOfBounds(_))
        ));
        assert!(network
            .set_default_params(&BTreeMap::new(), 3, &mut rng)
            .is_ok());
    }

    #[test]
    fn test_set_types_params() {
        let mut network = network_with(&[NeuronType::RS; 4]);
        let params = NeuronParams {
            a: 0.1,
            b: 0.2,
            c: -60.0,
            d: 1.0,
        };

        network
            .set_types_params(&[NeuronType::FS, NeuronType::TC], &[params, params], 1)
            .unwrap();
        assert!(network.neurons[1].is_type(NeuronType::FS));
        assert!(network.neurons[2].is_type(NeuronType::TC));
        assert_eq!(network.neurons[2].params(), &params);
        assert!(network.neurons[3].is_type(NeuronType::RS));

        assert!(matches!(
            network.set_types_params(&[NeuronType::FS], &[params, params], 0),
            Err(SNNError::IncompatibleLengths(_))
        ));
        assert!(matches!(
            network.set_types_params(&[NeuronType::FS, NeuronType::FS], &[params, params], 3),
            Err(SNNError::OutOfBounds(_))
        ));
    }

    #[test]
    fn test_set_values() {
        let mut network = network_with(&[NeuronType::RS; 4]);
        network.set_values(&[-70.0, 10.0], 2).unwrap();
        assert_eq!(network.potentials(), vec![-65.0, -65.0, -70.0, 10.0]);

        assert!(matches!(
            network.set_values(&[0.0, 0.0], 3),
            Err(SNNError::OutOfBounds(_))
        ));
        assert!(matches!(
            network.set_values(&[0.0], usize::MAX),
            Err(SNNError::OutOfBounds(_))
        ));
        assert_eq!(network.potentials(), vec![-65.0, -65.0, -70.0, 10.0]);
    }

    #[test]
    fn test_add_link() {
        let mut network = network_with(&[NeuronType::RS, NeuronType::RS, NeuronType::FS]);

        assert!(network.add_link(0, 1, 0.5));
        assert_eq!(network.neighbors(0), vec![(1, 0.5)]);

        // duplicate
        assert!(!network.add_link(0, 1, 0.7));
        assert_eq!(network.neighbors(0), vec![(1, 0.5)]);

        // inhibitory target
        assert!(network.add_link(0, 2, 0.5));
        assert_eq!(network.link(0, 2), Some(-1.0));

        // rejections
        assert!(!network.add_link(1, 1, 1.0));
        assert!(!network.add_link(1, 3, 1.0));
        assert!(!network.add_link(3, 1, 1.0));
        assert!(!network.add_link(1, 0, 1e-7));
        assert!(!network.add_link(1, 0, -1.0));
        assert!(!network.add_link(1, 0, f64::NAN));
        assert_eq!(network.num_links(), 2);

        assert!(network.add_link(1, 0, LINK_EPSILON));
        assert_eq!(network.num_links(), 3);
    }

    #[test]
    fn test_neighbors_and_degree() {
        let mut network = network_with(&[
            NeuronType::RS,
            NeuronType::RS,
            NeuronType::FS,
            NeuronType::RS,
        ]);
        network.add_link(1, 3, 1.0);
        network.add_link(1, 0, 2.0);
        network.add_link(1, 2, 1.5);
        network.add_link(0, 1, 4.0);
        network.add_link(2, 1, 8.0);

        assert_eq!(network.neighbors(1), vec![(0, 2.0), (2, -3.0), (3, 1.0)]);
        assert_eq!(network.degree(1), (3, 0.0));
        assert_eq!(network.degree(0), (1, 4.0));
        assert_eq!(network.degree(3), (0, 0.0));
        assert!(network.neighbors(42).is_empty());
    }

    #[test]
    fn test_random_connect() {
        let mut rng = RandomNumbers::new(SEED);
        let mut network = Network::new();
        network.resize(50, 0.2, &mut rng).unwrap();

        network.add_link(0, 1, 1.0);
        let num_links = network.random_connect(5.0, 1.0, &mut rng).unwrap();
        assert_eq!(network.num_links(), num_links);
        assert!(num_links > 0);

        for ((source_id, target_id), strength) in network.links() {
            assert_ne!(source_id, target_id);
            assert!(target_id < network.size());
            let magnitude = if network.neurons[target_id].is_inhibitory() {
                strength / INHIBITORY_LINK_FACTOR
            } else {
                strength
            };
            assert!((LINK_EPSILON..2.0).contains(&magnitude));
        }

        for id in 0..network.size() {
            let neighbors = network.neighbors(id);
            let total: f64 = neighbors.iter().map(|(_, s)| s).sum();
            assert_eq!(network.degree(id), (neighbors.len(), total));
        }
    }

    #[test]
    fn test_random_connect_degree_is_capped() {
        let mut rng = RandomNumbers::new(SEED);
        let mut network = Network::new();
        network.resize(5, 0.0, &mut rng).unwrap();

        // every neuron asks for far more targets than available
        let num_links = network.random_connect(1000.0, 1.0, &mut rng).unwrap();
        assert_eq!(num_links, 5 * 4);
    }

    #[test]
    fn test_random_connect_huge_mean_degree() {
        let mut rng = RandomNumbers::new(SEED);
        let mut network = Network::new();
        network.resize(3, 0.0, &mut rng).unwrap();

        let num_links = network.random_connect(1e17, 1.0, &mut rng).unwrap();
        assert_eq!(num_links, 3 * 2);
        for id in 0..3 {
            assert_eq!(network.degree(id).0, 2);
        }
    }

    #[test]
    fn test_random_connect_is_reproducible() {
        let build = || {
            let mut rng = RandomNumbers::new(SEED);
            let mut network = Network::new();
            network.resize(30, 0.2, &mut rng).unwrap();
            network.random_connect(3.0, 2.0, &mut rng).unwrap();
            network
        };
        assert_eq!(build(), build());
    }

    #[test]
    fn test_random_connect_invalid_parameters() {
        let mut rng = RandomNumbers::new(SEED);
        let mut network = network_with(&[NeuronType::RS; 3]);
        network.add_link(0, 1, 1.0);

        assert!(matches!(
            network.random_connect(-1.0, 1.0, &mut rng),
            Err(SNNError::InvalidParameter(_))
        ));
        assert!(matches!(
            network.random_connect(1.0, 0.0, &mut rng),
            Err(SNNError::InvalidParameter(_))
        ));
        assert_eq!(network.num_links(), 1);

        let mut empty = Network::new();
        assert_eq!(empty.random_connect(4.0, 1.0, &mut rng), Ok(0));
    }

    #[test]
    fn test_step_excitatory_spike() {
        let mut network = network_with(&[NeuronType::RS, NeuronType::RS]);
        network.add_link(1, 0, 3.0);
        network.set_values(&[35.0], 0).unwrap();

        let fired = network.step(&[0.0, 0.0]).unwrap();
        assert_eq!(fired, BTreeSet::from([0]));
        assert_eq!(network.neurons[0].input_value(), 0.0);
        assert_eq!(network.neurons[1].input_value(), 0.5 * 3.0);
        assert!(!network.neurons[0].firing());
    }

    #[test]
    fn test_step_inhibitory_spike() {
        let mut network = network_with(&[NeuronType::FS, NeuronType::FS]);
        network.add_link(1, 0, 3.0);
        network.set_values(&[35.0], 0).unwrap();

        let fired = network.step(&[0.0, 10.0]).unwrap();
        assert_eq!(fired, BTreeSet::from([0]));
        assert_eq!(network.neurons[1].input_value(), 0.4 * 10.0 - 6.0);
        assert_eq!(network.neurons[0].input_value(), 0.0);
    }

    #[test]
    fn test_step_follows_outgoing_links() {
        // neuron 1 fires, neuron 0 projects to it, neuron 2 receives from it
        let mut network = network_with(&[NeuronType::RS, NeuronType::RS, NeuronType::RS]);
        network.add_link(0, 1, 2.0);
        network.add_link(1, 2, 2.0);
        network.set_values(&[35.0], 1).unwrap();

        let fired = network.step(&[1.0, 1.0, 1.0]).unwrap();
        assert_eq!(fired, BTreeSet::from([1]));
        assert_eq!(network.neurons[0].input_value(), 1.0 + 1.0);
        assert_eq!(network.neurons[1].input_value(), 1.0);
        assert_eq!(network.neurons[2].input_value(), 1.0);
    }

    #[test]
    fn test_step_partial_input() {
        let mut network = network_with(&[NeuronType::RS; 3]);
        network.set_values(&[35.0, -65.0, 35.0], 0).unwrap();

        let fired = network.step(&[0.0, 0.0]).unwrap();
        assert_eq!(fired, BTreeSet::from([0]));
        assert_eq!(network.neurons[2].potential(), 35.0);

        assert!(matches!(
            network.step(&[0.0; 4]),
            Err(SNNError::OutOfBounds(_))
        ));
    }
}
