//! Driver building a random network from a configuration and running it tick by tick.
use std::collections::BTreeSet;
use std::io::Write;

use crate::config::SimulationConfig;
use crate::error::SNNError;
use crate::network::Network;
use crate::random::RandomNumbers;
use crate::report::{print_head, print_traj};

/// A network together with the random number generator driving it.
#[derive(Debug, Clone)]
pub struct Simulation {
    config: SimulationConfig,
    rng: RandomNumbers,
    network: Network,
}

impl Simulation {
    /// Build the network described by the configuration: neurons first, then random links.
    pub fn new(config: SimulationConfig) -> Result<Self, SNNError> {
        config.validate()?;

        let mut rng = RandomNumbers::new(config.seed);
        let mut network = Network::new();
        network.resize(config.num_neurons, config.inhibitory_fraction, &mut rng)?;
        if !config.type_counts.is_empty() {
            network.set_default_params(&config.type_counts, 0, &mut rng)?;
        }
        network.random_connect(config.mean_degree, config.mean_strength, &mut rng)?;

        log::info!(
            "Simulation ready with {} neurons and {} links (seed {})",
            network.size(),
            network.num_links(),
            rng.seed()
        );
        Ok(Simulation {
            config,
            rng,
            network,
        })
    }

    pub fn config(&self) -> &SimulationConfig {
        &self.config
    }

    pub fn network(&self) -> &Network {
        &self.network
    }

    pub fn network_mut(&mut self) -> &mut Network {
        &mut self.network
    }

    pub fn rng(&self) -> &RandomNumbers {
        &self.rng
    }

    /// Run the configured number of ticks, writing the trajectories to `out`.
    /// Every tick, each neuron receives an independent zero-mean normal external input.
    /// Returns the neurons which fired at each tick.
    pub fn run<W: Write>(&mut self, out: &mut W) -> Result<Vec<BTreeSet<usize>>, SNNError> {
        log::info!("Starting simulation of {} ticks...", self.config.num_steps);
        print_head(&self.config.type_counts, &self.network, out)?;

        let mut raster = Vec::with_capacity(self.config.num_steps);
        let mut external_input = vec![0.0; self.network.size()];
        for time in 0..self.config.num_steps {
            self.rng
                .normal_fill(&mut external_input, 0.0, self.config.input_sd)?;
            let fired = self.network.step(&external_input)?;
            print_traj(time, &self.config.type_counts, &self.network, out)?;
            raster.push(fired);
        }

        let num_spikes: usize = raster.iter().map(|fired| fired.len()).sum();
        log::info!("Simulation done: {} spikes emitted", num_spikes);
        Ok(raster)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeMap;

    fn small_config() -> SimulationConfig {
        SimulationConfig {
            seed: 42,
            num_neurons: 40,
            mean_degree: 4.0,
            mean_strength: 2.0,
            num_steps: 200,
            ..Default::default()
        }
    }

    #[test]
    fn test_new() {
        let simulation = Simulation::new(small_config()).unwrap();
        assert_eq!(simulation.network().size(), 40);
        assert_eq!(
            simulation
                .network()
                .neurons()
                .iter()
                .filter(|n| n.is_inhibitory())
                .count(),
            8
        );
        assert!(simulation.network().num_links() > 0);
        assert_eq!(simulation.rng().seed(), 42);
    }

    #[test]
    fn test_new_with_type_counts() {
        let config = SimulationConfig {
            type_counts: BTreeMap::from([("LTS".to_string(), 5), ("FS".to_string(), 5)]),
            ..small_config()
        };
        let simulation = Simulation::new(config).unwrap();
        assert_eq!(
            simulation
                .network()
                .neurons()
                .iter()
                .filter(|n| n.is_inhibitory())
                .count(),
            10
        );
    }

    #[test]
    fn test_run() {
        let mut simulation = Simulation::new(small_config()).unwrap();
        let mut out = Vec::new();
        let raster = simulation.run(&mut out).unwrap();

        assert_eq!(raster.len(), 200);
        assert!(raster.iter().flatten().all(|&id| id < 40));
        assert!(raster.iter().any(|fired| !fired.is_empty()));

        let text = String::from_utf8(out).unwrap();
        assert_eq!(text.lines().count(), 201);
    }

    #[test]
    fn test_run_is_reproducible() {
        let run = || {
            let mut simulation = Simulation::new(small_config()).unwrap();
            simulation.run(&mut std::io::sink()).unwrap()
        };
        assert_eq!(run(), run());
    }
}
