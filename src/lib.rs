//! This crate provides tools for simulating sparse random networks of Izhikevich spiking neurons
//! in discrete time.
//!
//! # Creating Networks
//!
//! ## From Scratch
//!
//! ```rust
//! use rusty_izhikevich::network::Network;
//! use rusty_izhikevich::random::RandomNumbers;
//!
//! // Init a network with 3 neurons, one of which is inhibitory
//! let mut rng = RandomNumbers::new(42);
//! let mut network = Network::new();
//! network.resize(3, 0.3, &mut rng).unwrap();
//!
//! // Add links to the network
//! assert!(network.add_link(1, 2, 0.5));
//! assert!(network.add_link(2, 0, 0.5));
//! assert!(!network.add_link(2, 2, 0.5));
//!
//! // Links towards the inhibitory neuron 0 are sign-flipped and doubled
//! assert_eq!(network.neighbors(2), vec![(0, -1.0)]);
//! assert_eq!(network.num_links(), 2);
//! ```
//!
//! ## At Random
//!
//! ```rust
//! use rusty_izhikevich::network::Network;
//! use rusty_izhikevich::random::RandomNumbers;
//!
//! // Create a random network with 100 neurons, each with 4 links on average
//! let mut rng = RandomNumbers::new(42);
//! let mut network = Network::new();
//! network.resize(100, 0.2, &mut rng).unwrap();
//! let num_links = network.random_connect(4.0, 1.0, &mut rng).unwrap();
//!
//! assert_eq!(network.size(), 100);
//! assert_eq!(network.num_links(), num_links);
//! ```
//!
//! # Simulating Networks
//!
//! ```rust
//! use rusty_izhikevich::network::Network;
//! use rusty_izhikevich::random::RandomNumbers;
//!
//! let mut rng = RandomNumbers::new(42);
//! let mut network = Network::new();
//! network.resize(10, 0.3, &mut rng).unwrap();
//! network.random_connect(4.0, 1.0, &mut rng).unwrap();
//!
//! let mut input = vec![0.0; 10];
//! for _ in 0..100 {
//!     rng.normal_fill(&mut input, 0.0, 5.0).unwrap();
//!     let fired = network.step(&input).unwrap();
//!     assert!(fired.iter().all(|&id| id < 10));
//! }
//! ```

pub mod config;
pub mod error;
pub mod network;
pub mod neuron;
pub mod random;
pub mod report;
pub mod simulation;

/// The potential (in mV) at which a neuron fires.
pub const FIRING_THRESHOLD: f64 = 30.0;
