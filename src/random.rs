//! Seeded source of uniform, normal and Poisson samples.
//!
//! A single [`RandomNumbers`] instance is meant to be driven sequentially: the network
//! borrows it mutably for every operation that needs randomness.
//! Two instances built with the same non-zero seed and driven through the same sequence
//! of calls produce identical samples.
use rand::rngs::OsRng;
use rand::seq::SliceRandom;
use rand::RngCore;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use rand_distr::{Distribution, Normal, Poisson, Uniform};

use crate::error::SNNError;

/// A seeded pseudo-random number generator with a handful of sampling helpers.
#[derive(Debug, Clone)]
pub struct RandomNumbers {
    seed: u64,
    rng: ChaCha8Rng,
}

impl RandomNumbers {
    /// Create a new generator.
    /// A seed of 0 draws a fresh (non-zero) seed from the operating system entropy source.
    ///
    /// # Examples
    ///
    /// ```
    /// use rusty_izhikevich::random::RandomNumbers;
    ///
    /// let mut rng1 = RandomNumbers::new(42);
    /// let mut rng2 = RandomNumbers::new(42);
    /// assert_eq!(rng1.uniform(0.0, 1.0).unwrap(), rng2.uniform(0.0, 1.0).unwrap());
    /// ```
    pub fn new(seed: u64) -> Self {
        let seed = match seed {
            0 => loop {
                let fresh = OsRng.next_u64();
                if fresh != 0 {
                    break fresh;
                }
            },
            s => s,
        };
        log::debug!("Random number generator seeded with {}", seed);
        RandomNumbers {
            seed,
            rng: ChaCha8Rng::seed_from_u64(seed),
        }
    }

    /// Returns the effective seed, i.e., the one drawn from entropy if 0 was provided.
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Sample a value uniformly in [lower, upper).
    pub fn uniform(&mut self, lower: f64, upper: f64) -> Result<f64, SNNError> {
        match uniform_dist(lower, upper)? {
            Some(dist) => Ok(dist.sample(&mut self.rng)),
            None => Ok(lower),
        }
    }

    /// Fill the slice with independent samples uniformly distributed in [lower, upper).
    pub fn uniform_fill(&mut self, values: &mut [f64], lower: f64, upper: f64) -> Result<(), SNNError> {
        match uniform_dist(lower, upper)? {
            Some(dist) => values.iter_mut().for_each(|v| *v = dist.sample(&mut self.rng)),
            None => values.fill(lower),
        }
        Ok(())
    }

    /// Sample a value from a normal distribution with the given mean and standard deviation.
    pub fn normal(&mut self, mean: f64, sd: f64) -> Result<f64, SNNError> {
        let dist = normal_dist(mean, sd)?;
        Ok(dist.sample(&mut self.rng))
    }

    /// Fill the slice with independent samples from a normal distribution.
    pub fn normal_fill(&mut self, values: &mut [f64], mean: f64, sd: f64) -> Result<(), SNNError> {
        let dist = normal_dist(mean, sd)?;
        values.iter_mut().for_each(|v| *v = dist.sample(&mut self.rng));
        Ok(())
    }

    /// Sample a non-negative integer from a Poisson distribution with the given mean.
    /// A zero mean always yields 0.
    pub fn poisson(&mut self, mean: f64) -> Result<u64, SNNError> {
        match poisson_dist(mean)? {
            Some(dist) => Ok(dist.sample(&mut self.rng) as u64),
            None => Ok(0),
        }
    }

    /// Fill the slice with independent samples from a Poisson distribution.
    pub fn poisson_fill(&mut self, values: &mut [u64], mean: f64) -> Result<(), SNNError> {
        match poisson_dist(mean)? {
            Some(dist) => values
                .iter_mut()
                .for_each(|v| *v = dist.sample(&mut self.rng) as u64),
            None => values.fill(0),
        }
        Ok(())
    }

    /// Shuffle the slice in place.
    pub fn shuffle<T>(&mut self, values: &mut [T]) {
        values.shuffle(&mut self.rng);
    }
}

/// Returns `None` for the degenerate interval lower == upper.
fn uniform_dist(lower: f64, upper: f64) -> Result<Option<Uniform<f64>>, SNNError> {
    if !lower.is_finite() || !upper.is_finite() {
        return Err(SNNError::InvalidParameter(format!(
            "uniform bounds must be finite, got [{}, {})",
            lower, upper
        )));
    }
    if upper < lower {
        return Err(SNNError::InvalidParameter(format!(
            "uniform upper bound {} is lower than lower bound {}",
            upper, lower
        )));
    }
    if !(upper - lower).is_finite() {
        return Err(SNNError::InvalidParameter(format!(
            "uniform range [{}, {}) is too wide",
            lower, upper
        )));
    }
    if upper == lower {
        return Ok(None);
    }
    Ok(Some(Uniform::new(lower, upper)))
}

fn normal_dist(mean: f64, sd: f64) -> Result<Normal<f64>, SNNError> {
    if !mean.is_finite() || !(sd >= 0.0) || !sd.is_finite() {
        return Err(SNNError::InvalidParameter(format!(
            "normal distribution requires a finite mean and a finite non-negative standard deviation, got mean {} and sd {}",
            mean, sd
        )));
    }
    Normal::new(mean, sd).map_err(|e| SNNError::InvalidParameter(e.to_string()))
}

/// Returns `None` for a zero mean.
fn poisson_dist(mean: f64) -> Result<Option<Poisson<f64>>, SNNError> {
    if !(mean >= 0.0) || !mean.is_finite() {
        return Err(SNNError::InvalidParameter(format!(
            "Poisson mean must be finite and non-negative, got {}",
            mean
        )));
    }
    if mean == 0.0 {
        return Ok(None);
    }
    Poisson::new(mean)
        .map(Some)
        .map_err(|e| SNNError::InvalidParameter(e.to_string()))
}
