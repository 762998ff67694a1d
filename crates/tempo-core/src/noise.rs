//! Injectable Gaussian noise for the synthetic concentration models.

use rand::rng;
use rand_distr::{Distribution, Normal};

/// Source of Gaussian noise for simulated readings.
///
/// The simulation, trend and forecast generators take the source as a
/// parameter so their outputs are reproducible under test.
pub trait NoiseSource: Send + Sync {
    /// Draw one sample from N(mean, std_dev).
    fn sample(&self, mean: f64, std_dev: f64) -> f64;
}

/// Default source backed by the thread-local RNG.
#[derive(Debug, Clone, Copy, Default)]
pub struct GaussianNoise;

impl NoiseSource for GaussianNoise {
    fn sample(&self, mean: f64, std_dev: f64) -> f64 {
        match Normal::new(mean, std_dev) {
            Ok(normal) => normal.sample(&mut rng()),
            Err(_) => mean,
        }
    }
}

/// Source that returns a fixed offset, ignoring mean and deviation.
#[derive(Debug, Clone, Copy)]
pub struct FixedNoise(pub f64);

impl NoiseSource for FixedNoise {
    fn sample(&self, _mean: f64, _std_dev: f64) -> f64 {
        self.0
    }
}
