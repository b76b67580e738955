//! Zipf (power law) cylinder distribution
//!
//! Cylinder `k` is drawn with probability proportional to `1 / (k + 1)^theta`,
//! so a handful of low cylinders receive most of the requests. Useful for
//! modelling hot metadata regions near the start of the disk.
//!
//! # Characteristics
//!
//! - Small theta (0.5): close to uniform
//! - Large theta (2.0): heavily skewed toward cylinder 0
//!
//! Sampling is delegated to `rand_distr::Zipf`; the sampler is rebuilt only
//! when the disk size changes.

use super::CylinderDistribution;
use crate::engine::Cylinder;
use rand::Rng;
use rand::SeedableRng;
use rand_distr::Zipf;
use rand_xoshiro::Xoshiro256PlusPlus;

/// Zipf cylinder distribution
pub struct ZipfDistribution {
    theta: f64,
    sampler: Option<(Cylinder, Zipf<f64>)>,
    rng: Xoshiro256PlusPlus,
}

impl ZipfDistribution {
    /// Create a new Zipf distribution with exponent `theta`
    ///
    /// # Panics
    ///
    /// Panics if theta is outside (0.0, 3.0]. Config validation rejects such
    /// values before a distribution is ever built.
    pub fn new(theta: f64) -> Self {
        Self::with_rng(theta, Xoshiro256PlusPlus::from_entropy())
    }

    /// Create a new Zipf distribution with specific seed
    pub fn with_seed(theta: f64, seed: u64) -> Self {
        Self::with_rng(theta, Xoshiro256PlusPlus::seed_from_u64(seed))
    }

    fn with_rng(theta: f64, rng: Xoshiro256PlusPlus) -> Self {
        assert!(theta > 0.0 && theta <= 3.0, "Theta must be in range (0.0, 3.0]");
        Self {
            theta,
            sampler: None,
            rng,
        }
    }
}

impl CylinderDistribution for ZipfDistribution {
    fn next_cylinder(&mut self, disk_size: Cylinder) -> Cylinder {
        if disk_size <= 1 {
            return 0;
        }

        if self.sampler.as_ref().map(|(n, _)| *n) != Some(disk_size) {
            self.sampler = Zipf::new(u64::from(disk_size), self.theta)
                .ok()
                .map(|zipf| (disk_size, zipf));
        }

        match &self.sampler {
            Some((_, zipf)) => {
                // Ranks are 1-based
                let rank: f64 = self.rng.sample(zipf);
                (rank as Cylinder).saturating_sub(1).min(disk_size - 1)
            }
            None => self.rng.gen_range(0..disk_size),
        }
    }
}
