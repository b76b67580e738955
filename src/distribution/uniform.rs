//! Uniform random cylinders
//!
//! Every cylinder on the disk is equally likely, so requests carry no
//! locality and SSTF has little to exploit. This is the default when a random
//! queue is requested.

use super::CylinderDistribution;
use crate::engine::Cylinder;
use rand::distributions::Uniform;
use rand::{Rng, SeedableRng};
use rand_xoshiro::Xoshiro256PlusPlus;

/// Uniform cylinder distribution
///
/// Keeps the range sampler for the last disk size it saw.
pub struct UniformDistribution {
    range: Option<(Cylinder, Uniform<Cylinder>)>,
    rng: Xoshiro256PlusPlus,
}

impl UniformDistribution {
    pub fn new() -> Self {
        Self::with_rng(Xoshiro256PlusPlus::from_entropy())
    }

    /// Reproducible queue for a given seed
    pub fn with_seed(seed: u64) -> Self {
        Self::with_rng(Xoshiro256PlusPlus::seed_from_u64(seed))
    }

    fn with_rng(rng: Xoshiro256PlusPlus) -> Self {
        Self { range: None, rng }
    }
}

impl Default for UniformDistribution {
    fn default() -> Self {
        Self::new()
    }
}

impl CylinderDistribution for UniformDistribution {
    fn next_cylinder(&mut self, disk_size: Cylinder) -> Cylinder {
        if disk_size <= 1 {
            return 0;
        }

        let sampler = match self.range {
            Some((size, sampler)) if size == disk_size => sampler,
            _ => {
                let sampler = Uniform::new(0, disk_size);
                self.range = Some((disk_size, sampler));
                sampler
            }
        };
        self.rng.sample(sampler)
    }
}
