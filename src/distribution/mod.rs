//! Random request-queue generation
//!
//! When the caller does not supply an explicit request queue, diskseek can
//! synthesise one. Each distribution draws cylinder numbers in
//! `[0, disk_size)` and models a different access pattern:
//!
//! - **Uniform**: every cylinder equally likely
//! - **Zipf**: low cylinders are hot, high cylinders cold (power law)
//! - **Gaussian**: requests cluster around a center cylinder (locality)
//!
//! All generators use xoshiro256++ and accept a seed, so a queue can be
//! reproduced exactly across runs and policies.
//!
//! # Example
//!
//! ```
//! use diskseek::distribution::{generate_queue, DistributionKind};
//!
//! let queue = generate_queue(&DistributionKind::Uniform, 8, 200, Some(7));
//! assert_eq!(queue.len(), 8);
//! assert!(queue.iter().all(|&c| c < 200));
//! assert_eq!(queue, generate_queue(&DistributionKind::Uniform, 8, 200, Some(7)));
//! ```

pub mod gaussian;
pub mod uniform;
pub mod zipf;

use crate::engine::Cylinder;
use serde::{Deserialize, Serialize};

/// Cylinder number generator
///
/// Implementations must return a value in `[0, disk_size)` for any
/// `disk_size >= 1`, and 0 when `disk_size` is 0.
pub trait CylinderDistribution: Send {
    /// Draw the next requested cylinder
    fn next_cylinder(&mut self, disk_size: Cylinder) -> Cylinder;
}

/// Distribution selector, as it appears in config files
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, Default)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum DistributionKind {
    #[default]
    Uniform,
    /// Power law with exponent `theta` in (0.0, 3.0]
    Zipf { theta: f64 },
    /// Normal distribution; `stddev` and `center` are fractions of the disk
    Gaussian { stddev: f64, center: f64 },
}

impl DistributionKind {
    pub fn name(&self) -> &'static str {
        match self {
            DistributionKind::Uniform => "uniform",
            DistributionKind::Zipf { .. } => "zipf",
            DistributionKind::Gaussian { .. } => "gaussian",
        }
    }

    /// Instantiate the generator, seeded if `seed` is given
    pub fn build(&self, seed: Option<u64>) -> Box<dyn CylinderDistribution> {
        match (*self, seed) {
            (DistributionKind::Uniform, Some(seed)) => {
                Box::new(uniform::UniformDistribution::with_seed(seed))
            }
            (DistributionKind::Uniform, None) => Box::new(uniform::UniformDistribution::new()),
            (DistributionKind::Zipf { theta }, Some(seed)) => {
                Box::new(zipf::ZipfDistribution::with_seed(theta, seed))
            }
            (DistributionKind::Zipf { theta }, None) => Box::new(zipf::ZipfDistribution::new(theta)),
            (DistributionKind::Gaussian { stddev, center }, Some(seed)) => {
                Box::new(gaussian::GaussianDistribution::with_seed(stddev, center, seed))
            }
            (DistributionKind::Gaussian { stddev, center }, None) => {
                Box::new(gaussian::GaussianDistribution::new(stddev, center))
            }
        }
    }
}

/// Draw `count` requests for a disk of `disk_size` cylinders
pub fn generate_queue(
    kind: &DistributionKind,
    count: usize,
    disk_size: Cylinder,
    seed: Option<u64>,
) -> Vec<Cylinder> {
    let mut dist = kind.build(seed);
    let queue: Vec<Cylinder> = (0..count).map(|_| dist.next_cylinder(disk_size)).collect();
    log::debug!(
        "generated {} {} requests over {} cylinders (seed {:?})",
        count,
        kind.name(),
        disk_size,
        seed
    );
    queue
}
