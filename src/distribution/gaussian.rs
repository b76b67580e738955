//! Gaussian (normal) cylinder distribution
//!
//! Requests cluster around a center cylinder, modelling locality of reference
//! (for example a single hot file on a mostly idle disk).
//!
//! # Parameters
//!
//! - **stddev**: spread as a fraction of the disk size (must be > 0)
//! - **center**: mean position as a fraction of the disk (0.0-1.0)
//!
//! Samples falling off either edge are clamped to the first or last cylinder.

use super::CylinderDistribution;
use crate::engine::Cylinder;
use rand::Rng;
use rand::SeedableRng;
use rand_distr::Normal;
use rand_xoshiro::Xoshiro256PlusPlus;

/// Gaussian cylinder distribution
pub struct GaussianDistribution {
    stddev: f64,
    center: f64,
    rng: Xoshiro256PlusPlus,
}

impl GaussianDistribution {
    /// Create a new Gaussian distribution
    ///
    /// # Panics
    ///
    /// Panics if stddev <= 0 or center outside [0.0, 1.0].
    pub fn new(stddev: f64, center: f64) -> Self {
        Self::with_rng(stddev, center, Xoshiro256PlusPlus::from_entropy())
    }

    /// Create a new Gaussian distribution with specific seed
    pub fn with_seed(stddev: f64, center: f64, seed: u64) -> Self {
        Self::with_rng(stddev, center, Xoshiro256PlusPlus::seed_from_u64(seed))
    }

    fn with_rng(stddev: f64, center: f64, rng: Xoshiro256PlusPlus) -> Self {
        assert!(stddev > 0.0, "Standard deviation must be positive");
        assert!((0.0..=1.0).contains(&center), "Center must be in range [0.0, 1.0]");
        Self { stddev, center, rng }
    }
}

impl CylinderDistribution for GaussianDistribution {
    fn next_cylinder(&mut self, disk_size: Cylinder) -> Cylinder {
        if disk_size <= 1 {
            return 0;
        }

        let last = f64::from(disk_size - 1);
        let mean = self.center * last;
        let value = match Normal::new(mean, self.stddev * f64::from(disk_size)) {
            Ok(normal) => self.rng.sample(normal),
            Err(_) => mean,
        };

        value.round().clamp(0.0, last) as Cylinder
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_gaussian_in_range() {
        let mut dist = GaussianDistribution::new(0.1, 0.5);
        for _ in 0..100 {
            assert!(dist.next_cylinder(1000) < 1000);
        }
    }

    #[test]
    fn test_gaussian_degenerate_disks() {
        let mut dist = GaussianDistribution::new(0.1, 0.5);
        assert_eq!(dist.next_cylinder(0), 0);
        assert_eq!(dist.next_cylinder(1), 0);
    }

    #[test]
    fn test_gaussian_seeded() {
        let mut dist1 = GaussianDistribution::with_seed(0.1, 0.5, 12345);
        let mut dist2 = GaussianDistribution::with_seed(0.1, 0.5, 12345);
        for _ in 0..10 {
            assert_eq!(dist1.next_cylinder(1000), dist2.next_cylinder(1000));
        }
    }

    #[test]
    fn test_gaussian_clusters_around_center() {
        let mut dist = GaussianDistribution::with_seed(0.1, 0.5, 42);
        let disk_size = 1000u32;
        let center = 500i64;

        let total: i64 = (0..1000)
            .map(|_| (i64::from(dist.next_cylinder(disk_size)) - center).abs())
            .sum();
        let avg_distance = total as f64 / 1000.0;

        assert!(
            avg_distance < f64::from(disk_size) * 0.15,
            "Gaussian should cluster around center: avg_distance={}",
            avg_distance
        );
    }

    #[test]
    fn test_gaussian_edge_centers_clamp() {
        for center in [0.0, 1.0] {
            let mut dist = GaussianDistribution::with_seed(0.3, center, 8);
            for _ in 0..200 {
                assert!(dist.next_cylinder(100) < 100);
            }
        }
    }

    #[test]
    #[should_panic(expected = "Standard deviation must be positive")]
    fn test_gaussian_invalid_stddev() {
        let _ = GaussianDistribution::new(0.0, 0.5);
    }
}
