use std::f64::consts::PI;

use ndarray::Array2;
use rand::Rng;
use rand_distr::StandardNormal;

use crate::samplers::Sampler;

/// Gaussian blobs placed evenly on a ring.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Normals {
    radius: f64,
    clusters: usize,
    std_dev: f64,
}

impl Normals {
    pub const fn new() -> Self {
        Self {
            radius: 0.7,
            clusters: 8,
            std_dev: 0.1,
        }
    }

    /// Center of cluster `k`.
    pub fn center(&self, k: usize) -> (f64, f64) {
        let angle = 2. * PI * k as f64 / self.clusters as f64;
        (self.radius * angle.cos(), self.radius * angle.sin())
    }
}

impl Default for Normals {
    fn default() -> Self {
        Self::new()
    }
}

impl Sampler for Normals {
    fn dims(&self) -> usize {
        2
    }

    fn sample<R: Rng + ?Sized>(&self, n: usize, rng: &mut R) -> Array2<f64> {
        let mut points = Array2::zeros((n, 2));
        for mut row in points.outer_iter_mut() {
            let (cx, cy) = self.center(rng.gen_range(0..self.clusters));
            row[0] = cx + self.std_dev * rng.sample::<f64, _>(StandardNormal);
            row[1] = cy + self.std_dev * rng.sample::<f64, _>(StandardNormal);
        }
        points
    }
}
