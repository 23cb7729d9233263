use std::f64::consts::PI;

use ndarray::{Array1, Array2};
use rand::Rng;

use crate::samplers::{add_noise, linspace_open, shuffle_rows, Sampler};

/// Two concentric noisy circles, shrunk to sit inside the unit square.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Circles {
    noise: f64,
    factor: f64,
    scale: f64,
}

impl Circles {
    pub const fn new() -> Self {
        Self {
            noise: 0.08,
            factor: 0.5,
            scale: 0.6,
        }
    }
}

impl Default for Circles {
    fn default() -> Self {
        Self::new()
    }
}

impl Sampler for Circles {
    fn dims(&self) -> usize {
        2
    }

    fn sample<R: Rng + ?Sized>(&self, n: usize, rng: &mut R) -> Array2<f64> {
        let (points, _) = make_circles(n, self.noise, self.factor, rng);
        points * self.scale
    }
}

/// A large circle containing a smaller one, labelled 0 (outer) and 1 (inner).
///
/// `factor` is the inner radius relative to the outer, unit radius.
pub fn make_circles<R: Rng + ?Sized>(
    n: usize,
    noise: f64,
    factor: f64,
    rng: &mut R,
) -> (Array2<f64>, Array1<u8>) {
    let n_out = n / 2;
    let n_in = n - n_out;

    let t_out = linspace_open(0., 2. * PI, n_out);
    let t_in = linspace_open(0., 2. * PI, n_in);

    let mut points = Array2::zeros((n, 2));
    let mut labels = Array1::zeros(n);
    for (i, t) in t_out.iter().enumerate() {
        points[[i, 0]] = t.cos();
        points[[i, 1]] = t.sin();
    }
    for (i, t) in t_in.iter().enumerate() {
        points[[n_out + i, 0]] = t.cos() * factor;
        points[[n_out + i, 1]] = t.sin() * factor;
        labels[n_out + i] = 1;
    }

    let (mut points, labels) = shuffle_rows(points, labels, rng);
    add_noise(&mut points, noise, rng);
    (points, labels)
}

#[cfg(test)]
mod tests {
    use rand::{rngs::StdRng, SeedableRng};

    use super::*;

    #[test]
    fn noiseless_circles_have_two_radii() {
        let mut rng = StdRng::seed_from_u64(0);
        let (points, labels) = make_circles(101, 0., 0.5, &mut rng);
        assert_eq!(labels.iter().filter(|&&l| l == 0).count(), 50);
        assert_eq!(labels.iter().filter(|&&l| l == 1).count(), 51);
        for (row, label) in points.outer_iter().zip(labels.iter()) {
            let r = row[0].hypot(row[1]);
            let expected = if *label == 0 { 1. } else { 0.5 };
            assert!((r - expected).abs() < 1e-12);
        }
    }

    #[test]
    fn scaled_circles_stay_near_the_unit_square() {
        let mut rng = StdRng::seed_from_u64(1);
        let points = Circles::new().sample(4096, &mut rng);
        // 0.6 * (1 + 6 sigma)
        assert!(points.iter().all(|x| x.abs() < 0.6 * (1. + 6. * 0.08)));
    }
}
