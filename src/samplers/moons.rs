use std::f64::consts::PI;

use ndarray::{Array1, Array2};
use rand::Rng;

use crate::samplers::{add_noise, shuffle_rows, Sampler};

/// Two interleaving half circles, recentred around the origin.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Moons {
    noise: f64,
    shift: f64,
    scale: f64,
}

impl Moons {
    pub const fn new() -> Self {
        Self {
            noise: 0.08,
            shift: 0.5,
            scale: 2.,
        }
    }
}

impl Default for Moons {
    fn default() -> Self {
        Self::new()
    }
}

impl Sampler for Moons {
    fn dims(&self) -> usize {
        2
    }

    fn sample<R: Rng + ?Sized>(&self, n: usize, rng: &mut R) -> Array2<f64> {
        let (points, _) = make_moons(n, self.noise, rng);
        (points - self.shift) / self.scale
    }
}

/// Upper crescent `(cos t, sin t)` labelled 0, lower crescent
/// `(1 - cos t, 0.5 - sin t)` labelled 1, both with `t` spanning `[0, π]`.
pub fn make_moons<R: Rng + ?Sized>(n: usize, noise: f64, rng: &mut R) -> (Array2<f64>, Array1<u8>) {
    let n_out = n / 2;
    let n_in = n - n_out;

    let mut points = Array2::zeros((n, 2));
    let mut labels = Array1::zeros(n);
    for (i, t) in Array1::linspace(0., PI, n_out).iter().enumerate() {
        points[[i, 0]] = t.cos();
        points[[i, 1]] = t.sin();
    }
    for (i, t) in Array1::linspace(0., PI, n_in).iter().enumerate() {
        points[[n_out + i, 0]] = 1. - t.cos();
        points[[n_out + i, 1]] = 1. - t.sin() - 0.5;
        labels[n_out + i] = 1;
    }

    let (mut points, labels) = shuffle_rows(points, labels, rng);
    add_noise(&mut points, noise, rng);
    (points, labels)
}
