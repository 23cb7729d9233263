use std::f64::consts::PI;

use ndarray::{Array1, Array2};
use rand::Rng;

use crate::samplers::{add_noise, Sampler};

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SwissRoll {
    noise: f64,
    scale: f64,
    y_offset: f64,
}

impl SwissRoll {
    pub const fn new() -> Self {
        Self {
            noise: 0.08,
            scale: 0.07,
            y_offset: -1.,
        }
    }
}

impl Default for SwissRoll {
    fn default() -> Self {
        Self::new()
    }
}

impl Sampler for SwissRoll {
    fn dims(&self) -> usize {
        3
    }

    fn sample<R: Rng + ?Sized>(&self, n: usize, rng: &mut R) -> Array2<f64> {
        let (mut points, _) = make_swiss_roll(n, self.noise, rng);
        points.mapv_inplace(|x| x * self.scale);
        points.column_mut(1).mapv_inplace(|y| y + self.y_offset);
        points
    }
}

/// Points on the roll `(t cos t, y, t sin t)` with `t` in `[1.5π, 4.5π)` and
/// `y` in `[0, 21)`. The second value holds each point's `t`.
pub fn make_swiss_roll<R: Rng + ?Sized>(n: usize, noise: f64, rng: &mut R) -> (Array2<f64>, Array1<f64>) {
    let t = Array1::from_shape_fn(n, |_| 1.5 * PI * (1. + 2. * rng.gen::<f64>()));
    let y = Array1::from_shape_fn(n, |_| 21. * rng.gen::<f64>());

    let mut points = Array2::zeros((n, 3));
    for (i, (t, y)) in t.iter().zip(y.iter()).enumerate() {
        points[[i, 0]] = t * t.cos();
        points[[i, 1]] = *y;
        points[[i, 2]] = t * t.sin();
    }

    add_noise(&mut points, noise, rng);
    (points, t)
}
