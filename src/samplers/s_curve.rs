use std::f64::consts::PI;

use ndarray::{Array1, Array2};
use rand::Rng;

use crate::samplers::{add_noise, Sampler};

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SCurve {
    noise: f64,
    scale: [f64; 3],
    y_offset: f64,
}

impl SCurve {
    pub const fn new() -> Self {
        Self {
            noise: 0.08,
            scale: [0.7, 0.7, 0.35],
            y_offset: -1.,
        }
    }
}

impl Default for SCurve {
    fn default() -> Self {
        Self::new()
    }
}

impl Sampler for SCurve {
    fn dims(&self) -> usize {
        3
    }

    fn sample<R: Rng + ?Sized>(&self, n: usize, rng: &mut R) -> Array2<f64> {
        let (mut points, _) = make_s_curve(n, self.noise, rng);
        points.column_mut(1).mapv_inplace(|y| y + self.y_offset);
        for (mut column, scale) in points.columns_mut().into_iter().zip(self.scale) {
            column.mapv_inplace(|x| x * scale);
        }
        points
    }
}

/// Points on the curve `(sin t, y, sign(t)(cos t - 1))` with `t` in
/// `[-1.5π, 1.5π)` and `y` in `[0, 2)`. The second value holds each point's `t`.
pub fn make_s_curve<R: Rng + ?Sized>(n: usize, noise: f64, rng: &mut R) -> (Array2<f64>, Array1<f64>) {
    let t = Array1::from_shape_fn(n, |_| 3. * PI * (rng.gen::<f64>() - 0.5));
    let y = Array1::from_shape_fn(n, |_| 2. * rng.gen::<f64>());

    let mut points = Array2::zeros((n, 3));
    for (i, (t, y)) in t.iter().zip(y.iter()).enumerate() {
        points[[i, 0]] = t.sin();
        points[[i, 1]] = *y;
        points[[i, 2]] = t.signum() * (t.cos() - 1.);
    }

    add_noise(&mut points, noise, rng);
    (points, t)
}

#[cfg(test)]
mod tests {
    use rand::{rngs::StdRng, SeedableRng};

    use super::*;

    #[test]
    fn curve_matches_its_parameter() {
        let mut rng = StdRng::seed_from_u64(0);
        let (points, t) = make_s_curve(1000, 0., &mut rng);
        for (row, t) in points.outer_iter().zip(t.iter()) {
            assert!((-1.5 * PI..1.5 * PI).contains(t));
            assert!((row[0] - t.sin()).abs() < 1e-12);
            assert!(row[2].abs() <= 2.);
            assert!((0. ..2.).contains(&row[1]));
        }
    }

    #[test]
    fn scaled_curve_fits_the_unit_cube() {
        let mut rng = StdRng::seed_from_u64(9);
        let points = SCurve::new().sample(4096, &mut rng);
        let pad = 6. * 0.08;
        for row in points.outer_iter() {
            assert!(row[0].abs() < 0.7 * (1. + pad));
            assert!(row[1].abs() < 0.7 * (1. + pad));
            assert!(row[2].abs() < 0.35 * (2. + pad));
        }
    }
}
