//! Countdown ring over a generated point cloud.
//!
//! Draws walk the backing array from its last row to its first. The draw that
//! consumes row 0 also replaces the whole array with a fresh sample from the
//! same generator, so the ring never runs dry.

use ndarray::{Array1, Array2, ArrayView2};
use rand::Rng;
use tracing::debug;

use crate::{
    error::{Error, Result},
    samplers::Sampler,
};

pub struct Resampler<S, R> {
    sampler: S,
    rng: R,
    samples: Array2<f64>,
    cursor: usize,
    epoch: u64,
}

impl<S: Sampler, R: Rng> Resampler<S, R> {
    pub fn new(sampler: S, n: usize, mut rng: R) -> Result<Self> {
        if n == 0 {
            return Err(Error::InvalidSampleCount(n));
        }
        let samples = sampler.sample(n, &mut rng);
        Ok(Self {
            sampler,
            rng,
            samples,
            cursor: n,
            epoch: 0,
        })
    }

    /// Rows per epoch.
    pub fn len(&self) -> usize {
        self.samples.nrows()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn dims(&self) -> usize {
        self.samples.ncols()
    }

    /// Rows left before the next regeneration.
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// Number of regenerations so far.
    pub fn epoch(&self) -> u64 {
        self.epoch
    }

    pub fn samples(&self) -> ArrayView2<'_, f64> {
        self.samples.view()
    }

    pub fn draw(&mut self) -> Array1<f32> {
        self.cursor -= 1;
        let row = self.samples.row(self.cursor).mapv(|x| x as f32);
        if self.cursor == 0 {
            self.regenerate();
        }
        row
    }

    fn regenerate(&mut self) {
        let n = self.len();
        self.samples = self.sampler.sample(n, &mut self.rng);
        self.cursor = n;
        self.epoch += 1;
        debug!(epoch = self.epoch, samples = n, "regenerated point cloud");
    }
}

impl<S: Sampler, R: Rng> Iterator for Resampler<S, R> {
    type Item = Array1<f32>;

    fn next(&mut self) -> Option<Self::Item> {
        Some(self.draw())
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (usize::MAX, None)
    }
}
