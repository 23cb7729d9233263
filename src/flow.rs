use ndarray::ArrayD;
use rand::{rngs::StdRng, SeedableRng};
use tracing::info;

use crate::{
    config::Config,
    datasets::{cifar10::CIFAR10, mnist::MNIST, Dataset, ImageSet, Split},
    error::Result,
    kind::{Category, DatasetKind},
    resample::Resampler,
    samplers::Toy,
};

enum Store {
    Images(ImageSet),
    Points(Resampler<Toy, StdRng>),
}

/// Normalized samples for a flow model, from an image dataset or a
/// self-refreshing synthetic point cloud.
///
/// Image kinds are indexed normally. Synthetic kinds hand out their rows in
/// reverse order regardless of the index asked for, and draw a fresh cloud
/// after every `len()` samples, so a consumer must take whole epochs in order
/// to see each generated row exactly once.
pub struct FlowDataset {
    kind: DatasetKind,
    store: Store,
}

impl FlowDataset {
    /// Builds the named dataset with default settings.
    pub fn new(name: &str) -> Result<Self> {
        Self::from_config(&Config::new(name))
    }

    pub fn from_config(config: &Config) -> Result<Self> {
        let kind = config.validate()?;
        let store = match kind.sampler() {
            Some(sampler) => {
                let rng = match config.seed {
                    Some(seed) => StdRng::seed_from_u64(seed),
                    None => StdRng::from_entropy(),
                };
                Store::Points(Resampler::new(sampler, config.samples, rng)?)
            }
            None => {
                let dir = config.data_dir()?;
                let split = Split::from_train_flag(config.train);
                let images = match (kind, config.download) {
                    (DatasetKind::Cifar10, true) => CIFAR10::online(dir, split)?.load()?,
                    (DatasetKind::Cifar10, false) => CIFAR10::offline(dir, split).load()?,
                    (_, true) => MNIST::online(dir, split)?.load()?,
                    (_, false) => MNIST::offline(dir, split).load()?,
                };
                Store::Images(images)
            }
        };

        let dataset = Self { kind, store };
        info!(
            name = kind.name(),
            category = %kind.category(),
            len = dataset.len(),
            "dataset ready"
        );
        Ok(dataset)
    }

    pub fn kind(&self) -> DatasetKind {
        self.kind
    }

    pub fn name(&self) -> &'static str {
        self.kind.name()
    }

    pub fn category(&self) -> Category {
        self.kind.category()
    }

    pub fn dims(&self) -> &'static [usize] {
        self.kind.dims()
    }

    pub fn len(&self) -> usize {
        match &self.store {
            Store::Images(images) => images.len(),
            Store::Points(ring) => ring.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// One sample shaped like [`dims`](Self::dims).
    ///
    /// `index` selects the image for image kinds and is ignored for synthetic
    /// kinds, which return the next row of the current epoch instead.
    pub fn get(&mut self, index: usize) -> Result<ArrayD<f32>> {
        match &mut self.store {
            Store::Images(images) => Ok(images.normalized(index)?.into_dyn()),
            Store::Points(ring) => Ok(ring.draw().into_dyn()),
        }
    }

    /// Samples in access order: every image once, or an endless stream of points.
    pub fn samples(&mut self) -> Samples<'_> {
        Samples {
            dataset: self,
            index: 0,
        }
    }

    /// The resampling ring behind a synthetic kind.
    pub fn points(&self) -> Option<&Resampler<Toy, StdRng>> {
        match &self.store {
            Store::Images(_) => None,
            Store::Points(ring) => Some(ring),
        }
    }

    pub fn images(&self) -> Option<&ImageSet> {
        match &self.store {
            Store::Images(images) => Some(images),
            Store::Points(_) => None,
        }
    }
}

pub struct Samples<'d> {
    dataset: &'d mut FlowDataset,
    index: usize,
}

impl Iterator for Samples<'_> {
    type Item = Result<ArrayD<f32>>;

    fn next(&mut self) -> Option<Self::Item> {
        if let Store::Images(images) = &self.dataset.store {
            if self.index >= images.len() {
                return None;
            }
        }
        let sample = self.dataset.get(self.index);
        self.index += 1;
        Some(sample)
    }
}
