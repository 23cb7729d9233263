//! Adapter configuration.
//!
//! The experiment's hyperparameter loader owns the file format; this crate
//! only needs the handful of values below, so [`Config`] derives serde and
//! falls back to defaults for anything left out.

use std::{env, path::PathBuf};

use serde::{Deserialize, Serialize};

use crate::{
    error::{Error, Result},
    kind::DatasetKind,
};

/// Rows per synthetic epoch.
pub const N_DATASET_SIZE: usize = 65536;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Dataset name, e.g. `"moons"` or `"cifar10"`.
    pub name: String,
    /// Directory holding `data/`. Defaults to the process working directory.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub root: Option<PathBuf>,
    /// Rows per synthetic epoch.
    pub samples: usize,
    /// Load the training split of image datasets (test split otherwise).
    pub train: bool,
    /// Fetch missing image datasets.
    pub download: bool,
    /// Seed for the synthetic generators; entropy when absent.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub seed: Option<u64>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            name: DatasetKind::Moons.name().to_owned(),
            root: None,
            samples: N_DATASET_SIZE,
            train: true,
            download: true,
            seed: None,
        }
    }
}

impl Config {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    pub fn root(mut self, root: impl Into<PathBuf>) -> Self {
        self.root = Some(root.into());
        self
    }

    pub fn samples(mut self, samples: usize) -> Self {
        self.samples = samples;
        self
    }

    pub fn train(mut self, train: bool) -> Self {
        self.train = train;
        self
    }

    pub fn download(mut self, download: bool) -> Self {
        self.download = download;
        self
    }

    pub fn seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Resolves the dataset kind and checks the remaining values.
    pub fn validate(&self) -> Result<DatasetKind> {
        let kind = self.name.parse::<DatasetKind>()?;
        if kind.is_synthetic() && self.samples == 0 {
            return Err(Error::InvalidSampleCount(self.samples));
        }
        Ok(kind)
    }

    /// `<root>/data/<name>`.
    pub fn data_dir(&self) -> Result<PathBuf> {
        let root = match &self.root {
            Some(root) => root.clone(),
            None => env::current_dir()?,
        };
        Ok(root.join("data").join(&self.name))
    }
}
