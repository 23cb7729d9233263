#![forbid(unsafe_code)]

//! # flowdata
//! # Toy and image datasets for normalizing-flow experiments
//!
//! A [`FlowDataset`] is built from a dataset name and serves one normalized
//! sample at a time.
//! ```
//! # use flowdata::prelude::*;
//! #
//! # fn main() -> Result<(), Error> {
//!     let mut moons = FlowDataset::new("moons")?;
//!     assert_eq!(moons.len(), N_DATASET_SIZE);
//!     let point = moons.get(0)?;
//!     assert_eq!(point.shape(), &[2]);
//! #     Ok(())
//! # }
//! ```
//! Synthetic datasets (`circles`, `moons`, `normals`, `swiss`, `s_curve`) are
//! drawn from a [`Sampler`] and regenerated after every epoch, so they are
//! best consumed as a stream.
//! ```
//! # use flowdata::prelude::*;
//! #
//! # fn main() -> Result<(), Error> {
//!     let config = Config::new("swiss").samples(1024).seed(7);
//!     let mut swiss = FlowDataset::from_config(&config)?;
//!     for point in swiss.samples().take(4096) {
//!         assert_eq!(point?.len(), 3);
//!     }
//!     assert_eq!(swiss.points().unwrap().epoch(), 4);
//! #     Ok(())
//! # }
//! ```
//! Image datasets (`mnist`, `cifar10`) are read from `<root>/data/<name>/`
//! and fetched there first when missing. Pixels come back as `(c, h, w)`
//! arrays scaled to `[-1, 1]`.
//!
//! [`FlowDataset`]: self::flow::FlowDataset
//! [`Sampler`]: self::samplers::Sampler

pub mod config;
pub mod datasets;
pub mod error;
pub mod flow;
pub mod kind;
pub mod resample;
pub mod samplers;

pub use config::{Config, N_DATASET_SIZE};
pub use error::{Error, Result};
pub use flow::FlowDataset;
pub use kind::{Category, DatasetKind};

#[doc(hidden)]
pub mod prelude {
    pub use crate::{
        config::{Config, N_DATASET_SIZE},
        datasets::{cifar10::CIFAR10, mnist::MNIST, Dataset, ImageSet, Split},
        error::Error,
        flow::FlowDataset,
        kind::{Category, DatasetKind},
        resample::Resampler,
        samplers::{
            circles::Circles, moons::Moons, normals::Normals, s_curve::SCurve, swiss_roll::SwissRoll, Sampler, Toy,
        },
    };
}
