//! CIFAR-10 in its binary distribution.
//!
//! Every batch file is a run of 3073-byte records: one label byte followed by
//! the red, green and blue 32×32 planes.

use std::{
    fs,
    path::{Path, PathBuf},
};

use tracing::debug;

use crate::{
    datasets::{ImageSet, Split},
    error::{Error, Result},
};

#[cfg_attr(not(feature = "download"), allow(dead_code))]
const MIRRORS: [&str; 1] = ["https://www.cs.toronto.edu/~kriz/"];
#[cfg_attr(not(feature = "download"), allow(dead_code))]
const ARCHIVE: &str = "cifar-10-binary.tar.gz";
const BATCHES: &str = "cifar-10-batches-bin";

const SIDE: usize = 32;
const CHANNELS: usize = 3;
const PLANE: usize = SIDE * SIDE;
const RECORD: usize = 1 + CHANNELS * PLANE;

/// A CIFAR-10 split cached under a directory.
pub struct CIFAR10 {
    dir: PathBuf,
    split: Split,
}

impl CIFAR10 {
    /// Uses the batches already unpacked in `dir/cifar-10-batches-bin`.
    pub fn offline(dir: impl Into<PathBuf>, split: Split) -> Self {
        Self {
            dir: dir.into(),
            split,
        }
    }

    /// Like [`CIFAR10::offline`], unpacking the archive into `dir` when any
    /// batch is missing. The archive is fetched first unless already present.
    pub fn online(dir: impl Into<PathBuf>, split: Split) -> Result<Self> {
        let cifar = Self::offline(dir, split);
        let batches = cifar.dir.join(BATCHES);
        if !file_names(split).iter().all(|name| batches.join(name).is_file()) {
            #[cfg(feature = "download")]
            {
                let archive = cifar.dir.join(ARCHIVE);
                if !archive.is_file() {
                    super::download::fetch(&MIRRORS, ARCHIVE, &archive)?;
                }
                debug!(archive = %archive.display(), "unpacking");
                let file = fs::File::open(&archive)?;
                tar::Archive::new(flate2::read::GzDecoder::new(file)).unpack(&cifar.dir)?;
            }
            #[cfg(not(feature = "download"))]
            return Err(Error::MissingFile(batches));
        }
        Ok(cifar)
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    pub fn split(&self) -> Split {
        self.split
    }

    /// Reads and decodes every batch of the split.
    pub fn load(&self) -> Result<ImageSet> {
        let batches = self.dir.join(BATCHES);
        let mut records = Vec::new();
        for name in file_names(self.split) {
            let path = batches.join(name);
            if !path.is_file() {
                return Err(Error::MissingFile(path));
            }
            debug!(path = %path.display(), "reading cached file");
            records.extend(fs::read(&path)?);
        }
        Self::from_records(&records)
    }

    /// Decodes concatenated batch records, reordering each image to
    /// height × width × channels.
    pub fn from_records(records: &[u8]) -> Result<ImageSet> {
        if records.len() % RECORD != 0 {
            return Err(Error::Truncated {
                what: "CIFAR-10 batch",
                expected: records.len().div_ceil(RECORD) * RECORD,
                got: records.len(),
            });
        }

        let count = records.len() / RECORD;
        let mut pixels = Vec::with_capacity(count * CHANNELS * PLANE);
        let mut labels = Vec::with_capacity(count);
        for record in records.chunks_exact(RECORD) {
            labels.push(record[0]);
            let planes = &record[1..];
            for p in 0..PLANE {
                pixels.extend((0..CHANNELS).map(|c| planes[c * PLANE + p]));
            }
        }
        ImageSet::new(pixels, labels, [CHANNELS, SIDE, SIDE])
    }
}

fn file_names(split: Split) -> &'static [&'static str] {
    match split {
        Split::Train => &[
            "data_batch_1.bin",
            "data_batch_2.bin",
            "data_batch_3.bin",
            "data_batch_4.bin",
            "data_batch_5.bin",
        ],
        Split::Test => &["test_batch.bin"],
    }
}

/// Encodes `(label, r, g, b)` planes as batch records.
pub fn batch_records(images: &[(u8, [u8; 3])]) -> Vec<u8> {
    let mut buf = Vec::with_capacity(images.len() * RECORD);
    for (label, rgb) in images {
        buf.push(*label);
        for value in rgb {
            buf.extend(std::iter::repeat(*value).take(PLANE));
        }
    }
    buf
}
