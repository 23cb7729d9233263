//! MNIST handwritten digits in the IDX format.
//!
//! images: magic(2051) | count | rows | cols | pixels (u8, row-major)
//! labels: magic(2049) | count | labels (u8)
//!
//! Header fields are big-endian u32. Files may be stored plain or gzipped.

use std::{
    fs::{self, File},
    io::Read,
    path::{Path, PathBuf},
};

use flate2::read::GzDecoder;
use tracing::debug;

use crate::{
    datasets::{ImageSet, Split},
    error::{Error, Result},
};

//noinspection HttpUrlsUsage
#[cfg_attr(not(feature = "download"), allow(dead_code))]
const MIRRORS: [&str; 2] = [
    "https://ossci-datasets.s3.amazonaws.com/mnist/",
    "http://yann.lecun.com/exdb/mnist/",
];

const IMAGES_MAGIC: u32 = 2051;
const LABELS_MAGIC: u32 = 2049;

/// An MNIST split cached under a directory.
pub struct MNIST {
    dir: PathBuf,
    split: Split,
}

impl MNIST {
    /// Uses whatever files are already present in `dir`.
    pub fn offline(dir: impl Into<PathBuf>, split: Split) -> Self {
        Self {
            dir: dir.into(),
            split,
        }
    }

    /// Like [`MNIST::offline`], fetching whatever is missing from `dir` first.
    pub fn online(dir: impl Into<PathBuf>, split: Split) -> Result<Self> {
        let mnist = Self::offline(dir, split);
        let (images, labels) = file_names(split);
        for name in [images, labels] {
            if locate(&mnist.dir, name).is_none() {
                #[cfg(feature = "download")]
                super::download::fetch(&MIRRORS, &format!("{name}.gz"), &mnist.dir.join(format!("{name}.gz")))?;
                #[cfg(not(feature = "download"))]
                return Err(Error::MissingFile(mnist.dir.join(name)));
            }
        }
        Ok(mnist)
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    pub fn split(&self) -> Split {
        self.split
    }

    /// Reads and decodes the split.
    pub fn load(&self) -> Result<ImageSet> {
        let (images, labels) = file_names(self.split);
        let images = read_maybe_gz(&self.dir, images)?;
        let labels = read_maybe_gz(&self.dir, labels)?;
        Self::from_idx(&images, &labels)
    }

    /// Decodes a pair of in-memory IDX files.
    pub fn from_idx(images: &[u8], labels: &[u8]) -> Result<ImageSet> {
        let (pixels, count, rows, cols) = parse_images(images)?;
        let labels = parse_labels(labels)?;
        if count != labels.len() {
            return Err(Error::CountMismatch {
                images: count,
                labels: labels.len(),
            });
        }
        ImageSet::new(pixels, labels, [1, rows, cols])
    }
}

fn file_names(split: Split) -> (&'static str, &'static str) {
    match split {
        Split::Train => ("train-images-idx3-ubyte", "train-labels-idx1-ubyte"),
        Split::Test => ("t10k-images-idx3-ubyte", "t10k-labels-idx1-ubyte"),
    }
}

/// Plain file first, then its `.gz` sibling.
fn locate(dir: &Path, name: &str) -> Option<PathBuf> {
    [dir.join(name), dir.join(format!("{name}.gz"))]
        .into_iter()
        .find(|path| path.is_file())
}

fn read_maybe_gz(dir: &Path, name: &str) -> Result<Vec<u8>> {
    let path = locate(dir, name).ok_or_else(|| Error::MissingFile(dir.join(name)))?;
    debug!(path = %path.display(), "reading cached file");
    if path.extension().is_some_and(|ext| ext == "gz") {
        let mut bytes = Vec::new();
        GzDecoder::new(File::open(&path)?).read_to_end(&mut bytes)?;
        Ok(bytes)
    } else {
        Ok(fs::read(&path)?)
    }
}

fn read_u32_be(data: &[u8], offset: usize) -> u32 {
    u32::from_be_bytes([data[offset], data[offset + 1], data[offset + 2], data[offset + 3]])
}

fn check_header(data: &[u8], what: &'static str, header: usize, magic: u32) -> Result<()> {
    if data.len() < header {
        return Err(Error::Truncated {
            what,
            expected: header,
            got: data.len(),
        });
    }
    let got = read_u32_be(data, 0);
    if got != magic {
        return Err(Error::InvalidMagic { expected: magic, got });
    }
    Ok(())
}

/// Returns `(pixels, count, rows, cols)`.
fn parse_images(data: &[u8]) -> Result<(Vec<u8>, usize, usize, usize)> {
    check_header(data, "IDX images", 16, IMAGES_MAGIC)?;
    let count = read_u32_be(data, 4) as usize;
    let rows = read_u32_be(data, 8) as usize;
    let cols = read_u32_be(data, 12) as usize;

    let expected = count
        .checked_mul(rows)
        .and_then(|n| n.checked_mul(cols))
        .and_then(|n| n.checked_add(16))
        .unwrap_or(usize::MAX);
    if data.len() < expected {
        return Err(Error::Truncated {
            what: "IDX images",
            expected,
            got: data.len(),
        });
    }
    Ok((data[16..expected].to_vec(), count, rows, cols))
}

fn parse_labels(data: &[u8]) -> Result<Vec<u8>> {
    check_header(data, "IDX labels", 8, LABELS_MAGIC)?;
    let count = read_u32_be(data, 4) as usize;

    let expected = count.checked_add(8).unwrap_or(usize::MAX);
    if data.len() < expected {
        return Err(Error::Truncated {
            what: "IDX labels",
            expected,
            got: data.len(),
        });
    }
    Ok(data[8..expected].to_vec())
}

/// Encodes images of `rows × cols` bytes as an IDX image file.
pub fn idx_images(images: &[&[u8]], rows: u32, cols: u32) -> Vec<u8> {
    let mut buf = Vec::new();
    buf.extend_from_slice(&IMAGES_MAGIC.to_be_bytes());
    buf.extend_from_slice(&(images.len() as u32).to_be_bytes());
    buf.extend_from_slice(&rows.to_be_bytes());
    buf.extend_from_slice(&cols.to_be_bytes());
    for image in images {
        buf.extend_from_slice(image);
    }
    buf
}

/// Encodes labels as an IDX label file.
pub fn idx_labels(labels: &[u8]) -> Vec<u8> {
    let mut buf = Vec::new();
    buf.extend_from_slice(&LABELS_MAGIC.to_be_bytes());
    buf.extend_from_slice(&(labels.len() as u32).to_be_bytes());
    buf.extend_from_slice(labels);
    buf
}
