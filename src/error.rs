use std::{io, path::PathBuf};

use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("unsupported dataset kind: \"{0}\"")]
    UnsupportedDatasetKind(String),

    #[error("sample count must be positive, got {0}")]
    InvalidSampleCount(usize),

    #[error("index {index} out of range for dataset of length {len}")]
    IndexOutOfRange {
        index: usize,
        len: usize,
    },

    #[error("invalid magic number: expected {expected:#06x}, got {got:#06x}")]
    InvalidMagic {
        expected: u32,
        got: u32,
    },

    #[error("count mismatch: {images} images vs {labels} labels")]
    CountMismatch {
        images: usize,
        labels: usize,
    },

    #[error("{what} truncated: expected {expected} bytes, got {got}")]
    Truncated {
        what: &'static str,
        expected: usize,
        got: usize,
    },

    #[error("file not found: {}", .0.display())]
    MissingFile(PathBuf),

    #[error("download of {url} failed: {message}")]
    Download {
        url: String,
        message: String,
    },

    #[error(transparent)]
    Shape(#[from] ndarray::ShapeError),

    #[error(transparent)]
    Io(#[from] io::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
