use ndarray::{Array3, ArrayView3};

use crate::error::{Error, Result};

pub mod cifar10;
#[cfg(feature = "download")]
mod download;
pub mod mnist;

/// Which half of a labelled image collection to load.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Split {
    Train,
    Test,
}

impl Split {
    pub const fn from_train_flag(train: bool) -> Self {
        if train { Split::Train } else { Split::Test }
    }
}

/// Indexed collection of labelled images.
pub trait Dataset {
    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// `(channels, height, width)` of every image.
    fn dims(&self) -> [usize; 3];

    /// Raw pixels in `height × width × channels` order, and the label.
    fn get(&self, index: usize) -> Result<(&[u8], u8)>;
}

/// Images held in memory as one contiguous byte buffer.
#[derive(Debug, Clone)]
pub struct ImageSet {
    pixels: Vec<u8>,
    labels: Vec<u8>,
    dims: [usize; 3],
}

impl ImageSet {
    /// `pixels` must hold `labels.len()` images laid out height × width × channels.
    pub fn new(pixels: Vec<u8>, labels: Vec<u8>, dims: [usize; 3]) -> Result<Self> {
        let expected = dims
            .iter()
            .try_fold(labels.len(), |n, &d| n.checked_mul(d))
            .unwrap_or(usize::MAX);
        if pixels.len() != expected {
            return Err(Error::Truncated {
                what: "image buffer",
                expected,
                got: pixels.len(),
            });
        }
        Ok(Self { pixels, labels, dims })
    }

    fn image_size(&self) -> usize {
        self.dims.iter().product()
    }

    pub fn label(&self, index: usize) -> Result<u8> {
        self.get(index).map(|(_, label)| label)
    }

    /// Image `index` as `(c, h, w)` floats in `[-1, 1]`.
    pub fn normalized(&self, index: usize) -> Result<Array3<f32>> {
        let (pixels, _) = self.get(index)?;
        let [c, h, w] = self.dims;
        let hwc = ArrayView3::from_shape((h, w, c), pixels)?;
        let chw = hwc
            .mapv(|p| f32::from(p) / 255. * 2. - 1.)
            .permuted_axes([2, 0, 1]);
        Ok(chw.as_standard_layout().into_owned())
    }
}

impl Dataset for ImageSet {
    fn len(&self) -> usize {
        self.labels.len()
    }

    fn dims(&self) -> [usize; 3] {
        self.dims
    }

    fn get(&self, index: usize) -> Result<(&[u8], u8)> {
        let len = self.len();
        let label = *self.labels.get(index).ok_or(Error::IndexOutOfRange { index, len })?;
        let size = self.image_size();
        Ok((&self.pixels[index * size..(index + 1) * size], label))
    }
}
