use std::{fmt, str::FromStr};

use crate::{
    error::Error,
    samplers::{
        circles::Circles,
        moons::Moons,
        normals::Normals,
        s_curve::SCurve,
        swiss_roll::SwissRoll,
        Toy,
    },
};

/// Every dataset a [`FlowDataset`](crate::flow::FlowDataset) can be built from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DatasetKind {
    Mnist,
    Cifar10,
    Circles,
    Moons,
    Normals,
    Swiss,
    SCurve,
}

/// Coarse grouping of kinds by the shape of a single sample.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    Image,
    Planar,
    Spatial,
}

impl DatasetKind {
    pub const ALL: [DatasetKind; 7] = [
        DatasetKind::Mnist,
        DatasetKind::Cifar10,
        DatasetKind::Circles,
        DatasetKind::Moons,
        DatasetKind::Normals,
        DatasetKind::Swiss,
        DatasetKind::SCurve,
    ];

    pub const fn name(self) -> &'static str {
        match self {
            DatasetKind::Mnist => "mnist",
            DatasetKind::Cifar10 => "cifar10",
            DatasetKind::Circles => "circles",
            DatasetKind::Moons => "moons",
            DatasetKind::Normals => "normals",
            DatasetKind::Swiss => "swiss",
            DatasetKind::SCurve => "s_curve",
        }
    }

    pub const fn category(self) -> Category {
        match self {
            DatasetKind::Mnist | DatasetKind::Cifar10 => Category::Image,
            DatasetKind::Circles | DatasetKind::Moons | DatasetKind::Normals => Category::Planar,
            DatasetKind::Swiss | DatasetKind::SCurve => Category::Spatial,
        }
    }

    /// Shape of one sample: `(c, h, w)` for images, `(d,)` for point clouds.
    pub const fn dims(self) -> &'static [usize] {
        match self {
            DatasetKind::Mnist => &[1, 28, 28],
            DatasetKind::Cifar10 => &[3, 32, 32],
            DatasetKind::Circles | DatasetKind::Moons | DatasetKind::Normals => &[2],
            DatasetKind::Swiss | DatasetKind::SCurve => &[3],
        }
    }

    /// The generator backing a synthetic kind, `None` for image kinds.
    pub fn sampler(self) -> Option<Toy> {
        match self {
            DatasetKind::Mnist | DatasetKind::Cifar10 => None,
            DatasetKind::Circles => Some(Toy::Circles(Circles::new())),
            DatasetKind::Moons => Some(Toy::Moons(Moons::new())),
            DatasetKind::Normals => Some(Toy::Normals(Normals::new())),
            DatasetKind::Swiss => Some(Toy::SwissRoll(SwissRoll::new())),
            DatasetKind::SCurve => Some(Toy::SCurve(SCurve::new())),
        }
    }

    pub const fn is_synthetic(self) -> bool {
        !matches!(self.category(), Category::Image)
    }
}

impl FromStr for DatasetKind {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|kind| kind.name() == s)
            .ok_or_else(|| Error::UnsupportedDatasetKind(s.to_owned()))
    }
}

impl fmt::Display for DatasetKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Category::Image => "image",
            Category::Planar => "2d",
            Category::Spatial => "3d",
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn names_round_trip_through_parse() {
        for kind in DatasetKind::ALL {
            assert_eq!(kind.name().parse::<DatasetKind>().unwrap(), kind);
            assert_eq!(kind.to_string(), kind.name());
        }
    }

    #[test]
    fn unknown_name_is_rejected() {
        let err = "bogus".parse::<DatasetKind>().unwrap_err();
        assert!(matches!(err, Error::UnsupportedDatasetKind(ref name) if name == "bogus"));
        assert_eq!(err.to_string(), "unsupported dataset kind: \"bogus\"");
    }

    #[test]
    fn names_are_case_sensitive() {
        assert!("MNIST".parse::<DatasetKind>().is_err());
        assert!("s-curve".parse::<DatasetKind>().is_err());
    }

    #[test]
    fn metadata_matches_category() {
        assert_eq!(DatasetKind::Mnist.dims(), &[1, 28, 28]);
        assert_eq!(DatasetKind::Cifar10.dims(), &[3, 32, 32]);
        assert_eq!(DatasetKind::Moons.category().to_string(), "2d");
        assert_eq!(DatasetKind::SCurve.category().to_string(), "3d");
        assert_eq!(DatasetKind::Cifar10.category().to_string(), "image");

        for kind in DatasetKind::ALL {
            match kind.sampler() {
                Some(sampler) => {
                    use crate::samplers::Sampler;
                    assert!(kind.is_synthetic());
                    assert_eq!(kind.dims(), &[sampler.dims()]);
                }
                None => assert_eq!(kind.category(), Category::Image),
            }
        }
    }
}
