// Tests for flowdata: synthetic epochs, image normalization, construction errors

use std::fs;

use flowdata::{
    datasets::{
        cifar10::batch_records,
        mnist::{idx_images, idx_labels},
    },
    Config, Error, FlowDataset, N_DATASET_SIZE,
};
use ndarray::Ix3;

const SYNTHETIC: [&str; 5] = ["circles", "moons", "normals", "swiss", "s_curve"];

// Synthetic datasets

#[test]
fn synthetic_length_survives_resampling() {
    for name in SYNTHETIC {
        let mut dataset = FlowDataset::new(name).unwrap();
        assert_eq!(dataset.len(), N_DATASET_SIZE, "{name}");
        for _ in 0..N_DATASET_SIZE {
            dataset.get(0).unwrap();
        }
        assert_eq!(dataset.points().unwrap().epoch(), 1, "{name}");
        assert_eq!(dataset.len(), N_DATASET_SIZE, "{name}");
    }
}

#[test]
fn one_epoch_visits_every_row_in_reverse() {
    let mut dataset = FlowDataset::from_config(&Config::new("s_curve").samples(1000).seed(1)).unwrap();
    let rows = dataset.points().unwrap().samples().to_owned();

    for i in (0..1000).rev() {
        let sample = dataset.get(i).unwrap();
        let expected = rows.row(i).mapv(|x| x as f32);
        assert_eq!(sample.as_slice().unwrap(), expected.as_slice().unwrap());
    }

    let ring = dataset.points().unwrap();
    assert_eq!(ring.cursor(), 1000);
    assert_ne!(ring.samples(), rows.view());
}

#[test]
fn circles_scenario() {
    let mut dataset = FlowDataset::new("circles").unwrap();
    assert_eq!(dataset.len(), 65536);
    let first = dataset.points().unwrap().samples().to_owned();

    for call in 1..=65536 {
        dataset.get(call).unwrap();
        if call < 65536 {
            assert_eq!(dataset.points().unwrap().cursor(), 65536 - call);
        }
    }
    let ring = dataset.points().unwrap();
    assert_eq!(ring.cursor(), 65536);
    assert_eq!(ring.epoch(), 1);
    assert_ne!(ring.samples(), first.view());

    let next = dataset.get(0).unwrap();
    assert_eq!(next.shape(), &[2]);
    assert!(next.iter().all(|x| x.is_finite()));
}

#[test]
fn moons_stay_in_their_bounding_box() {
    let mut dataset = FlowDataset::from_config(&Config::new("moons").seed(2)).unwrap();
    // crescents span x in [-1, 2], y in [-0.5, 1] before (p - 0.5) / 2, plus noise
    let pad = 6. * 0.08 / 2.;
    for point in dataset.samples().take(N_DATASET_SIZE) {
        let point = point.unwrap();
        let p = point.as_slice().unwrap();
        assert!(p[0] > -0.75 - pad && p[0] < 0.75 + pad, "{point}");
        assert!(p[1] > -0.5 - pad && p[1] < 0.25 + pad, "{point}");
    }
}

// Image datasets

#[test]
fn mnist_samples_are_normalized_chw() {
    let root = tempfile::tempdir().unwrap();
    let dir = root.path().join("data").join("mnist");
    fs::create_dir_all(&dir).unwrap();

    let ramp = (0..784).map(|i| (i % 256) as u8).collect::<Vec<_>>();
    fs::write(dir.join("train-images-idx3-ubyte"), idx_images(&[&ramp[..], &[0; 784], &[255; 784]], 28, 28)).unwrap();
    fs::write(dir.join("train-labels-idx1-ubyte"), idx_labels(&[1, 2, 3])).unwrap();

    let config = Config::new("mnist").root(root.path()).download(false);
    let mut dataset = FlowDataset::from_config(&config).unwrap();
    assert_eq!(dataset.len(), 3);
    assert_eq!(dataset.dims(), &[1, 28, 28]);
    assert!(dataset.points().is_none());

    let image = dataset.get(0).unwrap();
    assert_eq!(image.shape(), dataset.dims());
    assert!(image.iter().all(|x| (-1. ..=1.).contains(x)));
    let image = image.into_dimensionality::<Ix3>().unwrap();
    assert_eq!(image[[0, 0, 0]], -1.);
    assert_eq!(image[[0, 9, 3]], 1.); // pixel 255

    assert!(dataset.get(1).unwrap().iter().all(|&x| x == -1.));
    assert!(dataset.get(2).unwrap().iter().all(|&x| x == 1.));

    let err = dataset.get(3).unwrap_err();
    assert!(matches!(err, Error::IndexOutOfRange { index: 3, len: 3 }));

    assert_eq!(dataset.samples().count(), 3);
}

#[test]
fn cifar10_test_split() {
    let root = tempfile::tempdir().unwrap();
    let dir = root.path().join("data").join("cifar10").join("cifar-10-batches-bin");
    fs::create_dir_all(&dir).unwrap();
    fs::write(dir.join("test_batch.bin"), batch_records(&[(3, [255, 0, 128]), (5, [0, 255, 0])])).unwrap();

    let config = Config::new("cifar10").root(root.path()).train(false).download(false);
    let mut dataset = FlowDataset::from_config(&config).unwrap();
    assert_eq!(dataset.len(), 2);

    for image in dataset.samples() {
        let image = image.unwrap();
        assert_eq!(image.shape(), &[3, 32, 32]);
        assert!(image.iter().all(|x| (-1. ..=1.).contains(x)));
    }

    let image = dataset.get(0).unwrap().into_dimensionality::<Ix3>().unwrap();
    assert_eq!(image[[0, 31, 31]], 1.);
    assert_eq!(image[[1, 0, 0]], -1.);
    assert!((image[[2, 16, 16]] - (128. / 255. * 2. - 1.)).abs() < 1e-6);
}

#[test]
fn missing_image_cache_without_download() {
    let root = tempfile::tempdir().unwrap();
    let config = Config::new("mnist").root(root.path()).download(false);
    let err = FlowDataset::from_config(&config).err().unwrap();
    assert!(matches!(err, Error::MissingFile(_)));
}

// Construction

#[test]
fn bogus_name_is_unsupported() {
    let err = FlowDataset::new("bogus").err().unwrap();
    assert!(matches!(err, Error::UnsupportedDatasetKind(ref name) if name == "bogus"));
}
