#![allow(dead_code)]

use std::fs;
use std::path::{Path, PathBuf};

/// Create an empty placeholder image. Image contents are never read.
pub fn touch(dir: &Path, name: &str) -> PathBuf {
    fs::create_dir_all(dir).expect("create image dir");
    let path = dir.join(name);
    fs::write(&path, b"").expect("write image placeholder");
    path
}

/// Lay out `<root>/occluded_duke/{bounding_box_train,query,bounding_box_test}`
/// with the given file names and return the dataset directory.
pub fn write_occluded_duke(
    root: &Path,
    train: &[&str],
    query: &[&str],
    gallery: &[&str],
) -> PathBuf {
    let base = root.join("occluded_duke");
    for (dir, names) in [
        ("bounding_box_train", train),
        ("query", query),
        ("bounding_box_test", gallery),
    ] {
        let split_dir = base.join(dir);
        fs::create_dir_all(&split_dir).expect("create split dir");
        for name in names {
            touch(&split_dir, name);
        }
    }
    base
}

/// A small dataset where train identities are sparse and query/gallery share
/// codes that never appear in train.
pub fn write_sample_dataset(root: &Path) -> PathBuf {
    write_occluded_duke(
        root,
        &[
            "0005_c1_f0046182.jpg",
            "0005_c2_f0046985.jpg",
            "0009_c3_f0034011.jpg",
            "0112_c8_f0011270.jpg",
        ],
        &["0001_c1_f0057703.jpg", "0004_c5_f0042342.jpg"],
        &[
            "0001_c2_f0046436.jpg",
            "0004_c6_f0059810.jpg",
            "0004_c7_f0061322.jpg",
        ],
    )
}
