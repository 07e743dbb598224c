#![allow(dead_code)]

use std::collections::BTreeMap;
use std::path::Path;

use proptest::prelude::*;
use proptest::strategy::BoxedStrategy;
use proptest::test_runner::{Config as ProptestConfig, FileFailurePersistence};

pub fn proptest_config() -> ProptestConfig {
    let cases = std::env::var("PROPTEST_CASES")
        .ok()
        .and_then(|v| v.parse::<u32>().ok())
        .unwrap_or(64);

    let mut config = ProptestConfig::with_failure_persistence(FileFailurePersistence::WithSource(
        "proptest-regressions",
    ));
    config.cases = cases;
    config.max_shrink_iters = 1024;
    config
}

/// One image file to place in a directory: raw identity and 1-based camera.
#[derive(Clone, Debug)]
pub struct ImageSpec {
    pub identity: i64,
    pub camera_code: u32,
}

impl ImageSpec {
    /// Unique file name for the `index`-th image of a directory.
    pub fn file_name(&self, index: usize) -> String {
        format!(
            "{:04}_c{}_f{:07}.jpg",
            self.identity, self.camera_code, index
        )
    }
}

/// Directory contents with sparse identity codes (including the `-1`
/// distractor code) and valid cameras.
pub fn arb_images(max_images: usize) -> BoxedStrategy<Vec<ImageSpec>> {
    prop::collection::vec(
        (-1i64..5000, 1u32..=8).prop_map(|(identity, camera_code)| ImageSpec {
            identity,
            camera_code,
        }),
        0..=max_images,
    )
    .boxed()
}

/// Write placeholder files for `images` into `dir`, keyed by file name.
pub fn materialize(dir: &Path, images: &[ImageSpec]) -> BTreeMap<String, ImageSpec> {
    let mut by_name = BTreeMap::new();
    for (index, image) in images.iter().enumerate() {
        let name = image.file_name(index);
        std::fs::write(dir.join(&name), b"").expect("write image placeholder");
        by_name.insert(name, image.clone());
    }
    by_name
}
