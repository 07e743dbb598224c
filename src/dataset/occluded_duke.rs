//! Occluded-DukeMTMC-reID.
//!
//! Occluded subset of DukeMTMC-reID (Miao et al., "Pose-guided feature
//! alignment for occluded person re-identification", ICCV 2019).
//! 15618 train, 2210 query and 17661 gallery images over 8 cameras.
//!
//! Expected layout:
//!
//! ```text
//! <root>/occluded_duke/
//!     bounding_box_train/   train
//!     query/                query
//!     bounding_box_test/    gallery
//! ```
//!
//! The dataset has no public download source, so it must be placed under the
//! root by hand.

use std::path::{Path, PathBuf};

use log::info;

use super::paths::{require_paths, resolve_root};
use super::{DatasetOptions, ReidDataset};
use crate::error::ReidsetError;
use crate::parse::parse_directory;
use crate::record::Splits;

/// Human-readable dataset name.
pub const NAME: &str = "OccludedDuke";

/// Dataset directory under the root.
pub const DATASET_DIR: &str = "occluded_duke";
pub const TRAIN_DIR: &str = "bounding_box_train";
pub const QUERY_DIR: &str = "query";
pub const GALLERY_DIR: &str = "bounding_box_test";

/// Resolved directories of one dataset instance.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SplitLayout {
    pub dataset_dir: PathBuf,
    pub train_dir: PathBuf,
    pub query_dir: PathBuf,
    pub gallery_dir: PathBuf,
}

impl SplitLayout {
    /// The directories that must exist before scanning.
    pub fn required_paths(&self) -> [&Path; 4] {
        [
            &self.dataset_dir,
            &self.train_dir,
            &self.query_dir,
            &self.gallery_dir,
        ]
    }
}

/// Resolve the split directories under `root` without checking them.
pub fn layout(root: &Path) -> Result<SplitLayout, ReidsetError> {
    let dataset_dir = resolve_root(root)?.join(DATASET_DIR);
    Ok(SplitLayout {
        train_dir: dataset_dir.join(TRAIN_DIR),
        query_dir: dataset_dir.join(QUERY_DIR),
        gallery_dir: dataset_dir.join(GALLERY_DIR),
        dataset_dir,
    })
}

/// Scan the three split directories under `root`.
///
/// Train identities are relabeled to `0..K`; query and gallery keep their raw
/// codes so they stay comparable with each other.
pub fn build_splits(root: &Path) -> Result<Splits, ReidsetError> {
    let layout = layout(root)?;
    require_paths(&layout.required_paths())?;

    Ok(Splits {
        train: parse_directory(&layout.train_dir, true)?,
        query: parse_directory(&layout.query_dir, false)?,
        gallery: parse_directory(&layout.gallery_dir, false)?,
    })
}

/// Build the splits and aggregate them into a [`ReidDataset`].
pub fn load(opts: &DatasetOptions) -> Result<ReidDataset, ReidsetError> {
    let splits = build_splits(&opts.root)?;
    let dataset = ReidDataset::new(NAME, splits, opts);
    info!("{}", dataset.summary());
    Ok(dataset)
}
