//! Re-identification datasets built from split directories.
//!
//! A dataset loader resolves its directories under a root, checks that they
//! exist, scans each split with [`crate::parse::parse_directory`] and hands the
//! records to [`ReidDataset`], which derives identity/camera counts and can
//! optionally fold query and gallery into the training split.

pub mod occluded_duke;
mod paths;

pub use paths::{require_paths, resolve_root};

use std::collections::{BTreeSet, HashSet};
use std::path::PathBuf;

use crate::parse::dense_labels;
use crate::record::{ImageRecord, PersonId, Split, Splits};
use crate::stats::{summarize, DatasetSummary};

/// Options shared by dataset loaders.
#[derive(Clone, Debug, Default)]
pub struct DatasetOptions {
    /// Directory holding the dataset folder. `~` is expanded.
    pub root: PathBuf,
    /// Append query and gallery to train, relabeled after the train identities.
    pub combine_all: bool,
    /// Identities dropped when combining (distractor codes such as `-1`).
    pub junk_identities: Vec<PersonId>,
}

/// Train/query/gallery records plus derived counts.
#[derive(Clone, Debug)]
pub struct ReidDataset {
    name: String,
    splits: Splits,
    num_train_identities: usize,
    num_train_cameras: usize,
}

impl ReidDataset {
    pub fn new(name: impl Into<String>, mut splits: Splits, opts: &DatasetOptions) -> Self {
        if opts.combine_all {
            combine_all(&mut splits, &opts.junk_identities);
        }

        let num_train_identities = count_identities(&splits.train);
        let num_train_cameras = count_cameras(&splits.train);

        Self {
            name: name.into(),
            splits,
            num_train_identities,
            num_train_cameras,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Records of one split.
    pub fn split(&self, split: Split) -> &[ImageRecord] {
        self.splits.get(split)
    }

    pub fn splits(&self) -> &Splits {
        &self.splits
    }

    pub fn into_splits(self) -> Splits {
        self.splits
    }

    /// Distinct identities in the training split.
    pub fn num_train_identities(&self) -> usize {
        self.num_train_identities
    }

    /// Distinct cameras in the training split.
    pub fn num_train_cameras(&self) -> usize {
        self.num_train_cameras
    }

    /// Per-split identity, image and camera counts.
    pub fn summary(&self) -> DatasetSummary {
        summarize(&self.name, &self.splits)
    }
}

/// Append query and gallery records to train.
///
/// Their identities share one label space starting right after the train
/// labels, assigned in ascending raw order. Junk identities are skipped.
fn combine_all(splits: &mut Splits, junk: &[PersonId]) {
    let junk: HashSet<PersonId> = junk.iter().copied().collect();
    let offset = count_identities(&splits.train) as i64;

    let eval_ids: BTreeSet<PersonId> = splits
        .query
        .iter()
        .chain(&splits.gallery)
        .map(|record| record.identity)
        .filter(|id| !junk.contains(id))
        .collect();
    let labels = dense_labels(&eval_ids, offset);

    let combined: Vec<ImageRecord> = splits
        .query
        .iter()
        .chain(&splits.gallery)
        .filter_map(|record| {
            labels.get(&record.identity).map(|label| ImageRecord {
                identity: *label,
                ..record.clone()
            })
        })
        .collect();

    splits.train.extend(combined);
}

fn count_identities(records: &[ImageRecord]) -> usize {
    records
        .iter()
        .map(|r| r.identity)
        .collect::<HashSet<_>>()
        .len()
}

fn count_cameras(records: &[ImageRecord]) -> usize {
    records
        .iter()
        .map(|r| r.camera)
        .collect::<HashSet<_>>()
        .len()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::record::CameraId;

    fn record(name: &str, identity: i64, camera: u8) -> ImageRecord {
        ImageRecord::new(format!("/data/{name}"), identity, CameraId::new(camera))
    }

    fn sample_splits() -> Splits {
        Splits {
            train: vec![
                record("t0.jpg", 0, 0),
                record("t1.jpg", 0, 1),
                record("t2.jpg", 1, 1),
            ],
            query: vec![record("q0.jpg", 50, 2), record("q1.jpg", -1, 0)],
            gallery: vec![
                record("g0.jpg", 50, 3),
                record("g1.jpg", 20, 4),
                record("g2.jpg", -1, 5),
            ],
        }
    }

    #[test]
    fn counts_are_derived_from_train() {
        let dataset = ReidDataset::new("demo", sample_splits(), &DatasetOptions::default());

        assert_eq!(dataset.num_train_identities(), 2);
        assert_eq!(dataset.num_train_cameras(), 2);
        assert_eq!(dataset.split(Split::Query).len(), 2);
        assert_eq!(dataset.split(Split::Gallery).len(), 3);
    }

    #[test]
    fn combine_all_appends_relabeled_eval_records() {
        let opts = DatasetOptions {
            combine_all: true,
            junk_identities: vec![PersonId(-1)],
            ..Default::default()
        };
        let dataset = ReidDataset::new("demo", sample_splits(), &opts);
        let train = dataset.split(Split::Train);

        // 3 train + q0 + g0 + g1; junk -1 records are dropped.
        assert_eq!(train.len(), 6);
        assert_eq!(train[3], record("q0.jpg", 3, 2));
        assert_eq!(train[4], record("g0.jpg", 3, 3));
        assert_eq!(train[5], record("g1.jpg", 2, 4));
        assert_eq!(dataset.num_train_identities(), 4);
        assert_eq!(dataset.num_train_cameras(), 5);

        // Eval splits keep their raw codes.
        assert_eq!(dataset.split(Split::Query)[0].identity, PersonId(50));
        assert_eq!(dataset.split(Split::Gallery).len(), 3);
    }

    #[test]
    fn combine_all_without_junk_keeps_every_record() {
        let opts = DatasetOptions {
            combine_all: true,
            ..Default::default()
        };
        let dataset = ReidDataset::new("demo", sample_splits(), &opts);

        assert_eq!(dataset.split(Split::Train).len(), 8);
        // -1 sorts first among the eval identities.
        assert_eq!(dataset.split(Split::Train)[4], record("q1.jpg", 2, 0));
        assert_eq!(dataset.num_train_identities(), 5);
    }
}
