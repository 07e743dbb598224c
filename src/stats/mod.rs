//! Dataset statistics.
//!
//! Counts distinct identities and cameras per split and renders them as the
//! table printed after a dataset is loaded.

mod report;

pub use report::{DatasetSummary, SplitStats};

use std::collections::HashSet;

use crate::record::{ImageRecord, Splits};

/// Compute per-split counts for a set of splits.
pub fn summarize(name: &str, splits: &Splits) -> DatasetSummary {
    DatasetSummary {
        name: name.to_string(),
        train: split_stats(&splits.train),
        query: split_stats(&splits.query),
        gallery: split_stats(&splits.gallery),
    }
}

/// Compute counts for one split.
pub fn split_stats(records: &[ImageRecord]) -> SplitStats {
    let identities: HashSet<_> = records.iter().map(|r| r.identity).collect();
    let cameras: HashSet<_> = records.iter().map(|r| r.camera).collect();

    SplitStats {
        identities: identities.len(),
        images: records.len(),
        cameras: cameras.len(),
    }
}
