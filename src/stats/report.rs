//! Summary report types and terminal formatting.

use serde::Serialize;
use std::fmt;

use crate::record::Split;

/// Identity, image and camera counts for each split of a dataset.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct DatasetSummary {
    /// Dataset name.
    pub name: String,
    /// Training split counts.
    pub train: SplitStats,
    /// Query split counts.
    pub query: SplitStats,
    /// Gallery split counts.
    pub gallery: SplitStats,
}

/// Counts for one split.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize)]
pub struct SplitStats {
    /// Distinct identities.
    pub identities: usize,
    /// Number of records.
    pub images: usize,
    /// Distinct cameras.
    pub cameras: usize,
}

impl DatasetSummary {
    pub fn get(&self, split: Split) -> &SplitStats {
        match split {
            Split::Train => &self.train,
            Split::Query => &self.query,
            Split::Gallery => &self.gallery,
        }
    }
}

const RULE: &str = "  ----------------------------------------";

impl fmt::Display for DatasetSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "=> Loaded {}", self.name)?;
        writeln!(f, "{RULE}")?;
        writeln!(f, "  subset   | # ids | # images | # cameras")?;
        writeln!(f, "{RULE}")?;
        for split in Split::ALL {
            let s = self.get(split);
            writeln!(
                f,
                "  {:<8} | {:>5} | {:>8} | {:>9}",
                split.as_str(),
                s.identities,
                s.images,
                s.cameras
            )?;
        }
        write!(f, "{RULE}")
    }
}
