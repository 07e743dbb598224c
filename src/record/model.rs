//! Record types produced by directory scans.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;

use super::ids::{CameraId, PersonId};
use crate::error::ReidsetError;

/// One image file with the identity and camera decoded from its name.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ImageRecord {
    /// Absolute path of the image file.
    pub path: PathBuf,

    /// Raw identity code, or its dense label when the directory was relabeled.
    pub identity: PersonId,

    /// 0-based camera index.
    pub camera: CameraId,
}

impl ImageRecord {
    /// Creates a new record.
    pub fn new(
        path: impl Into<PathBuf>,
        identity: impl Into<PersonId>,
        camera: CameraId,
    ) -> Self {
        Self {
            path: path.into(),
            identity: identity.into(),
            camera,
        }
    }
}

/// One of the three re-identification splits.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Split {
    Train,
    Query,
    Gallery,
}

impl Split {
    /// All splits in display order.
    pub const ALL: [Split; 3] = [Split::Train, Split::Query, Split::Gallery];

    pub fn as_str(&self) -> &'static str {
        match self {
            Split::Train => "train",
            Split::Query => "query",
            Split::Gallery => "gallery",
        }
    }
}

impl fmt::Display for Split {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Split {
    type Err = ReidsetError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "train" => Ok(Split::Train),
            "query" => Ok(Split::Query),
            "gallery" | "test" => Ok(Split::Gallery),
            other => Err(ReidsetError::UnknownSplit(other.to_string())),
        }
    }
}

/// The records of all three splits, as produced by one dataset scan.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Splits {
    pub train: Vec<ImageRecord>,
    pub query: Vec<ImageRecord>,
    pub gallery: Vec<ImageRecord>,
}

impl Splits {
    /// Borrow the records of one split.
    pub fn get(&self, split: Split) -> &[ImageRecord] {
        match split {
            Split::Train => &self.train,
            Split::Query => &self.query,
            Split::Gallery => &self.gallery,
        }
    }
}
