//! Newtype IDs for person identities and cameras.
//!
//! Keeping them apart prevents passing a camera index where an identity is
//! expected (both are small integers in practice).

use serde::{Deserialize, Serialize};
use std::fmt;

/// A person identity, either the raw code from a file name or a dense label.
///
/// Raw codes are signed: the filename pattern admits a leading `-`, and some
/// re-id datasets use `-1` for distractor images.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PersonId(pub i64);

impl PersonId {
    /// Creates a new PersonId.
    #[inline]
    pub fn new(id: i64) -> Self {
        Self(id)
    }

    /// Returns the underlying i64 value.
    #[inline]
    pub fn as_i64(&self) -> i64 {
        self.0
    }
}

impl From<i64> for PersonId {
    fn from(id: i64) -> Self {
        Self(id)
    }
}

impl fmt::Debug for PersonId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "PersonId({})", self.0)
    }
}

impl fmt::Display for PersonId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A 0-based camera index.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CameraId(pub u8);

impl CameraId {
    /// Number of cameras a file name may reference (codes `1..=8`).
    pub const COUNT: u8 = 8;

    /// Creates a new CameraId from a 0-based index.
    #[inline]
    pub fn new(index: u8) -> Self {
        Self(index)
    }

    /// Converts a 1-based camera code from a file name.
    ///
    /// Returns `None` when the code is outside `1..=8`.
    pub fn from_code(code: u32) -> Option<Self> {
        if (1..=u32::from(Self::COUNT)).contains(&code) {
            Some(Self((code - 1) as u8))
        } else {
            None
        }
    }

    /// Returns the underlying 0-based index.
    #[inline]
    pub fn as_u8(&self) -> u8 {
        self.0
    }
}

impl fmt::Debug for CameraId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "CameraId({})", self.0)
    }
}

impl fmt::Display for CameraId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
