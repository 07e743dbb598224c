//! Image records for person re-identification splits.
//!
//! A record is the triple `(path, identity, camera)`. Identities start out as
//! the raw codes embedded in file names; the training split is relabeled to a
//! dense `0..K` range so it can index a classifier head directly.

mod ids;
mod model;

pub use ids::{CameraId, PersonId};
pub use model::{ImageRecord, Split, Splits};
