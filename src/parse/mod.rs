//! Directory scanning and filename parsing.
//!
//! Re-id image names embed the person identity and the camera that captured
//! them, e.g. `0001_c3s1_000151_01.jpg` is identity `1` seen by camera `3`.
//! [`parse_directory`] lists the `*.jpg` files of one directory, decodes both
//! values and, for training splits, remaps identities to dense labels.
//!
//! The scan runs in two passes over the same listing: the first collects the
//! distinct identities so the label mapping is complete before the second
//! pass emits any record.

use std::collections::{BTreeMap, BTreeSet};
use std::fs;
use std::path::{Path, PathBuf};

use log::debug;
use regex::Regex;
use walkdir::{DirEntry, WalkDir};

use crate::error::ReidsetError;
use crate::record::{CameraId, ImageRecord, PersonId};

/// Extension matched by the `*.jpg` listing (case sensitive).
pub const IMAGE_EXTENSION: &str = "jpg";

/// `<identity>_c<camera>`: identity is digits with optional hyphens, camera a
/// single digit.
const FILENAME_PATTERN: &str = r"([-0-9]+)_c([0-9])";

/// Identity and camera code decoded from one file name.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ParsedName {
    /// Raw identity code.
    pub identity: PersonId,
    /// 1-based camera code as written in the file name (not yet range checked).
    pub camera_code: u32,
}

/// Compiled `<identity>_c<camera>` pattern.
#[derive(Clone, Debug)]
pub struct FilenamePattern {
    regex: Regex,
}

impl Default for FilenamePattern {
    fn default() -> Self {
        Self::new()
    }
}

impl FilenamePattern {
    pub fn new() -> Self {
        Self {
            regex: Regex::new(FILENAME_PATTERN).expect("filename pattern is a valid regex"),
        }
    }

    /// Decode identity and camera code from the file name of `path`.
    ///
    /// Only the final path component is searched; the first match wins.
    pub fn parse(&self, path: &Path) -> Result<ParsedName, ReidsetError> {
        let file_name = path
            .file_name()
            .map(|name| name.to_string_lossy())
            .unwrap_or_default();

        self.parse_name(&file_name)
            .map_err(|failure| failure.into_error(path))
    }

    fn parse_name(&self, file_name: &str) -> Result<ParsedName, NameFailure> {
        let caps = self
            .regex
            .captures(file_name)
            .ok_or(NameFailure::NoMatch)?;

        let raw_identity = &caps[1];
        let identity = raw_identity
            .parse::<i64>()
            .map_err(|_| NameFailure::Identity(raw_identity.to_string()))?;

        // A single ASCII digit always fits.
        let camera_code = caps[2].parse::<u32>().unwrap_or_default();

        Ok(ParsedName {
            identity: PersonId::new(identity),
            camera_code,
        })
    }
}

enum NameFailure {
    NoMatch,
    Identity(String),
}

impl NameFailure {
    fn into_error(self, path: &Path) -> ReidsetError {
        match self {
            NameFailure::NoMatch => ReidsetError::FilenamePatternMismatch {
                path: path.to_path_buf(),
            },
            NameFailure::Identity(raw) => ReidsetError::InvalidIdentity {
                path: path.to_path_buf(),
                raw,
            },
        }
    }
}

/// Scan `dir` for `*.jpg` images and decode one record per file.
///
/// With `relabel`, identities are replaced by dense labels `0..K` assigned in
/// ascending raw-identity order. Without it the raw codes are kept.
///
/// Records follow the listing order, which is sorted by file name. Record
/// paths are `dir` joined with the file name, so they are absolute whenever
/// `dir` is.
///
/// Any file that does not match the filename pattern, or whose camera code is
/// outside `1..=8`, aborts the whole scan. An empty directory yields an empty
/// vector.
pub fn parse_directory(dir: &Path, relabel: bool) -> Result<Vec<ImageRecord>, ReidsetError> {
    let pattern = FilenamePattern::new();
    let image_paths = collect_images(dir)?;

    let mut identities = BTreeSet::new();
    for path in &image_paths {
        identities.insert(pattern.parse(path)?.identity);
    }
    let labels = dense_labels(&identities, 0);

    let mut records = Vec::with_capacity(image_paths.len());
    for path in image_paths {
        let parsed = pattern.parse(&path)?;
        let camera = CameraId::from_code(parsed.camera_code).ok_or_else(|| {
            ReidsetError::CameraOutOfRange {
                path: path.clone(),
                camera: parsed.camera_code,
            }
        })?;

        let identity = if relabel {
            labels[&parsed.identity]
        } else {
            parsed.identity
        };

        records.push(ImageRecord::new(path, identity, camera));
    }

    debug!(
        "parsed {} image(s) with {} identities from {} (relabel: {})",
        records.len(),
        identities.len(),
        dir.display(),
        relabel
    );

    Ok(records)
}

/// Map each identity to a dense label starting at `offset`, in ascending order.
pub fn dense_labels(identities: &BTreeSet<PersonId>, offset: i64) -> BTreeMap<PersonId, PersonId> {
    identities
        .iter()
        .enumerate()
        .map(|(index, id)| (*id, PersonId::new(offset + index as i64)))
        .collect()
}

/// List the files directly inside `dir` that a `*.jpg` glob would match.
///
/// Subdirectories are not descended into and hidden files are skipped.
/// Symlinks are listed unless they resolve to a directory; a dangling link
/// is listed like a regular file.
pub fn collect_images(dir: &Path) -> Result<Vec<PathBuf>, ReidsetError> {
    if !dir.is_dir() {
        return Err(ReidsetError::MissingPath {
            path: dir.to_path_buf(),
        });
    }

    let mut files = Vec::new();

    for entry in WalkDir::new(dir)
        .min_depth(1)
        .max_depth(1)
        .sort_by_file_name()
    {
        let entry = entry.map_err(|source| ReidsetError::DirectoryTraversal {
            path: dir.to_path_buf(),
            message: source.to_string(),
        })?;

        if is_listed_file(&entry) && matches_image_glob(entry.path()) {
            files.push(entry.path().to_path_buf());
        }
    }

    Ok(files)
}

fn is_listed_file(entry: &DirEntry) -> bool {
    let file_type = entry.file_type();
    if !file_type.is_symlink() {
        return file_type.is_file();
    }
    fs::metadata(entry.path())
        .map(|meta| !meta.is_dir())
        .unwrap_or(true)
}

fn matches_image_glob(path: &Path) -> bool {
    let Some(name) = path.file_name() else {
        return false;
    };

    !name.as_encoded_bytes().starts_with(b".")
        && path
            .extension()
            .is_some_and(|ext| ext == IMAGE_EXTENSION)
}

/// Fuzz-only entrypoint for file name parsing.
#[cfg(feature = "fuzzing")]
pub fn fuzz_parse_file_name(input: &str) -> Result<(), ReidsetError> {
    let pattern = FilenamePattern::new();
    let parsed = pattern.parse(Path::new(input))?;
    let _ = CameraId::from_code(parsed.camera_code);
    Ok(())
}
