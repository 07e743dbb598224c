//! Root resolution and required-path checks.

use std::env;
use std::path::{Path, PathBuf};

use crate::error::ReidsetError;

/// Expand a leading `~` and make `root` absolute.
///
/// The filesystem is not consulted, so the result may not exist yet. An empty
/// root resolves to the current directory.
pub fn resolve_root(root: &Path) -> Result<PathBuf, ReidsetError> {
    let expanded = expand_home(root);
    if expanded.as_os_str().is_empty() {
        return Ok(env::current_dir()?);
    }
    Ok(std::path::absolute(expanded)?)
}

fn expand_home(path: &Path) -> PathBuf {
    let Ok(rest) = path.strip_prefix("~") else {
        return path.to_path_buf();
    };
    match env::var_os("HOME") {
        Some(home) if !home.is_empty() => PathBuf::from(home).join(rest),
        _ => path.to_path_buf(),
    }
}

/// Fail on the first path in `paths` that does not exist.
pub fn require_paths<P: AsRef<Path>>(paths: &[P]) -> Result<(), ReidsetError> {
    for path in paths {
        let path = path.as_ref();
        if !path.exists() {
            return Err(ReidsetError::MissingPath {
                path: path.to_path_buf(),
            });
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn absolute_root_is_unchanged() {
        let temp = tempfile::tempdir().expect("create temp dir");
        assert_eq!(resolve_root(temp.path()).unwrap(), temp.path());
    }

    #[test]
    fn relative_root_becomes_absolute() {
        let resolved = resolve_root(Path::new("datasets/reid")).unwrap();
        assert!(resolved.is_absolute());
        assert!(resolved.ends_with("datasets/reid"));
    }

    #[test]
    fn empty_root_is_current_dir() {
        let resolved = resolve_root(Path::new("")).unwrap();
        assert_eq!(resolved, env::current_dir().unwrap());
    }

    #[test]
    fn tilde_is_expanded_against_home() {
        let Some(home) = env::var_os("HOME").filter(|h| !h.is_empty()) else {
            return;
        };
        let resolved = resolve_root(Path::new("~/reid")).unwrap();
        assert_eq!(resolved, std::path::absolute(PathBuf::from(home).join("reid")).unwrap());
    }

    #[test]
    fn require_paths_reports_first_missing() {
        let temp = tempfile::tempdir().expect("create temp dir");
        let present = temp.path().to_path_buf();
        let missing = temp.path().join("query");
        let also_missing = temp.path().join("gallery");

        let err = require_paths(&[&present, &missing, &also_missing]).unwrap_err();
        match err {
            ReidsetError::MissingPath { path } => assert_eq!(path, missing),
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn require_paths_accepts_existing() {
        let temp = tempfile::tempdir().expect("create temp dir");
        require_paths(&[temp.path()]).expect("temp dir exists");
    }
}
