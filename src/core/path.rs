// Path Value
// Immutable filesystem path with join, existence, staleness and glob queries

use std::fmt;
use std::fs::{self, Metadata};
use std::io;
use std::path::{Path, PathBuf};
use std::time::SystemTime;

use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

use super::error::{Annotate, ErrorKind, Result, WrappedError};
use crate::utilities::paths::{extension_str, join_lexical, relative_path};
use crate::utilities::patterns::PatternMatcher;

/// An immutable filesystem path.
///
/// Operations that derive a new path (such as [`FsPath::join`]) return a new
/// value. Filesystem queries are synchronous, single-attempt, and report every
/// failure as a [`WrappedError`] that names the path involved.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FsPath(PathBuf);

impl FsPath {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self(path.into())
    }

    pub fn as_path(&self) -> &Path {
        &self.0
    }

    pub fn into_path_buf(self) -> PathBuf {
        self.0
    }

    /// Join zero or more segments onto this path.
    ///
    /// Empty elements are skipped, segments keep their order (an absolute
    /// segment does not discard what came before), and the result is cleaned
    /// of `.`, `..` and repeated separators.
    pub fn join<I, S>(&self, segments: I) -> FsPath
    where
        I: IntoIterator<Item = S>,
        S: AsRef<Path>,
    {
        Self(join_lexical(&self.0, segments))
    }

    /// True iff the textual path has zero length. Whitespace counts as content.
    pub fn is_empty(&self) -> bool {
        self.0.as_os_str().is_empty()
    }

    pub fn extension(&self) -> Option<&str> {
        extension_str(&self.0)
    }

    /// Path of `self` relative to `base`, or `None` if only one of them is absolute
    pub fn relative_to(&self, base: &FsPath) -> Option<FsPath> {
        relative_path(&base.0, &self.0).map(Self)
    }

    /// Expand this path as a shell-style glob pattern.
    ///
    /// No matches is not an error. Results come back in the order the glob
    /// engine walks the filesystem; sort them if you need a stable order.
    pub fn glob(&self) -> Result<Vec<FsPath>> {
        let matches = self.glob_iter()?.collect::<Result<Vec<_>>>()?;
        debug!(pattern = %self, matches = matches.len(), "expanded glob");
        Ok(matches)
    }

    /// Lazily expand this path as a glob pattern
    pub fn glob_iter(&self) -> Result<impl Iterator<Item = Result<FsPath>>> {
        let pattern = self.0.to_str().ok_or_else(|| {
            WrappedError::new(glob_failure(&self.to_string())).with_kind(ErrorKind::Pattern)
        })?;

        let paths = glob::glob(pattern).annotate(|| glob_failure(pattern))?;
        let pattern = pattern.to_string();

        Ok(paths.map(move |entry| entry.map(FsPath).annotate(|| glob_failure(&pattern))))
    }

    /// Expand this glob pattern, dropping any match the matcher accepts
    pub fn glob_excluding(&self, excludes: &PatternMatcher) -> Result<Vec<FsPath>> {
        let mut kept = Vec::new();
        for entry in self.glob_iter()? {
            let path = entry?;
            if excludes.matches(&path.0) {
                trace!(path = %path, "excluded from glob");
                continue;
            }
            kept.push(path);
        }
        Ok(kept)
    }

    /// Filesystem metadata for this path
    pub fn stat(&self) -> Result<Metadata> {
        fs::metadata(&self.0).annotate(|| format!("Failed to get FileInfo of '{self}'"))
    }

    /// `Ok(false)` when the path is confirmed absent, `Ok(true)` when it can be
    /// stat'ed, and an error for anything else (e.g. permission denied).
    pub fn exists(&self) -> Result<bool> {
        Ok(self.probe()?.is_some())
    }

    /// Like [`FsPath::exists`], but only true for regular files
    pub fn is_file(&self) -> Result<bool> {
        Ok(self.probe()?.is_some_and(|meta| meta.is_file()))
    }

    /// Like [`FsPath::exists`], but only true for directories
    pub fn is_dir(&self) -> Result<bool> {
        Ok(self.probe()?.is_some_and(|meta| meta.is_dir()))
    }

    /// Last modification time
    pub fn modified(&self) -> Result<SystemTime> {
        self.stat()?
            .modified()
            .annotate(|| format!("Failed to get modification time of '{self}'"))
    }

    /// True if this path is missing or older than `source`.
    ///
    /// Equal modification times count as up to date. A missing `source` is an
    /// error.
    pub fn is_stale_against(&self, source: &FsPath) -> Result<bool> {
        let source_mtime = source.modified()?;

        let Some(target) = self.probe()? else {
            debug!(path = %self, source = %source, "target missing, treating as stale");
            return Ok(true);
        };

        let target_mtime = target
            .modified()
            .annotate(|| format!("Failed to get modification time of '{self}'"))?;

        Ok(source_mtime > target_mtime)
    }

    /// Create this directory and any missing parents
    pub fn create_dir_all(&self) -> Result<FsPath> {
        fs::create_dir_all(&self.0)
            .annotate(|| format!("Failed to create directory '{self}'"))?;
        Ok(self.clone())
    }

    /// Metadata if the path exists, `None` if it is confirmed absent
    fn probe(&self) -> Result<Option<Metadata>> {
        match fs::metadata(&self.0) {
            Ok(meta) => Ok(Some(meta)),
            Err(err) if err.kind() == io::ErrorKind::NotFound => {
                trace!(path = %self, "path does not exist");
                Ok(None)
            }
            Err(err) => Err(WrappedError::with_cause(
                format!("Failed to check existence of '{self}'"),
                err,
            )),
        }
    }
}

fn glob_failure(pattern: &str) -> String {
    format!("Could not execute glob on '{pattern}'")
}

impl fmt::Display for FsPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.display())
    }
}

impl AsRef<Path> for FsPath {
    fn as_ref(&self) -> &Path {
        &self.0
    }
}

impl From<&str> for FsPath {
    fn from(path: &str) -> Self {
        Self(PathBuf::from(path))
    }
}

impl From<String> for FsPath {
    fn from(path: String) -> Self {
        Self(PathBuf::from(path))
    }
}

impl From<&Path> for FsPath {
    fn from(path: &Path) -> Self {
        Self(path.to_path_buf())
    }
}

impl From<PathBuf> for FsPath {
    fn from(path: PathBuf) -> Self {
        Self(path)
    }
}

impl From<FsPath> for PathBuf {
    fn from(path: FsPath) -> Self {
        path.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error;
    use std::fs::File;
    use std::io::Write;
    use std::time::Duration;
    use tempfile::tempdir;

    #[test]
    fn test_join_is_ordered_and_deterministic() {
        let base = FsPath::from("/tmp");
        let first = base.join(["a", "b", "c.txt"]);
        let second = base.join(["a", "b", "c.txt"]);

        assert_eq!(first, second);
        assert_eq!(first.as_path(), Path::new("/tmp").join("a").join("b").join("c.txt"));
        assert_eq!(base.join(["b", "a"]).as_path(), Path::new("/tmp/b/a"));
    }

    #[test]
    fn test_join_empty_inputs() {
        let none: [&str; 0] = [];
        assert!(FsPath::from("").join(none).is_empty());
        assert_eq!(FsPath::from("").join(["x"]), FsPath::from("x"));
        assert_eq!(FsPath::from("a/./b").join(none), FsPath::from("a/b"));
    }

    #[test]
    fn test_is_empty() {
        assert!(FsPath::from("").is_empty());
        assert!(FsPath::default().is_empty());
        assert!(!FsPath::from(" ").is_empty());
        assert!(!FsPath::from("\t\n").is_empty());
        assert!(!FsPath::from("a").is_empty());
    }

    #[test]
    fn test_round_trip_stat() {
        let dir = tempdir().unwrap();
        let base = FsPath::from(dir.path());
        let target = base.join(["a", "b", "c.txt"]);

        assert_eq!(target.as_path(), dir.path().join("a").join("b").join("c.txt"));

        base.join(["a", "b"]).create_dir_all().unwrap();
        let mut file = File::create(&target).unwrap();
        file.write_all(b"hello gnuplot").unwrap();
        drop(file);

        let meta = target.stat().unwrap();
        assert_eq!(meta.len(), 13);
        assert!(!meta.is_dir());
        assert!(target.exists().unwrap());
        assert!(target.is_file().unwrap());
        assert!(!target.is_dir().unwrap());
    }

    #[test]
    fn test_stat_missing_path() {
        let dir = tempdir().unwrap();
        let missing = FsPath::from(dir.path()).join(["nope.txt"]);

        let err = missing.stat().unwrap_err();
        let rendered = err.to_string();
        assert!(rendered.contains("Failed to get FileInfo of"));
        assert!(rendered.contains(&missing.to_string()));
        assert!(err.is_not_found());

        let cause = err.source().unwrap().downcast_ref::<io::Error>().unwrap();
        assert_eq!(cause.kind(), io::ErrorKind::NotFound);
    }

    #[test]
    fn test_exists() {
        let dir = tempdir().unwrap();
        let base = FsPath::from(dir.path());

        assert!(base.exists().unwrap());
        assert!(base.is_dir().unwrap());
        assert!(!base.join(["missing"]).exists().unwrap());
        assert!(!base.join(["missing"]).is_file().unwrap());
    }

    #[cfg(unix)]
    #[test]
    fn test_exists_reports_non_not_found_errors() {
        let dir = tempdir().unwrap();
        let file = FsPath::from(dir.path()).join(["plain.txt"]);
        fs::write(&file, "x").unwrap();

        // A path through a regular file fails with ENOTDIR, not ENOENT
        let through_file = file.join(["child"]);
        let err = through_file.exists().unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Io);
        assert!(err.message().starts_with("Failed to check existence of"));
    }

    #[test]
    fn test_glob() {
        let dir = tempdir().unwrap();
        let base = FsPath::from(dir.path());
        fs::write(base.join(["one.dat"]), "1").unwrap();
        fs::write(base.join(["two.dat"]), "2").unwrap();
        fs::write(base.join(["notes.txt"]), "n").unwrap();

        let mut matches = base.join(["*.dat"]).glob().unwrap();
        matches.sort();
        assert_eq!(matches, vec![base.join(["one.dat"]), base.join(["two.dat"])]);

        assert!(base.join(["*.png"]).glob().unwrap().is_empty());
    }

    #[test]
    fn test_glob_excluding() {
        let dir = tempdir().unwrap();
        let base = FsPath::from(dir.path());
        fs::write(base.join(["plot.gp"]), "").unwrap();
        fs::write(base.join(["plot.gp.swp"]), "").unwrap();

        let excludes = PatternMatcher::new(["*.swp"]).unwrap();
        let kept = base.join(["plot.*"]).glob_excluding(&excludes).unwrap();
        assert_eq!(kept, vec![base.join(["plot.gp"])]);
    }

    #[test]
    fn test_glob_bad_pattern() {
        let err = FsPath::from("data/[").glob().unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Pattern);
        assert_eq!(err.message(), "Could not execute glob on 'data/['");
        assert!(err.source().is_some());
    }

    #[test]
    fn test_staleness() {
        let dir = tempdir().unwrap();
        let base = FsPath::from(dir.path());
        let source = base.join(["figure.py"]);
        let target = base.join(["figure.tex"]);

        fs::write(&source, "plot()").unwrap();
        assert!(target.is_stale_against(&source).unwrap());

        fs::write(&target, "\\begin{document}").unwrap();
        let now = SystemTime::now();
        File::options()
            .write(true)
            .open(&source)
            .unwrap()
            .set_modified(now - Duration::from_secs(60))
            .unwrap();
        File::options()
            .write(true)
            .open(&target)
            .unwrap()
            .set_modified(now)
            .unwrap();
        assert!(!target.is_stale_against(&source).unwrap());

        File::options()
            .write(true)
            .open(&source)
            .unwrap()
            .set_modified(now + Duration::from_secs(60))
            .unwrap();
        assert!(target.is_stale_against(&source).unwrap());
    }

    #[test]
    fn test_staleness_missing_source() {
        let dir = tempdir().unwrap();
        let base = FsPath::from(dir.path());
        let err = base
            .join(["out.tex"])
            .is_stale_against(&base.join(["in.py"]))
            .unwrap_err();
        assert!(err.is_not_found());
    }

    #[test]
    fn test_relative_to_and_extension() {
        let base = FsPath::from("plots");
        let figure = base.join(["2d", "sine.png"]);
        assert_eq!(figure.relative_to(&base), Some(FsPath::from("2d/sine.png")));
        assert_eq!(figure.extension(), Some("png"));
    }

    #[test]
    fn test_serde_transparent() {
        let path = FsPath::from("out/figure.png");
        let yaml = serde_yaml::to_string(&path).unwrap();
        assert_eq!(yaml.trim(), "out/figure.png");
        let back: FsPath = serde_yaml::from_str(&yaml).unwrap();
        assert_eq!(back, path);
    }
}
