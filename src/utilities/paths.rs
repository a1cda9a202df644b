// Path Utilities
// Lexical path helpers, no filesystem access

use std::ffi::OsString;
use std::path::{Component, Path, PathBuf, MAIN_SEPARATOR_STR};

/// Clean a path lexically: collapse redundant separators, drop `.`, and let
/// `..` consume the preceding normal component.
///
/// `..` directly under the root is dropped, a leading `..` on a relative path
/// is kept, and a path that cleans down to nothing becomes `.`.
pub fn clean_path(path: &Path) -> PathBuf {
    let mut components: Vec<Component<'_>> = Vec::new();

    for component in path.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => match components.last() {
                Some(Component::Normal(_)) => {
                    components.pop();
                }
                Some(Component::RootDir) => {}
                _ => components.push(component),
            },
            c => components.push(c),
        }
    }

    if components.is_empty() {
        return PathBuf::from(".");
    }

    components.iter().collect()
}

/// Join `base` with `segments` and clean the result.
///
/// Empty elements are skipped and every element is appended in order, so an
/// absolute segment extends the path instead of replacing it. Joining nothing
/// but empty elements yields the empty path.
pub fn join_lexical<I, S>(base: &Path, segments: I) -> PathBuf
where
    I: IntoIterator<Item = S>,
    S: AsRef<Path>,
{
    let mut joined = OsString::new();

    let mut push = |part: &Path| {
        if part.as_os_str().is_empty() {
            return;
        }
        if !joined.is_empty() {
            joined.push(MAIN_SEPARATOR_STR);
        }
        joined.push(part.as_os_str());
    };

    push(base);
    for segment in segments {
        push(segment.as_ref());
    }

    if joined.is_empty() {
        return PathBuf::new();
    }

    clean_path(Path::new(&joined))
}

/// Get the relative path from one path to another.
///
/// Returns `None` when one path is absolute and the other isn't.
pub fn relative_path(from: &Path, to: &Path) -> Option<PathBuf> {
    if from.is_absolute() != to.is_absolute() {
        return None;
    }

    let from = clean_path(from);
    let to = clean_path(to);

    let mut from_iter = from.components().filter(|c| *c != Component::CurDir).peekable();
    let mut to_iter = to.components().filter(|c| *c != Component::CurDir).peekable();

    // Skip the common prefix
    while from_iter.peek().is_some() && from_iter.peek() == to_iter.peek() {
        from_iter.next();
        to_iter.next();
    }

    let mut result = PathBuf::new();

    for _ in from_iter {
        result.push("..");
    }

    for component in to_iter {
        result.push(component);
    }

    if result.as_os_str().is_empty() {
        result.push(".");
    }

    Some(result)
}

/// Get the file extension as a string
pub fn extension_str(path: &Path) -> Option<&str> {
    path.extension().and_then(|e| e.to_str())
}
