//! Path helpers for SARIF artifact URIs.
//!
//! Artifact paths are plain `/`-separated strings, not host paths, so these
//! helpers work on `&str` and never touch the filesystem.

const SEPARATOR: char = '/';

/// Lexically normalizes `path`.
///
/// Repeated separators and `.` segments are removed and `..` consumes the
/// preceding segment. A `..` with nothing left to consume is dropped, which
/// keeps the result inside the tree the path is rooted at. Returns `"."` when
/// nothing remains of a relative path.
pub fn normalize(path: &str) -> String {
    let absolute = path.starts_with(SEPARATOR);
    let mut segments: Vec<&str> = Vec::new();

    for segment in path.split(SEPARATOR) {
        match segment {
            "" | "." => {}
            ".." => {
                segments.pop();
            }
            other => segments.push(other),
        }
    }

    let joined = segments.join("/");
    match (absolute, joined.is_empty()) {
        (true, _) => format!("/{joined}"),
        (false, true) => ".".to_string(),
        (false, false) => joined,
    }
}

/// Joins `path` onto `base`. An absolute `path` replaces the base.
pub fn join(base: &str, path: &str) -> String {
    if base.is_empty() || path.starts_with(SEPARATOR) {
        path.to_string()
    } else if base.ends_with(SEPARATOR) {
        format!("{base}{path}")
    } else {
        format!("{base}/{path}")
    }
}

/// Normalizes `uri` and, when a base is given, places it under that base.
pub fn rebase(base: Option<&str>, uri: &str) -> String {
    let normalized = normalize(uri);
    match base {
        Some(base) => normalize(&join(base, &normalized)),
        None => normalized,
    }
}
