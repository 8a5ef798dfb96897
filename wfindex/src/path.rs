//! Path resolution for repository-rooted paths.

/// Separator used by every path handed to or produced by this crate.
pub const SEPARATOR: char = '/';

/// Returns the part of `initial_path` before its final separator.
///
/// `/workflow/Snakefile` yields `/workflow`, `/Snakefile` yields the empty
/// string (the root). A path without any separator also yields the root.
#[must_use]
pub fn derive_base(initial_path: &str) -> &str {
    initial_path
        .rfind(SEPARATOR)
        .map_or("", |pos| &initial_path[..pos])
}

/// Collapses repeated separators and drops a trailing one.
///
/// A leading separator is kept, so `/` stays `/` and `a//b/` becomes `a/b`.
#[must_use]
pub fn normalize(path: &str) -> String {
    let joined = path
        .split(SEPARATOR)
        .filter(|part| !part.is_empty())
        .collect::<Vec<_>>()
        .join("/");
    if path.starts_with(SEPARATOR) {
        format!("/{joined}")
    } else {
        joined
    }
}

/// Normalizes `path` and anchors it at the repository root.
#[must_use]
pub fn rooted(path: &str) -> String {
    normalize(&format!("/{path}"))
}

/// Normalizes `path` with no leading separator.
#[must_use]
pub fn relative(path: &str) -> String {
    normalize(path).trim_start_matches(SEPARATOR).to_owned()
}

/// Joins `base` and an optional relative part into a rooted path.
#[must_use]
pub fn join(base: &str, rest: Option<&str>) -> String {
    match rest {
        Some(rest) => rooted(&format!("{base}/{rest}")),
        None => rooted(base),
    }
}
