//! Separator-string path helpers.
//!
//! These helpers operate on `&str` paths joined with the platform separator.
//! Joining and normalizing follow the usual "collapse `.`/`..` and duplicate
//! separators" rules, while presence and replacement checks are literal
//! substring operations.

#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions)]

use std::path::{Component, Path, PathBuf};

use path_clean::PathClean;

/// The platform path separator.
pub const SEPARATOR: char = std::path::MAIN_SEPARATOR;

/// The platform path separator as a string slice.
pub const SEPARATOR_STR: &str = std::path::MAIN_SEPARATOR_STR;

/// Whether `path` is absolute on this platform.
#[must_use]
pub fn is_absolute(path: &str) -> bool {
    Path::new(path).is_absolute()
}

/// Normalize a path, collapsing `.`/`..` segments and duplicate separators.
///
/// An empty path normalizes to `"."`.
#[must_use]
pub fn normalize(path: &str) -> String {
    if path.is_empty() {
        return ".".to_string();
    }

    Path::new(path).clean().to_string_lossy().into_owned()
}

/// Join path parts with the platform separator and normalize the result.
///
/// Empty parts are skipped. An absolute part in the middle does not discard
/// the parts before it; it is simply concatenated.
#[must_use]
pub fn join(parts: &[&str]) -> String {
    let joined = parts
        .iter()
        .filter(|part| !part.is_empty())
        .copied()
        .collect::<Vec<_>>()
        .join(SEPARATOR_STR);

    normalize(&joined)
}

/// The directory portion of a path: every segment but the last.
///
/// A bare file name yields `"."`, and a file directly under the root yields
/// the root itself.
#[must_use]
pub fn directory_path(path: &str) -> String {
    let mut segments: Vec<&str> = path.split(SEPARATOR).collect();
    segments.pop();
    let joined = segments.join(SEPARATOR_STR);

    if is_absolute(path) && !joined.starts_with(SEPARATOR) {
        join(&[SEPARATOR_STR, &joined])
    } else {
        join(&[&joined])
    }
}

/// The last segment of a path, ignoring trailing separators.
#[must_use]
pub fn basename(path: &str) -> &str {
    path.trim_end_matches(SEPARATOR)
        .rsplit(SEPARATOR)
        .next()
        .unwrap_or("")
}

/// The text after the last separator, without trimming anything.
///
/// Unlike [`basename`], a trailing separator yields an empty string.
#[must_use]
pub fn last_segment(path: &str) -> &str {
    path.rsplit(SEPARATOR).next().unwrap_or("")
}

/// Compute the relative path from `from` to `to`.
///
/// Relative inputs are resolved against the current directory first, so two
/// relative inputs are compared as if they shared a base. Identical paths
/// yield an empty string.
#[must_use]
pub fn relative(from: &str, to: &str) -> String {
    let from = absolutize(from);
    let to = absolutize(to);

    let from_components: Vec<Component<'_>> = from.components().collect();
    let to_components: Vec<Component<'_>> = to.components().collect();

    let common = from_components
        .iter()
        .zip(&to_components)
        .take_while(|(a, b)| a == b)
        .count();

    let mut parts: Vec<String> = vec!["..".to_string(); from_components.len() - common];
    parts.extend(
        to_components[common..]
            .iter()
            .map(|c| c.as_os_str().to_string_lossy().into_owned()),
    );

    parts.join(SEPARATOR_STR)
}

fn absolutize(path: &str) -> PathBuf {
    let cleaned = Path::new(if path.is_empty() { "." } else { path }).clean();

    if cleaned.is_absolute() {
        return cleaned;
    }

    std::path::absolute(&cleaned).map_or(cleaned, |p| p.clean())
}

/// Whether the companion directory `dir_name` is already part of `path`.
///
/// This is a separator-anchored substring check: true iff `path` contains
/// `separator + dir_name`. A directory named `testing` therefore satisfies a
/// check for `test`. Callers rely on this coarse match to avoid appending the
/// companion directory twice.
#[must_use]
pub fn is_companion_dir_present(dir_name: &str, path: &str) -> bool {
    path.contains(&format!("{SEPARATOR}{dir_name}"))
}

/// Remove the conventional source directory from a path.
///
/// Occurrences are matched left to right without overlapping:
///
/// * `src/` at the very start is removed
/// * `/src/` in the middle becomes a single separator
/// * `/src` at the very end becomes a single separator
///
/// An empty `source_dir` returns the path unchanged.
#[must_use]
pub fn replace_source_dir(path: &str, source_dir: &str) -> String {
    if source_dir.is_empty() {
        return path.to_string();
    }

    let leading = format!("{source_dir}{SEPARATOR}");
    let middle = format!("{SEPARATOR}{source_dir}{SEPARATOR}");
    let trailing = format!("{SEPARATOR}{source_dir}");

    let mut out = String::with_capacity(path.len());
    let mut index = 0;

    while index < path.len() {
        let rest = &path[index..];

        if index == 0 && rest.starts_with(&leading) {
            index += leading.len();
        } else if rest.starts_with(&middle) {
            out.push(SEPARATOR);
            index += middle.len();
        } else if rest == trailing {
            out.push(SEPARATOR);
            index = path.len();
        } else if let Some(ch) = rest.chars().next() {
            out.push(ch);
            index += ch.len_utf8();
        }
    }

    out
}

/// Replace every backslash with a forward slash.
#[must_use]
pub fn to_forward_slashes(text: &str) -> String {
    text.replace('\\', "/")
}
