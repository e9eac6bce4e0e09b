//! Path-safety rules for entry paths and symlink targets.
//!
//! Paths inside an archive are `/`-separated and relative to the archive
//! root. A component is a maximal run of non-`/` characters, so `"foo.."`
//! is a single ordinary component and only whole `.` or `..` segments count
//! as dot components.
//!
//! Symlink targets may use `.` and `..`, but joined to the directory that
//! contains the link they must not climb above the root. This is estimated
//! with a traversal level rather than real resolution: the level starts at
//! one, each component of `dirname(path)/link` adds one, `.` cancels itself
//! and `..` also cancels the level of its parent. A negative level means
//! escape.

use log::trace;

use crate::error::{Field, ValidationError};

/// Everything before the last `/` of `path`, or `""` if there is none.
#[must_use]
pub fn dirname(path: &str) -> &str {
    path.rfind('/').map_or("", |i| &path[..i])
}

/// Compute the traversal level of `link` resolved from the directory
/// containing `path`.
///
/// This is equivalent to scanning `dirname(path) + "/" + link` (or just
/// `link` when the entry sits at the root), without building the string.
/// The level starts at one, so `".."` from an entry at the root yields 0
/// and is accepted.
#[must_use]
pub fn traversal_level(path: &str, link: &str) -> isize {
    let dir = dirname(path);
    let dir_components = (!dir.is_empty()).then(|| dir.split('/'));

    1 + dir_components
        .into_iter()
        .flatten()
        .chain(link.split('/'))
        .map(|component| match component {
            "." => 0,
            ".." => -1,
            _ => 1,
        })
        .sum::<isize>()
}

fn check_string(field: Field, value: &str) -> Result<(), ValidationError> {
    let owned = || value.to_owned();
    if value.starts_with('/') {
        return Err(ValidationError::AbsolutePath {
            field,
            value: owned(),
        });
    }
    if value.contains("//") {
        return Err(ValidationError::DoubleSlash {
            field,
            value: owned(),
        });
    }
    if value.contains('\0') {
        return Err(ValidationError::EmbeddedNul {
            field,
            value: owned(),
        });
    }
    Ok(())
}

fn has_dot_component(path: &str) -> bool {
    path.split('/').any(|c| c == "." || c == "..")
}

/// Check an entry path and its (possibly empty) symlink target.
///
/// The root entry `"."` is the only path allowed to consist of a dot
/// component. A non-empty `link` is additionally checked for escaping the
/// archive root from the entry's directory.
///
/// ```
/// use tar_guard::{validate_paths, ValidationError};
///
/// assert!(validate_paths("a/b", "..").is_ok());
/// assert!(matches!(
///     validate_paths("a", "../.."),
///     Err(ValidationError::LinkEscapesRoot { level: -1, .. })
/// ));
/// ```
pub fn validate_paths(path: &str, link: &str) -> Result<(), ValidationError> {
    check_string(Field::Path, path)?;
    if path.is_empty() {
        return Err(ValidationError::EmptyPath);
    }
    if path != "." && has_dot_component(path) {
        return Err(ValidationError::DotComponent {
            path: path.to_owned(),
        });
    }

    if !link.is_empty() {
        check_string(Field::Link, link)?;
        let level = traversal_level(path, link);
        trace!("link {link:?} of {path:?} has traversal level {level}");
        if level < 0 {
            return Err(ValidationError::LinkEscapesRoot {
                path: path.to_owned(),
                link: link.to_owned(),
                level,
            });
        }
    }

    Ok(())
}
