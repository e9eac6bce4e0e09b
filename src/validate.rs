//! Structural validation of decoded headers.
//!
//! The archive engine runs every header through [`validate_header`] (or a
//! configured [`Validator`]) after decoding it and before writing it. Rules
//! are checked in a fixed order and the first violation is returned:
//!
//! 1. `"."` must be a directory.
//! 2. Only files, directories and symlinks are accepted.
//! 3. Only symlinks may carry a link target.
//! 4. Symlinks have size 0.
//! 5. Directories have size 0.
//! 6. Only directory paths may end in `/`.
//! 7. Size is not negative.
//! 8. Path and link pass [`validate_paths`].
//!
//! A symlink with an empty link target is accepted.

use log::{debug, trace};

use crate::{
    entry_type::EntryType,
    error::{Field, ValidationError},
    header::Header,
    limits::Limits,
    path::validate_paths,
};

/// Header validator with configurable [`Limits`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Validator {
    limits: Limits,
}

impl Validator {
    pub fn new(limits: Limits) -> Self {
        Self { limits }
    }

    /// A validator without length limits.
    pub fn permissive() -> Self {
        Self::new(Limits::permissive())
    }

    pub fn limits(&self) -> &Limits {
        &self.limits
    }

    /// Validate a header, returning the first violated rule.
    pub fn validate(&self, header: &Header) -> Result<(), ValidationError> {
        let result = check_structure(header)
            .and_then(|()| self.validate_paths(&header.path, &header.link));
        match result {
            Ok(()) => {
                trace!("accepted {} entry {:?}", header.entry_type, header.path);
                Ok(())
            }
            Err(err) => {
                debug!("rejected header {:?}: {err}", header.path);
                Err(err)
            }
        }
    }

    /// Apply the length limits and then [`validate_paths`].
    pub fn validate_paths(&self, path: &str, link: &str) -> Result<(), ValidationError> {
        self.check_len(Field::Path, path)?;
        self.check_len(Field::Link, link)?;
        validate_paths(path, link)
    }

    fn check_len(&self, field: Field, value: &str) -> Result<(), ValidationError> {
        let limit = self.limits.max_path_len;
        if value.len() > limit {
            return Err(ValidationError::PathTooLong {
                field,
                len: value.len(),
                limit,
            });
        }
        Ok(())
    }
}

fn check_structure(header: &Header) -> Result<(), ValidationError> {
    let Header {
        path,
        entry_type,
        size,
        link,
        ..
    } = header;
    let entry_type = *entry_type;
    let size = *size;

    if path == "." && entry_type != EntryType::Directory {
        return Err(ValidationError::NotADirectoryRoot { entry_type });
    }
    if !entry_type.is_supported() {
        return Err(ValidationError::UnsupportedType {
            path: path.clone(),
            entry_type,
        });
    }
    if entry_type != EntryType::SymLink && !link.is_empty() {
        return Err(ValidationError::UnexpectedLink {
            path: path.clone(),
            entry_type,
            link: link.clone(),
        });
    }
    if entry_type == EntryType::SymLink && size != 0 {
        return Err(ValidationError::SymlinkHasSize {
            path: path.clone(),
            size,
        });
    }
    if entry_type == EntryType::Directory && size != 0 {
        return Err(ValidationError::DirectoryHasSize {
            path: path.clone(),
            size,
        });
    }
    if entry_type != EntryType::Directory && path.ends_with('/') {
        return Err(ValidationError::TrailingSlash {
            path: path.clone(),
            entry_type,
        });
    }
    if size < 0 {
        return Err(ValidationError::NegativeSize {
            path: path.clone(),
            size,
        });
    }
    Ok(())
}

/// Validate a header without length limits.
///
/// ```
/// use tar_guard::{validate_header, Header, ValidationError};
///
/// assert!(validate_header(&Header::symlink("a/b", "..")).is_ok());
/// assert!(matches!(
///     validate_header(&Header::directory("d").with_size(5)),
///     Err(ValidationError::DirectoryHasSize { size: 5, .. })
/// ));
/// ```
pub fn validate_header(header: &Header) -> Result<(), ValidationError> {
    Validator::permissive().validate(header)
}
