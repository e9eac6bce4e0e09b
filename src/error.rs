//! Error types for type-flag decoding and header validation.

use std::fmt;

use thiserror::Error;

use crate::EntryType;

/// Errors from converting between on-wire type flags and [`EntryType`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TypeError {
    /// The type flag is not an ASCII character.
    #[error("invalid type flag {0:?}: not an ASCII character")]
    InvalidTypeFlag(char),

    /// The symbolic form cannot be represented as a single ASCII flag.
    #[error("invalid type symbol {0:?}")]
    InvalidTypeSymbol(String),
}

/// Which string field of a header a path-safety error refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    /// The entry's own location within the archive.
    Path,
    /// The symlink target.
    Link,
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Field::Path => "path",
            Field::Link => "link",
        })
    }
}

/// A header rejected by validation.
///
/// Only the first violated rule is reported. Every variant carries the
/// offending values so the failure can be reproduced.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// The archive root `"."` is described as something other than a directory.
    #[error("entry \".\" must be a directory, not {entry_type}")]
    NotADirectoryRoot {
        /// The type the header claims.
        entry_type: EntryType,
    },

    /// Only regular files, directories and symlinks may be written or extracted.
    #[error("{path:?}: unsupported entry type {entry_type}")]
    UnsupportedType {
        /// Entry path.
        path: String,
        /// The rejected type.
        entry_type: EntryType,
    },

    /// A link target is set on an entry that is not a symlink.
    #[error("{path:?}: {entry_type} entry has unexpected link {link:?}")]
    UnexpectedLink {
        /// Entry path.
        path: String,
        /// Entry type.
        entry_type: EntryType,
        /// The stray link target.
        link: String,
    },

    /// Symlinks carry no data payload.
    #[error("{path:?}: symlink has non-zero size {size}")]
    SymlinkHasSize {
        /// Entry path.
        path: String,
        /// Declared size.
        size: i64,
    },

    /// Directories carry no data payload.
    #[error("{path:?}: directory has non-zero size {size}")]
    DirectoryHasSize {
        /// Entry path.
        path: String,
        /// Declared size.
        size: i64,
    },

    /// Only directory paths may end in `/`.
    #[error("{path:?}: trailing slash on {entry_type} entry")]
    TrailingSlash {
        /// Entry path.
        path: String,
        /// Entry type.
        entry_type: EntryType,
    },

    /// The declared payload size is negative.
    #[error("{path:?}: negative size {size}")]
    NegativeSize {
        /// Entry path.
        path: String,
        /// Declared size.
        size: i64,
    },

    /// A field exceeds the configured maximum length.
    #[error("{field} exceeds limit: {len} bytes > {limit} bytes")]
    PathTooLong {
        /// Which field is too long.
        field: Field,
        /// Actual length in bytes.
        len: usize,
        /// Configured limit.
        limit: usize,
    },

    /// The field starts with `/`.
    #[error("{field} {value:?} is absolute")]
    AbsolutePath {
        /// Offending field.
        field: Field,
        /// Its value.
        value: String,
    },

    /// The field contains `//`.
    #[error("{field} {value:?} contains an empty component")]
    DoubleSlash {
        /// Offending field.
        field: Field,
        /// Its value.
        value: String,
    },

    /// The field contains a NUL byte.
    #[error("{field} {value:?} contains a NUL byte")]
    EmbeddedNul {
        /// Offending field.
        field: Field,
        /// Its value.
        value: String,
    },

    /// The entry path is empty.
    #[error("empty path")]
    EmptyPath,

    /// The entry path has a `.` or `..` component.
    #[error("path {path:?} contains a \".\" or \"..\" component")]
    DotComponent {
        /// Entry path.
        path: String,
    },

    /// The symlink target, joined to the entry's directory, climbs above the archive root.
    #[error("link {link:?} of {path:?} escapes the archive root (level {level})")]
    LinkEscapesRoot {
        /// Entry path.
        path: String,
        /// Symlink target.
        link: String,
        /// The computed traversal level, always negative.
        level: isize,
    },
}

/// Any error this crate can produce.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// Type flag conversion failed.
    #[error("type error: {0}")]
    Type(#[from] TypeError),

    /// Header validation failed.
    #[error("invalid header: {0}")]
    Validation(#[from] ValidationError),
}

/// Result type for operations that may fail with either error kind.
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages_carry_values() {
        let err = ValidationError::LinkEscapesRoot {
            path: "a".into(),
            link: "../..".into(),
            level: -1,
        };
        assert_eq!(
            err.to_string(),
            "link \"../..\" of \"a\" escapes the archive root (level -1)"
        );

        let err = ValidationError::EmbeddedNul {
            field: Field::Link,
            value: "a\0b".into(),
        };
        assert_eq!(err.to_string(), "link \"a\\0b\" contains a NUL byte");

        let err = ValidationError::PathTooLong {
            field: Field::Path,
            len: 5,
            limit: 4,
        };
        assert_eq!(err.to_string(), "path exceeds limit: 5 bytes > 4 bytes");
    }

    #[test]
    fn test_wrapping() {
        let err: Error = TypeError::InvalidTypeFlag('é').into();
        assert!(matches!(err, Error::Type(TypeError::InvalidTypeFlag('é'))));

        let err: Error = ValidationError::EmptyPath.into();
        assert_eq!(err.to_string(), "invalid header: empty path");
    }
}
