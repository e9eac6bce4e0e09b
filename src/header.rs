//! The decoded header of a single archive entry.

use crate::{
    entry_type::EntryType,
    error::{TypeError, ValidationError},
    path,
};

/// Metadata of one archive entry, as far as validation is concerned.
///
/// A `Header` can hold any combination of values; only one that passed
/// [`validate`](Header::validate) should be written or trusted. Owner, group
/// and timestamps are the archive engine's business and are not represented
/// here.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Header {
    /// Location of the entry relative to the archive root.
    pub path: String,
    /// What kind of object the entry is.
    pub entry_type: EntryType,
    /// POSIX permission bits; not interpreted.
    pub mode: u16,
    /// Byte count of the data payload.
    pub size: i64,
    /// Symlink target. Empty for every other kind.
    pub link: String,
}

impl Header {
    /// A header with zero mode and size and no link target.
    pub fn new(path: impl Into<String>, entry_type: EntryType) -> Self {
        Self {
            path: path.into(),
            entry_type,
            mode: 0,
            size: 0,
            link: String::new(),
        }
    }

    /// A regular file with mode 0644.
    pub fn file(path: impl Into<String>, size: i64) -> Self {
        Self::new(path, EntryType::File)
            .with_mode(0o644)
            .with_size(size)
    }

    /// A directory with mode 0755.
    pub fn directory(path: impl Into<String>) -> Self {
        Self::new(path, EntryType::Directory).with_mode(0o755)
    }

    /// A symlink with mode 0777.
    pub fn symlink(path: impl Into<String>, link: impl Into<String>) -> Self {
        Self::new(path, EntryType::SymLink)
            .with_mode(0o777)
            .with_link(link)
    }

    /// The archive root, `"."`.
    pub fn root() -> Self {
        Self::directory(".")
    }

    /// Assemble a header from fields the engine decoded off the wire.
    pub fn from_flag(
        path: impl Into<String>,
        flag: char,
        mode: u16,
        size: i64,
        link: impl Into<String>,
    ) -> Result<Self, TypeError> {
        Ok(Self {
            path: path.into(),
            entry_type: EntryType::decode(flag)?,
            mode,
            size,
            link: link.into(),
        })
    }

    #[must_use]
    pub fn with_mode(mut self, mode: u16) -> Self {
        self.mode = mode;
        self
    }

    #[must_use]
    pub fn with_size(mut self, size: i64) -> Self {
        self.size = size;
        self
    }

    #[must_use]
    pub fn with_link(mut self, link: impl Into<String>) -> Self {
        self.link = link.into();
        self
    }

    /// The on-wire flag for this header's type.
    pub fn type_flag(&self) -> Result<char, TypeError> {
        self.entry_type.encode()
    }

    /// Returns true if this header describes the archive root.
    #[must_use]
    pub fn is_root(&self) -> bool {
        self.path == "."
    }

    /// Everything before the last `/` of the path, or `""`.
    #[must_use]
    pub fn dirname(&self) -> &str {
        path::dirname(&self.path)
    }

    /// Check this header with [`validate_header`](crate::validate_header).
    pub fn validate(&self) -> Result<(), ValidationError> {
        crate::validate_header(self)
    }
}
