//! Type-flag codec and path-safety validation for tar entry headers.
//!
//! This crate is the part of an archive engine that decides whether a header
//! may be trusted. The engine does the byte-level work (reading 512-byte
//! blocks, checksums, octal fields, compression) and hands the decoded
//! fields to this crate, which:
//!
//! - converts the on-wire type flag to an [`EntryType`] and back
//!   ([`decode_type`], [`encode_type`]);
//! - checks a [`Header`] for structural consistency and path safety
//!   ([`validate_header`], [`validate_paths`]).
//!
//! Everything here is pure: no I/O, no shared state, and every call can run
//! concurrently with any other.
//!
//! # Rejected paths
//!
//! Entry paths must be relative, free of `//`, NUL bytes and `.`/`..`
//! components (the root entry `"."` aside). Symlink targets may use `.` and
//! `..`, but not in a way that climbs above the archive root from the
//! directory holding the link; see [`path::traversal_level`].
//!
//! # Example
//!
//! ```
//! use tar_guard::{decode_type, validate_header, EntryType, Header};
//!
//! // fields as decoded by the archive engine
//! let header = Header {
//!     path: "usr/lib/libfoo.so".into(),
//!     entry_type: decode_type('2').unwrap(),
//!     mode: 0o777,
//!     size: 0,
//!     link: "libfoo.so.1".into(),
//! };
//! assert_eq!(header.entry_type, EntryType::SymLink);
//! assert!(validate_header(&header).is_ok());
//!
//! let evil = Header::symlink("etc", "../../../../etc/shadow");
//! assert!(validate_header(&evil).is_err());
//! ```

pub mod entry_type;
pub mod error;
pub mod header;
pub mod limits;
pub mod path;
pub mod validate;

pub use entry_type::EntryType;
pub use error::{Error, Field, Result, TypeError, ValidationError};
pub use header::Header;
pub use limits::Limits;
pub use path::validate_paths;
pub use validate::{validate_header, Validator};

/// Decode an on-wire type flag. See [`EntryType::decode`].
pub fn decode_type(flag: char) -> std::result::Result<EntryType, TypeError> {
    EntryType::decode(flag)
}

/// Encode an entry type to its canonical flag. See [`EntryType::encode`].
pub fn encode_type(kind: EntryType) -> std::result::Result<char, TypeError> {
    kind.encode()
}
