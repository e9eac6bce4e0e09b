//! Conversion between on-wire type flags and [`EntryType`].
//!
//! A tar header stores the kind of entry as a single ASCII character at
//! offset 156. The known flags are:
//!
//! | Flag       | Kind          |
//! |------------|---------------|
//! | `'0'`      | regular file  |
//! | `'\0'`     | regular file (pre-POSIX archives) |
//! | `'1'`      | hard link     |
//! | `'2'`      | symbolic link |
//! | `'3'`      | char device   |
//! | `'4'`      | block device  |
//! | `'5'`      | directory     |
//! | `'6'`      | FIFO          |
//!
//! Any other ASCII character decodes to [`EntryType::Other`], so unknown
//! flags survive a decode/encode cycle unchanged.

use std::{fmt, str::FromStr};

use crate::error::TypeError;

/// The kind of filesystem object a header describes.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum EntryType {
    /// Regular file (type '0', or '\0' in old archives).
    File,
    /// Hard link to another entry (type '1').
    HardLink,
    /// Symbolic link (type '2').
    SymLink,
    /// Character device (type '3').
    CharDev,
    /// Block device (type '4').
    BlockDev,
    /// Directory (type '5').
    Directory,
    /// FIFO/named pipe (type '6').
    Fifo,
    /// Any other ASCII type flag, kept verbatim.
    Other(char),
}

/// Flag table in priority order. Decoding may map several flags to one kind;
/// encoding takes the first row for a kind, so `File` always encodes as `'0'`.
static TYPE_FLAGS: [(char, EntryType); 8] = [
    ('0', EntryType::File),
    ('\0', EntryType::File),
    ('1', EntryType::HardLink),
    ('2', EntryType::SymLink),
    ('3', EntryType::CharDev),
    ('4', EntryType::BlockDev),
    ('5', EntryType::Directory),
    ('6', EntryType::Fifo),
];

impl EntryType {
    /// Decode a type flag.
    ///
    /// Unknown ASCII flags become [`EntryType::Other`]; non-ASCII flags are
    /// rejected with [`TypeError::InvalidTypeFlag`].
    pub fn decode(flag: char) -> Result<Self, TypeError> {
        if let Some(&(_, kind)) = TYPE_FLAGS.iter().find(|(c, _)| *c == flag) {
            return Ok(kind);
        }
        if flag.is_ascii() {
            Ok(EntryType::Other(flag))
        } else {
            Err(TypeError::InvalidTypeFlag(flag))
        }
    }

    /// Encode to the canonical type flag.
    ///
    /// `Other(c)` encodes as `c` as long as `c` is ASCII. A non-ASCII payload
    /// can only come from constructing the value by hand, and is rejected with
    /// [`TypeError::InvalidTypeSymbol`].
    pub fn encode(self) -> Result<char, TypeError> {
        match self {
            EntryType::Other(c) if c.is_ascii() => Ok(c),
            EntryType::Other(c) => Err(TypeError::InvalidTypeSymbol(c.to_string())),
            known => TYPE_FLAGS
                .iter()
                .find(|(_, kind)| *kind == known)
                .map(|&(c, _)| c)
                .ok_or_else(|| TypeError::InvalidTypeSymbol(known.to_string())),
        }
    }

    /// Decode the raw typeflag byte of a header block.
    pub fn from_byte(byte: u8) -> Result<Self, TypeError> {
        Self::decode(char::from(byte))
    }

    /// Encode to the raw typeflag byte of a header block.
    pub fn to_byte(self) -> Result<u8, TypeError> {
        // encode() only ever returns ASCII
        self.encode().map(|c| c as u8)
    }

    /// Returns true if this is a regular file entry.
    #[must_use]
    pub fn is_file(self) -> bool {
        self == EntryType::File
    }

    /// Returns true if this is a directory entry.
    #[must_use]
    pub fn is_dir(self) -> bool {
        self == EntryType::Directory
    }

    /// Returns true if this is a symbolic link entry.
    #[must_use]
    pub fn is_symlink(self) -> bool {
        self == EntryType::SymLink
    }

    /// Returns true if this is a hard link entry.
    #[must_use]
    pub fn is_hard_link(self) -> bool {
        self == EntryType::HardLink
    }

    /// Returns true for the kinds the validator accepts for writing and
    /// extraction: files, directories and symlinks.
    #[must_use]
    pub fn is_supported(self) -> bool {
        matches!(
            self,
            EntryType::File | EntryType::Directory | EntryType::SymLink
        )
    }
}

impl fmt::Display for EntryType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EntryType::File => f.write_str("file"),
            EntryType::HardLink => f.write_str("hardlink"),
            EntryType::SymLink => f.write_str("symlink"),
            EntryType::CharDev => f.write_str("chardev"),
            EntryType::BlockDev => f.write_str("blockdev"),
            EntryType::Directory => f.write_str("directory"),
            EntryType::Fifo => f.write_str("fifo"),
            EntryType::Other(c) => write!(f, "{c}"),
        }
    }
}

/// Parses the symbolic form produced by [`Display`](fmt::Display).
///
/// Note that a single digit parses as `Other`, not as the kind it would
/// decode to as a flag: `"5".parse()` is `Other('5')`.
impl FromStr for EntryType {
    type Err = TypeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(match s {
            "file" => EntryType::File,
            "hardlink" => EntryType::HardLink,
            "symlink" => EntryType::SymLink,
            "chardev" => EntryType::CharDev,
            "blockdev" => EntryType::BlockDev,
            "directory" => EntryType::Directory,
            "fifo" => EntryType::Fifo,
            _ => {
                let mut chars = s.chars();
                match (chars.next(), chars.next()) {
                    (Some(c), None) if c.is_ascii() => EntryType::Other(c),
                    _ => return Err(TypeError::InvalidTypeSymbol(s.to_owned())),
                }
            }
        })
    }
}

impl TryFrom<u8> for EntryType {
    type Error = TypeError;

    fn try_from(byte: u8) -> Result<Self, Self::Error> {
        Self::from_byte(byte)
    }
}

impl TryFrom<EntryType> for char {
    type Error = TypeError;

    fn try_from(entry_type: EntryType) -> Result<Self, Self::Error> {
        entry_type.encode()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_known_flags() {
        assert_eq!(EntryType::decode('0'), Ok(EntryType::File));
        assert_eq!(EntryType::decode('1'), Ok(EntryType::HardLink));
        assert_eq!(EntryType::decode('2'), Ok(EntryType::SymLink));
        assert_eq!(EntryType::decode('3'), Ok(EntryType::CharDev));
        assert_eq!(EntryType::decode('4'), Ok(EntryType::BlockDev));
        assert_eq!(EntryType::decode('5'), Ok(EntryType::Directory));
        assert_eq!(EntryType::decode('6'), Ok(EntryType::Fifo));
    }

    #[test]
    fn test_old_regular() {
        // Old tar uses '\0' for regular files, but we always write '0'
        assert_eq!(EntryType::decode('\0'), Ok(EntryType::File));
        assert_eq!(EntryType::File.encode(), Ok('0'));
    }

    #[test]
    fn test_unknown_ascii_flags() {
        for flag in ['7', 'L', 'K', 'x', 'g', 'S', ' '] {
            assert_eq!(EntryType::decode(flag), Ok(EntryType::Other(flag)));
            assert_eq!(EntryType::Other(flag).encode(), Ok(flag));
        }
    }

    #[test]
    fn test_non_ascii_flag() {
        assert_eq!(
            EntryType::decode('é'),
            Err(TypeError::InvalidTypeFlag('é'))
        );
        assert_eq!(
            EntryType::from_byte(0xff),
            Err(TypeError::InvalidTypeFlag('\u{ff}'))
        );
    }

    #[test]
    fn test_non_ascii_other() {
        assert_eq!(
            EntryType::Other('ß').encode(),
            Err(TypeError::InvalidTypeSymbol("ß".into()))
        );
        assert!(EntryType::Other('ß').to_byte().is_err());
    }

    #[test]
    fn test_bytes() {
        assert_eq!(EntryType::from_byte(b'5'), Ok(EntryType::Directory));
        assert_eq!(EntryType::from_byte(0), Ok(EntryType::File));
        assert_eq!(EntryType::SymLink.to_byte(), Ok(b'2'));
        assert_eq!(EntryType::try_from(b'x'), Ok(EntryType::Other('x')));
        assert_eq!(char::try_from(EntryType::Fifo), Ok('6'));
    }

    #[test]
    fn test_symbolic_form() {
        for kind in [
            EntryType::File,
            EntryType::HardLink,
            EntryType::SymLink,
            EntryType::CharDev,
            EntryType::BlockDev,
            EntryType::Directory,
            EntryType::Fifo,
            EntryType::Other('L'),
        ] {
            assert_eq!(kind.to_string().parse::<EntryType>(), Ok(kind));
        }

        assert_eq!("5".parse::<EntryType>(), Ok(EntryType::Other('5')));
        assert_eq!(
            "socket".parse::<EntryType>(),
            Err(TypeError::InvalidTypeSymbol("socket".into()))
        );
        assert_eq!(
            "".parse::<EntryType>(),
            Err(TypeError::InvalidTypeSymbol(String::new()))
        );
        assert_eq!(
            "ß".parse::<EntryType>(),
            Err(TypeError::InvalidTypeSymbol("ß".into()))
        );
    }

    #[test]
    fn test_predicates() {
        assert!(EntryType::File.is_file());
        assert!(!EntryType::Directory.is_file());
        assert!(EntryType::Directory.is_dir());
        assert!(EntryType::SymLink.is_symlink());
        assert!(EntryType::HardLink.is_hard_link());

        assert!(EntryType::File.is_supported());
        assert!(EntryType::Directory.is_supported());
        assert!(EntryType::SymLink.is_supported());
        assert!(!EntryType::HardLink.is_supported());
        assert!(!EntryType::Fifo.is_supported());
        assert!(!EntryType::Other('7').is_supported());
    }
}
