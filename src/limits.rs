//! Configurable length limits for header validation.

/// Length limits applied by a [`Validator`](crate::Validator).
///
/// # Example
///
/// ```
/// use tar_guard::{Header, Limits, Validator};
///
/// let validator = Validator::new(Limits {
///     max_path_len: 8,
/// });
/// assert!(validator.validate(&Header::file("a/b", 0)).is_ok());
/// assert!(validator.validate(&Header::file("a/b/c/d/e", 0)).is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Limits {
    /// Maximum length in bytes of the entry path and of the link target.
    ///
    /// Longer values fail with [`ValidationError::PathTooLong`].
    ///
    /// Default: 4096 bytes (Linux PATH_MAX).
    ///
    /// [`ValidationError::PathTooLong`]: crate::ValidationError::PathTooLong
    pub max_path_len: usize,
}

impl Default for Limits {
    fn default() -> Self {
        Self { max_path_len: 4096 }
    }
}

impl Limits {
    /// Create a new `Limits` with default values.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// No length limit. This is what [`validate_header`](crate::validate_header)
    /// and [`validate_paths`](crate::validate_paths) use.
    #[must_use]
    pub fn permissive() -> Self {
        Self {
            max_path_len: usize::MAX,
        }
    }

    /// Conservative limits for untrusted archives.
    #[must_use]
    pub fn strict() -> Self {
        Self { max_path_len: 1024 }
    }
}
