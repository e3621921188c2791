//! Name validation.

use thiserror::Error;
use unicode_general_category::{get_general_category, GeneralCategory};

/// Maximum name length in UTF-8 bytes, measured before trimming.
pub const MAX_NAME_LEN: usize = 100;

/// Reasons a name can be rejected.
///
/// Variants are checked in declaration order; the first failing rule wins.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Error)]
pub enum NameError {
    /// Nothing left after trimming surrounding whitespace.
    #[error("name cannot be empty")]
    Empty,

    /// Untrimmed input exceeds [`MAX_NAME_LEN`] bytes.
    #[error("name cannot exceed 100 characters")]
    TooLong,

    /// Contains something other than letters, whitespace, `-` or `'`.
    #[error("name contains invalid characters")]
    Invalid,
}

/// Validate a candidate name.
///
/// An all-whitespace input reports [`NameError::Empty`] regardless of length.
pub fn validate_name(name: &str) -> Result<(), NameError> {
    if name.trim().is_empty() {
        return Err(NameError::Empty);
    }

    if name.len() > MAX_NAME_LEN {
        return Err(NameError::TooLong);
    }

    if !name.chars().all(is_name_char) {
        return Err(NameError::Invalid);
    }

    Ok(())
}

fn is_name_char(c: char) -> bool {
    is_letter(c) || c.is_whitespace() || c == '-' || c == '\''
}

/// General category L (Lu, Ll, Lt, Lm, Lo). Letter numbers and marks are excluded.
fn is_letter(c: char) -> bool {
    matches!(
        get_general_category(c),
        GeneralCategory::UppercaseLetter
            | GeneralCategory::LowercaseLetter
            | GeneralCategory::TitlecaseLetter
            | GeneralCategory::ModifierLetter
            | GeneralCategory::OtherLetter
    )
}
