//! Field rules for [`Category`](crate::Category).
//!
//! Rules are checked in a fixed order and only the first violation is
//! reported.

use codeflix_core::DomainError;
use thiserror::Error;

/// Minimum name length, in characters.
pub const NAME_MIN_LEN: usize = 3;

/// Maximum name length, in characters.
pub const NAME_MAX_LEN: usize = 255;

/// Maximum description length, in characters.
pub const DESCRIPTION_MAX_LEN: usize = 10_000;

/// A category field rule was violated.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum CategoryError {
    #[error("Name should not be empty or null")]
    NameEmpty,

    #[error("Description should not be empty or null")]
    DescriptionNull,

    #[error("Name should be at least 3 characters long")]
    NameTooShort,

    #[error("Name should be less or equal 255 characters long")]
    NameTooLong,

    #[error("Description should be less or equal 10000 characters long")]
    DescriptionTooLong,
}

impl CategoryError {
    /// Stable key of the violated rule (for logs and metrics labels).
    pub fn rule(&self) -> &'static str {
        match self {
            CategoryError::NameEmpty => "name.empty",
            CategoryError::DescriptionNull => "description.null",
            CategoryError::NameTooShort => "name.too_short",
            CategoryError::NameTooLong => "name.too_long",
            CategoryError::DescriptionTooLong => "description.too_long",
        }
    }
}

impl From<CategoryError> for DomainError {
    fn from(err: CategoryError) -> Self {
        DomainError::validation(err.to_string())
    }
}

/// Check present values against every rule.
pub(crate) fn check(name: &str, description: &str) -> Result<(), CategoryError> {
    if name.trim().is_empty() {
        return Err(CategoryError::NameEmpty);
    }

    let name_len = name.chars().count();
    if name_len < NAME_MIN_LEN {
        return Err(CategoryError::NameTooShort);
    }
    if name_len > NAME_MAX_LEN {
        return Err(CategoryError::NameTooLong);
    }

    if description.chars().count() > DESCRIPTION_MAX_LEN {
        return Err(CategoryError::DescriptionTooLong);
    }

    Ok(())
}

/// Check possibly-absent values, handing back the owned fields on success.
///
/// A blank name is reported before a missing description.
pub(crate) fn validated(
    name: Option<String>,
    description: Option<String>,
) -> Result<(String, String), CategoryError> {
    let name = name
        .filter(|n| !n.trim().is_empty())
        .ok_or(CategoryError::NameEmpty)?;
    let description = description.ok_or(CategoryError::DescriptionNull)?;

    check(&name, &description)?;
    Ok((name, description))
}
