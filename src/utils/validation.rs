//! Centralized validation and helper functions.

use crate::core::file::BioDataFile;

/// Maximum number of sequences allowed in a single file's dictionary
pub const MAX_SEQUENCES: usize = 100_000;

/// Check if adding another sequence would exceed the maximum allowed.
///
/// Call this with the current count BEFORE adding a new sequence.
/// Returns an error message if adding would exceed the limit, None if safe to add.
///
/// # Example
/// ```ignore
/// if check_sequence_limit(sequences.len()).is_some() {
///     return Err(...);
/// }
/// sequences.push(new_sequence); // Safe to add
/// ```
#[must_use]
pub fn check_sequence_limit(count: usize) -> Option<String> {
    if count >= MAX_SEQUENCES {
        Some(format!(
            "Too many sequences: adding another would exceed maximum of {MAX_SEQUENCES}"
        ))
    } else {
        None
    }
}

/// Reasons a file entry is rejected at store construction
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("Empty path provided")]
    EmptyPath,
    #[error("Invalid path: contains null bytes or control characters")]
    InvalidPath,
    #[error("Empty organism provided")]
    EmptyOrganism,
}

/// Validate a file entry before it is ingested
///
/// # Errors
///
/// Returns `ValidationError::EmptyPath` if the path is blank,
/// `ValidationError::InvalidPath` if it contains control characters, or
/// `ValidationError::EmptyOrganism` if the organism is blank.
pub fn validate_file_entry(file: &BioDataFile) -> Result<(), ValidationError> {
    if file.path.trim().is_empty() {
        return Err(ValidationError::EmptyPath);
    }

    if file.path.chars().any(char::is_control) {
        return Err(ValidationError::InvalidPath);
    }

    if file.organism.trim().is_empty() {
        return Err(ValidationError::EmptyOrganism);
    }

    Ok(())
}
