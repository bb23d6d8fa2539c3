//! Validation functions for paths.

use crate::types::PathSegment;
use crate::util::format_path;
use crate::JpathError;

/// Convert an index segment into an array position.
///
/// Returns `None` for negative indices and for indices that do not fit in
/// `usize` on this platform.
pub fn array_index(index: i64) -> Option<usize> {
    usize::try_from(index).ok()
}

/// Check a single segment: names must be non-empty, indices non-negative.
pub fn is_valid_segment(segment: &PathSegment<'_>) -> bool {
    match segment {
        PathSegment::Name(name) => !name.is_empty(),
        PathSegment::Index(index) => array_index(*index).is_some(),
    }
}

/// Validate a path before it is walked.
///
/// # Errors
///
/// Returns [`JpathError::InvalidSegment`] with the position of the first
/// empty name or negative index.
///
/// # Example
///
/// ```
/// use jpath::{path, validate_path, JpathError};
///
/// validate_path(&path!["a", 0]).unwrap();
/// assert_eq!(
///     validate_path(&path!["a", -1]),
///     Err(JpathError::InvalidSegment { position: 1 })
/// );
/// ```
pub fn validate_path(path: &[PathSegment<'_>]) -> Result<(), JpathError> {
    match path.iter().position(|segment| !is_valid_segment(segment)) {
        None => Ok(()),
        Some(position) => {
            log::trace!(
                "invalid segment {} at position {position} in {}",
                path[position],
                format_path(path)
            );
            Err(JpathError::InvalidSegment { position })
        }
    }
}
