//! Presence validation for request payloads.
//!
//! Every write endpoint requires a handful of fields; a missing one maps to
//! a 400 with the stock "Missing required fields" message. An empty or
//! whitespace-only string counts as missing, matching the falsy-field
//! behaviour of clients already talking to this API.

use crate::error::CoreError;
use crate::types::DbId;

/// Require a text field to be present and non-blank.
pub fn required_text(value: Option<&str>) -> Result<&str, CoreError> {
    match value {
        Some(s) if !s.trim().is_empty() => Ok(s),
        _ => Err(CoreError::missing_fields()),
    }
}

/// Require an id field to be present and positive.
///
/// Ids are store-assigned (or externally assigned, for cards) positive
/// integers; zero is never a valid reference.
pub fn required_id(value: Option<DbId>) -> Result<DbId, CoreError> {
    match value {
        Some(id) if id > 0 => Ok(id),
        _ => Err(CoreError::missing_fields()),
    }
}

/// Require an ordering index to be present. Zero is a valid position.
pub fn required_order(value: Option<i32>) -> Result<i32, CoreError> {
    value.ok_or_else(CoreError::missing_fields)
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;

    // -- required_text -----------------------------------------------------

    #[test]
    fn text_present_accepted() {
        assert_eq!(required_text(Some("alice")).unwrap(), "alice");
    }

    #[test]
    fn text_missing_rejected() {
        assert_matches!(required_text(None), Err(CoreError::Validation(_)));
    }

    #[test]
    fn text_empty_rejected() {
        assert_matches!(required_text(Some("")), Err(CoreError::Validation(_)));
    }

    #[test]
    fn text_whitespace_rejected() {
        assert_matches!(required_text(Some("   ")), Err(CoreError::Validation(_)));
    }

    // -- required_id -------------------------------------------------------

    #[test]
    fn id_positive_accepted() {
        assert_eq!(required_id(Some(7)).unwrap(), 7);
    }

    #[test]
    fn id_missing_rejected() {
        assert_matches!(required_id(None), Err(CoreError::Validation(_)));
    }

    #[test]
    fn id_zero_rejected() {
        assert_matches!(required_id(Some(0)), Err(CoreError::Validation(_)));
    }

    // -- required_order ----------------------------------------------------

    #[test]
    fn order_zero_accepted() {
        assert_eq!(required_order(Some(0)).unwrap(), 0);
    }

    #[test]
    fn order_missing_rejected() {
        assert_matches!(required_order(None), Err(CoreError::Validation(_)));
    }
}
