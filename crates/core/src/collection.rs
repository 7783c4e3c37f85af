//! Collection name validation
//!
//! Stores reject bad names with `InvalidCollectionName` before taking any
//! lock or looking at state.

use crate::error::{StoreError, StoreResult};

/// Minimum collection name length, in characters
pub const MIN_COLLECTION_NAME_LENGTH: usize = 5;

/// Validate a collection name
///
/// A name is valid iff it:
/// - is not empty and not whitespace only
/// - does not start or end with a space character
/// - is at least [`MIN_COLLECTION_NAME_LENGTH`] characters long
///
/// # Errors
/// - `InvalidCollectionName` naming the first rule the name breaks
pub fn validate_collection_name(name: &str) -> StoreResult<()> {
    if name.is_empty() {
        return Err(StoreError::invalid_name(
            name,
            "Collection name cannot be empty",
        ));
    }

    if name.trim().is_empty() {
        return Err(StoreError::invalid_name(
            name,
            "Collection name cannot be whitespace only",
        ));
    }

    // Only the space character itself is forbidden at the edges
    if name.starts_with(' ') || name.ends_with(' ') {
        return Err(StoreError::invalid_name(
            name,
            "Collection name cannot start or end with a space",
        ));
    }

    if name.chars().count() < MIN_COLLECTION_NAME_LENGTH {
        return Err(StoreError::invalid_name(
            name,
            "Collection name must be at least 5 characters",
        ));
    }

    Ok(())
}

/// Whether a collection name passes [`validate_collection_name`]
pub fn is_valid_collection_name(name: &str) -> bool {
    validate_collection_name(name).is_ok()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::OperationResult;

    #[test]
    fn test_valid_names() {
        for name in ["products", "abcde", "my collection", "x-y_z", "\tabcd", "produits-été"] {
            assert!(is_valid_collection_name(name), "{:?} should be valid", name);
        }
    }

    #[test]
    fn test_empty_name() {
        let err = validate_collection_name("").unwrap_err();
        assert_eq!(err.code(), OperationResult::InvalidCollectionName);
        assert!(err.to_string().contains("empty"));
    }

    #[test]
    fn test_whitespace_only_name() {
        for name in ["     ", "\t\t\t\t\t", " \n \r "] {
            let err = validate_collection_name(name).unwrap_err();
            assert!(err.to_string().contains("whitespace"), "{:?}", name);
        }
    }

    #[test]
    fn test_leading_or_trailing_space() {
        assert!(!is_valid_collection_name(" products"));
        assert!(!is_valid_collection_name("products "));
        assert!(!is_valid_collection_name(" products "));
    }

    #[test]
    fn test_too_short() {
        assert!(!is_valid_collection_name("a"));
        assert!(!is_valid_collection_name("abcd"));
        assert!(is_valid_collection_name("abcde"));
    }

    #[test]
    fn test_length_counts_characters_not_bytes() {
        // 4 characters, 8 bytes
        assert!(!is_valid_collection_name("éééé"));
        assert!(is_valid_collection_name("ééééé"));
    }

    mod properties {
        use super::super::*;
        use proptest::prelude::*;

        proptest! {
            #[test]
            fn names_with_word_edges_validate_by_length(name in "[a-z][a-z ]{0,10}[a-z]") {
                prop_assert_eq!(
                    is_valid_collection_name(&name),
                    name.chars().count() >= MIN_COLLECTION_NAME_LENGTH
                );
            }

            #[test]
            fn leading_space_is_always_rejected(rest in "[a-z]{0,12}") {
                let name = format!(" {}", rest);
                prop_assert!(!is_valid_collection_name(&name));
            }

            #[test]
            fn trailing_space_is_always_rejected(rest in "[a-z]{0,12}") {
                let name = format!("{} ", rest);
                prop_assert!(!is_valid_collection_name(&name));
            }
        }
    }
}
