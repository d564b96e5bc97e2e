//! Search error types.
//!
//! Searching itself never fails; these errors come from parsing caller
//! input into search options.

use thiserror::Error;

use crate::options::SearchField;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum SearchError {
    /// A field name did not match any searchable field.
    #[error("unknown search field: {} (expected one of: {})", .0, SearchField::names())]
    UnknownField(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unknown_field_message_lists_every_field() {
        let message = SearchError::UnknownField("locations".to_string()).to_string();
        assert!(message.starts_with("unknown search field: locations"));
        for field in SearchField::ALL {
            assert!(message.contains(field.as_str()), "{field} missing from {message}");
        }
    }
}
