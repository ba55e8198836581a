//! Build error types.

use thiserror::Error;

/// Errors that can occur while building the tree.
///
/// Malformed records are not errors (they pass through untouched), and
/// duplicate addresses are a caller contract handled last-write-wins, so the
/// only fatal condition is an exhausted default-page name search during
/// promotion.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum BuildError {
    /// Every candidate default-page name at the address was already taken.
    #[error("no free default-page name under {address} after {attempts} attempts")]
    DefaultPageNamesExhausted {
        /// Address of the folder whose default-page slot could not be named.
        address: String,
        /// Number of candidate names tried before giving up.
        attempts: usize,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exhausted_display() {
        let err = BuildError::DefaultPageNamesExhausted {
            address: "https://example.org/a".to_string(),
            attempts: 10_000,
        };
        let msg = err.to_string();
        assert!(msg.contains("https://example.org/a"));
        assert!(msg.contains("10000"));
    }
}
