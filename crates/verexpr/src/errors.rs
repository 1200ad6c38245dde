//! Error types shared by the catalog, action and diagnostics modules.
//!
//! None of these ever escape [`parse_version_expression`](crate::parse_version_expression)
//! or [`get_diff`](crate::get_diff); malformed expression fragments are
//! dropped rather than rejected.

use thiserror::Error;

/// Errors raised while building a [`VersionCatalog`](crate::VersionCatalog).
///
/// # Examples
/// ```
/// use verexpr::{CatalogError, VersionCatalog};
/// let err = VersionCatalog::new(["1.20.1", "1.20.0", "1.20.1"]).unwrap_err();
/// assert_eq!(
///     err,
///     CatalogError::Duplicate { version: "1.20.1".into(), first: 0, second: 2 }
/// );
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CatalogError {
    /// The same version string appears twice in the catalog.
    #[error("duplicate catalog entry `{version}` at positions {first} and {second}")]
    Duplicate {
        /// The repeated version string.
        version: String,
        /// Zero-based index of the first occurrence.
        first: usize,
        /// Zero-based index of the repeated occurrence.
        second: usize,
    },
}

/// Error returned when parsing an [`Action`](crate::Action) from text fails.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid action `{0}`, expected `include` or `exclude`")]
pub struct ActionParseError(pub String);

/// Why an expression unit contributed nothing to the decision set.
///
/// Reported by [`explain_expression`](crate::explain_expression) and logged
/// at debug level by the parser.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DiscardReason {
    /// A comparison operand is not a catalog entry.
    #[error("comparison operand `{0}` is not a known version")]
    UnknownOperand(String),
    /// A hyphen range starts at a version missing from the catalog.
    #[error("range start `{0}` is not a known version")]
    UnknownRangeStart(String),
    /// A hyphen range ends at a version missing from the catalog.
    #[error("range end `{0}` is not a known version")]
    UnknownRangeEnd(String),
    /// A hyphen range whose start is newer than its end.
    #[error("range `{start}-{end}` starts after it ends")]
    InvertedRange {
        /// Declared range start.
        start: String,
        /// Declared range end.
        end: String,
    },
    /// A literal version that never surfaces because the catalog lacks it.
    #[error("`{0}` is not a known version")]
    NotInCatalog(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn formats_duplicate_catalog_entry() {
        let err = CatalogError::Duplicate {
            version: "1.19".into(),
            first: 1,
            second: 4,
        };
        assert_eq!(
            err.to_string(),
            "duplicate catalog entry `1.19` at positions 1 and 4"
        );
    }

    #[test]
    fn formats_action_parse_error() {
        let err = ActionParseError("keep".into());
        assert_eq!(
            err.to_string(),
            "invalid action `keep`, expected `include` or `exclude`"
        );
    }

    #[test]
    fn formats_inverted_range() {
        let reason = DiscardReason::InvertedRange {
            start: "1.20.4".into(),
            end: "1.20.0".into(),
        };
        assert_eq!(reason.to_string(), "range `1.20.4-1.20.0` starts after it ends");
    }
}
