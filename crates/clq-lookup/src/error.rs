//! Error types for the clq-lookup crate.
//!
//! This module provides the [`IndexError`] type for defects detected while
//! building the lookup index. These are data-integrity failures in the alias
//! table: they abort construction so a bad deploy fails at startup instead of
//! silently misrouting queries later.

/// Errors that can occur during lookup index construction.
///
/// # Examples
///
/// ```
/// use clq_lookup::IndexError;
///
/// let error = IndexError::UnknownAliasTarget {
///     alias: "beemer".to_owned(),
///     canonical: "BMW 9 Series".to_owned(),
/// };
/// assert!(error.to_string().contains("BMW 9 Series"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum IndexError {
    /// An alias points at a canonical phrase that is not in the index.
    ///
    /// The alias table is supposed to reference dataset rows; a dangling
    /// canonical phrase means the table and the dataset have drifted apart.
    #[error("alias '{alias}' refers to canonical entry '{canonical}' which is not in the index")]
    UnknownAliasTarget {
        /// The alias phrase as written in the table.
        alias: String,
        /// The canonical phrase that failed to resolve.
        canonical: String,
    },

    /// An alias phrase normalizes to an empty key and could never match.
    #[error("alias '{alias}' normalizes to an empty key")]
    EmptyAliasKey {
        /// The alias phrase as written in the table.
        alias: String,
    },

    /// A canonical phrase normalizes to an empty key.
    #[error("canonical entry for alias '{alias}' normalizes to an empty key")]
    EmptyCanonicalKey {
        /// The alias phrase whose canonical side is degenerate.
        alias: String,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unknown_alias_target_display() {
        let error = IndexError::UnknownAliasTarget {
            alias: "c class".to_owned(),
            canonical: "mercedes benz c class".to_owned(),
        };
        let msg = error.to_string();
        assert!(msg.contains("c class"));
        assert!(msg.contains("not in the index"));
    }

    #[test]
    fn test_empty_key_displays_alias() {
        let error = IndexError::EmptyAliasKey {
            alias: "!!!".to_owned(),
        };
        assert!(error.to_string().contains("!!!"));
    }
}
