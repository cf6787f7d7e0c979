//! Alias table for colloquial model phrases.
//!
//! Users rarely type a full canonical make and model; an [`AliasTable`] maps
//! shorthand phrases ("C Class", "3-Series") to a canonical "make model"
//! phrase that is already in the dataset. Aliases participate only in the
//! exact-match path of a lookup, never in substring scanning.
//!
//! The table is an ordered sequence, not a hash map, so that index
//! construction is deterministic when two aliases collide on a key.

use clq_core::data::MODEL_ALIASES;

/// One alias mapping.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AliasEntry {
    /// The colloquial phrase as users type it.
    pub alias: String,

    /// The canonical "make model" phrase it stands for. Must normalize to a
    /// key already present in the index or construction fails.
    pub canonical: String,
}

/// An ordered table of alias → canonical mappings.
///
/// # Examples
///
/// ```
/// use clq_lookup::AliasTable;
///
/// let table = AliasTable::from_pairs([("C Class", "Mercedes-Benz C-Class")]);
/// assert_eq!(table.len(), 1);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AliasTable {
    entries: Vec<AliasEntry>,
}

impl AliasTable {
    /// Creates an empty table.
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates the table of aliases embedded alongside the reference dataset.
    #[must_use]
    pub fn embedded() -> Self {
        Self::from_pairs(MODEL_ALIASES.iter().copied())
    }

    /// Creates a table from `(alias, canonical)` pairs, preserving order.
    #[must_use]
    pub fn from_pairs<I, S>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (S, S)>,
        S: Into<String>,
    {
        let entries = pairs
            .into_iter()
            .map(|(alias, canonical)| AliasEntry {
                alias: alias.into(),
                canonical: canonical.into(),
            })
            .collect();
        Self { entries }
    }

    /// Appends an alias mapping.
    pub fn push(&mut self, alias: impl Into<String>, canonical: impl Into<String>) {
        self.entries.push(AliasEntry {
            alias: alias.into(),
            canonical: canonical.into(),
        });
    }

    /// Iterates entries in table order.
    pub fn iter(&self) -> impl Iterator<Item = &AliasEntry> {
        self.entries.iter()
    }

    /// Returns the number of entries.
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` if the table has no entries.
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
