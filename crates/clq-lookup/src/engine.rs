//! The lookup engine.
//!
//! [`LookupEngine`] owns a built [`LookupIndex`] and answers the one question
//! the rest of the product asks: *what size category does this free-text
//! query most likely refer to?*
//!
//! The answer pipeline, in order:
//!
//! 1. Normalize the query; an empty result means no usable signal → `None`.
//! 2. Exact match against the index (record keys and alias keys) — a hit
//!    short-circuits everything else.
//! 3. Substring scan over the reference records, counting one match per
//!    record towards its size category.
//! 4. No matching record → `None`; a unique plurality winner → that size;
//!    a tie at the top → [`sedan`](LookupEngine::TIE_FALLBACK),
//!    unconditionally, even when sedan is not among the tied sizes.
//!
//! The engine holds no interior mutability and performs no I/O, so lookups
//! are pure and repeatable; there is deliberately no hidden process-wide
//! singleton. Construct the engine once and pass it by reference.

use clq_core::{SizeCategory, VehicleCatalog};
use smallvec::SmallVec;

use crate::alias::AliasTable;
use crate::error::IndexError;
use crate::index::{IndexStats, LookupIndex};
use crate::normalize::normalize;

/// Resolves free-text vehicle queries to size categories.
///
/// # Thread Safety
///
/// `LookupEngine` is `Send` and `Sync`: the index is immutable after
/// construction and lookups take `&self`, so concurrent callers need no
/// locking. Share it behind an `Arc` (or build it before spawning) and the
/// fully built index is all any thread can ever observe.
///
/// # Examples
///
/// ```
/// use clq_core::SizeCategory;
/// use clq_lookup::LookupEngine;
///
/// let engine = LookupEngine::embedded().unwrap();
///
/// assert_eq!(engine.lookup("Honda Accord"), Some(SizeCategory::Sedan));
/// assert_eq!(engine.lookup("Ferrari F40"), None);
/// ```
#[derive(Debug, Clone)]
pub struct LookupEngine {
    index: LookupIndex,
}

impl LookupEngine {
    /// The category returned when two or more sizes tie at the maximum
    /// match count.
    pub const TIE_FALLBACK: SizeCategory = SizeCategory::Sedan;

    /// Builds an engine over the given catalog and alias table.
    ///
    /// # Errors
    ///
    /// Returns an [`IndexError`] if the alias table references a canonical
    /// phrase that is not in the catalog; this is a data defect and should
    /// abort startup rather than surface at query time.
    pub fn new(catalog: &VehicleCatalog, aliases: &AliasTable) -> Result<Self, IndexError> {
        let index = LookupIndex::build(catalog.records(), aliases)?;
        Ok(Self { index })
    }

    /// Builds an engine over the embedded dataset and alias table.
    ///
    /// # Errors
    ///
    /// Returns an [`IndexError`] if the embedded alias table has drifted out
    /// of sync with the embedded dataset.
    pub fn embedded() -> Result<Self, IndexError> {
        Self::new(&VehicleCatalog::embedded(), &AliasTable::embedded())
    }

    /// Wraps an already-built index.
    #[inline]
    #[must_use]
    pub const fn from_index(index: LookupIndex) -> Self {
        Self { index }
    }

    /// Returns the underlying index.
    #[inline]
    #[must_use]
    pub const fn index(&self) -> &LookupIndex {
        &self.index
    }

    /// Returns a stats snapshot of the underlying index.
    #[must_use]
    pub fn stats(&self) -> IndexStats {
        self.index.stats()
    }

    /// Rebuilds the index from new inputs.
    ///
    /// This is the only invalidation path; nothing rebuilds implicitly per
    /// lookup. The replacement index is built completely before it is
    /// swapped in, so a failed rebuild leaves the current index untouched.
    ///
    /// # Errors
    ///
    /// Returns an [`IndexError`] under the same conditions as
    /// [`new`](Self::new).
    pub fn rebuild(
        &mut self,
        catalog: &VehicleCatalog,
        aliases: &AliasTable,
    ) -> Result<(), IndexError> {
        self.index = LookupIndex::build(catalog.records(), aliases)?;
        Ok(())
    }

    /// Resolves a free-text query to a size category.
    ///
    /// Returns `None` both when the query carries no usable signal (empty or
    /// punctuation-only) and when nothing in the dataset matches; callers
    /// that need to tell those apart must pre-validate. Never panics.
    ///
    /// Repeated calls with the same query always return the same result.
    ///
    /// # Examples
    ///
    /// ```
    /// use clq_core::SizeCategory;
    /// use clq_lookup::LookupEngine;
    ///
    /// let engine = LookupEngine::embedded().unwrap();
    ///
    /// // Exact and alias hits short-circuit.
    /// assert_eq!(engine.lookup("  hOnDa   aCcOrD  "), Some(SizeCategory::Sedan));
    /// assert_eq!(engine.lookup("C Class"), Some(SizeCategory::Sedan));
    ///
    /// // Substring plurality otherwise.
    /// assert_eq!(engine.lookup("camr"), Some(SizeCategory::Sedan));
    ///
    /// assert_eq!(engine.lookup("   "), None);
    /// ```
    #[must_use]
    pub fn lookup(&self, query: &str) -> Option<SizeCategory> {
        let normalized = normalize(query);
        if normalized.is_empty() {
            return None;
        }

        if let Some(size) = self.index.exact_match(&normalized) {
            return Some(size);
        }

        // Substring scan: each record counts at most once towards its size.
        let mut counts = [0_usize; SizeCategory::COUNT];
        for entry in self.index.scan_entries() {
            if entry.matches(&normalized) {
                counts[entry.size.as_index()] += 1;
            }
        }

        let best = counts.iter().copied().max().unwrap_or(0);
        if best == 0 {
            return None;
        }

        let leaders: SmallVec<[SizeCategory; SizeCategory::COUNT]> = SizeCategory::ALL
            .into_iter()
            .filter(|size| counts[size.as_index()] == best)
            .collect();

        match leaders.as_slice() {
            [winner] => Some(*winner),
            _ => Some(Self::TIE_FALLBACK),
        }
    }

    /// Resolves an optional query, treating absence like an empty query.
    #[inline]
    #[must_use]
    pub fn lookup_opt(&self, query: Option<&str>) -> Option<SizeCategory> {
        query.and_then(|q| self.lookup(q))
    }
}
