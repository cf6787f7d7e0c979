//! Lookup index construction.
//!
//! The [`LookupIndex`] is built once from the reference dataset and the alias
//! table, and is read-only afterwards. It holds two structures:
//!
//! - an **exact map** from normalized key to size category, seeded with the
//!   model-only key and the combined "make model" key of every record, plus
//!   one key per alias;
//! - a **scan table** of per-record normalized `(make, model, combined)`
//!   triples used for substring matching when the exact map misses. Alias
//!   keys deliberately do not appear here.
//!
//! Construction is deterministic: records register in dataset order and
//! aliases in table order, with last-write-wins on key collisions (a
//! deliberate simplification, not conflict detection). An alias whose
//! canonical phrase is not already an exact key is a data-integrity defect
//! and fails the build.

use clq_core::{FxHashMap, SizeCategory, VehicleRecord, fx_hash_map_with_capacity};
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::alias::AliasTable;
use crate::error::IndexError;
use crate::normalize::normalize;

/// One record's normalized forms, used for substring scanning.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct ScanEntry {
    /// Normalized make.
    pub(crate) make: String,

    /// Normalized model.
    pub(crate) model: String,

    /// Normalized "make model" concatenation.
    pub(crate) combined: String,

    /// Size category of the record.
    pub(crate) size: SizeCategory,
}

impl ScanEntry {
    /// Returns `true` if `needle` occurs in the make, the model, or the
    /// combined form. Used to count each record at most once per query.
    #[inline]
    pub(crate) fn matches(&self, needle: &str) -> bool {
        self.make.contains(needle)
            || self.model.contains(needle)
            || self.combined.contains(needle)
    }
}

/// Counts describing a built index.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct IndexStats {
    /// Number of records in the scan table.
    pub records: usize,

    /// Number of keys in the exact map (record keys and alias keys).
    pub exact_keys: usize,

    /// Number of alias entries registered.
    pub alias_keys: usize,
}

/// The read-only index answering exact and substring queries.
///
/// # Thread Safety
///
/// A `LookupIndex` is immutable after [`build`](Self::build) returns, so it
/// is `Send` and `Sync`; concurrent readers need no locking.
#[derive(Debug, Clone)]
pub struct LookupIndex {
    /// Normalized key → size, including alias keys.
    exact: FxHashMap<String, SizeCategory>,

    /// Per-record normalized forms for substring scanning.
    entries: Vec<ScanEntry>,

    /// Number of alias entries registered, for stats.
    alias_keys: usize,
}

impl LookupIndex {
    /// Builds an index from records and aliases.
    ///
    /// Records register a model-only key and a combined "make model" key
    /// each; later records overwrite earlier ones on collision. Aliases are
    /// then resolved against the record keys, in table order.
    ///
    /// Building twice from the same inputs yields observationally equal
    /// indexes.
    ///
    /// # Errors
    ///
    /// Returns an [`IndexError`] if an alias or its canonical phrase
    /// normalizes to an empty key, or if the canonical phrase is not present
    /// among the registered keys. Aliases are never silently dropped.
    pub fn build(records: &[VehicleRecord], aliases: &AliasTable) -> Result<Self, IndexError> {
        let mut exact = fx_hash_map_with_capacity(records.len() * 2 + aliases.len());
        let mut entries = Vec::with_capacity(records.len());

        for record in records {
            let make = normalize(&record.make);
            let model = normalize(&record.model);
            let combined = normalize(&format!("{} {}", record.make, record.model));

            exact.insert(model.clone(), record.size);
            exact.insert(combined.clone(), record.size);

            entries.push(ScanEntry {
                make,
                model,
                combined,
                size: record.size,
            });
        }

        let mut alias_keys = 0;
        for entry in aliases.iter() {
            let alias = normalize(&entry.alias);
            if alias.is_empty() {
                return Err(IndexError::EmptyAliasKey {
                    alias: entry.alias.clone(),
                });
            }

            let canonical = normalize(&entry.canonical);
            if canonical.is_empty() {
                return Err(IndexError::EmptyCanonicalKey {
                    alias: entry.alias.clone(),
                });
            }

            let Some(size) = exact.get(&canonical).copied() else {
                return Err(IndexError::UnknownAliasTarget {
                    alias: entry.alias.clone(),
                    canonical: entry.canonical.clone(),
                });
            };

            debug!(alias = %alias, canonical = %canonical, size = %size, "registered alias key");
            exact.insert(alias, size);
            alias_keys += 1;
        }

        let index = Self {
            exact,
            entries,
            alias_keys,
        };
        info!(
            records = index.entries.len(),
            exact_keys = index.exact.len(),
            alias_keys = index.alias_keys,
            "lookup index built"
        );
        Ok(index)
    }

    /// Returns the size for an exact normalized key, if registered.
    ///
    /// The key must already be normalized; raw queries go through
    /// [`LookupEngine::lookup`](crate::LookupEngine::lookup).
    #[inline]
    #[must_use]
    pub fn exact_match(&self, key: &str) -> Option<SizeCategory> {
        self.exact.get(key).copied()
    }

    /// Returns `true` if the normalized key is registered.
    #[inline]
    #[must_use]
    pub fn contains_key(&self, key: &str) -> bool {
        self.exact.contains_key(key)
    }

    /// Returns the number of records in the scan table.
    #[inline]
    #[must_use]
    pub fn record_count(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` if the index holds no records and no keys.
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty() && self.exact.is_empty()
    }

    /// Returns a stats snapshot of the built index.
    #[must_use]
    pub fn stats(&self) -> IndexStats {
        IndexStats {
            records: self.entries.len(),
            exact_keys: self.exact.len(),
            alias_keys: self.alias_keys,
        }
    }

    /// Returns the scan table for substring matching.
    #[inline]
    pub(crate) fn scan_entries(&self) -> &[ScanEntry] {
        &self.entries
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn records(rows: &[(&str, &str, SizeCategory)]) -> Vec<VehicleRecord> {
        rows.iter()
            .map(|&(make, model, size)| VehicleRecord::new(make, model, size))
            .collect()
    }

    #[test]
    fn test_build_registers_model_and_combined_keys() {
        let records = records(&[("Honda", "Accord", SizeCategory::Sedan)]);
        let index = LookupIndex::build(&records, &AliasTable::new()).unwrap();

        assert_eq!(index.exact_match("accord"), Some(SizeCategory::Sedan));
        assert_eq!(index.exact_match("honda accord"), Some(SizeCategory::Sedan));
        assert_eq!(index.exact_match("honda"), None);
    }

    #[test]
    fn test_build_normalizes_keys() {
        let records = records(&[("Mercedes-Benz", "C-Class", SizeCategory::Sedan)]);
        let index = LookupIndex::build(&records, &AliasTable::new()).unwrap();

        assert!(index.contains_key("cclass"));
        assert!(index.contains_key("mercedesbenz cclass"));
        assert!(!index.contains_key("C-Class"));
    }

    #[test]
    fn test_later_records_win_key_collisions() {
        let records = records(&[
            ("Chevrolet", "Express", SizeCategory::FullVan),
            ("Acme", "Express", SizeCategory::Boat),
        ]);
        let index = LookupIndex::build(&records, &AliasTable::new()).unwrap();

        // Model-only key: last write wins.
        assert_eq!(index.exact_match("express"), Some(SizeCategory::Boat));
        // Combined keys stay distinct.
        assert_eq!(
            index.exact_match("chevrolet express"),
            Some(SizeCategory::FullVan)
        );
    }

    #[test]
    fn test_alias_resolves_to_canonical_size() {
        let records = records(&[("Mercedes-Benz", "C-Class", SizeCategory::Sedan)]);
        let aliases = AliasTable::from_pairs([("C Class", "Mercedes-Benz C-Class")]);
        let index = LookupIndex::build(&records, &aliases).unwrap();

        assert_eq!(index.exact_match("c class"), Some(SizeCategory::Sedan));
    }

    #[test]
    fn test_dangling_alias_fails_build() {
        let records = records(&[("Honda", "Accord", SizeCategory::Sedan)]);
        let aliases = AliasTable::from_pairs([("beemer", "BMW 9 Series")]);
        let error = LookupIndex::build(&records, &aliases).unwrap_err();

        assert_eq!(
            error,
            IndexError::UnknownAliasTarget {
                alias: "beemer".to_owned(),
                canonical: "BMW 9 Series".to_owned(),
            }
        );
    }

    #[test]
    fn test_degenerate_alias_fails_build() {
        let records = records(&[("Honda", "Accord", SizeCategory::Sedan)]);

        let aliases = AliasTable::from_pairs([("!!!", "Honda Accord")]);
        assert!(matches!(
            LookupIndex::build(&records, &aliases).unwrap_err(),
            IndexError::EmptyAliasKey { .. }
        ));

        let aliases = AliasTable::from_pairs([("accord sedan", "???")]);
        assert!(matches!(
            LookupIndex::build(&records, &aliases).unwrap_err(),
            IndexError::EmptyCanonicalKey { .. }
        ));
    }

    #[test]
    fn test_alias_keys_excluded_from_scan_table() {
        let records = records(&[("Mercedes-Benz", "C-Class", SizeCategory::Sedan)]);
        let aliases = AliasTable::from_pairs([("C Class", "Mercedes-Benz C-Class")]);
        let index = LookupIndex::build(&records, &aliases).unwrap();

        assert_eq!(index.scan_entries().len(), 1);
        assert!(
            index
                .scan_entries()
                .iter()
                .all(|entry| !entry.combined.contains("c class"))
        );
    }

    #[test]
    fn test_build_is_idempotent() {
        let records = records(&[
            ("Honda", "Accord", SizeCategory::Sedan),
            ("Ford", "Transit", SizeCategory::FullVan),
        ]);
        let aliases = AliasTable::new();

        let first = LookupIndex::build(&records, &aliases).unwrap();
        let second = LookupIndex::build(&records, &aliases).unwrap();

        assert_eq!(first.stats(), second.stats());
        assert_eq!(first.exact_match("transit"), second.exact_match("transit"));
        assert_eq!(first.scan_entries(), second.scan_entries());
    }

    #[test]
    fn test_empty_dataset_builds_empty_index() {
        let index = LookupIndex::build(&[], &AliasTable::new()).unwrap();
        assert!(index.is_empty());
        assert_eq!(index.exact_match("anything"), None);
    }

    #[test]
    fn test_alias_over_empty_dataset_fails() {
        let aliases = AliasTable::from_pairs([("C Class", "Mercedes-Benz C-Class")]);
        assert!(matches!(
            LookupIndex::build(&[], &aliases).unwrap_err(),
            IndexError::UnknownAliasTarget { .. }
        ));
    }

    #[test]
    fn test_stats_snapshot_serializes() {
        let records = records(&[("Honda", "Accord", SizeCategory::Sedan)]);
        let index = LookupIndex::build(&records, &AliasTable::new()).unwrap();

        let stats = index.stats();
        assert_eq!(stats.records, 1);
        assert_eq!(stats.exact_keys, 2);
        assert_eq!(stats.alias_keys, 0);

        let json = serde_json::to_string(&stats).unwrap();
        assert!(json.contains("\"exact_keys\":2"));
    }
}
