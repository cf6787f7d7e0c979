//! The vehicle catalog: dataset loading and queries.
//!
//! [`VehicleCatalog`] owns the reference dataset for the life of the process.
//! It is loaded once — from the embedded table by default, or from a JSON
//! file — and never mutated afterwards. A missing or unparseable file
//! degrades to an empty catalog (every lookup then misses) rather than
//! failing, so a bad deployment cannot take the calculator down with it.
//!
//! # Examples
//!
//! ```
//! use clq_core::{SizeCategory, VehicleCatalog};
//!
//! let catalog = VehicleCatalog::embedded();
//! assert_eq!(catalog.len(), 60);
//! assert_eq!(catalog.by_size(SizeCategory::Boat).count(), 10);
//! ```

use std::fs;

use camino::Utf8Path;
use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use crate::config::{Config, DataSourceKind};
use crate::data::REFERENCE_VEHICLES;
use crate::error::DataError;
use crate::types::{RawVehicleRecord, SizeCategory, VehicleRecord};
use crate::validate::RecordValidator;

/// Criteria for searching the catalog.
///
/// All present fields must match: make and model are case-insensitive
/// substring matches, size is an exact match. An empty criteria set matches
/// every record.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SearchCriteria {
    /// Substring to find in the make, case-insensitively.
    pub make: Option<String>,

    /// Substring to find in the model, case-insensitively.
    pub model: Option<String>,

    /// Exact size category.
    pub size: Option<SizeCategory>,
}

impl SearchCriteria {
    fn matches(&self, record: &VehicleRecord) -> bool {
        if let Some(make) = &self.make {
            if !record.make.to_lowercase().contains(&make.to_lowercase()) {
                return false;
            }
        }
        if let Some(model) = &self.model {
            if !record.model.to_lowercase().contains(&model.to_lowercase()) {
                return false;
            }
        }
        if let Some(size) = self.size {
            if record.size != size {
                return false;
            }
        }
        true
    }
}

/// The immutable reference dataset of vehicles.
///
/// # Thread Safety
///
/// `VehicleCatalog` holds no interior mutability, so it is `Send` and `Sync`
/// and can be shared freely (e.g. via `Arc`) once constructed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct VehicleCatalog {
    records: Vec<VehicleRecord>,
}

impl VehicleCatalog {
    /// Creates a catalog from the compiled-in reference dataset.
    #[must_use]
    pub fn embedded() -> Self {
        let records = REFERENCE_VEHICLES
            .iter()
            .map(|&(make, model, size)| VehicleRecord::new(make, model, size))
            .collect();
        Self { records }
    }

    /// Creates an empty catalog. Every lookup against it misses.
    #[inline]
    #[must_use]
    pub fn empty() -> Self {
        Self::default()
    }

    /// Creates a catalog from already-validated records.
    #[inline]
    #[must_use]
    pub fn from_records(records: Vec<VehicleRecord>) -> Self {
        Self { records }
    }

    /// Loads the catalog described by the configuration.
    ///
    /// A JSON source without a path is treated like a failed load: the
    /// catalog degrades to empty with a warning.
    #[must_use]
    pub fn load(config: &Config) -> Self {
        match config.data.kind {
            DataSourceKind::Embedded => Self::embedded(),
            DataSourceKind::Json => match &config.data.path {
                Some(path) => {
                    let validator = RecordValidator::new(&config.validation);
                    Self::from_json_file_with(path, &validator)
                }
                None => {
                    warn!("json data source configured without a path, using empty dataset");
                    Self::empty()
                }
            },
        }
    }

    /// Loads a catalog from a JSON file using default validation limits.
    ///
    /// On any read or parse failure the catalog falls back to empty; this
    /// method never fails.
    #[must_use]
    pub fn from_json_file(path: &Utf8Path) -> Self {
        Self::from_json_file_with(path, &RecordValidator::default())
    }

    /// Loads a catalog from a JSON file with the given validator.
    ///
    /// Invalid records are dropped individually; an unreadable or
    /// unparseable file yields an empty catalog. Both cases are logged.
    #[must_use]
    pub fn from_json_file_with(path: &Utf8Path, validator: &RecordValidator) -> Self {
        let raw = match Self::read_raw(path) {
            Ok(raw) => raw,
            Err(error) => {
                warn!(
                    path = %path,
                    error = %error,
                    "failed to load vehicle dataset, falling back to empty"
                );
                return Self::empty();
            }
        };

        let report = validator.filter_valid(raw);
        if report.has_rejects() {
            warn!(
                path = %path,
                rejected = report.rejected_count(),
                "dropped invalid vehicle records"
            );
        }

        info!(path = %path, records = report.valid_count(), "vehicle dataset loaded");
        Self::from_records(report.records)
    }

    /// Reads and parses the raw record array from a JSON file.
    fn read_raw(path: &Utf8Path) -> Result<Vec<RawVehicleRecord>, DataError> {
        let contents = fs::read_to_string(path.as_std_path())?;
        Ok(serde_json::from_str(&contents)?)
    }

    /// Returns all records in dataset order.
    #[inline]
    #[must_use]
    pub fn records(&self) -> &[VehicleRecord] {
        &self.records
    }

    /// Returns the number of records.
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Returns `true` if the catalog holds no records.
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Returns all records of the given size category, in dataset order.
    pub fn by_size(&self, size: SizeCategory) -> impl Iterator<Item = &VehicleRecord> {
        self.records.iter().filter(move |record| record.size == size)
    }

    /// Returns all records whose make equals `make`, case-insensitively.
    ///
    /// # Examples
    ///
    /// ```
    /// use clq_core::VehicleCatalog;
    ///
    /// let catalog = VehicleCatalog::embedded();
    /// let fords = catalog.by_make("ford");
    /// assert_eq!(fords.len(), 5);
    /// ```
    #[must_use]
    pub fn by_make(&self, make: &str) -> Vec<&VehicleRecord> {
        let needle = make.to_lowercase();
        self.records
            .iter()
            .filter(|record| record.make.to_lowercase() == needle)
            .collect()
    }

    /// Returns all records matching the given criteria, in dataset order.
    #[must_use]
    pub fn search(&self, criteria: &SearchCriteria) -> Vec<&VehicleRecord> {
        self.records
            .iter()
            .filter(|record| criteria.matches(record))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn write_dataset(contents: &str) -> (tempfile::TempDir, camino::Utf8PathBuf) {
        let dir = tempfile::tempdir().unwrap();
        let path = camino::Utf8PathBuf::from_path_buf(dir.path().join("vehicles.json")).unwrap();
        let mut file = fs::File::create(path.as_std_path()).unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        (dir, path)
    }

    #[test]
    fn test_embedded_catalog_shape() {
        let catalog = VehicleCatalog::embedded();
        assert_eq!(catalog.len(), 60);
        assert!(!catalog.is_empty());
        for size in SizeCategory::ALL {
            assert_eq!(catalog.by_size(size).count(), 10);
        }
    }

    #[test]
    fn test_by_make_is_case_insensitive() {
        let catalog = VehicleCatalog::embedded();
        let lower = catalog.by_make("mercedes-benz");
        let mixed = catalog.by_make("Mercedes-Benz");
        assert_eq!(lower, mixed);
        assert_eq!(lower.len(), 3);
    }

    #[test]
    fn test_by_make_requires_full_match() {
        let catalog = VehicleCatalog::embedded();
        assert!(catalog.by_make("mercedes").is_empty());
    }

    #[test]
    fn test_search_combines_criteria() {
        let catalog = VehicleCatalog::embedded();

        let criteria = SearchCriteria {
            make: Some("toyota".to_owned()),
            size: Some(SizeCategory::Sports),
            ..SearchCriteria::default()
        };
        let results = catalog.search(&criteria);
        assert_eq!(results.len(), 1);
        assert_eq!(results[0].model, "Supra");

        // Empty criteria match everything.
        assert_eq!(catalog.search(&SearchCriteria::default()).len(), 60);
    }

    #[test]
    fn test_search_model_substring() {
        let catalog = VehicleCatalog::embedded();
        let criteria = SearchCriteria {
            model: Some("express".to_owned()),
            ..SearchCriteria::default()
        };
        let results = catalog.search(&criteria);
        assert_eq!(results.len(), 2);
    }

    #[test]
    fn test_from_json_file_loads_valid_records() {
        let (_dir, path) = write_dataset(
            r#"[
                {"make": "Honda", "model": "Accord", "size": "sedan"},
                {"make": "Ford", "model": "Transit", "size": "full_van"}
            ]"#,
        );
        let catalog = VehicleCatalog::from_json_file(&path);
        assert_eq!(catalog.len(), 2);
        assert_eq!(catalog.records()[1].size, SizeCategory::FullVan);
    }

    #[test]
    fn test_from_json_file_filters_invalid_records() {
        let (_dir, path) = write_dataset(
            r#"[
                {"make": "Honda", "model": "Accord", "size": "sedan"},
                {"make": "Acme", "model": "Widget", "size": "hovercraft"},
                {"make": "", "model": "Ghost", "size": "sedan"}
            ]"#,
        );
        let catalog = VehicleCatalog::from_json_file(&path);
        assert_eq!(catalog.len(), 1);
        assert_eq!(catalog.records()[0].make, "Honda");
    }

    #[test]
    fn test_missing_file_falls_back_to_empty() {
        let catalog = VehicleCatalog::from_json_file(Utf8Path::new("/nonexistent/vehicles.json"));
        assert!(catalog.is_empty());
    }

    #[test]
    fn test_malformed_file_falls_back_to_empty() {
        let (_dir, path) = write_dataset("this is not json");
        let catalog = VehicleCatalog::from_json_file(&path);
        assert!(catalog.is_empty());
    }

    #[test]
    fn test_load_dispatches_on_kind() {
        let config = Config::default();
        assert_eq!(VehicleCatalog::load(&config), VehicleCatalog::embedded());

        let mut json_config = Config::default();
        json_config.data.kind = DataSourceKind::Json;
        // No path configured: degrade to empty rather than fail.
        assert!(VehicleCatalog::load(&json_config).is_empty());
    }

    #[test]
    fn test_load_json_kind_with_path() {
        let (_dir, path) = write_dataset(r#"[{"make": "Kia", "model": "Optima", "size": "sedan"}]"#);
        let mut config = Config::default();
        config.data.kind = DataSourceKind::Json;
        config.data.path = Some(path);
        let catalog = VehicleCatalog::load(&config);
        assert_eq!(catalog.len(), 1);
    }
}
