//! Vehicle record types.
//!
//! Two forms exist: [`VehicleRecord`] is the validated domain type with a
//! typed size category, and [`RawVehicleRecord`] is the looser shape produced
//! by deserializing an external dataset file, where the size is still an
//! arbitrary string. Raw records are promoted to validated records by
//! [`RecordValidator`](crate::validate::RecordValidator).

use serde::{Deserialize, Serialize};

use super::size::SizeCategory;

/// A single entry of the reference dataset.
///
/// Immutable once constructed; the dataset is fixed for the life of the
/// process and records are never mutated after loading.
///
/// # Examples
///
/// ```
/// use clq_core::{SizeCategory, VehicleRecord};
///
/// let record = VehicleRecord::new("Honda", "Accord", SizeCategory::Sedan);
/// assert_eq!(record.make, "Honda");
/// assert_eq!(record.size, SizeCategory::Sedan);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct VehicleRecord {
    /// Manufacturer name (e.g. `Mercedes-Benz`).
    pub make: String,

    /// Model name (e.g. `C-Class`).
    pub model: String,

    /// Size category this vehicle belongs to.
    pub size: SizeCategory,
}

impl VehicleRecord {
    /// Creates a new record.
    #[inline]
    #[must_use]
    pub fn new(make: impl Into<String>, model: impl Into<String>, size: SizeCategory) -> Self {
        Self {
            make: make.into(),
            model: model.into(),
            size,
        }
    }
}

/// A dataset entry as read from an external JSON file, before validation.
///
/// The size is kept as a plain string here so that a single bad record can be
/// rejected individually instead of failing the whole file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawVehicleRecord {
    /// Manufacturer name as found in the file.
    pub make: String,

    /// Model name as found in the file.
    pub model: String,

    /// Size category slug as found in the file; may be invalid.
    pub size: String,
}

impl RawVehicleRecord {
    /// Creates a new raw record.
    #[inline]
    #[must_use]
    pub fn new(
        make: impl Into<String>,
        model: impl Into<String>,
        size: impl Into<String>,
    ) -> Self {
        Self {
            make: make.into(),
            model: model.into(),
            size: size.into(),
        }
    }
}

impl From<VehicleRecord> for RawVehicleRecord {
    fn from(record: VehicleRecord) -> Self {
        Self {
            make: record.make,
            model: record.model,
            size: record.size.slug().to_owned(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record_serde_round_trip() {
        let record = VehicleRecord::new("Toyota", "RAV4", SizeCategory::SmallSuv);
        let json = serde_json::to_string(&record).unwrap();
        let parsed: VehicleRecord = serde_json::from_str(&json).unwrap();
        assert_eq!(record, parsed);
    }

    #[test]
    fn test_raw_record_deserializes_unknown_size() {
        let json = r#"{"make": "Acme", "model": "Widget", "size": "hovercraft"}"#;
        let raw: RawVehicleRecord = serde_json::from_str(json).unwrap();
        assert_eq!(raw.size, "hovercraft");
    }

    #[test]
    fn test_raw_from_record_uses_slug() {
        let record = VehicleRecord::new("Ford", "Transit", SizeCategory::FullVan);
        let raw = RawVehicleRecord::from(record);
        assert_eq!(raw.size, "full_van");
    }
}
