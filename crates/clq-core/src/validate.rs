//! Record validation for externally loaded datasets.
//!
//! The embedded dataset is typed and needs no checking; records read from a
//! JSON file arrive as [`RawVehicleRecord`] and go through
//! [`RecordValidator`] before they are allowed anywhere near the index.
//! Validation is per-record: one bad row is rejected (with a warning) and the
//! rest of the file survives.

use tracing::warn;

use crate::config::ValidationConfig;
use crate::types::{ParseSizeError, RawVehicleRecord, VehicleRecord};

/// Characters never valid in a make or model name.
const FORBIDDEN_CHARS: [char; 4] = ['<', '>', '{', '}'];

/// Why a raw record was rejected.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationIssue {
    /// A required field is missing or blank after trimming.
    #[error("missing or empty field '{field}'")]
    EmptyField {
        /// Name of the offending field.
        field: &'static str,
    },

    /// A field exceeds the configured maximum length.
    #[error("field '{field}' exceeds {max} characters (got {len})")]
    TooLong {
        /// Name of the offending field.
        field: &'static str,
        /// Actual length in characters.
        len: usize,
        /// Configured maximum.
        max: usize,
    },

    /// A field contains characters that are never valid in a name.
    #[error("field '{field}' contains invalid characters")]
    InvalidCharacters {
        /// Name of the offending field.
        field: &'static str,
    },

    /// The size string is not one of the six known categories.
    #[error(transparent)]
    UnknownSize(#[from] ParseSizeError),
}

/// A raw record that failed validation, with the reason.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RejectedRecord {
    /// The record as it appeared in the file.
    pub record: RawVehicleRecord,

    /// Why it was rejected.
    pub issue: ValidationIssue,
}

/// Outcome of validating a batch of raw records.
///
/// Order of accepted records matches the input order, which matters for the
/// index's last-write-wins key registration.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationReport {
    /// Records that passed validation, in input order.
    pub records: Vec<VehicleRecord>,

    /// Records that were rejected, with their issues.
    pub rejected: Vec<RejectedRecord>,
}

impl ValidationReport {
    /// Number of records that passed validation.
    #[inline]
    #[must_use]
    pub fn valid_count(&self) -> usize {
        self.records.len()
    }

    /// Number of records that were rejected.
    #[inline]
    #[must_use]
    pub fn rejected_count(&self) -> usize {
        self.rejected.len()
    }

    /// Total number of records examined.
    #[inline]
    #[must_use]
    pub fn total(&self) -> usize {
        self.records.len() + self.rejected.len()
    }

    /// Returns `true` if any record was rejected.
    #[inline]
    #[must_use]
    pub fn has_rejects(&self) -> bool {
        !self.rejected.is_empty()
    }
}

/// Validates raw dataset records against configured limits.
///
/// # Examples
///
/// ```
/// use clq_core::{RawVehicleRecord, RecordValidator, SizeCategory};
///
/// let validator = RecordValidator::default();
/// let raw = RawVehicleRecord::new("  Honda ", "Accord", "SEDAN ");
///
/// // Fields are trimmed and the size slug is lowercased before checking.
/// let record = validator.validate(&raw).unwrap();
/// assert_eq!(record.make, "Honda");
/// assert_eq!(record.size, SizeCategory::Sedan);
/// ```
#[derive(Debug, Clone, Copy)]
pub struct RecordValidator {
    make_max_len: usize,
    model_max_len: usize,
}

impl RecordValidator {
    /// Creates a validator from the given limits.
    #[must_use]
    pub const fn new(config: &ValidationConfig) -> Self {
        Self {
            make_max_len: config.make_max_len,
            model_max_len: config.model_max_len,
        }
    }

    /// Validates a single raw record, producing a typed record on success.
    ///
    /// Make and model are trimmed; the size slug is trimmed and lowercased
    /// before being parsed.
    ///
    /// # Errors
    ///
    /// Returns the first [`ValidationIssue`] encountered, checking make, then
    /// model, then size.
    pub fn validate(&self, raw: &RawVehicleRecord) -> Result<VehicleRecord, ValidationIssue> {
        let make = Self::clean_field("make", &raw.make, self.make_max_len)?;
        let model = Self::clean_field("model", &raw.model, self.model_max_len)?;
        let size = raw.size.trim().to_lowercase().parse()?;
        Ok(VehicleRecord { make, model, size })
    }

    /// Validates a batch of raw records, splitting them into accepted and
    /// rejected sets.
    ///
    /// Each rejection is logged with its reason.
    pub fn filter_valid(
        &self,
        raw: impl IntoIterator<Item = RawVehicleRecord>,
    ) -> ValidationReport {
        let mut report = ValidationReport::default();

        for record in raw {
            match self.validate(&record) {
                Ok(valid) => report.records.push(valid),
                Err(issue) => {
                    warn!(
                        make = %record.make,
                        model = %record.model,
                        reason = %issue,
                        "rejected vehicle record"
                    );
                    report.rejected.push(RejectedRecord { record, issue });
                }
            }
        }

        report
    }

    fn clean_field(
        field: &'static str,
        value: &str,
        max: usize,
    ) -> Result<String, ValidationIssue> {
        let trimmed = value.trim();
        if trimmed.is_empty() {
            return Err(ValidationIssue::EmptyField { field });
        }

        let len = trimmed.chars().count();
        if len > max {
            return Err(ValidationIssue::TooLong { field, len, max });
        }

        if trimmed.contains(FORBIDDEN_CHARS) {
            return Err(ValidationIssue::InvalidCharacters { field });
        }

        Ok(trimmed.to_owned())
    }
}

impl Default for RecordValidator {
    fn default() -> Self {
        Self::new(&ValidationConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::SizeCategory;

    fn raw(make: &str, model: &str, size: &str) -> RawVehicleRecord {
        RawVehicleRecord::new(make, model, size)
    }

    #[test]
    fn test_validate_accepts_clean_record() {
        let validator = RecordValidator::default();
        let record = validator.validate(&raw("Toyota", "Camry", "sedan")).unwrap();
        assert_eq!(record, VehicleRecord::new("Toyota", "Camry", SizeCategory::Sedan));
    }

    #[test]
    fn test_validate_sanitizes_whitespace_and_case() {
        let validator = RecordValidator::default();
        let record = validator
            .validate(&raw("  Sea Ray  ", " Sundancer ", " BOAT "))
            .unwrap();
        assert_eq!(record.make, "Sea Ray");
        assert_eq!(record.model, "Sundancer");
        assert_eq!(record.size, SizeCategory::Boat);
    }

    #[test]
    fn test_validate_rejects_blank_make() {
        let validator = RecordValidator::default();
        let issue = validator.validate(&raw("   ", "Camry", "sedan")).unwrap_err();
        assert_eq!(issue, ValidationIssue::EmptyField { field: "make" });
    }

    #[test]
    fn test_validate_rejects_overlong_model() {
        let validator = RecordValidator::new(&ValidationConfig {
            make_max_len: 50,
            model_max_len: 8,
        });
        let issue = validator
            .validate(&raw("Jeep", "Grand Cherokee", "large_suv"))
            .unwrap_err();
        assert_eq!(
            issue,
            ValidationIssue::TooLong {
                field: "model",
                len: 14,
                max: 8,
            }
        );
    }

    #[test]
    fn test_validate_rejects_markup_characters() {
        let validator = RecordValidator::default();
        let issue = validator
            .validate(&raw("<script>", "Camry", "sedan"))
            .unwrap_err();
        assert_eq!(issue, ValidationIssue::InvalidCharacters { field: "make" });
    }

    #[test]
    fn test_validate_rejects_unknown_size() {
        let validator = RecordValidator::default();
        let issue = validator
            .validate(&raw("Acme", "Widget", "hovercraft"))
            .unwrap_err();
        assert!(matches!(issue, ValidationIssue::UnknownSize(_)));
        assert!(issue.to_string().contains("hovercraft"));
    }

    #[test]
    fn test_filter_valid_splits_batch_and_keeps_order() {
        let validator = RecordValidator::default();
        let report = validator.filter_valid(vec![
            raw("Honda", "Accord", "sedan"),
            raw("Acme", "Widget", "hovercraft"),
            raw("Ford", "Transit", "full_van"),
        ]);

        assert_eq!(report.valid_count(), 2);
        assert_eq!(report.rejected_count(), 1);
        assert_eq!(report.total(), 3);
        assert!(report.has_rejects());
        assert_eq!(report.records[0].model, "Accord");
        assert_eq!(report.records[1].model, "Transit");
        assert_eq!(report.rejected[0].record.size, "hovercraft");
    }

    #[test]
    fn test_filter_valid_empty_input() {
        let validator = RecordValidator::default();
        let report = validator.filter_valid(Vec::new());
        assert_eq!(report.total(), 0);
        assert!(!report.has_rejects());
    }
}
