//! Configuration structures for the quote lookup engine.
//!
//! This module provides configuration types for the data-facing components:
//!
//! - [`DataSourceConfig`] - Where the reference dataset comes from
//! - [`ValidationConfig`] - Limits applied when validating external records
//! - [`SizeSpec`] - Physical envelope of each size category
//! - [`Config`] - Root configuration combining all settings
//!
//! All configuration types implement [`Default`] with the values the embedded
//! dataset was curated against. There are deliberately no time-based cache
//! settings: lookups must not depend on wall-clock state, so the only index
//! invalidation path is an explicit rebuild.

use camino::Utf8PathBuf;
use serde::{Deserialize, Serialize};

use crate::types::SizeCategory;

/// Where the reference dataset is loaded from.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DataSourceKind {
    /// Use the compiled-in reference dataset.
    #[default]
    Embedded,

    /// Load a JSON array of records from [`DataSourceConfig::path`].
    Json,
}

/// Configuration for the dataset source.
///
/// # Examples
///
/// ```
/// use clq_core::{DataSourceConfig, DataSourceKind};
///
/// let config = DataSourceConfig::default();
/// assert_eq!(config.kind, DataSourceKind::Embedded);
/// assert!(config.path.is_none());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DataSourceConfig {
    /// The kind of data source.
    pub kind: DataSourceKind,

    /// Path to the JSON dataset file (only used when `kind` is
    /// [`DataSourceKind::Json`]).
    pub path: Option<Utf8PathBuf>,
}

/// Limits applied when validating records from an external dataset.
///
/// # Examples
///
/// ```
/// use clq_core::ValidationConfig;
///
/// let config = ValidationConfig::default();
/// assert_eq!(config.make_max_len, 50);
/// assert_eq!(config.model_max_len, 50);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(default)]
pub struct ValidationConfig {
    /// Maximum accepted length of a make, in characters.
    pub make_max_len: usize,

    /// Maximum accepted length of a model, in characters.
    pub model_max_len: usize,
}

impl Default for ValidationConfig {
    fn default() -> Self {
        Self {
            make_max_len: 50,
            model_max_len: 50,
        }
    }
}

/// Physical envelope of a size category, in metres.
///
/// Used by pricing collaborators to sanity-check which tier a vehicle of
/// known dimensions belongs to.
///
/// # Examples
///
/// ```
/// use clq_core::{SizeCategory, SizeSpec};
///
/// let spec = SizeSpec::for_category(SizeCategory::Sedan);
/// assert!(spec.fits(4.8, 1.8));
/// assert!(!spec.fits(7.5, 2.4));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SizeSpec {
    /// Minimum overall length in metres.
    pub min_length_m: f64,

    /// Maximum overall length in metres.
    pub max_length_m: f64,

    /// Minimum overall width in metres.
    pub min_width_m: f64,

    /// Maximum overall width in metres.
    pub max_width_m: f64,
}

impl SizeSpec {
    /// Returns the envelope for the given category.
    #[must_use]
    pub const fn for_category(category: SizeCategory) -> Self {
        match category {
            SizeCategory::Sedan => Self {
                min_length_m: 4.5,
                max_length_m: 5.0,
                min_width_m: 1.7,
                max_width_m: 1.9,
            },
            SizeCategory::Sports => Self {
                min_length_m: 4.2,
                max_length_m: 4.8,
                min_width_m: 1.8,
                max_width_m: 2.0,
            },
            SizeCategory::SmallSuv => Self {
                min_length_m: 4.4,
                max_length_m: 4.7,
                min_width_m: 1.8,
                max_width_m: 1.9,
            },
            SizeCategory::LargeSuv => Self {
                min_length_m: 5.0,
                max_length_m: 5.5,
                min_width_m: 1.9,
                max_width_m: 2.1,
            },
            SizeCategory::FullVan => Self {
                min_length_m: 5.2,
                max_length_m: 6.0,
                min_width_m: 2.0,
                max_width_m: 2.2,
            },
            SizeCategory::Boat => Self {
                min_length_m: 5.0,
                max_length_m: 8.0,
                min_width_m: 2.0,
                max_width_m: 2.5,
            },
        }
    }

    /// Returns `true` if a vehicle of the given dimensions fits this envelope.
    #[inline]
    #[must_use]
    pub fn fits(&self, length_m: f64, width_m: f64) -> bool {
        length_m >= self.min_length_m
            && length_m <= self.max_length_m
            && width_m >= self.min_width_m
            && width_m <= self.max_width_m
    }
}

/// Root configuration for the lookup engine's data layer.
///
/// # Examples
///
/// ```
/// use clq_core::Config;
///
/// let config = Config::default();
/// let json = serde_json::to_string_pretty(&config).unwrap();
/// let parsed: Config = serde_json::from_str(&json).unwrap();
/// assert_eq!(config, parsed);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Dataset source configuration.
    pub data: DataSourceConfig,

    /// Record validation limits.
    pub validation: ValidationConfig,
}
