//! Core types, data, and validation for the CleverLux quote lookup engine.
//!
//! This crate provides the foundational pieces shared by the workspace:
//!
//! - [`SizeCategory`] - the closed set of six vehicle size categories
//! - [`VehicleRecord`] / [`RawVehicleRecord`] - validated and raw dataset rows
//! - [`VehicleCatalog`] - the immutable reference dataset with load/query
//!   operations and fall-back-to-empty file loading
//! - [`RecordValidator`] - per-record validation for external datasets
//! - [`Config`] - data source and validation configuration
//! - [`DataError`] - dataset load failures
//! - `FxHashMap` type aliases (faster than std for short string keys)
//!
//! The matching engine itself lives in the `clq-lookup` crate.

#![deny(clippy::all)]
#![warn(missing_docs)]

pub mod catalog;
pub mod config;
pub mod data;
mod error;
mod hash;
pub mod types;
pub mod validate;

pub use catalog::{SearchCriteria, VehicleCatalog};
pub use config::{Config, DataSourceConfig, DataSourceKind, SizeSpec, ValidationConfig};
pub use error::DataError;
pub use hash::{FxBuildHasher, FxHashMap, fx_hash_map_with_capacity};
pub use types::{ParseSizeError, RawVehicleRecord, SizeCategory, VehicleRecord};
pub use validate::{RecordValidator, RejectedRecord, ValidationIssue, ValidationReport};
