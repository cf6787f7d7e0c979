//! Free-text vehicle model lookup for the CleverLux quote calculator.
//!
//! Given whatever a user types into the "not sure?" search box — a make, a
//! model, a fragment, any casing or punctuation — this crate resolves it to
//! one of the six vehicle size categories, or `None` when there is nothing
//! usable to match. The calculator's tiles, modal, and form are thin callers
//! that pass a string in and highlight the answer; everything with actual
//! semantics lives here.
//!
//! # Overview
//!
//! The main entry point is [`LookupEngine`], which combines:
//!
//! - [`normalize`]: canonicalizes queries and keys (case, punctuation,
//!   whitespace, hyphens, spaced-out abbreviations)
//! - [`LookupIndex`]: exact-key map plus per-record scan table, built once
//!   from the dataset and the [`AliasTable`]
//! - plurality scoring with a fixed `sedan` tie-break
//!
//! # Example
//!
//! ```
//! use clq_core::SizeCategory;
//! use clq_lookup::LookupEngine;
//!
//! let engine = LookupEngine::embedded().unwrap();
//!
//! assert_eq!(engine.lookup("mercedes c class"), Some(SizeCategory::Sedan));
//! assert_eq!(engine.lookup("RAV4"), Some(SizeCategory::SmallSuv));
//! assert_eq!(engine.lookup("Ferrari F40"), None);
//! ```
//!
//! # Architecture
//!
//! ```text
//! LookupEngine::lookup(query)
//!     │
//!     ├── normalize(query)          empty → None
//!     │
//!     ├── LookupIndex exact map     hit (record or alias key) → Some(size)
//!     │
//!     └── scan table               count matching records per size
//!             │
//!             ├── no match → None
//!             ├── unique plurality winner → Some(size)
//!             └── tie → Some(sedan)
//! ```
//!
//! # Failure semantics
//!
//! Lookups never fail: malformed input and missing matches both come back as
//! `None`. The only hard error is [`IndexError`] at construction time, when
//! the alias table references a canonical phrase the dataset does not
//! contain — a data defect that should stop a deploy, not a runtime
//! condition.

#![deny(clippy::all)]
#![warn(missing_docs)]

mod alias;
mod engine;
mod error;
mod index;
mod normalize;

pub use alias::{AliasEntry, AliasTable};
pub use engine::LookupEngine;
pub use error::IndexError;
pub use index::{IndexStats, LookupIndex};
pub use normalize::normalize;
