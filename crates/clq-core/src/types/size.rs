//! Vehicle size category types.
//!
//! This module provides the [`SizeCategory`] enum, the closed set of six
//! labels a vehicle can resolve to. The category selects the service price
//! tier, so the set is fixed: anything outside it is invalid data.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// The size category of a vehicle.
///
/// A closed enumeration with exactly six members. The wire form is the
/// snake_case slug (`"small_suv"` etc.), matching the reference dataset.
///
/// The default is [`Sedan`](Self::Sedan), which is also the deterministic
/// fallback the lookup engine returns when several categories tie.
///
/// # Examples
///
/// ```
/// use clq_core::SizeCategory;
///
/// let size = SizeCategory::SmallSuv;
/// assert_eq!(size.slug(), "small_suv");
/// assert_eq!(size.label(), "Small SUV");
/// assert_eq!("boat".parse::<SizeCategory>(), Ok(SizeCategory::Boat));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SizeCategory {
    /// Standard passenger sedan.
    #[default]
    Sedan,

    /// Sports car or coupe.
    Sports,

    /// Compact crossover / small SUV.
    SmallSuv,

    /// Full-size SUV.
    LargeSuv,

    /// Full-size cargo or passenger van.
    FullVan,

    /// Recreational boat.
    Boat,
}

impl SizeCategory {
    /// Number of size categories.
    pub const COUNT: usize = 6;

    /// All categories in declaration order.
    ///
    /// The ordering is stable and used for deterministic iteration when
    /// counting matches per category.
    pub const ALL: [Self; Self::COUNT] = [
        Self::Sedan,
        Self::Sports,
        Self::SmallSuv,
        Self::LargeSuv,
        Self::FullVan,
        Self::Boat,
    ];

    /// Returns the snake_case slug used in the dataset and on the wire.
    ///
    /// # Examples
    ///
    /// ```
    /// use clq_core::SizeCategory;
    ///
    /// assert_eq!(SizeCategory::Sedan.slug(), "sedan");
    /// assert_eq!(SizeCategory::FullVan.slug(), "full_van");
    /// ```
    #[inline]
    #[must_use]
    pub const fn slug(self) -> &'static str {
        match self {
            Self::Sedan => "sedan",
            Self::Sports => "sports",
            Self::SmallSuv => "small_suv",
            Self::LargeSuv => "large_suv",
            Self::FullVan => "full_van",
            Self::Boat => "boat",
        }
    }

    /// Returns a human-readable label for this category.
    ///
    /// These are the labels the selection tiles display.
    ///
    /// # Examples
    ///
    /// ```
    /// use clq_core::SizeCategory;
    ///
    /// assert_eq!(SizeCategory::LargeSuv.label(), "Large SUV");
    /// ```
    #[inline]
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Sedan => "Sedan",
            Self::Sports => "Sports",
            Self::SmallSuv => "Small SUV",
            Self::LargeSuv => "Large SUV",
            Self::FullVan => "Full Van",
            Self::Boat => "Boat",
        }
    }

    /// Returns this category's position in [`ALL`](Self::ALL).
    ///
    /// Suitable for indexing a `[T; SizeCategory::COUNT]` counting array.
    #[inline]
    #[must_use]
    pub const fn as_index(self) -> usize {
        match self {
            Self::Sedan => 0,
            Self::Sports => 1,
            Self::SmallSuv => 2,
            Self::LargeSuv => 3,
            Self::FullVan => 4,
            Self::Boat => 5,
        }
    }
}

impl fmt::Display for SizeCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.slug())
    }
}

/// Error returned when a string is not a known size category slug.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown vehicle size category '{0}'")]
pub struct ParseSizeError(pub String);

impl FromStr for SizeCategory {
    type Err = ParseSizeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "sedan" => Ok(Self::Sedan),
            "sports" => Ok(Self::Sports),
            "small_suv" => Ok(Self::SmallSuv),
            "large_suv" => Ok(Self::LargeSuv),
            "full_van" => Ok(Self::FullVan),
            "boat" => Ok(Self::Boat),
            other => Err(ParseSizeError(other.to_owned())),
        }
    }
}
