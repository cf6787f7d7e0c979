//! Embedded reference dataset and alias table.
//!
//! The dataset is a fixed, ordered table of make/model/size rows covering the
//! common vehicles the quote calculator needs to recognize, ten per size
//! category. It is compiled in so the engine works with no filesystem access;
//! an external JSON file can replace it via
//! [`VehicleCatalog::from_json_file`](crate::catalog::VehicleCatalog::from_json_file).
//!
//! The alias table maps colloquial phrases to a canonical "make model" phrase
//! that is already in the dataset. Keep canonical sides spelled exactly like
//! the dataset rows: alias integrity is checked at index construction and a
//! dangling canonical phrase aborts the build.

use crate::types::SizeCategory;

/// The embedded reference dataset: `(make, model, size)` rows.
pub const REFERENCE_VEHICLES: &[(&str, &str, SizeCategory)] = &[
    // Sedans
    ("Audi", "A4", SizeCategory::Sedan),
    ("BMW", "3 Series", SizeCategory::Sedan),
    ("Chevrolet", "Malibu", SizeCategory::Sedan),
    ("Ford", "Fusion", SizeCategory::Sedan),
    ("Honda", "Accord", SizeCategory::Sedan),
    ("Hyundai", "Sonata", SizeCategory::Sedan),
    ("Kia", "Optima", SizeCategory::Sedan),
    ("Mercedes-Benz", "C-Class", SizeCategory::Sedan),
    ("Nissan", "Altima", SizeCategory::Sedan),
    ("Toyota", "Camry", SizeCategory::Sedan),
    // Sports
    ("Audi", "TT", SizeCategory::Sports),
    ("BMW", "M3", SizeCategory::Sports),
    ("Chevrolet", "Corvette", SizeCategory::Sports),
    ("Dodge", "Challenger", SizeCategory::Sports),
    ("Ford", "Mustang", SizeCategory::Sports),
    ("Mazda", "MX-5", SizeCategory::Sports),
    ("Nissan", "370Z", SizeCategory::Sports),
    ("Porsche", "911", SizeCategory::Sports),
    ("Subaru", "BRZ", SizeCategory::Sports),
    ("Toyota", "Supra", SizeCategory::Sports),
    // Small SUVs
    ("Chevrolet", "Equinox", SizeCategory::SmallSuv),
    ("Ford", "Escape", SizeCategory::SmallSuv),
    ("Honda", "CR-V", SizeCategory::SmallSuv),
    ("Hyundai", "Tucson", SizeCategory::SmallSuv),
    ("Kia", "Sportage", SizeCategory::SmallSuv),
    ("Mazda", "CX-5", SizeCategory::SmallSuv),
    ("Nissan", "Rogue", SizeCategory::SmallSuv),
    ("Subaru", "Forester", SizeCategory::SmallSuv),
    ("Toyota", "RAV4", SizeCategory::SmallSuv),
    ("Volkswagen", "Tiguan", SizeCategory::SmallSuv),
    // Large SUVs
    ("BMW", "X7", SizeCategory::LargeSuv),
    ("Cadillac", "Escalade", SizeCategory::LargeSuv),
    ("Chevrolet", "Tahoe", SizeCategory::LargeSuv),
    ("Dodge", "Durango", SizeCategory::LargeSuv),
    ("Ford", "Expedition", SizeCategory::LargeSuv),
    ("GMC", "Yukon", SizeCategory::LargeSuv),
    ("Jeep", "Grand Cherokee", SizeCategory::LargeSuv),
    ("Mercedes-Benz", "GLS", SizeCategory::LargeSuv),
    ("Nissan", "Armada", SizeCategory::LargeSuv),
    ("Toyota", "Sequoia", SizeCategory::LargeSuv),
    // Full vans
    ("Chevrolet", "Express", SizeCategory::FullVan),
    ("Ford", "Transit", SizeCategory::FullVan),
    ("GMC", "Savana", SizeCategory::FullVan),
    ("Mercedes-Benz", "Sprinter", SizeCategory::FullVan),
    ("Nissan", "NV Cargo", SizeCategory::FullVan),
    ("Ram", "ProMaster", SizeCategory::FullVan),
    ("Toyota", "HiAce", SizeCategory::FullVan),
    ("Volkswagen", "Transporter", SizeCategory::FullVan),
    // Boats
    ("Bayliner", "175", SizeCategory::Boat),
    ("Boston Whaler", "170", SizeCategory::Boat),
    ("Chaparral", "SSi 21", SizeCategory::Boat),
    ("Lund", "1650 Rebel", SizeCategory::Boat),
    ("Malibu", "Wakesetter", SizeCategory::Boat),
    ("MasterCraft", "NXT22", SizeCategory::Boat),
    ("Regal", "26 Express", SizeCategory::Boat),
    ("Sea Ray", "Sundancer", SizeCategory::Boat),
    ("Tracker", "Pro Team 175", SizeCategory::Boat),
    ("Yamaha", "AR190", SizeCategory::Boat),
];

/// Embedded alias table: `(colloquial phrase, canonical "make model" phrase)`.
///
/// Ordered so that index construction is deterministic.
pub const MODEL_ALIASES: &[(&str, &str)] = &[
    ("C Class", "Mercedes-Benz C-Class"),
    ("Mercedes C Class", "Mercedes-Benz C-Class"),
    ("3-Series", "BMW 3 Series"),
    ("BMW 3-Series", "BMW 3 Series"),
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dataset_is_balanced() {
        assert_eq!(REFERENCE_VEHICLES.len(), 60);
        for size in SizeCategory::ALL {
            let count = REFERENCE_VEHICLES
                .iter()
                .filter(|(_, _, s)| *s == size)
                .count();
            assert_eq!(count, 10, "expected 10 records for {size}");
        }
    }

    #[test]
    fn test_dataset_has_no_blank_fields() {
        for (make, model, _) in REFERENCE_VEHICLES {
            assert!(!make.trim().is_empty());
            assert!(!model.trim().is_empty());
        }
    }

    #[test]
    fn test_alias_canonicals_exist_in_dataset() {
        for (_, canonical) in MODEL_ALIASES {
            let found = REFERENCE_VEHICLES
                .iter()
                .any(|(make, model, _)| format!("{make} {model}") == *canonical);
            assert!(found, "alias canonical '{canonical}' is not a dataset row");
        }
    }
}
