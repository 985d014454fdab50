// Copyright (c) 2025 Mansion Mystery Authors
//
// Licensed under dual license:
// - MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)
// - Apache License, Version 2.0 (LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0)

//! Chained hash table mapping clues to suspects.
//!
//! A fixed-size bucket array where each bucket holds a chain of entries.
//! The table answers one question for the accusation phase: which suspect
//! does a given clue point to?
//!
//! # Features
//!
//! - Insert-or-update semantics: a clue never appears twice
//! - Explicit `None` for unknown clues, never a sentinel value
//! - A fixed, documented hash (djb2) and modulus, so insert and lookup always agree
//!
//! # Example
//!
//! ```
//! use mansion_mystery_lib::data_structures::clue_table::ClueTable;
//!
//! let mut table = ClueTable::new();
//! assert!(table.insert_or_update("mancha de tinta fresca", "Mr. Black"));
//! assert_eq!(table.lookup("mancha de tinta fresca"), Some("Mr. Black"));
//!
//! // Inserting the same clue again replaces the suspect
//! assert!(!table.insert_or_update("mancha de tinta fresca", "Sr. Green"));
//! assert_eq!(table.lookup("mancha de tinta fresca"), Some("Sr. Green"));
//!
//! assert_eq!(table.lookup("unknown clue"), None);
//! ```

mod config;
mod error;
mod hash;
mod table;

pub use config::{ClueTableConfig, DEFAULT_BUCKET_COUNT};
pub use error::{ClueTableError, Result};
pub use hash::{bucket_index, djb2};
pub use table::{ClueTable, Iter};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_basic_operations() {
        let mut table = ClueTable::new();

        assert!(table.insert_or_update("pegada de lama na soleira", "Sr. Green"));
        assert!(table.insert_or_update("programa de concerto dobrado", "Mr. Black"));

        assert_eq!(table.lookup("pegada de lama na soleira"), Some("Sr. Green"));
        assert_eq!(table.lookup("programa de concerto dobrado"), Some("Mr. Black"));
        assert_eq!(table.lookup("folha de planta"), None);
    }

    #[test]
    fn test_custom_configuration() {
        let config = ClueTableConfig::new().with_bucket_count(7);
        let mut table = ClueTable::with_config(config).unwrap();

        assert_eq!(table.bucket_count(), 7);
        assert!(table.insert_or_update("test-config", "someone"));
        assert_eq!(table.lookup("test-config"), Some("someone"));
        assert!(table.bucket_index("test-config") < 7);
    }
}
