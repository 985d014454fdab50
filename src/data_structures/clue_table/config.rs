// Copyright (c) 2025 Mansion Mystery Authors
//
// Licensed under dual license:
// - MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)
// - Apache License, Version 2.0 (LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0)

//! Configuration options for the clue table.

use super::error::{ClueTableError, Result};

/// Default number of buckets. A small prime keeps the modulo spread even.
pub const DEFAULT_BUCKET_COUNT: usize = 101;

/// Configuration for the clue table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClueTableConfig {
    /// Number of buckets in the table. Fixed for the lifetime of the table,
    /// since insert and lookup must agree on the modulus.
    pub bucket_count: usize,
}

impl ClueTableConfig {
    /// Creates a new configuration with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the number of buckets.
    ///
    /// # Arguments
    ///
    /// * `bucket_count` - The number of chained buckets.
    ///
    /// # Returns
    ///
    /// Self with the updated configuration.
    pub fn with_bucket_count(mut self, bucket_count: usize) -> Self {
        self.bucket_count = bucket_count;
        self
    }

    /// Checks that the configuration can back a table.
    pub fn validate(&self) -> Result<()> {
        if self.bucket_count == 0 {
            return Err(ClueTableError::ZeroBuckets);
        }
        Ok(())
    }
}

impl Default for ClueTableConfig {
    fn default() -> Self {
        Self {
            bucket_count: DEFAULT_BUCKET_COUNT,
        }
    }
}
