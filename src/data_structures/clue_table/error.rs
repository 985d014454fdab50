// Copyright (c) 2025 Mansion Mystery Authors
//
// Licensed under dual license:
// - MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)
// - Apache License, Version 2.0 (LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0)

//! Error types for the clue table.

/// Error types for clue table operations
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ClueTableError {
    /// The table was configured without any buckets
    #[error("Clue table needs at least one bucket")]
    ZeroBuckets,

    /// Bucket index outside the bucket array
    #[error("Bucket {index} is out of range (table has {bucket_count} buckets)")]
    BucketOutOfRange {
        /// The requested bucket.
        index: usize,
        /// The number of buckets in the table.
        bucket_count: usize,
    },
}

/// Result type for clue table operations
pub type Result<T> = std::result::Result<T, ClueTableError>;
