// Copyright (c) 2025 Mansion Mystery Authors
//
// Licensed under dual license:
// - MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)
// - Apache License, Version 2.0 (LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0)

//! String hashing for the clue table.
//!
//! The table uses the djb2 rolling hash: start from 5381 and fold every byte
//! in with `hash * 33 + byte`. Arithmetic wraps at 64 bits, and the bucket is
//! the final hash modulo the bucket count. The function is fixed so that the
//! same clue always lands in the same bucket for a given bucket count.

/// Initial value of the djb2 accumulator.
const DJB2_SEED: u64 = 5381;

/// Computes the djb2 hash of a string over its UTF-8 bytes.
///
/// # Arguments
///
/// * `key` - The string to hash.
///
/// # Returns
///
/// The full 64-bit hash value.
pub fn djb2(key: &str) -> u64 {
    key.bytes().fold(DJB2_SEED, |hash, byte| {
        // hash * 33 + byte
        (hash << 5).wrapping_add(hash).wrapping_add(u64::from(byte))
    })
}

/// Maps a key onto one of `bucket_count` buckets.
///
/// `bucket_count` must be non-zero; the table validates this at construction.
pub fn bucket_index(key: &str, bucket_count: usize) -> usize {
    (djb2(key) % bucket_count as u64) as usize
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_string_is_seed() {
        assert_eq!(djb2(""), 5381);
    }

    #[test]
    fn test_known_values() {
        // 5381 * 33 + 'a'
        assert_eq!(djb2("a"), 177_670);
        // 177670 * 33 + 'b'
        assert_eq!(djb2("ab"), 5_863_208);
    }

    #[test]
    fn test_bucket_index_in_range() {
        for key in ["Hall", "pegada de lama na soleira", "taça quebrada com resquicios", ""] {
            assert!(bucket_index(key, 101) < 101);
            assert_eq!(bucket_index(key, 1), 0);
        }
    }

    #[test]
    fn test_bucket_index_is_deterministic() {
        let key = "marca de dedo no livro raro";
        assert_eq!(bucket_index(key, 101), bucket_index(key, 101));
        assert_eq!(bucket_index(key, 101), (djb2(key) % 101) as usize);
    }

    #[test]
    fn test_long_input_wraps_without_panicking() {
        let key = "x".repeat(10_000);
        let _ = djb2(&key);
    }
}
