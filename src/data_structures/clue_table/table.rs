// Copyright (c) 2025 Mansion Mystery Authors
//
// Licensed under dual license:
// - MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)
// - Apache License, Version 2.0 (LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0)

//! Implementation of the chained clue table.
//!
//! Each bucket owns a singly linked chain of boxed entries. New keys are
//! pushed on the head of their chain, so a chain lists its entries in
//! reverse insertion order. Every distinct clue appears in exactly one entry.

use std::collections::BTreeSet;
use std::fmt;

use tracing::trace;

use crate::data_structures::clue_table::config::ClueTableConfig;
use crate::data_structures::clue_table::error::{ClueTableError, Result};
use crate::data_structures::clue_table::hash::bucket_index;

/// A single clue → suspect association, linked to the next entry in its bucket.
struct Entry {
    clue: String,
    suspect: String,
    next: Option<Box<Entry>>,
}

/// A fixed-size hash table mapping clue texts to suspect names.
///
/// Collisions are resolved by chaining. The bucket count never changes after
/// construction, which keeps bucket selection stable for every key.
pub struct ClueTable {
    /// Heads of the bucket chains
    buckets: Vec<Option<Box<Entry>>>,

    /// Number of distinct clues stored
    len: usize,
}

impl ClueTable {
    /// Creates a new empty table with the default bucket count.
    pub fn new() -> Self {
        Self::empty(ClueTableConfig::default().bucket_count)
    }

    /// Creates a new empty table with the specified configuration.
    ///
    /// # Arguments
    ///
    /// * `config` - Configuration for the table.
    ///
    /// # Returns
    ///
    /// * `Ok(ClueTable)` - The empty table.
    /// * `Err(ClueTableError::ZeroBuckets)` - If the configuration has no buckets.
    pub fn with_config(config: ClueTableConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self::empty(config.bucket_count))
    }

    fn empty(bucket_count: usize) -> Self {
        let mut buckets = Vec::with_capacity(bucket_count);
        buckets.resize_with(bucket_count, || None);
        Self { buckets, len: 0 }
    }

    /// Returns the number of distinct clues in the table.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Returns whether the table is empty.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Returns the fixed number of buckets.
    pub fn bucket_count(&self) -> usize {
        self.buckets.len()
    }

    /// Returns the bucket a clue hashes to.
    pub fn bucket_index(&self, clue: &str) -> usize {
        bucket_index(clue, self.buckets.len())
    }

    /// Associates `clue` with `suspect`.
    ///
    /// If the clue is already present its suspect is replaced; otherwise a new
    /// entry is pushed on the head of the clue's bucket chain.
    ///
    /// # Returns
    ///
    /// `true` if a new entry was created, `false` if an existing one was updated.
    pub fn insert_or_update<C, S>(&mut self, clue: C, suspect: S) -> bool
    where
        C: Into<String>,
        S: Into<String>,
    {
        let clue = clue.into();
        let suspect = suspect.into();
        let index = self.bucket_index(&clue);

        let mut cursor = self.buckets[index].as_deref_mut();
        while let Some(entry) = cursor {
            if entry.clue == clue {
                trace!(bucket = index, clue = %clue, "updating suspect");
                entry.suspect = suspect;
                return false;
            }
            cursor = entry.next.as_deref_mut();
        }

        trace!(bucket = index, clue = %clue, "new chain head");
        let next = self.buckets[index].take();
        self.buckets[index] = Some(Box::new(Entry {
            clue,
            suspect,
            next,
        }));
        self.len += 1;
        true
    }

    /// Looks up the suspect associated with a clue.
    ///
    /// # Returns
    ///
    /// `Some(suspect)` if the clue is present, `None` otherwise.
    pub fn lookup(&self, clue: &str) -> Option<&str> {
        let mut cursor = self.buckets[self.bucket_index(clue)].as_deref();
        while let Some(entry) = cursor {
            if entry.clue == clue {
                return Some(entry.suspect.as_str());
            }
            cursor = entry.next.as_deref();
        }
        None
    }

    /// Checks if a clue has an associated suspect.
    pub fn contains(&self, clue: &str) -> bool {
        self.lookup(clue).is_some()
    }

    /// Returns the length of one bucket chain.
    ///
    /// # Errors
    ///
    /// `ClueTableError::BucketOutOfRange` if `bucket` is not a valid index.
    pub fn chain_len(&self, bucket: usize) -> Result<usize> {
        let head = self
            .buckets
            .get(bucket)
            .ok_or(ClueTableError::BucketOutOfRange {
                index: bucket,
                bucket_count: self.buckets.len(),
            })?;

        let mut count = 0;
        let mut cursor = head.as_deref();
        while let Some(entry) = cursor {
            count += 1;
            cursor = entry.next.as_deref();
        }
        Ok(count)
    }

    /// Iterates over all `(clue, suspect)` pairs in bucket order, each chain
    /// from head to tail.
    pub fn iter(&self) -> Iter<'_> {
        Iter {
            buckets: self.buckets.iter(),
            chain: None,
        }
    }

    /// Returns the distinct suspect names, sorted ascending.
    pub fn suspects(&self) -> Vec<&str> {
        self.iter()
            .map(|(_, suspect)| suspect)
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect()
    }
}

impl Default for ClueTable {
    fn default() -> Self {
        Self::new()
    }
}

impl Drop for ClueTable {
    // Chains are detached entry by entry so a long chain is not dropped recursively
    fn drop(&mut self) {
        for bucket in &mut self.buckets {
            let mut cursor = bucket.take();
            while let Some(mut entry) = cursor {
                cursor = entry.next.take();
            }
        }
    }
}

impl fmt::Debug for ClueTable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map().entries(self.iter()).finish()
    }
}

impl<C, S> Extend<(C, S)> for ClueTable
where
    C: Into<String>,
    S: Into<String>,
{
    fn extend<I: IntoIterator<Item = (C, S)>>(&mut self, iter: I) {
        for (clue, suspect) in iter {
            self.insert_or_update(clue, suspect);
        }
    }
}

impl<C, S> FromIterator<(C, S)> for ClueTable
where
    C: Into<String>,
    S: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (C, S)>>(iter: I) -> Self {
        let mut table = Self::new();
        table.extend(iter);
        table
    }
}

impl<'a> IntoIterator for &'a ClueTable {
    type Item = (&'a str, &'a str);
    type IntoIter = Iter<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Iterator over the entries of a [`ClueTable`].
pub struct Iter<'a> {
    buckets: std::slice::Iter<'a, Option<Box<Entry>>>,
    chain: Option<&'a Entry>,
}

impl<'a> Iterator for Iter<'a> {
    type Item = (&'a str, &'a str);

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if let Some(entry) = self.chain {
                self.chain = entry.next.as_deref();
                return Some((entry.clue.as_str(), entry.suspect.as_str()));
            }
            self.chain = self.buckets.next()?.as_deref();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data_structures::clue_table::hash::djb2;

    #[test]
    fn test_insert_and_lookup() {
        let mut table = ClueTable::new();

        assert!(table.insert_or_update("mancha de tinta fresca", "Mr. Black"));
        assert!(table.insert_or_update("pegada de lama na soleira", "Sr. Green"));

        assert_eq!(table.lookup("mancha de tinta fresca"), Some("Mr. Black"));
        assert_eq!(table.lookup("pegada de lama na soleira"), Some("Sr. Green"));
        assert_eq!(table.lookup("not a clue"), None);
        assert_eq!(table.len(), 2);
    }

    #[test]
    fn test_update_replaces_suspect() {
        let mut table = ClueTable::new();

        assert!(table.insert_or_update("fio de tecido", "Sr. Green"));
        assert!(!table.insert_or_update("fio de tecido", "Mrs. Peacock"));

        assert_eq!(table.lookup("fio de tecido"), Some("Mrs. Peacock"));
        assert_eq!(table.len(), 1);
    }

    #[test]
    fn test_lookup_is_case_sensitive() {
        let mut table = ClueTable::new();
        table.insert_or_update("Clue", "Mr. Black");

        assert_eq!(table.lookup("clue"), None);
        assert_eq!(table.lookup("Clue"), Some("Mr. Black"));
    }

    #[test]
    fn test_single_bucket_chains_everything() {
        let config = ClueTableConfig::new().with_bucket_count(1);
        let mut table = ClueTable::with_config(config).unwrap();

        for i in 0..10 {
            table.insert_or_update(format!("clue {i}"), format!("suspect {i}"));
        }
        table.insert_or_update("clue 3", "someone else");

        assert_eq!(table.chain_len(0), Ok(10));
        assert_eq!(table.lookup("clue 3"), Some("someone else"));
        assert_eq!(table.lookup("clue 9"), Some("suspect 9"));
    }

    #[test]
    fn test_long_single_chain_drops() {
        // A small stack makes any per-entry recursion overflow
        let handle = std::thread::Builder::new()
            .stack_size(128 * 1024)
            .spawn(|| {
                let config = ClueTableConfig::new().with_bucket_count(1);
                let mut table = ClueTable::with_config(config).unwrap();
                for i in 0..20_000 {
                    table.insert_or_update(i.to_string(), "Mr. Black");
                }

                assert_eq!(table.chain_len(0), Ok(20_000));
                assert_eq!(table.lookup("0"), Some("Mr. Black"));
                drop(table);
            })
            .unwrap();

        handle.join().unwrap();
    }

    #[test]
    fn test_chain_is_insertion_reverse() {
        let config = ClueTableConfig::new().with_bucket_count(1);
        let mut table = ClueTable::with_config(config).unwrap();

        table.insert_or_update("first", "a");
        table.insert_or_update("second", "b");
        table.insert_or_update("third", "c");

        let clues: Vec<&str> = table.iter().map(|(clue, _)| clue).collect();
        assert_eq!(clues, vec!["third", "second", "first"]);
    }

    #[test]
    fn test_entry_lands_in_hashed_bucket() {
        let mut table = ClueTable::new();
        let clue = "bilhete rasgado com iniciais";
        table.insert_or_update(clue, "Srta. Scarlet");

        let expected = (djb2(clue) % 101) as usize;
        assert_eq!(table.bucket_index(clue), expected);
        assert_eq!(table.chain_len(expected), Ok(1));
    }

    #[test]
    fn test_chain_len_out_of_range() {
        let table = ClueTable::new();
        assert_eq!(
            table.chain_len(101),
            Err(ClueTableError::BucketOutOfRange {
                index: 101,
                bucket_count: 101
            })
        );
    }

    #[test]
    fn test_zero_buckets_rejected() {
        let config = ClueTableConfig::new().with_bucket_count(0);
        assert!(matches!(
            ClueTable::with_config(config),
            Err(ClueTableError::ZeroBuckets)
        ));
    }

    #[test]
    fn test_suspects_are_distinct_and_sorted() {
        let table: ClueTable = [
            ("a", "Mr. Black"),
            ("b", "Sr. Green"),
            ("c", "Mr. Black"),
            ("d", "Mrs. Peacock"),
        ]
        .into_iter()
        .collect();

        assert_eq!(table.suspects(), vec!["Mr. Black", "Mrs. Peacock", "Sr. Green"]);
    }

    #[test]
    fn test_empty_table() {
        let table = ClueTable::default();
        assert!(table.is_empty());
        assert_eq!(table.iter().count(), 0);
        assert!(table.suspects().is_empty());
        assert!(!table.contains("anything"));
    }
}
