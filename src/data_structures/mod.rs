//! Data structures for the mansion mystery.
//!
//! This module contains the three structures the game is built on:
//! - `room_tree`: the static binary tree of rooms the player walks
//! - `clue_registry`: the ordered set of clues collected so far
//! - `clue_table`: the chained hash table linking clues to suspects
//!
//! All of them own their nodes outright and contain no unsafe code.

pub mod clue_registry;
pub mod clue_table;
pub mod room_tree;

// Re-export common data structures
pub use clue_registry::ClueRegistry;
pub use clue_table::{ClueTable, ClueTableConfig, ClueTableError};
pub use room_tree::{Direction, Room};
