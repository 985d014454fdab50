//! Mansion Mystery Library
//!
//! This library contains the core of the mansion mystery game: the data
//! structures the case is built on, the exploration engine, the accusation
//! evaluator and the configuration layer. The binary crate wires them to
//! the terminal; tests drive them with in-memory input.
//!
//! # Architecture
//!
//! - `data_structures`: room tree, clue registry (BST) and clue table (chained hash)
//! - `game`: the reference case, exploration, accusation and the session loop
//! - `config`: layered settings loaded with the `config` crate
//! - `error`: `thiserror` error types and the crate-wide result alias

// Re-export public modules
pub mod config;
pub mod data_structures;
pub mod error;
pub mod game;

// Internal modules that are not part of the public API
#[cfg(test)]
pub(crate) mod tests;

/// Version information for the mansion mystery.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
