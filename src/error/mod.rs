//! Error module for the mansion mystery.
//!
//! Each layer defines its own error enum with `thiserror`; this module ties
//! them together into [`MysteryError`], which is what the game loop and the
//! binary propagate with `?`.
//!
//! Expected misses (a clue with no suspect, a wall where the player tried to
//! walk, an unknown accused name) are not errors. They are modelled as
//! `Option`s and outcome enums in the game module.

use thiserror::Error;

use crate::data_structures::clue_table::ClueTableError;

pub mod config;

/// Result type alias used throughout the mansion mystery.
pub type MysteryResult<T> = Result<T, MysteryError>;

/// Core error enum for the mansion mystery.
#[derive(Error, Debug)]
pub enum MysteryError {
    /// Errors occurring during configuration loading or validation.
    #[error("Configuration error: {0}")]
    Config(#[from] config::ConfigError),

    /// Errors raised while building the clue table.
    #[error("Clue table error: {0}")]
    ClueTable(#[from] ClueTableError),

    /// The configured start room does not exist in the mansion.
    #[error("No room named '{0}' in the mansion")]
    UnknownRoom(String),

    /// IO errors from the console or the file system.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Custom error with message for cases where specific error types are not defined.
    #[error("{0}")]
    Custom(String),
}
