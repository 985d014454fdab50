//! Game configuration module.
//!
//! Runtime settings for a play session: where the player starts, how many
//! buckets back the clue table, and what the accusation prompt shows.

use super::ConfigResult;
use super::Validate;
use crate::data_structures::clue_table::{ClueTableConfig, DEFAULT_BUCKET_COUNT};
use crate::error::config::ConfigError;
use serde::{Deserialize, Serialize};

/// Game configuration.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct GameConfig {
    /// Name of the room exploration starts from
    pub start_room: String,

    /// Number of buckets in the clue → suspect table
    pub bucket_count: usize,

    /// Whether to list the known suspects before asking for an accusation
    pub list_suspects: bool,
}

impl GameConfig {
    /// Clue table settings derived from this configuration.
    pub fn clue_table(&self) -> ClueTableConfig {
        ClueTableConfig::new().with_bucket_count(self.bucket_count)
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            start_room: "Hall".to_string(),
            bucket_count: DEFAULT_BUCKET_COUNT,
            list_suspects: true,
        }
    }
}

impl Validate for GameConfig {
    fn validate(&self) -> ConfigResult<()> {
        if self.start_room.trim().is_empty() {
            return Err(ConfigError::ValidationError(
                "start_room cannot be empty".to_string(),
            ));
        }

        if self.bucket_count == 0 {
            return Err(ConfigError::ValidationError(
                "bucket_count must be greater than 0".to_string(),
            ));
        }

        Ok(())
    }
}
