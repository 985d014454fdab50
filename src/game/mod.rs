//! The mansion mystery game.
//!
//! A session has two phases. During exploration the player walks the room
//! tree and collects clues; during the accusation the collected clues are
//! scored against the clue table. [`Game::play`] runs both phases over any
//! line-based input and output, which is how the binary talks to the
//! terminal and how the tests talk to the game.

pub mod accusation;
pub mod case_file;
pub mod console;
pub mod exploration;
pub mod mansion;

use std::io::{BufRead, Write};

use tracing::info;

use crate::config::game::GameConfig;
use crate::error::{MysteryError, MysteryResult};

pub use accusation::{Accusation, Verdict, SUPPORTING_CLUES_REQUIRED};
pub use case_file::CaseFile;
pub use exploration::{Command, Discovery, ExplorationEnd, Explorer, StepOutcome};
pub use mansion::Mansion;

/// What happened during a finished session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameReport {
    /// Collected clues in ascending order
    pub collected: Vec<String>,

    /// How the exploration ended
    pub ending: ExplorationEnd,

    /// The scored accusation, if the player made one
    pub accusation: Option<Accusation>,
}

/// A configured game, ready to be played.
#[derive(Debug)]
pub struct Game {
    config: GameConfig,
    case_file: CaseFile,
}

impl Game {
    /// Creates a game over the reference case.
    ///
    /// # Errors
    ///
    /// Fails if the clue table cannot be built or the start room does not exist.
    pub fn new(config: GameConfig) -> MysteryResult<Self> {
        let case_file = CaseFile::reference(config.clue_table())?;
        Self::with_case_file(config, case_file)
    }

    /// Creates a game over a custom case.
    pub fn with_case_file(config: GameConfig, case_file: CaseFile) -> MysteryResult<Self> {
        if case_file.mansion.find_room(&config.start_room).is_none() {
            return Err(MysteryError::UnknownRoom(config.start_room));
        }
        Ok(Self { config, case_file })
    }

    /// The case being played.
    pub fn case_file(&self) -> &CaseFile {
        &self.case_file
    }

    /// Runs a whole session: exploration, then accusation.
    pub fn play<R, W>(&self, input: &mut R, output: &mut W) -> MysteryResult<GameReport>
    where
        R: BufRead + ?Sized,
        W: Write + ?Sized,
    {
        info!(start_room = %self.config.start_room, "session started");

        let mut explorer = Explorer::starting_at(&self.case_file.mansion, &self.config.start_room)?;
        let ending = exploration::explore(&mut explorer, input, output)?;
        let registry = explorer.into_registry();

        let accusation = accusation::accuse(
            &registry,
            &self.case_file.suspects,
            self.config.list_suspects,
            input,
            output,
        )?;

        info!(collected = registry.len(), accused = accusation.is_some(), "session finished");

        Ok(GameReport {
            collected: registry.iter().map(str::to_string).collect(),
            ending,
            accusation,
        })
    }
}
