//! Exploration engine.
//!
//! [`Explorer`] is the state machine: it knows the current room, collects
//! clues into a [`ClueRegistry`] and applies navigation commands. It performs
//! no I/O. [`explore`] drives an explorer from a line-based console until the
//! player stops or the input runs out.

use std::io::{BufRead, Write};

use tracing::{debug, info, warn};

use crate::data_structures::clue_registry::ClueRegistry;
use crate::data_structures::room_tree::{Direction, Room};
use crate::error::{MysteryError, MysteryResult};
use crate::game::console::{read_line, LineRead};
use crate::game::mansion::Mansion;

/// A navigation command typed by the player.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Walk to the left (`e`) or right (`d`) child
    Move(Direction),
    /// End the exploration (`s`)
    Stop,
}

impl Command {
    /// Parses a command from a raw input line.
    ///
    /// Only the first non-whitespace character counts, compared
    /// case-insensitively: `e` for left, `d` for right, `s` to stop.
    pub fn parse(line: &str) -> Option<Self> {
        let first = line.chars().find(|c| !c.is_whitespace())?;
        match first.to_ascii_lowercase() {
            'e' => Some(Self::Move(Direction::Left)),
            'd' => Some(Self::Move(Direction::Right)),
            's' => Some(Self::Stop),
            _ => None,
        }
    }
}

/// What the player found on visiting a room.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Discovery<'a> {
    /// A clue not seen before; it is now in the registry
    NewClue(&'a str),
    /// The room's clue was already in the registry
    AlreadyCollected(&'a str),
    /// The room holds no clue
    NoClue,
}

/// Result of applying a command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepOutcome<'a> {
    /// The player walked into this room
    Moved(&'a Room),
    /// There is no room that way; the player stays put
    Blocked(Direction),
    /// The player ended the exploration
    Stopped,
}

/// How an interactive exploration ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExplorationEnd {
    /// The player issued the stop command
    Stopped,
    /// The input was exhausted before a stop command
    InputClosed,
}

/// Walks a [`Mansion`] and collects clues.
#[derive(Debug)]
pub struct Explorer<'a> {
    mansion: &'a Mansion,
    current: &'a Room,
    registry: ClueRegistry,
}

impl<'a> Explorer<'a> {
    /// Starts at the mansion's entrance with an empty registry.
    pub fn new(mansion: &'a Mansion) -> Self {
        Self {
            mansion,
            current: mansion.entrance(),
            registry: ClueRegistry::new(),
        }
    }

    /// Starts in the named room.
    ///
    /// # Errors
    ///
    /// `MysteryError::UnknownRoom` if no room has that name.
    pub fn starting_at(mansion: &'a Mansion, room: &str) -> MysteryResult<Self> {
        let current = mansion
            .find_room(room)
            .ok_or_else(|| MysteryError::UnknownRoom(room.to_string()))?;
        Ok(Self {
            mansion,
            current,
            registry: ClueRegistry::new(),
        })
    }

    /// The room the player is in.
    pub fn current_room(&self) -> &'a Room {
        self.current
    }

    /// The clues collected so far.
    pub fn registry(&self) -> &ClueRegistry {
        &self.registry
    }

    /// Ends the exploration, handing back the collected clues.
    pub fn into_registry(self) -> ClueRegistry {
        self.registry
    }

    /// Looks for the current room's clue and collects it if it is new.
    pub fn visit(&mut self) -> Discovery<'a> {
        let room = self.current.name();
        let Some(clue) = self.mansion.clue_for_room(room) else {
            return Discovery::NoClue;
        };

        if self.registry.insert_if_absent(clue) {
            debug!(room, clue, "clue collected");
            Discovery::NewClue(clue)
        } else {
            Discovery::AlreadyCollected(clue)
        }
    }

    /// Applies a command. Blocked moves leave the current room unchanged.
    pub fn step(&mut self, command: Command) -> StepOutcome<'a> {
        match command {
            Command::Stop => StepOutcome::Stopped,
            Command::Move(direction) => match self.current.child(direction) {
                Some(next) => {
                    debug!(from = self.current.name(), to = next.name(), "moved");
                    self.current = next;
                    StepOutcome::Moved(next)
                }
                None => {
                    debug!(room = self.current.name(), %direction, "no room that way");
                    StepOutcome::Blocked(direction)
                }
            },
        }
    }
}

/// Runs an interactive exploration until the player stops or input ends.
///
/// Every time the current room is presented it is visited, so returning to a
/// room (or staying in it after a rejected command) reports its clue as
/// already collected. After the loop the collected clues are listed in
/// ascending order.
pub fn explore<R, W>(
    explorer: &mut Explorer<'_>,
    input: &mut R,
    output: &mut W,
) -> MysteryResult<ExplorationEnd>
where
    R: BufRead + ?Sized,
    W: Write + ?Sized,
{
    writeln!(output, "Welcome to the mansion! Explore the rooms and collect clues.")?;
    writeln!(output, "Controls: left (e), right (d), stop exploring (s)")?;

    let end = loop {
        let room = explorer.current_room();
        writeln!(output, "\nYou are in: {}", room.name())?;

        match explorer.visit() {
            Discovery::NewClue(clue) => writeln!(
                output,
                "You found a clue: \"{clue}\". It was added to your notebook."
            )?,
            Discovery::AlreadyCollected(clue) => writeln!(
                output,
                "You already have this room's clue: \"{clue}\" (not duplicated)."
            )?,
            Discovery::NoClue => writeln!(output, "No clue in this room.")?,
        }

        write!(output, "Where to? (e = left, d = right, s = stop): ")?;
        output.flush()?;

        let line = match read_line(input)? {
            LineRead::Line(line) => line,
            LineRead::Unreadable => {
                warn!("unreadable navigation input");
                writeln!(output, "\nCould not read that line. Try again.")?;
                continue;
            }
            LineRead::Closed => {
                writeln!(output, "\nInput closed, ending the exploration.")?;
                break ExplorationEnd::InputClosed;
            }
        };

        let Some(command) = Command::parse(&line) else {
            warn!(input = line.trim(), "unknown navigation command");
            writeln!(output, "Unknown command. Use 'e', 'd' or 's'.")?;
            continue;
        };

        match explorer.step(command) {
            StepOutcome::Moved(_) => {}
            StepOutcome::Blocked(direction) => writeln!(
                output,
                "There is no room to the {direction}. You stay in {}.",
                explorer.current_room().name()
            )?,
            StepOutcome::Stopped => {
                writeln!(output, "Leaving the exploration...")?;
                break ExplorationEnd::Stopped;
            }
        }
    };

    writeln!(output, "\nCollected clues (in order):")?;
    if explorer.registry().is_empty() {
        writeln!(output, "  (no clues collected)")?;
    } else {
        for clue in explorer.registry() {
            writeln!(output, "  - {clue}")?;
        }
    }

    info!(?end, collected = explorer.registry().len(), "exploration finished");
    Ok(end)
}
