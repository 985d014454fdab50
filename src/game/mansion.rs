//! The explorable mansion: a room tree plus the clue hidden in each room.
//!
//! Which clue a room holds is a plain lookup by room name, kept apart from
//! the tree itself. A room without an entry simply has no clue.

use std::collections::HashMap;

use crate::data_structures::room_tree::Room;

/// A room tree together with its room → clue lookup table.
#[derive(Debug, Clone)]
pub struct Mansion {
    entrance: Room,
    room_clues: HashMap<String, String>,
}

impl Mansion {
    /// Creates a mansion with no clues.
    pub fn new(entrance: Room) -> Self {
        Self {
            entrance,
            room_clues: HashMap::new(),
        }
    }

    /// Hides `clue` in the room called `room`, replacing any previous clue.
    pub fn with_clue<R, C>(mut self, room: R, clue: C) -> Self
    where
        R: Into<String>,
        C: Into<String>,
    {
        self.room_clues.insert(room.into(), clue.into());
        self
    }

    /// The root room of the tree.
    pub fn entrance(&self) -> &Room {
        &self.entrance
    }

    /// Finds a room by name anywhere in the mansion.
    pub fn find_room(&self, name: &str) -> Option<&Room> {
        self.entrance.find(name)
    }

    /// The clue associated with a room name, if any.
    pub fn clue_for_room(&self, name: &str) -> Option<&str> {
        self.room_clues.get(name).map(String::as_str)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clue_lookup_is_by_name() {
        let mansion = Mansion::new(Room::new("Hall").with_left(Room::new("Library")))
            .with_clue("Library", "marca de dedo no livro raro");

        assert_eq!(
            mansion.clue_for_room("Library"),
            Some("marca de dedo no livro raro")
        );
        assert_eq!(mansion.clue_for_room("Hall"), None);
        // Lookup does not consult the tree
        assert_eq!(mansion.clue_for_room("Attic"), None);
    }

    #[test]
    fn test_find_room() {
        let mansion = Mansion::new(Room::new("Hall").with_right(Room::new("Dining Room")));

        assert_eq!(mansion.entrance().name(), "Hall");
        assert!(mansion.find_room("Dining Room").is_some());
        assert!(mansion.find_room("Kitchen").is_none());
    }
}
