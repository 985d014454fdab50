//! The reference case: the mansion layout, its clues and their suspects.
//!
//! ```text
//! Hall
//! ├── Library
//! │   ├── Study
//! │   │   └── Basement (left)
//! │   └── Conservatory
//! └── Dining Room
//!     ├── Kitchen
//!     └── Ballroom
//! ```

use crate::data_structures::clue_table::{ClueTable, ClueTableConfig};
use crate::data_structures::room_tree::Room;
use crate::error::MysteryResult;
use crate::game::mansion::Mansion;

/// Clue found in each room of the reference mansion.
pub const ROOM_CLUES: [(&str, &str); 8] = [
    ("Hall", "pegada de lama na soleira"),
    ("Library", "marca de dedo no livro raro"),
    ("Dining Room", "taça quebrada com resquicios"),
    ("Kitchen", "fio de tecido preso no cortador"),
    ("Study", "bilhete rasgado com iniciais"),
    ("Basement", "mancha de tinta fresca"),
    ("Ballroom", "programa de concerto dobrado"),
    ("Conservatory", "folha de planta que nao pertence ao jardim"),
];

/// Suspect each reference clue points to. Every suspect gets two clues.
pub const CLUE_SUSPECTS: [(&str, &str); 8] = [
    ("pegada de lama na soleira", "Sr. Green"),
    ("fio de tecido preso no cortador", "Sr. Green"),
    ("marca de dedo no livro raro", "Srta. Scarlet"),
    ("bilhete rasgado com iniciais", "Srta. Scarlet"),
    ("taça quebrada com resquicios", "Mrs. Peacock"),
    ("folha de planta que nao pertence ao jardim", "Mrs. Peacock"),
    ("mancha de tinta fresca", "Mr. Black"),
    ("programa de concerto dobrado", "Mr. Black"),
];

/// Builds the reference room tree rooted at the Hall.
pub fn reference_rooms() -> Room {
    let library = Room::new("Library")
        .with_left(Room::new("Study").with_left(Room::new("Basement")))
        .with_right(Room::new("Conservatory"));

    let dining_room = Room::new("Dining Room")
        .with_left(Room::new("Kitchen"))
        .with_right(Room::new("Ballroom"));

    Room::new("Hall").with_left(library).with_right(dining_room)
}

/// Builds the reference mansion with a clue in every room.
pub fn reference_mansion() -> Mansion {
    ROOM_CLUES
        .iter()
        .fold(Mansion::new(reference_rooms()), |mansion, (room, clue)| {
            mansion.with_clue(*room, *clue)
        })
}

/// Builds the reference clue → suspect table.
pub fn reference_clue_table(config: ClueTableConfig) -> MysteryResult<ClueTable> {
    let mut table = ClueTable::with_config(config)?;
    table.extend(CLUE_SUSPECTS);
    Ok(table)
}

/// Everything a session needs to know about the crime.
#[derive(Debug)]
pub struct CaseFile {
    /// The mansion the player explores
    pub mansion: Mansion,

    /// Which suspect each clue points to
    pub suspects: ClueTable,
}

impl CaseFile {
    /// Assembles a case from its parts.
    pub fn new(mansion: Mansion, suspects: ClueTable) -> Self {
        Self { mansion, suspects }
    }

    /// The reference case, with the clue table sized by `config`.
    pub fn reference(config: ClueTableConfig) -> MysteryResult<Self> {
        Ok(Self::new(reference_mansion(), reference_clue_table(config)?))
    }
}
