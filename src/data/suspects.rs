//! Suspect table: which suspect each clue incriminates
//!
//! A fixed-size open-addressing hash table. Collisions are resolved by
//! linear probing, wrapping around the end of the table. The table is
//! never resized.

use crate::GameError;
use serde::{Deserialize, Serialize};

/// Number of slots in the suspect table
pub const TABLE_SIZE: usize = 10;

/// The clue → suspect pairs of the mansion case
pub const MANSION_SUSPECTS: [(&str, &str); 4] = [
    ("luvas sujas", "Carlos"),
    ("faca ensanguentada", "Maria"),
    ("perfume caro", "Ana"),
    ("chave inglesa", "João"),
];

/// Home slot of a clue: the sum of its character codes modulo [`TABLE_SIZE`]
pub fn hash(clue: &str) -> usize {
    clue.chars().map(|c| c as usize).sum::<usize>() % TABLE_SIZE
}

/// A slot of the table
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Slot {
    #[default]
    Empty,
    Occupied { clue: String, suspect: String },
}

impl Slot {
    pub fn is_occupied(&self) -> bool {
        matches!(self, Slot::Occupied { .. })
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SuspectTable {
    slots: [Slot; TABLE_SIZE],
}

impl SuspectTable {
    pub fn new() -> Self {
        Self {
            slots: Default::default(),
        }
    }

    /// Build a table from `(clue, suspect)` pairs, failing if they do not fit
    pub fn from_pairs<'p>(
        pairs: impl IntoIterator<Item = (&'p str, &'p str)>,
    ) -> Result<Self, GameError> {
        let mut table = Self::new();
        for (clue, suspect) in pairs {
            table.insert(clue, suspect)?;
        }
        Ok(table)
    }

    /// The case board for the mansion, filled with [`MANSION_SUSPECTS`]
    pub fn mansion() -> Result<Self, GameError> {
        Self::from_pairs(MANSION_SUSPECTS)
    }

    /// Indices probed for `clue`, starting at its home slot
    fn probe(clue: &str) -> impl Iterator<Item = usize> {
        let start = hash(clue);
        (0..TABLE_SIZE).map(move |i| (start + i) % TABLE_SIZE)
    }

    /// Link `clue` to `suspect`, returning the slot used.
    ///
    /// Only empty slots are considered, so filing the same clue twice takes
    /// a second slot; lookups keep finding the first one.
    pub fn insert(&mut self, clue: &str, suspect: &str) -> Result<usize, GameError> {
        let pos = Self::probe(clue)
            .find(|&pos| !self.slots[pos].is_occupied())
            .ok_or_else(|| {
                tracing::warn!(clue, suspect, "suspect table is full");
                GameError::TableFull {
                    clue: clue.to_string(),
                }
            })?;

        self.slots[pos] = Slot::Occupied {
            clue: clue.to_string(),
            suspect: suspect.to_string(),
        };
        Ok(pos)
    }

    /// The suspect a clue points to, if it is on the board
    pub fn lookup(&self, clue: &str) -> Option<&str> {
        Self::probe(clue).find_map(|pos| match &self.slots[pos] {
            Slot::Occupied { clue: stored, suspect } if stored == clue => Some(suspect.as_str()),
            _ => None,
        })
    }

    /// Occupied slots in slot order, as `(index, clue, suspect)`
    pub fn occupied(&self) -> impl Iterator<Item = (usize, &str, &str)> {
        self.slots
            .iter()
            .enumerate()
            .filter_map(|(pos, slot)| match slot {
                Slot::Occupied { clue, suspect } => Some((pos, clue.as_str(), suspect.as_str())),
                Slot::Empty => None,
            })
    }

    pub fn len(&self) -> usize {
        self.slots.iter().filter(|s| s.is_occupied()).count()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn is_full(&self) -> bool {
        self.len() == TABLE_SIZE
    }

    pub fn slot(&self, pos: usize) -> Option<&Slot> {
        self.slots.get(pos)
    }
}

impl Default for SuspectTable {
    fn default() -> Self {
        Self::new()
    }
}
