//! The mansion map: a fixed binary tree of rooms

use super::Direction;
use serde::{Deserialize, Serialize};

/// A room in the mansion
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Room {
    pub name: String,
    /// Clue left in the room, if any
    pub clue: Option<String>,
    pub left: Option<Box<Room>>,
    pub right: Option<Box<Room>>,
}

impl Room {
    /// Create a room with no exits. An empty clue means the room has none.
    pub fn new(name: &str, clue: &str) -> Self {
        Self {
            name: name.to_string(),
            clue: if clue.is_empty() { None } else { Some(clue.to_string()) },
            left: None,
            right: None,
        }
    }

    /// Attach the rooms reached by walking left and right
    pub fn with_exits(mut self, left: Option<Room>, right: Option<Room>) -> Self {
        self.left = left.map(Box::new);
        self.right = right.map(Box::new);
        self
    }

    /// Build the mansion:
    ///
    /// ```text
    ///            Hall
    ///          /      \
    ///     Cozinha    Quarto
    ///     /     \
    /// Garagem  Jardim
    /// ```
    pub fn mansion() -> Self {
        let garagem = Room::new("Garagem", "chave inglesa");
        let jardim = Room::new("Jardim", "");
        let cozinha = Room::new("Cozinha", "faca ensanguentada")
            .with_exits(Some(garagem), Some(jardim));
        let quarto = Room::new("Quarto", "perfume caro");

        Room::new("Hall", "luvas sujas").with_exits(Some(cozinha), Some(quarto))
    }

    pub fn clue(&self) -> Option<&str> {
        self.clue.as_deref()
    }

    /// The room reached by walking in `direction`, if there is one
    pub fn child(&self, direction: Direction) -> Option<&Room> {
        match direction {
            Direction::Left => self.left.as_deref(),
            Direction::Right => self.right.as_deref(),
        }
    }

    pub fn is_leaf(&self) -> bool {
        self.left.is_none() && self.right.is_none()
    }

    /// Number of rooms in this subtree, this one included
    pub fn room_count(&self) -> usize {
        1 + self.left.as_ref().map_or(0, |r| r.room_count())
            + self.right.as_ref().map_or(0, |r| r.room_count())
    }
}
