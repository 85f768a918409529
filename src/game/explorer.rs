//! Exploration of the mansion
//!
//! The explorer holds the player's position and the clues picked up so
//! far. It never changes the map; only the cursor moves.

use crate::data::*;
use serde::{Deserialize, Serialize};
use std::io::BufRead;

/// Commands the player can type at the movement prompt
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Command {
    Move(Direction),
    Exit,
    /// Any other byte, valid UTF-8 or not
    Unknown(u8),
}

impl Command {
    pub fn from_byte(b: u8) -> Self {
        match b {
            b'e' => Command::Move(Direction::Left),
            b'd' => Command::Move(Direction::Right),
            b's' => Command::Exit,
            other => Command::Unknown(other),
        }
    }

    pub fn description(&self) -> String {
        match self {
            Command::Move(direction) => format!("Ir para a {}", direction),
            Command::Exit => "Sair da exploração".to_string(),
            Command::Unknown(b) => format!("Comando desconhecido: {}", b.escape_ascii()),
        }
    }
}

/// What happened after a command
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepOutcome {
    /// The player walked into another room
    Moved,
    /// There is no room in that direction; the player stays put
    DeadEnd(Direction),
    /// The command was not recognised; the player stays put
    Stayed,
    /// Exploration is over
    Finished,
}

/// What the player sees on entering a room
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoomVisit<'a> {
    pub room: &'a str,
    pub clue: Option<&'a str>,
    /// Whether the clue went into the index for the first time
    pub newly_filed: bool,
}

/// The player walking the mansion
#[derive(Debug)]
pub struct Explorer<'a> {
    current: &'a Room,
    clues: ClueIndex,
    moves: u32,
}

impl<'a> Explorer<'a> {
    pub fn new(start: &'a Room) -> Self {
        Self {
            current: start,
            clues: ClueIndex::new(),
            moves: 0,
        }
    }

    pub fn current(&self) -> &'a Room {
        self.current
    }

    pub fn clues(&self) -> &ClueIndex {
        &self.clues
    }

    pub fn moves(&self) -> u32 {
        self.moves
    }

    /// Look around the current room, filing its clue if there is one
    pub fn visit(&mut self) -> RoomVisit<'a> {
        let room = self.current;
        let newly_filed = room
            .clue()
            .map_or(false, |clue| self.clues.insert(clue, &room.name));

        tracing::debug!(room = %room.name, clue = ?room.clue(), newly_filed, "entered room");

        RoomVisit {
            room: &room.name,
            clue: room.clue(),
            newly_filed,
        }
    }

    /// Apply a command to the cursor
    pub fn step(&mut self, command: Command) -> StepOutcome {
        match command {
            Command::Exit => StepOutcome::Finished,
            Command::Unknown(_) => StepOutcome::Stayed,
            Command::Move(direction) => match self.current.child(direction) {
                Some(next) => {
                    self.current = next;
                    self.moves += 1;
                    StepOutcome::Moved
                }
                None => {
                    tracing::debug!(room = %self.current.name, %direction, "no room in that direction");
                    StepOutcome::DeadEnd(direction)
                }
            },
        }
    }

    /// Stop exploring and hand over the collected clues
    pub fn into_clues(self) -> ClueIndex {
        self.clues
    }
}

/// Reads commands one non-whitespace byte at a time
pub struct CommandReader<R> {
    input: R,
    pending: Vec<u8>,
}

impl<R: BufRead> CommandReader<R> {
    pub fn new(input: R) -> Self {
        Self {
            input,
            pending: Vec::new(),
        }
    }

    /// The next command, or `None` once the input is exhausted
    pub fn next_command(&mut self) -> std::io::Result<Option<Command>> {
        loop {
            if let Some(b) = self.pending.pop() {
                return Ok(Some(Command::from_byte(b)));
            }

            // Raw bytes: input that is not UTF-8 is still just unknown commands
            let mut line = Vec::new();
            if self.input.read_until(b'\n', &mut line)? == 0 {
                return Ok(None);
            }
            self.pending = line
                .into_iter()
                .filter(|b| !b.is_ascii_whitespace())
                .rev()
                .collect();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn test_command_parsing() {
        assert_eq!(Command::from_byte(b'e'), Command::Move(Direction::Left));
        assert_eq!(Command::from_byte(b'd'), Command::Move(Direction::Right));
        assert_eq!(Command::from_byte(b's'), Command::Exit);
        assert_eq!(Command::from_byte(b'x'), Command::Unknown(b'x'));
        assert_eq!(Command::from_byte(b'S'), Command::Unknown(b'S'));
        assert_eq!(
            Command::Unknown(0xff).description(),
            "Comando desconhecido: \\xff"
        );
    }

    #[test]
    fn test_walk_to_garage() {
        let hall = Room::mansion();
        let mut explorer = Explorer::new(&hall);

        assert_eq!(explorer.step(Command::Move(Direction::Left)), StepOutcome::Moved);
        assert_eq!(explorer.current().name, "Cozinha");
        assert_eq!(explorer.step(Command::Move(Direction::Left)), StepOutcome::Moved);
        assert_eq!(explorer.current().name, "Garagem");
        assert_eq!(explorer.moves(), 2);
    }

    #[test]
    fn test_dead_end_keeps_position() {
        let hall = Room::mansion();
        let mut explorer = Explorer::new(&hall);

        explorer.step(Command::Move(Direction::Right));
        assert_eq!(explorer.current().name, "Quarto");

        let outcome = explorer.step(Command::Move(Direction::Left));
        assert_eq!(outcome, StepOutcome::DeadEnd(Direction::Left));
        assert_eq!(explorer.current().name, "Quarto");
        assert_eq!(explorer.moves(), 1);
    }

    #[test]
    fn test_unknown_command_stays() {
        let hall = Room::mansion();
        let mut explorer = Explorer::new(&hall);
        assert_eq!(explorer.step(Command::Unknown(b'q')), StepOutcome::Stayed);
        assert_eq!(explorer.current().name, "Hall");
        assert_eq!(explorer.step(Command::Exit), StepOutcome::Finished);
    }

    #[test]
    fn test_visit_files_clue_once() {
        let hall = Room::mansion();
        let mut explorer = Explorer::new(&hall);

        let first = explorer.visit();
        assert_eq!(first.room, "Hall");
        assert_eq!(first.clue, Some("luvas sujas"));
        assert!(first.newly_filed);

        let again = explorer.visit();
        assert!(!again.newly_filed);
        assert_eq!(explorer.clues().len(), 1);
    }

    #[test]
    fn test_visit_room_without_clue() {
        let hall = Room::mansion();
        let mut explorer = Explorer::new(&hall);
        explorer.step(Command::Move(Direction::Left));
        explorer.step(Command::Move(Direction::Right));

        let visit = explorer.visit();
        assert_eq!(visit.room, "Jardim");
        assert_eq!(visit.clue, None);
        assert!(!visit.newly_filed);
        assert!(explorer.into_clues().is_empty());
    }

    #[test]
    fn test_reader_skips_whitespace() {
        let mut reader = CommandReader::new(Cursor::new("  e\n\n d s\nx"));
        let mut commands = Vec::new();
        while let Some(cmd) = reader.next_command().unwrap() {
            commands.push(cmd);
        }
        assert_eq!(
            commands,
            vec![
                Command::Move(Direction::Left),
                Command::Move(Direction::Right),
                Command::Exit,
                Command::Unknown(b'x'),
            ]
        );
    }

    #[test]
    fn test_reader_accepts_invalid_utf8() {
        let mut reader = CommandReader::new(Cursor::new(&b"\xff\xfee\ns"[..]));
        let mut commands = Vec::new();
        while let Some(cmd) = reader.next_command().unwrap() {
            commands.push(cmd);
        }
        assert_eq!(
            commands,
            vec![
                Command::Unknown(0xff),
                Command::Unknown(0xfe),
                Command::Move(Direction::Left),
                Command::Exit,
            ]
        );
    }
}
