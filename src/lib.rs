//! Mystery Mansion
//!
//! A console deduction game. Walk the rooms of the mansion, pick up the
//! clues left behind, and let the investigation point at the culprit.
//!
//! # Game Mechanics
//!
//! - **Exploration**: Move left (`e`) or right (`d`) through a fixed map of rooms
//! - **Clues**: Every clue you find is filed, once, in alphabetical order
//! - **Suspects**: Each clue is linked to a suspect through the case board
//! - **Verdict**: The suspect most of your clues point to is accused
//!
//! # Architecture
//!
//! - `data` - Rooms, the clue index and the suspect table
//! - `game` - Exploration loop, investigation and console narrative

pub mod data;
pub mod game;

pub use data::*;
pub use game::{run_session, CaseReport, SessionConfig};

/// Game version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Result type for the game
pub type Result<T> = anyhow::Result<T>;

/// Custom error types
#[derive(thiserror::Error, Debug)]
pub enum GameError {
    #[error("Suspect table is full, cannot file clue: {clue}")]
    TableFull { clue: String },

    #[error("Console I/O failed: {0}")]
    Io(#[from] std::io::Error),
}
