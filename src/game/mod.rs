//! Core game logic and session flow

pub mod explorer;
pub mod investigation;
pub mod narrative;

pub use explorer::{Command, CommandReader, Explorer, RoomVisit, StepOutcome};
pub use investigation::{disclose, tally, Disclosure, TallyRule, Verdict};

use crate::data::*;
use crate::Result;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::io::{BufRead, Write};

/// In-process settings for a session
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionConfig {
    /// How the final tally matches clues to suspects
    pub tally_rule: TallyRule,
    /// End the exploration when input runs out instead of failing
    pub exit_on_eof: bool,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            tally_rule: TallyRule::SuspectMatch,
            exit_on_eof: true,
        }
    }
}

/// Everything a finished session produced
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CaseReport {
    pub case_id: CaseId,
    pub started_at: DateTime<Utc>,
    pub finished_at: DateTime<Utc>,
    pub rooms_visited: Vec<String>,
    pub clues: ClueIndex,
    pub disclosures: Vec<Disclosure>,
    pub verdict: Verdict,
}

/// The mansion case: map and suspect board
#[derive(Debug, Clone)]
pub struct Game {
    pub map: Room,
    pub suspects: SuspectTable,
    pub config: SessionConfig,
}

impl Game {
    pub fn new(config: SessionConfig) -> Result<Self> {
        Ok(Self {
            map: Room::mansion(),
            suspects: SuspectTable::mansion()?,
            config,
        })
    }

    /// Run one full game: explore, analyse the clues, name the culprit
    pub fn play<R: BufRead, W: Write>(&self, input: R, out: &mut W) -> Result<CaseReport> {
        let case_id = CaseId::new();
        let started_at = Utc::now();
        tracing::info!(case = %case_id, rooms = self.map.room_count(), "case opened");

        narrative::title(out)?;

        let mut explorer = Explorer::new(&self.map);
        let mut reader = CommandReader::new(input);
        let mut rooms_visited = Vec::new();

        loop {
            let visit = explorer.visit();
            rooms_visited.push(visit.room.to_string());
            narrative::room(out, &visit)?;
            narrative::prompt(out)?;

            let command = match reader.next_command()? {
                Some(command) => command,
                None if self.config.exit_on_eof => Command::Exit,
                None => {
                    return Err(crate::GameError::Io(std::io::Error::new(
                        std::io::ErrorKind::UnexpectedEof,
                        "input closed during exploration",
                    ))
                    .into())
                }
            };

            match explorer.step(command) {
                StepOutcome::Finished => break,
                StepOutcome::DeadEnd(_) => narrative::dead_end(out)?,
                StepOutcome::Moved | StepOutcome::Stayed => {}
            }
        }

        let clues = explorer.into_clues();

        let disclosures = disclose(&clues, &self.suspects);
        narrative::analysis(out, &disclosures)?;

        let verdict = tally(&clues, &self.suspects, self.config.tally_rule);
        narrative::judgement(out, &verdict, clues.len())?;
        out.flush()?;

        tracing::info!(
            case = %case_id,
            clues = clues.len(),
            suspect = verdict.suspect_name(),
            "case closed"
        );

        Ok(CaseReport {
            case_id,
            started_at,
            finished_at: Utc::now(),
            rooms_visited,
            clues,
            disclosures,
            verdict,
        })
    }
}

/// Play the mansion case over any input and output
pub fn run_session<R: BufRead, W: Write>(
    input: R,
    mut out: W,
    config: SessionConfig,
) -> Result<CaseReport> {
    Game::new(config)?.play(input, &mut out)
}
