//! Investigation mechanics
//!
//! Matches the collected clues against the suspect table and decides who
//! the clues point to.

use crate::data::*;
use serde::{Deserialize, Serialize};

/// A clue and the suspect it incriminates
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Disclosure {
    pub clue: String,
    pub suspect: String,
}

/// How the tally decides that a clue counts against a suspect
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum TallyRule {
    /// The clue's own suspect is the one being tallied
    #[default]
    SuspectMatch,
    /// The clue hashes to the same home slot as the suspect's clue.
    /// Colliding clues are counted against the wrong suspect.
    HashBucket,
}

/// Final accusation
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Verdict {
    /// `None` when no collected clue points at anyone
    pub suspect: Option<String>,
    pub clue_count: usize,
}

impl Verdict {
    pub fn suspect_name(&self) -> &str {
        self.suspect.as_deref().unwrap_or("")
    }
}

/// Pair every collected clue with its suspect, in clue order.
///
/// Clues missing from the table are left out.
pub fn disclose(clues: &ClueIndex, table: &SuspectTable) -> Vec<Disclosure> {
    clues
        .clues()
        .filter_map(|clue| {
            table.lookup(clue).map(|suspect| Disclosure {
                clue: clue.to_string(),
                suspect: suspect.to_string(),
            })
        })
        .collect()
}

/// Name the suspect most clues point to.
///
/// Suspects are considered in table slot order; on a tie the first one to
/// reach the top count keeps it.
pub fn tally(clues: &ClueIndex, table: &SuspectTable, rule: TallyRule) -> Verdict {
    let mut verdict = Verdict::default();

    for (_, entry_clue, suspect) in table.occupied() {
        let count = match rule {
            TallyRule::SuspectMatch => clues
                .clues()
                .filter(|clue| table.lookup(clue) == Some(suspect))
                .count(),
            TallyRule::HashBucket => {
                let bucket = hash(entry_clue);
                clues.clues().filter(|clue| hash(clue) == bucket).count()
            }
        };

        if count > verdict.clue_count {
            verdict = Verdict {
                suspect: Some(suspect.to_string()),
                clue_count: count,
            };
        }
    }

    tracing::debug!(suspect = ?verdict.suspect, count = verdict.clue_count, ?rule, "tally complete");
    verdict
}
