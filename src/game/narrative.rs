//! Console narrative
//!
//! Every line the player reads is written here.

use super::explorer::RoomVisit;
use super::investigation::{Disclosure, Verdict};
use std::io::{self, Write};

pub const TITLE: &str = "=== Mansão Misteriosa ===";
pub const MOVE_PROMPT: &str = "Mover (e) esquerda, (d) direita, (s) sair exploração: ";
pub const ANALYSIS_HEADER: &str = "=== Analisando pistas coletadas ===";
pub const JUDGEMENT_HEADER: &str = "=== Julgamento Final ===";
pub const DEAD_END: &str = "Não há sala nessa direção.";

pub fn title(out: &mut impl Write) -> io::Result<()> {
    writeln!(out, "{}", TITLE)
}

/// Describe the room the player just entered
pub fn room(out: &mut impl Write, visit: &RoomVisit<'_>) -> io::Result<()> {
    writeln!(out, "\nVocê entrou na sala: {}", visit.room)?;
    match visit.clue {
        Some(clue) => writeln!(out, "Você encontrou uma pista: \"{}\"", clue),
        None => writeln!(out, "Nenhuma pista encontrada aqui."),
    }
}

pub fn prompt(out: &mut impl Write) -> io::Result<()> {
    write!(out, "\n{}", MOVE_PROMPT)?;
    out.flush()
}

pub fn dead_end(out: &mut impl Write) -> io::Result<()> {
    writeln!(out, "\n{}", DEAD_END)
}

pub fn analysis(out: &mut impl Write, disclosures: &[Disclosure]) -> io::Result<()> {
    writeln!(out, "\n{}", ANALYSIS_HEADER)?;
    for d in disclosures {
        writeln!(out, "Pista \"{}\" aponta para o suspeito: {}", d.clue, d.suspect)?;
    }
    Ok(())
}

pub fn judgement(out: &mut impl Write, verdict: &Verdict, clues_collected: usize) -> io::Result<()> {
    writeln!(out, "\n{}", JUDGEMENT_HEADER)?;
    if clues_collected == 0 {
        writeln!(out, "Nenhuma pista foi coletada.")?;
    }
    writeln!(
        out,
        "\nCom base nas pistas, o suspeito mais provável é: {}",
        verdict.suspect_name()
    )
}
