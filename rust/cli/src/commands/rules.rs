use crate::error::CliError;
use guozha_engine::cards::{cards_of, parse_ranks};
use guozha_engine::combination::{Combination, classify};
use guozha_engine::compare::{Outcome, compare};
use std::io::Write;

fn combination_from(input: &str, first_id: u32) -> Result<Combination, CliError> {
    let ranks = parse_ranks(input).map_err(|e| CliError::InvalidInput(e.to_string()))?;
    if ranks.is_empty() {
        return Err(CliError::InvalidInput("no ranks given".into()));
    }
    Ok(classify(&cards_of(&ranks, first_id))?)
}

pub fn handle_classify_command(ranks: &[String], out: &mut dyn Write) -> Result<(), CliError> {
    let combo = combination_from(&ranks.join(" "), 0)?;
    writeln!(out, "Combination: {}", combo)?;
    writeln!(out, "Points: {}", combo.points())?;
    if let Some(multiplier) = combo.pile_multiplier() {
        writeln!(out, "Pile multiplier: {}", multiplier)?;
    }
    Ok(())
}

pub fn handle_beats_command(
    challenger: &str,
    incumbent: &str,
    out: &mut dyn Write,
) -> Result<(), CliError> {
    let challenger = combination_from(challenger, 0)?;
    let incumbent = combination_from(incumbent, 10_000)?;
    let verdict = match compare(&challenger, Some(&incumbent)) {
        Outcome::Beats => "beats",
        Outcome::DoesNotBeat => "does not beat",
        Outcome::Incomparable => "is incomparable with",
    };
    writeln!(out, "{} {} {}", challenger, verdict, incumbent)?;
    Ok(())
}
